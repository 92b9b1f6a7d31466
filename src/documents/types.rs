//! Document types
//!
//! Field order here is the field order in the written JSON.

use serde::{Deserialize, Serialize};

/// Address document file name
pub const ADDRESS_FILE: &str = "unnormalized_address.json";

/// Property root document file name
pub const PROPERTY_ROOT_FILE: &str = "property_root.json";

/// Relationship document file name
pub const RELATIONSHIP_FILE: &str = "relationship_property_to_address.json";

/// Root label file name, fixed by the target schema
pub const ROOT_LABEL_FILE: &str = "bafkreigpfi4pqur43wj3x2dwm43hnbtrxabgwsi3hobzbtqrs3iytohevu.json";

/// Address exactly as found in the source, lightly formatted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnnormalizedAddress {
    /// `street, city, state`
    pub full_address: Option<String>,
    /// 5-digit postal code
    pub postal_code: Option<String>,
    /// Unescaped HTTP request the record was fetched with
    pub source_http_request: Option<String>,
    pub request_identifier: Option<String>,
    pub county_jurisdiction: Option<String>,
}

/// Root record of a parcel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRoot {
    pub parcel_id: Option<String>,
    pub source_http_request: Option<String>,
    pub request_identifier: Option<String>,
}

/// Relative file reference, serialized as `{"/": "./file.json"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "/")]
    pub target: String,
}

impl Link {
    /// Link to a sibling file in the same parcel folder
    pub fn sibling(file_name: &str) -> Self {
        Self {
            target: format!("./{file_name}"),
        }
    }
}

/// Edge from the property root to its address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: Link,
    pub to: Link,
}

impl Relationship {
    /// The property → address relationship
    pub fn property_to_address() -> Self {
        Self {
            from: Link::sibling(PROPERTY_ROOT_FILE),
            to: Link::sibling(ADDRESS_FILE),
        }
    }
}

impl Default for Relationship {
    fn default() -> Self {
        Self::property_to_address()
    }
}

/// Relationships listed by the root label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootRelationships {
    pub property_root: Link,
}

/// Static schema label pointing at the relationship file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootLabel {
    pub label: String,
    pub relationships: RootRelationships,
}

impl Default for RootLabel {
    fn default() -> Self {
        Self {
            label: "Root".to_string(),
            relationships: RootRelationships {
                property_root: Link::sibling(RELATIONSHIP_FILE),
            },
        }
    }
}
