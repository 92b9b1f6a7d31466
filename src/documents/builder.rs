//! Builds the documents of one parcel from a CSV row

use super::types::{
    PropertyRoot, Relationship, RootLabel, UnnormalizedAddress, ADDRESS_FILE, PROPERTY_ROOT_FILE,
    RELATIONSHIP_FILE, ROOT_LABEL_FILE,
};
use crate::address::{extract_postal_code, format_address_with_state, DEFAULT_STATE};
use crate::coerce::{safe_int, unescape_http_request};
use crate::error::Result;
use crate::types::{columns, OptionStringExt, Row};
use serde::Serialize;

/// Every document written for one parcel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelDocuments {
    /// Sanitized parcel id, also the folder name
    pub folder_id: String,
    pub address: UnnormalizedAddress,
    pub property_root: PropertyRoot,
    pub relationship: Relationship,
    pub root_label: RootLabel,
}

impl ParcelDocuments {
    /// Render each document as pretty JSON, paired with its file name
    pub fn render(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            (ADDRESS_FILE, render_pretty(&self.address)?),
            (PROPERTY_ROOT_FILE, render_pretty(&self.property_root)?),
            (RELATIONSHIP_FILE, render_pretty(&self.relationship)?),
            (ROOT_LABEL_FILE, render_pretty(&self.root_label)?),
        ])
    }
}

/// Two-space indented JSON with non-ASCII characters kept literal
pub fn render_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Builder for [`ParcelDocuments`]
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    /// State appended when an address has none
    default_state: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            default_state: DEFAULT_STATE.to_string(),
        }
    }
}

impl DocumentBuilder {
    /// Create a builder that defaults addresses to FL
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback state code
    #[must_use]
    pub fn with_default_state(mut self, state: impl Into<String>) -> Self {
        self.default_state = state.into();
        self
    }

    /// Build the documents for `row`, stored under `folder_id`.
    ///
    /// Blank source cells become `null` fields.
    pub fn build(&self, row: &Row, folder_id: &str) -> ParcelDocuments {
        let address = row.non_blank(columns::ADDRESS);
        let http_request = unescape_http_request(row.non_blank(columns::HTTP_REQUEST));
        let request_identifier = row.get(columns::SOURCE_IDENTIFIER).none_if_blank();

        let unnormalized = UnnormalizedAddress {
            full_address: format_address_with_state(address, &self.default_state),
            postal_code: extract_postal_code(address),
            source_http_request: http_request.clone(),
            request_identifier: request_identifier.clone(),
            county_jurisdiction: row.get(columns::COUNTY).none_if_blank(),
        };

        let property_root = PropertyRoot {
            parcel_id: safe_int(Some(folder_id)),
            source_http_request: http_request,
            request_identifier,
        };

        ParcelDocuments {
            folder_id: folder_id.to_string(),
            address: unnormalized,
            property_root,
            relationship: Relationship::property_to_address(),
            root_label: RootLabel::default(),
        }
    }
}
