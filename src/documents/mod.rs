//! Parcel documents
//!
//! The four JSON documents emitted for every parcel, and the builder that
//! derives them from a CSV row.
//!
//! # Files
//!
//! | File | Document |
//! |------|----------|
//! | `unnormalized_address.json` | [`UnnormalizedAddress`] |
//! | `property_root.json` | [`PropertyRoot`] |
//! | `relationship_property_to_address.json` | [`Relationship`] |
//! | [`ROOT_LABEL_FILE`] | [`RootLabel`] |

mod builder;
mod types;

pub use builder::{render_pretty, DocumentBuilder, ParcelDocuments};
pub use types::{
    Link, PropertyRoot, Relationship, RootLabel, RootRelationships, UnnormalizedAddress,
    ADDRESS_FILE, PROPERTY_ROOT_FILE, RELATIONSHIP_FILE, ROOT_LABEL_FILE,
};
