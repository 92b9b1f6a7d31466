//! Address normalizer
//!
//! Heuristics for free-text property addresses.
//!
//! # Overview
//!
//! - [`extract_postal_code`] pulls the first standalone 5-digit token
//! - [`format_address`] rewrites an address as `street, city, state`
//!
//! Segment boundaries are plain commas; nothing here validates against a
//! canonical address grammar or a postal-code dataset.

mod normalizer;

pub use normalizer::{
    extract_postal_code, format_address, format_address_with_state, parse_address, AddressParts,
    DEFAULT_STATE,
};
