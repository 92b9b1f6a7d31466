//! Postal code extraction and `street, city, state` formatting

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// State assumed when none can be parsed from the address
pub const DEFAULT_STATE: &str = "FL";

/// First standalone 5-digit token
static POSTAL_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{5})\b").unwrap());

/// 5-digit or ZIP+4 token, removed before splitting
static POSTAL_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{5}(-\d{4})?\b").unwrap());

/// Standalone two-letter uppercase state code
static STATE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([A-Z]{2})\b").unwrap());

/// Components recovered from a free-text address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    /// Everything before the city, comma-joined
    pub street: String,
    /// City, when one could be told apart from the street
    pub city: Option<String>,
    /// Two-letter state code, parsed or defaulted
    pub state: String,
}

impl fmt::Display for AddressParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.city {
            Some(city) => write!(f, "{}, {}, {}", self.street, city, self.state),
            None => write!(f, "{}, {}", self.street, self.state),
        }
    }
}

/// Extract the first standalone 5-digit postal code
pub fn extract_postal_code(address: Option<&str>) -> Option<String> {
    let address = address.filter(|a| !a.is_empty())?;
    POSTAL_CODE_REGEX
        .captures(address)
        .map(|caps| caps[1].to_string())
}

/// Format an address as `street, city, state`, defaulting the state to FL
pub fn format_address(address: Option<&str>) -> Option<String> {
    format_address_with_state(address, DEFAULT_STATE)
}

/// Format an address as `street, city, state` with an explicit fallback state
pub fn format_address_with_state(address: Option<&str>, default_state: &str) -> Option<String> {
    parse_address(address, default_state).map(|parts| parts.to_string())
}

/// Split an address into street, city and state.
///
/// Postal codes are dropped first. The last comma segment is searched for a
/// state code; a segment holding only the state code pushes the city one
/// segment back. Without a comma the whole remainder becomes the street.
///
/// When a bare state segment follows a single street segment there is no
/// segment left for the city, so `"123 Main St, FL"` yields no city and
/// formats back unchanged rather than repeating the street as the city.
pub fn parse_address(address: Option<&str>, default_state: &str) -> Option<AddressParts> {
    let address = address.filter(|a| !a.is_empty())?;

    let without_postal = POSTAL_TOKEN_REGEX.replace_all(address, "");
    let remainder = without_postal.trim().trim_end_matches(',').trim();

    let segments: Vec<&str> = remainder
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let (last, leading) = match segments.split_last() {
        Some((last, leading)) if !leading.is_empty() => (*last, leading),
        _ => {
            return Some(AddressParts {
                street: remainder.to_string(),
                city: None,
                state: default_state.to_string(),
            })
        }
    };

    let Some(state_match) = STATE_CODE_REGEX.find(last) else {
        return Some(AddressParts {
            street: leading.join(", "),
            city: Some(last.to_string()),
            state: default_state.to_string(),
        });
    };

    let state = state_match.as_str();
    let city = last.replace(state, "");
    let city = city.trim();

    if !city.is_empty() {
        return Some(AddressParts {
            street: leading.join(", "),
            city: Some(city.to_string()),
            state: state.to_string(),
        });
    }

    // Last segment was the bare state code
    let parts = match leading.split_last() {
        Some((city, street)) if !street.is_empty() => AddressParts {
            street: street.join(", "),
            city: Some((*city).to_string()),
            state: state.to_string(),
        },
        _ => AddressParts {
            street: leading.join(", "),
            city: None,
            state: state.to_string(),
        },
    };
    Some(parts)
}
