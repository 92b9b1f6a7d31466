//! Value coercion helpers
//!
//! Small conversions applied to raw CSV cells before they land in a document:
//! blank detection, integer normalization, HTTP request unescaping and
//! folder-safe parcel ids.

use regex::Regex;
use std::sync::LazyLock;

/// Characters allowed in a parcel folder name
static FOLDER_UNSAFE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]").unwrap());

/// Escape sequences replaced by [`unescape_http_request`], applied in order.
///
/// `\r\n` must come before the single `\r` and `\n` sequences.
const HTTP_ESCAPES: [(&str, &str); 5] = [
    ("\\r\\n", "\r\n"),
    ("\\r", "\r"),
    ("\\n", "\n"),
    ("\\\"", "\""),
    ("\\\\", "\\"),
];

/// True for an absent value or one that is empty after trimming
pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Normalize a numeric-looking value to its integer decimal form.
///
/// `"123.0"` becomes `"123"` and fractions are truncated toward zero.
/// Single underscores between digits are digit separators, so `"1_000"`
/// becomes `"1000"`. Values that do not parse as a finite number are
/// returned unchanged, blank values yield `None`.
pub fn safe_int(value: Option<&str>) -> Option<String> {
    let value = value?;
    if is_empty(Some(value)) {
        return None;
    }

    let parsed = strip_digit_separators(value.trim()).and_then(|n| n.parse::<f64>().ok());
    match parsed {
        // `+ 0.0` folds negative zero so "-0.5" renders as "0"
        Some(n) if n.is_finite() => Some(format!("{:.0}", n.trunc() + 0.0)),
        _ => Some(value.to_string()),
    }
}

/// Drop `_` separators that sit between two digits.
///
/// Any other underscore makes the number invalid.
fn strip_digit_separators(number: &str) -> Option<String> {
    let chars: Vec<char> = number.chars().collect();
    let mut stripped = String::with_capacity(number.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            stripped.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        if !matches!((before, after), (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit())
        {
            return None;
        }
    }

    Some(stripped)
}

/// Decode literal backslash escapes in a stored HTTP request.
///
/// Absent or empty input yields `None`.
pub fn unescape_http_request(http_request: Option<&str>) -> Option<String> {
    let raw = http_request.filter(|s| !s.is_empty())?;

    let unescaped = HTTP_ESCAPES
        .iter()
        .fold(raw.to_string(), |acc, (from, to)| acc.replace(from, to));
    Some(unescaped)
}

/// Replace every character outside `[A-Za-z0-9_-]` with `_`
pub fn sanitize_parcel_id(parcel_id: &str) -> String {
    FOLDER_UNSAFE_REGEX.replace_all(parcel_id, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(None));
        assert!(is_empty(Some("")));
        assert!(is_empty(Some("  \t\n")));
        assert!(!is_empty(Some("0")));
        assert!(!is_empty(Some(" a ")));
    }

    #[test_case("123.0", "123" ; "float with zero fraction")]
    #[test_case("123", "123" ; "plain integer")]
    #[test_case("12.9", "12" ; "fraction truncated")]
    #[test_case("-7.8", "-7" ; "negative truncated toward zero")]
    #[test_case("-0.5", "0" ; "negative zero folded")]
    #[test_case(" 42 ", "42" ; "surrounding whitespace")]
    #[test_case("1e3", "1000" ; "exponent")]
    #[test_case("abc", "abc" ; "not numeric")]
    #[test_case("12-34-56", "12-34-56" ; "dashed parcel id")]
    #[test_case("12A_34", "12A_34" ; "sanitized id")]
    #[test_case("10245_0", "102450" ; "sanitized float id")]
    #[test_case("12_34", "1234" ; "digit separator")]
    #[test_case("1_000.5", "1000" ; "separator with fraction")]
    #[test_case("1__0", "1__0" ; "double underscore kept verbatim")]
    #[test_case("_10", "_10" ; "leading underscore kept verbatim")]
    #[test_case("10_", "10_" ; "trailing underscore kept verbatim")]
    #[test_case("inf", "inf" ; "infinity kept verbatim")]
    #[test_case("nan", "nan" ; "nan kept verbatim")]
    fn test_safe_int(input: &str, expected: &str) {
        assert_eq!(safe_int(Some(input)), Some(expected.to_string()));
    }

    #[test]
    fn test_safe_int_empty() {
        assert_eq!(safe_int(Some("")), None);
        assert_eq!(safe_int(Some("   ")), None);
        assert_eq!(safe_int(None), None);
    }

    #[test]
    fn test_safe_int_large_value() {
        assert_eq!(
            safe_int(Some("1e30")),
            Some("1000000000000000019884624838656".to_string())
        );
    }

    #[test]
    fn test_unescape_http_request() {
        let unescaped = unescape_http_request(Some("GET /x\\r\\nHost: y\\r\\n")).unwrap();
        assert_eq!(unescaped, "GET /x\r\nHost: y\r\n");
        assert!(!unescaped.contains('\\'));
    }

    #[test]
    fn test_unescape_quotes_and_backslashes() {
        let unescaped = unescape_http_request(Some(r#"{\"a\": \"b\"} C:\\tmp"#)).unwrap();
        assert_eq!(unescaped, r#"{"a": "b"} C:\tmp"#);
    }

    #[test]
    fn test_unescape_lone_sequences() {
        assert_eq!(
            unescape_http_request(Some("a\\rb\\nc")),
            Some("a\rb\nc".to_string())
        );
    }

    #[test]
    fn test_unescape_empty() {
        assert_eq!(unescape_http_request(None), None);
        assert_eq!(unescape_http_request(Some("")), None);
    }

    #[test_case("12A/34", "12A_34" ; "slash")]
    #[test_case("12-34-56_7", "12-34-56_7" ; "already safe")]
    #[test_case("a b.c", "a_b_c" ; "space and dot")]
    #[test_case("caf\u{e9}", "caf_" ; "non ascii letter")]
    #[test_case("../etc", "___etc" ; "path traversal")]
    fn test_sanitize_parcel_id(input: &str, expected: &str) {
        assert_eq!(sanitize_parcel_id(input), expected);
    }
}
