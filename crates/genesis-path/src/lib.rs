//! Dotted path utilities for JSON genesis documents.
//!
//! A path such as `app_state.gov.deposit_params.min_deposit.0.denom` is a
//! `.`-separated list of segments. Segments made of ASCII digits only select
//! array elements; all other segments select object fields. A literal `.` in
//! a field name is written `\.`, a literal backslash `\\`.
//!
//! # Example
//!
//! ```
//! use genesis_path::{parse_path, format_path, get, Segment};
//!
//! let path = parse_path("a.b.0").unwrap();
//! assert_eq!(
//!     path,
//!     vec![Segment::Key("a".to_string()), Segment::Key("b".to_string()), Segment::index(0)]
//! );
//! assert_eq!(format_path(&path), "a.b.0");
//!
//! let doc = serde_json::json!({"a": {"b": [42]}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod types;
pub use types::{Path, Segment, ValueKind};

pub mod validate;
pub use validate::{validate_path, MAX_PATH_LENGTH};

/// Separator between path segments.
pub const DELIMITER: char = '.';

const ESCAPE: char = '\\';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path is deeper than {} segments", crate::validate::MAX_PATH_LENGTH)]
    TooLong,
    #[error("array index `{0}` does not fit in usize")]
    IndexOverflow(String),
}

/// Check if a string consists only of ASCII digits.
///
/// # Example
///
/// ```
/// use genesis_path::is_integer;
///
/// assert!(is_integer("0"));
/// assert!(is_integer("007"));
/// assert!(!is_integer("-1"));
/// assert!(!is_integer(""));
/// ```
pub fn is_integer(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Escapes a field name so it survives [`parse_path`] as a single key.
///
/// `.` and `\` are prefixed with a backslash. A name made of digits only
/// gets a leading backslash so it is not read back as an array index.
///
/// # Example
///
/// ```
/// use genesis_path::escape_segment;
///
/// assert_eq!(escape_segment("a.b"), "a\\.b");
/// assert_eq!(escape_segment("12"), "\\12");
/// assert_eq!(escape_segment("plain"), "plain");
/// ```
pub fn escape_segment(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 1);
    if is_integer(key) {
        out.push(ESCAPE);
        out.push_str(key);
        return out;
    }
    for c in key.chars() {
        if c == DELIMITER || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Splits a path string into its raw segments.
///
/// Each item is the unescaped segment text together with a flag telling
/// whether any escape sequence occurred in it. An escaped segment is always
/// a key, even when its text is numeric.
fn split_segments(path: &str) -> Vec<(String, bool)> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(next) => {
                    current.push(next);
                    escaped = true;
                }
                None => current.push(ESCAPE),
            },
            DELIMITER => {
                segments.push((std::mem::take(&mut current), escaped));
                escaped = false;
            }
            _ => current.push(c),
        }
    }
    segments.push((current, escaped));
    segments
}

/// Parse a dotted path string into segments.
///
/// # Errors
///
/// - `PathError::Empty` - for the empty string
/// - `PathError::TooLong` - for paths deeper than [`MAX_PATH_LENGTH`]
/// - `PathError::IndexOverflow` - for a numeric segment that does not fit in `usize`
///
/// # Example
///
/// ```
/// use genesis_path::{parse_path, Segment};
///
/// assert_eq!(parse_path("x").unwrap(), vec![Segment::Key("x".to_string())]);
/// assert_eq!(parse_path("a\\.b").unwrap(), vec![Segment::Key("a.b".to_string())]);
/// assert!(parse_path("").is_err());
/// ```
pub fn parse_path(path: &str) -> Result<Path, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    let segments = split_segments(path)
        .into_iter()
        .map(|(text, escaped)| {
            if !escaped && is_integer(&text) {
                match text.parse::<usize>() {
                    Ok(index) => Ok(Segment::Index { index, raw: text }),
                    Err(_) => Err(PathError::IndexOverflow(text)),
                }
            } else {
                Ok(Segment::Key(text))
            }
        })
        .collect::<Result<Path, PathError>>()?;
    validate_path(&segments)?;
    Ok(segments)
}

/// Format segments back into a dotted path string.
///
/// # Example
///
/// ```
/// use genesis_path::{format_path, Segment};
///
/// let path = [Segment::Key("min_deposit".to_string()), Segment::index(0)];
/// assert_eq!(format_path(&path), "min_deposit.0");
/// ```
pub fn format_path(path: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        match segment {
            Segment::Key(key) => out.push_str(&escape_segment(key)),
            Segment::Index { raw, .. } => out.push_str(raw),
        }
    }
    out
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if any step is missing or walks into a scalar. Index
/// segments also select digit-named fields of objects.
///
/// # Example
///
/// ```
/// use genesis_path::{get, parse_path};
/// use serde_json::json;
///
/// let doc = json!({"gov": {"min_deposit": [{"denom": "urax"}]}});
/// let val = get(&doc, &parse_path("gov.min_deposit.0.denom").unwrap());
/// assert_eq!(val, Some(&json!("urax")));
///
/// assert_eq!(get(&doc, &parse_path("gov.missing").unwrap()), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[Segment]) -> Option<&'a Value> {
    let mut current = val;
    for segment in path {
        current = match (current, segment) {
            (Value::Array(arr), Segment::Index { index, .. }) => arr.get(*index)?,
            (Value::Object(map), segment) => map.get(segment.as_key())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Returns `None` if the path doesn't exist.
pub fn get_mut<'a>(val: &'a mut Value, path: &[Segment]) -> Option<&'a mut Value> {
    let mut current = val;
    for segment in path {
        current = match (current, segment) {
            (Value::Array(arr), Segment::Index { index, .. }) => arr.get_mut(*index)?,
            (Value::Object(map), segment) => map.get_mut(segment.as_key())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a value by dotted path string.
///
/// Unparseable paths resolve to `None`.
pub fn get_by_path<'a>(val: &'a Value, path: &str) -> Option<&'a Value> {
    let path = parse_path(path).ok()?;
    get(val, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> Segment {
        Segment::Key(s.to_string())
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(
            split_segments("a.b.c"),
            vec![
                ("a".to_string(), false),
                ("b".to_string(), false),
                ("c".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_split_escapes() {
        assert_eq!(
            split_segments("a\\.b.c\\\\d"),
            vec![("a.b".to_string(), true), ("c\\d".to_string(), true)]
        );
        // Dangling escape is kept literally
        assert_eq!(split_segments("a\\"), vec![("a\\".to_string(), false)]);
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("x").unwrap(), vec![key("x")]);
        assert_eq!(
            parse_path("a.b.0.c").unwrap(),
            vec![key("a"), key("b"), Segment::index(0), key("c")]
        );
        assert_eq!(
            parse_path("a.007").unwrap(),
            vec![
                key("a"),
                Segment::Index {
                    index: 7,
                    raw: "007".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_parse_empty_segments() {
        assert_eq!(parse_path(".").unwrap(), vec![key(""), key("")]);
        assert_eq!(parse_path("a.").unwrap(), vec![key("a"), key("")]);
    }

    #[test]
    fn test_parse_escaped_digits_are_keys() {
        assert_eq!(parse_path("a.\\0").unwrap(), vec![key("a"), key("0")]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_path(""), Err(PathError::Empty));
        let huge = "1".repeat(40);
        assert_eq!(
            parse_path(&format!("a.{huge}")),
            Err(PathError::IndexOverflow(huge))
        );
        let deep = vec!["k"; MAX_PATH_LENGTH + 1].join(".");
        assert_eq!(parse_path(&deep), Err(PathError::TooLong));
        assert_eq!(
            PathError::TooLong.to_string(),
            format!("path is deeper than {MAX_PATH_LENGTH} segments")
        );
    }

    #[test]
    fn test_escape_segment() {
        assert_eq!(escape_segment("foo"), "foo");
        assert_eq!(escape_segment("a.b"), "a\\.b");
        assert_eq!(escape_segment("a\\b"), "a\\\\b");
        assert_eq!(escape_segment("42"), "\\42");
        assert_eq!(escape_segment(""), "");
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[]), "");
        assert_eq!(format_path(&[key("foo")]), "foo");
        assert_eq!(format_path(&[key("foo"), Segment::index(3)]), "foo.3");
        assert_eq!(format_path(&[key("a.b"), key("1")]), "a\\.b.\\1");
        assert_eq!(format_path(&parse_path("a.007").unwrap()), "a.007");
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer("0"));
        assert!(is_integer("123"));
        assert!(!is_integer("-1"));
        assert!(!is_integer("1.5"));
        assert!(!is_integer(""));
        assert!(!is_integer("abc"));
    }

    #[test]
    fn test_get_root() {
        assert_eq!(get(&json!(123), &[]), Some(&json!(123)));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"foo": {"bar": {"baz": "qux"}}});
        assert_eq!(
            get(&doc, &[key("foo"), key("bar"), key("baz")]),
            Some(&json!("qux"))
        );
    }

    #[test]
    fn test_get_array_element() {
        let doc = json!([1, 2, 3]);
        assert_eq!(get(&doc, &[Segment::index(0)]), Some(&json!(1)));
        assert_eq!(get(&doc, &[Segment::index(3)]), None);
        assert_eq!(get(&doc, &[key("x")]), None);
    }

    #[test]
    fn test_get_numeric_object_key() {
        let doc = json!({"a": {"0": "zero"}});
        assert_eq!(get(&doc, &[key("a"), Segment::index(0)]), Some(&json!("zero")));

        let doc = json!({"a": {"007": "padded", "7": "plain"}});
        assert_eq!(get_by_path(&doc, "a.007"), Some(&json!("padded")));
        assert_eq!(get_by_path(&doc, "a.7"), Some(&json!("plain")));
    }

    #[test]
    fn test_get_through_scalar() {
        let doc = json!({"x": 1});
        assert_eq!(get(&doc, &[key("x"), key("y")]), None);
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(get(&doc, &[key("foo")]), Some(&Value::Null));
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"a": {"b": [1, 2, 3]}});
        *get_mut(&mut doc, &[key("a"), key("b"), Segment::index(1)]).unwrap() = json!(20);
        assert_eq!(doc, json!({"a": {"b": [1, 20, 3]}}));
        assert!(get_mut(&mut doc, &[key("z")]).is_none());
    }

    #[test]
    fn test_get_by_path() {
        let doc = json!({"a": {"b.c": true}});
        assert_eq!(get_by_path(&doc, "a.b\\.c"), Some(&json!(true)));
        assert_eq!(get_by_path(&doc, ""), None);
    }
}
