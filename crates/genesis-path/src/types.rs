//! Type definitions for dotted paths.

use std::fmt;

use serde_json::Value;

/// A single step of a dotted path.
///
/// A step written with ASCII digits only is an [`Segment::Index`]; every other
/// step is a [`Segment::Key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Selects a field of an object.
    Key(String),
    /// Selects an element of an array, or a digit-named field of an object.
    ///
    /// `raw` is the digits as written, leading zeros included.
    Index { index: usize, raw: String },
}

impl Segment {
    /// An index segment written in canonical form (no leading zeros).
    pub fn index(index: usize) -> Self {
        Segment::Index {
            index,
            raw: index.to_string(),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index { .. })
    }

    /// The object key this segment selects when the container is an object.
    ///
    /// Index segments select the field named by their digits as written, so
    /// `a.007` on `{"a": {"007": 1}}` resolves to `1`.
    pub fn as_key(&self) -> &str {
        match self {
            Segment::Key(key) => key,
            Segment::Index { raw, .. } => raw,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// A parsed dotted path.
pub type Path = Vec<Segment>;

/// The six node kinds of a JSON document, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true for the kinds a path can descend into.
    pub fn is_container(&self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind_of() {
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Bool);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Number);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
    }

    #[test]
    fn test_value_kind_container() {
        assert!(ValueKind::Array.is_container());
        assert!(ValueKind::Object.is_container());
        assert!(!ValueKind::Null.is_container());
        assert!(!ValueKind::String.is_container());
    }

    #[test]
    fn test_segment_as_key() {
        assert_eq!(Segment::Key("foo".to_string()).as_key(), "foo");
        assert_eq!(Segment::index(7).as_key(), "7");
        assert_eq!(Segment::index(7).to_string(), "7");

        let padded = Segment::Index {
            index: 7,
            raw: "007".to_string(),
        };
        assert_eq!(padded.as_key(), "007");
        assert_eq!(padded.to_string(), "007");
        assert_ne!(padded, Segment::index(7));
    }
}
