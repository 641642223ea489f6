//! Core types for the genesis patch engine.

use std::path::PathBuf;

use genesis_path::{PathError, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to access {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid JSON: {source}", .file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid path `{path}`: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: PathError,
    },
    #[error("cannot set `{path}`: {at} is {found}, expected object or array")]
    Conflict {
        path: String,
        at: String,
        found: ValueKind,
    },
    #[error("cannot set `{path}`: index {index} is more than {max_gap} past the end of an array of length {len}")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
        max_gap: usize,
    },
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PatchError {
    /// The dotted path of the patch that failed, if the failure is tied to one.
    pub fn patch_path(&self) -> Option<&str> {
        match self {
            PatchError::InvalidPath { path, .. }
            | PatchError::Conflict { path, .. }
            | PatchError::IndexOutOfRange { path, .. } => Some(path),
            _ => None,
        }
    }
}

// ── PathValue ─────────────────────────────────────────────────────────────

/// A single patch: set the value at a dotted path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathValue {
    pub path: String,
    pub value: Value,
}

impl PathValue {
    pub fn new(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_value_new() {
        let pv = PathValue::new("consensus_params.block.max_gas", "40000000");
        assert_eq!(pv.path, "consensus_params.block.max_gas");
        assert_eq!(pv.value, json!("40000000"));
    }

    #[test]
    fn path_value_serde() {
        let pv: PathValue =
            serde_json::from_value(json!({"path": "a.b", "value": [1, true]})).unwrap();
        assert_eq!(pv, PathValue::new("a.b", json!([1, true])));
        assert_eq!(
            serde_json::to_value(&pv).unwrap(),
            json!({"path": "a.b", "value": [1, true]})
        );
    }

    #[test]
    fn conflict_message_names_path_and_kind() {
        let err = PatchError::Conflict {
            path: "x.y".to_string(),
            at: "`x`".to_string(),
            found: ValueKind::Number,
        };
        assert_eq!(
            err.to_string(),
            "cannot set `x.y`: `x` is number, expected object or array"
        );
        assert_eq!(err.patch_path(), Some("x.y"));
    }
}
