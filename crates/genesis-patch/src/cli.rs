//! Core logic behind the `genesis-patch` binary.

use serde_json::Value;

use crate::{apply_patches, PatchError, PathValue};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Json(serde_json::Error),
    Patch(PatchError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "invalid patch list: {e}"),
            CliError::Patch(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<PatchError> for CliError {
    fn from(e: PatchError) -> Self {
        CliError::Patch(e)
    }
}

pub const USAGE: &str = "usage: genesis-patch <genesis.json> '<patches-json>'";

/// Parse a JSON array of `{"path": ..., "value": ...}` objects.
///
/// A single object is accepted as a one-element batch.
pub fn parse_patches(json: &str) -> Result<Vec<PathValue>, CliError> {
    let raw: Value = serde_json::from_str(json)?;
    match raw {
        Value::Array(_) => Ok(serde_json::from_value(raw)?),
        Value::Object(_) => Ok(vec![serde_json::from_value(raw)?]),
        _ => Err(CliError::Usage(
            "patches must be a JSON array of {\"path\", \"value\"} objects".to_string(),
        )),
    }
}

/// Run the tool with positional arguments (program name excluded).
///
/// Returns the number of applied patches.
pub fn run(args: &[String]) -> Result<usize, CliError> {
    let (file, patches) = match args {
        [file, patches] => (file, patches),
        _ => return Err(CliError::Usage(USAGE.to_string())),
    };
    let patches = parse_patches(patches)?;
    apply_patches(file, &patches)?;
    Ok(patches.len())
}

// ── Tests ─────────────────────────────────────────────────────────────────
