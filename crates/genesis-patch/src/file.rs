//! Whole-file load, patch and rewrite of genesis documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::info;

use super::apply::apply_in_place;
use super::types::{PatchError, PathValue};

fn io_error(file: &Path) -> impl FnOnce(std::io::Error) -> PatchError + '_ {
    move |source| PatchError::Io {
        file: file.to_path_buf(),
        source,
    }
}

/// Read and parse the JSON document at `file`.
pub fn load_document(file: &Path) -> Result<Value, PatchError> {
    let content = fs::read_to_string(file).map_err(io_error(file))?;
    serde_json::from_str(&content).map_err(|source| PatchError::Parse {
        file: file.to_path_buf(),
        source,
    })
}

/// Serialize a document the way genesis files are laid out on disk:
/// two-space indented JSON followed by a newline.
pub fn to_genesis_string(doc: &Value) -> Result<String, PatchError> {
    let mut out = serde_json::to_string_pretty(doc).map_err(PatchError::Serialize)?;
    out.push('\n');
    Ok(out)
}

/// Replace the contents of `file` with `doc`.
///
/// The document is written to a temporary file next to `file` and renamed
/// over it, so readers see either the old or the new document. Permissions of
/// an existing `file` are kept.
pub fn write_document(file: &Path, doc: &Value) -> Result<(), PatchError> {
    let content = to_genesis_string(doc)?;
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(io_error(file))?;
    tmp.write_all(content.as_bytes()).map_err(io_error(file))?;
    if let Ok(meta) = fs::metadata(file) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(io_error(file))?;
    }
    tmp.as_file().sync_all().map_err(io_error(file))?;
    tmp.persist(file).map_err(|err| PatchError::Io {
        file: file.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

/// Apply a batch of patches to the JSON document stored at `file_path`.
///
/// The file is read once, every patch is applied in order to the in-memory
/// tree, and the file is rewritten only if all of them succeed. Any failure
/// leaves the file byte-for-byte untouched.
///
/// # Errors
///
/// - `PatchError::Io` - the file cannot be read or rewritten
/// - `PatchError::Parse` - the file is not valid JSON
/// - `PatchError::InvalidPath`, `PatchError::Conflict`, `PatchError::IndexOutOfRange` -
///   a patch cannot be applied
pub fn apply_patches(file_path: impl AsRef<Path>, patches: &[PathValue]) -> Result<(), PatchError> {
    let file = file_path.as_ref();
    let mut doc = load_document(file)?;
    apply_in_place(&mut doc, patches)?;
    write_document(file, &doc)?;
    info!(file = %file.display(), patches = patches.len(), "updated JSON document");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
