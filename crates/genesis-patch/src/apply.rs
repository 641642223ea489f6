//! In-memory set-at-path logic.
//!
//! Missing intermediate nodes are created on the way down: an array when the
//! following segment is an index, an object otherwise. Existing scalars are
//! never overwritten to make room for a deeper path; that is a conflict.

use genesis_path::{format_path, parse_path, Segment, ValueKind};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::types::{PatchError, PathValue};

/// How far past the end of an array an index may reach before the patch is
/// rejected instead of padding the gap with `null`.
pub const MAX_ARRAY_GAP: usize = 1024;

// ── Navigation ────────────────────────────────────────────────────────────

/// Why a step of the walk failed, before the patch path is attached.
enum StepError {
    Kind(ValueKind),
    Gap { index: usize, len: usize },
}

fn container_for(next: &Segment) -> Value {
    if next.is_index() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Grows `arr` with `null` until `index` is a valid position, then places
/// `fill()` there.
fn extend_to(arr: &mut Vec<Value>, index: usize, fill: impl FnOnce() -> Value) -> Result<(), StepError> {
    let len = arr.len();
    if index - len > MAX_ARRAY_GAP {
        return Err(StepError::Gap { index, len });
    }
    arr.resize(index, Value::Null);
    arr.push(fill());
    Ok(())
}

/// Descends one step, creating the child when it is missing.
fn child_or_insert<'a>(
    node: &'a mut Value,
    segment: &Segment,
    next: &Segment,
) -> Result<&'a mut Value, StepError> {
    match node {
        Value::Object(map) => Ok(map
            .entry(segment.as_key().to_string())
            .or_insert_with(|| container_for(next))),
        Value::Array(arr) => match segment {
            Segment::Index { index, .. } => {
                if *index >= arr.len() {
                    extend_to(arr, *index, || container_for(next))?;
                }
                Ok(&mut arr[*index])
            }
            Segment::Key(_) => Err(StepError::Kind(ValueKind::Array)),
        },
        other => Err(StepError::Kind(ValueKind::of(other))),
    }
}

/// Writes `value` into the slot `segment` of `node`, returning the old value.
fn set_slot(node: &mut Value, segment: &Segment, value: Value) -> Result<Option<Value>, StepError> {
    match node {
        Value::Object(map) => Ok(map.insert(segment.as_key().to_string(), value)),
        Value::Array(arr) => match segment {
            Segment::Index { index, .. } if *index < arr.len() => {
                Ok(Some(std::mem::replace(&mut arr[*index], value)))
            }
            Segment::Index { index, .. } => {
                extend_to(arr, *index, || value)?;
                Ok(None)
            }
            Segment::Key(_) => Err(StepError::Kind(ValueKind::Array)),
        },
        other => Err(StepError::Kind(ValueKind::of(other))),
    }
}

fn describe(prefix: &[Segment]) -> String {
    if prefix.is_empty() {
        "the document root".to_string()
    } else {
        format!("`{}`", format_path(prefix))
    }
}

fn step_error(path: &str, prefix: &[Segment], err: StepError) -> PatchError {
    match err {
        StepError::Kind(found) => PatchError::Conflict {
            path: path.to_string(),
            at: describe(prefix),
            found,
        },
        StepError::Gap { index, len } => PatchError::IndexOutOfRange {
            path: path.to_string(),
            index,
            len,
            max_gap: MAX_ARRAY_GAP,
        },
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Set the value at a dotted `path`, creating missing structure.
///
/// Returns the value previously stored at the path, if any.
///
/// On error `doc` may already hold containers created for the failing path;
/// use [`apply_to_value`] for all-or-nothing semantics.
///
/// # Example
///
/// ```
/// use genesis_patch::set_at_path;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set_at_path(&mut doc, "a.b.0.c", json!(5)).unwrap();
/// assert_eq!(doc, json!({"a": {"b": [{"c": 5}]}}));
/// ```
pub fn set_at_path(doc: &mut Value, path: &str, value: Value) -> Result<Option<Value>, PatchError> {
    let segments = parse_path(path).map_err(|source| PatchError::InvalidPath {
        path: path.to_string(),
        source,
    })?;
    let Some((last, parents)) = segments.split_last() else {
        return Err(PatchError::InvalidPath {
            path: path.to_string(),
            source: genesis_path::PathError::Empty,
        });
    };

    let mut current = doc;
    for (depth, segment) in parents.iter().enumerate() {
        let next = &segments[depth + 1];
        current = child_or_insert(current, segment, next)
            .map_err(|err| step_error(path, &segments[..depth], err))?;
    }
    set_slot(current, last, value).map_err(|err| step_error(path, parents, err))
}

/// Apply a batch directly to `doc`, stopping at the first failure.
pub(crate) fn apply_in_place(doc: &mut Value, patches: &[PathValue]) -> Result<(), PatchError> {
    for (idx, patch) in patches.iter().enumerate() {
        if let Err(err) = set_at_path(doc, &patch.path, patch.value.clone()) {
            warn!(index = idx, path = %patch.path, error = %err, "patch batch aborted");
            return Err(err);
        }
        debug!(index = idx, path = %patch.path, "applied patch");
    }
    Ok(())
}

/// Apply a batch of patches to an in-memory document.
///
/// The batch is applied to a copy; `doc` is only replaced when every patch
/// succeeded, so after an error it is exactly as it was.
///
/// # Example
///
/// ```
/// use genesis_patch::{apply_to_value, PathValue};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let patches = [PathValue::new("x", 1), PathValue::new("x.y", 2)];
/// assert!(apply_to_value(&mut doc, &patches).is_err());
/// assert_eq!(doc, json!({}));
/// ```
pub fn apply_to_value(doc: &mut Value, patches: &[PathValue]) -> Result<(), PatchError> {
    let mut working = doc.clone();
    apply_in_place(&mut working, patches)?;
    *doc = working;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
