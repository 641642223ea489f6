//! Path-addressed patching of JSON genesis documents.
//!
//! A patch batch is an ordered list of [`PathValue`]s. Each one sets the value
//! at a dotted path (see [`genesis_path`]), creating missing objects and
//! arrays along the way. A batch is all-or-nothing: either every patch is
//! applied and the document is written back, or nothing changes.
//!
//! # Example
//!
//! ```
//! use genesis_patch::{apply_patches, PathValue};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let file = dir.path().join("genesis.json");
//! std::fs::write(&file, "{}").unwrap();
//!
//! apply_patches(&file, &[PathValue::new("app_state.feemarket.params.no_base_fee", true)]).unwrap();
//!
//! let doc: serde_json::Value =
//!     serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
//! assert_eq!(doc["app_state"]["feemarket"]["params"]["no_base_fee"], true);
//! ```

pub mod apply;
pub mod cli;
pub mod file;
pub mod types;

pub use apply::{apply_to_value, set_at_path, MAX_ARRAY_GAP};
pub use file::{apply_patches, load_document, to_genesis_string, write_document};
pub use types::{PatchError, PathValue};
