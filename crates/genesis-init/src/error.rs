use std::path::PathBuf;

use genesis_patch::PatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("invalid token supply `{0}`: expected a non-negative base-10 integer")]
    InvalidSupplyFormat(String),
    #[error("invalid denom `{0}`: expected a prefix character followed by a display denom")]
    InvalidDenom(String),
    #[error("failed to read {}: {source}", .file.display())]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid genesis params config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to encode denom metadata: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Patch(#[from] PatchError),
}
