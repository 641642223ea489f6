//! Genesis file location and parameter update.

use std::path::{Path, PathBuf};

use genesis_patch::apply_patches;
use tracing::info;

use crate::params::GenesisParamsConfig;
use crate::GenesisError;

/// Directory under the roller home that holds the rollapp node's data.
pub const ROLLAPP_DIR_NAME: &str = "rollapp";

pub const GENESIS_FILE_NAME: &str = "genesis.json";

/// `<home>/rollapp/config`
pub fn rollapp_config_dir(home: impl AsRef<Path>) -> PathBuf {
    home.as_ref().join(ROLLAPP_DIR_NAME).join("config")
}

/// `<home>/rollapp/config/genesis.json`
pub fn genesis_file_path(home: impl AsRef<Path>) -> PathBuf {
    rollapp_config_dir(home).join(GENESIS_FILE_NAME)
}

impl GenesisParamsConfig {
    /// Write this table's parameters for `denom` into the genesis file.
    ///
    /// The file is left untouched if the denom is invalid or any patch fails.
    pub fn update_genesis(
        &self,
        genesis_path: impl AsRef<Path>,
        denom: &str,
        decimals: u32,
    ) -> Result<(), GenesisError> {
        let genesis_path = genesis_path.as_ref();
        let params = self.build(denom, decimals)?;
        apply_patches(genesis_path, &params)?;
        info!(file = %genesis_path.display(), denom, decimals, "updated genesis params");
        Ok(())
    }
}

/// Write the default rollapp parameters for `denom` into the genesis file.
pub fn update_genesis_params(
    genesis_path: impl AsRef<Path>,
    denom: &str,
    decimals: u32,
) -> Result<(), GenesisError> {
    GenesisParamsConfig::default().update_genesis(genesis_path, denom, decimals)
}
