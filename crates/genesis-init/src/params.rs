//! Default genesis parameters for a new rollapp.
//!
//! The parameter set is driven by a [`GenesisParamsConfig`] table: the paths
//! that receive the base denom, fixed literal values, and the location of the
//! bank denom metadata. [`GenesisParamsConfig::default`] holds the values
//! every rollapp starts from; a TOML file can override any part of it.

use std::fs;
use std::path::Path;

use genesis_patch::PathValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::denom::DenomMetadata;
use crate::GenesisError;

pub const MINT_DENOM_PATH: &str = "app_state.mint.params.mint_denom";
pub const BOND_DENOM_PATH: &str = "app_state.staking.params.bond_denom";
pub const CRISIS_FEE_DENOM_PATH: &str = "app_state.crisis.constant_fee.denom";
pub const EVM_DENOM_PATH: &str = "app_state.evm.params.evm_denom";
pub const GOV_MIN_DEPOSIT_DENOM_PATH: &str = "app_state.gov.deposit_params.min_deposit.0.denom";
pub const DENOM_METADATA_PATH: &str = "app_state.bank.denom_metadata";

fn default_denom_paths() -> Vec<String> {
    [
        MINT_DENOM_PATH,
        BOND_DENOM_PATH,
        CRISIS_FEE_DENOM_PATH,
        EVM_DENOM_PATH,
        GOV_MIN_DEPOSIT_DENOM_PATH,
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_literals() -> Vec<PathValue> {
    vec![
        PathValue::new("consensus_params.block.max_gas", "40000000"),
        PathValue::new("app_state.feemarket.params.no_base_fee", true),
        PathValue::new("app_state.distribution.params.base_proposer_reward", "0.8"),
        PathValue::new("app_state.distribution.params.community_tax", "0.00002"),
        PathValue::new("app_state.gov.voting_params.voting_period", "300s"),
        PathValue::new("app_state.staking.params.unbonding_time", "3628800s"),
    ]
}

fn default_denom_metadata_path() -> String {
    DENOM_METADATA_PATH.to_string()
}

/// Table of genesis parameters written on initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisParamsConfig {
    /// Paths whose value becomes the base denom.
    #[serde(default = "default_denom_paths")]
    pub denom_paths: Vec<String>,
    /// Fixed path/value pairs, written after the denom paths.
    #[serde(default = "default_literals")]
    pub literals: Vec<PathValue>,
    /// Path of the bank denom metadata list, written last.
    #[serde(default = "default_denom_metadata_path")]
    pub denom_metadata_path: String,
}

impl Default for GenesisParamsConfig {
    fn default() -> Self {
        Self {
            denom_paths: default_denom_paths(),
            literals: default_literals(),
            denom_metadata_path: default_denom_metadata_path(),
        }
    }
}

impl GenesisParamsConfig {
    /// Parse a TOML table. Missing keys keep their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use genesis_init::GenesisParamsConfig;
    ///
    /// let config = GenesisParamsConfig::from_toml_str(r#"
    /// denom_paths = ["app_state.mint.params.mint_denom"]
    /// "#).unwrap();
    /// assert_eq!(config.denom_paths.len(), 1);
    /// assert_eq!(config.literals, GenesisParamsConfig::default().literals);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, GenesisError> {
        Ok(toml::from_str(s)?)
    }

    /// Load the table from a TOML file.
    pub fn load(file: impl AsRef<Path>) -> Result<Self, GenesisError> {
        let file = file.as_ref();
        let content = fs::read_to_string(file).map_err(|source| GenesisError::Io {
            file: file.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the ordered patch batch for `denom` with `decimals` display
    /// decimals.
    ///
    /// Entries come in table order: every denom path, then every literal, then
    /// the denom metadata list.
    ///
    /// # Errors
    ///
    /// `GenesisError::InvalidDenom` if `denom` is shorter than two characters.
    pub fn build(&self, denom: &str, decimals: u32) -> Result<Vec<PathValue>, GenesisError> {
        let metadata = DenomMetadata::for_denom(denom, decimals)?;
        let metadata = serde_json::to_value(vec![metadata]).map_err(GenesisError::Serialize)?;

        let mut params = Vec::with_capacity(self.denom_paths.len() + self.literals.len() + 1);
        params.extend(
            self.denom_paths
                .iter()
                .map(|path| PathValue::new(path.as_str(), Value::String(denom.to_string()))),
        );
        params.extend(self.literals.iter().cloned());
        params.push(PathValue::new(self.denom_metadata_path.as_str(), metadata));

        debug!(denom, decimals, entries = params.len(), "built genesis params");
        Ok(params)
    }
}

/// Build the default parameter batch for `denom`.
///
/// # Example
///
/// ```
/// use genesis_init::build;
///
/// let params = build("urax", 18).unwrap();
/// assert_eq!(params[0].path, "app_state.mint.params.mint_denom");
/// assert_eq!(params[0].value, "urax");
/// assert!(build("u", 6).is_err());
/// ```
pub fn build(denom: &str, decimals: u32) -> Result<Vec<PathValue>, GenesisError> {
    GenesisParamsConfig::default().build(denom, decimals)
}
