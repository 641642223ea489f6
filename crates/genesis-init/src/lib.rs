//! Rollapp genesis initialization.
//!
//! Two pieces feed a new rollapp's genesis:
//!
//! - [`allocate`] splits the token supply between the sequencer and relayer
//!   bootstrap accounts using arbitrary-precision arithmetic.
//! - [`build`] produces the default chain parameters as a patch batch, which
//!   [`update_genesis_params`] applies to the genesis file through
//!   [`genesis_patch`].
//!
//! # Example
//!
//! ```
//! use genesis_init::{allocate, genesis_file_path, update_genesis_params};
//!
//! let home = tempfile::tempdir().unwrap();
//! let genesis = genesis_file_path(home.path());
//! std::fs::create_dir_all(genesis.parent().unwrap()).unwrap();
//! std::fs::write(&genesis, "{}").unwrap();
//!
//! let balances = allocate("1000", 6, "urax").unwrap();
//! assert_eq!(balances.sequencer, "900000000urax");
//! assert_eq!(balances.relayer, "100000000urax");
//!
//! update_genesis_params(&genesis, "urax", 6).unwrap();
//! ```

mod error;

pub mod denom;
pub mod genesis;
pub mod params;
pub mod supply;

pub use denom::{display_denom, DenomMetadata, DenomUnit};
pub use error::GenesisError;
pub use genesis::{genesis_file_path, rollapp_config_dir, update_genesis_params};
pub use genesis_patch::PathValue;
pub use params::{build, GenesisParamsConfig};
pub use supply::{allocate, scaled_supply, GenesisBalances, RELAYER_SHARE_DIVISOR};
