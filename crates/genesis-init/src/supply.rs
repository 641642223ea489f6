//! Bootstrap supply split between the sequencer and relayer accounts.

use num_bigint::BigUint;

use crate::GenesisError;

/// The relayer receives `1 / RELAYER_SHARE_DIVISOR` of the scaled supply,
/// rounded down. The sequencer receives the rest.
pub const RELAYER_SHARE_DIVISOR: u32 = 10;

/// Genesis balances of the two bootstrap accounts, formatted as coin strings
/// (`<amount><denom>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBalances {
    pub sequencer: String,
    pub relayer: String,
}

fn parse_supply(total_supply: &str) -> Result<BigUint, GenesisError> {
    let digits = total_supply.strip_prefix('+').unwrap_or(total_supply);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GenesisError::InvalidSupplyFormat(total_supply.to_string()));
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| GenesisError::InvalidSupplyFormat(total_supply.to_string()))
}

/// Total supply expressed in the base denom: `total_supply * 10^decimals`.
///
/// # Errors
///
/// `GenesisError::InvalidSupplyFormat` unless `total_supply` is one or more
/// ASCII digits, optionally preceded by `+`.
pub fn scaled_supply(total_supply: &str, decimals: u32) -> Result<BigUint, GenesisError> {
    let supply = parse_supply(total_supply)?;
    Ok(supply * BigUint::from(10u32).pow(decimals))
}

/// Split the total token supply between the sequencer and relayer accounts.
///
/// # Example
///
/// ```
/// use genesis_init::allocate;
///
/// let balances = allocate("100", 0, "denom").unwrap();
/// assert_eq!(balances.sequencer, "90denom");
/// assert_eq!(balances.relayer, "10denom");
///
/// let balances = allocate("1000000000", 18, "urax").unwrap();
/// assert_eq!(balances.relayer, "100000000000000000000000000urax");
/// ```
pub fn allocate(total_supply: &str, decimals: u32, denom: &str) -> Result<GenesisBalances, GenesisError> {
    let scaled = scaled_supply(total_supply, decimals)?;
    let relayer = &scaled / RELAYER_SHARE_DIVISOR;
    let sequencer = scaled - &relayer;
    Ok(GenesisBalances {
        sequencer: format!("{sequencer}{denom}"),
        relayer: format!("{relayer}{denom}"),
    })
}
