//! Bank denomination metadata.

use serde::{Deserialize, Serialize};

use crate::GenesisError;

/// One unit of a denomination, e.g. `urax` at exponent 0 or `rax` at 18.
///
/// Field order matches the bank module's JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub aliases: Vec<String>,
    pub denom: String,
    pub exponent: u32,
}

/// Bank module metadata describing a base denom and its display unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadata {
    pub base: String,
    pub denom_units: Vec<DenomUnit>,
    pub description: String,
    pub display: String,
    pub name: String,
    pub symbol: String,
}

/// Strip the one-character magnitude prefix (the `u` of `urax`).
///
/// Exactly one `char` is removed; no Unicode case or width handling beyond
/// that.
///
/// # Errors
///
/// `GenesisError::InvalidDenom` when nothing would remain after the prefix.
pub fn display_denom(denom: &str) -> Result<&str, GenesisError> {
    let mut chars = denom.chars();
    match chars.next() {
        Some(_) if !chars.as_str().is_empty() => Ok(chars.as_str()),
        _ => Err(GenesisError::InvalidDenom(denom.to_string())),
    }
}

/// `rax` -> `Rax`.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

impl DenomMetadata {
    /// Metadata for `denom` with a display unit `decimals` orders of magnitude
    /// above it.
    ///
    /// # Example
    ///
    /// ```
    /// use genesis_init::DenomMetadata;
    ///
    /// let meta = DenomMetadata::for_denom("uxyz", 18).unwrap();
    /// assert_eq!(meta.display, "xyz");
    /// assert_eq!(meta.name, "Xyz");
    /// assert_eq!(meta.symbol, "XYZ");
    /// assert_eq!(meta.denom_units[1].exponent, 18);
    /// ```
    pub fn for_denom(denom: &str, decimals: u32) -> Result<Self, GenesisError> {
        let display = display_denom(denom)?;
        Ok(Self {
            base: denom.to_string(),
            denom_units: vec![
                DenomUnit {
                    aliases: Vec::new(),
                    denom: denom.to_string(),
                    exponent: 0,
                },
                DenomUnit {
                    aliases: Vec::new(),
                    denom: display.to_string(),
                    exponent: decimals,
                },
            ],
            description: format!("Denom metadata for {display} ({denom})"),
            display: display.to_string(),
            name: title_case(display),
            symbol: display.to_uppercase(),
        })
    }
}
