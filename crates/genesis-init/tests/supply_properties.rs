use genesis_init::{allocate, scaled_supply, GenesisError};
use num_bigint::BigUint;
use proptest::prelude::*;

fn amount(balance: &str, denom: &str) -> BigUint {
    let digits = balance.strip_suffix(denom).expect("denom suffix");
    BigUint::parse_bytes(digits.as_bytes(), 10).expect("decimal digits")
}

proptest! {
    #[test]
    fn balances_sum_to_scaled_supply(supply in "[0-9]{1,60}", decimals in 0u32..40) {
        let balances = allocate(&supply, decimals, "urax").unwrap();
        let sequencer = amount(&balances.sequencer, "urax");
        let relayer = amount(&balances.relayer, "urax");
        let scaled = scaled_supply(&supply, decimals).unwrap();

        prop_assert_eq!(&sequencer + &relayer, scaled.clone());
        prop_assert_eq!(relayer, &scaled / 10u32);
    }

    #[test]
    fn balances_have_no_sign_or_separators(supply in "[0-9]{1,30}", decimals in 0u32..20) {
        let balances = allocate(&supply, decimals, "adym").unwrap();
        for balance in [&balances.sequencer, &balances.relayer] {
            let digits = balance.strip_suffix("adym").unwrap();
            prop_assert!(!digits.is_empty());
            prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(digits == "0" || !digits.starts_with('0'));
        }
    }

    #[test]
    fn non_numeric_supply_is_rejected(supply in "[0-9]{0,5}[a-zA-Z_ .,-][0-9a-z]{0,5}") {
        let is_invalid_format = matches!(
            allocate(&supply, 6, "urax"),
            Err(GenesisError::InvalidSupplyFormat(_))
        );
        prop_assert!(is_invalid_format);
    }
}

#[test]
fn spec_examples() {
    let b = allocate("100", 0, "denom").unwrap();
    assert_eq!((b.sequencer.as_str(), b.relayer.as_str()), ("90denom", "10denom"));

    let b = allocate("5", 0, "denom").unwrap();
    assert_eq!((b.sequencer.as_str(), b.relayer.as_str()), ("5denom", "0denom"));

    assert!(matches!(
        allocate("abc", 2, "denom"),
        Err(GenesisError::InvalidSupplyFormat(_))
    ));
}
