use alloy::primitives::{Address, U256};
use bigdecimal::{
    num_bigint::{BigInt, Sign},
    BigDecimal,
};

use crate::error::Error;

/// Normalizes an Ethereum address into its EIP-55 checksummed form.
///
/// Any letter-casing of a well-formed 20-byte hex address is accepted;
/// malformed input fails with `InvalidAddress` carrying the input verbatim.
pub fn to_checksum_address(address: &str) -> Result<String, Error> {
    let parsed: Address = address
        .parse()
        .map_err(|_| Error::InvalidAddress(address.to_owned()))?;
    Ok(parsed.to_checksum(None))
}

/// Converts a wei amount into a token-unit decimal (18 decimals), exactly.
pub fn from_wei(value: U256) -> BigDecimal {
    let digits = BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>());
    BigDecimal::new(digits, 18)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_to_checksum_address_from_lowercase() {
        let checksummed =
            to_checksum_address("0xa478c2975ab1ea89e8196811f51a7b7ade33eb11")
                .unwrap();
        assert_eq!(
            checksummed,
            "0xA478c2975Ab1Ea89e8196811F51A7B7Ade33eB11"
        );
    }

    #[test]
    fn test_to_checksum_address_is_case_insensitive() {
        let address = "0x000000000000000000000000000000000000dEaD";
        for variant in [
            address.to_lowercase(),
            address.to_uppercase().replace("0X", "0x"),
            address.to_owned(),
        ] {
            let checksummed = to_checksum_address(&variant).unwrap();
            assert_eq!(checksummed, address, "input: {}", variant);
        }
    }

    #[test]
    fn test_to_checksum_address_rejects_malformed_input() {
        for input in ["0x123", "", "not-an-address", "0xzz78c2975ab1ea89e8196811f51a7b7ade33eb11"] {
            let error = to_checksum_address(input).unwrap_err();
            match error {
                Error::InvalidAddress(original) => {
                    assert_eq!(original, input)
                },
                other => panic!("unexpected error: {}", other),
            }
        }
    }

    #[test]
    fn test_from_wei_is_exact() {
        let wei = U256::from(1_500_000_000_000_000_000_u64);
        assert_eq!(from_wei(wei), BigDecimal::from_str("1.5").unwrap());

        assert_eq!(from_wei(U256::from(1_u8)), BigDecimal::from_str("0.000000000000000001").unwrap());
        assert_eq!(from_wei(U256::ZERO), BigDecimal::from(0));
    }
}
