//! Implementation of address string utilities.

use crate::errors::ParseAddressError;
use crate::hash;
use web3::types::Address;

/// Parses a `0x`-prefixed address string. Both lowercase and EIP-55
/// mixed-case strings are accepted; the checksum is not verified.
pub fn parse_address<S>(address_str: S) -> Result<Address, ParseAddressError>
where
    S: AsRef<str>,
{
    let digits = address_str
        .as_ref()
        .strip_prefix("0x")
        .ok_or(ParseAddressError::MissingHexPrefix)?;

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes)?;
    Ok(Address::from(bytes))
}

/// Extension trait for converting an `Address` into a hex string implementation.
pub trait AddressHexExt {
    /// Convert an address into a 40 character representation.
    fn to_fixed_hex(&self) -> String;

    /// Convert an address into its `0x`-prefixed EIP-55 mixed-case
    /// representation. This is the format Truffle uses when exposing a
    /// deployed contract's address.
    fn to_checksum(&self) -> String;
}

impl AddressHexExt for Address {
    fn to_fixed_hex(&self) -> String {
        format!("{:040x}", self)
    }

    fn to_checksum(&self) -> String {
        let digits = self.to_fixed_hex();
        let hash = hash::keccak256(digits.as_bytes());

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");
        for (i, digit) in digits.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if nibble >= 8 {
                checksum.push(digit.to_ascii_uppercase());
            } else {
                checksum.push(digit);
            }
        }

        checksum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_missing_prefix() {
        assert!(matches!(
            parse_address("0000000000000000000000000000000000000000"),
            Err(ParseAddressError::MissingHexPrefix),
        ));
    }

    #[test]
    fn parse_address_address_too_short() {
        assert!(matches!(
            parse_address("0x00000000000000"),
            Err(ParseAddressError::InvalidHex(_)),
        ));
    }

    #[test]
    fn parse_address_ok() {
        let expected = Address::from([
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
        ]);
        assert_eq!(
            parse_address("0x000102030405060708090a0b0c0d0e0f10111213").unwrap(),
            expected,
        );
    }

    #[test]
    fn parse_address_mixed_case() {
        assert_eq!(
            parse_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap(),
            parse_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
        );
    }

    #[test]
    fn to_fixed_hex() {
        for (value, expected) in &[
            (
                "0x0000000000000000000000000000000000000000",
                "0000000000000000000000000000000000000000",
            ),
            (
                "0x0102030405060708091020304050607080900001",
                "0102030405060708091020304050607080900001",
            ),
            (
                "0x9fac3b52be975567103c4695a2835bba40076da1",
                "9fac3b52be975567103c4695a2835bba40076da1",
            ),
        ] {
            let value = parse_address(value).unwrap();
            assert_eq!(&value.to_fixed_hex(), expected);
        }
    }

    #[test]
    fn to_checksum() {
        // test vectors retrieved from
        // https://eips.ethereum.org/EIPS/eip-55
        for expected in &[
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let address = parse_address(expected.to_lowercase()).unwrap();
            assert_eq!(&address.to_checksum(), expected);
        }
    }
}
