//! Decimal parsing and emission on top of the digit codec.
//!
//! Parsing buckets the input into 8-digit groups from the least
//! significant end; emission prints the top limb without padding and
//! every lower limb as two 4-digit codec stores.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::constants::{BASE_DIGITS, HALF_BASE};
use crate::error::{ensure, Error};
use crate::limbs::LimbBuffer;
use crate::signed::Signed;
use crate::unsigned::Unsigned;

/// Parse an all-digit string into limbs.
pub(crate) fn parse_digits(text: &str) -> Result<LimbBuffer, Error> {
    let bytes = text.as_bytes();
    ensure!(!bytes.is_empty(), Error::EmptyInput);
    if cfg!(feature = "validate") {
        if let Some(position) = bytes.iter().position(|byte| !byte.is_ascii_digit()) {
            return Err(Error::InvalidDigit(position));
        }
    }

    let limb_count = bytes.len().div_ceil(BASE_DIGITS);
    let mut limbs = vec![0u32; limb_count];
    let mut index = limb_count;
    let mut cursor = 0;

    // The most significant group may be short.
    let head = bytes.len() % BASE_DIGITS;
    if head != 0 {
        let mut value = 0u32;
        if head & 1 != 0 {
            value = u32::from(bytes[0] & 15);
            cursor = 1;
        }
        while cursor < head {
            value = value * 100 + codec::read_pair(&bytes[cursor..]);
            cursor += 2;
        }
        index -= 1;
        limbs[index] = value;
    }
    while index > 0 {
        index -= 1;
        limbs[index] = codec::read_pair(&bytes[cursor..]) * 1_000_000
            + codec::read_pair(&bytes[cursor + 2..]) * 10_000
            + codec::read_pair(&bytes[cursor + 4..]) * 100
            + codec::read_pair(&bytes[cursor + 6..]);
        cursor += BASE_DIGITS;
    }
    Ok(LimbBuffer::from_raw(limbs))
}

/// Decimal string of a canonical limb sequence.
pub(crate) fn emit_digits(limbs: &[u32]) -> String {
    let top = limbs.len() - 1;
    let mut out = String::with_capacity(limbs.len() * BASE_DIGITS);
    out.push_str(&limbs[top].to_string());
    for &limb in limbs[..top].iter().rev() {
        for byte in codec::write_quad(limb / HALF_BASE) {
            out.push(char::from(byte));
        }
        for byte in codec::write_quad(limb % HALF_BASE) {
            out.push(char::from(byte));
        }
    }
    out
}

impl fmt::Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl FromStr for Unsigned {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        Self::from_decimal(text)
    }
}

impl FromStr for Signed {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        Self::from_decimal(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Unsigned {
        text.parse().unwrap()
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("".parse::<Unsigned>().unwrap_err(), Error::EmptyInput);
        assert_eq!("12a4".parse::<Unsigned>().unwrap_err(), Error::InvalidDigit(2));
        assert_eq!(" 12".parse::<Unsigned>().unwrap_err(), Error::InvalidDigit(0));
        assert_eq!("-12".parse::<Unsigned>().unwrap_err(), Error::InvalidDigit(0));
        assert_eq!("-".parse::<Signed>().unwrap_err(), Error::EmptyInput);
        assert_eq!("--5".parse::<Signed>().unwrap_err(), Error::InvalidDigit(0));
    }

    #[test]
    fn parse_normalizes_leading_zeros() {
        assert_eq!(parse("00042").to_string(), "42");
        assert_eq!(parse("0000000000000000").to_string(), "0");
        assert_eq!(parse("000100000001").to_string(), "100000001");
    }

    #[test]
    fn parse_all_head_lengths() {
        // Cover every (length mod 8) entry path for the top group.
        let digits = "987654321098765432109876543210";
        for width in 1..=17 {
            let text = &digits[..width];
            let trimmed = text.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            assert_eq!(parse(text).to_string(), expected, "width {width}");
        }
    }

    #[test]
    fn emit_pads_inner_limbs() {
        assert_eq!(parse("100000001").to_string(), "100000001");
        assert_eq!(parse("1000000010000000200000003").to_string(), "1000000010000000200000003");
        assert_eq!(parse("123").to_string(), "123");
    }

    #[test]
    fn round_trip_at_limb_boundaries() {
        for text in [
            "0",
            "1",
            "99999999",
            "100000000",
            "12345678901234567890123456789012345678901234567890",
        ] {
            assert_eq!(parse(text).to_string(), text);
        }
    }

    #[test]
    fn signed_text_round_trip() {
        for text in ["-1", "0", "-99999999000000011", "424242424242424242424242"] {
            assert_eq!(text.parse::<Signed>().unwrap().to_string(), text);
        }
        // The sign of zero is dropped on output.
        assert_eq!("-0".parse::<Signed>().unwrap().to_string(), "0");
        assert_eq!("-000".parse::<Signed>().unwrap().to_string(), "0");
    }
}
