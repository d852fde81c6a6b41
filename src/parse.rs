//! Decimal parsing.

use core::str::FromStr;

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, Result};

impl BigInt {
    /// Parses a base-10 integer literal.
    ///
    /// Leading and trailing ASCII whitespace is tolerated, as is whitespace
    /// between the optional sign and the first digit. At least one digit is
    /// required; any other character is an error. Leading zeros are
    /// accepted and ignored, and an all-zero literal (with or without a
    /// sign) yields the canonical zero.
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// assert_eq!(BigInt::from_decimal_str("-000123").unwrap().to_string(), "-123");
    /// assert!(BigInt::from_decimal_str("12fish").is_err());
    /// ```
    pub fn from_decimal_str(text: &str) -> Result<BigInt> {
        let bytes = text.as_bytes();
        let mut i = 0;

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut sign = Sign::Plus;
        if i < bytes.len() {
            match bytes[i] {
                b'+' => i += 1,
                b'-' => {
                    sign = Sign::Minus;
                    i += 1;
                }
                _ => {}
            }
        }

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        // Fold digits in as value * 10 + digit; leading zeros fall out for
        // free because the magnitude stays empty until a non-zero digit.
        let mut value = BigInt::new();
        let mut digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            value.mul_small(10);
            value.add_small(u32::from(bytes[i] - b'0'));
            digits += 1;
            i += 1;
        }
        if digits == 0 {
            return Err(Error::invalid_literal(text));
        }

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i != bytes.len() {
            return Err(Error::invalid_literal(text));
        }

        value.normalize();
        if !value.limbs.is_empty() {
            value.sign = sign;
        }
        Ok(value)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(text: &str) -> Result<BigInt> {
        BigInt::from_decimal_str(text)
    }
}
