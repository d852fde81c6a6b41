//! Binary (square-and-multiply) exponentiation, plain and modular.

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};

impl BigInt {
    /// Raises `self` to a non-negative exponent.
    ///
    /// The exponent must fit in an `i64` ([`ErrorCode::Overflow`]
    /// otherwise); results that large would not fit in memory anyway. A
    /// negative exponent signals [`ErrorCode::NegativeExponent`]. The zero
    /// exponent yields 1 for every base, including `0^0 == 1`.
    ///
    /// [`ErrorCode::Overflow`]: crate::ErrorCode::Overflow
    /// [`ErrorCode::NegativeExponent`]: crate::ErrorCode::NegativeExponent
    pub fn pow(&self, exponent: &BigInt) -> Result<BigInt> {
        // Width before sign: an exponent outside i64 is an overflow even
        // when it is also negative.
        let exp = exponent.to_i64()?;
        if exp < 0 {
            return Err(Error::new(ErrorCode::NegativeExponent));
        }
        let mut e = exp as u64;
        if e == 0 {
            return Ok(BigInt::from(1u8));
        }

        let mut result = BigInt::from(1u8);
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }

    /// `(self ^ exponent) mod modulus`, reducing after every multiplication
    /// so intermediates never grow past `modulus^2`.
    ///
    /// The modulus must be non-zero ([`ErrorCode::DivideByZero`]) and the
    /// exponent non-negative ([`ErrorCode::NegativeExponent`]). The result
    /// follows the floor-modulo convention of [`mod_floor`], so a negative
    /// modulus produces a result in `(modulus, 0]`.
    ///
    /// [`mod_floor`]: BigInt::mod_floor
    /// [`ErrorCode::DivideByZero`]: crate::ErrorCode::DivideByZero
    /// [`ErrorCode::NegativeExponent`]: crate::ErrorCode::NegativeExponent
    pub fn pow_mod(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_zero() {
            return Err(Error::new(ErrorCode::DivideByZero));
        }
        let exp = exponent.to_i64()?;
        if exp < 0 {
            return Err(Error::new(ErrorCode::NegativeExponent));
        }
        let mut e = exp as u64;

        let mut base = self.mod_floor(modulus)?;
        // Seeding with 1 mod m keeps the unit modulus and negative moduli
        // canonical from the start.
        let mut result = BigInt::from(1u8).mod_floor(modulus)?;
        while e > 0 {
            if e & 1 == 1 {
                result = (&result * &base).mod_floor(modulus)?;
            }
            e >>= 1;
            if e > 0 {
                base = (&base * &base).mod_floor(modulus)?;
            }
        }
        Ok(result)
    }
}
