//! The `BigInt` type and its representation invariants.

use alloc::vec::Vec;
use core::ops::Neg;

use crate::error::{Error, ErrorCode, Result};

/// Base of the limb representation: one decimal limb holds nine digits.
pub(crate) const BASE: u32 = 1_000_000_000;

/// Number of decimal digits carried by one limb.
pub(crate) const BASE_DIGITS: usize = 9;

/// Sign of a [`BigInt`].
///
/// The variant order gives `Minus < Zero < Plus`, which is what the total
/// order over signed values needs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Sign {
    /// The value is negative.
    Minus,
    /// The value is exactly zero.
    Zero,
    /// The value is positive.
    Plus,
}

impl Sign {
    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Zero => Sign::Zero,
            Sign::Plus => Sign::Minus,
        }
    }

    /// Sign of a product of two values with these signs.
    pub(crate) fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Plus, Sign::Plus) | (Sign::Minus, Sign::Minus) => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// The value is stored in sign-magnitude form: a [`Sign`] plus a sequence of
/// base-10<sup>9</sup> limbs in little-endian order (index 0 is least
/// significant). Two invariants hold at every public API boundary:
///
/// - the most significant limb is never zero, so the zero value has an empty
///   limb sequence;
/// - the sign is [`Sign::Zero`] if and only if the limb sequence is empty,
///   so there is no negative zero.
///
/// ```
/// use longint::BigInt;
///
/// let a: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let b = BigInt::from(-987654321i64);
/// assert_eq!((&a * &b).to_string(), "-121932631124828532112482853211126352690");
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<u32>,
}

impl BigInt {
    /// Creates a new `BigInt` with value zero and no allocated storage.
    pub fn new() -> BigInt {
        BigInt {
            sign: Sign::Zero,
            limbs: Vec::new(),
        }
    }

    /// Returns true if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Returns true if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Returns true if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    /// Returns the sign of the value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: if self.sign == Sign::Minus {
                Sign::Plus
            } else {
                self.sign
            },
            limbs: self.limbs.clone(),
        }
    }

    /// Number of digits in the decimal representation, not counting the
    /// sign. Zero counts as one digit.
    pub fn digit_count(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        let mut digits = (self.limbs.len() - 1) * BASE_DIGITS;
        let mut head = self.limbs[self.limbs.len() - 1];
        while head > 0 {
            digits += 1;
            head /= 10;
        }
        digits
    }

    /// Converts to an `i64`, signalling [`ErrorCode::Overflow`] when the
    /// magnitude does not fit. The full two's-complement range is accepted,
    /// including `i64::MIN`.
    pub fn to_i64(&self) -> Result<i64> {
        if self.is_zero() {
            return Ok(0);
        }
        let mut acc: u64 = 0;
        for &limb in self.limbs.iter().rev() {
            acc = acc
                .checked_mul(u64::from(BASE))
                .and_then(|acc| acc.checked_add(u64::from(limb)))
                .ok_or_else(|| Error::new(ErrorCode::Overflow))?;
        }
        match self.sign {
            Sign::Plus if acc <= i64::MAX as u64 => Ok(acc as i64),
            Sign::Minus if acc < i64::MAX as u64 + 1 => Ok(-(acc as i64)),
            Sign::Minus if acc == i64::MAX as u64 + 1 => Ok(i64::MIN),
            _ => Err(Error::new(ErrorCode::Overflow)),
        }
    }

    /// Drops trailing (most significant) zero limbs and canonicalizes the
    /// sign of zero. Every mutating operation ends with this.
    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.sign = Sign::Zero;
        }
    }

    pub(crate) fn set_zero(&mut self) {
        self.sign = Sign::Zero;
        self.limbs.clear();
    }

    /// Multiplies the magnitude in place by a small factor, ignoring the
    /// sign. Used by the decimal parser and the division engine.
    pub(crate) fn mul_small(&mut self, factor: u32) {
        if self.limbs.is_empty() {
            return;
        }
        let mut carry: u64 = 0;
        for limb in &mut self.limbs {
            let cur = u64::from(*limb) * u64::from(factor) + carry;
            *limb = (cur % u64::from(BASE)) as u32;
            carry = cur / u64::from(BASE);
        }
        while carry > 0 {
            self.limbs.push((carry % u64::from(BASE)) as u32);
            carry /= u64::from(BASE);
        }
        self.normalize();
    }

    /// Adds a small value to the magnitude in place, ignoring the sign.
    pub(crate) fn add_small(&mut self, addend: u32) {
        let mut carry = u64::from(addend);
        let mut i = 0;
        while carry > 0 && i < self.limbs.len() {
            let cur = u64::from(self.limbs[i]) + carry;
            self.limbs[i] = (cur % u64::from(BASE)) as u32;
            carry = cur / u64::from(BASE);
            i += 1;
        }
        while carry > 0 {
            self.limbs.push((carry % u64::from(BASE)) as u32);
            carry /= u64::from(BASE);
        }
    }

    /// Builds a value from a raw magnitude and sign. The sign is forced to
    /// `Zero` when the magnitude is zero.
    pub(crate) fn from_magnitude(magnitude: u64, sign: Sign) -> BigInt {
        let mut value = BigInt::new();
        let mut rest = magnitude;
        while rest > 0 {
            value.limbs.push((rest % u64::from(BASE)) as u32);
            rest /= u64::from(BASE);
        }
        value.sign = if value.limbs.is_empty() { Sign::Zero } else { sign };
        value
    }
}

impl Default for BigInt {
    /// The zero value.
    fn default() -> BigInt {
        BigInt::new()
    }
}

impl Clone for BigInt {
    fn clone(&self) -> BigInt {
        BigInt {
            sign: self.sign,
            limbs: self.limbs.clone(),
        }
    }

    /// Copies `source` into `self`, reusing the existing limb buffer when it
    /// has enough capacity.
    fn clone_from(&mut self, source: &BigInt) {
        self.sign = source.sign;
        self.limbs.clear();
        self.limbs.extend_from_slice(&source.limbs);
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = self.sign.flip();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
                    BigInt::from_magnitude(i64::from(value).unsigned_abs(), sign)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    BigInt::from_magnitude(u64::from(value), Sign::Plus)
                }
            }
        )*
    };
}

impl_from_signed!(i8 i16 i32 i64);
impl_from_unsigned!(u8 u16 u32 u64);
