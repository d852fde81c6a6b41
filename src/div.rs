//! Floor division and modulo.
//!
//! The quotient is derived one limb at a time: the running remainder takes
//! in the next dividend limb, and the quotient digit is found by binary
//! search over `[0, BASE - 1]` against a trial product of the divisor. This
//! keeps every intermediate within limb-times-limb size and needs no wide
//! division primitive.

use alloc::vec;
use core::cmp::Ordering;

use crate::add::{sub_magnitude, sub_magnitude_in_place};
use crate::bigint::{BigInt, Sign, BASE};
use crate::error::{Error, ErrorCode, Result};

impl BigInt {
    /// Computes quotient and remainder at once, satisfying
    /// `self == q * divisor + r` under the floor convention: `q` rounds
    /// toward negative infinity and `r` is zero or has the divisor's sign.
    ///
    /// This differs from Rust's truncating `/` and `%` whenever the exact
    /// quotient is negative and non-integral:
    ///
    /// ```
    /// use longint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).divmod(&BigInt::from(2)).unwrap();
    /// assert_eq!((q.to_i64().unwrap(), r.to_i64().unwrap()), (-4, 1));
    /// ```
    ///
    /// Signals [`ErrorCode::DivideByZero`] when the divisor is zero.
    ///
    /// [`ErrorCode::DivideByZero`]: crate::ErrorCode::DivideByZero
    pub fn divmod(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::new(ErrorCode::DivideByZero));
        }
        if self.is_zero() {
            return Ok((BigInt::new(), BigInt::new()));
        }

        let (q0, r0) = divmod_magnitude(self, divisor);

        let sign_a = self.sign;
        let sign_b = divisor.sign;

        let (mut q, mut r);
        if r0.is_zero() {
            q = q0;
            if sign_a.product(sign_b) == Sign::Minus {
                q.sign = q.sign.flip();
            }
            r = BigInt::new();
        } else if sign_a != sign_b {
            // Floor correction: the unsigned quotient rounded toward zero,
            // one step short of negative infinity.
            q = -(&q0 + &BigInt::from(1u8));
            r = sub_magnitude(&divisor.abs(), &r0);
        } else {
            q = q0;
            r = r0;
        }

        // The remainder carries the divisor's sign whenever it is non-zero.
        if !r.is_zero() && sign_b == Sign::Minus {
            r.sign = Sign::Minus;
        }

        Ok((q, r))
    }

    /// Floor quotient; the `q` of [`divmod`](BigInt::divmod).
    pub fn floordiv(&self, divisor: &BigInt) -> Result<BigInt> {
        let (q, _) = self.divmod(divisor)?;
        Ok(q)
    }

    /// Floor remainder; the `r` of [`divmod`](BigInt::divmod). Zero or of
    /// the divisor's sign.
    pub fn mod_floor(&self, divisor: &BigInt) -> Result<BigInt> {
        let (_, r) = self.divmod(divisor)?;
        Ok(r)
    }
}

/// Long division over magnitudes: both operands are treated as non-negative
/// and `b` is non-zero. Produces `q`, `r` with `|a| = q * |b| + r` and
/// `0 <= r < |b|`.
fn divmod_magnitude(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    if a.cmp_magnitude(b) == Ordering::Less {
        return (BigInt::new(), a.abs());
    }

    let mut q = BigInt::new();
    q.limbs = vec![0u32; a.limbs.len()];
    q.sign = Sign::Plus;

    let mut r = BigInt::new();
    let mut trial = BigInt::new();

    for i in (0..a.limbs.len()).rev() {
        shift_in_limb(&mut r, a.limbs[i]);

        // Largest digit with digit * |b| <= r. The remainder is always
        // below BASE * |b|, so the digit fits in one limb.
        let mut lo: u32 = 0;
        let mut hi: u32 = BASE - 1;
        let mut digit: u32 = 0;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            trial_product(&mut trial, b, mid);
            if trial.cmp_magnitude(&r) != Ordering::Greater {
                digit = mid;
                lo = mid + 1;
            } else {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }

        if digit != 0 {
            trial_product(&mut trial, b, digit);
            sub_magnitude_in_place(&mut r, &trial);
        }
        q.limbs[i] = digit;
    }

    q.normalize();
    r.normalize();
    (q, r)
}

/// `r = r * BASE + limb`: the next dividend limb becomes the new least
/// significant limb of the running remainder.
fn shift_in_limb(r: &mut BigInt, limb: u32) {
    if r.is_zero() {
        if limb != 0 {
            r.limbs.push(limb);
            r.sign = Sign::Plus;
        }
        return;
    }
    r.limbs.insert(0, limb);
}

/// `trial = |b| * digit`, reusing `trial`'s buffer across search steps.
fn trial_product(trial: &mut BigInt, b: &BigInt, digit: u32) {
    if digit == 0 {
        trial.set_zero();
        return;
    }
    trial.sign = Sign::Plus;
    trial.limbs.clear();
    trial.limbs.extend_from_slice(&b.limbs);
    trial.mul_small(digit);
}
