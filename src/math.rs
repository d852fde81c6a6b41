//! Auxiliary integer math.
//!
//! Fixed-width helpers keep the saturating contracts generated code relies
//! on instead of signalling errors: overflow saturates to `i64::MAX`, a
//! negative exponent yields 0, a negative square root yields -1.

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Absolute value. `abs(i64::MIN)` has no representation; the engine's
/// contract pins it to `i64::MAX` rather than wrapping.
pub fn abs(x: i64) -> i64 {
    if x == i64::MIN {
        return i64::MAX;
    }
    x.abs()
}

/// The smaller of two values.
pub fn min(a: i64, b: i64) -> i64 {
    if a < b {
        a
    } else {
        b
    }
}

/// The larger of two values.
pub fn max(a: i64, b: i64) -> i64 {
    if a > b {
        a
    } else {
        b
    }
}

/// Greatest common divisor by the Euclidean algorithm, over absolute
/// values. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = abs(a);
    let mut b = abs(b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple over absolute values. Zero if either operand is
/// zero; saturates to `i64::MAX` on overflow.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let g = gcd(a, b);
    // (|a| / gcd) * |b| keeps the intermediate as small as possible.
    match (abs(a) / g).checked_mul(abs(b)) {
        Some(v) => v,
        None => i64::MAX,
    }
}

/// Fixed-width exponentiation by squaring.
///
/// A negative exponent yields 0 (integer powers only); overflow saturates
/// to `i64::MAX`.
pub fn pow(base: i64, exp: i64) -> i64 {
    if exp < 0 {
        return 0;
    }
    if exp == 0 {
        return 1;
    }
    if base == 0 {
        return 0;
    }
    if base == 1 {
        return 1;
    }

    let mut result: i64 = 1;
    let mut b = base;
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = match result.checked_mul(b) {
                Some(v) => v,
                None => return i64::MAX,
            };
        }
        e >>= 1;
        if e > 0 {
            b = match b.checked_mul(b) {
                Some(v) => v,
                None => return i64::MAX,
            };
        }
    }
    result
}

/// Floor of the square root, by binary search. Negative input yields the
/// sentinel -1.
pub fn sqrt(x: i64) -> i64 {
    if x < 0 {
        return -1;
    }
    if x <= 1 {
        return x;
    }

    let mut low: i64 = 1;
    let mut high: i64 = x;
    let mut result: i64 = 0;
    while low <= high {
        let mid = low + (high - low) / 2;
        let div = x / mid;
        if div == mid {
            return mid;
        } else if div > mid {
            low = mid + 1;
            result = mid;
        } else {
            high = mid - 1;
        }
    }
    result
}

/// Deterministic trial-division primality test.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let bound = sqrt(n);
    let mut i = 3;
    while i <= bound {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Next prime after `n` (2 for any `n <= 2`); 0 if the search overflows
/// the fixed-width range.
pub fn next_prime(n: i64) -> i64 {
    if n <= 2 {
        return 2;
    }
    let step = if n % 2 == 0 { 1 } else { 2 };
    let mut candidate = match n.checked_add(step) {
        Some(v) => v,
        None => return 0,
    };
    loop {
        if is_prime(candidate) {
            return candidate;
        }
        candidate = match candidate.checked_add(2) {
            Some(v) => v,
            None => return 0,
        };
    }
}

/// `n!` as a [`BigInt`]. Errors on negative `n`.
pub fn factorial(n: i64) -> Result<BigInt> {
    if n < 0 {
        return Err(Error::message("factorial() not defined for negative values"));
    }
    let mut result = BigInt::from(1u8);
    let mut i: i64 = 2;
    while i <= n {
        result = &result * &BigInt::from(i);
        i += 1;
    }
    Ok(result)
}

/// Binomial coefficient `C(n, k)` as a [`BigInt`]. Requires `n >= 0` and
/// `0 <= k <= n`.
pub fn binomial(n: i64, k: i64) -> Result<BigInt> {
    if n < 0 {
        return Err(Error::message("binomial() requires n >= 0"));
    }
    if k < 0 || k > n {
        return Err(Error::message("binomial() requires 0 <= k <= n"));
    }
    // C(n, k) == C(n, n - k); iterate over the smaller side.
    let k = k.min(n - k);

    let mut result = BigInt::from(1u8);
    for i in 1..=k {
        // Multiply before dividing; each prefix product is divisible by i!.
        result = &result * &BigInt::from(n - k + i);
        result = result.floordiv(&BigInt::from(i))?;
    }
    Ok(result)
}

impl BigInt {
    /// Floor of the square root, by binary search over [`floordiv`].
    /// Errors on negative input.
    ///
    /// [`floordiv`]: BigInt::floordiv
    pub fn isqrt(&self) -> Result<BigInt> {
        if self.is_negative() {
            return Err(Error::message("isqrt() not defined for negative values"));
        }
        if self.is_zero() {
            return Ok(BigInt::new());
        }

        let one = BigInt::from(1u8);
        let two = BigInt::from(2u8);
        let mut low = one.clone();
        let mut high = self.clone();
        let mut result = BigInt::new();
        while low <= high {
            let mid = &low + &(&high - &low).floordiv(&two)?;
            let div = self.floordiv(&mid)?;
            match div.cmp(&mid) {
                core::cmp::Ordering::Equal => return Ok(mid),
                core::cmp::Ordering::Greater => {
                    result = mid.clone();
                    low = &mid + &one;
                }
                core::cmp::Ordering::Less => {
                    high = &mid - &one;
                }
            }
        }
        Ok(result)
    }
}
