//! Signed addition and subtraction on top of magnitude add/sub with
//! carry and borrow propagation.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::bigint::{BigInt, Sign, BASE};

/// `|a| + |b|`, signs ignored. The result carries the placeholder sign
/// `Plus`; the caller decides the real one.
pub(crate) fn add_magnitude(a: &BigInt, b: &BigInt) -> BigInt {
    let n = a.limbs.len().max(b.limbs.len());
    let mut out = BigInt::new();
    out.limbs.reserve(n + 1);
    let mut carry: u64 = 0;
    for i in 0..n {
        let av = a.limbs.get(i).copied().unwrap_or(0);
        let bv = b.limbs.get(i).copied().unwrap_or(0);
        let cur = u64::from(av) + u64::from(bv) + carry;
        out.limbs.push((cur % u64::from(BASE)) as u32);
        carry = cur / u64::from(BASE);
    }
    if carry > 0 {
        out.limbs.push(carry as u32);
    }
    out.sign = Sign::Plus;
    out.normalize();
    out
}

/// `|a| - |b|`, requiring `|a| >= |b|`. The caller pre-compares and swaps
/// operands; the result carries the placeholder sign `Plus`.
pub(crate) fn sub_magnitude(a: &BigInt, b: &BigInt) -> BigInt {
    debug_assert!(a.cmp_magnitude(b) != Ordering::Less);
    let mut out = BigInt::new();
    out.limbs.reserve(a.limbs.len());
    let mut borrow: i64 = 0;
    for i in 0..a.limbs.len() {
        let bv = b.limbs.get(i).copied().unwrap_or(0);
        let mut cur = i64::from(a.limbs[i]) - i64::from(bv) - borrow;
        if cur < 0 {
            cur += i64::from(BASE);
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.limbs.push(cur as u32);
    }
    out.sign = Sign::Plus;
    out.normalize();
    out
}

/// In-place `|a| -= |b|`, requiring `|a| >= |b|`. Limbs are consumed least
/// significant first, so reading `a.limbs[i]` before overwriting it keeps
/// the update alias-safe. Used by the division engine on its running
/// remainder.
pub(crate) fn sub_magnitude_in_place(a: &mut BigInt, b: &BigInt) {
    debug_assert!(a.cmp_magnitude(b) != Ordering::Less);
    let mut borrow: i64 = 0;
    for i in 0..a.limbs.len() {
        let bv = b.limbs.get(i).copied().unwrap_or(0);
        let mut cur = i64::from(a.limbs[i]) - i64::from(bv) - borrow;
        if cur < 0 {
            cur += i64::from(BASE);
            borrow = 1;
        } else {
            borrow = 0;
        }
        a.limbs[i] = cur as u32;
    }
    a.normalize();
}

fn add_signed(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    if a.sign == b.sign {
        let mut out = add_magnitude(a, b);
        out.sign = a.sign;
        return out;
    }

    // Different signs: subtract the smaller magnitude from the larger and
    // take the sign of the larger-magnitude operand.
    match a.cmp_magnitude(b) {
        Ordering::Equal => BigInt::new(),
        Ordering::Greater => {
            let mut out = sub_magnitude(a, b);
            if !out.is_zero() {
                out.sign = a.sign;
            }
            out
        }
        Ordering::Less => {
            let mut out = sub_magnitude(b, a);
            if !out.is_zero() {
                out.sign = b.sign;
            }
            out
        }
    }
}

fn sub_signed(a: &BigInt, b: &BigInt) -> BigInt {
    // a - b = a + (-b), with the sign flip applied without copying b's limbs.
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return -b.clone();
    }

    if a.sign != b.sign {
        let mut out = add_magnitude(a, b);
        out.sign = a.sign;
        return out;
    }

    match a.cmp_magnitude(b) {
        Ordering::Equal => BigInt::new(),
        Ordering::Greater => {
            let mut out = sub_magnitude(a, b);
            out.sign = a.sign;
            out
        }
        Ordering::Less => {
            let mut out = sub_magnitude(b, a);
            out.sign = b.sign.flip();
            out
        }
    }
}

// Forward an operator over the owned/borrowed operand combinations to the
// by-reference implementation.
macro_rules! forward_binop {
    (impl $imp:ident for BigInt, $method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(&self, &other)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, other: &BigInt) -> BigInt {
                $imp::$method(&self, other)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, other: BigInt) -> BigInt {
                $imp::$method(self, &other)
            }
        }
    };
}

pub(crate) use forward_binop;

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self, other)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        sub_signed(self, other)
    }
}

forward_binop!(impl Add for BigInt, add);
forward_binop!(impl Sub for BigInt, sub);

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        *self = &*self + other;
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        *self = &*self - other;
    }
}
