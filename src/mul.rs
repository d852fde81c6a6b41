//! Schoolbook multiplication.

use alloc::vec;
use core::ops::{Mul, MulAssign};

use crate::add::forward_binop;
use crate::bigint::{BigInt, BASE};

/// O(len(a) * len(b)) limb products, accumulated at `out[i + j]` with the
/// carry run out past the top of the partial product.
fn mul_signed(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::new();
    }

    let n = a.limbs.len();
    let m = b.limbs.len();
    let mut out = BigInt::new();
    out.limbs = vec![0u32; n + m];

    for i in 0..n {
        let ai = u64::from(a.limbs[i]);
        let mut carry: u64 = 0;
        for j in 0..m {
            let cur = u64::from(out.limbs[i + j]) + ai * u64::from(b.limbs[j]) + carry;
            out.limbs[i + j] = (cur % u64::from(BASE)) as u32;
            carry = cur / u64::from(BASE);
        }
        let mut k = i + m;
        while carry > 0 {
            let cur = u64::from(out.limbs[k]) + carry;
            out.limbs[k] = (cur % u64::from(BASE)) as u32;
            carry = cur / u64::from(BASE);
            k += 1;
        }
    }

    out.sign = a.sign.product(b.sign);
    out.normalize();
    out
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        mul_signed(self, other)
    }
}

forward_binop!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}
