//! Total order over signed values, built from an unsigned-magnitude
//! comparison.

use core::cmp::Ordering;

use crate::bigint::{BigInt, Sign};

impl BigInt {
    /// Compares absolute values, ignoring the signs.
    ///
    /// A shorter limb sequence is smaller; equal-length sequences are
    /// compared from the most significant limb down.
    pub fn cmp_magnitude(&self, other: &BigInt) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Plus => self.cmp_magnitude(other),
                Sign::Minus => self.cmp_magnitude(other).reverse(),
            },
            unequal => unequal,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
