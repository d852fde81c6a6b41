//! Arbitrary-precision signed integer arithmetic.
//!
//! This crate is the integer engine behind an ahead-of-time translator for a
//! language with unbounded integers: generated native code calls into it
//! wherever machine words are not enough. It provides a single type,
//! [`BigInt`], holding a sign and a little-endian sequence of base-10<sup>9</sup>
//! digit limbs, with addition, subtraction, schoolbook multiplication, long
//! division, and exponentiation on top.
//!
//! # Floor division
//!
//! The division family follows the *floor* convention rather than the
//! truncating one native to most hardware: quotients round toward negative
//! infinity and the remainder, when non-zero, has the sign of the divisor.
//!
//! ```
//! use longint::BigInt;
//!
//! let (q, r) = BigInt::from(-7).divmod(&BigInt::from(2)).unwrap();
//! assert_eq!(q, BigInt::from(-4));
//! assert_eq!(r, BigInt::from(1));
//!
//! let (q, r) = BigInt::from(7).divmod(&BigInt::from(-2)).unwrap();
//! assert_eq!(q, BigInt::from(-4));
//! assert_eq!(r, BigInt::from(-1));
//! ```
//!
//! # Parsing and printing
//!
//! The external representation is plain decimal text: an optional sign and
//! digits, no grouping, no exponents. Parsing and printing round-trip every
//! canonical literal exactly.
//!
//! ```
//! use longint::{bigint, BigInt};
//!
//! let n: BigInt = "-000123".parse().unwrap();
//! assert_eq!(n.to_string(), "-123");
//!
//! let big = bigint!(2).pow(&bigint!(100)).unwrap();
//! assert_eq!(big.to_string(), "1267650600228229401496703205376");
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`]; nothing is clamped or
//! truncated silently. [`Error::classify`] sorts failures into parse,
//! arithmetic, and range [categories](Category). Memory exhaustion is the
//! one condition not reported this way: buffer growth that cannot be
//! satisfied aborts through the global allocator, since a partially grown
//! value has no consistent prior state to roll back to.
//!
//! # No-std support
//!
//! Disable the default `std` feature for `no_std` use; only the io-sink
//! helpers [`to_writer`] and [`to_writer_line`] are lost. The `serde`
//! feature adds `Serialize`/`Deserialize` impls that pass values as decimal
//! strings.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

mod add;
mod bigint;
mod cmp;
mod div;
mod error;
mod fmt;
pub mod math;
mod mul;
mod parse;
mod pow;
#[cfg(feature = "serde")]
mod serde_impl;

pub use crate::bigint::{BigInt, Sign};
pub use crate::error::{Category, Error, ErrorCode, Result};
#[cfg(feature = "std")]
pub use crate::fmt::{to_writer, to_writer_line};

#[doc(hidden)]
pub use crate::macros::__bigint_from_literal;
