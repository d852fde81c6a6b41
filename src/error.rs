//! When arbitrary-precision arithmetic goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when parsing or
/// operating on a [`BigInt`](crate::BigInt).
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `longint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling is required, for example to
    /// distinguish a malformed literal from one that is merely out of range.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Parse` - input text that is not a valid decimal integer
    /// - `Category::Arithmetic` - an operation with no defined result, such
    ///   as division by zero
    /// - `Category::Range` - a value that does not fit in the requested
    ///   fixed-width integer type
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::InvalidLiteral(_) => Category::Parse,
            ErrorCode::DivideByZero
            | ErrorCode::NegativeExponent
            | ErrorCode::Message(_) => Category::Arithmetic,
            ErrorCode::Overflow => Category::Range,
        }
    }

    /// Returns true if this error was caused by input text that is not a
    /// valid decimal integer.
    pub fn is_parse(&self) -> bool {
        self.classify() == Category::Parse
    }

    /// Returns true if this error was caused by an operation whose result is
    /// mathematically undefined or unsupported.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value too large in
    /// magnitude for the requested fixed-width integer type.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }
}

/// Categorizes the cause of a `longint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input text that is not a valid decimal
    /// integer.
    Parse,

    /// The error was caused by an operation whose result is mathematically
    /// undefined or unsupported, such as division by zero or a negative
    /// exponent.
    Arithmetic,

    /// The error was caused by a value whose magnitude does not fit in the
    /// requested fixed-width integer type.
    Range,
}

/// This type describes all possible errors that can occur when parsing or
/// operating on a [`BigInt`](crate::BigInt).
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catchall for domain error messages from the auxiliary math functions.
    Message(Box<str>),

    /// Division or modulo with a divisor of zero, or a modular
    /// exponentiation with a zero modulus.
    DivideByZero,

    /// Input text that is not a valid base-10 integer literal. Carries the
    /// offending input.
    InvalidLiteral(Box<str>),

    /// Value whose magnitude does not fit in a 64-bit integer.
    Overflow,

    /// Exponentiation with a negative exponent, which has no integer result.
    NegativeExponent,
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error { code }
    }

    #[cold]
    pub(crate) fn invalid_literal(text: &str) -> Self {
        Error::new(ErrorCode::InvalidLiteral(text.into()))
    }

    #[cold]
    pub(crate) fn message(msg: &str) -> Self {
        Error::new(ErrorCode::Message(msg.into()))
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::DivideByZero => {
                f.write_str("integer division or modulo by zero")
            }
            ErrorCode::InvalidLiteral(text) => f.write_fmt(format_args!(
                "invalid decimal integer literal: {:?}",
                text
            )),
            ErrorCode::Overflow => {
                f.write_str("value does not fit in a 64-bit integer")
            }
            ErrorCode::NegativeExponent => {
                f.write_str("negative exponents are not supported")
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often end
// up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.code.to_string())
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            ErrorCode::DivideByZero => f.write_str("DivideByZero"),
            ErrorCode::InvalidLiteral(text) => {
                f.debug_tuple("InvalidLiteral").field(text).finish()
            }
            ErrorCode::Overflow => f.write_str("Overflow"),
            ErrorCode::NegativeExponent => f.write_str("NegativeExponent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
