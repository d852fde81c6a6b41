/// Construct a [`BigInt`](crate::BigInt) from an integer literal.
///
/// The literal may be of any magnitude and may carry a sign, underscore
/// separators, or a primitive-width suffix:
///
/// ```
/// use longint::bigint;
///
/// let population = bigint!(8_100_000_000u64);
/// let debt = bigint!(-34_600_000_000_000);
/// # let _ = population;
/// # let _ = debt;
/// ```
///
/// Literals wider than 128 bits are written as strings:
///
/// ```
/// use longint::bigint;
///
/// let googol = bigint!("10000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000");
/// assert_eq!(googol.digit_count(), 101);
/// ```
///
/// # Panics
///
/// Panics if the tokens do not form a valid decimal integer literal.
#[macro_export]
macro_rules! bigint {
    (- $value:literal) => {
        -$crate::__bigint_from_literal(stringify!($value))
    };
    ($value:literal) => {
        $crate::__bigint_from_literal(stringify!($value))
    };
}

// Not public API: the expansion target of `bigint!`. Strips the decorations
// integer literals allow (underscore separators, a width suffix, the quotes
// of a string literal) before handing the digits to the parser.
#[doc(hidden)]
pub fn __bigint_from_literal(literal: &str) -> crate::BigInt {
    use alloc::string::String;

    const SUFFIXES: &[&str] = &[
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    ];

    let mut cleaned: String = literal
        .chars()
        .filter(|&c| c != '_' && c != '"')
        .collect();
    if let Some(pos) = cleaned.find(|c: char| c.is_ascii_alphabetic()) {
        if SUFFIXES.contains(&&cleaned[pos..]) {
            cleaned.truncate(pos);
        }
    }
    match crate::BigInt::from_decimal_str(&cleaned) {
        Ok(value) => value,
        Err(err) => panic!("bigint!({}): {}", literal, err),
    }
}
