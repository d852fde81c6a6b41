use std::cmp::Ordering;

use longint::{bigint, BigInt, Category, ErrorCode, Sign};

fn big(s: &str) -> BigInt {
    BigInt::from_decimal_str(s).unwrap()
}

// i64 reference for the floor convention: quotient toward negative
// infinity, remainder with the divisor's sign.
fn floor_divmod(a: i64, b: i64) -> (i64, i64) {
    let mut q = a / b;
    let mut r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q -= 1;
        r += b;
    }
    (q, r)
}

#[test]
fn parse_canonical_round_trip() {
    for s in [
        "0",
        "1",
        "-1",
        "7",
        "999999999",
        "1000000000",
        "1000000001",
        "123456789012345678901234567890",
        "-123456789012345678901234567890",
        "1000000000000000000",
        "-999999999999999999",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
}

#[test]
fn parse_noncanonical_literals() {
    assert_eq!(big("-000123").to_string(), "-123");
    assert_eq!(big("+7").to_string(), "7");
    assert_eq!(big("007").to_string(), "7");
    assert_eq!(big(" 12 ").to_string(), "12");
    assert_eq!(big("\t42\n").to_string(), "42");
    assert_eq!(big("- 5").to_string(), "-5");
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(big("+000").to_string(), "0");
    assert_eq!(big("00000000000000000000000000000000").to_string(), "0");
}

#[test]
fn parse_negative_zero_is_canonical_zero() {
    let zero = big("-0000");
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), Sign::Zero);
    assert_eq!(zero, BigInt::new());
}

#[test]
fn parse_errors() {
    for s in ["", "abc", "   ", "+", "-", "- ", "--1", "12x", "12 34", "1.5", "0x10", "٣"] {
        let err = BigInt::from_decimal_str(s).unwrap_err();
        assert!(err.is_parse(), "{:?} should be a parse error", s);
        assert_eq!(err.classify(), Category::Parse);
        match err.code() {
            ErrorCode::InvalidLiteral(text) => assert_eq!(&**text, s),
            other => panic!("unexpected code {:?}", other),
        }
    }
}

#[test]
fn parse_via_from_str() {
    let n: BigInt = "123".parse().unwrap();
    assert_eq!(n, BigInt::from(123));
    assert!("1e10".parse::<BigInt>().is_err());
}

#[test]
fn display_pads_interior_limbs() {
    // One zero limb between two non-zero ones must keep its full width.
    let n = &big("1000000000000000000") + &BigInt::from(42);
    assert_eq!(n.to_string(), "1000000000000000042");
    assert_eq!(big("1000000000").to_string(), "1000000000");
}

#[test]
fn debug_representation() {
    assert_eq!(format!("{:?}", BigInt::from(-123)), "BigInt(-123)");
    assert_eq!(format!("{:?}", BigInt::new()), "BigInt(0)");
}

#[test]
fn from_fixed_width() {
    assert_eq!(BigInt::from(0).to_string(), "0");
    assert_eq!(BigInt::from(i64::MAX).to_string(), "9223372036854775807");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(-1i8).to_string(), "-1");
    assert_eq!(BigInt::from(65535u16).to_string(), "65535");
}

#[test]
fn to_fixed_width_checked() {
    for v in [0i64, 1, -1, 999_999_999, 1_000_000_000, i64::MAX, i64::MIN] {
        assert_eq!(BigInt::from(v).to_i64().unwrap(), v);
    }

    let too_big = big("9223372036854775808");
    let err = too_big.to_i64().unwrap_err();
    assert!(err.is_range());
    assert_eq!(*err.code(), ErrorCode::Overflow);

    assert_eq!(big("-9223372036854775808").to_i64().unwrap(), i64::MIN);
    assert!(big("-9223372036854775809").to_i64().is_err());
    assert!(big("123456789012345678901234567890").to_i64().is_err());
}

#[test]
fn comparisons() {
    let values = [
        big("-123456789012345678901234567890"),
        big("-1000000000"),
        big("-1"),
        big("0"),
        big("1"),
        big("999999999"),
        big("123456789012345678901234567890"),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(b.cmp(a), j.cmp(&i), "antisymmetry {} vs {}", a, b);
        }
    }
    assert_eq!(big("0").cmp(&big("-0")), Ordering::Equal);
    assert!(big("0").is_zero());
    assert!(!big("1").is_zero());
    assert!(big("-5").is_negative());
    assert!(big("5").is_positive());
}

#[test]
fn add_sub_small_sweep() {
    for a in -60i64..=60 {
        for b in -60i64..=60 {
            let ba = BigInt::from(a);
            let bb = BigInt::from(b);
            assert_eq!(&ba + &bb, BigInt::from(a + b), "{} + {}", a, b);
            assert_eq!(&ba - &bb, BigInt::from(a - b), "{} - {}", a, b);
        }
    }
}

#[test]
fn add_carry_chain() {
    let n = &big("999999999999999999") + &BigInt::from(1);
    assert_eq!(n.to_string(), "1000000000000000000");

    let n = &big("1000000000000000000") - &BigInt::from(1);
    assert_eq!(n.to_string(), "999999999999999999");
}

#[test]
fn add_opposite_magnitudes_cancel_exactly() {
    let a = big("123456789012345678901234567890");
    let sum = &a + &(-&a);
    assert!(sum.is_zero());
    assert_eq!(sum.sign(), Sign::Zero);
}

#[test]
fn assign_operators() {
    let mut n = BigInt::from(10);
    n += &BigInt::from(5);
    n -= &BigInt::from(3);
    n *= &BigInt::from(4);
    assert_eq!(n, BigInt::from(48));
}

#[test]
fn mul_small_sweep() {
    for a in -40i64..=40 {
        for b in -40i64..=40 {
            assert_eq!(
                BigInt::from(a) * BigInt::from(b),
                BigInt::from(a * b),
                "{} * {}",
                a,
                b
            );
        }
    }
}

#[test]
fn mul_multi_limb() {
    let a = big("123456789012345678901234567890");
    let b = BigInt::from(-987654321i64);
    assert_eq!((&a * &b).to_string(), "-121932631124828532112482853211126352690");

    assert!((&a * &BigInt::new()).is_zero());
    assert!((&BigInt::new() * &a).is_zero());
}

#[test]
fn divmod_small_sweep_matches_floor_oracle() {
    for a in -50i64..=50 {
        for b in -50i64..=50 {
            if b == 0 {
                continue;
            }
            let (q, r) = BigInt::from(a).divmod(&BigInt::from(b)).unwrap();
            let (eq, er) = floor_divmod(a, b);
            assert_eq!(q.to_i64().unwrap(), eq, "quotient of {} / {}", a, b);
            assert_eq!(r.to_i64().unwrap(), er, "remainder of {} / {}", a, b);
        }
    }
}

#[test]
fn divmod_floor_scenarios() {
    let (q, r) = BigInt::from(-7).divmod(&BigInt::from(2)).unwrap();
    assert_eq!((q, r), (BigInt::from(-4), BigInt::from(1)));

    let (q, r) = BigInt::from(7).divmod(&BigInt::from(-2)).unwrap();
    assert_eq!((q, r), (BigInt::from(-4), BigInt::from(-1)));

    let (q, r) = BigInt::from(7).divmod(&BigInt::from(2)).unwrap();
    assert_eq!((q, r), (BigInt::from(3), BigInt::from(1)));

    let (q, r) = BigInt::from(-7).divmod(&BigInt::from(-2)).unwrap();
    assert_eq!((q, r), (BigInt::from(3), BigInt::from(-1)));
}

#[test]
fn divmod_dividend_smaller_than_divisor() {
    let (q, r) = BigInt::from(3).divmod(&BigInt::from(5)).unwrap();
    assert_eq!((q, r), (BigInt::from(0), BigInt::from(3)));

    let (q, r) = BigInt::from(-3).divmod(&BigInt::from(5)).unwrap();
    assert_eq!((q, r), (BigInt::from(-1), BigInt::from(2)));

    let (q, r) = BigInt::from(3).divmod(&BigInt::from(-5)).unwrap();
    assert_eq!((q, r), (BigInt::from(-1), BigInt::from(-2)));

    let (q, r) = BigInt::from(-3).divmod(&BigInt::from(-5)).unwrap();
    assert_eq!((q, r), (BigInt::from(0), BigInt::from(-3)));
}

#[test]
fn divmod_exact_division_keeps_zero_remainder() {
    let (q, r) = BigInt::from(-6).divmod(&BigInt::from(3)).unwrap();
    assert_eq!(q, BigInt::from(-2));
    assert!(r.is_zero());
    assert_eq!(r.sign(), Sign::Zero);
}

#[test]
fn divmod_multi_limb() {
    let two_pow_100 = bigint!(2).pow(&bigint!(100)).unwrap();
    let p = big("1000000007");

    let (q, r) = two_pow_100.divmod(&p).unwrap();
    assert_eq!(q.to_string(), "1267650591354675262013");
    assert_eq!(r.to_string(), "976371285");

    let (q, r) = (-&two_pow_100).divmod(&p).unwrap();
    assert_eq!(q.to_string(), "-1267650591354675262014");
    assert_eq!(r.to_string(), "23628722");

    let a = big("123456789012345678901234567890123456789");
    let b = big("-987654321987654321");
    let (q, r) = a.divmod(&b).unwrap();
    assert_eq!(q.to_string(), "-124999998748437501154");
    assert_eq!(r.to_string(), "-844908557067129645");
}

#[test]
fn divmod_identity_and_remainder_bounds() {
    let samples = [
        big("0"),
        big("1"),
        big("-1"),
        big("999999999999999999999999"),
        big("-123456789012345678901234567890"),
        big("1000000000000000000000000000001"),
    ];
    let divisors = [
        big("1"),
        big("-1"),
        big("2"),
        big("-3"),
        big("1000000007"),
        big("-999999999999999989"),
        big("123456789012345678901"),
    ];
    for a in &samples {
        for b in &divisors {
            let (q, r) = a.divmod(b).unwrap();
            assert_eq!(&(&q * b) + &r, *a, "identity for {} / {}", a, b);
            if !r.is_zero() {
                assert_eq!(r.sign(), b.sign(), "remainder sign for {} / {}", a, b);
            }
            assert_eq!(r.abs().cmp(&b.abs()), Ordering::Less, "|r| < |b| for {} / {}", a, b);
            assert_eq!(a.floordiv(b).unwrap(), q);
            assert_eq!(a.mod_floor(b).unwrap(), r);
        }
    }
}

#[test]
fn divide_by_zero() {
    for a in [big("0"), big("42"), big("-123456789012345678901234567890")] {
        let err = a.divmod(&BigInt::new()).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::DivideByZero);
        assert!(err.is_arithmetic());
        assert_eq!(err.to_string(), "integer division or modulo by zero");
        assert!(a.floordiv(&BigInt::new()).is_err());
        assert!(a.mod_floor(&BigInt::new()).is_err());
    }
}

#[test]
fn pow_zero_exponent_is_one() {
    for base in [big("-5"), big("0"), big("7"), big("123456789012345678901234567890")] {
        assert_eq!(base.pow(&BigInt::new()).unwrap(), BigInt::from(1));
    }
}

#[test]
fn pow_values() {
    let two_pow_100 = bigint!(2).pow(&bigint!(100)).unwrap();
    assert_eq!(two_pow_100.to_string(), "1267650600228229401496703205376");

    assert_eq!(bigint!(-3).pow(&bigint!(3)).unwrap(), BigInt::from(-27));
    assert_eq!(bigint!(-2).pow(&bigint!(10)).unwrap(), BigInt::from(1024));
    assert_eq!(bigint!(0).pow(&bigint!(5)).unwrap(), BigInt::from(0));
    assert_eq!(bigint!(1).pow(&bigint!(1000000)).unwrap(), BigInt::from(1));
}

#[test]
fn pow_rejects_bad_exponents() {
    let err = bigint!(2).pow(&bigint!(-1)).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NegativeExponent);
    assert!(err.is_arithmetic());

    let huge = bigint!(2).pow(&bigint!(100)).unwrap();
    let err = bigint!(2).pow(&huge).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::Overflow);

    // An exponent below i64::MIN is out of range before it is negative.
    let err = bigint!(2).pow(&-huge).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::Overflow);
}

#[test]
fn pow_mod_matches_pow_then_mod() {
    for a in -10i64..=10 {
        for e in 0i64..=6 {
            for m in -7i64..=7 {
                if m == 0 {
                    continue;
                }
                let base = BigInt::from(a);
                let expected = base
                    .pow(&BigInt::from(e))
                    .unwrap()
                    .mod_floor(&BigInt::from(m))
                    .unwrap();
                let got = base.pow_mod(&BigInt::from(e), &BigInt::from(m)).unwrap();
                assert_eq!(got, expected, "powmod({}, {}, {})", a, e, m);
            }
        }
    }
}

#[test]
fn pow_mod_values() {
    let p = big("1000000007");
    let got = bigint!(3).pow_mod(&bigint!(1000), &p).unwrap();
    assert_eq!(got.to_string(), "56888193");

    // Negative modulus: result lies in (modulus, 0].
    let got = bigint!(-5).pow_mod(&bigint!(117), &bigint!(-97)).unwrap();
    assert_eq!(got, BigInt::from(-77));

    // Unit modulus collapses everything to zero.
    let got = bigint!(12345).pow_mod(&bigint!(0), &bigint!(1)).unwrap();
    assert!(got.is_zero());
}

#[test]
fn pow_mod_rejects_bad_arguments() {
    let err = bigint!(2).pow_mod(&bigint!(3), &BigInt::new()).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivideByZero);

    let err = bigint!(2).pow_mod(&bigint!(-3), &bigint!(7)).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::NegativeExponent);

    let below_min = -bigint!(2).pow(&bigint!(100)).unwrap();
    let err = bigint!(2).pow_mod(&below_min, &bigint!(7)).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::Overflow);

    // The zero-modulus check comes before the exponent checks.
    let err = bigint!(2).pow_mod(&below_min, &BigInt::new()).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivideByZero);
}

#[test]
fn lifecycle() {
    // init: zero with no storage.
    let zero = BigInt::new();
    assert!(zero.is_zero());
    assert_eq!(zero, BigInt::default());

    // copy: clone_from reuses the destination's buffer.
    let src = big("123456789012345678901234567890");
    let mut dst = big("999999999999999999999999999999999999");
    dst.clone_from(&src);
    assert_eq!(dst, src);

    let negated = -&src;
    assert_eq!(negated.to_string(), "-123456789012345678901234567890");
    assert_eq!(-negated, src);
}

#[test]
fn digit_count() {
    assert_eq!(BigInt::new().digit_count(), 1);
    assert_eq!(big("7").digit_count(), 1);
    assert_eq!(big("999999999").digit_count(), 9);
    assert_eq!(big("1000000000").digit_count(), 10);
    assert_eq!(big("-123456789012345678901234567890").digit_count(), 30);
}

#[test]
fn abs_and_sign() {
    assert_eq!(big("-42").abs(), big("42"));
    assert_eq!(big("42").abs(), big("42"));
    assert!(BigInt::new().abs().is_zero());
    assert_eq!(big("-42").sign(), Sign::Minus);
    assert_eq!(big("42").sign(), Sign::Plus);
}

#[test]
fn writer_sinks() {
    let mut out = Vec::new();
    longint::to_writer(&mut out, &big("-123")).unwrap();
    assert_eq!(out, b"-123");

    let mut out = Vec::new();
    longint::to_writer_line(&mut out, &big("1000000000000000042")).unwrap();
    assert_eq!(out, b"1000000000000000042\n");

    let mut out = Vec::new();
    longint::to_writer_line(&mut out, &BigInt::new()).unwrap();
    assert_eq!(out, b"0\n");
}

#[test]
fn bigint_macro() {
    assert_eq!(bigint!(0), BigInt::new());
    assert_eq!(bigint!(-42), BigInt::from(-42));
    assert_eq!(bigint!(8_100_000_000u64), BigInt::from(8_100_000_000u64));
    assert_eq!(
        bigint!("123456789012345678901234567890").to_string(),
        "123456789012345678901234567890"
    );
}

#[test]
fn error_display() {
    let err = BigInt::from_decimal_str("abc").unwrap_err();
    assert_eq!(err.to_string(), "invalid decimal integer literal: \"abc\"");

    let err = big("99999999999999999999").to_i64().unwrap_err();
    assert_eq!(err.to_string(), "value does not fit in a 64-bit integer");

    let err = bigint!(2).pow(&bigint!(-2)).unwrap_err();
    assert_eq!(err.to_string(), "negative exponents are not supported");
}
