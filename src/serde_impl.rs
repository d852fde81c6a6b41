//! `Serialize` and `Deserialize` through the canonical decimal string.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    /// Accepts the canonical decimal string, or a native integer for
    /// formats that distinguish them.
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal integer string")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                BigInt::from_decimal_str(value).map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
