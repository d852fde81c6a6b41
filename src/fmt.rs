//! Decimal formatting: `Display`, `Debug`, and io sinks.

use core::fmt::{self, Debug, Display};

use crate::bigint::{BigInt, Sign, BASE_DIGITS};

const ZEROS: &str = "00000000";

impl Display for BigInt {
    /// The canonical decimal form: optional `-`, no leading zeros, no digit
    /// grouping. The most significant limb prints unpadded; every interior
    /// limb is zero-padded to the limb's full nine digits.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.sign == Sign::Minus {
            f.write_str("-")?;
        }

        let mut buf = itoa::Buffer::new();
        let head = self.limbs.len() - 1;
        f.write_str(buf.format(self.limbs[head]))?;
        for &limb in self.limbs[..head].iter().rev() {
            let digits = buf.format(limb);
            f.write_str(&ZEROS[..BASE_DIGITS - digits.len()])?;
            f.write_str(digits)?;
        }
        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(feature = "std")]
mod io_sinks {
    use std::io;

    use super::ZEROS;
    use crate::bigint::{BigInt, Sign, BASE_DIGITS};

    /// Writes the decimal representation of `value` into the IO stream.
    pub fn to_writer<W>(mut writer: W, value: &BigInt) -> io::Result<()>
    where
        W: io::Write,
    {
        if value.is_zero() {
            return writer.write_all(b"0");
        }
        if value.sign == Sign::Minus {
            writer.write_all(b"-")?;
        }

        let mut buf = itoa::Buffer::new();
        let head = value.limbs.len() - 1;
        writer.write_all(buf.format(value.limbs[head]).as_bytes())?;
        for &limb in value.limbs[..head].iter().rev() {
            let digits = buf.format(limb);
            writer.write_all(&ZEROS.as_bytes()[..BASE_DIGITS - digits.len()])?;
            writer.write_all(digits.as_bytes())?;
        }
        Ok(())
    }

    /// Writes the decimal representation of `value` followed by a newline,
    /// matching the default print behavior of the generated programs this
    /// engine backs.
    pub fn to_writer_line<W>(mut writer: W, value: &BigInt) -> io::Result<()>
    where
        W: io::Write,
    {
        to_writer(&mut writer, value)?;
        writer.write_all(b"\n")
    }
}

#[cfg(feature = "std")]
pub use self::io_sinks::{to_writer, to_writer_line};
