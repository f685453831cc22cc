//! Exact base-10 numbers returned by [`Scanner::scan_decimal`](crate::Scanner::scan_decimal).

use std::fmt;

/// A base-10 value `(-1)^negative × mantissa × 10^exponent`.
///
/// Always normalized: the mantissa carries no trailing zeros, and zero is
/// stored as `0 × 10^0` with a positive sign. Two `Decimal`s are equal iff
/// they denote the same number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: u128,
    exponent: i8,
    negative: bool,
}

impl Decimal {
    /// Maximum number of significant digits.
    pub const MAX_DIGITS: usize = 38;

    pub const ZERO: Decimal = Decimal {
        mantissa: 0,
        exponent: 0,
        negative: false,
    };

    /// Build a normalized value. Returns `None` if the mantissa has more than
    /// [`MAX_DIGITS`](Self::MAX_DIGITS) significant digits or the normalized
    /// exponent falls outside `-128..=127`.
    pub fn new(mantissa: u128, exponent: i32, negative: bool) -> Option<Self> {
        if mantissa == 0 {
            return Some(Self::ZERO);
        }
        let mut mantissa = mantissa;
        let mut exponent = i64::from(exponent);
        while mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        if digit_count(mantissa) > Self::MAX_DIGITS {
            return None;
        }
        Some(Self {
            mantissa,
            exponent: i8::try_from(exponent).ok()?,
            negative,
        })
    }

    /// Build from literal pieces: `integer` and `fraction` are ASCII digit
    /// strings, `exponent` is the explicit power of ten.
    pub(crate) fn from_digits(
        negative: bool,
        integer: &str,
        fraction: &str,
        exponent: i64,
    ) -> Option<Self> {
        let mut digits = String::with_capacity(integer.len() + fraction.len());
        digits.push_str(integer);
        digits.push_str(fraction);

        let significant = digits.trim_start_matches('0');
        let trimmed = significant.trim_end_matches('0');
        if trimmed.is_empty() {
            return Some(Self::ZERO);
        }
        if trimmed.len() > Self::MAX_DIGITS {
            return None;
        }

        let trailing_zeros = i64::try_from(significant.len() - trimmed.len()).ok()?;
        let fraction_len = i64::try_from(fraction.len()).ok()?;
        let exponent = exponent - fraction_len + trailing_zeros;

        let mut mantissa: u128 = 0;
        for b in trimmed.bytes() {
            mantissa = mantissa.checked_mul(10)?.checked_add(u128::from(b - b'0'))?;
        }
        Some(Self {
            mantissa,
            exponent: i8::try_from(exponent).ok()?,
            negative,
        })
    }

    pub fn mantissa(&self) -> u128 {
        self.mantissa
    }

    pub fn exponent(&self) -> i32 {
        i32::from(self.exponent)
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Plain positional notation, never scientific: `-12.5`, `1200`, `0.003`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = self.mantissa.to_string();
        let Ok(scale) = usize::try_from(-i32::from(self.exponent)) else {
            // Non-negative exponent: pad with zeros.
            f.write_str(&digits)?;
            for _ in 0..self.exponent {
                f.write_str("0")?;
            }
            return Ok(());
        };
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        } else {
            write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}

fn digit_count(mut n: u128) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
