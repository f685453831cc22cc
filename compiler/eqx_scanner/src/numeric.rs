//! Numeric probes.
//!
//! Each probe lexes the longest literal of its grammar at the cursor, then
//! converts it with checked arithmetic. A literal that does not fit the
//! target type is a failed probe: the cursor is left unchanged and `None` is
//! returned, never a clamped or wrapped value.
//!
//! | Probe | Grammar |
//! |---|---|
//! | integers | `[+-]? digit+` (`scan_unsigned_long_long` takes `+?` only) |
//! | decimal floats | `[+-]? (digit+ ('.' digit*)? \| '.' digit+) ([eE] [+-]? digit+)?` |
//! | hex integers | `(0[xX])? hexdigit+` |
//! | hex floats | `[+-]? (0[xX])? (hex+ ('.' hex*)? \| '.' hex+) ([pP] [+-]? digit+)?` |
//!
//! An exponent marker without digits, or a `0x` prefix without a following
//! hex digit, is left unconsumed: `"1e"` scans as `1` and `"0xg"` as `0`.

use crate::decimal::Decimal;
use crate::scanner::Scanner;

/// Literal exponents are clamped to this magnitude plus the length of the
/// digits before the marker. Past that bound every supported type already
/// overflows or underflows, however far the fraction digits shift the scale.
const EXPONENT_LIMIT: i64 = 1_000_000;

impl Scanner<'_> {
    // ─── Integers ───────────────────────────────────────────────────────

    pub fn scan_int(&mut self) -> Option<isize> {
        self.scan_signed()
    }

    pub fn scan_int32(&mut self) -> Option<i32> {
        self.scan_signed()
    }

    pub fn scan_int64(&mut self) -> Option<i64> {
        self.scan_signed()
    }

    /// Scan an unsigned 64-bit integer. A leading `-` is a mismatch.
    pub fn scan_unsigned_long_long(&mut self) -> Option<u64> {
        self.probe(|s| {
            let rest = s.remaining();
            let sign_len = usize::from(rest.starts_with('+'));
            let digits = digit_run(&rest[sign_len..], u8::is_ascii_digit);
            if digits == 0 {
                return None;
            }
            let value = accumulate(&rest[sign_len..sign_len + digits], 10)?;
            s.take(sign_len + digits);
            Some(value)
        })
    }

    fn scan_signed<T: TryFrom<i128>>(&mut self) -> Option<T> {
        self.probe(|s| {
            let rest = s.remaining();
            let (negative, sign_len) = sign(rest);
            let digits = digit_run(&rest[sign_len..], u8::is_ascii_digit);
            if digits == 0 {
                return None;
            }
            let magnitude = i128::from(accumulate(&rest[sign_len..sign_len + digits], 10)?);
            let value = T::try_from(if negative { -magnitude } else { magnitude }).ok()?;
            s.take(sign_len + digits);
            Some(value)
        })
    }

    // ─── Decimal floating point ─────────────────────────────────────────

    /// Scan a decimal floating-point literal, correctly rounded.
    pub fn scan_double(&mut self) -> Option<f64> {
        self.probe(|s| {
            let literal = FloatLiteral::lex(s.remaining(), Radix::Decimal)?;
            let value: f64 = literal.decimal_text().parse().ok()?;
            if !value.is_finite() {
                return None;
            }
            s.take(literal.len);
            Some(value)
        })
    }

    pub fn scan_float(&mut self) -> Option<f32> {
        self.probe(|s| {
            let literal = FloatLiteral::lex(s.remaining(), Radix::Decimal)?;
            let value: f32 = literal.decimal_text().parse().ok()?;
            if !value.is_finite() {
                return None;
            }
            s.take(literal.len);
            Some(value)
        })
    }

    /// Scan a literal into an exact base-10 [`Decimal`].
    ///
    /// Fails on more than [`Decimal::MAX_DIGITS`] significant digits or an
    /// exponent outside the `Decimal` range.
    pub fn scan_decimal(&mut self) -> Option<Decimal> {
        self.probe(|s| {
            let literal = FloatLiteral::lex(s.remaining(), Radix::Decimal)?;
            let value = Decimal::from_digits(
                literal.negative,
                literal.integer,
                literal.fraction,
                literal.exponent,
            )?;
            s.take(literal.len);
            Some(value)
        })
    }

    // ─── Hexadecimal ────────────────────────────────────────────────────

    pub fn scan_hex_int32(&mut self) -> Option<u32> {
        self.scan_hex()
    }

    pub fn scan_hex_int64(&mut self) -> Option<u64> {
        self.scan_hex()
    }

    fn scan_hex<T: TryFrom<u64>>(&mut self) -> Option<T> {
        self.probe(|s| {
            let rest = s.remaining();
            let prefix = if has_hex_prefix(rest, false) { 2 } else { 0 };
            let digits = digit_run(&rest[prefix..], u8::is_ascii_hexdigit);
            if digits == 0 {
                return None;
            }
            let value = T::try_from(accumulate(&rest[prefix..prefix + digits], 16)?).ok()?;
            s.take(prefix + digits);
            Some(value)
        })
    }

    /// Scan a hexadecimal floating-point literal (`0x1.8p3`), rounded once
    /// to nearest-even.
    pub fn scan_hex_double(&mut self) -> Option<f64> {
        self.probe(|s| {
            let literal = FloatLiteral::lex(s.remaining(), Radix::Hex)?;
            let value = literal.binary().to_f64();
            if !value.is_finite() {
                return None;
            }
            s.take(literal.len);
            Some(if literal.negative { -value } else { value })
        })
    }

    pub fn scan_hex_float(&mut self) -> Option<f32> {
        self.probe(|s| {
            let literal = FloatLiteral::lex(s.remaining(), Radix::Hex)?;
            let value = literal.binary().to_f32();
            if !value.is_finite() {
                return None;
            }
            s.take(literal.len);
            Some(if literal.negative { -value } else { value })
        })
    }
}

// ─── Lexing ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Radix {
    Decimal,
    Hex,
}

impl Radix {
    fn is_digit(self, b: &u8) -> bool {
        match self {
            Radix::Decimal => b.is_ascii_digit(),
            Radix::Hex => b.is_ascii_hexdigit(),
        }
    }

    fn is_exponent_marker(self, b: &u8) -> bool {
        match self {
            Radix::Decimal => matches!(*b, b'e' | b'E'),
            Radix::Hex => matches!(*b, b'p' | b'P'),
        }
    }
}

/// Pieces of a floating-point literal at the start of some text.
#[derive(Debug)]
struct FloatLiteral<'t> {
    negative: bool,
    /// Digits before the point (prefix excluded).
    integer: &'t str,
    /// Digits after the point.
    fraction: &'t str,
    /// Explicit exponent, clamped to `EXPONENT_LIMIT` plus the literal's
    /// length up to the marker. Decimal literals scale by 10, hex by 2.
    exponent: i64,
    /// Byte length of the whole literal.
    len: usize,
}

impl<'t> FloatLiteral<'t> {
    fn lex(text: &'t str, radix: Radix) -> Option<Self> {
        let bytes = text.as_bytes();
        let (negative, mut i) = sign(text);
        if radix == Radix::Hex && has_hex_prefix(&text[i..], true) {
            i += 2;
        }

        let int_start = i;
        i += digit_run(&text[i..], |b| radix.is_digit(b));
        let integer = &text[int_start..i];

        let mut fraction = "";
        if bytes.get(i) == Some(&b'.') {
            let frac_len = digit_run(&text[i + 1..], |b| radix.is_digit(b));
            // A lone "." is not a literal; "1." is.
            if !integer.is_empty() || frac_len > 0 {
                fraction = &text[i + 1..i + 1 + frac_len];
                i += 1 + frac_len;
            }
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut exponent = 0;
        if bytes.get(i).is_some_and(|b| radix.is_exponent_marker(b)) {
            let (exp_negative, sign_len) = sign(&text[i + 1..]);
            let digits_at = i + 1 + sign_len;
            let digits = digit_run(&text[digits_at..], u8::is_ascii_digit);
            if digits > 0 {
                let limit = EXPONENT_LIMIT.saturating_add(to_i64(i));
                let magnitude = clamped_exponent(&text[digits_at..digits_at + digits], limit);
                exponent = if exp_negative { -magnitude } else { magnitude };
                i = digits_at + digits;
            }
        }

        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
            len: i,
        })
    }

    /// `[-]0.DIGITSeSCALE` text accepted by `str::parse` for floats.
    ///
    /// Leading and trailing zeros are folded into the scale, which then stays
    /// small whenever the value is in range: `str::parse` saturates large
    /// exponents, so `0.000…1e1000005` must not reach it unreduced.
    fn decimal_text(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        let mut digits = String::with_capacity(self.integer.len() + self.fraction.len());
        digits.push_str(self.integer);
        digits.push_str(self.fraction);

        let significant = digits.trim_start_matches('0');
        let leading = digits.len() - significant.len();
        let significant = significant.trim_end_matches('0');
        if significant.is_empty() {
            return format!("{sign}0");
        }
        let scale = to_i64(self.integer.len())
            .saturating_sub(to_i64(leading))
            .saturating_add(self.exponent);
        format!("{sign}0.{significant}e{scale}")
    }

    /// Magnitude of a hex literal as `mantissa × 2^exponent`.
    ///
    /// Keeps at most 64 significant bits; any nonzero digit dropped beyond
    /// them is folded into the lowest bit so rounding stays correct.
    fn binary(&self) -> BinaryFloat {
        let mut mantissa: u64 = 0;
        let mut exponent = self.exponent;
        let mut sticky = false;
        for digit in self.integer.bytes().map(hex_value) {
            if mantissa >> 60 == 0 {
                mantissa = (mantissa << 4) | digit;
            } else {
                sticky |= digit != 0;
                exponent = exponent.saturating_add(4);
            }
        }
        for digit in self.fraction.bytes().map(hex_value) {
            if mantissa >> 60 == 0 {
                mantissa = (mantissa << 4) | digit;
                exponent = exponent.saturating_sub(4);
            } else {
                sticky |= digit != 0;
            }
        }
        if sticky {
            mantissa |= 1;
        }
        BinaryFloat { mantissa, exponent }
    }
}

/// Unsigned binary value `mantissa × 2^exponent`.
#[derive(Clone, Copy, Debug)]
struct BinaryFloat {
    mantissa: u64,
    exponent: i64,
}

/// Significant bits of a normal `f64`.
const F64_PRECISION: i64 = 53;
/// Exponent of the smallest normal `f64`, `2^-1022`.
const F64_MIN_EXPONENT: i64 = -1022;

impl BinaryFloat {
    const ZERO: Self = Self {
        mantissa: 0,
        exponent: 0,
    };

    /// Round once to the precision an `f64` has at this magnitude: 53 bits
    /// for normal results, fewer in the subnormal range.
    #[allow(
        clippy::cast_precision_loss,
        reason = "the rounded mantissa has at most 53 bits, so the cast is exact"
    )]
    fn to_f64(self) -> f64 {
        if self.mantissa == 0 {
            return 0.0;
        }
        let bits = i64::from(u64::BITS - self.mantissa.leading_zeros());
        let top = self.exponent.saturating_add(bits - 1);
        let precision = if top >= F64_MIN_EXPONENT {
            F64_PRECISION
        } else {
            F64_PRECISION.saturating_sub(F64_MIN_EXPONENT.saturating_sub(top))
        };
        let rounded = self.round_to(precision);
        scale_by_power_of_two(rounded.mantissa as f64, rounded.exponent)
    }

    /// Round to at most `precision` significant bits, ties to even. A
    /// non-positive precision keeps only what rounds up into the lowest bit.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the kept part of a u64 shifted right by at least one bit fits in u64"
    )]
    fn round_to(self, precision: i64) -> Self {
        let bits = i64::from(u64::BITS - self.mantissa.leading_zeros());
        let excess = bits.saturating_sub(precision);
        if excess <= 0 {
            return self;
        }
        let Ok(shift) = u32::try_from(excess) else {
            return Self::ZERO;
        };
        if shift > u64::BITS {
            return Self::ZERO;
        }
        let wide = u128::from(self.mantissa);
        let kept = wide >> shift;
        let rest = wide & ((1 << shift) - 1);
        let half = 1 << (shift - 1);
        let round_up = rest > half || (rest == half && kept & 1 == 1);
        Self {
            mantissa: (kept + u128::from(round_up)) as u64,
            exponent: self.exponent.saturating_add(excess),
        }
    }

    /// Narrow to 53 bits first (sticky-jammed) so the conversion to `f64` is
    /// exact and the only rounding happens in the final `f64 -> f32` step.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "f64 -> f32 rounds to nearest-even, which is the rounding we want"
    )]
    fn to_f32(mut self) -> f32 {
        while self.mantissa >> 53 != 0 {
            self.mantissa = (self.mantissa >> 1) | (self.mantissa & 1);
            self.exponent = self.exponent.saturating_add(1);
        }
        self.to_f64() as f32
    }
}

/// `value × 2^exponent` without overflowing the intermediate power.
fn scale_by_power_of_two(mut value: f64, exponent: i64) -> f64 {
    const STEP: i64 = 1000;
    let mut exponent = exponent.clamp(-4 * STEP, 4 * STEP);
    while exponent > STEP {
        value *= power_of_two(STEP);
        exponent -= STEP;
    }
    while exponent < -STEP {
        value *= power_of_two(-STEP);
        exponent += STEP;
    }
    value * power_of_two(exponent)
}

/// `2^exponent` for `exponent` in the normal range `-1022..=1023`.
#[allow(
    clippy::cast_sign_loss,
    reason = "exponent + 1023 is in 1..=2046 for the normal range"
)]
fn power_of_two(exponent: i64) -> f64 {
    debug_assert!((-1022..=1023).contains(&exponent));
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

// ─── Helpers ────────────────────────────────────────────────────────────

/// `(is_negative, sign_len)` for an optional leading `+` or `-`.
fn sign(text: &str) -> (bool, usize) {
    match text.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    }
}

/// Number of leading bytes of `text` accepted by `is_digit`.
fn digit_run(text: &str, is_digit: impl Fn(&u8) -> bool) -> usize {
    text.as_bytes().iter().take_while(|&b| is_digit(b)).count()
}

/// `0x`/`0X` followed by a hex digit (or, for floats, by `.hexdigit`).
fn has_hex_prefix(text: &str, allow_point: bool) -> bool {
    match text.as_bytes() {
        [b'0', b'x' | b'X', next, rest @ ..] => {
            next.is_ascii_hexdigit()
                || (allow_point && *next == b'.' && rest.first().is_some_and(u8::is_ascii_hexdigit))
        }
        _ => false,
    }
}

/// Checked positional accumulation; `None` on overflow or a bad digit.
fn accumulate(digits: &str, radix: u32) -> Option<u64> {
    let mut result: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        result = result.checked_mul(u64::from(radix))?;
        result = result.checked_add(u64::from(digit))?;
    }
    Some(result)
}

fn clamped_exponent(digits: &str, limit: i64) -> i64 {
    digits.bytes().fold(0, |acc: i64, b| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(b - b'0'))
            .min(limit)
    })
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn hex_value(b: u8) -> u64 {
    char::from(b).to_digit(16).map_or(0, u64::from)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
