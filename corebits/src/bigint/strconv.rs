//! Radix 2/10/16 text conversion for the 128-bit integer types.
//!
//! Two parsing surfaces exist: the strict `from_str_radix` constructors on
//! [`U128`](super::U128) and [`I128`](super::I128), which reject any
//! string that is not entirely a numeral, and the lenient
//! `scan_str_radix`, which consumes the longest valid numeral prefix and
//! reports where it stopped, the contract of the C `strtol` family
//! extended to 128 bits.
//!
//! Accumulation is done with full 128-bit multiply-by-radix-and-add, so
//! every representable value parses without precision loss; past the top
//! of the range the accumulator wraps, as every arithmetic path of these
//! types does.

use std::fmt::{Display, Formatter};

use super::algorithms;

/// Reason a strict parse was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IntErrorKind {
    /// The input was empty.
    Empty,
    /// A character was not a digit of the requested radix, or the input
    /// contained nothing after its sign/prefix.
    InvalidDigit,
}

/// Error returned by the strict `from_str_radix` parsers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseIntError {
    pub(crate) kind: IntErrorKind,
}

impl ParseIntError {
    pub fn kind(&self) -> IntErrorKind {
        self.kind
    }
}

impl Display for ParseIntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            IntErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            IntErrorKind::InvalidDigit => write!(f, "invalid digit found in string"),
        }
    }
}

impl std::error::Error for ParseIntError {}

/// Formatting policy for `to_string_radix`.
///
/// `leading_zeros` pads radix 2 and 16 output to the full width of the
/// type (128 binary digits, 32 hex digits); `prefix` emits the `0b`/`0x`
/// radix marker. Radix 10 ignores both: decimal output is never padded
/// and has no canonical prefix.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RadixFormat {
    pub leading_zeros: bool,
    pub prefix: bool,
}

impl RadixFormat {
    pub const fn new() -> Self {
        Self {
            leading_zeros: false,
            prefix: false,
        }
    }

    #[must_use]
    pub const fn with_leading_zeros(self, leading_zeros: bool) -> Self {
        Self {
            leading_zeros,
            ..self
        }
    }

    #[must_use]
    pub const fn with_prefix(self, prefix: bool) -> Self {
        Self { prefix, ..self }
    }
}

fn digit_value(byte: u8, radix: u32) -> Option<u64> {
    let digit = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => return None,
    };
    if u32::from(digit) < radix {
        Some(u64::from(digit))
    } else {
        None
    }
}

fn check_parse_radix(radix: u32) {
    assert!(
        matches!(radix, 0 | 2 | 10 | 16),
        "unsupported radix: {radix} (supported: 2, 10, 16, or 0 for auto-detection)"
    );
}

/// Consume a `0x`/`0b` marker if one is valid here, resolving radix 0.
///
/// Returns the (possibly resolved) radix and the new position. With
/// `require_digit_after`, the marker is only consumed when a digit of the
/// marked radix follows, so that in lenient scans `"0x"` parses as the
/// numeral `0` stopping at `x`.
fn consume_prefix(
    bytes: &[u8],
    pos: usize,
    radix: u32,
    require_digit_after: bool,
) -> (u32, usize) {
    let marked_radix = match bytes.get(pos..pos + 2) {
        Some([b'0', b'x' | b'X']) => 16,
        Some([b'0', b'b' | b'B']) => 2,
        _ => 0,
    };
    if marked_radix != 0 && (radix == 0 || radix == marked_radix) {
        let digit_follows = bytes
            .get(pos + 2)
            .is_some_and(|b| digit_value(*b, marked_radix).is_some());
        if digit_follows || !require_digit_after {
            return (marked_radix, pos + 2);
        }
    }
    if radix == 0 {
        (10, pos)
    } else {
        (radix, pos)
    }
}

/// Strict parse of a whole string into sign-magnitude form.
pub(super) fn parse_words(s: &str, radix: u32) -> Result<([u64; 2], bool), ParseIntError> {
    check_parse_radix(radix);
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseIntError {
            kind: IntErrorKind::Empty,
        });
    }

    let (negative, mut pos) = match bytes[0] {
        b'+' => (false, 1),
        b'-' => (true, 1),
        _ => (false, 0),
    };
    let (radix, digits_start) = consume_prefix(bytes, pos, radix, false);
    pos = digits_start;

    if pos == bytes.len() {
        // Sign and/or prefix with nothing after it.
        return Err(ParseIntError {
            kind: IntErrorKind::InvalidDigit,
        });
    }

    let mut words = [0u64; 2];
    for byte in &bytes[pos..] {
        let digit = digit_value(*byte, radix).ok_or(ParseIntError {
            kind: IntErrorKind::InvalidDigit,
        })?;
        algorithms::mul_assign_u64(&mut words, u64::from(radix));
        algorithms::add_assign_u64(&mut words, digit);
    }

    Ok((words, negative))
}

/// Lenient scan: longest valid numeral prefix, in sign-magnitude form.
///
/// Returns the accumulated magnitude, the sign, and the byte offset at
/// which scanning stopped. If no digit was consumed the offset is 0 and
/// the value is zero, even when a sign or radix marker was present.
pub(super) fn scan_words(s: &str, radix: u32) -> ([u64; 2], bool, usize) {
    check_parse_radix(radix);
    let bytes = s.as_bytes();

    let (negative, pos) = match bytes.first() {
        Some(b'+') => (false, 1),
        Some(b'-') => (true, 1),
        _ => (false, 0),
    };
    let (radix, mut pos) = consume_prefix(bytes, pos, radix, true);

    let mut words = [0u64; 2];
    let mut any_digit = false;
    while pos < bytes.len() {
        match digit_value(bytes[pos], radix) {
            Some(digit) => {
                algorithms::mul_assign_u64(&mut words, u64::from(radix));
                algorithms::add_assign_u64(&mut words, digit);
                any_digit = true;
                pos += 1;
            }
            None => break,
        }
    }

    if any_digit {
        (words, negative, pos)
    } else {
        ([0u64; 2], false, 0)
    }
}

/// Format sign-magnitude words in the given radix.
pub(super) fn format_words(
    words: [u64; 2],
    negative: bool,
    radix: u32,
    fmt: RadixFormat,
) -> String {
    assert!(
        matches!(radix, 2 | 10 | 16),
        "unsupported radix: {radix} (supported: 2, 10, 16)"
    );

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    match radix {
        10 => {
            let mut scratch = words;
            let mut digits = [0u8; 39];
            let mut count = 0;
            while !algorithms::is_zero(&scratch) {
                digits[count] = algorithms::div_rem_assign_u64(&mut scratch, 10) as u8;
                count += 1;
            }
            if count == 0 {
                out.push('0');
            }
            for digit in digits[..count].iter().rev() {
                out.push(char::from(b'0' + digit));
            }
        }
        16 => {
            if fmt.prefix {
                out.push_str("0x");
            }
            push_digits(&mut out, words, 4, fmt.leading_zeros);
        }
        2 => {
            if fmt.prefix {
                out.push_str("0b");
            }
            push_digits(&mut out, words, 1, fmt.leading_zeros);
        }
        _ => unreachable!(),
    }

    out
}

/// Emit power-of-two radix digits, most significant first.
fn push_digits(out: &mut String, words: [u64; 2], bits_per_digit: u32, leading_zeros: bool) {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    let total_digits = 128 / bits_per_digit;
    let mask = (1u64 << bits_per_digit) - 1;
    let mut seen_nonzero = false;
    for i in (0..total_digits).rev() {
        let shift = i * bits_per_digit;
        let digit = (words[(shift / 64) as usize] >> (shift % 64)) & mask;
        seen_nonzero |= digit != 0;
        if leading_zeros || seen_nonzero || i == 0 {
            out.push(char::from(HEX_DIGITS[digit as usize]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{I128, U128};
    use super::*;

    #[test]
    fn strict_parse_rejects_malformed_input() {
        for (input, kind) in [
            ("", IntErrorKind::Empty),
            ("+", IntErrorKind::InvalidDigit),
            ("-", IntErrorKind::InvalidDigit),
            ("0x", IntErrorKind::InvalidDigit),
            ("12a", IntErrorKind::InvalidDigit),
            (" 12", IntErrorKind::InvalidDigit),
            ("12 ", IntErrorKind::InvalidDigit),
        ] {
            let err = U128::from_str_radix(input, 10).unwrap_err();
            assert_eq!(err.kind(), kind, "input {input:?}");
        }

        // Digit valid in hex but not in the requested radix.
        assert!(U128::from_str_radix("2", 2).is_err());
        assert!(U128::from_str_radix("a", 10).is_err());
    }

    #[test]
    fn radix_zero_auto_detects() {
        assert_eq!(U128::from_str_radix("0x10", 0).unwrap(), U128::from(16u64));
        assert_eq!(U128::from_str_radix("0b10", 0).unwrap(), U128::from(2u64));
        assert_eq!(U128::from_str_radix("10", 0).unwrap(), U128::from(10u64));
        assert_eq!(I128::from_str_radix("-0x10", 0).unwrap(), I128::from(-16));
    }

    #[test]
    fn scan_stops_at_first_invalid_character() {
        let (value, consumed) = U128::scan_str_radix("1234xyz", 10);
        assert_eq!(value, U128::from(1234u64));
        assert_eq!(consumed, 4);

        let (value, consumed) = U128::scan_str_radix("ff g", 16);
        assert_eq!(value, U128::from(0xffu64));
        assert_eq!(consumed, 2);

        let (value, consumed) = I128::scan_str_radix("-42!", 10);
        assert_eq!(value, I128::from(-42));
        assert_eq!(consumed, 3);
    }

    #[test]
    fn scan_with_no_digits_consumes_nothing() {
        for input in ["", "xyz", "-", "+pq", " 1"] {
            let (value, consumed) = U128::scan_str_radix(input, 10);
            assert_eq!(value, U128::ZERO, "input {input:?}");
            assert_eq!(consumed, 0, "input {input:?}");
        }
    }

    #[test]
    fn scan_of_bare_marker_reads_the_zero() {
        // strtol behavior: "0x" with no hex digit after it parses the
        // leading zero and stops at the marker letter.
        let (value, consumed) = U128::scan_str_radix("0x", 16);
        assert_eq!(value, U128::ZERO);
        assert_eq!(consumed, 1);

        let (value, consumed) = U128::scan_str_radix("0xg", 0);
        assert_eq!(value, U128::ZERO);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn decimal_never_pads_nor_prefixes() {
        let value = U128::from(50u64);
        let fmt = RadixFormat::new().with_leading_zeros(true).with_prefix(true);
        assert_eq!(value.to_string_radix(10, fmt), "50");
    }

    #[test]
    fn hex_padding_is_32_digits() {
        let value = U128::from(50u64);
        let padded = value.to_string_radix(16, RadixFormat::new().with_leading_zeros(true));
        assert_eq!(padded.len(), 32);
        assert_eq!(padded, "00000000000000000000000000000032");

        let prefixed =
            value.to_string_radix(16, RadixFormat::new().with_leading_zeros(true).with_prefix(true));
        assert_eq!(prefixed.len(), 34);
        assert_eq!(prefixed, "0x00000000000000000000000000000032");
    }

    #[test]
    fn binary_padding_is_128_digits() {
        let value = U128::from(50u64);
        let padded = value.to_string_radix(2, RadixFormat::new().with_leading_zeros(true));
        assert_eq!(padded.len(), 128);
        assert!(padded.ends_with("110010"));
        assert!(padded.starts_with('0'));

        let prefixed =
            value.to_string_radix(2, RadixFormat::new().with_leading_zeros(true).with_prefix(true));
        assert_eq!(prefixed.len(), 130);
        assert!(prefixed.starts_with("0b"));
    }

    #[test]
    fn zero_formats_as_a_single_digit() {
        let fmt = RadixFormat::new();
        assert_eq!(U128::ZERO.to_string_radix(10, fmt), "0");
        assert_eq!(U128::ZERO.to_string_radix(16, fmt), "0");
        assert_eq!(U128::ZERO.to_string_radix(2, fmt), "0");
        assert_eq!(
            U128::ZERO.to_string_radix(16, fmt.with_prefix(true)),
            "0x0"
        );
    }

    #[test]
    fn negative_sign_precedes_the_prefix() {
        let value = I128::from(-50);
        let fmt = RadixFormat::new().with_prefix(true);
        assert_eq!(value.to_string_radix(16, fmt), "-0x32");
        assert_eq!(value.to_string_radix(2, fmt), "-0b110010");
        assert_eq!(value.to_string_radix(10, fmt), "-50");
    }

    #[test]
    fn round_trips_across_the_format_matrix() {
        let values = [
            I128::ZERO,
            I128::ONE,
            I128::from(-1),
            I128::from(50),
            I128::from(-123_456_789_012_345_678i64),
            I128::MAX,
            I128::MIN,
        ];
        let formats = [
            RadixFormat::new(),
            RadixFormat::new().with_leading_zeros(true),
            RadixFormat::new().with_prefix(true),
            RadixFormat::new().with_leading_zeros(true).with_prefix(true),
        ];
        for value in values {
            for radix in [2u32, 10, 16] {
                for fmt in formats {
                    let text = value.to_string_radix(radix, fmt);
                    let back = I128::from_str_radix(&text, radix).unwrap();
                    assert_eq!(back, value, "value {value} radix {radix} fmt {fmt:?}");
                }
            }
        }
    }

    #[test]
    fn unsigned_round_trips_across_the_format_matrix() {
        let values = [
            U128::ZERO,
            U128::ONE,
            U128::from(0xabcd_1234_fefeu64),
            U128::MAX,
        ];
        for value in values {
            for radix in [2u32, 10, 16] {
                for fmt in [RadixFormat::new(), RadixFormat::new().with_leading_zeros(true)] {
                    let text = value.to_string_radix(radix, fmt);
                    let back = U128::from_str_radix(&text, radix).unwrap();
                    assert_eq!(back, value, "value {value} radix {radix}");
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "unsupported radix")]
    fn format_radix_8_is_rejected() {
        let _ = U128::ONE.to_string_radix(8, RadixFormat::new());
    }

    #[test]
    #[should_panic(expected = "unsupported radix")]
    fn parse_radix_36_is_rejected() {
        let _ = U128::from_str_radix("zz", 36);
    }
}
