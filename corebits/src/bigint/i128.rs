use serde::{Deserialize, Serialize};

use super::algorithms;
use super::strconv::{self, ParseIntError, RadixFormat};
use super::u128::U128;
use crate::numeric::{CastFrom, Numeric, SignedNumeric};

// Little endian order, two's complement
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct I128(pub(crate) [u64; 2]);

impl I128 {
    pub const BITS: u32 = 128;
    pub const MAX: Self = Self([u64::MAX, u64::MAX >> 1]);
    pub const MIN: Self = Self([0, 1 << 63]);
    pub const ZERO: Self = Self([0; 2]);
    pub const ONE: Self = Self([1, 0]);
    pub const TWO: Self = Self([2, 0]);

    /// Replaces the current value by interpreting the bytes in big endian order
    pub fn copy_from_be_byte_slice(&mut self, bytes: &[u8]) {
        algorithms::copy_from_be_byte_slice(self.0.as_mut_slice(), bytes);
    }

    /// Replaces the current value by interpreting the bytes in little endian order
    pub fn copy_from_le_byte_slice(&mut self, bytes: &[u8]) {
        algorithms::copy_from_le_byte_slice(self.0.as_mut_slice(), bytes);
    }

    pub fn copy_to_le_byte_slice(&self, bytes: &mut [u8]) {
        algorithms::copy_to_le_byte_slice(self.0.as_slice(), bytes);
    }

    pub fn copy_to_be_byte_slice(&self, bytes: &mut [u8]) {
        algorithms::copy_to_be_byte_slice(self.0.as_slice(), bytes);
    }

    pub fn to_low_high_u64(self) -> (u64, u64) {
        (self.0[0], self.0[1])
    }

    /// The sign is exactly the top bit of the high limb.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0[1] >> 63 == 1
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        algorithms::is_zero(self.0.as_slice())
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.0 = [0; 2];
    }

    /// Magnitude as an unsigned value; lossless for every input,
    /// including `MIN` whose magnitude exceeds `MAX`.
    pub fn unsigned_abs(self) -> U128 {
        if self.is_negative() {
            U128(self.0).wrapping_neg()
        } else {
            U128(self.0)
        }
    }

    /// Value of the bit at `index`, counting from the least significant.
    ///
    /// # Panics
    /// Panics if `index >= 128`.
    pub fn bit(self, index: u32) -> bool {
        algorithms::bit(self.0.as_slice(), index)
    }

    /// Sets the bit at `index`, leaving every other bit unchanged.
    ///
    /// # Panics
    /// Panics if `index >= 128`.
    pub fn set_bit(&mut self, index: u32, value: bool) {
        algorithms::set_bit(self.0.as_mut_slice(), index, value);
    }

    /// Two's complement negation (bitwise NOT plus one), wrapping.
    ///
    /// An involution everywhere except that `MIN` is its own negation
    /// (the magnitude of `MIN` is not representable). The inverse
    /// construction, subtract one then NOT, computes the same function.
    #[must_use]
    pub fn wrapping_neg(mut self) -> Self {
        algorithms::negate_words(self.0.as_mut_slice());
        self
    }

    /// Strict parse of a whole string in the given radix (2, 10, 16, or 0
    /// to auto-detect from a `0x`/`0b` marker, defaulting to 10).
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseIntError> {
        let (words, negative) = strconv::parse_words(s, radix)?;
        let value = Self(words);
        Ok(if negative { value.wrapping_neg() } else { value })
    }

    /// Lenient scan: parses the longest valid numeral prefix and returns
    /// it with the byte offset where scanning stopped (0 when no digit
    /// was consumed).
    pub fn scan_str_radix(s: &str, radix: u32) -> (Self, usize) {
        let (words, negative, consumed) = strconv::scan_words(s, radix);
        let value = Self(words);
        (
            if negative { value.wrapping_neg() } else { value },
            consumed,
        )
    }

    /// Sign-magnitude text form in the given radix (2, 10 or 16): a
    /// single `-` precedes any prefix/padding for negative values.
    pub fn to_string_radix(self, radix: u32, fmt: RadixFormat) -> String {
        let negative = self.is_negative();
        strconv::format_words(self.unsigned_abs().0, negative, radix, fmt)
    }
}

macro_rules! implement_part_accessors {
    ($(($get:ident, $set:ident, $Part:ty, $count:literal)),* $(,)?) => {
        /// Chunked little-endian views of the bit pattern: part 0 is the
        /// least significant chunk. All setters leave the other parts
        /// unchanged and panic on an out-of-range index.
        impl I128 {
            $(
                pub fn $get(self, index: usize) -> $Part {
                    assert!(index < $count, "part index out of range: {index}");
                    let bits = <$Part>::BITS as usize;
                    let per_word = 64 / bits;
                    let word = self.0[index / per_word];
                    (word >> ((index % per_word) * bits)) as $Part
                }

                pub fn $set(&mut self, index: usize, value: $Part) {
                    assert!(index < $count, "part index out of range: {index}");
                    let bits = <$Part>::BITS as usize;
                    let per_word = 64 / bits;
                    let shift = (index % per_word) * bits;
                    let word = &mut self.0[index / per_word];
                    *word &= !((<$Part>::MAX as u64) << shift);
                    *word |= (value as u64) << shift;
                }
            )*
        }
    };
}

implement_part_accessors!(
    (part_u8, set_part_u8, u8, 16),
    (part_u16, set_part_u16, u16, 8),
    (part_u32, set_part_u32, u32, 4),
    (part_u64, set_part_u64, u64, 2),
);

#[cfg(test)]
impl rand::distributions::Distribution<I128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> I128 {
        let mut s = I128::ZERO;
        rng.fill(s.0.as_mut_slice());
        s
    }
}

// Deriving would order by raw limbs and put the negatives above the
// positives
impl std::cmp::Ord for I128 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        algorithms::compare_signed(&self.0, &other.0)
    }
}

impl std::cmp::PartialOrd for I128 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Addition, subtraction and multiplication wrap modulo 2^128, which is
// the same limb work as the unsigned type under two's complement.
impl std::ops::Add<Self> for I128 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign<Self> for I128 {
    fn add_assign(&mut self, rhs: Self) {
        algorithms::add_assign_words(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::Sub<Self> for I128 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl std::ops::SubAssign<Self> for I128 {
    fn sub_assign(&mut self, rhs: Self) {
        algorithms::sub_assign_words(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::MulAssign<Self> for I128 {
    fn mul_assign(&mut self, rhs: Self) {
        algorithms::schoolbook_mul_assign(&mut self.0, &rhs.0);
    }
}

impl std::ops::Mul<Self> for I128 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl std::ops::DivAssign<Self> for I128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Quotient truncates toward zero, remainder takes the dividend's sign,
// and MIN / -1 wraps back to MIN (native wrapping_div semantics).
impl std::ops::Div<Self> for I128 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        let quotient_magnitude = self.unsigned_abs() / rhs.unsigned_abs();
        if self.is_negative() != rhs.is_negative() {
            Self(quotient_magnitude.0).wrapping_neg()
        } else {
            Self(quotient_magnitude.0)
        }
    }
}

impl std::ops::RemAssign<Self> for I128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl std::ops::Rem<Self> for I128 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        assert!(
            !rhs.is_zero(),
            "attempt to calculate the remainder with a divisor of zero"
        );
        let remainder_magnitude = self.unsigned_abs() % rhs.unsigned_abs();
        if self.is_negative() {
            Self(remainder_magnitude.0).wrapping_neg()
        } else {
            Self(remainder_magnitude.0)
        }
    }
}

impl std::ops::Neg for I128 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl std::ops::ShlAssign<u32> for I128 {
    fn shl_assign(&mut self, shift: u32) {
        algorithms::shl_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shl<u32> for I128 {
    type Output = Self;

    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

// Right shift is arithmetic: the sign bit fills the vacated positions.
impl std::ops::ShrAssign<u32> for I128 {
    fn shr_assign(&mut self, shift: u32) {
        algorithms::shr_assign_arithmetic(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shr<u32> for I128 {
    type Output = Self;

    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShlAssign<usize> for I128 {
    fn shl_assign(&mut self, shift: usize) {
        algorithms::shl_assign(self.0.as_mut_slice(), shift as u32);
    }
}

impl std::ops::Shl<usize> for I128 {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<usize> for I128 {
    fn shr_assign(&mut self, shift: usize) {
        algorithms::shr_assign_arithmetic(self.0.as_mut_slice(), shift as u32);
    }
}

impl std::ops::Shr<usize> for I128 {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}

// A negative amount shifts in the opposite direction by the absolute
// value; the absolute amount is then reduced modulo 128 as usual.
impl std::ops::ShlAssign<i32> for I128 {
    fn shl_assign(&mut self, shift: i32) {
        let amount = i64::from(shift);
        if amount < 0 {
            algorithms::shr_assign_arithmetic(self.0.as_mut_slice(), amount.unsigned_abs() as u32);
        } else {
            algorithms::shl_assign(self.0.as_mut_slice(), amount as u32);
        }
    }
}

impl std::ops::Shl<i32> for I128 {
    type Output = Self;

    fn shl(mut self, rhs: i32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<i32> for I128 {
    fn shr_assign(&mut self, shift: i32) {
        let amount = i64::from(shift);
        if amount < 0 {
            algorithms::shl_assign(self.0.as_mut_slice(), amount.unsigned_abs() as u32);
        } else {
            algorithms::shr_assign_arithmetic(self.0.as_mut_slice(), amount as u32);
        }
    }
}

impl std::ops::Shr<i32> for I128 {
    type Output = Self;

    fn shr(mut self, rhs: i32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::Not for I128 {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        algorithms::bitnot_assign(self.0.as_mut_slice());
        self
    }
}

impl std::ops::BitAndAssign<Self> for I128 {
    fn bitand_assign(&mut self, rhs: Self) {
        algorithms::bitand_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitAnd<Self> for I128 {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl std::ops::BitOrAssign<Self> for I128 {
    fn bitor_assign(&mut self, rhs: Self) {
        algorithms::bitor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitOr<Self> for I128 {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl std::ops::BitXorAssign<Self> for I128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        algorithms::bitxor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitXor<Self> for I128 {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl From<(u64, u64)> for I128 {
    fn from(value: (u64, u64)) -> Self {
        Self([value.0, value.1])
    }
}

impl From<bool> for I128 {
    fn from(input: bool) -> Self {
        Self::from(if input { 1u64 } else { 0u64 })
    }
}

impl From<u8> for I128 {
    fn from(value: u8) -> Self {
        Self::from(value as u64)
    }
}

impl From<u16> for I128 {
    fn from(value: u16) -> Self {
        Self::from(value as u64)
    }
}

impl From<u32> for I128 {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<u64> for I128 {
    fn from(value: u64) -> Self {
        Self([value, 0])
    }
}

impl From<i8> for I128 {
    fn from(value: i8) -> Self {
        Self::from(value as i64)
    }
}

impl From<i16> for I128 {
    fn from(value: i16) -> Self {
        Self::from(value as i64)
    }
}

impl From<i32> for I128 {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<i64> for I128 {
    fn from(value: i64) -> Self {
        let sign_fill = if value < 0 { u64::MAX } else { 0 };
        Self([value as u64, sign_fill])
    }
}

impl From<i128> for I128 {
    fn from(value: i128) -> Self {
        let bits = value as u128;
        Self([(bits & u128::from(u64::MAX)) as u64, (bits >> 64) as u64])
    }
}

macro_rules! implement_truncating_casts {
    ($($Native:ty),* $(,)?) => {
        $(
            impl CastFrom<I128> for $Native {
                fn cast_from(input: I128) -> Self {
                    input.0[0] as $Native
                }
            }
        )*
    };
}

implement_truncating_casts!(u8, u16, u32, u64, i8, i16, i32, i64);

impl CastFrom<I128> for i128 {
    fn cast_from(input: I128) -> Self {
        (input.0[0] as u128 | (input.0[1] as u128) << 64) as i128
    }
}

impl CastFrom<I128> for u128 {
    fn cast_from(input: I128) -> Self {
        input.0[0] as u128 | (input.0[1] as u128) << 64
    }
}

macro_rules! implement_extending_casts {
    ($($Native:ty),* $(,)?) => {
        $(
            impl CastFrom<$Native> for I128 {
                fn cast_from(input: $Native) -> Self {
                    Self::from(input)
                }
            }
        )*
    };
}

implement_extending_casts!(bool, u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl CastFrom<u128> for I128 {
    fn cast_from(input: u128) -> Self {
        Self::from(input as i128)
    }
}

// The two 128-bit types reinterpret each other's bit pattern.
impl CastFrom<U128> for I128 {
    fn cast_from(input: U128) -> Self {
        Self(input.0)
    }
}

impl CastFrom<I128> for U128 {
    fn cast_from(input: I128) -> Self {
        Self(input.0)
    }
}

impl CastFrom<f64> for I128 {
    fn cast_from(input: f64) -> Self {
        // Native float-to-int casts already truncate toward zero,
        // saturate at the range ends and map NaN to zero.
        Self::from(input as i128)
    }
}

impl CastFrom<f32> for I128 {
    fn cast_from(input: f32) -> Self {
        Self::from(input as i128)
    }
}

impl CastFrom<I128> for f64 {
    fn cast_from(input: I128) -> Self {
        i128::cast_from(input) as f64
    }
}

impl CastFrom<I128> for f32 {
    fn cast_from(input: I128) -> Self {
        i128::cast_from(input) as f32
    }
}

macro_rules! implement_native_comparisons {
    ($($Native:ty),* $(,)?) => {
        $(
            impl PartialEq<$Native> for I128 {
                fn eq(&self, other: &$Native) -> bool {
                    *self == Self::from(*other)
                }
            }

            impl PartialEq<I128> for $Native {
                fn eq(&self, other: &I128) -> bool {
                    I128::from(*self) == *other
                }
            }

            impl PartialOrd<$Native> for I128 {
                fn partial_cmp(&self, other: &$Native) -> Option<std::cmp::Ordering> {
                    self.partial_cmp(&Self::from(*other))
                }
            }

            impl PartialOrd<I128> for $Native {
                fn partial_cmp(&self, other: &I128) -> Option<std::cmp::Ordering> {
                    I128::from(*self).partial_cmp(other)
                }
            }
        )*
    };
}

implement_native_comparisons!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl std::fmt::Display for I128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.unsigned_abs().to_string_radix(10, RadixFormat::new());
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

// The std radix traits show the two's complement bit pattern, as the
// native signed types do; the sign-magnitude form is `to_string_radix`.
impl std::fmt::LowerHex for I128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&U128(self.0), f)
    }
}

impl std::fmt::UpperHex for I128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&U128(self.0), f)
    }
}

impl std::fmt::Binary for I128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Binary::fmt(&U128(self.0), f)
    }
}

impl std::str::FromStr for I128 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// SAFETY
//
// I128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for I128 {}

// SAFETY
//
// u64 impl bytemuck::Pod,
// [T; N] impl bytemuck::Pod if T: bytemuck::Pod
//
// https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#foreign-impls
//
// Thus I128 can safely be considered Pod
unsafe impl bytemuck::Pod for I128 {}

impl Numeric for I128 {
    const BITS: usize = Self::BITS as usize;

    const ZERO: Self = Self::ZERO;

    const ONE: Self = Self::ONE;

    const TWO: Self = Self::TWO;

    const MAX: Self = Self::MAX;
}

impl SignedNumeric for I128 {
    const MIN: Self = Self::MIN;
}
