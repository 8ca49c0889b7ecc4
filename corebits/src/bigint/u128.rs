use serde::{Deserialize, Serialize};

use super::algorithms;
use super::strconv::{self, ParseIntError, RadixFormat};
use crate::numeric::{CastFrom, Numeric, UnsignedNumeric};

// Little endian order
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct U128(pub(crate) [u64; 2]);

impl U128 {
    pub const BITS: u32 = 128;
    pub const MAX: Self = Self([u64::MAX; 2]);
    pub const MIN: Self = Self([0; 2]);
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

    pub fn is_power_of_two(self) -> bool {
        if self == Self::ZERO {
            return false;
        }
        (self & (self - Self::ONE)) == Self::ZERO
    }

    pub fn leading_zeros(self) -> u32 {
        algorithms::leading_zeros(self.0.as_slice())
    }

    pub fn ilog2(self) -> u32 {
        // Rust has the same assert
        assert!(
            self > Self::ZERO,
            "argument of integer logarithm must be positive"
        );
        (self.0.len() as u32 * u64::BITS) - self.leading_zeros() - 1
    }

    pub fn ceil_ilog2(self) -> u32 {
        self.ilog2() + u32::from(!self.is_power_of_two())
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        algorithms::is_zero(self.0.as_slice())
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.0 = [0; 2];
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
    /// Its own inverse for every value; zero is a fixed point.
    #[must_use]
    pub fn wrapping_neg(mut self) -> Self {
        algorithms::negate_words(self.0.as_mut_slice());
        self
    }

    /// Strict parse of a whole string in the given radix (2, 10, 16, or 0
    /// to auto-detect from a `0x`/`0b` marker, defaulting to 10).
    ///
    /// A leading `-` parses the magnitude and wraps it (two's complement),
    /// the `strtoul` convention. Accumulation wraps modulo `2^128`.
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

    /// Text form in the given radix (2, 10 or 16), honoring the
    /// padding/prefix policy of `fmt`.
    pub fn to_string_radix(self, radix: u32, fmt: RadixFormat) -> String {
        strconv::format_words(self.0, false, radix, fmt)
    }
}

macro_rules! implement_part_accessors {
    ($(($get:ident, $set:ident, $Part:ty, $count:literal)),* $(,)?) => {
        /// Chunked little-endian views of the value: part 0 is the least
        /// significant chunk. All setters leave the other parts unchanged
        /// and panic on an out-of-range index.
        impl U128 {
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
impl rand::distributions::Distribution<U128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> U128 {
        let mut s = U128::ZERO;
        rng.fill(s.0.as_mut_slice());
        s
    }
}

impl std::cmp::Ord for U128 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        algorithms::compare(&self.0, &other.0)
    }
}

impl std::cmp::PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::ops::Add<Self> for U128 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign<Self> for U128 {
    fn add_assign(&mut self, rhs: Self) {
        algorithms::add_assign_words(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::Sub<Self> for U128 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl std::ops::SubAssign<Self> for U128 {
    fn sub_assign(&mut self, rhs: Self) {
        algorithms::sub_assign_words(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::MulAssign<Self> for U128 {
    fn mul_assign(&mut self, rhs: Self) {
        if rhs.is_power_of_two() {
            *self <<= rhs.ilog2();
            return;
        }
        algorithms::schoolbook_mul_assign(&mut self.0, &rhs.0);
    }
}

impl std::ops::Mul<Self> for U128 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl std::ops::DivAssign<Self> for U128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl std::ops::Div<Self> for U128 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let (q, _) = algorithms::slow_div(self.0, rhs.0);
        Self(q)
    }
}

impl std::ops::RemAssign<Self> for U128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl std::ops::Rem<Self> for U128 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        assert!(
            !rhs.is_zero(),
            "attempt to calculate the remainder with a divisor of zero"
        );
        let (_, r) = algorithms::slow_div(self.0, rhs.0);
        Self(r)
    }
}

impl std::ops::ShlAssign<u32> for U128 {
    fn shl_assign(&mut self, shift: u32) {
        algorithms::shl_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shl<u32> for U128 {
    type Output = Self;

    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<u32> for U128 {
    fn shr_assign(&mut self, shift: u32) {
        algorithms::shr_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shr<u32> for U128 {
    type Output = Self;

    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShlAssign<usize> for U128 {
    fn shl_assign(&mut self, shift: usize) {
        algorithms::shl_assign(self.0.as_mut_slice(), shift as u32);
    }
}

impl std::ops::Shl<usize> for U128 {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<usize> for U128 {
    fn shr_assign(&mut self, shift: usize) {
        algorithms::shr_assign(self.0.as_mut_slice(), shift as u32);
    }
}

impl std::ops::Shr<usize> for U128 {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}

// A negative amount shifts in the opposite direction by the absolute
// value; the absolute amount is then reduced modulo 128 as usual.
impl std::ops::ShlAssign<i32> for U128 {
    fn shl_assign(&mut self, shift: i32) {
        let amount = i64::from(shift);
        if amount < 0 {
            algorithms::shr_assign(self.0.as_mut_slice(), amount.unsigned_abs() as u32);
        } else {
            algorithms::shl_assign(self.0.as_mut_slice(), amount as u32);
        }
    }
}

impl std::ops::Shl<i32> for U128 {
    type Output = Self;

    fn shl(mut self, rhs: i32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<i32> for U128 {
    fn shr_assign(&mut self, shift: i32) {
        let amount = i64::from(shift);
        if amount < 0 {
            algorithms::shl_assign(self.0.as_mut_slice(), amount.unsigned_abs() as u32);
        } else {
            algorithms::shr_assign(self.0.as_mut_slice(), amount as u32);
        }
    }
}

impl std::ops::Shr<i32> for U128 {
    type Output = Self;

    fn shr(mut self, rhs: i32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::Not for U128 {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        algorithms::bitnot_assign(self.0.as_mut_slice());
        self
    }
}

impl std::ops::BitAndAssign<Self> for U128 {
    fn bitand_assign(&mut self, rhs: Self) {
        algorithms::bitand_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitAnd<Self> for U128 {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl std::ops::BitOrAssign<Self> for U128 {
    fn bitor_assign(&mut self, rhs: Self) {
        algorithms::bitor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitOr<Self> for U128 {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl std::ops::BitXorAssign<Self> for U128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        algorithms::bitxor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitXor<Self> for U128 {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl From<(u64, u64)> for U128 {
    fn from(value: (u64, u64)) -> Self {
        Self([value.0, value.1])
    }
}

impl From<bool> for U128 {
    fn from(input: bool) -> Self {
        Self::from(if input { 1u64 } else { 0u64 })
    }
}

impl From<u8> for U128 {
    fn from(value: u8) -> Self {
        Self::from(value as u64)
    }
}

impl From<u16> for U128 {
    fn from(value: u16) -> Self {
        Self::from(value as u64)
    }
}

impl From<u32> for U128 {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        Self([value, 0])
    }
}

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        Self([(value & u128::from(u64::MAX)) as u64, (value >> 64) as u64])
    }
}

macro_rules! implement_truncating_casts {
    ($($Native:ty),* $(,)?) => {
        $(
            impl CastFrom<U128> for $Native {
                fn cast_from(input: U128) -> Self {
                    input.0[0] as $Native
                }
            }
        )*
    };
}

implement_truncating_casts!(u8, u16, u32, u64, i8, i16, i32, i64);

impl CastFrom<U128> for u128 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as u128 | (input.0[1] as u128) << 64
    }
}

impl CastFrom<U128> for i128 {
    fn cast_from(input: U128) -> Self {
        u128::cast_from(input) as i128
    }
}

macro_rules! implement_widening_casts {
    ($($Unsigned:ty),* $(,)?) => {
        $(
            impl CastFrom<$Unsigned> for U128 {
                fn cast_from(input: $Unsigned) -> Self {
                    Self::from(input)
                }
            }
        )*
    };
}

implement_widening_casts!(bool, u8, u16, u32, u64, u128);

// Signed sources follow `as` semantics: sign-extend, then reinterpret.
macro_rules! implement_sign_extending_casts {
    ($($Signed:ty),* $(,)?) => {
        $(
            impl CastFrom<$Signed> for U128 {
                fn cast_from(input: $Signed) -> Self {
                    Self::from(input as i128 as u128)
                }
            }
        )*
    };
}

implement_sign_extending_casts!(i8, i16, i32, i64, i128);

impl CastFrom<f64> for U128 {
    fn cast_from(input: f64) -> Self {
        // Native float-to-int casts already truncate toward zero,
        // saturate at the range ends and map NaN to zero.
        Self::from(input as u128)
    }
}

impl CastFrom<f32> for U128 {
    fn cast_from(input: f32) -> Self {
        Self::from(input as u128)
    }
}

impl CastFrom<U128> for f64 {
    fn cast_from(input: U128) -> Self {
        u128::cast_from(input) as f64
    }
}

impl CastFrom<U128> for f32 {
    fn cast_from(input: U128) -> Self {
        u128::cast_from(input) as f32
    }
}

macro_rules! implement_native_comparisons {
    ($($Native:ty),* $(,)?) => {
        $(
            impl PartialEq<$Native> for U128 {
                fn eq(&self, other: &$Native) -> bool {
                    *self == Self::from(*other)
                }
            }

            impl PartialEq<U128> for $Native {
                fn eq(&self, other: &U128) -> bool {
                    U128::from(*self) == *other
                }
            }

            impl PartialOrd<$Native> for U128 {
                fn partial_cmp(&self, other: &$Native) -> Option<std::cmp::Ordering> {
                    self.partial_cmp(&Self::from(*other))
                }
            }

            impl PartialOrd<U128> for $Native {
                fn partial_cmp(&self, other: &U128) -> Option<std::cmp::Ordering> {
                    U128::from(*self).partial_cmp(other)
                }
            }
        )*
    };
}

implement_native_comparisons!(u8, u16, u32, u64, u128);

impl std::fmt::Display for U128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "", &self.to_string_radix(10, RadixFormat::new()))
    }
}

impl std::fmt::LowerHex for U128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "0x", &self.to_string_radix(16, RadixFormat::new()))
    }
}

impl std::fmt::UpperHex for U128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.to_string_radix(16, RadixFormat::new()).to_uppercase();
        f.pad_integral(true, "0x", &digits)
    }
}

impl std::fmt::Binary for U128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "0b", &self.to_string_radix(2, RadixFormat::new()))
    }
}

impl std::str::FromStr for U128 {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// SAFETY
//
// U128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for U128 {}

// SAFETY
//
// u64 impl bytemuck::Pod,
// [T; N] impl bytemuck::Pod if T: bytemuck::Pod
//
// https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#foreign-impls
//
// Thus U128 can safely be considered Pod
unsafe impl bytemuck::Pod for U128 {}

impl Numeric for U128 {
    const BITS: usize = Self::BITS as usize;

    const ZERO: Self = Self::ZERO;

    const ONE: Self = Self::ONE;

    const TWO: Self = Self::TWO;

    const MAX: Self = Self::MAX;
}

impl UnsignedNumeric for U128 {}
