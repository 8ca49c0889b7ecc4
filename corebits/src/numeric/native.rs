use super::{CastFrom, Numeric, SignedNumeric, UnsignedNumeric};

macro_rules! implement {
    (unsigned: $($Type:ty),* $(,)?) => {
        $(
            impl Numeric for $Type {
                const BITS: usize = <$Type>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const MAX: Self = <$Type>::MAX;
            }

            impl UnsignedNumeric for $Type {}
        )*
    };
    (signed: $($Type:ty),* $(,)?) => {
        $(
            impl Numeric for $Type {
                const BITS: usize = <$Type>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const MAX: Self = <$Type>::MAX;
            }

            impl SignedNumeric for $Type {
                const MIN: Self = <$Type>::MIN;
            }
        )*
    };
}

implement!(unsigned: u8, u16, u32, u64, u128, usize);
implement!(signed: i8, i16, i32, i64, i128, isize);

macro_rules! implement_casts {
    ($(($From:ty => $($To:ty),*)),* $(,)?) => {
        $(
            $(
                impl CastFrom<$From> for $To {
                    #[inline]
                    fn cast_from(input: $From) -> Self {
                        input as Self
                    }
                }
            )*
        )*
    };
}

implement_casts!(
    (u8 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (u16 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (u32 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (u64 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (u128 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (usize => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (i8 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (i16 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (i32 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (i64 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (i128 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (isize => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (f32 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
    (f64 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64),
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CastInto;

    #[test]
    fn cast_truncates_like_as() {
        assert_eq!(u8::cast_from(0x1234u32), 0x34);
        assert_eq!(i8::cast_from(0xFFu32), -1);
        assert_eq!(u64::cast_from(-1i32), u64::MAX);
        let wide: u128 = 0x42u8.cast_into();
        assert_eq!(wide, 0x42);
    }

    #[test]
    fn numeric_consts() {
        assert_eq!(<u64 as Numeric>::BITS, 64);
        assert_eq!(<i128 as Numeric>::MAX, i128::MAX);
        assert_eq!(<i32 as SignedNumeric>::MIN, i32::MIN);
    }
}
