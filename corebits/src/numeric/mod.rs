//! Traits shared by the numeric types of this crate.
//!
//! The native integer widths and the crate's 128-bit limb types all
//! implement [`Numeric`] plus one of the signedness markers, and convert
//! between each other through [`CastFrom`]/[`CastInto`]. Generic helpers
//! bound on these traits work uniformly over both families.

mod native;

/// Cast a value to another type, following the semantics of the `as`
/// keyword: truncation when narrowing, zero/sign extension when widening.
pub trait CastFrom<Input>: Sized {
    fn cast_from(input: Input) -> Self;
}

/// Mirror of [`CastFrom`], implemented for free via the blanket impl.
pub trait CastInto<Output>: Sized {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    #[inline]
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

/// Base trait of every numeric type handled by this crate.
pub trait Numeric: Sized + Copy + Default + PartialEq + PartialOrd + 'static {
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MAX: Self;
}

/// Marker for the unsigned [`Numeric`] types.
pub trait UnsignedNumeric: Numeric {}

/// Marker for the signed two's-complement [`Numeric`] types.
pub trait SignedNumeric: Numeric {
    /// The smallest representable value; not symmetric with `MAX`.
    const MIN: Self;
}
