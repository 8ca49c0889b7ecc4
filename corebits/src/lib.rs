//! Foundational integer and bit primitives.
//!
//! The centerpiece is an exact fixed-width 128-bit integer pair,
//! [`U128`](bigint::U128) and [`I128`](bigint::I128), stored as two 64-bit
//! limbs in little endian order. All arithmetic wraps modulo `2^128`
//! (two's complement for the signed type), shifts carry bits across the
//! limb boundary, and values convert to and from text in radix 2, 10
//! and 16.
//!
//! Around it live the small helpers such a type tends to travel with:
//! bit-field manipulation ([`bits`]), power-of-two alignment ([`align`]),
//! byte-order reads and writes ([`endian`]), CRC and non-cryptographic
//! hashes ([`hash`]), rounding integer division ([`round`]), and a
//! process-wide value registry with explicit lifetime control
//! ([`registry`]).
//!
//! # Quick Example
//!
//! ```rust
//! use corebits::bigint::{I128, U128};
//! use corebits::strconv::RadixFormat;
//!
//! let a = U128::from_str_radix("abcd1234fefe", 16).unwrap();
//! assert_eq!(
//!     a.to_string_radix(16, RadixFormat::new().with_prefix(true)),
//!     "0xabcd1234fefe"
//! );
//!
//! // Wrapping arithmetic over the full 128-bit range.
//! assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
//!
//! // Sign-aware parsing and formatting on the signed type.
//! let min = I128::MIN;
//! assert_eq!(min.to_string(), "-170141183460469231731687303715884105728");
//! ```

pub mod align;
pub mod bigint;
pub mod bits;
pub mod endian;
pub mod hash;
pub mod numeric;
pub mod registry;
pub mod round;

pub use bigint::strconv;
pub use bigint::{I128, U128};

/// Convenience re-exports of the items most callers touch.
pub mod prelude {
    pub use crate::bigint::strconv::{ParseIntError, RadixFormat};
    pub use crate::bigint::{I128, U128};
    pub use crate::numeric::{CastFrom, CastInto, Numeric, SignedNumeric, UnsignedNumeric};
}
