//! CRC checksums and non-cryptographic hash functions.
//!
//! The CRC types are streaming: feed chunks through `update` and read the
//! checksum with `finish`, or use the one-shot `checksum` helper. Their
//! lookup tables are built at compile time. All parameter sets are pinned
//! by the canonical `"123456789"` check values in the tests.

mod crc;
mod fnv;

pub use crc::{Crc16, Crc32, Crc64};
pub use fnv::{djb2, fnv1a_32, fnv1a_64};
