//! Unaligned byte-order reads and writes over byte slices.
//!
//! The readers take the first `N` bytes of the slice and the writers fill
//! them; both assert that the slice is long enough. For converting whole
//! buffers between orders, [`swap_bytes_within_words`] reverses the bytes
//! of each word-sized chunk in place.

macro_rules! implement_read_write {
    ($(($read_le:ident, $read_be:ident, $write_le:ident, $write_be:ident, $Int:ty)),* $(,)?) => {
        $(
            /// Reads the first bytes of `bytes` as a little endian value.
            ///
            /// # Panics
            /// Panics if the slice is too short.
            pub fn $read_le(bytes: &[u8]) -> $Int {
                const N: usize = std::mem::size_of::<$Int>();
                assert!(bytes.len() >= N, "byte slice too short");
                let mut buffer = [0u8; N];
                buffer.copy_from_slice(&bytes[..N]);
                <$Int>::from_le_bytes(buffer)
            }

            /// Reads the first bytes of `bytes` as a big endian value.
            ///
            /// # Panics
            /// Panics if the slice is too short.
            pub fn $read_be(bytes: &[u8]) -> $Int {
                const N: usize = std::mem::size_of::<$Int>();
                assert!(bytes.len() >= N, "byte slice too short");
                let mut buffer = [0u8; N];
                buffer.copy_from_slice(&bytes[..N]);
                <$Int>::from_be_bytes(buffer)
            }

            /// Writes `value` into the first bytes of `bytes` in little
            /// endian order.
            ///
            /// # Panics
            /// Panics if the slice is too short.
            pub fn $write_le(bytes: &mut [u8], value: $Int) {
                const N: usize = std::mem::size_of::<$Int>();
                assert!(bytes.len() >= N, "byte slice too short");
                bytes[..N].copy_from_slice(&value.to_le_bytes());
            }

            /// Writes `value` into the first bytes of `bytes` in big
            /// endian order.
            ///
            /// # Panics
            /// Panics if the slice is too short.
            pub fn $write_be(bytes: &mut [u8], value: $Int) {
                const N: usize = std::mem::size_of::<$Int>();
                assert!(bytes.len() >= N, "byte slice too short");
                bytes[..N].copy_from_slice(&value.to_be_bytes());
            }
        )*
    };
}

implement_read_write!(
    (read_u16_le, read_u16_be, write_u16_le, write_u16_be, u16),
    (read_u32_le, read_u32_be, write_u32_le, write_u32_be, u32),
    (read_u64_le, read_u64_be, write_u64_le, write_u64_be, u64),
    (read_u128_le, read_u128_be, write_u128_le, write_u128_be, u128),
);

/// Reverses the bytes of each `word_size`-byte chunk in place, converting
/// an array of words between little and big endian order.
///
/// # Panics
/// Panics if `word_size` is zero or the slice length is not a multiple of
/// it.
pub fn swap_bytes_within_words(bytes: &mut [u8], word_size: usize) {
    assert!(word_size > 0, "word size must be non-zero");
    assert!(
        bytes.len() % word_size == 0,
        "slice length must be a multiple of the word size"
    );
    for word in bytes.chunks_exact_mut(word_size) {
        word.reverse();
    }
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use super::*;

    #[test]
    fn test_read() {
        let bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(read_u16_le(&bytes), 0x0201);
        assert_eq!(read_u16_be(&bytes), 0x0102);
        assert_eq!(read_u32_le(&bytes), 0x0403_0201);
        assert_eq!(read_u32_be(&bytes), 0x0102_0304);
        assert_eq!(read_u64_le(&bytes), 0x0807_0605_0403_0201);
        assert_eq!(read_u64_be(&bytes), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_write_then_read() {
        let mut buffer = [0u8; 16];

        write_u32_le(&mut buffer, 0xDEAD_BEEF);
        assert_eq!(read_u32_le(&buffer), 0xDEAD_BEEF);
        assert_eq!(buffer[0], 0xEF);

        write_u32_be(&mut buffer, 0xDEAD_BEEF);
        assert_eq!(read_u32_be(&buffer), 0xDEAD_BEEF);
        assert_eq!(buffer[0], 0xDE);

        let value = 0x0123_4567_89AB_CDEF_1122_3344_5566_7788u128;
        write_u128_le(&mut buffer, value);
        assert_eq!(read_u128_le(&buffer), value);
        write_u128_be(&mut buffer, value);
        assert_eq!(read_u128_be(&buffer), value);
    }

    #[test]
    fn test_reads_ignore_trailing_bytes() {
        let bytes = [0x01u8, 0x02, 0xFF, 0xFF];
        assert_eq!(read_u16_le(&bytes), 0x0201);
    }

    #[test]
    fn test_short_slice_panics() {
        assert!(catch_unwind(|| read_u32_le(&[0u8; 3])).is_err());
        assert!(catch_unwind(|| {
            let mut buffer = [0u8; 7];
            write_u64_be(&mut buffer, 1);
        })
        .is_err());
    }

    #[test]
    fn test_swap_bytes_within_words() {
        let mut bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        swap_bytes_within_words(&mut bytes, 4);
        assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]);

        // swapping twice is the identity
        swap_bytes_within_words(&mut bytes, 4);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);

        // a little endian read of big endian words after a swap
        let mut word = [0x01u8, 0x02, 0x03, 0x04];
        swap_bytes_within_words(&mut word, 4);
        assert_eq!(read_u32_le(&word), 0x0102_0304);

        assert!(catch_unwind(|| {
            let mut odd = [0u8; 6];
            swap_bytes_within_words(&mut odd, 4);
        })
        .is_err());
    }
}
