//! codec/generic.rs
//! Width-parameterized little-endian reader and writer.
//!
//! Used for widths without a dedicated fast path, and for widths only known
//! at runtime (e.g. a length field decoded just before the value).

use crate::codec::width::Width;
use crate::constants::MAX_UINT_LEN;
use crate::io::{ByteSink, ByteSource};
use crate::types::DecodeError;

/// Read an `n`-byte little-endian unsigned integer.
///
/// Byte `i` (in read order) is folded in as `byte_i << (8 * i)`, so the
/// first byte is the least significant. `n == 0` reads nothing and yields 0.
///
/// `n` must be at most 8. Larger counts are a caller bug: debug builds
/// assert, release builds keep reading and the extra bytes land on wrapped
/// shift positions, so the result is meaningless.
///
/// # Errors
/// `DecodeError` from the source on the first missing byte. Bytes already
/// consumed are not restored.
pub fn read_uint_n<S: ByteSource>(src: &mut S, n: u8) -> Result<u64, DecodeError> {
    debug_assert!(n as usize <= MAX_UINT_LEN, "read_uint_n: width {n} exceeds 8 bytes");

    let mut res = 0u64;
    for i in 0..n {
        let b = src.read_byte()?;
        res ^= u64::from(b).wrapping_shl(u32::from(i) * 8);
    }
    Ok(res)
}

/// Checked form of [`read_uint_n`].
#[inline]
pub fn read_uint<S: ByteSource>(src: &mut S, width: Width) -> Result<u64, DecodeError> {
    read_uint_n(src, width as u8)
}

/// Write the low `n` bytes of `value`, least significant first.
///
/// Bits above `8 * n` are discarded without error. `n == 0` writes nothing.
/// `n` must be at most 8; debug builds assert, release builds clamp.
pub fn write_uint_n<K: ByteSink>(dst: &mut K, value: u64, n: u8) {
    debug_assert!(n as usize <= MAX_UINT_LEN, "write_uint_n: width {n} exceeds 8 bytes");

    let bytes = value.to_le_bytes();
    dst.write_bytes(&bytes[..(n as usize).min(MAX_UINT_LEN)]);
}

/// Checked form of [`write_uint_n`]. Truncates like every other encoder.
#[inline]
pub fn write_uint<K: ByteSink>(dst: &mut K, value: u64, width: Width) {
    write_uint_n(dst, value, width as u8)
}
