//! codec/decode.rs
//! Little-endian unsigned integer readers.
//!
//! Every reader pulls exactly its width in bytes, first byte least
//! significant. On the first missing byte the reader returns the source's
//! error and no value; the bytes it already pulled stay consumed.

use crate::codec::generic::read_uint_n;
use crate::constants::{U16_LEN, U24_LEN, U32_LEN, U40_LEN, U48_LEN, U56_LEN, U64_LEN};
use crate::io::ByteSource;
use crate::types::DecodeError;

#[inline]
pub fn read_u8<S: ByteSource>(src: &mut S) -> Result<u8, DecodeError> {
    src.read_byte()
}

#[inline]
pub fn read_u16<S: ByteSource>(src: &mut S) -> Result<u16, DecodeError> {
    let b: [u8; U16_LEN] = src.read_array()?;
    Ok(u16::from_le_bytes(b))
}

/// Read a 3-byte value into the low 24 bits of a `u32`.
#[inline]
pub fn read_u24<S: ByteSource>(src: &mut S) -> Result<u32, DecodeError> {
    // At most 24 significant bits, the cast cannot lose anything.
    Ok(read_uint_n(src, U24_LEN as u8)? as u32)
}

#[inline]
pub fn read_u32<S: ByteSource>(src: &mut S) -> Result<u32, DecodeError> {
    let b: [u8; U32_LEN] = src.read_array()?;
    Ok(u32::from_le_bytes(b))
}

#[inline]
pub fn read_u40<S: ByteSource>(src: &mut S) -> Result<u64, DecodeError> {
    read_uint_n(src, U40_LEN as u8)
}

#[inline]
pub fn read_u48<S: ByteSource>(src: &mut S) -> Result<u64, DecodeError> {
    read_uint_n(src, U48_LEN as u8)
}

#[inline]
pub fn read_u56<S: ByteSource>(src: &mut S) -> Result<u64, DecodeError> {
    read_uint_n(src, U56_LEN as u8)
}

#[inline]
pub fn read_u64<S: ByteSource>(src: &mut S) -> Result<u64, DecodeError> {
    let b: [u8; U64_LEN] = src.read_array()?;
    Ok(u64::from_le_bytes(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_widths_are_little_endian() {
        let data = [0x08u8, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];

        let mut src: &[u8] = &data;
        assert_eq!(read_u64(&mut src).unwrap(), 0x0102_0304_0506_0708);

        let mut src: &[u8] = &data;
        assert_eq!(read_u32(&mut src).unwrap(), 0x0506_0708);
        assert_eq!(read_u16(&mut src).unwrap(), 0x0304);
        assert_eq!(read_u8(&mut src).unwrap(), 0x02);
    }

    #[test]
    fn odd_widths_consume_exact_byte_counts() {
        let data = [0xFFu8; 8];

        let mut src: &[u8] = &data;
        assert_eq!(read_u24(&mut src).unwrap(), 0xFF_FFFF);
        assert_eq!(src.len(), 5);

        let mut src: &[u8] = &data;
        assert_eq!(read_u40(&mut src).unwrap(), 0xFF_FFFF_FFFF);
        assert_eq!(src.len(), 3);

        let mut src: &[u8] = &data;
        assert_eq!(read_u48(&mut src).unwrap(), 0xFFFF_FFFF_FFFF);
        assert_eq!(src.len(), 2);

        let mut src: &[u8] = &data;
        assert_eq!(read_u56(&mut src).unwrap(), 0x00FF_FFFF_FFFF_FFFF);
        assert_eq!(src.len(), 1);
    }

    #[test]
    fn empty_source_fails_every_reader() {
        let mut src: &[u8] = &[];
        assert!(read_u8(&mut src).unwrap_err().is_exhausted());
        assert!(read_u16(&mut src).unwrap_err().is_exhausted());
        assert!(read_u64(&mut src).unwrap_err().is_exhausted());
    }
}
