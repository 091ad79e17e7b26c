//! codec/encode.rs
//! Little-endian unsigned integer writers.
//!
//! Each writer appends exactly its width in bytes, least significant first.
//!
//! Truncation: the odd-width writers (`write_u24`, `write_u40`, `write_u48`,
//! `write_u56`) take a carrier wider than their width and silently drop any
//! bits above it. Wire formats that store truncated counters (packet numbers,
//! offsets) depend on this. Callers that need the full value preserved must
//! check `Width::fits` first.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{U24_LEN, U32_LEN, U40_LEN, U48_LEN, U56_LEN, U64_LEN};
use crate::io::ByteSink;

#[inline]
pub fn write_u8<K: ByteSink>(dst: &mut K, v: u8) {
    dst.write_byte(v);
}

#[inline]
pub fn write_u16<K: ByteSink>(dst: &mut K, v: u16) {
    dst.write_bytes(&v.to_le_bytes());
}

/// Write the low 24 bits of `v`. Bits 24..32 are dropped.
#[inline]
pub fn write_u24<K: ByteSink>(dst: &mut K, v: u32) {
    let mut buf = [0u8; U32_LEN];
    LittleEndian::write_u32(&mut buf, v);
    dst.write_bytes(&buf[..U24_LEN]);
}

#[inline]
pub fn write_u32<K: ByteSink>(dst: &mut K, v: u32) {
    dst.write_bytes(&v.to_le_bytes());
}

/// Write the low 40 bits of `v`. Bits 40..64 are dropped.
#[inline]
pub fn write_u40<K: ByteSink>(dst: &mut K, v: u64) {
    write_low_bytes(dst, v, U40_LEN);
}

/// Write the low 48 bits of `v`. Bits 48..64 are dropped.
#[inline]
pub fn write_u48<K: ByteSink>(dst: &mut K, v: u64) {
    write_low_bytes(dst, v, U48_LEN);
}

/// Write the low 56 bits of `v`. Bits 56..64 are dropped.
#[inline]
pub fn write_u56<K: ByteSink>(dst: &mut K, v: u64) {
    write_low_bytes(dst, v, U56_LEN);
}

#[inline]
pub fn write_u64<K: ByteSink>(dst: &mut K, v: u64) {
    dst.write_bytes(&v.to_le_bytes());
}

#[inline(always)]
fn write_low_bytes<K: ByteSink>(dst: &mut K, v: u64, len: usize) {
    let mut buf = [0u8; U64_LEN];
    LittleEndian::write_u64(&mut buf, v);
    dst.write_bytes(&buf[..len]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_byte_order() {
        let mut out = Vec::new();
        write_u64(&mut out, 0x0102_0304_0506_0708);
        assert_eq!(out, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn each_writer_appends_its_width() {
        let mut out = Vec::new();
        write_u8(&mut out, 0);
        assert_eq!(out.len(), 1);
        write_u16(&mut out, 0);
        assert_eq!(out.len(), 3);
        write_u24(&mut out, 0);
        assert_eq!(out.len(), 6);
        write_u32(&mut out, 0);
        assert_eq!(out.len(), 10);
        write_u40(&mut out, 0);
        assert_eq!(out.len(), 15);
        write_u48(&mut out, 0);
        assert_eq!(out.len(), 21);
        write_u56(&mut out, 0);
        assert_eq!(out.len(), 28);
        write_u64(&mut out, 0);
        assert_eq!(out.len(), 36);
    }

    #[test]
    fn u24_drops_bit_24() {
        let mut wide = Vec::new();
        write_u24(&mut wide, 0x1FF_FFFF);
        let mut exact = Vec::new();
        write_u24(&mut exact, 0xFF_FFFF);
        assert_eq!(wide, exact);
        assert_eq!(wide, [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn u56_drops_top_byte() {
        let mut out = Vec::new();
        write_u56(&mut out, 0xAB01_0203_0405_0607);
        assert_eq!(out, [0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }
}
