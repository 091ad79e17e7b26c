//! codec/mod.rs
//! Little-endian unsigned integer codec.
//!
//! Free functions take the source or sink as an explicit parameter. The
//! `ReadLeExt` / `WriteLeExt` traits expose the same operations as methods
//! on anything implementing `ByteSource` / `ByteSink`.

pub mod decode;
pub mod encode;
pub mod generic;
pub mod width;

pub use decode::*;
pub use encode::*;
pub use generic::*;
pub use width::Width;

use crate::io::{ByteSink, ByteSource};
use crate::types::DecodeError;

/// Method-call form of the readers in [`decode`] and [`generic`].
pub trait ReadLeExt: ByteSource + Sized {
    #[inline]
    fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        read_u16(self)
    }

    #[inline]
    fn read_u24_le(&mut self) -> Result<u32, DecodeError> {
        read_u24(self)
    }

    #[inline]
    fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        read_u32(self)
    }

    #[inline]
    fn read_u40_le(&mut self) -> Result<u64, DecodeError> {
        read_u40(self)
    }

    #[inline]
    fn read_u48_le(&mut self) -> Result<u64, DecodeError> {
        read_u48(self)
    }

    #[inline]
    fn read_u56_le(&mut self) -> Result<u64, DecodeError> {
        read_u56(self)
    }

    #[inline]
    fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        read_u64(self)
    }

    #[inline]
    fn read_uint_le(&mut self, width: Width) -> Result<u64, DecodeError> {
        read_uint(self, width)
    }
}

impl<S: ByteSource> ReadLeExt for S {}

/// Method-call form of the writers in [`encode`] and [`generic`].
pub trait WriteLeExt: ByteSink + Sized {
    #[inline]
    fn write_u16_le(&mut self, v: u16) {
        write_u16(self, v)
    }

    #[inline]
    fn write_u24_le(&mut self, v: u32) {
        write_u24(self, v)
    }

    #[inline]
    fn write_u32_le(&mut self, v: u32) {
        write_u32(self, v)
    }

    #[inline]
    fn write_u40_le(&mut self, v: u64) {
        write_u40(self, v)
    }

    #[inline]
    fn write_u48_le(&mut self, v: u64) {
        write_u48(self, v)
    }

    #[inline]
    fn write_u56_le(&mut self, v: u64) {
        write_u56(self, v)
    }

    #[inline]
    fn write_u64_le(&mut self, v: u64) {
        write_u64(self, v)
    }

    #[inline]
    fn write_uint_le(&mut self, v: u64, width: Width) {
        write_uint(self, v, width)
    }
}

impl<K: ByteSink> WriteLeExt for K {}
