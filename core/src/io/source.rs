//! io/source.rs
//! Byte-at-a-time readable sources.
//!
//! Contract:
//! - `read_byte` returns the next unused byte or an error; a byte is never
//!   delivered twice.
//! - Exhaustion is reported as `DecodeError::Exhausted`, transport failures
//!   as `DecodeError::Io`.
//! - The position belongs to the source. Callers never rewind it.

use std::collections::VecDeque;
use std::io::{self, Cursor, Read};

use bytes::{Buf, Bytes, BytesMut};

use crate::types::DecodeError;

/// A source of bytes that can be consumed one at a time.
pub trait ByteSource {
    /// Pull the next byte.
    fn read_byte(&mut self) -> Result<u8, DecodeError>;

    /// Pull exactly `N` bytes in order.
    ///
    /// Fails on the first missing byte; bytes pulled before the failure are
    /// not handed back to the source.
    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError>
    where
        Self: Sized,
    {
        let mut out = [0u8; N];
        for slot in out.iter_mut() {
            *slot = self.read_byte()?;
        }
        Ok(out)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        (**self).read_byte()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        (**self).read_byte()
    }
}

impl ByteSource for &[u8] {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let (&first, rest) = self.split_first().ok_or(DecodeError::Exhausted)?;
        *self = rest;
        Ok(first)
    }
}

impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        if !self.has_remaining() {
            return Err(DecodeError::Exhausted);
        }
        Ok(self.get_u8())
    }
}

macro_rules! impl_byte_source_for_buf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ByteSource for $ty {
                #[inline]
                fn read_byte(&mut self) -> Result<u8, DecodeError> {
                    if !self.has_remaining() {
                        return Err(DecodeError::Exhausted);
                    }
                    Ok(self.get_u8())
                }
            }
        )*
    };
}

impl_byte_source_for_buf!(Bytes, BytesMut, VecDeque<u8>);

/// Adapter turning any [`std::io::Read`] into a [`ByteSource`].
///
/// Each `read_byte` issues a one-byte `read_exact`. Wrap the reader in a
/// `BufReader` first when per-call syscalls matter.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let mut b = [0u8; 1];
        match self.inner.read_exact(&mut b) {
            Ok(()) => Ok(b[0]),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::trace!("io source reached end of data");
                Err(DecodeError::Exhausted)
            }
            Err(e) => {
                tracing::debug!(error = %e, "io source read failed");
                Err(DecodeError::Io(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_advances_and_exhausts() {
        let data = [1u8, 2];
        let mut src: &[u8] = &data;
        assert_eq!(src.read_byte().unwrap(), 1);
        assert_eq!(src.len(), 1);
        assert_eq!(src.read_byte().unwrap(), 2);
        assert!(src.read_byte().unwrap_err().is_exhausted());
    }

    #[test]
    fn cursor_source_tracks_position() {
        let mut src = Cursor::new(vec![9u8, 8, 7]);
        let arr: [u8; 2] = src.read_array().unwrap();
        assert_eq!(arr, [9, 8]);
        assert_eq!(src.position(), 2);
    }

    #[test]
    fn read_array_keeps_consumed_bytes_on_failure() {
        let mut src = Bytes::from_static(&[1, 2, 3]);
        let err = src.read_array::<4>().unwrap_err();
        assert!(err.is_exhausted());
        assert!(src.is_empty());
    }

    #[test]
    fn io_source_maps_eof_to_exhausted() {
        let mut src = IoSource::new(&[0xAAu8][..]);
        assert_eq!(src.read_byte().unwrap(), 0xAA);
        assert!(src.read_byte().unwrap_err().is_exhausted());
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn io_source_surfaces_transport_errors() {
        let mut src = IoSource::new(Broken);
        let err = src.read_byte().unwrap_err();
        assert!(matches!(err, DecodeError::Io(ref e) if e.kind() == io::ErrorKind::ConnectionReset));
    }
}
