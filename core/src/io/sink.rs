//! io/sink.rs
//! Growable byte sinks.
//!
//! Writing is infallible at this layer. Allocation failures belong to the
//! sink implementation.

use bytes::{BufMut, BytesMut};

/// A growable buffer that accepts appended bytes in order.
pub trait ByteSink {
    /// Append one byte.
    fn write_byte(&mut self, b: u8);

    /// Append a run of bytes, in order, with nothing in between.
    #[inline]
    fn write_bytes(&mut self, src: &[u8]) {
        for &b in src {
            self.write_byte(b);
        }
    }
}

impl<K: ByteSink + ?Sized> ByteSink for &mut K {
    #[inline]
    fn write_byte(&mut self, b: u8) {
        (**self).write_byte(b)
    }

    #[inline]
    fn write_bytes(&mut self, src: &[u8]) {
        (**self).write_bytes(src)
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    #[inline]
    fn write_bytes(&mut self, src: &[u8]) {
        self.extend_from_slice(src);
    }
}

impl ByteSink for BytesMut {
    #[inline]
    fn write_byte(&mut self, b: u8) {
        self.put_u8(b);
    }

    #[inline]
    fn write_bytes(&mut self, src: &[u8]) {
        self.put_slice(src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_appends_in_order() {
        let mut out = vec![0xFF];
        out.write_byte(1);
        out.write_bytes(&[2, 3]);
        assert_eq!(out, [0xFF, 1, 2, 3]);
    }

    #[test]
    fn bytes_mut_sink_through_reference() {
        let mut buf = BytesMut::new();
        {
            let mut sink = &mut buf;
            sink.write_bytes(&[4, 5]);
        }
        assert_eq!(&buf[..], &[4, 5]);
    }
}
