//! telemetry/counting.rs
//! Source and sink wrappers that count the bytes passing through.

use crate::io::{ByteSink, ByteSource};
use crate::telemetry::counters::CodecCounters;
use crate::types::DecodeError;

/// Counts every byte handed out by the inner source, and every failure.
///
/// Bytes pulled by a decode that later fails are still counted: they left
/// the inner source.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    counters: CodecCounters,
}

impl<S: ByteSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, counters: CodecCounters::default() }
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_parts(self) -> (S, CodecCounters) {
        (self.inner, self.counters)
    }
}

impl<S: ByteSource> ByteSource for CountingSource<S> {
    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        match self.inner.read_byte() {
            Ok(b) => {
                self.counters.add_read(1);
                Ok(b)
            }
            Err(e) => {
                self.counters.add_failure(matches!(e, DecodeError::Io(_)));
                Err(e)
            }
        }
    }
}

/// Counts every byte appended to the inner sink.
#[derive(Debug)]
pub struct CountingSink<K> {
    inner: K,
    counters: CodecCounters,
}

impl<K: ByteSink> CountingSink<K> {
    pub fn new(inner: K) -> Self {
        Self { inner, counters: CodecCounters::default() }
    }

    pub fn counters(&self) -> &CodecCounters {
        &self.counters
    }

    pub fn get_ref(&self) -> &K {
        &self.inner
    }

    pub fn into_parts(self) -> (K, CodecCounters) {
        (self.inner, self.counters)
    }
}

impl<K: ByteSink> ByteSink for CountingSink<K> {
    fn write_byte(&mut self, b: u8) {
        self.inner.write_byte(b);
        self.counters.add_written(1);
    }

    fn write_bytes(&mut self, src: &[u8]) {
        self.inner.write_bytes(src);
        self.counters.add_written(src.len());
    }
}
