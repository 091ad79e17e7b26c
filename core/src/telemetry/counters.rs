//! telemetry/counters.rs
//! Byte counters for codec traffic.
//!
//! Summary: collected by the counting adapters, merged across sources if the
//! caller parses several streams, converted into a `CounterSnapshot` at the
//! end.
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Deterministic counters collected while reading and writing.
#[derive(Default, Clone, Copy, Debug, Encode, Decode, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodecCounters {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub read_failures: u64,
    pub io_failures: u64,
}

impl CodecCounters {
    pub fn add_read(&mut self, n: usize) {
        self.bytes_read += n as u64;
    }

    pub fn add_written(&mut self, n: usize) {
        self.bytes_written += n as u64;
    }

    /// Record a failed read. `io` is true for transport errors, false for
    /// plain exhaustion.
    pub fn add_failure(&mut self, io: bool) {
        self.read_failures += 1;
        if io {
            self.io_failures += 1;
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.bytes_read + self.bytes_written
    }

    // Per-stream counters are merged by the caller, no shared state.
    pub fn merge(&mut self, other: &CodecCounters) {
        self.bytes_read += other.bytes_read;
        self.bytes_written += other.bytes_written;
        self.read_failures += other.read_failures;
        self.io_failures += other.io_failures;
    }

    /// Compact binary form for shipping counters between processes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::error::EncodeError> {
        bincode::encode_to_vec(self, bincode::config::standard())
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let (counters, _) = bincode::decode_from_slice(buf, bincode::config::standard())?;
        Ok(counters)
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
