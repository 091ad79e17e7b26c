//! telemetry/snapshot.rs
//!
//! Immutable view of the counters taken at the end of a parse or build.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub read_failures: u64,
    pub io_failures: u64,
    /// Fraction of failed reads that were transport errors rather than
    /// exhaustion. 0.0 when nothing failed.
    pub io_failure_ratio: f64,
}

impl CounterSnapshot {
    pub fn from(counters: &CodecCounters) -> Self {
        let io_failure_ratio = if counters.read_failures > 0 {
            counters.io_failures as f64 / counters.read_failures as f64
        } else {
            0.0
        };

        Self {
            bytes_read: counters.bytes_read,
            bytes_written: counters.bytes_written,
            read_failures: counters.read_failures,
            io_failures: counters.io_failures,
            io_failure_ratio,
        }
    }

    pub fn sanity_check(&self) -> bool {
        self.io_failures <= self.read_failures && (0.0..=1.0).contains(&self.io_failure_ratio)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_and_json() {
        let counters = CodecCounters { bytes_read: 8, bytes_written: 0, read_failures: 4, io_failures: 1 };
        let snap = CounterSnapshot::from(&counters);
        assert_eq!(snap.io_failure_ratio, 0.25);
        assert!(snap.sanity_check());

        let json = snap.to_json().unwrap();
        let back: CounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn empty_counters_have_zero_ratio() {
        let snap = CounterSnapshot::from(&CodecCounters::default());
        assert_eq!(snap.io_failure_ratio, 0.0);
        assert!(snap.sanity_check());
    }
}
