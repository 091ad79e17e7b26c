//! telemetry/mod.rs
//! Counters for codec traffic and immutable snapshots of them.
//!
//! All counters are owned by the adapter that collects them. Nothing is
//! recorded unless the caller wraps its source or sink.

pub mod counters;
pub mod counting;
pub mod snapshot;

pub use counters::*;
pub use counting::*;
pub use snapshot::*;
