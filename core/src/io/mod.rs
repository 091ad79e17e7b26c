//! io/mod.rs
//! Capability traits the codec reads from and writes to.

pub mod sink;
pub mod source;

pub use sink::*;
pub use source::*;
