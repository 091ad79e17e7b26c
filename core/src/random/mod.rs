//! random/mod.rs
//! Cryptographically secure random bits.

pub mod batch;
pub mod bit;

pub use batch::*;
pub use bit::*;
