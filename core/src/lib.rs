//! wire-utils
//!
//! Little-endian integer codec primitives for QUIC-family wire formats.
//! Synchronous, no global state, no framing.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod io;
pub mod codec;
pub mod random;
pub mod sort;
pub mod telemetry;

pub use types::{DecodeError, EntropyError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{ReadLeExt, Width, WriteLeExt};
    pub use crate::io::{ByteSink, ByteSource, IoSource};
    pub use crate::random::{random_bit, EntropyConfig, RandomBits};
    pub use crate::sort::{Sortable, Uint32Slice};
    pub use crate::types::{DecodeError, EntropyError};
}
