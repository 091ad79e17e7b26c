//! types.rs
//! Error types shared across the crate.
//!
//! Encoding, sorting and counting never fail, so only the read side and the
//! entropy source carry an error type.

use std::io;
use thiserror::Error;

/// Errors raised while pulling bytes out of a [`ByteSource`](crate::io::ByteSource).
///
/// A decode that fails returns no partial value. Bytes consumed before the
/// failure stay consumed; sources are never rewound.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The source has no more bytes.
    #[error("byte source exhausted")]
    Exhausted,

    /// The underlying transport failed.
    #[error("byte source failed: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    /// True when the failure is plain end-of-data rather than a transport error.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DecodeError::Exhausted)
    }
}

/// Errors raised by the secure entropy source.
///
/// No fallback value is ever substituted: a caller that gets this error has
/// no random bit.
#[derive(Error, Debug)]
pub enum EntropyError {
    /// The operating system RNG (or an injected RNG) failed to produce bytes.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}

impl From<rand::Error> for EntropyError {
    fn from(e: rand::Error) -> Self {
        EntropyError::Unavailable(e.to_string())
    }
}
