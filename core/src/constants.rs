//! constants.rs
//! Encoded widths and entropy batching bounds.
//!
//! Widths are in bytes. The odd widths (3, 5, 6, 7) are fixed by the wire
//! formats that consume this crate and must not be changed.

/// Encoded width of an 8-bit value.
pub const U8_LEN: usize = 1;
/// Encoded width of a 16-bit value.
pub const U16_LEN: usize = 2;
/// Encoded width of a 24-bit value (carried in `u32`).
pub const U24_LEN: usize = 3;
/// Encoded width of a 32-bit value.
pub const U32_LEN: usize = 4;
/// Encoded width of a 40-bit value (carried in `u64`).
pub const U40_LEN: usize = 5;
/// Encoded width of a 48-bit value (carried in `u64`).
pub const U48_LEN: usize = 6;
/// Encoded width of a 56-bit value (carried in `u64`).
pub const U56_LEN: usize = 7;
/// Encoded width of a 64-bit value.
pub const U64_LEN: usize = 8;

/// Largest width the generic reader accepts.
pub const MAX_UINT_LEN: usize = U64_LEN;

/// Largest value representable in 24 bits.
pub const U24_MAX: u32 = (1 << 24) - 1;
/// Largest value representable in 40 bits.
pub const U40_MAX: u64 = (1 << 40) - 1;
/// Largest value representable in 48 bits.
pub const U48_MAX: u64 = (1 << 48) - 1;
/// Largest value representable in 56 bits.
pub const U56_MAX: u64 = (1 << 56) - 1;

/// Defaults when `EntropyConfig::batch` is `None`.
pub const DEFAULT_ENTROPY_BATCH: usize = 32;
/// Smallest refill allowed for a batched bit source.
pub const MIN_ENTROPY_BATCH: usize = 1;
/// Upper sanity bound on a single refill (4 KiB).
pub const MAX_ENTROPY_BATCH: usize = 4 * 1024;
