//! random/batch.rs
//! Batched secure random bits.
//!
//! Summary: pulls `batch_len` bytes of entropy per refill and hands out all
//! eight bits of each byte, one per call.
//!
//! Invariants:
//! - A bit is handed out at most once.
//! - After a failed refill no byte of the failed batch is used; the next call
//!   attempts a fresh refill.
//! - Owned by the caller. Nothing is cached globally.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::constants::{DEFAULT_ENTROPY_BATCH, MAX_ENTROPY_BATCH, MIN_ENTROPY_BATCH};
use crate::types::EntropyError;

/// Tuning for [`RandomBits`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntropyConfig {
    /// Bytes drawn per refill. `None` selects `DEFAULT_ENTROPY_BATCH`.
    pub batch: Option<usize>,
}

impl EntropyConfig {
    pub fn with_batch(batch: usize) -> Self {
        Self { batch: Some(batch) }
    }

    /// Effective refill size, clamped to `MIN_ENTROPY_BATCH..=MAX_ENTROPY_BATCH`.
    pub fn batch_len(&self) -> usize {
        match self.batch {
            None => DEFAULT_ENTROPY_BATCH,
            Some(n) => n.clamp(MIN_ENTROPY_BATCH, MAX_ENTROPY_BATCH),
        }
    }
}

/// Caller-owned source of secure random bits.
pub struct RandomBits<R = OsRng> {
    rng: R,
    buf: Vec<u8>,
    next: usize,
    current: u8,
    bits_left: u8,
}

impl RandomBits<OsRng> {
    /// Bit source backed by the operating system RNG, default batch size.
    pub fn new() -> Self {
        Self::from_rng(OsRng, EntropyConfig::default())
    }

    pub fn with_config(config: EntropyConfig) -> Self {
        Self::from_rng(OsRng, config)
    }
}

impl Default for RandomBits<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> RandomBits<R> {
    pub fn from_rng(rng: R, config: EntropyConfig) -> Self {
        let len = config.batch_len();
        Self {
            rng,
            buf: vec![0u8; len],
            // Start drained so the first call refills.
            next: len,
            current: 0,
            bits_left: 0,
        }
    }

    /// Next random bit.
    ///
    /// # Errors
    /// `EntropyError::Unavailable` if a refill was needed and the RNG failed.
    pub fn next_bit(&mut self) -> Result<bool, EntropyError> {
        if self.bits_left == 0 {
            if self.next == self.buf.len() {
                self.refill()?;
            }
            self.current = self.buf[self.next];
            self.next += 1;
            self.bits_left = 8;
        }
        let bit = self.current & 1 == 1;
        self.current >>= 1;
        self.bits_left -= 1;
        Ok(bit)
    }

    /// Bits available before the next refill.
    pub fn buffered_bits(&self) -> usize {
        (self.buf.len() - self.next) * 8 + self.bits_left as usize
    }

    pub fn batch_len(&self) -> usize {
        self.buf.len()
    }

    fn refill(&mut self) -> Result<(), EntropyError> {
        match self.rng.try_fill_bytes(&mut self.buf) {
            Ok(()) => {
                self.next = 0;
                Ok(())
            }
            Err(e) => {
                // Whatever landed in the buffer is not trusted.
                self.buf.fill(0);
                self.next = self.buf.len();
                tracing::debug!(error = %e, batch = self.buf.len(), "entropy refill failed");
                Err(e.into())
            }
        }
    }
}

impl<R: RngCore + CryptoRng> Iterator for RandomBits<R> {
    type Item = Result<bool, EntropyError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_bit())
    }
}
