//! random/bit.rs
//! One-shot secure random bit.
//!
//! Draws a single byte from a cryptographically secure RNG and returns its
//! least significant bit. One byte of entropy per call; use
//! [`RandomBits`](crate::random::RandomBits) to amortize the draws.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::types::EntropyError;

/// Return one secure random bit from the operating system RNG.
///
/// # Errors
/// `EntropyError::Unavailable` if the OS RNG fails. There is no fallback
/// value; callers decide whether to retry.
#[inline]
pub fn random_bit() -> Result<bool, EntropyError> {
    random_bit_from(&mut OsRng)
}

/// Same as [`random_bit`] with a caller-provided secure RNG.
pub fn random_bit_from<R>(rng: &mut R) -> Result<bool, EntropyError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut b = [0u8; 1];
    if let Err(e) = rng.try_fill_bytes(&mut b) {
        tracing::debug!(error = %e, "entropy source failed");
        return Err(e.into());
    }
    // even -> false, odd -> true
    Ok(b[0] & 1 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    // StepRng is not a CryptoRng; wrap it so the parity mapping can be pinned.
    struct Fixed(StepRng);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }
        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for Fixed {}

    #[test]
    fn parity_maps_to_bool() {
        let mut even = Fixed(StepRng::new(0x10, 0));
        assert!(!random_bit_from(&mut even).unwrap());

        let mut odd = Fixed(StepRng::new(0x11, 0));
        assert!(random_bit_from(&mut odd).unwrap());
    }

    #[test]
    fn os_rng_produces_both_values() {
        let mut seen = [false; 2];
        for _ in 0..256 {
            seen[random_bit().unwrap() as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }
}
