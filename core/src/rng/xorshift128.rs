//! xorshift128+ style generator over byte-level words
//!
//! Produces doubles uniformly spread over [0.0, 1.0) from 128 bits of state
//! held in two `UInt64` words.
//!
//! # Algorithm
//!
//! Each call advances the state with the xorshift128+ shift triple
//! (23, 17, 26), adds the two words and keeps the low 52 bits as the
//! mantissa of a double in [1.0, 2.0). Subtracting 1.0 maps that onto
//! [0.0, 1.0) without a division.
//!
//! The add is the byte-wise, carry-free `UInt64::add`. The output stream
//! therefore differs from canonical xorshift128+ and must stay that way:
//! the sequence is pinned by golden vectors in the tests.
//!
//! # Determinism
//!
//! Same seed words → same sequence. Seeding goes through a `SeedSource`,
//! so tests can supply fixed words instead of the clock.

use super::seed::{SeedSource, SystemClock};
use crate::word::UInt64;
use std::fmt;

/// Exponent field of a double in [1.0, 2.0)
pub const EXPONENT_BITS: UInt64 =
    UInt64::from_be_bytes([0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

/// Low 52 bits: the mantissa of a double
pub const MANTISSA_MASK: UInt64 =
    UInt64::from_be_bytes([0x00, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

/// Random double generator with 128 bits of private state
///
/// # Example
/// ```
/// use xorshift128_core_rs::XorShift128;
///
/// let mut rng = XorShift128::new();
/// let value = rng.next_f64();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[derive(Clone)]
pub struct XorShift128 {
    state0: UInt64,
    state1: UInt64,
}

impl XorShift128 {
    /// Create a generator seeded from the system clock
    pub fn new() -> Self {
        Self::with_seed_source(&SystemClock)
    }

    /// Create a generator seeded from `source`
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::{SeedSource, UInt64, XorShift128};
    ///
    /// struct Fixed;
    ///
    /// impl SeedSource for Fixed {
    ///     fn seed_words(&self) -> [UInt64; 2] {
    ///         [UInt64::from(1u64), UInt64::from(2u64)]
    ///     }
    /// }
    ///
    /// let mut a = XorShift128::with_seed_source(&Fixed);
    /// let mut b = XorShift128::with_seed_source(&Fixed);
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    pub fn with_seed_source<S: SeedSource + ?Sized>(source: &S) -> Self {
        let [state0, state1] = source.seed_words();

        let degenerate = state0 == UInt64::zero() && state1 == UInt64::zero();
        tracing::debug!(degenerate, "seeded xorshift128 generator");

        Self { state0, state1 }
    }

    /// Advance the state and return the next value in [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let mut s1 = self.state0.clone();
        let mut s0 = self.state1.clone();

        self.state0 = s0.clone();

        let tmp = s1.clone();
        s1.shl(23).xor(&tmp);

        let tmp = s1.clone();
        s1.shr(17).xor(&tmp);

        s1.xor(&s0);
        // Shifts s0 in place; it is not read again.
        s1.xor(s0.shr(26));

        self.state1 = s1;

        let mut out = self.state0.clone();
        out.add(&self.state1).and(&MANTISSA_MASK).or(&EXPONENT_BITS);

        out.to_f64_be() - 1.0
    }
}

impl Default for XorShift128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for XorShift128 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl fmt::Debug for XorShift128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XorShift128").finish_non_exhaustive()
    }
}
