//! Seed sources for the generator
//!
//! A generator reads its two initial state words from a `SeedSource` once,
//! at construction. `SystemClock` is the default source.

use crate::word::UInt64;
use std::time::{Duration, SystemTime};

/// Supplies the two initial state words of a generator
pub trait SeedSource {
    /// Return `[state0, state1]`
    fn seed_words(&self) -> [UInt64; 2];
}

/// Seeds from the host clock, split into seconds and nanoseconds
///
/// Reads `SystemTime` rather than `Instant`: `Instant` has no absolute
/// value to split into seed words.
///
/// A clock set before the Unix epoch reads as zero. Both words are then
/// zero and the generator produces a fixed sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn seed_words(&self) -> [UInt64; 2] {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        let seconds = now.as_secs();
        let nanos = u64::from(now.subsec_nanos());

        tracing::trace!(seconds, nanos, "sampled system clock for seed");

        [UInt64::from(seconds), UInt64::from(nanos)]
    }
}
