//! XorShift128 Core - byte-level random doubles
//!
//! Seeded pseudo-random generator producing `f64` values in [0.0, 1.0).
//! Not cryptographically secure.
//!
//! # Architecture
//!
//! - **word**: `UInt64`, a 64-bit unsigned integer emulated on 8 big-endian bytes
//! - **rng**: `XorShift128` generator and its `SeedSource` seam
//!
//! # Critical Invariants
//!
//! 1. A `UInt64` is always exactly 8 bytes
//! 2. `add` and `mul` never carry between bytes
//! 3. Same seed words produce the same sequence

// Module declarations
pub mod rng;
pub mod word;

// Re-exports for convenience
pub use rng::{SeedSource, SystemClock, XorShift128};
pub use word::{UInt64, UInt64Error};
