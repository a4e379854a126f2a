//! Random double generation
//!
//! Uses an xorshift128+ style algorithm over byte-level `UInt64` words.
//! Seeding goes through the `SeedSource` trait; `SystemClock` is the default.

mod seed;
mod xorshift128;

pub use seed::{SeedSource, SystemClock};
pub use xorshift128::{XorShift128, EXPONENT_BITS, MANTISSA_MASK};
