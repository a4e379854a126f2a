//! Fixed-width words
//!
//! Values are stored as big-endian byte arrays and every operation works
//! one byte at a time.

mod uint64;

pub use uint64::{UInt64, UInt64Error, WIDTH};
