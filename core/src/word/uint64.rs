//! Byte-level 64-bit unsigned integer
//!
//! `UInt64` stores its value as 8 bytes, most-significant byte first, and
//! performs every operation one byte at a time. Shifts move bits across
//! byte boundaries exactly like native logical shifts.
//!
//! # Arithmetic is byte-wise
//!
//! `add` and `mul` work on each byte position independently and wrap
//! modulo 256. No carry crosses a byte boundary. This is NOT 64-bit
//! arithmetic, and the generator's output stream depends on it bit for bit.
//!
//! # Mutation
//!
//! Operations mutate the receiver in place and return `&mut Self` so they
//! can be chained. Take a `.clone()` first when the pre-mutation value is
//! still needed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of bytes in a `UInt64`
pub const WIDTH: usize = 8;

/// Errors that can occur while constructing a `UInt64`
#[derive(Debug, Error, PartialEq)]
pub enum UInt64Error {
    #[error("Invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// 64-bit unsigned integer held as 8 big-endian bytes
///
/// # Example
/// ```
/// use xorshift128_core_rs::UInt64;
///
/// let mut x = UInt64::from(1u64);
/// x.shl(4).or(&UInt64::from(0x3u64));
/// assert_eq!(x.to_u64(), 0x13);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UInt64 {
    /// Most-significant byte first
    bytes: [u8; WIDTH],
}

impl UInt64 {
    /// All-zero value
    pub const fn zero() -> Self {
        Self { bytes: [0; WIDTH] }
    }

    /// Create from 8 big-endian bytes
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::UInt64;
    ///
    /// let x = UInt64::from_be_bytes([0, 0, 0, 0, 0, 0, 1, 0]);
    /// assert_eq!(x.to_u64(), 256);
    /// ```
    pub const fn from_be_bytes(bytes: [u8; WIDTH]) -> Self {
        Self { bytes }
    }

    /// Parse exactly 16 hex digits, most-significant first
    ///
    /// # Errors
    /// Returns `UInt64Error::InvalidHex` for a string of the wrong length or
    /// with a non-hex character.
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::UInt64;
    ///
    /// let x = UInt64::from_hex("3FF0000000000000").unwrap();
    /// assert_eq!(x.as_bytes()[0], 0x3F);
    /// assert!(UInt64::from_hex("3FF").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, UInt64Error> {
        let mut bytes = [0u8; WIDTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }

    /// Borrow the underlying bytes
    pub fn as_bytes(&self) -> &[u8; WIDTH] {
        &self.bytes
    }

    /// Copy out the underlying bytes
    pub fn to_be_bytes(&self) -> [u8; WIDTH] {
        self.bytes
    }

    /// Native value of the 8 bytes
    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.bytes)
    }

    /// Reinterpret the 8 bytes as a big-endian IEEE-754 double
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::UInt64;
    ///
    /// let one = UInt64::from_hex("3ff0000000000000").unwrap();
    /// assert_eq!(one.to_f64_be(), 1.0);
    /// ```
    pub fn to_f64_be(&self) -> f64 {
        f64::from_be_bytes(self.bytes)
    }

    /// Logical shift left by `count` bits
    ///
    /// Whole bytes move first, then the remaining `count % 8` bits are
    /// carried from each byte into the next more-significant one.
    ///
    /// # Panics
    /// Panics if `count` is zero or `count / 8` exceeds 8.
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::UInt64;
    ///
    /// let mut x = UInt64::from(1u64);
    /// x.shl(1);
    /// assert_eq!(x.to_u64(), 2);
    /// ```
    pub fn shl(&mut self, count: u32) -> &mut Self {
        check_shift_count(count);

        let byte_shift = (count >> 3) as usize;
        if byte_shift > 0 {
            self.bytes.copy_within(byte_shift.., 0);
            self.bytes[WIDTH - byte_shift..].fill(0);
        }

        let bit_shift = count & 7;
        if bit_shift > 0 {
            let mut carry = 0u8;
            for byte in self.bytes.iter_mut().rev() {
                let spill = *byte >> (8 - bit_shift);
                *byte = (*byte << bit_shift) | carry;
                carry = spill;
            }
        }

        self
    }

    /// Logical shift right by `count` bits
    ///
    /// Whole bytes move first, then the remaining `count % 8` bits are
    /// carried from each byte into the next less-significant one.
    ///
    /// # Panics
    /// Panics if `count` is zero or `count / 8` exceeds 8.
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::UInt64;
    ///
    /// let mut x = UInt64::from(0x100u64);
    /// x.shr(8);
    /// assert_eq!(x.to_u64(), 1);
    /// ```
    pub fn shr(&mut self, count: u32) -> &mut Self {
        check_shift_count(count);

        let byte_shift = (count >> 3) as usize;
        if byte_shift > 0 {
            self.bytes.copy_within(..WIDTH - byte_shift, byte_shift);
            self.bytes[..byte_shift].fill(0);
        }

        let bit_shift = count & 7;
        if bit_shift > 0 {
            let mut carry = 0u8;
            for byte in self.bytes.iter_mut() {
                let spill = *byte << (8 - bit_shift);
                *byte = (*byte >> bit_shift) | carry;
                carry = spill;
            }
        }

        self
    }

    pub fn xor(&mut self, other: &UInt64) -> &mut Self {
        self.zip_with(other, |a, b| a ^ b)
    }

    pub fn and(&mut self, other: &UInt64) -> &mut Self {
        self.zip_with(other, |a, b| a & b)
    }

    pub fn or(&mut self, other: &UInt64) -> &mut Self {
        self.zip_with(other, |a, b| a | b)
    }

    /// Complement every bit
    pub fn not(&mut self) -> &mut Self {
        for byte in self.bytes.iter_mut() {
            *byte = !*byte;
        }
        self
    }

    /// Byte-wise sum, each byte wrapping on its own
    ///
    /// # Example
    /// ```
    /// use xorshift128_core_rs::UInt64;
    ///
    /// let mut x = UInt64::from(0xFFu64);
    /// x.add(&UInt64::from(0x01u64));
    /// assert_eq!(x.to_u64(), 0); // no carry into byte 6
    /// ```
    pub fn add(&mut self, other: &UInt64) -> &mut Self {
        self.zip_with(other, u8::wrapping_add)
    }

    /// Byte-wise product, each byte keeping the low 8 bits of its product
    pub fn mul(&mut self, other: &UInt64) -> &mut Self {
        self.zip_with(other, u8::wrapping_mul)
    }

    fn zip_with(&mut self, other: &UInt64, op: impl Fn(u8, u8) -> u8) -> &mut Self {
        for (byte, rhs) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *byte = op(*byte, *rhs);
        }
        self
    }
}

fn check_shift_count(count: u32) {
    assert!(count > 0, "shift count must be positive");
    assert!(
        (count >> 3) as usize <= WIDTH,
        "shift count {} exceeds {} bytes",
        count,
        WIDTH
    );
}

impl From<[u8; WIDTH]> for UInt64 {
    fn from(bytes: [u8; WIDTH]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<u64> for UInt64 {
    fn from(value: u64) -> Self {
        Self::from_be_bytes(value.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for UInt64 {
    type Error = UInt64Error;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; WIDTH] = slice.try_into().map_err(|_| UInt64Error::InvalidLength {
            expected: WIDTH,
            actual: slice.len(),
        })?;
        Ok(Self { bytes })
    }
}

impl TryFrom<String> for UInt64 {
    type Error = UInt64Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<UInt64> for String {
    fn from(value: UInt64) -> Self {
        value.to_string()
    }
}

impl FromStr for UInt64 {
    type Err = UInt64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for UInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for UInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

impl fmt::UpperHex for UInt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shl_carries_across_byte_boundary() {
        let mut x = UInt64::from(0x80u64);
        x.shl(1);
        assert_eq!(x.to_be_bytes(), [0, 0, 0, 0, 0, 0, 0x01, 0x00]);
    }

    #[test]
    fn test_shr_carries_across_byte_boundary() {
        let mut x = UInt64::from(0x0100u64);
        x.shr(1);
        assert_eq!(x.to_be_bytes(), [0, 0, 0, 0, 0, 0, 0x00, 0x80]);
    }

    #[test]
    fn test_max_shift_count_accepted() {
        let mut x = UInt64::from(u64::MAX);
        x.shl(71);
        assert_eq!(x, UInt64::zero());
    }

    #[test]
    #[should_panic(expected = "shift count must be positive")]
    fn test_shl_zero_count() {
        UInt64::from(1u64).shl(0);
    }

    #[test]
    #[should_panic(expected = "shift count 72 exceeds 8 bytes")]
    fn test_shr_count_too_wide() {
        UInt64::from(1u64).shr(72);
    }

    #[test]
    fn test_hex_display_round_trip() {
        let x = UInt64::from(0x000F_FFFF_FFFF_FFFFu64);
        assert_eq!(x.to_string(), "000fffffffffffff");
        assert_eq!(format!("{:X}", x), "000FFFFFFFFFFFFF");
        assert_eq!(x.to_string().parse::<UInt64>(), Ok(x));
    }

    #[test]
    fn test_slice_wrong_length() {
        let result = UInt64::try_from(&[1u8, 2, 3][..]);
        assert_eq!(
            result,
            Err(UInt64Error::InvalidLength {
                expected: 8,
                actual: 3
            })
        );
    }
}
