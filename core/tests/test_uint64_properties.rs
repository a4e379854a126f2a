//! Property tests for UInt64
//!
//! Shifts and bitwise operations must agree with native u64 semantics;
//! add and mul must agree with independent per-byte arithmetic.

use proptest::prelude::*;
use xorshift128_core_rs::UInt64;

proptest! {
    #[test]
    fn shl_matches_native(value: u64, count in 1u32..64) {
        let mut x = UInt64::from(value);
        x.shl(count);
        prop_assert_eq!(x.to_u64(), value << count);
    }

    #[test]
    fn shr_matches_native(value: u64, count in 1u32..64) {
        let mut x = UInt64::from(value);
        x.shr(count);
        prop_assert_eq!(x.to_u64(), value >> count);
    }

    #[test]
    fn shift_past_width_zeroes(value: u64, count in 64u32..72) {
        prop_assert_eq!(UInt64::from(value).shl(count).to_u64(), 0);
        prop_assert_eq!(UInt64::from(value).shr(count).to_u64(), 0);
    }

    #[test]
    fn xor_self_is_zero(value: u64) {
        let a = UInt64::from(value);
        prop_assert_eq!(a.clone().xor(&a).clone(), UInt64::zero());
    }

    #[test]
    fn and_all_ones_is_identity(value: u64) {
        let a = UInt64::from(value);
        prop_assert_eq!(a.clone().and(&UInt64::from(u64::MAX)).clone(), a);
    }

    #[test]
    fn or_zero_is_identity(value: u64) {
        let a = UInt64::from(value);
        prop_assert_eq!(a.clone().or(&UInt64::zero()).clone(), a);
    }

    #[test]
    fn not_twice_is_identity(value: u64) {
        let a = UInt64::from(value);
        prop_assert_eq!(a.clone().not().not().clone(), a);
    }

    #[test]
    fn add_is_per_byte(a: [u8; 8], b: [u8; 8]) {
        let mut x = UInt64::from_be_bytes(a);
        x.add(&UInt64::from_be_bytes(b));
        for i in 0..8 {
            prop_assert_eq!(x.as_bytes()[i], a[i].wrapping_add(b[i]));
        }
    }

    #[test]
    fn mul_is_per_byte(a: [u8; 8], b: [u8; 8]) {
        let mut x = UInt64::from_be_bytes(a);
        x.mul(&UInt64::from_be_bytes(b));
        for i in 0..8 {
            prop_assert_eq!(x.as_bytes()[i], a[i].wrapping_mul(b[i]));
        }
    }

    #[test]
    fn mutating_clone_leaves_original(value: u64, count in 1u32..72) {
        let original = UInt64::from(value);
        let mut copy = original.clone();
        copy.shr(count).not().add(&UInt64::from(value));
        prop_assert_eq!(original.to_u64(), value);
    }

    #[test]
    fn hex_parse_matches_display(value: u64) {
        let x = UInt64::from(value);
        let parsed: UInt64 = format!("{:016x}", value).parse().unwrap();
        prop_assert_eq!(parsed, x);
    }
}
