// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory utilities shared by the hmac-siv crates.
//!
//! Thin wrappers around `subtle` and `zeroize`, plus block XOR.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise. Slices of different
/// lengths compare unequal; the length itself is not treated as secret.
///
/// # Example
///
/// ```
/// use hmac_siv_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Zeroizes a byte slice with writes the compiler is not allowed to remove.
///
/// # Example
///
/// ```
/// use hmac_siv_util::{fast_zeroize_slice, is_slice_zeroized};
///
/// let mut buffer = [0xABu8; 16];
/// fast_zeroize_slice(&mut buffer);
/// assert!(is_slice_zeroized(&buffer));
/// ```
#[inline]
pub fn fast_zeroize_slice(slice: &mut [u8]) {
    slice.zeroize();
}

/// Returns `true` if every byte of the slice is zero.
///
/// Verification helper; not constant-time.
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// XORs `src` into the leading bytes of `dst`.
///
/// `dst` must be at least as long as `src`; trailing bytes of `dst` are untouched.
///
/// # Panics
///
/// Panics if `src` is longer than `dst`.
///
/// # Example
///
/// ```
/// use hmac_siv_util::xor_into;
///
/// let mut block = [0xF0u8, 0x0F, 0xAA];
/// xor_into(&mut block, &[0xFF, 0xFF]);
/// assert_eq!(block, [0x0F, 0xF0, 0xAA]);
/// ```
#[inline]
pub fn xor_into(dst: &mut [u8], src: &[u8]) {
    assert!(
        src.len() <= dst.len(),
        "xor_into: source ({} bytes) longer than destination ({} bytes)",
        src.len(),
        dst.len()
    );

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use hmac_siv_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex_to_bytes: odd length input");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("hex_to_bytes: invalid hex digit"))
        .collect()
}
