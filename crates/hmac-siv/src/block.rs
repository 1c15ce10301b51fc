// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 256-bit block arithmetic used by S2V.

use hmac_siv_core::{BLOCK_SIZE, Block};

/// Reduction constant XORed into the last two bytes when doubling overflows.
pub(crate) const REDUCTION: [u8; 2] = [0x04, 0x25];

/// Multiplies `block` by x in GF(2^256), big-endian, in constant time.
///
/// Shifts the whole block left by one bit; if the top bit fell off, folds it back
/// in with [`REDUCTION`].
#[inline]
pub(crate) fn dbl256(block: &mut Block) {
    let mut carry = 0u8;

    for byte in block.iter_mut().rev() {
        let next = *byte >> 7;
        *byte = (*byte << 1) | carry;
        carry = next;
    }

    let mask = 0u8.wrapping_sub(carry);
    block[BLOCK_SIZE - 2] ^= REDUCTION[0] & mask;
    block[BLOCK_SIZE - 1] ^= REDUCTION[1] & mask;
}
