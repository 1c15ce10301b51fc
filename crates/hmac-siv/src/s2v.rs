// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! S2V tag synthesis over 256-bit blocks (draft-madden-generalised-siv).
//!
//! ```text
//! D = MAC(0^256)
//! for each non-empty AD_i:  D = dbl(D) ^ MAC(AD_i)
//! if len(P) >= 32:          T = MAC(P[..n-32] || (D ^ P[n-32..]))
//! else:                     T = MAC(dbl(D) ^ pad(P))      pad(P) = P || 0x80 || 0*
//! ```
//!
//! With no associated-data fields at all and an empty plaintext the tag is
//! `MAC(0^255 || 1)`. Supplying a single zero-length field does not take that branch.

use zeroize::{Zeroize, Zeroizing};

use hmac_siv_core::{AssociatedData, BLOCK_SIZE, Block, KeyedHash, MacKey, TagSynthesizer, Tag};
use hmac_siv_util::xor_into;

use crate::block::dbl256;

/// Padding marker XORed right after a short plaintext.
const PAD_MARKER: u8 = 0x80;

/// S2V vector MAC.
#[derive(Debug, Clone, Copy, Default)]
pub struct S2v;

impl TagSynthesizer for S2v {
    const NAME: &'static str = "S2V";

    fn synthesize<H: KeyedHash>(
        tag: &mut Tag,
        plaintext: &[u8],
        mac_key: &MacKey,
        associated_data: &AssociatedData<'_>,
    ) {
        let mut hash = H::new_keyed(mac_key);
        let mut d: Zeroizing<Block> = Zeroizing::new([0u8; BLOCK_SIZE]);

        if associated_data.is_empty() && plaintext.is_empty() {
            d[BLOCK_SIZE - 1] = 1;
            hash.update(&d[..]);
            hash.finalize_reset_into(tag);
            return;
        }

        hash.update(&d[..]);
        hash.finalize_reset_into(&mut d);

        let mut field_mac: Zeroizing<Tag> = Zeroizing::new([0u8; BLOCK_SIZE]);

        for field in associated_data.iter().filter(|field| !field.is_empty()) {
            dbl256(&mut d);
            hash.update(field);
            hash.finalize_reset_into(&mut field_mac);
            xor_into(&mut d[..], &field_mac[..]);
        }

        field_mac.zeroize();

        if plaintext.len() >= BLOCK_SIZE {
            let (head, last) = plaintext.split_at(plaintext.len() - BLOCK_SIZE);
            hash.update(head);
            xor_into(&mut d[..], last);
        } else {
            dbl256(&mut d);
            xor_into(&mut d[..], plaintext);
            d[plaintext.len()] ^= PAD_MARKER;
        }

        hash.update(&d[..]);
        hash.finalize_reset_into(tag);
        d.zeroize();
    }
}
