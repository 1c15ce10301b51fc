// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Concatenation tag synthesis.
//!
//! `T = MAC(AD_0 || .. || AD_n || P || le64(len(AD)) || le64(len(P)))`
//!
//! Cheaper than S2V (one MAC pass, no doubling) but not a standardized
//! construction: field boundaries are not encoded, only the total length.

use zeroize::{Zeroize, Zeroizing};

use hmac_siv_core::{AssociatedData, KeyedHash, MacKey, TagSynthesizer, Tag};

/// Length trailer size: two little-endian u64
const TRAILER_SIZE: usize = 16;

/// Single-pass concatenation MAC, kept as a performance baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Concat;

impl TagSynthesizer for Concat {
    const NAME: &'static str = "Concat";

    fn synthesize<H: KeyedHash>(
        tag: &mut Tag,
        plaintext: &[u8],
        mac_key: &MacKey,
        associated_data: &AssociatedData<'_>,
    ) {
        let mut hash = H::new_keyed(mac_key);
        let associated_data_len = associated_data.total_len();

        if associated_data_len > 0 {
            for field in associated_data.iter() {
                hash.update(field);
            }
        }
        hash.update(plaintext);

        let mut trailer: Zeroizing<[u8; TRAILER_SIZE]> = Zeroizing::new([0u8; TRAILER_SIZE]);
        trailer[..8].copy_from_slice(&(associated_data_len as u64).to_le_bytes());
        trailer[8..].copy_from_slice(&(plaintext.len() as u64).to_le_bytes());
        hash.update(&trailer[..]);

        hash.finalize_reset_into(tag);
        trailer.zeroize();
    }
}
