// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Collaborator traits.

use crate::{AssociatedData, EncryptionKey, MacKey, Nonce, Tag};

/// Keyed hash with incremental update (HMAC-SHA256 in production).
///
/// A single keyed instance is reused for every MAC computed during one tag
/// synthesis, so finalization must leave the instance re-keyed and empty.
pub trait KeyedHash {
    /// Create an instance keyed with the MAC half of the combined key.
    fn new_keyed(key: &MacKey) -> Self;

    /// Append `data` to the running message.
    fn update(&mut self, data: &[u8]);

    /// Write the MAC of everything appended so far into `out` and reset.
    fn finalize_reset_into(&mut self, out: &mut Tag);
}

/// Wide-nonce stream cipher (XChaCha20 in production).
///
/// Encryption and decryption are the same keystream XOR.
pub trait StreamCipher {
    /// XOR the keystream for (`key`, `nonce`) with `input`, writing to `output`.
    ///
    /// `input` and `output` have the same length.
    fn apply_keystream(key: &EncryptionKey, nonce: &Nonce, input: &[u8], output: &mut [u8]);
}

/// Derives the synthetic tag from the MAC key, the plaintext and the associated data.
pub trait TagSynthesizer {
    /// Short name used in diagnostics and benchmarks.
    const NAME: &'static str;

    /// Compute the tag into `tag`.
    ///
    /// Implementations must zeroize every scratch buffer before returning.
    fn synthesize<H: KeyedHash>(
        tag: &mut Tag,
        plaintext: &[u8],
        mac_key: &MacKey,
        associated_data: &AssociatedData<'_>,
    );
}
