// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Counting and failing keyed-hash / stream-cipher mocks.
//!
//! The collaborator traits are static, so call counts are kept per thread. Each
//! test thread sees only its own calls.

use std::cell::Cell;

use hmac_siv_core::{EncryptionKey, KeyedHash, MacKey, Nonce, StreamCipher, Tag};

use crate::primitives::{HmacSha256, XChaCha20};

std::thread_local! {
    static HASH_NEW: Cell<usize> = const { Cell::new(0) };
    static HASH_UPDATE: Cell<usize> = const { Cell::new(0) };
    static HASH_FINALIZE: Cell<usize> = const { Cell::new(0) };
    static CIPHER_APPLY: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|c| c.set(c.get() + 1));
}

/// Snapshot of collaborator calls on the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveCounters {
    /// `KeyedHash::new_keyed` calls
    pub hash_new: usize,
    /// `KeyedHash::update` calls
    pub hash_update: usize,
    /// `KeyedHash::finalize_reset_into` calls
    pub hash_finalize: usize,
    /// `StreamCipher::apply_keystream` calls
    pub cipher_apply: usize,
}

impl PrimitiveCounters {
    /// Total number of collaborator calls.
    pub fn total(&self) -> usize {
        self.hash_new + self.hash_update + self.hash_finalize + self.cipher_apply
    }
}

/// Reads the counters of the current thread.
pub fn primitive_counters() -> PrimitiveCounters {
    PrimitiveCounters {
        hash_new: HASH_NEW.with(Cell::get),
        hash_update: HASH_UPDATE.with(Cell::get),
        hash_finalize: HASH_FINALIZE.with(Cell::get),
        cipher_apply: CIPHER_APPLY.with(Cell::get),
    }
}

/// Resets the counters of the current thread.
pub fn reset_primitive_counters() {
    for counter in [&HASH_NEW, &HASH_UPDATE, &HASH_FINALIZE, &CIPHER_APPLY] {
        counter.with(|c| c.set(0));
    }
}

/// HMAC-SHA256 that counts every call.
pub struct CountingHash {
    inner: HmacSha256,
}

impl KeyedHash for CountingHash {
    fn new_keyed(key: &MacKey) -> Self {
        bump(&HASH_NEW);
        Self {
            inner: HmacSha256::new_keyed(key),
        }
    }

    fn update(&mut self, data: &[u8]) {
        bump(&HASH_UPDATE);
        self.inner.update(data);
    }

    fn finalize_reset_into(&mut self, out: &mut Tag) {
        bump(&HASH_FINALIZE);
        self.inner.finalize_reset_into(out);
    }
}

/// XChaCha20 that counts every call.
pub struct CountingStreamCipher;

impl StreamCipher for CountingStreamCipher {
    fn apply_keystream(key: &EncryptionKey, nonce: &Nonce, input: &[u8], output: &mut [u8]) {
        bump(&CIPHER_APPLY);
        XChaCha20::apply_keystream(key, nonce, input, output);
    }
}

/// Keyed hash that panics on finalization.
///
/// Used to prove buffers are wiped when a collaborator unwinds mid-operation.
pub struct PanickingHash;

impl KeyedHash for PanickingHash {
    fn new_keyed(_key: &MacKey) -> Self {
        Self
    }

    fn update(&mut self, _data: &[u8]) {}

    fn finalize_reset_into(&mut self, _out: &mut Tag) {
        panic!("PanickingHash: finalize_reset_into");
    }
}
