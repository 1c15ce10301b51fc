// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XChaCha20 stream cipher backed by RustCrypto `chacha20`.

use chacha20::cipher::{KeyIvInit, StreamCipher as _};
use chacha20::{Key, XNonce};

use hmac_siv_core::{EncryptionKey, Nonce, StreamCipher};

/// XChaCha20 keystream starting at block counter 0.
///
/// The cipher state is created per call and wiped on drop (`chacha20/zeroize`).
#[derive(Debug, Clone, Copy, Default)]
pub struct XChaCha20;

impl StreamCipher for XChaCha20 {
    fn apply_keystream(key: &EncryptionKey, nonce: &Nonce, input: &[u8], output: &mut [u8]) {
        debug_assert_eq!(input.len(), output.len());

        output.copy_from_slice(input);

        let mut cipher = chacha20::XChaCha20::new(Key::from_slice(key), XNonce::from_slice(nonce));
        cipher.apply_keystream(output);
    }
}
