// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for keys, tags and nonces.

use super::consts::{BLOCK_SIZE, ENCRYPTION_KEY_SIZE, MAC_KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// MAC half of the combined key
pub type MacKey = [u8; MAC_KEY_SIZE];

/// Encryption half of the combined key
pub type EncryptionKey = [u8; ENCRYPTION_KEY_SIZE];

/// Synthetic tag (authentication tag and nonce source)
pub type Tag = [u8; TAG_SIZE];

/// XChaCha20 nonce (first bytes of the tag)
pub type Nonce = [u8; NONCE_SIZE];

/// 256-bit S2V block
pub type Block = [u8; BLOCK_SIZE];
