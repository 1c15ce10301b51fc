// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed sizes of the construction.

/// Combined key size in bytes (MAC half followed by encryption half)
pub const KEY_SIZE: usize = 64;

/// MAC key size in bytes (first half of the combined key)
pub const MAC_KEY_SIZE: usize = KEY_SIZE / 2;

/// Stream cipher key size in bytes (second half of the combined key)
pub const ENCRYPTION_KEY_SIZE: usize = KEY_SIZE - MAC_KEY_SIZE;

/// Synthetic tag size in bytes
pub const TAG_SIZE: usize = 32;

/// Stream cipher nonce size in bytes, taken from the front of the tag
pub const NONCE_SIZE: usize = 24;

/// S2V block size in bytes (one SHA-256 output)
pub const BLOCK_SIZE: usize = TAG_SIZE;

const _: () = assert!(NONCE_SIZE <= TAG_SIZE);
