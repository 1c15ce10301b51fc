// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared building blocks for the hmac-siv AEAD.
//!
//! Holds the fixed sizes, the error taxonomy, the associated-data sequence type and
//! the traits behind which the keyed hash, the stream cipher and the tag synthesizers
//! are plugged into the orchestrator.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod associated_data;
mod consts;
mod error;
mod traits;
mod types;

pub use associated_data::AssociatedData;
pub use consts::{
    BLOCK_SIZE, ENCRYPTION_KEY_SIZE, KEY_SIZE, MAC_KEY_SIZE, NONCE_SIZE, TAG_SIZE,
};
pub use error::{ErrorKind, SivError};
pub use traits::{KeyedHash, StreamCipher, TagSynthesizer};
pub use types::{Block, EncryptionKey, MacKey, Nonce, Tag};
