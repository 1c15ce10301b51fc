// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XChaCha20-HMAC-SHA256-SIV: a deterministic, nonce-misuse-resistant AEAD.
//!
//! The 64-byte key is split into a MAC half and an encryption half. A 32-byte
//! synthetic tag is derived from the MAC key, the plaintext and an ordered list of
//! associated-data fields; the tag is prepended to the ciphertext and its first 24
//! bytes are the XChaCha20 nonce.
//!
//! Two tag synthesizers are provided:
//! - [`S2v`]: 256-bit S2V vector MAC (draft-madden-generalised-siv)
//! - [`Concat`]: HMAC over the concatenated inputs and a length trailer (baseline)
//!
//! Wire layout: `tag (32 bytes) || XChaCha20(plaintext)`.
//!
//! ```
//! use hmac_siv::{AssociatedData, XChaCha20HmacSha256Siv, KEY_SIZE, TAG_SIZE};
//!
//! let key = [0x42u8; KEY_SIZE];
//! let header: &[u8] = b"header";
//! let fields = [header];
//!
//! let mut ciphertext = [0u8; 5 + TAG_SIZE];
//! XChaCha20HmacSha256Siv::encrypt(&mut ciphertext, b"hello", &key, &fields)?;
//!
//! let mut plaintext = [0u8; 5];
//! XChaCha20HmacSha256Siv::decrypt(&mut plaintext, &ciphertext, &key, &fields)?;
//! assert_eq!(&plaintext, b"hello");
//!
//! // Encryption is deterministic; append a unique random field for probabilistic output.
//! let again = XChaCha20HmacSha256Siv::encrypt_to_vec(b"hello", &key, AssociatedData::new(&fields))?;
//! assert_eq!(again, ciphertext);
//! # Ok::<(), hmac_siv::SivError>(())
//! ```

#![cfg_attr(not(any(test, feature = "test-utils")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

mod block;
mod concat;
mod guards;
mod primitives;
mod s2v;
mod siv;

pub use hmac_siv_core::{
    AssociatedData, BLOCK_SIZE, Block, ENCRYPTION_KEY_SIZE, EncryptionKey, ErrorKind, KEY_SIZE,
    KeyedHash, MAC_KEY_SIZE, MacKey, NONCE_SIZE, Nonce, SivError, StreamCipher, TAG_SIZE, Tag,
    TagSynthesizer,
};
pub use zeroize::Zeroizing;

pub use concat::Concat;
pub use primitives::{HmacSha256, XChaCha20};
pub use s2v::S2v;
pub use siv::{Siv, XChaCha20HmacSha256Siv, XChaCha20HmacSha256SivConcat};
