// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SIV AEAD orchestration: key split, tag synthesis, keystream, verification.

use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use zeroize::{Zeroize, Zeroizing};

use hmac_siv_core::{
    AssociatedData, ENCRYPTION_KEY_SIZE, EncryptionKey, KEY_SIZE, KeyedHash, MAC_KEY_SIZE, MacKey,
    NONCE_SIZE, Nonce, SivError, StreamCipher, TAG_SIZE, Tag, TagSynthesizer,
};
use hmac_siv_util::constant_time_eq;

use crate::concat::Concat;
use crate::guards::PlaintextGuard;
use crate::primitives::{HmacSha256, XChaCha20};
use crate::s2v::S2v;

/// XChaCha20-HMAC-SHA256-SIV with S2V tag synthesis.
pub type XChaCha20HmacSha256Siv = Siv<S2v>;

/// XChaCha20-HMAC-SHA256-SIV with concatenation tag synthesis (baseline).
pub type XChaCha20HmacSha256SivConcat = Siv<Concat>;

/// Deterministic AEAD over a tag synthesizer `S`, keyed hash `H` and stream cipher `C`.
///
/// Stateless: every operation is an associated function working on caller buffers,
/// so one type can be used from any number of threads at once.
///
/// Ciphertext layout is `tag || C(plaintext)` with `nonce = tag[..NONCE_SIZE]`.
pub struct Siv<S, H = HmacSha256, C = XChaCha20> {
    _marker: PhantomData<fn() -> (S, H, C)>,
}

impl<S, H, C> Siv<S, H, C>
where
    S: TagSynthesizer,
    H: KeyedHash,
    C: StreamCipher,
{
    /// Combined key size in bytes
    pub const KEY_SIZE: usize = KEY_SIZE;

    /// Nonce size in bytes (derived from the tag)
    pub const NONCE_SIZE: usize = NONCE_SIZE;

    /// Tag size in bytes
    pub const TAG_SIZE: usize = TAG_SIZE;

    /// Name of the tag synthesizer in use.
    #[inline]
    pub fn variant_name() -> &'static str {
        S::NAME
    }

    /// Ciphertext length for a plaintext of `plaintext_len` bytes.
    #[inline]
    pub fn ciphertext_len(plaintext_len: usize) -> Option<usize> {
        plaintext_len.checked_add(TAG_SIZE)
    }

    /// Plaintext length for a ciphertext of `ciphertext_len` bytes, if it holds a tag.
    #[inline]
    pub fn plaintext_len(ciphertext_len: usize) -> Option<usize> {
        ciphertext_len.checked_sub(TAG_SIZE)
    }

    /// Encrypts `plaintext` into `ciphertext`.
    ///
    /// # Errors
    /// - [`SivError::InvalidCiphertextLength`] if `ciphertext.len() != plaintext.len() + TAG_SIZE`
    /// - [`SivError::InvalidKeySize`] if `key.len() != KEY_SIZE`
    /// - [`SivError::MissingAssociatedData`] / [`SivError::MissingAssociatedDataField`]
    ///   if the associated data cannot be converted
    ///
    /// All checks run before any cryptographic work.
    pub fn encrypt<'a, A>(
        ciphertext: &mut [u8],
        plaintext: &[u8],
        key: &[u8],
        associated_data: A,
    ) -> Result<(), SivError>
    where
        A: TryInto<AssociatedData<'a>>,
        SivError: From<A::Error>,
    {
        let expected = plaintext.len() + TAG_SIZE;
        if ciphertext.len() != expected {
            return Err(SivError::InvalidCiphertextLength {
                expected,
                actual: ciphertext.len(),
            });
        }

        let (mac_key, encryption_key) = split_key(key)?;
        let associated_data: AssociatedData<'a> = associated_data.try_into()?;

        let (tag, body) = ciphertext.split_at_mut(TAG_SIZE);
        let tag: &mut Tag = tag
            .try_into()
            .expect("infallible: tag slice is exactly TAG_SIZE bytes");

        S::synthesize::<H>(tag, plaintext, mac_key, &associated_data);
        C::apply_keystream(encryption_key, nonce_from_tag(tag), plaintext, body);

        Ok(())
    }

    /// Decrypts `ciphertext` into `plaintext` and verifies the tag.
    ///
    /// The keystream is applied first and the tag is recomputed over the candidate
    /// plaintext. On mismatch `plaintext` is zeroized before the error is returned.
    ///
    /// # Errors
    /// - [`SivError::CiphertextTooShort`] if `ciphertext.len() < TAG_SIZE`
    /// - [`SivError::InvalidPlaintextLength`] if `plaintext.len() != ciphertext.len() - TAG_SIZE`
    /// - [`SivError::InvalidKeySize`] if `key.len() != KEY_SIZE`
    /// - [`SivError::MissingAssociatedData`] / [`SivError::MissingAssociatedDataField`]
    /// - [`SivError::AuthenticationFailed`] if the tag does not verify
    pub fn decrypt<'a, A>(
        plaintext: &mut [u8],
        ciphertext: &[u8],
        key: &[u8],
        associated_data: A,
    ) -> Result<(), SivError>
    where
        A: TryInto<AssociatedData<'a>>,
        SivError: From<A::Error>,
    {
        let expected = Self::plaintext_len(ciphertext.len()).ok_or(SivError::CiphertextTooShort {
            actual: ciphertext.len(),
        })?;
        if plaintext.len() != expected {
            return Err(SivError::InvalidPlaintextLength {
                expected,
                actual: plaintext.len(),
            });
        }

        let (mac_key, encryption_key) = split_key(key)?;
        let associated_data: AssociatedData<'a> = associated_data.try_into()?;

        let (tag, body) = ciphertext.split_at(TAG_SIZE);
        let tag: &Tag = tag
            .try_into()
            .expect("infallible: tag slice is exactly TAG_SIZE bytes");

        let mut plaintext = PlaintextGuard::new(plaintext);
        C::apply_keystream(encryption_key, nonce_from_tag(tag), body, &mut plaintext);

        let mut computed_tag: Zeroizing<Tag> = Zeroizing::new([0u8; TAG_SIZE]);
        S::synthesize::<H>(&mut computed_tag, &plaintext, mac_key, &associated_data);

        if !constant_time_eq(tag, &computed_tag[..]) {
            computed_tag.zeroize();
            // dropping the armed guard wipes the candidate plaintext
            return Err(SivError::AuthenticationFailed);
        }

        plaintext.disarm();

        Ok(())
    }

    /// Allocating variant of [`Siv::encrypt`].
    pub fn encrypt_to_vec<'a, A>(
        plaintext: &[u8],
        key: &[u8],
        associated_data: A,
    ) -> Result<Vec<u8>, SivError>
    where
        A: TryInto<AssociatedData<'a>>,
        SivError: From<A::Error>,
    {
        let mut ciphertext = vec![0u8; plaintext.len() + TAG_SIZE];
        Self::encrypt(&mut ciphertext, plaintext, key, associated_data)?;

        Ok(ciphertext)
    }

    /// Allocating variant of [`Siv::decrypt`]; the plaintext is zeroized on drop.
    pub fn decrypt_to_vec<'a, A>(
        ciphertext: &[u8],
        key: &[u8],
        associated_data: A,
    ) -> Result<Zeroizing<Vec<u8>>, SivError>
    where
        A: TryInto<AssociatedData<'a>>,
        SivError: From<A::Error>,
    {
        let len = Self::plaintext_len(ciphertext.len()).ok_or(SivError::CiphertextTooShort {
            actual: ciphertext.len(),
        })?;

        let mut plaintext = Zeroizing::new(vec![0u8; len]);
        Self::decrypt(&mut plaintext, ciphertext, key, associated_data)?;

        Ok(plaintext)
    }
}

/// Splits the combined key into its MAC and encryption halves.
fn split_key(key: &[u8]) -> Result<(&MacKey, &EncryptionKey), SivError> {
    let key: &[u8; KEY_SIZE] = key
        .try_into()
        .map_err(|_| SivError::InvalidKeySize { actual: key.len() })?;

    let (mac_key, encryption_key) = key.split_at(MAC_KEY_SIZE);
    debug_assert_eq!(encryption_key.len(), ENCRYPTION_KEY_SIZE);

    Ok((
        mac_key
            .try_into()
            .expect("infallible: MAC key is exactly MAC_KEY_SIZE bytes"),
        encryption_key
            .try_into()
            .expect("infallible: encryption key is exactly ENCRYPTION_KEY_SIZE bytes"),
    ))
}

#[inline]
fn nonce_from_tag(tag: &Tag) -> &Nonce {
    tag.first_chunk::<NONCE_SIZE>()
        .expect("infallible: NONCE_SIZE <= TAG_SIZE")
}
