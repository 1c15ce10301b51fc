// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types.

use core::convert::Infallible;

use super::consts::{KEY_SIZE, TAG_SIZE};

/// Errors that can occur during SIV encryption or decryption.
///
/// Every variant except [`SivError::AuthenticationFailed`] is raised before any
/// cryptographic work runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SivError {
    /// Ciphertext output buffer is not `plaintext.len() + TAG_SIZE` bytes
    #[error("invalid ciphertext length: expected {expected} bytes, got {actual}")]
    InvalidCiphertextLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Ciphertext is too short to hold a tag
    #[error("ciphertext too short: expected at least {} bytes, got {actual}", TAG_SIZE)]
    CiphertextTooShort {
        /// Supplied length
        actual: usize,
    },

    /// Plaintext output buffer is not `ciphertext.len() - TAG_SIZE` bytes
    #[error("invalid plaintext length: expected {expected} bytes, got {actual}")]
    InvalidPlaintextLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Key is not exactly `KEY_SIZE` bytes
    #[error("invalid key size: expected {} bytes, got {actual}", KEY_SIZE)]
    InvalidKeySize {
        /// Supplied length
        actual: usize,
    },

    /// The associated-data list itself is missing
    #[error("associated data is missing")]
    MissingAssociatedData,

    /// One entry of the associated-data list is missing
    #[error("associated data field {index} is missing")]
    MissingAssociatedDataField {
        /// Position of the missing field
        index: usize,
    },

    /// Tag verification failed (ciphertext, key or associated data was modified)
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}

/// Coarse classification of [`SivError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A buffer or key has the wrong length
    Size,
    /// The associated-data list or one of its entries is missing
    MissingReference,
    /// Tag mismatch on decryption
    Authentication,
}

impl SivError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCiphertextLength { .. }
            | Self::CiphertextTooShort { .. }
            | Self::InvalidPlaintextLength { .. }
            | Self::InvalidKeySize { .. } => ErrorKind::Size,
            Self::MissingAssociatedData | Self::MissingAssociatedDataField { .. } => {
                ErrorKind::MissingReference
            }
            Self::AuthenticationFailed => ErrorKind::Authentication,
        }
    }
}

impl From<Infallible> for SivError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
