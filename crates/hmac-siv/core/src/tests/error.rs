// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ErrorKind, SivError};

#[test]
fn test_size_errors_kind() {
    let errors = [
        SivError::InvalidCiphertextLength {
            expected: 32,
            actual: 31,
        },
        SivError::CiphertextTooShort { actual: 31 },
        SivError::InvalidPlaintextLength {
            expected: 0,
            actual: 1,
        },
        SivError::InvalidKeySize { actual: 65 },
    ];

    for error in errors {
        assert_eq!(error.kind(), ErrorKind::Size, "{error:?}");
    }
}

#[test]
fn test_missing_reference_errors_kind() {
    assert_eq!(
        SivError::MissingAssociatedData.kind(),
        ErrorKind::MissingReference
    );
    assert_eq!(
        SivError::MissingAssociatedDataField { index: 3 }.kind(),
        ErrorKind::MissingReference
    );
}

#[test]
fn test_authentication_error_kind() {
    assert_eq!(
        SivError::AuthenticationFailed.kind(),
        ErrorKind::Authentication
    );
}

#[test]
fn test_display_messages() {
    assert_eq!(
        SivError::InvalidKeySize { actual: 63 }.to_string(),
        "invalid key size: expected 64 bytes, got 63"
    );
    assert_eq!(
        SivError::CiphertextTooShort { actual: 31 }.to_string(),
        "ciphertext too short: expected at least 32 bytes, got 31"
    );
    assert_eq!(
        SivError::MissingAssociatedDataField { index: 2 }.to_string(),
        "associated data field 2 is missing"
    );
    assert_eq!(
        SivError::AuthenticationFailed.to_string(),
        "authentication failed: tag mismatch"
    );
}
