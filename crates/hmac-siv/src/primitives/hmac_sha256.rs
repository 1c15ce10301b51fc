// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 keyed hash (RFC 2104) backed by RustCrypto `hmac` + `sha2`.

use hmac::digest::FixedOutputReset;
use hmac::digest::generic_array::GenericArray;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use hmac_siv_core::{KeyedHash, MacKey, Tag};

/// Incremental HMAC-SHA256 keyed with the MAC half of the combined key.
pub struct HmacSha256 {
    mac: Hmac<Sha256>,
}

impl KeyedHash for HmacSha256 {
    fn new_keyed(key: &MacKey) -> Self {
        let mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
            .expect("infallible: HMAC accepts keys of any length");

        Self { mac }
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.mac.update(data);
    }

    #[inline]
    fn finalize_reset_into(&mut self, out: &mut Tag) {
        self.mac
            .finalize_into_reset(GenericArray::from_mut_slice(out));
    }
}

impl core::fmt::Debug for HmacSha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HmacSha256 {{ [protected] }}")
    }
}
