// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop guard for optimistically decrypted plaintext.

use core::fmt;
use core::ops::{Deref, DerefMut};

use hmac_siv_util::fast_zeroize_slice;

/// Mutable borrow of an output buffer that is zeroized on drop unless disarmed.
///
/// Decryption writes candidate plaintext before the tag is verified. Holding the
/// buffer through this guard wipes it on every exit path that does not reach
/// [`PlaintextGuard::disarm`], including unwinding out of a collaborator.
pub(crate) struct PlaintextGuard<'a> {
    buf: &'a mut [u8],
    armed: bool,
}

impl<'a> PlaintextGuard<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, armed: true }
    }

    /// Releases the buffer to the caller untouched.
    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Deref for PlaintextGuard<'_> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl DerefMut for PlaintextGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.buf
    }
}

impl Drop for PlaintextGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            fast_zeroize_slice(&mut *self.buf);
        }
    }
}

impl fmt::Debug for PlaintextGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaintextGuard {{ [protected] }}")
    }
}
