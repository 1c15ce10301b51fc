// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Production collaborators: HMAC-SHA256 and XChaCha20.

mod hmac_sha256;
mod xchacha20;

pub use hmac_sha256::HmacSha256;
pub use xchacha20::XChaCha20;
