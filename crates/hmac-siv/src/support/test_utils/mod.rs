// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock collaborators for verifying the orchestrator's guarantees.

mod primitives_mock;

pub use primitives_mock::{
    CountingHash, CountingStreamCipher, PanickingHash, PrimitiveCounters, primitive_counters,
    reset_primitive_counters,
};
