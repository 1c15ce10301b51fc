// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Ordered sequence of associated-data fields.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::SivError;

/// Ordered list of associated-data fields authenticated alongside the plaintext.
///
/// Field order is significant for both tag synthesizers. A list with zero fields is
/// distinct from a list holding one zero-length field: the S2V synthesizer takes a
/// dedicated branch for the former when the plaintext is also empty.
///
/// # Example
///
/// ```
/// use hmac_siv_core::AssociatedData;
///
/// let none = AssociatedData::empty();
/// let fields: [&[u8]; 1] = [b""];
/// let one_empty = AssociatedData::new(&fields);
///
/// assert_eq!(none.len(), 0);
/// assert_eq!(one_empty.len(), 1);
/// assert_eq!(none.total_len(), one_empty.total_len());
/// assert_ne!(none, one_empty);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AssociatedData<'a> {
    fields: Cow<'a, [&'a [u8]]>,
}

impl<'a> AssociatedData<'a> {
    /// Associated data with no fields at all.
    pub const fn empty() -> Self {
        Self {
            fields: Cow::Borrowed(&[]),
        }
    }

    /// Borrows an ordered list of fields.
    pub const fn new(fields: &'a [&'a [u8]]) -> Self {
        Self {
            fields: Cow::Borrowed(fields),
        }
    }

    /// Number of fields, including zero-length ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// `true` if no field was supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sum of all field lengths in bytes.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.fields.iter().map(|field| field.len()).sum()
    }

    /// Iterates over the fields in caller order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.fields.iter().copied()
    }

    /// Returns the fields as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[&'a [u8]] {
        &self.fields
    }
}

impl Default for AssociatedData<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<&'a [&'a [u8]]> for AssociatedData<'a> {
    fn from(fields: &'a [&'a [u8]]) -> Self {
        Self::new(fields)
    }
}

impl<'a, const N: usize> From<&'a [&'a [u8]; N]> for AssociatedData<'a> {
    fn from(fields: &'a [&'a [u8]; N]) -> Self {
        Self::new(fields.as_slice())
    }
}

impl<'a> From<Vec<&'a [u8]>> for AssociatedData<'a> {
    fn from(fields: Vec<&'a [u8]>) -> Self {
        Self {
            fields: Cow::Owned(fields),
        }
    }
}

/// Validates a nullable field list.
///
/// A missing list yields [`SivError::MissingAssociatedData`]; a missing entry yields
/// [`SivError::MissingAssociatedDataField`] with the index of the first gap. Present
/// but zero-length entries are valid.
impl<'a> TryFrom<Option<&'a [Option<&'a [u8]>]>> for AssociatedData<'a> {
    type Error = SivError;

    fn try_from(fields: Option<&'a [Option<&'a [u8]>]>) -> Result<Self, Self::Error> {
        let fields = fields.ok_or(SivError::MissingAssociatedData)?;

        fields
            .iter()
            .enumerate()
            .map(|(index, field)| field.ok_or(SivError::MissingAssociatedDataField { index }))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl fmt::Debug for AssociatedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssociatedData")
            .field("fields", &self.len())
            .field("total_len", &self.total_len())
            .finish()
    }
}
