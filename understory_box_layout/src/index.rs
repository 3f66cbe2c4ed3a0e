// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed box indices.

use core::fmt;

/// Ordinal position of one box in a [`Layout`](crate::Layout).
///
/// Index `0` is always the first box encountered when walking the span in the
/// layout's direction. A valid index is `< Layout::len()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoxIndex(pub usize);

impl BoxIndex {
    /// The first box.
    pub const ZERO: Self = Self(0);

    /// Creates a new index.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for BoxIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<BoxIndex> for usize {
    fn from(index: BoxIndex) -> Self {
        index.0
    }
}

impl fmt::Display for BoxIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
