// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the layout solver and by per-box queries.

use core::fmt;

use crate::BoxIndex;

/// Error returned for an invalid [`LayoutRequest`](crate::LayoutRequest) or an
/// out-of-range [`Layout`](crate::Layout) query.
///
/// A layout whose boxes do not fit is *not* an error; it is reported through a
/// negative [`Layout::remaining_space`](crate::Layout::remaining_space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutError {
    /// The available space was negative.
    NegativeAvailableSpace(f64),
    /// The available space was NaN or infinite.
    NonFiniteAvailableSpace(f64),
    /// The box size bounds do not form a valid range.
    ///
    /// Raised when `min > max`, when `min` is negative or not finite, or when
    /// `max` is NaN.
    InvalidBoxSizeRange {
        /// Requested minimum box size.
        min: f64,
        /// Requested maximum box size.
        max: f64,
    },
    /// The gap was negative, NaN, or infinite.
    InvalidGapSize(f64),
    /// A per-box query was made with an index outside `0..count`.
    IndexOutOfRange {
        /// The index that was queried.
        index: BoxIndex,
        /// The number of boxes in the layout.
        count: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAvailableSpace(space) => {
                write!(f, "available space must not be negative, got {space}")
            }
            Self::NonFiniteAvailableSpace(space) => {
                write!(f, "available space must be finite, got {space}")
            }
            Self::InvalidBoxSizeRange { min, max } => {
                write!(f, "invalid box size range: min {min}, max {max}")
            }
            Self::InvalidGapSize(gap) => {
                write!(f, "gap size must be finite and not negative, got {gap}")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "box index {index} out of range for {count} boxes")
            }
        }
    }
}

impl core::error::Error for LayoutError {}
