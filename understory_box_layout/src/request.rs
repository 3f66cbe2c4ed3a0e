// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs of one layout pass.

use crate::{Layout, LayoutDirection, LayoutError, LayoutMode};

/// Parameters for one layout pass.
///
/// Construct a fresh request whenever the available space, box count, or
/// styling changes and pass it to [`layout()`](crate::layout()) (or call
/// [`LayoutRequest::layout`]). Requests are plain values; nothing is retained
/// between passes.
///
/// Defaults: no minimum box size, no maximum box size, no gap,
/// [`LayoutMode::Exact`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRequest {
    /// Total extent to partition.
    pub available_space: f64,
    /// Number of boxes.
    pub count: usize,
    /// Axis and sense of increasing index.
    pub direction: LayoutDirection,
    /// Lower bound for the box size.
    pub min_box_size: f64,
    /// Upper bound for the box size; `f64::INFINITY` for none.
    pub max_box_size: f64,
    /// Space between consecutive boxes.
    pub gap_size: f64,
    /// Boundary placement.
    pub mode: LayoutMode,
}

impl LayoutRequest {
    /// Creates a request with default constraints.
    #[must_use]
    pub const fn new(available_space: f64, count: usize, direction: LayoutDirection) -> Self {
        Self {
            available_space,
            count,
            direction,
            min_box_size: 0.0,
            max_box_size: f64::INFINITY,
            gap_size: 0.0,
            mode: LayoutMode::Exact,
        }
    }

    /// Sets the minimum box size.
    #[must_use]
    pub const fn with_min_box_size(mut self, min_box_size: f64) -> Self {
        self.min_box_size = min_box_size;
        self
    }

    /// Sets the maximum box size.
    #[must_use]
    pub const fn with_max_box_size(mut self, max_box_size: f64) -> Self {
        self.max_box_size = max_box_size;
        self
    }

    /// Sets both bounds to the same value, fixing the box size.
    #[must_use]
    pub const fn with_fixed_box_size(mut self, box_size: f64) -> Self {
        self.min_box_size = box_size;
        self.max_box_size = box_size;
        self
    }

    /// Sets the gap between consecutive boxes.
    #[must_use]
    pub const fn with_gap_size(mut self, gap_size: f64) -> Self {
        self.gap_size = gap_size;
        self
    }

    /// Sets the boundary placement mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks the request for configuration errors.
    ///
    /// Called by the solver; exposed so hosts can validate user-provided
    /// styling up front.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.available_space.is_nan() || self.available_space.is_infinite() {
            return Err(LayoutError::NonFiniteAvailableSpace(self.available_space));
        }
        if self.available_space < 0.0 {
            return Err(LayoutError::NegativeAvailableSpace(self.available_space));
        }
        let (min, max) = (self.min_box_size, self.max_box_size);
        if !min.is_finite() || min < 0.0 || max.is_nan() || min > max {
            return Err(LayoutError::InvalidBoxSizeRange { min, max });
        }
        if !self.gap_size.is_finite() || self.gap_size < 0.0 {
            return Err(LayoutError::InvalidGapSize(self.gap_size));
        }
        Ok(())
    }

    /// Solves this request. Shorthand for [`layout(&self)`](crate::layout()).
    pub fn layout(&self) -> Result<Layout, LayoutError> {
        crate::layout(self)
    }
}
