// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout directions and the screen axis they map onto.

use core::ops::Range;

use kurbo::{Point, Rect};

/// The screen axis a layout runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Offsets are X coordinates.
    Horizontal,
    /// Offsets are Y coordinates.
    Vertical,
}

impl Orientation {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub fn main_coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Builds a rectangle from a span along this axis and a span across it.
    ///
    /// The resulting rectangle is not normalized; callers passing reversed
    /// ranges get a rectangle with negative width or height.
    #[must_use]
    pub fn rect(self, main: Range<f64>, cross: Range<f64>) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main.start, cross.start, main.end, cross.end),
            Self::Vertical => Rect::new(cross.start, main.start, cross.end, main.end),
        }
    }
}

/// Axis and traversal sense of a box layout.
///
/// The direction decides which physical edge of the available span holds
/// box `0`. For [`LayoutDirection::RightToLeft`] and
/// [`LayoutDirection::BottomToTop`] box `0` sits at the far end and the whole
/// layout is mirrored, not merely re-indexed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Box `0` at the left edge, increasing to the right.
    #[default]
    LeftToRight,
    /// Box `0` at the right edge, increasing to the left.
    RightToLeft,
    /// Box `0` at the top edge, increasing downwards.
    TopToBottom,
    /// Box `0` at the bottom edge, increasing upwards.
    BottomToTop,
}

impl LayoutDirection {
    /// All directions, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::TopToBottom,
        Self::BottomToTop,
    ];

    /// Returns the screen axis this direction runs along.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::LeftToRight | Self::RightToLeft => Orientation::Horizontal,
            Self::TopToBottom | Self::BottomToTop => Orientation::Vertical,
        }
    }

    /// Returns `true` if box `0` sits at the far end of the span.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::RightToLeft | Self::BottomToTop)
    }

    /// Returns the direction on the same axis with the opposite sense.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
            Self::TopToBottom => Self::BottomToTop,
            Self::BottomToTop => Self::TopToBottom,
        }
    }
}
