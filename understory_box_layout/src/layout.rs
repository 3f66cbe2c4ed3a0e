// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The computed result of a layout pass.

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;

use kurbo::Rect;

use crate::mode::Edges;
use crate::{BoxIndex, LayoutDirection, LayoutError, LayoutMode};

/// Immutable geometry of one layout pass.
///
/// All per-box values are physical offsets along the layout's
/// [orientation](LayoutDirection::orientation), measured from the left or top
/// edge of the available span. Boundaries are computed once by
/// [`layout()`](crate::layout()); queries are plain table reads.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub(crate) available_space: f64,
    pub(crate) used_space: f64,
    pub(crate) box_size: f64,
    pub(crate) gap_size: f64,
    pub(crate) direction: LayoutDirection,
    pub(crate) mode: LayoutMode,
    /// Physical edges, indexed by box index.
    pub(crate) spans: Vec<Edges>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::empty()
    }
}

impl Layout {
    /// A layout with no boxes and no space.
    ///
    /// Useful as the initial value before the first layout pass.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            available_space: 0.0,
            used_space: 0.0,
            box_size: 0.0,
            gap_size: 0.0,
            direction: LayoutDirection::LeftToRight,
            mode: LayoutMode::Exact,
            spans: Vec::new(),
        }
    }

    /// Returns the space that was available to the layout.
    #[must_use]
    pub fn available_space(&self) -> f64 {
        self.available_space
    }

    /// Returns the extent covered by all boxes and the gaps between them.
    ///
    /// Always `count * box_size + (count - 1) * gap_size`.
    #[must_use]
    pub fn used_space(&self) -> f64 {
        self.used_space
    }

    /// Returns `available_space - used_space`.
    ///
    /// Negative when `min_box_size` forced the boxes past the available space.
    #[must_use]
    pub fn remaining_space(&self) -> f64 {
        self.available_space - self.used_space
    }

    /// Returns `true` if the boxes do not fit into the available space.
    #[must_use]
    pub fn is_overflowing(&self) -> bool {
        self.remaining_space() < 0.0
    }

    /// Returns the size of each box.
    ///
    /// In [`LayoutMode::Rounded`] this is floored to a whole unit whenever
    /// that still honours `min_box_size`.
    #[must_use]
    pub fn box_size(&self) -> f64 {
        self.box_size
    }

    /// Returns the gap between consecutive boxes.
    #[must_use]
    pub fn gap_size(&self) -> f64 {
        self.gap_size
    }

    /// Returns the sum of all gaps, `(len - 1) * gap_size`.
    #[must_use]
    pub fn total_gaps(&self) -> f64 {
        match self.spans.len() {
            0 => 0.0,
            n => (n - 1) as f64 * self.gap_size,
        }
    }

    /// Returns the used space without the gaps.
    #[must_use]
    pub fn used_space_without_gaps(&self) -> f64 {
        self.used_space - self.total_gaps()
    }

    /// Returns the layout direction.
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Returns the placement mode the layout was computed with.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Returns the number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if the layout has no boxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    fn edges(&self, index: BoxIndex) -> Result<Edges, LayoutError> {
        self.spans
            .get(index.0)
            .copied()
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                count: self.spans.len(),
            })
    }

    /// Returns the lower physical coordinate of box `index`.
    pub fn start(&self, index: BoxIndex) -> Result<f64, LayoutError> {
        self.edges(index).map(|e| e.start)
    }

    /// Returns the upper physical coordinate of box `index`.
    pub fn end(&self, index: BoxIndex) -> Result<f64, LayoutError> {
        self.edges(index).map(|e| e.end)
    }

    /// Returns the midpoint of box `index`.
    pub fn center(&self, index: BoxIndex) -> Result<f64, LayoutError> {
        self.edges(index).map(|e| (e.start + e.end) * 0.5)
    }

    /// Returns `start..end` of box `index`.
    pub fn span(&self, index: BoxIndex) -> Result<Range<f64>, LayoutError> {
        self.edges(index).map(|e| e.start..e.end)
    }

    /// Returns the rectangle of box `index`, spanning `cross` on the other axis.
    ///
    /// For horizontal directions the box span becomes the X range, for
    /// vertical directions the Y range.
    pub fn box_rect(&self, index: BoxIndex, cross: Range<f64>) -> Result<Rect, LayoutError> {
        let span = self.span(index)?;
        Ok(self.direction.orientation().rect(span, cross))
    }

    /// Iterates all boxes in index order.
    pub fn spans(&self) -> Spans<'_> {
        Spans {
            inner: self.spans.iter().enumerate(),
        }
    }

    /// Returns the box containing the physical coordinate `position`.
    ///
    /// Touching boxes (no gap) are half-open, `[start, end)`, so a shared edge
    /// belongs to the box that starts there. With a positive gap the end edge
    /// belongs to the box as well. Positions inside a gap or outside all boxes
    /// yield `None`.
    #[must_use]
    pub fn box_index_at(&self, position: f64) -> Option<BoxIndex> {
        let n = self.spans.len();
        let reversed = self.direction.is_reversed();
        // Box index of the `k`-th box in increasing physical order.
        let nth = |k: usize| if reversed { n - 1 - k } else { k };

        // First box (in physical order) whose end lies beyond `position`.
        let (mut lo, mut hi) = (0, n);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.spans[nth(mid)].end <= position {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        if lo < n && self.spans[nth(lo)].start <= position {
            return Some(BoxIndex(nth(lo)));
        }
        if self.gap_size > 0.0 && lo > 0 && self.spans[nth(lo - 1)].end == position {
            return Some(BoxIndex(nth(lo - 1)));
        }
        None
    }
}

/// One laid-out box, as yielded by [`Layout::spans`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSpan {
    /// The box index.
    pub index: BoxIndex,
    /// Lower physical coordinate.
    pub start: f64,
    /// Upper physical coordinate.
    pub end: f64,
}

impl BoxSpan {
    /// Returns the midpoint.
    #[must_use]
    pub fn center(&self) -> f64 {
        (self.start + self.end) * 0.5
    }

    /// Returns the rendered size, `end - start`.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.end - self.start
    }
}

/// Iterator over the boxes of a [`Layout`], in index order.
#[derive(Clone, Debug)]
pub struct Spans<'a> {
    inner: core::iter::Enumerate<core::slice::Iter<'a, Edges>>,
}

impl Iterator for Spans<'_> {
    type Item = BoxSpan;

    fn next(&mut self) -> Option<BoxSpan> {
        self.inner.next().map(|(i, e)| BoxSpan {
            index: BoxIndex(i),
            start: e.start,
            end: e.end,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Spans<'_> {
    fn next_back(&mut self) -> Option<BoxSpan> {
        self.inner.next_back().map(|(i, e)| BoxSpan {
            index: BoxIndex(i),
            start: e.start,
            end: e.end,
        })
    }
}

impl ExactSizeIterator for Spans<'_> {}

impl FusedIterator for Spans<'_> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::{BoxSpan, Layout};
    use crate::{BoxIndex, LayoutDirection, LayoutError, LayoutRequest};

    fn four_boxes(direction: LayoutDirection, max: f64, gap: f64) -> Layout {
        LayoutRequest::new(100.0, 4, direction)
            .with_min_box_size(0.5)
            .with_max_box_size(max)
            .with_gap_size(gap)
            .layout()
            .unwrap()
    }

    #[test]
    fn empty_layout_has_no_boxes() {
        let l = Layout::empty();
        assert!(l.is_empty());
        assert_eq!(l.len(), 0);
        assert_eq!(l.total_gaps(), 0.0);
        assert_eq!(l.remaining_space(), 0.0);
        assert_eq!(l.box_index_at(0.0), None);
        assert_eq!(l, Layout::default());
    }

    #[test]
    fn out_of_range_queries_fail() {
        let l = four_boxes(LayoutDirection::LeftToRight, f64::INFINITY, 0.0);
        let err = LayoutError::IndexOutOfRange {
            index: BoxIndex(4),
            count: 4,
        };
        assert_eq!(l.start(BoxIndex(4)), Err(err));
        assert_eq!(l.end(BoxIndex(4)), Err(err));
        assert_eq!(l.center(BoxIndex(4)), Err(err));
        assert_eq!(l.span(BoxIndex(4)), Err(err));
        assert_eq!(l.box_rect(BoxIndex(4), 0.0..1.0), Err(err));
    }

    #[test]
    fn box_index_at_without_gaps() {
        let l = four_boxes(LayoutDirection::LeftToRight, f64::INFINITY, 0.0);
        assert_eq!(l.box_size(), 25.0);

        assert_eq!(l.box_index_at(-0.1), None);
        assert_eq!(l.box_index_at(0.0), Some(BoxIndex(0)));
        assert_eq!(l.box_index_at(24.999), Some(BoxIndex(0)));
        assert_eq!(l.box_index_at(25.0), Some(BoxIndex(1)));
        assert_eq!(l.box_index_at(49.99), Some(BoxIndex(1)));
        assert_eq!(l.box_index_at(50.0), Some(BoxIndex(2)));
        assert_eq!(l.box_index_at(74.999_999), Some(BoxIndex(2)));
        assert_eq!(l.box_index_at(75.0), Some(BoxIndex(3)));
        assert_eq!(l.box_index_at(99.999), Some(BoxIndex(3)));
        assert_eq!(l.box_index_at(100.0), None);
        assert_eq!(l.box_index_at(100.1), None);
        assert_eq!(l.box_index_at(f64::NAN), None);
    }

    fn check_hits(l: &Layout) {
        for s in l.spans() {
            assert_eq!(l.box_index_at(s.start), Some(s.index), "start of {}", s.index);
            assert_eq!(l.box_index_at(s.center()), Some(s.index), "center of {}", s.index);
            assert_eq!(l.box_index_at(s.end - 0.1), Some(s.index), "end of {}", s.index);
            if l.gap_size() > 0.1 {
                assert_eq!(l.box_index_at(s.end), Some(s.index), "end of {}", s.index);
                assert_eq!(l.box_index_at(s.start - 0.1), None, "before {}", s.index);
                assert_eq!(l.box_index_at(s.end + 0.1), None, "after {}", s.index);
            }
        }
    }

    #[test]
    fn box_index_at_with_gaps_in_every_direction() {
        for direction in LayoutDirection::ALL {
            let l = four_boxes(direction, 20.0, 5.0);
            assert_eq!(l.box_size(), 20.0);
            assert_eq!(l.gap_size(), 5.0);
            check_hits(&l);
        }
        for direction in LayoutDirection::ALL {
            check_hits(&four_boxes(direction, f64::INFINITY, 0.0));
        }
    }

    #[test]
    fn reversed_hit_testing_maps_back_to_index() {
        let l = four_boxes(LayoutDirection::RightToLeft, f64::INFINITY, 0.0);
        assert_eq!(l.box_index_at(0.0), Some(BoxIndex(3)));
        assert_eq!(l.box_index_at(99.0), Some(BoxIndex(0)));
        assert_eq!(l.box_index_at(75.0), Some(BoxIndex(0)));
        assert_eq!(l.box_index_at(100.0), None);
    }

    #[test]
    fn spans_iterate_in_index_order() {
        let l = four_boxes(LayoutDirection::BottomToTop, f64::INFINITY, 0.0);
        let spans: Vec<BoxSpan> = l.spans().collect();
        assert_eq!(spans.len(), 4);
        assert_eq!(l.spans().len(), 4);
        assert_eq!(spans[0].index, BoxIndex(0));
        assert_eq!((spans[0].start, spans[0].end), (75.0, 100.0));
        assert_eq!(spans[3].size(), 25.0);
        assert_eq!(l.spans().next_back().map(|s| s.index), Some(BoxIndex(3)));
    }

    #[test]
    fn box_rect_uses_orientation() {
        let h = four_boxes(LayoutDirection::LeftToRight, f64::INFINITY, 0.0);
        assert_eq!(
            h.box_rect(BoxIndex(1), 0.0..10.0),
            Ok(Rect::new(25.0, 0.0, 50.0, 10.0))
        );
        let v = four_boxes(LayoutDirection::TopToBottom, f64::INFINITY, 0.0);
        assert_eq!(
            v.box_rect(BoxIndex(1), 0.0..10.0),
            Ok(Rect::new(0.0, 25.0, 10.0, 50.0))
        );
    }
}
