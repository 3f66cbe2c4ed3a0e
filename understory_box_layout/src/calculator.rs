// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The box layout solver.

use alloc::vec::Vec;

use crate::layout::Layout;
use crate::mode::Edges;
use crate::{LayoutError, LayoutRequest};

/// Computes the size of each box when `count` boxes share `available_space`.
///
/// The raw size fills the space exactly after reserving `(count - 1)` gaps;
/// it is then clamped into `[min_box_size, max_box_size]`. Returns `0.0` for
/// zero boxes.
///
/// This does no validation; callers are expected to pass the bounds of a
/// request that passed [`LayoutRequest::validate`].
#[must_use]
pub fn calculate_box_size(
    available_space: f64,
    count: usize,
    min_box_size: f64,
    max_box_size: f64,
    gap_size: f64,
) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f64;
    let raw = (available_space - (n - 1.0) * gap_size) / n;
    // Not `f64::clamp`: an unbounded maximum must stay valid and `clamp`
    // panics on NaN bounds.
    raw.max(min_box_size).min(max_box_size)
}

/// Lays out the boxes described by `request`.
///
/// This is a pure function: identical requests yield identical layouts, and
/// nothing is cached between calls.
///
/// Fails only for invalid configuration (see [`LayoutRequest::validate`]).
/// Boxes that do not fit because of `min_box_size` are still laid out; the
/// overflow shows up as a negative [`Layout::remaining_space`].
pub fn layout(request: &LayoutRequest) -> Result<Layout, LayoutError> {
    request.validate()?;

    let LayoutRequest {
        available_space,
        count,
        direction,
        min_box_size,
        max_box_size,
        gap_size,
        mode,
    } = *request;

    if count == 0 {
        return Ok(Layout {
            available_space,
            used_space: 0.0,
            box_size: 0.0,
            gap_size,
            direction,
            mode,
            spans: Vec::new(),
        });
    }

    let box_size = mode.snap_box_size(
        calculate_box_size(available_space, count, min_box_size, max_box_size, gap_size),
        min_box_size,
    );
    let n = count as f64;
    let used_space = n * box_size + (n - 1.0) * gap_size;

    let mut spans = mode.edges(count, box_size, gap_size);
    if direction.is_reversed() {
        for edges in &mut spans {
            *edges = Edges {
                start: available_space - edges.end,
                end: available_space - edges.start,
            };
        }
    }

    let layout = Layout {
        available_space,
        used_space,
        box_size,
        gap_size,
        direction,
        mode,
        spans,
    };

    #[cfg(feature = "tracing")]
    {
        tracing::trace!(
            available_space,
            count,
            box_size,
            used_space,
            ?direction,
            ?mode,
            "computed box layout"
        );
        if layout.is_overflowing() {
            tracing::debug!(
                available_space,
                count,
                min_box_size,
                overflow = -layout.remaining_space(),
                "box layout overflows available space"
            );
        }
    }

    Ok(layout)
}
