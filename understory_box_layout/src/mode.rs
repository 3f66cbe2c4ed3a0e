// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary placement strategies.
//!
//! Both strategies produce *logical* edges: offsets measured from the edge that
//! holds box `0`. Mirroring into physical coordinates happens in the solver.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// How box boundaries are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Boundaries are unrounded real offsets.
    #[default]
    Exact,
    /// Boundaries are snapped to whole units.
    ///
    /// The box size is floored to a whole unit, and the cumulative offset of
    /// every edge (measured from the edge holding box `0`) is rounded, so the
    /// rendered size of a box is the difference of two rounded offsets.
    /// Adjacent boxes without a gap therefore share their rounded edge exactly,
    /// no matter how many boxes are laid out.
    Rounded,
}

impl LayoutMode {
    /// Snaps an already clamped box size.
    ///
    /// In rounded mode the size is floored unless that would drop it below
    /// `min_box_size`; a fractional minimum keeps the clamped size and only the
    /// edges are rounded.
    pub(crate) fn snap_box_size(self, box_size: f64, min_box_size: f64) -> f64 {
        match self {
            Self::Exact => box_size,
            Self::Rounded => {
                let floored = box_size.floor();
                if floored >= min_box_size {
                    floored
                } else {
                    box_size
                }
            }
        }
    }

    /// Computes the logical edges of `count` boxes.
    pub(crate) fn edges(self, count: usize, box_size: f64, gap_size: f64) -> Vec<Edges> {
        match self {
            Self::Exact => exact_edges(count, box_size, gap_size),
            Self::Rounded => rounded_edges(count, box_size, gap_size),
        }
    }
}

/// Logical start and end offset of one box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Edges {
    pub(crate) start: f64,
    pub(crate) end: f64,
}

/// Offset of the leading edge of box `i`.
fn start_offset(i: usize, box_size: f64, gap_size: f64) -> f64 {
    let i = i as f64;
    i * box_size + i * gap_size
}

/// Offset of the trailing edge of box `i`.
///
/// Written so that with a zero gap this is bit-identical to
/// `start_offset(i + 1, ..)`.
fn end_offset(i: usize, box_size: f64, gap_size: f64) -> f64 {
    let i = i as f64;
    (i + 1.0) * box_size + i * gap_size
}

fn exact_edges(count: usize, box_size: f64, gap_size: f64) -> Vec<Edges> {
    (0..count)
        .map(|i| Edges {
            start: start_offset(i, box_size, gap_size),
            end: end_offset(i, box_size, gap_size),
        })
        .collect()
}

fn rounded_edges(count: usize, box_size: f64, gap_size: f64) -> Vec<Edges> {
    (0..count)
        .map(|i| Edges {
            start: start_offset(i, box_size, gap_size).round(),
            end: end_offset(i, box_size, gap_size).round(),
        })
        .collect()
}
