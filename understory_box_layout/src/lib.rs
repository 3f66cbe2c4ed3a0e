// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_box_layout --heading-base-level=0

//! Understory Box Layout: headless 1D box/segment layout.
//!
//! This crate partitions a finite linear span (an axis, one dimension of a
//! content area) into a sequence of equally sized *boxes* separated by gaps,
//! and answers geometric queries about them. Category axes, grouped bars,
//! history stripes, and zone bands are all instances of the same problem.
//!
//! The core concepts are:
//!
//! - [`LayoutRequest`]: the inputs of one layout pass: available space, box
//!   count, [`LayoutDirection`], optional minimum/maximum box size, gap, and
//!   [`LayoutMode`].
//! - [`layout()`]: a pure function that solves a request. The box size is the
//!   size that exactly fills the span after reserving the gaps, clamped into
//!   the requested bounds.
//! - [`Layout`]: the immutable result. It exposes aggregate metrics
//!   (used/remaining space, box size) and per-box queries keyed by
//!   [`BoxIndex`]: [`Layout::start`], [`Layout::end`], [`Layout::center`], plus
//!   hit testing via [`Layout::box_index_at`].
//!
//! Reversed directions ([`LayoutDirection::RightToLeft`],
//! [`LayoutDirection::BottomToTop`]) place box `0` at the far end and mirror
//! the whole layout. [`LayoutMode::Rounded`] floors the box size to whole
//! units and rounds every edge cumulatively, so touching boxes never drift
//! apart or overlap.
//!
//! This crate does **not** paint anything. Hosts call [`layout()`] once per
//! layout pass (resize, zoom, data-count change) and query the result while
//! painting.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_box_layout::{BoxIndex, LayoutDirection, LayoutRequest};
//!
//! // Seven categories on a 220px axis, 2px apart, each between 10 and 40px.
//! let layout = LayoutRequest::new(220.0, 7, LayoutDirection::LeftToRight)
//!     .with_min_box_size(10.0)
//!     .with_max_box_size(40.0)
//!     .with_gap_size(2.0)
//!     .layout()
//!     .unwrap();
//!
//! assert!((layout.box_size() - 208.0 / 7.0).abs() < 1e-9);
//! assert!(layout.remaining_space().abs() < 1e-9);
//! assert_eq!(layout.start(BoxIndex::new(0)), Ok(0.0));
//!
//! for span in layout.spans() {
//!     // Paint category `span.index` between `span.start` and `span.end`.
//!     assert!(span.end > span.start);
//! }
//! ```
//!
//! ## Overflow
//!
//! Boxes that cannot shrink below `min_box_size` are still laid out. The
//! overflow is reported as a negative [`Layout::remaining_space`] so hosts can
//! decide to scroll, elide, or clip:
//!
//! ```rust
//! use understory_box_layout::{LayoutDirection, LayoutRequest};
//!
//! let layout = LayoutRequest::new(100.0, 20, LayoutDirection::LeftToRight)
//!     .with_min_box_size(10.0)
//!     .with_max_box_size(40.0)
//!     .with_gap_size(2.0)
//!     .layout()
//!     .unwrap();
//!
//! assert_eq!(layout.box_size(), 10.0);
//! assert_eq!(layout.used_space(), 238.0);
//! assert_eq!(layout.remaining_space(), -138.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to Kurbo.
//! - `libm`: float math for `no_std` builds, forwarded to Kurbo.
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events for computed
//!   and overflowing layouts.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod calculator;
mod direction;
mod error;
mod index;
mod layout;
mod mode;
mod request;

pub use calculator::{calculate_box_size, layout};
pub use direction::{LayoutDirection, Orientation};
pub use error::LayoutError;
pub use index::BoxIndex;
pub use layout::{BoxSpan, Layout, Spans};
pub use mode::LayoutMode;
pub use request::LayoutRequest;
