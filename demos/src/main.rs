// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print the geometry of a box layout.
//!
//! Run:
//! - `cargo run -p understory_demos -- --space 220 --count 7 --min 10 --max 40 --gap 2`
//! - `RUST_LOG=understory_box_layout=debug cargo run -p understory_demos -- --space 100 --count 20 --min 10`

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use understory_box_layout::{LayoutDirection, LayoutMode, LayoutRequest};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl From<Direction> for LayoutDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::LeftToRight => Self::LeftToRight,
            Direction::RightToLeft => Self::RightToLeft,
            Direction::TopToBottom => Self::TopToBottom,
            Direction::BottomToTop => Self::BottomToTop,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Exact,
    Rounded,
}

impl From<Mode> for LayoutMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Exact => Self::Exact,
            Mode::Rounded => Self::Rounded,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Available space to partition.
    #[arg(long, default_value_t = 220.0)]
    space: f64,
    /// Number of boxes.
    #[arg(long, default_value_t = 7)]
    count: usize,
    /// Minimum box size.
    #[arg(long, default_value_t = 0.0)]
    min: f64,
    /// Maximum box size; unbounded when omitted.
    #[arg(long)]
    max: Option<f64>,
    /// Gap between boxes.
    #[arg(long, default_value_t = 0.0)]
    gap: f64,
    #[arg(long, value_enum, default_value_t = Direction::LeftToRight)]
    direction: Direction,
    #[arg(long, value_enum, default_value_t = Mode::Exact)]
    mode: Mode,
    /// Extent of each box across the layout axis, for the printed rectangles.
    #[arg(long, default_value_t = 100.0)]
    cross: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let request = LayoutRequest::new(cli.space, cli.count, cli.direction.into())
        .with_min_box_size(cli.min)
        .with_max_box_size(cli.max.unwrap_or(f64::INFINITY))
        .with_gap_size(cli.gap)
        .with_mode(cli.mode.into());

    let layout = request.layout()?;

    println!("Available space: {:.2}", layout.available_space());
    println!("Used space:      {:.2}", layout.used_space());
    println!("Remaining space: {:.2}", layout.remaining_space());
    println!("Box size:        {:.2}", layout.box_size());
    println!("Direction:       {:?}", layout.direction());
    if layout.is_overflowing() {
        tracing::warn!(
            overflow = -layout.remaining_space(),
            "boxes do not fit the available space"
        );
    }

    println!();
    println!("{:>5} {:>10} {:>10} {:>10}  rect", "index", "start", "center", "end");
    for span in layout.spans() {
        let rect = layout.box_rect(span.index, 0.0..cli.cross)?;
        println!(
            "{:>5} {:>10.2} {:>10.2} {:>10.2}  ({:.1}, {:.1}) - ({:.1}, {:.1})",
            span.index.get(),
            span.start,
            span.center(),
            span.end,
            rect.x0,
            rect.y0,
            rect.x1,
            rect.y1,
        );
    }

    Ok(())
}
