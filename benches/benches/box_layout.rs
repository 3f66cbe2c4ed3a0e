// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_box_layout::{BoxIndex, LayoutDirection, LayoutMode, LayoutRequest, layout};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_layout/layout");

    for count in [8_usize, 128, 2_048, 32_768] {
        group.throughput(Throughput::Elements(count as u64));
        for mode in [LayoutMode::Exact, LayoutMode::Rounded] {
            let req = LayoutRequest::new(1_920.7, count, LayoutDirection::RightToLeft)
                .with_min_box_size(0.01)
                .with_max_box_size(40.0)
                .with_gap_size(0.5)
                .with_mode(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), count),
                &req,
                |b, req| {
                    b.iter(|| black_box(layout(black_box(req)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_layout/queries");

    // One paint pass: every box queried once for its center, plus a sweep of
    // pointer positions for hit testing.
    for count in [128_usize, 4_096] {
        let l = LayoutRequest::new(4_000.0, count, LayoutDirection::LeftToRight)
            .with_gap_size(1.0)
            .layout()
            .unwrap();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("center", count), &l, |b, l| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..l.len() {
                    sum += l.center(BoxIndex(i)).unwrap();
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("box_index_at", count), &l, |b, l| {
            b.iter(|| {
                let mut hits = 0_usize;
                let step = l.available_space() / count as f64;
                for i in 0..count {
                    if l.box_index_at(i as f64 * step + 0.25).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_queries);
criterion_main!(benches);
