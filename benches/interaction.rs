//! Benchmarks for the interaction hot paths
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use csvplot_rs::config::{ViewerMode, ViewerOptions};
use csvplot_rs::data::parse_csv;
use csvplot_rs::view::{build_controller, hover_lookup, HitTolerance, InputEvent};
use csvplot_rs::{DataSeries, Point, Series};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

fn table(rows: usize, series: usize) -> DataSeries {
    let x: Vec<f64> = (0..rows).map(|i| i as f64 * 0.1).collect();
    let series = (0..series)
        .map(|s| {
            let values = x.iter().map(|v| (v + s as f64).sin() * 100.0).collect();
            Series::new(format!("s{}", s), values)
        })
        .collect();
    DataSeries::new("x", x, series).expect("valid table")
}

fn bench_nearest_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_index");

    for rows in [1_000, 10_000, 100_000].iter() {
        let data = table(*rows, 1);
        let target = data.x_bounds().center() + 0.03;
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| black_box(data.nearest_index(black_box(target))));
        });
    }

    group.finish();
}

fn bench_hover_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover_lookup");
    let tolerance = HitTolerance::new(0.05, 1.0);
    let hidden = BTreeSet::new();

    for series in [1, 4, 16].iter() {
        let data = table(10_000, *series);
        // Nothing under the pointer: every point is tested
        let miss = Point::new(500.0, 1_000.0);
        group.bench_with_input(BenchmarkId::new("miss", series), &data, |b, data| {
            b.iter(|| black_box(hover_lookup(data, black_box(miss), tolerance, &hidden)));
        });
    }

    group.finish();
}

fn bench_controller_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_dispatch");
    let data = Arc::new(table(10_000, 4));

    group.bench_function("scroll_slider", |b| {
        let mut controller = build_controller(ViewerMode::Scroll, data.clone(), &ViewerOptions::default());
        let mut position = 0.0;
        b.iter(|| {
            position = (position + 17.0) % 9_000.0;
            black_box(controller.dispatch(InputEvent::SliderChanged(position)))
        });
    });

    group.bench_function("box_zoom_hover", |b| {
        let mut controller = build_controller(ViewerMode::BoxZoom, data.clone(), &ViewerOptions::default());
        let tolerance = HitTolerance::new(0.05, 1.0);
        let mut x = 0.0;
        b.iter(|| {
            x = (x + 0.37) % 1_000.0;
            black_box(controller.dispatch(InputEvent::Motion {
                pos: Some(Point::new(x, 0.0)),
                tolerance,
            }))
        });
    });

    group.finish();
}

fn bench_parse_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_csv");

    for rows in [1_000, 10_000].iter() {
        let mut content = String::from("x,a,b,c\n");
        for i in 0..*rows {
            content.push_str(&format!("{},{},{},{}\n", i, i * 2, i % 7, i as f64 * 0.5));
        }
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &content, |b, content| {
            b.iter(|| black_box(parse_csv(Path::new("bench.csv"), content.as_bytes())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_nearest_index,
    bench_hover_lookup,
    bench_controller_dispatch,
    bench_parse_csv
);
criterion_main!(benches);
