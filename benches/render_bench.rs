//! Benchmarks for chart rendering and scene encoding
//!
//! Run with: cargo bench

use chartboard::chart::*;
use chartboard::dashboard::{build_dashboard, DashboardSettings};
use chartboard::surface::{OutputFormat, SceneEncoder};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const KEYS: [&str; 3] = ["sales", "marketing", "support"];

fn create_test_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Record::new(format!("T{}", i))
                .value("sales", 1000.0 + 500.0 * (x / 7.0).sin())
                .value("marketing", 800.0 + 300.0 * (x / 5.0).cos())
                .value("support", 400.0 + 10.0 * x)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let style = chartboard::dashboard::chart_config();
    let options = ChartOptions::default().legend(true);

    for size in [12, 120, 1200] {
        let records = create_test_records(size);

        group.throughput(Throughput::Elements(size as u64));

        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::AreaStacked] {
            group.bench_function(format!("{}_{}", kind, size), |b| {
                b.iter(|| render(kind, black_box(&records), &KEYS, &style, &options))
            });
        }

        group.bench_function(format!("pie_{}", size), |b| {
            b.iter(|| render(ChartKind::Pie, black_box(&records), &["sales"], &style, &options))
        });
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let settings = DashboardSettings::default();

    group.bench_function("build", |b| {
        b.iter(|| build_dashboard(black_box(&settings)))
    });

    let scene = build_dashboard(&settings);
    for format in [OutputFormat::Svg, OutputFormat::Html, OutputFormat::Json] {
        let encoder = format.encoder();
        group.bench_function(format!("encode_{}", format), |b| {
            b.iter(|| encoder.encode(black_box(&scene)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_dashboard);
criterion_main!(benches);
