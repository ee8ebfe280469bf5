//! Benchmarks for sheet packing and panel path generation.
//!
//! Measures the greedy packer at several panel counts and the cost of
//! generating a full set of box panel cuts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fingerbox_core::{BoxConfig, ReliefStyle};
use fingerbox_cutting::PanelPathGenerator;
use fingerbox_d2::SheetPacker;

fn bench_packer(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_packer");
    group.sample_size(10);

    for &n in &[5, 10, 20] {
        let mut packer = SheetPacker::with_stock(600.0, 400.0, 5.0).unwrap();
        for i in 0..n {
            let w = 40.0 + (i as f64 * 13.0) % 120.0;
            let h = 30.0 + (i as f64 * 29.0) % 90.0;
            packer.add_panel(&format!("P{}", i), w, h, 1).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("rectangles", n), &packer, |b, packer| {
            b.iter(|| {
                let mut packer = packer.clone();
                black_box(packer.calculate_layout())
            })
        });
    }
    group.finish();
}

fn bench_box_design(c: &mut Criterion) {
    let config = BoxConfig::default()
        .with_dividers(true, true)
        .with_relief_style(ReliefStyle::Fillet45);

    c.bench_function("box_panel_cuts", |b| {
        b.iter(|| {
            let generator = PanelPathGenerator::from_config(black_box(&config)).unwrap();
            for (kind, _) in generator.panel_kinds() {
                black_box(generator.cuts(kind).unwrap());
            }
        })
    });

    c.bench_function("box_pack", |b| {
        let generator = PanelPathGenerator::from_config(&config).unwrap();
        b.iter(|| {
            let mut packer = SheetPacker::new(black_box(&config)).unwrap();
            packer.add_box_panels(&generator).unwrap();
            black_box(packer.calculate_layout())
        })
    });
}

criterion_group!(benches, bench_packer, bench_box_design);
criterion_main!(benches);
