//! Benchmarks for the geometry engine.
//!
//! Measures rectangle and splitter computation per mode, and the full
//! relayout path a resize goes through.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quadsplit_core::geometry::Size;
use quadsplit_ui::{
    LayoutConfig, LayoutContainer, LayoutInput, LayoutMode, PanelVisibility, SplitFractions,
    calculate_layout_rectangles, calculate_splitters,
};

fn input(mode: LayoutMode) -> LayoutInput {
    LayoutInput {
        mode,
        size: Size::new(1280.0, 720.0),
        visibility: PanelVisibility::all(),
        fractions: SplitFractions::default(),
        splitter_thickness: 2.0,
        border_offset: 1.0,
    }
}

fn bench_rectangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/rectangles");

    for mode in LayoutMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &input(mode), |b, input| {
            b.iter(|| calculate_layout_rectangles(black_box(input)));
        });
    }

    group.finish();
}

fn bench_splitters(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/splitters");

    for mode in [LayoutMode::Vertical, LayoutMode::Grid] {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &input(mode), |b, input| {
            b.iter(|| calculate_splitters(black_box(input)));
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/resize");

    for mode in [LayoutMode::Vertical, LayoutMode::Grid, LayoutMode::Custom] {
        group.bench_function(BenchmarkId::from_parameter(mode), |b| {
            let mut container = LayoutContainer::with_config(LayoutConfig::new().with_mode(mode));
            let mut width = 800.0;
            b.iter(|| {
                // Alternate so every call takes the relayout path.
                width = if width == 800.0 { 801.0 } else { 800.0 };
                container.set_size(black_box(width), 600.0);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rectangles, bench_splitters, bench_resize);

criterion_main!(benches);
