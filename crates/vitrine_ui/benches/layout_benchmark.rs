//! # Layout Stack Benchmark
//!
//! Placement must stay O(1) amortized per widget: one frame of deeply nested
//! layouts with many children should cost microseconds, not milliseconds.
//!
//! Run with: `cargo bench --package vitrine_ui`

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use vitrine_ui::{Axis, CommandRenderer, InputState, UiContext, Vec2};

/// Benchmark: push/expand/pop across a wide, shallow frame.
fn bench_wide_frame(c: &mut Criterion) {
    c.bench_function("wide_frame_256_widgets", |b| {
        let mut ui = UiContext::new();
        let mut renderer = CommandRenderer::new();
        let input = InputState::new();

        b.iter(|| {
            renderer.begin_frame();
            ui.begin_frame();
            ui.begin_layout(Axis::Vertical, Vec2::new(10.0, 10.0), 5.0);
            for _ in 0..256 {
                ui.text(&mut renderer, black_box("entry"));
            }
            ui.end_layout();
            ui.end_frame(&input);
        });
    });
}

/// Benchmark: deep nesting up to the default depth limit.
fn bench_deep_nesting(c: &mut Criterion) {
    c.bench_function("nested_layouts_depth_63", |b| {
        let mut ui = UiContext::new();
        let mut renderer = CommandRenderer::new();
        let input = InputState::new();

        b.iter(|| {
            renderer.begin_frame();
            ui.begin_frame();
            ui.begin_layout(Axis::Vertical, Vec2::ZERO, 2.0);
            for depth in 0..62 {
                let axis = if depth % 2 == 0 {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                };
                ui.begin_sublayout(axis, 2.0);
                ui.text(&mut renderer, black_box("x"));
            }
            for _ in 0..62 {
                ui.end_layout();
            }
            ui.end_layout();
            ui.end_frame(&input);
        });
    });
}

criterion_group!(benches, bench_wide_frame, bench_deep_nesting);
criterion_main!(benches);
