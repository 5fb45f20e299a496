use criterion::{Criterion, criterion_group, criterion_main};
use evalgraph_rs::api::{EvalGraph, EvalGraphConfig};
use evalgraph_rs::core::{
    AnalysisWindow, LayoutPlan, MoveAnalysis, ScoreRange, ScoreScale, Viewport,
};
use evalgraph_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_value_to_y_sweep(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let scale = ScoreScale::new(ScoreRange::Normal, 2.0).expect("valid scale");

    c.bench_function("value_to_y_sweep", |b| {
        b.iter(|| {
            for value in (-800..=800).step_by(25) {
                let _ = scale.value_to_y(black_box(value), black_box(viewport));
            }
        })
    });
}

fn bench_layout_selection(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("layout_selection", |b| {
        b.iter(|| {
            let _ = LayoutPlan::select(
                black_box(AnalysisWindow::new(0, 347, None)),
                black_box(viewport),
            );
        })
    });
}

fn generated_entries(count: usize) -> Vec<MoveAnalysis> {
    (0..count)
        .map(|ply| {
            let swing = ((ply % 40) as i16 - 20) * 30;
            MoveAnalysis::new(swing, 12 + (ply % 8) as i32, 100)
        })
        .collect()
}

fn bench_histogram_paint_100(c: &mut Criterion) {
    let entries = generated_entries(100);
    let window = AnalysisWindow::new(0, 100, Some(50));
    let config = EvalGraphConfig::new(Viewport::new(1920, 1080));
    let mut graph = EvalGraph::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("histogram_paint_100", |b| {
        b.iter(|| {
            graph
                .paint(black_box(window), black_box(&entries))
                .expect("paint should succeed");
        })
    });
}

fn bench_diagram_paint_10k(c: &mut Criterion) {
    let entries = generated_entries(10_000);
    let window = AnalysisWindow::new(0, 10_000, Some(5_000));
    let config = EvalGraphConfig::new(Viewport::new(1920, 1080));
    let mut graph = EvalGraph::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("diagram_paint_10k", |b| {
        b.iter(|| {
            graph
                .paint(black_box(window), black_box(&entries))
                .expect("paint should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_value_to_y_sweep,
    bench_layout_selection,
    bench_histogram_paint_100,
    bench_diagram_paint_10k
);
criterion_main!(benches);
