use approx::assert_relative_eq;
use evalgraph_rs::core::{
    AnalysisWindow, LayoutPlan, MAX_BAR_WIDTH, MIN_BAR_WIDTH, RenderMode, Viewport,
};

fn window(first: usize, last: usize) -> AnalysisWindow {
    AnalysisWindow::new(first, last, None)
}

// 226px wide with the standard 18/4 margins leaves exactly 200px of plot.
fn viewport_200() -> Viewport {
    Viewport::new(226, 200)
}

#[test]
fn forty_moves_in_200px_pick_filled_histogram_bars() {
    let plan = LayoutPlan::select(window(0, 40), viewport_200()).expect("plan");

    assert_eq!(plan.mode(), RenderMode::Histogram);
    assert_eq!(plan.bar_width(), 4);
    assert!(plan.is_filled());
}

#[test]
fn four_hundred_moves_in_200px_fall_back_to_diagram() {
    let plan = LayoutPlan::select(window(0, 400), viewport_200()).expect("plan");

    assert_eq!(plan.mode(), RenderMode::Diagram);
    assert!(!plan.is_filled());
}

#[test]
fn few_moves_clamp_to_max_bar_width() {
    let plan = LayoutPlan::select(window(0, 5), viewport_200()).expect("plan");

    assert_eq!(plan.mode(), RenderMode::Histogram);
    assert_eq!(plan.bar_width(), MAX_BAR_WIDTH);
}

#[test]
fn bar_width_rounds_down_to_even() {
    // 200 / 29 = 6.89 -> 6, already even; 200 / 23 = 8.69 -> 8;
    // 200 / 27 = 7.4 -> 7 -> 6.
    let plan = LayoutPlan::select(window(0, 27), viewport_200()).expect("plan");

    assert_eq!(plan.bar_width(), 6);
}

#[test]
fn selection_is_deterministic() {
    let first = LayoutPlan::select(window(3, 403), viewport_200()).expect("plan");
    let second = LayoutPlan::select(window(3, 403), viewport_200()).expect("plan");

    assert_eq!(first, second);
}

#[test]
fn empty_window_yields_no_plan() {
    assert!(LayoutPlan::select(window(10, 10), viewport_200()).is_none());
    assert!(LayoutPlan::select(window(10, 5), viewport_200()).is_none());
}

#[test]
fn degenerate_paint_width_yields_no_plan() {
    let narrow = Viewport::new(20, 200);
    assert!(narrow.paint_width() <= 0);
    assert!(LayoutPlan::select(window(0, 40), narrow).is_none());
}

#[test]
fn diagram_step_uses_bucketed_point_count() {
    // 400 plies bucket to 408, half of which is 204 points across 200px.
    let plan = LayoutPlan::select(window(0, 400), viewport_200()).expect("plan");

    assert_relative_eq!(plan.step(), 200.0 / 205.0, epsilon = 1e-12);
}

#[test]
fn diagram_step_is_stable_within_a_bucket() {
    let base = LayoutPlan::select(window(0, 401), viewport_200()).expect("plan");
    let later = LayoutPlan::select(window(0, 407), viewport_200()).expect("plan");
    let next_bucket = LayoutPlan::select(window(0, 409), viewport_200()).expect("plan");

    assert_relative_eq!(base.step(), later.step(), epsilon = 1e-12);
    assert!(next_bucket.step() < base.step());
}

#[test]
fn histogram_hit_test_round_trips_every_bar_center() {
    let window = window(0, 40);
    let plan = LayoutPlan::select(window, viewport_200()).expect("plan");

    for ply in window.first..window.last {
        let center = plan.x_at(ply) + plan.bar_width() / 2;
        assert_eq!(plan.index_at(center), Some(ply), "ply {ply}");
    }
}

#[test]
fn histogram_hit_test_honors_nonzero_first() {
    let window = window(6, 46);
    let plan = LayoutPlan::select(window, viewport_200()).expect("plan");

    let center = plan.x_at(8) + plan.bar_width() / 2;
    assert_eq!(plan.index_at(center), Some(8));
}

#[test]
fn diagram_hit_test_recovers_each_ply_column() {
    // 1000px of plot keeps the per-ply spacing above two pixels.
    let viewport = Viewport::new(1026, 200);
    let window = window(0, 400);
    let plan = LayoutPlan::select(window, viewport).expect("plan");
    assert_eq!(plan.mode(), RenderMode::Diagram);

    for ply in window.first..window.last {
        assert_eq!(plan.index_at(plan.x_at(ply)), Some(ply), "ply {ply}");
    }
}

#[test]
fn clicks_outside_the_plotted_range_miss() {
    let window = window(0, 10);
    let plan = LayoutPlan::select(window, viewport_200()).expect("plan");

    assert_eq!(plan.index_at(viewport_200().start_x() - 1), None);
    assert_eq!(plan.index_at(0), None);
    // Ten bars of 10px end well before the right margin.
    assert_eq!(plan.index_at(viewport_200().start_x() + 150), None);
}

#[test]
fn minimum_width_constant_matches_fill_cutoff() {
    // A plan at exactly the minimum width is still histogram mode.
    let viewport = Viewport::new(186, 200); // 160px plot / 40 plies = 4px
    let plan = LayoutPlan::select(window(0, 40), viewport).expect("plan");

    assert_eq!(plan.bar_width(), MIN_BAR_WIDTH);
    assert_eq!(plan.mode(), RenderMode::Histogram);
    assert!(plan.is_filled());
}

#[test]
fn stale_plan_is_detected() {
    let viewport = viewport_200();
    let plan = LayoutPlan::select(window(0, 40), viewport).expect("plan");

    assert!(plan.matches(window(0, 40), viewport));
    assert!(!plan.matches(window(0, 41), viewport));
    assert!(!plan.matches(window(1, 40), viewport));
    assert!(!plan.matches(window(0, 40), Viewport::new(227, 200)));
}
