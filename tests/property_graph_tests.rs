use evalgraph_rs::core::{
    AnalysisWindow, LayoutPlan, MoveAnalysis, RenderMode, ScoreRange, ScoreScale, Viewport,
    format_eval_title,
};
use proptest::prelude::*;

fn range_strategy() -> impl Strategy<Value = ScoreRange> {
    prop_oneof![Just(ScoreRange::Normal), Just(ScoreRange::Doubled)]
}

proptest! {
    #[test]
    fn value_to_y_is_monotone_non_increasing(
        range in range_strategy(),
        zoom in 1.0f64..8.0,
        height in 50i32..2000,
        a in -1600i32..1600,
        b in -1600i32..1600,
    ) {
        let viewport = Viewport::new(640, height);
        let scale = ScoreScale::new(range, zoom).expect("valid scale");

        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale.value_to_y(low, viewport) >= scale.value_to_y(high, viewport));
    }

    #[test]
    fn zoom_seam_never_jumps_more_than_one_pixel(
        range in range_strategy(),
        zoom in 1.0f64..8.0,
        height in 50i32..1200,
    ) {
        let viewport = Viewport::new(640, height);
        let scale = ScoreScale::new(range, zoom).expect("valid scale");
        let seam = 100 * range.multiplier();

        let jump = scale.value_to_y(seam, viewport) - scale.value_to_y(seam + 1, viewport);
        prop_assert!((0..=1).contains(&jump));
    }

    #[test]
    fn layout_depends_only_on_count_and_paint_width(
        first in 0usize..500,
        count in 1usize..1000,
        width in 40i32..2000,
    ) {
        let viewport = Viewport::new(width, 200);
        let from_zero = LayoutPlan::select(AnalysisWindow::new(0, count, None), viewport)
            .expect("plan");
        let shifted =
            LayoutPlan::select(AnalysisWindow::new(first, first + count, None), viewport)
                .expect("plan");

        prop_assert_eq!(from_zero.mode(), shifted.mode());
        prop_assert_eq!(from_zero.bar_width(), shifted.bar_width());
        prop_assert_eq!(from_zero.step(), shifted.step());
    }

    #[test]
    fn histogram_bar_centers_always_round_trip(
        first in 0usize..100,
        count in 1usize..200,
        width in 100i32..2000,
    ) {
        let viewport = Viewport::new(width, 200);
        let window = AnalysisWindow::new(first, first + count, None);
        let Some(plan) = LayoutPlan::select(window, viewport) else {
            return Ok(());
        };
        if plan.mode() != RenderMode::Histogram {
            return Ok(());
        }

        for ply in window.first..window.last {
            let center = plan.x_at(ply) + plan.bar_width() / 2;
            prop_assert_eq!(plan.index_at(center), Some(ply));
        }
    }

    #[test]
    fn hit_tests_never_land_outside_the_window(
        count in 1usize..1000,
        width in 40i32..2000,
        x in -100i32..2200,
    ) {
        let viewport = Viewport::new(width, 200);
        let window = AnalysisWindow::new(0, count, None);
        let Some(plan) = LayoutPlan::select(window, viewport) else {
            return Ok(());
        };

        if let Some(ply) = plan.index_at(x) {
            prop_assert!(ply < window.last);
        }
    }

    #[test]
    fn unanalyzed_selection_never_changes_the_title(
        score in i16::MIN..i16::MAX,
        depth in i32::MIN..=0,
        time_cs in 0i32..100_000,
        current in 0usize..50,
    ) {
        let entries = vec![MoveAnalysis::new(score, depth, time_cs); 50];
        let window = AnalysisWindow::new(0, 50, Some(current));

        prop_assert_eq!(format_eval_title("base", window, &entries), "base");
    }
}
