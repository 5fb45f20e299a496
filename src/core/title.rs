use crate::core::types::{AnalysisWindow, MoveAnalysis};

/// Appends a short annotation for the selected ply to a base window title.
///
/// The annotation carries the move number, the signed score in pawns, the
/// search depth and the elapsed time in deciseconds, e.g.
/// `"Crafty {12: +0.73/15 8}"`. The base title is returned unchanged when
/// nothing is selected or the selected ply has no analysis yet.
#[must_use]
pub fn format_eval_title(
    base: &str,
    window: AnalysisWindow,
    entries: &[MoveAnalysis],
) -> String {
    let Some(current) = window.current else {
        return base.to_owned();
    };
    let Some(entry) = entries.get(current) else {
        return base.to_owned();
    };
    if !entry.has_analysis() {
        return base.to_owned();
    }

    let score = entry.white_score(current);
    let sign = if score > 0 { "+" } else { " " };
    format!(
        "{} {{{}: {}{:.2}/{:<2} {}}}",
        base,
        current / 2 + 1,
        sign,
        f64::from(score) / 100.0,
        entry.depth,
        (entry.time_cs + 50) / 100,
    )
}
