use crate::core::{AnalysisWindow, Viewport};
use crate::render::{LinePrimitive, PenStyle};

/// Vertical marker for the column at `ply`, drawn before that column's data.
///
/// The current move gets a highlighted full-height line, every 20th ply a
/// lighter one; all other plies get nothing. Both renderings share this
/// cadence.
pub(super) fn separator_primitive(
    window: AnalysisWindow,
    viewport: Viewport,
    ply: usize,
    x: i32,
) -> Option<LinePrimitive> {
    if ply <= window.first {
        return None;
    }

    let pen = if window.current == Some(ply) {
        PenStyle::CurrentMarker
    } else if ply % 20 == 0 {
        PenStyle::Grid
    } else {
        return None;
    };

    Some(LinePrimitive::new(
        x,
        viewport.margin_vertical,
        x,
        viewport.height - viewport.margin_vertical,
        pen,
    ))
}
