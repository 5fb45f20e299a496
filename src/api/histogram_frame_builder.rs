use crate::core::{AnalysisWindow, LayoutPlan, MoveAnalysis};
use crate::render::{FillMode, RectPrimitive, RenderFrame, Renderer, SideBrush};

use super::EvalGraph;
use super::separators::separator_primitive;

impl<R: Renderer> EvalGraph<R> {
    /// One vertical bar per ply, from the score axis to the mapped score.
    ///
    /// Plies without analysis and plies whose score sits inside the flat
    /// threshold produce no bar. Minimum-width bars are filled, wider ones
    /// outlined.
    pub(super) fn append_histogram_primitives(
        &self,
        frame: &mut RenderFrame,
        plan: &LayoutPlan,
        window: AnalysisWindow,
        entries: &[MoveAnalysis],
    ) {
        let viewport = self.viewport;
        let cy = viewport.mid_y();
        let flat_band = self.eval_threshold * self.scale.range().multiplier();

        for ply in window.first..window.last {
            let x = plan.x_at(ply);
            if let Some(separator) = separator_primitive(window, viewport, ply, x) {
                frame.lines.push(separator);
            }

            let Some(entry) = entries.get(ply) else {
                continue;
            };
            if !entry.has_analysis() {
                continue;
            }
            let score = entry.white_score(ply);
            if score.abs() < flat_band {
                continue;
            }

            let left = x;
            let mut right = x + plan.bar_width() + 1;
            let (top, bottom) = if score > 0 {
                (self.scale.value_to_y(score, viewport), cy + 1)
            } else {
                (cy, self.scale.value_to_y(score, viewport) + 1)
            };

            let fill = if plan.is_filled() {
                right -= 1;
                FillMode::Filled
            } else {
                FillMode::Open
            };
            let brush = if ply % 2 == 0 {
                SideBrush::White
            } else {
                SideBrush::Black
            };

            frame
                .rects
                .push(RectPrimitive::new(left, top, right, bottom, brush, fill));
        }
    }
}
