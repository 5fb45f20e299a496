use crate::core::{AnalysisWindow, LayoutPlan, MoveAnalysis};
use crate::render::{LinePrimitive, PenStyle, RenderFrame, Renderer};

use super::EvalGraph;
use super::separators::separator_primitive;

impl<R: Renderer> EvalGraph<R> {
    /// Condensed rendering for windows too wide to bar-chart: one polyline
    /// per side through that side's analyzed plies.
    ///
    /// Plies without analysis break the line instead of being interpolated
    /// across. The side holding the current ply is drawn last so the active
    /// line is never occluded.
    pub(super) fn append_diagram_primitives(
        &self,
        frame: &mut RenderFrame,
        plan: &LayoutPlan,
        window: AnalysisWindow,
        entries: &[MoveAnalysis],
    ) {
        let viewport = self.viewport;
        let step = plan.step();
        let current = window.current.map_or(-1, |c| c as i64);

        for pass in 0..2_i64 {
            let side = (current + pass + 1).rem_euclid(2) as usize;
            let pen = if side == 0 {
                PenStyle::BoldWhite
            } else {
                PenStyle::BoldBlack
            };

            let mut ply = window.first;
            let mut x = f64::from(viewport.start_x());
            if ply % 2 != side {
                x += step * 0.5;
                ply += 1;
            }

            let mut previous: Option<(i32, i32)> = None;
            while ply < window.last {
                let xi = x as i32;
                if let Some(separator) = separator_primitive(window, viewport, ply, xi) {
                    frame.lines.push(separator);
                }

                match entries.get(ply) {
                    Some(entry) if entry.has_analysis() => {
                        let y = self.scale.value_to_y(entry.white_score(ply), viewport);
                        if let Some((prev_x, prev_y)) = previous {
                            frame
                                .lines
                                .push(LinePrimitive::new(prev_x, prev_y, xi, y, pen));
                        }
                        previous = Some((xi, y));
                    }
                    _ => previous = None,
                }

                ply += 2;
                x += step;
            }
        }
    }
}
