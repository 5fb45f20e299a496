use smallvec::SmallVec;

use crate::render::{LinePrimitive, PenStyle, RenderFrame, Renderer, TextPrimitive};

use super::EvalGraph;

impl<R: Renderer> EvalGraph<R> {
    /// Draws the fixed reference grid: labeled ticks at ±5, ±3, ±1 and 0
    /// pawns, then the solid x and y axis lines.
    ///
    /// The 0 and ±5 ticks are always labeled. ±3 labels need at least 20px
    /// of per-tick spacing, ±1 labels additionally need the zoomed spacing
    /// to reach 40px; cramped labels are dropped while their gridlines stay.
    pub(super) fn append_axis_primitives(&self, frame: &mut RenderFrame) {
        let viewport = self.viewport;
        let spacing = f64::from(viewport.height) / (6.0 + self.scale.zoom());
        let coarse = spacing >= 20.0;
        let fine = coarse && spacing * self.scale.zoom() >= 40.0;

        let ticks: SmallVec<[(i32, bool); 7]> = SmallVec::from_slice(&[
            (5, true),
            (3, coarse),
            (1, fine),
            (0, true),
            (-1, fine),
            (-3, coarse),
            (-5, true),
        ]);
        for (pawns, labeled) in ticks {
            self.append_grid_line(frame, pawns, labeled);
        }

        let cy = viewport.mid_y();
        let start_x = viewport.start_x();
        let right = viewport.width - viewport.margin_hist;
        frame
            .lines
            .push(LinePrimitive::new(start_x, cy, right, cy, PenStyle::Axis));
        frame.lines.push(LinePrimitive::new(
            start_x,
            viewport.margin_vertical,
            start_x,
            viewport.height - viewport.margin_vertical,
            PenStyle::Axis,
        ));
    }

    fn append_grid_line(&self, frame: &mut RenderFrame, pawns: i32, labeled: bool) {
        let viewport = self.viewport;
        let shown = pawns * self.scale.range().multiplier();
        let y = self.scale.value_to_y(shown * 100, viewport);

        if labeled {
            let text = if shown > 0 {
                format!("+{shown}")
            } else {
                shown.to_string()
            };
            frame
                .texts
                .push(TextPrimitive::new(text, viewport.margin_left - 2, y));
        }

        frame.lines.push(LinePrimitive::new(
            viewport.margin_left,
            y,
            viewport.start_x(),
            y,
            PenStyle::Axis,
        ));
        frame.lines.push(LinePrimitive::new(
            viewport.start_x(),
            y,
            viewport.width - viewport.margin_hist,
            y,
            PenStyle::Grid,
        ));
    }
}
