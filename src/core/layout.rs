use serde::{Deserialize, Serialize};

use crate::core::types::{AnalysisWindow, Viewport};

/// Bars thinner than this are illegible; the layout falls back to the
/// condensed diagram instead.
pub const MIN_BAR_WIDTH: i32 = 4;
pub const MAX_BAR_WIDTH: i32 = 10;

/// Diagram x positions are allocated in buckets of this many plies, so the
/// chart rescales every few moves instead of jittering on every new one.
pub const DIAGRAM_BUCKET: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// One discrete bar per half-move.
    Histogram,
    /// Two polylines, one per side, for windows too wide to bar-chart.
    Diagram,
}

/// Resolved geometry for one paint pass.
///
/// The same plan value serves both the renderers and the hit tester, so the
/// pixel-to-ply inverse can never drift from the forward mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    mode: RenderMode,
    bar_width: i32,
    count: usize,
    paint_width: i32,
    step: f64,
    first: usize,
    last: usize,
    viewport: Viewport,
}

impl LayoutPlan {
    /// Computes the layout for a data window, or `None` when there is
    /// nothing to lay out (`count` and `paint_width` are the guarded
    /// divisors).
    #[must_use]
    pub fn select(window: AnalysisWindow, viewport: Viewport) -> Option<Self> {
        let count = window.count();
        let paint_width = viewport.paint_width();
        if count == 0 || paint_width <= 0 {
            return None;
        }

        let mut bar_width = paint_width / count as i32;
        if bar_width > MAX_BAR_WIDTH {
            bar_width = MAX_BAR_WIDTH;
        }
        // Even widths keep a bar and its outline on exact pixel boundaries.
        bar_width -= bar_width % 2;

        let (mode, step) = if bar_width < MIN_BAR_WIDTH {
            (RenderMode::Diagram, diagram_step(count, paint_width))
        } else {
            (RenderMode::Histogram, 0.0)
        };

        Some(Self {
            mode,
            bar_width,
            count,
            paint_width,
            step,
            first: window.first,
            last: window.last,
            viewport,
        })
    }

    #[must_use]
    pub fn mode(self) -> RenderMode {
        self.mode
    }

    #[must_use]
    pub fn bar_width(self) -> i32 {
        self.bar_width
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    /// Horizontal distance between two consecutive same-side plies in
    /// diagram mode.
    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    /// Bars at the minimum width are drawn filled; an outline would leave no
    /// interior.
    #[must_use]
    pub fn is_filled(self) -> bool {
        self.mode == RenderMode::Histogram && self.bar_width == MIN_BAR_WIDTH
    }

    /// Left pixel edge of the column for `ply`.
    #[must_use]
    pub fn x_at(self, ply: usize) -> i32 {
        let offset = ply.saturating_sub(self.first);
        let start_x = self.viewport.start_x();
        match self.mode {
            RenderMode::Histogram => start_x + offset as i32 * self.bar_width,
            RenderMode::Diagram => (f64::from(start_x) + offset as f64 * self.step * 0.5) as i32,
        }
    }

    /// Exact inverse of [`Self::x_at`]: the ply whose column contains pixel
    /// `x`, or `None` outside the plotted range.
    #[must_use]
    pub fn index_at(self, x: i32) -> Option<usize> {
        let start_x = self.viewport.start_x();
        if x < start_x {
            return None;
        }

        let offset = match self.mode {
            RenderMode::Histogram => ((x - start_x) / self.bar_width) as usize,
            RenderMode::Diagram => (0.5 + f64::from(x - start_x) / (self.step * 0.5)) as usize,
        };

        let ply = self.first + offset;
        (ply < self.last).then_some(ply)
    }

    /// Whether this plan still describes the given window and viewport.
    ///
    /// A plan computed by an earlier paint goes stale as soon as either
    /// changes; hit tests against a stale plan must be treated as misses.
    #[must_use]
    pub fn matches(self, window: AnalysisWindow, viewport: Viewport) -> bool {
        self.first == window.first && self.last == window.last && self.viewport == viewport
    }
}

fn diagram_step(count: usize, paint_width: i32) -> f64 {
    let bucketed = count - count % DIAGRAM_BUCKET + DIAGRAM_BUCKET;
    let points = bucketed / 2;
    f64::from(paint_width) / (points + 1) as f64
}
