mod axis_frame_builder;
mod diagram_frame_builder;
mod histogram_frame_builder;
mod separators;
mod snapshot;

pub use snapshot::GraphSnapshot;

use tracing::{debug, trace};

use crate::core::{
    AnalysisWindow, LayoutPlan, MoveAnalysis, RenderMode, ScoreRange, ScoreScale, Viewport,
    format_eval_title,
};
use crate::error::{GraphError, GraphResult};
use crate::render::{FillMode, RectPrimitive, RenderFrame, Renderer, SideBrush};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalGraphConfig {
    pub viewport: Viewport,
    pub zoom: f64,
    pub range: ScoreRange,
    /// Bars whose absolute score stays under this many centipawns (times the
    /// range multiplier) are suppressed as visual noise.
    pub eval_threshold: i32,
}

impl EvalGraphConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            zoom: 1.0,
            range: ScoreRange::Normal,
            eval_threshold: 25,
        }
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: ScoreRange) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_eval_threshold(mut self, eval_threshold: i32) -> Self {
        self.eval_threshold = eval_threshold;
        self
    }
}

/// Evaluation-graph engine: owns the viewport, the display preferences and
/// the layout plan of the last paint.
///
/// The host GUI owns the analysis data and passes it into every call as a
/// read-only slice; the engine keeps no per-game state. The cached plan
/// keeps hit-testing numerically in lock-step with the last paint and is
/// invalidated by every viewport or preference change, so a stale click
/// resolves to a miss instead of a wrong ply.
pub struct EvalGraph<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    scale: ScoreScale,
    eval_threshold: i32,
    last_plan: Option<LayoutPlan>,
}

impl<R: Renderer> EvalGraph<R> {
    pub fn new(renderer: R, config: EvalGraphConfig) -> GraphResult<Self> {
        if !config.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        if config.eval_threshold < 0 {
            return Err(GraphError::InvalidData(
                "eval threshold must be >= 0".to_owned(),
            ));
        }

        let scale = ScoreScale::new(config.range, config.zoom)?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            scale,
            eval_threshold: config.eval_threshold,
            last_plan: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.scale.zoom()
    }

    #[must_use]
    pub fn range(&self) -> ScoreRange {
        self.scale.range()
    }

    #[must_use]
    pub fn eval_threshold(&self) -> i32 {
        self.eval_threshold
    }

    #[must_use]
    pub fn last_plan(&self) -> Option<&LayoutPlan> {
        self.last_plan.as_ref()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.last_plan = None;
    }

    pub fn set_zoom(&mut self, zoom: f64) -> GraphResult<()> {
        self.scale = ScoreScale::new(self.scale.range(), zoom)?;
        self.last_plan = None;
        Ok(())
    }

    pub fn set_range(&mut self, range: ScoreRange) {
        self.scale = self.scale.with_range(range);
        self.last_plan = None;
    }

    pub fn set_eval_threshold(&mut self, eval_threshold: i32) -> GraphResult<()> {
        if eval_threshold < 0 {
            return Err(GraphError::InvalidData(
                "eval threshold must be >= 0".to_owned(),
            ));
        }
        self.eval_threshold = eval_threshold;
        self.last_plan = None;
        Ok(())
    }

    /// Full redraw: clears the surface, draws the axis, then exactly one of
    /// the two data renderings as picked by the layout plan.
    pub fn paint(
        &mut self,
        window: AnalysisWindow,
        entries: &[MoveAnalysis],
    ) -> GraphResult<()> {
        if !self.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let mut frame = RenderFrame::new(self.viewport);
        frame.rects.push(RectPrimitive::new(
            0,
            0,
            self.viewport.width,
            self.viewport.height,
            SideBrush::Background,
            FillMode::Filled,
        ));
        self.append_axis_primitives(&mut frame);

        let plan = LayoutPlan::select(window, self.viewport);
        if let Some(plan) = &plan {
            match plan.mode() {
                RenderMode::Histogram => {
                    self.append_histogram_primitives(&mut frame, plan, window, entries);
                }
                RenderMode::Diagram => {
                    self.append_diagram_primitives(&mut frame, plan, window, entries);
                }
            }
        }

        debug!(
            mode = ?plan.as_ref().map(|p| p.mode()),
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            "painting evaluation graph"
        );

        self.last_plan = plan;
        self.renderer.render(&frame)
    }

    /// Maps a clicked pixel to the ply under it, using the geometry of the
    /// last paint. Returns `None` outside the plotted range, or when no
    /// paint has run for the given window and the current viewport yet.
    #[must_use]
    pub fn point_to_index(&self, x: i32, _y: i32, window: AnalysisWindow) -> Option<usize> {
        let plan = self.last_plan.as_ref()?;
        if !plan.matches(window, self.viewport) {
            trace!("hit test ignored: layout plan is stale");
            return None;
        }
        plan.index_at(x)
    }

    /// Appends the current-move annotation to a base window title.
    #[must_use]
    pub fn format_title(
        &self,
        base: &str,
        window: AnalysisWindow,
        entries: &[MoveAnalysis],
    ) -> String {
        format_eval_title(base, window, entries)
    }

    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            viewport: self.viewport,
            zoom: self.scale.zoom(),
            range: self.scale.range(),
            eval_threshold: self.eval_threshold,
            last_plan: self.last_plan,
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
