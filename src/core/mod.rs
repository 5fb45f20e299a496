pub mod layout;
pub mod score_scale;
pub mod title;
pub mod types;

pub use layout::{DIAGRAM_BUCKET, LayoutPlan, MAX_BAR_WIDTH, MIN_BAR_WIDTH, RenderMode};
pub use score_scale::ScoreScale;
pub use title::format_eval_title;
pub use types::{AnalysisWindow, MoveAnalysis, ScoreRange, Viewport};
