use serde::{Deserialize, Serialize};

/// Pixel-space plot area plus the fixed margins around it.
///
/// `margin_left` reserves room for the axis labels, `margin_hist` pads both
/// sides of the plotted band, `margin_vertical` pads top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub margin_left: i32,
    pub margin_hist: i32,
    pub margin_vertical: i32,
}

impl Viewport {
    /// Creates a viewport with the standard evaluation-graph margins.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            margin_left: 18,
            margin_hist: 4,
            margin_vertical: 4,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, left: i32, hist: i32, vertical: i32) -> Self {
        self.margin_left = left;
        self.margin_hist = hist;
        self.margin_vertical = vertical;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Left edge of the plotted band, where the y-axis sits.
    #[must_use]
    pub fn start_x(self) -> i32 {
        self.margin_left + self.margin_hist
    }

    /// Horizontal room available for data columns.
    #[must_use]
    pub fn paint_width(self) -> i32 {
        self.width - self.margin_left - 2 * self.margin_hist
    }

    /// Vertical position of the score-zero axis.
    #[must_use]
    pub fn mid_y(self) -> i32 {
        self.height / 2
    }
}

/// Engine analysis for one half-move (ply).
///
/// `score` is in centipawns from the side-to-move perspective, `time_cs` in
/// centiseconds. `depth <= 0` means no analysis is available for this ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAnalysis {
    pub score: i16,
    pub depth: i32,
    pub time_cs: i32,
}

impl MoveAnalysis {
    #[must_use]
    pub fn new(score: i16, depth: i32, time_cs: i32) -> Self {
        Self {
            score,
            depth,
            time_cs,
        }
    }

    #[must_use]
    pub fn has_analysis(self) -> bool {
        self.depth > 0
    }

    /// Score from White's point of view for the ply this entry belongs to.
    ///
    /// Even plies are White moves, odd plies are Black moves; stored scores
    /// are flipped for Black so positive always means White is better.
    #[must_use]
    pub fn white_score(self, ply: usize) -> i32 {
        let score = i32::from(self.score);
        if ply % 2 == 1 { -score } else { score }
    }
}

/// The slice of plies currently on display, owned by the host GUI.
///
/// `current` is the ply the move cursor sits on, `None` when nothing is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisWindow {
    pub first: usize,
    pub last: usize,
    pub current: Option<usize>,
}

impl AnalysisWindow {
    #[must_use]
    pub fn new(first: usize, last: usize, current: Option<usize>) -> Self {
        Self {
            first,
            last,
            current,
        }
    }

    /// Number of plies on display.
    #[must_use]
    pub fn count(self) -> usize {
        self.last.saturating_sub(self.first)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.count() == 0
    }
}

/// Multiplier for the plotted score band.
///
/// Doubled for chess variants with piece holdings, where practical scores
/// swing twice as wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoreRange {
    #[default]
    Normal,
    Doubled,
}

impl ScoreRange {
    #[must_use]
    pub fn multiplier(self) -> i32 {
        match self {
            Self::Normal => 1,
            Self::Doubled => 2,
        }
    }
}
