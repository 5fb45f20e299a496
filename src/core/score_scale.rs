use serde::{Deserialize, Serialize};

use crate::core::types::{ScoreRange, Viewport};
use crate::error::{GraphError, GraphResult};

/// Vertical score axis with a two-segment zoom.
///
/// Scores inside the ±1-pawn band are stretched by `zoom`; everything
/// outside is shifted by the same amount, so the transform stays continuous
/// at the band edge while blowout scores compress toward the plot border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreScale {
    range: ScoreRange,
    zoom: f64,
}

impl ScoreScale {
    pub fn new(range: ScoreRange, zoom: f64) -> GraphResult<Self> {
        if !zoom.is_finite() || zoom < 1.0 {
            return Err(GraphError::InvalidData(
                "zoom factor must be finite and >= 1".to_owned(),
            ));
        }

        Ok(Self { range, zoom })
    }

    /// Same zoom, different range multiplier.
    #[must_use]
    pub fn with_range(self, range: ScoreRange) -> Self {
        Self { range, ..self }
    }

    #[must_use]
    pub fn range(self) -> ScoreRange {
        self.range
    }

    #[must_use]
    pub fn zoom(self) -> f64 {
        self.zoom
    }

    /// Maps a centipawn value to a pixel y coordinate.
    ///
    /// Values are clamped to ±700·range. The result may leave the nominal
    /// plotting band by a bounded amount; callers do not clip further.
    #[must_use]
    pub fn value_to_y(self, value: i32, viewport: Viewport) -> i32 {
        let range = self.range.multiplier();
        let clamped = value.clamp(-700 * range, 700 * range);
        let seam = 100 * range;

        let stretched = if clamped > seam {
            f64::from(clamped) + (self.zoom - 1.0) * f64::from(seam)
        } else if clamped < -seam {
            f64::from(clamped) - (self.zoom - 1.0) * f64::from(seam)
        } else {
            f64::from(clamped) * self.zoom
        };

        let band = f64::from(viewport.height - 2 * viewport.margin_vertical);
        let denom = (1200.0 + 200.0 * self.zoom) * f64::from(range);
        viewport.mid_y() - (stretched * band / denom).round() as i32
    }
}
