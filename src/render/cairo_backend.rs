use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{GraphError, GraphResult};
use crate::render::{Color, FillMode, PenStyle, RenderFrame, Renderer, SideBrush};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Concrete colors and font for the abstract pens and brushes.
///
/// Defaults follow the classic evaluation-graph look: a cream bar for White,
/// a brown bar for Black, dotted gray guides and a blue current-move marker.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPalette {
    pub background: Color,
    pub white_side: Color,
    pub black_side: Color,
    pub axis: Color,
    pub grid: Color,
    pub current_marker: Color,
    pub label: Color,
    pub font_size_px: f64,
}

impl Default for GraphPalette {
    fn default() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            white_side: Color::rgb(1.0, 1.0, 0.69),
            black_side: Color::rgb(0.68, 0.36, 0.24),
            axis: Color::rgb(0.0, 0.0, 0.0),
            grid: Color::rgb(0.4, 0.4, 0.4),
            current_marker: Color::rgb(0.0, 0.0, 1.0),
            label: Color::rgb(0.0, 0.0, 0.0),
            font_size_px: 9.0,
        }
    }
}

impl GraphPalette {
    fn validate(&self) -> GraphResult<()> {
        for color in [
            self.background,
            self.white_side,
            self.black_side,
            self.axis,
            self.grid,
            self.current_marker,
            self.label,
        ] {
            color.validate()?;
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "palette font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn brush_color(&self, brush: SideBrush) -> Color {
        match brush {
            SideBrush::White => self.white_side,
            SideBrush::Black => self.black_side,
            SideBrush::Background => self.background,
        }
    }

    fn pen_color(&self, pen: PenStyle) -> Color {
        match pen {
            PenStyle::Axis => self.axis,
            PenStyle::Grid => self.grid,
            PenStyle::CurrentMarker => self.current_marker,
            PenStyle::BoldWhite => self.white_side,
            PenStyle::BoldBlack => self.black_side,
        }
    }
}

/// Optional extension trait for renderers that can draw into an external
/// Cairo context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    palette: GraphPalette,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GraphResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GraphError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            palette: GraphPalette::default(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn palette(&self) -> &GraphPalette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: GraphPalette) -> GraphResult<()> {
        palette.validate()?;
        self.palette = palette;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.palette.validate()?;

        apply_color(context, self.palette.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            apply_color(context, self.palette.brush_color(rect.brush));
            context.rectangle(
                f64::from(rect.left),
                f64::from(rect.top),
                f64::from(rect.width()),
                f64::from(rect.height()),
            );
            let result = match rect.fill {
                FillMode::Filled => context.fill(),
                FillMode::Open => {
                    context.set_line_width(1.0);
                    context.stroke()
                }
            };
            result.map_err(|err| map_backend_error("failed to draw rectangle", err))?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, self.palette.pen_color(line.pen));
            apply_pen(context, line.pen);
            context.move_to(f64::from(line.x1), f64::from(line.y1));
            context.line_to(f64::from(line.x2), f64::from(line.y2));
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", self.palette.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = f64::from(text.x) - f64::from(text_width);
            let y = f64::from(text.y) - f64::from(text_height) / 2.0;

            apply_color(context, self.palette.label);
            context.move_to(x, y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GraphResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_pen(context: &Context, pen: PenStyle) {
    match pen {
        PenStyle::Axis => {
            context.set_dash(&[], 0.0);
            context.set_line_width(1.0);
        }
        PenStyle::Grid | PenStyle::CurrentMarker => {
            context.set_dash(&[1.0, 2.0], 0.0);
            context.set_line_width(1.0);
        }
        PenStyle::BoldWhite | PenStyle::BoldBlack => {
            context.set_dash(&[], 0.0);
            context.set_line_width(2.0);
        }
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GraphError {
    GraphError::InvalidData(format!("{prefix}: {err}"))
}
