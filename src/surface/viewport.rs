use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{Bounds, Point};
use crate::surface::surface::Primitive;

/// Largest width or height, in pixels, a rendered figure may have.
pub const MAX_PIXELS: u32 = 16_384;

/// Rough glyph advance as a fraction of the font size, used to keep labels
/// inside the frame.
const GLYPH_ASPECT: f64 = 0.6;

/// Pixel framing shared by the plotters-backed surfaces.
///
/// # Fields
/// - `scale`      — pixels per diagram unit, the same on both axes
/// - `margin`     — blank space around the drawing, in diagram units
/// - `font_scale` — diagram units per font point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    margin: f64,
    font_scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { scale: 40.0, margin: 1.0, font_scale: 0.08 }
    }
}

impl Viewport {
    pub fn new(scale: f64, margin: f64, font_scale: f64) -> DiagramResult<Viewport> {
        check_positive("scale", scale)?;
        check_finite_non_negative("margin", margin)?;
        check_positive("font_scale", font_scale)?;
        Ok(Viewport { scale, margin, font_scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn with_scale(self, scale: f64) -> DiagramResult<Viewport> {
        Viewport::new(scale, self.margin, self.font_scale)
    }

    pub fn with_margin(self, margin: f64) -> DiagramResult<Viewport> {
        Viewport::new(self.scale, margin, self.font_scale)
    }

    pub fn with_font_scale(self, font_scale: f64) -> DiagramResult<Viewport> {
        Viewport::new(self.scale, self.margin, font_scale)
    }

    /// Label height in pixels for a font of `font_size` points.
    pub fn font_pixels(&self, font_size: f64) -> f64 {
        font_size * self.font_scale * self.scale
    }

    /// Frames `bounds` (grown to fit every label in `primitives`) and sizes the
    /// pixel canvas, rejecting canvases larger than `MAX_PIXELS` a side.
    pub fn frame(&self, bounds: Bounds, primitives: &[Primitive]) -> DiagramResult<Frame> {
        let mut view = bounds;
        for primitive in primitives {
            if let Primitive::Text { anchor, text, font_size } = primitive {
                let height = font_size * self.font_scale;
                let half_width = text.chars().count() as f64 * height * GLYPH_ASPECT / 2.0;
                view.include(Point::new(anchor.x - half_width, anchor.y - height / 2.0));
                view.include(Point::new(anchor.x + half_width, anchor.y + height / 2.0));
            }
        }
        let view = view.padded(self.margin);

        let width = (view.width() * self.scale).ceil().max(1.0);
        let height = (view.height() * self.scale).ceil().max(1.0);
        if !(width <= MAX_PIXELS as f64 && height <= MAX_PIXELS as f64) {
            return Err(DiagramError::InvalidLayout(format!(
                "figure of {width} x {height} pixels exceeds the {MAX_PIXELS} pixel limit"
            )));
        }
        Ok(Frame { view, scale: self.scale, width: width as u32, height: height as u32 })
    }
}

/// A sized pixel canvas and the mapping onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    view: Bounds,
    scale: f64,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    /// Diagram point to pixel coordinates; pixel rows grow downward.
    pub fn to_pixel(&self, p: Point) -> (i32, i32) {
        (
            ((p.x - self.view.min.x) * self.scale).round() as i32,
            ((self.view.max.y - p.y) * self.scale).round() as i32,
        )
    }

    pub fn pixels(&self, length: f64) -> i32 {
        (length * self.scale).round() as i32
    }
}

fn check_positive(name: &str, value: f64) -> DiagramResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DiagramError::InvalidLayout(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

fn check_finite_non_negative(name: &str, value: f64) -> DiagramResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DiagramError::InvalidLayout(format!(
            "{name} must be a finite number of at least zero, got {value}"
        )));
    }
    Ok(())
}
