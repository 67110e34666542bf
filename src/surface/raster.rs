//! Bitmap rendering of a diagram through the plotters bitmap backend.
//!
//! Strokes are black on white. Background lines are painted before circles,
//! and labels are drawn centred on their anchor. The finished bitmap is kept
//! as an `image::RgbImage` so it can be inspected or written as PNG.

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;

use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{Bounds, Point, Segment};
use crate::surface::paint::paint;
use crate::surface::recording::RecordingSurface;
use crate::surface::surface::{DrawingSurface, ZOrder};
use crate::surface::viewport::Viewport;

#[derive(Default)]
pub struct RasterSurface {
    recorder: RecordingSurface,
    viewport: Viewport,
    image: Option<RgbImage>,
}

impl RasterSurface {
    /// A surface drawing `scale` pixels per diagram unit on both axes.
    pub fn new(scale: f64) -> DiagramResult<RasterSurface> {
        Ok(RasterSurface {
            recorder: RecordingSurface::new(),
            viewport: Viewport::default().with_scale(scale)?,
            image: None,
        })
    }

    pub fn with_margin(mut self, margin: f64) -> DiagramResult<RasterSurface> {
        self.viewport = self.viewport.with_margin(margin)?;
        Ok(self)
    }

    pub fn with_font_scale(mut self, font_scale: f64) -> DiagramResult<RasterSurface> {
        self.viewport = self.viewport.with_font_scale(font_scale)?;
        Ok(self)
    }

    /// The rendered bitmap. Only available once the figure is finished.
    pub fn image(&self) -> DiagramResult<&RgbImage> {
        self.image.as_ref().ok_or(DiagramError::NotFinished)
    }

    pub fn save_png(&self, path: &str) -> DiagramResult<()> {
        self.image()?.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn render(&self, bounds: Bounds) -> DiagramResult<RgbImage> {
        let frame = self.viewport.frame(bounds, self.recorder.primitives())?;
        let mut buffer = vec![0u8; frame.width as usize * frame.height as usize * 3];
        {
            let area = BitMapBackend::with_buffer(&mut buffer, (frame.width, frame.height))
                .into_drawing_area();
            paint(&area, &frame, &self.viewport, &self.recorder.paint_order())?;
        }
        RgbImage::from_raw(frame.width, frame.height, buffer)
            .ok_or_else(|| DiagramError::Render("bitmap buffer does not match the frame size".to_owned()))
    }
}

impl DrawingSurface for RasterSurface {
    fn begin(&mut self) -> DiagramResult<()> {
        self.image = None;
        self.recorder.begin()
    }

    fn circle(&mut self, center: Point, radius: f64) -> DiagramResult<()> {
        self.recorder.circle(center, radius)
    }

    fn line(&mut self, segment: Segment, z: ZOrder) -> DiagramResult<()> {
        self.recorder.line(segment, z)
    }

    fn text(&mut self, anchor: Point, text: &str, font_size: f64) -> DiagramResult<()> {
        self.recorder.text(anchor, text, font_size)
    }

    fn finish(&mut self, bounds: Bounds) -> DiagramResult<()> {
        self.recorder.finish(bounds)?;
        self.image = Some(self.render(bounds)?);
        Ok(())
    }
}
