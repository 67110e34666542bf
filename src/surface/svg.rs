//! SVG rendering of a diagram through the plotters SVG backend.
//!
//! Diagram coordinates have `y` growing upward (the first layer sits at the
//! bottom) while SVG rows grow downward, so the frame flips them. One diagram
//! unit maps to the same number of pixels on both axes and no axes or ticks
//! are drawn.

use plotters::prelude::*;

use crate::error::{DiagramError, DiagramResult};
use crate::geometry::{Bounds, Point, Segment};
use crate::surface::paint::paint;
use crate::surface::recording::RecordingSurface;
use crate::surface::surface::{DrawingSurface, ZOrder};
use crate::surface::viewport::Viewport;

#[derive(Default)]
pub struct SvgSurface {
    recorder: RecordingSurface,
    viewport: Viewport,
    document: Option<String>,
}

impl SvgSurface {
    pub fn new() -> SvgSurface {
        SvgSurface::default()
    }

    /// Pixels per diagram unit, applied to both axes.
    pub fn with_scale(mut self, scale: f64) -> DiagramResult<SvgSurface> {
        self.viewport = self.viewport.with_scale(scale)?;
        Ok(self)
    }

    pub fn with_margin(mut self, margin: f64) -> DiagramResult<SvgSurface> {
        self.viewport = self.viewport.with_margin(margin)?;
        Ok(self)
    }

    pub fn with_font_scale(mut self, font_scale: f64) -> DiagramResult<SvgSurface> {
        self.viewport = self.viewport.with_font_scale(font_scale)?;
        Ok(self)
    }

    /// The rendered SVG document. Only available once the figure is finished.
    pub fn document(&self) -> DiagramResult<&str> {
        self.document.as_deref().ok_or(DiagramError::NotFinished)
    }

    /// Writes the rendered document to `path`.
    pub fn save(&self, path: &str) -> DiagramResult<()> {
        std::fs::write(path, self.document()?)?;
        Ok(())
    }

    fn render(&self, bounds: Bounds) -> DiagramResult<String> {
        let frame = self.viewport.frame(bounds, self.recorder.primitives())?;
        let mut document = String::new();
        {
            let area = SVGBackend::with_string(&mut document, (frame.width, frame.height))
                .into_drawing_area();
            paint(&area, &frame, &self.viewport, &self.recorder.paint_order())?;
        }
        Ok(document)
    }
}

impl DrawingSurface for SvgSurface {
    fn begin(&mut self) -> DiagramResult<()> {
        self.document = None;
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
        self.document = Some(self.render(bounds)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_surface() -> SvgSurface {
        let mut svg = SvgSurface::new();
        svg.begin().unwrap();
        svg.circle(Point::new(0.0, 6.0), 0.5).unwrap();
        svg.line(
            Segment::new(Point::new(0.0, 5.5), Point::new(0.0, 0.5)),
            ZOrder::Background,
        )
        .unwrap();
        svg.circle(Point::new(0.0, 0.0), 0.5).unwrap();
        svg.text(Point::new(2.0, 6.0), "a<b", 12.0).unwrap();
        let mut bounds = Bounds::at(Point::new(0.0, 6.0));
        bounds.include_circle(Point::new(0.0, 6.0), 0.5);
        bounds.include_circle(Point::new(0.0, 0.0), 0.5);
        svg.finish(bounds).unwrap();
        svg
    }

    /// Numeric values of every `name="..."` attribute, in document order.
    fn attr_values(doc: &str, name: &str) -> Vec<f64> {
        let key = format!(" {name}=\"");
        doc.match_indices(&key)
            .filter_map(|(i, _)| {
                let rest = &doc[i + key.len()..];
                rest[..rest.find('"')?].parse().ok()
            })
            .collect()
    }

    #[test]
    fn test_document_requires_finish() {
        let svg = SvgSurface::new();
        assert!(matches!(svg.document(), Err(DiagramError::NotFinished)));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let svg = finished_surface();
        let cy = attr_values(svg.document().unwrap(), "cy");
        // Circles in issue order: the upper one (y = 6) then the lower one.
        assert_eq!(cy.len(), 2);
        assert!(cy[0] < cy[1], "{cy:?}");
    }

    #[test]
    fn test_edges_are_written_before_circles() {
        let svg = finished_surface();
        let doc = svg.document().unwrap();
        let edge = doc.find("<polyline").unwrap();
        let circle = doc.find("<circle").unwrap();
        assert!(edge < circle);
    }

    #[test]
    fn test_label_text_is_escaped_and_centred() {
        let svg = finished_surface();
        let doc = svg.document().unwrap();
        assert!(doc.contains("a&lt;b"), "{doc}");
        assert!(doc.contains(r#"text-anchor="middle""#), "{doc}");
    }

    #[test]
    fn test_begin_clears_previous_document() {
        let mut svg = finished_surface();
        svg.begin().unwrap();
        assert!(svg.document().is_err());
    }

    #[test]
    fn test_rejects_bad_settings() {
        assert!(matches!(SvgSurface::new().with_margin(f64::NAN), Err(DiagramError::InvalidLayout(_))));
        assert!(matches!(SvgSurface::new().with_margin(-1.0), Err(DiagramError::InvalidLayout(_))));
        assert!(matches!(SvgSurface::new().with_scale(0.0), Err(DiagramError::InvalidLayout(_))));
        assert!(matches!(
            SvgSurface::new().with_font_scale(f64::INFINITY),
            Err(DiagramError::InvalidLayout(_))
        ));
    }
}
