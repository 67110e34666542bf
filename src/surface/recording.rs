use crate::error::DiagramResult;
use crate::geometry::{Bounds, Point, Segment};
use crate::surface::surface::{DrawingSurface, Primitive, ZOrder};

/// Keeps every issued primitive in memory, in issue order.
///
/// Useful for tests and for callers that want the raw geometry to feed into
/// their own renderer. The other surfaces are built on top of it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    primitives: Vec<Primitive>,
    bounds: Option<Bounds>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Extent passed to `finish`, or `None` while the figure is still open.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn is_finished(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn circle_count(&self) -> usize {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Circle { .. })).count()
    }

    pub fn line_count(&self) -> usize {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Line { .. })).count()
    }

    pub fn text_count(&self) -> usize {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Text { .. })).count()
    }

    /// Primitives sorted for painting: background first, issue order kept
    /// within each z-order.
    pub fn paint_order(&self) -> Vec<&Primitive> {
        let background = self.primitives.iter().filter(|p| p.z_order() == ZOrder::Background);
        let foreground = self.primitives.iter().filter(|p| p.z_order() == ZOrder::Foreground);
        background.chain(foreground).collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin(&mut self) -> DiagramResult<()> {
        self.primitives.clear();
        self.bounds = None;
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: f64) -> DiagramResult<()> {
        self.primitives.push(Primitive::Circle { center, radius });
        Ok(())
    }

    fn line(&mut self, segment: Segment, z: ZOrder) -> DiagramResult<()> {
        self.primitives.push(Primitive::Line { segment, z });
        Ok(())
    }

    fn text(&mut self, anchor: Point, text: &str, font_size: f64) -> DiagramResult<()> {
        self.primitives.push(Primitive::Text { anchor, text: text.to_owned(), font_size });
        Ok(())
    }

    fn finish(&mut self, bounds: Bounds) -> DiagramResult<()> {
        self.bounds = Some(bounds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_discards_previous_figure() {
        let mut surface = RecordingSurface::new();
        surface.circle(Point::new(0.0, 0.0), 0.5).unwrap();
        surface.finish(Bounds::at(Point::new(0.0, 0.0))).unwrap();
        assert!(surface.is_finished());

        surface.begin().unwrap();
        assert!(surface.primitives().is_empty());
        assert!(!surface.is_finished());
    }

    #[test]
    fn test_paint_order_puts_background_lines_first() {
        let mut surface = RecordingSurface::new();
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        surface.circle(Point::new(0.0, 0.0), 0.5).unwrap();
        surface.line(seg, ZOrder::Background).unwrap();
        surface.text(Point::new(2.0, 0.0), "in", 12.0).unwrap();

        let order = surface.paint_order();
        assert!(matches!(order[0], Primitive::Line { .. }));
        assert!(matches!(order[1], Primitive::Circle { .. }));
        assert!(matches!(order[2], Primitive::Text { .. }));
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.line_count(), 1);
        assert_eq!(surface.text_count(), 1);
    }

    #[test]
    fn test_recording_serializes_as_tagged_json() {
        let mut surface = RecordingSurface::new();
        let seg = Segment::new(Point::new(0.0, 5.5), Point::new(0.0, 0.5));
        surface.line(seg, ZOrder::Background).unwrap();
        surface.text(Point::new(2.0, 6.0), "out", 12.0).unwrap();

        let json = serde_json::to_value(surface.primitives()).unwrap();
        assert_eq!(json[0]["type"], "line");
        assert_eq!(json[0]["z"], "background");
        assert_eq!(json[1]["type"], "text");
        assert_eq!(json[1]["anchor"]["y"], 6.0);

        let back: Vec<Primitive> = serde_json::from_value(json).unwrap();
        assert_eq!(back, surface.primitives());
    }
}
