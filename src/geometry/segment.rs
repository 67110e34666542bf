use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};
use crate::geometry::point::Point;

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Segment {
        Segment { start, end }
    }

    /// Builds the edge between two circles of equal `radius`, trimmed so each
    /// endpoint sits on its circle's boundary instead of its centre.
    ///
    /// Both ends move `radius` along the centre-to-centre direction. For a
    /// target lying below the source this is the same as offsetting by
    /// `radius * sin(a)` and `radius * cos(a)` with
    /// `a = atan((x2 - x1) / (y2 - y1))`, but it also holds for horizontal
    /// edges and never divides by zero.
    pub fn between_circles(from: Point, to: Point, radius: f64) -> DiagramResult<Segment> {
        let (ux, uy) = from
            .direction_to(&to)
            .ok_or(DiagramError::CoincidentNeurons { x: from.x, y: from.y })?;
        let dx = radius * ux;
        let dy = radius * uy;
        Ok(Segment {
            start: Point::new(from.x + dx, from.y + dy),
            end: Point::new(to.x - dx, to.y - dy),
        })
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Endpoint formula the layer diagram has always used for edges running
    /// from an upper neuron down to one in the previous layer.
    fn angle_endpoints(n1: Point, n2: Point, r: f64) -> (Point, Point) {
        let angle = ((n2.x - n1.x) / (n2.y - n1.y)).atan();
        let x_adj = r * angle.sin();
        let y_adj = r * angle.cos();
        (
            Point::new(n1.x - x_adj, n1.y - y_adj),
            Point::new(n2.x + x_adj, n2.y + y_adj),
        )
    }

    #[test]
    fn test_matches_angle_formula_for_downward_edges() {
        let cases = [
            (Point::new(2.0, 6.0), Point::new(0.0, 0.0)),
            (Point::new(0.0, 6.0), Point::new(8.0, 0.0)),
            (Point::new(4.0, 12.0), Point::new(4.0, 6.0)),
            (Point::new(5.0, 6.0), Point::new(1.0, 0.0)),
        ];
        for (n1, n2) in cases {
            let seg = Segment::between_circles(n1, n2, 0.5).unwrap();
            let (s, e) = angle_endpoints(n1, n2, 0.5);
            assert!((seg.start.x - s.x).abs() < EPS, "{:?} vs {:?}", seg.start, s);
            assert!((seg.start.y - s.y).abs() < EPS, "{:?} vs {:?}", seg.start, s);
            assert!((seg.end.x - e.x).abs() < EPS, "{:?} vs {:?}", seg.end, e);
            assert!((seg.end.y - e.y).abs() < EPS, "{:?} vs {:?}", seg.end, e);
        }
    }

    #[test]
    fn test_endpoints_lie_on_circle_boundaries() {
        let a = Point::new(0.0, 6.0);
        let b = Point::new(6.0, 0.0);
        let seg = Segment::between_circles(a, b, 0.5).unwrap();
        assert!((a.distance_to(&seg.start) - 0.5).abs() < EPS);
        assert!((b.distance_to(&seg.end) - 0.5).abs() < EPS);
        assert!((seg.length() - (a.distance_to(&b) - 1.0)).abs() < EPS);
    }

    #[test]
    fn test_horizontal_edge_is_well_defined() {
        let seg = Segment::between_circles(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5).unwrap();
        assert_eq!(seg.start, Point::new(0.5, 0.0));
        assert_eq!(seg.end, Point::new(1.5, 0.0));
    }

    #[test]
    fn test_coincident_centres_are_rejected() {
        let p = Point::new(1.0, 1.0);
        let err = Segment::between_circles(p, p, 0.5).unwrap_err();
        assert!(matches!(err, DiagramError::CoincidentNeurons { .. }));
    }
}
