use serde::{Deserialize, Serialize};

/// A position on the diagram plane. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Unit vector pointing from `self` towards `other`, or `None` when the
    /// two points coincide.
    pub fn direction_to(&self, other: &Point) -> Option<(f64, f64)> {
        let length = self.distance_to(other);
        if length == 0.0 {
            return None;
        }
        Some(((other.x - self.x) / length, (other.y - self.y) / length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_unit_length() {
        let (dx, dy) = Point::new(0.0, 0.0).direction_to(&Point::new(3.0, -4.0)).unwrap();
        assert!((dx - 0.6).abs() < 1e-12);
        assert!((dy + 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_direction_of_coincident_points_is_none() {
        let p = Point::new(2.0, 6.0);
        assert!(p.direction_to(&p).is_none());
    }
}
