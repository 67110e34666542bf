use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// Axis-aligned extent of everything drawn on a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Degenerate bounds covering a single point.
    pub fn at(p: Point) -> Bounds {
        Bounds { min: p, max: p }
    }

    /// Grows the bounds to include `p`.
    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Grows the bounds to include a circle of `radius` around `center`.
    pub fn include_circle(&mut self, center: Point, radius: f64) {
        self.include(Point::new(center.x - radius, center.y - radius));
        self.include(Point::new(center.x + radius, center.y + radius));
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns a copy expanded by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Bounds {
        Bounds {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
