use serde::{Deserialize, Serialize};

use crate::error::DiagramResult;
use crate::geometry::Point;
use crate::surface::DrawingSurface;

/// A single neuron, drawn as an unfilled circle centred on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub x: f64,
    pub y: f64,
}

impl Neuron {
    pub fn new(x: f64, y: f64) -> Neuron {
        Neuron { x, y }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn draw(&self, surface: &mut dyn DrawingSurface, radius: f64) -> DiagramResult<()> {
        surface.circle(self.center(), radius)
    }
}
