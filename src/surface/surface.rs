use serde::{Deserialize, Serialize};

use crate::error::DiagramResult;
use crate::geometry::{Bounds, Point, Segment};

/// Stacking order of a primitive. Background primitives are rendered beneath
/// foreground ones regardless of the order they were issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZOrder {
    Background,
    Foreground,
}

/// One drawing operation, as issued to a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Unfilled circle.
    Circle { center: Point, radius: f64 },
    Line { segment: Segment, z: ZOrder },
    /// Text centred both horizontally and vertically on `anchor`.
    Text { anchor: Point, text: String, font_size: f64 },
}

impl Primitive {
    pub fn z_order(&self) -> ZOrder {
        match self {
            Primitive::Line { z, .. } => *z,
            _ => ZOrder::Foreground,
        }
    }
}

/// A figure that diagram elements draw themselves onto.
///
/// Callers hand the surface to `NeuralNetwork::draw`, which calls `begin`,
/// issues every primitive, then calls `finish` with the extent of the diagram.
/// Finishing frames the figure with equal x/y scaling and no axis decorations.
pub trait DrawingSurface {
    /// Starts a fresh figure, discarding anything drawn before.
    fn begin(&mut self) -> DiagramResult<()>;

    fn circle(&mut self, center: Point, radius: f64) -> DiagramResult<()>;

    fn line(&mut self, segment: Segment, z: ZOrder) -> DiagramResult<()>;

    fn text(&mut self, anchor: Point, text: &str, font_size: f64) -> DiagramResult<()>;

    fn finish(&mut self, bounds: Bounds) -> DiagramResult<()>;
}
