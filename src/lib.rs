pub mod error;
pub mod geometry;
pub mod config;
pub mod surface;
pub mod diagram;

// Convenience re-exports
pub use error::{DiagramError, DiagramResult};
pub use geometry::{Bounds, Point, Segment};
pub use config::LayoutConfig;
pub use surface::{DrawingSurface, Primitive, RasterSurface, RecordingSurface, SvgSurface, Viewport, ZOrder};
pub use diagram::{build_network, build_network_with, draw_nn, DiagramSpec, Layer, NeuralNetwork, Neuron};
