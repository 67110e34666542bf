pub mod surface;
pub mod recording;
pub mod viewport;
pub mod paint;
pub mod svg;
pub mod raster;

pub use surface::{DrawingSurface, Primitive, ZOrder};
pub use recording::RecordingSurface;
pub use viewport::{Frame, Viewport, MAX_PIXELS};
pub use svg::SvgSurface;
pub use raster::RasterSurface;
