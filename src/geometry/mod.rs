pub mod point;
pub mod segment;
pub mod bounds;

pub use point::Point;
pub use segment::Segment;
pub use bounds::Bounds;
