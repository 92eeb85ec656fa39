pub mod polygon;
pub mod segment;

pub use polygon::Polygon2;
pub use segment::{Segment2, SegmentHit};
