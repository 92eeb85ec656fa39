//! corridor - taut paths through corridors of convex regions
//!
//! Given the ordered portals between adjacent regions of a navigation mesh,
//! [`StringPull`] straightens the coarse region route into the shortest path
//! that bends only at portal endpoints.

pub mod error;
pub mod geometry;
pub mod math;
pub mod navigation;

pub use error::{CorridorError, Result};
pub use geometry::{Polygon2, Segment2, SegmentHit};
pub use math::{Point2, Vector2};
pub use navigation::{
    next_corner, string_pull, CornerStep, Funnel, Narrowing, Path, Portal, StringPull,
};
