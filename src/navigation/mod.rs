//! Corridor traversal: portals, funnel corner extraction and path assembly.

pub mod funnel;
pub mod path;
pub mod portal;

pub use funnel::{next_corner, CornerStep, Funnel, Narrowing};
pub use path::{string_pull, Path, StringPull};
pub use portal::Portal;
