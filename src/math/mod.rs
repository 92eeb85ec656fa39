pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type, used to lift planar vectors for cross products.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
