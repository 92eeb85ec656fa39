//! Planar vector kernel.
//!
//! All orientation reasoning in the crate goes through [`cross_2d`] and
//! [`is_ccw_turn`]. Axes follow the usual mathematical convention (y up), so a
//! positive cross product is a counter-clockwise turn.

use super::{Point2, Vector2, Vector3, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns the displacement from `a` to `b`.
#[must_use]
pub fn vector_between(a: &Point2, b: &Point2) -> Vector2 {
    Vector2::new(b.x - a.x, b.y - a.y)
}

/// Dot product of two planar vectors.
#[must_use]
pub fn dot(v1: &Vector2, v2: &Vector2) -> f64 {
    v1.x * v2.x + v1.y * v2.y
}

/// Lifts a planar vector into 3D at `z = 0`.
#[must_use]
pub fn lift(v: &Vector2) -> Vector3 {
    Vector3::new(v.x, v.y, 0.0)
}

/// Signed 2D cross product: the z-component of `lift(v1) × lift(v2)`.
///
/// Positive when `v2` is a counter-clockwise turn from `v1`.
#[must_use]
pub fn cross_2d(v1: &Vector2, v2: &Vector2) -> f64 {
    lift(v1).cross(&lift(v2)).z
}

/// Orientation predicate: `true` iff `v2` turns counter-clockwise from `v1`
/// by a cross product larger than `tolerance`.
///
/// Vectors within `tolerance` of collinear are not a turn in either
/// direction, so `is_ccw_turn(v2, v1, tolerance)` tests the clockwise case.
#[must_use]
pub fn is_ccw_turn(v1: &Vector2, v2: &Vector2, tolerance: f64) -> bool {
    cross_2d(v1, v2) > tolerance
}

/// Euclidean length.
#[must_use]
pub fn length(v: &Vector2) -> f64 {
    v.x.hypot(v.y)
}

/// Distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    length(&vector_between(a, b))
}

/// Returns the unit vector pointing along `v`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` is shorter than [`TOLERANCE`].
pub fn normalize(v: &Vector2) -> Result<Vector2> {
    let len = length(v);
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Vector2::new(v.x / len, v.y / len))
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either vector is zero-length.
pub fn radians_between(v1: &Vector2, v2: &Vector2) -> Result<f64> {
    let (l1, l2) = (length(v1), length(v2));
    if l1 < TOLERANCE || l2 < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    let cos = (dot(v1, v2) / (l1 * l2)).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Component-wise sum.
#[must_use]
pub fn add(v1: &Vector2, v2: &Vector2) -> Vector2 {
    Vector2::new(v1.x + v2.x, v1.y + v2.y)
}

/// Rotates `v` a quarter turn clockwise: `(x, y) -> (y, -x)`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Returns `p` translated by `(dx, dy)`.
#[must_use]
pub fn offset_point(p: &Point2, dx: f64, dy: f64) -> Point2 {
    Point2::new(p.x + dx, p.y + dy)
}
