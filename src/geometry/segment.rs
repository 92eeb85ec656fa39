use crate::math::vector_2d::{cross_2d, is_ccw_turn, length, offset_point, vector_between};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A bounded intersection between two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// The intersection point, evaluated on the first segment.
    pub point: Point2,
    /// Parameter on the first segment, in `[0, 1]`.
    pub t: f64,
    /// Parameter on the second segment, in `[0, 1]`.
    pub u: f64,
}

/// A directed line segment from `start` (tail) to `end` (head).
///
/// The direction matters for orientation tests; equality via [`Segment2::same_as`]
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    start: Point2,
    end: Point2,
}

impl Segment2 {
    /// Creates a segment from its tail and head.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the tail point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the head point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the (unnormalized) direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        vector_between(&self.start, &self.end)
    }

    /// Returns the point halfway between both endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }

    /// Returns the same segment traversed head to tail.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Returns this segment translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            offset_point(&self.start, dx, dy),
            offset_point(&self.end, dx, dy),
        )
    }

    /// Returns `true` if `point` lies strictly to the left of the directed segment.
    #[must_use]
    pub fn is_left(&self, point: &Point2) -> bool {
        let va = vector_between(point, &self.start);
        let vb = vector_between(point, &self.end);
        is_ccw_turn(&va, &vb, 0.0)
    }

    /// Returns `true` if both segments have the same endpoints, in either order.
    #[must_use]
    pub fn same_as(&self, other: &Segment2) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// Bounded intersection with another segment.
    ///
    /// Endpoint contacts count as hits. Parallel and collinear segments report
    /// `None` even when they overlap; overlapping collinear input is not
    /// supported. The parallel test is relative to both lengths, so it does not
    /// depend on the scale of the input. Zero-length segments never hit.
    #[must_use]
    pub fn intersect(&self, other: &Segment2) -> Option<SegmentHit> {
        let da = self.direction();
        let db = other.direction();

        // |det| = |da| |db| sin(angle)
        let det = cross_2d(&da, &db);
        if det.abs() <= TOLERANCE * length(&da) * length(&db) {
            return None;
        }

        let w = vector_between(&self.start, &other.start);
        let t = cross_2d(&w, &db) / det;
        let u = cross_2d(&w, &da) / det;

        let eps = TOLERANCE;
        if t < -eps || t > 1.0 + eps || u < -eps || u > 1.0 + eps {
            return None;
        }

        let t = t.clamp(0.0, 1.0);
        let u = u.clamp(0.0, 1.0);
        let point = Point2::new(self.start.x + da.x * t, self.start.y + da.y * t);
        Some(SegmentHit { point, t, u })
    }
}
