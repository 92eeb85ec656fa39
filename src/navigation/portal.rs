use crate::geometry::Segment2;
use crate::math::Point2;

/// An edge shared by two consecutive regions of a corridor.
///
/// Endpoints are tagged relative to the direction of travel: `left` is on the
/// counter-clockwise side, `right` on the clockwise side. Every portal of a
/// corridor must be tagged consistently; mixed tagging yields a wrong path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub left: Point2,
    pub right: Point2,
}

impl Portal {
    /// Creates a portal from its left and right endpoints.
    #[must_use]
    pub fn new(left: Point2, right: Point2) -> Self {
        Self { left, right }
    }

    /// Builds the portal for an edge the corridor leaves through.
    ///
    /// `edge` must belong to a counter-clockwise region; its interior lies to
    /// the left of the edge, so crossing it outward puts the head on the left
    /// and the tail on the right.
    #[must_use]
    pub fn from_exit_edge(edge: &Segment2) -> Self {
        Self {
            left: *edge.end(),
            right: *edge.start(),
        }
    }

    /// Returns the portal as a segment from right to left.
    #[must_use]
    pub fn as_segment(&self) -> Segment2 {
        Segment2::new(self.right, self.left)
    }

    pub(crate) fn is_finite(&self) -> bool {
        [self.left, self.right]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}
