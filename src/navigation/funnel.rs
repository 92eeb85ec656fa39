//! Funnel narrowing and corner extraction.
//!
//! Seen from the apex, the funnel is bounded by two sight lines: one through
//! the tightest `left` endpoint and one through the tightest `right` endpoint
//! met so far. Each portal can only narrow the funnel. When a new endpoint
//! crosses over the opposite sight line the funnel collapses and the sight
//! line it crossed ends in a corner of the taut path.

use tracing::trace;

use super::portal::Portal;
use crate::math::vector_2d::{is_ccw_turn, vector_between};
use crate::math::Point2;

/// Funnel state anchored at a path vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Funnel {
    pub apex: Point2,
    pub left: Point2,
    pub right: Point2,
}

/// Outcome of feeding one portal to a [`Funnel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Narrowing {
    /// The funnel absorbed the portal, possibly narrower than before.
    Narrowed(Funnel),
    /// The funnel collapsed; the point is the next corner of the path.
    Collapsed(Point2),
}

/// Result of one corner extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerStep<'a> {
    /// A corner was found. Extraction continues from `point` over `remaining`.
    Corner {
        point: Point2,
        remaining: &'a [Portal],
    },
    /// No corner is left; the goal is in direct sight of the apex.
    Complete,
}

impl Funnel {
    /// Opens a funnel from `apex` through the first portal.
    #[must_use]
    pub fn open(apex: Point2, portal: &Portal) -> Self {
        Self {
            apex,
            left: portal.left,
            right: portal.right,
        }
    }

    /// `true` iff `to` is a counter-clockwise turn from `from`, seen from the
    /// apex. Swapping the arguments tests the clockwise case; within
    /// `tolerance` of collinear, neither holds.
    fn turns_ccw(&self, from: &Point2, to: &Point2, tolerance: f64) -> bool {
        let v_from = vector_between(&self.apex, from);
        let v_to = vector_between(&self.apex, to);
        is_ccw_turn(&v_from, &v_to, tolerance)
    }

    /// Feeds the next portal, returning the narrowed funnel or the corner at
    /// which it collapsed.
    ///
    /// An endpoint only collapses the funnel when it lies strictly beyond the
    /// opposite sight line. An endpoint collinear with it narrows the funnel
    /// to zero width instead.
    #[must_use]
    pub fn narrow(self, portal: &Portal, tolerance: f64) -> Narrowing {
        let Portal { left, right } = *portal;

        let left = if self.turns_ccw(&self.left, &left, tolerance) {
            self.left
        } else {
            left
        };

        if self.turns_ccw(&self.right, &right, tolerance) {
            if self.turns_ccw(&self.left, &right, tolerance) {
                // The right endpoint passed the left sight line.
                return Narrowing::Collapsed(self.left);
            }
            return Narrowing::Narrowed(Self {
                left,
                right,
                ..self
            });
        }

        if self.turns_ccw(&left, &self.right, tolerance) {
            // The left endpoint passed the right sight line.
            return Narrowing::Collapsed(self.right);
        }
        Narrowing::Narrowed(Self { left, ..self })
    }

    /// Decides the last corner once every portal has been absorbed.
    ///
    /// Returns the sight line endpoint the goal has turned past, or `None`
    /// if the goal lies inside the funnel or on one of its sight lines.
    #[must_use]
    pub fn resolve_goal(&self, goal: &Point2, tolerance: f64) -> Option<Point2> {
        if self.turns_ccw(goal, &self.right, tolerance) {
            Some(self.right)
        } else if self.turns_ccw(&self.left, goal, tolerance) {
            Some(self.left)
        } else {
            None
        }
    }
}

/// Finds the next corner of the taut path from `apex` through `portals` to `goal`.
///
/// A corner found while scanning comes with the portal suffix starting at the
/// portal that collapsed the funnel. A corner found against the goal comes
/// with an empty suffix, so the following call returns
/// [`CornerStep::Complete`].
#[must_use]
pub fn next_corner<'a>(
    apex: Point2,
    portals: &'a [Portal],
    goal: &Point2,
    tolerance: f64,
) -> CornerStep<'a> {
    let Some((first, rest)) = portals.split_first() else {
        return CornerStep::Complete;
    };

    let mut funnel = Funnel::open(apex, first);
    for (offset, portal) in rest.iter().enumerate() {
        match funnel.narrow(portal, tolerance) {
            Narrowing::Narrowed(next) => {
                trace!(left = ?next.left, right = ?next.right, "funnel narrowed");
                funnel = next;
            }
            Narrowing::Collapsed(point) => {
                return CornerStep::Corner {
                    point,
                    remaining: &portals[offset + 1..],
                };
            }
        }
    }

    match funnel.resolve_goal(goal, tolerance) {
        Some(point) => CornerStep::Corner {
            point,
            remaining: &[],
        },
        None => CornerStep::Complete,
    }
}
