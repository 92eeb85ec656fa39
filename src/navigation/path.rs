use tracing::debug;

use super::funnel::{next_corner, CornerStep};
use super::portal::Portal;
use crate::error::{NavigationError, Result};
use crate::geometry::Segment2;
use crate::math::vector_2d::distance;
use crate::math::Point2;

/// Ordered waypoints from start to goal.
///
/// Consecutive waypoints form the straight legs of the route. Interior
/// waypoints are the corners where the route bends.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point2>,
}

impl Path {
    /// Returns all waypoints, start and goal included.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the path, returning its waypoints.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Number of waypoints (at least 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no waypoints; never the case for an assembled path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First waypoint.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Last waypoint.
    #[must_use]
    pub fn goal(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Interior waypoints, i.e. the corners of the route.
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.points[1..self.points.len() - 1]
    }

    /// Iterates over the straight legs of the route.
    pub fn legs(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Total length of the route.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
    }
}

/// Straightens a portal corridor into the taut path from `start` to `goal`.
///
/// # Algorithm
///
/// 1. Starting with the apex at `start`, extract the next corner from the
///    remaining portals (see [`next_corner`]).
/// 2. Append the corner, move the apex there and continue with the portal
///    suffix returned alongside it.
/// 3. Stop when no corner is left and append `goal`.
///
/// Every corner consumes at least one portal, so the loop runs at most
/// `portals.len() + 1` times.
#[derive(Debug)]
pub struct StringPull {
    start: Point2,
    goal: Point2,
    portals: Vec<Portal>,
    tolerance: f64,
}

impl StringPull {
    /// Creates a new string-pulling operation with exact orientation tests.
    #[must_use]
    pub fn new(start: Point2, goal: Point2, portals: Vec<Portal>) -> Self {
        Self {
            start,
            goal,
            portals,
            tolerance: 0.0,
        }
    }

    /// Sets the minimum cross product that counts as a turn.
    ///
    /// Sight lines within this threshold of collinear are neither left nor
    /// right of each other: they narrow the funnel without collapsing it, and
    /// a goal on them needs no corner. Raising the tolerance never adds
    /// corners to a route.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// - `NavigationError::NonFinite` if the start, goal or a portal has a
    ///   non-finite coordinate
    /// - `NavigationError::InvalidTolerance` if the tolerance is negative or
    ///   not finite
    pub fn execute(&self) -> Result<Path> {
        self.validate()?;

        let mut points = Vec::with_capacity(self.portals.len() + 2);
        points.push(self.start);

        let mut apex = self.start;
        let mut portals = self.portals.as_slice();
        while let CornerStep::Corner { point, remaining } =
            next_corner(apex, portals, &self.goal, self.tolerance)
        {
            debug!(x = point.x, y = point.y, remaining = remaining.len(), "corner");
            points.push(point);
            apex = point;
            portals = remaining;
        }
        points.push(self.goal);

        debug!(
            portals = self.portals.len(),
            corners = points.len() - 2,
            "corridor straightened"
        );
        Ok(Path { points })
    }

    fn validate(&self) -> Result<()> {
        if !is_finite(&self.start) {
            return Err(NavigationError::NonFinite("start").into());
        }
        if !is_finite(&self.goal) {
            return Err(NavigationError::NonFinite("goal").into());
        }
        if !self.portals.iter().all(Portal::is_finite) {
            return Err(NavigationError::NonFinite("portal").into());
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(NavigationError::InvalidTolerance(self.tolerance).into());
        }
        Ok(())
    }
}

fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Straightens `portals` into the taut path from `start` to `goal` with exact
/// orientation tests.
///
/// # Errors
///
/// Returns `NavigationError::NonFinite` for non-finite input coordinates.
pub fn string_pull(start: Point2, portals: &[Portal], goal: Point2) -> Result<Path> {
    StringPull::new(start, goal, portals.to_vec()).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polygon2;
    use crate::math::vector_2d::{cross_2d, vector_between};
    use crate::CorridorError;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64) -> Polygon2 {
        Polygon2::new(vec![
            p(x0, y0),
            p(x0 + 50.0, y0),
            p(x0 + 50.0, y0 + 50.0),
            p(x0, y0 + 50.0),
        ])
        .unwrap()
    }

    /// Five squares: three to the right, then two upwards.
    fn staircase() -> Vec<Portal> {
        let a = square(50.0, 50.0);
        let b = a.offset(50.0, 0.0);
        let c = b.offset(50.0, 0.0);
        let d = c.offset(0.0, 50.0);
        [
            a.outgoing_edge(1),
            b.outgoing_edge(1),
            c.outgoing_edge(2),
            d.outgoing_edge(2),
        ]
        .iter()
        .map(Portal::from_exit_edge)
        .collect()
    }

    #[test]
    fn staircase_bends_once() {
        let portals = staircase();
        let path = string_pull(p(75.0, 75.0), &portals, p(175.0, 175.0)).unwrap();
        assert_eq!(
            path.points(),
            &[p(75.0, 75.0), p(150.0, 100.0), p(175.0, 175.0)]
        );
        assert_eq!(path.corners(), &[p(150.0, 100.0)]);
    }

    #[test]
    fn route_passes_every_portal() {
        let portals = staircase();
        let path = string_pull(p(75.0, 75.0), &portals, p(175.0, 175.0)).unwrap();
        for portal in &portals {
            let gate = portal.as_segment();
            assert!(
                path.legs().any(|leg| leg.intersect(&gate).is_some()),
                "route misses {portal:?}"
            );
        }
    }

    /// Every leg that meets the line through a portal meets it on the portal.
    fn assert_crossings_on_portals(path: &Path, portals: &[Portal]) {
        for portal in portals {
            let gate = portal.as_segment();
            let d = gate.direction() * 1e3;
            let line = Segment2::new(
                p(gate.start().x - d.x, gate.start().y - d.y),
                p(gate.end().x + d.x, gate.end().y + d.y),
            );
            for leg in path.legs() {
                if leg.intersect(&line).is_some() {
                    assert!(
                        leg.intersect(&gate).is_some(),
                        "{leg:?} crosses the line of {portal:?} outside it"
                    );
                }
            }
        }
    }

    #[test]
    fn staircase_crosses_portals_between_endpoints() {
        let portals = staircase();
        let path = string_pull(p(75.0, 75.0), &portals, p(175.0, 175.0)).unwrap();
        assert_crossings_on_portals(&path, &portals);
    }

    #[test]
    fn goal_in_line_with_portal_end_is_straight() {
        // The goal lies on the sight line through the portal's upper end.
        let a = square(50.0, 50.0);
        let portals = [Portal::from_exit_edge(&a.outgoing_edge(1))];
        let path = string_pull(p(75.0, 75.0), &portals, p(175.0, 175.0)).unwrap();
        assert_eq!(path.points(), &[p(75.0, 75.0), p(175.0, 175.0)]);

        // The single leg grazes the portal exactly at that end.
        let hit = path.legs().next().unwrap().intersect(&portals[0].as_segment()).unwrap();
        assert_eq!(hit.point, p(100.0, 100.0));
        assert_crossings_on_portals(&path, &portals);
    }

    #[test]
    fn goal_past_portal_end_bends_there() {
        let a = square(50.0, 50.0);
        let portals = [Portal::from_exit_edge(&a.outgoing_edge(1))];
        let path = string_pull(p(75.0, 75.0), &portals, p(175.0, 180.0)).unwrap();
        assert_eq!(path.corners(), &[p(100.0, 100.0)]);
        assert_crossings_on_portals(&path, &portals);
    }

    #[test]
    fn goals_inside_next_square_are_visible() {
        let a = square(50.0, 50.0);
        let b = a.offset(50.0, 0.0);
        let portals = [Portal::from_exit_edge(&a.outgoing_edge(1))];
        for goal in [
            p(140.0, 90.0),
            p(105.0, 95.0),
            p(110.0, 55.0),
            p(145.0, 60.0),
        ] {
            assert!(b.contains_point(&goal));
            let path = string_pull(p(75.0, 75.0), &portals, goal).unwrap();
            assert!(path.corners().is_empty(), "unexpected corner towards {goal:?}");
            assert_crossings_on_portals(&path, &portals);
        }
    }

    #[test]
    fn tolerance_never_adds_corners() {
        // The second portal's left end sits a hair left of the line y = x.
        let portals = [
            Portal::new(p(-1.0, 1.0), p(1.0, 1.0)),
            Portal::new(p(2.0, 2.0 + 1e-12), p(3.0, 2.0)),
        ];
        let exact = string_pull(p(0.0, 0.0), &portals, p(3.0, 3.0)).unwrap();
        let relaxed = StringPull::new(p(0.0, 0.0), p(3.0, 3.0), portals.to_vec())
            .with_tolerance(1e-9)
            .execute()
            .unwrap();
        assert_eq!(exact.points(), &[p(0.0, 0.0), p(3.0, 3.0)]);
        assert_eq!(relaxed, exact);

        for tolerance in [0.0, 1e-9, 1e-3] {
            let relaxed = StringPull::new(p(75.0, 75.0), p(175.0, 175.0), staircase())
                .with_tolerance(tolerance)
                .execute()
                .unwrap();
            assert!(relaxed.corners().len() <= 1);
        }
    }

    #[test]
    fn visible_goal_has_no_corners() {
        let a = square(50.0, 50.0);
        let b = a.offset(50.0, 0.0);
        let portals = [Portal::from_exit_edge(&a.outgoing_edge(1))];
        let goal = p(125.0, 75.0);
        assert!(b.contains_point(&goal));

        let path = string_pull(p(75.0, 75.0), &portals, goal).unwrap();
        assert_eq!(path.points(), &[p(75.0, 75.0), goal]);
        assert!(path.corners().is_empty());
        assert_relative_eq!(path.length(), 50.0);
    }

    #[test]
    fn empty_corridor_is_a_straight_line() {
        let path = string_pull(p(0.0, 0.0), &[], p(3.0, 4.0)).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.start(), p(0.0, 0.0));
        assert_eq!(path.goal(), p(3.0, 4.0));
        assert_relative_eq!(path.length(), 5.0);
    }

    #[test]
    fn bend_around_inner_corner() {
        // Right through a gate, up, then right again.
        let portals = [
            Portal::new(p(1.0, 1.0), p(1.0, 0.0)),
            Portal::new(p(1.0, 2.0), p(2.0, 2.0)),
            Portal::new(p(2.0, 3.0), p(2.0, 2.0)),
        ];
        let path = string_pull(p(0.5, 0.3), &portals, p(2.9, 2.2)).unwrap();
        assert_eq!(path.points(), &[p(0.5, 0.3), p(2.0, 2.0), p(2.9, 2.2)]);
    }

    #[test]
    fn u_turn_around_wall() {
        // Up one column, across the top bar, down the next column.
        let portals = [
            Portal::new(p(0.0, 2.0), p(1.0, 2.0)),
            Portal::new(p(3.0, 2.0), p(2.0, 2.0)),
        ];
        let path = string_pull(p(0.5, 0.5), &portals, p(2.5, 0.5)).unwrap();
        assert_eq!(
            path.points(),
            &[p(0.5, 0.5), p(1.0, 2.0), p(2.0, 2.0), p(2.5, 0.5)]
        );
        let expected = 2.0 * 1.5_f64.hypot(0.5) + 1.0;
        assert_relative_eq!(path.length(), expected, epsilon = 1e-12);
    }

    #[test]
    fn corners_turn_consistently() {
        let portals = [
            Portal::new(p(0.0, 2.0), p(1.0, 2.0)),
            Portal::new(p(3.0, 2.0), p(2.0, 2.0)),
        ];
        let path = string_pull(p(0.5, 0.5), &portals, p(2.5, 0.5)).unwrap();
        let pts = path.points();
        // Wrapping clockwise around the wall: every bend is a right turn.
        for w in pts.windows(3) {
            let turn = cross_2d(&vector_between(&w[0], &w[1]), &vector_between(&w[1], &w[2]));
            assert!(turn < 0.0);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let op = StringPull::new(p(75.0, 75.0), p(175.0, 175.0), staircase());
        let first = op.execute().unwrap();
        let second = op.execute().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.into_points(), second.points().to_vec());
    }

    #[test]
    fn rejects_non_finite_input() {
        let err = string_pull(p(f64::NAN, 0.0), &[], p(1.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            CorridorError::Navigation(NavigationError::NonFinite("start"))
        ));
        let portals = [Portal::new(p(0.0, f64::INFINITY), p(0.0, 0.0))];
        let err = string_pull(p(-1.0, 0.0), &portals, p(1.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            CorridorError::Navigation(NavigationError::NonFinite("portal"))
        ));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let err = StringPull::new(p(0.0, 0.0), p(1.0, 1.0), Vec::new())
            .with_tolerance(-1.0)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            CorridorError::Navigation(NavigationError::InvalidTolerance(_))
        ));
    }
}
