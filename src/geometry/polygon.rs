use super::segment::Segment2;
use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{length, offset_point};
use crate::math::{Point2, TOLERANCE};

/// A simple polygon, conventionally wound counter-clockwise.
///
/// Every vertex `i` owns an outgoing edge to vertex `i + 1` and an incoming
/// edge from vertex `i - 1` (indices wrap). Edges are derived from the vertex
/// list on demand rather than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2>,
}

impl Polygon2 {
    /// Creates a polygon from its vertices in traversal order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than 3 vertices are given.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns vertex `index`, wrapping around the polygon.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index % self.vertices.len()]
    }

    /// Number of vertices (always at least 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Edge leaving vertex `index` towards the next vertex.
    #[must_use]
    pub fn outgoing_edge(&self, index: usize) -> Segment2 {
        let n = self.vertices.len();
        Segment2::new(self.vertices[index % n], self.vertices[(index + 1) % n])
    }

    /// Edge arriving at vertex `index` from the previous vertex.
    #[must_use]
    pub fn incoming_edge(&self, index: usize) -> Segment2 {
        let n = self.vertices.len();
        let i = index % n;
        Segment2::new(self.vertices[(i + n - 1) % n], self.vertices[i])
    }

    /// Iterates over all edges, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2> + '_ {
        (0..self.vertices.len()).map(|i| self.outgoing_edge(i))
    }

    /// Signed area (shoelace formula). Positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum * 0.5
    }

    /// Returns `true` if the vertices wind counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Area-weighted centroid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the polygon has zero area.
    pub fn centroid(&self) -> Result<Point2> {
        let area = self.signed_area();
        if area.abs() < TOLERANCE {
            return Err(
                GeometryError::Degenerate("zero-area polygon has no centroid".to_owned()).into(),
            );
        }
        let n = self.vertices.len();
        let (mut cx, mut cy) = (0.0, 0.0);
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let w = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * w;
            cy += (a.y + b.y) * w;
        }
        let k = 1.0 / (6.0 * area);
        Ok(Point2::new(cx * k, cy * k))
    }

    /// Returns a copy of this polygon translated by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| offset_point(v, dx, dy))
                .collect(),
        }
    }

    /// Returns `true` if `segment` is one of the polygon's edges, in either direction.
    #[must_use]
    pub fn has_edge(&self, segment: &Segment2) -> bool {
        self.edges().any(|edge| edge.same_as(segment))
    }

    /// Point containment by ray-casting parity.
    ///
    /// A ray is cast leftward past the polygon's extent. A ray that passes
    /// exactly through a shared vertex is counted once: hits closer than
    /// [`TOLERANCE`] in world units along the ray merge. Correct for simple
    /// (also concave) polygons; points exactly on an edge are unsupported and
    /// may be classified either way.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        let min_x = self
            .vertices
            .iter()
            .map(|v| v.x)
            .fold(f64::INFINITY, f64::min);
        let ray = Segment2::new(*point, Point2::new(min_x - 1.0, point.y));
        let reach = length(&ray.direction());

        let mut hits: Vec<f64> = self
            .edges()
            .filter_map(|edge| ray.intersect(&edge))
            .map(|hit| hit.t)
            .collect();
        hits.sort_by(f64::total_cmp);
        hits.dedup_by(|a, b| (*a - *b).abs() * reach < TOLERANCE);

        hits.len() % 2 == 1
    }

    /// Segment containment: no edge is crossed and the midpoint is inside.
    ///
    /// This is a heuristic. It can misclassify a segment that leaves through
    /// a concavity without touching an edge while its midpoint stays inside.
    #[must_use]
    pub fn contains_segment(&self, segment: &Segment2) -> bool {
        if self.edges().any(|edge| edge.intersect(segment).is_some()) {
            return false;
        }
        self.contains_point(&segment.midpoint())
    }
}
