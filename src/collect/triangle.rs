//! Triangles described by their bounding edges.

use nalgebra::Point3;

use crate::mesh::{TriangulatedMesh, VertexPositions};

/// A triangle given by the three directed edges around it.
///
/// Edge `a` starts at the triangle's first vertex, `b = forward(a)` and
/// `c = reverse(a)`. Holding edges rather than vertices lets callers step to
/// adjacent triangles through the duals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleTriangle<E> {
    a: E,
    b: E,
    c: E,
}

impl<E: Copy> SimpleTriangle<E> {
    /// Create a triangle from its edges in forward order.
    pub fn new(a: E, b: E, c: E) -> Self {
        Self { a, b, c }
    }

    /// The first edge.
    #[inline]
    pub fn edge_a(&self) -> E {
        self.a
    }

    /// The edge after `a` around the triangle.
    #[inline]
    pub fn edge_b(&self) -> E {
        self.b
    }

    /// The edge before `a` around the triangle.
    #[inline]
    pub fn edge_c(&self) -> E {
        self.c
    }

    /// All three edges in forward order.
    #[inline]
    pub fn edges(&self) -> [E; 3] {
        [self.a, self.b, self.c]
    }

    /// Vertices in forward order, or `None` if any is the ghost vertex.
    pub fn vertices<M>(&self, mesh: &M) -> Option<[M::Vertex; 3]>
    where
        M: TriangulatedMesh<Edge = E>,
    {
        Some([
            mesh.origin(self.a)?,
            mesh.origin(self.b)?,
            mesh.origin(self.c)?,
        ])
    }

    /// The dual of each edge; each one bounds the neighbouring triangle.
    pub fn neighbor_edges<M>(&self, mesh: &M) -> [E; 3]
    where
        M: TriangulatedMesh<Edge = E>,
    {
        self.edges().map(|e| mesh.dual(e))
    }

    /// Area of the triangle's x/y projection.
    ///
    /// Positive for counter-clockwise triangles. `None` for ghost triangles.
    pub fn area<M>(&self, mesh: &M) -> Option<f64>
    where
        M: VertexPositions<Edge = E>,
    {
        let [p0, p1, p2] = self.positions(mesh)?;
        Some(0.5 * ((p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x)))
    }

    /// Mean of the three vertex positions. `None` for ghost triangles.
    pub fn centroid<M>(&self, mesh: &M) -> Option<Point3<f64>>
    where
        M: VertexPositions<Edge = E>,
    {
        let [p0, p1, p2] = self.positions(mesh)?;
        Some(Point3::from((p0.coords + p1.coords + p2.coords) / 3.0))
    }

    fn positions<M>(&self, mesh: &M) -> Option<[Point3<f64>; 3]>
    where
        M: VertexPositions<Edge = E>,
    {
        let vertices = self.vertices(mesh)?;
        Some(vertices.map(|v| mesh.vertex_position(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{build_tin, QuadEdgeMesh, VertexId};

    fn tin() -> QuadEdgeMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(2.0, 0.0, 2.0),
            Point3::new(0.0, 2.0, 3.0),
        ];
        build_tin(&vertices, &[[0, 1, 2]]).unwrap()
    }

    fn triangle_from(mesh: &QuadEdgeMesh, a: usize, b: usize) -> SimpleTriangle<crate::mesh::EdgeId> {
        let e = mesh.find_edge(VertexId::new(a), VertexId::new(b)).unwrap();
        SimpleTriangle::new(e, mesh.forward(e), mesh.reverse(e))
    }

    #[test]
    fn test_vertices_and_geometry() {
        let mesh = tin();
        let t = triangle_from(&mesh, 0, 1);

        assert_eq!(
            t.vertices(&mesh),
            Some([VertexId::new(0), VertexId::new(1), VertexId::new(2)])
        );
        assert_eq!(t.area(&mesh), Some(2.0));
        assert_eq!(t.centroid(&mesh), Some(Point3::new(2.0 / 3.0, 2.0 / 3.0, 2.0)));
    }

    #[test]
    fn test_ghost_triangle_has_no_geometry() {
        let mesh = tin();
        // 1 -> 0 runs along the hull with the ghost face on its left.
        let t = triangle_from(&mesh, 1, 0);

        assert_eq!(t.vertices(&mesh), None);
        assert_eq!(t.area(&mesh), None);
        assert_eq!(t.centroid(&mesh), None);
    }

    #[test]
    fn test_neighbor_edges_are_duals() {
        let mesh = tin();
        let t = triangle_from(&mesh, 0, 1);
        let n = t.neighbor_edges(&mesh);

        for (e, d) in t.edges().into_iter().zip(n) {
            assert_eq!(d, e.dual());
            assert_eq!(mesh.origin(d), mesh.destination(e));
        }
    }
}
