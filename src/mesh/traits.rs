//! Contracts between the triangle collectors and a TIN implementation.
//!
//! The collectors never look inside a mesh. They read topology through
//! [`TriangulatedMesh`], query constraints through [`Constraint`], and only
//! need [`VertexPositions`] for the geometric helpers on
//! [`SimpleTriangle`](crate::collect::SimpleTriangle).
//!
//! Edges are plain ids, and every topological query goes through the mesh,
//! the same way a half-edge mesh answers `next(he)` or `twin(he)`.

use std::fmt::Debug;

use nalgebra::Point3;

/// Read-only view of a quad-edge triangulation.
///
/// Implementations must keep the quad-edge invariants: `dual(dual(e)) == e`,
/// `forward(forward(forward(e))) == e`, `reverse(e) == forward(forward(e))`,
/// and every [`edge_index`](Self::edge_index) in
/// `0..=maximum_edge_allocation_index()` with distinct values for an edge and
/// its dual.
pub trait TriangulatedMesh {
    /// Vertex identity. The ghost vertex is reported as `None`.
    type Vertex: Copy + Eq + Debug;

    /// Directed edge handle.
    type Edge: Copy + Eq + Debug;

    /// Constraint handle yielded by [`constraints`](Self::constraints).
    type ConstraintRef<'a>: Constraint<Mesh = Self>
    where
        Self: 'a;

    /// Whether the mesh holds at least one real triangle.
    fn is_bootstrapped(&self) -> bool;

    /// Largest edge index ever handed out by the mesh.
    ///
    /// This may be well above twice the live edge count when edges have
    /// been freed and their indices are waiting to be reused.
    fn maximum_edge_allocation_index(&self) -> usize;

    /// One representative directed edge per undirected edge.
    fn base_edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    /// Constraints attached to the mesh, in insertion order.
    fn constraints(&self) -> impl Iterator<Item = Self::ConstraintRef<'_>> + '_;

    /// Dense index used to address per-edge flags.
    fn edge_index(&self, e: Self::Edge) -> usize;

    /// Origin vertex of `e`, or `None` for the ghost vertex.
    fn origin(&self, e: Self::Edge) -> Option<Self::Vertex>;

    /// The same undirected edge, opposite orientation.
    fn dual(&self, e: Self::Edge) -> Self::Edge;

    /// Next edge around the face on the left of `e`.
    fn forward(&self, e: Self::Edge) -> Self::Edge;

    /// Previous edge around the face on the left of `e`.
    fn reverse(&self, e: Self::Edge) -> Self::Edge;

    /// Whether `e` lies on the border of a constrained region.
    fn is_region_border(&self, e: Self::Edge) -> bool;

    /// Destination vertex of `e`.
    #[inline]
    fn destination(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.origin(self.dual(e))
    }

    /// Whether either endpoint of `e` is the ghost vertex.
    #[inline]
    fn is_ghost_edge(&self, e: Self::Edge) -> bool {
        self.origin(e).is_none() || self.destination(e).is_none()
    }
}

/// A constraint as seen by the region walker.
pub trait Constraint {
    /// The mesh type that manages this constraint.
    type Mesh: TriangulatedMesh;

    /// The mesh this constraint was added to, if any.
    fn managing_mesh(&self) -> Option<&Self::Mesh>;

    /// Whether the constraint bounds a region (interior to the left).
    fn defines_constrained_region(&self) -> bool;

    /// An edge of the constraint whose left face lies inside the region.
    fn linking_edge(&self) -> Option<<Self::Mesh as TriangulatedMesh>::Edge>;
}

/// Meshes whose vertices carry coordinates.
pub trait VertexPositions: TriangulatedMesh {
    /// Position of a (non-ghost) vertex.
    fn vertex_position(&self, v: Self::Vertex) -> Point3<f64>;
}
