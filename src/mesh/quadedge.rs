//! Quad-edge storage for triangulated irregular networks.
//!
//! # Structure
//!
//! - Every undirected edge is a **pair** of directed edges living in one slot
//!   of an [`EdgePool`]. The base side has index `2 * slot` and its dual
//!   `2 * slot + 1`.
//! - Each side knows its **origin** (or `None` for the ghost vertex), its
//!   **forward** edge (next around the face on its left, counter-clockwise)
//!   and its **reverse** edge (previous around that face).
//! - Constraint flags are stored per pair, so both sides of an edge agree on
//!   whether it borders a constrained region.
//!
//! # Ghost Faces
//!
//! The exterior of the TIN is closed off by ghost faces. Each hull edge
//! `a -> b` (interior on the left) has a twin `b -> a` whose left face is
//! `[b, a, ghost]`. With that convention every directed edge has exactly one
//! triangle on its left, real or ghost.

use nalgebra::Point3;

use super::constraint::{ManagedConstraint, PolygonConstraint};
use super::index::{ConstraintId, EdgeId, MeshIndex, VertexId};
use super::traits::{TriangulatedMesh, VertexPositions};

/// One direction of a quad-edge pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeSide<I: MeshIndex> {
    pub(crate) origin: Option<VertexId<I>>,
    pub(crate) forward: EdgeId<I>,
    pub(crate) reverse: EdgeId<I>,
}

/// Both directions of an undirected edge plus the flags they share.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgePair<I: MeshIndex> {
    pub(crate) sides: [EdgeSide<I>; 2],
    pub(crate) live: bool,
    pub(crate) constrained: bool,
    pub(crate) region_border: bool,
}

impl<I: MeshIndex> EdgePair<I> {
    fn detached(slot: usize) -> Self {
        // Until linked into faces, each side loops onto itself.
        let base = EdgeId::base_of_slot(slot);
        let dual = base.dual();
        Self {
            sides: [
                EdgeSide {
                    origin: None,
                    forward: base,
                    reverse: base,
                },
                EdgeSide {
                    origin: None,
                    forward: dual,
                    reverse: dual,
                },
            ],
            live: false,
            constrained: false,
            region_border: false,
        }
    }
}

/// Slot allocator for edge pairs.
///
/// Freed slots are recycled last-in first-out. The pool never shrinks, so
/// [`max_allocation_index`](Self::max_allocation_index) reports the highest
/// index ever handed out, not the highest live one.
#[derive(Debug, Clone, Default)]
pub struct EdgePool<I: MeshIndex = u32> {
    pairs: Vec<EdgePair<I>>,
    free: Vec<usize>,
}

impl<I: MeshIndex> EdgePool<I> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create a pool with room for `num_pairs` undirected edges.
    pub fn with_capacity(num_pairs: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(num_pairs),
            free: Vec::new(),
        }
    }

    /// Allocate a pair running `a -> b` and return its base side.
    pub fn allocate(&mut self, a: Option<VertexId<I>>, b: Option<VertexId<I>>) -> EdgeId<I> {
        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.pairs.push(EdgePair::detached(self.pairs.len()));
                self.pairs.len() - 1
            }
        };
        let pair = &mut self.pairs[slot];
        *pair = EdgePair::detached(slot);
        pair.live = true;
        pair.sides[0].origin = a;
        pair.sides[1].origin = b;
        EdgeId::base_of_slot(slot)
    }

    /// Return the pair containing `e` to the free list.
    ///
    /// Edges that are already free or were never allocated here are ignored.
    pub fn deallocate(&mut self, e: EdgeId<I>) {
        let slot = e.slot();
        match self.pairs.get_mut(slot) {
            Some(pair) if pair.live => {
                *pair = EdgePair::detached(slot);
                self.free.push(slot);
            }
            _ => {}
        }
    }

    /// Number of live pairs.
    pub fn num_live_pairs(&self) -> usize {
        self.pairs.len() - self.free.len()
    }

    /// Highest edge index ever allocated (0 for an empty pool).
    pub fn max_allocation_index(&self) -> usize {
        (self.pairs.len() * 2).saturating_sub(1)
    }

    /// Base sides of all live pairs, in slot order.
    pub fn base_edges(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, pair)| pair.live)
            .map(|(slot, _)| EdgeId::base_of_slot(slot))
    }

    #[inline]
    pub(crate) fn pair(&self, e: EdgeId<I>) -> &EdgePair<I> {
        &self.pairs[e.slot()]
    }

    #[inline]
    pub(crate) fn pair_mut(&mut self, e: EdgeId<I>) -> &mut EdgePair<I> {
        &mut self.pairs[e.slot()]
    }

    #[inline]
    pub(crate) fn side(&self, e: EdgeId<I>) -> &EdgeSide<I> {
        &self.pairs[e.slot()].sides[e.side()]
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, e: EdgeId<I>) -> &mut EdgeSide<I> {
        &mut self.pairs[e.slot()].sides[e.side()]
    }
}

/// A triangulated irregular network stored as quad-edges.
///
/// Build one with [`build_tin`](super::build_tin); attach constraints with
/// [`add_constraint`](Self::add_constraint).
#[derive(Debug, Clone, Default)]
pub struct QuadEdgeMesh<I: MeshIndex = u32> {
    pub(crate) vertices: Vec<Point3<f64>>,
    pub(crate) edges: EdgePool<I>,
    pub(crate) constraints: Vec<PolygonConstraint<I>>,
    pub(crate) num_triangles: usize,
}

impl<I: MeshIndex> QuadEdgeMesh<I> {
    /// Create an empty, not yet bootstrapped TIN.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: EdgePool::new(),
            constraints: Vec::new(),
            num_triangles: 0,
        }
    }

    /// Create an empty TIN with pre-allocated storage.
    pub fn with_capacity(num_vertices: usize, num_triangles: usize) -> Self {
        // Euler: E = V + F - 1 for a disk; ghost faces add one pair per hull edge.
        let num_pairs = num_vertices + num_triangles + num_triangles / 2;
        Self {
            vertices: Vec::with_capacity(num_vertices),
            edges: EdgePool::with_capacity(num_pairs),
            constraints: Vec::new(),
            num_triangles: 0,
        }
    }

    // ==================== Accessors ====================

    /// Number of vertices (the ghost vertex is not counted).
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of live undirected edges, ghost edges included.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.num_live_pairs()
    }

    /// Number of real (non-ghost) triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.num_triangles
    }

    /// Number of attached constraints.
    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Position of a vertex.
    #[inline]
    pub fn position(&self, v: VertexId<I>) -> &Point3<f64> {
        &self.vertices[v.index()]
    }

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<I>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// The underlying edge pool.
    pub fn edge_pool(&self) -> &EdgePool<I> {
        &self.edges
    }

    /// Look up a registered constraint.
    pub fn constraint(&self, id: ConstraintId<I>) -> Option<ManagedConstraint<'_, I>> {
        self.constraints
            .get(id.index())
            .map(|polygon| ManagedConstraint::new(self, polygon))
    }

    // ==================== Topology Queries ====================

    /// Origin vertex of `e`; `None` is the ghost vertex.
    #[inline]
    pub fn origin(&self, e: EdgeId<I>) -> Option<VertexId<I>> {
        self.edges.side(e).origin
    }

    /// Destination vertex of `e`.
    #[inline]
    pub fn destination(&self, e: EdgeId<I>) -> Option<VertexId<I>> {
        self.origin(e.dual())
    }

    /// Next edge counter-clockwise around the left face.
    #[inline]
    pub fn forward(&self, e: EdgeId<I>) -> EdgeId<I> {
        self.edges.side(e).forward
    }

    /// Previous edge around the left face.
    #[inline]
    pub fn reverse(&self, e: EdgeId<I>) -> EdgeId<I> {
        self.edges.side(e).reverse
    }

    /// Whether the edge is a segment of any constraint.
    #[inline]
    pub fn is_constrained(&self, e: EdgeId<I>) -> bool {
        self.edges.pair(e).constrained
    }

    /// Whether the edge borders a constrained region.
    #[inline]
    pub fn is_region_border(&self, e: EdgeId<I>) -> bool {
        self.edges.pair(e).region_border
    }

    /// Find the directed edge running `a -> b`.
    pub fn find_edge(&self, a: VertexId<I>, b: VertexId<I>) -> Option<EdgeId<I>> {
        self.edges.base_edges().find_map(|e| {
            let (o, d) = (self.origin(e), self.destination(e));
            if o == Some(a) && d == Some(b) {
                Some(e)
            } else if o == Some(b) && d == Some(a) {
                Some(e.dual())
            } else {
                None
            }
        })
    }

    // ==================== Construction ====================

    /// Add a vertex and return its ID.
    pub fn add_vertex(&mut self, position: Point3<f64>) -> VertexId<I> {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(position);
        id
    }

    /// Link three edges into a face, in forward order.
    pub(crate) fn link_face(&mut self, e0: EdgeId<I>, e1: EdgeId<I>, e2: EdgeId<I>) {
        for (e, f, r) in [(e0, e1, e2), (e1, e2, e0), (e2, e0, e1)] {
            let side = self.edges.side_mut(e);
            side.forward = f;
            side.reverse = r;
        }
    }

    // ==================== Validation ====================

    /// Check the quad-edge invariants of every live edge.
    pub fn is_valid(&self) -> bool {
        for base in self.edges.base_edges() {
            for e in [base, base.dual()] {
                let f = self.forward(e);
                let r = self.reverse(e);
                if self.forward(f) != r || self.forward(r) != e {
                    return false;
                }
                if self.reverse(f) != e || self.reverse(r) != f {
                    return false;
                }
                if self.origin(f) != self.destination(e) {
                    return false;
                }
                if !self.edges.pair(f).live || !self.edges.pair(r).live {
                    return false;
                }
            }
            if self.origin(base).is_none() && self.destination(base).is_none() {
                return false;
            }
        }
        true
    }
}

impl<I: MeshIndex> TriangulatedMesh for QuadEdgeMesh<I> {
    type Vertex = VertexId<I>;
    type Edge = EdgeId<I>;
    type ConstraintRef<'a> = ManagedConstraint<'a, I>
    where
        Self: 'a;

    #[inline]
    fn is_bootstrapped(&self) -> bool {
        self.num_triangles > 0
    }

    #[inline]
    fn maximum_edge_allocation_index(&self) -> usize {
        self.edges.max_allocation_index()
    }

    fn base_edges(&self) -> impl Iterator<Item = EdgeId<I>> + '_ {
        self.edges.base_edges()
    }

    fn constraints(&self) -> impl Iterator<Item = ManagedConstraint<'_, I>> + '_ {
        self.constraints
            .iter()
            .map(move |polygon| ManagedConstraint::new(self, polygon))
    }

    #[inline]
    fn edge_index(&self, e: EdgeId<I>) -> usize {
        e.index()
    }

    #[inline]
    fn origin(&self, e: EdgeId<I>) -> Option<VertexId<I>> {
        QuadEdgeMesh::origin(self, e)
    }

    #[inline]
    fn dual(&self, e: EdgeId<I>) -> EdgeId<I> {
        e.dual()
    }

    #[inline]
    fn forward(&self, e: EdgeId<I>) -> EdgeId<I> {
        QuadEdgeMesh::forward(self, e)
    }

    #[inline]
    fn reverse(&self, e: EdgeId<I>) -> EdgeId<I> {
        QuadEdgeMesh::reverse(self, e)
    }

    #[inline]
    fn is_region_border(&self, e: EdgeId<I>) -> bool {
        QuadEdgeMesh::is_region_border(self, e)
    }
}

impl<I: MeshIndex> VertexPositions for QuadEdgeMesh<I> {
    #[inline]
    fn vertex_position(&self, v: VertexId<I>) -> Point3<f64> {
        *self.position(v)
    }
}
