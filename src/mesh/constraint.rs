//! Polygon and linear constraints.
//!
//! A constraint is a chain of vertices whose consecutive segments are edges
//! of the TIN. A closed polygon defines a *constrained region*: the area to
//! the left of its segments as they are traversed. A counter-clockwise
//! polygon therefore encloses its region, while a clockwise polygon cuts a
//! hole and its region is everything between the polygon and the hull.
//!
//! Adding a polygon flags every one of its edges as a region border, and
//! records the first segment as the linking edge that seeds region walks.

use log::debug;

use super::index::{ConstraintId, EdgeId, MeshIndex, VertexId};
use super::quadedge::QuadEdgeMesh;
use super::traits::Constraint;
use crate::error::{Result, TinError};

/// A constraint description, detached until added to a TIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonConstraint<I: MeshIndex = u32> {
    vertices: Vec<VertexId<I>>,
    defines_region: bool,
    pub(crate) id: Option<ConstraintId<I>>,
    pub(crate) linking_edge: Option<EdgeId<I>>,
    pub(crate) edges: Vec<EdgeId<I>>,
}

impl<I: MeshIndex> PolygonConstraint<I> {
    /// A closed polygon defining a constrained region.
    ///
    /// The closing segment is implied; repeating the first vertex at the end
    /// is accepted and ignored.
    pub fn new(mut vertices: Vec<VertexId<I>>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self {
            vertices,
            defines_region: true,
            id: None,
            linking_edge: None,
            edges: Vec::new(),
        }
    }

    /// An open polyline. It constrains edges but bounds no region.
    pub fn linear(vertices: Vec<VertexId<I>>) -> Self {
        Self {
            vertices,
            defines_region: false,
            id: None,
            linking_edge: None,
            edges: Vec::new(),
        }
    }

    /// The constraint's vertices in traversal order.
    pub fn vertices(&self) -> &[VertexId<I>] {
        &self.vertices
    }

    /// Whether this is a closed polygon.
    pub fn is_polygon(&self) -> bool {
        self.defines_region
    }

    /// Identifier assigned when the constraint was added to a TIN.
    pub fn id(&self) -> Option<ConstraintId<I>> {
        self.id
    }

    /// Directed TIN edges along the constraint, in traversal order.
    ///
    /// Empty until the constraint is added to a TIN.
    pub fn edges(&self) -> &[EdgeId<I>] {
        &self.edges
    }

    fn segments(&self) -> impl Iterator<Item = (VertexId<I>, VertexId<I>)> + '_ {
        let closing = if self.defines_region {
            self.vertices.last().copied().zip(self.vertices.first().copied())
        } else {
            None
        };
        self.vertices
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }
}

/// A detached constraint has no managing TIN.
impl<I: MeshIndex> Constraint for PolygonConstraint<I> {
    type Mesh = QuadEdgeMesh<I>;

    fn managing_mesh(&self) -> Option<&QuadEdgeMesh<I>> {
        None
    }

    fn defines_constrained_region(&self) -> bool {
        self.defines_region
    }

    fn linking_edge(&self) -> Option<EdgeId<I>> {
        self.linking_edge
    }
}

/// A constraint registered with a TIN, borrowed together with that TIN.
#[derive(Debug, Clone, Copy)]
pub struct ManagedConstraint<'a, I: MeshIndex = u32> {
    mesh: &'a QuadEdgeMesh<I>,
    polygon: &'a PolygonConstraint<I>,
}

impl<'a, I: MeshIndex> ManagedConstraint<'a, I> {
    pub(crate) fn new(mesh: &'a QuadEdgeMesh<I>, polygon: &'a PolygonConstraint<I>) -> Self {
        Self { mesh, polygon }
    }

    /// The constraint description.
    pub fn polygon(&self) -> &'a PolygonConstraint<I> {
        self.polygon
    }

    /// The managing TIN.
    pub fn mesh(&self) -> &'a QuadEdgeMesh<I> {
        self.mesh
    }
}

impl<'a, I: MeshIndex> Constraint for ManagedConstraint<'a, I> {
    type Mesh = QuadEdgeMesh<I>;

    fn managing_mesh(&self) -> Option<&QuadEdgeMesh<I>> {
        Some(self.mesh)
    }

    fn defines_constrained_region(&self) -> bool {
        self.polygon.defines_region
    }

    fn linking_edge(&self) -> Option<EdgeId<I>> {
        self.polygon.linking_edge
    }
}

impl<I: MeshIndex> QuadEdgeMesh<I> {
    /// Attach a constraint to the TIN.
    ///
    /// Every segment must already be an edge of the TIN; this does not
    /// insert edges. Segments are flagged as constrained, and polygon
    /// segments additionally as region borders.
    pub fn add_constraint(&mut self, mut constraint: PolygonConstraint<I>) -> Result<ConstraintId<I>> {
        let required = if constraint.defines_region { 3 } else { 2 };
        if constraint.vertices.len() < required {
            return Err(TinError::ConstraintTooShort {
                required,
                actual: constraint.vertices.len(),
            });
        }
        if let Some(v) = constraint
            .vertices
            .iter()
            .find(|v| v.index() >= self.num_vertices())
        {
            return Err(TinError::invalid_param(
                "vertex",
                v.index(),
                "not a vertex of the TIN",
            ));
        }

        let edges = constraint
            .segments()
            .map(|(a, b)| {
                self.find_edge(a, b).ok_or(TinError::MissingConstraintEdge {
                    v0: a.index(),
                    v1: b.index(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for &e in &edges {
            let pair = self.edges.pair_mut(e);
            pair.constrained = true;
            if constraint.defines_region {
                pair.region_border = true;
            }
        }

        let id = ConstraintId::new(self.constraints.len());
        constraint.id = Some(id);
        constraint.linking_edge = edges.first().copied();
        constraint.edges = edges;
        debug!(
            "added constraint {:?}: {} segments, region={}",
            id,
            constraint.edges.len(),
            constraint.defines_region
        );
        self.constraints.push(constraint);
        Ok(id)
    }
}
