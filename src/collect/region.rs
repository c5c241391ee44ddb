//! Flood fill over constrained regions.
//!
//! The walk starts at a constraint's linking edge, whose left face lies in
//! the region, and spreads across faces with an explicit stack. It never
//! steps across an edge flagged as a region border; nothing else confines
//! it, so no geometric test is involved.
//!
//! A clockwise polygon defines the region *outside* itself, reaching to the
//! hull of the TIN. Such a walk runs into ghost faces, which are marked and
//! passed over like any other face but never emitted.

use log::debug;

use super::emit::{claim_face, FaceEmitter, SimpleTriangleSink, VertexSink};
use super::marks::EdgeMarkSet;
use super::triangle::SimpleTriangle;
use super::{CollectOptions, TraversalSummary};
use crate::error::{ConstraintDefect, Result};
use crate::mesh::{Constraint, TriangulatedMesh};

type VertexOf<C> = <<C as Constraint>::Mesh as TriangulatedMesh>::Vertex;
type EdgeOf<C> = <<C as Constraint>::Mesh as TriangulatedMesh>::Edge;

/// Visit the triangles of every constrained region of a TIN.
///
/// Each region is walked independently with fresh marks, so a triangle
/// lying in two overlapping regions is visited twice. Linear constraints
/// are skipped. A TIN that has not been bootstrapped yields nothing.
pub fn visit_triangles_constrained<M, F>(mesh: &M, sink: F) -> Result<TraversalSummary>
where
    M: TriangulatedMesh,
    F: FnMut([M::Vertex; 3]),
{
    visit_triangles_constrained_with_options(mesh, &CollectOptions::default(), sink)
}

/// [`visit_triangles_constrained`] with explicit [`CollectOptions`].
pub fn visit_triangles_constrained_with_options<M, F>(
    mesh: &M,
    options: &CollectOptions,
    sink: F,
) -> Result<TraversalSummary>
where
    M: TriangulatedMesh,
    F: FnMut([M::Vertex; 3]),
{
    let mut summary = TraversalSummary::default();
    if !mesh.is_bootstrapped() {
        debug!("TIN is not bootstrapped; no constrained regions to visit");
        return Ok(summary);
    }

    let mut emitter = VertexSink(sink);
    for constraint in mesh.constraints() {
        if constraint.defines_constrained_region() {
            summary.merge(&walk_constraint(&constraint, options, &mut emitter)?);
        }
    }
    Ok(summary)
}

/// Visit the triangles inside one constrained region.
///
/// # Errors
///
/// [`TinError::InvalidArgument`](crate::error::TinError::InvalidArgument)
/// if the constraint is not managed by a TIN, does not define a region, or
/// has no linking edge.
///
/// # Example
///
/// ```
/// use tinwalk::prelude::*;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let mut tin: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
/// let ring = [0, 1, 2].into_iter().map(VertexId::new).collect();
/// let id = tin.add_constraint(PolygonConstraint::new(ring)).unwrap();
///
/// let region = tin.constraint(id).unwrap();
/// let mut triangles = Vec::new();
/// visit_triangles_for_constrained_region(&region, |t| triangles.push(t)).unwrap();
/// assert_eq!(triangles.len(), 1);
/// ```
pub fn visit_triangles_for_constrained_region<C, F>(constraint: &C, sink: F) -> Result<TraversalSummary>
where
    C: Constraint,
    F: FnMut([VertexOf<C>; 3]),
{
    visit_triangles_for_constrained_region_with_options(constraint, &CollectOptions::default(), sink)
}

/// [`visit_triangles_for_constrained_region`] with explicit [`CollectOptions`].
pub fn visit_triangles_for_constrained_region_with_options<C, F>(
    constraint: &C,
    options: &CollectOptions,
    sink: F,
) -> Result<TraversalSummary>
where
    C: Constraint,
    F: FnMut([VertexOf<C>; 3]),
{
    walk_constraint(constraint, options, &mut VertexSink(sink))
}

/// Visit the triangles inside one constrained region as [`SimpleTriangle`]s.
pub fn visit_simple_triangles_for_constrained_region<C, F>(
    constraint: &C,
    sink: F,
) -> Result<TraversalSummary>
where
    C: Constraint,
    F: FnMut(SimpleTriangle<EdgeOf<C>>),
{
    visit_simple_triangles_for_constrained_region_with_options(
        constraint,
        &CollectOptions::default(),
        sink,
    )
}

/// [`visit_simple_triangles_for_constrained_region`] with explicit [`CollectOptions`].
pub fn visit_simple_triangles_for_constrained_region_with_options<C, F>(
    constraint: &C,
    options: &CollectOptions,
    sink: F,
) -> Result<TraversalSummary>
where
    C: Constraint,
    F: FnMut(SimpleTriangle<EdgeOf<C>>),
{
    walk_constraint(constraint, options, &mut SimpleTriangleSink(sink))
}

/// All triangles inside one constrained region, in walk order.
pub fn collect_region_triangles<C: Constraint>(constraint: &C) -> Result<Vec<[VertexOf<C>; 3]>> {
    let mut triangles = Vec::new();
    visit_triangles_for_constrained_region(constraint, |t| triangles.push(t))?;
    Ok(triangles)
}

fn walk_constraint<C, S>(constraint: &C, options: &CollectOptions, emitter: &mut S) -> Result<TraversalSummary>
where
    C: Constraint,
    S: FaceEmitter<EdgeOf<C>, VertexOf<C>>,
{
    let mesh = constraint
        .managing_mesh()
        .ok_or(ConstraintDefect::Unmanaged)?;
    if !constraint.defines_constrained_region() {
        return Err(ConstraintDefect::NotARegion.into());
    }
    let link = constraint
        .linking_edge()
        .ok_or(ConstraintDefect::MissingLinkingEdge)?;

    if !mesh.is_bootstrapped() {
        debug!("TIN is not bootstrapped; no region to walk");
        return Ok(TraversalSummary::default());
    }
    Ok(flood_fill(mesh, link, options, emitter))
}

fn flood_fill<M, S>(mesh: &M, link: M::Edge, options: &CollectOptions, emitter: &mut S) -> TraversalSummary
where
    M: TriangulatedMesh,
    S: FaceEmitter<M::Edge, M::Vertex>,
{
    let max_index = mesh.maximum_edge_allocation_index();
    let mut marks = EdgeMarkSet::with_max_index(max_index, options.mark_slack);
    let mut stack = Vec::with_capacity(options.stack_capacity);
    let mut summary = TraversalSummary {
        regions_walked: 1,
        ..TraversalSummary::default()
    };
    debug!(
        "walking region from {:?}: max edge index {}, {} mark flags",
        link,
        max_index,
        marks.capacity()
    );

    stack.push(link);
    while let Some(e) = stack.pop() {
        // An edge can be pushed from two faces before it is popped.
        if marks.is_marked(mesh.edge_index(e)) {
            continue;
        }
        let (f, r) = claim_face(mesh, e, &mut marks, emitter, &mut summary);

        for side in [f, r] {
            let next = mesh.dual(side);
            if marks.is_marked(mesh.edge_index(next)) {
                continue;
            }
            if mesh.is_region_border(side) {
                summary.border_crossings_refused += 1;
                continue;
            }
            stack.push(next);
        }
    }

    debug!("region walk finished: {:?}", summary);
    summary
}
