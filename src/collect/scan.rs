//! Full-mesh triangle scans.

use log::debug;

use super::emit::{claim_face, FaceEmitter, SimpleTriangleSink, VertexSink};
use super::marks::EdgeMarkSet;
use super::triangle::SimpleTriangle;
use super::{CollectOptions, TraversalSummary};
use crate::mesh::TriangulatedMesh;

/// Visit every real triangle of a TIN as three vertices.
///
/// Vertices come in the mesh's forward order around the face. Triangles
/// touching the ghost vertex are skipped. A TIN that has not been
/// bootstrapped yields nothing.
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
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let tin: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 2]]).unwrap();
///
/// let mut triangles = Vec::new();
/// visit_triangles(&tin, |t| triangles.push(t));
/// assert_eq!(triangles, vec![[VertexId::new(0), VertexId::new(1), VertexId::new(2)]]);
/// ```
pub fn visit_triangles<M, F>(mesh: &M, sink: F) -> TraversalSummary
where
    M: TriangulatedMesh,
    F: FnMut([M::Vertex; 3]),
{
    visit_triangles_with_options(mesh, &CollectOptions::default(), sink)
}

/// [`visit_triangles`] with explicit [`CollectOptions`].
pub fn visit_triangles_with_options<M, F>(
    mesh: &M,
    options: &CollectOptions,
    sink: F,
) -> TraversalSummary
where
    M: TriangulatedMesh,
    F: FnMut([M::Vertex; 3]),
{
    scan_faces(mesh, options, &mut VertexSink(sink))
}

/// Visit every real triangle of a TIN as a [`SimpleTriangle`].
pub fn visit_simple_triangles<M, F>(mesh: &M, sink: F) -> TraversalSummary
where
    M: TriangulatedMesh,
    F: FnMut(SimpleTriangle<M::Edge>),
{
    visit_simple_triangles_with_options(mesh, &CollectOptions::default(), sink)
}

/// [`visit_simple_triangles`] with explicit [`CollectOptions`].
pub fn visit_simple_triangles_with_options<M, F>(
    mesh: &M,
    options: &CollectOptions,
    sink: F,
) -> TraversalSummary
where
    M: TriangulatedMesh,
    F: FnMut(SimpleTriangle<M::Edge>),
{
    scan_faces(mesh, options, &mut SimpleTriangleSink(sink))
}

/// All real triangles of a TIN, in scan order.
pub fn collect_triangles<M: TriangulatedMesh>(mesh: &M) -> Vec<[M::Vertex; 3]> {
    let mut triangles = Vec::new();
    visit_triangles(mesh, |t| triangles.push(t));
    triangles
}

/// All real triangles of a TIN as [`SimpleTriangle`]s, in scan order.
pub fn collect_simple_triangles<M: TriangulatedMesh>(mesh: &M) -> Vec<SimpleTriangle<M::Edge>> {
    let mut triangles = Vec::new();
    visit_simple_triangles(mesh, |t| triangles.push(t));
    triangles
}

fn scan_faces<M, S>(mesh: &M, options: &CollectOptions, emitter: &mut S) -> TraversalSummary
where
    M: TriangulatedMesh,
    S: FaceEmitter<M::Edge, M::Vertex>,
{
    let mut summary = TraversalSummary::default();
    if !mesh.is_bootstrapped() {
        debug!("TIN is not bootstrapped; no triangles to visit");
        return summary;
    }

    let max_index = mesh.maximum_edge_allocation_index();
    let mut marks = EdgeMarkSet::with_max_index(max_index, options.mark_slack);
    debug!(
        "scanning TIN: max edge index {}, {} mark flags",
        max_index,
        marks.capacity()
    );

    // The enumerator yields base edges only, and some faces are bounded by
    // dual sides alone, so both sides of every edge are tried. A ghost edge
    // has ghost faces on both sides; claiming them marks without emitting.
    for e in mesh.base_edges() {
        for side in [e, mesh.dual(e)] {
            if !marks.is_marked(mesh.edge_index(side)) {
                claim_face(mesh, side, &mut marks, emitter, &mut summary);
            }
        }
    }

    debug!("scan finished: {:?}", summary);
    summary
}
