//! Emission strategies shared by every traversal.
//!
//! A traversal decides *which* faces to visit; the emitter decides what a
//! visited face looks like to the caller. Both scanners and the region
//! walker hand every face to [`claim_face`], which marks it, filters ghosts
//! and forwards the survivors to the emitter.

use log::trace;

use super::marks::EdgeMarkSet;
use super::triangle::SimpleTriangle;
use super::TraversalSummary;
use crate::mesh::TriangulatedMesh;

/// Receives each non-ghost face found by a traversal.
pub(crate) trait FaceEmitter<E, V> {
    fn emit(&mut self, edges: [E; 3], vertices: [V; 3]);
}

/// Emits the three vertices in forward order.
pub(crate) struct VertexSink<F>(pub(crate) F);

impl<E, V, F> FaceEmitter<E, V> for VertexSink<F>
where
    F: FnMut([V; 3]),
{
    #[inline]
    fn emit(&mut self, _edges: [E; 3], vertices: [V; 3]) {
        (self.0)(vertices)
    }
}

/// Emits a [`SimpleTriangle`] over the three bounding edges.
pub(crate) struct SimpleTriangleSink<F>(pub(crate) F);

impl<E, V, F> FaceEmitter<E, V> for SimpleTriangleSink<F>
where
    E: Copy,
    F: FnMut(SimpleTriangle<E>),
{
    #[inline]
    fn emit(&mut self, [a, b, c]: [E; 3], _vertices: [V; 3]) {
        (self.0)(SimpleTriangle::new(a, b, c))
    }
}

/// Mark the face on the left of `e` and emit it unless it is a ghost.
///
/// Returns the face's forward and reverse edges. The caller must have
/// checked that `e` is unmarked.
pub(crate) fn claim_face<M, S>(
    mesh: &M,
    e: M::Edge,
    marks: &mut EdgeMarkSet,
    emitter: &mut S,
    summary: &mut TraversalSummary,
) -> (M::Edge, M::Edge)
where
    M: TriangulatedMesh,
    S: FaceEmitter<M::Edge, M::Vertex>,
{
    let f = mesh.forward(e);
    let r = mesh.reverse(e);
    marks.mark_face([mesh.edge_index(e), mesh.edge_index(f), mesh.edge_index(r)]);
    summary.faces_visited += 1;

    match (mesh.origin(e), mesh.origin(f), mesh.origin(r)) {
        (Some(a), Some(b), Some(c)) => {
            trace!("emit {:?} {:?} {:?}", a, b, c);
            emitter.emit([e, f, r], [a, b, c]);
            summary.triangles_emitted += 1;
        }
        _ => summary.ghosts_suppressed += 1,
    }
    (f, r)
}
