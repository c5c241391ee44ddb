//! TIN construction from face-vertex lists.
//!
//! The builder assembles the quad-edge topology of a triangulation the
//! caller already has; it does not triangulate points. Triangles must be
//! counter-clockwise in the x/y plane and form a manifold surface whose hull
//! is a single simple loop, so meshes with holes are rejected. The hull is
//! closed with ghost faces so every directed edge has a face on its left.

use std::collections::{HashMap, HashSet};

use log::debug;
use nalgebra::Point3;

use super::index::{EdgeId, MeshIndex, VertexId};
use super::quadedge::QuadEdgeMesh;
use crate::error::{Result, TinError};

/// A vertex key where `None` stands for the ghost vertex.
type Key = Option<usize>;

/// Options for [`build_tin_with_options`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Edge pairs to allocate before the real edges and free afterwards.
    ///
    /// This leaves a gap of recycled indices below the live edges, the way
    /// a TIN looks after edges have been removed.
    pub reserved_edge_pairs: usize,
}

impl BuildOptions {
    /// Set the number of reserved edge pairs.
    pub fn with_reserved_edge_pairs(mut self, pairs: usize) -> Self {
        self.reserved_edge_pairs = pairs;
        self
    }
}

/// Build a TIN from vertices and counter-clockwise triangles.
///
/// # Example
/// ```
/// use tinwalk::mesh::{build_tin, QuadEdgeMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let tin: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 2]]).unwrap();
/// assert_eq!(tin.num_triangles(), 1);
/// // Three real edges plus three edges to the ghost vertex.
/// assert_eq!(tin.num_edges(), 6);
/// ```
pub fn build_tin<I: MeshIndex>(
    vertices: &[Point3<f64>],
    triangles: &[[usize; 3]],
) -> Result<QuadEdgeMesh<I>> {
    build_tin_with_options(vertices, triangles, &BuildOptions::default())
}

/// Build a TIN with explicit [`BuildOptions`].
pub fn build_tin_with_options<I: MeshIndex>(
    vertices: &[Point3<f64>],
    triangles: &[[usize; 3]],
    options: &BuildOptions,
) -> Result<QuadEdgeMesh<I>> {
    if triangles.is_empty() {
        return Err(TinError::EmptyMesh);
    }
    for (ti, tri) in triangles.iter().enumerate() {
        validate_triangle(vertices, ti, tri)?;
    }

    let mut mesh = QuadEdgeMesh::with_capacity(vertices.len(), triangles.len());
    for &p in vertices {
        mesh.add_vertex(p);
    }

    let reserved: Vec<EdgeId<I>> = (0..options.reserved_edge_pairs)
        .map(|_| mesh.edges.allocate(None, None))
        .collect();

    let mut edge_map: HashMap<(Key, Key), EdgeId<I>> = HashMap::new();

    // Real faces.
    for tri in triangles {
        attach_face(&mut mesh, &mut edge_map, tri.map(Some)).map_err(|(v0, v1)| {
            TinError::NonManifoldEdge {
                v0: v0.unwrap_or(usize::MAX),
                v1: v1.unwrap_or(usize::MAX),
            }
        })?;
    }

    // Hull edges are those whose twin never appeared; walk them in face order
    // so edge numbering does not depend on hash order.
    let hull: Vec<(usize, usize)> = triangles
        .iter()
        .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
        .filter(|&(a, b)| !edge_map.contains_key(&(Some(b), Some(a))))
        .collect();

    // Ghost faces: hull edge a -> b gets [b, a, ghost] on its right.
    for &(a, b) in &hull {
        attach_face(&mut mesh, &mut edge_map, [Some(b), Some(a), None])
            .map_err(|(v0, v1)| TinError::NonManifoldBoundary {
                vertex: v0.or(v1).unwrap_or(a),
            })?;
    }

    // Every directed edge must now have its twin.
    if let Some(&(u, v)) = edge_map.keys().find(|&&(u, v)| !edge_map.contains_key(&(v, u))) {
        return Err(TinError::NonManifoldBoundary {
            vertex: u.or(v).unwrap_or(0),
        });
    }

    check_single_hull_loop(&hull)?;

    for e in reserved {
        mesh.edges.deallocate(e);
    }

    mesh.num_triangles = triangles.len();
    debug!(
        "built TIN: {} vertices, {} triangles, {} hull edges, {} edges (max index {})",
        mesh.num_vertices(),
        mesh.num_triangles,
        hull.len(),
        mesh.num_edges(),
        mesh.edges.max_allocation_index()
    );
    Ok(mesh)
}

/// Follow the hull from its first edge; it must close after every hull edge.
fn check_single_hull_loop(hull: &[(usize, usize)]) -> Result<()> {
    let Some(&(start, _)) = hull.first() else {
        return Ok(());
    };
    let next: HashMap<usize, usize> = hull.iter().copied().collect();

    let mut on_loop = HashSet::with_capacity(hull.len());
    let mut v = start;
    while on_loop.insert(v) {
        v = match next.get(&v) {
            Some(&b) => b,
            None => return Err(TinError::NonManifoldBoundary { vertex: v }),
        };
    }

    match hull.iter().find(|(a, _)| !on_loop.contains(a)) {
        Some(&(vertex, _)) => Err(TinError::NonManifoldBoundary { vertex }),
        None => Ok(()),
    }
}

fn validate_triangle(vertices: &[Point3<f64>], ti: usize, tri: &[usize; 3]) -> Result<()> {
    for &vi in tri {
        if vi >= vertices.len() {
            return Err(TinError::InvalidVertexIndex {
                triangle: ti,
                vertex: vi,
            });
        }
    }
    if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
        return Err(TinError::DegenerateTriangle { triangle: ti });
    }

    let [p0, p1, p2] = tri.map(|i| vertices[i]);
    let area2 = (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x);
    if area2 == 0.0 {
        return Err(TinError::DegenerateTriangle { triangle: ti });
    }
    if area2 < 0.0 {
        return Err(TinError::ClockwiseTriangle { triangle: ti });
    }
    Ok(())
}

/// Create or reuse the three directed edges of a face and link them.
///
/// Fails with the offending directed edge if it already bounds another face.
fn attach_face<I: MeshIndex>(
    mesh: &mut QuadEdgeMesh<I>,
    edge_map: &mut HashMap<(Key, Key), EdgeId<I>>,
    keys: [Key; 3],
) -> std::result::Result<(), (Key, Key)> {
    let mut sides = [EdgeId::<I>::new(0); 3];
    for i in 0..3 {
        let (u, v) = (keys[i], keys[(i + 1) % 3]);
        if edge_map.contains_key(&(u, v)) {
            return Err((u, v));
        }
        let e = match edge_map.get(&(v, u)) {
            Some(&twin) => twin.dual(),
            None => mesh.edges.allocate(u.map(VertexId::new), v.map(VertexId::new)),
        };
        edge_map.insert((u, v), e);
        sides[i] = e;
    }
    mesh.link_face(sides[0], sides[1], sides[2]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::traits::TriangulatedMesh;

    fn grid_vertices(n: usize) -> Vec<Point3<f64>> {
        let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
        for j in 0..=n {
            for i in 0..=n {
                vertices.push(Point3::new(i as f64, j as f64, 0.0));
            }
        }
        vertices
    }

    fn grid_triangles(n: usize) -> Vec<[usize; 3]> {
        let mut faces = Vec::with_capacity(n * n * 2);
        for j in 0..n {
            for i in 0..n {
                let v00 = j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;
                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }
        faces
    }

    #[test]
    fn test_single_triangle() {
        let vertices = grid_vertices(1);
        let mesh: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 3]]).unwrap();

        assert!(mesh.is_valid());
        assert!(mesh.is_bootstrapped());
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.num_edges(), 6);
        assert_eq!(mesh.maximum_edge_allocation_index(), 11);
    }

    #[test]
    fn test_grid_counts() {
        let n = 4;
        let mesh: QuadEdgeMesh = build_tin(&grid_vertices(n), &grid_triangles(n)).unwrap();
        assert!(mesh.is_valid());

        // Interior + hull edges, plus one ghost edge per hull vertex.
        let real_edges = 2 * n * (n + 1) + n * n;
        let hull = 4 * n;
        assert_eq!(mesh.num_edges(), real_edges + hull);
        assert_eq!(mesh.base_edges().filter(|&e| mesh.is_ghost_edge(e)).count(), hull);
    }

    #[test]
    fn test_faces_link_counter_clockwise() {
        let mesh: QuadEdgeMesh = build_tin(&grid_vertices(1), &[[0, 1, 3]]).unwrap();
        let e = mesh.find_edge(VertexId::new(0), VertexId::new(1)).unwrap();
        let f = mesh.forward(e);
        let r = mesh.reverse(e);

        assert_eq!(mesh.origin(f), Some(VertexId::new(1)));
        assert_eq!(mesh.origin(r), Some(VertexId::new(3)));
        assert_eq!(mesh.forward(f), r);

        // The hull edge's twin bounds a ghost face.
        let d = e.dual();
        assert_eq!(mesh.destination(mesh.forward(d)), None);
    }

    #[test]
    fn test_reserved_pairs_leave_index_gap() {
        let options = BuildOptions::default().with_reserved_edge_pairs(10);
        let mesh: QuadEdgeMesh =
            build_tin_with_options(&grid_vertices(1), &[[0, 1, 3], [0, 3, 2]], &options).unwrap();

        assert!(mesh.is_valid());
        assert_eq!(mesh.num_edges(), 9);
        assert_eq!(mesh.maximum_edge_allocation_index(), 2 * (10 + 9) - 1);
        assert!(mesh.base_edges().all(|e| e.index() >= 20));
    }

    #[test]
    fn test_invalid_input() {
        let vertices = grid_vertices(1);

        let err = build_tin::<u32>(&vertices, &[]).unwrap_err();
        assert_eq!(err, TinError::EmptyMesh);

        let err = build_tin::<u32>(&vertices, &[[0, 1, 7]]).unwrap_err();
        assert_eq!(err, TinError::InvalidVertexIndex { triangle: 0, vertex: 7 });

        let err = build_tin::<u32>(&vertices, &[[0, 1, 1]]).unwrap_err();
        assert_eq!(err, TinError::DegenerateTriangle { triangle: 0 });

        let err = build_tin::<u32>(&vertices, &[[0, 3, 1]]).unwrap_err();
        assert_eq!(err, TinError::ClockwiseTriangle { triangle: 0 });

        let collinear = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let err = build_tin::<u32>(&collinear, &[[0, 1, 2]]).unwrap_err();
        assert_eq!(err, TinError::DegenerateTriangle { triangle: 0 });
    }

    #[test]
    fn test_duplicate_face_is_non_manifold() {
        let err = build_tin::<u32>(&grid_vertices(1), &[[0, 1, 3], [0, 1, 3]]).unwrap_err();
        assert_eq!(err, TinError::NonManifoldEdge { v0: 0, v1: 1 });
    }

    #[test]
    fn test_second_hull_loop_is_rejected() {
        // A 3x3 grid with its centre cell left out has an inner hull loop.
        let n = 3;
        let centre = [5, 6, 9, 10];
        let faces: Vec<_> = grid_triangles(n)
            .into_iter()
            .filter(|t| !t.iter().all(|v| centre.contains(v)))
            .collect();
        assert_eq!(faces.len(), 16);

        let err = build_tin::<u32>(&grid_vertices(n), &faces).unwrap_err();
        match err {
            TinError::NonManifoldBoundary { vertex } => assert!(centre.contains(&vertex)),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_pinched_hull_is_rejected() {
        // Two triangles touching at vertex 0 only.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
        ];
        let err = build_tin::<u32>(&vertices, &[[0, 1, 2], [0, 3, 4]]).unwrap_err();
        assert!(matches!(err, TinError::NonManifoldBoundary { .. }));
    }
}
