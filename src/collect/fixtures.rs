//! Small hand-built TINs shared by the collector tests.

use std::collections::HashSet;

use nalgebra::Point3;

use crate::mesh::{build_tin, QuadEdgeMesh, VertexId};

/// A triangle identified by its unordered vertex set.
pub(crate) type FaceKey = [usize; 3];

pub(crate) fn key(t: [VertexId; 3]) -> FaceKey {
    let mut k = t.map(|v| v.index());
    k.sort_unstable();
    k
}

pub(crate) fn keys_of(triangles: &[[usize; 3]]) -> HashSet<FaceKey> {
    triangles
        .iter()
        .map(|t| {
            let mut k = *t;
            k.sort_unstable();
            k
        })
        .collect()
}

/// Grid vertex `(i, j)` in an `n x n` cell grid.
pub(crate) fn gv(n: usize, i: usize, j: usize) -> usize {
    j * (n + 1) + i
}

pub(crate) fn grid_vertices(n: usize) -> Vec<Point3<f64>> {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, (i * j) as f64));
        }
    }
    vertices
}

/// The two triangles of cell `(i, j)`, split along its rising diagonal.
pub(crate) fn cell_triangles(n: usize, i: usize, j: usize) -> [[usize; 3]; 2] {
    let v00 = gv(n, i, j);
    let v10 = gv(n, i + 1, j);
    let v01 = gv(n, i, j + 1);
    let v11 = gv(n, i + 1, j + 1);
    [[v00, v10, v11], [v00, v11, v01]]
}

pub(crate) fn grid_triangles(n: usize) -> Vec<[usize; 3]> {
    let mut faces = Vec::with_capacity(n * n * 2);
    for j in 0..n {
        for i in 0..n {
            faces.extend(cell_triangles(n, i, j));
        }
    }
    faces
}

/// An `n x n` grid TIN and its triangle list.
pub(crate) fn grid(n: usize) -> (QuadEdgeMesh, Vec<[usize; 3]>) {
    let triangles = grid_triangles(n);
    let mesh = build_tin(&grid_vertices(n), &triangles).unwrap();
    (mesh, triangles)
}

/// The unit square split along its 0-2 diagonal.
pub(crate) fn unit_square() -> QuadEdgeMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    build_tin(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap()
}

/// Counter-clockwise ring around cells `[i0, i1) x [j0, j1)`.
pub(crate) fn rectangle_ring(n: usize, i0: usize, j0: usize, i1: usize, j1: usize) -> Vec<VertexId> {
    let mut ring = Vec::new();
    for i in i0..i1 {
        ring.push(gv(n, i, j0));
    }
    for j in j0..j1 {
        ring.push(gv(n, i1, j));
    }
    for i in (i0 + 1..=i1).rev() {
        ring.push(gv(n, i, j1));
    }
    for j in (j0 + 1..=j1).rev() {
        ring.push(gv(n, i0, j));
    }
    ring.into_iter().map(VertexId::new).collect()
}

/// Triangles of cells `[i0, i1) x [j0, j1)`.
pub(crate) fn rectangle_faces(n: usize, i0: usize, j0: usize, i1: usize, j1: usize) -> HashSet<FaceKey> {
    let mut faces = Vec::new();
    for j in j0..j1 {
        for i in i0..i1 {
            faces.extend(cell_triangles(n, i, j));
        }
    }
    keys_of(&faces)
}

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
