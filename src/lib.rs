//! # Tinwalk
//!
//! Triangle enumeration over quad-edge triangulated irregular networks.
//!
//! A quad-edge TIN stores directed edges and links, not triangles. Tinwalk
//! recovers the triangles by walking those links: once over the whole mesh,
//! or by flood fill inside the regions bounded by polygon constraints.
//!
//! ## Features
//!
//! - **Full scans**: every real triangle exactly once, ghost faces filtered out
//! - **Constrained regions**: flood fill from a constraint's linking edge,
//!   stopping at region borders, for holes as well as islands
//! - **Two output shapes**: vertex triples or [`SimpleTriangle`](collect::SimpleTriangle)s
//!   over the bounding edges
//! - **Pluggable meshes**: collectors are generic over the
//!   [`TriangulatedMesh`](mesh::TriangulatedMesh) and [`Constraint`](mesh::Constraint) traits
//! - **Reference TIN**: [`QuadEdgeMesh`](mesh::QuadEdgeMesh), built from a triangle list
//!
//! ## Quick Start
//!
//! ```
//! use tinwalk::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(2.0, 0.0, 1.5),
//!     Point3::new(2.0, 2.0, 0.5),
//!     Point3::new(0.0, 2.0, 2.0),
//!     Point3::new(1.0, 1.0, 3.0),
//! ];
//! let faces = vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]];
//! let mut tin: QuadEdgeMesh = build_tin(&vertices, &faces).unwrap();
//!
//! // Every triangle of the TIN.
//! let triangles = collect_triangles(&tin);
//! assert_eq!(triangles.len(), 4);
//!
//! // Only the triangles inside a constrained region.
//! let ring = [0, 1, 4].into_iter().map(VertexId::new).collect();
//! let id = tin.add_constraint(PolygonConstraint::new(ring)).unwrap();
//! let region = tin.constraint(id).unwrap();
//! let inside = collect_region_triangles(&region).unwrap();
//! assert_eq!(inside.len(), 1);
//! ```
//!
//! ## Simple Triangles
//!
//! ```
//! use tinwalk::prelude::*;
//! use nalgebra::Point3;
//!
//! # let vertices = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.0, 1.0, 0.0),
//! # ];
//! # let tin: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 2]]).unwrap();
//! visit_simple_triangles(&tin, |t| {
//!     let area = t.area(&tin).unwrap();
//!     assert!((area - 0.5).abs() < 1e-12);
//!     for e in t.edges() {
//!         assert_eq!(tin.forward(tin.reverse(e)), e);
//!     }
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collect;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use tinwalk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collect::{
        collect_region_triangles, collect_simple_triangles, collect_triangles,
        visit_simple_triangles, visit_simple_triangles_for_constrained_region,
        visit_triangles, visit_triangles_constrained, visit_triangles_for_constrained_region,
        CollectOptions, EdgeMarkSet, SimpleTriangle, TraversalSummary,
    };
    pub use crate::error::{ConstraintDefect, Result, TinError};
    pub use crate::mesh::{
        build_tin, build_tin_with_options, BuildOptions, Constraint, ConstraintId, EdgeId,
        ManagedConstraint, MeshIndex, PolygonConstraint, QuadEdgeMesh, TriangulatedMesh,
        VertexId, VertexPositions,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
