//! TIN topology: collaborator contracts and a reference quad-edge mesh.
//!
//! The triangle collectors in [`crate::collect`] are written against the
//! traits in this module ([`TriangulatedMesh`], [`Constraint`],
//! [`VertexPositions`]), so any quad-edge TIN can be walked. The module also
//! provides [`QuadEdgeMesh`], a compact implementation of those traits.
//!
//! # Index Types
//!
//! - [`VertexId`] - Identifies a vertex; the ghost vertex is `None`
//! - [`EdgeId`] - Identifies a directed edge; `e.dual()` flips its low bit
//! - [`ConstraintId`] - Identifies a constraint attached to a TIN
//!
//! # Construction
//!
//! ```
//! use tinwalk::mesh::{build_tin, PolygonConstraint, QuadEdgeMesh, VertexId};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mut tin: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
//!
//! let ring = (0..4).map(VertexId::new).collect();
//! tin.add_constraint(PolygonConstraint::new(ring)).unwrap();
//! assert_eq!(tin.num_constraints(), 1);
//! ```

mod builder;
mod constraint;
mod index;
mod quadedge;
mod traits;

pub use builder::{build_tin, build_tin_with_options, BuildOptions};
pub use constraint::{ManagedConstraint, PolygonConstraint};
pub use index::{ConstraintId, EdgeId, MeshIndex, VertexId};
pub use quadedge::{EdgePool, QuadEdgeMesh};
pub use traits::{Constraint, TriangulatedMesh, VertexPositions};
