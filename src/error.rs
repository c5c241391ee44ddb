//! Error types for tinwalk.
//!
//! Traversal of a well-formed TIN cannot fail; the only traversal error is
//! [`TinError::InvalidArgument`], raised when a constraint handed to a
//! region walker cannot seed a walk. The remaining variants come from
//! assembling the reference [`QuadEdgeMesh`](crate::mesh::QuadEdgeMesh).

use thiserror::Error;

/// Result type alias using [`TinError`].
pub type Result<T> = std::result::Result<T, TinError>;

/// Why a constraint was rejected as the seed of a region walk.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintDefect {
    /// The constraint was never added to a TIN.
    #[error("constraint is not under TIN management")]
    Unmanaged,

    /// The constraint is linear, or otherwise encloses no region.
    #[error("constraint does not define a constrained region")]
    NotARegion,

    /// The constraint has no edge to start the walk from.
    #[error("constraint does not have a linking edge")]
    MissingLinkingEdge,
}

/// Errors produced by TIN assembly and triangle collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TinError {
    /// A caller passed a constraint that cannot be walked.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ConstraintDefect),

    /// No triangles were supplied.
    #[error("TIN has no triangles")]
    EmptyMesh,

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A triangle repeats a vertex or has zero area.
    #[error("triangle {triangle} is degenerate")]
    DegenerateTriangle {
        /// The triangle index.
        triangle: usize,
    },

    /// A triangle is wound clockwise in the x/y plane.
    #[error("triangle {triangle} is wound clockwise")]
    ClockwiseTriangle {
        /// The triangle index.
        triangle: usize,
    },

    /// The same directed edge appears in two triangles.
    #[error("edge ({v0}, {v1}) is shared by more than two triangles or wound inconsistently")]
    NonManifoldEdge {
        /// Origin vertex of the edge.
        v0: usize,
        /// Destination vertex of the edge.
        v1: usize,
    },

    /// The hull passes through a vertex more than once.
    #[error("hull is not a simple loop at vertex {vertex}")]
    NonManifoldBoundary {
        /// The offending vertex.
        vertex: usize,
    },

    /// A constraint has too few vertices for its kind.
    #[error("constraint needs at least {required} vertices, got {actual}")]
    ConstraintTooShort {
        /// Minimum vertex count.
        required: usize,
        /// Vertex count supplied.
        actual: usize,
    },

    /// A constraint segment is not an edge of the TIN.
    #[error("constraint segment ({v0}, {v1}) is not an edge of the TIN")]
    MissingConstraintEdge {
        /// First vertex of the segment.
        v0: usize,
        /// Second vertex of the segment.
        v1: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl TinError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        TinError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
