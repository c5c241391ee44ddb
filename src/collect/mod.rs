//! Triangle collection over a TIN.
//!
//! Quad-edge meshes have no triangle list. Triangles are discovered by
//! walking edges, and since each face is bounded by three directed edges,
//! every traversal keeps a per-call [`EdgeMarkSet`] and marks all three at
//! once when it claims a face. Faces touching the ghost vertex are marked
//! but never handed to the caller.
//!
//! # Full Scans
//!
//! [`visit_triangles`] and [`visit_simple_triangles`] look at both sides of
//! every base edge and report each real triangle exactly once:
//!
//! ```
//! use tinwalk::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let tin: QuadEdgeMesh = build_tin(&vertices, &[[0, 1, 2], [0, 2, 3]]).unwrap();
//!
//! let mut count = 0;
//! let summary = visit_triangles(&tin, |[a, b, c]| {
//!     assert!(a != b && b != c);
//!     count += 1;
//! });
//! assert_eq!(count, 2);
//! assert_eq!(summary.ghosts_suppressed, 4);
//! ```
//!
//! # Constrained Regions
//!
//! [`visit_triangles_for_constrained_region`] flood-fills from a
//! constraint's linking edge and never crosses an edge flagged as a region
//! border. [`visit_triangles_constrained`] does that for every region of a
//! TIN, each with its own marks; a face inside two overlapping regions is
//! reported once per region.
//!
//! All traversals are read-only, so any number of them can run at once over
//! a shared TIN as long as nothing mutates it meanwhile.

mod emit;
mod marks;
mod region;
mod scan;
mod triangle;

#[cfg(test)]
pub(crate) mod fixtures;

pub use marks::{EdgeMarkSet, DEFAULT_MARK_SLACK};
pub use region::{
    collect_region_triangles, visit_simple_triangles_for_constrained_region,
    visit_simple_triangles_for_constrained_region_with_options,
    visit_triangles_constrained, visit_triangles_constrained_with_options,
    visit_triangles_for_constrained_region, visit_triangles_for_constrained_region_with_options,
};
pub use scan::{
    collect_simple_triangles, collect_triangles, visit_simple_triangles,
    visit_simple_triangles_with_options, visit_triangles, visit_triangles_with_options,
};
pub use triangle::SimpleTriangle;

/// Options shared by all triangle collectors.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Mark flags allocated past the mesh's maximum edge index.
    pub mark_slack: usize,

    /// Initial capacity of the region walker's work stack.
    pub stack_capacity: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            mark_slack: DEFAULT_MARK_SLACK,
            stack_capacity: 64,
        }
    }
}

impl CollectOptions {
    /// Set the mark slack.
    pub fn with_mark_slack(mut self, slack: usize) -> Self {
        self.mark_slack = slack;
        self
    }

    /// Set the initial work stack capacity.
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }
}

/// Counters describing one traversal call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalSummary {
    /// Faces claimed, ghost faces included.
    pub faces_visited: usize,

    /// Triangles handed to the sink.
    pub triangles_emitted: usize,

    /// Ghost faces marked without being emitted.
    pub ghosts_suppressed: usize,

    /// Steps into a neighbouring face refused because the shared edge is a
    /// region border. Always zero for full scans.
    pub border_crossings_refused: usize,

    /// Constrained regions walked.
    pub regions_walked: usize,
}

impl TraversalSummary {
    /// Add another call's counters to these.
    pub fn merge(&mut self, other: &TraversalSummary) {
        self.faces_visited += other.faces_visited;
        self.triangles_emitted += other.triangles_emitted;
        self.ghosts_suppressed += other.ghosts_suppressed;
        self.border_crossings_refused += other.border_crossings_refused;
        self.regions_walked += other.regions_walked;
    }
}
