//! Index types for TIN elements.
//!
//! Vertices, directed edges and constraints are identified by type-safe index
//! wrappers. Edge indices are dense and come in pairs: a base edge always has
//! an even index and its dual is the next odd index.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for integer types that can back a TIN index.
///
/// Implemented for `u32` (the default) and `u64` for very large networks.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The largest representable index.
    const MAX: Self;

    /// Convert from usize.
    ///
    /// # Panics
    /// Debug builds panic if the value does not fit.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;
}

macro_rules! impl_mesh_index {
    ($($ty:ty),*) => {
        $(
            impl MeshIndex for $ty {
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(v: usize) -> Self {
                    debug_assert!(
                        v as u128 <= <$ty>::MAX as u128,
                        "index {} does not fit in {}",
                        v,
                        stringify!($ty)
                    );
                    v as $ty
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_mesh_index!(u32, u64);

/// Identifies a vertex of the TIN.
///
/// There is no "ghost" vertex id: the ghost is the absence of a vertex,
/// spelled `Option::<VertexId>::None` wherever an origin is reported.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

/// Identifies one side (direction) of a quad-edge pair.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId<I: MeshIndex = u32>(I);

/// Identifies a constraint registered with a TIN.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ConstraintId<I: MeshIndex = u32>(I);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Wrap a raw index.
            #[inline]
            pub fn new(index: usize) -> Self {
                Self(I::from_usize(index))
            }

            /// The raw index as usize.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }
        }

        impl<I: MeshIndex> Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.index())
            }
        }

        impl<I: MeshIndex> From<usize> for $name<I> {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(EdgeId, "E");
impl_index_type!(ConstraintId, "C");

impl<I: MeshIndex> EdgeId<I> {
    /// The base edge of pair slot `slot`.
    #[inline]
    pub fn base_of_slot(slot: usize) -> Self {
        Self::new(slot << 1)
    }

    /// The opposite-oriented edge of the same pair.
    #[inline]
    pub fn dual(self) -> Self {
        Self::new(self.index() ^ 1)
    }

    /// Whether this is the base side of its pair.
    #[inline]
    pub fn is_base(self) -> bool {
        self.index() & 1 == 0
    }

    /// The base side of this edge's pair.
    #[inline]
    pub fn base(self) -> Self {
        Self::new(self.index() & !1)
    }

    /// Pair slot in the edge pool.
    #[inline]
    pub fn slot(self) -> usize {
        self.index() >> 1
    }

    /// 0 for the base side, 1 for the dual side.
    #[inline]
    pub(crate) fn side(self) -> usize {
        self.index() & 1
    }
}
