//! Element type bounds shared by containers, expressions and reductions.

use crate::ALIGNMENT;

/// Capability bound for vector elements.
///
/// Everything the engine stores or computes with is a plain `Copy` numeric
/// value supporting the four arithmetic operations and their assigning
/// variants. `Send + Sync` lets expression trees be evaluated from the
/// parallel execution policy without further bounds at the call site.
pub trait Element:
    Copy + Send + Sync + PartialEq + std::fmt::Debug + num_traits::NumAssign + 'static
{
}

impl<T> Element for T where
    T: Copy + Send + Sync + PartialEq + std::fmt::Debug + num_traits::NumAssign + 'static
{
}

/// Number of elements of `T` in one SIMD register at the configured
/// [`ALIGNMENT`], the natural block width for type-derived unrolling.
pub const fn lanes_of<T>() -> usize {
    let lanes = ALIGNMENT / std::mem::size_of::<T>();
    if lanes == 0 {
        1
    } else {
        lanes
    }
}
