//! Lazy expression templates for aligned numeric vectors.
//!
//! Arithmetic operators over [`DynVector`] build a typed expression tree
//! instead of materializing intermediate vectors:
//!
//! ```text
//!     x = a + b * 2.0
//! ```
//!
//! captures `a + b * 2.0` as a nested [`VectorExpr`] value. The whole chain
//! is evaluated in a single fused loop when it is assigned into a
//! destination, optionally unrolled and parallelized by an
//! [`ExecutionPolicy`]. No temporary container is created at any operator
//! step.
//!
//! # Core Types
//!
//! - [`DynVector`]: an owned, SIMD-aligned, growable vector of numeric
//!   elements
//! - [`VectorExpr`] and the node types ([`VecVecExpr`], [`VecScalarExpr`],
//!   [`UnaryExpr`]): lazy element-wise expressions
//! - [`VecVecAssign`] / [`VecScalarAssign`]: deferred fused write-back into a
//!   mutable destination, triggered by an explicit [`run`](VecVecAssign::run)
//! - [`Serial`], [`Unrolled`], [`Parallel`]: interchangeable bulk-loop
//!   strategies
//! - [`Reduction`]: unrolled multi-accumulator folds (norms, sums, dot
//!   products)
//!
//! # Example
//!
//! ```rust
//! use exprvec::DynVector;
//!
//! let a = DynVector::from([1.0, 2.0, 3.0]);
//! let b = DynVector::from([10.0, 20.0, 30.0]);
//!
//! // Lazy: no loop runs here.
//! let expr = &a + &b * 2.0;
//!
//! // One fused loop materializes the whole chain.
//! let c = DynVector::from_expr(expr);
//! assert_eq!(c.as_slice(), &[21.0, 42.0, 63.0]);
//!
//! // Compound assignment fuses and executes eagerly.
//! let mut d = DynVector::from([1.0, 1.0, 1.0]);
//! d += &a;
//! assert_eq!(d.as_slice(), &[2.0, 3.0, 4.0]);
//! ```
//!
//! # Reductions
//!
//! ```rust
//! use exprvec::{dot, norm, DynVector};
//!
//! let v = DynVector::from([3.0, 4.0]);
//! assert_eq!(norm(&v), 5.0);
//! assert_eq!(dot(&v, &v).unwrap(), 25.0);
//! ```
//!
//! # Execution
//!
//! The bulk of every fused loop is processed in blocks of the policy's block
//! size to encourage auto-vectorization; the tail is handled one element at a
//! time. The [`Parallel`] policy fans the bulk out over rayon (feature
//! `parallel`, on by default) above [`MIN_PARALLEL_LENGTH`] elements. The dot
//! product additionally has a runtime-dispatched SIMD kernel (feature `simd`,
//! on by default).

mod alloc;
mod assign;
mod element;
mod expr;
mod functors;
mod ops;
mod policy;
mod reduce;
mod shape;
mod simd;
mod vector;

// ============================================================================
// Element capability and shape classification
// ============================================================================
pub use element::{lanes_of, Element};
pub use shape::{AssignShape, ScalarShape, VectorShape};

// ============================================================================
// Expression nodes
// ============================================================================
pub use expr::{zip_with, UnaryExpr, VecScalarExpr, VecVecExpr, VectorExpr};

// ============================================================================
// Assignment expressions
// ============================================================================
pub use assign::{AssignDispatch, VecScalarAssign, VecVecAssign};

// ============================================================================
// Execution policies
// ============================================================================
pub use policy::{DefaultPolicy, ExecutionPolicy, Parallel, Serial, Unrolled};

// ============================================================================
// Functors
// ============================================================================
pub use functors::{
    Abs, Assign, AssignFunctor, BinaryFunctor, Cube, Divide, DivideAssign, Exp, Identity,
    InverseDivide, InverseMinus, Minus, MinusAssign, Negate, Plus, PlusAssign, Product,
    ProductAssign, Quartic, Square, UnaryFunctor,
};

// ============================================================================
// Reductions
// ============================================================================
pub use reduce::{
    InfNorm, MaxReduce, MinReduce, OneNorm, ProductReduce, ReduceFunctor, Reduction,
    SquaredTwoNorm, SumReduce, TwoNorm,
};
pub use simd::MaybeSimdOps;

// ============================================================================
// Container and the operation surface
// ============================================================================
pub use ops::{
    abs, dot, dot_unrolled, exp, inf_norm, max, min, norm, norm2, norm2_squared, normalize,
    one_norm, pow2, pow3, pow4, product, sum, sum_expr, sup_norm, triple,
};
pub use vector::DynVector;

// ============================================================================
// Constants
// ============================================================================

/// Buffer alignment in bytes, selected from the target's SIMD extensions at
/// compile time: 32 with AVX, 16 with SSE2, pointer width otherwise.
pub const ALIGNMENT: usize = if cfg!(target_feature = "avx") {
    32
} else if cfg!(target_feature = "sse2") {
    16
} else {
    std::mem::size_of::<usize>()
};

/// Default block size for the unrolled and parallel execution policies.
pub const DEFAULT_BLOCK: usize = 4;

/// Minimum number of elements before the [`Parallel`] policy fans out.
///
/// Below this the parallel policy falls back to the unrolled serial loop.
pub const MIN_PARALLEL_LENGTH: usize = 1 << 15;

/// Upper bound on independent accumulators kept by the reduction engine.
pub const MAX_REDUCTION_LANES: usize = 8;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during vector operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VectorError {
    /// Operand lengths do not match.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// Checked index out of range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A norm used as a divisor is zero, subnormal, infinite or NaN.
    #[error("vector norm is not a normal number")]
    NormOverflow,

    /// A reduction that needs at least one element got none.
    #[error("reduction over an empty vector")]
    EmptyVector,
}

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
