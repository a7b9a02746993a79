//! Operators and the named operation surface.
//!
//! Binary `+ - * /` over vectors, expressions and scalars (both orders)
//! build lazy nodes; compound `+= -= *= /=` run the fused write-back
//! eagerly under the default execution policy; the named functions cover
//! unary transforms and reductions.
//!
//! Scalar operands are implemented per concrete numeric type (`f32`, `f64`,
//! `i32`, `i64`): a blanket scalar impl would collide with the generic
//! vector-operand impls under coherence.

use num_traits::{Bounded, Float, Signed};

use crate::assign::{VecScalarAssign, VecVecAssign};
use crate::element::Element;
use crate::expr::{UnaryExpr, VecScalarExpr, VecVecExpr, VectorExpr};
use crate::functors::{
    Abs as AbsOp, BinaryFunctor, Cube, Divide, DivideAssign, Exp as ExpOp, InverseDivide,
    InverseMinus, Minus, MinusAssign, Negate, Plus, PlusAssign, Product, ProductAssign, Quartic,
    Square,
};
use crate::reduce::{
    InfNorm, MaxReduce, MinReduce, OneNorm, ProductReduce, Reduction, SquaredTwoNorm, SumReduce,
    TwoNorm, UnrolledDot,
};
use crate::simd::MaybeSimdOps;
use crate::vector::DynVector;
use crate::{Result, VectorError, DEFAULT_BLOCK, MAX_REDUCTION_LANES};

// ============================================================================
// vector-like (op) vector-like
// ============================================================================

macro_rules! vector_vector_op {
    ($trait:ident, $method:ident, $functor:ty, [$($gen:tt)*], $lhs:ty) => {
        impl<$($gen)*, Rhs> std::ops::$trait<Rhs> for $lhs
        where
            $lhs: VectorExpr,
            Rhs: VectorExpr<Elem = <$lhs as VectorExpr>::Elem>,
            $functor: BinaryFunctor<<$lhs as VectorExpr>::Elem>,
        {
            type Output = VecVecExpr<$lhs, Rhs, $functor>;

            #[track_caller]
            fn $method(self, rhs: Rhs) -> Self::Output {
                VecVecExpr::new(self, rhs)
            }
        }
    };
}

macro_rules! vector_vector_ops_for {
    ([$($gen:tt)*], $lhs:ty) => {
        vector_vector_op!(Add, add, Plus, [$($gen)*], $lhs);
        vector_vector_op!(Sub, sub, Minus, [$($gen)*], $lhs);
        vector_vector_op!(Mul, mul, Product, [$($gen)*], $lhs);
        vector_vector_op!(Div, div, Divide, [$($gen)*], $lhs);
    };
}

vector_vector_ops_for!(['a, T: Element], &'a DynVector<T>);
vector_vector_ops_for!([L, R, F0], VecVecExpr<L, R, F0>);
vector_vector_ops_for!([E: VectorExpr, F0], VecScalarExpr<E, F0>);
vector_vector_ops_for!([E, F0], UnaryExpr<E, F0>);

// ============================================================================
// vector-like (op) scalar and scalar (op) vector-like
// ============================================================================

macro_rules! scalar_rhs_op {
    ($s:ty, $trait:ident, $method:ident, $functor:ty) => {
        impl<'a> std::ops::$trait<$s> for &'a DynVector<$s> {
            type Output = VecScalarExpr<&'a DynVector<$s>, $functor>;

            fn $method(self, rhs: $s) -> Self::Output {
                VecScalarExpr::new(self, rhs)
            }
        }

        impl<L, R, F0> std::ops::$trait<$s> for VecVecExpr<L, R, F0>
        where
            VecVecExpr<L, R, F0>: VectorExpr<Elem = $s>,
        {
            type Output = VecScalarExpr<Self, $functor>;

            fn $method(self, rhs: $s) -> Self::Output {
                VecScalarExpr::new(self, rhs)
            }
        }

        impl<E: VectorExpr, F0> std::ops::$trait<$s> for VecScalarExpr<E, F0>
        where
            VecScalarExpr<E, F0>: VectorExpr<Elem = $s>,
        {
            type Output = VecScalarExpr<Self, $functor>;

            fn $method(self, rhs: $s) -> Self::Output {
                VecScalarExpr::new(self, rhs)
            }
        }

        impl<E, F0> std::ops::$trait<$s> for UnaryExpr<E, F0>
        where
            UnaryExpr<E, F0>: VectorExpr<Elem = $s>,
        {
            type Output = VecScalarExpr<Self, $functor>;

            fn $method(self, rhs: $s) -> Self::Output {
                VecScalarExpr::new(self, rhs)
            }
        }
    };
}

macro_rules! scalar_lhs_op {
    ($s:ty, $trait:ident, $method:ident, $functor:ty) => {
        impl<'a> std::ops::$trait<&'a DynVector<$s>> for $s {
            type Output = VecScalarExpr<&'a DynVector<$s>, $functor>;

            fn $method(self, rhs: &'a DynVector<$s>) -> Self::Output {
                VecScalarExpr::new(rhs, self)
            }
        }

        impl<L, R, F0> std::ops::$trait<VecVecExpr<L, R, F0>> for $s
        where
            VecVecExpr<L, R, F0>: VectorExpr<Elem = $s>,
        {
            type Output = VecScalarExpr<VecVecExpr<L, R, F0>, $functor>;

            fn $method(self, rhs: VecVecExpr<L, R, F0>) -> Self::Output {
                VecScalarExpr::new(rhs, self)
            }
        }

        impl<E: VectorExpr, F0> std::ops::$trait<VecScalarExpr<E, F0>> for $s
        where
            VecScalarExpr<E, F0>: VectorExpr<Elem = $s>,
        {
            type Output = VecScalarExpr<VecScalarExpr<E, F0>, $functor>;

            fn $method(self, rhs: VecScalarExpr<E, F0>) -> Self::Output {
                VecScalarExpr::new(rhs, self)
            }
        }

        impl<E, F0> std::ops::$trait<UnaryExpr<E, F0>> for $s
        where
            UnaryExpr<E, F0>: VectorExpr<Elem = $s>,
        {
            type Output = VecScalarExpr<UnaryExpr<E, F0>, $functor>;

            fn $method(self, rhs: UnaryExpr<E, F0>) -> Self::Output {
                VecScalarExpr::new(rhs, self)
            }
        }
    };
}

macro_rules! compound_scalar_op {
    ($s:ty, $trait:ident, $method:ident, $functor:ty) => {
        impl std::ops::$trait<$s> for DynVector<$s> {
            fn $method(&mut self, rhs: $s) {
                VecScalarAssign::<$s, $functor>::new(self, rhs).run_default();
            }
        }
    };
}

macro_rules! scalar_ops_for {
    ($($s:ty),*) => {
        $(
            scalar_rhs_op!($s, Add, add, Plus);
            scalar_rhs_op!($s, Sub, sub, Minus);
            scalar_rhs_op!($s, Mul, mul, Product);
            scalar_rhs_op!($s, Div, div, Divide);

            // The inverse functors keep the vector operand first while the
            // scalar sits on the left of the written expression.
            scalar_lhs_op!($s, Add, add, Plus);
            scalar_lhs_op!($s, Sub, sub, InverseMinus);
            scalar_lhs_op!($s, Mul, mul, Product);
            scalar_lhs_op!($s, Div, div, InverseDivide);

            compound_scalar_op!($s, AddAssign, add_assign, PlusAssign);
            compound_scalar_op!($s, SubAssign, sub_assign, MinusAssign);
            compound_scalar_op!($s, MulAssign, mul_assign, ProductAssign);
            compound_scalar_op!($s, DivAssign, div_assign, DivideAssign);
        )*
    };
}

scalar_ops_for!(f32, f64, i32, i64);

// ============================================================================
// Compound assignment from vector-like sources
// ============================================================================

macro_rules! compound_vector_op {
    ($trait:ident, $method:ident, $functor:ty) => {
        impl<T, Rhs> std::ops::$trait<Rhs> for DynVector<T>
        where
            T: Element,
            Rhs: VectorExpr<Elem = T> + Sync,
        {
            #[track_caller]
            fn $method(&mut self, rhs: Rhs) {
                match VecVecAssign::<T, Rhs, $functor>::new(self, rhs) {
                    Ok(assign) => {
                        assign.run_default();
                    }
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

compound_vector_op!(AddAssign, add_assign, PlusAssign);
compound_vector_op!(SubAssign, sub_assign, MinusAssign);
compound_vector_op!(MulAssign, mul_assign, ProductAssign);
compound_vector_op!(DivAssign, div_assign, DivideAssign);

// ============================================================================
// Unary negation
// ============================================================================

impl<'a, T> std::ops::Neg for &'a DynVector<T>
where
    T: Element + std::ops::Neg<Output = T>,
{
    type Output = UnaryExpr<&'a DynVector<T>, Negate>;

    fn neg(self) -> Self::Output {
        UnaryExpr::new(self)
    }
}

macro_rules! neg_for_node {
    ([$($gen:tt)*], $node:ty) => {
        impl<$($gen)*> std::ops::Neg for $node
        where
            $node: VectorExpr,
            <$node as VectorExpr>::Elem:
                std::ops::Neg<Output = <$node as VectorExpr>::Elem>,
        {
            type Output = UnaryExpr<$node, Negate>;

            fn neg(self) -> Self::Output {
                UnaryExpr::new(self)
            }
        }
    };
}

neg_for_node!([L, R, F0], VecVecExpr<L, R, F0>);
neg_for_node!([E: VectorExpr, F0], VecScalarExpr<E, F0>);
neg_for_node!([E, F0], UnaryExpr<E, F0>);

// ============================================================================
// Named unary transforms
// ============================================================================

/// Lazy element-wise absolute value.
pub fn abs<E>(expr: E) -> UnaryExpr<E, AbsOp>
where
    E: VectorExpr,
    E::Elem: Signed,
{
    UnaryExpr::new(expr)
}

/// Lazy element-wise exponential.
pub fn exp<E>(expr: E) -> UnaryExpr<E, ExpOp>
where
    E: VectorExpr,
    E::Elem: Float,
{
    UnaryExpr::new(expr)
}

/// Lazy element-wise square.
pub fn pow2<E: VectorExpr>(expr: E) -> UnaryExpr<E, Square> {
    UnaryExpr::new(expr)
}

/// Lazy element-wise cube.
pub fn pow3<E: VectorExpr>(expr: E) -> UnaryExpr<E, Cube> {
    UnaryExpr::new(expr)
}

/// Lazy element-wise fourth power.
pub fn pow4<E: VectorExpr>(expr: E) -> UnaryExpr<E, Quartic> {
    UnaryExpr::new(expr)
}

// ============================================================================
// Reductions
// ============================================================================

/// Euclidean norm of any expression, via the generic reduction engine.
pub fn norm<E>(expr: E) -> E::Elem
where
    E: VectorExpr,
    E::Elem: Float,
{
    Reduction::<TwoNorm, DEFAULT_BLOCK>::apply(expr)
}

/// Euclidean norm of a vector through the fused-multiply-add dot kernel.
pub fn norm2<T>(v: &DynVector<T>) -> T
where
    T: Element + Float + MaybeSimdOps,
{
    let squared = match T::try_simd_dot(v.as_slice(), v.as_slice()) {
        Some(d) => d,
        None => UnrolledDot::<MAX_REDUCTION_LANES>::apply(v, v),
    };
    squared.sqrt()
}

/// Squared Euclidean norm (no square root).
pub fn norm2_squared<E>(expr: E) -> E::Elem
where
    E: VectorExpr,
    E::Elem: Float,
{
    Reduction::<SquaredTwoNorm, DEFAULT_BLOCK>::apply(expr)
}

/// Sum of absolute values.
pub fn one_norm<E>(expr: E) -> E::Elem
where
    E: VectorExpr,
    E::Elem: Signed,
{
    Reduction::<OneNorm, DEFAULT_BLOCK>::apply(expr)
}

/// Largest absolute value.
pub fn inf_norm<E>(expr: E) -> E::Elem
where
    E: VectorExpr,
    E::Elem: Signed + PartialOrd,
{
    Reduction::<InfNorm, DEFAULT_BLOCK>::apply(expr)
}

/// Largest absolute value of a vector; errors on empty input.
pub fn sup_norm<T>(v: &DynVector<T>) -> Result<T>
where
    T: Element + Signed + PartialOrd,
{
    if v.is_empty() {
        return Err(VectorError::EmptyVector);
    }
    Ok(Reduction::<InfNorm, MAX_REDUCTION_LANES>::apply(v))
}

/// Sum of a vector's elements, SIMD-accelerated where available.
pub fn sum<T>(v: &DynVector<T>) -> T
where
    T: Element + MaybeSimdOps,
{
    match T::try_simd_sum(v.as_slice()) {
        Some(s) => s,
        None => Reduction::<SumReduce, MAX_REDUCTION_LANES>::apply(v),
    }
}

/// Sum of any expression's elements through the generic reduction engine.
pub fn sum_expr<E: VectorExpr>(expr: E) -> E::Elem {
    Reduction::<SumReduce, MAX_REDUCTION_LANES>::apply(expr)
}

/// Product of any expression's elements.
pub fn product<E: VectorExpr>(expr: E) -> E::Elem {
    Reduction::<ProductReduce, MAX_REDUCTION_LANES>::apply(expr)
}

/// Largest element; errors on empty input.
pub fn max<T>(v: &DynVector<T>) -> Result<T>
where
    T: Element + Bounded + PartialOrd,
{
    if v.is_empty() {
        return Err(VectorError::EmptyVector);
    }
    Ok(Reduction::<MaxReduce, MAX_REDUCTION_LANES>::apply(v))
}

/// Smallest element; errors on empty input.
pub fn min<T>(v: &DynVector<T>) -> Result<T>
where
    T: Element + Bounded + PartialOrd,
{
    if v.is_empty() {
        return Err(VectorError::EmptyVector);
    }
    Ok(Reduction::<MinReduce, MAX_REDUCTION_LANES>::apply(v))
}

/// Dot product of two vectors.
///
/// Uses the hardware SIMD kernel on the contiguous buffers where available,
/// otherwise the unrolled fused-multiply-add fallback. Both agree with a
/// naive pairwise sum within floating-point reduction tolerance; exact bit
/// equality between the paths is not guaranteed.
pub fn dot<T>(a: &DynVector<T>, b: &DynVector<T>) -> Result<T>
where
    T: Element + Float + MaybeSimdOps,
{
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch(a.len(), b.len()));
    }
    if let Some(d) = T::try_simd_dot(a.as_slice(), b.as_slice()) {
        return Ok(d);
    }
    Ok(UnrolledDot::<MAX_REDUCTION_LANES>::apply(a, b))
}

/// Dot product of two expressions with `UNROLL` fma accumulators.
pub fn dot_unrolled<const UNROLL: usize, E1, E2>(a: E1, b: E2) -> Result<E1::Elem>
where
    E1: VectorExpr,
    E2: VectorExpr<Elem = E1::Elem>,
    E1::Elem: Float,
{
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch(a.len(), b.len()));
    }
    Ok(UnrolledDot::<UNROLL>::apply(a, b))
}

/// Fused triple product Σ aᵢ·bᵢ·cᵢ.
pub fn triple<T>(a: &DynVector<T>, b: &DynVector<T>, c: &DynVector<T>) -> Result<T>
where
    T: Element,
{
    let n = a.len();
    if b.len() != n {
        return Err(VectorError::LengthMismatch(n, b.len()));
    }
    if c.len() != n {
        return Err(VectorError::LengthMismatch(n, c.len()));
    }
    let mut acc = T::zero();
    for i in 0..n {
        acc += a[i] * b[i] * c[i];
    }
    Ok(acc)
}

/// Scale `v` to unit Euclidean length, returning the old norm.
///
/// Fails with [`VectorError::NormOverflow`] when the norm is zero,
/// subnormal, infinite or NaN — a degenerate input never produces an
/// arbitrary unit vector.
pub fn normalize<T>(v: &mut DynVector<T>) -> Result<T>
where
    T: Element + Float + MaybeSimdOps,
{
    let n = norm2(v);
    if !n.is_normal() {
        return Err(VectorError::NormOverflow);
    }
    VecScalarAssign::<T, DivideAssign>::new(v, n).run_default();
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn iota(n: usize) -> DynVector<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_elementwise_binary_operators() {
        let a = DynVector::from([1.0, 2.0, 3.0]);
        let b = DynVector::from([4.0, 5.0, 6.0]);

        let sum = DynVector::from_expr(&a + &b);
        assert_eq!(sum.as_slice(), &[5.0, 7.0, 9.0]);

        let diff = DynVector::from_expr(&a - &b);
        assert_eq!(diff.as_slice(), &[-3.0, -3.0, -3.0]);

        let prod = DynVector::from_expr(&a * &b);
        assert_eq!(prod.as_slice(), &[4.0, 10.0, 18.0]);

        let quot = DynVector::from_expr(&b / &a);
        assert_eq!(quot.as_slice(), &[4.0, 2.5, 2.0]);
    }

    #[test]
    fn test_scalar_operators_both_orders() {
        let v = DynVector::from([0.0, 1.0, 2.0]);

        let left = DynVector::from_expr(2.0 * &v);
        let right = DynVector::from_expr(&v * 2.0);
        assert_eq!(left.as_slice(), &[0.0, 2.0, 4.0]);
        assert_eq!(left, right);

        let shifted = DynVector::from_expr(1.0 + &v);
        assert_eq!(shifted, DynVector::from_expr(&v + 1.0));

        let inv = DynVector::from_expr(10.0 - &v);
        assert_eq!(inv.as_slice(), &[10.0, 9.0, 8.0]);

        let recip = DynVector::from_expr(6.0 / &DynVector::from([1.0, 2.0, 3.0]));
        assert_eq!(recip.as_slice(), &[6.0, 3.0, 2.0]);
    }

    #[test]
    fn test_chained_expression_single_materialization() {
        let a = iota(100);
        let b = iota(100);
        let c = DynVector::from_expr((&a + &b) * 0.5 - 1.0);
        for i in 0..100 {
            assert_relative_eq!(c[i], i as f64 - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_compound_assignment_vector() {
        let w = DynVector::from([1.0, 2.0, 3.0]);
        let mut v = DynVector::from([10.0, 10.0, 10.0]);
        let before = v.clone();

        v += &w;
        for i in 0..3 {
            assert_eq!(v[i], before[i] + w[i]);
        }

        v -= &w;
        assert_eq!(v, before);

        v *= &w;
        assert_eq!(v.as_slice(), &[10.0, 20.0, 30.0]);

        v /= &w;
        assert_eq!(v, before);
    }

    #[test]
    fn test_compound_assignment_expression_rhs() {
        let a = DynVector::from([1.0, 2.0]);
        let mut v = DynVector::from([0.0, 0.0]);
        v += &a * 3.0;
        assert_eq!(v.as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn test_compound_assignment_scalar() {
        let mut v = DynVector::from([2.0, 4.0]);
        v *= 0.5;
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        v += 1.0;
        assert_eq!(v.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_compound_assignment_mismatch_panics() {
        let w = DynVector::from([1.0, 2.0]);
        let mut v = DynVector::from([1.0, 2.0, 3.0]);
        v += &w;
    }

    #[test]
    fn test_unary_operators() {
        let v = DynVector::from([1.0, -2.0, 3.0]);

        let neg = DynVector::from_expr(-&v);
        assert_eq!(neg.as_slice(), &[-1.0, 2.0, -3.0]);

        let absolute = DynVector::from_expr(abs(&v));
        assert_eq!(absolute.as_slice(), &[1.0, 2.0, 3.0]);

        let squared = DynVector::from_expr(pow2(&v));
        assert_eq!(squared.as_slice(), &[1.0, 4.0, 9.0]);

        let cubed = DynVector::from_expr(pow3(&v));
        assert_eq!(cubed.as_slice(), &[1.0, -8.0, 27.0]);

        let fourth = DynVector::from_expr(pow4(&v));
        assert_eq!(fourth.as_slice(), &[1.0, 16.0, 81.0]);

        let e = DynVector::from_expr(exp(&DynVector::from([0.0, 1.0])));
        assert_relative_eq!(e[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(e[1], std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn test_norms() {
        let v = DynVector::from([3.0, 4.0]);
        assert_relative_eq!(norm(&v), 5.0, epsilon = 1e-12);
        assert_relative_eq!(norm2(&v), 5.0, epsilon = 1e-12);
        assert_relative_eq!(norm2_squared(&v), 25.0, epsilon = 1e-12);
        assert_eq!(one_norm(&v), 7.0);
        assert_eq!(inf_norm(&v), 4.0);
        assert_eq!(sup_norm(&v).unwrap(), 4.0);
    }

    #[test]
    fn test_norm_of_expression() {
        let v = DynVector::from([3.0, 4.0]);
        // norm(2v) == 2 norm(v)
        assert_relative_eq!(norm(&v * 2.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_small_exact() {
        let a = iota(10);
        let b = iota(10);
        let expected: f64 = (0..10).map(|i| (i * i) as f64).sum();
        assert_relative_eq!(dot(&a, &b).unwrap(), expected, epsilon = 1e-8);
        assert_relative_eq!(
            dot_unrolled::<8, _, _>(&a, &b).unwrap(),
            expected,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_dot_length_mismatch() {
        let a = iota(3);
        let b = iota(4);
        assert_eq!(
            dot(&a, &b).unwrap_err(),
            VectorError::LengthMismatch(3, 4)
        );
    }

    #[test]
    fn test_sum_product_max_min() {
        let v = DynVector::from([4.0, 1.0, -3.0, 2.0]);
        assert_eq!(sum(&v), 4.0);
        assert_eq!(sum_expr(&v * 2.0), 8.0);
        assert_eq!(product(&DynVector::from([2.0, 3.0, 4.0])), 24.0);
        assert_eq!(max(&v).unwrap(), 4.0);
        assert_eq!(min(&v).unwrap(), -3.0);
    }

    #[test]
    fn test_empty_max_min_errors() {
        let v = DynVector::<f64>::zeroed(0);
        assert_eq!(max(&v).unwrap_err(), VectorError::EmptyVector);
        assert_eq!(min(&v).unwrap_err(), VectorError::EmptyVector);
        assert_eq!(sup_norm(&v).unwrap_err(), VectorError::EmptyVector);
    }

    #[test]
    fn test_triple_product() {
        let a = DynVector::from([1.0, 2.0, 3.0]);
        let b = DynVector::from([2.0, 2.0, 2.0]);
        let c = DynVector::from([1.0, 0.0, 1.0]);
        assert_eq!(triple(&a, &b, &c).unwrap(), 8.0);

        let short = DynVector::from([1.0]);
        assert!(triple(&a, &b, &short).is_err());
    }

    #[test]
    fn test_normalize() {
        let mut v = DynVector::from([3.0, 0.0, 4.0]);
        let old = normalize(&mut v).unwrap();
        assert_relative_eq!(old, 5.0, epsilon = 1e-12);
        assert_relative_eq!(norm(&v), 1.0, epsilon = 1e-8);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        let mut v = DynVector::<f64>::zeroed(4);
        assert_eq!(normalize(&mut v).unwrap_err(), VectorError::NormOverflow);
        // Untouched on failure.
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_normalize_non_finite_fails() {
        let mut v = DynVector::from([f64::INFINITY, 1.0]);
        assert_eq!(normalize(&mut v).unwrap_err(), VectorError::NormOverflow);

        let mut w = DynVector::from([f64::NAN, 1.0]);
        assert_eq!(normalize(&mut w).unwrap_err(), VectorError::NormOverflow);
    }

    #[test]
    fn test_integer_vectors() {
        let a = DynVector::from([1i64, 2, 3]);
        let b = DynVector::from([10i64, 20, 30]);
        let c = DynVector::from_expr(&a + &b * 2);
        assert_eq!(c.as_slice(), &[21, 42, 63]);
        assert_eq!(sum(&c), 126);
    }
}
