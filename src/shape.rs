//! Compile-time shape classification of assignment operands.
//!
//! When a source value is assigned into a vector, the engine has to pick
//! between two write-back paths: element-by-element from a vector-shaped
//! source, or broadcast from a scalar-shaped one. The decision is made
//! entirely at the type level: every operand type carries a `Shape`
//! associated type, and expression nodes inherit the shape of their first
//! operand, recursively. There is no runtime representation.

use std::marker::PhantomData;

use crate::assign::{VecScalarAssign, VecVecAssign};
use crate::element::Element;
use crate::expr::{UnaryExpr, VecScalarExpr, VecVecExpr, VectorExpr};
use crate::vector::DynVector;

/// Shape tag for plain numeric values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarShape;

/// Shape tag for vector-like values over `Inner`-shaped elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorShape<Inner>(PhantomData<Inner>);

/// Classifies a type as scalar- or vector-shaped for assignment dispatch.
pub trait AssignShape {
    type Shape;
}

// Primitive numeric types are scalar-shaped. Stable Rust has no fallback
// impl, so the scalar set is closed rather than open-by-default.
macro_rules! impl_scalar_shape {
    ($($t:ty),*) => {
        $(
            impl AssignShape for $t {
                type Shape = ScalarShape;
            }
        )*
    };
}

impl_scalar_shape!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Element + AssignShape> AssignShape for DynVector<T> {
    type Shape = VectorShape<T::Shape>;
}

// A reference classifies like its referent.
impl<X: AssignShape> AssignShape for &X {
    type Shape = X::Shape;
}

// Expression nodes inherit the shape of their first operand.
impl<L: AssignShape, R, F> AssignShape for VecVecExpr<L, R, F> {
    type Shape = L::Shape;
}

impl<E: AssignShape + VectorExpr, F> AssignShape for VecScalarExpr<E, F> {
    type Shape = E::Shape;
}

impl<E: AssignShape, F> AssignShape for UnaryExpr<E, F> {
    type Shape = E::Shape;
}

impl<T, E, F> AssignShape for VecVecAssign<'_, T, E, F>
where
    T: Element + AssignShape,
    E: VectorExpr<Elem = T>,
{
    type Shape = VectorShape<T::Shape>;
}

impl<T, F> AssignShape for VecScalarAssign<'_, T, F>
where
    T: Element + AssignShape,
{
    type Shape = VectorShape<T::Shape>;
}
