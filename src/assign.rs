//! Deferred assignment expressions.
//!
//! An assignment expression binds a mutable destination vector to a source
//! (an expression tree or a broadcast scalar) and an assigning functor. The
//! fused write-back loop runs when [`run`](VecVecAssign::run) is called with
//! an execution policy — never implicitly. Construction of the
//! vector-vector form validates operand lengths up front, so no partial
//! write can happen on mismatch.
//!
//! While it is alive, an assignment expression can be evaluated read-only at
//! an index, yielding the value the destination will hold after the
//! write-back.
//!
//! The [`AssignDispatch`] trait selects the vector-vector or vector-scalar
//! form from the source's compile-time [shape](crate::shape).

use std::marker::PhantomData;

use crate::element::Element;
use crate::expr::VectorExpr;
use crate::functors::{Assign, AssignFunctor};
use crate::policy::{DefaultPolicy, ExecutionPolicy};
use crate::shape::{AssignShape, ScalarShape, VectorShape};
use crate::vector::DynVector;
use crate::{Result, VectorError};

// ============================================================================
// vector <- vector
// ============================================================================

/// `F::apply(dest[i], src.eval(i))` over the whole destination, deferred
/// until [`run`](Self::run).
pub struct VecVecAssign<'d, T: Element, E, F> {
    dest: &'d mut DynVector<T>,
    src: E,
    op: PhantomData<F>,
}

impl<'d, T, E, F> VecVecAssign<'d, T, E, F>
where
    T: Element,
    E: VectorExpr<Elem = T>,
    F: AssignFunctor<T>,
{
    /// Bind `dest` and `src`. Lengths are checked here, eagerly.
    pub fn new(dest: &'d mut DynVector<T>, src: E) -> Result<Self> {
        if dest.len() != src.len() {
            return Err(VectorError::LengthMismatch(dest.len(), src.len()));
        }
        Ok(Self {
            dest,
            src,
            op: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.dest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dest.is_empty()
    }

    /// The value `dest[index]` will hold after the write-back. Read-only.
    pub fn eval(&self, index: usize) -> T {
        let mut tmp = self.dest.as_slice()[index];
        F::apply(&mut tmp, self.src.eval(index));
        tmp
    }

    /// Execute the fused write-back under policy `P` and release the
    /// destination borrow.
    pub fn run<P: ExecutionPolicy>(self) -> &'d mut DynVector<T>
    where
        E: Sync,
    {
        let Self { dest, src, .. } = self;
        P::assign_expr::<T, E, F>(dest.as_mut_slice(), &src);
        dest
    }

    /// [`run`](Self::run) under the default policy.
    pub fn run_default(self) -> &'d mut DynVector<T>
    where
        E: Sync,
    {
        self.run::<DefaultPolicy>()
    }
}

// ============================================================================
// vector <- scalar
// ============================================================================

/// `F::apply(dest[i], value)` over the whole destination, deferred until
/// [`run`](Self::run). A broadcast never mismatches, so construction is
/// infallible.
pub struct VecScalarAssign<'d, T: Element, F> {
    dest: &'d mut DynVector<T>,
    value: T,
    op: PhantomData<F>,
}

impl<'d, T, F> VecScalarAssign<'d, T, F>
where
    T: Element,
    F: AssignFunctor<T>,
{
    pub fn new(dest: &'d mut DynVector<T>, value: T) -> Self {
        Self {
            dest,
            value,
            op: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.dest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dest.is_empty()
    }

    /// The value `dest[index]` will hold after the write-back. Read-only.
    pub fn eval(&self, index: usize) -> T {
        let mut tmp = self.dest.as_slice()[index];
        F::apply(&mut tmp, self.value);
        tmp
    }

    pub fn run<P: ExecutionPolicy>(self) -> &'d mut DynVector<T> {
        let Self { dest, value, .. } = self;
        P::assign_scalar::<T, F>(dest.as_mut_slice(), value);
        dest
    }

    pub fn run_default(self) -> &'d mut DynVector<T> {
        self.run::<DefaultPolicy>()
    }
}

// ============================================================================
// Shape-directed dispatch
// ============================================================================

/// Selects the assignment form matching the source's compile-time shape.
///
/// The `Shape` parameter is always `Src`'s [`AssignShape`] classification;
/// it exists so the vector-shaped and scalar-shaped impls cannot overlap.
pub trait AssignDispatch<Src, Shape> {
    fn dispatch_assign(&mut self, src: Src) -> Result<()>;
}

impl<T, E> AssignDispatch<E, VectorShape<ScalarShape>> for DynVector<T>
where
    T: Element,
    E: VectorExpr<Elem = T> + Sync,
{
    fn dispatch_assign(&mut self, src: E) -> Result<()> {
        VecVecAssign::<T, E, Assign>::new(self, src)?.run_default();
        Ok(())
    }
}

impl<T: Element> AssignDispatch<T, ScalarShape> for DynVector<T> {
    fn dispatch_assign(&mut self, value: T) -> Result<()> {
        VecScalarAssign::<T, Assign>::new(self, value).run_default();
        Ok(())
    }
}

impl<T: Element> DynVector<T> {
    /// Assign a source of any shape — an expression, another vector view, or
    /// a scalar broadcast — selected at compile time through the source's
    /// shape classification.
    pub fn assign<S>(&mut self, src: S) -> Result<&mut Self>
    where
        S: AssignShape,
        Self: AssignDispatch<S, S::Shape>,
    {
        AssignDispatch::dispatch_assign(self, src)?;
        Ok(self)
    }
}
