//! Execution policies for the fused write-back loop.
//!
//! A policy decides how the destination range is walked: [`Serial`] is a
//! plain element loop, [`Unrolled`] splits the range into a block-multiple
//! bulk prefix processed `B` elements at a time (the block applier below is
//! monomorphized per `B`, so the compiler unrolls and vectorizes it) and a
//! scalar remainder tail, and [`Parallel`] additionally fans the bulk out
//! over rayon in contiguous block-aligned chunks. Every destination index is
//! written by exactly one iteration regardless of policy; the policies only
//! reorder work, so results are identical up to float reassociation.

use crate::element::Element;
use crate::expr::VectorExpr;
use crate::functors::AssignFunctor;
use crate::DEFAULT_BLOCK;
#[cfg(feature = "parallel")]
use crate::MIN_PARALLEL_LENGTH;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
#[inline]
fn trace_enabled() -> bool {
    matches!(std::env::var("EXPRVEC_TRACE"), Ok(ref v) if v == "1")
}

/// Strategy for applying an assigning functor across a destination range.
pub trait ExecutionPolicy {
    /// `F::apply(dest[i], src.eval(i))` for every `i`.
    ///
    /// `dest.len()` and `src.len()` must already agree; the assignment
    /// expressions validate before dispatching here.
    fn assign_expr<T, E, F>(dest: &mut [T], src: &E)
    where
        T: Element,
        E: VectorExpr<Elem = T> + Sync,
        F: AssignFunctor<T>;

    /// `F::apply(dest[i], value)` for every `i`.
    fn assign_scalar<T, F>(dest: &mut [T], value: T)
    where
        T: Element,
        F: AssignFunctor<T>;
}

// ============================================================================
// Unrolled block appliers
// ============================================================================

/// Apply `F` over a block-multiple destination slice, `B` elements per step.
///
/// `base` is the expression index of `dest[0]`: parallel chunks pass their
/// global offset so the expression is evaluated at the right positions.
#[inline(always)]
fn unrolled_bulk_expr<T, E, F, const B: usize>(dest: &mut [T], src: &E, base: usize)
where
    T: Element,
    E: VectorExpr<Elem = T>,
    F: AssignFunctor<T>,
{
    debug_assert_eq!(dest.len() % B, 0);
    for (bi, block) in dest.chunks_exact_mut(B).enumerate() {
        let start = base + bi * B;
        for (j, slot) in block.iter_mut().enumerate() {
            F::apply(slot, src.eval(start + j));
        }
    }
}

#[inline(always)]
fn unrolled_bulk_scalar<T, F, const B: usize>(dest: &mut [T], value: T)
where
    T: Element,
    F: AssignFunctor<T>,
{
    debug_assert_eq!(dest.len() % B, 0);
    for block in dest.chunks_exact_mut(B) {
        for slot in block.iter_mut() {
            F::apply(slot, value);
        }
    }
}

// ============================================================================
// Policies
// ============================================================================

/// One element at a time, no unrolling, no threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serial;

/// Single-threaded with a `B`-element unrolled bulk loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrolled<const B: usize = DEFAULT_BLOCK>;

/// Rayon fan-out over contiguous block-aligned chunks of the bulk range,
/// each chunk unrolled by `B`. Falls back to [`Unrolled`] below
/// [`MIN_PARALLEL_LENGTH`] elements or when the `parallel` feature is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parallel<const B: usize = DEFAULT_BLOCK>;

/// Policy used by the operator surface.
pub type DefaultPolicy = Parallel<DEFAULT_BLOCK>;

impl ExecutionPolicy for Serial {
    fn assign_expr<T, E, F>(dest: &mut [T], src: &E)
    where
        T: Element,
        E: VectorExpr<Elem = T> + Sync,
        F: AssignFunctor<T>,
    {
        for (i, slot) in dest.iter_mut().enumerate() {
            F::apply(slot, src.eval(i));
        }
    }

    fn assign_scalar<T, F>(dest: &mut [T], value: T)
    where
        T: Element,
        F: AssignFunctor<T>,
    {
        for slot in dest.iter_mut() {
            F::apply(slot, value);
        }
    }
}

impl<const B: usize> ExecutionPolicy for Unrolled<B> {
    fn assign_expr<T, E, F>(dest: &mut [T], src: &E)
    where
        T: Element,
        E: VectorExpr<Elem = T> + Sync,
        F: AssignFunctor<T>,
    {
        let n = dest.len();
        let bulk = n / B * B;
        let (head, tail) = dest.split_at_mut(bulk);
        unrolled_bulk_expr::<T, E, F, B>(head, src, 0);
        for (j, slot) in tail.iter_mut().enumerate() {
            F::apply(slot, src.eval(bulk + j));
        }
    }

    fn assign_scalar<T, F>(dest: &mut [T], value: T)
    where
        T: Element,
        F: AssignFunctor<T>,
    {
        let n = dest.len();
        let bulk = n / B * B;
        let (head, tail) = dest.split_at_mut(bulk);
        unrolled_bulk_scalar::<T, F, B>(head, value);
        for slot in tail.iter_mut() {
            F::apply(slot, value);
        }
    }
}

impl<const B: usize> ExecutionPolicy for Parallel<B> {
    fn assign_expr<T, E, F>(dest: &mut [T], src: &E)
    where
        T: Element,
        E: VectorExpr<Elem = T> + Sync,
        F: AssignFunctor<T>,
    {
        #[cfg(feature = "parallel")]
        {
            let n = dest.len();
            if n >= MIN_PARALLEL_LENGTH {
                let bulk = n / B * B;
                let threads = rayon::current_num_threads().max(1);
                let chunk = (bulk / B).div_ceil(threads) * B;
                if trace_enabled() {
                    eprintln!(
                        "exprvec: parallel assign of {n} elements, {} chunks of {chunk}",
                        bulk.div_ceil(chunk.max(1))
                    );
                }
                let (head, tail) = dest.split_at_mut(bulk);
                head.par_chunks_mut(chunk)
                    .enumerate()
                    .for_each(|(k, piece)| {
                        unrolled_bulk_expr::<T, E, F, B>(piece, src, k * chunk);
                    });
                for (j, slot) in tail.iter_mut().enumerate() {
                    F::apply(slot, src.eval(bulk + j));
                }
                return;
            }
        }
        Unrolled::<B>::assign_expr::<T, E, F>(dest, src);
    }

    fn assign_scalar<T, F>(dest: &mut [T], value: T)
    where
        T: Element,
        F: AssignFunctor<T>,
    {
        #[cfg(feature = "parallel")]
        {
            let n = dest.len();
            if n >= MIN_PARALLEL_LENGTH {
                let bulk = n / B * B;
                let chunk = {
                    let threads = rayon::current_num_threads().max(1);
                    (bulk / B).div_ceil(threads) * B
                };
                let (head, tail) = dest.split_at_mut(bulk);
                head.par_chunks_mut(chunk).for_each(|piece| {
                    unrolled_bulk_scalar::<T, F, B>(piece, value);
                });
                for slot in tail.iter_mut() {
                    F::apply(slot, value);
                }
                return;
            }
        }
        Unrolled::<B>::assign_scalar::<T, F>(dest, value);
    }
}
