//! Primitive operations on fixed-length sequences.
//!
//! Apart from [`swap`], every operation here produces a new, exactly-sized block rather than
//! growing or shrinking its input. Blocks passed by value are consumed, so the caller can never
//! observe a partially modified original.
//!
//! The in-place sorts index slices directly and do not go through these checked operations.
//! The stable quicksort builds its result with [`concatenate3`].

use crate::SequenceError;
use alloc::boxed::Box;
use alloc::vec::Vec;
use contracts::*;

/// Exchanges the elements at `i` and `j`.
///
/// Fails if either index is out of bounds, in which case `seq` is left untouched.
pub fn swap<T>(i: usize, j: usize, seq: &mut [T]) -> Result<(), SequenceError> {
    SequenceError::check_index(i, seq.len())?;
    SequenceError::check_index(j, seq.len())?;
    seq.swap(i, j);
    Ok(())
}

/// Returns a copy of the elements in `start..end`.
///
/// A range with `end <= start` produces an empty block. Both bounds must be at most
/// `seq.len()`.
pub fn subarray<T: Clone>(start: usize, end: usize, seq: &[T]) -> Result<Box<[T]>, SequenceError> {
    SequenceError::check_range(start, end, seq.len())?;
    if end <= start {
        return Ok(Box::default());
    }

    Ok(seq[start..end].into())
}

/// Returns a block one element longer than `seq`, with `value` at the end.
#[debug_ensures(ret.len() == old(seq.len()) + 1)]
pub fn append<T>(value: T, seq: Box<[T]>) -> Box<[T]> {
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.extend(seq.into_vec());
    out.push(value);
    out.into_boxed_slice()
}

/// Returns a block one element longer than `seq`, with `value` at the start.
#[debug_ensures(ret.len() == old(seq.len()) + 1)]
pub fn prepend<T>(value: T, seq: Box<[T]>) -> Box<[T]> {
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.push(value);
    out.extend(seq.into_vec());
    out.into_boxed_slice()
}

/// Returns a block one element shorter than `seq` along with the element that was left out.
///
/// The remaining elements keep their relative order. If `index` is out of bounds, `seq` is
/// dropped and an error is returned.
pub fn remove<T>(index: usize, seq: Box<[T]>) -> Result<(Box<[T]>, T), SequenceError> {
    SequenceError::check_index(index, seq.len())?;

    let mut rest = seq.into_vec();
    let removed = rest.remove(index);
    Ok((rest.into_boxed_slice(), removed))
}

/// Returns a block holding the elements of `a` followed by those of `b`.
#[debug_ensures(ret.len() == old(a.len() + b.len()))]
pub fn concatenate<T>(a: Box<[T]>, b: Box<[T]>) -> Box<[T]> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend(a.into_vec());
    out.extend(b.into_vec());
    out.into_boxed_slice()
}

/// Returns a block holding the elements of `a`, `b` and `c` in that order.
///
/// Equivalent to `concatenate(a, concatenate(b, c))`.
pub fn concatenate3<T>(a: Box<[T]>, b: Box<[T]>, c: Box<[T]>) -> Box<[T]> {
    concatenate(a, concatenate(b, c))
}
