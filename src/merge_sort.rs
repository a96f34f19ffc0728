//! A top-down merge sort over owned blocks.

use crate::sortable::{cmp_keys, Sortable};
use crate::Either;
use alloc::boxed::Box;
use alloc::vec::Vec;
use contracts::*;
use std::cmp::Ordering;

/// Sorts `seq` by key and returns the sorted elements in a new block.
///
/// The input is split in half by value, both halves are sorted recursively, and the results are
/// merged. Stable, and `O(n log n)` regardless of the input.
#[must_use]
pub fn merge_sort<T: Sortable>(seq: impl Into<Box<[T]>>) -> Box<[T]> {
    merge_sort_by(seq, cmp_keys)
}

/// Like [`merge_sort`], but ordered by `cmp`.
#[must_use]
pub fn merge_sort_by<T>(
    seq: impl Into<Box<[T]>>,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> Box<[T]> {
    sort_owned(seq.into(), &mut cmp)
}

fn sort_owned<T>(seq: Box<[T]>, cmp: &mut impl FnMut(&T, &T) -> Ordering) -> Box<[T]> {
    if seq.len() <= 1 {
        return seq;
    }

    let mut left = seq.into_vec();
    let right = left.split_off(left.len() / 2);

    let left = sort_owned(left.into_boxed_slice(), cmp);
    let right = sort_owned(right.into_boxed_slice(), cmp);

    // Ties go to the left half, which keeps the sort stable.
    merge(left, right, cmp, Either::Left(()))
}

/// Merges two sorted blocks into a new one.
///
/// When the front elements of `l` and `r` compare equal, the one from the side given by `prefer`
/// is taken first.
#[debug_ensures(ret.len() == old(l.len() + r.len()))]
fn merge<T>(
    l: Box<[T]>,
    r: Box<[T]>,
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
    prefer: Either,
) -> Box<[T]> {
    let mut out = Vec::with_capacity(l.len() + r.len());
    let mut l = l.into_vec().into_iter().peekable();
    let mut r = r.into_vec().into_iter().peekable();

    loop {
        let take_left = match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => {
                let ord = cmp(a, b);
                ord.is_lt() || ord.is_eq() && prefer.is_left()
            }
            _ => break,
        };

        out.extend(if take_left { l.next() } else { r.next() });
    }

    // At most one of these is non-empty.
    out.extend(l);
    out.extend(r);
    out.into_boxed_slice()
}
