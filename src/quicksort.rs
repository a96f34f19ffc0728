//! Quicksort, as an in-place unstable sort and as a copying stable one.

use crate::seq;
use crate::sortable::{cmp_keys, Sortable};
use alloc::boxed::Box;
use alloc::vec::Vec;
use contracts::*;
use mirai_annotations::debug_checked_verify;
use std::cmp::Ordering;

/// Sorts `seq` by key with one of the two quicksort variants and returns the sorted block.
///
/// If `stable` is set, equal keys keep their input order and new blocks are allocated at every
/// level of recursion (see [`stable_quicksort`]). Otherwise `seq` is partitioned in place (see
/// [`unstable_quicksort`]), which is faster. The returned block replaces the one passed in.
#[must_use]
pub fn quicksort<T: Sortable>(seq: impl Into<Box<[T]>>, stable: bool) -> Box<[T]> {
    quicksort_by(seq, stable, cmp_keys)
}

/// Like [`quicksort`], but ordered by `cmp`.
#[must_use]
pub fn quicksort_by<T>(
    seq: impl Into<Box<[T]>>,
    stable: bool,
    cmp: impl FnMut(&T, &T) -> Ordering,
) -> Box<[T]> {
    if stable {
        stable_quicksort_by(seq, cmp)
    } else {
        let mut seq: Box<[T]> = seq.into();
        unstable_quicksort_by(&mut seq, cmp);
        seq
    }
}

/// Sorts `v` by key in place with a Lomuto-partition quicksort.
///
/// The pivot of each range is its middle element. Not stable. Takes `O(n log n)` time on average
/// but `O(n^2)` on adversarial inputs, including inputs with many equal keys.
///
/// Input that is already sorted keeps its keys in place, but elements with equal keys may come
/// back in a different order.
pub fn unstable_quicksort<T: Sortable>(v: &mut [T]) {
    unstable_quicksort_by(v, cmp_keys)
}

/// Like [`unstable_quicksort`], but ordered by `cmp`.
pub fn unstable_quicksort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    recurse(v, &mut |a, b| cmp(a, b).is_lt());
}

/// Sorts `v`, recursing into the shorter side of each partition and looping on the longer one.
///
/// This keeps the stack depth logarithmic even when the partitions are maximally unbalanced.
fn recurse<'a, T>(mut v: &'a mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    while v.len() > 1 {
        // The middle of the inclusive range `0..=len - 1`.
        let pivot = (v.len() - 1) / 2;
        let mid = partition(v, pivot, is_less);

        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            recurse(left, is_less);
            v = right;
        } else {
            recurse(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around the element at `pivot` and returns the index the pivot ends up at.
///
/// Everything before that index is less than the pivot; nothing after it is.
#[debug_requires(pivot < v.len())]
#[debug_ensures(ret < old(v.len()))]
fn partition<T>(v: &mut [T], pivot: usize, is_less: &mut impl FnMut(&T, &T) -> bool) -> usize {
    // Park the pivot at the end, out of the way of the scan.
    let last = v.len() - 1;
    v.swap(pivot, last);

    // INVARIANT: every element of `v[..store]` is less than the pivot.
    let mut store = 0;
    for i in 0..last {
        if is_less(&v[i], &v[last]) {
            v.swap(i, store);
            store += 1;
        }
    }

    debug_checked_verify!(store <= last);
    v.swap(store, last);
    store
}

/// Sorts `seq` by key with a copying quicksort that keeps equal keys in input order.
///
/// The pivot is the middle element. Every other element is moved into a lower or an upper group,
/// preserving relative order within each group. An element whose key equals the pivot's goes to
/// the lower group if it preceded the pivot and to the upper group if it followed it. Both groups
/// are sorted recursively and joined around the pivot.
///
/// The sorted elements are returned in a new block.
#[must_use]
pub fn stable_quicksort<T: Sortable>(seq: impl Into<Box<[T]>>) -> Box<[T]> {
    stable_quicksort_by(seq, cmp_keys)
}

/// Like [`stable_quicksort`], but ordered by `cmp`.
#[must_use]
pub fn stable_quicksort_by<T>(
    seq: impl Into<Box<[T]>>,
    mut cmp: impl FnMut(&T, &T) -> Ordering,
) -> Box<[T]> {
    stable_recurse(seq.into(), &mut |a, b| cmp(a, b).is_lt())
}

fn stable_recurse<T>(seq: Box<[T]>, is_less: &mut impl FnMut(&T, &T) -> bool) -> Box<[T]> {
    if seq.len() <= 1 {
        return seq;
    }

    let mid = seq.len() / 2;
    let mut rest = seq.into_vec();
    let pivot = rest.remove(mid);

    let mut lower = Vec::new();
    let mut upper = Vec::new();
    for (i, el) in rest.into_iter().enumerate() {
        // `rest` no longer holds the pivot, so indices from `mid` on were after it.
        let before_pivot = i < mid;
        let to_lower = if before_pivot {
            !is_less(&pivot, &el)
        } else {
            is_less(&el, &pivot)
        };

        if to_lower {
            lower.push(el);
        } else {
            upper.push(el);
        }
    }

    let lower = stable_recurse(lower.into_boxed_slice(), is_less);
    let upper = stable_recurse(upper.into_boxed_slice(), is_less);
    seq::concatenate3(lower, Box::new([pivot]), upper)
}
