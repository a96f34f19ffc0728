//! In-place sorting algorithms that take quadratic time.

use crate::sortable::{cmp_keys, Sortable};
use contracts::*;
use mirai_annotations::debug_checked_verify;
use std::cmp::Ordering;

/// Sorts `v` by key, swapping adjacent out-of-order pairs.
///
/// Makes exactly `v.len() - 1` passes over the whole slice, whether or not a pass changed
/// anything. Stable.
pub fn bubble_sort<T: Sortable>(v: &mut [T]) {
    bubble_sort_by(v, cmp_keys)
}

/// Like [`bubble_sort`], but ordered by `cmp`.
pub fn bubble_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let len = v.len();
    for _ in 1..len {
        for k in 0..len - 1 {
            if cmp(&v[k + 1], &v[k]).is_lt() {
                v.swap(k, k + 1);
            }
        }
    }
}

/// Sorts `v` by key, inserting each element into the sorted prefix before it.
///
/// Stable. Takes linear time if `v` is already sorted.
pub fn insertion_sort<T: Sortable>(v: &mut [T]) {
    insertion_sort_by(v, cmp_keys)
}

/// Like [`insertion_sort`], but ordered by `cmp`.
pub fn insertion_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let is_less = &mut |a: &T, b: &T| cmp(a, b).is_lt();

    for i in 1..v.len() {
        shift_tail(&mut v[..=i], is_less);
    }
}

/// Shifts the last element to the left until it encounters a smaller or equal element.
///
/// Everything it passes over moves one place to the right, and the last element drops into the
/// hole that is left behind.
#[debug_requires(!v.is_empty())]
fn shift_tail<T>(v: &mut [T], is_less: &mut impl FnMut(&T, &T) -> bool) {
    let last = v.len() - 1;

    let mut hole = last;
    while hole > 0 && is_less(&v[last], &v[hole - 1]) {
        hole -= 1;
    }

    if hole != last {
        v[hole..].rotate_right(1);
    }
}

/// Sorts `v` by key with alternating forward and backward bubble passes.
///
/// Each forward pass carries the largest unsorted element to the top of the active range and
/// each backward pass carries the smallest one to the bottom. Returns as soon as a pass makes no
/// swaps. Stable.
pub fn cocktail_sort<T: Sortable>(v: &mut [T]) {
    cocktail_sort_by(v, cmp_keys)
}

/// Like [`cocktail_sort`], but ordered by `cmp`.
pub fn cocktail_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    if v.len() < 2 {
        return;
    }

    // Adjacent pairs `(i, i + 1)` with `begin <= i < end` are still unsorted.
    let mut begin = 0;
    let mut end = v.len() - 1;

    loop {
        let mut swapped = false;
        for i in begin..end {
            if cmp(&v[i + 1], &v[i]).is_lt() {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        // A swap happened, so `begin < end`.
        debug_checked_verify!(begin < end);
        end -= 1;

        swapped = false;
        for i in (begin..end).rev() {
            if cmp(&v[i + 1], &v[i]).is_lt() {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        begin += 1;
    }
}

/// Sorts `v` by moving the minimum of the unsorted suffix to its front, one position at a time.
///
/// Uses `Ord` rather than the integer key. Performs at most `v.len() - 1` swaps. Ties are
/// resolved in favor of the first minimum found, but the swap itself can carry an element past
/// its equals, so the sort is not stable.
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    selection_sort_by(v, Ord::cmp)
}

/// Like [`selection_sort`], but ordered by `cmp`.
pub fn selection_sort_by<T>(v: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    for i in 0..v.len().saturating_sub(1) {
        let min = i + position_of_min(&v[i..], &mut cmp);
        if min != i {
            v.swap(i, min);
        }
    }
}

/// Returns the index of the first minimum of `s`.
#[debug_requires(!s.is_empty())]
#[debug_ensures(ret < s.len())]
fn position_of_min<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> usize {
    let mut min = 0;
    for j in 1..s.len() {
        if cmp(&s[j], &s[min]).is_lt() {
            min = j;
        }
    }

    min
}
