//! Simple sorting algorithms over sequences of [`Sortable`] elements, plus the fixed-size
//! sequence primitives ([`seq`]) they are built from.
//!
//! Two kinds of sort are provided:
//!
//! - In-place sorts take `&mut [T]` and leave the sorted elements in the caller's slice:
//!   [`bubble_sort`], [`insertion_sort`], [`cocktail_sort`], [`selection_sort`] and
//!   [`unstable_quicksort`].
//! - Copying sorts take ownership of the sequence and return the sorted elements in a new block,
//!   which the caller must use in place of the original: [`stable_quicksort`], [`merge_sort`] and
//!   [`quicksort`].
//!
//! Every sort except [`selection_sort`] orders elements by [`Sortable::sort_value`].
//! [`selection_sort`] uses `Ord`. Each also has a `*_by` variant that takes a comparator.

#![cfg_attr(not(test), no_std)]

#[cfg(not(test))]
extern crate core as std;

extern crate alloc;

#[cfg(test)]
mod test_utils;

mod error;
mod merge_sort;
mod quadratic_sort;
mod quicksort;
pub mod seq;
mod sortable;

pub use error::SequenceError;
pub use merge_sort::{merge_sort, merge_sort_by};
pub use quadratic_sort::{
    bubble_sort, bubble_sort_by, cocktail_sort, cocktail_sort_by, insertion_sort,
    insertion_sort_by, selection_sort, selection_sort_by,
};
pub use quicksort::{
    quicksort, quicksort_by, stable_quicksort, stable_quicksort_by, unstable_quicksort,
    unstable_quicksort_by,
};
pub use sortable::Sortable;

type Either<T = ()> = either::Either<T, T>;
