//! The ordering capability used by the key-based sorts.

use alloc::boxed::Box;
use std::cmp::Ordering;

/// A value that exposes an integer key for sorting.
///
/// Elements are ordered by ascending key. Elements with equal keys are tied: the stable sorts
/// keep them in input order, the unstable ones make no promise.
///
/// The key must be deterministic for the duration of a sort. If it is not, the output order is
/// unspecified, but every sort still terminates and returns a permutation of its input.
pub trait Sortable {
    /// Returns the key this value is ranked by.
    fn sort_value(&self) -> i64;
}

macro_rules! impl_sortable_lossless {
    ($($t:ty),*) => {
        $(
            impl Sortable for $t {
                #[inline]
                fn sort_value(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

impl_sortable_lossless!(i8, i16, i32, i64, u8, u16, u32, bool);

impl<T: Sortable + ?Sized> Sortable for &T {
    #[inline]
    fn sort_value(&self) -> i64 {
        (**self).sort_value()
    }
}

impl<T: Sortable + ?Sized> Sortable for Box<T> {
    #[inline]
    fn sort_value(&self) -> i64 {
        (**self).sort_value()
    }
}

/// Compares two values by key.
#[inline]
pub(crate) fn cmp_keys<T: Sortable>(a: &T, b: &T) -> Ordering {
    a.sort_value().cmp(&b.sort_value())
}
