use crate::{Either, Sortable};
use proptest::prelude::*;
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

pub fn is_sorted_by<T>(s: &[T], cmp: &mut impl FnMut(&T, &T) -> Ordering) -> bool {
    s.windows(2).all(|pair| cmp(&pair[0], &pair[1]).is_le())
}

pub fn is_sorted<T: Ord>(s: &[T]) -> bool {
    is_sorted_by(s, &mut Ord::cmp)
}

pub fn is_sorted_by_key<T: Sortable>(s: &[T]) -> bool {
    s.windows(2).all(|pair| pair[0].sort_value() <= pair[1].sort_value())
}

/// An element coupled with its index in some container.
///
/// Used to test the stability of sorting algorithms. The key-based sorts only see `key`, while
/// the derived `Ord` breaks ties by `idx`, which makes it the order a stable sort must produce.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyAndIndex<T> {
    pub key: T,
    pub idx: u32, // `u32` cuts the amount of memory required in half on 64-bit systems.
}

impl<T: fmt::Debug> fmt::Debug for KeyAndIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn to_string_subscript(mut i: usize) -> String {
            if i == 0 {
                return "₀".to_owned();
            }

            let mut ret = Vec::new();
            while i != 0 {
                let digit = i % 10;
                ret.push(char::from_u32('₀' as u32 + digit as u32).unwrap());
                i /= 10;
            }

            ret.into_iter().rev().collect()
        }

        let sub = to_string_subscript(self.idx as usize);
        write!(f, "{:?}{}", self.key, sub)
    }
}

impl<T: Sortable> Sortable for KeyAndIndex<T> {
    fn sort_value(&self) -> i64 {
        self.key.sort_value()
    }
}

impl<T> KeyAndIndex<T> {
    pub fn new(key: T, idx: usize) -> Self {
        let idx = idx.try_into().expect("Index overflowed a u32");
        KeyAndIndex { key, idx }
    }

    pub fn map_vec(v: Vec<T>) -> Vec<KeyAndIndex<T>> {
        v.into_iter()
            .enumerate()
            .map(|(idx, key)| KeyAndIndex::new(key, idx))
            .collect()
    }
}

pub fn cmp_ignore_idx<T: Ord>(a: &KeyAndIndex<T>, b: &KeyAndIndex<T>) -> Ordering {
    a.key.cmp(&b.key)
}

pub fn keys<T: Copy>(v: &[KeyAndIndex<T>]) -> Vec<T> {
    v.iter().map(|x| x.key).collect()
}

/// An element that counts how many times it has been asked for its key or compared.
#[derive(Debug)]
pub struct Probe<'a> {
    pub key: i64,
    pub calls: &'a Cell<usize>,
}

impl<'a> Probe<'a> {
    pub fn vec(keys: &[i64], calls: &'a Cell<usize>) -> Vec<Probe<'a>> {
        keys.iter().map(|&key| Probe { key, calls }).collect()
    }
}

impl Sortable for Probe<'_> {
    fn sort_value(&self) -> i64 {
        self.calls.set(self.calls.get() + 1);
        self.key
    }
}

impl PartialEq for Probe<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Probe<'_> {}

impl PartialOrd for Probe<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Probe<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.calls.set(self.calls.get() + 1);
        self.key.cmp(&other.key)
    }
}

pub fn merge_by_naive<T: Clone>(
    l: &[T],
    r: &[T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
    prefer: Either,
) -> Vec<T> {
    let mut ret = Vec::with_capacity(l.len() + r.len());

    let mut i = 0;
    let mut j = 0;

    while i < l.len() && j < r.len() {
        let cmp = cmp(&l[i], &r[j]);
        if cmp.is_lt() || cmp.is_eq() && prefer.is_left() {
            ret.push(l[i].clone());
            i += 1;
        } else {
            ret.push(r[j].clone());
            j += 1;
        }
    }

    if i == l.len() {
        ret.extend_from_slice(&r[j..]);
    } else {
        assert_eq!(j, r.len());
        ret.extend_from_slice(&l[i..]);
    }

    ret
}

/// Sorts tagged copies of `input` with `sort` and checks the result against a stable reference.
pub fn check_stable_sort(
    input: Vec<u8>,
    sort: impl FnOnce(Vec<KeyAndIndex<u8>>) -> Vec<KeyAndIndex<u8>>,
) -> Result<(), TestCaseError> {
    let input = KeyAndIndex::map_vec(input);
    let mut expected = input.clone();

    // We can use a faster, unstable sort because the index is included in the comparator.
    expected.sort_unstable();

    let output = sort(input);
    prop_assert_eq!(output, expected);
    Ok(())
}

/// Like `check_stable_sort`, but only requires the output to be ordered by key.
pub fn check_unstable_sort(
    input: Vec<u8>,
    sort: impl FnOnce(Vec<KeyAndIndex<u8>>) -> Vec<KeyAndIndex<u8>>,
) -> Result<(), TestCaseError> {
    let input = KeyAndIndex::map_vec(input);
    let mut expected = input.clone();
    expected.sort_unstable();

    let mut output = sort(input);
    prop_assert!(is_sorted_by_key(&output), "not sorted by key: {:?}", output);

    // Every tagged element must come back exactly once.
    output.sort_unstable();
    prop_assert_eq!(output, expected);
    Ok(())
}

/// Inputs with many duplicate keys, so that ties are common.
pub fn few_keys() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..8, 0..200)
}

/// Inputs spread over the whole `u8` range.
pub fn many_keys() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..200)
}

/// Calls `f` with both variants of `Either`.
pub fn for_each_side<T, E>(mut f: impl FnMut(Either) -> Result<T, E>) -> Result<T, E> {
    f(Either::Left(()))?;
    f(Either::Right(()))
}
