//! Errors raised by the sequence utilities.

use static_assertions::assert_impl_all;
use std::fmt;

/// An index or range that does not fit inside the sequence it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A single index was `>= len`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// One of the bounds of a `start..end` range was `> len`.
    RangeOutOfBounds {
        /// Inclusive lower bound.
        start: usize,
        /// Exclusive upper bound.
        end: usize,
        /// Length of the sequence.
        len: usize,
    },
}

assert_impl_all!(SequenceError: Copy, Send, Sync, fmt::Debug, fmt::Display);

impl SequenceError {
    /// Checks that `index` addresses an element of a sequence of length `len`.
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SequenceError> {
        if index < len {
            Ok(())
        } else {
            Err(SequenceError::IndexOutOfBounds { index, len })
        }
    }

    /// Checks that both bounds of `start..end` lie within `0..=len`.
    ///
    /// An inverted range is accepted here; callers treat it as empty.
    pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<(), SequenceError> {
        if start <= len && end <= len {
            Ok(())
        } else {
            Err(SequenceError::RangeOutOfBounds { start, end, len })
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SequenceError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for sequence of length {}", index, len)
            }
            SequenceError::RangeOutOfBounds { start, end, len } => write!(
                f,
                "range {}..{} out of bounds for sequence of length {}",
                start, end, len
            ),
        }
    }
}

impl std::error::Error for SequenceError {}
