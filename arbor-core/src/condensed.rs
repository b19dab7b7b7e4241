//! Condensed dissimilarity matrix addressing.
//!
//! A condensed matrix stores the strict upper triangle of a symmetric
//! `N x N` dissimilarity matrix row by row, so the pair `(i, j)` with `i < j`
//! lives at `N*i - i*(i+1)/2 + (j - i - 1)`. Every other component reads and
//! writes dissimilarities through this addressing and nothing else.

use std::ops::{Index, IndexMut};

/// Returns the number of entries in a condensed matrix over `observations`
/// points, or `None` when `N*(N-1)/2` overflows `usize`.
///
/// # Examples
/// ```
/// use arbor_core::condensed_len;
///
/// assert_eq!(condensed_len(0), Some(0));
/// assert_eq!(condensed_len(1), Some(0));
/// assert_eq!(condensed_len(6), Some(15));
/// assert_eq!(condensed_len(usize::MAX), None);
/// ```
#[must_use]
pub const fn condensed_len(observations: usize) -> Option<usize> {
    if observations < 2 {
        return Some(0);
    }
    // One of two consecutive integers is even, so halve that one first.
    let (left, right) = if observations % 2 == 0 {
        (observations / 2, observations - 1)
    } else {
        (observations, (observations - 1) / 2)
    };
    left.checked_mul(right)
}

/// Returns the condensed offset of the unordered pair `(i, j)`.
///
/// The result is the same for `(i, j)` and `(j, i)`. Both indices must be
/// distinct and smaller than `observations`; this is checked in debug builds
/// only.
///
/// # Examples
/// ```
/// use arbor_core::condensed_offset;
///
/// assert_eq!(condensed_offset(6, 0, 1), 0);
/// assert_eq!(condensed_offset(6, 2, 4), 10);
/// assert_eq!(condensed_offset(6, 4, 2), 10);
/// assert_eq!(condensed_offset(6, 4, 5), 14);
/// ```
#[inline]
#[must_use]
pub const fn condensed_offset(observations: usize, i: usize, j: usize) -> usize {
    debug_assert!(i != j, "the diagonal is not stored");
    let (row, column) = if i < j { (i, j) } else { (j, i) };
    debug_assert!(column < observations, "index out of range");
    observations * row - row * (row + 1) / 2 + (column - row - 1)
}

/// Inverts [`condensed_offset`], returning the `(row, column)` pair with
/// `row < column` stored at `offset`.
///
/// Returns `None` when `offset` lies outside a matrix over `observations`
/// points.
///
/// # Examples
/// ```
/// use arbor_core::condensed_pair;
///
/// assert_eq!(condensed_pair(6, 0), Some((0, 1)));
/// assert_eq!(condensed_pair(6, 10), Some((2, 4)));
/// assert_eq!(condensed_pair(6, 15), None);
/// ```
#[must_use]
pub fn condensed_pair(observations: usize, offset: usize) -> Option<(usize, usize)> {
    let len = condensed_len(observations)?;
    if offset >= len {
        return None;
    }
    let mut row_start = 0;
    for row in 0..observations - 1 {
        let row_len = observations - row - 1;
        if offset < row_start + row_len {
            return Some((row, row + 1 + offset - row_start));
        }
        row_start += row_len;
    }
    None
}

/// Mutable, symmetric 2-D view over a borrowed condensed matrix.
///
/// `matrix[[i, j]]` and `matrix[[j, i]]` address the same entry. Indexing the
/// diagonal is a caller bug.
#[derive(Debug)]
pub(crate) struct CondensedMatrix<'a, T> {
    data: &'a mut [T],
    observations: usize,
}

impl<'a, T> CondensedMatrix<'a, T> {
    /// Wraps `data`, which the caller has already checked holds
    /// `condensed_len(observations)` entries.
    pub(crate) fn new(data: &'a mut [T], observations: usize) -> Self {
        debug_assert_eq!(Some(data.len()), condensed_len(observations));
        Self { data, observations }
    }

    #[rustfmt::skip]
    pub(crate) fn observations(&self) -> usize { self.observations }
}

impl<T> Index<[usize; 2]> for CondensedMatrix<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, [i, j]: [usize; 2]) -> &T {
        &self.data[condensed_offset(self.observations, i, j)]
    }
}

impl<T> IndexMut<[usize; 2]> for CondensedMatrix<'_, T> {
    #[inline]
    fn index_mut(&mut self, [i, j]: [usize; 2]) -> &mut T {
        &mut self.data[condensed_offset(self.observations, i, j)]
    }
}
