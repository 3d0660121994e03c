use log::trace;
use ndarray::Array2;

use crate::error::{Error, Result};

/// Prefix-length table for the longest common subsequence of two sequences.
///
/// `get(i, j)` is the LCS length of the first `i` elements of `a` and the
/// first `j` elements of `b`. Row 0 and column 0 hold the empty-prefix base
/// case and are always zero.
///
/// # Examples
///
/// ```
/// use delete_distance::LcsTable;
///
/// let table = LcsTable::build(b"sea", b"eat");
/// assert_eq!(table.rows(), 4);
/// assert_eq!(table.cols(), 4);
/// assert_eq!(table.lcs_len(), 2); // "ea"
/// assert_eq!(table.get(0, 2), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Array2<usize>,
}

impl LcsTable {
    /// Builds the full `(a.len() + 1) x (b.len() + 1)` table.
    ///
    /// Panics if the table cannot be allocated; see [`LcsTable::try_build`].
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let mut cells = Array2::zeros((a.len() + 1, b.len() + 1));
        fill(&mut cells, a, b);
        LcsTable { cells }
    }

    /// Like [`LcsTable::build`], but reports an oversized table as an error
    /// instead of aborting.
    ///
    /// # Examples
    ///
    /// ```
    /// use delete_distance::LcsTable;
    ///
    /// let table = LcsTable::try_build(&[1, 2, 3], &[2, 3, 4]).unwrap();
    /// assert_eq!(table.lcs_len(), 2);
    /// ```
    pub fn try_build<T: PartialEq>(a: &[T], b: &[T]) -> Result<Self> {
        let (rows, cols, size) = checked_shape(a.len(), b.len())?;

        let mut storage: Vec<usize> = Vec::new();
        storage
            .try_reserve_exact(size)
            .map_err(|_| Error::table_too_large(rows, cols))?;
        storage.resize(size, 0);

        let mut cells = Array2::from_shape_vec((rows, cols), storage)?;
        fill(&mut cells, a, b);
        Ok(LcsTable { cells })
    }

    /// Number of rows, `a.len() + 1`.
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns, `b.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// LCS length of the prefixes `a[..i]` and `b[..j]`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.cells.get((i, j)).copied()
    }

    /// LCS length of the complete sequences.
    pub fn lcs_len(&self) -> usize {
        self.cells[[self.rows() - 1, self.cols() - 1]]
    }

    /// Walks the table back from the bottom-right corner and returns the
    /// `(index in a, index in b)` pairs of one longest common subsequence,
    /// in ascending order.
    ///
    /// `a` and `b` must be the sequences the table was built from.
    pub(crate) fn matched_pairs<T: PartialEq>(&self, a: &[T], b: &[T]) -> Vec<(usize, usize)> {
        debug_assert_eq!(self.rows(), a.len() + 1);
        debug_assert_eq!(self.cols(), b.len() + 1);

        let mut i = a.len();
        let mut j = b.len();
        let mut pairs = Vec::with_capacity(self.lcs_len());

        while i > 0 && j > 0 {
            if a[i - 1] == b[j - 1] {
                pairs.push((i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if self.cells[[i - 1, j]] > self.cells[[i, j - 1]] {
                i -= 1;
            } else {
                j -= 1;
            }
        }

        // Collected back to front.
        pairs.reverse();
        pairs
    }
}

/// Dimensions and cell count of the table for sequences of length `m` and `n`.
fn checked_shape(m: usize, n: usize) -> Result<(usize, usize, usize)> {
    let (rows, cols) = match (m.checked_add(1), n.checked_add(1)) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => return Err(Error::table_too_large(m, n)),
    };
    let size = rows
        .checked_mul(cols)
        .ok_or_else(|| Error::table_too_large(rows, cols))?;
    Ok((rows, cols, size))
}

/// Fills rows and columns `1..` from the zeroed base case.
///
/// DP index `i` covers the first `i` elements, so the element compared at
/// `(i, j)` is `a[i - 1]` against `b[j - 1]`.
fn fill<T: PartialEq>(cells: &mut Array2<usize>, a: &[T], b: &[T]) {
    trace!("filling LCS table of {} x {} cells", a.len() + 1, b.len() + 1);

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            cells[[i, j]] = if a[i - 1] == b[j - 1] {
                cells[[i - 1, j - 1]] + 1
            } else {
                cells[[i - 1, j]].max(cells[[i, j - 1]])
            };
        }
    }
}

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// Strings are compared by `char`.
///
/// # Examples
///
/// ```
/// use delete_distance::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// let s1 = "ABCDGH";
/// let s2 = "AEDFHR";
/// assert_eq!(lcs_length(s1, s2), 3); // "ADH" is one possible LCS
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_length_of(&a_chars, &b_chars)
}

/// Returns the LCS length of two arbitrary sequences.
pub fn lcs_length_of<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    LcsTable::build(a, b).lcs_len()
}

/// Reconstructs and returns one actual LCS (Longest Common Subsequence)
/// between `a` and `b`.
///
/// If there are multiple subsequences with the same length, this returns
/// just one of them. Returns an empty string if there's no common subsequence.
///
/// # Examples
///
/// ```
/// use delete_distance::cs::dynamic::longest_common_subsequence::lcs_sequence;
///
/// let s1 = "ABCDGH";
/// let s2 = "AEDFHR";
/// let lcs = lcs_sequence(s1, s2);
/// assert_eq!(lcs.len(), 3); // "ADH" is one possible LCS
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_of(&a_chars, &b_chars).into_iter().collect()
}

/// Generic form of [`lcs_sequence`]: one longest common subsequence of two slices.
pub fn lcs_of<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let table = LcsTable::build(a, b);
    table
        .matched_pairs(a, b)
        .into_iter()
        .map(|(i, _)| a[i].clone())
        .collect()
}
