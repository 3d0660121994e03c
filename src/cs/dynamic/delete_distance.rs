use log::debug;

use super::longest_common_subsequence::LcsTable;
use crate::error::Result;

/// Computes the minimum number of single-element deletions, counted across
/// both sequences, that leave `a` and `b` identical.
///
/// What survives is a longest common subsequence, so the answer is
/// `a.len() + b.len() - 2 * LCS(a, b)`. Empty inputs are valid: the distance
/// to an empty sequence is the length of the other one.
///
/// # Examples
///
/// ```
/// use delete_distance::min_deletions;
///
/// // Delete 's' from "sea" and 't' from "eat", leaving "ea".
/// assert_eq!(min_deletions(b"sea", b"eat"), 2);
/// assert_eq!(min_deletions(&[1, 2, 3], &[1, 2, 3]), 0);
/// assert_eq!(min_deletions::<u8>(&[], &[]), 0);
/// ```
///
/// # Complexity
/// * Time: O(m * n)
/// * Space: O(m * n) for the table
pub fn min_deletions<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let table = LcsTable::build(a, b);
    distance_from(&table, a.len(), b.len())
}

/// Character-wise [`min_deletions`] for string slices.
///
/// # Examples
///
/// ```
/// use delete_distance::min_deletions_str;
///
/// assert_eq!(min_deletions_str("leetcode", "etco"), 4);
/// assert_eq!(min_deletions_str("abc", "def"), 6);
/// ```
pub fn min_deletions_str(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    min_deletions(&a_chars, &b_chars)
}

/// Fallible [`min_deletions`]: returns an error instead of aborting when the
/// DP table cannot be sized or allocated.
///
/// # Examples
///
/// ```
/// use delete_distance::try_min_deletions;
///
/// assert_eq!(try_min_deletions(b"sea", b"eat").unwrap(), 2);
/// ```
pub fn try_min_deletions<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize> {
    let table = LcsTable::try_build(a, b)?;
    Ok(distance_from(&table, a.len(), b.len()))
}

/// Delete distance scaled into `[0.0, 1.0]` by the combined length.
///
/// `0.0` means identical, `1.0` means nothing in common. Two empty sequences
/// are identical.
///
/// # Examples
///
/// ```
/// use delete_distance::normalized_delete_distance;
///
/// assert_eq!(normalized_delete_distance(b"abc", b"def"), 1.0);
/// assert_eq!(normalized_delete_distance(b"sea", b"eat"), 2.0 / 6.0);
/// assert_eq!(normalized_delete_distance::<u8>(&[], &[]), 0.0);
/// ```
pub fn normalized_delete_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    min_deletions(a, b) as f64 / total as f64
}

/// One concrete way to reach the minimum: the indices to delete from each
/// input and the common subsequence that remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPlan<T> {
    /// The longest common subsequence left on both sides.
    pub kept: Vec<T>,
    /// Ascending indices into `a` that are deleted.
    pub deleted_from_a: Vec<usize>,
    /// Ascending indices into `b` that are deleted.
    pub deleted_from_b: Vec<usize>,
}

impl<T> DeletionPlan<T> {
    /// Total deletions across both sequences.
    pub fn total(&self) -> usize {
        self.deleted_from_a.len() + self.deleted_from_b.len()
    }
}

/// Builds a minimal [`DeletionPlan`] for turning `a` and `b` into the same sequence.
///
/// When several longest common subsequences exist, one of them is chosen;
/// `plan.total()` always equals [`min_deletions`].
///
/// # Examples
///
/// ```
/// use delete_distance::deletion_plan;
///
/// let plan = deletion_plan(b"sea", b"eat");
/// assert_eq!(plan.kept, b"ea".to_vec());
/// assert_eq!(plan.deleted_from_a, vec![0]);
/// assert_eq!(plan.deleted_from_b, vec![2]);
/// assert_eq!(plan.total(), 2);
/// ```
pub fn deletion_plan<T: PartialEq + Clone>(a: &[T], b: &[T]) -> DeletionPlan<T> {
    let table = LcsTable::build(a, b);
    let pairs = table.matched_pairs(a, b);

    let kept = pairs.iter().map(|&(i, _)| a[i].clone()).collect();
    let deleted_from_a = unmatched(a.len(), pairs.iter().map(|&(i, _)| i));
    let deleted_from_b = unmatched(b.len(), pairs.iter().map(|&(_, j)| j));

    DeletionPlan {
        kept,
        deleted_from_a,
        deleted_from_b,
    }
}

fn distance_from(table: &LcsTable, m: usize, n: usize) -> usize {
    let lcs = table.lcs_len();
    // lcs <= min(m, n), so neither side can underflow.
    let distance = (m - lcs) + (n - lcs);
    debug!("delete distance for {m} x {n}: lcs = {lcs}, deletions = {distance}");
    distance
}

/// Indices in `0..len` not present in the ascending `matched` sequence.
fn unmatched(len: usize, matched: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut matched = matched.peekable();
    (0..len)
        .filter(|&idx| {
            if matched.peek() == Some(&idx) {
                matched.next();
                false
            } else {
                true
            }
        })
        .collect()
}
