//! Line diff engine: positional comparison of two line sequences.
//!
//! The default policy compares lines by index, not by sequence alignment:
//! line `i` on the left is compared to line `i` on the right, and a missing
//! line never equals a present one. A single inserted line therefore marks
//! every following line as different. That is the documented behavior, kept
//! on purpose; [`DiffPolicy::Aligned`] is the opt-in LCS-based alternative.

use std::collections::BTreeSet;

/// Which alignment strategy the diff engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffPolicy {
    /// Index-aligned equality comparison (the default).
    #[default]
    Positional,
    /// Longest-common-subsequence alignment; only inserted, removed, or
    /// replaced lines are marked.
    Aligned,
}

/// The differing line indices for each side.
///
/// Indices are 0-based. `left` is a subset of `0..left_len` and `right` a
/// subset of `0..right_len`; an index present on only one side means the
/// other side has no line at that position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineDiff {
    /// Differing line indices in the left buffer.
    pub left: BTreeSet<usize>,
    /// Differing line indices in the right buffer.
    pub right: BTreeSet<usize>,
}

impl LineDiff {
    /// True when no line differs on either side.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Compute the line diff under the given policy.
pub fn diff_lines_with(left: &[String], right: &[String], policy: DiffPolicy) -> LineDiff {
    match policy {
        DiffPolicy::Positional => diff_lines(left, right),
        DiffPolicy::Aligned => diff_lines_aligned(left, right),
    }
}

/// Positional line diff.
///
/// For each index up to the longer side's length, the two lines are compared
/// by exact string equality; an absent line compares unequal to everything.
/// Pure and total: empty inputs produce empty sets.
pub fn diff_lines(left: &[String], right: &[String]) -> LineDiff {
    let mut diff = LineDiff::default();
    let max_lines = left.len().max(right.len());

    for i in 0..max_lines {
        if left.get(i) != right.get(i) {
            if i < left.len() {
                diff.left.insert(i);
            }
            if i < right.len() {
                diff.right.insert(i);
            }
        }
    }

    diff
}

/// LCS-aligned line diff.
///
/// Lines belonging to the longest common subsequence are unmarked; every
/// other line is marked on its own side. Classic O(n*m) dynamic program,
/// fine at code-sample scale.
pub fn diff_lines_aligned(left: &[String], right: &[String]) -> LineDiff {
    let n = left.len();
    let m = right.len();

    // lcs[i][j] = LCS length of left[i..] and right[j..]
    let mut lcs = vec![vec![0_usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if left[i] == right[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut diff = LineDiff::default();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if left[i] == right[j] {
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            diff.left.insert(i);
            i += 1;
        } else {
            diff.right.insert(j);
            j += 1;
        }
    }
    diff.left.extend(i..n);
    diff.right.extend(j..m);

    diff
}
