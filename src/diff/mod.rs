//! Line-level content diffing
//!
//! Reduces a before/after pair of full file snapshots to the ordered set of
//! *touched* fragments: the lines of the new snapshot that were inserted or
//! changed relative to the old one. Unchanged lines never appear in the
//! result, and fragments are always drawn from the new snapshot only, in
//! their order of appearance there.
//!
//! The engine is a pure function over its inputs. It holds no state and is
//! safe to call concurrently from any number of threads.

use serde::{Deserialize, Serialize};

/// Result of diffing one file's previous/new content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDiff {
    touched: Vec<String>,
}

impl ContentDiff {
    fn new(touched: Vec<String>) -> Self {
        Self { touched }
    }

    fn empty() -> Self {
        Self {
            touched: Vec::new(),
        }
    }

    /// Touched fragments in new-snapshot order.
    pub fn touched_content(&self) -> &[String] {
        &self.touched
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Number of touched fragments.
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    /// Summed character count of all touched fragments.
    pub fn total_len(&self) -> usize {
        self.touched.iter().map(|line| line.chars().count()).sum()
    }
}

/// Diffs two full-text snapshots at line granularity.
///
/// - Empty `previous` (new file): every line of `current` is touched.
/// - Empty `current` (deleted file): nothing new was added, empty diff.
/// - Otherwise: an LCS edit script over the line sequences; touched
///   fragments are the lines of `current` not matched by the LCS.
///
/// Common leading and trailing lines are stripped before the LCS table is
/// built, so typical edits only pay for the changed region. Worst case is
/// O(n*m) time and space over the remaining middle, which is fine for
/// source-file-sized inputs. Deterministic: equal inputs always yield the
/// same fragment sequence.
pub fn diff(previous: &str, current: &str) -> ContentDiff {
    if current.is_empty() {
        return ContentDiff::empty();
    }
    if previous.is_empty() {
        return ContentDiff::new(current.lines().map(String::from).collect());
    }

    let prev: Vec<&str> = previous.lines().collect();
    let curr: Vec<&str> = current.lines().collect();

    // Strip the common prefix and suffix; only the middle needs the table.
    let mut start = 0;
    while start < prev.len() && start < curr.len() && prev[start] == curr[start] {
        start += 1;
    }
    let mut prev_end = prev.len();
    let mut curr_end = curr.len();
    while prev_end > start && curr_end > start && prev[prev_end - 1] == curr[curr_end - 1] {
        prev_end -= 1;
        curr_end -= 1;
    }

    let old = &prev[start..prev_end];
    let new = &curr[start..curr_end];
    if new.is_empty() {
        return ContentDiff::empty();
    }
    if old.is_empty() {
        return ContentDiff::new(new.iter().map(|line| (*line).to_string()).collect());
    }

    ContentDiff::new(lcs_inserted(old, new))
}

/// Lines of `new` that are not part of a longest common subsequence with
/// `old`, in `new` order.
fn lcs_inserted(old: &[&str], new: &[&str]) -> Vec<String> {
    let n = old.len();
    let m = new.len();

    // LCS length table, (n+1) x (m+1), row-major.
    let mut table = vec![0u32; (n + 1) * (m + 1)];
    for i in 1..=n {
        for j in 1..=m {
            table[i * (m + 1) + j] = if old[i - 1] == new[j - 1] {
                table[(i - 1) * (m + 1) + (j - 1)] + 1
            } else {
                table[(i - 1) * (m + 1) + j].max(table[i * (m + 1) + (j - 1)])
            };
        }
    }

    let mut touched = Vec::new();
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            i -= 1;
            j -= 1;
        } else if table[(i - 1) * (m + 1) + j] >= table[i * (m + 1) + (j - 1)] {
            i -= 1;
        } else {
            touched.push(new[j - 1].to_string());
            j -= 1;
        }
    }
    while j > 0 {
        touched.push(new[j - 1].to_string());
        j -= 1;
    }

    touched.reverse();
    touched
}
