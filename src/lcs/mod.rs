pub mod types;
pub use types::*;

use std::cmp::max;

/// LCS lengths for every prefix pair of the two inputs, kept flat with
/// manual index arithmetic. Row and column 0 stay zero.
struct Table {
    data: Vec<usize>,
    width: usize,
}

impl Table {
    fn new(n: usize, m: usize) -> Self {
        Table {
            data: vec![0; (n + 1) * (m + 1)],
            width: m + 1,
        }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.width + j]
    }

    fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.width + j] = val;
    }
}

/// Computes the diff between two texts after breaking them into newlines
/// and running `diff`.
///
/// Lines are compared by exact equality, so a trailing newline counts as a
/// trailing empty line, and splitting `""` yields one empty line: two empty
/// texts compare as a single common empty line.
pub fn diff_lines(old: &str, new: &str) -> Diff<String> {
    let old_lines: Vec<String> = old.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = new.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

/// Computes the diff between two sequences by building the full
/// longest-common-subsequence table and backtracking through it.
///
/// Time and space are O(n·m) in the two sequence lengths. The function is
/// total and pure: any pair of inputs produces a result, and identical
/// inputs always produce identical output.
///
/// # Examples
///
/// ```
/// use linediff::lcs::{diff, Line};
///
/// let old = vec![1, 2, 3];
/// let new = vec![1, 3, 4];
/// let result = diff(&old, &new);
/// assert_eq!(result, vec![
///     Line::Common(1),
///     Line::Removed(2),
///     Line::Common(3),
///     Line::Added(4),
/// ]);
/// ```
///
/// # Arguments
///
/// * `old` - The original sequence
/// * `new` - The new sequence
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> Diff<T> {
    if old.is_empty() {
        return new.iter().map(|e| Line::Added(e.clone())).collect();
    }
    if new.is_empty() {
        return old.iter().map(|e| Line::Removed(e.clone())).collect();
    }

    let n = old.len();
    let m = new.len();
    let mut table = Table::new(n, m);
    for i in 1..=n {
        for j in 1..=m {
            let lcs = if old[i - 1] == new[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                max(table.get(i - 1, j), table.get(i, j - 1))
            };
            table.set(i, j, lcs);
        }
    }
    backtrack(old, new, &table)
}

fn backtrack<T: Eq + Clone>(old: &[T], new: &[T], table: &Table) -> Diff<T> {
    let mut changes: Diff<T> = Vec::new();
    let mut i = old.len();
    let mut j = new.len();
    // i + j strictly decreases, so this always terminates
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            changes.push(Line::Common(old[i - 1].clone()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            // on a tie the line is classified as added, not removed
            changes.push(Line::Added(new[j - 1].clone()));
            j -= 1;
        } else {
            changes.push(Line::Removed(old[i - 1].clone()));
            i -= 1;
        }
    }

    changes.reverse();
    changes
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_line_json_shape() {
        let line = Line::Added("x".to_string());
        assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"added":"x"}"#);
        let back: Line<String> = serde_json::from_str(r#"{"common":"y"}"#).unwrap();
        assert_eq!(back, Line::Common("y".to_string()));
    }
}
