//! Rebuilds either side of a comparison from its diff.

use crate::lcs::Line;

/// The new-side lines: added and common entries in diff order.
pub fn new_lines<T: Clone>(diff: &[Line<T>]) -> Vec<T> {
    diff.iter()
        .filter_map(|line| match line {
            Line::Added(el) | Line::Common(el) => Some(el.clone()),
            Line::Removed(_) => None,
        })
        .collect()
}

/// The old-side lines: removed and common entries in diff order.
pub fn old_lines<T: Clone>(diff: &[Line<T>]) -> Vec<T> {
    diff.iter()
        .filter_map(|line| match line {
            Line::Removed(el) | Line::Common(el) => Some(el.clone()),
            Line::Added(_) => None,
        })
        .collect()
}

/// Inverse of `diff_lines` on the new side.
pub fn new_text(diff: &[Line<String>]) -> String {
    new_lines(diff).join("\n")
}

/// Inverse of `diff_lines` on the old side.
pub fn old_text(diff: &[Line<String>]) -> String {
    old_lines(diff).join("\n")
}

/// Per-kind line counts, for a viewer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub added: usize,
    pub removed: usize,
    pub common: usize,
}

pub fn stats<T>(diff: &[Line<T>]) -> Stats {
    let mut stats = Stats {
        added: 0,
        removed: 0,
        common: 0,
    };
    for line in diff {
        match line {
            Line::Added(_) => stats.added += 1,
            Line::Removed(_) => stats.removed += 1,
            Line::Common(_) => stats.common += 1,
        }
    }
    stats
}
