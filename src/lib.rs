//! Line-granularity text diffing for reviewing edits to whole files.
//!
//! [`lcs::diff_lines`] aligns two versions of a text and classifies every
//! line as added, removed or common. [`render`] turns the result into the
//! prefixed inline form (`+` / `-` / space) and back, and [`restore`]
//! recovers either side of the comparison from the diff alone.

pub mod lcs;
pub mod render;
pub mod restore;
