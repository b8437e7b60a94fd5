/// Alias for a vector of Line
/// Result of the diff functions
pub type Diff<T> = Vec<Line<T>>;

/// Each line in a diff is either
/// new (Added)
/// gone (Removed)
/// present on both sides (Common)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Line<T> {
    Added(T),
    Removed(T),
    Common(T),
}
