use crate::lcs::{Diff, Line};

/// Inline-viewer text form of a diff: one prefix character per line,
/// `+` for added, `-` for removed, a space for common.
pub trait ToText: Sized {
    fn to_text(&self) -> String;
}

pub trait FromText: Sized {
    fn from_text(s: &str) -> Result<Self, RenderError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum RenderError {
    UnexpectedToken(String),
}

impl<T: ToString> ToText for Line<T> {
    fn to_text(&self) -> String {
        match self {
            Line::Common(el) => format!(" {}", el.to_string()),
            Line::Added(el) => format!("+{}", el.to_string()),
            Line::Removed(el) => format!("-{}", el.to_string()),
        }
    }
}

impl<T: ToString> ToText for Diff<T> {
    fn to_text(&self) -> String {
        self.iter()
            .map(|line| line.to_text())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl FromText for Line<String> {
    fn from_text(s: &str) -> Result<Self, RenderError> {
        match s.chars().next() {
            Some(' ') => Ok(Line::Common(s[1..].to_string())),
            Some('+') => Ok(Line::Added(s[1..].to_string())),
            Some('-') => Ok(Line::Removed(s[1..].to_string())),
            _ => Err(RenderError::UnexpectedToken(s.to_string())),
        }
    }
}

impl FromText for Diff<String> {
    fn from_text(s: &str) -> Result<Self, RenderError> {
        if s.is_empty() {
            return Ok(vec![]);
        }

        // can't use `.lines()` because of Windows \r
        // would break the roundtrip property
        s.split('\n').map(Line::from_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::diff;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_render_roundtrip(
            old in prop::collection::vec(".*", 0..20usize),
            new in prop::collection::vec(".*", 0..20usize),
        ) {
            let result = diff(&old, &new);
            let text = result.to_text();

            prop_assert_eq!(Diff::<String>::from_text(&text).unwrap(), result);
        }
    }

    #[test]
    fn test_prefixes() {
        let result: Diff<&str> = vec![Line::Common("a"), Line::Removed("b"), Line::Added("c")];
        assert_eq!(result.to_text(), " a\n-b\n+c");
    }

    #[test]
    fn test_empty_diff() {
        let result: Diff<&str> = vec![];
        assert_eq!(result.to_text(), "");
        assert_eq!(Diff::<String>::from_text(""), Ok(vec![]));
    }

    #[test]
    fn test_empty_common_line() {
        let result: Diff<String> = vec![Line::Common(String::new())];
        assert_eq!(result.to_text(), " ");
        assert_eq!(Diff::<String>::from_text(" "), Ok(result));
    }

    #[test]
    fn test_unexpected_token() {
        assert_eq!(
            Line::<String>::from_text("x"),
            Err(RenderError::UnexpectedToken("x".to_string()))
        );
    }

    #[test]
    fn test_bad_line_rejects_whole_diff() {
        let result = Diff::<String>::from_text(" a\nno prefix here");
        assert!(result.is_err());
    }
}
