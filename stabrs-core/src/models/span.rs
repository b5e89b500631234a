use std::fmt::{self, Display};

///
/// Span struct, representation of one record in SpanSet files
///
/// A span is a half-open interval `[start, end)` on a named track. Anything
/// past the third tab-separated column of the source line is preserved
/// verbatim in `rest`.
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub track: String,
    pub start: i64,
    pub end: i64,

    pub rest: Option<String>,
}

impl Span {
    ///
    /// Get width of the span
    ///
    pub fn width(&self) -> i64 {
        self.end - self.start
    }

    ///
    /// Get file string of Span
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.track,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_width() {
        let span = Span {
            track: "alpha".to_string(),
            start: -5,
            end: 10,
            rest: None,
        };
        assert_eq!(span.width(), 15);
    }

    #[rstest]
    fn test_as_string_without_rest() {
        let span = Span {
            track: "alpha".to_string(),
            start: 0,
            end: 7,
            rest: None,
        };
        assert_eq!(span.as_string(), "alpha\t0\t7");
    }

    #[rstest]
    fn test_as_string_with_rest() {
        let span = Span {
            track: "alpha".to_string(),
            start: 0,
            end: 7,
            rest: Some("label\tscore".to_string()),
        };
        assert_eq!(span.to_string(), "alpha\t0\t7\tlabel\tscore");
    }
}
