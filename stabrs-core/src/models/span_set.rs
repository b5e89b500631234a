use std::collections::HashSet;
use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::SpanSetError;
use crate::models::span::Span;
use crate::utils::get_dynamic_reader;

///
/// A collection of [Span]s, usually read from a tab-separated file with one
/// `track <TAB> start <TAB> end [<TAB> rest...]` record per line.
///
#[derive(Debug, Clone)]
pub struct SpanSet {
    pub spans: Vec<Span>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

pub struct SpanSetIterator<'a> {
    span_set: &'a SpanSet,
    index: usize,
}

/// Parse span records out of anything line-readable. Lines starting with `#`
/// and a first line that looks like column headers (non-numeric second
/// column) are collected as the header, not records. Blank lines are
/// skipped.
fn parse_lines<R: BufRead>(reader: R) -> Result<(Vec<Span>, Option<String>), SpanSetError> {
    let mut spans: Vec<Span> = Vec::new();
    let mut header = String::new();
    let mut first_line = true;

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            header.push_str(&line);
            first_line = false;
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();

        // Handling column headers like `track start end` without #
        if first_line {
            first_line = false;
            if parts.len() >= 3 && parts[1].parse::<i64>().is_err() {
                header.push_str(&line);
                continue;
            }
        }

        if parts.len() < 3 {
            return Err(SpanSetError::SpanParseError(format!(
                "expected at least 3 tab-separated fields: {:?}",
                line
            )));
        }

        let start = parts[1].parse::<i64>().map_err(|_| {
            SpanSetError::SpanParseError(format!("Error in parsing start position: {:?}", parts))
        })?;
        let end = parts[2].parse::<i64>().map_err(|_| {
            SpanSetError::SpanParseError(format!("Error in parsing end position: {:?}", parts))
        })?;

        spans.push(Span {
            track: parts[0].to_owned(),
            start,
            end,
            rest: Some(parts[3..].join("\t")).filter(|s| !s.is_empty()),
        });
    }

    let header = match header.is_empty() {
        true => None,
        false => Some(header),
    };

    Ok((spans, header))
}

impl TryFrom<&Path> for SpanSet {
    type Error = SpanSetError;

    ///
    /// Create a new [SpanSet] from a span file on disk, which may be
    /// gzipped.
    ///
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(path)
            .map_err(|e| SpanSetError::FileReadError(format!("{}: {}", path.display(), e)))?;

        let (spans, header) = parse_lines(reader)?;

        if spans.is_empty() {
            return Err(SpanSetError::EmptySpanSet(path.display().to_string()));
        }

        Ok(SpanSet {
            spans,
            header,
            path: Some(path.to_owned()),
        })
    }
}

impl TryFrom<&str> for SpanSet {
    type Error = SpanSetError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        SpanSet::try_from(Path::new(path))
    }
}

impl TryFrom<PathBuf> for SpanSet {
    type Error = SpanSetError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        SpanSet::try_from(path.as_path())
    }
}

impl TryFrom<&[u8]> for SpanSet {
    type Error = SpanSetError;

    /// Parse a [SpanSet] straight from in-memory bytes, e.g. test fixtures.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let (spans, header) = parse_lines(bytes)?;

        if spans.is_empty() {
            return Err(SpanSetError::EmptySpanSet("<memory>".to_string()));
        }

        Ok(SpanSet {
            spans,
            header,
            path: None,
        })
    }
}

impl From<Vec<Span>> for SpanSet {
    fn from(spans: Vec<Span>) -> Self {
        SpanSet {
            spans,
            header: None,
            path: None,
        }
    }
}

impl SpanSet {
    /// Number of spans in the set.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Sort spans by track name, then start, then end.
    pub fn sort(&mut self) {
        self.spans.sort_by(|a, b| {
            a.track
                .cmp(&b.track)
                .then(a.start.cmp(&b.start))
                .then(a.end.cmp(&b.end))
        });
    }

    pub fn iter(&self) -> SpanSetIterator<'_> {
        SpanSetIterator {
            span_set: self,
            index: 0,
        }
    }

    /// Iterate over unique track names, in order of first appearance.
    pub fn iter_tracks(&self) -> impl Iterator<Item = &String> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.spans.iter().filter_map(move |s| {
            if seen.insert(s.track.as_str()) {
                Some(&s.track)
            } else {
                None
            }
        })
    }

    /// Iterate over the spans belonging to one track.
    pub fn iter_track_spans<'a>(&'a self, track: &'a str) -> impl Iterator<Item = &'a Span> {
        self.spans.iter().filter(move |s| s.track == track)
    }
}

impl<'a> Iterator for SpanSetIterator<'a> {
    type Item = &'a Span;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.span_set.spans.get(self.index)?;
        self.index += 1;
        Some(span)
    }
}

impl<'a> IntoIterator for &'a SpanSet {
    type Item = &'a Span;
    type IntoIter = SpanSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for SpanSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpanSet with {} spans.", self.len())
    }
}
