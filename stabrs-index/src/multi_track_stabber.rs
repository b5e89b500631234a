//! Track-keyed stabbing indexes for interval files that mix several tracks.
//!
//! This module provides [`MultiTrackStabber`], which keeps one independent
//! [`StabTable`](crate::StabTable) per track name so a whole
//! [`SpanSet`](stabrs_core::models::SpanSet) can be indexed at once and
//! stabbed with `(track, point)` queries.
//!
//! # Examples
//!
//! ```
//! use stabrs_index::multi_track_stabber::{IntoMultiTrackStabber, MultiTrackStabber};
//! use stabrs_core::models::{Span, SpanSet};
//!
//! let spans = SpanSet::from(vec![
//!     Span { track: "cpu".to_string(), start: 0, end: 100, rest: None },
//!     Span { track: "cpu".to_string(), start: 50, end: 150, rest: None },
//!     Span { track: "mem".to_string(), start: 0, end: 40, rest: None },
//! ]);
//!
//! let index: MultiTrackStabber<i64, usize> = spans.into_multi_track_stabber().unwrap();
//!
//! // ids are local to the track; payloads carry the global record ordinal
//! assert_eq!(index.stab("cpu", 75), &[0, 1]);
//! assert_eq!(index.stab("mem", 75), &[] as &[usize]);
//! assert_eq!(index.stab("disk", 75), &[] as &[usize]);
//! ```

use std::{collections::HashMap, fmt::Debug};

use num_traits::{Bounded, FromPrimitive};
use stabrs_core::models::{Interval, SpanSet};
use thiserror::Error;

use crate::{StabTable, Stabber};

/// Errors that can occur when building a [`MultiTrackStabber`].
#[derive(Debug, Error)]
pub enum MultiTrackStabberError {
    /// A span's coordinates do not fit the index value domain.
    #[error("Error converting span coordinates to the index domain: start={0}, end={1}")]
    CoordinateConversionError(String, String),
}

/// A set of independent stabbing indexes, one per track name.
///
/// Built from a [`SpanSet`] via [`IntoMultiTrackStabber`]. Each track's
/// intervals carry their global ordinal in the source set as the payload,
/// so results can be reported in the caller's original numbering even
/// though per-track ids restart at zero.
pub struct MultiTrackStabber<V, T>
where
    V: Ord + Copy + Bounded + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    index_maps: HashMap<String, Box<dyn Stabber<V, T>>>,
}

impl<V, T> MultiTrackStabber<V, T>
where
    V: Ord + Copy + Bounded + Send + Sync + Debug,
    T: Eq + Clone + Send + Sync + Debug,
{
    /// Find the ids of all intervals on `track` containing `point`. Ids are
    /// positions within the track's own interval list; an unknown track
    /// answers the empty slice.
    pub fn stab(&self, track: &str, point: V) -> &[usize] {
        self.index_maps
            .get(track)
            .map_or(&[], |stabber| stabber.stab(point))
    }

    /// Returns an iterator over the intervals on `track` containing
    /// `point`.
    pub fn stab_iter<'a>(
        &'a self,
        track: &str,
        point: V,
    ) -> Box<dyn Iterator<Item = &'a Interval<V, T>> + 'a> {
        match self.index_maps.get(track) {
            Some(stabber) => stabber.stab_iter(point),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Iterate over the indexed track names, in no particular order.
    pub fn tracks(&self) -> impl Iterator<Item = &String> {
        self.index_maps.keys()
    }

    /// Returns an iterator over all stabbed intervals for a batch of
    /// `(track, point)` queries.
    ///
    /// Each item is a tuple of (track, interval reference).
    pub fn find_stabs_iter<'a, 'b>(&'a self, queries: &'b [(String, V)]) -> IterFindStabs<'a, 'b, V, T> {
        IterFindStabs {
            inner: &self.index_maps,
            queries,
            query_idx: 0,
            current_track: None,
            current_iter: None,
        }
    }

    /// Collect all stabs into a Vec for convenience. You're almost always
    /// better off using the iterator form of this function
    /// `find_stabs_iter`.
    pub fn find_stabs(&self, queries: &[(String, V)]) -> Vec<(String, Interval<V, T>)> {
        self.find_stabs_iter(queries)
            .map(|(track, interval)| (track, interval.clone()))
            .collect()
    }
}

/// An iterator over intervals stabbed by a batch of `(track, point)`
/// queries, created by [`MultiTrackStabber::find_stabs_iter`]. Queries are
/// processed in order and results stream out without collecting into a
/// vector first.
pub struct IterFindStabs<'a, 'b, V, T>
where
    V: Ord + Copy + Bounded + Send + Sync + Debug,
    T: Eq + Clone + Send + Sync + Debug,
{
    inner: &'a HashMap<String, Box<dyn Stabber<V, T>>>,
    queries: &'b [(String, V)],
    query_idx: usize,
    current_track: Option<String>,
    current_iter: Option<Box<dyn Iterator<Item = &'a Interval<V, T>> + 'a>>,
}

impl<'a, 'b, V, T> Iterator for IterFindStabs<'a, 'b, V, T>
where
    V: Ord + Copy + Bounded + Send + Sync + Debug,
    T: Eq + Clone + Send + Sync + Debug,
{
    type Item = (String, &'a Interval<V, T>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // first, drain the iterator for the current query
            #[allow(clippy::collapsible_if)]
            if let Some(ref mut iter) = self.current_iter {
                if let Some(interval) = iter.next() {
                    return Some((self.current_track.as_ref().unwrap().clone(), interval));
                }
            }

            // current query exhausted, move to the next one
            if self.query_idx >= self.queries.len() {
                return None;
            }

            let (track, point) = &self.queries[self.query_idx];
            self.query_idx += 1;

            if let Some(stabber) = self.inner.get(track) {
                self.current_track = Some(track.clone());
                self.current_iter = Some(stabber.stab_iter(*point));
            } else {
                // no index for this track, skip to the next query
                continue;
            }
        }
    }
}

/// A trait for converting record collections into a [`MultiTrackStabber`].
///
/// Groups records by track, converts their coordinates into the index value
/// domain, and builds one boxed [`Stabber`] per track.
pub trait IntoMultiTrackStabber {
    fn into_multi_track_stabber<V>(
        &self,
    ) -> Result<MultiTrackStabber<V, usize>, MultiTrackStabberError>
    where
        V: Ord + Copy + Bounded + FromPrimitive + Send + Sync + Debug + 'static;
}

impl IntoMultiTrackStabber for SpanSet {
    fn into_multi_track_stabber<V>(
        &self,
    ) -> Result<MultiTrackStabber<V, usize>, MultiTrackStabberError>
    where
        V: Ord + Copy + Bounded + FromPrimitive + Send + Sync + Debug + 'static,
    {
        let mut intervals_by_track: HashMap<String, Vec<Interval<V, usize>>> = HashMap::new();

        for (ordinal, span) in self.iter().enumerate() {
            let (Some(start), Some(end)) = (V::from_i64(span.start), V::from_i64(span.end)) else {
                return Err(MultiTrackStabberError::CoordinateConversionError(
                    span.start.to_string(),
                    span.end.to_string(),
                ));
            };
            intervals_by_track
                .entry(span.track.clone())
                .or_default()
                .push(Interval {
                    start,
                    end,
                    val: ordinal,
                });
        }

        let index_maps = intervals_by_track
            .into_iter()
            .map(|(track, intervals)| {
                let stabber: Box<dyn Stabber<V, usize>> = Box::new(StabTable::build(intervals));
                (track, stabber)
            })
            .collect();

        Ok(MultiTrackStabber { index_maps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use stabrs_core::models::Span;

    fn span(track: &str, start: i64, end: i64) -> Span {
        Span {
            track: track.to_string(),
            start,
            end,
            rest: None,
        }
    }

    #[fixture]
    fn span_set() -> SpanSet {
        SpanSet::from(vec![
            span("cpu", 0, 100),
            span("cpu", 50, 150),
            span("mem", 0, 40),
            span("mem", -10, 5),
        ])
    }

    #[rstest]
    fn test_tracks_are_isolated(span_set: SpanSet) {
        let index: MultiTrackStabber<i64, usize> = span_set.into_multi_track_stabber().unwrap();

        assert_eq!(index.stab("cpu", 75), &[0, 1]);
        assert_eq!(index.stab("mem", 75), &[] as &[usize]);
        assert_eq!(index.stab("mem", 2), &[0, 1]);
        assert_eq!(index.tracks().count(), 2);
    }

    #[rstest]
    fn test_unknown_track_is_empty(span_set: SpanSet) {
        let index: MultiTrackStabber<i64, usize> = span_set.into_multi_track_stabber().unwrap();
        assert_eq!(index.stab("disk", 10), &[] as &[usize]);
        assert_eq!(index.stab_iter("disk", 10).count(), 0);
    }

    #[rstest]
    fn test_payloads_carry_global_ordinals(span_set: SpanSet) {
        let index: MultiTrackStabber<i64, usize> = span_set.into_multi_track_stabber().unwrap();

        let ordinals: Vec<usize> = index.stab_iter("mem", 2).map(|iv| iv.val).collect();
        assert_eq!(ordinals, vec![2, 3]);
    }

    #[rstest]
    fn test_find_stabs_batch(span_set: SpanSet) {
        let index: MultiTrackStabber<i64, usize> = span_set.into_multi_track_stabber().unwrap();

        let queries = vec![
            ("cpu".to_string(), 120),
            ("disk".to_string(), 120),
            ("mem".to_string(), -7),
        ];
        let stabs = index.find_stabs(&queries);

        let summary: Vec<(&str, usize)> = stabs
            .iter()
            .map(|(track, iv)| (track.as_str(), iv.val))
            .collect();
        assert_eq!(summary, vec![("cpu", 1), ("mem", 3)]);
    }

    #[rstest]
    fn test_narrow_domain_conversion_fails(span_set: SpanSet) {
        // "mem" holds a span starting at -10, unrepresentable as u32
        let result = span_set.into_multi_track_stabber::<u32>();
        assert!(matches!(
            result,
            Err(MultiTrackStabberError::CoordinateConversionError(_, _))
        ));
    }
}
