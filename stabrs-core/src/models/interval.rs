use std::cmp::Ordering::{self};

/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
#[derive(Eq, Debug, Clone)]
pub struct Interval<V, T>
where
    V: Ord + Copy + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub start: V,
    pub end: V,
    pub val: T,
}

impl<V, T> Interval<V, T>
where
    V: Ord + Copy + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Check if the interval contains a point. Half-open semantics: an
    /// interval contains its start but not its end.
    #[inline]
    pub fn contains(&self, point: V) -> bool {
        self.start <= point && point < self.end
    }

    /// An interval like [a, a) covers no points at all.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl<V, T> Ord for Interval<V, T>
where
    V: Ord + Copy + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<V, T>) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl<V, T> PartialOrd for Interval<V, T>
where
    V: Ord + Copy + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, T> PartialEq for Interval<V, T>
where
    V: Ord + Copy + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<V, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0, true)]
    #[case(0, 10, 9, true)]
    #[case(0, 10, 10, false)]
    #[case(0, 10, -1, false)]
    #[case(-5, 5, -5, true)]
    fn test_contains(
        #[case] start: i64,
        #[case] end: i64,
        #[case] point: i64,
        #[case] expected: bool,
    ) {
        let iv = Interval {
            start,
            end,
            val: (),
        };
        assert_eq!(iv.contains(point), expected);
    }

    #[rstest]
    fn test_degenerate() {
        let iv = Interval {
            start: 3u32,
            end: 3,
            val: "x",
        };
        assert_eq!(iv.is_degenerate(), true);
        assert_eq!(iv.contains(3), false);
    }

    #[rstest]
    fn test_ordering_by_start_then_end() {
        let mut ivs = vec![
            Interval {
                start: 5u32,
                end: 9,
                val: (),
            },
            Interval {
                start: 1,
                end: 4,
                val: (),
            },
            Interval {
                start: 1,
                end: 2,
                val: (),
            },
        ];
        ivs.sort();
        let bounds: Vec<(u32, u32)> = ivs.iter().map(|i| (i.start, i.end)).collect();
        assert_eq!(bounds, vec![(1, 2), (1, 4), (5, 9)]);
    }

    #[rstest]
    fn test_eq_ignores_val() {
        let a = Interval {
            start: 1u32,
            end: 2,
            val: "a",
        };
        let b = Interval {
            start: 1,
            end: 2,
            val: "b",
        };
        assert_eq!(a, b);
    }
}
