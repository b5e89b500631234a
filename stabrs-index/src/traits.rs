use num_traits::Bounded;

pub use stabrs_core::models::Interval;

/// A structure answering stabbing queries: which intervals contain a point?
///
/// Ids reported by [`stab`](Stabber::stab) are positions in the interval
/// vector handed to [`build`](Stabber::build). The `Bounded` requirement is
/// how implementations obtain the sentinel minimum and maximum of the value
/// domain; any totally ordered `Copy` type with known bounds qualifies.
pub trait Stabber<V, T>: Send + Sync
where
    V: Ord + Copy + Bounded + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<V, T>>) -> Self
    where
        Self: Sized;

    fn stab(&self, point: V) -> &[usize];

    fn stab_iter<'a>(&'a self, point: V) -> Box<dyn Iterator<Item = &'a Interval<V, T>> + 'a>;
}
