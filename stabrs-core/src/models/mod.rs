pub mod interval;
pub mod span;
pub mod span_set;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::span::Span;
pub use self::span_set::SpanSet;
