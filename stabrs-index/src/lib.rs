//! Core infrastructure for stabbing queries over half-open intervals in Rust.
//!
//! Given a collection of `[start, end)` intervals and a query point, a
//! stabbing query returns the identifiers of every interval containing the
//! point. This crate builds a compact breakpoint table from the collection
//! once, then answers each query with a single binary search, instead of
//! scanning the whole collection per query.
//!
//! ## Features
//!
//! - **Fast point queries**: one `O(log m)` search per stab, result size
//!   independent of the collection size
//! - **Borrowed results**: queries hand back a slice of ids, no allocation
//! - **Thread-safe**: built tables implement `Send` and `Sync` and may be
//!   read from many threads at once
//!
//! All stabbing computation lives here. Higher-level consumers (the CLI,
//! track-grouped indexes) wrap this functionality but do not reimplement
//! the sweep.
//!
//! ## Quick Start
//!
//! ```rust
//! use stabrs_index::{StabTable, Stabber, Interval};
//!
//! // lease windows on a shared resource
//! let leases = vec![
//!     Interval { start: 0i64, end: 10, val: "build" },
//!     Interval { start: 5, end: 15, val: "deploy" },
//!     Interval { start: 20, end: 30, val: "audit" },
//! ];
//!
//! // flatten the collection into a breakpoint table
//! let table = StabTable::build(leases);
//!
//! // which leases are live at instant 7?
//! assert_eq!(table.stab(7), &[0, 1]);
//!
//! // resolve ids to the intervals themselves
//! let vals: Vec<&str> = table.stab_iter(7).map(|iv| iv.val).collect();
//! assert_eq!(vals, vec!["build", "deploy"]);
//! ```
//!
//! ## Construction cost
//!
//! Building sorts the endpoints and sweeps them once, `O(N log N)` overall,
//! and the finished table holds at most `2N + 2` breakpoints. The structure
//! is static by design: to change the collection, build a new table. See
//! [`StabTable`] for the boundary semantics at shared endpoints.

/// Breakpoint-table index implementation.
///
/// See [`StabTable`] for details.
pub mod stab_table;

/// Track-keyed indexing for multi-track record files.
///
/// See the [`multi_track_stabber`] module for details.
pub mod multi_track_stabber;

/// Core traits for stabbing operations.
///
/// See [`Stabber`] for the main trait.
pub mod traits;

// re-exports
pub use self::multi_track_stabber::MultiTrackStabber;
pub use self::stab_table::StabTable;
pub use self::traits::{Interval, Stabber};

/// Constants used throughout the crate.
pub mod consts {
    /// The command name for stab operations.
    pub const STAB_CMD: &str = "stab";
}
