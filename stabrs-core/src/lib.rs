//! Core infrastructure shared by the stabrs workspace.
//!
//! This crate holds the data models and input utilities that the stabbing
//! index ([`stabrs-index`](https://github.com/databio/stabrs)) and the CLI
//! build on: the half-open [`Interval`](models::Interval) model, the
//! [`Span`](models::Span)/[`SpanSet`](models::SpanSet) record types parsed
//! from tab-separated interval files, and readers that transparently handle
//! gzipped input.
//!
//! No query logic lives here; all stabbing computation belongs to the index
//! crate. Higher-level modules should consume these models rather than
//! re-parsing interval files themselves.

pub mod errors;
pub mod models;
pub mod utils;
