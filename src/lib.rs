//! query_context library - Navigation source resolution for schema-driven queries
//!
//! Given a schema model, the element type being queried and the parsed request
//! path, builds an immutable [`context::QueryContext`] that records which
//! declared collection the query runs against.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod model;
pub mod output;
pub mod path;
pub mod services;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;

pub use context::{QueryContext, QueryContextError};
