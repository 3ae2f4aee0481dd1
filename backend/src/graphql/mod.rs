//! Upstream shop GraphQL plumbing.

mod client;
pub use client::execute_query;
