//! Asynchronous data fetching and caching for PhilJS, in the style of `react-query`.
//!
//! This crate should not be used directly. Instead, use the `philjs` crate which re-exports this
//! crate behind the `query` feature.
//!
//! A [`QueryClient`] holds a cache of query results keyed by an arbitrary, hashable key. Each
//! distinct key tracks its own [`QueryState`], and observers (components calling [`use_query`])
//! share the same underlying entry so that a single piece of data is only ever fetched once no
//! matter how many places in the view read it.

#![deny(missing_debug_implementations)]
#![warn(missing_docs)]

mod client;
mod executor;
mod mutation;
mod options;
mod query;
mod use_query;

pub use client::{provide_query_client, use_query_client, QueryClient};
pub use mutation::{create_mutation, MutationHandle, MutationOptions, MutationStatus};
pub use options::QueryOptions;
pub use query::{QueryData, QueryState};
pub use use_query::{use_query, QueryResult};
