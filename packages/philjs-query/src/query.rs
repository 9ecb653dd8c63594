use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use philjs_reactive::Signal;

/// A single cached fetch, along with the instant it was fetched at.
#[derive(Debug, Clone)]
pub struct QueryData<V> {
    /// The value returned by the query function.
    pub data: V,
    /// When this value was fetched.
    pub updated_at: Instant,
}

/// The lifecycle of a cached query.
#[derive(Debug, Clone)]
pub enum QueryState<V, E> {
    /// The query has never been run.
    Created,
    /// The query is running for the first time; no data is available yet.
    Loading,
    /// The query is re-running while stale data is still available.
    Fetching(QueryData<V>),
    /// The query has finished and the data is considered fresh.
    Loaded(QueryData<V>),
    /// Cached data exists but has been explicitly marked as invalid and should be refetched.
    Invalid(QueryData<V>),
    /// The fetcher rejected. Carries the last-known-good data, if any was ever loaded, so a
    /// fallback can keep rendering stale data (SWR-style) alongside the error.
    Error(Option<QueryData<V>>, E),
}

impl<V: Clone, E: Clone> QueryState<V, E> {
    /// The most recently fetched data, if any, regardless of the current lifecycle state.
    pub fn data(&self) -> Option<V> {
        match self {
            QueryState::Created | QueryState::Loading => None,
            QueryState::Error(data, _) => data.as_ref().map(|data| data.data.clone()),
            QueryState::Fetching(data) | QueryState::Loaded(data) | QueryState::Invalid(data) => {
                Some(data.data.clone())
            }
        }
    }

    /// The instant the cached data was last fetched, if any.
    pub fn updated_at(&self) -> Option<Instant> {
        match self {
            QueryState::Created | QueryState::Loading => None,
            QueryState::Error(data, _) => data.as_ref().map(|data| data.updated_at),
            QueryState::Fetching(data) | QueryState::Loaded(data) | QueryState::Invalid(data) => {
                Some(data.updated_at)
            }
        }
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading | QueryState::Fetching(_))
    }

    /// The error from the most recent fetch, if it failed and hasn't been superseded yet.
    pub fn error(&self) -> Option<E> {
        match self {
            QueryState::Error(_, err) => Some(err.clone()),
            _ => None,
        }
    }

    /// Whether the most recent fetch failed.
    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(..))
    }
}

/// A single cache entry shared by every observer of a given key.
pub(crate) struct Query<K, V, E> {
    pub key: K,
    pub data: Signal<QueryState<V, E>>,
    pub stale_time: Signal<Option<Duration>>,
    pub cache_time: Signal<Option<Duration>>,
    pub refetch_interval: Signal<Option<Duration>>,
    pub observers: Rc<std::cell::Cell<usize>>,
}

impl<K: Clone, V, E> Clone for Query<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            data: self.data,
            stale_time: self.stale_time,
            cache_time: self.cache_time,
            refetch_interval: self.refetch_interval,
            observers: self.observers.clone(),
        }
    }
}

impl<K, V, E> Query<K, V, E> {
    pub fn dispose(self) {
        self.data.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(data: u32) -> QueryData<u32> {
        QueryData {
            data,
            updated_at: Instant::now(),
        }
    }

    #[test]
    fn error_with_prior_data_keeps_it_readable() {
        let state = QueryState::Error(Some(loaded(7)), "boom");
        assert_eq!(state.data(), Some(7));
        assert_eq!(state.error(), Some("boom"));
        assert!(state.is_error());
        assert!(!state.is_loading());
    }

    #[test]
    fn error_without_prior_data_has_no_data() {
        let state: QueryState<u32, &str> = QueryState::Error(None, "boom");
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), Some("boom"));
        assert!(state.is_error());
    }

    #[test]
    fn non_error_states_have_no_error() {
        assert_eq!(QueryState::<u32, &str>::Created.error(), None);
        assert_eq!(QueryState::Loaded(loaded(1)).error(), None);
    }
}
