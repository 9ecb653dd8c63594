use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use philjs_reactive::{create_effect, ReadSignal};

use crate::client::use_query_client;
use crate::executor::{create_executor, synchronize_query};
use crate::options::QueryOptions;
use crate::query::QueryState;

/// The reactive handle returned by [`use_query`].
///
/// Cloning is cheap; this just wraps a signal handle into the underlying cache entry.
#[derive(Clone, Copy)]
pub struct QueryResult<V: 'static, E: 'static> {
    state: ReadSignal<QueryState<V, E>>,
    executor: ReadSignal<Option<Rc<dyn Fn()>>>,
}

impl<V, E> std::fmt::Debug for QueryResult<V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryResult").finish_non_exhaustive()
    }
}

impl<V: Clone, E: Clone> QueryResult<V, E> {
    /// The current lifecycle state of the query.
    pub fn get(&self) -> QueryState<V, E> {
        self.state.get_clone()
    }

    /// The most recently fetched data, if any, regardless of whether a refetch is in flight or
    /// the last fetch failed.
    pub fn data(&self) -> Option<V> {
        self.state.get_clone().data()
    }

    /// The error from the most recent fetch, if it failed and hasn't been superseded by a
    /// successful refetch yet.
    pub fn error(&self) -> Option<E> {
        self.state.get_clone().error()
    }

    /// Whether a fetch is currently in flight and no data has ever been loaded.
    pub fn is_loading(&self) -> bool {
        self.state.get_clone().is_loading()
    }

    /// Whether the most recent fetch failed.
    pub fn is_error(&self) -> bool {
        self.state.get_clone().is_error()
    }

    /// Forces the query to refetch, regardless of its staleness.
    ///
    /// No-op if the query hasn't observed its first key yet (the effect that creates the
    /// executor hasn't run).
    pub fn refetch(&self) {
        if let Some(executor) = self.executor.get_clone() {
            executor();
        }
    }
}

/// Subscribes to a cached, asynchronously fetched value, fetching it if necessary and keeping
/// it up to date according to `options`.
///
/// `key` is re-evaluated reactively; whenever it produces a different key the query observes a
/// new cache entry (creating one if needed) and disposes its subscription to the old one.
/// `fetcher` is called with the key whenever the data needs to be (re)fetched, and may fail.
pub fn use_query<K, V, E, Fu>(
    key: impl Fn() -> K + 'static,
    fetcher: impl Fn(K) -> Fu + Clone + 'static,
    options: QueryOptions,
) -> QueryResult<V, E>
where
    K: Clone + Hash + Eq + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
    Fu: Future<Output = Result<V, E>> + 'static,
{
    let client = use_query_client();
    let state = philjs_reactive::create_signal(None::<ReadSignal<QueryState<V, E>>>);
    let executor_signal = philjs_reactive::create_signal(None::<Rc<dyn Fn()>>);

    create_effect(move || {
        let key = key();
        let (query, _created) = client.get_or_create::<K, V, E>(key, options);
        state.set(Some(*query.data));

        let executor = create_executor(query.clone(), fetcher.clone());
        synchronize_query(client.clone(), query, executor.clone());
        executor();
        executor_signal.set(Some(Rc::new(executor) as Rc<dyn Fn()>));
    });

    QueryResult {
        state: create_derived_state(state),
        executor: *executor_signal,
    }
}

fn create_derived_state<V: Clone + 'static, E: Clone + 'static>(
    state: philjs_reactive::Signal<Option<ReadSignal<QueryState<V, E>>>>,
) -> ReadSignal<QueryState<V, E>> {
    philjs_reactive::create_memo(move || match state.get() {
        Some(inner) => inner.get_clone(),
        None => QueryState::Created,
    })
}
