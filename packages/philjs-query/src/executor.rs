use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;
use std::time::Duration;

use instant::Instant;
use philjs_futures::spawn_local_scoped;
use philjs_reactive::{create_effect, on_cleanup};

use crate::client::QueryClient;
use crate::query::{Query, QueryData, QueryState};

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Builds the function that actually drives a fetch for a given query, matching
/// `react-query`'s notion of an "executor": calling it starts (or continues) loading the data
/// and writes the result back into the query's signal.
pub(crate) fn create_executor<K, V, E, Fu>(
    query: Query<K, V, E>,
    fetcher: impl Fn(K) -> Fu + 'static,
) -> impl Fn() + Clone
where
    K: Clone + Hash + Eq + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
    Fu: Future<Output = Result<V, E>> + 'static,
{
    let fetcher = Rc::new(fetcher);
    move || {
        let fetcher = fetcher.clone();
        let query = query.clone();
        spawn_local_scoped(async move {
            let state = query.data.get_clone_untracked();
            if state.is_loading() {
                return;
            }
            match state {
                QueryState::Created => {
                    query.data.set(QueryState::Loading);
                    match fetcher(query.key.clone()).await {
                        Ok(data) => query.data.set(QueryState::Loaded(QueryData {
                            data,
                            updated_at: Instant::now(),
                        })),
                        Err(err) => query.data.set(QueryState::Error(None, err)),
                    }
                }
                QueryState::Loaded(prev) | QueryState::Invalid(prev) => {
                    query.data.set(QueryState::Fetching(prev.clone()));
                    match fetcher(query.key.clone()).await {
                        Ok(data) => query.data.set(QueryState::Loaded(QueryData {
                            data,
                            updated_at: Instant::now(),
                        })),
                        Err(err) => query.data.set(QueryState::Error(Some(prev), err)),
                    }
                }
                QueryState::Error(prev, _) => {
                    match prev.clone() {
                        Some(prev) => query.data.set(QueryState::Fetching(prev)),
                        None => query.data.set(QueryState::Loading),
                    }
                    match fetcher(query.key.clone()).await {
                        Ok(data) => query.data.set(QueryState::Loaded(QueryData {
                            data,
                            updated_at: Instant::now(),
                        })),
                        Err(err) => query.data.set(QueryState::Error(prev, err)),
                    }
                }
                QueryState::Loading | QueryState::Fetching(_) => unreachable!(),
            }
        });
    }
}

/// Wires up the effects that keep a query's cache entry synchronized: refetching stale or
/// invalidated data, refetching on an interval, and evicting the entry once it has no more
/// observers.
pub(crate) fn synchronize_query<K, V, E>(
    client: QueryClient,
    query: Query<K, V, E>,
    executor: impl Fn() + Clone + 'static,
) where
    K: Clone + Hash + Eq + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
{
    ensure_not_stale(query.clone(), executor.clone());
    ensure_not_invalid(query.clone(), executor.clone());
    sync_refetch_interval(query.clone(), executor);
    track_observer_count(client, query);
}

fn ensure_not_stale<K: Clone, V: Clone, E: Clone>(
    query: Query<K, V, E>,
    executor: impl Fn() + 'static,
) {
    create_effect(move || {
        let state = query.data.get_clone();
        let stale_time = query.stale_time.get();
        match (state.updated_at(), stale_time) {
            (Some(updated_at), Some(stale_time)) if updated_at.elapsed() >= stale_time => {
                executor();
            }
            (None, _) if matches!(state, QueryState::Created) => executor(),
            _ => {}
        }
    });
}

fn ensure_not_invalid<K: Clone, V: Clone, E: Clone>(
    query: Query<K, V, E>,
    executor: impl Fn() + 'static,
) {
    create_effect(move || {
        if matches!(query.data.get_clone(), QueryState::Invalid(_)) {
            executor();
        }
    });
}

fn sync_refetch_interval<K: Clone, V: Clone, E: Clone>(
    query: Query<K, V, E>,
    executor: impl Fn() + Clone + 'static,
) {
    create_effect(move || {
        let Some(interval) = query.refetch_interval.get() else {
            return;
        };
        // Re-runs whenever the data changes, rescheduling the next tick relative to the new
        // fetch time.
        let _ = query.data.get_clone();
        let executor = executor.clone();
        spawn_local_scoped(async move {
            sleep(interval).await;
            executor();
        });
    });
}

/// Tracks the number of live observers for this query and schedules cache eviction once the
/// last one disposes, respecting `cache_time`.
fn track_observer_count<K, V, E>(client: QueryClient, query: Query<K, V, E>)
where
    K: Clone + Hash + Eq + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
{
    let observers = query.observers.clone();
    on_cleanup(move || {
        let remaining = observers.get().saturating_sub(1);
        observers.set(remaining);
        if remaining != 0 {
            return;
        }
        let Some(cache_time) = query.cache_time.get_untracked() else {
            return;
        };
        let client = client.clone();
        let query = query.clone();
        spawn_local_scoped(async move {
            sleep(cache_time).await;
            if query.observers.get() == 0 {
                client.remove::<K, V, E>(&query.key);
            }
        });
    });
}
