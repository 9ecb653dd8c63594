use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use philjs_reactive::{create_signal, provide_context, try_use_context, use_global_scope};

use crate::options::QueryOptions;
use crate::query::{Query, QueryState};

/// Holds the cache of every query entry ever created in this app.
///
/// There is usually a single [`QueryClient`] per app, provided once near the root with
/// [`provide_query_client`] and retrieved anywhere below it with [`use_query_client`].
#[derive(Clone)]
pub struct QueryClient {
    // One cache map per distinct `(K, V, E)` type triple, type-erased behind `Any` and downcast
    // back to `RefCell<HashMap<K, Query<K, V, E>>>` on access.
    pub(crate) caches: Rc<RefCell<HashMap<TypeId, Box<dyn Any>>>>,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient").finish()
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self {
            caches: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl QueryClient {
    /// Creates a new, empty query client.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get_or_create<K, V, E>(
        &self,
        key: K,
        options: QueryOptions,
    ) -> (Query<K, V, E>, bool)
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let type_id = TypeId::of::<(K, V, E)>();
        let mut caches = self.caches.borrow_mut();
        let entry = caches
            .entry(type_id)
            .or_insert_with(|| Box::new(RefCell::new(HashMap::<K, Query<K, V, E>>::new())));
        let map = entry
            .downcast_mut::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        let mut map = map.borrow_mut();

        if let Some(query) = map.get(&key) {
            query.observers.set(query.observers.get() + 1);
            return (query.clone(), false);
        }

        let query = Query {
            key: key.clone(),
            data: create_signal(QueryState::Created),
            stale_time: create_signal(options.stale_time),
            cache_time: create_signal(options.cache_time),
            refetch_interval: create_signal(options.refetch_interval),
            observers: Rc::new(std::cell::Cell::new(1)),
        };
        map.insert(key, query.clone());
        (query, true)
    }

    pub(crate) fn remove<K, V, E>(&self, key: &K)
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let type_id = TypeId::of::<(K, V, E)>();
        let caches = self.caches.borrow();
        let Some(entry) = caches.get(&type_id) else {
            return;
        };
        let map = entry
            .downcast_ref::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        if let Some(query) = map.borrow_mut().remove(key) {
            drop(caches);
            query.dispose();
        }
    }

    /// Marks every cached entry of type `V` as [`QueryState::Invalid`], forcing every active
    /// observer to refetch on its next render.
    pub fn invalidate_all<K, V, E>(&self)
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let type_id = TypeId::of::<(K, V, E)>();
        let caches = self.caches.borrow();
        let Some(entry) = caches.get(&type_id) else {
            return;
        };
        let map = entry
            .downcast_ref::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        for query in map.borrow().values() {
            let data = query.data;
            data.update(|state| {
                if let QueryState::Loaded(cached) | QueryState::Fetching(cached) = state {
                    *state = QueryState::Invalid(cached.clone());
                }
            });
        }
    }

    /// Marks the cached entry for `key` as [`QueryState::Invalid`], if present, forcing a
    /// refetch on its next observation.
    pub fn invalidate<K, V, E>(&self, key: &K)
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let type_id = TypeId::of::<(K, V, E)>();
        let caches = self.caches.borrow();
        let Some(entry) = caches.get(&type_id) else {
            return;
        };
        let map = entry
            .downcast_ref::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        if let Some(query) = map.borrow().get(key) {
            query.data.update(|state| {
                if let QueryState::Loaded(cached) | QueryState::Fetching(cached) = state {
                    *state = QueryState::Invalid(cached.clone());
                }
            });
        }
    }

    /// Reads the current state of the cached entry for `key`, if one has been created yet.
    ///
    /// Used by [`crate::create_mutation`] to snapshot a value before applying an optimistic
    /// patch, so it can be restored if the mutation fails.
    pub(crate) fn peek<K, V, E>(&self, key: &K) -> Option<QueryState<V, E>>
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let type_id = TypeId::of::<(K, V, E)>();
        let caches = self.caches.borrow();
        let entry = caches.get(&type_id)?;
        let map = entry
            .downcast_ref::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        let query = map.borrow().get(key)?.clone();
        Some(query.data.get_clone_untracked())
    }

    /// Optimistically overwrites the cached entry for `key` with `value`, if the entry exists.
    ///
    /// Does nothing if no query has ever observed this key; there is nothing to patch.
    pub(crate) fn set_optimistic<K, V, E>(&self, key: &K, value: V)
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let type_id = TypeId::of::<(K, V, E)>();
        let caches = self.caches.borrow();
        let Some(entry) = caches.get(&type_id) else {
            return;
        };
        let map = entry
            .downcast_ref::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        if let Some(query) = map.borrow().get(key) {
            query.data.set(QueryState::Loaded(crate::query::QueryData {
                data: value,
                updated_at: instant::Instant::now(),
            }));
        }
    }

    /// Restores a previously-[`peek`](Self::peek)ed state for `key`, rolling back an optimistic
    /// patch. A `None` `previous` means the entry didn't exist yet and is left untouched.
    pub(crate) fn restore<K, V, E>(&self, key: &K, previous: Option<QueryState<V, E>>)
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        E: Clone + 'static,
    {
        let Some(previous) = previous else {
            return;
        };
        let type_id = TypeId::of::<(K, V, E)>();
        let caches = self.caches.borrow();
        let Some(entry) = caches.get(&type_id) else {
            return;
        };
        let map = entry
            .downcast_ref::<RefCell<HashMap<K, Query<K, V, E>>>>()
            .expect("query cache type mismatch");
        if let Some(query) = map.borrow().get(key) {
            query.data.set(previous);
        }
    }
}

/// Provides a [`QueryClient`] to the current reactive scope and all of its descendants.
///
/// This is usually called once near the root of the app.
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    use_global_scope().run_in(|| provide_context(client.clone()));
    client
}

/// Retrieves the [`QueryClient`] provided by an ancestor scope via [`provide_query_client`].
///
/// Creates and provides a fresh one at the global scope if none has been provided yet, so that
/// tests and small examples don't need to call [`provide_query_client`] explicitly.
pub fn use_query_client() -> QueryClient {
    try_use_context::<QueryClient>().unwrap_or_else(provide_query_client)
}
