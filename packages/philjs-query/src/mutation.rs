use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use philjs_futures::spawn_local_scoped;
use philjs_reactive::{create_signal, ReadSignal};

use crate::client::QueryClient;

/// The lifecycle of a [`create_mutation`] call.
#[derive(Debug, Clone)]
pub enum MutationStatus<V, E> {
    /// `mutate` has not been called yet, or its last call already resolved.
    Idle,
    /// `mutate` is in flight.
    Loading,
    /// The most recent call to `mutate` resolved successfully.
    Success(V),
    /// The most recent call to `mutate` failed.
    Error(E),
}

impl<V, E> MutationStatus<V, E> {
    /// Whether a mutation is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, MutationStatus::Loading)
    }
}

/// Configures a [`create_mutation`] call.
pub struct MutationOptions<K, V, Args, E, Fu> {
    /// Runs the mutation against the server (or whatever backing store it targets).
    pub mutate: Rc<dyn Fn(Args) -> Fu>,
    /// Applies an optimistic patch to the named query cache entries before `mutate` resolves,
    /// returning the keys and values to write. Rolled back automatically if `mutate` fails.
    pub on_optimistic: Option<Rc<dyn Fn(&Args) -> Vec<(K, V)>>>,
    /// Called with the resolved value once `mutate` succeeds.
    pub on_success: Option<Rc<dyn Fn(&V)>>,
    /// Called with the error once `mutate` fails, after any optimistic patch has been rolled
    /// back.
    pub on_error: Option<Rc<dyn Fn(&E)>>,
}

impl<K, V, Args, E, Fu> std::fmt::Debug for MutationOptions<K, V, Args, E, Fu> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationOptions")
            .field("on_optimistic", &self.on_optimistic.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish_non_exhaustive()
    }
}

/// The handle returned by [`create_mutation`].
pub struct MutationHandle<V: 'static, E: 'static, Args: 'static> {
    status: ReadSignal<MutationStatus<V, E>>,
    run: Rc<dyn Fn(Args)>,
}

impl<V, E, Args> Clone for MutationHandle<V, E, Args> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            run: self.run.clone(),
        }
    }
}

impl<V, E, Args> std::fmt::Debug for MutationHandle<V, E, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationHandle").finish()
    }
}

impl<V: Clone, E: Clone, Args> MutationHandle<V, E, Args> {
    /// The current lifecycle state of the mutation.
    pub fn status(&self) -> MutationStatus<V, E> {
        self.status.get_clone()
    }

    /// Whether a call to `mutate` is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.status().is_loading()
    }

    /// Runs the mutation, applying any optimistic patch immediately and rolling it back if the
    /// mutation fails.
    pub fn mutate(&self, args: Args) {
        (self.run)(args);
    }
}

/// Creates a mutation: an imperative write paired with an optional optimistic patch over
/// `client`'s cache, in the style of `react-query`'s `useMutation`.
///
/// Unlike [`crate::use_query`], a mutation is not reactive: calling [`MutationHandle::mutate`]
/// runs it once on demand, rather than being driven by a key signal.
pub fn create_mutation<K, V, Args, E, Fu>(
    client: QueryClient,
    options: MutationOptions<K, V, Args, E, Fu>,
) -> MutationHandle<V, E, Args>
where
    K: Hash + Eq + Clone + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
    Args: 'static,
    Fu: Future<Output = Result<V, E>> + 'static,
{
    let status = create_signal(MutationStatus::Idle);
    let options = Rc::new(options);

    let run = move |args: Args| {
        let options = options.clone();
        let client = client.clone();
        status.set(MutationStatus::Loading);

        let rollback = options.on_optimistic.as_ref().map(|on_optimistic| {
            let patch = on_optimistic(&args);
            let previous: Vec<_> = patch
                .iter()
                .map(|(key, _)| (key.clone(), client.peek::<K, V, E>(key)))
                .collect();
            for (key, value) in patch {
                client.set_optimistic::<K, V, E>(&key, value);
            }
            previous
        });

        spawn_local_scoped(async move {
            match (options.mutate)(args).await {
                Ok(value) => {
                    if let Some(on_success) = &options.on_success {
                        on_success(&value);
                    }
                    status.set(MutationStatus::Success(value));
                }
                Err(err) => {
                    if let Some(rollback) = rollback {
                        for (key, previous) in rollback {
                            client.restore::<K, V, E>(&key, previous);
                        }
                    }
                    if let Some(on_error) = &options.on_error {
                        on_error(&err);
                    }
                    status.set(MutationStatus::Error(err));
                }
            }
        });
    };

    MutationHandle {
        status: *status,
        run: Rc::new(run),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::channel::oneshot;
    use philjs_reactive::create_root;

    use super::*;
    use crate::client::QueryClient;
    use crate::options::QueryOptions;
    use crate::query::QueryState;

    #[tokio::test]
    async fn success_path_reports_value_and_calls_on_success() {
        let local = tokio::task::LocalSet::new();
        let on_success_calls = Rc::new(Cell::new(0));
        let handle_cell: Rc<RefCell<Option<MutationHandle<u32, &'static str, u32>>>> =
            Rc::new(RefCell::new(None));

        local
            .run_until(async {
                create_root({
                    let on_success_calls = on_success_calls.clone();
                    let handle_cell = handle_cell.clone();
                    move || {
                        let client = QueryClient::new();
                        let handle = create_mutation::<&'static str, u32, u32, &'static str, _>(
                            client,
                            MutationOptions {
                                mutate: Rc::new(|args: u32| async move {
                                    Ok::<u32, &'static str>(args * 2)
                                }),
                                on_optimistic: None,
                                on_success: Some(Rc::new({
                                    let on_success_calls = on_success_calls.clone();
                                    move |_value: &u32| {
                                        on_success_calls.set(on_success_calls.get() + 1);
                                    }
                                })),
                                on_error: None,
                            },
                        );

                        assert!(matches!(handle.status(), MutationStatus::Idle));
                        handle.mutate(21);
                        assert!(handle.is_loading());
                        *handle_cell.borrow_mut() = Some(handle);
                    }
                });

                for _ in 0..4 {
                    tokio::task::yield_now().await;
                }

                let handle = handle_cell.borrow().clone().unwrap();
                assert!(matches!(handle.status(), MutationStatus::Success(42)));
                assert_eq!(on_success_calls.get(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn optimistic_patch_is_applied_then_rolled_back_on_error() {
        let (tx, rx) = oneshot::channel::<Result<u32, &'static str>>();
        let local = tokio::task::LocalSet::new();

        let on_error_calls = Rc::new(Cell::new(0));
        let client = QueryClient::new();
        let handle_cell: Rc<RefCell<Option<MutationHandle<u32, &'static str, ()>>>> =
            Rc::new(RefCell::new(None));

        local
            .run_until(async {
                create_root({
                    let client = client.clone();
                    let on_error_calls = on_error_calls.clone();
                    let handle_cell = handle_cell.clone();
                    let rx = Rc::new(RefCell::new(Some(rx)));
                    move || {
                        let (query, _) = client
                            .get_or_create::<&'static str, u32, &'static str>(
                                "k",
                                QueryOptions::once(),
                            );
                        query.data.set(QueryState::Loaded(crate::query::QueryData {
                            data: 1,
                            updated_at: instant::Instant::now(),
                        }));

                        let handle = create_mutation(
                            client.clone(),
                            MutationOptions {
                                mutate: Rc::new(move |_args: ()| {
                                    let rx = rx.clone();
                                    async move { rx.borrow_mut().take().unwrap().await.unwrap() }
                                }),
                                on_optimistic: Some(Rc::new(|_args: &()| vec![("k", 99)])),
                                on_success: None,
                                on_error: Some(Rc::new({
                                    let on_error_calls = on_error_calls.clone();
                                    move |_err: &&'static str| {
                                        on_error_calls.set(on_error_calls.get() + 1);
                                    }
                                })),
                            },
                        );
                        handle.mutate(());
                        *handle_cell.borrow_mut() = Some(handle);
                    }
                });

                for _ in 0..4 {
                    tokio::task::yield_now().await;
                }

                {
                    let handle = handle_cell.borrow().clone().unwrap();
                    assert_eq!(
                        client
                            .peek::<&'static str, u32, &'static str>(&"k")
                            .unwrap()
                            .data(),
                        Some(99)
                    );
                    assert!(handle.is_loading());
                }

                tx.send(Err("boom")).unwrap();

                for _ in 0..4 {
                    tokio::task::yield_now().await;
                }

                let handle = handle_cell.borrow().clone().unwrap();
                assert!(matches!(handle.status(), MutationStatus::Error("boom")));
                assert_eq!(on_error_calls.get(), 1);
                assert_eq!(
                    client
                        .peek::<&'static str, u32, &'static str>(&"k")
                        .unwrap()
                        .data(),
                    Some(1)
                );
            })
            .await;
    }
}
