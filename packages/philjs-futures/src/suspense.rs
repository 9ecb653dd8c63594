//! Suspense with first class `async`/`await` support.
//!
//! The [`Suspense`] component is used to "suspend" execution and wait until async tasks are
//! finished before rendering.

use futures::channel::oneshot;
use futures::Future;
use philjs_reactive::*;

use crate::*;

/// A context value that keeps track of all the signals representing the number of tasks remaining
/// in a suspense scope.
///
/// This is useful for figuring out when all suspense tasks are completed on the page.
#[derive(Clone, Debug, Default)]
struct AllTasksRemaining {
    all_tasks_remaining: Signal<Vec<Signal<u32>>>,
}

/// Represents a new suspense scope. This is created by a call to [`create_suspense_scope`].
#[derive(Clone, Debug)]
pub struct SuspenseScope {
    tasks_remaining: Signal<u32>,
    /// The parent suspense scope of the current scope, if it exists.
    pub parent: Option<Box<SuspenseScope>>,
    /// Signal that is set to `true` when the view is rendered and streamed into the buffer.
    /// This is unused on the client side.
    pub sent: Signal<bool>,
}

impl SuspenseScope {
    /// Create a new suspense scope, optionally with a parent scope.
    ///
    /// The parent scope should always be located in a reactive scope that is an ancestor of
    /// this scope.
    pub fn new(parent: Option<Box<SuspenseScope>>) -> Self {
        let tasks_remaining = create_signal(0);
        let global = use_global_scope().run_in(|| use_context_or_else(AllTasksRemaining::default));
        global
            .all_tasks_remaining
            .update(|vec| vec.push(tasks_remaining));
        Self {
            tasks_remaining,
            parent,
            sent: create_signal(false),
        }
    }

    /// Returns whether we are currently loading this suspense or not.
    ///
    /// Implementation for the [`use_is_loading`] hook.
    pub fn is_loading(&self) -> bool {
        self.tasks_remaining.get() > 0
            || self
                .parent
                .as_ref()
                .map_or(false, |parent| parent.is_loading())
    }

    /// Returns a future that resolves once the scope is no longer loading.
    pub async fn until_finished(self) {
        let (tx, rx) = oneshot::channel();
        let mut tx = Some(tx);
        create_effect(move || {
            if !self.is_loading() {
                if let Some(tx) = tx.take() {
                    tx.send(()).unwrap();
                }
            }
        });

        rx.await.unwrap()
    }
}

/// Creates a new task that is to be tracked by the suspense system.
///
/// This is used to signal to a `Suspense` component higher up in the component hierarchy that
/// there is some async task that should be awaited before showing the UI.
///
/// If this is called from outside a suspense scope, the task will be executed normally.
pub fn create_suspense_task(f: impl Future<Output = ()> + 'static) {
    if let Some(mut scope) = try_use_context::<SuspenseScope>() {
        scope.tasks_remaining += 1;
        spawn_local_scoped(async move {
            f.await;
            scope.tasks_remaining -= 1;
        });
    } else {
        spawn_local_scoped(f)
    }
}

/// Calls the given function and registers all suspense tasks.
///
/// Returns a tuple containing the return value of the function and the created suspense scope.
///
/// If this is called inside another call to [`await_suspense`], this suspense will wait until the
/// parent suspense is resolved.
pub fn create_suspense_scope<T>(f: impl FnOnce() -> T) -> (T, SuspenseScope) {
    let parent = try_use_context::<SuspenseScope>();
    let scope = SuspenseScope::new(parent.map(Box::new));
    provide_context_in_new_scope(scope.clone(), move || {
        let ret = f();
        (ret, scope)
    })
}

/// Waits until all suspense task in current scope are completed.
///
/// Does not create a new suspense scope.
///
/// If not called inside a suspense scope, the future will resolve immediately.
pub async fn await_suspense_current() {
    if let Some(scope) = try_use_context::<SuspenseScope>() {
        scope.until_finished().await;
    }
}

/// Creates a new suspense scope that is active for the lifetime of `f`, and waits until every
/// task registered with [`create_suspense_task`] during `f` has completed before resolving.
///
/// This is what powers the `Suspense` component: `f` is usually the body of an async component,
/// which may itself call [`create_suspense_task`] (directly, or transitively through
/// [`suspense_scope`]) before or after any of its own `.await` points. Once `f` completes and
/// every task it registered has finished, the returned future resolves with `f`'s output.
pub async fn await_suspense<Fut: Future>(f: Fut) -> Fut::Output {
    let scope = SuspenseScope::new(try_use_context::<SuspenseScope>().map(Box::new));
    provide_context(scope.clone());
    let ret = f.await;
    scope.until_finished().await;
    ret
}

/// Spawns `f` as a task tracked by the nearest ancestor [`SuspenseScope`], if any.
///
/// This is the same as [`create_suspense_task`], but named for the common case of spawning the
/// future that drives an entire suspense boundary (e.g. the body of a `Suspense` component)
/// rather than a single resource fetch.
pub fn suspense_scope(f: impl Future<Output = ()> + 'static) {
    create_suspense_task(f)
}

/// Returns whether we are currently loading this suspense or not.
///
/// This will return true if there are any tasks remaining in this scope or in any parent
/// scope.
///
/// This function is also reactive and so the loading state can be tracked. If it is called outside
/// of a suspense scope, it will always return `false`.
pub fn use_is_loading() -> bool {
    try_use_context::<SuspenseScope>().map_or(false, |scope| scope.is_loading())
}

/// Returns whether any suspense scope is current loading.
///
/// This is unlike [`use_is_loading`] in that it can be called outside of a suspense scope and does
/// not apply to any suspense scope in particular.
pub fn use_is_loading_global() -> bool {
    if let Some(global) = try_use_context::<AllTasksRemaining>() {
        global
            .all_tasks_remaining
            .with(|vec| vec.iter().any(|signal| signal.get() > 0))
    } else {
        false
    }
}
