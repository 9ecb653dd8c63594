//! Context values, used for passing values down the reactive scope tree without threading them
//! through every function call.

use crate::{create_child_scope, NodeId, Root};

/// Adds a value into the current scope's context.
///
/// The value can later be retrieved by calling [`use_context`] or [`try_use_context`] anywhere
/// inside the current scope, or any of its descendants.
///
/// If a context of the same type is already present in the current scope, it is replaced.
///
/// # Example
/// ```
/// # use philjs_reactive::*;
/// # create_root(|| {
/// provide_context(123i32);
/// assert_eq!(use_context::<i32>(), 123);
/// # });
/// ```
#[cfg_attr(debug_assertions, track_caller)]
pub fn provide_context<T: 'static>(value: T) {
    let root = Root::global();
    let current = root.current_node.get();
    if !current.is_null() {
        root.nodes.borrow_mut()[current]
            .context
            .push(Box::new(value));
    }
}

/// Creates a new child scope and adds a context value to it before running `f` inside that
/// scope. This is useful for providing a context value that should only be visible to a
/// specific subtree.
pub fn provide_context_in_new_scope<T: 'static, U>(value: T, f: impl FnOnce() -> U) -> U {
    let mut ret = None;
    create_child_scope(|| {
        provide_context(value);
        ret = Some(f());
    });
    ret.unwrap()
}

fn find_context<T: 'static>(mut node: NodeId) -> Option<T>
where
    T: Clone,
{
    let root = Root::global();
    loop {
        if node.is_null() {
            return None;
        }
        let nodes = root.nodes.borrow();
        let reactive_node = nodes.get(node)?;
        let found = reactive_node
            .context
            .iter()
            .rev()
            .find_map(|val| val.downcast_ref::<T>())
            .cloned();
        let parent = reactive_node.parent;
        drop(nodes);
        if found.is_some() {
            return found;
        }
        node = parent;
    }
}

/// Tries to get a context value of the given type, searching the current scope and all of its
/// ancestors. Returns [`None`] if no context of the requested type is found.
pub fn try_use_context<T: 'static + Clone>() -> Option<T> {
    let root = Root::global();
    find_context(root.current_node.get())
}

/// Same as [`try_use_context`] but panics if no context of the requested type is found in the
/// current scope or any of its ancestors.
#[cfg_attr(debug_assertions, track_caller)]
pub fn use_context<T: 'static + Clone>() -> T {
    try_use_context().expect("context not found for the given type")
}

/// Gets the context value of the given type if it exists, searching the current scope and all
/// of its ancestors. Otherwise, calls `f` to create a new value and provides it in the current
/// scope before returning it.
pub fn use_context_or_else<T: 'static + Clone>(f: impl FnOnce() -> T) -> T {
    if let Some(value) = try_use_context() {
        value
    } else {
        let value = f();
        provide_context(value.clone());
        value
    }
}

/// Checks if [`Any`] downcasting can find a context value of the given type without cloning it.
/// Used internally for tests.
#[cfg(test)]
fn has_context<T: 'static>() -> bool {
    let root = Root::global();
    let mut node = root.current_node.get();
    loop {
        if node.is_null() {
            return false;
        }
        let nodes = root.nodes.borrow();
        let Some(reactive_node) = nodes.get(node) else {
            return false;
        };
        if reactive_node
            .context
            .iter()
            .any(|val| val.downcast_ref::<T>().is_some())
        {
            return true;
        }
        let parent = reactive_node.parent;
        drop(nodes);
        node = parent;
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn context() {
        let _ = create_root(|| {
            provide_context(123i32);
            assert_eq!(use_context::<i32>(), 123);
        });
    }

    #[test]
    fn context_visible_in_child_scope() {
        let _ = create_root(|| {
            provide_context(123i32);
            create_child_scope(|| {
                assert_eq!(use_context::<i32>(), 123);
            });
        });
    }

    #[test]
    fn context_not_visible_outside_scope() {
        let _ = create_root(|| {
            create_child_scope(|| {
                provide_context(123i32);
            });
            assert!(!super::has_context::<i32>());
        });
    }

    #[test]
    fn inner_context_shadows_outer() {
        let _ = create_root(|| {
            provide_context(123i32);
            create_child_scope(|| {
                provide_context(456i32);
                assert_eq!(use_context::<i32>(), 456);
            });
            assert_eq!(use_context::<i32>(), 123);
        });
    }

    #[test]
    fn try_use_context_returns_none_when_missing() {
        let _ = create_root(|| {
            assert_eq!(try_use_context::<i32>(), None);
        });
    }

    #[test]
    fn provide_context_in_new_scope_is_isolated() {
        let _ = create_root(|| {
            let ret = provide_context_in_new_scope(123i32, || use_context::<i32>() * 2);
            assert_eq!(ret, 246);
            assert_eq!(try_use_context::<i32>(), None);
        });
    }

    #[test]
    fn context_or_else_reuses_existing_value() {
        let _ = create_root(|| {
            provide_context(1i32);
            let value = use_context_or_else(|| 999);
            assert_eq!(value, 1);
        });
    }

    #[test]
    fn context_or_else_provides_default_once() {
        let _ = create_root(|| {
            let first = use_context_or_else(|| 42i32);
            let second = use_context_or_else(|| 0i32);
            assert_eq!(first, 42);
            assert_eq!(second, 42);
        });
    }
}
