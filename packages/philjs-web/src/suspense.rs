//! Components for suspense.

use std::cell::RefCell;

use philjs_futures::{await_suspense, suspense_scope};
use philjs_macro::{component, view, Props};

use crate::*;

/// Props for [`Suspense`].
#[derive(Props, Debug)]
pub struct SuspenseProps {
    /// The fallback [`View`] to display while the child nodes are being awaited.
    #[prop(default)]
    fallback: View,
    children: Children,
}

/// `Suspense` lets you wait for `async` tasks to complete before rendering the UI. This is useful
/// for asynchronous data-fetching or other asynchronous tasks.
///
/// `Suspense` is deeply integrated with async components.
/// Async components that are nested under the `Suspense` component will not be rendered until they
/// are resolved. Having multiple async components will have the effect that the final UI will only
/// be rendered once all individual async components are rendered. This is useful for showing a
/// loading indicator while the data is being loaded.
///
/// # Example
/// ```
/// use philjs::prelude::*;
/// use philjs::suspense::Suspense;
///
/// #[component]
/// async fn AsyncComp() -> View {
///     view! { "Hello Suspense!" }
/// }
///
/// #[component]
/// fn App() -> View {
///     view! {
///         Suspense(fallback=view! { "Loading..." }) {
///             AsyncComp {}
///         }
///     }
/// }
/// ```
#[component]
pub fn Suspense(props: SuspenseProps) -> View {
    let SuspenseProps { fallback, children } = props;
    let mut fallback = Some(fallback);

    let show = create_signal(false);
    let view = Rc::new(RefCell::new(None));
    // If the Suspense is nested under another Suspense, we want the other Suspense to await this
    // one as well.
    suspense_scope({
        let view = Rc::clone(&view);
        async move {
            let res = await_suspense(async move { children.call() }).await;

            *view.borrow_mut() = Some(res);
            show.set(true);
        }
    });

    view! {
        (if show.get() { view.take().unwrap() } else { fallback.take().unwrap() })
    }
}

#[cfg(test)]
mod tests {
    use philjs_futures::provide_executor_scope;

    use super::*;

    #[tokio::test]
    async fn suspense() {
        #[component]
        async fn Comp() -> View {
            view! { "Hello Suspense!" }
        }

        let view = provide_executor_scope(async {
            render_to_string_await_suspense(|| {
                view! {
                    Suspense(fallback=view! { "Loading..." }) {
                        Comp {}
                    }
                }
            })
            .await
        })
        .await;
        assert_eq!(view, "Hello Suspense!");
    }

    #[tokio::test]
    async fn nested_suspense_waits_for_parent() {
        #[component]
        async fn Inner() -> View {
            view! { "inner" }
        }

        let view = provide_executor_scope(async {
            render_to_string_await_suspense(|| {
                view! {
                    Suspense(fallback=view! { "outer loading" }) {
                        Suspense(fallback=view! { "inner loading" }) {
                            Inner {}
                        }
                    }
                }
            })
            .await
        })
        .await;
        assert_eq!(view, "inner");
    }
}
