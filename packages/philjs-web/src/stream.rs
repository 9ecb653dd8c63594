//! Coordinating suspense boundaries with the different server-rendering strategies.

/// Controls how a server-rendered page synchronizes with its suspense boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SsrMode {
    /// Suspense boundaries are not awaited; fallbacks are rendered into the initial HTML and
    /// hydrated on the client, which is then responsible for resolving them.
    Sync,
    /// Suspense boundaries are awaited before any HTML is sent, so the initial response already
    /// contains their resolved content.
    Blocking,
    /// The shell (with fallbacks in place of any pending suspense boundary) is sent immediately;
    /// the fully resolved page is streamed in afterwards and replaces it on the client.
    Streaming,
}

pub use streaming::*;

#[cfg(all(feature = "suspense", any(not(target_arch = "wasm32"), philjs_force_ssr)))]
mod streaming {
    use crate::*;

    fn render_once(view: &impl Fn() -> View) -> String {
        let mut buf = String::new();
        for node in view().nodes {
            render_recursive(node, &mut buf);
        }
        buf
    }

    /// Render `view` to a string, waiting for every suspense boundary (including nested ones) to
    /// resolve before returning. The returned string already contains the fully resolved page.
    ///
    /// `view` is first rendered with [`SsrMode::Blocking`] in context purely to discover and kick
    /// off the pending suspense work; once every boundary has settled, `view` is rendered a
    /// second time, at which point every boundary reads back its resolved state and the result is
    /// the final HTML.
    pub async fn render_to_string_await_suspense(view: impl Fn() -> View + 'static) -> String {
        let root = create_root(|| {});
        let scope = root.run_in(|| {
            provide_context(HydrationRegistry::new());
            provide_context(SsrMode::Blocking);
            let (_discarded, scope) = philjs_futures::create_suspense_scope(&view);
            scope
        });
        scope.until_finished().await;

        let html = root.run_in(|| render_once(&view));
        root.dispose();
        html
    }

    /// Render `view` in streaming mode.
    ///
    /// The shell (fallbacks standing in for any pending suspense boundary) is handed to
    /// `on_shell_ready` as soon as it is available. Once every suspense boundary has resolved,
    /// `view` is re-rendered with its now-settled state and the fully resolved HTML is handed to
    /// `on_complete`.
    pub async fn render_to_stream(
        view: impl Fn() -> View + 'static,
        on_shell_ready: impl FnOnce(String),
        on_complete: impl FnOnce(String),
    ) {
        let root = create_root(|| {});
        let scope = root.run_in(|| {
            provide_context(HydrationRegistry::new());
            provide_context(SsrMode::Streaming);
            let (shell, scope) = philjs_futures::create_suspense_scope(&view);
            let mut buf = String::new();
            for node in shell.nodes {
                render_recursive(node, &mut buf);
            }
            on_shell_ready(buf);
            scope
        });
        scope.until_finished().await;

        let html = root.run_in(|| render_once(&view));
        on_complete(html);
        root.dispose();
    }
}

#[cfg(not(all(feature = "suspense", any(not(target_arch = "wasm32"), philjs_force_ssr))))]
mod streaming {}
