//! Bookkeeping shared between the SSR and hydration rendering backends.
//!
//! Every hydratable element is assigned a stable `data-hk` key in the order it is created. On
//! the client, [`crate::hydrate_in_scope`] walks the existing markup, indexes elements by that
//! key, and [`HydrateNode`](crate::HydrateNode) pops them back out in the same order the view
//! recreates them, so that element identity (and therefore any already-attached browser state)
//! survives across the server/client boundary.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::HtmlNode;

/// Assigns sequential hydration keys within a single render pass.
///
/// A fresh registry is provided into context at the start of every [`crate::render_to_string`]
/// call and every [`crate::hydrate_in_scope`] call, so keys are always relative to that one
/// render rather than global to the process.
#[derive(Clone, Debug, Default)]
pub struct HydrationRegistry {
    next: Rc<Cell<u32>>,
}

impl HydrationRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next hydration key and advances the counter.
    pub fn next_key(&self) -> u32 {
        let key = self.next.get();
        self.next.set(key + 1);
        key
    }
}

thread_local! {
    /// Whether the current render pass is hydratable.
    ///
    /// On the server this gates whether elements are assigned a `data-hk` key at all (see
    /// [`crate::components::NoHydrate`], which temporarily flips this to `false`). On the client
    /// it is only consulted by [`HydrateNode`](crate::HydrateNode), which is compiled in when the
    /// `hydrate` feature is enabled.
    pub(crate) static IS_HYDRATING: Cell<bool> = const { Cell::new(true) };

    /// Elements collected from existing server-rendered markup, keyed by `data-hk` and stored in
    /// reverse creation order so that each call to [`HtmlNode::create_element`] during hydration
    /// can simply `pop` the next one off.
    pub(crate) static HYDRATE_NODES: RefCell<Vec<HtmlNode>> = const { RefCell::new(Vec::new()) };
}
