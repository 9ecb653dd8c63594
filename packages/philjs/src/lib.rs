//! # PhilJS API Documentation
//!
//! PhilJS is a **reactive** library for creating web apps in **Rust** and **WebAssembly**.
//!
//! This is the API docs for philjs. If you are looking for the usage docs, checkout the
//! PhilJS book.
//!
//! ## Feature Flags
//!
//! - `hydrate` - Enables hydration support in DOM nodes. By default, hydration is disabled to
//!   reduce binary size.
//!
//! - `serde` - Enables serializing and deserializing `Signal`s and other wrapper types using
//!   `serde`.
//!
//! - `suspense` - Enables wrappers around `wasm-bindgen-futures` to make it easier to extend a
//!   reactive scope into an `async` function.
//!
//! - `nightly` - Enables nightly-only features. This makes it slightly more ergonomic to use
//!   signals.
//!
//! - `wasm-bindgen-interning` (_default_) - Enables interning for `wasm-bindgen` strings. This
//!   improves performance at a slight cost in binary size. If you want to minimize the size of the
//!   result `.wasm` binary, you might want to disable this.
//!
//! - `web` (_default_) - Enables the web backend for PhilJS. This feature is enabled by most of
//!   the other features so you should rarely need to enable it manually.

#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(clippy::trait_duplication_in_bounds)]
#![deny(clippy::type_repetition_in_bounds)]
#![deny(missing_debug_implementations)]

// Alias self to `philjs` to make it possible to use proc-macros within the `philjs` crate.
#[allow(unused_extern_crates)] // False positive
extern crate self as philjs;

/* Re-export of the philjs-macro crate */
pub use philjs_macro::*;

/// Reactive primitives for PhilJS.
///
/// Re-export of the [`philjs_reactive`] crate.
pub mod reactive {
    pub use philjs_reactive::*;
}

/// Web support for PhilJS.
///
/// Re-export of the [`philjs_web`] crate.
pub mod web {
    pub use philjs_web::*;
}

/// Utilities for working with async.
///
/// Re-export of the [`philjs_futures`] crate.
#[cfg(feature = "suspense")]
pub mod futures {
    pub use philjs_futures::*;
}

/// Data-fetching and caching utilities for PhilJS.
///
/// Re-export of the [`philjs_query`] crate.
#[cfg(feature = "query")]
pub mod query {
    pub use philjs_query::*;
}

#[cfg(feature = "hydrate")]
pub use philjs_web::{hydrate, hydrate_in_scope, hydrate_to};
pub use philjs_web::{render, render_in_scope, render_to, render_to_string};

/// The PhilJS prelude.
///
/// In most cases, it is idiomatic to use a glob import (aka wildcard import) at the beginning of
/// your Rust source file.
///
/// ```rust
/// use philjs::prelude::*;
/// ```
pub mod prelude {
    pub use philjs_core::{Component, Props};
    #[cfg(feature = "web")]
    pub use philjs_macro::*;
    #[cfg(feature = "web")]
    pub use philjs_web::{
        console_dbg, console_log, create_node_ref, document, is_not_ssr, is_ssr, on_mount, window,
        Children, GlobalAttributes, HtmlGlobalAttributes, Indexed, Keyed, NodeRef,
        SvgGlobalAttributes, View,
    };

    pub use crate::reactive::*;
}

/// Re-exports for use by `philjs-macro`. Not intended for use by end-users.
#[doc(hidden)]
pub mod rt {
    pub use philjs_core::{component_scope, element_like_component_builder, Component, Props};
    #[cfg(feature = "suspense")]
    pub use philjs_futures::*;
    pub use philjs_macro::*;
    pub use philjs_reactive::*;
    #[cfg(feature = "web")]
    pub use philjs_web::*;
    #[cfg(feature = "web")]
    pub use web_sys::Event;
}
