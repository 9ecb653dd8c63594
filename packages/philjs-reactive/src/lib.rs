//! Fine grained reactivity for the PhilJS UI framework.
//!
//! This crate should not be used directly. Instead, use the `philjs` crate which re-exports this
//! crate.
//!
//! # Basic usage
//!
//! ## Creating a root
//!
//! [`create_root`] creates a new reactive root. This is usually only called once at the top
//! level of an app.
//!
//! ```
//! # use philjs_reactive::*;
//! create_root(|| {
//!     // Reactive code goes here.
//! });
//! ```
//!
//! ## Signals
//!
//! Signals are the basic building blocks of reactivity. They are used to store state and
//! notify subscribers when that state changes.
//!
//! ```
//! # use philjs_reactive::*;
//! # create_root(|| {
//! let signal = create_signal(123);
//!
//! // Get the value of the signal.
//! assert_eq!(signal.get(), 123);
//!
//! // Set the value of the signal.
//! signal.set(456);
//! assert_eq!(signal.get(), 456);
//! # });
//! ```
//!
//! ## Computations
//!
//! New values can be derived from signals using derived signals or memos. See
//! [`create_memo`] for more information.
//!
//! ```
//! # use philjs_reactive::*;
//! # create_root(|| {
//! let signal = create_signal(123);
//! let doubled = create_memo(move || signal.get() * 2);
//! assert_eq!(doubled.get(), 246);
//! signal.set(456);
//! assert_eq!(doubled.get(), 912);
//! # });
//! ```

#![deny(missing_debug_implementations)]
#![warn(missing_docs)]

mod context;
mod effects;
mod maybe_dyn;
mod memos;
mod node;
mod root;
mod signals;
mod utils;

pub use context::*;
pub use effects::*;
pub use maybe_dyn::*;
pub use memos::*;
pub use node::NodeHandle;
pub(crate) use node::*;
pub use root::*;
pub use signals::*;
pub use utils::*;
