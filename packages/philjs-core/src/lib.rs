//! Backend-agnostic component plumbing shared by every PhilJS rendering target.
//!
//! This crate should not be used directly. Instead, use the `philjs` crate which re-exports this
//! crate.

#![deny(missing_debug_implementations)]
#![warn(missing_docs)]

mod component;

pub use component::*;
