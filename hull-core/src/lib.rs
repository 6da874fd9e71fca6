#![warn(missing_docs)]
//! Core abstractions for composable environment wrappers.
//!
//! An environment is anything implementing the [`Env`] trait: it exposes a
//! bounded [`Space`] for observations and actions, starts episodes with
//! [`Env::reset`] and advances them with [`Env::step`]. Wrappers in the
//! `hull-env` crate implement the same trait while owning exactly one inner
//! environment, so that arbitrarily long chains of transformations look like
//! a single environment to the caller.
pub mod error;

mod base;
pub use base::{Env, Info, InfoValue, Step};

mod space;
pub use space::{BoxSpace, Space};

pub mod dummy;
