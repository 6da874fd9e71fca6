#![warn(missing_docs)]
//! Composable wrappers around environments implementing
//! [`hull_core::Env`].
//!
//! Each wrapper owns one inner environment, implements [`hull_core::Env`]
//! itself, and transforms the values passing through it, so that a chain of
//! wrappers looks like a single environment to the caller:
//!
//! - [`FlattenObservation`] collapses observations of arbitrary rank into
//!   rank-1 vectors.
//! - [`NormalizeEnv`] maps observations to a zero-mean/unit-variance range
//!   and maps normalized actions back to the units of the wrapped
//!   environment, using fixed statistics.
//! - [`FrameStack`] emits the last `num_stack` observations stacked along a
//!   new leading axis.
//! - [`ActionSequence`] cuts one flat macro-action into an ordered sequence
//!   of sub-actions and drives the wrapped environment once per sub-action.
//! - [`SuccessInfo`] renames the `is_success` metadata key to `success`.
//!
//! Whenever a wrapper alters the shape or bounds of observations or actions,
//! it derives a consistent [`hull_core::Space`] at construction time and
//! exposes it in place of the inner one.
//!
//! Composition order is chosen by the caller and changes the observable
//! semantics. For example, normalizing before stacking applies the
//! statistics to single frames, while stacking before normalizing would
//! require statistics of the stacked shape.
mod flatten;
mod frame_stack;
mod norm;
mod sequence;
mod success;
pub mod util;
pub use flatten::FlattenObservation;
pub use frame_stack::{FrameStack, FrameStackConfig};
pub use norm::{NormalizeEnv, NormalizeEnvConfig};
pub use sequence::{ActionSequence, ActionSequenceConfig};
pub use success::SuccessInfo;
