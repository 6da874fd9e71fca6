//! Environment.
use super::{Info, Step};
use crate::Space;
use anyhow::Result;
use ndarray::ArrayD;

/// Represents an environment, typically an MDP.
///
/// A wrapper implements this trait as well, holding exactly one inner
/// environment and transforming the values that pass through it. A call into
/// the outermost wrapper recurses inward and the results propagate back
/// outward through each wrapper's transform, so a whole chain looks like a
/// single environment to the caller.
pub trait Env {
    /// The space of observations returned by [`Env::reset`] and [`Env::step`].
    ///
    /// A wrapper that reshapes observations exposes its own derived space
    /// here, consistent with the values it actually returns.
    fn observation_space(&self) -> &Space;

    /// The space of actions accepted by [`Env::step`].
    fn action_space(&self) -> &Space;

    /// Starts a new episode.
    ///
    /// Returns the initial observation and the initial episode metadata.
    /// Implementations re-seed internal state when `seed` is given.
    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)>;

    /// Performes an environment step.
    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step>;
}
