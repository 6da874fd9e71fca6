//! An action wrapper that executes a flattened sequence of actions.
use crate::util::tile;
use anyhow::Result;
use hull_core::{error::HullError, BoxSpace, Env, Info, Space, Step};
use log::trace;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

/// Configuration of [`ActionSequence`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSequenceConfig {
    /// Number of actions to execute sequentially per outer step.
    pub sequence_length: usize,
}

impl Default for ActionSequenceConfig {
    fn default() -> Self {
        Self { sequence_length: 1 }
    }
}

impl ActionSequenceConfig {
    /// Sets the number of actions executed per outer step.
    pub fn sequence_length(mut self, v: usize) -> Self {
        self.sequence_length = v;
        self
    }
}

/// An action wrapper that executes a flattened sequence of actions in the
/// wrapped environment.
///
/// The action passed to [`ActionSequence::step`] is a rank-1 array
/// concatenating `sequence_length` actions of the wrapped environment. It is
/// cut into sub-actions of the inner action shape which are executed
/// strictly in order, one inner step each. The observation and metadata of
/// the last executed sub-step are returned together with the sum of the
/// sub-step rewards and the OR of their termination flags. Execution stops
/// early as soon as a sub-step reports the episode terminated or truncated,
/// so fewer than `sequence_length` inner steps may run.
///
/// This lets an outer controller emit a fixed-size batch of future actions
/// per decision while still respecting episode boundaries discovered
/// mid-sequence.
#[derive(Debug)]
pub struct ActionSequence<E: Env> {
    env: E,
    sequence_length: usize,
    base_shape: Vec<usize>,
    base_size: usize,
    action_space: Space,
}

impl<E: Env> ActionSequence<E> {
    /// Returns the default configuration.
    pub fn default_config() -> ActionSequenceConfig {
        ActionSequenceConfig::default()
    }

    /// Wraps `env`, deriving the tiled action space.
    pub fn build(env: E, config: &ActionSequenceConfig) -> Result<Self> {
        if config.sequence_length == 0 {
            return Err(HullError::ValidationError(
                "sequence_length must be greater than 0".to_string(),
            )
            .into());
        }

        let inner = env.action_space().as_box()?;
        if inner.is_empty() {
            return Err(
                HullError::ValidationError("action space has no elements".to_string()).into(),
            );
        }

        let base_shape = inner.shape().to_vec();
        let base_size = inner.len();
        let action_space = Space::Box(BoxSpace::new(
            tile(inner.low(), config.sequence_length),
            tile(inner.high(), config.sequence_length),
        )?);

        Ok(Self {
            env,
            sequence_length: config.sequence_length,
            base_shape,
            base_size,
            action_space,
        })
    }
}

impl<E: Env> Env for ActionSequence<E> {
    fn observation_space(&self) -> &Space {
        self.env.observation_space()
    }

    fn action_space(&self) -> &Space {
        &self.action_space
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
        self.env.reset(seed)
    }

    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step> {
        trace!("ActionSequence::step()");

        // Validated before any inner step runs, so a rejected call leaves
        // the chain untouched.
        let expected = self.sequence_length * self.base_size;
        if act.len() != expected {
            return Err(HullError::SizeMismatch {
                expected,
                actual: act.len(),
            }
            .into());
        }

        let flat: Vec<f32> = act.iter().copied().collect();
        let sub_acts = flat
            .chunks(self.base_size)
            .map(|chunk| ArrayD::from_shape_vec(IxDyn(&self.base_shape), chunk.to_vec()))
            .collect::<Result<Vec<_>, _>>()?;

        // sequence_length >= 1, so at least one sub-step always runs.
        let mut step = self.env.step(&sub_acts[0])?;
        for sub_act in &sub_acts[1..] {
            if step.is_done() {
                break;
            }
            let next = self.env.step(sub_act)?;
            step.obs = next.obs;
            step.info = next.info;
            step.reward += next.reward;
            step.is_terminated = step.is_terminated || next.is_terminated;
            step.is_truncated = step.is_truncated || next.is_truncated;
        }

        Ok(step)
    }
}
