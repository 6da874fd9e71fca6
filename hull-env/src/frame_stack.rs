//! An observation wrapper with stacking observations (frames).
use anyhow::Result;
use hull_core::{error::HullError, BoxSpace, Env, Info, Space, Step};
use log::trace;
use ndarray::{stack, ArrayD, Axis};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Serialize, Deserialize)]
/// Configuration of [`FrameStack`].
#[derive(Clone)]
pub struct FrameStackConfig {
    /// Number of frames to stack.
    pub num_stack: usize,
}

impl Default for FrameStackConfig {
    fn default() -> Self {
        Self { num_stack: 4 }
    }
}

impl FrameStackConfig {
    /// Sets the number of frames to stack.
    pub fn num_stack(mut self, v: usize) -> Self {
        self.num_stack = v;
        self
    }
}

/// An observation wrapper that emits the last `num_stack` observations,
/// stacked along a new leading axis.
///
/// The wrapper keeps a bounded window of the most recent observations,
/// oldest first. On `reset` the window is refilled with `num_stack` copies of
/// the fresh observation, so the first stacked observation carries no true
/// history; on every `step` the newest observation replaces the oldest one.
/// The observation space grows a leading axis of length `num_stack`
/// accordingly. The window length equals `num_stack` after every call.
#[derive(Debug)]
pub struct FrameStack<E: Env> {
    env: E,
    num_stack: usize,
    frames: VecDeque<ArrayD<f32>>,
    observation_space: Space,
}

impl<E: Env> FrameStack<E> {
    /// Returns the default configuration.
    pub fn default_config() -> FrameStackConfig {
        FrameStackConfig::default()
    }

    /// Wraps `env`, deriving the stacked observation space.
    pub fn build(env: E, config: &FrameStackConfig) -> Result<Self> {
        if config.num_stack == 0 {
            return Err(
                HullError::ValidationError("num_stack must be greater than 0".to_string()).into(),
            );
        }

        let inner = env.observation_space().as_box()?;
        let lows = vec![inner.low().view(); config.num_stack];
        let highs = vec![inner.high().view(); config.num_stack];
        let observation_space = Space::Box(BoxSpace::new(
            stack(Axis(0), &lows)?,
            stack(Axis(0), &highs)?,
        )?);

        Ok(Self {
            env,
            num_stack: config.num_stack,
            frames: VecDeque::with_capacity(config.num_stack),
            observation_space,
        })
    }

    // Stacks the window along a new leading axis, oldest frame first.
    fn stacked(&self) -> Result<ArrayD<f32>> {
        let views: Vec<_> = self.frames.iter().map(|f| f.view()).collect();
        Ok(stack(Axis(0), &views)?)
    }
}

impl<E: Env> Env for FrameStack<E> {
    fn observation_space(&self) -> &Space {
        &self.observation_space
    }

    fn action_space(&self) -> &Space {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
        trace!("FrameStack::reset()");

        let (obs, info) = self.env.reset(seed)?;
        self.frames.clear();
        for _ in 0..self.num_stack {
            self.frames.push_back(obs.clone());
        }
        Ok((self.stacked()?, info))
    }

    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step> {
        trace!("FrameStack::step()");

        let step = self.env.step(act)?;
        if self.frames.len() == self.num_stack {
            self.frames.pop_front();
        }
        self.frames.push_back(step.obs);

        Ok(Step::new(
            self.stacked()?,
            step.reward,
            step.is_terminated,
            step.is_truncated,
            step.info,
        ))
    }
}
