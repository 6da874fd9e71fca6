//! This module is used for tests.
use crate::{BoxSpace, Env, Info, InfoValue, Space, Step};
use anyhow::Result;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

/// Configuration of [`DummyEnv`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DummyEnvConfig {
    /// Shape of observations.
    pub obs_shape: Vec<usize>,

    /// Shape of actions.
    pub act_shape: Vec<usize>,

    /// Number of steps after which an episode terminates, if any.
    pub episode_len: Option<usize>,

    /// If `true`, the terminal step carries `is_success` in its metadata.
    pub flag_success: bool,
}

impl Default for DummyEnvConfig {
    fn default() -> Self {
        Self {
            obs_shape: vec![4],
            act_shape: vec![2],
            episode_len: None,
            flag_success: false,
        }
    }
}

impl DummyEnvConfig {
    /// Sets the observation shape.
    pub fn obs_shape(mut self, v: Vec<usize>) -> Self {
        self.obs_shape = v;
        self
    }

    /// Sets the action shape.
    pub fn act_shape(mut self, v: Vec<usize>) -> Self {
        self.act_shape = v;
        self
    }

    /// Sets the episode length.
    pub fn episode_len(mut self, v: usize) -> Self {
        self.episode_len = Some(v);
        self
    }

    /// Flags `is_success` on the terminal step.
    pub fn flag_success(mut self, v: bool) -> Self {
        self.flag_success = v;
        self
    }
}

/// A deterministic environment.
///
/// The observation after the `t`-th step of an episode is an array filled
/// with `t`; the reward of every step is `1.0`. With `episode_len = n` the
/// episode terminates on the `n`-th step. The last action passed to
/// [`DummyEnv::step`] is kept and can be inspected with
/// [`DummyEnv::last_act`], which tests of action-transforming wrappers rely
/// on.
#[derive(Debug)]
pub struct DummyEnv {
    observation_space: Space,
    action_space: Space,
    episode_len: Option<usize>,
    flag_success: bool,
    t: usize,
    last_act: Option<ArrayD<f32>>,
}

impl DummyEnv {
    /// Constructs [`DummyEnv`].
    pub fn build(config: &DummyEnvConfig) -> Result<Self> {
        let observation_space = Space::Box(BoxSpace::new(
            ArrayD::from_elem(IxDyn(&config.obs_shape), 0.0),
            ArrayD::from_elem(IxDyn(&config.obs_shape), f32::INFINITY),
        )?);
        let action_space = Space::Box(BoxSpace::new(
            ArrayD::from_elem(IxDyn(&config.act_shape), -1.0),
            ArrayD::from_elem(IxDyn(&config.act_shape), 1.0),
        )?);

        Ok(Self {
            observation_space,
            action_space,
            episode_len: config.episode_len,
            flag_success: config.flag_success,
            t: 0,
            last_act: None,
        })
    }

    /// The last action received, if any.
    pub fn last_act(&self) -> Option<&ArrayD<f32>> {
        self.last_act.as_ref()
    }

    fn obs(&self) -> Result<ArrayD<f32>> {
        let shape = self.observation_space.as_box()?.shape();
        Ok(ArrayD::from_elem(IxDyn(shape), self.t as f32))
    }
}

impl Env for DummyEnv {
    fn observation_space(&self) -> &Space {
        &self.observation_space
    }

    fn action_space(&self) -> &Space {
        &self.action_space
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
        self.t = seed.unwrap_or(0) as usize;
        Ok((self.obs()?, Info::empty()))
    }

    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step> {
        self.t += 1;
        self.last_act = Some(act.clone());

        let is_terminated = self.episode_len.map_or(false, |n| self.t >= n);
        let mut info = Info::empty();
        if is_terminated && self.flag_success {
            info.insert("is_success", InfoValue::Bool(true));
        }

        Ok(Step::new(self.obs()?, 1.0, is_terminated, false, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_steps_and_terminates() {
        let mut env = DummyEnv::build(&DummyEnvConfig::default().episode_len(2)).unwrap();
        let (obs, _) = env.reset(None).unwrap();
        assert_eq!(obs[[0]], 0.0);

        let act = ArrayD::from_elem(IxDyn(&[2]), 0.0);
        let step = env.step(&act).unwrap();
        assert_eq!(step.obs[[0]], 1.0);
        assert!(!step.is_done());

        let step = env.step(&act).unwrap();
        assert_eq!(step.obs[[0]], 2.0);
        assert!(step.is_terminated);
    }
}
