//! A wrapper that normalizes observations and de-normalizes actions.
use anyhow::Result;
use hull_core::{error::HullError, Env, Info, Space, Step};
use log::trace;
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`NormalizeEnv`].
///
/// Each statistic pair must be fully present or fully absent; if present,
/// its arrays must match the shape of the corresponding space of the wrapped
/// environment. Both conditions are checked by [`NormalizeEnv::build`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizeEnvConfig {
    /// Mean of observations.
    pub obs_mean: Option<ArrayD<f32>>,

    /// Standard deviation of observations.
    pub obs_std: Option<ArrayD<f32>>,

    /// Mean of actions.
    pub act_mean: Option<ArrayD<f32>>,

    /// Standard deviation of actions.
    pub act_std: Option<ArrayD<f32>>,
}

impl Default for NormalizeEnvConfig {
    fn default() -> Self {
        Self {
            obs_mean: None,
            obs_std: None,
            act_mean: None,
            act_std: None,
        }
    }
}

impl NormalizeEnvConfig {
    /// Sets the observation statistics.
    pub fn obs_stats(mut self, mean: ArrayD<f32>, std: ArrayD<f32>) -> Self {
        self.obs_mean = Some(mean);
        self.obs_std = Some(std);
        self
    }

    /// Sets the action statistics.
    pub fn act_stats(mut self, mean: ArrayD<f32>, std: ArrayD<f32>) -> Self {
        self.act_mean = Some(mean);
        self.act_std = Some(std);
        self
    }

    /// Constructs [`NormalizeEnvConfig`] from yaml file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`NormalizeEnvConfig`] to yaml file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

// A mean/std pair, always present together.
#[derive(Debug)]
struct Stats {
    mean: ArrayD<f32>,
    std: ArrayD<f32>,
}

impl Stats {
    // Checks the both-or-neither pairing and the shape against `space`.
    fn build(
        mean: Option<ArrayD<f32>>,
        std: Option<ArrayD<f32>>,
        space: &Space,
        target: &str,
    ) -> Result<Option<Self>> {
        let (mean, std) = match (mean, std) {
            (None, None) => return Ok(None),
            (Some(mean), Some(std)) => (mean, std),
            _ => {
                return Err(HullError::ValidationError(format!(
                    "{} mean and std must both be provided or both be absent",
                    target
                ))
                .into())
            }
        };

        let shape = space.as_box()?.shape();
        for arr in [&mean, &std].iter() {
            if arr.shape() != shape {
                return Err(HullError::ShapeMismatch {
                    expected: shape.to_vec(),
                    actual: arr.shape().to_vec(),
                }
                .into());
            }
        }

        Ok(Some(Stats { mean, std }))
    }

    fn normalize(&self, x: ArrayD<f32>) -> ArrayD<f32> {
        (x - &self.mean) / &self.std
    }

    fn unnormalize(&self, x: &ArrayD<f32>) -> ArrayD<f32> {
        x * &self.std + &self.mean
    }
}

/// A wrapper that normalizes observations and de-normalizes actions with
/// fixed statistics.
///
/// Callers of this wrapper work in a normalized space: actions passed to
/// [`NormalizeEnv::step`] are assumed normalized and are mapped back to
/// `x * std + mean` before being forwarded, while observations coming out of
/// the wrapped environment are mapped to `(x - mean) / std` before being
/// returned. Either statistic pair may be omitted, in which case the
/// corresponding direction passes values through untouched.
///
/// The statistics are a trust boundary: a zero entry in `std` is not guarded
/// against.
#[derive(Debug)]
pub struct NormalizeEnv<E: Env> {
    env: E,
    obs_stats: Option<Stats>,
    act_stats: Option<Stats>,
}

impl<E: Env> NormalizeEnv<E> {
    /// Wraps `env`, validating the statistics in `config`.
    pub fn build(env: E, config: &NormalizeEnvConfig) -> Result<Self> {
        let obs_stats = Stats::build(
            config.obs_mean.clone(),
            config.obs_std.clone(),
            env.observation_space(),
            "observation",
        )?;
        let act_stats = Stats::build(
            config.act_mean.clone(),
            config.act_std.clone(),
            env.action_space(),
            "action",
        )?;

        Ok(Self {
            env,
            obs_stats,
            act_stats,
        })
    }

    fn normalize_obs(&self, obs: ArrayD<f32>) -> ArrayD<f32> {
        match &self.obs_stats {
            Some(stats) => stats.normalize(obs),
            None => obs,
        }
    }
}

impl<E: Env> Env for NormalizeEnv<E> {
    fn observation_space(&self) -> &Space {
        self.env.observation_space()
    }

    fn action_space(&self) -> &Space {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
        let (obs, info) = self.env.reset(seed)?;
        Ok((self.normalize_obs(obs), info))
    }

    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step> {
        trace!("NormalizeEnv::step()");

        let mut step = match &self.act_stats {
            Some(stats) => self.env.step(&stats.unnormalize(act))?,
            None => self.env.step(act)?,
        };
        step.obs = self.normalize_obs(step.obs);
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::dummy::{DummyEnv, DummyEnvConfig};
    use ndarray::IxDyn;
    use tempdir::TempDir;

    fn arr(v: Vec<f32>) -> ArrayD<f32> {
        let n = v.len();
        ArrayD::from_shape_vec(IxDyn(&[n]), v).unwrap()
    }

    #[test]
    fn rejects_mean_without_std() {
        let env = DummyEnv::build(&DummyEnvConfig::default()).unwrap();
        let mut config = NormalizeEnvConfig::default();
        config.obs_mean = Some(arr(vec![0.0; 4]));
        let err = NormalizeEnv::build(env, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HullError>(),
            Some(HullError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_wrongly_shaped_stats() {
        let env = DummyEnv::build(&DummyEnvConfig::default()).unwrap();
        let config =
            NormalizeEnvConfig::default().obs_stats(arr(vec![0.0; 3]), arr(vec![1.0; 3]));
        let err = NormalizeEnv::build(env, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HullError>(),
            Some(HullError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn normalizes_observations() {
        let env = DummyEnv::build(&DummyEnvConfig::default()).unwrap();
        let config =
            NormalizeEnvConfig::default().obs_stats(arr(vec![1.0; 4]), arr(vec![2.0; 4]));
        let mut env = NormalizeEnv::build(env, &config).unwrap();

        // Reset observation is all zeros: (0 - 1) / 2.
        let (obs, _) = env.reset(None).unwrap();
        assert!(obs.iter().all(|&v| v == -0.5));

        // First step observation is all ones: (1 - 1) / 2.
        let step = env.step(&arr(vec![0.0, 0.0])).unwrap();
        assert!(step.obs.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn unnormalizes_actions_before_forwarding() {
        let env = DummyEnv::build(&DummyEnvConfig::default()).unwrap();
        let config =
            NormalizeEnvConfig::default().act_stats(arr(vec![0.5, -0.5]), arr(vec![2.0, 0.5]));
        let mut env = NormalizeEnv::build(env, &config).unwrap();

        env.reset(None).unwrap();
        env.step(&arr(vec![1.0, -1.0])).unwrap();

        // 1.0 * 2.0 + 0.5 and -1.0 * 0.5 - 0.5.
        let forwarded = env.env.last_act().unwrap();
        assert_eq!(forwarded.as_slice().unwrap(), &[2.5, -1.0]);
    }

    #[test]
    fn round_trips_within_tolerance() {
        let mean = arr(vec![0.5, -0.5]);
        let std = arr(vec![2.0, 0.5]);
        let stats = Stats {
            mean: mean.clone(),
            std: std.clone(),
        };

        let x = arr(vec![0.3, -0.7]);
        let round_tripped = stats.normalize(stats.unnormalize(&x));
        for (a, b) in round_tripped.iter().zip(x.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn config_yaml_round_trip() {
        let config =
            NormalizeEnvConfig::default().act_stats(arr(vec![0.5, -0.5]), arr(vec![2.0, 0.5]));
        let dir = TempDir::new("normalize_env_config").unwrap();
        let path = dir.path().join("config.yaml");
        config.save(&path).unwrap();
        assert_eq!(NormalizeEnvConfig::load(&path).unwrap(), config);
    }
}
