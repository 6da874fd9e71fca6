//! A wrapper that renames the `is_success` metadata key to `success`.
use anyhow::Result;
use hull_core::{Env, Info, Space, Step};
use ndarray::ArrayD;

/// A wrapper that renames `is_success` to `success` in episode metadata.
///
/// Some environments report the episode outcome under the key `is_success`.
/// This wrapper makes them compatible with interfaces expecting the key
/// `success` instead, moving the value and removing the original key. Every
/// other key, and every other field of the result, passes through untouched.
pub struct SuccessInfo<E: Env> {
    env: E,
}

impl<E: Env> SuccessInfo<E> {
    /// Wraps `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    fn relabel(mut info: Info) -> Info {
        if let Some(v) = info.remove("is_success") {
            info.insert("success", v);
        }
        info
    }
}

impl<E: Env> Env for SuccessInfo<E> {
    fn observation_space(&self) -> &Space {
        self.env.observation_space()
    }

    fn action_space(&self) -> &Space {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
        let (obs, info) = self.env.reset(seed)?;
        Ok((obs, Self::relabel(info)))
    }

    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step> {
        let mut step = self.env.step(act)?;
        step.info = Self::relabel(step.info);
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::dummy::{DummyEnv, DummyEnvConfig};
    use hull_core::InfoValue;
    use ndarray::IxDyn;

    #[test]
    fn renames_success_key() {
        let env =
            DummyEnv::build(&DummyEnvConfig::default().episode_len(1).flag_success(true)).unwrap();
        let mut env = SuccessInfo::new(env);

        env.reset(None).unwrap();
        let step = env.step(&ArrayD::from_elem(IxDyn(&[2]), 0.0)).unwrap();

        assert!(step.is_terminated);
        assert!(!step.info.contains_key("is_success"));
        assert!(step.info.get_bool("success").unwrap());
    }

    #[test]
    fn passes_other_keys_through() {
        let info = Info::from_slice(&[
            ("is_success", InfoValue::Bool(true)),
            ("x", InfoValue::Int(1)),
        ]);
        let relabeled = SuccessInfo::<DummyEnv>::relabel(info);
        assert!(relabeled.get_bool("success").unwrap());
        assert_eq!(relabeled.get_int("x").unwrap(), 1);
        assert!(!relabeled.contains_key("is_success"));
    }

    #[test]
    fn leaves_info_without_the_key_untouched() {
        let info = Info::from_slice(&[("x", InfoValue::Int(1))]);
        let relabeled = SuccessInfo::<DummyEnv>::relabel(info.clone());
        assert_eq!(relabeled, info);
    }
}
