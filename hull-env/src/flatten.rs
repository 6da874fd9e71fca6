//! An observation wrapper that flattens observations to rank-1 vectors.
use crate::util::ravel;
use anyhow::Result;
use hull_core::{BoxSpace, Env, Info, Space, Step};
use ndarray::ArrayD;

/// An observation wrapper that flattens observations to rank-1 vectors.
///
/// Observations returned by the wrapped environment are raveled in row-major
/// element order before being passed to the caller; the observation space is
/// adjusted accordingly. The wrapped environment must have a
/// [`Space::Box`] observation space.
#[derive(Debug)]
pub struct FlattenObservation<E: Env> {
    env: E,
    observation_space: Space,
}

impl<E: Env> FlattenObservation<E> {
    /// Wraps `env`, deriving the flattened observation space.
    pub fn new(env: E) -> Result<Self> {
        let inner = env.observation_space().as_box()?;
        let observation_space = Space::Box(BoxSpace::new(ravel(inner.low()), ravel(inner.high()))?);
        Ok(Self {
            env,
            observation_space,
        })
    }

    /// Returns a reference to the inner environment.
    pub fn env(&self) -> &E {
        &self.env
    }
}

impl<E: Env> Env for FlattenObservation<E> {
    fn observation_space(&self) -> &Space {
        &self.observation_space
    }

    fn action_space(&self) -> &Space {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
        let (obs, info) = self.env.reset(seed)?;
        Ok((ravel(&obs), info))
    }

    fn step(&mut self, act: &ArrayD<f32>) -> Result<Step> {
        let mut step = self.env.step(act)?;
        step.obs = ravel(&step.obs);
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::error::HullError;
    use ndarray::IxDyn;

    // Observations are a 2x3 grid holding 100 * t + i at element i.
    struct GridEnv {
        observation_space: Space,
        action_space: Space,
        t: usize,
    }

    impl GridEnv {
        fn new() -> Self {
            let bounds = |v: f32| ArrayD::from_elem(IxDyn(&[2, 3]), v);
            Self {
                observation_space: Space::Box(BoxSpace::new(bounds(0.0), bounds(1000.0)).unwrap()),
                action_space: Space::Discrete(2),
                t: 0,
            }
        }

        fn obs(&self) -> ArrayD<f32> {
            ArrayD::from_shape_vec(
                IxDyn(&[2, 3]),
                (0..6).map(|i| (100 * self.t + i) as f32).collect(),
            )
            .unwrap()
        }
    }

    impl Env for GridEnv {
        fn observation_space(&self) -> &Space {
            &self.observation_space
        }

        fn action_space(&self) -> &Space {
            &self.action_space
        }

        fn reset(&mut self, _seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
            self.t = 0;
            Ok((self.obs(), Info::empty()))
        }

        fn step(&mut self, _act: &ArrayD<f32>) -> Result<Step> {
            self.t += 1;
            Ok(Step::new(self.obs(), 0.0, false, false, Info::empty()))
        }
    }

    // Same interface, but with an observation space no wrapper can flatten.
    #[derive(Debug)]
    struct DiscreteObsEnv {
        observation_space: Space,
        action_space: Space,
    }

    impl Env for DiscreteObsEnv {
        fn observation_space(&self) -> &Space {
            &self.observation_space
        }

        fn action_space(&self) -> &Space {
            &self.action_space
        }

        fn reset(&mut self, _seed: Option<u64>) -> Result<(ArrayD<f32>, Info)> {
            unimplemented!();
        }

        fn step(&mut self, _act: &ArrayD<f32>) -> Result<Step> {
            unimplemented!();
        }
    }

    #[test]
    fn derives_flattened_space() {
        let env = FlattenObservation::new(GridEnv::new()).unwrap();
        let space = env.observation_space().as_box().unwrap();
        assert_eq!(space.shape(), &[6]);
        assert!(space.high().iter().all(|&v| v == 1000.0));
    }

    #[test]
    fn flattens_in_row_major_order() {
        let mut env = FlattenObservation::new(GridEnv::new()).unwrap();
        let (obs, _) = env.reset(None).unwrap();
        assert_eq!(obs.shape(), &[6]);
        assert_eq!(obs.as_slice().unwrap(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let act = ArrayD::from_elem(IxDyn(&[1]), 0.0);
        let step = env.step(&act).unwrap();
        assert_eq!(
            step.obs.as_slice().unwrap(),
            &[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]
        );
    }

    #[test]
    fn rejects_non_box_observation_space() {
        let env = DiscreteObsEnv {
            observation_space: Space::Discrete(3),
            action_space: Space::Discrete(2),
        };
        let err = FlattenObservation::new(env).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HullError>(),
            Some(HullError::TypeMismatch(_))
        ));
    }
}
