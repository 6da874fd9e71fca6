//! Environment step.
use super::Info;
use ndarray::ArrayD;

/// Represents the result of one interaction step.
///
/// An environment emits a [`Step`] object at every interaction step. Wrappers
/// may replace the observation, rescale the reward, or relabel the metadata
/// before handing the object outward.
#[derive(Clone, Debug)]
pub struct Step {
    /// Observation.
    pub obs: ArrayD<f32>,

    /// Reward.
    pub reward: f64,

    /// Flag denoting if the episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if the episode is truncated.
    pub is_truncated: bool,

    /// Episode metadata.
    pub info: Info,
}

impl Step {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: ArrayD<f32>,
        reward: f64,
        is_terminated: bool,
        is_truncated: bool,
        info: Info,
    ) -> Self {
        Step {
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
