use anyhow::Result;
use hull_core::{
    dummy::{DummyEnv, DummyEnvConfig},
    Env as _,
};
use hull_env::{
    ActionSequence, ActionSequenceConfig, FrameStack, FrameStackConfig, NormalizeEnv,
    NormalizeEnvConfig, SuccessInfo,
};
use ndarray::{ArrayD, IxDyn};
use serde::Serialize;
use std::fs::File;

const N_EPISODES: usize = 5;
const EPISODE_LEN: usize = 20;
const SEQUENCE_LENGTH: usize = 2;

#[derive(Debug, Serialize)]
struct PipelineRecord {
    episode: usize,
    step: usize,
    reward: f64,
    done: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let env = DummyEnv::build(
        &DummyEnvConfig::default()
            .episode_len(EPISODE_LEN)
            .flag_success(true),
    )?;
    let env = NormalizeEnv::build(
        env,
        &NormalizeEnvConfig::default().act_stats(
            ArrayD::from_elem(IxDyn(&[2]), 0.0),
            ArrayD::from_elem(IxDyn(&[2]), 2.0),
        ),
    )?;
    let env = FrameStack::build(env, &FrameStackConfig::default())?;
    let env = ActionSequence::build(
        env,
        &ActionSequenceConfig::default().sequence_length(SEQUENCE_LENGTH),
    )?;
    let mut env = SuccessInfo::new(env);

    let act_dim = env.action_space().as_box()?.len();

    let csv_path = std::env::temp_dir().join("random_pipeline_eval.csv");
    let mut wtr = csv::WriterBuilder::new().from_writer(File::create(&csv_path)?);

    for episode in 0..N_EPISODES {
        let (obs, _info) = env.reset(None)?;
        log::info!("episode {}, stacked obs shape {:?}", episode, obs.shape());

        let mut step_count = 0;
        loop {
            let act = ArrayD::from_shape_vec(
                IxDyn(&[act_dim]),
                (0..act_dim).map(|_| fastrand::f32() * 2.0 - 1.0).collect(),
            )?;
            let step = env.step(&act)?;
            step_count += 1;

            wtr.serialize(PipelineRecord {
                episode,
                step: step_count,
                reward: step.reward,
                done: step.is_done(),
            })?;

            if step.is_done() {
                log::info!(
                    "episode {} finished after {} macro-steps, success = {:?}",
                    episode,
                    step_count,
                    step.info.get_bool("success")
                );
                break;
            }
        }
    }

    wtr.flush()?;
    log::info!("wrote {}", csv_path.display());

    Ok(())
}
