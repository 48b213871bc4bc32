//! Policy lifecycle: construct or reload, train, save, evaluate.

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};
use env::{CartPole, Env};
use ppo::Ppo;

/// Single point of control for one environment and one policy.
///
/// Construction binds the policy to the environment's observation and action
/// spaces. A snapshot already present at the model path is reloaded; its
/// absence is the expected cold start, not an error.
pub struct Agent {
    env: CartPole,
    policy: Ppo,
    model_path: PathBuf,
}

impl Agent {
    /// Creates an agent for the named task, reloading a saved policy from
    /// `model_path` when one exists.
    ///
    /// # Errors
    ///
    /// Fails on unknown task names, on unreadable or malformed snapshots,
    /// and when a reloaded snapshot does not match the environment's spaces.
    pub fn new(env_name: &str, model_path: impl Into<PathBuf>) -> Result<Self> {
        let env = env::make(env_name)?;
        let model_path = model_path.into();

        let policy = if model_path.exists() {
            tracing::info!(path = %model_path.display(), "loading pre-trained model");
            let policy = Ppo::load(&model_path)?;
            ensure!(
                policy.obs_dim() == env.obs_size() && policy.act_dim() == env.action_size(),
                "saved policy ({}x{}) does not fit environment `{env_name}` ({}x{})",
                policy.obs_dim(),
                policy.act_dim(),
                env.obs_size(),
                env.action_size(),
            );
            policy
        } else {
            tracing::info!("no pre-trained model found, initializing a new PPO policy");
            Ppo::new(env.obs_size(), env.action_size())
        };

        Ok(Self {
            env,
            policy,
            model_path,
        })
    }

    /// Runs the optimization loop for exactly `timesteps` environment steps.
    pub fn train(&mut self, timesteps: usize) {
        self.policy.learn(&mut self.env, timesteps);
    }

    /// Saves the policy, to `path` or to the path the agent was built with.
    ///
    /// # Errors
    ///
    /// Fails when the snapshot cannot be written.
    pub fn save_model(&self, path: Option<&Path>) -> Result<()> {
        let path = path.unwrap_or(&self.model_path);
        tracing::info!(path = %path.display(), "saving model");
        self.policy.save(path)
    }

    /// Runs `episodes` full episodes with deterministic action selection and
    /// returns the total reward of each, in order.
    pub fn evaluate(&mut self, episodes: usize) -> Vec<f32> {
        let mut totals = Vec::with_capacity(episodes);
        for episode in 0..episodes {
            let mut obs = self.env.reset();
            let mut total = 0.0;
            loop {
                let action = self.policy.predict(&obs);
                let step = self.env.step(action);
                total += step.reward;
                if step.done() {
                    break;
                }
                obs = step.obs;
            }
            tracing::info!(episode = episode + 1, total_reward = total, "evaluation episode");
            totals.push(total);
        }
        totals
    }

    /// The environment this agent trains against.
    #[must_use]
    pub fn env(&self) -> &CartPole {
        &self.env
    }

    /// Read access to the current policy.
    #[must_use]
    pub fn policy(&self) -> &Ppo {
        &self.policy
    }
}
