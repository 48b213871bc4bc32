use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use env::Env;
use serde::{Deserialize, Serialize};

use crate::nn::{argmax, softmax, Dense};
use crate::optim::Adam;

/// Hyperparameters for the PPO learner.
#[derive(Clone, Serialize, Deserialize)]
pub struct PpoConfig {
    /// Discount factor.
    pub gamma: f32,
    /// Generalized advantage estimation smoothing factor.
    pub gae_lambda: f32,
    /// Clip range for the surrogate objective.
    pub clip: f32,
    /// Environment steps collected per policy update.
    pub n_steps: usize,
    /// Optimization passes over each rollout.
    pub n_epochs: usize,
    /// Adam step size.
    pub learning_rate: f32,
    /// Width of the shared hidden layer.
    pub hidden_dim: usize,
}

impl Default for PpoConfig {
    fn default() -> Self {
        Self {
            gamma: 0.99,
            gae_lambda: 0.95,
            clip: 0.2,
            n_steps: 256,
            n_epochs: 4,
            learning_rate: 1e-3,
            hidden_dim: 32,
        }
    }
}

/// Policy/value network: shared tanh trunk with a categorical policy head
/// and a scalar value head.
#[derive(Clone, Serialize, Deserialize)]
struct PolicyValueNet {
    l1: Dense,
    policy_head: Dense,
    value_head: Dense,
}

struct NetOutput {
    /// Trunk activations after tanh, kept for backpropagation.
    hidden: Vec<f32>,
    logits: Vec<f32>,
    value: f32,
}

impl PolicyValueNet {
    fn new(in_dim: usize, hidden_dim: usize, out_dim: usize, rng: &mut fastrand::Rng) -> Self {
        Self {
            l1: Dense::glorot(in_dim, hidden_dim, rng),
            policy_head: Dense::glorot(hidden_dim, out_dim, rng),
            value_head: Dense::glorot(hidden_dim, 1, rng),
        }
    }

    fn forward(&self, x: &[f32]) -> NetOutput {
        let mut hidden = self.l1.forward(x);
        for h in &mut hidden {
            *h = h.tanh();
        }
        let logits = self.policy_head.forward(&hidden);
        let value = self.value_head.forward(&hidden)[0];
        NetOutput {
            hidden,
            logits,
            value,
        }
    }

    fn param_sizes(&self) -> Vec<usize> {
        vec![
            self.l1.w.len(),
            self.l1.b.len(),
            self.policy_head.w.len(),
            self.policy_head.b.len(),
            self.value_head.w.len(),
            self.value_head.b.len(),
        ]
    }

    fn params_mut(&mut self) -> Vec<&mut [f32]> {
        vec![
            &mut self.l1.w,
            &mut self.l1.b,
            &mut self.policy_head.w,
            &mut self.policy_head.b,
            &mut self.value_head.w,
            &mut self.value_head.b,
        ]
    }
}

/// Gradients mirroring [`PolicyValueNet::params_mut`] order.
struct NetGrads {
    w1: Vec<f32>,
    b1: Vec<f32>,
    wp: Vec<f32>,
    bp: Vec<f32>,
    wv: Vec<f32>,
    bv: Vec<f32>,
}

impl NetGrads {
    fn zeros_for(net: &PolicyValueNet) -> Self {
        Self {
            w1: vec![0.0; net.l1.w.len()],
            b1: vec![0.0; net.l1.b.len()],
            wp: vec![0.0; net.policy_head.w.len()],
            bp: vec![0.0; net.policy_head.b.len()],
            wv: vec![0.0; net.value_head.w.len()],
            bv: vec![0.0; net.value_head.b.len()],
        }
    }

    fn scale(&mut self, factor: f32) {
        for g in [
            &mut self.w1,
            &mut self.b1,
            &mut self.wp,
            &mut self.bp,
            &mut self.wv,
            &mut self.bv,
        ] {
            for v in g.iter_mut() {
                *v *= factor;
            }
        }
    }

    fn slices(&self) -> Vec<&[f32]> {
        vec![&self.w1, &self.b1, &self.wp, &self.bp, &self.wv, &self.bv]
    }
}

/// On-disk form of a trained policy. Optimizer moments are deliberately not
/// persisted; a reloaded policy predicts identically and resumes training
/// with fresh Adam state.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    config: PpoConfig,
    net: PolicyValueNet,
}

struct RolloutBatch<'a> {
    obs: &'a [Vec<f32>],
    actions: &'a [usize],
    old_log_probs: &'a [f32],
    advantages: &'a [f32],
    returns: &'a [f32],
}

/// Proximal Policy Optimization learner for discrete action spaces.
pub struct Ppo {
    net: PolicyValueNet,
    config: PpoConfig,
    optimizer: Adam,
    rng: fastrand::Rng,
}

impl Ppo {
    /// Creates a freshly initialized policy for the given space sizes.
    #[must_use]
    pub fn new(obs_dim: usize, act_dim: usize) -> Self {
        Self::with_seed(obs_dim, act_dim, fastrand::u64(..))
    }

    /// Creates a policy with a deterministic weight initialization and
    /// action-sampling stream.
    #[must_use]
    pub fn with_seed(obs_dim: usize, act_dim: usize, seed: u64) -> Self {
        Self::with_config(obs_dim, act_dim, PpoConfig::default(), seed)
    }

    /// Creates a policy with explicit hyperparameters.
    #[must_use]
    pub fn with_config(obs_dim: usize, act_dim: usize, config: PpoConfig, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let net = PolicyValueNet::new(obs_dim, config.hidden_dim, act_dim, &mut rng);
        let optimizer = Adam::new(config.learning_rate, &net.param_sizes());
        Self {
            net,
            config,
            optimizer,
            rng,
        }
    }

    /// Observation dimension the policy was built for.
    #[must_use]
    pub fn obs_dim(&self) -> usize {
        self.net.l1.in_dim
    }

    /// Number of discrete actions the policy chooses between.
    #[must_use]
    pub fn act_dim(&self) -> usize {
        self.net.policy_head.out_dim
    }

    /// Deterministic action selection: the mode of the action distribution.
    #[must_use]
    pub fn predict(&self, obs: &[f32]) -> usize {
        assert_eq!(obs.len(), self.obs_dim());
        argmax(&self.net.forward(obs).logits)
    }

    /// Runs the optimization loop for exactly `total_timesteps` environment
    /// interactions, mutating the policy in place.
    ///
    /// Blocking and synchronous; progress is reported through `tracing`.
    /// Passing `0` timesteps leaves the policy untouched.
    pub fn learn<E: Env>(&mut self, env: &mut E, total_timesteps: usize) {
        assert_eq!(env.obs_size(), self.obs_dim());
        assert_eq!(env.action_size(), self.act_dim());
        if total_timesteps == 0 {
            return;
        }

        let mut obs = env.reset();
        let mut steps_done = 0usize;
        let mut rollouts = 0usize;
        let mut episode_reward = 0.0f32;

        while steps_done < total_timesteps {
            let horizon = self.config.n_steps.min(total_timesteps - steps_done);

            let mut b_obs = Vec::with_capacity(horizon);
            let mut b_actions = Vec::with_capacity(horizon);
            let mut b_log_probs = Vec::with_capacity(horizon);
            let mut b_rewards = Vec::with_capacity(horizon);
            let mut b_dones = Vec::with_capacity(horizon);
            let mut b_values = Vec::with_capacity(horizon);
            let mut finished_rewards = Vec::new();

            for _ in 0..horizon {
                let out = self.net.forward(&obs);
                let probs = softmax(&out.logits);
                let action = self.sample(&probs);
                let log_prob = probs[action].max(1e-8).ln();

                let step = env.step(action);
                episode_reward += step.reward;

                b_obs.push(std::mem::take(&mut obs));
                b_actions.push(action);
                b_log_probs.push(log_prob);
                b_rewards.push(step.reward);
                b_dones.push(step.done());
                b_values.push(out.value);

                if step.done() {
                    finished_rewards.push(episode_reward);
                    episode_reward = 0.0;
                    obs = env.reset();
                } else {
                    obs = step.obs;
                }
            }

            let last_value = self.net.forward(&obs).value;
            let (advantages, returns) = self.estimate_advantages(
                &b_rewards,
                &b_values,
                &b_dones,
                last_value,
            );

            let batch = RolloutBatch {
                obs: &b_obs,
                actions: &b_actions,
                old_log_probs: &b_log_probs,
                advantages: &advantages,
                returns: &returns,
            };
            for _ in 0..self.config.n_epochs {
                let grads = policy_gradients(&self.net, &self.config, &batch);
                let mut params = self.net.params_mut();
                self.optimizer.step(&mut params, &grads.slices());
            }

            steps_done += horizon;
            rollouts += 1;
            let mean_reward = if finished_rewards.is_empty() {
                episode_reward
            } else {
                finished_rewards.iter().sum::<f32>() / finished_rewards.len() as f32
            };
            tracing::info!(
                rollout = rollouts,
                steps = steps_done,
                episodes = finished_rewards.len(),
                mean_reward,
                "rollout update complete"
            );
        }
    }

    /// Serializes the policy to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let snapshot = Snapshot {
            config: self.config.clone(),
            net: self.net.clone(),
        };
        let json = serde_json::to_string(&snapshot).context("failed to serialize policy")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write policy to {}", path.display()))?;
        Ok(())
    }

    /// Deserializes a policy previously written by [`Ppo::save`].
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, unreadable, or not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open policy file {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse policy file {}", path.display()))?;
        let optimizer = Adam::new(snapshot.config.learning_rate, &snapshot.net.param_sizes());
        Ok(Self {
            net: snapshot.net,
            config: snapshot.config,
            optimizer,
            rng: fastrand::Rng::new(),
        })
    }

    fn sample(&mut self, probs: &[f32]) -> usize {
        let mut r = self.rng.f32();
        for (i, p) in probs.iter().enumerate() {
            if r < *p {
                return i;
            }
            r -= p;
        }
        probs.len() - 1
    }

    /// Generalized advantage estimation over one rollout, with normalized
    /// advantages and value targets `advantage + value`.
    fn estimate_advantages(
        &self,
        rewards: &[f32],
        values: &[f32],
        dones: &[bool],
        last_value: f32,
    ) -> (Vec<f32>, Vec<f32>) {
        let n = rewards.len();
        let mut advantages = vec![0.0f32; n];
        let mut last_advantage = 0.0f32;
        for t in (0..n).rev() {
            let (next_value, next_nonterminal) = if dones[t] {
                (0.0, 0.0)
            } else if t == n - 1 {
                (last_value, 1.0)
            } else {
                (values[t + 1], 1.0)
            };
            let delta =
                rewards[t] + self.config.gamma * next_value * next_nonterminal - values[t];
            last_advantage = delta
                + self.config.gamma * self.config.gae_lambda * next_nonterminal * last_advantage;
            advantages[t] = last_advantage;
        }

        let returns: Vec<f32> = advantages
            .iter()
            .zip(values)
            .map(|(a, v)| a + v)
            .collect();

        let mean = advantages.iter().sum::<f32>() / n as f32;
        let std = (advantages.iter().map(|a| (a - mean).powi(2)).sum::<f32>() / n as f32).sqrt();
        for a in &mut advantages {
            *a = (*a - mean) / (std + 1e-8);
        }

        (advantages, returns)
    }
}

/// Full-batch gradient of the clipped surrogate plus value loss.
fn policy_gradients(net: &PolicyValueNet, config: &PpoConfig, batch: &RolloutBatch) -> NetGrads {
    let mut grads = NetGrads::zeros_for(net);
    let hidden_dim = net.l1.out_dim;
    let in_dim = net.l1.in_dim;
    let act_dim = net.policy_head.out_dim;

    for (idx, obs) in batch.obs.iter().enumerate() {
        let action = batch.actions[idx];
        let advantage = batch.advantages[idx];
        let ret = batch.returns[idx];

        let out = net.forward(obs);
        let probs = softmax(&out.logits);
        let log_prob = probs[action].max(1e-8).ln();
        let ratio = (log_prob - batch.old_log_probs[idx]).exp();
        let clipped = ratio.clamp(1.0 - config.clip, 1.0 + config.clip);

        // Gradient flows through the ratio only while the unclipped
        // surrogate is the active branch of the min.
        let d_log_prob = if ratio * advantage <= clipped * advantage {
            -advantage * ratio
        } else {
            0.0
        };

        let d_value = 2.0 * (out.value - ret);

        let mut d_hidden = vec![0.0f32; hidden_dim];
        for j in 0..act_dim {
            let indicator = if j == action { 1.0 } else { 0.0 };
            let d_logit = d_log_prob * (indicator - probs[j]);
            for i in 0..hidden_dim {
                grads.wp[j * hidden_dim + i] += d_logit * out.hidden[i];
                d_hidden[i] += net.policy_head.w[j * hidden_dim + i] * d_logit;
            }
            grads.bp[j] += d_logit;
        }
        for i in 0..hidden_dim {
            grads.wv[i] += d_value * out.hidden[i];
            d_hidden[i] += net.value_head.w[i] * d_value;
        }
        grads.bv[0] += d_value;

        for i in 0..hidden_dim {
            let d_z = d_hidden[i] * (1.0 - out.hidden[i].powi(2));
            for k in 0..in_dim {
                grads.w1[i * in_dim + k] += d_z * obs[k];
            }
            grads.b1[i] += d_z;
        }
    }

    grads.scale(1.0 / batch.obs.len() as f32);
    grads
}
