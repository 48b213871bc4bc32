//! Environment library for the cart-pole balancing task.
//!
//! Inspired by classic frameworks like OpenAI Gym, this crate defines the
//! [`Env`] trait that learners and wrappers program against, plus the
//! [`CartPole`] simulator itself. Environments are constructed by task name
//! through [`make`], mirroring the `make("CartPole-v1")` convention.
//!
//! Every step returns a [`Step`] carrying separate `terminated` and
//! `truncated` flags; callers that only care about episode boundaries use
//! [`Step::done`].

mod cartpole;

pub use cartpole::CartPole;

use thiserror::Error;

/// Result of advancing an environment by one action.
#[derive(Clone, Debug)]
pub struct Step {
    /// Observation after the transition.
    pub obs: Vec<f32>,
    /// Scalar reward for the transition.
    pub reward: f32,
    /// The episode ended because a failure condition was reached.
    pub terminated: bool,
    /// The episode ended because the step limit was reached.
    pub truncated: bool,
}

impl Step {
    /// Whether the episode is over, for either reason.
    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Reinforcement learning environment trait.
///
/// Each call to [`step`] advances the simulation by one discrete action and
/// returns the new observation vector, a reward signal, and the episode-end
/// flags.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one action.
    fn step(&mut self, action: usize) -> Step;

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;
}

/// Errors produced when constructing an environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The requested task name is not registered.
    #[error("unknown environment `{0}`")]
    UnknownEnvironment(String),
}

/// Construct an environment by task name.
///
/// # Errors
///
/// Returns [`EnvError::UnknownEnvironment`] for names this crate does not
/// provide.
pub fn make(name: &str) -> Result<CartPole, EnvError> {
    match name {
        "CartPole-v1" => Ok(CartPole::new()),
        "CartPole-v0" => Ok(CartPole::with_step_limit(200)),
        other => Err(EnvError::UnknownEnvironment(other.to_string())),
    }
}
