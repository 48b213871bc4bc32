//! Cart-pole balancing dynamics.
//!
//! A pole is hinged on a cart that slides along a frictionless track. The
//! agent pushes the cart left or right with a fixed-magnitude force and is
//! rewarded for every step the pole stays near upright and the cart stays on
//! the track.

use crate::{Env, Step};

const GRAVITY: f32 = 9.8;
const CART_MASS: f32 = 1.0;
const POLE_MASS: f32 = 0.1;
const TOTAL_MASS: f32 = CART_MASS + POLE_MASS;
/// Half the pole length; the hinge torque acts about the pole's center of mass.
const HALF_POLE_LENGTH: f32 = 0.5;
const POLE_MASS_LENGTH: f32 = POLE_MASS * HALF_POLE_LENGTH;
const FORCE_MAG: f32 = 10.0;
/// Integration timestep in seconds.
const TAU: f32 = 0.02;
/// Episode fails once the pole tips more than twelve degrees from vertical.
const THETA_LIMIT: f32 = 12.0 * std::f32::consts::PI / 180.0;
/// Episode fails once the cart leaves the track.
const X_LIMIT: f32 = 2.4;
/// All state variables start uniformly distributed within this band.
const RESET_NOISE: f32 = 0.05;

const DEFAULT_STEP_LIMIT: usize = 500;

/// The cart-pole simulator.
///
/// Observation is `[x, x_dot, theta, theta_dot]`; actions are `0` (push
/// left) and `1` (push right). State advances by a single explicit Euler
/// step per action.
#[derive(Debug)]
pub struct CartPole {
    x: f32,
    x_dot: f32,
    theta: f32,
    theta_dot: f32,
    elapsed: usize,
    step_limit: usize,
    rng: fastrand::Rng,
}

impl CartPole {
    /// Creates a cart-pole with the standard 500-step episode limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_step_limit(DEFAULT_STEP_LIMIT)
    }

    /// Creates a cart-pole truncating episodes after `step_limit` steps.
    #[must_use]
    pub fn with_step_limit(step_limit: usize) -> Self {
        Self {
            x: 0.0,
            x_dot: 0.0,
            theta: 0.0,
            theta_dot: 0.0,
            elapsed: 0,
            step_limit,
            rng: fastrand::Rng::new(),
        }
    }

    /// Re-seeds the reset noise generator for reproducible episodes.
    pub fn seed(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    /// Maximum achievable episode reward (one per step until truncation).
    #[must_use]
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    fn uniform_noise(&mut self) -> f32 {
        self.rng.f32() * 2.0 * RESET_NOISE - RESET_NOISE
    }

    fn failed(&self) -> bool {
        self.x.abs() > X_LIMIT || self.theta.abs() > THETA_LIMIT
    }

    fn observation(&self) -> Vec<f32> {
        vec![self.x, self.x_dot, self.theta, self.theta_dot]
    }
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for CartPole {
    fn step(&mut self, action: usize) -> Step {
        let force = if action == 1 { FORCE_MAG } else { -FORCE_MAG };
        let cos_theta = self.theta.cos();
        let sin_theta = self.theta.sin();

        // Equations of motion from Barto, Sutton & Anderson (1983).
        let temp =
            (force + POLE_MASS_LENGTH * self.theta_dot.powi(2) * sin_theta) / TOTAL_MASS;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (HALF_POLE_LENGTH * (4.0 / 3.0 - POLE_MASS * cos_theta.powi(2) / TOTAL_MASS));
        let x_acc = temp - POLE_MASS_LENGTH * theta_acc * cos_theta / TOTAL_MASS;

        self.x += TAU * self.x_dot;
        self.x_dot += TAU * x_acc;
        self.theta += TAU * self.theta_dot;
        self.theta_dot += TAU * theta_acc;
        self.elapsed += 1;

        let terminated = self.failed();
        let truncated = !terminated && self.elapsed >= self.step_limit;

        Step {
            obs: self.observation(),
            reward: 1.0,
            terminated,
            truncated,
        }
    }

    fn reset(&mut self) -> Vec<f32> {
        self.x = self.uniform_noise();
        self.x_dot = self.uniform_noise();
        self.theta = self.uniform_noise();
        self.theta_dot = self.uniform_noise();
        self.elapsed = 0;
        self.observation()
    }

    fn obs_size(&self) -> usize {
        4
    }

    fn action_size(&self) -> usize {
        2
    }
}
