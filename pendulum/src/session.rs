//! Headless replay state for the visualization loop.
//!
//! The session owns everything the replay needs — environment, policy,
//! backdrop, throttled action state — and advances one frame at a time. It
//! never touches the window; the binary draws each frame into a canvas and
//! presents it, which keeps the frame logic testable without a display.

use env::{CartPole, Env};
use ppo::Ppo;
use render::Canvas;

use crate::config::SLOW_MOTION_FACTOR;
use crate::scene::{self, BackgroundObject};

/// What happened in one frame of the replay.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    /// Cart position in meters.
    pub cart_position: f32,
    /// Pole angle in radians off vertical.
    pub pole_angle: f32,
    /// The action applied this frame (possibly reused from an earlier frame).
    pub action: usize,
    /// Whether the episode ended on this frame.
    pub done: bool,
}

/// One live rollout of a loaded policy at a decorative, slowed-down pace.
///
/// A fresh action is computed only on every [`SLOW_MOTION_FACTOR`]th frame;
/// in between, the previous action is applied again. This slows the visual
/// decision rate without changing the physics timestep.
pub struct ReplaySession {
    env: CartPole,
    policy: Ppo,
    backdrop: Vec<BackgroundObject>,
    obs: Vec<f32>,
    action: usize,
    frame: usize,
    total_reward: f32,
    done: bool,
}

impl ReplaySession {
    /// Starts a session: resets the environment and installs the backdrop.
    #[must_use]
    pub fn new(mut env: CartPole, policy: Ppo) -> Self {
        let obs = env.reset();
        Self {
            env,
            policy,
            backdrop: scene::default_backdrop(),
            obs,
            action: 0,
            frame: 0,
            total_reward: 0.0,
            done: false,
        }
    }

    /// Advances the replay by one frame: possibly queries the policy, steps
    /// the environment once, and scrolls the backdrop.
    ///
    /// Calling this after the episode has ended returns the final snapshot
    /// without stepping further.
    pub fn advance(&mut self) -> FrameSnapshot {
        if self.done {
            return self.snapshot();
        }

        if self.frame % SLOW_MOTION_FACTOR == 0 {
            self.action = self.policy.predict(&self.obs);
        }

        let step = self.env.step(self.action);
        self.total_reward += step.reward;
        self.done = step.done();
        self.obs = step.obs;

        for object in &mut self.backdrop {
            object.scroll();
        }
        self.frame += 1;

        self.snapshot()
    }

    /// Paints the current frame into the canvas.
    pub fn draw(&self, canvas: &mut Canvas) {
        scene::draw_scene(canvas, &self.backdrop, self.obs[0], self.obs[2], self.action);
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Tears the session down and reports the accumulated episode reward.
    #[must_use]
    pub fn finish(self) -> f32 {
        self.total_reward
    }

    fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            cart_position: self.obs[0],
            pole_angle: self.obs[2],
            action: self.action,
            done: self.done,
        }
    }
}
