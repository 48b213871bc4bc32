//! Shared compile-time configuration.
//!
//! The model path lives here so the training and replay binaries agree on it
//! through one definition rather than by convention.

use render::Color;

/// Task name passed to the environment library.
pub const ENV_NAME: &str = "CartPole-v1";

/// Where the trained policy snapshot is stored by default.
pub const DEFAULT_MODEL_PATH: &str = "models/ppo_cartpole.json";

/// Where recorded episode frames are stored by default.
pub const DEFAULT_VIDEO_DIR: &str = "videos";

/// Environment steps for a default training run.
pub const DEFAULT_TRAIN_TIMESTEPS: usize = 100_000;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

/// Replay frame rate; together with [`SLOW_MOTION_FACTOR`] this controls the
/// apparent simulation speed without touching the physics timestep.
pub const FPS: u32 = 30;

/// A fresh action is queried from the policy only every this many frames.
pub const SLOW_MOTION_FACTOR: usize = 3;

/// Pixels per simulation meter.
pub const SCALE: f32 = 100.0;

/// Leftward scroll speed of the backdrop, in pixels per frame.
pub const BACKGROUND_SPEED: f32 = 2.0;

pub const BACKGROUND_COLOR: Color = Color::rgb(255, 255, 255);
pub const CART_COLOR: Color = Color::rgb(0, 0, 150);
pub const POLE_COLOR: Color = Color::rgb(150, 0, 0);
pub const ARROW_COLOR: Color = Color::rgb(0, 150, 0);
pub const RAIL_COLOR: Color = Color::rgb(0, 0, 0);
pub const OUTLINE_COLOR: Color = Color::rgb(0, 0, 0);
pub const BUILDING_COLOR: Color = Color::rgb(150, 75, 0);
pub const TREE_COLOR: Color = Color::rgb(0, 150, 0);
