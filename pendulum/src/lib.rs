//! # Inverted pendulum trainer and visualizer
//!
//! This crate ties the workspace together: it owns the policy lifecycle
//! ([`agent::Agent`]), an optional frame-recording environment wrapper
//! ([`recording::RecordedEnv`]), and the stylized replay of a trained policy
//! ([`session::ReplaySession`] plus [`scene`]).
//!
//! Three binaries ship with it:
//!
//! - `train` — train a PPO policy on cart-pole and save it.
//! - `simulate` — replay a saved policy in a window at a fixed frame rate.
//! - `record` — demonstrate the recording wrapper on a random-action episode.
//!
//! The trainer and the replayer agree on the policy file location through
//! [`config::DEFAULT_MODEL_PATH`]; both binaries accept the same
//! `--model-path` override so the two sides can never silently drift apart.

pub mod agent;
pub mod config;
pub mod recording;
pub mod scene;
pub mod session;
