//! Policy-optimization library.
//!
//! Implements Proximal Policy Optimization for discrete action spaces on top
//! of a small dense network with manual backpropagation. The [`Ppo`] type is
//! the opaque, serializable policy the rest of the workspace passes around:
//! construct it fresh or [`Ppo::load`] it from disk, mutate it with
//! [`Ppo::learn`], query it with [`Ppo::predict`], persist it with
//! [`Ppo::save`].

pub mod nn;
pub mod optim;
mod ppo;

pub use ppo::{Ppo, PpoConfig};
