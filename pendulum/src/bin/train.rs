//! Training entry point: one end-to-end PPO training run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pendulum::agent::Agent;
use pendulum::config;

#[derive(Parser)]
#[command(about = "Train a PPO policy on the cart-pole task and save it")]
struct Args {
    /// Environment interaction steps to train for.
    #[arg(long, default_value_t = config::DEFAULT_TRAIN_TIMESTEPS)]
    timesteps: usize,
    /// Where the trained policy snapshot is written.
    #[arg(long, default_value = config::DEFAULT_MODEL_PATH)]
    model_path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if let Some(parent) = args.model_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create model dir {}", parent.display()))?;
        }
    }

    let mut agent = Agent::new(config::ENV_NAME, &args.model_path)?;
    tracing::info!(timesteps = args.timesteps, "training the agent");
    agent.train(args.timesteps);
    agent.save_model(None)?;
    tracing::info!(path = %args.model_path.display(), "model trained and saved");
    Ok(())
}
