//! Standalone demonstration of the frame-recording environment wrapper.
//!
//! Rolls one random-action episode; since episode 0 is always recorded, this
//! leaves a frame dump under the video directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pendulum::config;
use pendulum::recording::RecordedEnv;

#[derive(Parser)]
#[command(about = "Run one random episode through the recording wrapper")]
struct Args {
    /// Directory recorded episode frames are written under.
    #[arg(long, default_value = config::DEFAULT_VIDEO_DIR)]
    video_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut env = RecordedEnv::new(config::ENV_NAME, &args.video_dir)?;
    tracing::info!(
        observations = env.obs_size(),
        actions = env.action_size(),
        "environment ready"
    );

    env.reset()?;
    let mut rng = fastrand::Rng::new();
    let mut steps = 0;
    loop {
        let action = rng.usize(..env.action_size());
        let step = env.step(action)?;
        steps += 1;
        if step.done() {
            break;
        }
    }
    tracing::info!(steps, "random episode recorded");
    env.close();
    Ok(())
}
