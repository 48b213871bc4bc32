//! Visualization entry point: replay a trained policy in a window.
//!
//! Fixed-timestep loop at [`config::FPS`] frames per second: handle window
//! events, query the policy every [`config::SLOW_MOTION_FACTOR`]th frame,
//! step the environment, redraw, tick the clock. Closing the window exits
//! immediately without the reward summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pendulum::config;
use pendulum::session::ReplaySession;
use ppo::Ppo;
use render::{Canvas, FrameClock, Window};

#[derive(Parser)]
#[command(about = "Replay a trained cart-pole policy with 2D visualization")]
struct Args {
    /// Policy snapshot to replay.
    #[arg(long, default_value = config::DEFAULT_MODEL_PATH)]
    model_path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let policy = Ppo::load(&args.model_path)
        .with_context(|| format!("no usable policy at {}", args.model_path.display()))?;
    let env = env::make(config::ENV_NAME)?;
    let mut session = ReplaySession::new(env, policy);

    let mut window = Window::new(
        "Inverted Pendulum Simulation",
        config::SCREEN_WIDTH,
        config::SCREEN_HEIGHT,
    )?;
    let mut canvas = Canvas::new(config::SCREEN_WIDTH, config::SCREEN_HEIGHT);
    let mut clock = FrameClock::new(config::FPS);

    loop {
        let frame = session.advance();
        session.draw(&mut canvas);
        if !window.present(&canvas)? {
            tracing::info!("window closed, leaving replay");
            return Ok(());
        }
        clock.tick();
        if frame.done {
            break;
        }
    }

    let total_reward = session.finish();
    tracing::info!(total_reward, "episode finished");
    Ok(())
}
