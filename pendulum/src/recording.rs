//! Environment wrapper that records episode frames to disk.
//!
//! Every tenth episode (0-indexed) each step is drawn with the shared scene
//! painter and written as a numbered PNG under the video directory, giving a
//! frame-dump "video" of the episode. All other calls pass straight through
//! to the wrapped environment.
//!
//! This wrapper is a standalone demonstration; neither the training nor the
//! replay path depends on it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use env::{CartPole, Env, Step};
use render::Canvas;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::scene;

/// Record every `RECORD_EVERY`th episode, starting with episode 0.
const RECORD_EVERY: usize = 10;

/// A cart-pole environment that dumps frames for selected episodes.
pub struct RecordedEnv {
    inner: CartPole,
    video_dir: PathBuf,
    /// Episode index; `None` until the first reset.
    episode: Option<usize>,
    frame: usize,
    last_obs: Vec<f32>,
    last_action: usize,
    canvas: Canvas,
}

impl RecordedEnv {
    /// Wraps the named task, writing recordings under `video_dir`.
    ///
    /// # Errors
    ///
    /// Fails on unknown task names.
    pub fn new(env_name: &str, video_dir: impl Into<PathBuf>) -> Result<Self> {
        let inner = env::make(env_name)?;
        Ok(Self {
            inner,
            video_dir: video_dir.into(),
            episode: None,
            frame: 0,
            last_obs: Vec::new(),
            last_action: 0,
            canvas: Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        })
    }

    fn recording(&self) -> bool {
        matches!(self.episode, Some(ep) if ep % RECORD_EVERY == 0)
    }

    fn episode_dir(&self) -> PathBuf {
        self.video_dir
            .join(format!("episode-{}", self.episode.unwrap_or(0)))
    }

    fn repaint(&mut self) {
        scene::draw_scene(
            &mut self.canvas,
            &[],
            self.last_obs.first().copied().unwrap_or(0.0),
            self.last_obs.get(2).copied().unwrap_or(0.0),
            self.last_action,
        );
    }

    fn capture_frame(&mut self) -> Result<()> {
        self.repaint();
        let path = self.episode_dir().join(format!("frame-{:05}.png", self.frame));
        self.canvas.save_png(&path)?;
        self.frame += 1;
        Ok(())
    }

    /// Resets the wrapped environment, rolling over to the next episode.
    ///
    /// # Errors
    ///
    /// Fails when the recording directory for a recorded episode cannot be
    /// created or the initial frame cannot be written.
    pub fn reset(&mut self) -> Result<Vec<f32>> {
        self.episode = Some(self.episode.map_or(0, |ep| ep + 1));
        self.frame = 0;
        self.last_action = 0;
        self.last_obs = self.inner.reset();

        if self.recording() {
            let dir = self.episode_dir();
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create recording dir {}", dir.display()))?;
            tracing::info!(episode = self.episode.unwrap_or(0), dir = %dir.display(), "recording episode");
            self.capture_frame()?;
        }

        Ok(self.last_obs.clone())
    }

    /// Steps the wrapped environment, capturing a frame when recording.
    ///
    /// # Errors
    ///
    /// Fails when a frame of a recorded episode cannot be written.
    pub fn step(&mut self, action: usize) -> Result<Step> {
        let step = self.inner.step(action);
        self.last_obs = step.obs.clone();
        self.last_action = action;
        if self.recording() {
            self.capture_frame()?;
        }
        Ok(step)
    }

    /// Repaints the internal canvas from the latest state.
    pub fn render(&mut self) {
        self.repaint();
    }

    /// Closes the wrapper, logging how many episodes it saw.
    pub fn close(self) {
        tracing::info!(
            episodes = self.episode.map_or(0, |ep| ep + 1),
            "recording environment closed"
        );
    }

    #[must_use]
    pub fn obs_size(&self) -> usize {
        self.inner.obs_size()
    }

    #[must_use]
    pub fn action_size(&self) -> usize {
        self.inner.action_size()
    }
}
