//! Minimal 2D graphics library.
//!
//! Drawing happens on a CPU-side [`Canvas`] with clipped primitive
//! rasterizers (rectangles, lines, circles, triangles). A [`Window`] blits
//! the canvas to a `wgpu` surface each frame and reports window-close
//! requests, and a [`FrameClock`] paces the loop at a fixed frame rate.
//! Canvases can also be exported as PNG frames for offline episode
//! recordings.

mod canvas;
mod clock;
mod window;

pub use canvas::{Canvas, Color};
pub use clock::FrameClock;
pub use window::Window;
