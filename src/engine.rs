use anyhow::Result;

use crate::slide::Slide;

/// The UI context the slideshow draws into: one window with one canvas.
pub trait Engine {
    /// Replaces whatever is on the canvas with `slide`, anchored top-left.
    fn present(&mut self, slide: &Slide) -> Result<()>;

    /// Draws one frame and returns the time it took, in seconds.
    fn render_frame(&mut self) -> f32;

    fn should_close(&self) -> bool;
}
