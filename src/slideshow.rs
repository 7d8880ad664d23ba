use std::path::PathBuf;

use anyhow::{Error, Result};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::config::SlideshowConfig;
use crate::engine::Engine;
use crate::image_set::ImageSet;
use crate::schedule::Schedule;
use crate::selector::{Selection, Selector};
use crate::slide::Slide;
use crate::state::SlideshowState;
use crate::texture_loader::load_scaled_image;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every image was shown once.
    Completed,
    /// The folder holds no image at all.
    NoImages(PathBuf),
    /// An image could not be decoded, scaled or uploaded.
    LoadFailed { name: String, error: Error },
    /// The window was closed by the user.
    Closed,
}

pub struct Slideshow<R: Rng = StdRng> {
    images: ImageSet,
    selector: Selector<R>,
    config: SlideshowConfig,
    schedule: Schedule,
    state: SlideshowState,
    current: Option<Slide>,
}

impl Slideshow<StdRng> {
    pub fn new(images: ImageSet, config: SlideshowConfig) -> Self {
        let selector = Selector::new(images.len(), config.loop_forever, config.seed);
        Self::with_selector(images, selector, config)
    }
}

impl<R: Rng> Slideshow<R> {
    pub fn with_selector(images: ImageSet, selector: Selector<R>, config: SlideshowConfig) -> Self {
        Self {
            images,
            selector,
            config,
            schedule: Schedule::new(),
            state: SlideshowState::Idle,
            current: None,
        }
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    pub fn current(&self) -> Option<&Slide> {
        self.current.as_ref()
    }

    pub fn selector(&self) -> &Selector<R> {
        &self.selector
    }

    /// Shows the first image right away, then one more each time the
    /// display interval runs out, until the set is exhausted, a load fails
    /// or the window is closed.
    pub fn run<E: Engine>(&mut self, engine: &mut E) -> Outcome {
        if self.images.is_empty() {
            self.state = SlideshowState::Terminated;
            return Outcome::NoImages(self.images.folder().to_path_buf());
        }

        if let Some(outcome) = self.show_next_image(engine) {
            return outcome;
        }

        while !engine.should_close() {
            let dt = engine.render_frame();
            if self.schedule.tick(dt) {
                if let Some(outcome) = self.show_next_image(engine) {
                    return outcome;
                }
            }
        }

        self.terminate();
        info!("window closed");
        Outcome::Closed
    }

    /// Picks, loads and presents the next image. Returns an outcome when the
    /// slideshow has to stop.
    pub fn show_next_image<E: Engine>(&mut self, engine: &mut E) -> Option<Outcome> {
        let index = match self.selector.next() {
            Selection::Next(index) => index,
            Selection::Exhausted => {
                self.terminate();
                info!(shown = self.selector.len(), "all images shown");
                return Some(Outcome::Completed);
            }
        };

        debug_assert!(self.selector.is_shown(index));
        self.state = SlideshowState::Loading;
        let name = self.images.name(index).into_owned();
        debug!(index, %name, shown = self.selector.shown_count(), "next image");

        if let Err(error) = self.load_and_present(index, &name, engine) {
            self.terminate();
            error!(%name, error = %error, "failed to show image");
            return Some(Outcome::LoadFailed { name, error });
        }

        self.state = SlideshowState::Displayed;
        self.schedule.arm(self.config.interval);
        None
    }

    fn load_and_present<E: Engine>(&mut self, index: usize, name: &str, engine: &mut E) -> Result<()> {
        let target = (self.config.window_size, self.config.window_size);
        let image = load_scaled_image(self.images.path(index), target)?;

        // Drop the previous image before the next one goes live
        self.current = None;
        let slide = Slide::new(index, name, image);
        engine.present(&slide)?;
        self.current = Some(slide);
        Ok(())
    }

    fn terminate(&mut self) {
        self.schedule.cancel();
        self.current = None;
        self.state = SlideshowState::Terminated;
    }
}
