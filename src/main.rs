use anyhow::{Context, Result};
use clap::Parser;

mod config;
mod constants;
mod engine;
mod error;
mod image_set;
mod raylib_engine;
mod scaling;
mod schedule;
mod selector;
mod slide;
mod slideshow;
mod state;
mod texture_loader;

use crate::config::{Args, SlideshowConfig};
use crate::image_set::ImageSet;
use crate::raylib_engine::RaylibEngine;
use crate::slideshow::{Outcome, Slideshow};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("slides=info".parse()?),
        )
        .init();

    let config = SlideshowConfig::from(Args::parse());
    tracing::debug!(?config, "starting");

    // --- Load Image Set ---
    let images = ImageSet::scan(&config.folder)
        .with_context(|| format!("Error loading images from '{}'", config.folder.display()))?;

    if images.is_empty() {
        println!("No images found in '{}'", config.folder.display());
        return Ok(());
    }

    let mut engine = RaylibEngine::open(config.window_size);
    let mut slideshow = Slideshow::new(images, config);

    // Every way a run can end is a normal exit
    match slideshow.run(&mut engine) {
        Outcome::Completed => println!("DONE!"),
        Outcome::NoImages(folder) => println!("No images found in '{}'", folder.display()),
        Outcome::LoadFailed { name, error } => {
            eprintln!("Error loading image: {:#}", error);
            eprintln!("name = {}", name);
        }
        Outcome::Closed => {}
    }
    tracing::debug!(state = ?slideshow.state(), "slideshow finished");

    Ok(())
}
