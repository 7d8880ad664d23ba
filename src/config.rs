use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;

/// Show the images of a folder one at a time, in random order, in a small
/// window at the bottom-right corner of the screen.
#[derive(Debug, Parser)]
#[command(name = "slides", version, about, long_about = None)]
pub struct Args {
    /// Folder containing the images
    pub folder: PathBuf,

    /// Pause between images, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Width and height of the window, in pixels
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Start over with a fresh random order once every image was shown
    #[arg(short, long = "loop", default_value_t = DEFAULT_LOOP)]
    pub loop_forever: bool,

    /// Seed for the random order, for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowConfig {
    pub folder: PathBuf,
    pub interval: Duration,
    pub window_size: u32,
    pub loop_forever: bool,
    pub seed: Option<u64>,
}

impl SlideshowConfig {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            window_size: DEFAULT_WINDOW_SIZE,
            loop_forever: DEFAULT_LOOP,
            seed: None,
        }
    }
}

impl From<Args> for SlideshowConfig {
    fn from(args: Args) -> Self {
        Self {
            interval: Duration::from_millis(args.interval_ms),
            window_size: args.size,
            loop_forever: args.loop_forever,
            seed: args.seed,
            ..Self::new(args.folder)
        }
    }
}
