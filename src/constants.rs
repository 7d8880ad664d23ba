pub const DEFAULT_INTERVAL_MS: u64 = 2000;     // Pause between images (milliseconds)
pub const DEFAULT_WINDOW_SIZE: u32 = 500;      // Width and height of the window. 500 is small, 1280 is large
pub const DEFAULT_LOOP: bool = false;          // Start over once every image has been shown

pub const WINDOW_TITLE: &str = "Slideshow";
pub const FPS: u32 = 30;                       // The loop only waits for the timer, no need to spin faster
pub const PRIMARY_MONITOR: i32 = 0;

pub const SNIFF_LEN: u64 = 64;                 // Bytes read to detect an image format
