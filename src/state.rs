#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideshowState {
    Idle,       // Nothing requested yet
    Loading,    // An image was picked and is being decoded
    Displayed,  // The image is on screen, waiting for the timer
    Terminated, // Set exhausted, load failed, or window closed
}
