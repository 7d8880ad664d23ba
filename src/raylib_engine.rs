use std::io::Cursor;

use anyhow::Result;
use image::ImageFormat;
use raylib::core::window::{get_monitor_height, get_monitor_width};
use raylib::prelude::*;
use tracing::{debug, info};

use crate::constants::*;
use crate::engine::Engine;
use crate::error::SlideshowError;
use crate::slide::Slide;

/// Fixed-size window in the bottom-right corner of the primary monitor,
/// holding a canvas that takes the size of the image shown in it.
pub struct RaylibEngine {
    // Dropped before `rl` so the texture is unloaded while the window exists
    texture: Option<Texture2D>,
    canvas: Rectangle,
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl RaylibEngine {
    pub fn open(window_size: u32) -> Self {
        let side = i32::try_from(window_size).unwrap_or(i32::MAX);
        let (mut rl, thread) = raylib::init()
            .size(side, side)
            .title(WINDOW_TITLE)
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        let screen = (get_monitor_width(PRIMARY_MONITOR), get_monitor_height(PRIMARY_MONITOR));
        let (x, y) = bottom_right(screen, window_size);
        rl.set_window_position(x, y);
        info!(?screen, x, y, size = window_size, "window opened");

        Self {
            texture: None,
            canvas: Rectangle::new(0.0, 0.0, 0.0, 0.0),
            rl,
            thread,
        }
    }
}

impl Engine for RaylibEngine {
    fn present(&mut self, slide: &Slide) -> Result<()> {
        // raylib only loads images from encoded bytes, hand it a PNG
        let mut png = Vec::new();
        slide.image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        let image = Image::load_image_from_mem(".png", &png)
            .map_err(|e| SlideshowError::Texture(e.to_string()))?;
        let texture = self
            .rl
            .load_texture_from_image(&self.thread, &image)
            .map_err(|e| SlideshowError::Texture(e.to_string()))?;

        let (width, height) = slide.size();
        self.canvas = Rectangle::new(0.0, 0.0, width as f32, height as f32);
        // The previous texture is unloaded here
        self.texture = Some(texture);
        debug!(name = %slide.name, width, height, "canvas resized");
        Ok(())
    }

    fn render_frame(&mut self) -> f32 {
        {
            let mut d = self.rl.begin_drawing(&self.thread);
            d.clear_background(Color::BLACK);

            if let Some(texture) = &self.texture {
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    self.canvas,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    Color::WHITE,
                );
            }
        }
        self.rl.get_frame_time()
    }

    fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }
}

/// Top-left corner that puts a `size` square in the bottom-right of `screen`.
pub fn bottom_right(screen: (i32, i32), size: u32) -> (i32, i32) {
    let size = i32::try_from(size).unwrap_or(i32::MAX);
    ((screen.0 - size).max(0), (screen.1 - size).max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_right_corner() {
        assert_eq!(bottom_right((1920, 1080), 500), (1420, 580));
        assert_eq!(bottom_right((2560, 1440), 1280), (1280, 160));
    }

    #[test]
    fn test_bottom_right_clamps_on_small_screen() {
        assert_eq!(bottom_right((800, 600), 1280), (0, 0));
        assert_eq!(bottom_right((0, 0), u32::MAX), (0, 0));
    }
}
