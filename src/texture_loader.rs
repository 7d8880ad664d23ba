use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::SlideshowError;
use crate::scaling::fit_within;

// --- Load Image, Apply EXIF Rotation, Scale To Fit ---
pub fn load_scaled_image(image_path: &Path, target_size: (u32, u32)) -> Result<RgbaImage> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {:?}", image_path))?;

    let format = image::guess_format(&file_bytes).ok();
    let decoded = match format {
        Some(fmt) => image::load_from_memory_with_format(&file_bytes, fmt),
        None => image::load_from_memory(&file_bytes),
    }
    .map_err(|source| SlideshowError::Decode { path: image_path.to_path_buf(), source })?;

    // EXIF is only read for JPEG, other containers rarely carry it
    let orientation = if format == Some(ImageFormat::Jpeg) {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };
    let image = apply_orientation(decoded, orientation);

    let original = (image.width(), image.height());
    if original.0 == 0 || original.1 == 0 {
        return Err(SlideshowError::EmptyImage {
            path: image_path.to_path_buf(),
            width: original.0,
            height: original.1,
        }
        .into());
    }

    let (width, height) = fit_within(original, target_size);
    debug!(path = ?image_path, ?original, scaled = ?(width, height), "scaling image");

    Ok(image.resize_exact(width, height, FilterType::Triangle).to_rgba8())
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Missing EXIF is the common case, proceed without rotation
            debug!(path = ?image_path, error = %e, "no EXIF orientation");
            1
        }
    }
}

// 1 = Top-left (Normal)
// 2 = Top-right (mirrored)
// 3 = Bottom-right (180 deg)
// 4 = Bottom-left (mirrored vertically)
// 5 = Left-top (transposed)
// 6 = Right-top (90 deg CW)
// 7 = Right-bottom (transversed)
// 8 = Left-bottom (90 deg CCW)
pub fn apply_orientation(image: DynamicImage, orientation: u16) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}
