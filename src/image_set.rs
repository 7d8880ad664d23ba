use std::borrow::Cow;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info, warn};

use crate::constants::SNIFF_LEN;
use crate::error::SlideshowError;

/// The images found directly inside one folder, sorted by file name.
#[derive(Debug, Clone)]
pub struct ImageSet {
    folder: PathBuf,
    paths: Vec<PathBuf>,
}

impl ImageSet {
    /// Scans the direct children of `folder`, keeping regular files whose
    /// content is a decodable image format. Extensions are ignored.
    pub fn scan(folder: &Path) -> Result<Self, SlideshowError> {
        let read_dir_err = |source: std::io::Error| SlideshowError::ReadDir { path: folder.to_path_buf(), source };

        let mut paths = Vec::new();
        for entry in fs::read_dir(folder).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            if !path.is_file() {
                debug!(?path, "skipping non-file entry");
                continue;
            }
            match sniff_format(&path) {
                Ok(Some(_)) => paths.push(path),
                Ok(None) => debug!(?path, "skipping non-image file"),
                Err(e) => warn!(?path, error = %e, "skipping unreadable file"),
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        info!(folder = ?folder, count = paths.len(), "image set loaded");
        Ok(Self { folder: folder.to_path_buf(), paths })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn path(&self, index: usize) -> &Path {
        &self.paths[index]
    }

    pub fn name(&self, index: usize) -> Cow<'_, str> {
        self.paths[index]
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    }
}

/// Detects the image format from the first bytes of the file.
pub fn sniff_format(path: &Path) -> std::io::Result<Option<ImageFormat>> {
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut header)?;
    Ok(image::guess_format(&header).ok().filter(|f| f.reading_enabled()))
}
