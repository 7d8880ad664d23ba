use image::RgbaImage;

/// The image currently on screen. Replaced on every tick.
#[derive(Debug)]
pub struct Slide {
    pub index: usize,
    pub name: String,
    pub image: RgbaImage,
}

impl Slide {
    pub fn new(index: usize, name: impl Into<String>, image: RgbaImage) -> Self {
        Self { index, name: name.into(), image }
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
