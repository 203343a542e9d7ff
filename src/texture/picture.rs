//! PNG sprites

use image::{imageops::FilterType, RgbaImage};
use macroquad::math::{vec2, Vec2};
use macroquad::texture::{FilterMode, Texture2D};
use crate::error::GameError;
use super::Bitmap;

/// Decoded RGBA pixels kept on the CPU; scaled copies live on the GPU
pub struct Picture {
    pixels: RgbaImage,
}

impl Picture {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Decode PNG bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        Ok(Self::new(image::load_from_memory(bytes)?.to_rgba8()))
    }

    /// Read and decode the sprite at `path`
    pub async fn load(path: &str) -> Result<Self, GameError> {
        let bytes = macroquad::file::load_file(path)
            .await
            .map_err(|e| GameError::asset(path, format!("{:?}", e)))?;
        let picture = Self::decode(&bytes).map_err(|e| GameError::asset(path, e))?;
        log::info!(
            "Loaded {} ({}x{})",
            path,
            picture.pixels.width(),
            picture.pixels.height()
        );
        Ok(picture)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Target pixel count along one axis; textures need at least one pixel
fn texels(len: f32) -> u32 {
    len.round().clamp(1.0, u16::MAX as f32) as u32
}

impl Bitmap for Picture {
    type Scaled = Texture2D;

    fn size(&self) -> Vec2 {
        vec2(self.pixels.width() as f32, self.pixels.height() as f32)
    }

    fn resize(&self, size: Vec2) -> Texture2D {
        let (w, h) = (texels(size.x), texels(size.y));
        let resized = image::imageops::resize(&self.pixels, w, h, FilterType::Nearest);
        let texture = Texture2D::from_rgba8(w as u16, h as u16, resized.as_raw());
        texture.set_filter(FilterMode::Nearest);
        texture
    }
}
