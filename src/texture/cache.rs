//! One-slot scale cache

use macroquad::math::Vec2;

/// Something that can be resized into a drawable surface
pub trait Bitmap {
    /// What resizing produces
    type Scaled;

    /// Native size in pixels
    fn size(&self) -> Vec2;

    /// Produce a copy stretched to `size`
    fn resize(&self, size: Vec2) -> Self::Scaled;
}

struct Scaled<S> {
    surface: S,
    size: Vec2,
}

/// Image caching a scaled version of itself.
///
/// Only the most recently requested size is kept: asking for a different size
/// drops the old copy and builds a new one.
pub struct Image<B: Bitmap = super::Picture> {
    original: B,
    scaled: Option<Scaled<B::Scaled>>,
}

impl<B: Bitmap> Image<B> {
    pub fn new(original: B) -> Self {
        Self { original, scaled: None }
    }

    pub fn size(&self) -> Vec2 {
        self.original.size()
    }

    pub fn original(&self) -> &B {
        &self.original
    }

    /// Surface stretched to `size`, reusing the cached one if the size matches exactly
    pub fn scale(&mut self, size: Vec2) -> &B::Scaled {
        if let Some(cached) = &self.scaled {
            if cached.size != size {
                self.scaled = None;
            }
        }

        let original = &self.original;
        &self
            .scaled
            .get_or_insert_with(|| Scaled {
                surface: original.resize(size),
                size,
            })
            .surface
    }

    pub fn scale_by(&mut self, factor: f32) -> &B::Scaled {
        let size = self.size() * factor;
        self.scale(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;
    use std::cell::Cell;

    /// Bitmap that counts how often it gets resized
    struct Counting {
        size: Vec2,
        resizes: Cell<usize>,
    }

    impl Counting {
        fn new(w: f32, h: f32) -> Self {
            Self { size: vec2(w, h), resizes: Cell::new(0) }
        }
    }

    impl Bitmap for Counting {
        type Scaled = Vec2;

        fn size(&self) -> Vec2 {
            self.size
        }

        fn resize(&self, size: Vec2) -> Vec2 {
            self.resizes.set(self.resizes.get() + 1);
            size
        }
    }

    #[test]
    fn test_same_size_hits_cache() {
        let mut image = Image::new(Counting::new(16.0, 8.0));
        let first: *const Vec2 = image.scale(vec2(32.0, 16.0));
        let second: *const Vec2 = image.scale(vec2(32.0, 16.0));
        assert!(std::ptr::eq(first, second));
        assert_eq!(image.original().resizes.get(), 1);
    }

    #[test]
    fn test_new_size_regenerates_once() {
        let mut image = Image::new(Counting::new(16.0, 8.0));
        image.scale(vec2(32.0, 16.0));
        assert_eq!(*image.scale(vec2(64.0, 32.0)), vec2(64.0, 32.0));
        image.scale(vec2(64.0, 32.0));
        assert_eq!(image.original().resizes.get(), 2);

        // Going back is a miss too: only one slot
        image.scale(vec2(32.0, 16.0));
        assert_eq!(image.original().resizes.get(), 3);
    }

    #[test]
    fn test_scale_by() {
        let mut image = Image::new(Counting::new(16.0, 8.0));
        assert_eq!(*image.scale_by(2.0), vec2(32.0, 16.0));
        image.scale(vec2(32.0, 16.0));
        assert_eq!(image.original().resizes.get(), 1);
    }
}
