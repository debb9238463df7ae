//! Canvas - an owned RGBA pixel buffer.
//!
//! Thin wrapper over `image::RgbaImage` that speaks [`Colour`] and signed
//! coordinates. Writes outside the buffer are clipped.

use std::path::Path;

use image::{imageops, ImageFormat, RgbaImage};

use crate::error::{GenError, Result};
use crate::types::Colour;

/// An RGBA pixel buffer of fixed size.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a canvas filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, colour.into()),
        }
    }

    /// Wrap an existing image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Check whether a signed coordinate lies inside the canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Get a pixel, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        if !self.contains(x, y) {
            return None;
        }
        Some((*self.image.get_pixel(x as u32, y as u32)).into())
    }

    /// Set a pixel. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.image.put_pixel(x as u32, y as u32, colour.into());
        true
    }

    /// Overwrite every pixel with a colour.
    pub fn fill(&mut self, colour: Colour) {
        let px = colour.into();
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Copy `src` onto this canvas with its top-left corner at (x, y).
    ///
    /// Pixels are replaced, not blended; transparent source pixels overwrite
    /// too. Anything falling outside this canvas is dropped.
    pub fn paste(&mut self, src: &Canvas, x: u32, y: u32) {
        imageops::replace(&mut self.image, &src.image, x as i64, y as i64);
    }

    /// Copy at most `w` x `h` pixels of `src` onto this canvas at (x, y).
    pub fn paste_clipped(&mut self, src: &Canvas, x: u32, y: u32, w: u32, h: u32) {
        if src.width() <= w && src.height() <= h {
            self.paste(src, x, y);
            return;
        }
        let view = imageops::crop_imm(
            &src.image,
            0,
            0,
            w.min(src.width()),
            h.min(src.height()),
        )
        .to_image();
        imageops::replace(&mut self.image, &view, x as i64, y as i64);
    }

    /// Return a copy with every row moved down by `dy` (up when negative).
    ///
    /// Rows pushed past the edge are dropped; vacated rows are transparent.
    pub fn shifted_vertical(&self, dy: i32) -> Canvas {
        let mut out = Canvas::new(self.width(), self.height());
        for (x, y, px) in self.image.enumerate_pixels() {
            let ty = y as i64 + dy as i64;
            if ty >= 0 && ty < self.height() as i64 {
                out.image.put_pixel(x, ty as u32, *px);
            }
        }
        out
    }

    /// Count pixels with non-zero alpha.
    pub fn opaque_pixel_count(&self) -> usize {
        self.image.pixels().filter(|p| p[3] > 0).count()
    }

    /// Iterate over all pixels as (x, y, colour).
    pub fn iter_pixels(&self) -> impl Iterator<Item = (u32, u32, Colour)> + '_ {
        self.image
            .enumerate_pixels()
            .map(|(x, y, px)| (x, y, Colour::from(*px)))
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Encode the canvas as a PNG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| GenError::Image {
                path: path.to_path_buf(),
                message: format!("Failed to write PNG: {}", e),
            })
    }

    /// Decode an image file into an RGBA canvas.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| GenError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?;
        Ok(Self::from_image(img.to_rgba8()))
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.as_raw() == other.as_raw()
    }
}

impl Eq for Canvas {}
