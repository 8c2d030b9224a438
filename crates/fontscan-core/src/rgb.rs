//! RgbImage - decoded 24-bit color image
//!
//! `RgbImage` is the hand-off point between image decoders and the
//! binarizer. Decoders produce one, the binarizer reads it through the
//! [`RgbSource`] trait so other pixel containers can be fed in directly.
//!
//! # Pixel layout
//!
//! - Samples are stored row-major, three bytes per pixel (R, G, B)
//! - No row padding; the stride is always `width * 3`

use crate::error::{Error, Result};

/// Read access to a width x height grid of 8-bit RGB triples.
pub trait RgbSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// RGB triple at (x, y), or `None` if out of bounds.
    fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)>;
}

/// A decoded RGB image
///
/// # Examples
///
/// ```
/// use fontscan_core::{RgbImage, RgbSource};
///
/// let mut img = RgbImage::new(2, 1).unwrap();
/// img.set_rgb(1, 0, 255, 255, 255).unwrap();
/// assert_eq!(img.rgb(0, 0), Some((0, 0, 0)));
/// assert_eq!(img.rgb(1, 0), Some((255, 255, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Create a black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        })
    }

    /// Wrap an existing row-major RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidInput`] if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::InvalidInput(format!(
                "{}x{} RGB image needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Set the RGB triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the image.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        let idx = self.index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[idx..idx + 3].copy_from_slice(&[r, g, b]);
        Ok(())
    }

    /// Fill the whole image with one color.
    pub fn fill(&mut self, r: u8, g: u8, b: u8) {
        for px in self.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[r, g, b]);
        }
    }

    /// Raw sample buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }
}

impl RgbSource for RgbImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        let idx = self.index(x, y)?;
        Some((self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }
}
