//! Fixed-threshold binarization
//!
//! A pixel is foreground when its perceptual luminance is strictly greater
//! than the threshold. With the default threshold of 187 this picks out
//! light text on a dark background.
//!
//! With the standard weights the comparison is done in integer
//! hundredths (`30 R + 59 G + 11 B > 100 * threshold`) so that a gray of
//! exactly 187 is reliably background.

use crate::colorspace::{LUMA_WEIGHTS, LumaWeights, rgb_to_luminance_weighted};
use crate::{ColorError, ColorResult};
use fontscan_core::{Error, PixelGrid, RgbSource};
use log::debug;

/// Default luminance threshold
pub const DEFAULT_THRESHOLD: f64 = 187.0;

/// Options for binarization
#[derive(Debug, Clone, PartialEq)]
pub struct BinarizeOptions {
    /// Pixels with luminance above this value are foreground
    pub threshold: f64,
    /// Channel weights for luminance
    pub weights: LumaWeights,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            weights: LUMA_WEIGHTS,
        }
    }
}

impl BinarizeOptions {
    /// Create options with the given threshold and standard weights.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] unless `0 <= threshold <= 255`.
    pub fn new(threshold: f64) -> ColorResult<Self> {
        Self::default().with_threshold(threshold)
    }

    /// Set the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] unless `0 <= threshold <= 255`.
    pub fn with_threshold(mut self, threshold: f64) -> ColorResult<Self> {
        if !(0.0..=255.0).contains(&threshold) {
            return Err(ColorError::InvalidParameters(format!(
                "threshold must be in [0, 255], got {}",
                threshold
            )));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Set the luminance weights
    pub fn with_weights(mut self, weights: LumaWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Classify one RGB triple.
    #[inline]
    pub fn is_foreground(&self, r: u8, g: u8, b: u8) -> bool {
        if self.weights == LUMA_WEIGHTS {
            let luma_x100 = 30 * r as u32 + 59 * g as u32 + 11 * b as u32;
            luma_x100 as f64 / 100.0 > self.threshold
        } else {
            rgb_to_luminance_weighted(r, g, b, &self.weights) > self.threshold
        }
    }
}

/// Binarize with the default options.
///
/// # Errors
///
/// See [`binarize_with`].
pub fn binarize<S: RgbSource + ?Sized>(image: &S) -> ColorResult<PixelGrid> {
    binarize_with(image, &BinarizeOptions::default())
}

/// Binarize an RGB source into a grid of the same size.
///
/// # Errors
///
/// Returns a core [`Error::InvalidDimension`] for an empty source and
/// [`Error::DimensionMismatch`] if the source cannot produce a pixel inside
/// its declared size.
pub fn binarize_with<S: RgbSource + ?Sized>(
    image: &S,
    options: &BinarizeOptions,
) -> ColorResult<PixelGrid> {
    let width = image.width();
    let height = image.height();
    let mut grid = PixelGrid::new(width, height)?;

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = image.rgb(x, y).ok_or(Error::DimensionMismatch {
                expected: (width, height),
                actual: (x, y),
            })?;
            if options.is_foreground(r, g, b) {
                grid.set(x, y, true)?;
            }
        }
    }

    debug!(
        "binarized {}x{} image at threshold {}: {} foreground pixels",
        width,
        height,
        options.threshold,
        grid.count_foreground()
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontscan_core::RgbImage;

    /// Source that claims more pixels than it can produce
    struct Truncated;

    impl RgbSource for Truncated {
        fn width(&self) -> u32 {
            4
        }
        fn height(&self) -> u32 {
            4
        }
        fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
            (y < 2 && x < 4).then_some((0, 0, 0))
        }
    }

    struct Empty;

    impl RgbSource for Empty {
        fn width(&self) -> u32 {
            0
        }
        fn height(&self) -> u32 {
            3
        }
        fn rgb(&self, _x: u32, _y: u32) -> Option<(u8, u8, u8)> {
            None
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let opts = BinarizeOptions::default();
        assert!(!opts.is_foreground(187, 187, 187));
        assert!(opts.is_foreground(188, 188, 188));
        assert!(opts.is_foreground(255, 255, 255));
        assert!(!opts.is_foreground(0, 0, 0));
    }

    #[test]
    fn test_fractional_threshold_is_strict() {
        // 0.3 * 4 + 0.11 * 10 = 2.3
        let opts = BinarizeOptions::new(2.3).unwrap();
        assert!(!opts.is_foreground(4, 0, 10));
        assert!(opts.is_foreground(5, 0, 10));

        // every pixel whose luminance is a one-decimal value sits exactly on
        // a threshold of that value and must stay background
        for r in 0..=40u8 {
            for g in 0..=20u8 {
                for b in 0..=40u8 {
                    let x100 = 30 * r as u32 + 59 * g as u32 + 11 * b as u32;
                    if x100 % 10 != 0 {
                        continue;
                    }
                    let t: f64 = format!("{}.{}", x100 / 100, (x100 / 10) % 10).parse().unwrap();
                    let opts = BinarizeOptions::new(t).unwrap();
                    assert!(
                        !opts.is_foreground(r, g, b),
                        "({r}, {g}, {b}) with L == {t} classified foreground"
                    );
                }
            }
        }
    }

    #[test]
    fn test_pure_green_is_background() {
        // 0.59 * 255 = 150.45
        assert!(!BinarizeOptions::default().is_foreground(0, 255, 0));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(BinarizeOptions::new(-1.0).is_err());
        assert!(BinarizeOptions::new(256.0).is_err());
        assert!(BinarizeOptions::new(f64::NAN).is_err());
        assert_eq!(BinarizeOptions::new(100.0).unwrap().threshold, 100.0);
    }

    #[test]
    fn test_custom_weights_use_float_path() {
        let opts = BinarizeOptions::new(100.0)
            .unwrap()
            .with_weights(LumaWeights::new(1.0, 0.0, 0.0));
        assert!(opts.is_foreground(101, 0, 0));
        assert!(!opts.is_foreground(100, 255, 255));
    }

    #[test]
    fn test_binarize_dimensions() {
        let mut img = RgbImage::new(3, 2).unwrap();
        img.set_rgb(2, 1, 255, 255, 255).unwrap();
        let grid = binarize(&img).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.count_foreground(), 1);
        assert_eq!(grid.get(2, 1), Some(true));
    }

    #[test]
    fn test_binarize_truncated_source() {
        assert!(matches!(
            binarize(&Truncated),
            Err(ColorError::Core(Error::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_binarize_empty_source() {
        assert!(matches!(
            binarize(&Empty),
            Err(ColorError::Core(Error::InvalidDimension { .. }))
        ));
    }
}
