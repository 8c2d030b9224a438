//! Perceptual luminance
//!
//! `L = 0.3 R + 0.59 G + 0.11 B` over 8-bit channels, giving a gray level
//! in `[0, 255]`.

/// Per-channel weights applied to (R, G, B)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl LumaWeights {
    /// Create weights.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Sum of the three weights.
    pub fn total(&self) -> f64 {
        self.red + self.green + self.blue
    }
}

impl Default for LumaWeights {
    fn default() -> Self {
        LUMA_WEIGHTS
    }
}

/// Standard weights (0.3, 0.59, 0.11)
pub const LUMA_WEIGHTS: LumaWeights = LumaWeights::new(0.3, 0.59, 0.11);

/// Luminance of an RGB triple with the standard weights.
///
/// # Examples
///
/// ```
/// use fontscan_color::rgb_to_luminance;
///
/// assert_eq!(rgb_to_luminance(0, 0, 0), 0.0);
/// assert!((rgb_to_luminance(255, 255, 255) - 255.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rgb_to_luminance(r: u8, g: u8, b: u8) -> f64 {
    rgb_to_luminance_weighted(r, g, b, &LUMA_WEIGHTS)
}

/// Luminance of an RGB triple with custom weights.
#[inline]
pub fn rgb_to_luminance_weighted(r: u8, g: u8, b: u8, weights: &LumaWeights) -> f64 {
    weights.red * r as f64 + weights.green * g as f64 + weights.blue * b as f64
}
