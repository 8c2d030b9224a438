//! fontscan Color - Luminance and binarization
//!
//! This crate turns decoded color images into foreground maps:
//!
//! - **Luminance** ([`colorspace`]): perceptual gray level of an RGB triple
//! - **Thresholding** ([`threshold`]): fixed-threshold binarization into a
//!   [`PixelGrid`](fontscan_core::PixelGrid)

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use fontscan_core;

pub use error::{ColorError, ColorResult};

pub use colorspace::{LUMA_WEIGHTS, LumaWeights, rgb_to_luminance, rgb_to_luminance_weighted};

pub use threshold::{BinarizeOptions, DEFAULT_THRESHOLD, binarize, binarize_with};
