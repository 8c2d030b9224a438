//! Decoding through the `image` crate

use crate::{ImageFormat, IoError, IoResult};
use fontscan_core::RgbImage;
use image::ImageReader;
use std::io::{BufRead, Seek};

fn to_image_format(format: ImageFormat) -> Option<image::ImageFormat> {
    match format {
        ImageFormat::Bmp => Some(image::ImageFormat::Bmp),
        ImageFormat::Jpeg => Some(image::ImageFormat::Jpeg),
        ImageFormat::Png => Some(image::ImageFormat::Png),
        ImageFormat::Gif => Some(image::ImageFormat::Gif),
        ImageFormat::Tiff => Some(image::ImageFormat::Tiff),
        ImageFormat::WebP => Some(image::ImageFormat::WebP),
        ImageFormat::Unknown => None,
    }
}

/// Decode any supported container and flatten it to 8-bit RGB.
///
/// Only the first frame of animated formats is read.
pub(crate) fn read_with_image<R: BufRead + Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<RgbImage> {
    let image_format = to_image_format(format)
        .ok_or_else(|| IoError::UnsupportedFormat(format!("{:?}", format)))?;

    let decoded = ImageReader::with_format(reader, image_format)
        .decode()
        .map_err(|e| IoError::DecodeError(format!("{:?} decode error: {}", format, e)))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(RgbImage::from_raw(width, height, rgb.into_raw())?)
}
