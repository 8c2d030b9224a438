//! fontscan-io - Image decoding and glyph persistence
//!
//! Everything here sits outside the extraction core:
//!
//! - decoding source images into [`RgbImage`] (PNG through the `png` crate,
//!   other containers through `image`)
//! - writing and reading glyph files as 1-bit PNG or `0`/`1` text
//! - [`FileSink`], a [`LabelingSink`](fontscan_recog::LabelingSink) that
//!   stores glyphs under operator-chosen labels
//! - [`CharacterSet`], the labeled glyphs loaded back from disk
//!
//! # Features
//!
//! - `png-format` (default): PNG decoding and glyph PNG output
//! - `other-formats` (default): BMP, JPEG, GIF, TIFF and WebP via `image`

pub mod charset;
#[cfg(feature = "other-formats")]
mod decode;
pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
pub mod sink;
pub mod text;

pub use charset::CharacterSet;
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use sink::{FileSink, Labeler, OutputFormat, write_glyph};
pub use text::{parse_glyph_text, read_glyph_text, write_glyph_text};

#[cfg(feature = "png-format")]
pub use crate::png::{read_glyph_png, read_png, write_glyph_png};

use fontscan_core::{GlyphBitmap, RgbImage};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

/// Decode an image file, detecting its format from the contents.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unrecognised data and
/// [`IoError::DecodeError`] if the decoder rejects the file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Decode an image held in memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<RgbImage> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Decode an image of a known format.
pub fn read_image_format<R: BufRead + Seek>(reader: R, format: ImageFormat) -> IoResult<RgbImage> {
    match format {
        ImageFormat::Unknown => Err(IoError::UnsupportedFormat(
            "unrecognised image data".to_string(),
        )),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(reader),
        #[cfg(feature = "other-formats")]
        other => decode::read_with_image(reader, other),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Read a glyph file written in `format`.
pub fn read_glyph<P: AsRef<Path>>(path: P, format: OutputFormat) -> IoResult<GlyphBitmap> {
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        OutputFormat::Png => crate::png::read_glyph_png(reader),
        #[cfg(not(feature = "png-format"))]
        OutputFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not enabled".to_string(),
        )),
        OutputFormat::Text => read_glyph_text(reader),
    }
}
