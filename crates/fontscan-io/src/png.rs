//! PNG image format support
//!
//! Decoding flattens every PNG color type to 8-bit RGB: palettes and low
//! bit depths are expanded, 16-bit samples are stripped to 8 bits, and
//! alpha is ignored.
//!
//! Glyphs are written as 1-bit grayscale with foreground white.

use crate::{IoError, IoResult};
use fontscan_core::{GlyphBitmap, Point, RgbImage, RgbSource};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as RGB
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            info.bit_depth
        )));
    }

    let width = info.width;
    let height = info.height;
    let samples = info.color_type.samples();
    let bytes_per_row = info.line_size;
    let data = &buf[..info.buffer_size()];

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..(y + 1) * bytes_per_row];
        for px in row.chunks_exact(samples).take(width as usize) {
            match info.color_type {
                ColorType::Grayscale | ColorType::GrayscaleAlpha => {
                    rgb.extend_from_slice(&[px[0], px[0], px[0]]);
                }
                ColorType::Rgb | ColorType::Rgba => {
                    rgb.extend_from_slice(&px[..3]);
                }
                ColorType::Indexed => {
                    return Err(IoError::UnsupportedFormat(
                        "PNG palette was not expanded".to_string(),
                    ));
                }
            }
        }
    }

    Ok(RgbImage::from_raw(width, height, rgb)?)
}

/// Write a glyph as a 1-bit grayscale PNG, foreground white
pub fn write_glyph_png<W: Write>(glyph: &GlyphBitmap, writer: W) -> IoResult<()> {
    let width = glyph.width();
    let height = glyph.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::One);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width.div_ceil(8) as usize;
    let mut data = vec![0u8; bytes_per_row * height as usize];

    for (y, row) in glyph.rows().enumerate() {
        let row_start = y * bytes_per_row;
        for (x, &on) in row.iter().enumerate() {
            if on {
                let byte_idx = row_start + x / 8;
                let bit_idx = 7 - (x % 8);
                data[byte_idx] |= 1 << bit_idx;
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

/// Read a glyph PNG back into a bitmap at the origin.
///
/// Pixels brighter than mid-gray are foreground, so this accepts any PNG,
/// not only those written by [`write_glyph_png`].
pub fn read_glyph_png<R: BufRead + Seek>(reader: R) -> IoResult<GlyphBitmap> {
    let image = read_png(reader)?;
    let cells = image
        .as_raw()
        .chunks_exact(3)
        .map(|px| (px[0] as u32 + px[1] as u32 + px[2] as u32) > 3 * 127)
        .collect();
    Ok(GlyphBitmap::from_cells(
        image.width(),
        image.height(),
        cells,
        Point::default(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_rgb(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut enc = Encoder::new(&mut out, width, height);
            enc.set_color(ColorType::Rgb);
            enc.set_depth(BitDepth::Eight);
            let mut w = enc.write_header().unwrap();
            w.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_read_rgb_png() {
        let data = [255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
        let bytes = encode_rgb(2, 2, &data);
        let img = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(img.rgb(1, 1), Some((9, 9, 9)));
    }

    #[test]
    fn test_read_1bit_gray_is_expanded() {
        let mut glyph = GlyphBitmap::new(3, 1, Point::default()).unwrap();
        glyph.set(1, 0, true).unwrap();
        let mut bytes = Vec::new();
        write_glyph_png(&glyph, &mut bytes).unwrap();

        let img = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(img.rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(img.rgb(1, 0), Some((255, 255, 255)));
    }

    #[test]
    fn test_glyph_png_wide_row() {
        // 11 columns spans two bytes per row
        let mut glyph = GlyphBitmap::new(11, 2, Point::default()).unwrap();
        glyph.set(0, 0, true).unwrap();
        glyph.set(10, 1, true).unwrap();
        glyph.set(8, 0, true).unwrap();
        let mut bytes = Vec::new();
        write_glyph_png(&glyph, &mut bytes).unwrap();

        let back = read_glyph_png(Cursor::new(bytes)).unwrap();
        assert!(back.same_shape(&glyph));
    }

    #[test]
    fn test_read_garbage() {
        assert!(matches!(
            read_png(Cursor::new(b"not a png".to_vec())),
            Err(IoError::DecodeError(_))
        ));
    }
}
