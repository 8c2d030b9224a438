//! Plain-text glyph format
//!
//! One line per row, `1` for foreground and `0` for background, every row
//! terminated by `\n`:
//!
//! ```text
//! 010
//! 111
//! 010
//! ```
//!
//! The reader also accepts `\r\n` line endings and ignores trailing blank
//! lines.

use crate::{IoError, IoResult};
use fontscan_core::{GlyphBitmap, Point};
use std::io::{Read, Write};

/// Write a glyph as `0`/`1` rows
pub fn write_glyph_text<W: Write>(glyph: &GlyphBitmap, mut writer: W) -> IoResult<()> {
    writer.write_all(glyph.to_text().as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parse a `0`/`1` glyph from a string.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] for ragged rows, characters other than
/// `0` and `1`, or an empty input.
pub fn parse_glyph_text(text: &str) -> IoResult<GlyphBitmap> {
    let rows: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let used = rows
        .iter()
        .rposition(|row| !row.is_empty())
        .map_or(0, |last| last + 1);
    let rows = &rows[..used];

    let width = rows.first().map_or(0, |row| row.len());
    if width == 0 {
        return Err(IoError::InvalidData("empty glyph text".to_string()));
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(IoError::InvalidData(format!(
                "row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            )));
        }
        for (x, c) in row.chars().enumerate() {
            match c {
                '1' => cells.push(true),
                '0' => cells.push(false),
                other => {
                    return Err(IoError::InvalidData(format!(
                        "unexpected {:?} at row {}, column {}",
                        other, y, x
                    )));
                }
            }
        }
    }

    Ok(GlyphBitmap::from_cells(
        width as u32,
        rows.len() as u32,
        cells,
        Point::default(),
    )?)
}

/// Read a `0`/`1` glyph
pub fn read_glyph_text<R: Read>(mut reader: R) -> IoResult<GlyphBitmap> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| IoError::InvalidData(format!("glyph text is not UTF-8: {}", e)))?;
    parse_glyph_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text() {
        let mut glyph = GlyphBitmap::new(3, 2, Point::new(4, 4)).unwrap();
        glyph.set(1, 0, true).unwrap();
        glyph.set(0, 1, true).unwrap();
        glyph.set(2, 1, true).unwrap();

        let mut out = Vec::new();
        write_glyph_text(&glyph, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "010\n101\n");
    }

    #[test]
    fn test_parse_crlf_and_trailing_blank() {
        let glyph = parse_glyph_text("01\r\n10\r\n\n").unwrap();
        assert_eq!((glyph.width(), glyph.height()), (2, 2));
        assert_eq!(glyph.get(1, 0), Some(true));
        assert_eq!(glyph.get(0, 1), Some(true));
        assert_eq!(glyph.count_foreground(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_glyph_text(""), Err(IoError::InvalidData(_))));
        assert!(matches!(parse_glyph_text("\n\n"), Err(IoError::InvalidData(_))));
        assert!(matches!(parse_glyph_text("01\n1\n"), Err(IoError::InvalidData(_))));
        assert!(matches!(parse_glyph_text("0#\n"), Err(IoError::InvalidData(_))));
    }
}
