//! fontscan-test - Regression test framework for fontscan
//!
//! Provides [`RegParams`] for indexed, non-panicking comparisons and a set
//! of ASCII-art fixture builders so tests can draw their inputs inline.
//!
//! # Usage
//!
//! ```ignore
//! use fontscan_test::{RegParams, grid_from_ascii};
//!
//! let grid = grid_from_ascii(&["#..", ".#.", "..#"]).unwrap();
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(3.0, grid.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Fixture syntax
//!
//! Every row must have the same length. `#`, `1` and `X` mark foreground,
//! `.`, `0`, `_` and space mark background.
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use fontscan_core::{GlyphBitmap, PixelGrid, Point, RgbImage};

/// Gray level used for ink pixels by [`image_from_ascii`]
pub const INK: u8 = 255;

/// Gray level used for background pixels by [`image_from_ascii`]
pub const PAPER: u8 = 0;

/// Parse ASCII rows into `(width, height, row-major cells)`.
pub fn parse_ascii(rows: &[&str]) -> TestResult<(u32, u32, Vec<bool>)> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    if width == 0 || height == 0 {
        return Err(TestError::Fixture {
            row: 0,
            message: "fixture must have at least one row and column".to_string(),
        });
    }

    let mut cells = Vec::with_capacity(width * height);
    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(TestError::Fixture {
                row,
                message: format!("expected {} columns, got {}", width, line.chars().count()),
            });
        }
        for c in line.chars() {
            let on = match c {
                '#' | '1' | 'X' => true,
                '.' | '0' | '_' | ' ' => false,
                other => {
                    return Err(TestError::Fixture {
                        row,
                        message: format!("unexpected character {:?}", other),
                    });
                }
            };
            cells.push(on);
        }
    }

    Ok((width as u32, height as u32, cells))
}

/// Build a [`PixelGrid`] from ASCII rows
pub fn grid_from_ascii(rows: &[&str]) -> TestResult<PixelGrid> {
    let (w, h, cells) = parse_ascii(rows)?;
    Ok(PixelGrid::from_cells(w, h, cells)?)
}

/// Build a [`GlyphBitmap`] at the origin from ASCII rows
pub fn glyph_from_ascii(rows: &[&str]) -> TestResult<GlyphBitmap> {
    let (w, h, cells) = parse_ascii(rows)?;
    Ok(GlyphBitmap::from_cells(w, h, cells, Point::default())?)
}

/// Build an [`RgbImage`] from ASCII rows: ink is white on a black page.
pub fn image_from_ascii(rows: &[&str]) -> TestResult<RgbImage> {
    image_from_ascii_colors(rows, (INK, INK, INK), (PAPER, PAPER, PAPER))
}

/// Build an [`RgbImage`] from ASCII rows with explicit ink and paper colors.
pub fn image_from_ascii_colors(
    rows: &[&str],
    ink: (u8, u8, u8),
    paper: (u8, u8, u8),
) -> TestResult<RgbImage> {
    let (w, h, cells) = parse_ascii(rows)?;
    let data = cells
        .iter()
        .flat_map(|&on| {
            let (r, g, b) = if on { ink } else { paper };
            [r, g, b]
        })
        .collect();
    Ok(RgbImage::from_raw(w, h, data)?)
}
