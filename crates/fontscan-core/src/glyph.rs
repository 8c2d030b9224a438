//! GlyphBitmap - canonical glyph shape
//!
//! A `GlyphBitmap` is a region re-expressed in its own tight bounding box.
//! The cell pattern is what identifies a glyph; the origin only records
//! where the region sat in the source image.

use crate::error::{Error, Result};
use crate::pta::Point;
use std::fmt;

/// Character written for a foreground cell by [`GlyphBitmap::render_blocks`]
pub const BLOCK_FOREGROUND: char = '█';

/// Character written for a background cell by [`GlyphBitmap::render_blocks`]
pub const BLOCK_BACKGROUND: char = ' ';

/// Tight boolean bitmap of one glyph plus its original top-left offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    origin: Point,
}

impl GlyphBitmap {
    /// Create an all-background bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, origin: Point) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
            origin,
        })
    }

    /// Build a bitmap from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidInput`] if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>, origin: Point) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if cells.len() != width as usize * height as usize {
            return Err(Error::InvalidInput(format!(
                "{}x{} glyph needs {} cells, got {}",
                width,
                height,
                width as usize * height as usize,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
            origin,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Top-left of the glyph in the source image
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Row-major cells
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Cell at (x, y) in glyph coordinates, `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// Set the cell at (x, y) in glyph coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the bitmap.
    pub fn set(&mut self, x: u32, y: u32, value: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.cells[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Number of foreground cells
    pub fn count_foreground(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over rows as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// True if both bitmaps have the same size and cell pattern.
    ///
    /// The origin is ignored.
    pub fn same_shape(&self, other: &GlyphBitmap) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }

    /// Rows of `0`/`1`, each terminated by a newline.
    pub fn to_text(&self) -> String {
        self.render_with('1', '0')
    }

    /// Rows of block characters for terminal preview.
    pub fn render_blocks(&self) -> String {
        self.render_with(BLOCK_FOREGROUND, BLOCK_BACKGROUND)
    }

    fn render_with(&self, on: char, off: char) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|&c| if c { on } else { off }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for GlyphBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_blocks())
    }
}
