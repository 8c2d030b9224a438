//! PixelGrid - binary foreground/background map
//!
//! A `PixelGrid` is the output of binarization and the working surface of
//! region discovery. Discovery clears pixels as it consumes them, so a grid
//! that has been fully scanned is left entirely background.
//!
//! Cells are stored row-major as `bool`, `true` meaning foreground.

use crate::error::{Error, Result};

/// A 2D boolean image, foreground = `true`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl PixelGrid {
    /// Create an all-background grid.
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
            cells: vec![false; width as usize * height as usize],
        })
    }

    /// Build a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidInput`] if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if cells.len() != width as usize * height as usize {
            return Err(Error::InvalidInput(format!(
                "{}x{} grid needs {} cells, got {}",
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
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether (x, y) lies on the grid.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Foreground state at (x, y), `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.offset(x, y)])
    }

    /// Set the state at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.offset(x, y);
        self.cells[idx] = value;
        Ok(())
    }

    /// Clear (x, y) and report whether it was foreground before.
    ///
    /// Out-of-bounds coordinates are treated as background.
    pub fn take(&mut self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = self.offset(x, y);
        std::mem::replace(&mut self.cells[idx], false)
    }

    /// Number of foreground pixels.
    pub fn count_foreground(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// True if no pixel is foreground.
    pub fn is_blank(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    /// Iterate over foreground coordinates in row-major order.
    pub fn foreground(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| ((i % w) as u32, (i / w) as u32))
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_blank() {
        let grid = PixelGrid::new(4, 3).unwrap();
        assert!(grid.is_blank());
        assert_eq!(grid.count_foreground(), 0);
        assert_eq!(grid.cells().len(), 12);
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            PixelGrid::new(0, 1),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_cells_mismatch() {
        assert!(matches!(
            PixelGrid::from_cells(2, 2, vec![true; 3]),
            Err(Error::InvalidInput(msg)) if msg == "2x2 grid needs 4 cells, got 3"
        ));
        let grid = PixelGrid::from_cells(2, 2, vec![true, false, false, true]).unwrap();
        assert_eq!(grid.get(0, 0), Some(true));
        assert_eq!(grid.get(1, 0), Some(false));
        assert_eq!(grid.get(1, 1), Some(true));
        assert_eq!(grid.get(2, 1), None);
    }

    #[test]
    fn test_take_clears() {
        let mut grid = PixelGrid::new(3, 3).unwrap();
        grid.set(1, 2, true).unwrap();
        assert!(grid.take(1, 2));
        assert!(!grid.take(1, 2));
        assert!(!grid.take(9, 9));
        assert!(grid.is_blank());
    }

    #[test]
    fn test_foreground_order() {
        let mut grid = PixelGrid::new(3, 2).unwrap();
        grid.set(2, 0, true).unwrap();
        grid.set(0, 1, true).unwrap();
        grid.set(0, 0, true).unwrap();
        let pts: Vec<_> = grid.foreground().collect();
        assert_eq!(pts, vec![(0, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_contains() {
        let grid = PixelGrid::new(2, 2).unwrap();
        assert!(grid.contains(0, 0));
        assert!(grid.contains(1, 1));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(2, 0));
        assert!(!grid.contains(0, 2));
    }
}
