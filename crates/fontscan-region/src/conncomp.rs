//! Connected component discovery
//!
//! Scans a [`PixelGrid`] in row-major order and grows a region from every
//! foreground pixel that is still set when the scan reaches it. Because
//! growing a region clears its pixels, the regions partition the original
//! foreground: every foreground pixel ends up in exactly one region.

use crate::seedfill::grow;
use fontscan_core::{PixelGrid, Point, Region};
use log::debug;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

const FOUR_WAY_OFFSETS: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

const EIGHT_WAY_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl ConnectivityType {
    /// Neighbor offsets `(dx, dy)` in the order they are examined
    /// (row-major around the center pixel).
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Self::FourWay => &FOUR_WAY_OFFSETS,
            Self::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }
}

/// Lazily yields regions from a grid, consuming it as it goes.
///
/// Created by [`regions`].
pub struct Regions<'a> {
    grid: &'a mut PixelGrid,
    connectivity: ConnectivityType,
    cursor: usize,
}

impl Iterator for Regions<'_> {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        let width = self.grid.width() as usize;
        let total = width * self.grid.height() as usize;

        while self.cursor < total {
            let x = (self.cursor % width) as u32;
            let y = (self.cursor / width) as u32;
            self.cursor += 1;

            if self.grid.get(x, y) == Some(true) {
                let region = grow(self.grid, Point::new(x, y), self.connectivity);
                debug!("region at ({}, {}): {} pixels", x, y, region.len());
                return Some(region);
            }
        }
        None
    }
}

/// Iterate over the regions of `grid` in seed-discovery order.
///
/// Each call to `next` grows one region and clears its pixels. Dropping
/// the iterator early leaves the undiscovered pixels in place.
pub fn regions(grid: &mut PixelGrid, connectivity: ConnectivityType) -> Regions<'_> {
    Regions {
        grid,
        connectivity,
        cursor: 0,
    }
}

/// Discover every region, leaving `grid` blank.
///
/// # Examples
///
/// ```
/// use fontscan_core::PixelGrid;
/// use fontscan_region::{ConnectivityType, discover_regions};
///
/// let mut grid = PixelGrid::new(5, 5).unwrap();
/// grid.set(0, 0, true).unwrap();
/// grid.set(4, 4, true).unwrap();
///
/// let found = discover_regions(&mut grid, ConnectivityType::EightWay);
/// assert_eq!(found.len(), 2);
/// assert!(grid.is_blank());
/// ```
pub fn discover_regions(grid: &mut PixelGrid, connectivity: ConnectivityType) -> Vec<Region> {
    let found: Vec<Region> = regions(grid, connectivity).collect();
    debug!("discovered {} regions", found.len());
    found
}

/// Discover every region of a grid without modifying it.
///
/// Works on a private copy, so it costs one extra grid of memory.
pub fn find_regions(grid: &PixelGrid, connectivity: ConnectivityType) -> Vec<Region> {
    let mut scratch = grid.clone();
    discover_regions(&mut scratch, connectivity)
}

/// Count the regions of a grid without modifying it.
pub fn count_regions(grid: &PixelGrid, connectivity: ConnectivityType) -> usize {
    let mut scratch = grid.clone();
    regions(&mut scratch, connectivity).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u32, h: u32, on: &[(u32, u32)]) -> PixelGrid {
        let mut g = PixelGrid::new(w, h).unwrap();
        for &(x, y) in on {
            g.set(x, y, true).unwrap();
        }
        g
    }

    #[test]
    fn test_offsets_exclude_center() {
        for c in [ConnectivityType::FourWay, ConnectivityType::EightWay] {
            assert!(!c.offsets().contains(&(0, 0)));
        }
        assert_eq!(ConnectivityType::EightWay.offsets().len(), 8);
        assert_eq!(ConnectivityType::default(), ConnectivityType::EightWay);
    }

    #[test]
    fn test_blank_grid_has_no_regions() {
        let mut g = grid(4, 4, &[]);
        assert!(discover_regions(&mut g, ConnectivityType::EightWay).is_empty());
    }

    #[test]
    fn test_seed_order_is_row_major() {
        let mut g = grid(4, 3, &[(3, 0), (0, 2), (1, 0)]);
        let seeds: Vec<_> = discover_regions(&mut g, ConnectivityType::EightWay)
            .iter()
            .map(|r| r.seed().unwrap())
            .collect();
        assert_eq!(
            seeds,
            vec![Point::new(1, 0), Point::new(3, 0), Point::new(0, 2)]
        );
    }

    #[test]
    fn test_no_wraparound() {
        // (2,0) and (0,1) are adjacent in row-major memory but not on the grid.
        let mut g = grid(3, 2, &[(2, 0), (0, 1)]);
        assert_eq!(discover_regions(&mut g, ConnectivityType::EightWay).len(), 2);
    }

    #[test]
    fn test_find_and_count_leave_grid_intact() {
        let g = grid(3, 3, &[(0, 0), (2, 2), (2, 0)]);
        assert_eq!(count_regions(&g, ConnectivityType::EightWay), 3);
        assert_eq!(find_regions(&g, ConnectivityType::EightWay).len(), 3);
        assert_eq!(g.count_foreground(), 3);
    }

    #[test]
    fn test_lazy_iteration() {
        let mut g = grid(5, 1, &[(0, 0), (2, 0), (4, 0)]);
        let mut it = regions(&mut g, ConnectivityType::EightWay);
        assert_eq!(it.next().unwrap().seed(), Some(Point::new(0, 0)));
        drop(it);
        assert_eq!(g.count_foreground(), 2);
    }

    #[test]
    fn test_iteration_reaches_last_pixel() {
        let mut g = grid(4, 3, &[(3, 2)]);
        let mut it = regions(&mut g, ConnectivityType::EightWay);
        assert_eq!(it.next().unwrap().seed(), Some(Point::new(3, 2)));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
