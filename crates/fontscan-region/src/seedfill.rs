//! Seeded region growing
//!
//! Grows one connected component out of a [`PixelGrid`] starting from a seed
//! pixel. Every pixel is cleared the moment it is recorded, so the grid
//! itself serves as the visited set and no pixel can be reached twice.
//!
//! The traversal is a depth-first walk driven by an explicit stack of
//! `(pixel, next neighbor)` frames. It visits pixels in exactly the order a
//! recursive flood fill would, but its depth is bounded by heap memory
//! rather than the call stack, so a region covering the whole image is
//! fine.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use fontscan_core::{PixelGrid, Point, Region};

/// Grow and remove the region containing `(seed_x, seed_y)`.
///
/// Returns the region's points in discovery order. If the seed pixel is
/// background the returned region is empty and the grid is untouched.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed lies outside the grid.
///
/// # Examples
///
/// ```
/// use fontscan_core::PixelGrid;
/// use fontscan_region::{ConnectivityType, discover_region};
///
/// let mut grid = PixelGrid::new(3, 3).unwrap();
/// grid.set(0, 0, true).unwrap();
/// grid.set(1, 1, true).unwrap();
///
/// let region = discover_region(&mut grid, 0, 0, ConnectivityType::EightWay).unwrap();
/// assert_eq!(region.len(), 2);
/// assert!(grid.is_blank());
/// ```
pub fn discover_region(
    grid: &mut PixelGrid,
    seed_x: u32,
    seed_y: u32,
    connectivity: ConnectivityType,
) -> RegionResult<Region> {
    if seed_x >= grid.width() || seed_y >= grid.height() {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }
    Ok(grow(grid, Point::new(seed_x, seed_y), connectivity))
}

/// Grow from an in-bounds seed. Empty if the seed is background.
pub(crate) fn grow(grid: &mut PixelGrid, seed: Point, connectivity: ConnectivityType) -> Region {
    let mut region = Region::new();
    if !grid.take(seed.x, seed.y) {
        return region;
    }
    region.push(seed);

    let offsets = connectivity.offsets();
    let mut stack: Vec<(Point, usize)> = vec![(seed, 0)];

    while let Some(frame) = stack.last_mut() {
        let (p, next) = *frame;
        if next == offsets.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let (dx, dy) = offsets[next];
        let nx = p.x as i64 + dx;
        let ny = p.y as i64 + dy;
        if !grid.contains(nx, ny) {
            continue;
        }

        let n = Point::new(nx as u32, ny as u32);
        if grid.take(n.x, n.y) {
            region.push(n);
            stack.push((n, 0));
        }
    }

    region
}
