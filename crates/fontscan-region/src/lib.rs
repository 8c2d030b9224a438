//! fontscan-region - Region discovery for fontscan
//!
//! This crate partitions the foreground of a binarized grid into connected
//! regions:
//!
//! - **Connected component discovery** - row-major scan that grows one
//!   region per unvisited foreground pixel
//! - **Seeded region growing** - depth-first growth from a single seed
//!   with an explicit work-stack
//!
//! Discovery consumes the grid: pixels are cleared as they are assigned to
//! a region. Use [`find_regions`] or [`count_regions`] to keep the input.
//!
//! # Examples
//!
//! ```
//! use fontscan_core::PixelGrid;
//! use fontscan_region::{ConnectivityType, discover_regions};
//!
//! let mut grid = PixelGrid::new(3, 3).unwrap();
//! grid.set(0, 0, true).unwrap();
//! grid.set(1, 1, true).unwrap();
//! grid.set(2, 2, true).unwrap();
//!
//! let regions = discover_regions(&mut grid, ConnectivityType::EightWay);
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].len(), 3);
//! ```

pub mod conncomp;
pub mod error;
pub mod seedfill;

// Re-export core types
pub use fontscan_core;

pub use error::{RegionError, RegionResult};

pub use conncomp::{
    ConnectivityType, Regions, count_regions, discover_regions, find_regions, regions,
};

pub use seedfill::discover_region;
