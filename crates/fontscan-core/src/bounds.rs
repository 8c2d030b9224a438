//! Bounds - inclusive bounding boxes
//!
//! Unlike a width/height rectangle, `Bounds` stores both corners as pixel
//! coordinates that belong to the box. Width and height are therefore
//! `max - min + 1`, and a box around a single pixel is 1x1.

use crate::pta::Point;

/// Inclusive bounding box of a set of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Bounds covering exactly one pixel
    pub const fn from_point(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    /// Smallest bounds containing every point, `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |b, p| b.extend(p)))
    }

    /// Grow to include `p`.
    #[must_use]
    pub fn extend(self, p: Point) -> Self {
        Self {
            min_x: self.min_x.min(p.x),
            min_y: self.min_y.min(p.y),
            max_x: self.max_x.max(p.x),
            max_y: self.max_y.max(p.y),
        }
    }

    /// Width in pixels (`max_x - min_x + 1`)
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels (`max_y - min_y + 1`)
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Check if a point is inside the bounds
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
