//! Point, Region - point lists
//!
//! A [`Region`] is the ordered list of pixels belonging to one connected
//! component, in the order the discoverer reached them.

use crate::bounds::Bounds;

/// An integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// The pixels of one connected component, in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    /// Create an empty region
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty region with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the region holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first point, i.e. the seed the region was grown from
    pub fn seed(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Points in discovery order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Inclusive bounding box, `None` for an empty region
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().copied())
    }
}

impl From<Vec<Point>> for Region {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Region {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
