//! Glyph normalization
//!
//! Converts a region into a [`GlyphBitmap`] sized to the region's inclusive
//! bounding box. Point `p` lands at `(p.x - min_x, p.y - min_y)`; the
//! `(min_x, min_y)` corner becomes the glyph's origin.

use crate::error::{RecogError, RecogResult};
use fontscan_core::{GlyphBitmap, Region};

/// Normalize a region into its canonical glyph bitmap.
///
/// The bitmap is `max_x - min_x + 1` wide and `max_y - min_y + 1` high, with
/// exactly `region.len()` foreground cells when the region has no repeated
/// points.
///
/// # Errors
///
/// Returns [`RecogError::EmptyRegion`] if the region has no points.
///
/// # Examples
///
/// ```
/// use fontscan_core::{Point, Region};
/// use fontscan_recog::normalize_region;
///
/// let region: Region = vec![Point::new(4, 7)].into();
/// let glyph = normalize_region(&region).unwrap();
/// assert_eq!((glyph.width(), glyph.height()), (1, 1));
/// assert_eq!(glyph.get(0, 0), Some(true));
/// assert_eq!(glyph.origin(), Point::new(4, 7));
/// ```
pub fn normalize_region(region: &Region) -> RecogResult<GlyphBitmap> {
    let bounds = region.bounds().ok_or(RecogError::EmptyRegion)?;
    let origin = bounds.origin();

    let mut glyph = GlyphBitmap::new(bounds.width(), bounds.height(), origin)?;
    for p in region {
        glyph.set(p.x - origin.x, p.y - origin.y, true)?;
    }

    Ok(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontscan_core::Point;

    fn region(points: &[(u32, u32)]) -> Region {
        points.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_empty_region() {
        assert!(matches!(
            normalize_region(&Region::new()),
            Err(RecogError::EmptyRegion)
        ));
    }

    #[test]
    fn test_diagonal() {
        let g = normalize_region(&region(&[(10, 20), (11, 21), (12, 22)])).unwrap();
        assert_eq!((g.width(), g.height()), (3, 3));
        assert_eq!(g.origin(), Point::new(10, 20));
        assert_eq!(g.to_text(), "100\n010\n001\n");
    }

    #[test]
    fn test_anti_diagonal_origin_is_min_corner() {
        // The seed (2,0) is not the top-left corner.
        let g = normalize_region(&region(&[(2, 0), (1, 1), (0, 2)])).unwrap();
        assert_eq!(g.origin(), Point::new(0, 0));
        assert_eq!(g.to_text(), "001\n010\n100\n");
    }

    #[test]
    fn test_horizontal_bar() {
        let g = normalize_region(&region(&[(5, 3), (6, 3), (7, 3), (8, 3)])).unwrap();
        assert_eq!((g.width(), g.height()), (4, 1));
        assert_eq!(g.count_foreground(), 4);
    }
}
