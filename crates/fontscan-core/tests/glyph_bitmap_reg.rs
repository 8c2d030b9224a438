//! Core data model regression test
//!
//! Run with:
//! ```
//! cargo test -p fontscan-core --test glyph_bitmap_reg
//! ```

use fontscan_core::{Bounds, GlyphBitmap, Point, Region};
use fontscan_test::{RegParams, glyph_from_ascii, grid_from_ascii};

const GLYPH_K: [&str; 4] = [
    "#..#", //
    "##..", //
    "#.#.", //
    "#..#", //
];

#[test]
fn glyph_bitmap_reg() {
    let mut rp = RegParams::new("glyph_bitmap");

    // --- text and block rendering ---
    let k = glyph_from_ascii(&GLYPH_K).unwrap();
    rp.compare_strings(b"1001\n1100\n1010\n1001\n", k.to_text().as_bytes());
    rp.compare_strings(
        "█  █\n██  \n█ █ \n█  █\n".as_bytes(),
        k.render_blocks().as_bytes(),
    );
    rp.compare_values(8.0, k.count_foreground() as f64, 0.0);

    // --- same shape ignores the origin ---
    let moved = GlyphBitmap::from_cells(4, 4, k.cells().to_vec(), Point::new(9, 3)).unwrap();
    rp.compare_values(1.0, k.same_shape(&moved) as u8 as f64, 0.0);
    rp.compare_values(0.0, (k == moved) as u8 as f64, 0.0);

    // --- region bounds are inclusive ---
    let region: Region = [(3, 7), (5, 7), (4, 9)]
        .into_iter()
        .map(Point::from)
        .collect();
    let bounds = region.bounds().unwrap();
    rp.compare_values(3.0, bounds.width() as f64, 0.0);
    rp.compare_values(3.0, bounds.height() as f64, 0.0);
    rp.compare_values(3.0, bounds.origin().x as f64, 0.0);
    rp.compare_values(7.0, bounds.origin().y as f64, 0.0);

    let single = Bounds::from_point(Point::new(2, 2));
    rp.compare_values(1.0, single.width() as f64, 0.0);
    rp.compare_values(1.0, single.height() as f64, 0.0);

    assert!(rp.cleanup(), "glyph bitmap regression test failed");
}

#[test]
fn grid_take_consumes_pixels() {
    let mut grid = grid_from_ascii(&GLYPH_K).unwrap();
    let before = grid.count_foreground();

    assert!(grid.take(0, 0));
    assert!(!grid.take(0, 0));
    assert!(!grid.take(1, 0));
    assert!(!grid.take(100, 100));
    assert_eq!(grid.count_foreground(), before - 1);

    let remaining: Vec<_> = grid.foreground().collect();
    for (x, y) in remaining {
        assert!(grid.take(x, y));
    }
    assert!(grid.is_blank());
}
