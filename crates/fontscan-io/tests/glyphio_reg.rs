//! Glyph I/O regression test
//!
//! Run with:
//! ```
//! cargo test -p fontscan-io --test glyphio_reg
//! ```

use fontscan_core::{GlyphBitmap, RgbSource};
use fontscan_io::{
    CharacterSet, FileSink, ImageFormat, IoError, OutputFormat, detect_format, read_glyph,
    read_image, read_image_mem, write_glyph, write_glyph_png,
};
use fontscan_recog::{GlyphExtractor, GlyphIdentity, LabelingSink, SinkError};
use fontscan_test::{RegParams, glyph_from_ascii};
use std::fs;

const GLYPH_A: [&str; 5] = [
    "..#..", //
    ".#.#.", //
    "#####", //
    "#...#", //
    "#...#", //
];

const GLYPH_I: [&str; 5] = [
    "###", //
    ".#.", //
    ".#.", //
    ".#.", //
    "###", //
];

#[test]
fn glyphio_reg() {
    let mut rp = RegParams::new("glyphio");
    let dir = tempfile::tempdir().expect("tempdir");
    let a = glyph_from_ascii(&GLYPH_A).unwrap();

    // --- PNG and text files reproduce the glyph ---
    for format in [OutputFormat::Png, OutputFormat::Text] {
        let path = dir.path().join(format!("a.{}", format.extension()));
        write_glyph(&a, &path, format).expect("write glyph");
        let back = read_glyph(&path, format).expect("read glyph");
        rp.compare_glyphs(&a, &back);
    }

    // --- text layout is exact ---
    let text = fs::read(dir.path().join("a.txt")).unwrap();
    rp.compare_strings(b"00100\n01010\n11111\n10001\n10001\n", &text);

    // --- the PNG is detected and decodes as white on black ---
    let png_path = dir.path().join("a.png");
    rp.compare_values(
        1.0,
        (detect_format(&png_path).unwrap() == ImageFormat::Png) as u8 as f64,
        0.0,
    );
    let img = read_image(&png_path).expect("read image");
    rp.compare_values(5.0, img.width() as f64, 0.0);
    rp.compare_values(255.0, img.rgb(2, 0).unwrap().0 as f64, 0.0);
    rp.compare_values(0.0, img.rgb(0, 0).unwrap().0 as f64, 0.0);

    assert!(rp.cleanup(), "glyphio regression test failed");
}

#[test]
fn glyphio_extract_from_png() {
    // A rendered glyph image is itself a valid source image.
    let a = glyph_from_ascii(&GLYPH_A).unwrap();
    let mut bytes = Vec::new();
    write_glyph_png(&a, &mut bytes).unwrap();

    let img = read_image_mem(&bytes).unwrap();
    let glyphs = GlyphExtractor::default().extract(&img).unwrap();
    assert_eq!(glyphs.len(), 1);
    assert!(glyphs[0].same_shape(&a));
}

#[test]
fn glyphio_unknown_format() {
    let err = read_image_mem(b"0101\n1010\n").unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
}

#[test]
fn glyphio_file_sink_builds_charset() {
    let dir = tempfile::tempdir().unwrap();
    let a = glyph_from_ascii(&GLYPH_A).unwrap();
    let i = glyph_from_ascii(&GLYPH_I).unwrap();

    // Operator first types an invalid name, then the letter.
    let mut script = vec!["I", "A", "*"];
    let labeler = move |_: &GlyphBitmap| {
        script
            .pop()
            .map(str::to_string)
            .ok_or(SinkError::Cancelled)
    };
    let mut sink = FileSink::new(dir.path(), OutputFormat::Png, labeler);

    let mut img = fontscan_core::RgbImage::new(10, 5).unwrap();
    for (y, row) in GLYPH_A.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                img.set_rgb(x as u32, y as u32, 255, 255, 255).unwrap();
            }
        }
    }
    for (y, row) in GLYPH_I.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                img.set_rgb(x as u32 + 7, y as u32, 255, 255, 255).unwrap();
            }
        }
    }

    let report = GlyphExtractor::default().run(&img, &mut sink).unwrap();
    assert_eq!(report.unique(), 2);
    assert_eq!(report.labeled[0].label.as_str(), "A");
    assert_eq!(report.labeled[1].label.as_str(), "I");

    // an unrelated file and a multi-character name are ignored
    fs::write(dir.path().join("notes.md"), "hello").unwrap();
    write_glyph(&a, dir.path().join("AA.txt"), OutputFormat::Text).unwrap();

    let set = CharacterSet::load_dir(dir.path()).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.chars().collect::<String>(), "AI");
    assert!(set.get('A').unwrap().same_shape(&a));
    assert!(set.get('I').unwrap().same_shape(&i));
}

#[test]
fn glyphio_relabel_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let labeler = |_: &GlyphBitmap| Ok::<_, SinkError>("x".to_string());
    let mut sink = FileSink::new(dir.path(), OutputFormat::Text, labeler);

    let first = glyph_from_ascii(&["#"]).unwrap();
    let second = glyph_from_ascii(&["##"]).unwrap();
    sink
        .present_and_label(&first, GlyphIdentity::of(&first))
        .unwrap();
    sink
        .present_and_label(&second, GlyphIdentity::of(&second))
        .unwrap();

    let stored = read_glyph(dir.path().join("x.txt"), OutputFormat::Text).unwrap();
    assert!(stored.same_shape(&second));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn glyphio_rejects_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("b.txt");
    fs::write(&path, "010\n01\n").unwrap();
    assert!(matches!(
        read_glyph(&path, OutputFormat::Text),
        Err(IoError::InvalidData(_))
    ));
}
