//! Directory scanning
//!
//! Every regular file in the input directory is tried in name order. Files
//! that are not recognisable images are skipped. Each image is a separate
//! extraction run, so duplicate detection starts fresh per image.
//!
//! The file list is taken before the first image is processed, so glyph
//! files written into the same directory are never scanned.

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use fontscan_io::{FileSink, ImageFormat, IoError, Labeler, detect_format, read_image};
use fontscan_recog::{ExtractionReport, GlyphExtractor, LabelingSink};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of scanning a directory
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Per-image reports, in scan order
    pub images: Vec<(PathBuf, ExtractionReport)>,
    /// Files skipped because they are not images
    pub skipped: Vec<PathBuf>,
}

impl ScanSummary {
    /// Unique glyphs labeled across all images
    pub fn labeled(&self) -> usize {
        self.images.iter().map(|(_, r)| r.unique()).sum()
    }

    /// Regions discovered across all images
    pub fn regions(&self) -> usize {
        self.images.iter().map(|(_, r)| r.regions).sum()
    }
}

/// Regular files in `dir`, sorted by path.
pub fn list_files<P: AsRef<Path>>(dir: P) -> ScanResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extract every image in `dir` and send its unique glyphs to `sink`.
///
/// # Errors
///
/// Stops at the first image that fails to decode or extract, returning
/// [`ScanError::Image`] with that image's path. Glyphs from earlier images
/// stay persisted.
pub fn scan_directory<P, K>(
    dir: P,
    extractor: &GlyphExtractor,
    sink: &mut K,
) -> ScanResult<ScanSummary>
where
    P: AsRef<Path>,
    K: LabelingSink + ?Sized,
{
    let mut summary = ScanSummary::default();

    for path in list_files(dir)? {
        match detect_format(&path) {
            Ok(ImageFormat::Unknown) | Err(IoError::InvalidData(_)) => {
                warn!("skipping {}: not a recognised image", path.display());
                summary.skipped.push(path);
                continue;
            }
            Ok(_) => {}
            Err(e) => return Err(ScanError::image(path, e)),
        }

        info!("scanning {}", path.display());
        let image = match read_image(&path) {
            Ok(image) => image,
            Err(e) => return Err(ScanError::image(path, e)),
        };
        let report = match extractor.run(&image, sink) {
            Ok(report) => report,
            Err(e) => return Err(ScanError::image(path, e)),
        };
        summary.images.push((path, report));
    }

    info!(
        "{} images, {} regions, {} glyphs labeled, {} files skipped",
        summary.images.len(),
        summary.regions(),
        summary.labeled(),
        summary.skipped.len()
    );
    Ok(summary)
}

/// Scan as configured, storing glyphs through a [`FileSink`].
///
/// # Errors
///
/// Returns [`ScanError::Config`] if either directory is missing, otherwise
/// see [`scan_directory`].
pub fn run<L: Labeler>(config: &ScanConfig, labeler: L) -> ScanResult<ScanSummary> {
    config.validate()?;
    let extractor = GlyphExtractor::new(config.extract.clone());
    let mut sink = FileSink::new(&config.output_dir, config.format, labeler);
    scan_directory(&config.input_dir, &extractor, &mut sink)
}
