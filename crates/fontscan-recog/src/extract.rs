//! Per-image glyph extraction pipeline
//!
//! ```text
//! RgbSource -> binarize -> PixelGrid -> discover_regions -> Region
//!           -> normalize_region -> GlyphBitmap -> Deduplicator -> LabelingSink
//! ```
//!
//! One call to [`GlyphExtractor::run`] is one run: it owns its grid and a
//! fresh [`Deduplicator`], and both are dropped when it returns. Nothing is
//! shared between runs.
//!
//! A sink error stops the run immediately. Glyphs the sink already stored
//! are left in place.

use crate::dedup::{Admission, Deduplicator, GlyphIdentity};
use crate::error::RecogResult;
use crate::normalize::normalize_region;
use crate::sink::{Label, LabelingSink};
use fontscan_color::{BinarizeOptions, binarize_with};
use fontscan_core::{GlyphBitmap, PixelGrid, RgbSource};
use fontscan_region::{ConnectivityType, discover_regions};
use log::{debug, info};

/// Options for glyph extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Binarization settings
    pub binarize: BinarizeOptions,
    /// Connectivity used to group pixels into regions
    pub connectivity: ConnectivityType,
    /// Regions with fewer pixels are dropped before normalization
    pub min_region_size: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            binarize: BinarizeOptions::default(),
            connectivity: ConnectivityType::EightWay,
            min_region_size: 1,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binarize(mut self, binarize: BinarizeOptions) -> Self {
        self.binarize = binarize;
        self
    }

    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the minimum region size; values below 1 are treated as 1.
    pub fn with_min_region_size(mut self, min_region_size: usize) -> Self {
        self.min_region_size = min_region_size.max(1);
        self
    }
}

/// A glyph the sink accepted, with the label it was stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledGlyph {
    pub label: Label,
    pub identity: GlyphIdentity,
    pub glyph: GlyphBitmap,
}

/// Summary of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Regions discovered
    pub regions: usize,
    /// Regions dropped for being smaller than `min_region_size`
    pub skipped: usize,
    /// Glyphs dropped as duplicates
    pub duplicates: usize,
    /// Unique glyphs, in the order they were labeled
    pub labeled: Vec<LabeledGlyph>,
}

impl ExtractionReport {
    /// Number of unique glyphs forwarded to the sink
    pub fn unique(&self) -> usize {
        self.labeled.len()
    }
}

/// Runs the extraction pipeline over one image at a time
#[derive(Debug, Clone, Default)]
pub struct GlyphExtractor {
    options: ExtractOptions,
}

impl GlyphExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract the unique glyphs of an image without labeling them.
    ///
    /// # Errors
    ///
    /// Returns an error if binarization or normalization fails.
    pub fn extract<S: RgbSource + ?Sized>(&self, image: &S) -> RecogResult<Vec<GlyphBitmap>> {
        let grid = binarize_with(image, &self.options.binarize)?;
        self.extract_grid(grid)
    }

    /// Extract the unique glyphs of an already binarized grid.
    ///
    /// # Errors
    ///
    /// Returns an error if normalization fails.
    pub fn extract_grid(&self, grid: PixelGrid) -> RecogResult<Vec<GlyphBitmap>> {
        let mut unique = Vec::new();
        self.process(grid, |glyph, _| {
            unique.push(glyph.clone());
            Ok(())
        })?;
        Ok(unique)
    }

    /// Extract an image and hand every unique glyph to `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if binarization or normalization fails, or the first
    /// error the sink reports.
    pub fn run<S, K>(&self, image: &S, sink: &mut K) -> RecogResult<ExtractionReport>
    where
        S: RgbSource + ?Sized,
        K: LabelingSink + ?Sized,
    {
        let grid = binarize_with(image, &self.options.binarize)?;
        self.run_grid(grid, sink)
    }

    /// Like [`run`](Self::run) for an already binarized grid.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_grid<K>(&self, grid: PixelGrid, sink: &mut K) -> RecogResult<ExtractionReport>
    where
        K: LabelingSink + ?Sized,
    {
        let mut labeled = Vec::new();
        let mut report = self.process(grid, |glyph, identity| {
            let label = sink.present_and_label(glyph, identity)?;
            debug!("glyph {} labeled {:?}", identity, label.as_str());
            labeled.push(LabeledGlyph {
                label,
                identity,
                glyph: glyph.clone(),
            });
            Ok(())
        })?;
        report.labeled = labeled;
        Ok(report)
    }

    /// Shared driver: discover, normalize, dedup, then call `forward` for
    /// each unique glyph. The returned report has an empty `labeled` list.
    fn process<F>(&self, mut grid: PixelGrid, mut forward: F) -> RecogResult<ExtractionReport>
    where
        F: FnMut(&GlyphBitmap, GlyphIdentity) -> RecogResult<()>,
    {
        let (width, height) = (grid.width(), grid.height());
        let regions = discover_regions(&mut grid, self.options.connectivity);
        drop(grid);

        let mut dedup = Deduplicator::new();
        let mut report = ExtractionReport {
            regions: regions.len(),
            ..Default::default()
        };
        let mut forwarded = 0usize;

        for region in &regions {
            if region.len() < self.options.min_region_size {
                report.skipped += 1;
                continue;
            }

            let glyph = normalize_region(region)?;
            match dedup.admit(&glyph) {
                Admission::Unique(identity) => {
                    forward(&glyph, identity)?;
                    forwarded += 1;
                }
                Admission::Duplicate(identity) => {
                    debug!("glyph {} at {:?} is a duplicate", identity, glyph.origin());
                }
            }
        }

        report.duplicates = dedup.duplicates();
        info!(
            "{}x{} image: {} regions, {} unique glyphs, {} duplicates, {} skipped",
            width, height, report.regions, forwarded, report.duplicates, report.skipped
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RecogError, SinkError};
    use fontscan_core::{Point, RgbImage};

    fn grid(w: u32, h: u32, on: &[(u32, u32)]) -> PixelGrid {
        let mut g = PixelGrid::new(w, h).unwrap();
        for &(x, y) in on {
            g.set(x, y, true).unwrap();
        }
        g
    }

    #[test]
    fn test_extract_grid_dedups() {
        let g = grid(5, 5, &[(0, 0), (4, 4)]);
        let glyphs = GlyphExtractor::default().extract_grid(g).unwrap();
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].origin(), Point::new(0, 0));
    }

    #[test]
    fn test_four_way_splits_diagonal() {
        let diagonal = [(0, 0), (1, 1), (2, 2)];
        let mut sink = |_: &GlyphBitmap, _: GlyphIdentity| Label::new("-");

        let eight = GlyphExtractor::default()
            .run_grid(grid(3, 3, &diagonal), &mut sink)
            .unwrap();
        assert_eq!(eight.regions, 1);
        assert_eq!(eight.labeled[0].glyph.width(), 3);

        let four = GlyphExtractor::new(
            ExtractOptions::new().with_connectivity(ConnectivityType::FourWay),
        )
        .run_grid(grid(3, 3, &diagonal), &mut sink)
        .unwrap();
        assert_eq!(four.regions, 3);
        assert_eq!(four.unique(), 1);
        assert_eq!(four.labeled[0].glyph.width(), 1);
    }

    #[test]
    fn test_min_region_size() {
        // a 1-pixel speck and a 3-pixel bar
        let g = grid(6, 3, &[(0, 0), (2, 2), (3, 2), (4, 2)]);
        let extractor = GlyphExtractor::new(ExtractOptions::new().with_min_region_size(2));
        let mut sink = |_: &GlyphBitmap, _: GlyphIdentity| Label::new("-");
        let report = extractor.run_grid(g, &mut sink).unwrap();
        assert_eq!(report.regions, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.unique(), 1);
        assert_eq!(report.labeled[0].glyph.width(), 3);
    }

    #[test]
    fn test_sink_error_stops_run() {
        let g = grid(5, 1, &[(0, 0), (2, 0), (3, 0)]);
        let mut calls = 0;
        let mut sink = |_: &GlyphBitmap, _: GlyphIdentity| {
            calls += 1;
            Err::<Label, _>(SinkError::Cancelled)
        };
        let err = GlyphExtractor::default().run_grid(g, &mut sink).unwrap_err();
        assert!(matches!(err, RecogError::Sink(SinkError::Cancelled)));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_run_on_image() {
        let mut img = RgbImage::new(3, 3).unwrap();
        img.set_rgb(1, 1, 255, 255, 255).unwrap();
        let mut seen = Vec::new();
        let mut sink = |g: &GlyphBitmap, _: GlyphIdentity| {
            seen.push(g.clone());
            Label::new("dot")
        };
        let report = GlyphExtractor::default().run(&img, &mut sink).unwrap();
        assert_eq!(report.unique(), 1);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].origin(), Point::new(1, 1));
        assert_eq!(report.labeled[0].label.as_str(), "dot");
    }

    #[test]
    fn test_with_min_region_size_floor() {
        assert_eq!(ExtractOptions::new().with_min_region_size(0).min_region_size, 1);
    }
}
