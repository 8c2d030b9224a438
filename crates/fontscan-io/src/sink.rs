//! File-backed labeling sink
//!
//! [`FileSink`] stores each glyph it receives in a directory. The glyph is
//! first written under its identity (`<identity>.<ext>`), then a
//! [`Labeler`] is asked for a name and the file is renamed to
//! `<label>.<ext>`. Candidates that are not filename-safe are rejected and
//! the labeler is asked again.
//!
//! An existing file with the same label is replaced.

use crate::{IoError, IoResult};
use fontscan_core::GlyphBitmap;
use fontscan_recog::{GlyphIdentity, Label, LabelingSink, SinkError};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// On-disk format of stored glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// 1-bit grayscale PNG
    #[default]
    Png,
    /// `0`/`1` text rows
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Text => "txt",
        }
    }

    /// Format for a file extension, case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Write a glyph file in the given format.
pub fn write_glyph<P: AsRef<Path>>(
    glyph: &GlyphBitmap,
    path: P,
    format: OutputFormat,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        #[cfg(feature = "png-format")]
        OutputFormat::Png => crate::png::write_glyph_png(glyph, writer),
        #[cfg(not(feature = "png-format"))]
        OutputFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not enabled".to_string(),
        )),
        OutputFormat::Text => crate::text::write_glyph_text(glyph, writer),
    }
}

/// Source of operator-chosen labels
pub trait Labeler {
    /// Ask for a label for `glyph`.
    ///
    /// The returned candidate is validated by the caller; see
    /// [`rejected`](Self::rejected).
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Cancelled`] if the operator gives up, or an I/O
    /// error from the prompt.
    fn label(&mut self, glyph: &GlyphBitmap) -> Result<String, SinkError>;

    /// Called when a candidate was not usable, before asking again.
    fn rejected(&mut self, _candidate: &str) {}
}

impl<F> Labeler for F
where
    F: FnMut(&GlyphBitmap) -> Result<String, SinkError>,
{
    fn label(&mut self, glyph: &GlyphBitmap) -> Result<String, SinkError> {
        self(glyph)
    }
}

/// Labeling sink that persists glyphs as files in one directory
#[derive(Debug)]
pub struct FileSink<L> {
    dir: PathBuf,
    format: OutputFormat,
    labeler: L,
}

impl<L: Labeler> FileSink<L> {
    /// Create a sink writing into `dir`, which must already exist.
    pub fn new<P: Into<PathBuf>>(dir: P, format: OutputFormat, labeler: L) -> Self {
        Self {
            dir: dir.into(),
            format,
            labeler,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Path a glyph with this file stem would be stored at
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", stem, self.format.extension()))
    }

    /// Keep asking until the labeler produces a valid label.
    fn ask(&mut self, glyph: &GlyphBitmap) -> Result<Label, SinkError> {
        loop {
            let candidate = self.labeler.label(glyph)?;
            match Label::new(candidate) {
                Ok(label) => return Ok(label),
                Err(SinkError::InvalidLabel(bad)) => {
                    warn!("rejected label {:?}: not usable as a file name", bad);
                    self.labeler.rejected(&bad);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl<L: Labeler> LabelingSink for FileSink<L> {
    fn present_and_label(
        &mut self,
        glyph: &GlyphBitmap,
        key: GlyphIdentity,
    ) -> Result<Label, SinkError> {
        let temp = self.path_for(&key.to_key());
        write_glyph(glyph, &temp, self.format).map_err(into_sink_error)?;
        debug!("stored glyph {} at {}", key, temp.display());

        let label = match self.ask(glyph) {
            Ok(label) => label,
            Err(e) => {
                discard(&temp);
                return Err(e);
            }
        };

        let dest = self.path_for(label.as_str());
        if dest.exists() {
            info!("replacing existing glyph {}", dest.display());
        }
        if let Err(e) = fs::rename(&temp, &dest) {
            discard(&temp);
            return Err(SinkError::Io(e));
        }
        info!("glyph {} saved as {}", key, dest.display());

        Ok(label)
    }
}

/// Remove a temporary glyph file, logging instead of failing.
fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("could not remove {}: {}", path.display(), e);
    }
}

fn into_sink_error(err: IoError) -> SinkError {
    match err {
        IoError::Io(e) => SinkError::Io(e),
        other => SinkError::Persist(other.to_string()),
    }
}
