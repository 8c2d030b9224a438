//! Command-line configuration
//!
//! ```text
//! fontscan <directory> [--text] [--threshold N] [--output DIR]
//! ```
//!
//! For compatibility with older invocations a second positional argument
//! (any value) also selects text output.

use crate::error::{ScanError, ScanResult};
use fontscan_color::BinarizeOptions;
use fontscan_io::OutputFormat;
use fontscan_recog::ExtractOptions;
use std::path::{Path, PathBuf};

/// Usage text printed for configuration errors
pub const USAGE: &str = "\
usage: fontscan <directory> [--text] [--threshold N] [--output DIR]

  <directory>      directory of images to scan
  --text           save glyphs as text files of 0 and 1 instead of PNG
  --threshold N    luminance above which a pixel is foreground (default 187)
  --output DIR     where labeled glyphs are written (default: current directory)";

/// Settings for one `fontscan` invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Directory of source images
    pub input_dir: PathBuf,
    /// Directory glyph files are written to
    pub output_dir: PathBuf,
    /// Glyph file format
    pub format: OutputFormat,
    /// Extraction pipeline settings
    pub extract: ExtractOptions,
}

impl ScanConfig {
    pub fn new<P: Into<PathBuf>>(input_dir: P) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            extract: ExtractOptions::default(),
        }
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_extract(mut self, extract: ExtractOptions) -> Self {
        self.extract = extract;
        self
    }

    /// Parse arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Config`] for unknown flags, missing or
    /// malformed values, or a missing input directory argument. The
    /// directory itself is checked by [`validate`](Self::validate).
    pub fn from_args<I, S>(args: I) -> ScanResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut positional = Vec::new();
        let mut text = false;
        let mut threshold = None;
        let mut output = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--text" | "-t" => text = true,
                "--threshold" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ScanError::Config("--threshold needs a value".into()))?;
                    let parsed = value.parse::<f64>().map_err(|_| {
                        ScanError::Config(format!("invalid threshold {:?}", value))
                    })?;
                    threshold = Some(parsed);
                }
                "--output" | "-o" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ScanError::Config("--output needs a value".into()))?;
                    output = Some(PathBuf::from(value));
                }
                flag if flag.starts_with("--") => {
                    return Err(ScanError::Config(format!("unknown option {}", flag)));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let input_dir = positional
            .next()
            .ok_or_else(|| ScanError::Config("no input directory given".into()))?;
        if positional.next().is_some() {
            text = true;
        }
        if let Some(extra) = positional.next() {
            return Err(ScanError::Config(format!("unexpected argument {:?}", extra)));
        }

        let mut config = Self::new(input_dir);
        if text {
            config.format = OutputFormat::Text;
        }
        if let Some(dir) = output {
            config.output_dir = dir;
        }
        if let Some(t) = threshold {
            let binarize = BinarizeOptions::default()
                .with_threshold(t)
                .map_err(|e| ScanError::Config(e.to_string()))?;
            config.extract = config.extract.with_binarize(binarize);
        }

        Ok(config)
    }

    /// Check that the input and output directories exist.
    pub fn validate(&self) -> ScanResult<()> {
        require_dir(&self.input_dir, "input")?;
        require_dir(&self.output_dir, "output")
    }
}

fn require_dir(path: &Path, what: &str) -> ScanResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ScanError::Config(format!(
            "{} directory {} does not exist",
            what,
            path.display()
        )))
    }
}
