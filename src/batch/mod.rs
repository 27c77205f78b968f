//! Batch processing of detection dumps into per-page artifacts.
//!
//! Every input file is processed on its own: a file that fails to load or
//! rebuild is logged and recorded in the [`BatchReport`], and the remaining
//! files carry on.
//!
//! # Example
//!
//! ```no_run
//! use tablegrid::batch::{BatchOptions, BatchProcessor, OutputFormat};
//!
//! fn main() -> tablegrid::Result<()> {
//!     let options = BatchOptions::new().with_format(OutputFormat::Html);
//!     let processor = BatchProcessor::new("results", options);
//!     let report = processor.process_path("dumps/")?;
//!     println!("{} artifacts, {} failures", report.outputs.len(), report.failures.len());
//!     Ok(())
//! }
//! ```

mod format;
mod input;

pub use format::{artifact_name, OutputFormat};
pub use input::{DetectionDump, PageInput, TableInput};

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::recognize::RecognizeOptions;
use crate::render::RenderOptions;

/// Default minimum detection score.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.4;

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Artifact format
    pub format: OutputFormat,

    /// Reconstruction options
    pub recognize: RecognizeOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// Detections scoring below this are discarded
    pub score_threshold: f32,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set reconstruction options.
    pub fn with_recognize_options(mut self, options: RecognizeOptions) -> Self {
        self.recognize = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the minimum detection score, clamped to `[0, 1]`.
    pub fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            recognize: RecognizeOptions::default(),
            render: RenderOptions::default(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

/// A file that could not be processed.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    /// Input file
    pub path: PathBuf,
    /// Error description
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of input files attempted
    pub files: usize,

    /// Written artifacts, in input order
    pub outputs: Vec<PathBuf>,

    /// Files that failed
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Check if every file succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of files that succeeded.
    pub fn succeeded(&self) -> usize {
        self.files - self.failures.len()
    }
}

/// Processes detection dumps into per-page artifacts.
pub struct BatchProcessor {
    output_dir: PathBuf,
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a processor writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, options: BatchOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    /// Get the options in use.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// List the input files under `path`.
    ///
    /// A file path yields itself; a directory yields every file below it,
    /// recursively, in sorted order.
    pub fn collect_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )));
        }

        let mut files = Vec::new();
        if path.is_dir() {
            collect_files(path, &mut files)?;
            files.sort();
        } else {
            files.push(path.to_path_buf());
        }
        Ok(files)
    }

    /// Process a file or a directory of files.
    ///
    /// # Errors
    ///
    /// Fails only if the input path does not exist or the output directory
    /// cannot be created. Per-file failures are recorded in the report.
    pub fn process_path<P: AsRef<Path>>(&self, path: P) -> Result<BatchReport> {
        let files = Self::collect_inputs(path)?;
        self.process_files(&files, |_| {})
    }

    /// Process the given files, calling `on_file` after each one.
    pub fn process_files<F>(&self, files: &[PathBuf], on_file: F) -> Result<BatchReport>
    where
        F: Fn(&Path) + Sync,
    {
        fs::create_dir_all(&self.output_dir)?;
        log::info!("Output directory: {}", self.output_dir.display());

        let run = |file: &PathBuf| {
            log::info!("Processing file: {}", file.display());
            let result = self.process_file(file);
            on_file(file);
            result
        };

        let results: Vec<Result<Vec<PathBuf>>> = if self.options.recognize.parallel {
            files.par_iter().map(run).collect()
        } else {
            files.iter().map(run).collect()
        };

        let mut report = BatchReport {
            files: files.len(),
            ..Default::default()
        };
        for (file, result) in files.iter().zip(results) {
            match result {
                Ok(outputs) => report.outputs.extend(outputs),
                Err(e) => {
                    log::warn!("Failed to process {}: {}", file.display(), e);
                    report.failures.push(BatchFailure {
                        path: file.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Process one dump, writing one artifact per page.
    pub fn process_file(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let dump = DetectionDump::from_path(path)?;
        let document = dump.recognize(&self.options.recognize, self.options.score_threshold)?;

        let mut outputs = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let content = self.options.format.render(page, &self.options.render)?;
            let out_path = self
                .output_dir
                .join(artifact_name(path, page.number, self.options.format));
            fs::write(&out_path, content)?;
            log::info!("Output file: {}", out_path.display());
            outputs.push(out_path);
        }
        Ok(outputs)
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}
