// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch runner — converts every photo in the input folder, one at a time.
//
// A file that fails to decode or write is recorded in the summary and the
// batch moves on to the next file. Only problems that affect the whole run
// (unreadable input folder, uncreatable output folder) abort it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use screensaver_core::AppConfig;
use screensaver_core::error::{ConvertError, Result};
use screensaver_core::types::{CropStrategy, TransformParameters, output_file_name};
use serde::{Serialize, Serializer};
use tracing::{info, instrument, warn};

use crate::batch::scanner::scan_sources;
use crate::encode::write_output;
use crate::image::processor::{ScreensaverProcessor, transform};

/// Result of converting one source file.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Converted {
        index: usize,
        source: PathBuf,
        output: PathBuf,
    },
    Failed {
        index: usize,
        source: PathBuf,
        #[serde(serialize_with = "serialize_display")]
        error: ConvertError,
    },
}

impl FileOutcome {
    /// 1-based position in the batch.
    pub fn index(&self) -> usize {
        match self {
            Self::Converted { index, .. } | Self::Failed { index, .. } => *index,
        }
    }

    pub fn source(&self) -> &Path {
        match self {
            Self::Converted { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    /// File name of the source, for progress lines.
    pub fn source_name(&self) -> String {
        self.source()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Everything that happened during one run.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub parameters: TransformParameters,
    pub crop_strategy: CropStrategy,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.converted_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// The failed outcomes, in batch order.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_converted())
    }

    /// Write the summary as pretty-printed JSON.
    pub fn write_report(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        info!(path = %path.as_ref().display(), "Batch report written");
        Ok(())
    }
}

/// Converts every supported photo in one folder into another folder.
#[derive(Debug, Clone)]
pub struct BatchRunner {
    input_dir: PathBuf,
    output_dir: PathBuf,
    file_prefix: String,
    crop_strategy: CropStrategy,
    params: TransformParameters,
}

impl BatchRunner {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        params: TransformParameters,
    ) -> Self {
        let defaults = AppConfig::default();
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            file_prefix: defaults.file_prefix,
            crop_strategy: defaults.crop_strategy,
            params,
        }
    }

    /// Build a runner from the folders, prefix, and crop strategy in `config`.
    pub fn from_config(config: &AppConfig, params: TransformParameters) -> Self {
        Self {
            input_dir: config.input_dir.clone(),
            output_dir: config.output_dir.clone(),
            file_prefix: config.file_prefix.clone(),
            crop_strategy: config.crop_strategy,
            params,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_crop_strategy(mut self, strategy: CropStrategy) -> Self {
        self.crop_strategy = strategy;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the batch without progress reporting.
    pub fn run(&self) -> Result<BatchSummary> {
        self.run_with_progress(|_, _| {})
    }

    /// Run the batch, calling `on_file(outcome, total)` after every file.
    #[instrument(skip_all, fields(input = %self.input_dir.display(), output = %self.output_dir.display()))]
    pub fn run_with_progress<F>(&self, mut on_file: F) -> Result<BatchSummary>
    where
        F: FnMut(&FileOutcome, usize),
    {
        let started_at = Utc::now();
        std::fs::create_dir_all(&self.output_dir)?;
        let sources = scan_sources(&self.input_dir)?;
        let total = sources.len();
        info!(
            total,
            params = ?self.params,
            crop = %self.crop_strategy,
            "Starting batch"
        );

        let mut outcomes = Vec::with_capacity(total);
        for (offset, source) in sources.into_iter().enumerate() {
            let index = offset + 1;
            let outcome = match self.convert_one(index, &source) {
                Ok(output) => FileOutcome::Converted {
                    index,
                    source,
                    output,
                },
                Err(error) if !error.is_per_file() => return Err(error),
                Err(error) => {
                    warn!(
                        index,
                        source = %source.display(),
                        %error,
                        "Conversion failed, continuing"
                    );
                    FileOutcome::Failed {
                        index,
                        source,
                        error,
                    }
                }
            };
            on_file(&outcome, total);
            outcomes.push(outcome);
        }

        let summary = BatchSummary {
            started_at,
            finished_at: Utc::now(),
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            parameters: self.params,
            crop_strategy: self.crop_strategy,
            outcomes,
        };
        info!(
            converted = summary.converted_count(),
            failed = summary.failed_count(),
            "Batch complete"
        );
        Ok(summary)
    }

    /// Decode, transform, and write one file. The decoded image and all
    /// working buffers are dropped before returning.
    fn convert_one(&self, index: usize, source: &Path) -> Result<PathBuf> {
        let source_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let decoded = ScreensaverProcessor::open(source)?.into_dynamic();
        let output = transform(decoded, &self.params, self.crop_strategy)?;
        let file_name = output_file_name(&self.file_prefix, index, &source_name);
        write_output(&output, &self.output_dir, &file_name)
    }
}

fn serialize_display<S: Serializer>(
    error: &ConvertError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}
