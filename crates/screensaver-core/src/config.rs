// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConvertError, Result};
use crate::params::ParameterFlags;
use crate::types::{CropStrategy, DEFAULT_FILE_PREFIX};

/// Persistent converter settings, optionally loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder scanned for `.jpg`, `.jpeg`, and `.png` sources.
    pub input_dir: PathBuf,
    /// Folder the converted screensavers are written to (created if absent).
    pub output_dir: PathBuf,
    /// Prefix for generated file names.
    pub file_prefix: String,
    /// Placement of the crop window inside the cover-scaled image.
    pub crop_strategy: CropStrategy,
    /// Preset transform values; anything left out is asked for at startup.
    pub parameters: ParameterFlags,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input_images"),
            output_dir: PathBuf::from("converted_screensavers"),
            file_prefix: DEFAULT_FILE_PREFIX.to_owned(),
            crop_strategy: CropStrategy::Center,
            parameters: ParameterFlags::default(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing keys fall back to [`Default`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            ConvertError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.file_prefix.contains(['/', '\\']) {
            return Err(ConvertError::Config(format!(
                "file_prefix must not contain path separators: {:?}",
                config.file_prefix
            )));
        }
        Ok(config)
    }
}
