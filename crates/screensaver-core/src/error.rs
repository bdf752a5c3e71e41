// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the screensaver converter.

use thiserror::Error;

/// Top-level error type for all conversion operations.
#[derive(Debug, Error)]
pub enum ConvertError {
    // -- Parameter errors --
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid input: {0}")]
    InputValidation(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Image errors --
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("failed to encode image: {0}")]
    EncodeError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    /// Whether the error concerns a single source file, as opposed to the
    /// whole run. The batch runner records these and keeps going.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::DecodeError(_) | Self::EncodeError(_) | Self::InvalidDimension(_) | Self::Io(_)
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ConvertError>;
