// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the end-of-batch summary.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::ConvertError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Only this file is affected; the rest of the batch is fine.
    Skipped,
    /// The user must change a setting before running again.
    ActionRequired,
    /// Nothing can be converted until the environment is fixed.
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped => f.write_str("skipped"),
            Self::ActionRequired => f.write_str("action required"),
            Self::Fatal => f.write_str("fatal"),
        }
    }
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `ConvertError` into a `HumanError`.
pub fn humanize_error(err: &ConvertError) -> HumanError {
    match err {
        ConvertError::InvalidDimension(detail) => HumanError {
            message: "This picture cannot be fitted to the target size.".into(),
            suggestion: format!(
                "Use a width and height larger than zero, and crop very long or very thin pictures first. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        ConvertError::InvalidParameter(detail) => HumanError {
            message: "One of the conversion settings is out of range.".into(),
            suggestion: format!(
                "Bit depth must be between 1 and 8 and DPI must be positive. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        ConvertError::InputValidation(detail) => HumanError {
            message: "That answer could not be used.".into(),
            suggestion: format!("Type a whole number greater than zero. ({detail})"),
            severity: Severity::ActionRequired,
        },

        ConvertError::Config(detail) => HumanError {
            message: "The configuration file could not be used.".into(),
            suggestion: format!("Check the file path and its JSON contents. ({detail})"),
            severity: Severity::ActionRequired,
        },

        ConvertError::DecodeError(detail) => HumanError {
            message: "This picture could not be opened.".into(),
            suggestion: format!(
                "The file may be damaged or not really a JPEG/PNG. Try re-saving it. ({detail})"
            ),
            severity: Severity::Skipped,
        },

        ConvertError::EncodeError(detail) => HumanError {
            message: "The converted picture could not be saved.".into(),
            suggestion: format!(
                "Check that the output folder is writable and the disk is not full. ({detail})"
            ),
            severity: Severity::Skipped,
        },

        ConvertError::Io(io) => humanize_io_error(io),

        ConvertError::Serialization(detail) => HumanError {
            message: "Settings or report data could not be read or written.".into(),
            suggestion: format!("Check the JSON syntax. ({detail})"),
            severity: Severity::ActionRequired,
        },
    }
}

fn humanize_io_error(err: &std::io::Error) -> HumanError {
    match err.kind() {
        std::io::ErrorKind::NotFound => HumanError {
            message: "A file or folder is missing.".into(),
            suggestion: format!(
                "Make sure the input folder exists and contains your photos. ({err})"
            ),
            severity: Severity::Fatal,
        },
        std::io::ErrorKind::PermissionDenied => HumanError {
            message: "Permission denied.".into(),
            suggestion: format!("Check the folder permissions and try again. ({err})"),
            severity: Severity::Fatal,
        },
        _ => HumanError {
            message: "Something went wrong reading or writing files.".into(),
            suggestion: format!("Try again. ({err})"),
            severity: Severity::Skipped,
        },
    }
}
