// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screensaver converter — Core types, parameter resolution, and error
// definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod params;
pub mod types;

pub use config::AppConfig;
pub use error::ConvertError;
pub use params::{InputProvider, ParameterFlags, resolve_parameters};
pub use types::*;
