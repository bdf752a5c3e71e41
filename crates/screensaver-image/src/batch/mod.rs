// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch module — folder scanning and sequential conversion of every photo.

pub mod runner;
pub mod scanner;

pub use runner::{BatchRunner, BatchSummary, FileOutcome};
pub use scanner::scan_sources;
