// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer for the CLI binary.

pub mod console;
pub mod prompt;

pub use prompt::TerminalPrompt;
