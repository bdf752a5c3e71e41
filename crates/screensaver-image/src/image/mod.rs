// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — cover geometry, crop placement, tone, and quantization.

pub mod geometry;
pub mod processor;
pub mod quantize;
pub mod tone;

pub use processor::ScreensaverProcessor;
