// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// screensaver-image — Image pipeline for the screensaver converter.
//
// Provides the per-image transform (cover resize, crop, grayscale contrast
// stretch, bit-depth quantization), PNG output with DPI metadata, and the
// batch runner that applies the transform to every photo in a folder.

pub mod batch;
pub mod encode;
pub mod image;

// Re-export the primary structs so callers can use `screensaver_image::BatchRunner` etc.
pub use batch::runner::{BatchRunner, BatchSummary, FileOutcome};
pub use encode::OutputImage;
pub use crate::image::processor::{ScreensaverProcessor, transform};
pub use crate::image::quantize::Quantizer;
