// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bit-depth quantization — posterize 8-bit grayscale to 2^n levels and
// re-expand onto the full 0..=255 range.

use image::GrayImage;
use screensaver_core::error::Result;
use screensaver_core::types::{MAX_BIT_DEPTH, validate_bit_depth};
use tracing::{debug, instrument};

/// Precomputed posterization table for one bit depth.
///
/// For `levels = 2^bit_depth - 1` each sample maps to
/// `round(round(v / 255 * levels) * 255 / levels)`. Because `levels` is
/// always odd, neither rounding can land on an exact half, so the result
/// does not depend on the rounding mode. Outputs sit exactly on the
/// quantization grid, which makes the mapping idempotent.
#[derive(Debug, Clone)]
pub struct Quantizer {
    bit_depth: u32,
    lut: [u8; 256],
}

impl Quantizer {
    /// Build the table. Fails with `InvalidParameter` outside `1..=8`,
    /// before any pixel is touched.
    pub fn new(bit_depth: u32) -> Result<Self> {
        validate_bit_depth(bit_depth)?;

        let mut lut = [0u8; 256];
        if bit_depth == MAX_BIT_DEPTH {
            for (value, slot) in lut.iter_mut().enumerate() {
                *slot = value as u8;
            }
        } else {
            let levels = ((1u32 << bit_depth) - 1) as f64;
            for (value, slot) in lut.iter_mut().enumerate() {
                let index = (value as f64 / 255.0 * levels).round();
                *slot = (index * (255.0 / levels)).round().clamp(0.0, 255.0) as u8;
            }
        }
        Ok(Self { bit_depth, lut })
    }

    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Number of distinct output values (`2^bit_depth`).
    pub fn level_count(&self) -> u32 {
        1 << self.bit_depth
    }

    pub fn apply(&self, value: u8) -> u8 {
        self.lut[value as usize]
    }

    /// Quantize every sample in place. Identity at 8 bits is skipped.
    #[instrument(skip(self, image), fields(bit_depth = self.bit_depth))]
    pub fn apply_image(&self, image: &mut GrayImage) {
        if self.bit_depth == MAX_BIT_DEPTH {
            debug!("8-bit depth, quantization skipped");
            return;
        }
        for pixel in image.pixels_mut() {
            pixel.0[0] = self.lut[pixel.0[0] as usize];
        }
    }
}

/// Quantize a single sample. Convenience wrapper over [`Quantizer`].
pub fn quantize_value(value: u8, bit_depth: u32) -> Result<u8> {
    Ok(Quantizer::new(bit_depth)?.apply(value))
}
