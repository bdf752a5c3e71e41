// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cover geometry — scale factors, scaled sizes, and crop window placement.

use image::GrayImage;
use imageproc::gradients::sobel_gradients;
use screensaver_core::CropStrategy;
use screensaver_core::error::{ConvertError, Result};
use tracing::debug;

/// Largest cover-scaled image the pipeline will allocate, in pixels.
///
/// Very long or very thin sources need an enormous cover size (a 4000x10
/// banner scaled to cover 1072x1448 is 579200x1448). Those are refused with
/// [`ConvertError::InvalidDimension`] so the batch records the file and moves
/// on instead of running out of memory.
pub const MAX_COVER_PIXELS: u64 = 100_000_000;

/// A crop rectangle in scaled-image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Size the source must be scaled to so that it covers the target box.
///
/// The larger of the two axis ratios wins, so one axis matches the target
/// and the other overflows. Each axis is rounded to the nearest pixel and
/// never falls below the target. Sizes above [`MAX_COVER_PIXELS`] are
/// rejected before anything is allocated.
pub fn cover_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<(u32, u32)> {
    if source_width == 0 || source_height == 0 {
        return Err(ConvertError::InvalidDimension(format!(
            "source image is empty ({source_width}x{source_height})"
        )));
    }
    if target_width == 0 || target_height == 0 {
        return Err(ConvertError::InvalidDimension(format!(
            "target size must be positive, got {target_width}x{target_height}"
        )));
    }

    let scale = f64::max(
        target_width as f64 / source_width as f64,
        target_height as f64 / source_height as f64,
    );
    let width = (source_width as f64 * scale)
        .round()
        .max(target_width as f64);
    let height = (source_height as f64 * scale)
        .round()
        .max(target_height as f64);
    if width * height > MAX_COVER_PIXELS as f64 {
        return Err(ConvertError::InvalidDimension(format!(
            "{source_width}x{source_height} source needs a {width}x{height} cover for \
             {target_width}x{target_height}, above the {MAX_COVER_PIXELS} pixel limit"
        )));
    }
    let (width, height) = (width as u32, height as u32);

    debug!(scale, width, height, "cover dimensions computed");
    Ok((width, height))
}

/// The window centred on both axes, using floor division for the offsets.
pub fn center_crop_box(
    scaled_width: u32,
    scaled_height: u32,
    target_width: u32,
    target_height: u32,
) -> CropBox {
    CropBox {
        left: scaled_width.saturating_sub(target_width) / 2,
        top: scaled_height.saturating_sub(target_height) / 2,
        width: target_width.min(scaled_width),
        height: target_height.min(scaled_height),
    }
}

/// Place the window according to `strategy`.
///
/// `luma` is the grayscale view of the scaled image; it is only read by
/// [`CropStrategy::Saliency`].
pub fn crop_box(
    strategy: CropStrategy,
    luma: &GrayImage,
    target_width: u32,
    target_height: u32,
) -> CropBox {
    let (width, height) = luma.dimensions();
    match strategy {
        CropStrategy::Center => center_crop_box(width, height, target_width, target_height),
        CropStrategy::Saliency => saliency_crop_box(luma, target_width, target_height),
    }
}

/// Slide the window along the overflowing axis to where the summed Sobel
/// gradient magnitude is largest. Ties go to the offset nearest the centre,
/// so a featureless image yields the same box as [`center_crop_box`].
pub fn saliency_crop_box(luma: &GrayImage, target_width: u32, target_height: u32) -> CropBox {
    let (width, height) = luma.dimensions();
    let mut crop = center_crop_box(width, height, target_width, target_height);
    if width <= target_width && height <= target_height {
        return crop;
    }

    let gradients = sobel_gradients(luma);

    if width > target_width {
        let mut columns = vec![0u64; width as usize];
        for (x, _, pixel) in gradients.enumerate_pixels() {
            columns[x as usize] += pixel.0[0] as u64;
        }
        crop.left = best_window(&columns, target_width as usize, crop.left as usize) as u32;
    }
    if height > target_height {
        let mut rows = vec![0u64; height as usize];
        for (_, y, pixel) in gradients.enumerate_pixels() {
            rows[y as usize] += pixel.0[0] as u64;
        }
        crop.top = best_window(&rows, target_height as usize, crop.top as usize) as u32;
    }

    debug!(left = crop.left, top = crop.top, "saliency window placed");
    crop
}

/// Start of the `len`-wide window over `energy` with the largest sum.
fn best_window(energy: &[u64], len: usize, center: usize) -> usize {
    let mut sum: u64 = energy[..len].iter().sum();
    let mut best = (sum, 0usize);

    for start in 1..=energy.len() - len {
        sum = sum + energy[start + len - 1] - energy[start - 1];
        let closer = start.abs_diff(center) < best.1.abs_diff(center);
        if sum > best.0 || (sum == best.0 && closer) {
            best = (sum, start);
        }
    }
    best.1
}
