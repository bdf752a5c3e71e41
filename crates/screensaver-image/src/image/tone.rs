// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tone — BT.601 luma conversion and mean-centred contrast stretching.

use image::{DynamicImage, GrayImage, Luma, RgbImage};
use imageproc::stats::histogram;

/// Contrast multiplier applied around the mean luma.
pub const CONTRAST_FACTOR: f64 = 2.0;

/// BT.601 luma in integer fixed point, rounding half up:
/// `(299 R + 587 G + 114 B + 500) / 1000`.
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((weighted + 500) / 1000) as u8
}

/// Convert an RGB raster to single-channel luma.
pub fn rgb_to_luma(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma_bt601(r, g, b)])
    })
}

/// Luma view of any decoded image. 8-bit grayscale is passed through as-is;
/// everything else goes through RGB first.
pub fn to_luma(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => rgb_to_luma(&other.to_rgb8()),
    }
}

/// Arithmetic mean of all samples, computed from the 256-bin histogram.
/// An empty image has mean 0.
pub fn mean_luma(gray: &GrayImage) -> f64 {
    let bins = &histogram(gray).channels[0];
    let (count, total) = bins
        .iter()
        .enumerate()
        .fold((0u64, 0u64), |(count, total), (value, &n)| {
            (count + n as u64, total + value as u64 * n as u64)
        });
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Stretch contrast around the image mean:
/// `clamp(mean + (v - mean) * factor, 0, 255)`, rounded half away from zero.
pub fn enhance_contrast(gray: &GrayImage, factor: f64) -> GrayImage {
    let mean = mean_luma(gray);
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let stretched = mean + (value as f64 - mean) * factor;
        *slot = stretched.clamp(0.0, 255.0).round() as u8;
    }

    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = lut[pixel.0[0] as usize];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn luma_weights_are_bt601() {
        assert_eq!(luma_bt601(0, 0, 0), 0);
        assert_eq!(luma_bt601(255, 255, 255), 255);
        // 0.299 * 255 = 76.245
        assert_eq!(luma_bt601(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luma_bt601(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma_bt601(0, 0, 255), 29);
    }

    #[test]
    fn gray_rgb_keeps_its_level() {
        for v in [0u8, 1, 77, 128, 200, 255] {
            assert_eq!(luma_bt601(v, v, v), v);
        }
    }

    #[test]
    fn to_luma_passes_grayscale_through() {
        let gray = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));
        let luma = to_luma(&DynamicImage::ImageLuma8(gray.clone()));
        assert_eq!(luma, gray);
    }

    #[test]
    fn to_luma_converts_rgb() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        let luma = to_luma(&DynamicImage::ImageRgb8(rgb));
        assert!(luma.pixels().all(|p| p.0[0] == 76));
    }

    #[test]
    fn mean_of_two_levels() {
        let gray = GrayImage::from_fn(4, 1, |x, _| Luma([if x < 2 { 100 } else { 200 }]));
        assert!((mean_luma(&gray) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn stretch_doubles_distance_from_mean() {
        // Mean 150: 100 -> 50, 200 -> 250.
        let gray = GrayImage::from_fn(4, 1, |x, _| Luma([if x < 2 { 100 } else { 200 }]));
        let out = enhance_contrast(&gray, CONTRAST_FACTOR);
        assert_eq!(out.get_pixel(0, 0).0[0], 50);
        assert_eq!(out.get_pixel(3, 0).0[0], 250);
    }

    #[test]
    fn stretch_clamps_to_range() {
        let gray = GrayImage::from_fn(3, 1, |x, _| Luma([[0u8, 128, 255][x as usize]]));
        let out = enhance_contrast(&gray, CONTRAST_FACTOR);
        assert_eq!(out.get_pixel(0, 0).0[0], 0);
        assert_eq!(out.get_pixel(2, 0).0[0], 255);
    }

    #[test]
    fn half_values_round_away_from_zero() {
        // Mean 100.25; 100 -> 99.75 -> 100, 101 -> 101.75 -> 102.
        let gray = GrayImage::from_fn(4, 1, |x, _| Luma([if x == 0 { 101 } else { 100 }]));
        let out = enhance_contrast(&gray, CONTRAST_FACTOR);
        assert_eq!(out.get_pixel(0, 0).0[0], 102);
        assert_eq!(out.get_pixel(1, 0).0[0], 100);

        // Mean 100.5 exactly: 100 -> 99.5 -> 100 (half rounds up, away from zero).
        let gray = GrayImage::from_fn(2, 1, |x, _| Luma([100 + x as u8]));
        let out = enhance_contrast(&gray, CONTRAST_FACTOR);
        assert_eq!(out.get_pixel(0, 0).0[0], 100);
        assert_eq!(out.get_pixel(1, 0).0[0], 102);
    }

    #[test]
    fn stretch_preserves_mean_without_clamping() {
        // Values 96..=159 stay in range after doubling around the mean.
        let gray = GrayImage::from_fn(64, 8, |x, _| Luma([96 + x as u8]));
        let before = mean_luma(&gray);
        let after = mean_luma(&enhance_contrast(&gray, CONTRAST_FACTOR));
        assert!((before - after).abs() <= 0.5, "{before} vs {after}");
    }

    #[test]
    fn flat_image_is_unchanged() {
        let gray = GrayImage::from_pixel(5, 5, Luma([90u8]));
        assert_eq!(enhance_contrast(&gray, CONTRAST_FACTOR), gray);
    }
}
