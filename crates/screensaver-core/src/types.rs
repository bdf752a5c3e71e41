// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the screensaver converter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Highest supported bit depth. Grayscale samples are 8-bit before
/// quantization, so anything above this has nothing left to reduce.
pub const MAX_BIT_DEPTH: u32 = 8;

/// Default prefix for generated file names (`bg_ss01_<stem>.png`).
pub const DEFAULT_FILE_PREFIX: &str = "bg_ss";

/// Largest DPI whose pixels-per-metre value still fits the `u32` fields of
/// PNG's `pHYs` chunk.
pub const MAX_DPI: u32 = 109_092_169;

const METRES_PER_INCH: f64 = 0.0254;

/// Validated geometry, resolution, and bit depth for one conversion run.
///
/// The only way to obtain one is [`TransformParameters::new`], so every
/// value in circulation already satisfies the invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformParameters {
    target_width: u32,
    target_height: u32,
    dpi: Dpi,
    bit_depth: u32,
}

impl TransformParameters {
    /// Validate and build a parameter set.
    ///
    /// Fails with [`ConvertError::InvalidDimension`] for a zero width or
    /// height and with [`ConvertError::InvalidParameter`] for a DPI outside
    /// `1..=MAX_DPI` or a bit depth outside `1..=8`.
    pub fn new(
        target_width: u32,
        target_height: u32,
        dpi_x: u32,
        dpi_y: u32,
        bit_depth: u32,
    ) -> Result<Self> {
        if target_width == 0 || target_height == 0 {
            return Err(ConvertError::InvalidDimension(format!(
                "target size must be positive, got {target_width}x{target_height}"
            )));
        }
        if dpi_x == 0 || dpi_y == 0 {
            return Err(ConvertError::InvalidParameter(format!(
                "DPI must be positive, got {dpi_x}x{dpi_y}"
            )));
        }
        if dpi_x > MAX_DPI || dpi_y > MAX_DPI {
            return Err(ConvertError::InvalidParameter(format!(
                "DPI must be at most {MAX_DPI}, got {dpi_x}x{dpi_y}"
            )));
        }
        validate_bit_depth(bit_depth)?;
        Ok(Self {
            target_width,
            target_height,
            dpi: Dpi { x: dpi_x, y: dpi_y },
            bit_depth,
        })
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn target_height(&self) -> u32 {
        self.target_height
    }

    pub fn dpi(&self) -> Dpi {
        self.dpi
    }

    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }
}

/// Check that `bit_depth` lies in `1..=8`.
pub fn validate_bit_depth(bit_depth: u32) -> Result<()> {
    if (1..=MAX_BIT_DEPTH).contains(&bit_depth) {
        Ok(())
    } else {
        Err(ConvertError::InvalidParameter(format!(
            "bit depth must be between 1 and {MAX_BIT_DEPTH}, got {bit_depth}"
        )))
    }
}

/// Horizontal and vertical dots-per-inch written into the output header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dpi {
    pub x: u32,
    pub y: u32,
}

impl Dpi {
    /// Convert to pixels per metre, the unit PNG's `pHYs` chunk stores.
    pub fn pixels_per_metre(&self) -> (u32, u32) {
        let convert = |dpi: u32| (dpi as f64 / METRES_PER_INCH).round() as u32;
        (convert(self.x), convert(self.y))
    }
}

impl std::fmt::Display for Dpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} dpi", self.x, self.y)
    }
}

/// How the crop window is placed inside the cover-scaled image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStrategy {
    /// Centre the window on both axes.
    #[default]
    Center,
    /// Slide the window along the overflowing axis towards the region with
    /// the most edge detail.
    Saliency,
}

impl std::str::FromStr for CropStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" | "centre" => Ok(Self::Center),
            "saliency" => Ok(Self::Saliency),
            other => Err(format!(
                "unknown crop strategy '{other}' (expected 'center' or 'saliency')"
            )),
        }
    }
}

impl std::fmt::Display for CropStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Center => f.write_str("center"),
            Self::Saliency => f.write_str("saliency"),
        }
    }
}

/// Source formats accepted by the directory scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Build the output file name for the `index`-th (1-based) source file.
///
/// The source extension is replaced with `.png`, so `sunset.png` at index 3
/// becomes `bg_ss03_sunset.png`.
pub fn output_file_name(prefix: &str, index: usize, source_name: &str) -> String {
    let stem = Path::new(source_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_name.to_owned());
    format!("{prefix}{index:02}_{stem}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters_are_accepted() {
        let params = TransformParameters::new(600, 800, 300, 300, 4).expect("valid");
        assert_eq!(params.target_width(), 600);
        assert_eq!(params.target_height(), 800);
        assert_eq!(params.dpi(), Dpi { x: 300, y: 300 });
        assert_eq!(params.bit_depth(), 4);
    }

    #[test]
    fn zero_dimension_is_invalid_dimension() {
        let err = TransformParameters::new(0, 800, 300, 300, 4).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDimension(_)));
        let err = TransformParameters::new(600, 0, 300, 300, 4).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidDimension(_)));
    }

    #[test]
    fn bit_depth_nine_is_invalid_parameter() {
        let err = TransformParameters::new(600, 800, 300, 300, 9).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidParameter(_)));
    }

    #[test]
    fn bit_depth_zero_is_invalid_parameter() {
        let err = TransformParameters::new(600, 800, 300, 300, 0).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidParameter(_)));
    }

    #[test]
    fn zero_dpi_is_invalid_parameter() {
        let err = TransformParameters::new(600, 800, 0, 300, 4).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidParameter(_)));
    }

    #[test]
    fn dpi_beyond_phys_range_is_invalid_parameter() {
        let err = TransformParameters::new(600, 800, 300, MAX_DPI + 1, 4).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidParameter(_)));

        let params = TransformParameters::new(600, 800, MAX_DPI, MAX_DPI, 4).expect("valid");
        let (x, y) = params.dpi().pixels_per_metre();
        assert_eq!(x, y);
        assert!(x < u32::MAX, "largest DPI must not saturate");
        assert!(x > 4_294_967_000);
    }

    #[test]
    fn dpi_converts_to_pixels_per_metre() {
        // 300 / 0.0254 = 11811.02
        assert_eq!(Dpi { x: 300, y: 300 }.pixels_per_metre(), (11811, 11811));
        // 72 / 0.0254 = 2834.65
        assert_eq!(Dpi { x: 72, y: 167 }.pixels_per_metre(), (2835, 6575));
    }

    #[test]
    fn third_file_name_matches_convention() {
        assert_eq!(
            output_file_name(DEFAULT_FILE_PREFIX, 3, "sunset.png"),
            "bg_ss03_sunset.png"
        );
    }

    #[test]
    fn file_name_replaces_jpeg_extension_and_widens_index() {
        assert_eq!(output_file_name("bg_ss", 7, "Beach.JPEG"), "bg_ss07_Beach.png");
        assert_eq!(output_file_name("bg_ss", 123, "a.jpg"), "bg_ss123_a.png");
    }

    #[test]
    fn same_stem_different_index_does_not_collide() {
        let a = output_file_name("bg_ss", 1, "photo.jpg");
        let b = output_file_name("bg_ss", 2, "photo.png");
        assert_ne!(a, b);
    }

    #[test]
    fn source_format_is_case_insensitive() {
        assert_eq!(SourceFormat::from_extension("JPG"), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_extension("jpeg"), Some(SourceFormat::Jpeg));
        assert_eq!(SourceFormat::from_extension("PnG"), Some(SourceFormat::Png));
        assert_eq!(SourceFormat::from_extension("gif"), None);
        assert_eq!(SourceFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(SourceFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn crop_strategy_parses_and_displays() {
        assert_eq!("center".parse::<CropStrategy>(), Ok(CropStrategy::Center));
        assert_eq!("Saliency".parse::<CropStrategy>(), Ok(CropStrategy::Saliency));
        assert!("random".parse::<CropStrategy>().is_err());
        assert_eq!(CropStrategy::Saliency.to_string(), "saliency");
        assert_eq!(CropStrategy::default(), CropStrategy::Center);
    }
}
