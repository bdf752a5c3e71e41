// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output encoding — 8-bit grayscale PNG with the DPI pair stored in the
// `pHYs` chunk.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::GrayImage;
use screensaver_core::error::{ConvertError, Result};
use screensaver_core::types::Dpi;
use tracing::{debug, info, instrument};

/// The finished screensaver raster, tagged with the resolution to embed.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputImage {
    pixels: GrayImage,
    dpi: Dpi,
}

impl OutputImage {
    pub fn new(pixels: GrayImage, dpi: Dpi) -> Self {
        Self { pixels, dpi }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dpi(&self) -> Dpi {
        self.dpi
    }

    /// Borrow the grayscale samples.
    pub fn pixels(&self) -> &GrayImage {
        &self.pixels
    }

    /// Encode as a lossless 8-bit grayscale PNG.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let (xppu, yppu) = self.dpi.pixels_per_metre();
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width(), self.height());
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu,
                yppu,
                unit: png::Unit::Meter,
            }));
            let mut writer = encoder
                .write_header()
                .map_err(|e| ConvertError::EncodeError(format!("PNG header: {e}")))?;
            writer
                .write_image_data(self.pixels.as_raw())
                .map_err(|e| ConvertError::EncodeError(format!("PNG data: {e}")))?;
        }
        Ok(buf.into_inner())
    }

    /// Encode and write to `path`, replacing any existing file.
    #[instrument(skip(self), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        std::fs::write(path.as_ref(), &bytes).map_err(|err| {
            ConvertError::EncodeError(format!(
                "failed to write {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        debug!(bytes = bytes.len(), "PNG written");
        Ok(())
    }
}

/// Write `output` as `dir/file_name`, creating `dir` first if needed.
pub fn write_output(output: &OutputImage, dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|err| {
        ConvertError::EncodeError(format!(
            "cannot create output folder {}: {}",
            dir.display(),
            err
        ))
    })?;
    let path = dir.join(file_name);
    output.save(&path)?;
    info!(
        path = %path.display(),
        width = output.width(),
        height = output.height(),
        dpi = %output.dpi(),
        "Screensaver saved"
    );
    Ok(path)
}
