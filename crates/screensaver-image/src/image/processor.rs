// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Screensaver processor — cover resize, crop, contrast stretch, and
// bit-depth quantization. Operates on in-memory images using the `image`
// and `imageproc` crates.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use screensaver_core::error::{ConvertError, Result};
use screensaver_core::types::{CropStrategy, Dpi, TransformParameters};
use tracing::{debug, info, instrument};

use crate::encode::OutputImage;
use crate::image::geometry::{center_crop_box, cover_dimensions, crop_box};
use crate::image::quantize::Quantizer;
use crate::image::tone::{CONTRAST_FACTOR, enhance_contrast, to_luma};

/// Run the complete pipeline on one decoded image.
///
/// The returned raster is exactly `target_width x target_height`, 8-bit
/// grayscale, and limited to `2^bit_depth` distinct values.
#[instrument(skip(source), fields(src_w = source.width(), src_h = source.height()))]
pub fn transform(
    source: DynamicImage,
    params: &TransformParameters,
    strategy: CropStrategy,
) -> Result<OutputImage> {
    let quantizer = Quantizer::new(params.bit_depth())?;
    let output = ScreensaverProcessor::from_dynamic(source)
        .cover_crop(params.target_width(), params.target_height(), strategy)?
        .enhance_contrast()
        .quantize(&quantizer)
        .into_output(params.dpi());
    Ok(output)
}

/// Image pipeline operating on a single in-memory image.
///
/// Each method consumes `self` and returns a new `ScreensaverProcessor`
/// wrapping the transformed image, enabling method chaining.
///
/// ```ignore
/// let output = ScreensaverProcessor::open("photo.jpg")?
///     .cover_crop(1072, 1448, CropStrategy::Center)?
///     .enhance_contrast()
///     .quantize(&Quantizer::new(4)?)
///     .into_output(Dpi { x: 300, y: 300 });
/// ```
pub struct ScreensaverProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ScreensaverProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            ConvertError::DecodeError(format!("{}: {}", path.as_ref().display(), err))
        })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Scale the image so it covers `target_width` x `target_height`, using
    /// Lanczos3 resampling. The image is flattened to RGB first; alpha is
    /// dropped. No resampling happens when the size already matches.
    #[instrument(skip(self))]
    pub fn cover_resize(self, target_width: u32, target_height: u32) -> Result<Self> {
        let (width, height) = cover_dimensions(
            self.image.width(),
            self.image.height(),
            target_width,
            target_height,
        )?;
        let rgb = DynamicImage::ImageRgb8(self.image.to_rgb8());
        if (width, height) == (rgb.width(), rgb.height()) {
            debug!("Source already at cover size, resampling skipped");
            return Ok(Self { image: rgb });
        }

        info!(
            from_w = rgb.width(),
            from_h = rgb.height(),
            to_w = width,
            to_h = height,
            "Cover-scaling image"
        );
        let resized = rgb.resize_exact(width, height, FilterType::Lanczos3);
        Ok(Self { image: resized })
    }

    /// Cut a `target_width` x `target_height` window out of a cover-scaled
    /// image, placed according to `strategy`.
    #[instrument(skip(self))]
    pub fn crop_to(
        self,
        target_width: u32,
        target_height: u32,
        strategy: CropStrategy,
    ) -> Result<Self> {
        if self.image.width() < target_width || self.image.height() < target_height {
            return Err(ConvertError::InvalidDimension(format!(
                "{}x{} image cannot hold a {}x{} crop",
                self.image.width(),
                self.image.height(),
                target_width,
                target_height
            )));
        }

        let window = match strategy {
            CropStrategy::Center => center_crop_box(
                self.image.width(),
                self.image.height(),
                target_width,
                target_height,
            ),
            CropStrategy::Saliency => {
                crop_box(strategy, &to_luma(&self.image), target_width, target_height)
            }
        };
        info!(
            left = window.left,
            top = window.top,
            width = window.width,
            height = window.height,
            "Cropping image"
        );

        let cropped = self
            .image
            .crop_imm(window.left, window.top, window.width, window.height);
        Ok(Self { image: cropped })
    }

    /// [`cover_resize`](Self::cover_resize) followed by
    /// [`crop_to`](Self::crop_to).
    pub fn cover_crop(
        self,
        target_width: u32,
        target_height: u32,
        strategy: CropStrategy,
    ) -> Result<Self> {
        self.cover_resize(target_width, target_height)?
            .crop_to(target_width, target_height, strategy)
    }

    /// Convert to BT.601 luma and double the contrast around the mean.
    #[instrument(skip(self))]
    pub fn enhance_contrast(self) -> Self {
        let gray = to_luma(&self.image);
        let enhanced = enhance_contrast(&gray, CONTRAST_FACTOR);
        debug!("Contrast enhanced");
        Self {
            image: DynamicImage::ImageLuma8(enhanced),
        }
    }

    /// Posterize the grayscale samples with `quantizer`. The image is
    /// converted to luma first if it is not grayscale yet.
    #[instrument(skip_all, fields(bit_depth = quantizer.bit_depth()))]
    pub fn quantize(self, quantizer: &Quantizer) -> Self {
        let mut gray = self.into_gray();
        quantizer.apply_image(&mut gray);
        Self {
            image: DynamicImage::ImageLuma8(gray),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Finish the pipeline, tagging the grayscale raster with `dpi`.
    pub fn into_output(self, dpi: Dpi) -> OutputImage {
        OutputImage::new(self.into_gray(), dpi)
    }

    fn into_gray(self) -> GrayImage {
        match self.image {
            DynamicImage::ImageLuma8(gray) => gray,
            other => to_luma(&other),
        }
    }
}
