// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line flags and their merge with the optional config file.

use std::path::PathBuf;

use clap::Parser;
use screensaver_core::error::Result;
use screensaver_core::{AppConfig, CropStrategy, ParameterFlags};

#[derive(Debug, Parser)]
#[command(name = "kindle-screensaver")]
#[command(version, about = "Convert images into Kindle-ready screensavers.")]
pub struct Cli {
    /// Target height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Target width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Horizontal DPI
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi_x: Option<u32>,

    /// Vertical DPI
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi_y: Option<u32>,

    /// Bit depth (1-8, e.g. 4 for 16 gray levels)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub bit_depth: Option<u32>,

    /// Folder containing the source photos [default: input_images]
    #[arg(long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Folder for converted screensavers [default: converted_screensavers]
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output file name prefix [default: bg_ss]
    #[arg(long)]
    pub prefix: Option<String>,

    /// Crop placement: "center" or "saliency" [default: center]
    #[arg(long)]
    pub crop: Option<CropStrategy>,

    /// JSON configuration file; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a JSON summary of the batch to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Do not print the title banner
    #[arg(long)]
    pub no_banner: bool,

    /// Exit with a failure status if any image could not be converted
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// The five transform values given on the command line.
    pub fn parameter_flags(&self) -> ParameterFlags {
        ParameterFlags {
            height: self.height,
            width: self.width,
            dpi_x: self.dpi_x,
            dpi_y: self.dpi_y,
            bit_depth: self.bit_depth,
        }
    }

    /// Load the config file (or defaults) and apply the flags on top.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }
        if let Some(crop) = self.crop {
            config.crop_strategy = crop;
        }
        config.parameters = self.parameter_flags().or(config.parameters);
        Ok(config)
    }
}
