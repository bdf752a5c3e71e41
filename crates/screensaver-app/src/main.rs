// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Kindle screensaver converter — batch CLI.
//
// Entry point. Initialises logging, resolves the conversion parameters (flags,
// config file, then interactive prompts), and converts every photo in the
// input folder.

mod banner;
mod cli;
mod services;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use screensaver_core::resolve_parameters;
use screensaver_image::BatchRunner;

use cli::Cli;
use services::TerminalPrompt;
use services::console::{progress_line, write_summary};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "conversion aborted");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if !cli.no_banner {
        banner::print_title();
    }

    let config = cli.resolve_config().context("could not load configuration")?;
    println!(
        "Processing images from the '{}' folder...",
        config.input_dir.display()
    );

    let params = resolve_parameters(&config.parameters, &mut TerminalPrompt::stdio())
        .context("could not determine conversion parameters")?;
    tracing::info!(?params, crop = %config.crop_strategy, "parameters resolved");

    let runner = BatchRunner::from_config(&config, params);
    let summary = runner
        .run_with_progress(|outcome, total| println!("{}", progress_line(outcome, total)))
        .with_context(|| format!("batch over '{}' failed", runner.input_dir().display()))?;

    write_summary(&mut std::io::stdout().lock(), &summary)?;

    if let Some(report) = &cli.report {
        summary
            .write_report(report)
            .with_context(|| format!("could not write report to '{}'", report.display()))?;
    }

    if cli.strict && summary.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
