// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console output — per-file progress lines and the end-of-batch summary.

use std::io::Write;

use screensaver_core::human_errors::{Severity, humanize_error};
use screensaver_image::{BatchSummary, FileOutcome};

/// One progress line, e.g. `Processed image 3/12: sunset.png`.
pub fn progress_line(outcome: &FileOutcome, total: usize) -> String {
    match outcome {
        FileOutcome::Converted { index, .. } => {
            format!("Processed image {index}/{total}: {}", outcome.source_name())
        }
        FileOutcome::Failed { index, error, .. } => {
            format!(
                "Skipped image {index}/{total}: {} ({error})",
                outcome.source_name()
            )
        }
    }
}

/// Print the closing lines, with a plain-language explanation per failure.
pub fn write_summary(out: &mut impl Write, summary: &BatchSummary) -> std::io::Result<()> {
    if summary.total() == 0 {
        writeln!(
            out,
            "\nNo .jpg, .jpeg or .png files found in: {}",
            summary.input_dir.display()
        )?;
        return Ok(());
    }

    if summary.has_failures() {
        writeln!(
            out,
            "\n{} of {} images could not be converted:",
            summary.failed_count(),
            summary.total()
        )?;
        let mut needs_action = false;
        for outcome in summary.failures() {
            if let FileOutcome::Failed { error, .. } = outcome {
                let human = humanize_error(error);
                needs_action |= human.severity != Severity::Skipped;
                writeln!(
                    out,
                    "  - {} ({}): {}",
                    outcome.source_name(),
                    human.severity,
                    human.message
                )?;
                writeln!(out, "    {}", human.suggestion)?;
            }
        }
        if needs_action {
            writeln!(
                out,
                "Some of these need a change to the pictures or settings before running again."
            )?;
        }
    }

    writeln!(
        out,
        "\nConversion complete! Converted images are in: {}",
        summary.output_dir.display()
    )
}
