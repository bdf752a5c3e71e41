// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Input folder scanning.

use std::path::{Path, PathBuf};

use screensaver_core::error::Result;
use screensaver_core::types::SourceFormat;
use tracing::{debug, info, instrument};

/// List the JPEG and PNG files directly inside `dir`, sorted by file name.
///
/// Extensions are matched case-insensitively. Symlinks to files are
/// followed. Subfolders and other files are ignored. The sort keeps output numbering reproducible between runs.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn scan_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // `Path::is_file` follows symlinks; dangling links and folders drop out.
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        match SourceFormat::from_path(&path) {
            Some(format) => {
                debug!(path = %path.display(), ?format, "source found");
                sources.push(path);
            }
            None => debug!(path = %path.display(), "skipping unsupported file"),
        }
    }
    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    info!(count = sources.len(), "Input folder scanned");
    Ok(sources)
}
