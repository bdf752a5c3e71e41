// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal prompt — the interactive `InputProvider` used when a parameter
// was not given on the command line.

use std::io::{BufRead, Write};

use screensaver_core::InputProvider;

/// Line-based prompt over any reader/writer pair.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on stdout, read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> InputProvider for TerminalPrompt<R, W> {
    fn read_value(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail number parsing,
        // so the caller asks again instead of aborting.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    fn report_invalid(&mut self, message: &str) {
        // A broken stdout leaves nothing useful to do with the message.
        let _ = writeln!(self.output, "Error: {message}");
    }
}
