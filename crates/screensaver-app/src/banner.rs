// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ASCII title shown at startup.

const TITLE: &str = r"
╦╔═┬┌┐┌┌┬┐┬  ┌─┐  ╔═╗┌─┐┬─┐┌─┐┌─┐┌┐┌┌─┐┌─┐┬  ┬┌─┐┬─┐  ╔═╗┌─┐┌┐┌┬  ┬┌─┐┬─┐┌┬┐┌─┐┬─┐
╠╩╗││││ │││  ├┤   ╚═╗│  ├┬┘├┤ ├┤ │││└─┐├─┤└┐┌┘├┤ ├┬┘  ║  │ ││││└┐┌┘├┤ ├┬┘ │ ├┤ ├┬┘
╩ ╩┴┘└┘─┴┘┴─┘└─┘  ╚═╝└─┘┴└─└─┘└─┘┘└┘└─┘┴ ┴ └┘ └─┘┴└─  ╚═╝└─┘┘└┘ └┘ └─┘┴└─ ┴ └─┘┴└─
made by neura - https://github.com/neura-neura/kindle-screensaver-converter
";

pub fn print_title() {
    println!("{TITLE}");
}
