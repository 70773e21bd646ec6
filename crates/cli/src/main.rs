// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use jqlrs::Cli;

fn main() {
    let cli = Cli::parse();
    jqlrs::logging::init();

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to directory '{}': {}", dir, e);
            std::process::exit(jqlrs::error::EXIT_FAILURE);
        }
    }

    if let Err(e) = jqlrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
