// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Derive reference](https://docs.rs/clap/latest/clap/_derive/index.html)

use bounded_access::{cli::{CLIArg, run_command},
                     log::try_initialize_logging_global};
use clap::Parser;

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let output = run_command(&cli_arg).inspect_err(|error| {
        tracing::error!(message = "Could not access the items", error = %error);
    })?;
    println!("{output}");

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}
