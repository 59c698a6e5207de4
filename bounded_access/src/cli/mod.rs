// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `bslice` command line front end: [`clap`] argument parsing, and running the
//! parsed command against the library.

// Attach.
pub mod clap_config;
pub mod command_runner;

// Re-export.
pub use clap_config::*;
pub use command_runner::*;
