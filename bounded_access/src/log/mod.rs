// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging setup for the `bslice` binary, built on [`tracing`] and
//! [`tracing_subscriber`]. The library code itself never logs.
//!
//! Logging is **DISABLED** by **default**: nothing is emitted until
//! [`try_initialize_logging_global()`] is called with a level other than
//! [`tracing_core::LevelFilter::OFF`].

// Attach.
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
