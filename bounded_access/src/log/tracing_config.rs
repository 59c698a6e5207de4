// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::create_display_layer;
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Configure the tracing logging. Output always goes to stderr, so stdout stays clean
/// for the command's own output.
///
/// Fields:
/// - `level_filter`: [`LevelFilter`] - The most verbose level that is let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self { Self { level_filter } }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// If a global subscriber has already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        tracing_subscriber::registry()
            .with(create_display_layer(self.level_filter))
            .try_init()
            .into_diagnostic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_off() {
        assert_eq!(TracingConfig::default().get_level_filter(), LevelFilter::OFF);
    }

    #[test]
    fn test_from_level_filter() {
        let it: TracingConfig = LevelFilter::DEBUG.into();
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
    }
}
