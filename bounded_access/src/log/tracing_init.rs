// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TracingConfig;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// This erases the concrete type of the writer, and returns a boxed layer that writes
/// compact lines to stderr.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
#[must_use]
pub fn create_display_layer<S>(level_filter: LevelFilter) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Box::new(
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(level_filter),
    )
}

/// Global default subscriber, for apps. Does nothing when the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// If a global subscriber has already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_create_display_layer() {
        let layer: Box<DynLayer<tracing_subscriber::Registry>> =
            create_display_layer(LevelFilter::DEBUG);
        assert!(layer.max_level_hint().is_some());
    }

    #[test]
    fn test_logging_is_disabled_by_default() {
        assert!(try_initialize_logging_global(TracingConfig::default()).is_ok());
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }

    #[test]
    fn test_display_layer_enables_level() {
        let subscriber =
            tracing_subscriber::registry().with(create_display_layer(LevelFilter::DEBUG));
        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(tracing::Level::DEBUG));
            assert!(!tracing::enabled!(tracing::Level::TRACE));
        });
    }
}
