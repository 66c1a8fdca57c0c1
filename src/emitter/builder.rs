//! Builder pattern implementation for creating ProgressEmitter instances.
//!
//! # Examples
//!
//! ```rust
//! use progress_line::emitter::EmitterBuilder;
//! use std::time::Duration;
//!
//! # fn main() -> progress_line::Result<()> {
//! let emitter = EmitterBuilder::new()
//!     .format("downloaded %d/%d files")
//!     .update_interval(Duration::from_millis(250))
//!     .sink(std::io::stdout())
//!     .build()?;
//! assert_eq!(emitter.update_interval(), Duration::from_millis(250));
//! # Ok(())
//! # }
//! ```

use super::{config::EmitterConfig, emitter::ProgressEmitter};
use crate::error::{Error, Result};
use crate::sink::{default_sink, Sink};

use std::io::Write;
use std::time::Duration;

/// A builder used to create a [`ProgressEmitter`].
#[derive(Default)]
pub struct EmitterBuilder {
    config: EmitterConfig,
    sink: Option<Sink>,
}

impl EmitterBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        EmitterBuilder::default()
    }

    /// Creates a builder from an existing configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config, sink: None }
    }

    /// Set the template rendered on every tick.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    /// Set the time between two render attempts.
    pub fn update_interval(mut self, interval: Duration) -> Self {
        self.config.update_interval = interval;
        self
    }

    /// Set the control sequence written before every line.
    ///
    /// Use an empty string or `"\n"` for sinks that are not terminals.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.config.delimiter = delimiter.into();
        self
    }

    /// Set the output destination. Defaults to standard error.
    pub fn sink<W>(mut self, sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Create the [`ProgressEmitter`]. The emitter is not started.
    pub fn build(self) -> Result<ProgressEmitter> {
        if self.config.update_interval.is_zero() {
            return Err(Error::ZeroInterval);
        }
        let sink = self.sink.unwrap_or_else(default_sink);
        Ok(ProgressEmitter::from_parts(self.config, sink))
    }
}
