//! Configuration structures and defaults for the emitter.
//!
//! # Examples
//!
//! ```rust
//! use progress_line::emitter::EmitterConfig;
//! use std::time::Duration;
//!
//! let config = EmitterConfig::default();
//! assert_eq!(config.update_interval, Duration::from_secs(1));
//! assert_eq!(config.delimiter, "\r");
//! ```

use crate::render::Param;
use std::time::Duration;

/// Plain configuration for a [`ProgressEmitter`](super::ProgressEmitter).
///
/// The sink is not part of the configuration since it is neither cloneable
/// nor printable; it is handed to the builder separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Template rendered on every tick.
    pub format: String,
    /// Time between two render attempts.
    pub update_interval: Duration,
    /// Control sequence written before every line.
    pub delimiter: String,
}

impl EmitterConfig {
    /// Default time between two render attempts.
    pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(1);
    /// Default line delimiter: a carriage return, so the terminal overwrites the line.
    pub const DEFAULT_DELIMITER: &'static str = "\r";
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            format: String::new(),
            update_interval: Self::DEFAULT_UPDATE_INTERVAL,
            delimiter: Self::DEFAULT_DELIMITER.into(),
        }
    }
}

/// Mutable state shared between the caller and the scheduling loop.
///
/// Every field lives behind the same per-instance mutex. The sink has its own
/// lock so that a slow write does not hold up the setters.
pub(crate) struct State {
    pub(crate) format: String,
    /// `None` until parameters are supplied; no line is rendered before that.
    pub(crate) params: Option<Vec<Param>>,
    pub(crate) update_interval: Duration,
    pub(crate) delimiter: String,
    pub(crate) last_rendered: Option<String>,
}

impl State {
    pub(crate) fn new(config: EmitterConfig) -> Self {
        Self {
            format: config.format,
            params: None,
            update_interval: config.update_interval,
            delimiter: config.delimiter,
            last_rendered: None,
        }
    }
}
