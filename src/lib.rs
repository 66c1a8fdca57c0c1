//! progress_line keeps long-running command-line operations informative with a
//! single progress line that updates in place.
//!
//! A [`ProgressEmitter`] renders a printf-style template with the latest
//! parameters on a fixed period and writes the result to a sink, prefixed by a
//! carriage return. Identical lines are written only once, and nothing is
//! written before the first parameters arrive.
//!
//! # Quick Start
//!
//! ```rust
//! use progress_line::{params, ProgressEmitter};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> progress_line::Result<()> {
//! let emitter = ProgressEmitter::new("downloaded %d/%d files");
//! emitter.set_update_interval(Duration::from_millis(100))?;
//! emitter.start().await?;
//!
//! for done in 1..=10 {
//!     // ... fetch a file ...
//!     emitter.set_params(params![done, 10]);
//! }
//!
//! emitter.stop().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`emitter`] - The `ProgressEmitter`, its builder and configuration
//! - [`render`] - Template rendering and the `Param` value type
//! - [`sink`] - Output destinations
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod emitter;
pub mod error;
pub mod render;
pub mod sink;

pub use emitter::{EmitterBuilder, EmitterConfig, ProgressEmitter};
pub use error::{Error, Result};
pub use render::{render, Param};
pub use sink::{default_sink, Sink};
