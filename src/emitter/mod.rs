//! Emitter module containing the progress line controller, its builder, and configuration.
//!
//! The module is organized into three components:
//!
//! - `emitter` - the [`ProgressEmitter`] and its background scheduling loop
//! - `builder` - [`EmitterBuilder`] for configuring an emitter before creating it
//! - `config` - [`EmitterConfig`] and its defaults
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use progress_line::{params, ProgressEmitter};
//!
//! # #[tokio::main]
//! # async fn main() -> progress_line::Result<()> {
//! let emitter = ProgressEmitter::new("processed %d items");
//! emitter.start().await?;
//! for i in 1..=3 {
//!     emitter.set_params(params![i]);
//! }
//! emitter.stop().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing to a Log File
//!
//! ```rust
//! use progress_line::emitter::EmitterBuilder;
//!
//! # fn main() -> progress_line::Result<()> {
//! // Newline-delimited output reads better in a file than carriage returns.
//! let _emitter = EmitterBuilder::new()
//!     .format("%s: %d%%")
//!     .delimiter("\n")
//!     .sink(Vec::new())
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod emitter;

pub use builder::EmitterBuilder;
pub use config::EmitterConfig;
pub use emitter::ProgressEmitter;
