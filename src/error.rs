//! Error handling for the progress_line library.
//!
//! Only lifecycle misuse surfaces as an error. Rendering and sink failures
//! happen inside the background loop and are never propagated to the caller.

use thiserror::Error;

/// Errors that can happen when driving a [`ProgressEmitter`](crate::ProgressEmitter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The emitter was started while its scheduling loop is still active.
    ///
    /// Call [`stop`](crate::ProgressEmitter::stop) first to replace the loop.
    #[error("progress emitter is already running")]
    AlreadyRunning,

    /// A zero update interval was requested.
    ///
    /// The loop needs a non-zero period to wait on between ticks.
    #[error("update interval must be greater than zero")]
    ZeroInterval,
}

/// Result type alias for operations that can fail with a progress_line error.
pub type Result<T> = std::result::Result<T, Error>;
