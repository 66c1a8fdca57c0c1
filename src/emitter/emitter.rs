//! Represents the progress line controller.

use super::config::{EmitterConfig, State};
use crate::error::{Error, Result};
use crate::render::{render, Param};
use crate::sink::{self, default_sink, Sink};

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{oneshot, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, trace};

/// Periodically renders a single progress line to a sink.
///
/// The emitter owns a format template, the latest parameters, an output sink
/// and an update interval. Once started, a background task wakes up every
/// interval, renders the template and writes it, prefixed by the delimiter,
/// only when the result differs from the last line written.
///
/// ```rust
/// use progress_line::{params, ProgressEmitter};
///
/// # #[tokio::main]
/// # async fn main() -> progress_line::Result<()> {
/// let emitter = ProgressEmitter::new("downloaded %d/%d files");
/// emitter.start().await?;
/// emitter.set_params(params![3, 10]);
/// // ... do the work, updating the params as it progresses ...
/// emitter.stop().await;
/// # Ok(())
/// # }
/// ```
///
/// All methods take `&self`, so the emitter can be shared behind an [`Arc`]
/// with the tasks that report progress.
pub struct ProgressEmitter {
    /// State shared with the scheduling loop.
    shared: Arc<Shared>,
    /// Handle to the active scheduling loop, if any.
    lifecycle: tokio::sync::Mutex<Option<Running>>,
}

struct Running {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

struct Shared {
    state: Mutex<State>,
    /// Held only while a line is written, so a stalled sink never blocks
    /// the other setters.
    sink: Mutex<Sink>,
    /// Wakes the loop so it re-arms its timer with the current interval.
    reset: Notify,
    /// Set by `start`, cleared by `stop` or when the loop exits on its own.
    running: AtomicBool,
}

/// Clears the running flag when the loop exits, including by panic.
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_sink(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update_interval(&self) -> Duration {
        self.lock().update_interval
    }

    /// One tick: render, compare with the last line, write if it changed.
    fn tick(&self) {
        let (line, delimiter) = {
            let state = self.lock();
            let Some(params) = state.params.as_deref() else {
                trace!("No parameters set yet, skipping tick");
                return;
            };

            let line = render(&state.format, params);
            if state.last_rendered.as_deref() == Some(line.as_str()) {
                trace!("Progress line unchanged, skipping write");
                return;
            }
            (line, state.delimiter.clone())
        };

        // Only the loop writes `last_rendered`, so releasing the state lock
        // for the write cannot let a duplicate through.
        let written = {
            let mut out = self.lock_sink();
            sink::emit(out.as_mut(), &delimiter, &line)
        };
        match written {
            Ok(()) => {
                trace!("Wrote progress line {:?}", line);
                self.lock().last_rendered = Some(line);
            }
            // The line is retried on the next tick.
            Err(e) => debug!("Failed to write progress line: {}", e),
        }
    }
}

impl std::fmt::Debug for ProgressEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("ProgressEmitter")
            .field("format", &state.format)
            .field("params", &state.params)
            .field("update_interval", &state.update_interval)
            .field("delimiter", &state.delimiter)
            .field("last_rendered", &state.last_rendered)
            .field("running", &self.is_running())
            .finish()
    }
}

impl ProgressEmitter {
    /// Creates a stopped emitter writing to standard error every second.
    pub fn new(format: impl Into<String>) -> Self {
        let config = EmitterConfig {
            format: format.into(),
            ..EmitterConfig::default()
        };
        Self::from_parts(config, default_sink())
    }

    pub(crate) fn from_parts(config: EmitterConfig, sink: Sink) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State::new(config)),
                sink: Mutex::new(sink),
                reset: Notify::new(),
                running: AtomicBool::new(false),
            }),
            lifecycle: tokio::sync::Mutex::new(None),
        }
    }

    /// Replace the output destination, effective from the next tick.
    ///
    /// Waits for a write in progress to finish. The other setters never
    /// wait on the sink.
    pub fn set_sink<W>(&self, sink: W)
    where
        W: Write + Send + 'static,
    {
        *self.shared.lock_sink() = Box::new(sink);
    }

    /// Replace the template, effective from the next tick.
    pub fn set_format(&self, format: impl Into<String>) {
        self.shared.lock().format = format.into();
    }

    /// Replace the control sequence written before every line.
    pub fn set_delimiter(&self, delimiter: impl Into<String>) {
        self.shared.lock().delimiter = delimiter.into();
    }

    /// Replace the whole parameter set.
    ///
    /// An empty set means "no data yet": nothing is rendered until
    /// parameters are supplied again.
    pub fn set_params<I, P>(&self, params: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        let params: Vec<Param> = params.into_iter().map(Into::into).collect();
        self.shared.lock().params = (!params.is_empty()).then_some(params);
    }

    /// Replace the tick period.
    ///
    /// When running, the timer is re-armed right away so the next tick
    /// happens one new period from now.
    pub fn set_update_interval(&self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(Error::ZeroInterval);
        }
        self.shared.lock().update_interval = interval;
        // Always notify: a loop that is still starting may already have read
        // the old period. A leftover permit only re-arms the same period.
        debug!("Update interval changed to {:?}, re-arming timer", interval);
        self.shared.reset.notify_one();
        Ok(())
    }

    /// Launch the scheduling loop.
    ///
    /// Fails with [`Error::AlreadyRunning`] if a loop is already active.
    pub async fn start(&self) -> Result<()> {
        let mut lifecycle = self.lifecycle.lock().await;
        if let Some(running) = lifecycle.as_ref() {
            if !running.handle.is_finished() {
                return Err(Error::AlreadyRunning);
            }
            debug!("Previous progress loop exited on its own, replacing it");
        }

        let (stop, stop_rx) = oneshot::channel();
        self.shared.running.store(true, Ordering::Release);
        let handle = tokio::spawn(run(Arc::clone(&self.shared), stop_rx));
        *lifecycle = Some(Running { stop, handle });
        debug!("Progress emitter started");
        Ok(())
    }

    /// Stop the scheduling loop and wait for it to exit.
    ///
    /// No write happens once this returns. Stopping a stopped emitter is a no-op.
    pub async fn stop(&self) {
        let mut lifecycle = self.lifecycle.lock().await;
        let Some(running) = lifecycle.take() else {
            return;
        };
        self.shared.running.store(false, Ordering::Release);

        // The loop may already be gone; the signal is buffered either way.
        let _ = running.stop.send(());
        if let Err(e) = running.handle.await {
            debug!("Progress loop ended abnormally: {}", e);
        }
        debug!("Progress emitter stopped");
    }

    /// Whether the scheduling loop is active.
    ///
    /// Turns `false` by itself if the loop dies, e.g. from a panicking sink.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::Acquire)
    }

    /// Whether parameters have been supplied.
    pub fn has_params(&self) -> bool {
        self.shared.lock().params.is_some()
    }

    /// Get the current template.
    pub fn format(&self) -> String {
        self.shared.lock().format.clone()
    }

    /// Get the current tick period.
    pub fn update_interval(&self) -> Duration {
        self.shared.update_interval()
    }

    /// Get the current delimiter.
    pub fn delimiter(&self) -> String {
        self.shared.lock().delimiter.clone()
    }

    /// Get the last line successfully written, without the delimiter.
    pub fn last_rendered(&self) -> Option<String> {
        self.shared.lock().last_rendered.clone()
    }
}

impl Drop for ProgressEmitter {
    fn drop(&mut self) {
        if let Some(running) = self.lifecycle.get_mut().take() {
            let _ = running.stop.send(());
            running.handle.abort();
        }
    }
}

fn ticker(period: Duration) -> Interval {
    // The first tick fires one full period after arming.
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// The scheduling loop: tick until stopped.
async fn run(shared: Arc<Shared>, mut stop: oneshot::Receiver<()>) {
    let _running = RunningGuard(&shared.running);
    let mut timer = ticker(shared.update_interval());
    loop {
        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = shared.reset.notified() => {
                let period = shared.update_interval();
                trace!("Re-arming progress timer with period {:?}", period);
                timer = ticker(period);
            }
            _ = timer.tick() => shared.tick(),
        }
    }
    trace!("Progress loop exited");
}
