#![allow(dead_code)]

use progress_line::{EmitterBuilder, ProgressEmitter};
use std::io::{self, Write};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

// Common test constants
pub const TEST_FORMAT: &str = "progress: %d/%d";
pub const TEST_INTERVAL: Duration = Duration::from_secs(1);

/// An in-memory sink that records every write call separately.
#[derive(Clone, Default)]
pub struct CaptureSink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write received so far, decoded as UTF-8.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    /// Number of writes received so far.
    pub fn count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.lock().unwrap().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink whose every write fails.
pub struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// A sink that panics on every write, taking the scheduling loop down with it.
pub struct PanickingSink;

impl Write for PanickingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        panic!("sink exploded");
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink that parks inside `write` until released, to simulate a stalled pipe.
///
/// Each write first reports on `entered`, then waits on `release`. Once the
/// release sender is dropped, writes go straight through to `inner`.
pub struct StalledSink {
    entered: mpsc::Sender<()>,
    release: mpsc::Receiver<()>,
    inner: CaptureSink,
}

impl StalledSink {
    /// Returns the sink, a receiver signalled when a write starts, and the
    /// sender whose drop releases the write.
    pub fn new(inner: CaptureSink) -> (Self, mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (entered, entered_rx) = mpsc::channel();
        let (release_tx, release) = mpsc::channel();
        (Self { entered, release, inner }, entered_rx, release_tx)
    }
}

impl Write for StalledSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _ = self.entered.send(());
        let _ = self.release.recv();
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// === Emitter Creation Helpers ===

/// Creates a stopped emitter writing to a fresh capture sink.
pub fn create_test_emitter(format: &str) -> (ProgressEmitter, CaptureSink) {
    let sink = CaptureSink::new();
    let emitter = EmitterBuilder::new()
        .format(format)
        .update_interval(TEST_INTERVAL)
        .sink(sink.clone())
        .build()
        .expect("Failed to build test emitter");
    (emitter, sink)
}

/// Creates and starts an emitter writing to a fresh capture sink.
pub async fn start_test_emitter(format: &str) -> (ProgressEmitter, CaptureSink) {
    let (emitter, sink) = create_test_emitter(format);
    emitter.start().await.expect("Failed to start test emitter");
    (emitter, sink)
}

/// Sleeps on the tokio clock for `ticks` intervals plus half of one.
pub async fn wait_ticks(ticks: u32) {
    tokio::time::sleep(TEST_INTERVAL * ticks + TEST_INTERVAL / 2).await;
}

// === Assertion Helpers ===

/// Asserts the sink received exactly the given writes, in order.
pub fn assert_writes(sink: &CaptureSink, expected: &[&str]) {
    assert_eq!(sink.writes(), expected, "Unexpected writes to sink");
}
