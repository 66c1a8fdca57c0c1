//! Output destinations for rendered progress lines.

use std::io::{self, Write};

/// A write-only byte destination owned by an emitter.
pub type Sink = Box<dyn Write + Send>;

/// The sink used when none is supplied: the process's standard error stream.
pub fn default_sink() -> Sink {
    Box::new(io::stderr())
}

/// Write `delimiter` followed by `line` as a single buffer, then flush.
pub(crate) fn emit(sink: &mut dyn Write, delimiter: &str, line: &str) -> io::Result<()> {
    let mut buf = Vec::with_capacity(delimiter.len() + line.len());
    buf.extend_from_slice(delimiter.as_bytes());
    buf.extend_from_slice(line.as_bytes());
    sink.write_all(&buf)?;
    sink.flush()
}
