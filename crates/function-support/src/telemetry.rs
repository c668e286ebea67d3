//! Log subscriber setup.
//!
//! Functions run on `wasm32-unknown-unknown`, where stdout and stderr go
//! nowhere. The runtime's log channel is `shopify_function::log!`, so every
//! formatted event is buffered and handed to it as one line.

use std::io;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Receives one formatted log line, without the trailing newline.
pub type Sink = fn(&str);

fn function_log(line: &str) {
    shopify_function::log!("{}", line);
}

/// [`MakeWriter`] that delivers each event to a [`Sink`].
#[derive(Clone, Copy, Debug)]
pub struct FunctionLog {
    sink: Sink,
}

impl FunctionLog {
    /// Writer targeting the Function run logs.
    #[must_use]
    pub const fn new() -> Self {
        Self { sink: function_log }
    }

    #[must_use]
    pub const fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl Default for FunctionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Buffers a single event and flushes it to the sink when dropped.
#[derive(Debug)]
pub struct EventWriter {
    buffer: Vec<u8>,
    sink: Sink,
}

impl io::Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if !line.is_empty() {
            (self.sink)(line);
        }
    }
}

impl<'a> MakeWriter<'a> for FunctionLog {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        EventWriter {
            buffer: Vec::new(),
            sink: self.sink,
        }
    }
}

/// The fmt subscriber used by the Functions, writing to `log`.
pub fn subscriber(log: FunctionLog) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(log)
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

/// Install the Function log subscriber.
///
/// Safe to call on every invocation: only the first call installs anything.
pub fn init() {
    let _ = tracing::subscriber::set_global_default(subscriber(FunctionLog::new()));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(line: &str) {
        CAPTURED.with(|lines| lines.borrow_mut().push(line.to_owned()));
    }

    fn captured() -> Vec<String> {
        CAPTURED.with(RefCell::take)
    }

    #[test]
    fn events_reach_the_sink_one_line_each() {
        tracing::subscriber::with_default(subscriber(FunctionLog::with_sink(capture)), || {
            tracing::warn!(field = "quantity", "ignoring discount configuration");
            tracing::info!(lines = 2, "no cart lines qualify");
            tracing::debug!("below the level filter");
        });

        let lines = captured();
        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("ignoring discount configuration"));
        assert!(lines[0].contains("quantity"));
        assert!(lines[1].contains("no cart lines qualify"));
        assert!(lines.iter().all(|line| !line.ends_with('\n')));
    }

    #[test]
    fn empty_writer_emits_nothing() {
        drop(FunctionLog::with_sink(capture).make_writer());
        assert!(captured().is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
