//! Emission sinks
//!
//! The core never talks to a logging backend directly: every message goes
//! through a [`Sink`]. Two adapters cover the common destinations, a
//! print-like sink and a logger-like sink backed by `tracing`, and
//! [`CaptureSink`] records emissions in memory for deterministic test
//! assertions.

use logf_core_types::Level;
use std::sync::{Arc, Mutex};

/// One emitted message with its structured flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
    /// Captured stack trace, present when stack logging is enabled
    pub stack_trace: Option<String>,
    /// True for error-path emissions
    pub is_exception: bool,
}

/// Destination for emitted records
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record);
}

/// Print-like sink: one line per message on stdout
pub struct PrintSink;

impl Sink for PrintSink {
    fn emit(&self, record: &Record) {
        println!("{}", record.message);
        if let Some(stack) = &record.stack_trace {
            println!("{}", stack);
        }
    }
}

/// Logger-like sink: maps records onto leveled `tracing` events
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    logger: Option<String>,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit under the given logger name (recorded as the `logger` field)
    pub fn with_logger(name: impl Into<String>) -> Self {
        Self {
            logger: Some(name.into()),
        }
    }
}

impl Sink for TracingSink {
    fn emit(&self, record: &Record) {
        let logger = self.logger.as_deref();
        let stack_trace = record.stack_trace.as_deref();
        let exception = record.is_exception;
        match record.level {
            Level::Trace => {
                tracing::trace!(target: "logf", logger, exception, stack_trace, "{}", record.message)
            }
            Level::Debug => {
                tracing::debug!(target: "logf", logger, exception, stack_trace, "{}", record.message)
            }
            Level::Info => {
                tracing::info!(target: "logf", logger, exception, stack_trace, "{}", record.message)
            }
            Level::Warn => {
                tracing::warn!(target: "logf", logger, exception, stack_trace, "{}", record.message)
            }
            Level::Error => {
                tracing::error!(target: "logf", logger, exception, stack_trace, "{}", record.message)
            }
        }
    }
}

/// In-memory sink for tests
#[derive(Clone, Default)]
pub struct CaptureSink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Get all captured message lines
    pub fn messages(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| record.message)
            .collect()
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }

    /// Count records matching a predicate
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Record) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }
}

impl Sink for CaptureSink {
    fn emit(&self, record: &Record) {
        self.records
            .lock()
            .map(|mut records| records.push(record.clone()))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str, is_exception: bool) -> Record {
        Record {
            level: Level::Debug,
            message: message.to_string(),
            stack_trace: None,
            is_exception,
        }
    }

    #[test]
    fn test_capture_sink_records_in_order() {
        let sink = CaptureSink::new();
        sink.emit(&record("first", false));
        sink.emit(&record("second", true));

        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.count_where(|r| r.is_exception), 1);
    }

    #[test]
    fn test_capture_sink_clear() {
        let sink = CaptureSink::new();
        sink.emit(&record("one", false));
        sink.clear();
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_capture_sink_clones_share_storage() {
        let sink = CaptureSink::new();
        let handle = sink.clone();
        sink.emit(&record("shared", false));
        assert_eq!(handle.messages(), vec!["shared"]);
    }

    #[test]
    fn test_print_and_tracing_sinks_accept_records() {
        // No subscriber is installed; both must be safe no-output paths.
        PrintSink.emit(&record("print line", false));
        TracingSink::new().emit(&record("traced line", false));
        TracingSink::with_logger("app.db").emit(&record("named logger line", true));
    }
}
