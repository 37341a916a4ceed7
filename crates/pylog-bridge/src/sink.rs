//! Host-side log sinks
//!
//! A sink is the final destination of every record a bridge forwards. The
//! bridge only ever hands over a severity and an already formatted string;
//! sinks must not reinterpret the text as a format template.

use crate::severity::Severity;
use parking_lot::Mutex;
use std::sync::Arc;

/// Target used for records forwarded through [`TracingSink`].
pub const TRACING_TARGET: &str = "pylog";

/// Destination for forwarded log records.
pub trait LogSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);
}

// ============================================================================
// Tracing sink
// ============================================================================

/// Forwards records to `tracing`, tagged with the originating plugin name.
#[derive(Debug, Clone)]
pub struct TracingSink {
    plugin: String,
}

impl TracingSink {
    pub fn new(plugin: &str) -> Self {
        Self {
            plugin: plugin.to_string(),
        }
    }
}

impl LogSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        let plugin = self.plugin.as_str();
        match severity {
            Severity::Debug => tracing::debug!(target: TRACING_TARGET, plugin, "{}", message),
            Severity::Info => tracing::info!(target: TRACING_TARGET, plugin, "{}", message),
            Severity::Warning => tracing::warn!(target: TRACING_TARGET, plugin, "{}", message),
            Severity::Error => tracing::error!(target: TRACING_TARGET, plugin, "{}", message),
        }
    }
}

// ============================================================================
// Memory sink
// ============================================================================

/// A forwarded record, as seen by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

impl Record {
    pub fn new(severity: Severity, message: &str) -> Self {
        Self {
            severity,
            message: message.to_string(),
        }
    }
}

/// Keeps every record in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        self.records.lock().push(Record::new(severity, message));
    }
}

// ============================================================================
// Plugin logger
// ============================================================================

/// Four-level logger capability exposed by a plugin instance.
#[derive(Clone)]
pub struct PluginLogger {
    sink: Arc<dyn LogSink>,
}

impl PluginLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    pub fn log(&self, severity: Severity, message: &str) {
        self.sink.emit(severity, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}

impl std::fmt::Debug for PluginLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginLogger").finish_non_exhaustive()
    }
}
