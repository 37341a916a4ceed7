//! Plugin instance
//!
//! The host owns every [`Plugin`] through an `Arc`. Interpreter-side objects
//! only ever see it through a `Weak`, so dropping the last host reference
//! detaches every bridge that was created for it.

use crate::config::BridgeConfig;
use crate::severity::Severity;
use crate::sink::{LogSink, PluginLogger, TracingSink};
use std::sync::Arc;

/// One loaded plugin, the ultimate destination of all bridge operations.
#[derive(Debug)]
pub struct Plugin {
    config: BridgeConfig,
    logger: PluginLogger,
}

impl Plugin {
    pub fn new(config: BridgeConfig, sink: Arc<dyn LogSink>) -> Arc<Self> {
        Arc::new(Self {
            config,
            logger: PluginLogger::new(sink),
        })
    }

    /// Plugin whose records go to `tracing`, tagged with the configured name.
    pub fn with_tracing(config: BridgeConfig) -> Arc<Self> {
        let sink = Arc::new(TracingSink::new(&config.name));
        Self::new(config, sink)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn log(&self) -> &PluginLogger {
        &self.logger
    }

    /// Severity used by stream-style writes.
    pub fn stream_severity(&self) -> Severity {
        self.config.stream_severity
    }
}
