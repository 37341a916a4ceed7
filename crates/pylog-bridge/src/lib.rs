//! pylog-bridge - Python logging bridge for embedded interpreters
//!
//! This crate lets code running inside an embedded CPython interpreter emit
//! records into the host plugin's logger, and lets the host redirect the
//! interpreter's standard streams into that same logger.
//!
//! # Architecture
//!
//! ```text
//! Python script
//!     |  pylog.Log().info(...) / print(...)
//!     v
//! Log (bridge object, Weak<Plugin>)
//!     |  coerce::to_text / coerce::expect_text
//!     v
//! Plugin -> PluginLogger -> LogSink (TracingSink, MemorySink, ...)
//! ```
//!
//! The plugin instance is owned by the host. It is published to the
//! interpreter once, through [`registry::install`], and every bridge object
//! created afterwards holds a non-owning reference to it.
//!
//! # Usage
//!
//! ```no_run
//! use pylog_bridge::{BridgeConfig, Plugin, host};
//! use pyo3::prelude::*;
//!
//! let plugin = Plugin::with_tracing(BridgeConfig::new().with_name("worker"));
//! Python::attach(|py| -> PyResult<()> {
//!     host::bootstrap(py, &plugin)?;
//!     py.run(c"import pylog\npylog.Log().info('hello')", None, None)
//! })
//! .unwrap();
//! ```
//!
//! # Features
//!
//! - `extension-module` - build as a Python extension wheel

pub mod bridge;
pub mod coerce;
pub mod config;
pub mod error;
mod error_conversions;
pub mod host;
pub mod plugin;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod stdio;
pub mod telemetry;

pub use bridge::Log;
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use plugin::Plugin;
pub use registry::{PLUGIN_KEY, PluginContext};
pub use severity::Severity;
pub use sink::{LogSink, MemorySink, PluginLogger, Record, TracingSink};

use pyo3::prelude::*;

/// Python module initialization
#[pymodule]
pub fn pylog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    host::populate(m)
}
