//! Standard stream redirection
//!
//! Both `sys.stdout` and `sys.stderr` are pointed at bridge objects, so
//! everything a script prints is forwarded at the plugin's stream severity.

use crate::bridge::Log;
use crate::plugin::Plugin;
use pyo3::prelude::*;
use std::sync::Arc;
use tracing::debug;

const STREAMS: [(&str, &str); 2] = [("stdout", "__stdout__"), ("stderr", "__stderr__")];

/// Replace `sys.stdout` and `sys.stderr` with bridge objects bound to `plugin`.
pub fn redirect(py: Python<'_>, plugin: &Arc<Plugin>) -> PyResult<()> {
    let sys = PyModule::import(py, "sys")?;
    let log = Bound::new(py, Log::attached(plugin))?;
    for (stream, _) in STREAMS {
        sys.setattr(stream, &log)?;
    }
    debug!(
        plugin = plugin.name(),
        severity = %plugin.stream_severity(),
        "standard streams redirected"
    );
    Ok(())
}

/// Put back the interpreter's original standard streams.
pub fn restore(py: Python<'_>) -> PyResult<()> {
    let sys = PyModule::import(py, "sys")?;
    for (stream, original) in STREAMS {
        sys.setattr(stream, sys.getattr(original)?)?;
    }
    debug!("standard streams restored");
    Ok(())
}
