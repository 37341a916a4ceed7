//! Interpreter setup performed by the host
//!
//! Embedding hosts call [`bootstrap`] once per interpreter, before running any
//! plugin code. Python extension builds get the same module content through
//! [`crate::pylog`].

use crate::bridge::Log;
use crate::plugin::Plugin;
use crate::registry::{self, PLUGIN_KEY, PluginContext};
use crate::stdio;
use pyo3::prelude::*;
use std::sync::Arc;
use tracing::info;

/// Name under which the module is importable from scripts.
pub const MODULE_NAME: &str = "pylog";

pub(crate) fn populate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Log>()?;
    m.add_class::<PluginContext>()?;
    m.add("PLUGIN_KEY", PLUGIN_KEY)?;
    Ok(())
}

/// Build the `pylog` module and make it importable through `sys.modules`.
pub fn register_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let module = PyModule::new(py, MODULE_NAME)?;
    populate(&module)?;
    PyModule::import(py, "sys")?
        .getattr("modules")?
        .set_item(MODULE_NAME, &module)?;
    Ok(module)
}

/// Prepare the interpreter for `plugin`: register the module, publish the
/// plugin context and, if configured, redirect the standard streams.
pub fn bootstrap<'py>(py: Python<'py>, plugin: &Arc<Plugin>) -> PyResult<Bound<'py, PyModule>> {
    let module = register_module(py)?;
    registry::install(py, plugin)?;
    if plugin.config().redirect_stdio {
        stdio::redirect(py, plugin)?;
    }
    info!(
        plugin = plugin.name(),
        redirect_stdio = plugin.config().redirect_stdio,
        "python log bridge ready"
    );
    Ok(module)
}
