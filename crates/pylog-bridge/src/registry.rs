//! Plugin context registry
//!
//! The active plugin is published in the interpreter's `builtins` namespace
//! under [`PLUGIN_KEY`], wrapped in a [`PluginContext`]. [`install`] is the
//! only writer; bridge objects read the slot once, at construction.

use crate::plugin::Plugin;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Well-known key of the registry slot in `builtins`.
pub const PLUGIN_KEY: &str = "__plugin__";

/// Opaque, non-owning handle to the active plugin.
#[pyclass(module = "pylog", name = "PluginContext", frozen)]
#[derive(Debug)]
pub struct PluginContext {
    plugin: Weak<Plugin>,
    name: String,
}

impl PluginContext {
    pub fn new(plugin: &Arc<Plugin>) -> Self {
        Self {
            plugin: Arc::downgrade(plugin),
            name: plugin.name().to_string(),
        }
    }

    pub fn plugin(&self) -> Weak<Plugin> {
        self.plugin.clone()
    }
}

#[pymethods]
impl PluginContext {
    #[getter]
    fn name(&self) -> &str {
        &self.name
    }

    /// Whether the host still holds the plugin.
    #[getter]
    fn alive(&self) -> bool {
        self.plugin.strong_count() > 0
    }

    fn __repr__(&self) -> String {
        format!("<PluginContext name={:?} alive={}>", self.name, self.alive())
    }
}

fn builtins(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    Ok(PyModule::import(py, "builtins")?.dict())
}

/// Publish `plugin` as the active plugin of this interpreter.
///
/// Replaces any previously published context.
pub fn install(py: Python<'_>, plugin: &Arc<Plugin>) -> PyResult<()> {
    let slot = builtins(py)?;
    if let Some(previous) = slot.get_item(PLUGIN_KEY)? {
        warn!(
            plugin = plugin.name(),
            previous = %previous.repr()?,
            "replacing plugin context"
        );
    }
    slot.set_item(PLUGIN_KEY, Bound::new(py, PluginContext::new(plugin))?)?;
    info!(plugin = plugin.name(), "plugin context installed");
    Ok(())
}

/// Remove the published context. Returns whether one was present.
pub fn uninstall(py: Python<'_>) -> PyResult<bool> {
    let slot = builtins(py)?;
    if slot.contains(PLUGIN_KEY)? {
        slot.del_item(PLUGIN_KEY)?;
        debug!("plugin context removed");
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Read the published context. An entry of a foreign type counts as absent.
pub fn lookup(py: Python<'_>) -> PyResult<Option<Weak<Plugin>>> {
    let Some(entry) = builtins(py)?.get_item(PLUGIN_KEY)? else {
        return Ok(None);
    };
    match entry.extract::<PyRef<'_, PluginContext>>() {
        Ok(context) => Ok(Some(context.plugin())),
        Err(_) => {
            warn!(key = PLUGIN_KEY, "registry slot holds a foreign object");
            Ok(None)
        }
    }
}
