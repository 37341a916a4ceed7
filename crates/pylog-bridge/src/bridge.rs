//! The `Log` bridge object
//!
//! `Log` is the interpreter-visible type that forwards script log calls to the
//! host plugin logger. Besides the four leveled operations it implements
//! enough of the text-stream protocol (`write`, `writelines`, `flush`) to be
//! used as a `sys.stdout` / `sys.stderr` replacement.
//!
//! ```python
//! import pylog
//!
//! log = pylog.Log()
//! log.info("ready")
//! log.debug({"batch": 3})   # logged as "{'batch': 3}"
//! print("to the logger", file=log)
//! ```

use crate::coerce;
use crate::error::{BridgeError, BridgeResult};
use crate::plugin::Plugin;
use crate::registry::{self, PLUGIN_KEY, PluginContext};
use crate::severity::Severity;
use pyo3::prelude::*;
use pyo3::types::PyTuple;
use std::sync::{Arc, Weak};

/// Interpreter-side logger handle.
///
/// Holds the plugin without owning it. Once the host drops the plugin every
/// operation fails with `RuntimeError("Not initialized")`.
#[pyclass(module = "pylog", name = "Log", frozen)]
#[derive(Debug)]
pub struct Log {
    plugin: Weak<Plugin>,
}

impl Log {
    pub fn attached(plugin: &Arc<Plugin>) -> Self {
        Self {
            plugin: Arc::downgrade(plugin),
        }
    }

    /// A bridge without a plugin. Every operation on it fails.
    pub fn detached() -> Self {
        Self {
            plugin: Weak::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.plugin.strong_count() > 0
    }

    fn plugin(&self) -> BridgeResult<Arc<Plugin>> {
        self.plugin.upgrade().ok_or(BridgeError::NotInitialized)
    }

    fn emit(&self, severity: Severity, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        let plugin = self.plugin()?;
        let message = single_argument(args, severity.as_str())?;
        let text = coerce::to_text(&message)?;
        plugin.log().log(severity, &text.as_str());
        Ok(())
    }

    fn write_text(&self, plugin: &Plugin, text: &Bound<'_, PyAny>) -> PyResult<()> {
        let text = coerce::expect_text(text, "write")?;
        plugin.log().log(plugin.stream_severity(), &text.as_str());
        Ok(())
    }
}

// Arity is checked here, after the initialization check, so a detached
// bridge reports "Not initialized" whatever it was called with.
fn single_argument<'py>(
    args: &Bound<'py, PyTuple>,
    operation: &'static str,
) -> PyResult<Bound<'py, PyAny>> {
    match args.len() {
        1 => args.get_item(0),
        given => Err(BridgeError::Arity { operation, given }.into()),
    }
}

#[pymethods]
impl Log {
    /// Bind to `context` if given, otherwise to the plugin published in `builtins`.
    /// Fails unless the plugin is still alive.
    #[new]
    #[pyo3(signature = (context = None))]
    fn py_new(py: Python<'_>, context: Option<PyRef<'_, PluginContext>>) -> PyResult<Self> {
        let plugin = match context {
            Some(context) => context.plugin(),
            None => registry::lookup(py)?.unwrap_or_default(),
        };
        if plugin.strong_count() == 0 {
            return Err(BridgeError::UninitializedContext(PLUGIN_KEY).into());
        }
        Ok(Self { plugin })
    }

    #[pyo3(signature = (*args))]
    fn debug(&self, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        self.emit(Severity::Debug, args)
    }

    #[pyo3(signature = (*args))]
    fn info(&self, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        self.emit(Severity::Info, args)
    }

    #[pyo3(signature = (*args))]
    fn warning(&self, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        self.emit(Severity::Warning, args)
    }

    #[pyo3(signature = (*args))]
    fn error(&self, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        self.emit(Severity::Error, args)
    }

    #[pyo3(signature = (*args))]
    fn write(&self, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        let plugin = self.plugin()?;
        let text = single_argument(args, "write")?;
        self.write_text(&plugin, &text)
    }

    /// Writes each line in order and stops at the first failure.
    /// Lines already forwarded stay forwarded.
    #[pyo3(signature = (*args))]
    fn writelines(&self, args: &Bound<'_, PyTuple>) -> PyResult<()> {
        let plugin = self.plugin()?;
        let lines = single_argument(args, "writelines")?;
        for line in lines.try_iter()? {
            self.write_text(&plugin, &line?)?;
        }
        Ok(())
    }

    #[pyo3(signature = (*_args))]
    fn flush(&self, _args: &Bound<'_, PyTuple>) {}

    fn isatty(&self) -> bool {
        false
    }

    fn writable(&self) -> bool {
        true
    }

    #[getter]
    fn closed(&self) -> bool {
        false
    }

    fn __repr__(&self) -> String {
        match self.plugin.upgrade() {
            Some(plugin) => format!("<Log plugin={:?}>", plugin.name()),
            None => "<Log detached>".to_string(),
        }
    }
}
