//! Conversions from bridge errors into interpreter exceptions
//!
//! Implements `From<BridgeError> for PyErr` so that bridge operations can use
//! the `?` operator inside `#[pymethods]`.

use crate::error::BridgeError;
use pyo3::PyErr;
use pyo3::exceptions::{PyRuntimeError, PyTypeError};

impl From<BridgeError> for PyErr {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::UninitializedContext(_) | BridgeError::NotInitialized => {
                PyRuntimeError::new_err(err.to_string())
            }
            BridgeError::Arity { .. } | BridgeError::ArgumentType { .. } => {
                PyTypeError::new_err(err.to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PLUGIN_KEY;
    use pyo3::Python;

    #[test]
    fn test_state_errors_become_runtime_error() {
        Python::attach(|py| {
            let err: PyErr = BridgeError::NotInitialized.into();
            assert!(err.is_instance_of::<PyRuntimeError>(py));
            assert!(err.to_string().contains("Not initialized"));

            let err: PyErr = BridgeError::UninitializedContext(PLUGIN_KEY).into();
            assert!(err.is_instance_of::<PyRuntimeError>(py));
            assert!(err.to_string().contains("__plugin__"));
        });
    }

    #[test]
    fn test_argument_error_becomes_type_error() {
        Python::attach(|py| {
            let err: PyErr = BridgeError::ArgumentType {
                operation: "write",
                expected: "str",
                found: "int".to_string(),
            }
            .into();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert!(err.to_string().contains("write() argument must be str, not int"));

            let err: PyErr = BridgeError::Arity {
                operation: "info",
                given: 0,
            }
            .into();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert!(err.to_string().contains("info() takes exactly one argument (0 given)"));
        });
    }
}
