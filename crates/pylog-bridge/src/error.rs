//! Typed errors for the log bridge.

use thiserror::Error;

/// Errors raised by the bridge itself.
///
/// Failures that originate inside the interpreter (a `__str__` that raises,
/// an iterator that fails mid-sequence) are not represented here; they stay
/// native `PyErr` values and propagate untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BridgeError {
    /// No plugin context was published under the registry key when a bridge
    /// object was constructed.
    #[error("Corrupted context: no active plugin registered under `{0}`")]
    UninitializedContext(&'static str),

    /// The bridge object does not (or no longer) reference a live plugin.
    #[error("Not initialized")]
    NotInitialized,

    /// An operation was called with the wrong number of positional arguments.
    #[error("{operation}() takes exactly one argument ({given} given)")]
    Arity {
        /// Interpreter-visible operation name.
        operation: &'static str,
        /// Number of positional arguments received.
        given: usize,
    },

    /// An operation that only accepts text received something else.
    #[error("{operation}() argument must be {expected}, not {found}")]
    ArgumentType {
        /// Interpreter-visible operation name.
        operation: &'static str,
        /// Accepted type.
        expected: &'static str,
        /// Type name of the received value.
        found: String,
    },
}

/// Convenience result alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
