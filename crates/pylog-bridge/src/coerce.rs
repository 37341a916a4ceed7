//! Text coercion for interpreter values
//!
//! Every helper here hands back a [`TextValue`], which owns exactly one
//! interpreter reference to the string it wraps. The reference is released
//! when the value is dropped, on the success path and on every `?` exit alike.

use crate::error::{BridgeError, BridgeResult};
use pyo3::prelude::*;
use pyo3::types::PyString;
use std::borrow::Cow;

/// A transient interpreter string kept alive for the duration of one call.
#[derive(Debug)]
pub struct TextValue<'py> {
    text: Bound<'py, PyString>,
}

impl<'py> TextValue<'py> {
    /// Characters of the string. Unpaired surrogates are replaced rather than
    /// failing the call.
    pub fn as_str(&self) -> Cow<'_, str> {
        self.text.to_string_lossy()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> Bound<'py, PyString> {
        self.text
    }
}

/// Text form of an arbitrary value: `str` instances as-is, anything else via `str(value)`.
///
/// Errors raised by the value's own `__str__` propagate unchanged.
pub fn to_text<'py>(value: &Bound<'py, PyAny>) -> PyResult<TextValue<'py>> {
    let text = match native_text(value) {
        Some(text) => text,
        None => value.str()?,
    };
    Ok(TextValue { text })
}

/// Text form of a value that must already be a `str`.
pub fn expect_text<'py>(
    value: &Bound<'py, PyAny>,
    operation: &'static str,
) -> BridgeResult<TextValue<'py>> {
    native_text(value)
        .map(|text| TextValue { text })
        .ok_or_else(|| BridgeError::ArgumentType {
            operation,
            expected: "str",
            found: type_name(value),
        })
}

fn native_text<'py>(value: &Bound<'py, PyAny>) -> Option<Bound<'py, PyString>> {
    if value.is_instance_of::<PyString>() {
        value.extract::<Bound<'py, PyString>>().ok()
    } else {
        None
    }
}

fn type_name(value: &Bound<'_, PyAny>) -> String {
    value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "object".to_string())
}
