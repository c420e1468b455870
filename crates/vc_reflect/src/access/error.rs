use alloc::string::String;

use thiserror::Error;

use crate::ops::InvokeError;

// -----------------------------------------------------------------------------
// AccessError

/// An error returned from a failed reflective access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// A primitive type was given where a type with fields is required.
    #[error("Primitive types not supported: {type_path}")]
    InvalidArgument { type_path: &'static str },
    /// No field of that name in the type or any ancestor.
    ///
    /// Empty path segments end up here too.
    #[error("Type {type_path} does not have field {field} in its hierarchy.")]
    FieldNotFound {
        type_path: &'static str,
        field: String,
    },
    /// A path went through a field holding null.
    #[error("Field {field} of type {type_path} is null and cannot be dereferenced")]
    NullIntermediate {
        type_path: &'static str,
        field: String,
    },
    /// No public method of that name in the type or any ancestor.
    #[error("Method {method} not found in type {type_path}")]
    MethodNotFound {
        type_path: &'static str,
        method: String,
    },
    /// The arguments do not fit the method, with the reason.
    #[error("Error invoking {method} with arguments ({args}): {detail}")]
    ArgumentMismatch {
        method: String,
        args: String,
        detail: ArgumentDiagnostic,
    },
    /// A low-level invocation failure the diagnostic could not explain.
    #[error(transparent)]
    Invocation(#[from] InvokeError),
    /// The value given to a set does not convert into the field type.
    #[error("Cannot assign a value of type {value_type} to field {field} of type {field_type} in {type_path}")]
    IncompatibleValue {
        type_path: &'static str,
        field: String,
        field_type: &'static str,
        value_type: &'static str,
    },
    /// A typed read found a value of another type.
    #[error("Expected a value of type {expected}, found {actual}")]
    InvalidDowncast {
        expected: &'static str,
        actual: &'static str,
    },
}

// -----------------------------------------------------------------------------
// ArgumentDiagnostic

/// Why an argument list does not fit a method.
///
/// Only the first failing position is reported.
///
/// ```
/// use vc_reflect::access::ArgumentDiagnostic;
///
/// let detail = ArgumentDiagnostic::Count { expected: 2, received: 1 };
/// assert_eq!(detail.to_string(), "expected 2 args, received 1");
///
/// let detail = ArgumentDiagnostic::NullPrimitive { index: 1 };
/// assert_eq!(detail.to_string(), "arg 1 is a primitive, must not be null");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgumentDiagnostic {
    #[error("expected {expected} args, received {received}")]
    Count { expected: usize, received: usize },
    #[error("arg {index} is a primitive, must not be null")]
    NullPrimitive { index: usize },
    #[error("arg {index} expected type {expected}, got type {actual}")]
    Type {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}
