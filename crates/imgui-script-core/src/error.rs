//! Error types shared by the binding layer.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ConversionError     - one script value could not become one native value
//! NativeError         - a thunk call failed (arity, argument, handle, host)
//! DescriptorError     - a descriptor is malformed on its own
//! RegistrationError   - the engine refused a registration call
//! ```
//!
//! `NativeError` is only ever produced while a script is running and is
//! scoped to the single offending call. `DescriptorError` and
//! `RegistrationError` are only produced during setup; the root crate wraps
//! them into its `SetupError`.

use thiserror::Error;

// ============================================================================
// Conversion Errors
// ============================================================================

/// Errors that occur when converting a script value into a native value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The slot holds a different kind of value.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Attempted to convert a null handle to a non-nullable type.
    #[error("null handle cannot be converted to {target_type}")]
    NullHandle { target_type: &'static str },

    /// Integer does not fit the native integer type.
    #[error("integer overflow: value {value} does not fit in {target_type}")]
    IntegerOverflow {
        value: i64,
        target_type: &'static str,
    },

    /// Finite float outside the native float range.
    #[error("float conversion error: value {value} cannot be represented as {target_type}")]
    FloatConversion {
        value: f64,
        target_type: &'static str,
    },

    /// Integer that names no entry of a closed enum.
    #[error("{value} is not a valid {enum_name} value")]
    InvalidEnumValue {
        value: i64,
        enum_name: &'static str,
    },

    /// A value object carries the wrong number of fields.
    #[error("{type_name} expects {expected} fields, got {actual}")]
    FieldCount {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value object field failed to convert.
    #[error("field '{field}' of {type_name}: {source}")]
    Field {
        type_name: &'static str,
        field: &'static str,
        #[source]
        source: Box<ConversionError>,
    },
}

// ============================================================================
// Native (call-time) Errors
// ============================================================================

/// Errors raised by a thunk while a script call is being forwarded.
///
/// None of these corrupt engine state; the engine decides whether the
/// running script halts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// Supplied argument count is outside `[min, max]`.
    #[error("{function}: expected {} arguments, got {supplied}", arity_range(*min, *max))]
    Arity {
        function: String,
        supplied: usize,
        min: usize,
        max: usize,
    },

    /// One argument could not be converted to its native parameter type.
    #[error("{function}: argument {index}: {source}")]
    Argument {
        function: String,
        index: usize,
        #[source]
        source: ConversionError,
    },

    /// Several overloads accept the argument count but none the values.
    #[error("{function}: no overload accepts ({})", supplied.join(", "))]
    NoMatchingOverload {
        function: String,
        supplied: Vec<&'static str>,
    },

    /// No function of that name is bound.
    #[error("unknown function: {name}")]
    UnknownFunction { name: String },

    /// A conversion failure outside of positional argument unpacking.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Invalid `this` slot for a method call.
    #[error("invalid 'this' reference: {message}")]
    InvalidThis { message: String },

    /// Argument index out of bounds.
    #[error("argument index {index} out of bounds (function has {count} arguments)")]
    ArgumentIndexOutOfBounds { index: usize, count: usize },

    /// The handle outlived the scope that produced it.
    #[error("stale handle: slot {index} was invalidated")]
    StaleHandle { index: u32 },

    /// The handle points at a different native type.
    #[error("handle type mismatch: expected {expected}")]
    HandleTypeMismatch { expected: &'static str },

    /// The host passed to the call is not the backend the thunk was built for.
    #[error("host mismatch: thunk expects {expected}")]
    HostMismatch { expected: &'static str },

    /// Generic native error.
    #[error("native error: {message}")]
    Other { message: String },
}

fn arity_range(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min}..={max}")
    }
}

impl NativeError {
    /// Create an "invalid this" error with a message.
    pub fn invalid_this(message: impl Into<String>) -> Self {
        NativeError::InvalidThis {
            message: message.into(),
        }
    }

    /// Create a generic native error.
    pub fn other(message: impl Into<String>) -> Self {
        NativeError::Other {
            message: message.into(),
        }
    }

    /// Check if this is an arity error.
    pub fn is_arity(&self) -> bool {
        matches!(self, NativeError::Arity { .. })
    }

    /// Check if this is a type conversion error of any flavour.
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            NativeError::Argument { .. }
                | NativeError::Conversion(_)
                | NativeError::NoMatchingOverload { .. }
        )
    }
}

// ============================================================================
// Descriptor Errors
// ============================================================================

/// A descriptor that is malformed on its own, independent of any engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A parameter without default follows one with a default.
    #[error("parameter '{param}' has no default but follows defaulted parameter '{previous}'")]
    DefaultOrdering { param: String, previous: String },

    /// A default value is not a legal value of its parameter type.
    #[error("default for parameter '{param}' is not a valid {expected}")]
    DefaultTypeMismatch {
        param: String,
        expected: &'static str,
    },

    /// Two parameters share a name.
    #[error("duplicate parameter '{param}'")]
    DuplicateParam { param: String },

    /// The return type cannot be produced by a native call.
    #[error("invalid return type: {reason}")]
    InvalidReturn { reason: String },

    /// The type cannot be represented by value or by reference.
    #[error("unsupported type shape: {reason}")]
    UnsupportedType { reason: String },

    /// Two fields of a value type share a name.
    #[error("duplicate field '{field}'")]
    DuplicateField { field: String },

    /// An enum with no entries.
    #[error("enum declares no values")]
    EmptyEnum,

    /// Two enum entries share a name.
    #[error("duplicate enum value '{value}'")]
    DuplicateEnumValue { value: String },

    /// A name that the engine cannot accept.
    #[error("invalid name '{name}'")]
    InvalidName { name: String },
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors returned by the engine's registration primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A referenced type was not found.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// A type or enum with this name already exists.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A registration with this name and signature already exists.
    #[error("duplicate registration: {name} already registered as {kind}")]
    DuplicateRegistration {
        /// The name that was duplicated.
        name: String,
        /// What kind of thing was already registered (e.g., "function").
        kind: String,
    },

    /// A method or constructor names an owner that is not registered.
    #[error("owner type not found for {member}: {owner}")]
    OwnerNotFound { member: String, owner: String },

    /// The engine refused the registration with its own code.
    #[error("engine rejected {what} (code {code})")]
    Rejected { what: String, code: i32 },
}
