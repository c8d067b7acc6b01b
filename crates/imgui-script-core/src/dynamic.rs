//! Script-side value representation for argument and return slots.

use std::fmt;

use crate::TypeHash;
use crate::handles::HandleRef;

/// A value held in an engine argument or return slot.
///
/// Every value that crosses the boundary is one of these. Integers of all
/// widths are widened to `i64`, floats to `f64`. Registered value types are
/// carried field by field in a [`ValueObject`]; reference types are carried
/// as a non-owning [`HandleRef`].
#[derive(Clone, PartialEq, Default)]
pub enum Dynamic {
    /// Void/empty
    #[default]
    Void,
    /// Integer value (i8..i64 and u8..u64, and enum values)
    Int(i64),
    /// Floating point value (f32 and f64)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// String value (owned)
    String(String),
    /// Copy of a registered value type
    Value(ValueObject),
    /// Weak alias of a native reference object
    Handle(HandleRef),
    /// Null handle
    NullHandle,
}

impl Dynamic {
    /// Get a human-readable name for this slot's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Void => "void",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Bool(_) => "bool",
            Dynamic::String(_) => "string",
            Dynamic::Value(_) => "value",
            Dynamic::Handle(_) => "handle",
            Dynamic::NullHandle => "null",
        }
    }

    /// Check if this slot is void.
    pub fn is_void(&self) -> bool {
        matches!(self, Dynamic::Void)
    }

    /// Check if this slot is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::NullHandle)
    }

    /// Build a value object slot.
    pub fn value(type_hash: TypeHash, fields: Vec<Dynamic>) -> Self {
        Dynamic::Value(ValueObject::new(type_hash, fields))
    }

    /// Integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Dynamic::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Float payload, if any.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Dynamic::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Bool payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// String payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Void => write!(f, "Void"),
            Dynamic::Int(v) => write!(f, "Int({})", v),
            Dynamic::Float(v) => write!(f, "Float({})", v),
            Dynamic::Bool(v) => write!(f, "Bool({})", v),
            Dynamic::String(s) => write!(f, "String({:?})", s),
            Dynamic::Value(v) => write!(f, "Value({:?})", v),
            Dynamic::Handle(h) => write!(f, "Handle({:?})", h),
            Dynamic::NullHandle => write!(f, "NullHandle"),
        }
    }
}

impl From<i64> for Dynamic {
    fn from(v: i64) -> Self {
        Dynamic::Int(v)
    }
}

impl From<i32> for Dynamic {
    fn from(v: i32) -> Self {
        Dynamic::Int(v as i64)
    }
}

impl From<f64> for Dynamic {
    fn from(v: f64) -> Self {
        Dynamic::Float(v)
    }
}

impl From<bool> for Dynamic {
    fn from(v: bool) -> Self {
        Dynamic::Bool(v)
    }
}

impl From<&str> for Dynamic {
    fn from(v: &str) -> Self {
        Dynamic::String(v.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(v: String) -> Self {
        Dynamic::String(v)
    }
}

/// A copied instance of a registered value type.
///
/// Fields are stored in the declaration order of the type's
/// `NativeTypeDescriptor`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueObject {
    /// The registered value type.
    pub type_hash: TypeHash,
    /// Field values in declaration order.
    pub fields: Vec<Dynamic>,
}

impl ValueObject {
    pub fn new(type_hash: TypeHash, fields: Vec<Dynamic>) -> Self {
        Self { type_hash, fields }
    }

    /// Get a field by position.
    pub fn field(&self, index: usize) -> Option<&Dynamic> {
        self.fields.get(index)
    }
}
