//! Conversion traits between native values and [`Dynamic`] slots.
//!
//! - [`FromDynamic`]: extract a native value from a slot
//! - [`IntoDynamic`]: turn a native value into a slot
//! - [`ScriptType`]: the script-side [`DataType`] of a native type
//!
//! ## Legal conversions
//!
//! - Integers: `i8`..`i64`, `u8`..`u64`, range checked
//! - Floats: `f32`, `f64`; an `Int` slot is accepted, a `Float` slot is
//!   never narrowed to an integer
//! - `bool`, `String`, `()` (void)
//! - `Option<T>` for nullable parameters: `NullHandle` and `Void` map to `None`
//!
//! Registered value types and enums get their impls from the adapter macros
//! in the root crate. Reference types are not converted here; they are
//! resolved through the handle table.

use crate::data_type::DataType;
use crate::dynamic::Dynamic;
use crate::error::ConversionError;

/// Extract a value from a Dynamic slot.
pub trait FromDynamic: Sized {
    /// Returns a `ConversionError` if the slot contains an incompatible value.
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError>;
}

/// Convert a value into a Dynamic slot.
pub trait IntoDynamic {
    fn into_dynamic(self) -> Dynamic;
}

/// A native type with a script-side representation.
pub trait ScriptType {
    /// The type as it appears in a by-value parameter or return position.
    fn data_type() -> DataType;
}

// ============================================================================
// Integer implementations
// ============================================================================

macro_rules! impl_int {
    ($($ty:ty => $dt:expr),* $(,)?) => {
        $(
            impl FromDynamic for $ty {
                fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
                    match slot {
                        Dynamic::Int(v) => <$ty>::try_from(*v).map_err(|_| {
                            ConversionError::IntegerOverflow {
                                value: *v,
                                target_type: stringify!($ty),
                            }
                        }),
                        _ => Err(ConversionError::TypeMismatch {
                            expected: "int",
                            actual: slot.type_name(),
                        }),
                    }
                }
            }

            impl IntoDynamic for $ty {
                fn into_dynamic(self) -> Dynamic {
                    Dynamic::Int(self as i64)
                }
            }

            impl ScriptType for $ty {
                fn data_type() -> DataType {
                    $dt
                }
            }
        )*
    };
}

impl_int!(
    i8 => DataType::INT8,
    i16 => DataType::INT16,
    i32 => DataType::INT,
    i64 => DataType::INT64,
    u8 => DataType::UINT8,
    u16 => DataType::UINT16,
    u32 => DataType::UINT,
    u64 => DataType::UINT64,
);

// ============================================================================
// Float implementations
// ============================================================================

impl FromDynamic for f32 {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::Float(v) => {
                if !v.is_finite() || (*v <= f32::MAX as f64 && *v >= f32::MIN as f64) {
                    Ok(*v as f32)
                } else {
                    Err(ConversionError::FloatConversion {
                        value: *v,
                        target_type: "f32",
                    })
                }
            }
            Dynamic::Int(v) => Ok(*v as f32),
            _ => Err(ConversionError::TypeMismatch {
                expected: "float",
                actual: slot.type_name(),
            }),
        }
    }
}

impl IntoDynamic for f32 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Float(self as f64)
    }
}

impl ScriptType for f32 {
    fn data_type() -> DataType {
        DataType::FLOAT
    }
}

impl FromDynamic for f64 {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::Float(v) => Ok(*v),
            Dynamic::Int(v) => Ok(*v as f64),
            _ => Err(ConversionError::TypeMismatch {
                expected: "float",
                actual: slot.type_name(),
            }),
        }
    }
}

impl IntoDynamic for f64 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Float(self)
    }
}

impl ScriptType for f64 {
    fn data_type() -> DataType {
        DataType::DOUBLE
    }
}

// ============================================================================
// Bool, string and void
// ============================================================================

impl FromDynamic for bool {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::Bool(v) => Ok(*v),
            _ => Err(ConversionError::TypeMismatch {
                expected: "bool",
                actual: slot.type_name(),
            }),
        }
    }
}

impl IntoDynamic for bool {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Bool(self)
    }
}

impl ScriptType for bool {
    fn data_type() -> DataType {
        DataType::BOOL
    }
}

impl FromDynamic for String {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::String(s) => Ok(s.clone()),
            _ => Err(ConversionError::TypeMismatch {
                expected: "string",
                actual: slot.type_name(),
            }),
        }
    }
}

impl IntoDynamic for String {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self)
    }
}

impl IntoDynamic for &str {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::String(self.to_string())
    }
}

impl ScriptType for String {
    fn data_type() -> DataType {
        DataType::STRING
    }
}

impl IntoDynamic for () {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Void
    }
}

impl ScriptType for () {
    fn data_type() -> DataType {
        DataType::VOID
    }
}

// ============================================================================
// Pass-through and nullable
// ============================================================================

impl FromDynamic for Dynamic {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        Ok(slot.clone())
    }
}

impl IntoDynamic for Dynamic {
    fn into_dynamic(self) -> Dynamic {
        self
    }
}

impl<T: FromDynamic> FromDynamic for Option<T> {
    fn from_dynamic(slot: &Dynamic) -> Result<Self, ConversionError> {
        match slot {
            Dynamic::NullHandle | Dynamic::Void => Ok(None),
            other => T::from_dynamic(other).map(Some),
        }
    }
}

impl<T: IntoDynamic> IntoDynamic for Option<T> {
    fn into_dynamic(self) -> Dynamic {
        match self {
            Some(v) => v.into_dynamic(),
            None => Dynamic::NullHandle,
        }
    }
}

impl<T: ScriptType> ScriptType for Option<T> {
    fn data_type() -> DataType {
        T::data_type().nullable()
    }
}
