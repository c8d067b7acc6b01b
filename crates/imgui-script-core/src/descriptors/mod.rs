//! Descriptors for everything the registrar installs.
//!
//! Three kinds, all immutable once built:
//!
//! - [`NativeTypeDescriptor`]: value types and reference types
//! - [`EnumDescriptor`]: enums and flag sets
//! - [`FunctionDescriptor`]: globals, methods and constructors, each with
//!   its calling thunk
//!
//! Function descriptors refer to types only through the `TypeHash` inside a
//! [`DataType`](crate::DataType), never the other way round.

mod enum_desc;
mod function_desc;
mod type_desc;

pub use enum_desc::{EnumDescriptor, EnumValue};
pub use function_desc::{DefaultValue, FunctionDescriptor, FunctionKind, ParamDescriptor};
pub use type_desc::{FieldDescriptor, LayoutClass, NativeTypeDescriptor};

/// Check that a name is a plain script identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
