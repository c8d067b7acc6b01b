//! Engine-independent vocabulary of the GUI binding layer.
//!
//! This crate defines everything the registrar and an engine must agree on:
//!
//! - **Identity**: [`TypeHash`], [`QualifiedName`]
//! - **Values**: [`Dynamic`] slots, [`ValueObject`], [`HandleRef`] and the
//!   generational [`HandleTable`]
//! - **Types**: [`DataType`] with its [`RefModifier`] and [`ValueClass`],
//!   plus the [`FromDynamic`]/[`IntoDynamic`]/[`ScriptType`] conversions
//! - **Descriptors**: [`NativeTypeDescriptor`], [`EnumDescriptor`],
//!   [`FunctionDescriptor`]
//! - **Calls**: [`NativeFn`], [`CallContext`], [`thunk`] and [`Args`],
//!   overload [`resolve`]
//! - **Engine surface**: the [`ScriptEngine`] trait
//!
//! Nothing here knows about the GUI library itself.

pub mod convert;
pub mod data_type;
pub mod descriptors;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod handles;
pub mod native_fn;
pub mod overload;
pub mod qualified_name;
pub mod thunk;
pub mod type_hash;

pub use convert::{FromDynamic, IntoDynamic, ScriptType};
pub use data_type::{DataType, RefModifier, ValueClass};
pub use descriptors::{
    DefaultValue, EnumDescriptor, EnumValue, FieldDescriptor, FunctionDescriptor, FunctionKind,
    LayoutClass, NativeTypeDescriptor, ParamDescriptor,
};
pub use dynamic::{Dynamic, ValueObject};
pub use engine::ScriptEngine;
pub use error::{ConversionError, DescriptorError, NativeError, RegistrationError};
pub use handles::{HandleRef, HandleTable, NativeHandle};
pub use native_fn::{CallContext, NativeCallable, NativeFn};
pub use overload::{find_ambiguity, is_ambiguous, resolve};
pub use qualified_name::QualifiedName;
pub use thunk::{Args, thunk};
pub use type_hash::{TypeHash, hash_constants, primitives};
