//! Type and Function Adapters.
//!
//! - [`types`]: [`NativeType`], [`ScriptEnum`] and the declaration macros
//! - [`function`]: [`FunctionBuilder`], one descriptor plus thunk per overload

pub mod function;
pub mod types;

pub use function::{FunctionBuilder, render_default};
pub use types::{NativeType, ScriptEnum};

pub(crate) use types::{script_enum, script_flags};
