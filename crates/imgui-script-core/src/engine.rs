//! The registration surface a scripting engine exposes to the registrar.

use crate::descriptors::{EnumDescriptor, FunctionDescriptor, NativeTypeDescriptor};
use crate::error::RegistrationError;
use crate::qualified_name::QualifiedName;
use crate::type_hash::TypeHash;

/// Registration primitives of a scripting engine.
///
/// The registrar validates a whole batch before calling any of these, so an
/// implementation only has to refuse what it cannot hold (duplicates, its
/// own limits). Engines that can undo registrations override the
/// transaction hooks; the default hooks do nothing and report that rollback
/// is unsupported.
pub trait ScriptEngine {
    /// Install an enum and all of its values.
    fn register_enum(&mut self, desc: EnumDescriptor) -> Result<(), RegistrationError>;

    /// Install a value type or reference type.
    fn register_type(&mut self, desc: NativeTypeDescriptor) -> Result<(), RegistrationError>;

    /// Install one function, method or constructor overload.
    fn register_function(&mut self, desc: FunctionDescriptor) -> Result<(), RegistrationError>;

    /// Whether a type or enum with this name is installed.
    fn contains_type(&self, name: &QualifiedName) -> bool;

    /// Whether a type with this identity is installed (primitives included).
    fn knows_type(&self, hash: TypeHash) -> bool;

    /// Whether a function with the same signature is installed.
    fn contains_function(&self, desc: &FunctionDescriptor) -> bool;

    /// Overloads already installed under a name, in registration order.
    ///
    /// The registrar checks new candidates against these for ambiguity and
    /// numbers them after the existing ones.
    fn overloads(&self, name: &QualifiedName) -> &[FunctionDescriptor];

    /// Start a batch of registrations that can be undone.
    fn begin_transaction(&mut self) {}

    /// Keep everything registered since `begin_transaction`.
    fn commit(&mut self) {}

    /// Undo everything registered since `begin_transaction`.
    fn rollback(&mut self) {}

    fn supports_rollback(&self) -> bool {
        false
    }
}
