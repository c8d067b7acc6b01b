//! Setup errors.
//!
//! Every registration failure surfaces as one [`SetupError`], returned from
//! the entry point before any script runs. Thunks never produce it; their
//! failures are [`NativeError`](imgui_script_core::NativeError)s.

use thiserror::Error;

use imgui_script_core::{DescriptorError, RegistrationError};

/// A registration failure, naming the descriptor and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to register {descriptor}: {kind}")]
pub struct SetupError {
    /// The failed descriptor, e.g. `enum ImGui::Cond` or
    /// `function ImGui::Button (bool Button(const string &in label, ...))`.
    pub descriptor: String,
    pub kind: SetupErrorKind,
}

impl SetupError {
    pub fn new(descriptor: impl Into<String>, kind: SetupErrorKind) -> Self {
        Self {
            descriptor: descriptor.into(),
            kind,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(
            self.kind,
            SetupErrorKind::Duplicate { .. }
                | SetupErrorKind::Engine(
                    RegistrationError::DuplicateType(_)
                        | RegistrationError::DuplicateRegistration { .. }
                )
        )
    }
}

/// Why a descriptor could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupErrorKind {
    /// Malformed descriptor: bad name, default ordering, unsupported shape.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("{kind} '{name}' is already registered")]
    Duplicate { name: String, kind: &'static str },

    #[error("references unknown type '{name}'")]
    UnknownType { name: String },

    #[error("overloads #{first} and #{second} accept the same arguments")]
    AmbiguousOverload { first: usize, second: usize },

    #[error("owner '{owner}' must be a {expected} type")]
    OwnerMismatch {
        owner: String,
        expected: &'static str,
    },

    #[error("type '{name}' is part of a field dependency cycle")]
    DependencyCycle { name: String },

    /// The engine refused the registration.
    #[error("engine rejected registration: {0}")]
    Engine(#[from] RegistrationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_descriptor_and_reason() {
        let err = SetupError::new(
            "function ImGui::Button",
            SetupErrorKind::Duplicate {
                name: "ImGui::Button".into(),
                kind: "function",
            },
        );
        assert_eq!(
            err.to_string(),
            "failed to register function ImGui::Button: function 'ImGui::Button' is already registered"
        );
        assert!(err.is_duplicate());
    }

    #[test]
    fn wraps_descriptor_errors() {
        let kind: SetupErrorKind = DescriptorError::EmptyEnum.into();
        let err = SetupError::new("enum ImGui::Empty", kind);
        assert!(err.to_string().starts_with("failed to register enum ImGui::Empty: "));
        assert!(!err.is_duplicate());
    }

    #[test]
    fn engine_duplicates_count_as_duplicates() {
        let err = SetupError::new(
            "type ImGui::Vec2",
            RegistrationError::DuplicateType("ImGui::Vec2".into()).into(),
        );
        assert!(err.is_duplicate());
    }
}
