//! Enum descriptors.

use rustc_hash::FxHashSet;

use crate::error::DescriptorError;
use crate::qualified_name::QualifiedName;
use crate::type_hash::TypeHash;

use super::is_identifier;

/// One `(name, value)` pair of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Description of a native enum or flag set.
///
/// Values keep declaration order; script-side lookups return exactly the
/// native integer. Two names may share a value (aliases such as
/// `COUNT` or combined flag masks).
///
/// # Example
///
/// ```
/// use imgui_script_core::EnumDescriptor;
///
/// let dir = EnumDescriptor::new("Dir")
///     .with_value("Left", 0)
///     .with_value("Right", 1);
/// assert_eq!(dir.get_value("Right"), Some(1));
/// assert_eq!(dir.get_name(0), Some("Left"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub namespace: Vec<String>,
    pub type_hash: TypeHash,
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    /// Create an enum with no values.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            type_hash: TypeHash::from_name(&name),
            name,
            namespace: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add a value.
    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumValue::new(name, value));
        self
    }

    /// Add multiple values.
    pub fn with_values<S: Into<String>>(mut self, values: impl IntoIterator<Item = (S, i64)>) -> Self {
        self.values
            .extend(values.into_iter().map(|(n, v)| EnumValue::new(n, v)));
        self
    }

    /// Set the namespace.
    pub fn in_namespace(mut self, namespace: Vec<String>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.name.clone(), self.namespace.clone())
    }

    /// Get a value by name.
    pub fn get_value(&self, name: &str) -> Option<i64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// Get the first name declared for a value.
    pub fn get_name(&self, value: i64) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.name.as_str())
    }

    /// Check if a value is declared.
    pub fn has_value(&self, value: i64) -> bool {
        self.values.iter().any(|v| v.value == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn validate(&self) -> Result<(), DescriptorError> {
        if !is_identifier(&self.name) {
            return Err(DescriptorError::InvalidName {
                name: self.name.clone(),
            });
        }
        if self.values.is_empty() {
            return Err(DescriptorError::EmptyEnum);
        }
        let mut seen = FxHashSet::default();
        for value in &self.values {
            if !is_identifier(&value.name) {
                return Err(DescriptorError::InvalidName {
                    name: value.name.clone(),
                });
            }
            if !seen.insert(value.name.as_str()) {
                return Err(DescriptorError::DuplicateEnumValue {
                    value: value.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_kept() {
        let cond = EnumDescriptor::new("Cond").with_values([
            ("None", 0),
            ("Always", 1),
            ("Once", 2),
            ("FirstUseEver", 4),
            ("Appearing", 8),
        ]);
        let names: Vec<_> = cond.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["None", "Always", "Once", "FirstUseEver", "Appearing"]);
        assert_eq!(cond.len(), 5);
        assert_eq!(cond.validate(), Ok(()));
    }

    #[test]
    fn aliases_allowed() {
        let dir = EnumDescriptor::new("Dir")
            .with_value("None", -1)
            .with_value("Left", 0)
            .with_value("First", 0);
        assert_eq!(dir.validate(), Ok(()));
        assert_eq!(dir.get_name(0), Some("Left"));
        assert!(dir.has_value(-1));
    }

    #[test]
    fn empty_enum_rejected() {
        assert_eq!(
            EnumDescriptor::new("Empty").validate(),
            Err(DescriptorError::EmptyEnum)
        );
    }

    #[test]
    fn duplicate_name_rejected() {
        let e = EnumDescriptor::new("Dir")
            .with_value("Left", 0)
            .with_value("Left", 1);
        assert_eq!(
            e.validate(),
            Err(DescriptorError::DuplicateEnumValue {
                value: "Left".into()
            })
        );
    }

    #[test]
    fn qualified_name_uses_namespace() {
        let e = EnumDescriptor::new("Dir").in_namespace(vec!["ImGui".into()]);
        assert_eq!(e.qualified_name().to_string(), "ImGui::Dir");
    }
}
