//! Native type descriptors: value types and reference (handle) types.

use rustc_hash::FxHashSet;

use crate::data_type::{DataType, ValueClass};
use crate::error::DescriptorError;
use crate::qualified_name::QualifiedName;
use crate::type_hash::TypeHash;

use super::is_identifier;

/// How a native type is laid out and crosses the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutClass {
    /// Built into every engine; never registered.
    Primitive,
    /// Copied field by field.
    Value,
    /// Aliased through the handle table; never copied or owned.
    Handle,
    /// Neither copyable nor referenceable. Cannot be bound.
    Opaque,
}

/// One field of a value type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub data_type: DataType,
    /// Byte offset inside the native type.
    pub offset: usize,
}

/// Description of a native type to be registered.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeTypeDescriptor {
    pub name: String,
    pub namespace: Vec<String>,
    pub type_hash: TypeHash,
    pub layout: LayoutClass,
    pub size: usize,
    pub align: usize,
    pub trivially_copyable: bool,
    /// Fields in declaration order (value types only).
    pub fields: Vec<FieldDescriptor>,
}

impl NativeTypeDescriptor {
    /// Describe a copyable value type.
    pub fn value(name: impl Into<String>, size: usize, align: usize) -> Self {
        let name = name.into();
        Self {
            type_hash: TypeHash::from_name(&name),
            name,
            namespace: Vec::new(),
            layout: LayoutClass::Value,
            size,
            align,
            trivially_copyable: true,
            fields: Vec::new(),
        }
    }

    /// Describe a non-owning reference type.
    pub fn handle(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            type_hash: TypeHash::from_name(&name),
            name,
            namespace: Vec::new(),
            layout: LayoutClass::Handle,
            size: std::mem::size_of::<u64>(),
            align: std::mem::align_of::<u64>(),
            trivially_copyable: true,
            fields: Vec::new(),
        }
    }

    /// Add a field.
    pub fn with_field(mut self, name: impl Into<String>, data_type: DataType, offset: usize) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            data_type: data_type.by_value(),
            offset,
        });
        self
    }

    /// Override the layout class.
    pub fn with_layout(mut self, layout: LayoutClass) -> Self {
        self.layout = layout;
        self
    }

    /// Mark whether a bitwise copy is a valid copy.
    pub fn with_trivially_copyable(mut self, trivially_copyable: bool) -> Self {
        self.trivially_copyable = trivially_copyable;
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

    pub fn is_value(&self) -> bool {
        self.layout == LayoutClass::Value
    }

    pub fn is_handle(&self) -> bool {
        self.layout == LayoutClass::Handle
    }

    /// Position of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Value types this type's fields depend on.
    pub fn dependencies(&self) -> impl Iterator<Item = TypeHash> + '_ {
        self.fields
            .iter()
            .filter(|f| f.data_type.class.is_registered())
            .map(|f| f.data_type.type_hash)
    }

    /// Check that the type can be represented by value or by reference.
    ///
    /// Field types are only checked for their shape here; whether a
    /// registered field type exists is the registrar's concern.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if !is_identifier(&self.name) {
            return Err(DescriptorError::InvalidName {
                name: self.name.clone(),
            });
        }
        match self.layout {
            LayoutClass::Opaque => Err(unsupported(format!(
                "{} is neither copyable by value nor a reference type",
                self.name
            ))),
            LayoutClass::Primitive => Err(unsupported(format!(
                "{} is a primitive and is built into the engine",
                self.name
            ))),
            LayoutClass::Handle => {
                if self.fields.is_empty() {
                    Ok(())
                } else {
                    Err(unsupported(format!(
                        "reference type {} cannot expose fields",
                        self.name
                    )))
                }
            }
            LayoutClass::Value => self.validate_value(),
        }
    }

    fn validate_value(&self) -> Result<(), DescriptorError> {
        if !self.trivially_copyable {
            return Err(unsupported(format!(
                "value type {} is not trivially copyable",
                self.name
            )));
        }
        if self.size == 0 {
            return Err(unsupported(format!("value type {} has zero size", self.name)));
        }
        if self.fields.is_empty() {
            return Err(unsupported(format!("value type {} has no fields", self.name)));
        }
        let mut seen = FxHashSet::default();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(DescriptorError::DuplicateField {
                    field: field.name.clone(),
                });
            }
            match field.data_type.class {
                ValueClass::Void | ValueClass::String | ValueClass::Handle => {
                    return Err(unsupported(format!(
                        "field {}::{} of type {} cannot be copied bitwise",
                        self.name, field.name, field.data_type.name
                    )));
                }
                _ => {}
            }
            if field.data_type.type_hash == self.type_hash {
                return Err(unsupported(format!(
                    "value type {} contains itself",
                    self.name
                )));
            }
            if field.offset >= self.size {
                return Err(unsupported(format!(
                    "field {}::{} at offset {} is outside the {}-byte type",
                    self.name, field.name, field.offset, self.size
                )));
            }
        }
        Ok(())
    }
}

fn unsupported(reason: String) -> DescriptorError {
    DescriptorError::UnsupportedType { reason }
}
