//! Function descriptors: globals, methods on handle types, and constructors
//! of value types.

use rustc_hash::FxHashSet;

use crate::data_type::{DataType, RefModifier, ValueClass};
use crate::dynamic::Dynamic;
use crate::error::DescriptorError;
use crate::native_fn::NativeFn;
use crate::qualified_name::QualifiedName;
use crate::type_hash::TypeHash;

use super::is_identifier;

/// What a function is bound as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    /// Free function in the namespace.
    Global,
    /// Method of a registered reference type; `this` arrives in slot 0.
    Method { owner: TypeHash, owner_name: String },
    /// Constructor behaviour of a registered value type.
    Constructor { owner: TypeHash, owner_name: String },
}

impl FunctionKind {
    pub fn method(owner_name: impl Into<String>) -> Self {
        let owner_name = owner_name.into();
        FunctionKind::Method {
            owner: TypeHash::from_name(&owner_name),
            owner_name,
        }
    }

    pub fn constructor(owner_name: impl Into<String>) -> Self {
        let owner_name = owner_name.into();
        FunctionKind::Constructor {
            owner: TypeHash::from_name(&owner_name),
            owner_name,
        }
    }

    /// Owner type, if any.
    pub fn owner(&self) -> Option<TypeHash> {
        match self {
            FunctionKind::Global => None,
            FunctionKind::Method { owner, .. } | FunctionKind::Constructor { owner, .. } => {
                Some(*owner)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FunctionKind::Global => "function",
            FunctionKind::Method { .. } => "method",
            FunctionKind::Constructor { .. } => "constructor",
        }
    }
}

/// A default argument: the expression shown in declarations and the slot
/// value substituted when the argument is omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValue {
    pub expr: String,
    pub value: Dynamic,
}

impl DefaultValue {
    pub fn new(expr: impl Into<String>, value: Dynamic) -> Self {
        Self {
            expr: expr.into(),
            value,
        }
    }

    /// `null`, for optional handles and optional out-parameters.
    pub fn null() -> Self {
        Self::new("null", Dynamic::NullHandle)
    }
}

/// One parameter of a function.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub default: Option<DefaultValue>,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            default: None,
        }
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Render as `type name [= default]`.
    pub fn declaration(&self) -> String {
        let mut out = format!("{} {}", self.data_type.declaration(), self.name);
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&default.expr);
        }
        out
    }
}

/// Description of one native function or overload.
///
/// The `native` thunk was built for exactly `params`; the descriptor and the
/// thunk are never separated.
#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    pub name: String,
    pub namespace: Vec<String>,
    pub kind: FunctionKind,
    pub params: Vec<ParamDescriptor>,
    pub return_type: DataType,
    /// Position among overloads sharing the script-visible name.
    /// Assigned by the registrar.
    pub overload_index: Option<usize>,
    pub native: NativeFn,
}

impl FunctionDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: FunctionKind,
        params: Vec<ParamDescriptor>,
        return_type: DataType,
        native: NativeFn,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: Vec::new(),
            kind,
            params,
            return_type,
            overload_index: None,
            native,
        }
    }

    /// Number of parameters without a default.
    pub fn min_arity(&self) -> usize {
        self.params.iter().filter(|p| !p.has_default()).count()
    }

    /// Total number of parameters.
    pub fn max_arity(&self) -> usize {
        self.params.len()
    }

    pub fn accepts_arity(&self, supplied: usize) -> bool {
        supplied >= self.min_arity() && supplied <= self.max_arity()
    }

    /// Whether every supplied value is legal for its parameter.
    pub fn accepts_args(&self, args: &[Dynamic]) -> bool {
        self.accepts_arity(args.len())
            && self
                .params
                .iter()
                .zip(args)
                .all(|(p, a)| p.data_type.accepts(a))
    }

    /// Key of the overload set this function belongs to.
    ///
    /// Methods are keyed under their owner (`ImGui::DrawList::AddLine`),
    /// constructors under the owner itself (`ImGui::Vec2`).
    pub fn qualified_name(&self) -> QualifiedName {
        match &self.kind {
            FunctionKind::Global => QualifiedName::new(self.name.clone(), self.namespace.clone()),
            FunctionKind::Method { owner_name, .. } => {
                QualifiedName::new(owner_name.clone(), self.namespace.clone()).child(&self.name)
            }
            FunctionKind::Constructor { owner_name, .. } => {
                QualifiedName::new(owner_name.clone(), self.namespace.clone())
            }
        }
    }

    /// Signature identity: name, owner and parameter types.
    pub fn func_hash(&self) -> TypeHash {
        let params: Vec<TypeHash> = self.params.iter().map(|p| p.data_type.type_hash).collect();
        match &self.kind {
            FunctionKind::Global => {
                TypeHash::from_function(&self.qualified_name().to_string(), &params)
            }
            FunctionKind::Method { owner, .. } => TypeHash::from_method(*owner, &self.name, &params),
            FunctionKind::Constructor { owner, .. } => TypeHash::from_constructor(*owner, &params),
        }
    }

    /// Every registered type this function mentions.
    pub fn referenced_types(&self) -> impl Iterator<Item = &DataType> + '_ {
        self.params
            .iter()
            .map(|p| &p.data_type)
            .chain(std::iter::once(&self.return_type))
            .filter(|dt| dt.class.is_registered())
    }

    /// Render the engine declaration.
    ///
    /// ```text
    /// bool SliderFloat(const string &in label, float &inout v, float v_min, float v_max, const string &in format = "%.3f", int flags = 0)
    /// ```
    pub fn declaration(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ParamDescriptor::declaration).collect();
        match &self.kind {
            FunctionKind::Constructor { owner_name, .. } => {
                format!("{}({})", owner_name, params.join(", "))
            }
            _ => format!(
                "{} {}({})",
                self.return_type.declaration(),
                self.name,
                params.join(", ")
            ),
        }
    }

    /// Check the descriptor on its own.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if !is_identifier(&self.name) {
            return Err(DescriptorError::InvalidName {
                name: self.name.clone(),
            });
        }

        let mut seen = FxHashSet::default();
        let mut previous_default: Option<&str> = None;
        for param in &self.params {
            if !seen.insert(param.name.as_str()) {
                return Err(DescriptorError::DuplicateParam {
                    param: param.name.clone(),
                });
            }
            if param.data_type.is_void() {
                return Err(DescriptorError::UnsupportedType {
                    reason: format!("parameter '{}' is void", param.name),
                });
            }
            match (&param.default, previous_default) {
                (Some(default), _) => {
                    if !param.data_type.accepts(&default.value) {
                        return Err(DescriptorError::DefaultTypeMismatch {
                            param: param.name.clone(),
                            expected: param.data_type.name,
                        });
                    }
                    previous_default = Some(param.name.as_str());
                }
                (None, Some(previous)) => {
                    return Err(DescriptorError::DefaultOrdering {
                        param: param.name.clone(),
                        previous: previous.to_string(),
                    });
                }
                (None, None) => {}
            }
        }

        if self.return_type.ref_modifier != RefModifier::None {
            return Err(DescriptorError::InvalidReturn {
                reason: format!(
                    "{} returns a reference ({})",
                    self.name,
                    self.return_type.declaration()
                ),
            });
        }
        if let FunctionKind::Constructor { owner, owner_name } = &self.kind
            && (self.return_type.type_hash != *owner
                || self.return_type.class != ValueClass::Value)
        {
            return Err(DescriptorError::InvalidReturn {
                reason: format!("constructor of {owner_name} must produce {owner_name}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NativeError;
    use crate::native_fn::CallContext;

    fn noop() -> NativeFn {
        NativeFn::new(|_: &mut CallContext| Ok::<(), NativeError>(()))
    }

    fn slider_float() -> FunctionDescriptor {
        FunctionDescriptor::new(
            "SliderFloat",
            FunctionKind::Global,
            vec![
                ParamDescriptor::new("label", DataType::STRING),
                ParamDescriptor::new("v", DataType::FLOAT.with_ref(RefModifier::InOut)),
                ParamDescriptor::new("v_min", DataType::FLOAT),
                ParamDescriptor::new("v_max", DataType::FLOAT),
                ParamDescriptor::new("format", DataType::STRING)
                    .with_default(DefaultValue::new("\"%.3f\"", Dynamic::from("%.3f"))),
                ParamDescriptor::new("flags", DataType::INT)
                    .with_default(DefaultValue::new("0", Dynamic::Int(0))),
            ],
            DataType::BOOL,
            noop(),
        )
    }

    #[test]
    fn arity_range() {
        let f = slider_float();
        assert_eq!(f.min_arity(), 4);
        assert_eq!(f.max_arity(), 6);
        assert!(f.accepts_arity(5));
        assert!(!f.accepts_arity(3));
        assert!(!f.accepts_arity(7));
    }

    #[test]
    fn declaration_rendering() {
        assert_eq!(
            slider_float().declaration(),
            "bool SliderFloat(const string &in label, float &inout v, float v_min, float v_max, const string &in format = \"%.3f\", int flags = 0)"
        );
    }

    #[test]
    fn constructor_declaration() {
        let ctor = FunctionDescriptor::new(
            "Vec2",
            FunctionKind::constructor("Vec2"),
            vec![
                ParamDescriptor::new("x", DataType::FLOAT),
                ParamDescriptor::new("y", DataType::FLOAT),
            ],
            DataType::value("Vec2").by_value(),
            noop(),
        );
        assert_eq!(ctor.declaration(), "Vec2(float x, float y)");
        assert_eq!(ctor.validate(), Ok(()));
    }

    #[test]
    fn default_ordering_violation() {
        let mut f = slider_float();
        f.params.push(ParamDescriptor::new("extra", DataType::INT));
        assert_eq!(
            f.validate(),
            Err(DescriptorError::DefaultOrdering {
                param: "extra".into(),
                previous: "flags".into()
            })
        );
    }

    #[test]
    fn default_type_mismatch() {
        let f = FunctionDescriptor::new(
            "Checkbox",
            FunctionKind::Global,
            vec![ParamDescriptor::new("v", DataType::BOOL)
                .with_default(DefaultValue::new("0", Dynamic::Int(0)))],
            DataType::BOOL,
            noop(),
        );
        assert!(matches!(
            f.validate(),
            Err(DescriptorError::DefaultTypeMismatch { .. })
        ));
    }

    #[test]
    fn duplicate_param_rejected() {
        let f = FunctionDescriptor::new(
            "Bad",
            FunctionKind::Global,
            vec![
                ParamDescriptor::new("a", DataType::INT),
                ParamDescriptor::new("a", DataType::INT),
            ],
            DataType::VOID,
            noop(),
        );
        assert!(matches!(
            f.validate(),
            Err(DescriptorError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn reference_return_rejected() {
        let f = FunctionDescriptor::new(
            "Bad",
            FunctionKind::Global,
            vec![],
            DataType::FLOAT.with_ref(RefModifier::Out),
            noop(),
        );
        assert!(matches!(
            f.validate(),
            Err(DescriptorError::InvalidReturn { .. })
        ));
    }

    #[test]
    fn qualified_names_by_kind() {
        let mut f = slider_float();
        f.namespace = vec!["ImGui".into()];
        assert_eq!(f.qualified_name().to_string(), "ImGui::SliderFloat");

        let mut m = FunctionDescriptor::new(
            "AddLine",
            FunctionKind::method("DrawList"),
            vec![],
            DataType::VOID,
            noop(),
        );
        m.namespace = vec!["ImGui".into()];
        assert_eq!(m.qualified_name().to_string(), "ImGui::DrawList::AddLine");
        assert_ne!(m.func_hash(), f.func_hash());
    }

    #[test]
    fn overloads_have_distinct_hashes() {
        let a = FunctionDescriptor::new(
            "PushID",
            FunctionKind::Global,
            vec![ParamDescriptor::new("str_id", DataType::STRING)],
            DataType::VOID,
            noop(),
        );
        let b = FunctionDescriptor::new(
            "PushID",
            FunctionKind::Global,
            vec![ParamDescriptor::new("int_id", DataType::INT)],
            DataType::VOID,
            noop(),
        );
        assert_ne!(a.func_hash(), b.func_hash());
        assert!(a.accepts_args(&[Dynamic::from("x")]));
        assert!(!a.accepts_args(&[Dynamic::Int(1)]));
    }
}
