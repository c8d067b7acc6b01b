//! Function Adapter: builds a [`FunctionDescriptor`] and its calling thunk
//! from one typed closure.
//!
//! The builder records the script-visible signature (parameter types, pass
//! modes, defaults, return type); [`FunctionBuilder::native`] turns the same
//! parameter list into the thunk, so signature and marshaling never drift
//! apart.
//!
//! ```ignore
//! FunctionBuilder::new("SliderFloat")
//!     .param::<String>("label")
//!     .inout::<f32>("v")
//!     .param::<f32>("v_min")
//!     .param::<f32>("v_max")
//!     .param_default("format", "%.3f".to_string())
//!     .param_default("flags", SliderFlags::empty())
//!     .returns::<bool>()
//!     .native(|gui: &mut G, args| { ... })
//! ```

use std::any::Any;

use imgui_script_core::{
    Args, DataType, DefaultValue, Dynamic, FunctionDescriptor, FunctionKind, IntoDynamic,
    NativeError, NativeHandle, ParamDescriptor, RefModifier, ScriptType, ValueClass, thunk,
};

use super::types::NativeType;

/// Signature builder for one function, method or constructor overload.
#[derive(Debug, Clone)]
pub struct FunctionBuilder {
    name: String,
    kind: FunctionKind,
    params: Vec<ParamDescriptor>,
    return_type: DataType,
}

impl FunctionBuilder {
    /// A global function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FunctionKind::Global,
            params: Vec::new(),
            return_type: DataType::VOID,
        }
    }

    /// A method of the handle type `T`; `this` arrives in slot 0.
    pub fn method<T: NativeHandle>(name: impl Into<String>) -> Self {
        Self {
            kind: FunctionKind::method(T::NAME),
            ..Self::new(name)
        }
    }

    /// A constructor of the value type `T`.
    pub fn constructor<T: NativeType>() -> Self {
        Self {
            kind: FunctionKind::constructor(T::NAME),
            return_type: T::data_type().by_value(),
            ..Self::new(T::NAME)
        }
    }

    fn push(mut self, param: ParamDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// A required input parameter.
    pub fn param<T: ScriptType>(self, name: &str) -> Self {
        self.push(ParamDescriptor::new(name, T::data_type()))
    }

    /// An input parameter with a default; the declaration shows the value.
    pub fn param_default<T: ScriptType + IntoDynamic>(self, name: &str, value: T) -> Self {
        let data_type = T::data_type();
        let value = value.into_dynamic();
        let expr = render_default(&data_type, &value);
        self.push(ParamDescriptor::new(name, data_type).with_default(DefaultValue::new(expr, value)))
    }

    /// An input parameter with a default shown as `expr`.
    pub fn param_default_expr<T: ScriptType + IntoDynamic>(
        self,
        name: &str,
        value: T,
        expr: &str,
    ) -> Self {
        self.push(
            ParamDescriptor::new(name, T::data_type())
                .with_default(DefaultValue::new(expr, value.into_dynamic())),
        )
    }

    /// A required `&inout` parameter.
    pub fn inout<T: ScriptType>(self, name: &str) -> Self {
        self.push(ParamDescriptor::new(
            name,
            T::data_type().with_ref(RefModifier::InOut),
        ))
    }

    /// An optional `&inout` parameter, `null` when omitted.
    pub fn inout_opt<T: ScriptType>(self, name: &str) -> Self {
        self.push(
            ParamDescriptor::new(name, T::data_type().with_ref(RefModifier::InOut).nullable())
                .with_default(DefaultValue::null()),
        )
    }

    /// A required `&out` parameter.
    pub fn out<T: ScriptType>(self, name: &str) -> Self {
        self.push(ParamDescriptor::new(
            name,
            T::data_type().with_ref(RefModifier::Out),
        ))
    }

    /// Return type, by value.
    pub fn returns<T: ScriptType>(mut self) -> Self {
        self.return_type = T::data_type().by_value();
        self
    }

    /// Attach the native call and finish the descriptor.
    ///
    /// `H` is the host the engine passes on every call (the GUI backend for
    /// GUI functions, `()` for value constructors).
    pub fn native<H, R, F>(self, f: F) -> FunctionDescriptor
    where
        H: Any,
        R: IntoDynamic,
        F: Fn(&mut H, &mut Args<'_>) -> Result<R, NativeError> + Send + Sync + 'static,
    {
        let native = thunk(self.params.clone(), f);
        FunctionDescriptor::new(self.name, self.kind, self.params, self.return_type, native)
    }
}

/// Render a default value as a declaration expression.
pub fn render_default(data_type: &DataType, value: &Dynamic) -> String {
    match value {
        Dynamic::Value(obj) => {
            let fields: Vec<String> = obj
                .fields
                .iter()
                .map(|field| render_literal(field))
                .collect();
            format!("{}({})", data_type.name, fields.join(", "))
        }
        Dynamic::Float(v) if data_type.class == ValueClass::Float => {
            if data_type.name == "float" {
                format!("{:?}f", *v as f32)
            } else {
                format!("{v:?}")
            }
        }
        other => render_literal(other),
    }
}

fn render_literal(value: &Dynamic) -> String {
    match value {
        Dynamic::Void | Dynamic::NullHandle | Dynamic::Handle(_) => "null".to_string(),
        Dynamic::Int(v) => v.to_string(),
        Dynamic::Float(v) => format!("{:?}f", *v as f32),
        Dynamic::Bool(v) => v.to_string(),
        Dynamic::String(s) => format!("{s:?}"),
        Dynamic::Value(obj) => {
            let fields: Vec<String> = obj.fields.iter().map(render_literal).collect();
            format!("{{{}}}", fields.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::{SliderFlags, Vec2};
    use imgui_script_core::{CallContext, HandleTable};

    fn slider() -> FunctionDescriptor {
        FunctionBuilder::new("SliderFloat")
            .param::<String>("label")
            .inout::<f32>("v")
            .param::<f32>("v_min")
            .param::<f32>("v_max")
            .param_default("format", "%.3f".to_string())
            .param_default("flags", SliderFlags::empty())
            .returns::<bool>()
            .native(|calls: &mut Vec<String>, args| {
                let label: String = args.get(0)?;
                let v: f32 = args.get(1)?;
                calls.push(format!("{label} {v}"));
                args.set(1, v + 1.0)?;
                Ok(true)
            })
    }

    #[test]
    fn declaration_shows_modes_and_defaults() {
        assert_eq!(
            slider().declaration(),
            "bool SliderFloat(const string &in label, float &inout v, float v_min, \
             float v_max, const string &in format = \"%.3f\", SliderFlags flags = 0)"
        );
    }

    #[test]
    fn arity_comes_from_defaults() {
        let desc = slider();
        assert_eq!(desc.min_arity(), 4);
        assert_eq!(desc.max_arity(), 6);
        assert_eq!(desc.validate(), Ok(()));
    }

    #[test]
    fn native_writes_back_inout() {
        let desc = slider();
        let mut slots = vec![
            Dynamic::from("vol"),
            Dynamic::Float(0.5),
            Dynamic::Float(0.0),
            Dynamic::Float(1.0),
        ];
        let mut ret = Dynamic::Void;
        let mut handles = HandleTable::default();
        let mut calls: Vec<String> = Vec::new();
        let mut ctx = CallContext::new(
            "SliderFloat",
            &mut slots,
            0,
            &mut ret,
            &mut handles,
            &mut calls,
        );
        desc.native.call(&mut ctx).unwrap();
        assert_eq!(calls, vec!["vol 0.5".to_string()]);
        assert_eq!(slots[1], Dynamic::Float(1.5));
        assert_eq!(ret, Dynamic::Bool(true));
    }

    #[test]
    fn optional_inout_defaults_to_null() {
        let desc = FunctionBuilder::new("ShowDemoWindow")
            .inout_opt::<bool>("p_open")
            .native(|_: &mut (), args| Ok(args.is_null(0)));
        assert_eq!(
            desc.declaration(),
            "void ShowDemoWindow(bool &inout p_open = null)"
        );
        assert_eq!(desc.min_arity(), 0);
    }

    #[test]
    fn constructor_returns_owner() {
        let desc = FunctionBuilder::constructor::<Vec2>()
            .param::<f32>("x")
            .param::<f32>("y")
            .native(|_: &mut (), args| {
                Ok(Vec2 {
                    x: args.get(0)?,
                    y: args.get(1)?,
                })
            });
        assert_eq!(desc.declaration(), "Vec2(float x, float y)");
        assert_eq!(desc.validate(), Ok(()));
    }

    #[test]
    fn renders_defaults() {
        let v = Vec2 { x: 0.0, y: -1.5 }.into_dynamic();
        assert_eq!(render_default(&Vec2::data_type(), &v), "Vec2(0.0f, -1.5f)");
        assert_eq!(render_default(&DataType::FLOAT, &Dynamic::Float(1.0)), "1.0f");
        assert_eq!(render_default(&DataType::DOUBLE, &Dynamic::Float(0.25)), "0.25");
        assert_eq!(render_default(&DataType::BOOL, &Dynamic::Bool(true)), "true");
        assert_eq!(render_default(&DataType::STRING, &Dynamic::from("a\"b")), "\"a\\\"b\"");
    }
}
