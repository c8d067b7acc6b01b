//! A batch of descriptors to register together.

use imgui_script_core::{EnumDescriptor, FunctionDescriptor, NativeTypeDescriptor};

use crate::adapter::{NativeType, ScriptEnum};

/// Enums, types and functions collected by the binding modules.
///
/// Descriptors carry no namespace; the registrar places the whole batch in
/// the namespace from its [`BindingOptions`](crate::BindingOptions).
///
/// ```ignore
/// pub fn module<G: Gui + 'static>() -> Module {
///     Module::new()
///         .enumeration::<Cond>()
///         .ty::<Vec2>()
///         .function(FunctionBuilder::new("Separator").native(|gui: &mut G, _| {
///             gui.separator();
///             Ok(())
///         }))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Module {
    pub enums: Vec<EnumDescriptor>,
    pub types: Vec<NativeTypeDescriptor>,
    pub functions: Vec<FunctionDescriptor>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enumeration<E: ScriptEnum>(mut self) -> Self {
        self.enums.push(E::descriptor());
        self
    }

    pub fn ty<T: NativeType>(mut self) -> Self {
        self.types.push(T::descriptor());
        self
    }

    pub fn function(mut self, desc: FunctionDescriptor) -> Self {
        self.functions.push(desc);
        self
    }

    pub fn functions(mut self, descs: impl IntoIterator<Item = FunctionDescriptor>) -> Self {
        self.functions.extend(descs);
        self
    }

    /// Append another module; order is preserved.
    pub fn merge(mut self, other: Module) -> Self {
        self.enums.extend(other.enums);
        self.types.extend(other.types);
        self.functions.extend(other.functions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.types.is_empty() && self.functions.is_empty()
    }

    /// Number of descriptors of all kinds.
    pub fn len(&self) -> usize {
        self.enums.len() + self.types.len() + self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FunctionBuilder;
    use crate::gui::{Cond, Vec2};

    #[test]
    fn merge_keeps_order() {
        let a = Module::new()
            .enumeration::<Cond>()
            .function(FunctionBuilder::new("A").native(|_: &mut (), _| Ok(())));
        let b = Module::new()
            .ty::<Vec2>()
            .function(FunctionBuilder::new("B").native(|_: &mut (), _| Ok(())));
        let m = a.merge(b);
        assert_eq!(m.len(), 4);
        let names: Vec<_> = m.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(m.types[0].name, "Vec2");
        assert!(!m.is_empty());
        assert!(Module::new().is_empty());
    }
}
