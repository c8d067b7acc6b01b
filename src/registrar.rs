//! The Registrar: installs a [`Module`] into a [`ScriptEngine`].
//!
//! Registration is staged:
//!
//! 1. **Stage** (no engine mutation): stamp the namespace, drop blacklisted
//!    and disabled functions, validate every descriptor, resolve every
//!    referenced type, order value types by field dependencies, group
//!    overloads and reject ambiguous ones.
//! 2. **Commit**: inside an engine transaction, install enums, then types,
//!    then functions. An engine rejection rolls the transaction back.
//!
//! The first failure stops registration and is returned as a
//! [`SetupError`]. Nothing from a failed batch stays installed on engines
//! that support rollback; on the others the stage step guarantees that every
//! failure the registrar can predict happens before the first mutation.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use imgui_script_core::{
    EnumDescriptor, FunctionDescriptor, FunctionKind, LayoutClass, NativeTypeDescriptor,
    QualifiedName, ScriptEngine, TypeHash, find_ambiguity,
};

use crate::error::{SetupError, SetupErrorKind};
use crate::module::Module;
use crate::options::BindingOptions;

/// Progress of a [`Registrar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    NotStarted,
    Registering,
    Completed,
    Failed,
}

/// A registration session against one engine.
///
/// ```ignore
/// let mut registrar = Registrar::new(&mut engine, BindingOptions::default());
/// registrar.register(bindings::interface::<MyGui>())?;
/// assert_eq!(registrar.state(), RegistrationState::Completed);
/// ```
pub struct Registrar<'e, E: ScriptEngine> {
    engine: &'e mut E,
    options: BindingOptions,
    state: RegistrationState,
    error: Option<SetupError>,
}

/// A validated batch, ready to install.
struct StagedBatch {
    enums: Vec<EnumDescriptor>,
    types: Vec<NativeTypeDescriptor>,
    functions: Vec<FunctionDescriptor>,
}

impl<'e, E: ScriptEngine> Registrar<'e, E> {
    pub fn new(engine: &'e mut E, options: BindingOptions) -> Self {
        Self {
            engine,
            options,
            state: RegistrationState::NotStarted,
            error: None,
        }
    }

    pub fn state(&self) -> RegistrationState {
        self.state
    }

    /// The error of the last failed attempt.
    pub fn error(&self) -> Option<&SetupError> {
        self.error.as_ref()
    }

    pub fn options(&self) -> &BindingOptions {
        &self.options
    }

    /// Register a module.
    ///
    /// A second call after success does nothing and returns `Ok`. After a
    /// failure the registrar accepts a new attempt.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn register(&mut self, module: Module) -> Result<(), SetupError> {
        if self.state == RegistrationState::Completed {
            debug!("interface already registered, skipping");
            return Ok(());
        }

        self.state = RegistrationState::Registering;
        self.error = None;

        let result = self.stage(module).and_then(|batch| self.commit(batch));
        match result {
            Ok(()) => {
                self.state = RegistrationState::Completed;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "interface registration failed");
                self.state = RegistrationState::Failed;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    // ========================================================================
    // Stage
    // ========================================================================

    fn stage(&self, module: Module) -> Result<StagedBatch, SetupError> {
        let namespace = self.options.namespace_path();
        let Module {
            enums,
            types,
            functions,
        } = module;

        let enums: Vec<EnumDescriptor> = enums
            .into_iter()
            .map(|e| e.in_namespace(namespace.clone()))
            .collect();
        let types: Vec<NativeTypeDescriptor> = types
            .into_iter()
            .map(|t| t.in_namespace(namespace.clone()))
            .collect();
        let functions: Vec<FunctionDescriptor> = functions
            .into_iter()
            .filter(|f| self.is_enabled(f))
            .map(|mut f| {
                f.namespace = namespace.clone();
                f
            })
            .collect();

        // Every type the batch declares, by identity.
        let mut declared: FxHashMap<TypeHash, LayoutClass> = FxHashMap::default();
        let mut names: FxHashSet<QualifiedName> = FxHashSet::default();

        for desc in &enums {
            let name = desc.qualified_name();
            let label = format!("enum {name}");
            desc.validate()
                .map_err(|err| SetupError::new(&label, err.into()))?;
            self.check_type_name(&label, &name, desc.type_hash, &mut names, &declared)?;
            declared.insert(desc.type_hash, LayoutClass::Primitive);
        }

        for desc in &types {
            let name = desc.qualified_name();
            let label = format!("type {name}");
            desc.validate()
                .map_err(|err| SetupError::new(&label, err.into()))?;
            self.check_type_name(&label, &name, desc.type_hash, &mut names, &declared)?;
            declared.insert(desc.type_hash, desc.layout);
        }

        for desc in &types {
            for field in &desc.fields {
                let hash = field.data_type.type_hash;
                if field.data_type.class.is_registered()
                    && !declared.contains_key(&hash)
                    && !self.engine.knows_type(hash)
                {
                    return Err(SetupError::new(
                        format!("type {}", desc.qualified_name()),
                        SetupErrorKind::UnknownType {
                            name: field.data_type.name.to_string(),
                        },
                    ));
                }
            }
        }

        let types = order_types(types)?;
        let mut functions = functions;
        self.check_functions(&functions, &declared)?;
        assign_overloads(&*self.engine, &mut functions)?;

        Ok(StagedBatch {
            enums,
            types,
            functions,
        })
    }

    fn is_enabled(&self, desc: &FunctionDescriptor) -> bool {
        let enabled = match &desc.kind {
            FunctionKind::Global => !self.options.is_blacklisted(&desc.name),
            FunctionKind::Method { owner_name, .. } => {
                self.options.register_methods
                    && !self.options.is_blacklisted(&desc.name)
                    && !self
                        .options
                        .is_blacklisted(&format!("{owner_name}::{}", desc.name))
            }
            FunctionKind::Constructor { owner_name, .. } => {
                self.options.register_constructors && !self.options.is_blacklisted(owner_name)
            }
        };
        if !enabled {
            debug!(function = %desc.name, kind = desc.kind.label(), "skipping function");
        }
        enabled
    }

    fn check_type_name(
        &self,
        label: &str,
        name: &QualifiedName,
        hash: TypeHash,
        names: &mut FxHashSet<QualifiedName>,
        declared: &FxHashMap<TypeHash, LayoutClass>,
    ) -> Result<(), SetupError> {
        if !names.insert(name.clone())
            || declared.contains_key(&hash)
            || self.engine.contains_type(name)
            || self.engine.knows_type(hash)
        {
            return Err(SetupError::new(
                label,
                SetupErrorKind::Duplicate {
                    name: name.to_string(),
                    kind: "type",
                },
            ));
        }
        Ok(())
    }

    fn check_functions(
        &self,
        functions: &[FunctionDescriptor],
        declared: &FxHashMap<TypeHash, LayoutClass>,
    ) -> Result<(), SetupError> {
        let known = |hash: TypeHash| declared.contains_key(&hash) || self.engine.knows_type(hash);
        let mut signatures: FxHashSet<TypeHash> = FxHashSet::default();

        for desc in functions {
            let label = function_label(desc);
            desc.validate()
                .map_err(|err| SetupError::new(&label, err.into()))?;

            if let Some(dt) = desc.referenced_types().find(|dt| !known(dt.type_hash)) {
                return Err(SetupError::new(
                    &label,
                    SetupErrorKind::UnknownType {
                        name: dt.name.to_string(),
                    },
                ));
            }

            let owner = match &desc.kind {
                FunctionKind::Global => None,
                FunctionKind::Method { owner, owner_name } => {
                    Some((*owner, owner_name, LayoutClass::Handle, "reference"))
                }
                FunctionKind::Constructor { owner, owner_name } => {
                    Some((*owner, owner_name, LayoutClass::Value, "value"))
                }
            };
            if let Some((hash, owner_name, layout, expected)) = owner {
                match declared.get(&hash) {
                    Some(actual) if *actual == layout => {}
                    Some(_) => {
                        return Err(SetupError::new(
                            &label,
                            SetupErrorKind::OwnerMismatch {
                                owner: owner_name.clone(),
                                expected,
                            },
                        ));
                    }
                    None if self.engine.knows_type(hash) => {}
                    None => {
                        return Err(SetupError::new(
                            &label,
                            SetupErrorKind::UnknownType {
                                name: owner_name.clone(),
                            },
                        ));
                    }
                }
            }

            if !signatures.insert(desc.func_hash()) || self.engine.contains_function(desc) {
                return Err(SetupError::new(
                    &label,
                    SetupErrorKind::Duplicate {
                        name: desc.qualified_name().to_string(),
                        kind: desc.kind.label(),
                    },
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Commit
    // ========================================================================

    fn commit(&mut self, batch: StagedBatch) -> Result<(), SetupError> {
        let counts = (batch.enums.len(), batch.types.len(), batch.functions.len());

        self.engine.begin_transaction();
        match self.install(batch) {
            Ok(()) => {
                self.engine.commit();
                info!(
                    namespace = %self.options.namespace,
                    enums = counts.0,
                    types = counts.1,
                    functions = counts.2,
                    "interface registered"
                );
                Ok(())
            }
            Err(err) => {
                if self.engine.supports_rollback() {
                    warn!("rolling back partial registration");
                } else {
                    warn!("engine cannot roll back; earlier registrations of this batch remain");
                }
                self.engine.rollback();
                Err(err)
            }
        }
    }

    fn install(&mut self, batch: StagedBatch) -> Result<(), SetupError> {
        for desc in batch.enums {
            let label = format!("enum {}", desc.qualified_name());
            debug!(descriptor = %label, values = desc.len(), "registering");
            self.engine
                .register_enum(desc)
                .map_err(|err| SetupError::new(&label, err.into()))?;
        }
        for desc in batch.types {
            let label = format!("type {}", desc.qualified_name());
            debug!(descriptor = %label, "registering");
            self.engine
                .register_type(desc)
                .map_err(|err| SetupError::new(&label, err.into()))?;
        }
        for desc in batch.functions {
            let label = function_label(&desc);
            debug!(descriptor = %label, "registering");
            self.engine
                .register_function(desc)
                .map_err(|err| SetupError::new(&label, err.into()))?;
        }
        Ok(())
    }
}

/// `function ImGui::Button (bool Button(const string &in label, Vec2 size = Vec2(0.0f, 0.0f)))`
fn function_label(desc: &FunctionDescriptor) -> String {
    format!(
        "{} {} ({})",
        desc.kind.label(),
        desc.qualified_name(),
        desc.declaration()
    )
}

/// Order value types so every field type comes before the type using it.
fn order_types(types: Vec<NativeTypeDescriptor>) -> Result<Vec<NativeTypeDescriptor>, SetupError> {
    let mut graph: DiGraph<usize, ()> = DiGraph::new();
    let nodes: Vec<NodeIndex> = (0..types.len()).map(|i| graph.add_node(i)).collect();
    let by_hash: FxHashMap<TypeHash, usize> = types
        .iter()
        .enumerate()
        .map(|(i, t)| (t.type_hash, i))
        .collect();

    for (i, desc) in types.iter().enumerate() {
        for dep in desc.dependencies() {
            if let Some(&j) = by_hash.get(&dep) {
                graph.add_edge(nodes[j], nodes[i], ());
            }
        }
    }

    let order = toposort(&graph, None).map_err(|cycle| {
        let desc = &types[graph[cycle.node_id()]];
        SetupError::new(
            format!("type {}", desc.qualified_name()),
            SetupErrorKind::DependencyCycle {
                name: desc.name.clone(),
            },
        )
    })?;

    let mut slots: Vec<Option<NativeTypeDescriptor>> = types.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .filter_map(|node| slots[graph[node]].take())
        .collect())
}

/// Number overload sets and reject ambiguous pairs.
///
/// Overloads the engine already holds come first in each set, so a later
/// batch cannot add a candidate that shadows an installed one.
fn assign_overloads<E: ScriptEngine + ?Sized>(
    engine: &E,
    functions: &mut [FunctionDescriptor],
) -> Result<(), SetupError> {
    let mut groups: FxHashMap<QualifiedName, Vec<usize>> = FxHashMap::default();
    let mut order: Vec<QualifiedName> = Vec::new();
    for (i, desc) in functions.iter().enumerate() {
        let name = desc.qualified_name();
        groups
            .entry(name.clone())
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(i);
    }

    for name in &order {
        let Some(members) = groups.get(name) else {
            continue;
        };
        let installed = engine.overloads(name);
        if installed.len() + members.len() < 2 {
            continue;
        }
        let candidates: Vec<&FunctionDescriptor> = installed
            .iter()
            .chain(members.iter().map(|&i| &functions[i]))
            .collect();
        if let Some((first, second)) = find_ambiguity(&candidates) {
            return Err(SetupError::new(
                function_label(candidates[second]),
                SetupErrorKind::AmbiguousOverload { first, second },
            ));
        }
        let offset = installed.len();
        for (overload, &i) in members.iter().enumerate() {
            functions[i].overload_index = Some(offset + overload);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FunctionBuilder;
    use crate::gui::{Color, Cond, DrawList, Vec2, Vec4};
    use imgui_script_core::{DataType, DescriptorError, Dynamic};
    use imgui_script_registry::SymbolRegistry;

    fn noop(name: &str) -> FunctionBuilder {
        FunctionBuilder::new(name)
    }

    fn finish(builder: FunctionBuilder) -> FunctionDescriptor {
        builder.native(|_: &mut (), _| Ok(()))
    }

    fn registrar(engine: &mut SymbolRegistry) -> Registrar<'_, SymbolRegistry> {
        Registrar::new(engine, BindingOptions::default())
    }

    #[test]
    fn registers_in_namespace() {
        let mut engine = SymbolRegistry::with_primitives();
        let module = Module::new()
            .enumeration::<Cond>()
            .ty::<Vec2>()
            .function(finish(noop("Dummy").param::<Vec2>("size")));

        let mut reg = registrar(&mut engine);
        reg.register(module).unwrap();
        assert_eq!(reg.state(), RegistrationState::Completed);

        assert!(engine.get_type_by_name("ImGui::Vec2").is_some());
        assert_eq!(engine.enum_value("ImGui::Cond", "Once"), Some(2));
        assert_eq!(engine.get_functions_by_name("ImGui::Dummy").map(|f| f.len()), Some(1));
    }

    #[test]
    fn second_register_on_completed_is_noop() {
        let mut engine = SymbolRegistry::with_primitives();
        let mut reg = registrar(&mut engine);
        reg.register(Module::new().enumeration::<Cond>()).unwrap();
        reg.register(Module::new().enumeration::<Cond>()).unwrap();
        assert_eq!(reg.state(), RegistrationState::Completed);
    }

    #[test]
    fn duplicate_type_in_batch() {
        let mut engine = SymbolRegistry::with_primitives();
        let err = registrar(&mut engine)
            .register(Module::new().ty::<Vec2>().ty::<Vec2>())
            .unwrap_err();
        assert_eq!(err.descriptor, "type ImGui::Vec2");
        assert!(err.is_duplicate());
        assert_eq!(engine.type_count(), SymbolRegistry::with_primitives().type_count());
    }

    #[test]
    fn unknown_field_type() {
        let mut engine = SymbolRegistry::with_primitives();
        let err = registrar(&mut engine)
            .register(Module::new().ty::<Color>())
            .unwrap_err();
        assert_eq!(
            err.kind,
            SetupErrorKind::UnknownType {
                name: "Vec4".into()
            }
        );
    }

    #[test]
    fn types_are_ordered_by_dependencies() {
        let mut engine = SymbolRegistry::with_primitives();
        registrar(&mut engine)
            .register(Module::new().ty::<Color>().ty::<Vec4>())
            .unwrap();
        assert!(engine.get_type_by_name("ImGui::Color").is_some());

        let order = order_types(vec![
            <Color as crate::adapter::NativeType>::descriptor(),
            <Vec4 as crate::adapter::NativeType>::descriptor(),
        ])
        .unwrap();
        let names: Vec<_> = order.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Vec4", "Color"]);
    }

    #[test]
    fn unknown_parameter_type() {
        let mut engine = SymbolRegistry::with_primitives();
        let err = registrar(&mut engine)
            .register(Module::new().function(finish(noop("Dummy").param::<Vec2>("size"))))
            .unwrap_err();
        assert!(err.descriptor.starts_with("function ImGui::Dummy"));
        assert_eq!(
            err.kind,
            SetupErrorKind::UnknownType {
                name: "Vec2".into()
            }
        );
        assert_eq!(engine.function_count(), 0);
    }

    #[test]
    fn default_ordering_is_rejected() {
        let mut engine = SymbolRegistry::with_primitives();
        let bad = finish(
            noop("Bad")
                .param_default("a", 1.0f32)
                .param::<f32>("b"),
        );
        let err = registrar(&mut engine)
            .register(Module::new().function(bad))
            .unwrap_err();
        assert_eq!(
            err.kind,
            SetupErrorKind::Descriptor(DescriptorError::DefaultOrdering {
                param: "b".into(),
                previous: "a".into()
            })
        );
    }

    #[test]
    fn ambiguous_overloads_are_rejected() {
        let mut engine = SymbolRegistry::with_primitives();
        let module = Module::new()
            .function(finish(noop("Scale").param::<f32>("v")))
            .function(finish(noop("Scale").param::<i32>("v")));
        let err = registrar(&mut engine).register(module).unwrap_err();
        assert_eq!(
            err.kind,
            SetupErrorKind::AmbiguousOverload {
                first: 0,
                second: 1
            }
        );
        assert_eq!(engine.function_count(), 0);
    }

    #[test]
    fn overloads_get_indices() {
        let mut engine = SymbolRegistry::with_primitives();
        let module = Module::new()
            .ty::<Vec2>()
            .function(finish(noop("Push").param::<String>("id")))
            .function(finish(noop("Push").param::<i32>("id")))
            .function(finish(noop("Pop")));
        registrar(&mut engine).register(module).unwrap();

        let push = engine.get_functions_by_name("ImGui::Push").unwrap();
        let indices: Vec<_> = push.iter().map(|f| f.overload_index).collect();
        assert_eq!(indices, [Some(0), Some(1)]);
        let pop = engine.get_functions_by_name("ImGui::Pop").unwrap();
        assert_eq!(pop[0].overload_index, None);
    }

    #[test]
    fn constructor_owner_must_be_value() {
        let mut engine = SymbolRegistry::with_primitives();
        let ctor_on_handle = FunctionDescriptor::new(
            "DrawList",
            FunctionKind::constructor("DrawList"),
            Vec::new(),
            DataType::value("DrawList").by_value(),
            imgui_script_core::NativeFn::new(|_: &mut imgui_script_core::CallContext| Ok(())),
        );
        let err = registrar(&mut engine)
            .register(Module::new().ty::<DrawList>().function(ctor_on_handle))
            .unwrap_err();
        assert_eq!(
            err.kind,
            SetupErrorKind::OwnerMismatch {
                owner: "DrawList".into(),
                expected: "value"
            }
        );
    }

    #[test]
    fn blacklisted_and_disabled_functions_are_skipped() {
        let mut engine = SymbolRegistry::with_primitives();
        let module = Module::new()
            .ty::<Vec2>()
            .ty::<DrawList>()
            .function(finish(noop("LogFinish")))
            .function(finish(noop("Separator")))
            .function(
                FunctionBuilder::constructor::<Vec2>()
                    .native(|_: &mut (), _| Ok(Vec2::ZERO)),
            )
            .function(
                FunctionBuilder::method::<DrawList>("PopClipRect").native(|_: &mut (), _| Ok(())),
            );
        let options = BindingOptions::new().without_constructors().without_methods();
        Registrar::new(&mut engine, options).register(module).unwrap();

        assert!(engine.get_functions_by_name("ImGui::LogFinish").is_none());
        assert!(engine.get_functions_by_name("ImGui::Separator").is_some());
        assert!(engine.get_functions_by_name("ImGui::Vec2").is_none());
        assert!(engine.get_functions_by_name("ImGui::DrawList::PopClipRect").is_none());
    }

    #[test]
    fn failed_registrar_can_retry() {
        let mut engine = SymbolRegistry::with_primitives();
        let mut reg = registrar(&mut engine);
        let err = reg
            .register(Module::new().function(finish(noop("Dummy").param::<Vec2>("size"))))
            .unwrap_err();
        assert_eq!(reg.state(), RegistrationState::Failed);
        assert_eq!(reg.error(), Some(&err));

        reg.register(
            Module::new()
                .ty::<Vec2>()
                .function(finish(noop("Dummy").param::<Vec2>("size"))),
        )
        .unwrap();
        assert_eq!(reg.state(), RegistrationState::Completed);
        assert_eq!(reg.error(), None);
    }

    #[test]
    fn global_namespace() {
        let mut engine = SymbolRegistry::with_primitives();
        let options = BindingOptions::new().with_namespace("");
        Registrar::new(&mut engine, options)
            .register(Module::new().function(finish(noop("NewLine"))))
            .unwrap();
        let mut args: Vec<Dynamic> = Vec::new();
        engine.call("NewLine", &mut args, &mut ()).unwrap();
    }
}
