//! SymbolRegistry - in-memory bound engine state.
//!
//! [`SymbolRegistry`] is the reference implementation of [`ScriptEngine`]:
//! it holds the type table, the enum table, the overloaded function table
//! and the handle table, and dispatches reflective calls through the
//! installed thunks.
//!
//! # Storage Model
//!
//! - **Types**: primitives, enums and native types by `QualifiedName`, with
//!   a reverse `TypeHash` index
//! - **Functions**: overload lists by `QualifiedName` in registration order.
//!   Methods live under `Owner::method`, constructors under `Owner`
//! - **Handles**: one generational table; [`SymbolRegistry::with_handle_scope`]
//!   invalidates it on exit. A call made outside any scope is its own scope,
//!   so a handle it returns is already stale
//!
//! # Thread Safety
//!
//! `SymbolRegistry` is **not thread-safe**. Registration happens once on the
//! thread that owns the engine; calls are dispatched synchronously on that
//! same thread.
//!
//! # Example
//!
//! ```
//! use imgui_script_core::{EnumDescriptor, ScriptEngine};
//! use imgui_script_registry::SymbolRegistry;
//!
//! let mut registry = SymbolRegistry::with_primitives();
//! registry
//!     .register_enum(
//!         EnumDescriptor::new("Dir")
//!             .in_namespace(vec!["ImGui".into()])
//!             .with_value("Left", 0)
//!             .with_value("Right", 1),
//!     )
//!     .unwrap();
//! assert_eq!(registry.enum_value("ImGui::Dir", "Right"), Some(1));
//! ```

use std::any::Any;

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use imgui_script_core::{
    CallContext, Dynamic, EnumDescriptor, FunctionDescriptor, FunctionKind, HandleTable,
    NativeError, NativeTypeDescriptor, QualifiedName, RegistrationError, ScriptEngine, TypeHash,
    primitives, resolve,
};

/// One entry of the type table.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeEntry {
    /// Built-in type, present without registration.
    Primitive {
        name: &'static str,
        type_hash: TypeHash,
    },
    Enum(EnumDescriptor),
    Native(NativeTypeDescriptor),
}

impl TypeEntry {
    pub fn type_hash(&self) -> TypeHash {
        match self {
            TypeEntry::Primitive { type_hash, .. } => *type_hash,
            TypeEntry::Enum(e) => e.type_hash,
            TypeEntry::Native(t) => t.type_hash,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDescriptor> {
        match self {
            TypeEntry::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_native(&self) -> Option<&NativeTypeDescriptor> {
        match self {
            TypeEntry::Native(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeEntry::Primitive { .. })
    }
}

/// Registrations recorded while a transaction is open.
#[derive(Debug, Clone)]
enum JournalEntry {
    Type(QualifiedName, TypeHash),
    Function(QualifiedName, TypeHash),
}

/// Bound engine state.
#[derive(Default)]
pub struct SymbolRegistry {
    /// Types stored by qualified name (primary storage).
    types: FxHashMap<QualifiedName, TypeEntry>,

    /// Reverse index: hash -> name.
    type_hash_to_name: FxHashMap<TypeHash, QualifiedName>,

    /// Overload lists by qualified name, in registration order.
    functions: FxHashMap<QualifiedName, Vec<FunctionDescriptor>>,

    /// Reverse index: signature hash -> name.
    func_hash_to_name: FxHashMap<TypeHash, QualifiedName>,

    /// Handle aliases of the current scope.
    handles: HandleTable,

    /// Nesting depth of `with_handle_scope`.
    scope_depth: u32,

    /// Open transaction, if any.
    journal: Option<Vec<JournalEntry>>,
}

impl SymbolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all primitives pre-registered.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        registry.register_all_primitives();
        registry
    }

    /// Register every primitive type.
    pub fn register_all_primitives(&mut self) {
        for (name, type_hash) in primitives::ALL {
            let qname = QualifiedName::global(name);
            self.type_hash_to_name.insert(type_hash, qname.clone());
            self.types
                .insert(qname, TypeEntry::Primitive { name, type_hash });
        }
    }

    /// Drop every registration and every handle.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // ==========================================================================
    // Type Lookup
    // ==========================================================================

    /// Get a type by qualified name.
    pub fn get_type(&self, name: &QualifiedName) -> Option<&TypeEntry> {
        self.types.get(name)
    }

    /// Get a type by `::`-separated name.
    pub fn get_type_by_name(&self, name: &str) -> Option<&TypeEntry> {
        self.types.get(&QualifiedName::from_qualified_string(name))
    }

    /// Get a type by hash.
    pub fn get(&self, hash: TypeHash) -> Option<&TypeEntry> {
        self.type_hash_to_name
            .get(&hash)
            .and_then(|name| self.types.get(name))
    }

    /// Get an enum by `::`-separated name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDescriptor> {
        self.get_type_by_name(name)?.as_enum()
    }

    /// Look up one enum value the way a script would (`ImGui::Dir::Right`).
    pub fn enum_value(&self, enum_name: &str, value_name: &str) -> Option<i64> {
        self.get_enum(enum_name)?.get_value(value_name)
    }

    /// All values of an enum in declaration order.
    pub fn enum_values(&self, enum_name: &str) -> Option<Vec<(&str, i64)>> {
        let desc = self.get_enum(enum_name)?;
        Some(
            desc.values
                .iter()
                .map(|v| (v.name.as_str(), v.value))
                .collect(),
        )
    }

    /// Read a field of a value object by name.
    pub fn field<'v>(&self, value: &'v Dynamic, field: &str) -> Option<&'v Dynamic> {
        let Dynamic::Value(obj) = value else {
            return None;
        };
        let desc = self.get(obj.type_hash)?.as_native()?;
        obj.field(desc.field_index(field)?)
    }

    /// Number of registered types (primitives included).
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Iterate over every type entry.
    pub fn types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.values()
    }

    // ==========================================================================
    // Function Lookup
    // ==========================================================================

    /// Get all overloads registered under a qualified name.
    pub fn get_functions(&self, name: &QualifiedName) -> Option<&[FunctionDescriptor]> {
        self.functions.get(name).map(|v| v.as_slice())
    }

    /// Get all overloads by `::`-separated name.
    pub fn get_functions_by_name(&self, name: &str) -> Option<&[FunctionDescriptor]> {
        self.get_functions(&QualifiedName::from_qualified_string(name))
    }

    /// Check if a function with this signature hash exists.
    pub fn contains_function_hash(&self, hash: TypeHash) -> bool {
        self.func_hash_to_name.contains_key(&hash)
    }

    /// Total number of registered overloads.
    pub fn function_count(&self) -> usize {
        self.func_hash_to_name.len()
    }

    /// Iterate over every registered overload.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.functions.values().flatten()
    }

    /// Engine declarations of every overload of a name.
    pub fn declarations(&self, name: &str) -> Vec<String> {
        self.get_functions_by_name(name)
            .map(|overloads| overloads.iter().map(|f| f.declaration()).collect())
            .unwrap_or_default()
    }

    // ==========================================================================
    // Dispatch
    // ==========================================================================

    /// Call a global function by `::`-separated name.
    ///
    /// `args` receives the values of `&out`/`&inout` parameters after the
    /// call. `host` is the GUI backend the thunks were built for.
    pub fn call(
        &mut self,
        name: &str,
        args: &mut [Dynamic],
        host: &mut dyn Any,
    ) -> Result<Dynamic, NativeError> {
        let qname = QualifiedName::from_qualified_string(name);
        self.dispatch(&qname, args, 0, host)
    }

    /// Call a method of a reference type on `this`.
    pub fn call_method(
        &mut self,
        type_name: &str,
        method: &str,
        this: Dynamic,
        args: &mut [Dynamic],
        host: &mut dyn Any,
    ) -> Result<Dynamic, NativeError> {
        let qname = QualifiedName::from_qualified_string(type_name).child(method);
        let mut slots = Vec::with_capacity(args.len() + 1);
        slots.push(this);
        slots.extend(args.iter().cloned());
        let result = self.dispatch(&qname, &mut slots, 1, host)?;
        for (arg, slot) in args.iter_mut().zip(slots.into_iter().skip(1)) {
            *arg = slot;
        }
        Ok(result)
    }

    /// Construct a value type.
    pub fn construct(&mut self, type_name: &str, args: &mut [Dynamic]) -> Result<Dynamic, NativeError> {
        let qname = QualifiedName::from_qualified_string(type_name);
        self.dispatch(&qname, args, 0, &mut ())
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    fn dispatch(
        &mut self,
        name: &QualifiedName,
        slots: &mut [Dynamic],
        arg_offset: usize,
        host: &mut dyn Any,
    ) -> Result<Dynamic, NativeError> {
        let label = name.to_string();
        let candidates = self
            .functions
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let args = slots.get(arg_offset..).unwrap_or(&[]);
        let chosen = resolve(&label, candidates, args)?;
        trace!(
            function = %label,
            overload = ?chosen.overload_index,
            args = args.len(),
            "dispatch"
        );
        let native = chosen.native.clone();

        let mut ret = Dynamic::Void;
        let mut ctx = CallContext::new(
            &label,
            slots,
            arg_offset,
            &mut ret,
            &mut self.handles,
            host,
        );
        let result = native.call(&mut ctx);
        if self.scope_depth == 0 {
            self.close_scope();
        }
        result?;
        Ok(ret)
    }

    // ==========================================================================
    // Handles
    // ==========================================================================

    /// Run `f` as one handle scope (one script invocation or one frame).
    ///
    /// Every handle produced inside is invalid once the outermost scope
    /// returns. Nested scopes share the outer one.
    pub fn with_handle_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scope_depth += 1;
        let result = f(self);
        self.scope_depth -= 1;
        if self.scope_depth == 0 {
            self.close_scope();
        }
        result
    }

    fn close_scope(&mut self) {
        let live = self.handles.live_count();
        if live > 0 {
            self.handles.invalidate_all();
            trace!(released = live, "handle scope closed");
        }
    }

    pub fn handles(&self) -> &HandleTable {
        &self.handles
    }

    // ==========================================================================
    // Registration helpers
    // ==========================================================================

    fn insert_type(&mut self, qname: QualifiedName, entry: TypeEntry) -> Result<(), RegistrationError> {
        let hash = entry.type_hash();
        if self.types.contains_key(&qname) || self.type_hash_to_name.contains_key(&hash) {
            return Err(RegistrationError::DuplicateType(qname.to_string()));
        }
        self.type_hash_to_name.insert(hash, qname.clone());
        self.types.insert(qname.clone(), entry);
        if let Some(journal) = &mut self.journal {
            journal.push(JournalEntry::Type(qname, hash));
        }
        Ok(())
    }

    fn remove_type(&mut self, qname: &QualifiedName, hash: TypeHash) {
        self.types.remove(qname);
        self.type_hash_to_name.remove(&hash);
    }

    fn remove_function(&mut self, qname: &QualifiedName, hash: TypeHash) {
        self.func_hash_to_name.remove(&hash);
        if let Some(overloads) = self.functions.get_mut(qname) {
            overloads.retain(|f| f.func_hash() != hash);
            if overloads.is_empty() {
                self.functions.remove(qname);
            } else {
                renumber(overloads);
            }
        }
    }
}

/// A lone function has no overload index; a set is numbered in order.
fn renumber(overloads: &mut [FunctionDescriptor]) {
    let single = overloads.len() == 1;
    for (i, f) in overloads.iter_mut().enumerate() {
        f.overload_index = (!single).then_some(i);
    }
}

impl ScriptEngine for SymbolRegistry {
    fn register_enum(&mut self, desc: EnumDescriptor) -> Result<(), RegistrationError> {
        let qname = desc.qualified_name();
        debug!(name = %qname, values = desc.values.len(), "register enum");
        self.insert_type(qname, TypeEntry::Enum(desc))
    }

    fn register_type(&mut self, desc: NativeTypeDescriptor) -> Result<(), RegistrationError> {
        let qname = desc.qualified_name();
        debug!(name = %qname, layout = ?desc.layout, "register type");
        self.insert_type(qname, TypeEntry::Native(desc))
    }

    fn register_function(&mut self, desc: FunctionDescriptor) -> Result<(), RegistrationError> {
        let qname = desc.qualified_name();
        let hash = desc.func_hash();

        if let FunctionKind::Method { owner, owner_name } | FunctionKind::Constructor { owner, owner_name } =
            &desc.kind
            && !self.type_hash_to_name.contains_key(owner)
        {
            return Err(RegistrationError::OwnerNotFound {
                member: qname.to_string(),
                owner: owner_name.clone(),
            });
        }

        if self.func_hash_to_name.contains_key(&hash) {
            return Err(RegistrationError::DuplicateRegistration {
                name: qname.to_string(),
                kind: desc.kind.label().to_string(),
            });
        }

        debug!(name = %qname, decl = %desc.declaration(), "register {}", desc.kind.label());
        self.func_hash_to_name.insert(hash, qname.clone());
        let overloads = self.functions.entry(qname.clone()).or_default();
        overloads.push(desc);
        renumber(overloads);
        if let Some(journal) = &mut self.journal {
            journal.push(JournalEntry::Function(qname, hash));
        }
        Ok(())
    }

    fn contains_type(&self, name: &QualifiedName) -> bool {
        self.types.contains_key(name)
    }

    fn knows_type(&self, hash: TypeHash) -> bool {
        self.type_hash_to_name.contains_key(&hash)
    }

    fn contains_function(&self, desc: &FunctionDescriptor) -> bool {
        self.func_hash_to_name.contains_key(&desc.func_hash())
    }

    fn overloads(&self, name: &QualifiedName) -> &[FunctionDescriptor] {
        self.get_functions(name).unwrap_or(&[])
    }

    fn begin_transaction(&mut self) {
        self.journal = Some(Vec::new());
    }

    fn commit(&mut self) {
        self.journal = None;
    }

    fn rollback(&mut self) {
        let Some(journal) = self.journal.take() else {
            return;
        };
        warn!(entries = journal.len(), "rolling back registrations");
        for entry in journal.into_iter().rev() {
            match entry {
                JournalEntry::Type(qname, hash) => self.remove_type(&qname, hash),
                JournalEntry::Function(qname, hash) => self.remove_function(&qname, hash),
            }
        }
    }

    fn supports_rollback(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolRegistry")
            .field("types", &self.types.len())
            .field("functions", &self.func_hash_to_name.len())
            .field("handles", &self.handles)
            .field("in_transaction", &self.journal.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgui_script_core::{
        Args, DataType, DefaultValue, NativeHandle, ParamDescriptor, RefModifier, thunk,
    };

    fn ns() -> Vec<String> {
        vec!["ImGui".into()]
    }

    #[derive(Default)]
    struct Log(Vec<String>);

    fn button() -> FunctionDescriptor {
        let params = vec![ParamDescriptor::new("label", DataType::STRING)];
        let native = thunk(params.clone(), |log: &mut Log, args: &mut Args<'_>| {
            let label: String = args.get(0)?;
            log.0.push(format!("Button({label})"));
            Ok(label == "OK")
        });
        let mut f = FunctionDescriptor::new("Button", FunctionKind::Global, params, DataType::BOOL, native);
        f.namespace = ns();
        f
    }

    fn push_id(param: ParamDescriptor) -> FunctionDescriptor {
        let params = vec![param];
        let native = thunk(params.clone(), |log: &mut Log, args: &mut Args<'_>| {
            log.0.push(format!("PushID({:?})", args.slot(0)?));
            Ok(())
        });
        let mut f = FunctionDescriptor::new("PushID", FunctionKind::Global, params, DataType::VOID, native);
        f.namespace = ns();
        f
    }

    #[test]
    fn primitives_are_known() {
        let registry = SymbolRegistry::with_primitives();
        assert!(registry.knows_type(primitives::FLOAT));
        assert!(registry.get_type_by_name("string").is_some_and(TypeEntry::is_primitive));
        assert_eq!(registry.type_count(), primitives::ALL.len());
    }

    #[test]
    fn register_and_call() {
        let mut registry = SymbolRegistry::with_primitives();
        registry.register_function(button()).unwrap();
        let mut log = Log::default();
        let result = registry
            .call("ImGui::Button", &mut [Dynamic::from("OK")], &mut log)
            .unwrap();
        assert_eq!(result, Dynamic::Bool(true));
        assert_eq!(log.0, ["Button(OK)"]);
    }

    #[test]
    fn duplicate_function_rejected() {
        let mut registry = SymbolRegistry::with_primitives();
        registry.register_function(button()).unwrap();
        let err = registry.register_function(button()).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::DuplicateRegistration {
                name: "ImGui::Button".into(),
                kind: "function".into()
            }
        );
    }

    #[test]
    fn overloads_dispatch_by_value_kind() {
        let mut registry = SymbolRegistry::with_primitives();
        registry
            .register_function(push_id(ParamDescriptor::new("str_id", DataType::STRING)))
            .unwrap();
        registry
            .register_function(push_id(ParamDescriptor::new("int_id", DataType::INT)))
            .unwrap();
        assert_eq!(registry.get_functions_by_name("ImGui::PushID").map(<[_]>::len), Some(2));

        let mut log = Log::default();
        registry.call("ImGui::PushID", &mut [Dynamic::Int(7)], &mut log).unwrap();
        registry.call("ImGui::PushID", &mut [Dynamic::from("a")], &mut log).unwrap();
        assert_eq!(log.0, ["PushID(Int(7))", "PushID(String(\"a\"))"]);

        let err = registry
            .call("ImGui::PushID", &mut [Dynamic::Float(1.0)], &mut log)
            .unwrap_err();
        assert!(matches!(err, NativeError::NoMatchingOverload { .. }));
    }

    #[test]
    fn unknown_function_call() {
        let mut registry = SymbolRegistry::new();
        let err = registry.call("ImGui::Nope", &mut [], &mut ()).unwrap_err();
        assert_eq!(
            err,
            NativeError::UnknownFunction {
                name: "ImGui::Nope".into()
            }
        );
    }

    #[test]
    fn enum_lookup_keeps_order() {
        let mut registry = SymbolRegistry::with_primitives();
        registry
            .register_enum(
                EnumDescriptor::new("Cond")
                    .in_namespace(ns())
                    .with_values([("None", 0), ("Always", 1), ("Once", 2)]),
            )
            .unwrap();
        assert_eq!(
            registry.enum_values("ImGui::Cond"),
            Some(vec![("None", 0), ("Always", 1), ("Once", 2)])
        );
        assert_eq!(registry.enum_value("ImGui::Cond", "Once"), Some(2));
        assert_eq!(registry.enum_value("ImGui::Cond", "Never"), None);
    }

    #[test]
    fn duplicate_type_rejected() {
        let mut registry = SymbolRegistry::with_primitives();
        let dir = EnumDescriptor::new("Dir").in_namespace(ns()).with_value("Left", 0);
        registry.register_enum(dir.clone()).unwrap();
        assert_eq!(
            registry.register_enum(dir),
            Err(RegistrationError::DuplicateType("ImGui::Dir".into()))
        );
    }

    #[test]
    fn method_requires_owner() {
        let mut registry = SymbolRegistry::with_primitives();
        let mut m = FunctionDescriptor::new(
            "AddLine",
            FunctionKind::method("DrawList"),
            vec![],
            DataType::VOID,
            thunk(vec![], |_: &mut (), _: &mut Args<'_>| Ok(())),
        );
        m.namespace = ns();
        assert!(matches!(
            registry.register_function(m),
            Err(RegistrationError::OwnerNotFound { .. })
        ));
    }

    #[test]
    fn rollback_undoes_everything_since_begin() {
        let mut registry = SymbolRegistry::with_primitives();
        registry.register_function(push_id(ParamDescriptor::new("int_id", DataType::INT))).unwrap();
        let before_types = registry.type_count();

        registry.begin_transaction();
        registry
            .register_enum(EnumDescriptor::new("Dir").in_namespace(ns()).with_value("Left", 0))
            .unwrap();
        registry.register_function(button()).unwrap();
        registry
            .register_function(push_id(ParamDescriptor::new("str_id", DataType::STRING)))
            .unwrap();
        registry.rollback();

        assert_eq!(registry.type_count(), before_types);
        assert_eq!(registry.function_count(), 1);
        assert!(registry.get_functions_by_name("ImGui::Button").is_none());
        assert_eq!(registry.get_functions_by_name("ImGui::PushID").map(<[_]>::len), Some(1));
    }

    #[test]
    fn overload_sets_are_numbered_in_order() {
        let mut registry = SymbolRegistry::with_primitives();
        let push_ids = QualifiedName::from_qualified_string("ImGui::PushID");
        registry.register_function(push_id(ParamDescriptor::new("int_id", DataType::INT))).unwrap();
        assert_eq!(registry.overloads(&push_ids)[0].overload_index, None);

        registry.begin_transaction();
        registry
            .register_function(push_id(ParamDescriptor::new("str_id", DataType::STRING)))
            .unwrap();
        let indices: Vec<_> = registry.overloads(&push_ids).iter().map(|f| f.overload_index).collect();
        assert_eq!(indices, [Some(0), Some(1)]);

        registry.rollback();
        assert_eq!(registry.overloads(&push_ids).len(), 1);
        assert_eq!(registry.overloads(&push_ids)[0].overload_index, None);
        assert!(registry.overloads(&QualifiedName::global("Missing")).is_empty());
    }

    #[test]
    fn commit_keeps_registrations() {
        let mut registry = SymbolRegistry::with_primitives();
        registry.begin_transaction();
        registry.register_function(button()).unwrap();
        registry.commit();
        registry.rollback();
        assert_eq!(registry.function_count(), 1);
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct DrawList(u64);

    impl NativeHandle for DrawList {
        const NAME: &'static str = "DrawList";
        fn into_raw(self) -> u64 {
            self.0
        }
        fn from_raw(raw: u64) -> Self {
            DrawList(raw)
        }
    }

    fn draw_list_surface(registry: &mut SymbolRegistry) {
        registry
            .register_type(NativeTypeDescriptor::handle("DrawList").in_namespace(ns()))
            .unwrap();

        let mut get = FunctionDescriptor::new(
            "GetWindowDrawList",
            FunctionKind::Global,
            vec![],
            DataType::handle("DrawList"),
            thunk(vec![], |_: &mut Log, args: &mut Args<'_>| {
                Ok(args.new_handle(DrawList(0xD1)))
            }),
        );
        get.namespace = ns();
        registry.register_function(get).unwrap();

        let params = vec![
            ParamDescriptor::new("thickness", DataType::FLOAT)
                .with_default(DefaultValue::new("1.0f", Dynamic::Float(1.0))),
        ];
        let mut add = FunctionDescriptor::new(
            "AddLine",
            FunctionKind::method("DrawList"),
            params.clone(),
            DataType::VOID,
            thunk(params, |log: &mut Log, args: &mut Args<'_>| {
                let dl = args.this_handle::<DrawList>()?;
                let thickness: f32 = args.get(0)?;
                log.0.push(format!("{:#x}.AddLine({thickness})", dl.0));
                Ok(())
            }),
        );
        add.namespace = ns();
        registry.register_function(add).unwrap();
    }

    #[test]
    fn method_call_through_handle() {
        let mut registry = SymbolRegistry::with_primitives();
        draw_list_surface(&mut registry);
        let mut log = Log::default();

        registry.with_handle_scope(|r| {
            let dl = r.call("ImGui::GetWindowDrawList", &mut [], &mut log).unwrap();
            r.call_method("ImGui::DrawList", "AddLine", dl, &mut [], &mut log)
                .unwrap();
        });
        assert_eq!(log.0, ["0xd1.AddLine(1)"]);
        assert_eq!(registry.handles().live_count(), 0);
    }

    #[test]
    fn unscoped_call_is_its_own_scope() {
        let mut registry = SymbolRegistry::with_primitives();
        draw_list_surface(&mut registry);
        let mut log = Log::default();

        let dl = registry.call("ImGui::GetWindowDrawList", &mut [], &mut log).unwrap();
        assert_eq!(registry.handles().live_count(), 0);
        let err = registry
            .call_method("ImGui::DrawList", "AddLine", dl, &mut [], &mut log)
            .unwrap_err();
        assert!(matches!(err, NativeError::StaleHandle { .. }));
        assert!(log.0.is_empty());
    }

    #[test]
    fn nested_scopes_share_the_outer_scope() {
        let mut registry = SymbolRegistry::with_primitives();
        draw_list_surface(&mut registry);
        let mut log = Log::default();

        registry.with_handle_scope(|r| {
            let dl = r.with_handle_scope(|r| {
                r.call("ImGui::GetWindowDrawList", &mut [], &mut log).unwrap()
            });
            r.call_method("ImGui::DrawList", "AddLine", dl, &mut [], &mut log)
                .unwrap();
        });
        assert_eq!(log.0, ["0xd1.AddLine(1)"]);
        assert_eq!(registry.handles().live_count(), 0);
    }

    #[test]
    fn handle_is_stale_after_scope() {
        let mut registry = SymbolRegistry::with_primitives();
        draw_list_surface(&mut registry);
        let mut log = Log::default();

        let kept = registry.with_handle_scope(|r| {
            r.call("ImGui::GetWindowDrawList", &mut [], &mut log).unwrap()
        });
        let err = registry
            .call_method("ImGui::DrawList", "AddLine", kept, &mut [], &mut log)
            .unwrap_err();
        assert!(matches!(err, NativeError::StaleHandle { .. }));
        assert!(log.0.is_empty());
    }

    #[test]
    fn construct_and_read_fields() {
        let mut registry = SymbolRegistry::with_primitives();
        registry
            .register_type(
                NativeTypeDescriptor::value("Vec2", 8, 4)
                    .in_namespace(ns())
                    .with_field("x", DataType::FLOAT, 0)
                    .with_field("y", DataType::FLOAT, 4),
            )
            .unwrap();
        let params = vec![
            ParamDescriptor::new("x", DataType::FLOAT),
            ParamDescriptor::new("y", DataType::FLOAT),
        ];
        let mut ctor = FunctionDescriptor::new(
            "Vec2",
            FunctionKind::constructor("Vec2"),
            params.clone(),
            DataType::value("Vec2").by_value(),
            thunk(params, |_: &mut (), args: &mut Args<'_>| {
                let x: f32 = args.get(0)?;
                let y: f32 = args.get(1)?;
                Ok(Dynamic::value(
                    TypeHash::from_name("Vec2"),
                    vec![Dynamic::Float(x as f64), Dynamic::Float(y as f64)],
                ))
            }),
        );
        ctor.namespace = ns();
        registry.register_function(ctor).unwrap();

        let v = registry
            .construct("ImGui::Vec2", &mut [Dynamic::Float(1.0), Dynamic::Int(2)])
            .unwrap();
        assert_eq!(registry.field(&v, "x"), Some(&Dynamic::Float(1.0)));
        assert_eq!(registry.field(&v, "y"), Some(&Dynamic::Float(2.0)));
        assert_eq!(registry.field(&v, "z"), None);
    }

    #[test]
    fn out_params_come_back_through_call_method() {
        let mut registry = SymbolRegistry::with_primitives();
        draw_list_surface(&mut registry);
        let params = vec![ParamDescriptor::new("count", DataType::INT.with_ref(RefModifier::Out))];
        let mut m = FunctionDescriptor::new(
            "VertexCount",
            FunctionKind::method("DrawList"),
            params.clone(),
            DataType::VOID,
            thunk(params, |_: &mut Log, args: &mut Args<'_>| {
                args.this_handle::<DrawList>()?;
                args.set(0, 42)
            }),
        );
        m.namespace = ns();
        registry.register_function(m).unwrap();

        let mut log = Log::default();
        let mut out = [Dynamic::Void];
        registry.with_handle_scope(|r| {
            let dl = r.call("ImGui::GetWindowDrawList", &mut [], &mut log).unwrap();
            r.call_method("ImGui::DrawList", "VertexCount", dl, &mut out, &mut log)
                .unwrap();
        });
        assert_eq!(out[0], Dynamic::Int(42));
    }

    #[test]
    fn declarations_are_rendered() {
        let mut registry = SymbolRegistry::with_primitives();
        registry.register_function(button()).unwrap();
        assert_eq!(
            registry.declarations("ImGui::Button"),
            ["bool Button(const string &in label)"]
        );
    }

    #[test]
    fn clear_drops_everything() {
        let mut registry = SymbolRegistry::with_primitives();
        registry.register_function(button()).unwrap();
        registry.clear();
        assert_eq!(registry.function_count(), 0);
        assert_eq!(registry.type_count(), 0);
    }
}
