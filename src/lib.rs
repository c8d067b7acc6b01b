//! Register a curated immediate-mode GUI interface with a scripting engine.
//!
//! The crate describes the GUI surface (enums, flag sets, value types,
//! reference types and functions) as descriptors, and a [`Registrar`]
//! installs them into any [`ScriptEngine`](imgui_script_core::ScriptEngine)
//! in dependency order. Scripts then call into a [`Gui`](gui::Gui) backend
//! through generated thunks.
//!
//! ## Crate layout
//!
//! - [`imgui_script_core`]: descriptors, the `Dynamic` slot, conversion
//!   traits, thunks and the `ScriptEngine` trait
//! - [`imgui_script_registry`]: an in-process [`SymbolRegistry`] engine
//! - [`adapter`]: builders and macros that turn native types and closures
//!   into descriptors
//! - [`bindings`]: the curated interface, one module per area
//! - [`gui`]: the [`Gui`](gui::Gui) backend trait and its vocabulary types
//!
//! ## Example
//!
//! ```
//! use imgui_script::{RecordingGui, SymbolRegistry, register_interface};
//!
//! let mut engine = SymbolRegistry::with_primitives();
//! register_interface::<RecordingGui, _>(&mut engine).unwrap();
//! assert!(engine.get_functions_by_name("ImGui::Button").is_some());
//! ```

pub mod adapter;
pub mod bindings;
mod error;
pub mod gui;
mod module;
mod options;
mod recording;
mod registrar;

pub use error::{SetupError, SetupErrorKind};
pub use module::Module;
pub use options::{BindingOptions, DEFAULT_BLACKLIST};
pub use recording::RecordingGui;
pub use registrar::{Registrar, RegistrationState};

pub use imgui_script_core;
pub use imgui_script_registry::SymbolRegistry;

use imgui_script_core::ScriptEngine;

use crate::gui::Gui;

#[doc(hidden)]
pub mod __private {
    pub use imgui_script_core::{
        ConversionError, DataType, Dynamic, FromDynamic, IntoDynamic, NativeHandle,
        NativeTypeDescriptor, ScriptType, TypeHash,
    };
}

/// Register the full interface for backend `G` with default options.
pub fn register_interface<G: Gui + 'static, E: ScriptEngine>(
    engine: &mut E,
) -> Result<(), SetupError> {
    register_interface_with::<G, E>(engine, &BindingOptions::default())
}

/// Register the full interface for backend `G`.
pub fn register_interface_with<G: Gui + 'static, E: ScriptEngine>(
    engine: &mut E,
    options: &BindingOptions,
) -> Result<(), SetupError> {
    Registrar::new(engine, options.clone()).register(bindings::interface::<G>())
}
