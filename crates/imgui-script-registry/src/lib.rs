//! In-memory engine state for GUI bindings.
//!
//! [`SymbolRegistry`] implements [`ScriptEngine`](imgui_script_core::ScriptEngine)
//! and doubles as a reflective dispatcher, so a host without its own VM (and
//! every test) can drive the bound GUI surface by name.

mod registry;

pub use registry::{SymbolRegistry, TypeEntry};
