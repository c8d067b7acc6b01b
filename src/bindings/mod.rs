//! The curated binding modules.
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`values`]  | enums, flag sets, value types, constructors, handles   |
//! | [`windows`] | windows, popups, tooltips, menus, tab bars             |
//! | [`layout`]  | cursor, spacing, item width, ID stack                  |
//! | [`style`]   | style color/var stacks, color conversion               |
//! | [`widgets`] | text, buttons, value widgets, trees, item queries      |
//! | [`input`]   | mouse, keyboard, timing, host-only logging/settings    |
//! | [`drawing`] | `DrawList` and `Viewport` methods                      |

pub mod drawing;
pub mod input;
pub mod layout;
pub mod style;
pub mod values;
pub mod widgets;
pub mod windows;

use crate::gui::Gui;
use crate::module::Module;

/// The whole curated interface for backend `G`.
pub fn interface<G: Gui + 'static>() -> Module {
    values::module()
        .merge(windows::module::<G>())
        .merge(layout::module::<G>())
        .merge(style::module::<G>())
        .merge(widgets::module::<G>())
        .merge(input::module::<G>())
        .merge(drawing::module::<G>())
}
