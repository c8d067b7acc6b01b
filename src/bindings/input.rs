//! Mouse and keyboard state, timing and miscellaneous utilities.

use imgui_script_core::FunctionDescriptor;

use crate::adapter::FunctionBuilder as F;
use crate::gui::{Gui, Key, MouseButton, Vec2};
use crate::module::Module;

pub fn module<G: Gui + 'static>() -> Module {
    Module::new()
        .functions(mouse::<G>())
        .functions(keyboard::<G>())
        .functions(utilities::<G>())
        .functions(host_only::<G>())
}

fn mouse<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("IsMouseDown")
            .param::<MouseButton>("button")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_mouse_down(args.get(0)?))),
        F::new("IsMouseClicked")
            .param::<MouseButton>("button")
            .param_default("repeat", false)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_mouse_clicked(args.get(0)?, args.get(1)?))),
        F::new("IsMouseReleased")
            .param::<MouseButton>("button")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_mouse_released(args.get(0)?))),
        F::new("IsMouseDoubleClicked")
            .param::<MouseButton>("button")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_mouse_double_clicked(args.get(0)?))),
        F::new("IsMouseDragging")
            .param::<MouseButton>("button")
            .param_default("lock_threshold", -1.0f32)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_mouse_dragging(args.get(0)?, args.get(1)?))),
        F::new("GetMousePos")
            .returns::<Vec2>()
            .native(|gui: &mut G, _| Ok(gui.get_mouse_pos())),
        F::new("GetMouseDragDelta")
            .param_default("button", MouseButton::Left)
            .param_default("lock_threshold", -1.0f32)
            .returns::<Vec2>()
            .native(|gui: &mut G, args| Ok(gui.get_mouse_drag_delta(args.get(0)?, args.get(1)?))),
        F::new("ResetMouseDragDelta")
            .param_default("button", MouseButton::Left)
            .native(|gui: &mut G, args| {
                gui.reset_mouse_drag_delta(args.get(0)?);
                Ok(())
            }),
    ]
}

fn keyboard<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("IsKeyDown")
            .param::<Key>("key")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_key_down(args.get(0)?))),
        F::new("IsKeyPressed")
            .param::<Key>("key")
            .param_default("repeat", true)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_key_pressed(args.get(0)?, args.get(1)?))),
        F::new("IsKeyReleased")
            .param::<Key>("key")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_key_released(args.get(0)?))),
    ]
}

fn utilities<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("GetTime")
            .returns::<f64>()
            .native(|gui: &mut G, _| Ok(gui.get_time())),
        F::new("GetFrameCount")
            .returns::<i32>()
            .native(|gui: &mut G, _| Ok(gui.get_frame_count())),
        F::new("CalcTextSize")
            .param::<String>("text")
            .param_default("hide_text_after_double_hash", false)
            .param_default("wrap_width", -1.0f32)
            .returns::<Vec2>()
            .native(|gui: &mut G, args| {
                Ok(gui.calc_text_size(&args.get::<String>(0)?, args.get(1)?, args.get(2)?))
            }),
        F::new("GetVersion")
            .returns::<String>()
            .native(|gui: &mut G, _| Ok(gui.get_version())),
    ]
}

/// Registered only when a host takes them off the blacklist.
fn host_only<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("LogToClipboard")
            .param_default("auto_open_depth", -1i32)
            .native(|gui: &mut G, args| {
                gui.log_to_clipboard(args.get(0)?);
                Ok(())
            }),
        F::new("LogFinish").native(|gui: &mut G, _| {
            gui.log_finish();
            Ok(())
        }),
        F::new("LogText")
            .param::<String>("txt")
            .native(|gui: &mut G, args| {
                gui.log_text(&args.get::<String>(0)?);
                Ok(())
            }),
        F::new("LogButtons").native(|gui: &mut G, _| {
            gui.log_buttons();
            Ok(())
        }),
        F::new("SaveIniSettingsToDisk")
            .param::<String>("ini_filename")
            .native(|gui: &mut G, args| {
                gui.save_ini_settings_to_disk(&args.get::<String>(0)?);
                Ok(())
            }),
        F::new("CaptureKeyboardFromApp")
            .param_default("want_capture_keyboard_value", true)
            .native(|gui: &mut G, args| {
                gui.capture_keyboard_from_app(args.get(0)?);
                Ok(())
            }),
        F::new("CaptureMouseFromApp")
            .param_default("want_capture_mouse_value", true)
            .native(|gui: &mut G, args| {
                gui.capture_mouse_from_app(args.get(0)?);
                Ok(())
            }),
    ]
}
