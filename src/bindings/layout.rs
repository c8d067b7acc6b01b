//! Cursor, layout, item width and the ID stack.

use imgui_script_core::FunctionDescriptor;

use crate::adapter::FunctionBuilder as F;
use crate::gui::{Gui, Vec2};
use crate::module::Module;

pub fn module<G: Gui + 'static>() -> Module {
    Module::new()
        .functions(cursor::<G>())
        .functions(widths::<G>())
        .functions(id_stack::<G>())
}

fn cursor<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("Separator").native(|gui: &mut G, _| {
            gui.separator();
            Ok(())
        }),
        F::new("SameLine")
            .param_default("offset_from_start_x", 0.0f32)
            .param_default("spacing", -1.0f32)
            .native(|gui: &mut G, args| {
                gui.same_line(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("NewLine").native(|gui: &mut G, _| {
            gui.new_line();
            Ok(())
        }),
        F::new("Spacing").native(|gui: &mut G, _| {
            gui.spacing();
            Ok(())
        }),
        F::new("Dummy")
            .param::<Vec2>("size")
            .native(|gui: &mut G, args| {
                gui.dummy(args.get(0)?);
                Ok(())
            }),
        F::new("Indent")
            .param_default("indent_w", 0.0f32)
            .native(|gui: &mut G, args| {
                gui.indent(args.get(0)?);
                Ok(())
            }),
        F::new("Unindent")
            .param_default("indent_w", 0.0f32)
            .native(|gui: &mut G, args| {
                gui.unindent(args.get(0)?);
                Ok(())
            }),
        F::new("BeginGroup").native(|gui: &mut G, _| {
            gui.begin_group();
            Ok(())
        }),
        F::new("EndGroup").native(|gui: &mut G, _| {
            gui.end_group();
            Ok(())
        }),
        F::new("GetCursorPos")
            .returns::<Vec2>()
            .native(|gui: &mut G, _| Ok(gui.get_cursor_pos())),
        F::new("SetCursorPos")
            .param::<Vec2>("local_pos")
            .native(|gui: &mut G, args| {
                gui.set_cursor_pos(args.get(0)?);
                Ok(())
            }),
        F::new("GetCursorScreenPos")
            .returns::<Vec2>()
            .native(|gui: &mut G, _| Ok(gui.get_cursor_screen_pos())),
        F::new("SetCursorScreenPos")
            .param::<Vec2>("pos")
            .native(|gui: &mut G, args| {
                gui.set_cursor_screen_pos(args.get(0)?);
                Ok(())
            }),
        F::new("AlignTextToFramePadding").native(|gui: &mut G, _| {
            gui.align_text_to_frame_padding();
            Ok(())
        }),
        F::new("GetTextLineHeight")
            .returns::<f32>()
            .native(|gui: &mut G, _| Ok(gui.get_text_line_height())),
        F::new("GetFrameHeight")
            .returns::<f32>()
            .native(|gui: &mut G, _| Ok(gui.get_frame_height())),
    ]
}

fn widths<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("PushItemWidth")
            .param::<f32>("item_width")
            .native(|gui: &mut G, args| {
                gui.push_item_width(args.get(0)?);
                Ok(())
            }),
        F::new("PopItemWidth").native(|gui: &mut G, _| {
            gui.pop_item_width();
            Ok(())
        }),
        F::new("SetNextItemWidth")
            .param::<f32>("item_width")
            .native(|gui: &mut G, args| {
                gui.set_next_item_width(args.get(0)?);
                Ok(())
            }),
        F::new("CalcItemWidth")
            .returns::<f32>()
            .native(|gui: &mut G, _| Ok(gui.calc_item_width())),
        F::new("PushTextWrapPos")
            .param_default("wrap_local_pos_x", 0.0f32)
            .native(|gui: &mut G, args| {
                gui.push_text_wrap_pos(args.get(0)?);
                Ok(())
            }),
        F::new("PopTextWrapPos").native(|gui: &mut G, _| {
            gui.pop_text_wrap_pos();
            Ok(())
        }),
    ]
}

fn id_stack<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("PushID")
            .param::<String>("str_id")
            .native(|gui: &mut G, args| {
                gui.push_id_str(&args.get::<String>(0)?);
                Ok(())
            }),
        F::new("PushID")
            .param::<i32>("int_id")
            .native(|gui: &mut G, args| {
                gui.push_id_int(args.get(0)?);
                Ok(())
            }),
        F::new("PopID").native(|gui: &mut G, _| {
            gui.pop_id();
            Ok(())
        }),
        F::new("GetID")
            .param::<String>("str_id")
            .returns::<u32>()
            .native(|gui: &mut G, args| Ok(gui.get_id(&args.get::<String>(0)?))),
    ]
}
