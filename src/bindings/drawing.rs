//! Methods of the `DrawList` and `Viewport` reference types.
//!
//! Both arrive as handles in `this`; the handle table resolves them to the
//! backend token for the current scope.

use imgui_script_core::FunctionDescriptor;

use crate::adapter::FunctionBuilder as F;
use crate::gui::{DrawFlags, DrawList, Gui, Vec2, Viewport};
use crate::module::Module;

pub fn module<G: Gui + 'static>() -> Module {
    Module::new()
        .functions(draw_list::<G>())
        .functions(viewport::<G>())
}

fn draw_list<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::method::<DrawList>("AddLine")
            .param::<Vec2>("p1")
            .param::<Vec2>("p2")
            .param::<u32>("col")
            .param_default("thickness", 1.0f32)
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_line(list, args.get(0)?, args.get(1)?, args.get(2)?, args.get(3)?);
                Ok(())
            }),
        F::method::<DrawList>("AddRect")
            .param::<Vec2>("p_min")
            .param::<Vec2>("p_max")
            .param::<u32>("col")
            .param_default("rounding", 0.0f32)
            .param_default("flags", DrawFlags::empty())
            .param_default("thickness", 1.0f32)
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_rect(
                    list,
                    args.get(0)?,
                    args.get(1)?,
                    args.get(2)?,
                    args.get(3)?,
                    args.get(4)?,
                    args.get(5)?,
                );
                Ok(())
            }),
        F::method::<DrawList>("AddRectFilled")
            .param::<Vec2>("p_min")
            .param::<Vec2>("p_max")
            .param::<u32>("col")
            .param_default("rounding", 0.0f32)
            .param_default("flags", DrawFlags::empty())
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_rect_filled(
                    list,
                    args.get(0)?,
                    args.get(1)?,
                    args.get(2)?,
                    args.get(3)?,
                    args.get(4)?,
                );
                Ok(())
            }),
        F::method::<DrawList>("AddCircle")
            .param::<Vec2>("center")
            .param::<f32>("radius")
            .param::<u32>("col")
            .param_default("num_segments", 0i32)
            .param_default("thickness", 1.0f32)
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_circle(
                    list,
                    args.get(0)?,
                    args.get(1)?,
                    args.get(2)?,
                    args.get(3)?,
                    args.get(4)?,
                );
                Ok(())
            }),
        F::method::<DrawList>("AddCircleFilled")
            .param::<Vec2>("center")
            .param::<f32>("radius")
            .param::<u32>("col")
            .param_default("num_segments", 0i32)
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_circle_filled(list, args.get(0)?, args.get(1)?, args.get(2)?, args.get(3)?);
                Ok(())
            }),
        F::method::<DrawList>("AddText")
            .param::<Vec2>("pos")
            .param::<u32>("col")
            .param::<String>("text")
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_text(list, args.get(0)?, args.get(1)?, &args.get::<String>(2)?);
                Ok(())
            }),
        F::method::<DrawList>("AddTriangleFilled")
            .param::<Vec2>("p1")
            .param::<Vec2>("p2")
            .param::<Vec2>("p3")
            .param::<u32>("col")
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.add_triangle_filled(list, args.get(0)?, args.get(1)?, args.get(2)?, args.get(3)?);
                Ok(())
            }),
        F::method::<DrawList>("PushClipRect")
            .param::<Vec2>("clip_rect_min")
            .param::<Vec2>("clip_rect_max")
            .param_default("intersect_with_current_clip_rect", false)
            .native(|gui: &mut G, args| {
                let list = args.this_handle::<DrawList>()?;
                gui.push_clip_rect(list, args.get(0)?, args.get(1)?, args.get(2)?);
                Ok(())
            }),
        F::method::<DrawList>("PopClipRect").native(|gui: &mut G, args| {
            let list = args.this_handle::<DrawList>()?;
            gui.pop_clip_rect(list);
            Ok(())
        }),
    ]
}

/// `Vec2 Viewport::Name()`
fn viewport_vec2<G: Gui + 'static>(name: &str, f: fn(&G, Viewport) -> Vec2) -> FunctionDescriptor {
    F::method::<Viewport>(name)
        .returns::<Vec2>()
        .native(move |gui: &mut G, args| {
            let viewport = args.this_handle::<Viewport>()?;
            Ok(f(gui, viewport))
        })
}

fn viewport<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        viewport_vec2::<G>("GetPos", G::viewport_pos),
        viewport_vec2::<G>("GetSize", G::viewport_size),
        viewport_vec2::<G>("GetWorkPos", G::viewport_work_pos),
        viewport_vec2::<G>("GetWorkSize", G::viewport_work_size),
        viewport_vec2::<G>("GetCenter", G::viewport_center),
        viewport_vec2::<G>("GetWorkCenter", G::viewport_work_center),
    ]
}
