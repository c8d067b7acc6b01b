//! Style stacks, style colors and color conversion.

use crate::adapter::FunctionBuilder as F;
use crate::gui::{Col, Gui, StyleVar, Vec2, Vec4};
use crate::module::Module;

pub fn module<G: Gui + 'static>() -> Module {
    Module::new().functions([
        F::new("PushStyleColor")
            .param::<Col>("idx")
            .param::<u32>("col")
            .native(|gui: &mut G, args| {
                gui.push_style_color_u32(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("PushStyleColor")
            .param::<Col>("idx")
            .param::<Vec4>("col")
            .native(|gui: &mut G, args| {
                gui.push_style_color(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("PopStyleColor")
            .param_default("count", 1i32)
            .native(|gui: &mut G, args| {
                gui.pop_style_color(args.get(0)?);
                Ok(())
            }),
        F::new("PushStyleVar")
            .param::<StyleVar>("idx")
            .param::<f32>("val")
            .native(|gui: &mut G, args| {
                gui.push_style_var_float(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("PushStyleVar")
            .param::<StyleVar>("idx")
            .param::<Vec2>("val")
            .native(|gui: &mut G, args| {
                gui.push_style_var_vec2(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("PopStyleVar")
            .param_default("count", 1i32)
            .native(|gui: &mut G, args| {
                gui.pop_style_var(args.get(0)?);
                Ok(())
            }),
        F::new("GetStyleColorVec4")
            .param::<Col>("idx")
            .returns::<Vec4>()
            .native(|gui: &mut G, args| Ok(gui.get_style_color_vec4(args.get(0)?))),
        // No `GetColorU32(uint)` overload: it would accept the same ints as `Col`.
        F::new("GetColorU32")
            .param::<Col>("idx")
            .param_default("alpha_mul", 1.0f32)
            .returns::<u32>()
            .native(|gui: &mut G, args| Ok(gui.get_color_u32(args.get(0)?, args.get(1)?))),
        F::new("GetColorU32")
            .param::<Vec4>("col")
            .returns::<u32>()
            .native(|gui: &mut G, args| Ok(gui.get_color_u32_vec4(args.get(0)?))),
        F::new("StyleColorsDark").native(|gui: &mut G, _| {
            gui.style_colors_dark();
            Ok(())
        }),
        F::new("StyleColorsLight").native(|gui: &mut G, _| {
            gui.style_colors_light();
            Ok(())
        }),
        F::new("StyleColorsClassic").native(|gui: &mut G, _| {
            gui.style_colors_classic();
            Ok(())
        }),
        F::new("ColorConvertFloat4ToU32")
            .param::<Vec4>("col")
            .returns::<u32>()
            .native(|gui: &mut G, args| Ok(gui.color_convert_float4_to_u32(args.get(0)?))),
        F::new("ColorConvertU32ToFloat4")
            .param::<u32>("col")
            .returns::<Vec4>()
            .native(|gui: &mut G, args| Ok(gui.color_convert_u32_to_float4(args.get(0)?))),
    ])
}
