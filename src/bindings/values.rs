//! The type vocabulary: enums, flag sets, value types and their
//! constructors, reference types.

use crate::adapter::FunctionBuilder as F;
use crate::gui::{
    Col, Color, ColorEditFlags, ComboFlags, Cond, Dir, DrawFlags, DrawList, FocusedFlags,
    HoveredFlags, InputTextFlags, Key, MouseButton, PopupFlags, SelectableFlags, SliderFlags,
    StyleVar, TabBarFlags, TabItemFlags, TreeNodeFlags, Vec2, Vec4, Viewport, WindowFlags,
};
use crate::module::Module;

pub fn module() -> Module {
    Module::new()
        // Enums
        .enumeration::<Cond>()
        .enumeration::<Dir>()
        .enumeration::<MouseButton>()
        .enumeration::<StyleVar>()
        .enumeration::<Col>()
        .enumeration::<Key>()
        // Flag sets
        .enumeration::<WindowFlags>()
        .enumeration::<InputTextFlags>()
        .enumeration::<TreeNodeFlags>()
        .enumeration::<PopupFlags>()
        .enumeration::<SelectableFlags>()
        .enumeration::<ComboFlags>()
        .enumeration::<TabBarFlags>()
        .enumeration::<TabItemFlags>()
        .enumeration::<FocusedFlags>()
        .enumeration::<HoveredFlags>()
        .enumeration::<ColorEditFlags>()
        .enumeration::<SliderFlags>()
        .enumeration::<DrawFlags>()
        // Types
        .ty::<Vec2>()
        .ty::<Vec4>()
        .ty::<Color>()
        .ty::<DrawList>()
        .ty::<Viewport>()
        // Constructors
        .function(F::constructor::<Vec2>().native(|_: &mut (), _| Ok(Vec2::ZERO)))
        .function(
            F::constructor::<Vec2>()
                .param::<f32>("x")
                .param::<f32>("y")
                .native(|_: &mut (), args| Ok(Vec2::new(args.get(0)?, args.get(1)?))),
        )
        .function(F::constructor::<Vec4>().native(|_: &mut (), _| Ok(Vec4::default())))
        .function(
            F::constructor::<Vec4>()
                .param::<f32>("x")
                .param::<f32>("y")
                .param::<f32>("z")
                .param::<f32>("w")
                .native(|_: &mut (), args| {
                    Ok(Vec4::new(
                        args.get(0)?,
                        args.get(1)?,
                        args.get(2)?,
                        args.get(3)?,
                    ))
                }),
        )
        .function(F::constructor::<Color>().native(|_: &mut (), _| Ok(Color::default())))
        .function(
            F::constructor::<Color>()
                .param::<f32>("r")
                .param::<f32>("g")
                .param::<f32>("b")
                .param_default("a", 1.0f32)
                .native(|_: &mut (), args| {
                    Ok(Color::rgba(
                        args.get(0)?,
                        args.get(1)?,
                        args.get(2)?,
                        args.get(3)?,
                    ))
                }),
        )
        .function(
            F::constructor::<Color>()
                .param::<u32>("rgba")
                .native(|_: &mut (), args| Ok(Color::from_u32(args.get(0)?))),
        )
}
