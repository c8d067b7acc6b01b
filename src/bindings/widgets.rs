//! Text, buttons, value widgets, trees, selectables and item queries.
//!
//! Widgets that edit a value take it as `&inout` and write the edited value
//! back after the call, whether or not the widget reports a change.

use imgui_script_core::FunctionDescriptor;

use crate::adapter::FunctionBuilder as F;
use crate::gui::{
    ColorEditFlags, ComboFlags, Cond, Dir, Gui, HoveredFlags, InputTextFlags, MouseButton,
    SelectableFlags, SliderFlags, TreeNodeFlags, Vec2, Vec4,
};
use crate::module::Module;

pub fn module<G: Gui + 'static>() -> Module {
    Module::new()
        .functions(text::<G>())
        .functions(buttons::<G>())
        .functions(values::<G>())
        .functions(trees::<G>())
        .functions(item_queries::<G>())
}

/// `void Name(const string &in txt)`
fn text_fn<G: Gui + 'static>(name: &str, f: fn(&mut G, &str)) -> FunctionDescriptor {
    F::new(name)
        .param::<String>("txt")
        .native(move |gui: &mut G, args| {
            f(gui, &args.get::<String>(0)?);
            Ok(())
        })
}

fn text<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("TextUnformatted")
            .param::<String>("text")
            .native(|gui: &mut G, args| {
                gui.text_unformatted(&args.get::<String>(0)?);
                Ok(())
            }),
        text_fn::<G>("Text", G::text),
        F::new("TextColored")
            .param::<Vec4>("col")
            .param::<String>("txt")
            .native(|gui: &mut G, args| {
                gui.text_colored(args.get(0)?, &args.get::<String>(1)?);
                Ok(())
            }),
        text_fn::<G>("TextDisabled", G::text_disabled),
        text_fn::<G>("TextWrapped", G::text_wrapped),
        F::new("LabelText")
            .param::<String>("label")
            .param::<String>("txt")
            .native(|gui: &mut G, args| {
                gui.label_text(&args.get::<String>(0)?, &args.get::<String>(1)?);
                Ok(())
            }),
        text_fn::<G>("BulletText", G::bullet_text),
        F::new("Bullet").native(|gui: &mut G, _| {
            gui.bullet();
            Ok(())
        }),
    ]
}

fn buttons<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("Button")
            .param::<String>("label")
            .param_default("size", Vec2::ZERO)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.button(&args.get::<String>(0)?, args.get(1)?))),
        F::new("SmallButton")
            .param::<String>("label")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.small_button(&args.get::<String>(0)?))),
        F::new("InvisibleButton")
            .param::<String>("str_id")
            .param::<Vec2>("size")
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.invisible_button(&args.get::<String>(0)?, args.get(1)?))
            }),
        F::new("ArrowButton")
            .param::<String>("str_id")
            .param::<Dir>("dir")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.arrow_button(&args.get::<String>(0)?, args.get(1)?))),
        F::new("Checkbox")
            .param::<String>("label")
            .inout::<bool>("v")
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: bool = args.get(1)?;
                let changed = gui.checkbox(&label, &mut v);
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("CheckboxFlags")
            .param::<String>("label")
            .inout::<i32>("flags")
            .param::<i32>("flags_value")
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut flags: i32 = args.get(1)?;
                let changed = gui.checkbox_flags(&label, &mut flags, args.get(2)?);
                args.set(1, flags)?;
                Ok(changed)
            }),
        F::new("RadioButton")
            .param::<String>("label")
            .param::<bool>("active")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.radio_button(&args.get::<String>(0)?, args.get(1)?))),
        F::new("RadioButton")
            .param::<String>("label")
            .inout::<i32>("v")
            .param::<i32>("v_button")
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: i32 = args.get(1)?;
                let pressed = gui.radio_button_int(&label, &mut v, args.get(2)?);
                args.set(1, v)?;
                Ok(pressed)
            }),
        F::new("ProgressBar")
            .param::<f32>("fraction")
            .param_default("size_arg", Vec2::new(-f32::MIN_POSITIVE, 0.0))
            .param_default("overlay", String::new())
            .native(|gui: &mut G, args| {
                gui.progress_bar(args.get(0)?, args.get(1)?, &args.get::<String>(2)?);
                Ok(())
            }),
    ]
}

fn values<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("Combo")
            .param::<String>("label")
            .inout::<i32>("current_item")
            .param::<String>("items_separated_by_zeros")
            .param_default("popup_max_height_in_items", -1i32)
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut current: i32 = args.get(1)?;
                let items: String = args.get(2)?;
                let changed = gui.combo(&label, &mut current, &items, args.get(3)?);
                args.set(1, current)?;
                Ok(changed)
            }),
        F::new("BeginCombo")
            .param::<String>("label")
            .param::<String>("preview_value")
            .param_default("flags", ComboFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.begin_combo(
                    &args.get::<String>(0)?,
                    &args.get::<String>(1)?,
                    args.get(2)?,
                ))
            }),
        F::new("EndCombo").native(|gui: &mut G, _| {
            gui.end_combo();
            Ok(())
        }),
        F::new("DragFloat")
            .param::<String>("label")
            .inout::<f32>("v")
            .param_default("v_speed", 1.0f32)
            .param_default("v_min", 0.0f32)
            .param_default("v_max", 0.0f32)
            .param_default("format", "%.3f".to_string())
            .param_default("flags", SliderFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: f32 = args.get(1)?;
                let format: String = args.get(5)?;
                let changed = gui.drag_float(
                    &label,
                    &mut v,
                    args.get(2)?,
                    args.get(3)?,
                    args.get(4)?,
                    &format,
                    args.get(6)?,
                );
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("DragInt")
            .param::<String>("label")
            .inout::<i32>("v")
            .param_default("v_speed", 1.0f32)
            .param_default("v_min", 0i32)
            .param_default("v_max", 0i32)
            .param_default("format", "%d".to_string())
            .param_default("flags", SliderFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: i32 = args.get(1)?;
                let format: String = args.get(5)?;
                let changed = gui.drag_int(
                    &label,
                    &mut v,
                    args.get(2)?,
                    args.get(3)?,
                    args.get(4)?,
                    &format,
                    args.get(6)?,
                );
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("SliderFloat")
            .param::<String>("label")
            .inout::<f32>("v")
            .param::<f32>("v_min")
            .param::<f32>("v_max")
            .param_default("format", "%.3f".to_string())
            .param_default("flags", SliderFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: f32 = args.get(1)?;
                let format: String = args.get(4)?;
                let changed = gui.slider_float(
                    &label,
                    &mut v,
                    args.get(2)?,
                    args.get(3)?,
                    &format,
                    args.get(5)?,
                );
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("SliderInt")
            .param::<String>("label")
            .inout::<i32>("v")
            .param::<i32>("v_min")
            .param::<i32>("v_max")
            .param_default("format", "%d".to_string())
            .param_default("flags", SliderFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: i32 = args.get(1)?;
                let format: String = args.get(4)?;
                let changed = gui.slider_int(
                    &label,
                    &mut v,
                    args.get(2)?,
                    args.get(3)?,
                    &format,
                    args.get(5)?,
                );
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("SliderAngle")
            .param::<String>("label")
            .inout::<f32>("v_rad")
            .param_default("v_degrees_min", -360.0f32)
            .param_default("v_degrees_max", 360.0f32)
            .param_default("format", "%.0f deg".to_string())
            .param_default("flags", SliderFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: f32 = args.get(1)?;
                let format: String = args.get(4)?;
                let changed = gui.slider_angle(
                    &label,
                    &mut v,
                    args.get(2)?,
                    args.get(3)?,
                    &format,
                    args.get(5)?,
                );
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("InputText")
            .param::<String>("label")
            .inout::<String>("buf")
            .param_default("flags", InputTextFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut buf: String = args.get(1)?;
                let changed = gui.input_text(&label, &mut buf, args.get(2)?);
                args.set(1, buf)?;
                Ok(changed)
            }),
        F::new("InputTextMultiline")
            .param::<String>("label")
            .inout::<String>("buf")
            .param_default("size", Vec2::ZERO)
            .param_default("flags", InputTextFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut buf: String = args.get(1)?;
                let changed =
                    gui.input_text_multiline(&label, &mut buf, args.get(2)?, args.get(3)?);
                args.set(1, buf)?;
                Ok(changed)
            }),
        F::new("InputFloat")
            .param::<String>("label")
            .inout::<f32>("v")
            .param_default("step", 0.0f32)
            .param_default("step_fast", 0.0f32)
            .param_default("format", "%.3f".to_string())
            .param_default("flags", InputTextFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: f32 = args.get(1)?;
                let format: String = args.get(4)?;
                let changed = gui.input_float(
                    &label,
                    &mut v,
                    args.get(2)?,
                    args.get(3)?,
                    &format,
                    args.get(5)?,
                );
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("InputInt")
            .param::<String>("label")
            .inout::<i32>("v")
            .param_default("step", 1i32)
            .param_default("step_fast", 100i32)
            .param_default("flags", InputTextFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut v: i32 = args.get(1)?;
                let changed =
                    gui.input_int(&label, &mut v, args.get(2)?, args.get(3)?, args.get(4)?);
                args.set(1, v)?;
                Ok(changed)
            }),
        F::new("ColorEdit4")
            .param::<String>("label")
            .inout::<Vec4>("col")
            .param_default("flags", ColorEditFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut col: Vec4 = args.get(1)?;
                let changed = gui.color_edit4(&label, &mut col, args.get(2)?);
                args.set(1, col)?;
                Ok(changed)
            }),
        F::new("ColorPicker4")
            .param::<String>("label")
            .inout::<Vec4>("col")
            .param_default("flags", ColorEditFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut col: Vec4 = args.get(1)?;
                let changed = gui.color_picker4(&label, &mut col, args.get(2)?);
                args.set(1, col)?;
                Ok(changed)
            }),
        F::new("ColorButton")
            .param::<String>("desc_id")
            .param::<Vec4>("col")
            .param_default("flags", ColorEditFlags::empty())
            .param_default("size", Vec2::ZERO)
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.color_button(
                    &args.get::<String>(0)?,
                    args.get(1)?,
                    args.get(2)?,
                    args.get(3)?,
                ))
            }),
    ]
}

fn trees<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("TreeNode")
            .param::<String>("label")
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.tree_node(&args.get::<String>(0)?))),
        F::new("TreeNode")
            .param::<String>("str_id")
            .param::<String>("txt")
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.tree_node_str(&args.get::<String>(0)?, &args.get::<String>(1)?))
            }),
        F::new("TreeNodeEx")
            .param::<String>("label")
            .param_default("flags", TreeNodeFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.tree_node_ex(&args.get::<String>(0)?, args.get(1)?))),
        F::new("TreePush")
            .param::<String>("str_id")
            .native(|gui: &mut G, args| {
                gui.tree_push(&args.get::<String>(0)?);
                Ok(())
            }),
        F::new("TreePop").native(|gui: &mut G, _| {
            gui.tree_pop();
            Ok(())
        }),
        F::new("CollapsingHeader")
            .param::<String>("label")
            .param_default("flags", TreeNodeFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.collapsing_header(&args.get::<String>(0)?, args.get(1)?))
            }),
        F::new("SetNextItemOpen")
            .param::<bool>("is_open")
            .param_default("cond", Cond::None)
            .native(|gui: &mut G, args| {
                gui.set_next_item_open(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("Selectable")
            .param::<String>("label")
            .param_default("selected", false)
            .param_default("flags", SelectableFlags::empty())
            .param_default("size", Vec2::ZERO)
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.selectable(
                    &args.get::<String>(0)?,
                    args.get(1)?,
                    args.get(2)?,
                    args.get(3)?,
                ))
            }),
        F::new("BeginListBox")
            .param::<String>("label")
            .param_default("size", Vec2::ZERO)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.begin_list_box(&args.get::<String>(0)?, args.get(1)?))),
        F::new("EndListBox").native(|gui: &mut G, _| {
            gui.end_list_box();
            Ok(())
        }),
    ]
}

/// `bool Name()`
fn query<G: Gui + 'static>(name: &str, f: fn(&G) -> bool) -> FunctionDescriptor {
    F::new(name)
        .returns::<bool>()
        .native(move |gui: &mut G, _| Ok(f(gui)))
}

/// `Vec2 Name()`
fn query_vec2<G: Gui + 'static>(name: &str, f: fn(&G) -> Vec2) -> FunctionDescriptor {
    F::new(name)
        .returns::<Vec2>()
        .native(move |gui: &mut G, _| Ok(f(gui)))
}

fn item_queries<G: Gui + 'static>() -> Vec<FunctionDescriptor> {
    vec![
        F::new("IsItemHovered")
            .param_default("flags", HoveredFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_item_hovered(args.get(0)?))),
        query::<G>("IsItemActive", G::is_item_active),
        query::<G>("IsItemFocused", G::is_item_focused),
        F::new("IsItemClicked")
            .param_default("mouse_button", MouseButton::Left)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_item_clicked(args.get(0)?))),
        query::<G>("IsItemVisible", G::is_item_visible),
        query::<G>("IsItemEdited", G::is_item_edited),
        query::<G>("IsItemActivated", G::is_item_activated),
        query::<G>("IsItemDeactivated", G::is_item_deactivated),
        query::<G>("IsItemDeactivatedAfterEdit", G::is_item_deactivated_after_edit),
        query::<G>("IsAnyItemHovered", G::is_any_item_hovered),
        query::<G>("IsAnyItemActive", G::is_any_item_active),
        query_vec2::<G>("GetItemRectMin", G::get_item_rect_min),
        query_vec2::<G>("GetItemRectMax", G::get_item_rect_max),
        query_vec2::<G>("GetItemRectSize", G::get_item_rect_size),
        F::new("SetItemDefaultFocus").native(|gui: &mut G, _| {
            gui.set_item_default_focus();
            Ok(())
        }),
        F::new("SetKeyboardFocusHere")
            .param_default("offset", 0i32)
            .native(|gui: &mut G, args| {
                gui.set_keyboard_focus_here(args.get(0)?);
                Ok(())
            }),
    ]
}
