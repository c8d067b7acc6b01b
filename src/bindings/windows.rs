//! Windows, child windows, popups, tooltips, menus and tab bars.

use crate::adapter::FunctionBuilder as F;
use crate::gui::{
    Cond, DrawList, FocusedFlags, Gui, HoveredFlags, PopupFlags, TabBarFlags, TabItemFlags, Vec2,
    Viewport, WindowFlags,
};
use crate::module::Module;

pub fn module<G: Gui + 'static>() -> Module {
    Module::new()
        .functions(windows::<G>())
        .functions(popups::<G>())
        .functions(menus::<G>())
}

fn windows<G: Gui + 'static>() -> Vec<imgui_script_core::FunctionDescriptor> {
    vec![
        F::new("Begin")
            .param::<String>("name")
            .inout_opt::<bool>("p_open")
            .param_default("flags", WindowFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let name: String = args.get(0)?;
                let mut open: Option<bool> = args.get(1)?;
                let flags: WindowFlags = args.get(2)?;
                let shown = gui.begin(&name, open.as_mut(), flags);
                if let Some(open) = open {
                    args.set(1, open)?;
                }
                Ok(shown)
            }),
        F::new("End").native(|gui: &mut G, _| {
            gui.end();
            Ok(())
        }),
        F::new("BeginChild")
            .param::<String>("str_id")
            .param_default("size", Vec2::ZERO)
            .param_default("border", false)
            .param_default("flags", WindowFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.begin_child(
                    &args.get::<String>(0)?,
                    args.get(1)?,
                    args.get(2)?,
                    args.get(3)?,
                ))
            }),
        F::new("EndChild").native(|gui: &mut G, _| {
            gui.end_child();
            Ok(())
        }),
        F::new("IsWindowAppearing")
            .returns::<bool>()
            .native(|gui: &mut G, _| Ok(gui.is_window_appearing())),
        F::new("IsWindowCollapsed")
            .returns::<bool>()
            .native(|gui: &mut G, _| Ok(gui.is_window_collapsed())),
        F::new("IsWindowFocused")
            .param_default("flags", FocusedFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_window_focused(args.get(0)?))),
        F::new("IsWindowHovered")
            .param_default("flags", HoveredFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_window_hovered(args.get(0)?))),
        F::new("GetWindowDrawList")
            .returns::<DrawList>()
            .native(|gui: &mut G, args| {
                let list = gui.get_window_draw_list();
                Ok(args.new_handle(list))
            }),
        F::new("GetForegroundDrawList")
            .returns::<DrawList>()
            .native(|gui: &mut G, args| {
                let list = gui.get_foreground_draw_list();
                Ok(args.new_handle(list))
            }),
        F::new("GetBackgroundDrawList")
            .returns::<DrawList>()
            .native(|gui: &mut G, args| {
                let list = gui.get_background_draw_list();
                Ok(args.new_handle(list))
            }),
        F::new("GetMainViewport")
            .returns::<Viewport>()
            .native(|gui: &mut G, args| {
                let viewport = gui.get_main_viewport();
                Ok(args.new_handle(viewport))
            }),
        F::new("GetWindowPos")
            .returns::<Vec2>()
            .native(|gui: &mut G, _| Ok(gui.get_window_pos())),
        F::new("GetWindowSize")
            .returns::<Vec2>()
            .native(|gui: &mut G, _| Ok(gui.get_window_size())),
        F::new("GetWindowWidth")
            .returns::<f32>()
            .native(|gui: &mut G, _| Ok(gui.get_window_width())),
        F::new("GetWindowHeight")
            .returns::<f32>()
            .native(|gui: &mut G, _| Ok(gui.get_window_height())),
        F::new("GetContentRegionAvail")
            .returns::<Vec2>()
            .native(|gui: &mut G, _| Ok(gui.get_content_region_avail())),
        F::new("SetNextWindowPos")
            .param::<Vec2>("pos")
            .param_default("cond", Cond::None)
            .param_default("pivot", Vec2::ZERO)
            .native(|gui: &mut G, args| {
                gui.set_next_window_pos(args.get(0)?, args.get(1)?, args.get(2)?);
                Ok(())
            }),
        F::new("SetNextWindowSize")
            .param::<Vec2>("size")
            .param_default("cond", Cond::None)
            .native(|gui: &mut G, args| {
                gui.set_next_window_size(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("SetNextWindowCollapsed")
            .param::<bool>("collapsed")
            .param_default("cond", Cond::None)
            .native(|gui: &mut G, args| {
                gui.set_next_window_collapsed(args.get(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("SetNextWindowFocus").native(|gui: &mut G, _| {
            gui.set_next_window_focus();
            Ok(())
        }),
        F::new("SetNextWindowBgAlpha")
            .param::<f32>("alpha")
            .native(|gui: &mut G, args| {
                gui.set_next_window_bg_alpha(args.get(0)?);
                Ok(())
            }),
        F::new("SetWindowFontScale")
            .param::<f32>("scale")
            .native(|gui: &mut G, args| {
                gui.set_window_font_scale(args.get(0)?);
                Ok(())
            }),
        show_window::<G>("ShowDemoWindow", G::show_demo_window),
        show_window::<G>("ShowMetricsWindow", G::show_metrics_window),
        show_window::<G>("ShowAboutWindow", G::show_about_window),
    ]
}

/// `void Show*Window(bool &inout p_open = null)`
fn show_window<G: Gui + 'static>(
    name: &str,
    show: fn(&mut G, Option<&mut bool>),
) -> imgui_script_core::FunctionDescriptor {
    F::new(name)
        .inout_opt::<bool>("p_open")
        .native(move |gui: &mut G, args| {
            let mut open: Option<bool> = args.get(0)?;
            show(gui, open.as_mut());
            if let Some(open) = open {
                args.set(0, open)?;
            }
            Ok(())
        })
}

fn popups<G: Gui + 'static>() -> Vec<imgui_script_core::FunctionDescriptor> {
    vec![
        F::new("OpenPopup")
            .param::<String>("str_id")
            .param_default("popup_flags", PopupFlags::empty())
            .native(|gui: &mut G, args| {
                gui.open_popup(&args.get::<String>(0)?, args.get(1)?);
                Ok(())
            }),
        F::new("BeginPopup")
            .param::<String>("str_id")
            .param_default("flags", WindowFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.begin_popup(&args.get::<String>(0)?, args.get(1)?))),
        F::new("BeginPopupModal")
            .param::<String>("name")
            .inout_opt::<bool>("p_open")
            .param_default("flags", WindowFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let name: String = args.get(0)?;
                let mut open: Option<bool> = args.get(1)?;
                let shown = gui.begin_popup_modal(&name, open.as_mut(), args.get(2)?);
                if let Some(open) = open {
                    args.set(1, open)?;
                }
                Ok(shown)
            }),
        F::new("BeginPopupContextItem")
            .param::<String>("str_id")
            .param_default("popup_flags", PopupFlags::MOUSE_BUTTON_RIGHT)
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.begin_popup_context_item(&args.get::<String>(0)?, args.get(1)?))
            }),
        F::new("EndPopup").native(|gui: &mut G, _| {
            gui.end_popup();
            Ok(())
        }),
        F::new("CloseCurrentPopup").native(|gui: &mut G, _| {
            gui.close_current_popup();
            Ok(())
        }),
        F::new("IsPopupOpen")
            .param::<String>("str_id")
            .param_default("flags", PopupFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.is_popup_open(&args.get::<String>(0)?, args.get(1)?))),
        F::new("BeginTooltip").native(|gui: &mut G, _| {
            gui.begin_tooltip();
            Ok(())
        }),
        F::new("EndTooltip").native(|gui: &mut G, _| {
            gui.end_tooltip();
            Ok(())
        }),
        F::new("SetTooltip")
            .param::<String>("txt")
            .native(|gui: &mut G, args| {
                gui.set_tooltip(&args.get::<String>(0)?);
                Ok(())
            }),
    ]
}

fn menus<G: Gui + 'static>() -> Vec<imgui_script_core::FunctionDescriptor> {
    vec![
        F::new("BeginMenuBar")
            .returns::<bool>()
            .native(|gui: &mut G, _| Ok(gui.begin_menu_bar())),
        F::new("EndMenuBar").native(|gui: &mut G, _| {
            gui.end_menu_bar();
            Ok(())
        }),
        F::new("BeginMainMenuBar")
            .returns::<bool>()
            .native(|gui: &mut G, _| Ok(gui.begin_main_menu_bar())),
        F::new("EndMainMenuBar").native(|gui: &mut G, _| {
            gui.end_main_menu_bar();
            Ok(())
        }),
        F::new("BeginMenu")
            .param::<String>("label")
            .param_default("enabled", true)
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.begin_menu(&args.get::<String>(0)?, args.get(1)?))),
        F::new("EndMenu").native(|gui: &mut G, _| {
            gui.end_menu();
            Ok(())
        }),
        // The `bool* p_selected` overload would accept the same arguments.
        F::new("MenuItem")
            .param::<String>("label")
            .param_default("shortcut", String::new())
            .param_default("selected", false)
            .param_default("enabled", true)
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                Ok(gui.menu_item(
                    &args.get::<String>(0)?,
                    &args.get::<String>(1)?,
                    args.get(2)?,
                    args.get(3)?,
                ))
            }),
        F::new("BeginTabBar")
            .param::<String>("str_id")
            .param_default("flags", TabBarFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| Ok(gui.begin_tab_bar(&args.get::<String>(0)?, args.get(1)?))),
        F::new("EndTabBar").native(|gui: &mut G, _| {
            gui.end_tab_bar();
            Ok(())
        }),
        F::new("BeginTabItem")
            .param::<String>("label")
            .inout_opt::<bool>("p_open")
            .param_default("flags", TabItemFlags::empty())
            .returns::<bool>()
            .native(|gui: &mut G, args| {
                let label: String = args.get(0)?;
                let mut open: Option<bool> = args.get(1)?;
                let selected = gui.begin_tab_item(&label, open.as_mut(), args.get(2)?);
                if let Some(open) = open {
                    args.set(1, open)?;
                }
                Ok(selected)
            }),
        F::new("EndTabItem").native(|gui: &mut G, _| {
            gui.end_tab_item();
            Ok(())
        }),
        F::new("SetTabItemClosed")
            .param::<String>("tab_or_docked_window_label")
            .native(|gui: &mut G, args| {
                gui.set_tab_item_closed(&args.get::<String>(0)?);
                Ok(())
            }),
    ]
}
