//! The curated GUI surface.
//!
//! [`Gui`] lists every native entry point the bindings expose. A backend
//! (a Dear ImGui wrapper, or [`RecordingGui`](crate::RecordingGui) in
//! tests) implements it once; the bindings call it through the thunks.
//!
//! Signatures follow Dear ImGui with these mappings:
//!
//! - `const char*` is `&str`
//! - `fmt, ...` is a single pre-formatted `txt`
//! - `bool* p_open = NULL` is `Option<&mut bool>`
//! - `T* v` for a widget's edited value is `&mut T`
//! - `ImU32` is `u32`, `ImGuiID` is `u32`
//! - draw lists and viewports are [`DrawList`]/[`Viewport`] tokens

mod enums;
mod types;

pub use enums::{
    Col, ColorEditFlags, ComboFlags, Cond, Dir, DrawFlags, FocusedFlags, HoveredFlags,
    InputTextFlags, Key, MouseButton, PopupFlags, SelectableFlags, SliderFlags, StyleVar,
    TabBarFlags, TabItemFlags, TreeNodeFlags, WindowFlags,
};
pub use types::{Color, DrawList, Vec2, Vec4, Viewport};

/// A GUI backend.
pub trait Gui {
    // ========================================================================
    // Windows
    // ========================================================================

    fn begin(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool;
    fn end(&mut self);
    fn begin_child(&mut self, str_id: &str, size: Vec2, border: bool, flags: WindowFlags)
    -> bool;
    fn end_child(&mut self);

    fn is_window_appearing(&self) -> bool;
    fn is_window_collapsed(&self) -> bool;
    fn is_window_focused(&self, flags: FocusedFlags) -> bool;
    fn is_window_hovered(&self, flags: HoveredFlags) -> bool;

    fn get_window_draw_list(&mut self) -> DrawList;
    fn get_foreground_draw_list(&mut self) -> DrawList;
    fn get_background_draw_list(&mut self) -> DrawList;
    fn get_main_viewport(&mut self) -> Viewport;

    fn get_window_pos(&self) -> Vec2;
    fn get_window_size(&self) -> Vec2;
    fn get_window_width(&self) -> f32;
    fn get_window_height(&self) -> f32;
    fn get_content_region_avail(&self) -> Vec2;

    fn set_next_window_pos(&mut self, pos: Vec2, cond: Cond, pivot: Vec2);
    fn set_next_window_size(&mut self, size: Vec2, cond: Cond);
    fn set_next_window_collapsed(&mut self, collapsed: bool, cond: Cond);
    fn set_next_window_focus(&mut self);
    fn set_next_window_bg_alpha(&mut self, alpha: f32);
    fn set_window_font_scale(&mut self, scale: f32);

    fn show_demo_window(&mut self, open: Option<&mut bool>);
    fn show_metrics_window(&mut self, open: Option<&mut bool>);
    fn show_about_window(&mut self, open: Option<&mut bool>);

    // ========================================================================
    // Popups, tooltips, menus, tabs
    // ========================================================================

    fn open_popup(&mut self, str_id: &str, flags: PopupFlags);
    fn begin_popup(&mut self, str_id: &str, flags: WindowFlags) -> bool;
    fn begin_popup_modal(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags)
    -> bool;
    fn begin_popup_context_item(&mut self, str_id: &str, flags: PopupFlags) -> bool;
    fn end_popup(&mut self);
    fn close_current_popup(&mut self);
    fn is_popup_open(&self, str_id: &str, flags: PopupFlags) -> bool;

    fn begin_tooltip(&mut self);
    fn end_tooltip(&mut self);
    fn set_tooltip(&mut self, txt: &str);

    fn begin_menu_bar(&mut self) -> bool;
    fn end_menu_bar(&mut self);
    fn begin_main_menu_bar(&mut self) -> bool;
    fn end_main_menu_bar(&mut self);
    fn begin_menu(&mut self, label: &str, enabled: bool) -> bool;
    fn end_menu(&mut self);
    fn menu_item(&mut self, label: &str, shortcut: &str, selected: bool, enabled: bool) -> bool;

    fn begin_tab_bar(&mut self, str_id: &str, flags: TabBarFlags) -> bool;
    fn end_tab_bar(&mut self);
    fn begin_tab_item(&mut self, label: &str, open: Option<&mut bool>, flags: TabItemFlags)
    -> bool;
    fn end_tab_item(&mut self);
    fn set_tab_item_closed(&mut self, label: &str);

    // ========================================================================
    // Layout and ID stack
    // ========================================================================

    fn separator(&mut self);
    fn same_line(&mut self, offset_from_start_x: f32, spacing: f32);
    fn new_line(&mut self);
    fn spacing(&mut self);
    fn dummy(&mut self, size: Vec2);
    fn indent(&mut self, indent_w: f32);
    fn unindent(&mut self, indent_w: f32);
    fn begin_group(&mut self);
    fn end_group(&mut self);
    fn get_cursor_pos(&self) -> Vec2;
    fn set_cursor_pos(&mut self, local_pos: Vec2);
    fn get_cursor_screen_pos(&self) -> Vec2;
    fn set_cursor_screen_pos(&mut self, pos: Vec2);
    fn align_text_to_frame_padding(&mut self);
    fn get_text_line_height(&self) -> f32;
    fn get_frame_height(&self) -> f32;

    fn push_item_width(&mut self, item_width: f32);
    fn pop_item_width(&mut self);
    fn set_next_item_width(&mut self, item_width: f32);
    fn calc_item_width(&self) -> f32;
    fn push_text_wrap_pos(&mut self, wrap_local_pos_x: f32);
    fn pop_text_wrap_pos(&mut self);

    fn push_id_str(&mut self, str_id: &str);
    fn push_id_int(&mut self, int_id: i32);
    fn pop_id(&mut self);
    fn get_id(&self, str_id: &str) -> u32;

    // ========================================================================
    // Style
    // ========================================================================

    fn push_style_color_u32(&mut self, idx: Col, col: u32);
    fn push_style_color(&mut self, idx: Col, col: Vec4);
    fn pop_style_color(&mut self, count: i32);
    fn push_style_var_float(&mut self, idx: StyleVar, val: f32);
    fn push_style_var_vec2(&mut self, idx: StyleVar, val: Vec2);
    fn pop_style_var(&mut self, count: i32);
    fn get_style_color_vec4(&self, idx: Col) -> Vec4;
    fn get_color_u32(&self, idx: Col, alpha_mul: f32) -> u32;
    fn get_color_u32_vec4(&self, col: Vec4) -> u32;
    fn style_colors_dark(&mut self);
    fn style_colors_light(&mut self);
    fn style_colors_classic(&mut self);

    // ========================================================================
    // Text and widgets
    // ========================================================================

    fn text_unformatted(&mut self, text: &str);
    fn text(&mut self, txt: &str);
    fn text_colored(&mut self, col: Vec4, txt: &str);
    fn text_disabled(&mut self, txt: &str);
    fn text_wrapped(&mut self, txt: &str);
    fn label_text(&mut self, label: &str, txt: &str);
    fn bullet_text(&mut self, txt: &str);
    fn bullet(&mut self);

    fn button(&mut self, label: &str, size: Vec2) -> bool;
    fn small_button(&mut self, label: &str) -> bool;
    fn invisible_button(&mut self, str_id: &str, size: Vec2) -> bool;
    fn arrow_button(&mut self, str_id: &str, dir: Dir) -> bool;
    fn checkbox(&mut self, label: &str, v: &mut bool) -> bool;
    fn checkbox_flags(&mut self, label: &str, flags: &mut i32, flags_value: i32) -> bool;
    fn radio_button(&mut self, label: &str, active: bool) -> bool;
    fn radio_button_int(&mut self, label: &str, v: &mut i32, v_button: i32) -> bool;
    fn progress_bar(&mut self, fraction: f32, size: Vec2, overlay: &str);

    fn combo(
        &mut self,
        label: &str,
        current_item: &mut i32,
        items_separated_by_zeros: &str,
        popup_max_height_in_items: i32,
    ) -> bool;
    fn begin_combo(&mut self, label: &str, preview_value: &str, flags: ComboFlags) -> bool;
    fn end_combo(&mut self);

    #[allow(clippy::too_many_arguments)]
    fn drag_float(
        &mut self,
        label: &str,
        v: &mut f32,
        v_speed: f32,
        v_min: f32,
        v_max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;
    #[allow(clippy::too_many_arguments)]
    fn drag_int(
        &mut self,
        label: &str,
        v: &mut i32,
        v_speed: f32,
        v_min: i32,
        v_max: i32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;
    fn slider_float(
        &mut self,
        label: &str,
        v: &mut f32,
        v_min: f32,
        v_max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;
    fn slider_int(
        &mut self,
        label: &str,
        v: &mut i32,
        v_min: i32,
        v_max: i32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;
    fn slider_angle(
        &mut self,
        label: &str,
        v_rad: &mut f32,
        v_degrees_min: f32,
        v_degrees_max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool;

    fn input_text(&mut self, label: &str, buf: &mut String, flags: InputTextFlags) -> bool;
    fn input_text_multiline(
        &mut self,
        label: &str,
        buf: &mut String,
        size: Vec2,
        flags: InputTextFlags,
    ) -> bool;
    fn input_float(
        &mut self,
        label: &str,
        v: &mut f32,
        step: f32,
        step_fast: f32,
        format: &str,
        flags: InputTextFlags,
    ) -> bool;
    fn input_int(
        &mut self,
        label: &str,
        v: &mut i32,
        step: i32,
        step_fast: i32,
        flags: InputTextFlags,
    ) -> bool;

    fn color_edit4(&mut self, label: &str, col: &mut Vec4, flags: ColorEditFlags) -> bool;
    fn color_picker4(&mut self, label: &str, col: &mut Vec4, flags: ColorEditFlags) -> bool;
    fn color_button(&mut self, desc_id: &str, col: Vec4, flags: ColorEditFlags, size: Vec2)
    -> bool;

    fn tree_node(&mut self, label: &str) -> bool;
    fn tree_node_str(&mut self, str_id: &str, txt: &str) -> bool;
    fn tree_node_ex(&mut self, label: &str, flags: TreeNodeFlags) -> bool;
    fn tree_push(&mut self, str_id: &str);
    fn tree_pop(&mut self);
    fn collapsing_header(&mut self, label: &str, flags: TreeNodeFlags) -> bool;
    fn set_next_item_open(&mut self, is_open: bool, cond: Cond);

    fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2)
    -> bool;
    fn begin_list_box(&mut self, label: &str, size: Vec2) -> bool;
    fn end_list_box(&mut self);

    // ========================================================================
    // Item queries
    // ========================================================================

    fn is_item_hovered(&self, flags: HoveredFlags) -> bool;
    fn is_item_active(&self) -> bool;
    fn is_item_focused(&self) -> bool;
    fn is_item_clicked(&self, mouse_button: MouseButton) -> bool;
    fn is_item_visible(&self) -> bool;
    fn is_item_edited(&self) -> bool;
    fn is_item_activated(&self) -> bool;
    fn is_item_deactivated(&self) -> bool;
    fn is_item_deactivated_after_edit(&self) -> bool;
    fn is_any_item_hovered(&self) -> bool;
    fn is_any_item_active(&self) -> bool;
    fn get_item_rect_min(&self) -> Vec2;
    fn get_item_rect_max(&self) -> Vec2;
    fn get_item_rect_size(&self) -> Vec2;
    fn set_item_default_focus(&mut self);
    fn set_keyboard_focus_here(&mut self, offset: i32);

    // ========================================================================
    // Inputs and utilities
    // ========================================================================

    fn is_mouse_down(&self, button: MouseButton) -> bool;
    fn is_mouse_clicked(&self, button: MouseButton, repeat: bool) -> bool;
    fn is_mouse_released(&self, button: MouseButton) -> bool;
    fn is_mouse_double_clicked(&self, button: MouseButton) -> bool;
    fn is_mouse_dragging(&self, button: MouseButton, lock_threshold: f32) -> bool;
    fn get_mouse_pos(&self) -> Vec2;
    fn get_mouse_drag_delta(&self, button: MouseButton, lock_threshold: f32) -> Vec2;
    fn reset_mouse_drag_delta(&mut self, button: MouseButton);
    fn is_key_down(&self, key: Key) -> bool;
    fn is_key_pressed(&self, key: Key, repeat: bool) -> bool;
    fn is_key_released(&self, key: Key) -> bool;

    fn get_time(&self) -> f64;
    fn get_frame_count(&self) -> i32;
    fn calc_text_size(&self, text: &str, hide_text_after_double_hash: bool, wrap_width: f32)
    -> Vec2;
    fn color_convert_float4_to_u32(&self, col: Vec4) -> u32;
    fn color_convert_u32_to_float4(&self, col: u32) -> Vec4;
    fn get_version(&self) -> String;

    fn log_to_clipboard(&mut self, auto_open_depth: i32);
    fn log_finish(&mut self);
    fn log_text(&mut self, txt: &str);
    fn log_buttons(&mut self);
    fn save_ini_settings_to_disk(&mut self, ini_filename: &str);
    fn capture_keyboard_from_app(&mut self, want_capture_keyboard: bool);
    fn capture_mouse_from_app(&mut self, want_capture_mouse: bool);

    // ========================================================================
    // Draw lists and viewports
    // ========================================================================

    fn add_line(&mut self, list: DrawList, p1: Vec2, p2: Vec2, col: u32, thickness: f32);
    #[allow(clippy::too_many_arguments)]
    fn add_rect(
        &mut self,
        list: DrawList,
        p_min: Vec2,
        p_max: Vec2,
        col: u32,
        rounding: f32,
        flags: DrawFlags,
        thickness: f32,
    );
    fn add_rect_filled(
        &mut self,
        list: DrawList,
        p_min: Vec2,
        p_max: Vec2,
        col: u32,
        rounding: f32,
        flags: DrawFlags,
    );
    fn add_circle(
        &mut self,
        list: DrawList,
        center: Vec2,
        radius: f32,
        col: u32,
        num_segments: i32,
        thickness: f32,
    );
    fn add_circle_filled(
        &mut self,
        list: DrawList,
        center: Vec2,
        radius: f32,
        col: u32,
        num_segments: i32,
    );
    fn add_text(&mut self, list: DrawList, pos: Vec2, col: u32, text: &str);
    fn add_triangle_filled(&mut self, list: DrawList, p1: Vec2, p2: Vec2, p3: Vec2, col: u32);
    fn push_clip_rect(
        &mut self,
        list: DrawList,
        clip_rect_min: Vec2,
        clip_rect_max: Vec2,
        intersect_with_current_clip_rect: bool,
    );
    fn pop_clip_rect(&mut self, list: DrawList);

    fn viewport_pos(&self, viewport: Viewport) -> Vec2;
    fn viewport_size(&self, viewport: Viewport) -> Vec2;
    fn viewport_work_pos(&self, viewport: Viewport) -> Vec2;
    fn viewport_work_size(&self, viewport: Viewport) -> Vec2;
    fn viewport_center(&self, viewport: Viewport) -> Vec2;
    fn viewport_work_center(&self, viewport: Viewport) -> Vec2;
}
