//! A headless [`Gui`] backend that records every call.
//!
//! Commands are recorded as `Name(arg, ...)` with `Debug`-formatted
//! arguments (flag sets as their raw bits). Widgets report interaction
//! only for labels a test marked with [`RecordingGui::activate`] or gave a
//! pending edit with [`RecordingGui::edit`]. State queries are answered
//! from the public fields and are not recorded.

use rustc_hash::{FxHashMap, FxHashSet};

use imgui_script_core::{Dynamic, FromDynamic, IntoDynamic, TypeHash};

use crate::gui::{
    Col, Color, ColorEditFlags, ComboFlags, Cond, Dir, DrawFlags, DrawList, FocusedFlags, Gui,
    HoveredFlags, InputTextFlags, Key, MouseButton, PopupFlags, SelectableFlags, SliderFlags,
    StyleVar, TabBarFlags, TabItemFlags, TreeNodeFlags, Vec2, Vec4, Viewport, WindowFlags,
};

macro_rules! record {
    ($gui:expr, $name:literal $(, $arg:expr)* $(,)?) => {{
        let args: Vec<String> = vec![$(format!("{:?}", $arg)),*];
        $gui.calls.push(format!("{}({})", $name, args.join(", ")));
    }};
}

const WINDOW_DRAW_LIST: DrawList = DrawList(1);
const FOREGROUND_DRAW_LIST: DrawList = DrawList(2);
const BACKGROUND_DRAW_LIST: DrawList = DrawList(3);
const MAIN_VIEWPORT: Viewport = Viewport(1);

/// Recording backend for tests, benches and dry runs.
#[derive(Debug)]
pub struct RecordingGui {
    calls: Vec<String>,
    activated: FxHashSet<String>,
    edits: FxHashMap<String, Dynamic>,
    close_requests: FxHashSet<String>,
    open_popups: FxHashSet<String>,
    popup_stack: Vec<String>,
    last_item: Option<String>,

    pub display_size: Vec2,
    pub window_pos: Vec2,
    pub window_size: Vec2,
    pub cursor_pos: Vec2,
    pub mouse_pos: Vec2,
    pub mouse_down: FxHashSet<MouseButton>,
    pub keys_down: FxHashSet<Key>,
    pub time: f64,
    pub frame_count: i32,
    pub item_width: f32,
    pub line_height: f32,
}

impl Default for RecordingGui {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            activated: FxHashSet::default(),
            edits: FxHashMap::default(),
            close_requests: FxHashSet::default(),
            open_popups: FxHashSet::default(),
            popup_stack: Vec::new(),
            last_item: None,
            display_size: Vec2::new(1280.0, 720.0),
            window_pos: Vec2::new(60.0, 60.0),
            window_size: Vec2::new(400.0, 300.0),
            cursor_pos: Vec2::new(8.0, 27.0),
            mouse_pos: Vec2::ZERO,
            mouse_down: FxHashSet::default(),
            keys_down: FxHashSet::default(),
            time: 0.0,
            frame_count: 0,
            item_width: 200.0,
            line_height: 13.0,
        }
    }
}

impl RecordingGui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.calls)
    }

    /// Make widgets with this label report a click (or toggle, or open).
    pub fn activate(&mut self, label: impl Into<String>) {
        self.activated.insert(label.into());
    }

    /// Queue the value the widget with this label produces on its next call.
    pub fn edit<T: IntoDynamic>(&mut self, label: impl Into<String>, value: T) {
        self.edits.insert(label.into(), value.into_dynamic());
    }

    /// Make the close button of this window or tab report a click.
    pub fn request_close(&mut self, name: impl Into<String>) {
        self.close_requests.insert(name.into());
    }

    fn item(&mut self, label: &str) -> bool {
        self.last_item = Some(label.to_string());
        self.activated.contains(label)
    }

    fn take_edit<T: FromDynamic>(&mut self, label: &str) -> Option<T> {
        self.last_item = Some(label.to_string());
        self.edits
            .remove(label)
            .and_then(|value| T::from_dynamic(&value).ok())
    }

    fn apply_edit<T: FromDynamic>(&mut self, label: &str, v: &mut T) -> bool {
        match self.take_edit(label) {
            Some(value) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    fn close_if_requested(&self, name: &str, open: Option<&mut bool>) {
        if let Some(open) = open
            && self.close_requests.contains(name)
        {
            *open = false;
        }
    }

    fn last_item_active(&self) -> bool {
        self.last_item
            .as_deref()
            .is_some_and(|label| self.activated.contains(label))
    }
}

impl Gui for RecordingGui {
    fn begin(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags) -> bool {
        record!(self, "Begin", name, open.as_deref().copied(), flags.bits());
        self.close_if_requested(name, open);
        true
    }

    fn end(&mut self) {
        record!(self, "End");
    }

    fn begin_child(&mut self, str_id: &str, size: Vec2, border: bool, flags: WindowFlags) -> bool {
        record!(self, "BeginChild", str_id, size, border, flags.bits());
        true
    }

    fn end_child(&mut self) {
        record!(self, "EndChild");
    }

    fn is_window_appearing(&self) -> bool {
        self.frame_count == 0
    }

    fn is_window_collapsed(&self) -> bool {
        false
    }

    fn is_window_focused(&self, _flags: FocusedFlags) -> bool {
        true
    }

    fn is_window_hovered(&self, _flags: HoveredFlags) -> bool {
        let min = self.window_pos;
        let max = Vec2::new(min.x + self.window_size.x, min.y + self.window_size.y);
        let p = self.mouse_pos;
        p.x >= min.x && p.y >= min.y && p.x < max.x && p.y < max.y
    }

    fn get_window_draw_list(&mut self) -> DrawList {
        WINDOW_DRAW_LIST
    }

    fn get_foreground_draw_list(&mut self) -> DrawList {
        FOREGROUND_DRAW_LIST
    }

    fn get_background_draw_list(&mut self) -> DrawList {
        BACKGROUND_DRAW_LIST
    }

    fn get_main_viewport(&mut self) -> Viewport {
        MAIN_VIEWPORT
    }

    fn get_window_pos(&self) -> Vec2 {
        self.window_pos
    }

    fn get_window_size(&self) -> Vec2 {
        self.window_size
    }

    fn get_window_width(&self) -> f32 {
        self.window_size.x
    }

    fn get_window_height(&self) -> f32 {
        self.window_size.y
    }

    fn get_content_region_avail(&self) -> Vec2 {
        Vec2::new(
            self.window_size.x - self.cursor_pos.x * 2.0,
            self.window_size.y - self.cursor_pos.y,
        )
    }

    fn set_next_window_pos(&mut self, pos: Vec2, cond: Cond, pivot: Vec2) {
        record!(self, "SetNextWindowPos", pos, cond, pivot);
    }

    fn set_next_window_size(&mut self, size: Vec2, cond: Cond) {
        record!(self, "SetNextWindowSize", size, cond);
    }

    fn set_next_window_collapsed(&mut self, collapsed: bool, cond: Cond) {
        record!(self, "SetNextWindowCollapsed", collapsed, cond);
    }

    fn set_next_window_focus(&mut self) {
        record!(self, "SetNextWindowFocus");
    }

    fn set_next_window_bg_alpha(&mut self, alpha: f32) {
        record!(self, "SetNextWindowBgAlpha", alpha);
    }

    fn set_window_font_scale(&mut self, scale: f32) {
        record!(self, "SetWindowFontScale", scale);
    }

    fn show_demo_window(&mut self, open: Option<&mut bool>) {
        record!(self, "ShowDemoWindow", open.as_deref().copied());
        self.close_if_requested("Dear ImGui Demo", open);
    }

    fn show_metrics_window(&mut self, open: Option<&mut bool>) {
        record!(self, "ShowMetricsWindow", open.as_deref().copied());
        self.close_if_requested("Dear ImGui Metrics/Debugger", open);
    }

    fn show_about_window(&mut self, open: Option<&mut bool>) {
        record!(self, "ShowAboutWindow", open.as_deref().copied());
        self.close_if_requested("About Dear ImGui", open);
    }

    fn open_popup(&mut self, str_id: &str, flags: PopupFlags) {
        record!(self, "OpenPopup", str_id, flags.bits());
        self.open_popups.insert(str_id.to_string());
    }

    fn begin_popup(&mut self, str_id: &str, flags: WindowFlags) -> bool {
        record!(self, "BeginPopup", str_id, flags.bits());
        let open = self.open_popups.contains(str_id);
        if open {
            self.popup_stack.push(str_id.to_string());
        }
        open
    }

    fn begin_popup_modal(&mut self, name: &str, open: Option<&mut bool>, flags: WindowFlags)
    -> bool {
        record!(self, "BeginPopupModal", name, open.as_deref().copied(), flags.bits());
        self.close_if_requested(name, open);
        let shown = self.open_popups.contains(name);
        if shown {
            self.popup_stack.push(name.to_string());
        }
        shown
    }

    fn begin_popup_context_item(&mut self, str_id: &str, flags: PopupFlags) -> bool {
        record!(self, "BeginPopupContextItem", str_id, flags.bits());
        if self.last_item_active() {
            self.open_popups.insert(str_id.to_string());
        }
        self.begin_popup(str_id, WindowFlags::empty())
    }

    fn end_popup(&mut self) {
        record!(self, "EndPopup");
        self.popup_stack.pop();
    }

    fn close_current_popup(&mut self) {
        record!(self, "CloseCurrentPopup");
        if let Some(current) = self.popup_stack.last() {
            self.open_popups.remove(current);
        }
    }

    fn is_popup_open(&self, str_id: &str, _flags: PopupFlags) -> bool {
        self.open_popups.contains(str_id)
    }

    fn begin_tooltip(&mut self) {
        record!(self, "BeginTooltip");
    }

    fn end_tooltip(&mut self) {
        record!(self, "EndTooltip");
    }

    fn set_tooltip(&mut self, txt: &str) {
        record!(self, "SetTooltip", txt);
    }

    fn begin_menu_bar(&mut self) -> bool {
        record!(self, "BeginMenuBar");
        true
    }

    fn end_menu_bar(&mut self) {
        record!(self, "EndMenuBar");
    }

    fn begin_main_menu_bar(&mut self) -> bool {
        record!(self, "BeginMainMenuBar");
        true
    }

    fn end_main_menu_bar(&mut self) {
        record!(self, "EndMainMenuBar");
    }

    fn begin_menu(&mut self, label: &str, enabled: bool) -> bool {
        record!(self, "BeginMenu", label, enabled);
        enabled && self.item(label)
    }

    fn end_menu(&mut self) {
        record!(self, "EndMenu");
    }

    fn menu_item(&mut self, label: &str, shortcut: &str, selected: bool, enabled: bool) -> bool {
        record!(self, "MenuItem", label, shortcut, selected, enabled);
        enabled && self.item(label)
    }

    fn begin_tab_bar(&mut self, str_id: &str, flags: TabBarFlags) -> bool {
        record!(self, "BeginTabBar", str_id, flags.bits());
        true
    }

    fn end_tab_bar(&mut self) {
        record!(self, "EndTabBar");
    }

    fn begin_tab_item(&mut self, label: &str, open: Option<&mut bool>, flags: TabItemFlags)
    -> bool {
        record!(self, "BeginTabItem", label, open.as_deref().copied(), flags.bits());
        self.close_if_requested(label, open);
        self.item(label)
    }

    fn end_tab_item(&mut self) {
        record!(self, "EndTabItem");
    }

    fn set_tab_item_closed(&mut self, label: &str) {
        record!(self, "SetTabItemClosed", label);
    }

    fn separator(&mut self) {
        record!(self, "Separator");
    }

    fn same_line(&mut self, offset_from_start_x: f32, spacing: f32) {
        record!(self, "SameLine", offset_from_start_x, spacing);
    }

    fn new_line(&mut self) {
        record!(self, "NewLine");
    }

    fn spacing(&mut self) {
        record!(self, "Spacing");
    }

    fn dummy(&mut self, size: Vec2) {
        record!(self, "Dummy", size);
    }

    fn indent(&mut self, indent_w: f32) {
        record!(self, "Indent", indent_w);
    }

    fn unindent(&mut self, indent_w: f32) {
        record!(self, "Unindent", indent_w);
    }

    fn begin_group(&mut self) {
        record!(self, "BeginGroup");
    }

    fn end_group(&mut self) {
        record!(self, "EndGroup");
    }

    fn get_cursor_pos(&self) -> Vec2 {
        self.cursor_pos
    }

    fn set_cursor_pos(&mut self, local_pos: Vec2) {
        record!(self, "SetCursorPos", local_pos);
        self.cursor_pos = local_pos;
    }

    fn get_cursor_screen_pos(&self) -> Vec2 {
        Vec2::new(
            self.window_pos.x + self.cursor_pos.x,
            self.window_pos.y + self.cursor_pos.y,
        )
    }

    fn set_cursor_screen_pos(&mut self, pos: Vec2) {
        record!(self, "SetCursorScreenPos", pos);
        self.cursor_pos = Vec2::new(pos.x - self.window_pos.x, pos.y - self.window_pos.y);
    }

    fn align_text_to_frame_padding(&mut self) {
        record!(self, "AlignTextToFramePadding");
    }

    fn get_text_line_height(&self) -> f32 {
        self.line_height
    }

    fn get_frame_height(&self) -> f32 {
        self.line_height + 6.0
    }

    fn push_item_width(&mut self, item_width: f32) {
        record!(self, "PushItemWidth", item_width);
    }

    fn pop_item_width(&mut self) {
        record!(self, "PopItemWidth");
    }

    fn set_next_item_width(&mut self, item_width: f32) {
        record!(self, "SetNextItemWidth", item_width);
    }

    fn calc_item_width(&self) -> f32 {
        self.item_width
    }

    fn push_text_wrap_pos(&mut self, wrap_local_pos_x: f32) {
        record!(self, "PushTextWrapPos", wrap_local_pos_x);
    }

    fn pop_text_wrap_pos(&mut self) {
        record!(self, "PopTextWrapPos");
    }

    fn push_id_str(&mut self, str_id: &str) {
        record!(self, "PushID", str_id);
    }

    fn push_id_int(&mut self, int_id: i32) {
        record!(self, "PushID", int_id);
    }

    fn pop_id(&mut self) {
        record!(self, "PopID");
    }

    fn get_id(&self, str_id: &str) -> u32 {
        TypeHash::from_name(str_id).0 as u32
    }

    fn push_style_color_u32(&mut self, idx: Col, col: u32) {
        record!(self, "PushStyleColor", idx, col);
    }

    fn push_style_color(&mut self, idx: Col, col: Vec4) {
        record!(self, "PushStyleColor", idx, col);
    }

    fn pop_style_color(&mut self, count: i32) {
        record!(self, "PopStyleColor", count);
    }

    fn push_style_var_float(&mut self, idx: StyleVar, val: f32) {
        record!(self, "PushStyleVar", idx, val);
    }

    fn push_style_var_vec2(&mut self, idx: StyleVar, val: Vec2) {
        record!(self, "PushStyleVar", idx, val);
    }

    fn pop_style_var(&mut self, count: i32) {
        record!(self, "PopStyleVar", count);
    }

    fn get_style_color_vec4(&self, _idx: Col) -> Vec4 {
        Vec4::new(1.0, 1.0, 1.0, 1.0)
    }

    fn get_color_u32(&self, idx: Col, alpha_mul: f32) -> u32 {
        let base = self.get_style_color_vec4(idx);
        Color::rgba(base.x, base.y, base.z, base.w * alpha_mul).to_u32()
    }

    fn get_color_u32_vec4(&self, col: Vec4) -> u32 {
        self.color_convert_float4_to_u32(col)
    }

    fn style_colors_dark(&mut self) {
        record!(self, "StyleColorsDark");
    }

    fn style_colors_light(&mut self) {
        record!(self, "StyleColorsLight");
    }

    fn style_colors_classic(&mut self) {
        record!(self, "StyleColorsClassic");
    }

    fn text_unformatted(&mut self, text: &str) {
        record!(self, "TextUnformatted", text);
    }

    fn text(&mut self, txt: &str) {
        record!(self, "Text", txt);
    }

    fn text_colored(&mut self, col: Vec4, txt: &str) {
        record!(self, "TextColored", col, txt);
    }

    fn text_disabled(&mut self, txt: &str) {
        record!(self, "TextDisabled", txt);
    }

    fn text_wrapped(&mut self, txt: &str) {
        record!(self, "TextWrapped", txt);
    }

    fn label_text(&mut self, label: &str, txt: &str) {
        record!(self, "LabelText", label, txt);
    }

    fn bullet_text(&mut self, txt: &str) {
        record!(self, "BulletText", txt);
    }

    fn bullet(&mut self) {
        record!(self, "Bullet");
    }

    fn button(&mut self, label: &str, size: Vec2) -> bool {
        record!(self, "Button", label, size);
        self.item(label)
    }

    fn small_button(&mut self, label: &str) -> bool {
        record!(self, "SmallButton", label);
        self.item(label)
    }

    fn invisible_button(&mut self, str_id: &str, size: Vec2) -> bool {
        record!(self, "InvisibleButton", str_id, size);
        self.item(str_id)
    }

    fn arrow_button(&mut self, str_id: &str, dir: Dir) -> bool {
        record!(self, "ArrowButton", str_id, dir);
        self.item(str_id)
    }

    fn checkbox(&mut self, label: &str, v: &mut bool) -> bool {
        record!(self, "Checkbox", label, *v);
        if self.item(label) {
            *v = !*v;
            true
        } else {
            self.apply_edit(label, v)
        }
    }

    fn checkbox_flags(&mut self, label: &str, flags: &mut i32, flags_value: i32) -> bool {
        record!(self, "CheckboxFlags", label, *flags, flags_value);
        if self.item(label) {
            *flags ^= flags_value;
            true
        } else {
            false
        }
    }

    fn radio_button(&mut self, label: &str, active: bool) -> bool {
        record!(self, "RadioButton", label, active);
        self.item(label)
    }

    fn radio_button_int(&mut self, label: &str, v: &mut i32, v_button: i32) -> bool {
        record!(self, "RadioButton", label, *v, v_button);
        if self.item(label) {
            *v = v_button;
            true
        } else {
            false
        }
    }

    fn progress_bar(&mut self, fraction: f32, size: Vec2, overlay: &str) {
        record!(self, "ProgressBar", fraction, size, overlay);
    }

    fn combo(
        &mut self,
        label: &str,
        current_item: &mut i32,
        items_separated_by_zeros: &str,
        popup_max_height_in_items: i32,
    ) -> bool {
        record!(
            self,
            "Combo",
            label,
            *current_item,
            items_separated_by_zeros,
            popup_max_height_in_items
        );
        self.apply_edit(label, current_item)
    }

    fn begin_combo(&mut self, label: &str, preview_value: &str, flags: ComboFlags) -> bool {
        record!(self, "BeginCombo", label, preview_value, flags.bits());
        self.item(label)
    }

    fn end_combo(&mut self) {
        record!(self, "EndCombo");
    }

    fn drag_float(
        &mut self,
        label: &str,
        v: &mut f32,
        v_speed: f32,
        v_min: f32,
        v_max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        record!(self, "DragFloat", label, *v, v_speed, v_min, v_max, format, flags.bits());
        self.apply_edit(label, v)
    }

    fn drag_int(
        &mut self,
        label: &str,
        v: &mut i32,
        v_speed: f32,
        v_min: i32,
        v_max: i32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        record!(self, "DragInt", label, *v, v_speed, v_min, v_max, format, flags.bits());
        self.apply_edit(label, v)
    }

    fn slider_float(
        &mut self,
        label: &str,
        v: &mut f32,
        v_min: f32,
        v_max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        record!(self, "SliderFloat", label, *v, v_min, v_max, format, flags.bits());
        self.apply_edit(label, v)
    }

    fn slider_int(
        &mut self,
        label: &str,
        v: &mut i32,
        v_min: i32,
        v_max: i32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        record!(self, "SliderInt", label, *v, v_min, v_max, format, flags.bits());
        self.apply_edit(label, v)
    }

    fn slider_angle(
        &mut self,
        label: &str,
        v_rad: &mut f32,
        v_degrees_min: f32,
        v_degrees_max: f32,
        format: &str,
        flags: SliderFlags,
    ) -> bool {
        record!(
            self,
            "SliderAngle",
            label,
            *v_rad,
            v_degrees_min,
            v_degrees_max,
            format,
            flags.bits()
        );
        self.apply_edit(label, v_rad)
    }

    fn input_text(&mut self, label: &str, buf: &mut String, flags: InputTextFlags) -> bool {
        record!(self, "InputText", label, buf.as_str(), flags.bits());
        self.apply_edit(label, buf)
    }

    fn input_text_multiline(
        &mut self,
        label: &str,
        buf: &mut String,
        size: Vec2,
        flags: InputTextFlags,
    ) -> bool {
        record!(self, "InputTextMultiline", label, buf.as_str(), size, flags.bits());
        self.apply_edit(label, buf)
    }

    fn input_float(
        &mut self,
        label: &str,
        v: &mut f32,
        step: f32,
        step_fast: f32,
        format: &str,
        flags: InputTextFlags,
    ) -> bool {
        record!(self, "InputFloat", label, *v, step, step_fast, format, flags.bits());
        self.apply_edit(label, v)
    }

    fn input_int(
        &mut self,
        label: &str,
        v: &mut i32,
        step: i32,
        step_fast: i32,
        flags: InputTextFlags,
    ) -> bool {
        record!(self, "InputInt", label, *v, step, step_fast, flags.bits());
        self.apply_edit(label, v)
    }

    fn color_edit4(&mut self, label: &str, col: &mut Vec4, flags: ColorEditFlags) -> bool {
        record!(self, "ColorEdit4", label, *col, flags.bits());
        self.apply_edit(label, col)
    }

    fn color_picker4(&mut self, label: &str, col: &mut Vec4, flags: ColorEditFlags) -> bool {
        record!(self, "ColorPicker4", label, *col, flags.bits());
        self.apply_edit(label, col)
    }

    fn color_button(&mut self, desc_id: &str, col: Vec4, flags: ColorEditFlags, size: Vec2)
    -> bool {
        record!(self, "ColorButton", desc_id, col, flags.bits(), size);
        self.item(desc_id)
    }

    fn tree_node(&mut self, label: &str) -> bool {
        record!(self, "TreeNode", label);
        self.item(label)
    }

    fn tree_node_str(&mut self, str_id: &str, txt: &str) -> bool {
        record!(self, "TreeNode", str_id, txt);
        self.item(str_id)
    }

    fn tree_node_ex(&mut self, label: &str, flags: TreeNodeFlags) -> bool {
        record!(self, "TreeNodeEx", label, flags.bits());
        flags.contains(TreeNodeFlags::DEFAULT_OPEN) || self.item(label)
    }

    fn tree_push(&mut self, str_id: &str) {
        record!(self, "TreePush", str_id);
    }

    fn tree_pop(&mut self) {
        record!(self, "TreePop");
    }

    fn collapsing_header(&mut self, label: &str, flags: TreeNodeFlags) -> bool {
        record!(self, "CollapsingHeader", label, flags.bits());
        flags.contains(TreeNodeFlags::DEFAULT_OPEN) || self.item(label)
    }

    fn set_next_item_open(&mut self, is_open: bool, cond: Cond) {
        record!(self, "SetNextItemOpen", is_open, cond);
    }

    fn selectable(&mut self, label: &str, selected: bool, flags: SelectableFlags, size: Vec2)
    -> bool {
        record!(self, "Selectable", label, selected, flags.bits(), size);
        self.item(label)
    }

    fn begin_list_box(&mut self, label: &str, size: Vec2) -> bool {
        record!(self, "BeginListBox", label, size);
        true
    }

    fn end_list_box(&mut self) {
        record!(self, "EndListBox");
    }

    fn is_item_hovered(&self, _flags: HoveredFlags) -> bool {
        self.last_item_active()
    }

    fn is_item_active(&self) -> bool {
        self.last_item_active()
    }

    fn is_item_focused(&self) -> bool {
        self.last_item_active()
    }

    fn is_item_clicked(&self, _mouse_button: MouseButton) -> bool {
        self.last_item_active()
    }

    fn is_item_visible(&self) -> bool {
        self.last_item.is_some()
    }

    fn is_item_edited(&self) -> bool {
        self.last_item_active()
    }

    fn is_item_activated(&self) -> bool {
        self.last_item_active()
    }

    fn is_item_deactivated(&self) -> bool {
        false
    }

    fn is_item_deactivated_after_edit(&self) -> bool {
        false
    }

    fn is_any_item_hovered(&self) -> bool {
        !self.activated.is_empty()
    }

    fn is_any_item_active(&self) -> bool {
        !self.activated.is_empty()
    }

    fn get_item_rect_min(&self) -> Vec2 {
        self.get_cursor_screen_pos()
    }

    fn get_item_rect_max(&self) -> Vec2 {
        let min = self.get_cursor_screen_pos();
        Vec2::new(min.x + self.item_width, min.y + self.get_frame_height())
    }

    fn get_item_rect_size(&self) -> Vec2 {
        Vec2::new(self.item_width, self.get_frame_height())
    }

    fn set_item_default_focus(&mut self) {
        record!(self, "SetItemDefaultFocus");
    }

    fn set_keyboard_focus_here(&mut self, offset: i32) {
        record!(self, "SetKeyboardFocusHere", offset);
    }

    fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_down.contains(&button)
    }

    fn is_mouse_clicked(&self, button: MouseButton, _repeat: bool) -> bool {
        self.mouse_down.contains(&button)
    }

    fn is_mouse_released(&self, button: MouseButton) -> bool {
        !self.mouse_down.contains(&button)
    }

    fn is_mouse_double_clicked(&self, _button: MouseButton) -> bool {
        false
    }

    fn is_mouse_dragging(&self, _button: MouseButton, _lock_threshold: f32) -> bool {
        false
    }

    fn get_mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    fn get_mouse_drag_delta(&self, _button: MouseButton, _lock_threshold: f32) -> Vec2 {
        Vec2::ZERO
    }

    fn reset_mouse_drag_delta(&mut self, button: MouseButton) {
        record!(self, "ResetMouseDragDelta", button);
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_pressed(&self, key: Key, _repeat: bool) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_released(&self, key: Key) -> bool {
        !self.keys_down.contains(&key)
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn get_frame_count(&self) -> i32 {
        self.frame_count
    }

    fn calc_text_size(&self, text: &str, hide_text_after_double_hash: bool, _wrap_width: f32)
    -> Vec2 {
        let visible = match text.find("##") {
            Some(end) if hide_text_after_double_hash => &text[..end],
            _ => text,
        };
        Vec2::new(7.0 * visible.chars().count() as f32, self.line_height)
    }

    fn color_convert_float4_to_u32(&self, col: Vec4) -> u32 {
        Color { value: col }.to_u32()
    }

    fn color_convert_u32_to_float4(&self, col: u32) -> Vec4 {
        Color::from_u32(col).value
    }

    fn get_version(&self) -> String {
        "1.89.9".to_string()
    }

    fn log_to_clipboard(&mut self, auto_open_depth: i32) {
        record!(self, "LogToClipboard", auto_open_depth);
    }

    fn log_finish(&mut self) {
        record!(self, "LogFinish");
    }

    fn log_text(&mut self, txt: &str) {
        record!(self, "LogText", txt);
    }

    fn log_buttons(&mut self) {
        record!(self, "LogButtons");
    }

    fn save_ini_settings_to_disk(&mut self, ini_filename: &str) {
        record!(self, "SaveIniSettingsToDisk", ini_filename);
    }

    fn capture_keyboard_from_app(&mut self, want_capture_keyboard: bool) {
        record!(self, "CaptureKeyboardFromApp", want_capture_keyboard);
    }

    fn capture_mouse_from_app(&mut self, want_capture_mouse: bool) {
        record!(self, "CaptureMouseFromApp", want_capture_mouse);
    }

    fn add_line(&mut self, list: DrawList, p1: Vec2, p2: Vec2, col: u32, thickness: f32) {
        record!(self, "AddLine", list.0, p1, p2, col, thickness);
    }

    fn add_rect(
        &mut self,
        list: DrawList,
        p_min: Vec2,
        p_max: Vec2,
        col: u32,
        rounding: f32,
        flags: DrawFlags,
        thickness: f32,
    ) {
        record!(
            self,
            "AddRect",
            list.0,
            p_min,
            p_max,
            col,
            rounding,
            flags.bits(),
            thickness
        );
    }

    fn add_rect_filled(
        &mut self,
        list: DrawList,
        p_min: Vec2,
        p_max: Vec2,
        col: u32,
        rounding: f32,
        flags: DrawFlags,
    ) {
        record!(self, "AddRectFilled", list.0, p_min, p_max, col, rounding, flags.bits());
    }

    fn add_circle(
        &mut self,
        list: DrawList,
        center: Vec2,
        radius: f32,
        col: u32,
        num_segments: i32,
        thickness: f32,
    ) {
        record!(self, "AddCircle", list.0, center, radius, col, num_segments, thickness);
    }

    fn add_circle_filled(
        &mut self,
        list: DrawList,
        center: Vec2,
        radius: f32,
        col: u32,
        num_segments: i32,
    ) {
        record!(self, "AddCircleFilled", list.0, center, radius, col, num_segments);
    }

    fn add_text(&mut self, list: DrawList, pos: Vec2, col: u32, text: &str) {
        record!(self, "AddText", list.0, pos, col, text);
    }

    fn add_triangle_filled(&mut self, list: DrawList, p1: Vec2, p2: Vec2, p3: Vec2, col: u32) {
        record!(self, "AddTriangleFilled", list.0, p1, p2, p3, col);
    }

    fn push_clip_rect(
        &mut self,
        list: DrawList,
        clip_rect_min: Vec2,
        clip_rect_max: Vec2,
        intersect_with_current_clip_rect: bool,
    ) {
        record!(
            self,
            "PushClipRect",
            list.0,
            clip_rect_min,
            clip_rect_max,
            intersect_with_current_clip_rect
        );
    }

    fn pop_clip_rect(&mut self, list: DrawList) {
        record!(self, "PopClipRect", list.0);
    }

    fn viewport_pos(&self, _viewport: Viewport) -> Vec2 {
        Vec2::ZERO
    }

    fn viewport_size(&self, _viewport: Viewport) -> Vec2 {
        self.display_size
    }

    fn viewport_work_pos(&self, _viewport: Viewport) -> Vec2 {
        Vec2::new(0.0, self.get_frame_height())
    }

    fn viewport_work_size(&self, _viewport: Viewport) -> Vec2 {
        Vec2::new(
            self.display_size.x,
            self.display_size.y - self.get_frame_height(),
        )
    }

    fn viewport_center(&self, viewport: Viewport) -> Vec2 {
        let pos = self.viewport_pos(viewport);
        let size = self.viewport_size(viewport);
        Vec2::new(pos.x + size.x * 0.5, pos.y + size.y * 0.5)
    }

    fn viewport_work_center(&self, viewport: Viewport) -> Vec2 {
        let pos = self.viewport_work_pos(viewport);
        let size = self.viewport_work_size(viewport);
        Vec2::new(pos.x + size.x * 0.5, pos.y + size.y * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_debug_formatted_arguments() {
        let mut gui = RecordingGui::new();
        gui.button("OK", Vec2::ZERO);
        gui.slider_float("volume", &mut 0.5, 0.0, 1.0, "%.3f", SliderFlags::empty());
        assert_eq!(
            gui.calls(),
            [
                "Button(\"OK\", Vec2 { x: 0.0, y: 0.0 })",
                "SliderFloat(\"volume\", 0.5, 0.0, 1.0, \"%.3f\", 0)",
            ]
        );
    }

    #[test]
    fn activation_and_edits() {
        let mut gui = RecordingGui::new();
        gui.activate("OK");
        gui.edit("volume", 0.75f32);
        assert!(gui.button("OK", Vec2::ZERO));
        assert!(gui.is_item_clicked(MouseButton::Left));

        let mut v = 0.5f32;
        assert!(gui.slider_float("volume", &mut v, 0.0, 1.0, "%.3f", SliderFlags::empty()));
        assert_eq!(v, 0.75);
        assert!(!gui.slider_float("volume", &mut v, 0.0, 1.0, "%.3f", SliderFlags::empty()));
    }

    #[test]
    fn close_requests_clear_p_open() {
        let mut gui = RecordingGui::new();
        gui.request_close("Tools");
        let mut open = true;
        assert!(gui.begin("Tools", Some(&mut open), WindowFlags::empty()));
        assert!(!open);
        assert_eq!(gui.take_calls(), ["Begin(\"Tools\", Some(true), 0)"]);
        assert!(gui.calls().is_empty());
    }

    #[test]
    fn popups_open_and_close() {
        let mut gui = RecordingGui::new();
        assert!(!gui.begin_popup("menu", WindowFlags::empty()));
        gui.open_popup("menu", PopupFlags::empty());
        assert!(gui.begin_popup("menu", WindowFlags::empty()));
        gui.close_current_popup();
        gui.end_popup();
        assert!(!gui.is_popup_open("menu", PopupFlags::empty()));
    }

    #[test]
    fn text_size_hides_after_double_hash() {
        let gui = RecordingGui::new();
        assert_eq!(gui.calc_text_size("Save##file", true, -1.0).x, 28.0);
        assert_eq!(gui.calc_text_size("Save##file", false, -1.0).x, 70.0);
    }
}
