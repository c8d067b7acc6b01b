//! Enums and flag sets of the GUI surface.
//!
//! Values match Dear ImGui 1.89. Script names drop the `ImGui` prefix and
//! the trailing underscore (`ImGuiWindowFlags_` is `WindowFlags`); value
//! names drop the `Type_` prefix.

use crate::adapter::{script_enum, script_flags};

// ============================================================================
// Enums
// ============================================================================

script_enum! {
    /// When a `SetNextWindow*` style call takes effect.
    pub enum Cond("Cond") {
        None = 0,
        Always = 1,
        Once = 2,
        FirstUseEver = 4,
        Appearing = 8,
    }
}

script_enum! {
    /// A cardinal direction.
    pub enum Dir("Dir") {
        None = -1,
        Left = 0,
        Right = 1,
        Up = 2,
        Down = 3,
    }
}

script_enum! {
    pub enum MouseButton("MouseButton") {
        Left = 0,
        Right = 1,
        Middle = 2,
    }
}

script_enum! {
    /// Style variables accepted by `PushStyleVar`.
    pub enum StyleVar("StyleVar") {
        Alpha = 0,
        DisabledAlpha = 1,
        WindowPadding = 2,
        WindowRounding = 3,
        WindowBorderSize = 4,
        WindowMinSize = 5,
        WindowTitleAlign = 6,
        ChildRounding = 7,
        ChildBorderSize = 8,
        PopupRounding = 9,
        PopupBorderSize = 10,
        FramePadding = 11,
        FrameRounding = 12,
        FrameBorderSize = 13,
        ItemSpacing = 14,
        ItemInnerSpacing = 15,
        IndentSpacing = 16,
        CellPadding = 17,
        ScrollbarSize = 18,
        ScrollbarRounding = 19,
        GrabMinSize = 20,
        GrabRounding = 21,
        TabRounding = 22,
        ButtonTextAlign = 23,
        SelectableTextAlign = 24,
    }
}

script_enum! {
    /// Style colors accepted by `PushStyleColor`.
    pub enum Col("Col") {
        Text = 0,
        TextDisabled = 1,
        WindowBg = 2,
        ChildBg = 3,
        PopupBg = 4,
        Border = 5,
        BorderShadow = 6,
        FrameBg = 7,
        FrameBgHovered = 8,
        FrameBgActive = 9,
        TitleBg = 10,
        TitleBgActive = 11,
        TitleBgCollapsed = 12,
        MenuBarBg = 13,
        ScrollbarBg = 14,
        ScrollbarGrab = 15,
        ScrollbarGrabHovered = 16,
        ScrollbarGrabActive = 17,
        CheckMark = 18,
        SliderGrab = 19,
        SliderGrabActive = 20,
        Button = 21,
        ButtonHovered = 22,
        ButtonActive = 23,
        Header = 24,
        HeaderHovered = 25,
        HeaderActive = 26,
        Separator = 27,
        SeparatorHovered = 28,
        SeparatorActive = 29,
        ResizeGrip = 30,
        ResizeGripHovered = 31,
        ResizeGripActive = 32,
        Tab = 33,
        TabHovered = 34,
        TabActive = 35,
        TabUnfocused = 36,
        TabUnfocusedActive = 37,
        PlotLines = 38,
        PlotLinesHovered = 39,
        PlotHistogram = 40,
        PlotHistogramHovered = 41,
        TableHeaderBg = 42,
        TableBorderStrong = 43,
        TableBorderLight = 44,
        TableRowBg = 45,
        TableRowBgAlt = 46,
        TextSelectedBg = 47,
        DragDropTarget = 48,
        NavHighlight = 49,
        NavWindowingHighlight = 50,
        NavWindowingDimBg = 51,
        ModalWindowDimBg = 52,
    }
}

script_enum! {
    /// Named keys. Digit keys are left out; their names are not identifiers.
    pub enum Key("Key") {
        None = 0,
        Tab = 512,
        LeftArrow = 513,
        RightArrow = 514,
        UpArrow = 515,
        DownArrow = 516,
        PageUp = 517,
        PageDown = 518,
        Home = 519,
        End = 520,
        Insert = 521,
        Delete = 522,
        Backspace = 523,
        Space = 524,
        Enter = 525,
        Escape = 526,
        LeftCtrl = 527,
        LeftShift = 528,
        LeftAlt = 529,
        LeftSuper = 530,
        RightCtrl = 531,
        RightShift = 532,
        RightAlt = 533,
        RightSuper = 534,
        Menu = 535,
        A = 546,
        B = 547,
        C = 548,
        D = 549,
        E = 550,
        F = 551,
        G = 552,
        H = 553,
        I = 554,
        J = 555,
        K = 556,
        L = 557,
        M = 558,
        N = 559,
        O = 560,
        P = 561,
        Q = 562,
        R = 563,
        S = 564,
        T = 565,
        U = 566,
        V = 567,
        W = 568,
        X = 569,
        Y = 570,
        Z = 571,
        F1 = 572,
        F2 = 573,
        F3 = 574,
        F4 = 575,
        F5 = 576,
        F6 = 577,
        F7 = 578,
        F8 = 579,
        F9 = 580,
        F10 = 581,
        F11 = 582,
        F12 = 583,
    }
}

// ============================================================================
// Flag sets
// ============================================================================

script_flags! {
    pub struct WindowFlags("WindowFlags") {
        const NONE = "None" => 0;
        const NO_TITLE_BAR = "NoTitleBar" => 1 << 0;
        const NO_RESIZE = "NoResize" => 1 << 1;
        const NO_MOVE = "NoMove" => 1 << 2;
        const NO_SCROLLBAR = "NoScrollbar" => 1 << 3;
        const NO_SCROLL_WITH_MOUSE = "NoScrollWithMouse" => 1 << 4;
        const NO_COLLAPSE = "NoCollapse" => 1 << 5;
        const ALWAYS_AUTO_RESIZE = "AlwaysAutoResize" => 1 << 6;
        const NO_BACKGROUND = "NoBackground" => 1 << 7;
        const NO_SAVED_SETTINGS = "NoSavedSettings" => 1 << 8;
        const NO_MOUSE_INPUTS = "NoMouseInputs" => 1 << 9;
        const MENU_BAR = "MenuBar" => 1 << 10;
        const HORIZONTAL_SCROLLBAR = "HorizontalScrollbar" => 1 << 11;
        const NO_FOCUS_ON_APPEARING = "NoFocusOnAppearing" => 1 << 12;
        const NO_BRING_TO_FRONT_ON_FOCUS = "NoBringToFrontOnFocus" => 1 << 13;
        const ALWAYS_VERTICAL_SCROLLBAR = "AlwaysVerticalScrollbar" => 1 << 14;
        const ALWAYS_HORIZONTAL_SCROLLBAR = "AlwaysHorizontalScrollbar" => 1 << 15;
        const ALWAYS_USE_WINDOW_PADDING = "AlwaysUseWindowPadding" => 1 << 16;
        const NO_NAV_INPUTS = "NoNavInputs" => 1 << 18;
        const NO_NAV_FOCUS = "NoNavFocus" => 1 << 19;
        const UNSAVED_DOCUMENT = "UnsavedDocument" => 1 << 20;
        const NO_NAV = "NoNav" => Self::NO_NAV_INPUTS.bits() | Self::NO_NAV_FOCUS.bits();
        const NO_DECORATION = "NoDecoration" => Self::NO_TITLE_BAR.bits()
            | Self::NO_RESIZE.bits()
            | Self::NO_SCROLLBAR.bits()
            | Self::NO_COLLAPSE.bits();
        const NO_INPUTS = "NoInputs" => Self::NO_MOUSE_INPUTS.bits()
            | Self::NO_NAV_INPUTS.bits()
            | Self::NO_NAV_FOCUS.bits();
    }
}

script_flags! {
    pub struct InputTextFlags("InputTextFlags") {
        const NONE = "None" => 0;
        const CHARS_DECIMAL = "CharsDecimal" => 1 << 0;
        const CHARS_HEXADECIMAL = "CharsHexadecimal" => 1 << 1;
        const CHARS_UPPERCASE = "CharsUppercase" => 1 << 2;
        const CHARS_NO_BLANK = "CharsNoBlank" => 1 << 3;
        const AUTO_SELECT_ALL = "AutoSelectAll" => 1 << 4;
        const ENTER_RETURNS_TRUE = "EnterReturnsTrue" => 1 << 5;
        const ALLOW_TAB_INPUT = "AllowTabInput" => 1 << 10;
        const CTRL_ENTER_FOR_NEW_LINE = "CtrlEnterForNewLine" => 1 << 11;
        const NO_HORIZONTAL_SCROLL = "NoHorizontalScroll" => 1 << 12;
        const ALWAYS_OVERWRITE = "AlwaysOverwrite" => 1 << 13;
        const READ_ONLY = "ReadOnly" => 1 << 14;
        const PASSWORD = "Password" => 1 << 15;
        const NO_UNDO_REDO = "NoUndoRedo" => 1 << 16;
        const CHARS_SCIENTIFIC = "CharsScientific" => 1 << 17;
        const ESCAPE_CLEARS_ALL = "EscapeClearsAll" => 1 << 20;
    }
}

script_flags! {
    pub struct TreeNodeFlags("TreeNodeFlags") {
        const NONE = "None" => 0;
        const SELECTED = "Selected" => 1 << 0;
        const FRAMED = "Framed" => 1 << 1;
        const ALLOW_ITEM_OVERLAP = "AllowItemOverlap" => 1 << 2;
        const NO_TREE_PUSH_ON_OPEN = "NoTreePushOnOpen" => 1 << 3;
        const NO_AUTO_OPEN_ON_LOG = "NoAutoOpenOnLog" => 1 << 4;
        const DEFAULT_OPEN = "DefaultOpen" => 1 << 5;
        const OPEN_ON_DOUBLE_CLICK = "OpenOnDoubleClick" => 1 << 6;
        const OPEN_ON_ARROW = "OpenOnArrow" => 1 << 7;
        const LEAF = "Leaf" => 1 << 8;
        const BULLET = "Bullet" => 1 << 9;
        const FRAME_PADDING = "FramePadding" => 1 << 10;
        const SPAN_AVAIL_WIDTH = "SpanAvailWidth" => 1 << 11;
        const SPAN_FULL_WIDTH = "SpanFullWidth" => 1 << 12;
        const NAV_LEFT_JUMPS_BACK_HERE = "NavLeftJumpsBackHere" => 1 << 13;
        const COLLAPSING_HEADER = "CollapsingHeader" => Self::FRAMED.bits()
            | Self::NO_TREE_PUSH_ON_OPEN.bits()
            | Self::NO_AUTO_OPEN_ON_LOG.bits();
    }
}

script_flags! {
    pub struct PopupFlags("PopupFlags") {
        const NONE = "None" => 0;
        const MOUSE_BUTTON_LEFT = "MouseButtonLeft" => 0;
        const MOUSE_BUTTON_RIGHT = "MouseButtonRight" => 1;
        const MOUSE_BUTTON_MIDDLE = "MouseButtonMiddle" => 2;
        const NO_OPEN_OVER_EXISTING_POPUP = "NoOpenOverExistingPopup" => 1 << 5;
        const NO_OPEN_OVER_ITEMS = "NoOpenOverItems" => 1 << 6;
        const ANY_POPUP_ID = "AnyPopupId" => 1 << 7;
        const ANY_POPUP_LEVEL = "AnyPopupLevel" => 1 << 8;
        const ANY_POPUP = "AnyPopup" => Self::ANY_POPUP_ID.bits() | Self::ANY_POPUP_LEVEL.bits();
    }
}

script_flags! {
    pub struct SelectableFlags("SelectableFlags") {
        const NONE = "None" => 0;
        const DONT_CLOSE_POPUPS = "DontClosePopups" => 1 << 0;
        const SPAN_ALL_COLUMNS = "SpanAllColumns" => 1 << 1;
        const ALLOW_DOUBLE_CLICK = "AllowDoubleClick" => 1 << 2;
        const DISABLED = "Disabled" => 1 << 3;
        const ALLOW_ITEM_OVERLAP = "AllowItemOverlap" => 1 << 4;
    }
}

script_flags! {
    pub struct ComboFlags("ComboFlags") {
        const NONE = "None" => 0;
        const POPUP_ALIGN_LEFT = "PopupAlignLeft" => 1 << 0;
        const HEIGHT_SMALL = "HeightSmall" => 1 << 1;
        const HEIGHT_REGULAR = "HeightRegular" => 1 << 2;
        const HEIGHT_LARGE = "HeightLarge" => 1 << 3;
        const HEIGHT_LARGEST = "HeightLargest" => 1 << 4;
        const NO_ARROW_BUTTON = "NoArrowButton" => 1 << 5;
        const NO_PREVIEW = "NoPreview" => 1 << 6;
    }
}

script_flags! {
    pub struct TabBarFlags("TabBarFlags") {
        const NONE = "None" => 0;
        const REORDERABLE = "Reorderable" => 1 << 0;
        const AUTO_SELECT_NEW_TABS = "AutoSelectNewTabs" => 1 << 1;
        const TAB_LIST_POPUP_BUTTON = "TabListPopupButton" => 1 << 2;
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = "NoCloseWithMiddleMouseButton" => 1 << 3;
        const NO_TAB_LIST_SCROLLING_BUTTONS = "NoTabListScrollingButtons" => 1 << 4;
        const NO_TOOLTIP = "NoTooltip" => 1 << 5;
        const FITTING_POLICY_RESIZE_DOWN = "FittingPolicyResizeDown" => 1 << 6;
        const FITTING_POLICY_SCROLL = "FittingPolicyScroll" => 1 << 7;
    }
}

script_flags! {
    pub struct TabItemFlags("TabItemFlags") {
        const NONE = "None" => 0;
        const UNSAVED_DOCUMENT = "UnsavedDocument" => 1 << 0;
        const SET_SELECTED = "SetSelected" => 1 << 1;
        const NO_CLOSE_WITH_MIDDLE_MOUSE_BUTTON = "NoCloseWithMiddleMouseButton" => 1 << 2;
        const NO_PUSH_ID = "NoPushId" => 1 << 3;
        const NO_TOOLTIP = "NoTooltip" => 1 << 4;
        const NO_REORDER = "NoReorder" => 1 << 5;
        const LEADING = "Leading" => 1 << 6;
        const TRAILING = "Trailing" => 1 << 7;
    }
}

script_flags! {
    pub struct FocusedFlags("FocusedFlags") {
        const NONE = "None" => 0;
        const CHILD_WINDOWS = "ChildWindows" => 1 << 0;
        const ROOT_WINDOW = "RootWindow" => 1 << 1;
        const ANY_WINDOW = "AnyWindow" => 1 << 2;
        const NO_POPUP_HIERARCHY = "NoPopupHierarchy" => 1 << 3;
        const ROOT_AND_CHILD_WINDOWS = "RootAndChildWindows" =>
            Self::ROOT_WINDOW.bits() | Self::CHILD_WINDOWS.bits();
    }
}

script_flags! {
    pub struct HoveredFlags("HoveredFlags") {
        const NONE = "None" => 0;
        const CHILD_WINDOWS = "ChildWindows" => 1 << 0;
        const ROOT_WINDOW = "RootWindow" => 1 << 1;
        const ANY_WINDOW = "AnyWindow" => 1 << 2;
        const NO_POPUP_HIERARCHY = "NoPopupHierarchy" => 1 << 3;
        const ALLOW_WHEN_BLOCKED_BY_POPUP = "AllowWhenBlockedByPopup" => 1 << 5;
        const ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM = "AllowWhenBlockedByActiveItem" => 1 << 7;
        const ALLOW_WHEN_OVERLAPPED = "AllowWhenOverlapped" => 1 << 8;
        const ALLOW_WHEN_DISABLED = "AllowWhenDisabled" => 1 << 9;
        const NO_NAV_OVERRIDE = "NoNavOverride" => 1 << 10;
        const RECT_ONLY = "RectOnly" => Self::ALLOW_WHEN_BLOCKED_BY_POPUP.bits()
            | Self::ALLOW_WHEN_BLOCKED_BY_ACTIVE_ITEM.bits()
            | Self::ALLOW_WHEN_OVERLAPPED.bits();
        const ROOT_AND_CHILD_WINDOWS = "RootAndChildWindows" =>
            Self::ROOT_WINDOW.bits() | Self::CHILD_WINDOWS.bits();
    }
}

script_flags! {
    pub struct ColorEditFlags("ColorEditFlags") {
        const NONE = "None" => 0;
        const NO_ALPHA = "NoAlpha" => 1 << 1;
        const NO_PICKER = "NoPicker" => 1 << 2;
        const NO_OPTIONS = "NoOptions" => 1 << 3;
        const NO_SMALL_PREVIEW = "NoSmallPreview" => 1 << 4;
        const NO_INPUTS = "NoInputs" => 1 << 5;
        const NO_TOOLTIP = "NoTooltip" => 1 << 6;
        const NO_LABEL = "NoLabel" => 1 << 7;
        const NO_SIDE_PREVIEW = "NoSidePreview" => 1 << 8;
        const NO_DRAG_DROP = "NoDragDrop" => 1 << 9;
        const NO_BORDER = "NoBorder" => 1 << 10;
        const ALPHA_BAR = "AlphaBar" => 1 << 16;
        const ALPHA_PREVIEW = "AlphaPreview" => 1 << 17;
        const ALPHA_PREVIEW_HALF = "AlphaPreviewHalf" => 1 << 18;
        const HDR = "HDR" => 1 << 19;
        const DISPLAY_RGB = "DisplayRGB" => 1 << 20;
        const DISPLAY_HSV = "DisplayHSV" => 1 << 21;
        const DISPLAY_HEX = "DisplayHex" => 1 << 22;
        const UINT8 = "Uint8" => 1 << 23;
        const FLOAT = "Float" => 1 << 24;
        const PICKER_HUE_BAR = "PickerHueBar" => 1 << 25;
        const PICKER_HUE_WHEEL = "PickerHueWheel" => 1 << 26;
        const INPUT_RGB = "InputRGB" => 1 << 27;
        const INPUT_HSV = "InputHSV" => 1 << 28;
    }
}

script_flags! {
    pub struct SliderFlags("SliderFlags") {
        const NONE = "None" => 0;
        const ALWAYS_CLAMP = "AlwaysClamp" => 1 << 4;
        const LOGARITHMIC = "Logarithmic" => 1 << 5;
        const NO_ROUND_TO_FORMAT = "NoRoundToFormat" => 1 << 6;
        const NO_INPUT = "NoInput" => 1 << 7;
    }
}

script_flags! {
    pub struct DrawFlags("DrawFlags") {
        const NONE = "None" => 0;
        const CLOSED = "Closed" => 1 << 0;
        const ROUND_CORNERS_TOP_LEFT = "RoundCornersTopLeft" => 1 << 4;
        const ROUND_CORNERS_TOP_RIGHT = "RoundCornersTopRight" => 1 << 5;
        const ROUND_CORNERS_BOTTOM_LEFT = "RoundCornersBottomLeft" => 1 << 6;
        const ROUND_CORNERS_BOTTOM_RIGHT = "RoundCornersBottomRight" => 1 << 7;
        const ROUND_CORNERS_NONE = "RoundCornersNone" => 1 << 8;
        const ROUND_CORNERS_TOP = "RoundCornersTop" =>
            Self::ROUND_CORNERS_TOP_LEFT.bits() | Self::ROUND_CORNERS_TOP_RIGHT.bits();
        const ROUND_CORNERS_BOTTOM = "RoundCornersBottom" =>
            Self::ROUND_CORNERS_BOTTOM_LEFT.bits() | Self::ROUND_CORNERS_BOTTOM_RIGHT.bits();
        const ROUND_CORNERS_LEFT = "RoundCornersLeft" =>
            Self::ROUND_CORNERS_TOP_LEFT.bits() | Self::ROUND_CORNERS_BOTTOM_LEFT.bits();
        const ROUND_CORNERS_RIGHT = "RoundCornersRight" =>
            Self::ROUND_CORNERS_TOP_RIGHT.bits() | Self::ROUND_CORNERS_BOTTOM_RIGHT.bits();
        const ROUND_CORNERS_ALL = "RoundCornersAll" => Self::ROUND_CORNERS_TOP_LEFT.bits()
            | Self::ROUND_CORNERS_TOP_RIGHT.bits()
            | Self::ROUND_CORNERS_BOTTOM_LEFT.bits()
            | Self::ROUND_CORNERS_BOTTOM_RIGHT.bits();
    }
}
