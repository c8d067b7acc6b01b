//! Value and reference types of the GUI surface.

use crate::{handle_type, value_type};

value_type! {
    /// 2D vector, positions and sizes in pixels.
    pub struct Vec2("Vec2") {
        pub x: f32,
        pub y: f32,
    }
}

value_type! {
    /// 4D vector, usually an RGBA color with components in `0.0..=1.0`.
    pub struct Vec4("Vec4") {
        pub x: f32,
        pub y: f32,
        pub z: f32,
        pub w: f32,
    }
}

value_type! {
    /// An RGBA color.
    pub struct Color("Color") {
        pub value: Vec4,
    }
}

handle_type! {
    /// A window's draw command list. Valid for the current frame only.
    pub struct DrawList("DrawList");
}

handle_type! {
    /// A platform viewport (the main window on single-viewport backends).
    pub struct Viewport("Viewport");
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            value: Vec4::new(r, g, b, a),
        }
    }

    /// Unpack a packed `0xAABBGGRR` color.
    pub fn from_u32(rgba: u32) -> Self {
        let channel = |shift: u32| ((rgba >> shift) & 0xFF) as f32 / 255.0;
        Self::rgba(channel(0), channel(8), channel(16), channel(24))
    }

    /// Pack into `0xAABBGGRR`, saturating each channel.
    pub fn to_u32(self) -> u32 {
        let channel = |v: f32, shift: u32| ((v.clamp(0.0, 1.0) * 255.0 + 0.5) as u32) << shift;
        channel(self.value.x, 0)
            | channel(self.value.y, 8)
            | channel(self.value.z, 16)
            | channel(self.value.w, 24)
    }
}
