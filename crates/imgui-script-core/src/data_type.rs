//! DataType - a parameter, return or field type with its passing mode.
//!
//! A [`DataType`] pairs the identity of a type ([`TypeHash`] plus its
//! script-visible name) with the way values of that type cross the boundary:
//! the [`ValueClass`] decides which slot kinds are legal, the [`RefModifier`]
//! decides whether the slot is read, written back, or both.
//!
//! # Example
//!
//! ```
//! use imgui_script_core::{DataType, Dynamic, RefModifier};
//!
//! let v = DataType::FLOAT.with_ref(RefModifier::InOut);
//! assert!(v.is_output());
//! assert!(v.accepts(&Dynamic::Int(3)));
//! assert_eq!(v.declaration(), "float &inout");
//!
//! assert_eq!(DataType::STRING.declaration(), "const string &in");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::dynamic::Dynamic;
use crate::type_hash::{TypeHash, primitives};

/// Reference modifier for parameters.
///
/// - `&in`: read-only reference, the native side only reads the slot
/// - `&out`: the slot's incoming value is ignored and overwritten after the call
/// - `&inout`: the slot is read, and written back after the call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefModifier {
    /// No reference modifier
    #[default]
    None,
    /// &in
    In,
    /// &out
    Out,
    /// &inout
    InOut,
}

impl Display for RefModifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RefModifier::None => Ok(()),
            RefModifier::In => write!(f, "&in"),
            RefModifier::Out => write!(f, "&out"),
            RefModifier::InOut => write!(f, "&inout"),
        }
    }
}

/// How values of a type are carried in a [`Dynamic`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Void,
    Bool,
    Int,
    Float,
    String,
    /// Registered enum; carried as an integer
    Enum,
    /// Registered value type; carried as a `ValueObject`
    Value,
    /// Registered reference type; carried as a `HandleRef`
    Handle,
}

impl ValueClass {
    /// Whether a registered descriptor must exist for this class.
    pub fn is_registered(self) -> bool {
        matches!(self, ValueClass::Enum | ValueClass::Value | ValueClass::Handle)
    }
}

// Slot kind bits used for overlap analysis.
const K_VOID: u8 = 1 << 0;
const K_BOOL: u8 = 1 << 1;
const K_INT: u8 = 1 << 2;
const K_FLOAT: u8 = 1 << 3;
const K_STRING: u8 = 1 << 4;
const K_VALUE: u8 = 1 << 5;
const K_HANDLE: u8 = 1 << 6;
const K_NULL: u8 = 1 << 7;
const K_ALL: u8 = u8::MAX;

/// A complete type including its passing mode.
///
/// This struct is `Copy`; descriptors hold it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The base type hash
    pub type_hash: TypeHash,
    /// Script-visible base type name
    pub name: &'static str,
    /// Slot representation
    pub class: ValueClass,
    /// Reference modifier for parameters
    pub ref_modifier: RefModifier,
    /// Whether the value is const
    pub is_const: bool,
    /// Whether a null handle (or an absent value) is legal
    pub nullable: bool,
}

impl DataType {
    /// `void`
    pub const VOID: DataType = DataType::simple(primitives::VOID, "void", ValueClass::Void);
    /// `bool`
    pub const BOOL: DataType = DataType::simple(primitives::BOOL, "bool", ValueClass::Bool);
    /// `int`
    pub const INT: DataType = DataType::simple(primitives::INT32, "int", ValueClass::Int);
    /// `uint`
    pub const UINT: DataType = DataType::simple(primitives::UINT32, "uint", ValueClass::Int);
    /// `int64`
    pub const INT64: DataType = DataType::simple(primitives::INT64, "int64", ValueClass::Int);
    /// `uint64`
    pub const UINT64: DataType = DataType::simple(primitives::UINT64, "uint64", ValueClass::Int);
    /// `int8`
    pub const INT8: DataType = DataType::simple(primitives::INT8, "int8", ValueClass::Int);
    /// `int16`
    pub const INT16: DataType = DataType::simple(primitives::INT16, "int16", ValueClass::Int);
    /// `uint8`
    pub const UINT8: DataType = DataType::simple(primitives::UINT8, "uint8", ValueClass::Int);
    /// `uint16`
    pub const UINT16: DataType = DataType::simple(primitives::UINT16, "uint16", ValueClass::Int);
    /// `float`
    pub const FLOAT: DataType = DataType::simple(primitives::FLOAT, "float", ValueClass::Float);
    /// `double`
    pub const DOUBLE: DataType = DataType::simple(primitives::DOUBLE, "double", ValueClass::Float);
    /// `const string &in`
    pub const STRING: DataType = DataType {
        type_hash: primitives::STRING,
        name: "string",
        class: ValueClass::String,
        ref_modifier: RefModifier::In,
        is_const: true,
        nullable: false,
    };

    /// Create a type with no modifiers.
    #[inline]
    pub const fn simple(type_hash: TypeHash, name: &'static str, class: ValueClass) -> Self {
        Self {
            type_hash,
            name,
            class,
            ref_modifier: RefModifier::None,
            is_const: false,
            nullable: false,
        }
    }

    /// A registered enum type.
    #[inline]
    pub const fn enumeration(name: &'static str) -> Self {
        Self::simple(TypeHash::from_name(name), name, ValueClass::Enum)
    }

    /// A registered value type, passed as `const T &in`.
    #[inline]
    pub const fn value(name: &'static str) -> Self {
        Self {
            type_hash: TypeHash::from_name(name),
            name,
            class: ValueClass::Value,
            ref_modifier: RefModifier::In,
            is_const: true,
            nullable: false,
        }
    }

    /// A registered reference type, passed as `T@`.
    #[inline]
    pub const fn handle(name: &'static str) -> Self {
        Self::simple(TypeHash::from_name(name), name, ValueClass::Handle)
    }

    /// Same type with a different reference modifier.
    ///
    /// Output modifiers drop `const`.
    #[inline]
    pub const fn with_ref(mut self, ref_modifier: RefModifier) -> Self {
        self.ref_modifier = ref_modifier;
        if matches!(ref_modifier, RefModifier::Out | RefModifier::InOut) {
            self.is_const = false;
        }
        self
    }

    /// Same type passed by plain value (no reference, no const).
    #[inline]
    pub const fn by_value(mut self) -> Self {
        self.ref_modifier = RefModifier::None;
        self.is_const = false;
        self
    }

    /// Same type, with null (or absent) accepted.
    #[inline]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Whether the slot is written back after the call.
    #[inline]
    pub fn is_output(&self) -> bool {
        matches!(self.ref_modifier, RefModifier::Out | RefModifier::InOut)
    }

    /// Whether this is `void`.
    #[inline]
    pub fn is_void(&self) -> bool {
        self.class == ValueClass::Void
    }

    /// Check whether a slot value is legal for this type.
    ///
    /// Only the slot kind is checked here. Range checks (an `int` that
    /// does not fit an `int8`, a closed enum with an unknown value) happen
    /// when the slot is converted to the native type.
    ///
    /// `&out` slots accept anything since their value is never read.
    pub fn accepts(&self, value: &Dynamic) -> bool {
        if self.ref_modifier == RefModifier::Out {
            return true;
        }
        if self.nullable && matches!(value, Dynamic::NullHandle | Dynamic::Void) {
            return true;
        }
        match (self.class, value) {
            (ValueClass::Void, Dynamic::Void) => true,
            (ValueClass::Bool, Dynamic::Bool(_)) => true,
            (ValueClass::Int | ValueClass::Enum, Dynamic::Int(_)) => true,
            (ValueClass::Float, Dynamic::Float(_) | Dynamic::Int(_)) => true,
            (ValueClass::String, Dynamic::String(_)) => true,
            (ValueClass::Value, Dynamic::Value(v)) => v.type_hash == self.type_hash,
            (ValueClass::Handle, Dynamic::Handle(h)) => h.type_hash == self.type_hash,
            _ => false,
        }
    }

    fn slot_kinds(&self) -> u8 {
        if self.ref_modifier == RefModifier::Out {
            return K_ALL;
        }
        let base = match self.class {
            ValueClass::Void => K_VOID,
            ValueClass::Bool => K_BOOL,
            ValueClass::Int | ValueClass::Enum => K_INT,
            ValueClass::Float => K_FLOAT | K_INT,
            ValueClass::String => K_STRING,
            ValueClass::Value => K_VALUE,
            ValueClass::Handle => K_HANDLE,
        };
        if self.nullable {
            base | K_NULL | K_VOID
        } else {
            base
        }
    }

    /// Check whether some slot value is accepted by both types.
    ///
    /// Used to detect ambiguous overloads at registration.
    pub fn overlaps(&self, other: &DataType) -> bool {
        let mut common = self.slot_kinds() & other.slot_kinds();
        let both_out =
            self.ref_modifier == RefModifier::Out || other.ref_modifier == RefModifier::Out;
        if !both_out && self.type_hash != other.type_hash {
            common &= !(K_VALUE | K_HANDLE);
        }
        common != 0
    }

    /// Render as it appears in an engine declaration.
    pub fn declaration(&self) -> String {
        let mut out = String::new();
        if self.is_const {
            out.push_str("const ");
        }
        out.push_str(self.name);
        if self.class == ValueClass::Handle {
            out.push('@');
        }
        if self.ref_modifier != RefModifier::None {
            out.push(' ');
            out.push_str(&self.ref_modifier.to_string());
        }
        out
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declaration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::ValueObject;
    use crate::handles::HandleRef;

    #[test]
    fn float_accepts_int_but_int_rejects_float() {
        assert!(DataType::FLOAT.accepts(&Dynamic::Int(1)));
        assert!(DataType::FLOAT.accepts(&Dynamic::Float(1.5)));
        assert!(!DataType::INT.accepts(&Dynamic::Float(1.5)));
    }

    #[test]
    fn bool_is_not_numeric() {
        assert!(!DataType::BOOL.accepts(&Dynamic::Int(1)));
        assert!(!DataType::INT.accepts(&Dynamic::Bool(true)));
    }

    #[test]
    fn enum_accepts_int() {
        let cond = DataType::enumeration("Cond");
        assert!(cond.accepts(&Dynamic::Int(2)));
        assert!(!cond.accepts(&Dynamic::from("Always")));
    }

    #[test]
    fn value_requires_matching_type() {
        let vec2 = DataType::value("Vec2");
        let ok = Dynamic::Value(ValueObject::new(TypeHash::from_name("Vec2"), vec![]));
        let bad = Dynamic::Value(ValueObject::new(TypeHash::from_name("Vec4"), vec![]));
        assert!(vec2.accepts(&ok));
        assert!(!vec2.accepts(&bad));
    }

    #[test]
    fn handle_requires_matching_type() {
        let draw_list = DataType::handle("DrawList");
        let h = HandleRef::new(0, 0, TypeHash::from_name("DrawList"));
        assert!(draw_list.accepts(&Dynamic::Handle(h)));
        assert!(!draw_list.accepts(&Dynamic::NullHandle));
        assert!(draw_list.nullable().accepts(&Dynamic::NullHandle));
    }

    #[test]
    fn out_accepts_anything() {
        let out = DataType::BOOL.with_ref(RefModifier::Out);
        assert!(out.accepts(&Dynamic::Void));
        assert!(out.accepts(&Dynamic::from("x")));
    }

    #[test]
    fn overlap_analysis() {
        assert!(DataType::FLOAT.overlaps(&DataType::INT));
        assert!(!DataType::STRING.overlaps(&DataType::INT));
        assert!(!DataType::value("Vec2").overlaps(&DataType::value("Vec4")));
        assert!(DataType::value("Vec2").overlaps(&DataType::value("Vec2")));
        assert!(DataType::INT.overlaps(&DataType::enumeration("Col")));
        assert!(
            DataType::handle("DrawList")
                .nullable()
                .overlaps(&DataType::handle("Viewport").nullable())
        );
    }

    #[test]
    fn declarations() {
        assert_eq!(DataType::INT.declaration(), "int");
        assert_eq!(DataType::STRING.declaration(), "const string &in");
        assert_eq!(DataType::value("Vec2").declaration(), "const Vec2 &in");
        assert_eq!(
            DataType::BOOL.with_ref(RefModifier::InOut).declaration(),
            "bool &inout"
        );
        assert_eq!(DataType::handle("DrawList").declaration(), "DrawList@");
        assert_eq!(DataType::value("Vec2").by_value().to_string(), "Vec2");
    }
}
