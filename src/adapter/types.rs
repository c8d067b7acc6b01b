//! Type Adapter: how native value types, enums, flag sets and reference
//! types are described to the engine and converted slot by slot.
//!
//! Each shape has a declaration macro that generates the native type and
//! every trait the registrar and the thunks need:
//!
//! | Macro            | Native shape           | Script side                      |
//! |------------------|------------------------|----------------------------------|
//! | [`value_type!`]  | `#[repr(C)]` POD struct | copyable value type with fields |
//! | [`handle_type!`] | opaque backend token   | non-owning `T@` handle           |
//! | `script_enum!`   | `num_enum` enum        | enum, closed set of values       |
//! | `script_flags!`  | `bitflags` set         | enum, any combination of bits    |
//!
//! [`value_type!`]: crate::value_type
//! [`handle_type!`]: crate::handle_type

use imgui_script_core::{EnumDescriptor, NativeTypeDescriptor, ScriptType};

/// A value or reference type that can be registered.
pub trait NativeType: ScriptType {
    /// Script-visible type name.
    const NAME: &'static str;

    /// Descriptor for the registrar (namespace left empty).
    fn descriptor() -> NativeTypeDescriptor;
}

/// An enum or flag set that can be registered.
pub trait ScriptEnum: ScriptType + Copy {
    /// Script-visible enum name.
    const NAME: &'static str;

    /// `(name, value)` pairs in declaration order.
    fn entries() -> Vec<(&'static str, i64)>;

    /// Descriptor for the registrar (namespace left empty).
    fn descriptor() -> EnumDescriptor {
        EnumDescriptor::new(Self::NAME).with_values(Self::entries())
    }
}

/// Declare a copyable value type.
///
/// Generates a `#[repr(C)]` struct plus its [`NativeType`], `ScriptType`,
/// `FromDynamic` and `IntoDynamic` impls. Fields must themselves be
/// primitives, enums or other value types.
///
/// ```
/// imgui_script::value_type! {
///     /// A 2D integer point.
///     pub struct Point("Point") {
///         pub x: i32,
///         pub y: i32,
///     }
/// }
///
/// use imgui_script::adapter::NativeType;
/// let desc = Point::descriptor();
/// assert_eq!(desc.fields.len(), 2);
/// assert_eq!(desc.size, 8);
/// ```
#[macro_export]
macro_rules! value_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($script:literal) {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[repr(C)]
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty ),*
        }

        impl $crate::__private::ScriptType for $name {
            fn data_type() -> $crate::__private::DataType {
                $crate::__private::DataType::value($script)
            }
        }

        impl $crate::adapter::NativeType for $name {
            const NAME: &'static str = $script;

            fn descriptor() -> $crate::__private::NativeTypeDescriptor {
                $crate::__private::NativeTypeDescriptor::value(
                    $script,
                    ::core::mem::size_of::<$name>(),
                    ::core::mem::align_of::<$name>(),
                )
                $(
                    .with_field(
                        stringify!($field),
                        <$fty as $crate::__private::ScriptType>::data_type(),
                        ::core::mem::offset_of!($name, $field),
                    )
                )*
            }
        }

        impl $crate::__private::IntoDynamic for $name {
            fn into_dynamic(self) -> $crate::__private::Dynamic {
                $crate::__private::Dynamic::value(
                    $crate::__private::TypeHash::from_name($script),
                    vec![$( $crate::__private::IntoDynamic::into_dynamic(self.$field) ),*],
                )
            }
        }

        impl $crate::__private::FromDynamic for $name {
            fn from_dynamic(
                slot: &$crate::__private::Dynamic,
            ) -> Result<Self, $crate::__private::ConversionError> {
                use $crate::__private::{ConversionError, Dynamic, FromDynamic, TypeHash};

                const FIELDS: &[&str] = &[$( stringify!($field) ),*];
                match slot {
                    Dynamic::Value(obj) if obj.type_hash == TypeHash::from_name($script) => {
                        let count_error = ConversionError::FieldCount {
                            type_name: $script,
                            expected: FIELDS.len(),
                            actual: obj.fields.len(),
                        };
                        if obj.fields.len() != FIELDS.len() {
                            return Err(count_error);
                        }
                        let mut fields = obj.fields.iter();
                        Ok(Self {
                            $(
                                $field: {
                                    let field_slot = fields.next().ok_or(count_error.clone())?;
                                    <$fty as FromDynamic>::from_dynamic(field_slot).map_err(|e| {
                                        ConversionError::Field {
                                            type_name: $script,
                                            field: stringify!($field),
                                            source: Box::new(e),
                                        }
                                    })?
                                },
                            )*
                        })
                    }
                    other => Err(ConversionError::TypeMismatch {
                        expected: $script,
                        actual: other.type_name(),
                    }),
                }
            }
        }
    };
}

/// Declare a non-owning reference type.
///
/// The struct wraps the backend's opaque 64-bit token for the object. The
/// handle table stores that token; scripts never see it.
#[macro_export]
macro_rules! handle_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($script:literal);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name(pub u64);

        impl $crate::__private::NativeHandle for $name {
            const NAME: &'static str = $script;

            fn into_raw(self) -> u64 {
                self.0
            }

            fn from_raw(raw: u64) -> Self {
                $name(raw)
            }
        }

        impl $crate::__private::ScriptType for $name {
            fn data_type() -> $crate::__private::DataType {
                $crate::__private::DataType::handle($script)
            }
        }

        impl $crate::adapter::NativeType for $name {
            const NAME: &'static str = $script;

            fn descriptor() -> $crate::__private::NativeTypeDescriptor {
                $crate::__private::NativeTypeDescriptor::handle($script)
            }
        }
    };
}

/// Declare a closed enum backed by `num_enum`.
///
/// Script values are plain integers equal to the native discriminant. An
/// integer outside the declared set is a conversion error.
macro_rules! script_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($script:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::num_enum::IntoPrimitive,
            ::num_enum::TryFromPrimitive,
        )]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value ),*
        }

        impl $crate::adapter::ScriptEnum for $name {
            const NAME: &'static str = $script;

            fn entries() -> Vec<(&'static str, i64)> {
                vec![$( (stringify!($variant), i32::from($name::$variant) as i64) ),*]
            }
        }

        impl imgui_script_core::ScriptType for $name {
            fn data_type() -> imgui_script_core::DataType {
                imgui_script_core::DataType::enumeration($script)
            }
        }

        impl imgui_script_core::IntoDynamic for $name {
            fn into_dynamic(self) -> imgui_script_core::Dynamic {
                imgui_script_core::Dynamic::Int(i32::from(self) as i64)
            }
        }

        impl imgui_script_core::FromDynamic for $name {
            fn from_dynamic(
                slot: &imgui_script_core::Dynamic,
            ) -> Result<Self, imgui_script_core::ConversionError> {
                use ::num_enum::TryFromPrimitive;
                use imgui_script_core::{ConversionError, Dynamic};

                match slot {
                    Dynamic::Int(v) => i32::try_from(*v)
                        .ok()
                        .and_then(|raw| $name::try_from_primitive(raw).ok())
                        .ok_or(ConversionError::InvalidEnumValue {
                            value: *v,
                            enum_name: $script,
                        }),
                    other => Err(ConversionError::TypeMismatch {
                        expected: $script,
                        actual: other.type_name(),
                    }),
                }
            }
        }
    };
}

/// Declare a flag set backed by `bitflags`.
///
/// Every named constant (including composites and zero) is registered as an
/// enum value. Any integer converts; unknown bits are retained.
macro_rules! script_flags {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($script:literal) {
            $( $(#[$fmeta:meta])* const $flag:ident = $script_flag:literal => $value:expr; )*
        }
    ) => {
        ::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name: i32 {
                $( $(#[$fmeta])* const $flag = $value; )*
            }
        }

        impl $crate::adapter::ScriptEnum for $name {
            const NAME: &'static str = $script;

            fn entries() -> Vec<(&'static str, i64)> {
                vec![$( ($script_flag, $name::$flag.bits() as i64) ),*]
            }
        }

        impl imgui_script_core::ScriptType for $name {
            fn data_type() -> imgui_script_core::DataType {
                imgui_script_core::DataType::enumeration($script)
            }
        }

        impl imgui_script_core::IntoDynamic for $name {
            fn into_dynamic(self) -> imgui_script_core::Dynamic {
                imgui_script_core::Dynamic::Int(self.bits() as i64)
            }
        }

        impl imgui_script_core::FromDynamic for $name {
            fn from_dynamic(
                slot: &imgui_script_core::Dynamic,
            ) -> Result<Self, imgui_script_core::ConversionError> {
                use imgui_script_core::{ConversionError, Dynamic};

                match slot {
                    Dynamic::Int(v) => i32::try_from(*v)
                        .map($name::from_bits_retain)
                        .map_err(|_| ConversionError::IntegerOverflow {
                            value: *v,
                            target_type: $script,
                        }),
                    other => Err(ConversionError::TypeMismatch {
                        expected: $script,
                        actual: other.type_name(),
                    }),
                }
            }
        }
    };
}

pub(crate) use script_enum;
pub(crate) use script_flags;
