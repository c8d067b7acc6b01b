//! Deterministic hash-based identity for bound types and functions.
//!
//! [`TypeHash`] is a 64-bit hash computed from names and signatures. Because
//! it is derived rather than allocated, a function descriptor can reference a
//! type before that type is installed, and the same native type always maps
//! to the same script-side identity no matter which engine it is bound into.
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that a type, a
//! global function, a method and a constructor sharing a name never collide.
//!
//! # Examples
//!
//! ```
//! use imgui_script_core::TypeHash;
//!
//! let vec2 = TypeHash::from_name("Vec2");
//! assert_eq!(vec2, TypeHash::from_name("Vec2"));
//!
//! let a = TypeHash::from_function("PushID", &[TypeHash::from_name("string")]);
//! let b = TypeHash::from_function("PushID", &[TypeHash::from_name("int")]);
//! assert_ne!(a, b);
//! ```

use std::fmt;

use xxhash_rust::const_xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant for chaining parameter hashes.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for global function hashes.
    pub const FUNCTION: u64 = 0x5ea77ffbcdf5f302;

    /// Domain marker for method hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Parameter position mixing constants.
    pub const PARAM_MARKERS: [u64; 16] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
        0x7c3e9f2a5b8d1403,
        0x5d8c7b4a3e9f2106,
        0x3f1e9d8c7b5a4203,
        0x1a2b3c4d5e6f7089,
        0x9f8e7d6c5b4a3210,
        0x2468ace013579bdf,
        0xfdb97531eca86420,
        0x123456789abcdef0,
    ];
}

/// A deterministic 64-bit hash identifying a type, function, method or constructor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a type name.
    ///
    /// This is a `const fn` so that primitive and GUI type hashes can be
    /// spelled as constants.
    #[inline]
    pub const fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a global function hash from its qualified name and parameter type hashes.
    ///
    /// Parameter order matters: `(int, float)` and `(float, int)` differ.
    #[inline]
    pub fn from_function(name: &str, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::FUNCTION ^ xxh64(name.as_bytes(), 0);
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Create a method hash from the owner type, method name and parameter type hashes.
    #[inline]
    pub fn from_method(owner: TypeHash, name: &str, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0);
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Create a constructor hash from the owner type and parameter type hashes.
    #[inline]
    pub fn from_constructor(owner: TypeHash, param_hashes: &[TypeHash]) -> Self {
        TypeHash(mix_params(hash_constants::CONSTRUCTOR ^ owner.0, param_hashes))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

fn mix_params(seed: u64, param_hashes: &[TypeHash]) -> u64 {
    let mut hash = seed;
    for (i, param) in param_hashes.iter().enumerate() {
        let marker = hash_constants::PARAM_MARKERS
            .get(i)
            .copied()
            .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
        // wrapping_mul keeps parameter order significant (XOR alone would commute)
        hash = hash
            .wrapping_mul(hash_constants::SEP)
            .wrapping_add(marker ^ param.0);
    }
    hash
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Hashes of the primitive types every engine knows without registration.
pub mod primitives {
    use super::TypeHash;

    /// `void`
    pub const VOID: TypeHash = TypeHash::from_name("void");
    /// `bool`
    pub const BOOL: TypeHash = TypeHash::from_name("bool");
    /// `int8`
    pub const INT8: TypeHash = TypeHash::from_name("int8");
    /// `int16`
    pub const INT16: TypeHash = TypeHash::from_name("int16");
    /// `int` (32-bit signed)
    pub const INT32: TypeHash = TypeHash::from_name("int");
    /// `int64`
    pub const INT64: TypeHash = TypeHash::from_name("int64");
    /// `uint8`
    pub const UINT8: TypeHash = TypeHash::from_name("uint8");
    /// `uint16`
    pub const UINT16: TypeHash = TypeHash::from_name("uint16");
    /// `uint` (32-bit unsigned)
    pub const UINT32: TypeHash = TypeHash::from_name("uint");
    /// `uint64`
    pub const UINT64: TypeHash = TypeHash::from_name("uint64");
    /// `float`
    pub const FLOAT: TypeHash = TypeHash::from_name("float");
    /// `double`
    pub const DOUBLE: TypeHash = TypeHash::from_name("double");
    /// `string`
    pub const STRING: TypeHash = TypeHash::from_name("string");

    /// Every primitive as `(name, hash)`, in registration order.
    pub const ALL: [(&str, TypeHash); 13] = [
        ("void", VOID),
        ("bool", BOOL),
        ("int8", INT8),
        ("int16", INT16),
        ("int", INT32),
        ("int64", INT64),
        ("uint8", UINT8),
        ("uint16", UINT16),
        ("uint", UINT32),
        ("uint64", UINT64),
        ("float", FLOAT),
        ("double", DOUBLE),
        ("string", STRING),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        assert_eq!(TypeHash::from_name("Vec2"), TypeHash::from_name("Vec2"));
        assert_ne!(TypeHash::from_name("Vec2"), TypeHash::from_name("Vec4"));
    }

    #[test]
    fn function_hash_overload_distinction() {
        let a = TypeHash::from_function("PushID", &[primitives::STRING]);
        let b = TypeHash::from_function("PushID", &[primitives::INT32]);
        assert_ne!(a, b);
    }

    #[test]
    fn function_hash_parameter_order_matters() {
        let a = TypeHash::from_function("f", &[primitives::INT32, primitives::FLOAT]);
        let b = TypeHash::from_function("f", &[primitives::FLOAT, primitives::INT32]);
        assert_ne!(a, b);
    }

    #[test]
    fn method_vs_function_distinction() {
        let owner = TypeHash::from_name("DrawList");
        let method = TypeHash::from_method(owner, "AddLine", &[]);
        let function = TypeHash::from_function("AddLine", &[]);
        let ctor = TypeHash::from_constructor(owner, &[]);
        assert_ne!(method, function);
        assert_ne!(method, ctor);
    }

    #[test]
    fn primitive_constants_match_from_name() {
        for (name, hash) in primitives::ALL {
            assert_eq!(TypeHash::from_name(name), hash, "{name}");
        }
    }

    #[test]
    fn primitive_constants_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (_, hash) in primitives::ALL {
            assert!(seen.insert(hash));
        }
    }

    #[test]
    fn many_parameters_supported() {
        let params: Vec<TypeHash> = (0..40).map(|_| primitives::FLOAT).collect();
        let a = TypeHash::from_function("wide", &params);
        let b = TypeHash::from_function("wide", &params[..39]);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_display() {
        assert_eq!(format!("{}", TypeHash(0x1234)), "0x0000000000001234");
        assert!(TypeHash::EMPTY.is_empty());
    }
}
