//! Generational table of weak aliases to native reference objects.
//!
//! The GUI library owns its draw lists and viewports; scripts only ever see
//! a [`HandleRef`] that points into this table. Every handle is valid only
//! inside the handle scope that produced it: closing the scope bumps the
//! generation of every slot, so a handle kept across frames resolves to
//! [`NativeError::StaleHandle`] instead of a dangling native pointer.

use std::fmt;

use crate::TypeHash;
use crate::error::NativeError;

/// Non-owning reference to a native object.
///
/// Copyable; equality includes the generation, so a handle from a closed
/// scope never equals one from the current scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandleRef {
    /// Index into the handle table
    pub index: u32,
    /// Generation for stale-use detection
    pub generation: u32,
    /// Script type of the referenced object
    pub type_hash: TypeHash,
}

impl HandleRef {
    pub fn new(index: u32, generation: u32, type_hash: TypeHash) -> Self {
        Self {
            index,
            generation,
            type_hash,
        }
    }
}

/// A native reference type that can be aliased by a script handle.
///
/// The native side is represented by an opaque 64-bit token (an id or an
/// address the GUI backend understands). The table never dereferences it.
pub trait NativeHandle: Copy + 'static {
    /// Script-visible type name.
    const NAME: &'static str;

    /// Script type identity.
    const TYPE_HASH: TypeHash = TypeHash::from_name(Self::NAME);

    /// Opaque token for the table.
    fn into_raw(self) -> u64;

    /// Rebuild from a token previously produced by `into_raw`.
    fn from_raw(raw: u64) -> Self;
}

struct HandleSlot {
    generation: u32,
    entry: Option<(TypeHash, u64)>,
}

/// Storage for handle aliases with generational indices.
#[derive(Default)]
pub struct HandleTable {
    slots: Vec<HandleSlot>,
    free_list: Vec<u32>,
}

impl HandleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias a native object and return the script handle.
    pub fn alias(&mut self, type_hash: TypeHash, raw: u64) -> HandleRef {
        if let Some(index) = self.free_list.pop()
            && let Some(slot) = self.slots.get_mut(index as usize)
        {
            slot.entry = Some((type_hash, raw));
            return HandleRef::new(index, slot.generation, type_hash);
        }
        let index = self.slots.len() as u32;
        self.slots.push(HandleSlot {
            generation: 0,
            entry: Some((type_hash, raw)),
        });
        HandleRef::new(index, 0, type_hash)
    }

    /// Look up the native token behind a handle.
    ///
    /// Fails with `StaleHandle` when the handle's scope has closed and with
    /// `HandleTypeMismatch` when it aliases another type.
    pub fn resolve(
        &self,
        handle: HandleRef,
        expected: TypeHash,
        expected_name: &'static str,
    ) -> Result<u64, NativeError> {
        let stale = NativeError::StaleHandle {
            index: handle.index,
        };
        let slot = self.slots.get(handle.index as usize).ok_or(stale.clone())?;
        if slot.generation != handle.generation {
            return Err(stale);
        }
        let (type_hash, raw) = slot.entry.ok_or(stale)?;
        if type_hash != expected || handle.type_hash != expected {
            return Err(NativeError::HandleTypeMismatch {
                expected: expected_name,
            });
        }
        Ok(raw)
    }

    /// Resolve a typed handle.
    pub fn get<T: NativeHandle>(&self, handle: HandleRef) -> Result<T, NativeError> {
        self.resolve(handle, T::TYPE_HASH, T::NAME).map(T::from_raw)
    }

    /// Check whether a handle would still resolve.
    pub fn is_live(&self, handle: HandleRef) -> bool {
        self.slots
            .get(handle.index as usize)
            .is_some_and(|slot| slot.generation == handle.generation && slot.entry.is_some())
    }

    /// Invalidate every outstanding handle.
    pub fn invalidate_all(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(index as u32);
            }
        }
    }

    /// Number of handles that currently resolve.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.entry.is_some()).count()
    }
}

impl fmt::Debug for HandleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleTable")
            .field("slot_count", &self.slots.len())
            .field("live", &self.live_count())
            .finish()
    }
}
