//! Native function storage and the call context handed to it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::convert::IntoDynamic;
use crate::dynamic::Dynamic;
use crate::error::NativeError;
use crate::handles::HandleTable;

/// Type-erased native function.
///
/// Wraps any callable implementing [`NativeCallable`] so functions of
/// different signatures can be stored uniformly. Cloning shares the
/// underlying callable.
#[derive(Clone)]
pub struct NativeFn {
    inner: Arc<dyn NativeCallable + Send + Sync>,
}

impl NativeFn {
    /// Create a new NativeFn from a callable.
    pub fn new<F>(f: F) -> Self
    where
        F: NativeCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Call this native function with the given context.
    pub fn call(&self, ctx: &mut CallContext) -> Result<(), NativeError> {
        self.inner.call(ctx)
    }

    /// Whether two NativeFns share the same callable.
    pub fn ptr_eq(&self, other: &NativeFn) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn").finish_non_exhaustive()
    }
}

/// Trait for callable native functions.
pub trait NativeCallable {
    fn call(&self, ctx: &mut CallContext) -> Result<(), NativeError>;
}

impl<F> NativeCallable for F
where
    F: Fn(&mut CallContext) -> Result<(), NativeError>,
{
    fn call(&self, ctx: &mut CallContext) -> Result<(), NativeError> {
        (self)(ctx)
    }
}

/// Context for one native call.
///
/// Bridges the engine's slots and the native side: argument slots (slot 0
/// is `this` for methods), the return slot, the handle table and the GUI
/// backend passed as `host`.
pub struct CallContext<'a> {
    /// Qualified name of the function being called, for error messages
    function: &'a str,
    /// Argument slots
    slots: &'a mut [Dynamic],
    /// Index of first argument (0 for functions, 1 for methods where 0 is `this`)
    arg_offset: usize,
    /// Return value slot
    return_slot: &'a mut Dynamic,
    /// Handle aliases valid in the current scope
    handles: &'a mut HandleTable,
    /// The native backend
    host: &'a mut dyn Any,
}

impl<'a> CallContext<'a> {
    /// Create a new call context.
    ///
    /// # Arguments
    ///
    /// * `function` - Qualified name used in error messages
    /// * `slots` - The argument slots (for methods, slot 0 is `this`)
    /// * `arg_offset` - Offset to first argument (0 for functions, 1 for methods)
    /// * `return_slot` - Where to store the return value
    /// * `handles` - Handle table of the current scope
    /// * `host` - The native backend
    pub fn new(
        function: &'a str,
        slots: &'a mut [Dynamic],
        arg_offset: usize,
        return_slot: &'a mut Dynamic,
        handles: &'a mut HandleTable,
        host: &'a mut dyn Any,
    ) -> Self {
        Self {
            function,
            slots,
            arg_offset,
            return_slot,
            handles,
            host,
        }
    }

    pub fn function(&self) -> &str {
        self.function
    }

    /// Get the number of arguments (excluding `this` for methods).
    pub fn arg_count(&self) -> usize {
        self.slots.len().saturating_sub(self.arg_offset)
    }

    /// Whether slot 0 is `this`.
    pub fn has_this(&self) -> bool {
        self.arg_offset > 0
    }

    /// Get a raw reference to an argument slot.
    pub fn arg_slot(&self, index: usize) -> Result<&Dynamic, NativeError> {
        self.slots
            .get(self.arg_offset + index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds {
                index,
                count: self.arg_count(),
            })
    }

    /// Get a mutable reference to an argument slot.
    pub fn arg_slot_mut(&mut self, index: usize) -> Result<&mut Dynamic, NativeError> {
        let count = self.arg_count();
        self.slots
            .get_mut(self.arg_offset + index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds { index, count })
    }

    /// The `this` slot of a method call.
    pub fn this_slot(&self) -> Result<&Dynamic, NativeError> {
        if !self.has_this() {
            return Err(NativeError::invalid_this("not a method call"));
        }
        self.slots
            .first()
            .ok_or_else(|| NativeError::invalid_this("no slots available"))
    }

    /// Set the return value from a raw slot.
    pub fn set_return_slot(&mut self, slot: Dynamic) {
        *self.return_slot = slot;
    }

    /// Set a typed return value.
    pub fn set_return<T: IntoDynamic>(&mut self, value: T) {
        *self.return_slot = value.into_dynamic();
    }

    pub fn handles(&self) -> &HandleTable {
        self.handles
    }

    pub fn handles_mut(&mut self) -> &mut HandleTable {
        self.handles
    }

    /// Downcast the host to the backend type.
    pub fn host_mut<H: Any>(&mut self) -> Result<&mut H, NativeError> {
        self.host
            .downcast_mut::<H>()
            .ok_or(NativeError::HostMismatch {
                expected: std::any::type_name::<H>(),
            })
    }

    /// Borrow the host and the handle table at the same time.
    pub fn host_and_handles<H: Any>(
        &mut self,
    ) -> Result<(&mut H, &mut HandleTable), NativeError> {
        let host = self
            .host
            .downcast_mut::<H>()
            .ok_or(NativeError::HostMismatch {
                expected: std::any::type_name::<H>(),
            })?;
        Ok((host, &mut *self.handles))
    }
}

impl fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("function", &self.function)
            .field("arg_count", &self.arg_count())
            .field("arg_offset", &self.arg_offset)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(f: &NativeFn, slots: &mut [Dynamic], host: &mut dyn Any) -> Result<Dynamic, NativeError> {
        let mut ret = Dynamic::Void;
        let mut handles = HandleTable::new();
        let mut ctx = CallContext::new("test", slots, 0, &mut ret, &mut handles, host);
        f.call(&mut ctx)?;
        Ok(ret)
    }

    #[test]
    fn closure_as_native_fn() {
        let add = NativeFn::new(|ctx: &mut CallContext| {
            let a = ctx.arg_slot(0)?.as_int().unwrap_or(0);
            let b = ctx.arg_slot(1)?.as_int().unwrap_or(0);
            ctx.set_return(a + b);
            Ok(())
        });
        let mut slots = [Dynamic::Int(2), Dynamic::Int(3)];
        assert_eq!(call(&add, &mut slots, &mut ()), Ok(Dynamic::Int(5)));
    }

    #[test]
    fn out_of_bounds_argument() {
        let f = NativeFn::new(|ctx: &mut CallContext| ctx.arg_slot(4).map(|_| ()));
        assert_eq!(
            call(&f, &mut [], &mut ()),
            Err(NativeError::ArgumentIndexOutOfBounds { index: 4, count: 0 })
        );
    }

    #[test]
    fn host_downcast() {
        let f = NativeFn::new(|ctx: &mut CallContext| {
            *ctx.host_mut::<u32>()? += 1;
            Ok(())
        });
        let mut counter = 0u32;
        call(&f, &mut [], &mut counter).unwrap();
        assert_eq!(counter, 1);
        assert!(matches!(
            call(&f, &mut [], &mut "wrong host"),
            Err(NativeError::HostMismatch { .. })
        ));
    }

    #[test]
    fn this_slot_requires_method() {
        let mut slots = [Dynamic::Int(1)];
        let mut ret = Dynamic::Void;
        let mut handles = HandleTable::new();
        let mut host = ();
        let ctx = CallContext::new("f", &mut slots, 0, &mut ret, &mut handles, &mut host);
        assert!(ctx.this_slot().is_err());
    }

    #[test]
    fn clones_share_callable() {
        let f = NativeFn::new(|_: &mut CallContext| Ok(()));
        let g = f.clone();
        assert!(f.ptr_eq(&g));
    }
}
