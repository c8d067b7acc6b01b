//! Calling thunks: the bridge from a slot-based call to a typed native call.
//!
//! A thunk is built from the parameter list of a [`FunctionDescriptor`] and
//! a typed closure. On every call it
//!
//! 1. checks the supplied count against `[min_arity, max_arity]`,
//! 2. checks every supplied slot against its parameter type,
//! 3. fills omitted trailing arguments from their defaults,
//! 4. hands the assembled [`Args`] and the backend to the closure,
//! 5. writes `&out`/`&inout` values back into the caller's slots,
//! 6. stores the return value.
//!
//! Steps 1 and 2 fail before the closure runs, so a bad call never reaches
//! the GUI backend.
//!
//! [`FunctionDescriptor`]: crate::FunctionDescriptor

use std::any::Any;

use crate::convert::{FromDynamic, IntoDynamic};
use crate::descriptors::ParamDescriptor;
use crate::dynamic::Dynamic;
use crate::error::{ConversionError, NativeError};
use crate::handles::{HandleTable, NativeHandle};
use crate::native_fn::{CallContext, NativeFn};

/// Fully assembled arguments of one native call.
///
/// Indices are parameter positions; omitted arguments already hold their
/// default. Conversion failures carry the parameter index.
pub struct Args<'a> {
    function: &'a str,
    values: Vec<Dynamic>,
    this: Option<Dynamic>,
    handles: &'a mut HandleTable,
}

impl<'a> Args<'a> {
    pub fn new(
        function: &'a str,
        values: Vec<Dynamic>,
        this: Option<Dynamic>,
        handles: &'a mut HandleTable,
    ) -> Self {
        Self {
            function,
            values,
            this,
            handles,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn argument_error(&self, index: usize, source: ConversionError) -> NativeError {
        NativeError::Argument {
            function: self.function.to_string(),
            index,
            source,
        }
    }

    /// Raw slot of a parameter.
    pub fn slot(&self, index: usize) -> Result<&Dynamic, NativeError> {
        self.values
            .get(index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds {
                index,
                count: self.values.len(),
            })
    }

    /// Typed parameter value.
    pub fn get<T: FromDynamic>(&self, index: usize) -> Result<T, NativeError> {
        let slot = self.slot(index)?;
        T::from_dynamic(slot).map_err(|source| self.argument_error(index, source))
    }

    /// Store the value an `&out`/`&inout` parameter hands back.
    pub fn set<T: IntoDynamic>(&mut self, index: usize, value: T) -> Result<(), NativeError> {
        let count = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(NativeError::ArgumentIndexOutOfBounds { index, count })?;
        *slot = value.into_dynamic();
        Ok(())
    }

    /// Whether a nullable parameter was left null.
    pub fn is_null(&self, index: usize) -> bool {
        matches!(
            self.values.get(index),
            Some(Dynamic::NullHandle | Dynamic::Void) | None
        )
    }

    /// Resolve a handle parameter.
    pub fn handle<T: NativeHandle>(&self, index: usize) -> Result<T, NativeError> {
        match self.slot(index)? {
            Dynamic::Handle(h) => self.handles.get::<T>(*h),
            Dynamic::NullHandle => Err(self.argument_error(
                index,
                ConversionError::NullHandle {
                    target_type: T::NAME,
                },
            )),
            other => Err(self.argument_error(
                index,
                ConversionError::TypeMismatch {
                    expected: T::NAME,
                    actual: other.type_name(),
                },
            )),
        }
    }

    /// Resolve an optional handle parameter.
    pub fn opt_handle<T: NativeHandle>(&self, index: usize) -> Result<Option<T>, NativeError> {
        if self.is_null(index) {
            Ok(None)
        } else {
            self.handle(index).map(Some)
        }
    }

    /// Resolve `this` for a method call.
    pub fn this_handle<T: NativeHandle>(&self) -> Result<T, NativeError> {
        match &self.this {
            Some(Dynamic::Handle(h)) => self.handles.get::<T>(*h),
            Some(other) => Err(NativeError::invalid_this(format!(
                "expected {}@, got {}",
                T::NAME,
                other.type_name()
            ))),
            None => Err(NativeError::invalid_this("not a method call")),
        }
    }

    /// Alias a native object for the script. No ownership moves.
    pub fn new_handle<T: NativeHandle>(&mut self, value: T) -> Dynamic {
        Dynamic::Handle(self.handles.alias(T::TYPE_HASH, value.into_raw()))
    }

    pub(crate) fn into_values(self) -> Vec<Dynamic> {
        self.values
    }
}

/// Build the thunk for one descriptor.
///
/// `H` is the GUI backend passed as the call's host. The closure converts
/// its arguments through [`Args`], calls the backend, and returns the
/// native result.
pub fn thunk<H, R, F>(params: Vec<ParamDescriptor>, f: F) -> NativeFn
where
    H: Any,
    R: IntoDynamic,
    F: Fn(&mut H, &mut Args<'_>) -> Result<R, NativeError> + Send + Sync + 'static,
{
    let min = params.iter().filter(|p| !p.has_default()).count();
    let max = params.len();

    NativeFn::new(move |ctx: &mut CallContext| {
        let supplied = ctx.arg_count();
        if supplied < min || supplied > max {
            return Err(NativeError::Arity {
                function: ctx.function().to_string(),
                supplied,
                min,
                max,
            });
        }

        let mut values = Vec::with_capacity(max);
        for (index, param) in params.iter().enumerate() {
            if index < supplied {
                let slot = ctx.arg_slot(index)?;
                if !param.data_type.accepts(slot) {
                    return Err(NativeError::Argument {
                        function: ctx.function().to_string(),
                        index,
                        source: ConversionError::TypeMismatch {
                            expected: param.data_type.name,
                            actual: slot.type_name(),
                        },
                    });
                }
                values.push(slot.clone());
            } else if let Some(default) = &param.default {
                values.push(default.value.clone());
            }
        }

        let this = if ctx.has_this() {
            Some(ctx.this_slot()?.clone())
        } else {
            None
        };

        let function = ctx.function().to_string();
        let (result, values) = {
            let (host, handles) = ctx.host_and_handles::<H>()?;
            let mut args = Args::new(&function, values, this, handles);
            let result = f(host, &mut args)?;
            (result.into_dynamic(), args.into_values())
        };

        for (index, param) in params.iter().enumerate().take(supplied) {
            if param.data_type.is_output()
                && let Some(value) = values.get(index)
            {
                *ctx.arg_slot_mut(index)? = value.clone();
            }
        }

        ctx.set_return_slot(result);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::{DataType, RefModifier};
    use crate::descriptors::DefaultValue;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    fn run(
        f: &NativeFn,
        slots: &mut [Dynamic],
        host: &mut dyn Any,
    ) -> Result<Dynamic, NativeError> {
        let mut ret = Dynamic::Void;
        let mut handles = HandleTable::new();
        let mut ctx = CallContext::new("ImGui::SliderFloat", slots, 0, &mut ret, &mut handles, host);
        f.call(&mut ctx)?;
        Ok(ret)
    }

    fn slider() -> NativeFn {
        let params = vec![
            ParamDescriptor::new("label", DataType::STRING),
            ParamDescriptor::new("v", DataType::FLOAT.with_ref(RefModifier::InOut)),
            ParamDescriptor::new("v_min", DataType::FLOAT)
                .with_default(DefaultValue::new("0.0f", Dynamic::Float(0.0))),
            ParamDescriptor::new("v_max", DataType::FLOAT)
                .with_default(DefaultValue::new("1.0f", Dynamic::Float(1.0))),
        ];
        thunk(params, |rec: &mut Recorder, args: &mut Args<'_>| {
            let label: String = args.get(0)?;
            let v: f32 = args.get(1)?;
            let min: f32 = args.get(2)?;
            let max: f32 = args.get(3)?;
            rec.calls.push(format!("{label} {v} {min} {max}"));
            args.set(1, (v + 0.25).clamp(min, max))?;
            Ok(true)
        })
    }

    #[test]
    fn defaults_fill_trailing_arguments() {
        let f = slider();
        let mut rec = Recorder::default();
        let mut short = [Dynamic::from("x"), Dynamic::Float(0.5)];
        let mut full = [
            Dynamic::from("x"),
            Dynamic::Float(0.5),
            Dynamic::Float(0.0),
            Dynamic::Float(1.0),
        ];
        assert_eq!(run(&f, &mut short, &mut rec), Ok(Dynamic::Bool(true)));
        assert_eq!(run(&f, &mut full, &mut rec), Ok(Dynamic::Bool(true)));
        assert_eq!(rec.calls[0], rec.calls[1]);
        assert_eq!(rec.calls[0], "x 0.5 0 1");
    }

    #[test]
    fn inout_is_written_back() {
        let f = slider();
        let mut rec = Recorder::default();
        let mut slots = [Dynamic::from("x"), Dynamic::Float(0.5)];
        run(&f, &mut slots, &mut rec).unwrap();
        assert_eq!(slots[1], Dynamic::Float(0.75));
    }

    #[test]
    fn too_few_arguments_never_reach_native() {
        let f = slider();
        let mut rec = Recorder::default();
        let mut slots = [Dynamic::from("x")];
        let err = run(&f, &mut slots, &mut rec).unwrap_err();
        assert_eq!(
            err,
            NativeError::Arity {
                function: "ImGui::SliderFloat".into(),
                supplied: 1,
                min: 2,
                max: 4
            }
        );
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn too_many_arguments() {
        let f = slider();
        let mut rec = Recorder::default();
        let mut slots: Vec<Dynamic> = (0..5).map(|_| Dynamic::Float(0.0)).collect();
        assert!(run(&f, &mut slots, &mut rec).unwrap_err().is_arity());
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn wrong_kind_reports_index() {
        let f = slider();
        let mut rec = Recorder::default();
        let mut slots = [Dynamic::from("x"), Dynamic::from("oops")];
        let err = run(&f, &mut slots, &mut rec).unwrap_err();
        assert!(matches!(err, NativeError::Argument { index: 1, .. }));
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn host_mismatch() {
        let f = slider();
        let mut slots = [Dynamic::from("x"), Dynamic::Float(0.5)];
        let err = run(&f, &mut slots, &mut 0u8).unwrap_err();
        assert!(matches!(err, NativeError::HostMismatch { .. }));
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Canvas(u64);

    impl NativeHandle for Canvas {
        const NAME: &'static str = "Canvas";
        fn into_raw(self) -> u64 {
            self.0
        }
        fn from_raw(raw: u64) -> Self {
            Canvas(raw)
        }
    }

    #[test]
    fn handle_round_trip_through_args() {
        let make = thunk(vec![], |_: &mut (), args: &mut Args<'_>| {
            Ok(args.new_handle(Canvas(99)))
        });
        let read = thunk(
            vec![ParamDescriptor::new("c", DataType::handle("Canvas"))],
            |_: &mut (), args: &mut Args<'_>| Ok(args.handle::<Canvas>(0)?.0 as i64),
        );

        let mut handles = HandleTable::new();
        let mut host = ();
        let mut ret = Dynamic::Void;
        {
            let mut ctx = CallContext::new("Make", &mut [], 0, &mut ret, &mut handles, &mut host);
            make.call(&mut ctx).unwrap();
        }
        let mut slots = [ret.clone()];
        let mut out = Dynamic::Void;
        {
            let mut ctx =
                CallContext::new("Read", &mut slots, 0, &mut out, &mut handles, &mut host);
            read.call(&mut ctx).unwrap();
        }
        assert_eq!(out, Dynamic::Int(99));

        handles.invalidate_all();
        let mut ctx = CallContext::new("Read", &mut slots, 0, &mut out, &mut handles, &mut host);
        assert!(matches!(
            read.call(&mut ctx),
            Err(NativeError::StaleHandle { .. })
        ));
    }
}
