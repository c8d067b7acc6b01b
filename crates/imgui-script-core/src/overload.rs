//! Overload resolution and ambiguity analysis.
//!
//! Each script-visible name maps to an ordered candidate list. At call time
//! the first candidate (registration order) whose arity range contains the
//! supplied count and whose parameters accept every supplied value wins.
//! There is no ranking and no implicit conversion beyond
//! [`DataType::accepts`](crate::DataType::accepts), so registration rejects
//! any pair of candidates that could both accept the same argument list.

use crate::descriptors::FunctionDescriptor;
use crate::dynamic::Dynamic;
use crate::error::NativeError;

/// Pick the candidate for a call.
///
/// When exactly one candidate fits the argument count it is returned even
/// if a value does not fit, so that its thunk reports the precise argument
/// that failed.
pub fn resolve<'a>(
    function: &str,
    candidates: &'a [FunctionDescriptor],
    args: &[Dynamic],
) -> Result<&'a FunctionDescriptor, NativeError> {
    if candidates.is_empty() {
        return Err(NativeError::UnknownFunction {
            name: function.to_string(),
        });
    }

    let by_arity: Vec<&FunctionDescriptor> = candidates
        .iter()
        .filter(|c| c.accepts_arity(args.len()))
        .collect();

    match by_arity.as_slice() {
        [] => {
            let min = candidates.iter().map(|c| c.min_arity()).min().unwrap_or(0);
            let max = candidates.iter().map(|c| c.max_arity()).max().unwrap_or(0);
            Err(NativeError::Arity {
                function: function.to_string(),
                supplied: args.len(),
                min,
                max,
            })
        }
        [only] => Ok(*only),
        several => several
            .iter()
            .copied()
            .find(|c| c.accepts_args(args))
            .ok_or_else(|| NativeError::NoMatchingOverload {
                function: function.to_string(),
                supplied: args.iter().map(Dynamic::type_name).collect(),
            }),
    }
}

/// Check whether two candidates can both accept some argument list.
///
/// Their arity ranges must intersect, and at the smallest shared count every
/// parameter pair must overlap. Longer shared counts only add constraints,
/// so the smallest one decides.
pub fn is_ambiguous(a: &FunctionDescriptor, b: &FunctionDescriptor) -> bool {
    let lo = a.min_arity().max(b.min_arity());
    let hi = a.max_arity().min(b.max_arity());
    if lo > hi {
        return false;
    }
    a.params
        .iter()
        .zip(&b.params)
        .take(lo)
        .all(|(pa, pb)| pa.data_type.overlaps(&pb.data_type))
}

/// Find the first ambiguous pair in a candidate list.
pub fn find_ambiguity(candidates: &[&FunctionDescriptor]) -> Option<(usize, usize)> {
    for (i, a) in candidates.iter().enumerate() {
        for (j, b) in candidates.iter().enumerate().skip(i + 1) {
            if is_ambiguous(a, b) {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;
    use crate::descriptors::{DefaultValue, FunctionKind, ParamDescriptor};
    use crate::native_fn::{CallContext, NativeFn};

    fn f(params: Vec<ParamDescriptor>) -> FunctionDescriptor {
        FunctionDescriptor::new(
            "F",
            FunctionKind::Global,
            params,
            DataType::VOID,
            NativeFn::new(|_: &mut CallContext| Ok(())),
        )
    }

    fn p(name: &str, dt: DataType) -> ParamDescriptor {
        ParamDescriptor::new(name, dt)
    }

    #[test]
    fn string_and_int_overloads_resolve() {
        let set = [
            f(vec![p("s", DataType::STRING)]),
            f(vec![p("i", DataType::INT)]),
        ];
        let got = resolve("PushID", &set, &[Dynamic::Int(3)]).unwrap();
        assert_eq!(got.params[0].name, "i");
        let got = resolve("PushID", &set, &[Dynamic::from("a")]).unwrap();
        assert_eq!(got.params[0].name, "s");
    }

    #[test]
    fn no_candidate_for_values() {
        let set = [
            f(vec![p("s", DataType::STRING)]),
            f(vec![p("i", DataType::INT)]),
        ];
        let err = resolve("PushID", &set, &[Dynamic::Bool(true)]).unwrap_err();
        assert!(matches!(err, NativeError::NoMatchingOverload { .. }));
    }

    #[test]
    fn arity_error_spans_all_candidates() {
        let set = [
            f(vec![p("a", DataType::INT)]),
            f(vec![p("a", DataType::STRING), p("b", DataType::INT)]),
        ];
        let err = resolve("F", &set, &[]).unwrap_err();
        assert_eq!(
            err,
            NativeError::Arity {
                function: "F".into(),
                supplied: 0,
                min: 1,
                max: 2
            }
        );
    }

    #[test]
    fn single_arity_fit_is_returned_for_precise_errors() {
        let set = [f(vec![p("a", DataType::INT)])];
        assert!(resolve("F", &set, &[Dynamic::from("x")]).is_ok());
    }

    #[test]
    fn unknown_function() {
        assert!(matches!(
            resolve("Nope", &[], &[]),
            Err(NativeError::UnknownFunction { .. })
        ));
    }

    #[test]
    fn ambiguity_detection() {
        let s = f(vec![p("s", DataType::STRING)]);
        let i = f(vec![p("i", DataType::INT)]);
        let fl = f(vec![p("v", DataType::FLOAT)]);
        assert!(!is_ambiguous(&s, &i));
        // an int literal fits both
        assert!(is_ambiguous(&i, &fl));
    }

    #[test]
    fn defaults_can_create_ambiguity() {
        let a = f(vec![]);
        let b = f(vec![
            p("x", DataType::INT).with_default(DefaultValue::new("0", Dynamic::Int(0))),
        ]);
        assert!(is_ambiguous(&a, &b));
        assert_eq!(find_ambiguity(&[&a, &b]), Some((0, 1)));
    }

    #[test]
    fn disjoint_arity_is_not_ambiguous() {
        let a = f(vec![p("x", DataType::INT)]);
        let b = f(vec![p("x", DataType::INT), p("y", DataType::INT)]);
        assert!(!is_ambiguous(&a, &b));
        assert_eq!(find_ambiguity(&[&a, &b]), None);
    }
}
