//! Left-to-right argument marshalling and the guaranteed-release cleanup.

use crate::convert::converter;
use crate::env::Environment;
use crate::error::RuntimeError;
use crate::trace::TraceInfo;
use crate::value::{Argument, Value, ValueSlot};

use super::callable::{CallArgs, NativeArg};
use super::contract::ParamContract;
use super::overload::Overload;

/// Releases every reference argument slot when dropped, so the caller's
/// binding slots are unset on all exit paths, the fatal unwinds included.
pub(crate) struct RefCleanup {
    slots: Vec<ValueSlot>,
}

impl RefCleanup {
    pub(crate) fn for_arguments(args: &[Argument]) -> Self {
        RefCleanup {
            slots: args.iter().filter_map(Argument::slot).cloned().collect(),
        }
    }
}

impl Drop for RefCleanup {
    fn drop(&mut self) {
        for slot in &self.slots {
            *slot.borrow_mut() = Value::Null;
        }
    }
}

/// Marshal `args` against the overload's parameter contracts.
///
/// The arity resolution in `SymbolEntity::invoke` guarantees that the
/// fixed consuming parameters never outrun `args`, so the indexing here
/// cannot go out of bounds.
pub(crate) fn marshal(
    symbol: &str,
    overload: &Overload,
    env: &Environment,
    trace: TraceInfo,
    args: &[Argument],
) -> Result<CallArgs, RuntimeError> {
    let mut passed = Vec::with_capacity(overload.params.len());
    let mut next = 0usize;
    for (position, param) in overload.params.iter().enumerate() {
        match &param.contract {
            ParamContract::ByRef => {
                passed.push(share_argument(&args[next]));
                next += 1;
            }
            ParamContract::MutableCopy | ParamContract::ByValue => {
                passed.push(NativeArg::Owned(args[next].read()));
                next += 1;
            }
            ParamContract::Converted(ty) => {
                let Some(convert) = converter(ty) else {
                    return Err(RuntimeError::cannot_call_dynamically(symbol));
                };
                passed.push(NativeArg::Native(convert(&args[next].read())));
                next += 1;
            }
            ParamContract::InjectEnv => passed.push(NativeArg::Env(env.clone())),
            ParamContract::InjectTrace => passed.push(NativeArg::Trace(trace)),
            ParamContract::Variadic { by_ref } => {
                if position + 1 != overload.params.len() {
                    return Err(RuntimeError::cannot_call_dynamically(symbol));
                }
                let rest = args[next..]
                    .iter()
                    .map(|arg| {
                        if *by_ref {
                            share_argument(arg)
                        } else {
                            NativeArg::Owned(arg.read())
                        }
                    })
                    .collect();
                passed.push(NativeArg::Rest(rest));
                break;
            }
        }
    }
    Ok(CallArgs::new(passed))
}

/// Pass the caller's argument unchanged: a reference argument shares its
/// slot, a plain temporary has nothing to alias and is copied.
fn share_argument(arg: &Argument) -> NativeArg {
    match arg {
        Argument::Ref(slot) => NativeArg::Ref(std::rc::Rc::clone(slot)),
        Argument::Value(v) => NativeArg::Owned(v.clone()),
    }
}
