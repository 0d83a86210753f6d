//! Symbol entities: the externally visible callables.

use std::sync::Arc;

use crate::class::{ClassEntity, Receiver};
use crate::env::Environment;
use crate::error::{InvokeFault, InvokeResult, NativeFault, RuntimeError};
use crate::trace::TraceInfo;
use crate::value::{Argument, Value};

use super::callable::{Modifiers, NativeCallable, NativeReturn};
use super::marshal::{marshal, RefCleanup};
use super::overload::{Overload, OverloadSet};

/// A named callable symbol backed by one or more native overloads.
///
/// Built at registration time, immutable and stateless afterwards: each
/// `invoke` is an independent transaction over the overload set.
#[derive(Debug)]
pub struct SymbolEntity {
    name: String,
    owner: Option<Arc<ClassEntity>>,
    modifiers: Modifiers,
    overloads: OverloadSet,
}

impl SymbolEntity {
    /// A free function symbol.
    pub fn new(name: impl Into<String>) -> Self {
        SymbolEntity {
            name: name.into(),
            owner: None,
            modifiers: Modifiers::default(),
            overloads: OverloadSet::new(),
        }
    }

    /// A method symbol owned by `class`.
    pub fn with_owner(name: impl Into<String>, owner: Arc<ClassEntity>) -> Self {
        SymbolEntity {
            name: name.into(),
            owner: Some(owner),
            modifiers: Modifiers::default(),
            overloads: OverloadSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn overloads(&self) -> &OverloadSet {
        &self.overloads
    }

    /// Qualified `Class::name` when owned, plain name otherwise.
    pub fn qualified_name(&self) -> String {
        match &self.owner {
            Some(class) => format!("{}::{}", class.name(), self.name),
            None => self.name.clone(),
        }
    }

    /// Register one native overload. The entity flags are (re)derived
    /// from the callable's modifiers; an overload registered at an
    /// occupied arity replaces the previous one and is returned.
    pub fn add_overload(&mut self, callable: &NativeCallable) -> Option<Overload> {
        self.modifiers = callable.modifiers;
        self.overloads.insert(Overload::from_callable(callable))
    }

    /// Invoke the symbol with `args`, selecting the overload by argument
    /// count and marshalling per parameter contract.
    ///
    /// Bad arity degrades to a warning diagnostic and a `Null` result;
    /// abstract calls, receiver-less instance calls without a mock, and
    /// unrecognized parameter shapes are fatal. A `NativeFault::Thrown`
    /// from the implementation surfaces as a recoverable
    /// `InvokeFault::Exception`; any other native failure propagates
    /// fatally. Reference argument slots are released on every exit path.
    pub fn invoke(
        &self,
        receiver: Option<Receiver>,
        env: &Environment,
        trace: TraceInfo,
        args: &[Argument],
    ) -> InvokeResult {
        let _cleanup = RefCleanup::for_arguments(args);

        if self.modifiers.is_abstract {
            return Err(InvokeFault::Fatal(RuntimeError::abstract_call(
                self.qualified_name(),
            )));
        }

        // Only class-owned symbols synthesize a receiver; a free function
        // has no owning class to mock.
        let receiver = match receiver {
            None if !self.modifiers.is_static && self.owner.is_some() => {
                match self.owner.as_ref().and_then(|class| class.new_mock()) {
                    Some(mock) => Some(mock),
                    None => {
                        return Err(InvokeFault::Fatal(RuntimeError::called_statically(
                            self.qualified_name(),
                        )))
                    }
                }
            }
            other => other,
        };

        let Some(overload) = self.overloads.find(args.len()) else {
            env.warning(
                trace,
                format!(
                    "{}() expects at least {} parameters, {} given",
                    self.name,
                    self.overloads.min_arity(),
                    args.len()
                ),
            );
            return Ok(Value::Null);
        };
        if args.len() > overload.arity && !overload.variadic {
            env.warning(
                trace,
                format!(
                    "{}() expects exactly {} parameters, {} given",
                    self.name,
                    overload.arity,
                    args.len()
                ),
            );
            return Ok(Value::Null);
        }

        if self.modifiers.is_deprecated {
            env.deprecated(trace, format!("{}() is deprecated", self.qualified_name()));
        }

        let passed =
            marshal(&self.name, overload, env, trace, args).map_err(InvokeFault::Fatal)?;

        match (overload.func)(receiver, passed) {
            Ok(NativeReturn::Void) => Ok(Value::Null),
            Ok(NativeReturn::Value(value)) => Ok(value),
            Err(NativeFault::Thrown(exception)) => Err(InvokeFault::Exception(exception)),
            Err(NativeFault::Fatal(error)) => Err(InvokeFault::Fatal(error)),
        }
    }
}
