//! Error types for the invocation boundary.
//!
//! Recoverable conditions (bad arity, deprecation) are diagnostics on the
//! `Environment` and never appear here. What does appear is the fatal
//! taxonomy (`RuntimeError`) and the tagged outcome of an invocation
//! (`InvokeFault`): a bridged script-level exception the interpreter
//! rethrows, or a fatal failure that unwinds to top-level handling.

use thiserror::Error;

use crate::value::Value;

/// Fatal invocation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Invoked a symbol registered as abstract.
    #[error("Cannot call abstract method {0}()")]
    AbstractCall(String),

    /// Instance symbol invoked without a receiver and the owning class
    /// could not synthesize a placeholder instance.
    #[error("Non-static method {0}() cannot be called statically")]
    CalledStatically(String),

    /// An overload declares a parameter shape the marshaller does not
    /// recognize. A registration-time defect, not a runtime condition.
    #[error("{0}(): cannot call this function dynamically")]
    CannotCallDynamically(String),
}

impl RuntimeError {
    /// Create an abstract-call error.
    pub fn abstract_call<S: Into<String>>(symbol: S) -> Self {
        RuntimeError::AbstractCall(symbol.into())
    }

    /// Create a static-call error.
    pub fn called_statically<S: Into<String>>(symbol: S) -> Self {
        RuntimeError::CalledStatically(symbol.into())
    }

    /// Create a cannot-call-dynamically error.
    pub fn cannot_call_dynamically<S: Into<String>>(symbol: S) -> Self {
        RuntimeError::CannotCallDynamically(symbol.into())
    }
}

/// Failed outcome of `SymbolEntity::invoke`.
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeFault {
    /// Recoverable script-level exception; the caller converts it into
    /// the language's throw mechanism.
    Exception(Value),
    /// Aborts the invocation and unwinds to top-level error handling.
    Fatal(RuntimeError),
}

/// Result type of an invocation.
pub type InvokeResult = Result<Value, InvokeFault>;

/// Failure channel for native implementations. `Thrown` is recognized by
/// the script error channel and surfaces as a recoverable exception;
/// `Fatal` propagates unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeFault {
    Thrown(Value),
    Fatal(RuntimeError),
}

impl NativeFault {
    /// A script-level exception carrying `value`.
    pub fn thrown(value: impl Into<Value>) -> Self {
        NativeFault::Thrown(value.into())
    }
}

impl From<RuntimeError> for NativeFault {
    fn from(e: RuntimeError) -> Self {
        NativeFault::Fatal(e)
    }
}

impl From<NativeFault> for InvokeFault {
    fn from(fault: NativeFault) -> Self {
        match fault {
            NativeFault::Thrown(value) => InvokeFault::Exception(value),
            NativeFault::Fatal(error) => InvokeFault::Fatal(error),
        }
    }
}
