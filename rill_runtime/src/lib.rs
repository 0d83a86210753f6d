//! Rill Runtime Core
//!
//! This crate provides the value-and-dispatch core of the Rill scripting
//! runtime:
//!
//! - `Value`: the tagged scalar type implementing Rill's dynamic-typing
//!   contract (arithmetic, comparison, concatenation, coercion)
//! - Native symbol binding: overload selection by argument count, per-parameter
//!   marshalling, and result boxing for natively-implemented functions and
//!   methods
//! - A process-wide symbol registry populated once at extension startup
//!
//! The surrounding interpreter (bytecode, the class hierarchy, source
//! tracking) lives in other crates; this core operates purely at the
//! value/invocation level.

pub mod class;
pub mod convert;
pub mod env;
pub mod error;
pub mod invoke;
pub mod registry;
pub mod trace;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use rill_runtime::prelude::*;
/// ```
pub mod prelude {
    pub use super::class::{ClassEntity, ObjectInstance, Receiver};
    pub use super::convert::{converter, NativeType, NativeValue};
    pub use super::env::{Diagnostic, Environment, Severity};
    pub use super::error::{InvokeFault, InvokeResult, NativeFault, RuntimeError};
    pub use super::invoke::{
        CallArgs, Modifiers, NativeArg, NativeCallable, NativeReturn, ParamContract, ParamSpec,
        SymbolEntity, Visibility,
    };
    pub use super::registry::{Extension, RegistryError, SymbolTable};
    pub use super::trace::TraceInfo;
    pub use super::value::{new_slot, Argument, Value, ValueSlot, ValueType};
}

pub use prelude::*;
