//! Native symbol binding.
//!
//! A `SymbolEntity` wraps the native overloads of one callable name,
//! selects an overload by argument count, marshals each argument
//! according to its declared parameter contract, invokes the native
//! implementation, and boxes the result back into a `Value`. The binding
//! itself is stateless across calls: each `invoke` is an independent
//! transaction over the immutable overload set.

mod callable;
mod contract;
mod entity;
mod marshal;
mod overload;

pub use callable::{
    CallArgs, Modifiers, NativeArg, NativeCallable, NativeFn, NativeReturn, Visibility,
};
pub use contract::{ParamContract, ParamEntity, ParamSpec};
pub use entity::SymbolEntity;
pub use overload::{Overload, OverloadSet};
