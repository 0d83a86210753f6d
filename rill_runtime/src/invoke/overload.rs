//! Arity-keyed overload registry for one symbol.
//!
//! Replaces runtime type introspection with a data-driven table: each
//! overload is stored under the number of caller arguments its fixed
//! parameters consume, built once at registration and read-only after.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::callable::{NativeCallable, NativeFn};
use super::contract::{ParamContract, ParamEntity};

/// One native overload of a symbol.
#[derive(Clone)]
pub struct Overload {
    pub params: Vec<ParamEntity>,
    /// Number of caller arguments the fixed parameters consume. Injected
    /// env/trace parameters do not count.
    pub arity: usize,
    /// True when the last parameter collects trailing arguments; the
    /// overload then accepts its arity and above.
    pub variadic: bool,
    pub(crate) func: NativeFn,
}

impl fmt::Debug for Overload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overload")
            .field("arity", &self.arity)
            .field("variadic", &self.variadic)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Overload {
    /// Build the stored overload from a registration descriptor.
    pub(crate) fn from_callable(callable: &NativeCallable) -> Self {
        let params: Vec<ParamEntity> = callable
            .params
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, spec)| ParamEntity::from_spec(index, spec))
            .collect();
        let arity = params
            .iter()
            .filter(|p| p.contract.consumes_argument())
            .count();
        let variadic = matches!(
            params.last().map(|p| &p.contract),
            Some(ParamContract::Variadic { .. })
        );
        Overload {
            params,
            arity,
            variadic,
            func: Arc::clone(&callable.func),
        }
    }
}

/// The overloads of one symbol, keyed by arity. At most one overload per
/// arity; a variadic overload additionally accepts every higher count.
#[derive(Debug, Clone, Default)]
pub struct OverloadSet {
    by_arity: BTreeMap<usize, Overload>,
}

impl OverloadSet {
    pub fn new() -> Self {
        OverloadSet::default()
    }

    /// Store an overload under its arity. Registering at an occupied
    /// arity replaces the previous overload (last registration wins) and
    /// returns it.
    pub fn insert(&mut self, overload: Overload) -> Option<Overload> {
        self.by_arity.insert(overload.arity, overload)
    }

    /// Select the overload for `argc` caller arguments:
    /// exact arity match; else the highest-arity variadic overload whose
    /// arity is below `argc`; else, when `argc` exceeds every declared
    /// arity, the largest overload (so the caller can report the exact
    /// expected count). `None` means too few arguments.
    pub fn find(&self, argc: usize) -> Option<&Overload> {
        if let Some(found) = self.by_arity.get(&argc) {
            return Some(found);
        }
        if let Some(found) = self
            .by_arity
            .range(..argc)
            .rev()
            .map(|(_, overload)| overload)
            .find(|overload| overload.variadic)
        {
            return Some(found);
        }
        match self.by_arity.iter().next_back() {
            Some((&max, overload)) if argc > max => Some(overload),
            _ => None,
        }
    }

    /// Minimum declared arity across all overloads (0 when empty).
    pub fn min_arity(&self) -> usize {
        self.by_arity.keys().next().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.by_arity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_arity.is_empty()
    }

    /// Declared arities in ascending order.
    pub fn arities(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_arity.keys().copied()
    }
}
