//! Per-parameter marshalling contracts.

use crate::convert::NativeType;

/// How one declared parameter consumes (or injects) its argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamContract {
    /// Shares the caller's argument slot; writes are visible to every
    /// alias until the post-call cleanup releases the slot.
    ByRef,
    /// Owned clone the implementation is free to mutate. Ownership makes
    /// this marshal identically to `ByValue`; the distinction is kept as
    /// registration metadata.
    MutableCopy,
    /// Owned clone (the default).
    ByValue,
    /// Converted to the declared native type before the call.
    Converted(NativeType),
    /// Ambient environment handle; consumes no caller argument.
    InjectEnv,
    /// Ambient call-site trace; consumes no caller argument.
    InjectTrace,
    /// Trailing rest parameter collecting all remaining arguments,
    /// honoring `by_ref` for each collected slot. Only valid in last
    /// position.
    Variadic { by_ref: bool },
}

impl ParamContract {
    /// Whether this contract consumes exactly one caller argument.
    pub fn consumes_argument(&self) -> bool {
        matches!(
            self,
            ParamContract::ByRef
                | ParamContract::MutableCopy
                | ParamContract::ByValue
                | ParamContract::Converted(_)
        )
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, ParamContract::Variadic { .. })
    }
}

/// Registration-time parameter description. The name is optional; a
/// missing one is synthesized from the position.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: Option<String>,
    pub contract: ParamContract,
}

impl ParamSpec {
    pub fn new(contract: ParamContract) -> Self {
        ParamSpec {
            name: None,
            contract,
        }
    }

    pub fn named(name: impl Into<String>, contract: ParamContract) -> Self {
        ParamSpec {
            name: Some(name.into()),
            contract,
        }
    }
}

impl From<ParamContract> for ParamSpec {
    fn from(contract: ParamContract) -> Self {
        ParamSpec::new(contract)
    }
}

/// Stored parameter entity; built once at registration, immutable after.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntity {
    pub name: String,
    pub contract: ParamContract,
}

impl ParamEntity {
    pub(crate) fn from_spec(index: usize, spec: ParamSpec) -> Self {
        ParamEntity {
            name: spec.name.unwrap_or_else(|| format!("arg{}", index)),
            contract: spec.contract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumes_argument() {
        assert!(ParamContract::ByRef.consumes_argument());
        assert!(ParamContract::ByValue.consumes_argument());
        assert!(ParamContract::Converted(NativeType::Long).consumes_argument());
        assert!(!ParamContract::InjectEnv.consumes_argument());
        assert!(!ParamContract::InjectTrace.consumes_argument());
        assert!(!ParamContract::Variadic { by_ref: false }.consumes_argument());
    }

    #[test]
    fn test_name_synthesis() {
        let p = ParamEntity::from_spec(2, ParamSpec::new(ParamContract::ByValue));
        assert_eq!(p.name, "arg2");
        let p = ParamEntity::from_spec(0, ParamSpec::named("needle", ParamContract::ByValue));
        assert_eq!(p.name, "needle");
    }
}
