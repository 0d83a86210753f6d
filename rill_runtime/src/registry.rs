//! Process-wide symbol registry.
//!
//! Extensions populate the table once at startup; after `seal` the table
//! is read-only and lookups may run concurrently. Registration is the
//! single-writer phase and must happen before any `invoke`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::class::ClassEntity;
use crate::invoke::{NativeCallable, SymbolEntity};

static REGISTRY: Lazy<RwLock<SymbolTable>> = Lazy::new(|| RwLock::new(SymbolTable::new()));

/// Registration-phase error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Registration attempted after the table was sealed.
    #[error("cannot register `{0}`: symbol table is sealed")]
    Sealed(String),
}

/// Symbol table: written during the registration phase, sealed before
/// execution, read-only afterwards.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Arc<SymbolEntity>>,
    sealed: bool,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Register free function symbols. Callables sharing a name become
    /// overloads of one symbol; a name registered earlier is replaced
    /// wholesale (last registration wins).
    pub fn register_functions(
        &mut self,
        callables: Vec<NativeCallable>,
    ) -> Result<(), RegistryError> {
        self.register_with_owner(None, callables)
    }

    /// Register method symbols owned by `class`, stored under their
    /// qualified `Class::name`.
    pub fn register_methods(
        &mut self,
        class: Arc<ClassEntity>,
        callables: Vec<NativeCallable>,
    ) -> Result<(), RegistryError> {
        self.register_with_owner(Some(class), callables)
    }

    fn register_with_owner(
        &mut self,
        owner: Option<Arc<ClassEntity>>,
        callables: Vec<NativeCallable>,
    ) -> Result<(), RegistryError> {
        if self.sealed {
            let name = callables
                .first()
                .map(|c| c.name.clone())
                .unwrap_or_default();
            return Err(RegistryError::Sealed(name));
        }
        // Group by name in registration order; same-name callables land
        // in the same entity as overloads.
        let mut building: Vec<(String, SymbolEntity)> = Vec::new();
        for callable in callables {
            match building.iter_mut().find(|(name, _)| *name == callable.name) {
                Some((_, entity)) => {
                    entity.add_overload(&callable);
                }
                None => {
                    let mut entity = match &owner {
                        Some(class) => {
                            SymbolEntity::with_owner(&callable.name, Arc::clone(class))
                        }
                        None => SymbolEntity::new(&callable.name),
                    };
                    entity.add_overload(&callable);
                    building.push((callable.name.clone(), entity));
                }
            }
        }
        for (_, entity) in building {
            self.symbols
                .insert(entity.qualified_name(), Arc::new(entity));
        }
        Ok(())
    }

    /// Seal the table; registration is rejected afterwards.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Look up a symbol by name (qualified `Class::name` for methods).
    pub fn lookup(&self, name: &str) -> Option<Arc<SymbolEntity>> {
        self.symbols.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// An extension contributes native symbols at startup.
pub trait Extension: Send + Sync {
    fn name(&self) -> &str;

    /// Extension version, for reflection.
    fn version(&self) -> &str {
        "~"
    }

    /// Populate the table. Runs once, before any lookup.
    fn on_register(&self, table: &mut SymbolTable) -> Result<(), RegistryError>;
}

/// Run an extension's registration against the global table.
pub fn install(extension: &dyn Extension) -> Result<(), RegistryError> {
    let mut table = REGISTRY.write().expect("symbol registry lock poisoned");
    extension.on_register(&mut table)
}

/// Look up a symbol in the global table.
pub fn lookup_symbol(name: &str) -> Option<Arc<SymbolEntity>> {
    REGISTRY.read().expect("symbol registry lock poisoned").lookup(name)
}

/// Seal the global table; call once all extensions have registered.
pub fn seal_global() {
    REGISTRY.write().expect("symbol registry lock poisoned").seal();
}
