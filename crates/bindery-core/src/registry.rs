//! Global entity-type registry.
//!
//! Maps fully-qualified type paths to their runtime models and
//! constructors, so entities can be instantiated from a path known only at
//! runtime. The derive macro registers every entity at program start; the
//! map is append-only and entries are `'static`.

use crate::{error::BindError, model::entity::EntityModel, traits::Entity};
use std::{
    collections::BTreeMap,
    sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// EntityEntry
///
/// One registered entity type: its runtime model plus an optional
/// zero-argument constructor. Metadata-only entries (no constructor)
/// stand in for non-constructible types.
///

pub struct EntityEntry {
    pub model: &'static EntityModel,
    pub ctor: Option<fn() -> Box<dyn Entity>>,
}

impl EntityEntry {
    #[must_use]
    pub const fn new(model: &'static EntityModel, ctor: fn() -> Box<dyn Entity>) -> Self {
        Self {
            model,
            ctor: Some(ctor),
        }
    }

    #[must_use]
    pub const fn metadata_only(model: &'static EntityModel) -> Self {
        Self { model, ctor: None }
    }

    /// Construct a fresh default instance of the registered type.
    pub fn instantiate(&self) -> Result<Box<dyn Entity>, BindError> {
        match self.ctor {
            Some(ctor) => Ok(ctor()),
            None => Err(BindError::instantiation(
                self.model.path,
                "no zero-argument constructor registered",
            )),
        }
    }
}

///
/// REGISTRY
/// the static path → entry map
///

static REGISTRY: LazyLock<RwLock<BTreeMap<&'static str, &'static EntityEntry>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::new()));

fn registry_read() -> RwLockReadGuard<'static, BTreeMap<&'static str, &'static EntityEntry>> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

fn registry_write() -> RwLockWriteGuard<'static, BTreeMap<&'static str, &'static EntityEntry>> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

/// Register an entry under its model path. First registration wins.
pub fn register(entry: &'static EntityEntry) {
    registry_write().entry(entry.model.path).or_insert(entry);
}

/// Resolve a fully-qualified type path to its registered entry.
pub fn resolve(path: &str) -> Result<&'static EntityEntry, BindError> {
    registry_read()
        .get(path)
        .copied()
        .ok_or_else(|| BindError::class_resolution(path))
}

/// All registered paths, for diagnostics.
#[must_use]
pub fn paths() -> Vec<&'static str> {
    registry_read().keys().copied().collect()
}
