//! Core runtime for bindery: type descriptors, value coercion, entity
//! models, field access, and the path registry.

// The derive macro emits `::bindery::…` paths; alias self so generated code
// resolves inside this crate's own tests as well as through the facade.
extern crate self as bindery;

pub mod binder;
pub mod coerce;
pub mod error;
pub mod kind;
pub mod model;
pub mod obs;
pub mod registry;
pub mod traits;
pub mod types;
pub mod value;

/// re-exports
///
/// macro-generated code can use these, stops the user having to specify the
/// dependencies in their Cargo.toml manually
pub mod __reexports {
    pub use ctor;
}

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, registries, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        binder, coerce,
        error::BindError,
        kind::{ContainerKind, ElementKind, FieldKind, ScalarKind},
        model::{entity::EntityModel, field::FieldModel},
        traits::{BindValue, Entity, EntityIdentity, EntitySchema, FieldAccess, Path},
        types::{DatePattern, DateTime, Float32, Float64},
        value::Value,
    };
}
