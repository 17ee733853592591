//! bindery — typed value binding and entity field access.
//!
//! ## Crate layout
//! - `bindery-core`: type descriptors, values, coercion, entity models,
//!   the binder, and the path registry.
//! - `bindery-derive`: the `Entity` derive macro.
//! - this crate: the public surface tying the two together.
//!
//! The `prelude` module mirrors the runtime surface used by binding code.

pub use bindery_core::{
    __reexports, binder, coerce, error, kind, model, obs, registry, traits, types, value,
};

pub use bindery_derive::Entity;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        binder, coerce,
        error::BindError,
        kind::{ContainerKind, ElementKind, FieldKind, ScalarKind},
        model::{entity::EntityModel, field::FieldModel},
        traits::{
            BindValue as _, Entity as _, EntityIdentity as _, EntitySchema as _, FieldAccess as _,
            Path as _,
        },
        types::{DatePattern, DateTime, Float32, Float64},
        value::Value,
    };
    pub use bindery_derive::Entity;
}
