//! Entity binding operations.
//!
//! Every operation is a single atomic lookup-and-mutate: resolve the
//! target, convert or produce the value, store it. The binder keeps no
//! state and never retains the entity after a call returns.

use crate::{
    error::BindError,
    kind::FieldKind,
    obs::{self, BindEvent},
    registry,
    traits::{Entity, EntitySchema, FieldAccess},
    value::Value,
};

/// Instantiate an entity through its zero-argument constructor.
#[must_use]
pub fn create_entity<E>() -> E
where
    E: EntitySchema + Default,
{
    obs::record(BindEvent::EntityCreated {
        entity_path: E::PATH,
    });

    E::default()
}

/// Instantiate an entity and assign its identifier.
///
/// The identifier is written through the entity's own identifier contract
/// with no coercion; it is assumed already correctly typed.
pub fn create_entity_with_id<E>(id: Value) -> Result<E, BindError>
where
    E: EntitySchema + Entity + Default,
{
    let mut entity = create_entity::<E>();
    entity
        .set_id_value(id)
        .map_err(|err| fail(E::PATH, err))?;

    Ok(entity)
}

/// Resolve `path` in the registry and instantiate the registered type.
pub fn create_entity_by_path(path: &str) -> Result<Box<dyn Entity>, BindError> {
    let entry = registry::resolve(path)?;
    let entity = entry.instantiate()?;

    obs::record(BindEvent::EntityCreated {
        entity_path: entry.model.path,
    });

    Ok(entity)
}

/// As [`create_entity_by_path`], then assign the identifier (untyped path).
pub fn create_entity_by_path_with_id(path: &str, id: Value) -> Result<Box<dyn Entity>, BindError> {
    let mut entity = create_entity_by_path(path)?;
    let entity_path = entity.model().path;
    entity
        .set_id_value(id)
        .map_err(|err| fail(entity_path, err))?;

    Ok(entity)
}

/// Read the named field's current value.
pub fn get_field<E>(entity: &E, field: &str) -> Result<Value, BindError>
where
    E: FieldAccess + ?Sized,
{
    let model = entity.model();
    let Some(field_model) = model.field(field) else {
        return Err(fail(model.path, BindError::field_not_found(model.path, field)));
    };

    // model and accessor are generated together; a field present in one is
    // present in the other
    let Some(value) = entity.get_value(field) else {
        return Err(fail(model.path, BindError::field_not_found(model.path, field)));
    };

    obs::record(BindEvent::FieldRead {
        entity_path: model.path,
        field: field_model.name,
    });

    Ok(value)
}

/// Write `value` into the named field with no coercion.
pub fn set_field<E>(entity: &mut E, field: &str, value: Value) -> Result<(), BindError>
where
    E: FieldAccess + ?Sized,
{
    let model = entity.model();
    let Some(field_model) = model.field(field) else {
        return Err(fail(model.path, BindError::field_not_found(model.path, field)));
    };

    entity
        .set_value(field, value)
        .map_err(|err| fail(model.path, err))?;

    obs::record(BindEvent::FieldWritten {
        entity_path: model.path,
        field: field_model.name,
    });

    Ok(())
}

/// Write the named field from a caller-supplied producer driven by the
/// field's declared kind.
///
/// The producer typically wraps [`crate::coerce::bind`] with a captured raw
/// value, so one coercion strategy covers every field without repeating
/// kind dispatch at each call site.
pub fn set_field_with<E, F>(entity: &mut E, field: &str, produce: F) -> Result<(), BindError>
where
    E: FieldAccess + ?Sized,
    F: FnOnce(FieldKind) -> Result<Value, BindError>,
{
    let model = entity.model();
    let Some(field_model) = model.field(field) else {
        return Err(fail(model.path, BindError::field_not_found(model.path, field)));
    };

    let value = produce(field_model.kind).map_err(|err| fail(model.path, err))?;
    entity
        .set_value(field, value)
        .map_err(|err| fail(model.path, err))?;

    obs::record(BindEvent::FieldWritten {
        entity_path: model.path,
        field: field_model.name,
    });

    Ok(())
}

fn fail(entity_path: &'static str, err: BindError) -> BindError {
    obs::record(BindEvent::BindFailed { entity_path });
    err
}

///
/// TESTS
///
/// A hand-written entity exercises the binder without the derive macro;
/// the facade's integration tests cover the generated path.
///
