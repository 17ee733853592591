use crate::{
    error::BindError,
    kind::{ContainerKind, ElementKind, FieldKind, ScalarKind},
    model::entity::EntityModel,
    types::{DateTime, Float32, Float64},
    value::Value,
};
use std::collections::BTreeSet;

// ============================================================================
// ENTITY IDENTITY & SCHEMA
// ============================================================================
//
// These traits describe *what an entity is*; all of them are implemented by
// the derive macro.
//

///
/// Path
/// Fully-qualified type path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EntityIdentity
/// Naming and primary-key metadata about an entity.
///

pub trait EntityIdentity: Path {
    const ENTITY_NAME: &'static str;
    const PRIMARY_KEY: &'static str;
}

///
/// EntitySchema
/// Declared model facts for an entity.
///

pub trait EntitySchema: EntityIdentity {
    const MODEL: &'static EntityModel;
}

// ============================================================================
// ENTITY RUNTIME ACCESS
// ============================================================================

///
/// FieldAccess
///
/// Dyn-safe privileged field introspection: read and write declared fields
/// by name, non-public fields included (the generated impl lives inside the
/// defining crate and reaches them by construction).
///

pub trait FieldAccess {
    /// Runtime model handle for this entity.
    fn model(&self) -> &'static EntityModel;

    /// Read the current value of `field`.
    ///
    /// Returns `None` for unknown fields; an absent optional reads as
    /// `Some(Value::Null)`.
    fn get_value(&self, field: &str) -> Option<Value>;

    /// Write `value` into `field` without coercion.
    ///
    /// The store happens only after the value has fully converted to the
    /// declared field type; on error the field keeps its previous value.
    fn set_value(&mut self, field: &str, value: Value) -> Result<(), BindError>;
}

///
/// Entity
///
/// A bindable entity exposing the generic identifier contract. The
/// identifier is read and written as an already-typed [`Value`]; no
/// coercion is applied on either side.
///

pub trait Entity: FieldAccess + std::fmt::Debug {
    fn id_value(&self) -> Value;

    fn set_id_value(&mut self, id: Value) -> Result<(), BindError>;
}

// ============================================================================
// VALUE CONVERSION BOUNDARY
// ============================================================================

///
/// BindValue
///
/// Conversion boundary between concrete field types and [`Value`].
///
/// `KIND` is an associated const so derive macros can place it in static
/// field models; `ELEMENT` is what this type contributes when it appears as
/// a container's type argument (non-scalars collapse to `Unsupported`).
///

pub trait BindValue {
    const KIND: FieldKind;
    const ELEMENT: ElementKind = ElementKind::Unsupported;

    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

impl BindValue for String {
    const KIND: FieldKind = FieldKind::Scalar(ScalarKind::Text);
    const ELEMENT: ElementKind = ElementKind::Scalar(ScalarKind::Text);

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

// impl_bind_scalar
//
// Value variant and ScalarKind variant share their name for every scalar.
macro_rules! impl_bind_scalar {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl BindValue for $type {
                const KIND: FieldKind = FieldKind::Scalar(ScalarKind::$variant);
                const ELEMENT: ElementKind = ElementKind::Scalar(ScalarKind::$variant);

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_bind_scalar!(
    i16 => Short,
    i32 => Int,
    i64 => Long,
    DateTime => Date,
    Float32 => Float,
    Float64 => Double,
);

impl<T: BindValue> BindValue for Option<T> {
    const KIND: FieldKind = T::KIND;
    const ELEMENT: ElementKind = T::ELEMENT;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: BindValue> BindValue for Vec<T> {
    const KIND: FieldKind = FieldKind::Parameterized(ContainerKind::List, T::ELEMENT);

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(BindValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::List(items) = value else {
            return None;
        };

        let mut out = Self::with_capacity(items.len());
        for item in items {
            out.push(T::from_value(item)?);
        }

        Some(out)
    }
}

impl<T: BindValue + Ord> BindValue for BTreeSet<T> {
    const KIND: FieldKind = FieldKind::Parameterized(ContainerKind::Set, T::ELEMENT);

    fn to_value(&self) -> Value {
        Value::set_of(self.iter().map(BindValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        let Value::Set(items) = value else {
            return None;
        };

        let mut out = Self::new();
        for item in items {
            out.insert(T::from_value(item)?);
        }

        Some(out)
    }
}

///
/// TESTS
///
