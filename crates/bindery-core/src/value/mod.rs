#[cfg(test)]
mod tests;

use crate::types::{DateTime, Float32, Float64};
use serde::{Deserialize, Serialize};

///
/// Value
///
/// Runtime value produced by coercion and read/written through entity
/// field access.
///
/// Null → the field's value is absent (`Option::None`).
/// Set  → duplicates collapsed by value equality; first occurrence wins.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Date(DateTime),
    Double(Float64),
    Float(Float32),
    Int(i32),
    List(Vec<Value>),
    Long(i64),
    Null,
    Set(Vec<Value>),
    Short(i16),
    Text(String),
}

impl Value {
    /// Build a `Set` from `items`, collapsing duplicates by value equality.
    /// The first occurrence of each value is kept, in encounter order.
    #[must_use]
    pub fn set_of(items: Vec<Self>) -> Self {
        let mut out: Vec<Self> = Vec::with_capacity(items.len());
        for item in items {
            if !out.contains(&item) {
                out.push(item);
            }
        }

        Self::Set(out)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_set(&self) -> Option<&[Self]> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Variant label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Long(_) => "long",
            Self::Null => "null",
            Self::Set(_) => "set",
            Self::Short(_) => "short",
            Self::Text(_) => "text",
        }
    }
}
