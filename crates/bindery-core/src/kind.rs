use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ScalarKind
///
/// Scalar coercion targets. `Text` is the identity coercion; everything
/// else parses out of the raw string representation.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ScalarKind {
    Date,
    Double,
    Float,
    Int,
    Long,
    Short,
    Text,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Date => "date",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
            Self::Text => "text",
        };
        write!(f, "{label}")
    }
}

///
/// ContainerKind
///
/// List → ordered sequence, duplicates allowed.
/// Set  → duplicates collapsed by value equality.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ContainerKind {
    List,
    Set,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::List => "list",
            Self::Set => "set",
        };
        write!(f, "{label}")
    }
}

///
/// ElementKind
///
/// The single type argument of a parameterized container. Anything that is
/// not a plain scalar (a nested container, an arbitrary class) collapses to
/// `Unsupported`, which the coercer treats as a passthrough.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ElementKind {
    Scalar(ScalarKind),
    Unsupported,
}

///
/// FieldKind
///
/// Runtime type descriptor for one bindable field. Immutable and fully
/// resolved before it reaches the coercer; const-constructible so derive
/// macros can build static field models out of it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    /// Unparameterized container; elements stay text.
    Container(ContainerKind),
    /// Container with exactly one element-type argument.
    Parameterized(ContainerKind, ElementKind),
    Scalar(ScalarKind),
    /// Marker for types outside the supported set; coercion passes the raw
    /// string through unchanged.
    Unsupported,
}

impl FieldKind {
    #[must_use]
    pub const fn list_of(kind: ScalarKind) -> Self {
        Self::Parameterized(ContainerKind::List, ElementKind::Scalar(kind))
    }

    #[must_use]
    pub const fn set_of(kind: ScalarKind) -> Self {
        Self::Parameterized(ContainerKind::Set, ElementKind::Scalar(kind))
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}
