use crate::kind::ScalarKind;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error as ThisError;

///
/// BindError
///
/// Single error surface for binding operations. Every failure carries a
/// human-readable message and, where one exists, the original cause;
/// nothing is retried or silently recovered.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum BindError {
    #[error("unknown entity path: {path}")]
    ClassResolution { path: String },

    #[error("cannot access field `{field}` on `{path}`: {reason}")]
    FieldAccess {
        path: &'static str,
        field: String,
        reason: String,
    },

    #[error("no field named `{field}` on `{path}`")]
    FieldNotFound { path: &'static str, field: String },

    #[error("cannot instantiate entity `{path}`: {reason}")]
    Instantiation { path: String, reason: String },

    #[error("cannot parse `{input}` as {kind}")]
    Parse {
        input: String,
        kind: ScalarKind,
        #[source]
        source: ParseFailure,
    },
}

impl BindError {
    /// Construct an unknown-path resolution error.
    pub fn class_resolution(path: impl Into<String>) -> Self {
        Self::ClassResolution { path: path.into() }
    }

    /// Construct a field read/write access error.
    pub fn field_access(
        path: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldAccess {
            path,
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Construct a missing-field lookup error.
    pub fn field_not_found(path: &'static str, field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            path,
            field: field.into(),
        }
    }

    /// Construct a construction-failure error.
    pub fn instantiation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Instantiation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Construct a malformed-input parse error for the given target kind.
    pub(crate) fn parse(input: &str, kind: ScalarKind, source: impl Into<ParseFailure>) -> Self {
        Self::Parse {
            input: input.to_string(),
            kind,
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn is_field_not_found(&self) -> bool {
        matches!(self, Self::FieldNotFound { .. })
    }

    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

///
/// ParseFailure
///
/// Underlying cause of a [`BindError::Parse`]. Never returned directly;
/// always wrapped with the offending input and target kind.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ParseFailure {
    #[error(transparent)]
    Date(#[from] time::error::Parse),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error("non-finite value")]
    NonFinite,
}
