use crate::kind::FieldKind;

///
/// FieldModel
/// Runtime field metadata used by binding and lookup.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Field name as used in binder lookups.
    pub name: &'static str,
    /// Declared coercion kind.
    pub kind: FieldKind,
}
