use crate::model::field::FieldModel;

///
/// EntityModel
/// Macro-generated runtime model for one entity.
///

#[derive(Clone, Copy, Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for registry dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name.
    pub entity_name: &'static str,
    /// Primary key field (points at an entry in `fields`).
    pub primary_key: &'static FieldModel,
    /// Ordered field list (authoritative for lookup).
    pub fields: &'static [FieldModel],
}

impl EntityModel {
    /// Look up a field model by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }
}
