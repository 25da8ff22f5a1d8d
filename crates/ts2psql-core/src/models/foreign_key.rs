//! Foreign key reference model

/// A reference from a property to another declaration's property.
///
/// The target is named by declaration (type) name and resolved to a table
/// name only at generation time, against the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Name of the referenced declaration, e.g. `User`
    pub target_type_name: String,
    /// Referenced column, rendered verbatim
    pub target_property: String,
}

impl ForeignKey {
    pub fn new(target_type_name: impl Into<String>, target_property: impl Into<String>) -> Self {
        Self {
            target_type_name: target_type_name.into(),
            target_property: target_property.into(),
        }
    }
}
