//! Run-wide declaration set

use super::Declaration;

/// Every declaration parsed in one run, in encounter order.
///
/// Foreign keys are resolved against this set, so references across files of
/// the same run are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    declarations: Vec<Declaration>,
}

impl Schema {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// First declaration whose type name is `name`.
    ///
    /// Linear scan; runs hold tens to low hundreds of declarations.
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Table name of the first declaration named `name`
    pub fn table_name_of(&self, name: &str) -> Option<&str> {
        self.find(name).map(|d| d.table_name.as_str())
    }
}

impl From<Vec<Declaration>> for Schema {
    fn from(declarations: Vec<Declaration>) -> Self {
        Self::new(declarations)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
