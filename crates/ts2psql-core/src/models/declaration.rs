//! Declaration model

use std::path::{Path, PathBuf};

use super::Property;
use crate::metadata::DeclarationOptions;
use crate::naming::normalize;
use crate::scanner::RawBlock;

/// One annotated type declaration, i.e. one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Type name as written in the source
    pub name: String,
    /// Table name (metadata `TableName`, else the normalized name)
    pub table_name: String,
    /// Properties in source order
    pub properties: Vec<Property>,
    /// File the declaration was read from, when known
    pub source_path: Option<PathBuf>,
}

impl Declaration {
    /// Create a declaration with the normalized table name and no properties
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            table_name: normalize(&name),
            name,
            properties: Vec::new(),
            source_path: None,
        }
    }

    /// Create from a scanned block, its decoded metadata and its properties
    pub fn from_raw(
        raw: &RawBlock<'_>,
        options: DeclarationOptions,
        properties: Vec<Property>,
        source_path: Option<&Path>,
    ) -> Self {
        let table_name = if options.table_name.is_empty() {
            normalize(raw.name)
        } else {
            options.table_name
        };

        Self {
            name: raw.name.to_string(),
            table_name,
            properties,
            source_path: source_path.map(Path::to_path_buf),
        }
    }

    /// Builder: override the table name
    pub fn table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Builder: add a property
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Find a property by its source name
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}
