//! Property model

use super::ForeignKey;
use crate::metadata::PropertyOptions;
use crate::naming::normalize;
use crate::scanner::RawProperty;

/// One annotated property of a declaration, i.e. one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name as written in the source
    pub name: String,
    /// Column name (metadata `ColumnName`, else the normalized name)
    pub column_name: String,
    /// Type token as written in the source, unvalidated
    pub source_type_token: String,
    /// Whether the property was marked with `?`
    pub optional: bool,
    pub primary_key: bool,
    pub serial: bool,
    pub unique: bool,
    /// `VARCHAR` length for strings; 0 means the default length
    pub max_length: u32,
    /// SQL type overriding `INTEGER` for numbers; empty means unset
    pub number_type: String,
    pub foreign_key: Option<ForeignKey>,
}

impl Property {
    /// Create a required property with default options
    pub fn new(name: impl Into<String>, source_type_token: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            column_name: normalize(&name),
            name,
            source_type_token: source_type_token.into(),
            optional: false,
            primary_key: false,
            serial: false,
            unique: false,
            max_length: 0,
            number_type: String::new(),
            foreign_key: None,
        }
    }

    /// Create from scanned text and its decoded metadata
    pub fn from_raw(raw: &RawProperty<'_>, options: PropertyOptions) -> Self {
        let column_name = if options.column_name.is_empty() {
            normalize(raw.name)
        } else {
            options.column_name
        };

        let foreign_key = (!options.fk.type_name.is_empty())
            .then(|| ForeignKey::new(options.fk.type_name, options.fk.property));

        Self {
            name: raw.name.to_string(),
            column_name,
            source_type_token: raw.type_token.to_string(),
            optional: raw.optional,
            primary_key: options.primary_key,
            serial: options.serial,
            unique: options.unique,
            max_length: options.max_length,
            number_type: options.number_type,
            foreign_key,
        }
    }

    /// Builder: override the column name
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Builder: mark as optional (nullable)
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Builder: set as primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Builder: set as serial
    pub fn serial(mut self) -> Self {
        self.serial = true;
        self
    }

    /// Builder: set as unique
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Builder: set string length
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Builder: set number type
    pub fn number_type(mut self, number_type: impl Into<String>) -> Self {
        self.number_type = number_type.into();
        self
    }

    /// Builder: reference another declaration
    pub fn references(
        mut self,
        target_type_name: impl Into<String>,
        target_property: impl Into<String>,
    ) -> Self {
        self.foreign_key = Some(ForeignKey::new(target_type_name, target_property));
        self
    }
}
