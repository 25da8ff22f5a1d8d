//! DDL generation for declarations
//!
//! Generates PostgreSQL `CREATE TABLE` statements. Each declaration renders
//! independently, but foreign key targets are resolved against every
//! declaration of the run, so the whole `Schema` must be parsed first.

use super::Diagnostic;
use crate::models::{Declaration, ForeignKey, Property, Schema};

/// Length used for `string` columns without `MaxLength`
pub const DEFAULT_VARCHAR_LENGTH: u32 = 50;

/// One rendered statement and the problems found while rendering it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStatement {
    /// Source name of the declaration
    pub declaration: String,
    /// Table the statement creates
    pub table_name: String,
    /// The `CREATE TABLE` text, including any bracketed error markers
    pub sql: String,
    /// One entry per marker rendered into `sql`
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratedStatement {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// DDL Generator for creating SQL statements from declarations
///
/// This is a stateless utility. Unknown types and unresolved foreign keys
/// never abort generation: they are rendered as bracketed markers and
/// reported in `GeneratedStatement::diagnostics`.
pub struct DdlGenerator;

impl DdlGenerator {
    /// Generate statements for every declaration of the run, in order
    pub fn generate_all(schema: &Schema) -> Vec<GeneratedStatement> {
        schema
            .iter()
            .map(|declaration| Self::generate_create_table(declaration, schema))
            .collect()
    }

    /// Generate the CREATE TABLE statement for one declaration
    pub fn generate_create_table(declaration: &Declaration, schema: &Schema) -> GeneratedStatement {
        let mut diagnostics = Vec::new();

        let column_defs: Vec<String> = declaration
            .properties
            .iter()
            .map(|property| {
                Self::generate_column_definition(declaration, property, schema, &mut diagnostics)
            })
            .collect();

        let mut sql = String::new();
        sql.push_str("CREATE TABLE ");
        sql.push_str(&declaration.table_name);
        sql.push_str(" ( \n  ");
        sql.push_str(&column_defs.join(",\n  "));
        sql.push_str("\n);");

        GeneratedStatement {
            declaration: declaration.name.clone(),
            table_name: declaration.table_name.clone(),
            sql,
            diagnostics,
        }
    }

    /// Join statements into one script, separated by a blank line
    pub fn render_script(statements: &[GeneratedStatement]) -> String {
        statements
            .iter()
            .map(|s| s.sql.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Map a property's source type token to its SQL type.
    ///
    /// Returns `None` for tokens outside `string`, `number`, `boolean`, `Date`.
    pub fn sql_type(property: &Property) -> Option<String> {
        match property.source_type_token.as_str() {
            "string" => {
                let length = if property.max_length == 0 {
                    DEFAULT_VARCHAR_LENGTH
                } else {
                    property.max_length
                };
                Some(format!("VARCHAR({})", length))
            }
            "number" => {
                if property.number_type.is_empty() {
                    Some("INTEGER".to_string())
                } else {
                    Some(property.number_type.clone())
                }
            }
            "boolean" => Some("BOOLEAN".to_string()),
            "Date" => Some("TIMESTAMP".to_string()),
            _ => None,
        }
    }

    /// Generate a column definition, e.g. `id INTEGER serial PRIMARY KEY NOT NULL`,
    /// followed by its foreign key clause when the property has one.
    fn generate_column_definition(
        declaration: &Declaration,
        property: &Property,
        schema: &Schema,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        let sql_type = Self::sql_type(property).unwrap_or_else(|| {
            let diagnostic = Diagnostic::UnknownType {
                declaration: declaration.name.clone(),
                property: property.name.clone(),
                type_token: property.source_type_token.clone(),
            };
            let marker = diagnostic.marker();
            diagnostics.push(diagnostic);
            marker
        });

        let mut def = format!("{} {} ", property.column_name, sql_type);

        if property.serial {
            def.push_str("serial ");
        }
        if property.primary_key {
            def.push_str("PRIMARY KEY ");
        }
        if property.unique {
            def.push_str("UNIQUE ");
        }
        if !property.optional {
            def.push_str("NOT NULL ");
        }

        let mut def = def.trim().to_string();

        if let Some(fk) = &property.foreign_key {
            def.push_str(&Self::generate_foreign_key_clause(
                declaration,
                property,
                fk,
                schema,
                diagnostics,
            ));
        }

        def.trim().to_string()
    }

    fn generate_foreign_key_clause(
        declaration: &Declaration,
        property: &Property,
        fk: &ForeignKey,
        schema: &Schema,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> String {
        let target_table = match schema.table_name_of(&fk.target_type_name) {
            Some(table) => table.to_string(),
            None => {
                let diagnostic = Diagnostic::UnresolvedForeignKey {
                    declaration: declaration.name.clone(),
                    property: property.name.clone(),
                    target: fk.target_type_name.clone(),
                };
                let marker = diagnostic.marker();
                diagnostics.push(diagnostic);
                marker
            }
        };

        format!(
            ",\n  FOREIGN KEY ({})\n    REFERENCES {} ({})",
            property.column_name, target_table, fk.target_property
        )
    }
}
