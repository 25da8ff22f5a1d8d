//! Generation diagnostics
//!
//! Unknown type tokens and unresolved foreign key targets do not stop
//! generation. They are rendered into the SQL as bracketed markers, for
//! compatibility with existing outputs, and reported here as structured
//! values so the caller can decide whether they are fatal.

use super::GeneratedStatement;
use crate::error::{Result, Ts2PsqlError};

/// A semantic problem found while rendering one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The property's type token is not one of `string`, `number`, `boolean`, `Date`
    UnknownType {
        declaration: String,
        property: String,
        type_token: String,
    },
    /// The foreign key names a declaration that is not part of the run
    UnresolvedForeignKey {
        declaration: String,
        property: String,
        target: String,
    },
}

impl Diagnostic {
    /// Name of the declaration the diagnostic belongs to
    pub fn declaration(&self) -> &str {
        match self {
            Diagnostic::UnknownType { declaration, .. }
            | Diagnostic::UnresolvedForeignKey { declaration, .. } => declaration,
        }
    }

    /// Name of the offending property
    pub fn property(&self) -> &str {
        match self {
            Diagnostic::UnknownType { property, .. }
            | Diagnostic::UnresolvedForeignKey { property, .. } => property,
        }
    }

    /// The bracketed text rendered into the SQL in place of the bad value
    pub fn marker(&self) -> String {
        match self {
            Diagnostic::UnknownType { type_token, .. } => {
                format!("[ERROR: \"{}\" is not a valid type name]", type_token)
            }
            Diagnostic::UnresolvedForeignKey { target, .. } => format!(
                "[ERROR: \"{}\" is not a valid foreign key type. It does not match any of the type definition names]",
                target
            ),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::UnknownType {
                declaration,
                property,
                type_token,
            } => write!(
                f,
                "{}.{}: \"{}\" is not a valid type name",
                declaration, property, type_token
            ),
            Diagnostic::UnresolvedForeignKey {
                declaration,
                property,
                target,
            } => write!(
                f,
                "{}.{}: foreign key type \"{}\" does not match any type definition",
                declaration, property, target
            ),
        }
    }
}

/// How diagnostics affect a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Keep the markers in the output and succeed
    #[default]
    Lenient,
    /// Fail when any statement carries a diagnostic
    Strict,
}

impl ErrorPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Lenient
        }
    }

    /// Apply the policy to a set of generated statements.
    pub fn check(&self, statements: &[GeneratedStatement]) -> Result<()> {
        if *self == ErrorPolicy::Lenient {
            return Ok(());
        }

        let diagnostics: Vec<Diagnostic> = statements
            .iter()
            .flat_map(|s| s.diagnostics.iter().cloned())
            .collect();

        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(Ts2PsqlError::InvalidSchema { diagnostics })
        }
    }
}
