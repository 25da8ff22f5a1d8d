//! Error types for ts2psql

use std::path::PathBuf;

use thiserror::Error;

use crate::service::Diagnostic;

/// Core error type for ts2psql operations
#[derive(Error, Debug)]
pub enum Ts2PsqlError {
    /// A declaration start marker was found with no end marker after it.
    #[error(
        "Unterminated declaration `{name}` at line {line}: no `/* {tag} end */` marker follows it"
    )]
    UnterminatedBlock {
        name: String,
        tag: String,
        line: usize,
        offset: usize,
    },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid schema: {} diagnostic(s), first: {}", .diagnostics.len(), first_diagnostic(.diagnostics))]
    InvalidSchema { diagnostics: Vec<Diagnostic> },

    /// An error raised while parsing the file at `path`.
    #[error("{}: {error}", .path.display())]
    InSource {
        path: PathBuf,
        error: Box<Ts2PsqlError>,
    },
}

impl Ts2PsqlError {
    /// Attach the path of the file being parsed.
    pub fn in_source(self, path: impl Into<PathBuf>) -> Self {
        Ts2PsqlError::InSource {
            path: path.into(),
            error: Box::new(self),
        }
    }
}

fn first_diagnostic(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Result type alias for ts2psql operations
pub type Result<T> = std::result::Result<T, Ts2PsqlError>;
