//! ts2psql Core - Annotated type declarations to PostgreSQL DDL
//!
//! This crate turns specially-marked comments inside TypeScript sources into
//! `CREATE TABLE` statements. It provides:
//!
//! - `AnnotationMatchers` - the compiled annotation grammar for one tag
//! - `BlockScanner` / `PropertyScanner` - cursor-based scanners over raw text
//! - `metadata` - lenient decoding of the embedded JSON options
//! - `SchemaBuilder` - composes scanner output into `Declaration` models
//! - `DdlGenerator` - renders declarations, resolving foreign keys across a run
//!
//! ## Usage
//!
//! ```rust
//! use ts2psql_core::{AnnotationMatchers, DdlGenerator, SourceFile, parse_sources};
//!
//! let text = r#"
//! /* ts2psql */
//! export type User = {
//!   /* ts2psql { "primaryKey": true, "serial": true } */
//!   id: number
//! }
//! /* ts2psql end */
//! "#;
//!
//! let matchers = AnnotationMatchers::new()?;
//! let schema = parse_sources(&matchers, &[SourceFile::new("user.ts", text)])?;
//! let statements = DdlGenerator::generate_all(&schema);
//!
//! assert_eq!(
//!     statements[0].sql,
//!     "CREATE TABLE user ( \n  id INTEGER serial PRIMARY KEY NOT NULL\n);"
//! );
//! # Ok::<(), ts2psql_core::Ts2PsqlError>(())
//! ```

mod error;
pub mod metadata;
pub mod models;
pub mod naming;
pub mod scanner;
pub mod schema;
pub mod service;

pub use error::*;
pub use models::{Declaration, ForeignKey, Property, Schema};
pub use naming::normalize;
pub use scanner::{AnnotationMatchers, BlockScanner, PropertyScanner, RawBlock, RawProperty};
pub use schema::{SchemaBuilder, SourceFile, parse_sources};
pub use service::{DdlGenerator, Diagnostic, ErrorPolicy, GeneratedStatement};
