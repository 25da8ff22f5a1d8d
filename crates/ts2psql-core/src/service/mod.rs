//! Service layer
//!
//! Provides DDL generation and the diagnostics it reports.

mod ddl_generator;
mod diagnostics;

pub use ddl_generator::{DdlGenerator, GeneratedStatement};
pub use diagnostics::{Diagnostic, ErrorPolicy};
