//! Schema builder

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::metadata::{self, Decoded};
use crate::models::{Declaration, Property, Schema};
use crate::scanner::{AnnotationMatchers, BlockScanner, PropertyScanner, RawBlock};

/// One input file of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Accumulates declarations from the inputs of one run.
///
/// Sources are parsed independently, in the order they are added; the
/// resulting `Schema` keeps that order.
#[derive(Debug)]
pub struct SchemaBuilder<'m> {
    matchers: &'m AnnotationMatchers,
    declarations: Vec<Declaration>,
}

impl<'m> SchemaBuilder<'m> {
    pub fn new(matchers: &'m AnnotationMatchers) -> Self {
        Self {
            matchers,
            declarations: Vec::new(),
        }
    }

    /// Parse one source file and append its declarations.
    ///
    /// Returns the number of declarations found. A structural error is
    /// reported with the file path attached and leaves the builder unchanged.
    pub fn add_source(&mut self, source: &SourceFile) -> Result<usize> {
        let declarations = self
            .parse_text(&source.text, Some(&source.path))
            .map_err(|e| e.in_source(&source.path))?;

        tracing::debug!(
            path = %source.path.display(),
            declarations = declarations.len(),
            "Parsed source"
        );

        let count = declarations.len();
        self.declarations.extend(declarations);
        Ok(count)
    }

    /// Parse every declaration block of `text`, in text order.
    pub fn parse_text(&self, text: &str, path: Option<&Path>) -> Result<Vec<Declaration>> {
        BlockScanner::new(self.matchers, text)
            .map(|block| block.map(|block| self.build_declaration(&block, path)))
            .collect()
    }

    fn build_declaration(&self, block: &RawBlock<'_>, path: Option<&Path>) -> Declaration {
        let options = match metadata::decode_declaration(block.metadata) {
            Decoded::Fallback { reason } => {
                tracing::debug!(
                    declaration = block.name,
                    %reason,
                    "Ignoring malformed declaration metadata"
                );
                Default::default()
            }
            decoded => decoded.into_options(),
        };

        let properties = PropertyScanner::new(self.matchers, block.body)
            .map(|raw| {
                let options = match metadata::decode_property(raw.metadata) {
                    Decoded::Fallback { reason } => {
                        tracing::debug!(
                            declaration = block.name,
                            property = raw.name,
                            %reason,
                            "Ignoring malformed property metadata"
                        );
                        Default::default()
                    }
                    decoded => decoded.into_options(),
                };
                Property::from_raw(&raw, options)
            })
            .collect();

        Declaration::from_raw(block, options, properties, path)
    }

    /// Declarations collected so far
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Finish the run's first phase
    pub fn build(self) -> Schema {
        Schema::new(self.declarations)
    }
}

/// Parse all sources of a run, in the order supplied.
///
/// The first structural error aborts the run.
pub fn parse_sources(matchers: &AnnotationMatchers, sources: &[SourceFile]) -> Result<Schema> {
    let mut builder = SchemaBuilder::new(matchers);
    for source in sources {
        builder.add_source(source)?;
    }
    Ok(builder.build())
}
