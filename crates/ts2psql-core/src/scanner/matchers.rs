//! Compiled annotation grammar

use regex::Regex;

use crate::error::Result;

/// Tag recognized inside annotation comments when none is configured.
pub const DEFAULT_TAG: &str = "ts2psql";

/// The compiled patterns for one annotation tag.
///
/// Built once per run and lent to every `BlockScanner` and `PropertyScanner`.
#[derive(Debug, Clone)]
pub struct AnnotationMatchers {
    tag: String,
    block_start: Regex,
    block_end: Regex,
    property: Regex,
}

impl AnnotationMatchers {
    /// Create matchers for the default `ts2psql` tag
    pub fn new() -> Result<Self> {
        Self::with_tag(DEFAULT_TAG)
    }

    /// Create matchers for a custom tag. The tag is matched literally.
    pub fn with_tag(tag: &str) -> Result<Self> {
        let tag_pattern = regex::escape(tag);

        // /* <tag> {metadata} */ export type Name = {
        let block_start = Regex::new(&format!(
            r"/\*\s*{tag_pattern}\s*(\{{?.*\}}?)\s*\*/\s*export\s+type\s+([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=\s*\{{"
        ))?;

        // /* <tag> end */
        let block_end = Regex::new(&format!(r"/\*\s*{tag_pattern}\s*end\s*\*/"))?;

        // /* <tag> {metadata} */ name?: type
        let property = Regex::new(&format!(
            r"/\*\s*{tag_pattern}\s*(\{{?.*\}}?)\s*\*/\s*([a-zA-Z_$][a-zA-Z0-9_$]*)(\?)?:\s*([a-zA-Z_$][a-zA-Z0-9_$]*)"
        ))?;

        Ok(Self {
            tag: tag.to_string(),
            block_start,
            block_end,
            property,
        })
    }

    /// The tag these matchers were built for
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn block_start(&self) -> &Regex {
        &self.block_start
    }

    pub(crate) fn block_end(&self) -> &Regex {
        &self.block_end
    }

    pub(crate) fn property(&self) -> &Regex {
        &self.property
    }
}
