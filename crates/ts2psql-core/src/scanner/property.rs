//! Property line scanner

use super::AnnotationMatchers;

/// One annotated property line inside a declaration body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawProperty<'t> {
    /// Metadata object text from the property comment (may be empty)
    pub metadata: &'t str,
    /// Property name
    pub name: &'t str,
    /// Whether the name carried the `?` marker
    pub optional: bool,
    /// Type token after the colon, unvalidated
    pub type_token: &'t str,
}

/// Iterates over the annotated properties of a declaration body, in source order.
///
/// Stops at the first position with no further match; trailing text such as
/// the closing brace is ignored.
#[derive(Debug, Clone)]
pub struct PropertyScanner<'m, 't> {
    matchers: &'m AnnotationMatchers,
    body: &'t str,
    cursor: usize,
}

impl<'m, 't> PropertyScanner<'m, 't> {
    pub fn new(matchers: &'m AnnotationMatchers, body: &'t str) -> Self {
        Self {
            matchers,
            body,
            cursor: 0,
        }
    }
}

impl<'t> Iterator for PropertyScanner<'_, 't> {
    type Item = RawProperty<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let body = self.body;
        let rest = &body[self.cursor..];
        let caps = self.matchers.property().captures(rest)?;

        let whole = caps.get(0)?;
        let name = caps.get(2)?;
        let type_token = caps.get(4)?;

        self.cursor += whole.end();

        Some(RawProperty {
            metadata: caps.get(1).map_or("", |m| m.as_str()),
            name: name.as_str(),
            optional: caps.get(3).is_some(),
            type_token: type_token.as_str(),
        })
    }
}
