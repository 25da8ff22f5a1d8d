//! Annotation scanning
//!
//! Cursor-based scanners that locate annotated declaration blocks and the
//! annotated property lines inside them. The scanners only find text; decoding
//! metadata and applying naming rules happens in the schema builder.

mod block;
mod matchers;
mod property;

#[cfg(test)]
mod tests;

pub use block::{BlockScanner, RawBlock};
pub use matchers::{AnnotationMatchers, DEFAULT_TAG};
pub use property::{PropertyScanner, RawProperty};
