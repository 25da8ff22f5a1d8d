//! Declaration block scanner

use super::AnnotationMatchers;
use crate::error::{Result, Ts2PsqlError};

/// One annotated declaration region, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'t> {
    /// Metadata object text from the start comment (may be empty)
    pub metadata: &'t str,
    /// Declared type name
    pub name: &'t str,
    /// Text between the opening brace and the end marker
    pub body: &'t str,
    /// Byte offset of the start marker in the scanned text
    pub offset: usize,
}

/// Iterates over the declaration blocks of a text buffer.
///
/// Each step searches for the next start marker from the cursor, then for the
/// first end marker after it, and moves the cursor past that end marker. A
/// start marker without an end marker yields `Ts2PsqlError::UnterminatedBlock`
/// and ends the iteration. Creating a new scanner over the same text replays
/// the same sequence.
#[derive(Debug, Clone)]
pub struct BlockScanner<'m, 't> {
    matchers: &'m AnnotationMatchers,
    text: &'t str,
    cursor: usize,
    finished: bool,
}

impl<'m, 't> BlockScanner<'m, 't> {
    pub fn new(matchers: &'m AnnotationMatchers, text: &'t str) -> Self {
        Self {
            matchers,
            text,
            cursor: 0,
            finished: false,
        }
    }

    /// Byte position the next search starts from
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn unterminated(&self, name: &str, offset: usize) -> Ts2PsqlError {
        let line = self.text[..offset].matches('\n').count() + 1;
        Ts2PsqlError::UnterminatedBlock {
            name: name.to_string(),
            tag: self.matchers.tag().to_string(),
            line,
            offset,
        }
    }
}

impl<'t> Iterator for BlockScanner<'_, 't> {
    type Item = Result<RawBlock<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // The cursor only ever lands on a match end, so it is a char boundary
        let text = self.text;
        let rest = &text[self.cursor..];
        let Some(start) = self.matchers.block_start().captures(rest) else {
            self.finished = true;
            return None;
        };

        let (Some(whole), Some(name)) = (start.get(0), start.get(2)) else {
            self.finished = true;
            return None;
        };
        let metadata = start.get(1).map_or("", |m| m.as_str());
        let offset = self.cursor + whole.start();

        let after_start = &rest[whole.end()..];
        let Some(end) = self.matchers.block_end().find(after_start) else {
            self.finished = true;
            return Some(Err(self.unterminated(name.as_str(), offset)));
        };

        let block = RawBlock {
            metadata,
            name: name.as_str(),
            body: &after_start[..end.start()],
            offset,
        };
        self.cursor += whole.end() + end.end();

        Some(Ok(block))
    }
}

impl std::iter::FusedIterator for BlockScanner<'_, '_> {}
