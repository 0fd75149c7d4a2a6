//! Parse Utilities
//!
//! Source files, locations and spans shared by the template and expression ASTs.

use serde::{Deserialize, Serialize};
use std::fmt;

const NEWLINE: u8 = b'\n';

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseSourceFile {
    pub content: String,
    pub url: String,
}

impl ParseSourceFile {
    pub fn new(content: String, url: String) -> Self {
        ParseSourceFile { content, url }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseLocation {
    pub file: ParseSourceFile,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(file: ParseSourceFile, offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { file, offset, line, col }
    }

    pub fn move_by(&self, delta: i32) -> ParseLocation {
        let source = self.file.content.as_bytes();
        let len = source.len();
        let mut offset = self.offset;
        let mut line = self.line;
        let mut col = self.col;
        let mut delta = delta;

        // Move backward
        while offset > 0 && delta < 0 {
            offset -= 1;
            delta += 1;
            if source[offset] == NEWLINE {
                line -= 1;
                col = match self.file.content[..offset].rfind('\n') {
                    Some(prior_line) => offset - prior_line - 1,
                    None => offset,
                };
            } else {
                col -= 1;
            }
        }

        // Move forward
        while offset < len && delta > 0 {
            let ch = source[offset];
            offset += 1;
            delta -= 1;
            if ch == NEWLINE {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }

        ParseLocation::new(self.file.clone(), offset, line, col)
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.file.url, self.line, self.col)
    }
}

/// A range of authored source text.
///
/// `Display` yields the covered text, not the location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
    pub details: Option<String>,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end, details: None }
    }

    /// Builds a span from absolute offsets into `file`, computing line and column.
    pub fn from_offsets(file: &ParseSourceFile, start: usize, end: usize) -> Self {
        let origin = ParseLocation::new(file.clone(), 0, 0, 0);
        let start_loc = origin.move_by(start as i32);
        let end_loc = start_loc.move_by(end.saturating_sub(start) as i32);
        ParseSourceSpan::new(start_loc, end_loc)
    }

    pub fn url(&self) -> &str {
        &self.start.file.url
    }

    pub fn length(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }
}

impl fmt::Display for ParseSourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = &self.start.file.content;
        let text = content
            .get(self.start.offset..self.end.offset)
            .unwrap_or_default();
        write!(f, "{}", text)
    }
}
