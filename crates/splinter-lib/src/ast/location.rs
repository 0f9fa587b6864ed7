//! Source positions attached to tokens and AST nodes.

use rowan::{TextRange, TextSize};
use serde::Serialize;

/// Position of a node in the query text.
///
/// Lines and columns are 1-based and count characters; `end_line`/`end_column`
/// address the last character of the node. Offsets are byte offsets with an
/// exclusive end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl SourceLocation {
    /// Whether `other` lies within this location (by byte offsets).
    pub fn contains(&self, other: &SourceLocation) -> bool {
        self.start_offset <= other.start_offset && other.end_offset <= self.end_offset
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(
            TextSize::from(self.start_offset as u32),
            TextSize::from(self.end_offset as u32),
        )
    }
}

/// Maps byte offsets to line/column pairs.
#[derive(Debug, Clone)]
pub struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub fn new(source: &'s str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .char_indices()
                .filter(|&(_, c)| c == '\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based line and character column of a byte offset.
    pub fn line_col(&self, offset: TextSize) -> (u32, u32) {
        let offset = usize::from(offset).min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count();
        (line as u32 + 1, column as u32 + 1)
    }

    pub fn location(&self, range: TextRange) -> SourceLocation {
        let start: usize = range.start().into();
        let end: usize = range.end().into();
        let (start_line, start_column) = self.line_col(range.start());

        let last_char = self.source[start..end]
            .char_indices()
            .last()
            .map(|(i, _)| start + i);
        let (end_line, end_column) = match last_char {
            Some(pos) => self.line_col(TextSize::from(pos as u32)),
            None => (start_line, start_column),
        };

        SourceLocation {
            start_line,
            start_column,
            end_line,
            end_column,
            start_offset: start,
            end_offset: end,
        }
    }
}
