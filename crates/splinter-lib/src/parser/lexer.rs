//! Lexer for SPL.
//!
//! Two layers:
//! - [`lex`]: zero-copy lexemes (kind + span, trivia included) consumed by the parser
//! - [`tokenize`]: the public token stream with line/column positions and lexical errors
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` lexemes
//! rather than producing one error per character. Each `Garbage` run becomes one
//! [`LexError`]; scanning always continues after it.
//!
//! ## Wildcard fields
//!
//! Logos cannot tell `host*` (a field pattern) from `price*quantity` (a product),
//! so wildcard fields are assembled after the fact. A run of adjacent words and
//! `*` becomes one `WildcardField` only when no `*` sits between two words and
//! the run is delimited on both sides (see [`is_open_before`], [`is_open_after`]).

use logos::Logos;
use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};
use std::ops::Range;

use super::cst::SyntaxKind;
use crate::ast::location::LineIndex;

/// Zero-copy lexeme: kind + span, text retrieved via [`lexeme_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Lexeme {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into span-based lexemes, trivia included.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` lexemes
/// - Merges delimited `word*` / `*word` runs into `WildcardField`
pub fn lex(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    lexemes.push(Lexeme::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                lexemes.push(Lexeme::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    lexemes.push(Lexeme::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    merge_wildcards(lexemes)
}

/// Retrieves the text slice for a lexeme. O(1) slice into source.
#[inline]
pub fn lexeme_text<'s>(source: &'s str, lexeme: &Lexeme) -> &'s str {
    &source[Range::<usize>::from(lexeme.span)]
}

fn is_wildcard_part(kind: SyntaxKind) -> bool {
    kind.is_word() || kind == SyntaxKind::NumberLiteral || kind == SyntaxKind::Multiply
}

fn is_open_before(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    kind.is_trivia()
        || matches!(
            kind,
            Comma | LParen | LBracket | Pipe | Equals | NotEquals
        )
}

fn is_open_after(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    kind.is_trivia() || matches!(kind, Comma | RParen | RBracket | Pipe)
}

/// Tokens after which a spaced `*` reads as multiplication.
fn ends_operand(kind: SyntaxKind) -> bool {
    use SyntaxKind::*;
    matches!(
        kind,
        Identifier | NumberLiteral | StringLiteral | BooleanLiteral | TimeModifier | RParen
    )
}

fn merge_wildcards(lexemes: Vec<Lexeme>) -> Vec<Lexeme> {
    let mut out = Vec::with_capacity(lexemes.len());
    let mut i = 0;

    while i < lexemes.len() {
        if !is_wildcard_part(lexemes[i].kind) {
            out.push(lexemes[i]);
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < lexemes.len() && is_wildcard_part(lexemes[end].kind) {
            end += 1;
        }

        let run = &lexemes[i..end];
        if forms_wildcard(&lexemes, i, end) {
            let span = TextRange::new(run[0].span.start(), run[run.len() - 1].span.end());
            out.push(Lexeme::new(SyntaxKind::WildcardField, span));
        } else {
            out.extend_from_slice(run);
        }
        i = end;
    }

    out
}

fn forms_wildcard(lexemes: &[Lexeme], start: usize, end: usize) -> bool {
    let run = &lexemes[start..end];
    let is_star = |l: &Lexeme| l.kind == SyntaxKind::Multiply;

    let Some(first_word) = run.iter().position(|l| !is_star(l)) else {
        return false;
    };
    let Some(last_word) = run.iter().rposition(|l| !is_star(l)) else {
        return false;
    };
    if !run.iter().any(is_star) || run[first_word..=last_word].iter().any(is_star) {
        return false;
    }

    let before = start.checked_sub(1).map(|p| lexemes[p].kind);
    let after = lexemes.get(end).map(|l| l.kind);
    if !before.is_none_or(is_open_before) || !after.is_none_or(is_open_after) {
        return false;
    }

    // `price *quantity`: a leading star after an operand is multiplication.
    if is_star(&run[0]) && before.is_some() {
        let operand_before = lexemes[..start]
            .iter()
            .rev()
            .find(|l| !l.kind.is_trivia())
            .is_some_and(|l| ends_operand(l.kind));
        if operand_before {
            return false;
        }
    }

    true
}

// ============================================================================
// Public token stream
// ============================================================================

/// Kind of a public token. Only token kinds ever appear here.
pub type TokenKind = SyntaxKind;

/// A non-trivia token with 1-based line/column positions.
///
/// `end_offset` is exclusive; `end_line`/`end_column` point at the last character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(serialize_with = "serialize_kind")]
    pub kind: TokenKind,
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Token {
    pub(crate) fn from_lexeme(source: &str, index: &LineIndex<'_>, lexeme: &Lexeme) -> Self {
        let location = index.location(lexeme.span);
        Self {
            kind: lexeme.kind,
            text: lexeme_text(source, lexeme).to_string(),
            start_offset: location.start_offset,
            end_offset: location.end_offset,
            start_line: location.start_line,
            start_column: location.start_column,
            end_line: location.end_line,
            end_column: location.end_column,
        }
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(
            TextSize::from(self.start_offset as u32),
            TextSize::from(self.end_offset as u32),
        )
    }
}

fn serialize_kind<S: Serializer>(kind: &TokenKind, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{:?}", kind))
}

/// An unrecognized character sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub text: String,
    pub offset: usize,
    pub length: usize,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokenizes `source` into the public token stream.
///
/// Never fails: unrecognized runs are reported in `errors` and skipped.
pub fn tokenize(source: &str) -> LexResult {
    let lexemes = lex(source);
    let index = LineIndex::new(source);
    split_lexemes(source, &index, &lexemes)
}

pub(crate) fn split_lexemes(source: &str, index: &LineIndex<'_>, lexemes: &[Lexeme]) -> LexResult {
    let mut result = LexResult::default();
    for lexeme in lexemes {
        match lexeme.kind {
            SyntaxKind::Garbage => result.errors.push(lex_error(source, index, lexeme)),
            kind if kind.is_trivia() => {}
            _ => result.tokens.push(Token::from_lexeme(source, index, lexeme)),
        }
    }
    result
}

fn lex_error(source: &str, index: &LineIndex<'_>, lexeme: &Lexeme) -> LexError {
    let text = lexeme_text(source, lexeme);
    let (line, column) = index.line_col(lexeme.span.start());
    LexError {
        message: format!("unrecognized input `{}`", text),
        text: text.to_string(),
        offset: lexeme.span.start().into(),
        length: lexeme.span.len().into(),
        line,
        column,
    }
}
