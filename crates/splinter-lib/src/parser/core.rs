//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Lexeme, lexeme_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::patterns;

/// Nesting depth allowed before the parser gives up on a subtree.
pub const DEFAULT_RECURSION_LIMIT: u32 = 128;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia lexemes are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Lexeme>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Lexeme>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    /// Keyword of every command being parsed, innermost last.
    pub(super) command_stack: Vec<SyntaxKind>,
    pub(super) debug_fuel: Cell<u32>,
    recursion_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Lexeme>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            command_stack: Vec::with_capacity(4),
            debug_fuel: Cell::new(256),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn finish(mut self) -> (GreenNode, Diagnostics) {
        self.eat_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    /// Kind at `pos + lookahead` without skipping trivia; `Error` past the end.
    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| lexeme_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Whether the current position ends a pipeline stage (`|`, `]` or EOF).
    pub(super) fn at_stage_end(&mut self) -> bool {
        matches!(
            self.current(),
            SyntaxKind::Pipe | SyntaxKind::RBracket | SyntaxKind::Error
        )
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if count == n {
                    return kind;
                }
                count += 1;
            }
            pos += 1;
        }
        SyntaxKind::Error
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Whether the raw lexeme at `pos` continues the previous token with no
    /// trivia between them.
    pub(super) fn glued(&self) -> bool {
        self.pos > 0
            && self
                .tokens
                .get(self.pos)
                .is_some_and(|t| !t.kind.is_trivia())
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for lexeme in self.trivia_buffer.drain(..) {
            let text = lexeme_text(self.source, &lexeme);
            self.builder.token(lexeme.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let lexeme = self.tokens[self.pos];
        let text = lexeme_text(self.source, &lexeme);
        self.builder.token(lexeme.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        false
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Usage line of the innermost keyword command, attached to its errors.
    fn usage_hint(&self) -> Option<String> {
        let name = self.command_stack.last()?.command_name()?;
        patterns::usage(name).map(|usage| format!("usage: {}", usage))
    }

    fn emit(&mut self, kind: DiagnosticKind, range: TextRange, message: Option<String>) {
        if !self.should_report(range.start()) {
            return;
        }
        let hint = self.usage_hint();
        let mut builder = self.diagnostics.report(kind, range);
        if let Some(message) = message {
            builder = builder.message(message);
        }
        if let Some(hint) = hint {
            builder = builder.hint(hint);
        }
        builder.emit();
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        self.emit(kind, range, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        self.emit(kind, range, Some(message.into()));
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Reports the current token and skips to the end of the stage.
    ///
    /// Skipped tokens are wrapped in an `Error` node. Brackets and parentheses
    /// opened inside the skipped region are balanced, so a `|` inside a nested
    /// subsearch does not end the stage early.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        if self.at_stage_end() {
            self.error_msg(kind, message);
            return;
        }

        tracing::trace!(offset = u32::from(self.current_span().start()), "resynchronizing");
        self.start_node(SyntaxKind::Error);
        self.error_msg(kind, message);
        self.skip_balanced(true);
        self.finish_node();
    }

    /// Bumps tokens until a depth-0 `]` (and `|` when `stop_at_pipe`) or EOF.
    pub(super) fn skip_balanced(&mut self, stop_at_pipe: bool) {
        let mut depth = 0u32;
        loop {
            match self.current() {
                SyntaxKind::Error => break,
                SyntaxKind::Pipe if stop_at_pipe && depth == 0 => break,
                SyntaxKind::RBracket if depth == 0 => break,
                SyntaxKind::LBracket | SyntaxKind::LParen => depth += 1,
                SyntaxKind::RBracket | SyntaxKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
    }

    /// Returns `false` once nesting reaches the configured limit; the caller
    /// then swallows its subtree via [`Self::skip_balanced`].
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            let range = self.current_span();
            if self
                .diagnostics
                .iter()
                .all(|d| d.kind != DiagnosticKind::RecursionLimitExceeded)
            {
                self.emit(DiagnosticKind::RecursionLimitExceeded, range, None);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    /// Wraps the rest of a too-deep subtree in an `Error` node.
    pub(super) fn swallow_too_deep(&mut self, stop_at_pipe: bool) {
        self.start_node(SyntaxKind::Error);
        self.skip_balanced(stop_at_pipe);
        self.finish_node();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Consumes `close` or reports the delimiter opened at `open` as unclosed.
    pub(super) fn close_delimiter(&mut self, close: SyntaxKind, kind: DiagnosticKind) {
        let open = self.pop_delimiter();
        if self.eat_token(close) {
            return;
        }
        let Some(open) = open else {
            return;
        };
        let related = match open.kind {
            SyntaxKind::LBracket => "subsearch starts here",
            _ => "opening `(` is here",
        };
        self.error_unclosed_delimiter(kind, related, open.span);
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        // Full range so the report covers everything the delimiter swallowed.
        let full_range = TextRange::new(open_range.start(), current.end());
        let hint = self.usage_hint();
        let mut builder = self
            .diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open_range);
        if let Some(hint) = hint {
            builder = builder.hint(hint);
        }
        builder.emit();
    }
}
