//! Productions shared by many commands: options, field lists, glued values
//! and the free-form argument list.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::FIELD_LIST_STOP;
use crate::parser::cst::{SyntaxKind, TokenSet};

/// Whether `kind` can start a field name.
pub(super) fn is_field_start(kind: SyntaxKind) -> bool {
    (kind.is_word() && !FIELD_LIST_STOP.contains(kind))
        || matches!(
            kind,
            SyntaxKind::WildcardField | SyntaxKind::Multiply | SyntaxKind::StringLiteral
        )
}

fn continues_field(kind: SyntaxKind) -> bool {
    kind.is_word()
        || matches!(
            kind,
            SyntaxKind::NumberLiteral
                | SyntaxKind::WildcardField
                | SyntaxKind::Multiply
                | SyntaxKind::Dot
                | SyntaxKind::Minus
        )
}

impl Parser<'_> {
    /// `name=value`, whitespace allowed around `=`.
    pub(crate) fn at_option(&mut self) -> bool {
        self.current().is_word() && self.next_is(SyntaxKind::Equals)
    }

    pub(crate) fn option_arg(&mut self) {
        self.start_node(SyntaxKind::OptionArg);
        self.bump(); // name
        self.expect(SyntaxKind::Equals, "=");

        self.start_node(SyntaxKind::OptionValue);
        if self.current().is_glue() || self.currently_is(SyntaxKind::LParen) {
            self.glued_run();
        } else {
            self.error_msg(DiagnosticKind::ExpectedValue, "after `=`");
        }
        self.finish_node();

        self.finish_node();
    }

    /// Bumps the current token and everything written directly after it.
    ///
    /// A `(` glued to the run is consumed with its balanced contents, so
    /// `startswith=eval(x>1)` stays one value.
    pub(crate) fn glued_run(&mut self) {
        if self.currently_is(SyntaxKind::LParen) {
            self.balanced_parens();
        } else {
            self.bump();
        }
        while self.glued() {
            let kind = self.nth_raw(0);
            if kind == SyntaxKind::LParen {
                self.balanced_parens();
            } else if kind.is_glue() {
                self.bump();
            } else {
                break;
            }
        }
    }

    /// `( ... )` with nested parentheses, stopping early at a stage boundary.
    fn balanced_parens(&mut self) {
        self.assert_current(SyntaxKind::LParen);
        self.push_delimiter(SyntaxKind::LParen);
        self.bump();
        let mut depth = 0u32;
        loop {
            match self.current() {
                SyntaxKind::Pipe | SyntaxKind::RBracket | SyntaxKind::Error => break,
                SyntaxKind::RParen if depth == 0 => break,
                SyntaxKind::LParen => depth += 1,
                SyntaxKind::RParen => depth -= 1,
                _ => {}
            }
            self.bump();
        }
        self.close_delimiter(SyntaxKind::RParen, DiagnosticKind::UnclosedParen);
    }

    /// A field name: a word, wildcard, quoted name, or a glued run of them (`a.b-c`).
    pub(crate) fn field_item(&mut self) {
        self.start_node(SyntaxKind::FieldItem);
        self.bump();
        while self.glued() && continues_field(self.nth_raw(0)) {
            self.bump();
        }
        self.finish_node();
    }

    /// Comma-optional field names up to a stage end, an option, or a token in `stop`.
    ///
    /// Returns the number of fields parsed.
    pub(crate) fn field_list(&mut self, stop: TokenSet) -> usize {
        self.field_list_impl(stop, false)
    }

    /// Like [`Self::field_list`], each field optionally followed by `AS alias`.
    pub(crate) fn aliased_field_list(&mut self, stop: TokenSet) -> usize {
        self.field_list_impl(stop, true)
    }

    fn field_list_impl(&mut self, stop: TokenSet, aliases: bool) -> usize {
        self.start_node(SyntaxKind::FieldList);
        let mut count = 0;
        loop {
            if self.at_stage_end() || self.currently_is_one_of(stop) || self.at_option() {
                break;
            }
            let kind = self.current();
            if kind == SyntaxKind::Comma {
                self.bump();
                continue;
            }
            if !is_field_start(kind) {
                break;
            }
            if aliases {
                self.aliased_field();
            } else {
                self.field_item();
            }
            count += 1;
        }
        self.finish_node();
        count
    }

    pub(crate) fn aliased_field(&mut self) {
        let checkpoint = self.checkpoint();
        self.field_item();
        if self.currently_is(SyntaxKind::As) {
            self.start_node_at(checkpoint, SyntaxKind::AliasedField);
            self.bump();
            self.alias_name();
            self.finish_node();
        }
    }

    /// The name after `AS`.
    pub(crate) fn alias_name(&mut self) {
        if is_field_start(self.current()) {
            self.field_item();
        } else {
            self.error_msg(DiagnosticKind::ExpectedField, "after `as`");
        }
    }

    /// `BY field, ...` (or `GROUPBY`).
    pub(crate) fn by_clause(&mut self) {
        self.start_node(SyntaxKind::ByClause);
        self.bump();
        if self.field_list(FIELD_LIST_STOP) == 0 {
            self.error_msg(DiagnosticKind::ExpectedField, "after `by`");
        }
        self.finish_node();
    }

    /// `OVER field`.
    pub(crate) fn over_clause(&mut self) {
        self.start_node(SyntaxKind::OverClause);
        self.bump();
        if is_field_start(self.current()) {
            self.field_item();
        } else {
            self.error_msg(DiagnosticKind::ExpectedField, "after `over`");
        }
        self.finish_node();
    }

    /// `fn(field) [AS alias]` as used by convert, sort and trendline.
    pub(crate) fn field_call(&mut self) {
        self.start_node(SyntaxKind::FieldCall);
        self.bump(); // function name
        self.push_delimiter(SyntaxKind::LParen);
        self.expect(SyntaxKind::LParen, "(");
        if is_field_start(self.current()) {
            self.field_item();
        }
        self.close_delimiter(SyntaxKind::RParen, DiagnosticKind::UnclosedParen);
        if self.eat_token(SyntaxKind::As) {
            self.alias_name();
        }
        self.finish_node();
    }

    /// Whether a `word(` call starts here.
    pub(crate) fn at_field_call(&mut self) -> bool {
        self.current().is_word() && self.next_is(SyntaxKind::LParen)
    }

    /// A lone number wrapped as a `Literal` (`head 10`, `top 5`).
    pub(crate) fn number_literal(&mut self) {
        self.start_node(SyntaxKind::Literal);
        self.bump();
        self.finish_node();
    }

    /// A single value wrapped as an `Argument`.
    pub(crate) fn argument(&mut self) {
        self.start_node(SyntaxKind::Argument);
        self.glued_run();
        self.finish_node();
    }

    /// Free-form command body: options, arguments with optional `AS` aliases,
    /// `BY`/`OVER` clauses and subsearches, in any order.
    pub(crate) fn argument_list(&mut self) {
        loop {
            if self.at_stage_end() {
                break;
            }
            match self.current() {
                SyntaxKind::LBracket => self.parse_subsearch(),
                SyntaxKind::Comma => self.bump(),
                SyntaxKind::By | SyntaxKind::Groupby => self.by_clause(),
                SyntaxKind::Over => self.over_clause(),
                SyntaxKind::RParen => {
                    self.error_and_bump(DiagnosticKind::UnmatchedParen);
                }
                kind if kind.is_word() && self.next_is(SyntaxKind::Equals) => self.option_arg(),
                kind if kind.is_glue() || kind == SyntaxKind::LParen => {
                    let checkpoint = self.checkpoint();
                    self.argument();
                    if self.currently_is(SyntaxKind::As) {
                        self.start_node_at(checkpoint, SyntaxKind::AliasedField);
                        self.bump();
                        if self.current().is_glue() {
                            self.argument();
                        } else {
                            self.error_msg(DiagnosticKind::ExpectedField, "after `as`");
                        }
                        self.finish_node();
                    }
                }
                _ => {
                    let text = self.current_text();
                    self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, format!("`{}`", text));
                }
            }
        }
    }
}
