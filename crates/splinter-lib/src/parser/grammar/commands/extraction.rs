//! Extraction and lookup commands: rex, regex, lookup, inputlookup.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, TokenSet};

const LOOKUP_INPUT_STOP: TokenSet = TokenSet::new(&[SyntaxKind::Output, SyntaxKind::Outputnew]);

impl Parser<'_> {
    /// `[field=name] [mode=sed] [max_match=N] "pattern"`, options in any order.
    pub(crate) fn rex_body(&mut self) {
        let mut has_pattern = false;
        loop {
            if self.at_stage_end() {
                break;
            }
            if self.at_option() {
                self.option_arg();
            } else if !has_pattern && self.currently_is(SyntaxKind::StringLiteral) {
                self.bump();
                has_pattern = true;
            } else {
                break;
            }
        }
        if !has_pattern {
            self.error_msg(DiagnosticKind::ExpectedString, "regular expression");
        }
    }

    /// `[field(=|!=)] "pattern"`
    pub(crate) fn regex_body(&mut self) {
        if self.current().is_word()
            && matches!(self.peek_nth(1), SyntaxKind::Equals | SyntaxKind::NotEquals)
        {
            self.bump();
            self.bump();
        }
        match self.current() {
            SyntaxKind::StringLiteral => self.bump(),
            kind if kind.is_glue() => self.argument(),
            _ => self.error_msg(DiagnosticKind::ExpectedString, "regular expression"),
        }
    }

    /// `[options] table field [AS alias], ... [OUTPUT|OUTPUTNEW field [AS alias], ...]`
    pub(crate) fn lookup_body(&mut self) {
        while self.at_option() {
            self.option_arg();
        }

        if self.current().is_glue() {
            self.argument();
        } else {
            self.error_msg(DiagnosticKind::ExpectedValue, "lookup table name");
            return;
        }

        if self.aliased_field_list(LOOKUP_INPUT_STOP) == 0 {
            self.error_msg(DiagnosticKind::ExpectedField, "lookup input field");
        }
        while self.at_option() {
            self.option_arg();
        }

        if self.currently_is_one_of(LOOKUP_INPUT_STOP) {
            self.start_node(SyntaxKind::OutputClause);
            self.bump();
            if self.aliased_field_list(TokenSet::EMPTY) == 0 {
                self.error_msg(DiagnosticKind::ExpectedField, "lookup output field");
            }
            self.finish_node();
        }
    }

    /// `[options] table [WHERE search]`
    pub(crate) fn inputlookup_body(&mut self) {
        while self.at_option() {
            self.option_arg();
        }
        if self.current().is_glue() && !self.currently_is(SyntaxKind::Where) {
            self.argument();
        } else {
            self.error_msg(DiagnosticKind::ExpectedValue, "lookup table name");
        }
        while self.at_option() {
            self.option_arg();
        }
        if self.currently_is(SyntaxKind::Where) {
            self.start_node(SyntaxKind::WhereClause);
            self.bump();
            self.parse_search_expr(TokenSet::EMPTY);
            self.finish_node();
        }
    }
}
