//! Commands that filter events or select fields: search, where, table,
//! fields, dedup, sort, head, rename.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{EXPR_INFIX, FIELD_LIST_STOP};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::grammar::helpers::is_field_start;

impl Parser<'_> {
    pub(crate) fn search_command_body(&mut self) {
        self.parse_search_expr(TokenSet::EMPTY);
    }

    pub(crate) fn where_body(&mut self) {
        if self.at_stage_end() {
            self.error(DiagnosticKind::ExpectedExpression);
            return;
        }
        self.parse_expr();
    }

    pub(crate) fn table_body(&mut self) {
        if self.field_list(TokenSet::EMPTY) == 0 {
            self.error(DiagnosticKind::ExpectedField);
        }
    }

    /// `[+|-] field, ...`
    pub(crate) fn fields_body(&mut self) {
        if self.currently_is(SyntaxKind::Plus) || self.currently_is(SyntaxKind::Minus) {
            self.bump();
        }
        if self.field_list(TokenSet::EMPTY) == 0 {
            self.error(DiagnosticKind::ExpectedField);
        }
    }

    /// `[N] field, ... [options] [SORTBY sort-field ...]`
    pub(crate) fn dedup_body(&mut self) {
        if self.currently_is(SyntaxKind::NumberLiteral) {
            self.number_literal();
        }
        let mut fields = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            let kind = self.current();
            if kind == SyntaxKind::Comma {
                self.bump();
            } else if self.at_option() {
                self.option_arg();
            } else if kind == SyntaxKind::Sortby {
                self.bump();
                self.sort_fields();
            } else if is_field_start(kind) {
                fields += self.field_list(FIELD_LIST_STOP);
            } else {
                break;
            }
        }
        if fields == 0 {
            self.error(DiagnosticKind::ExpectedField);
        }
    }

    /// `[N] [+|-]field ... [desc]`
    pub(crate) fn sort_body(&mut self) {
        if self.currently_is(SyntaxKind::NumberLiteral) {
            self.number_literal();
        }
        let mut fields = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if self.at_option() {
                self.option_arg();
                continue;
            }
            if fields > 0 && !self.at_sort_field() {
                break;
            }
            fields += self.sort_fields();
            if fields == 0 {
                break;
            }
        }
        if fields == 0 {
            self.error(DiagnosticKind::ExpectedField);
        }
    }

    fn at_sort_field(&mut self) -> bool {
        let kind = self.current();
        matches!(kind, SyntaxKind::Plus | SyntaxKind::Minus) || is_field_start(kind)
    }

    /// Consecutive `[+|-] (field | fn(field))` items.
    fn sort_fields(&mut self) -> usize {
        let mut count = 0;
        loop {
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if self.at_stage_end() || self.at_option() || !self.at_sort_field() {
                break;
            }
            self.start_node(SyntaxKind::SortField);
            if self.currently_is(SyntaxKind::Plus) || self.currently_is(SyntaxKind::Minus) {
                self.bump();
            }
            if self.at_field_call() {
                self.field_call();
            } else if is_field_start(self.current()) {
                self.field_item();
            } else {
                self.error_msg(DiagnosticKind::ExpectedField, "after sort direction");
            }
            self.finish_node();
            count += 1;
        }
        count
    }

    /// `[N] [options] [expr]`
    pub(crate) fn head_body(&mut self) {
        let mut has_limit = false;
        let mut has_expr = false;
        loop {
            if self.at_stage_end() {
                break;
            }
            if self.at_option() {
                self.option_arg();
                continue;
            }
            let kind = self.current();
            if !has_limit
                && !has_expr
                && kind == SyntaxKind::NumberLiteral
                && !EXPR_INFIX.contains(self.peek_nth(1))
            {
                self.number_literal();
                has_limit = true;
                continue;
            }
            if has_expr || has_limit {
                break;
            }
            self.parse_expr();
            has_expr = true;
        }
    }

    /// `old AS new (, old AS new)*`
    pub(crate) fn rename_body(&mut self) {
        let mut pairs = 0;
        loop {
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if self.at_stage_end() || !is_field_start(self.current()) {
                break;
            }
            self.start_node(SyntaxKind::RenamePair);
            self.field_item();
            if self.expect(SyntaxKind::As, "as") {
                self.alias_name();
            }
            self.finish_node();
            pairs += 1;
        }
        if pairs == 0 {
            self.error(DiagnosticKind::ExpectedField);
        }
    }
}
