//! Commands that create or rewrite fields: eval, fieldformat, convert,
//! replace, strcat, trendline.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::grammar::helpers::is_field_start;

impl Parser<'_> {
    /// `field = expr (, field = expr)*`
    pub(crate) fn eval_body(&mut self) {
        let mut assignments = 0;
        loop {
            if !is_field_start(self.current()) {
                if assignments == 0 {
                    self.error_msg(DiagnosticKind::ExpectedField, "for assignment target");
                }
                break;
            }

            self.start_node(SyntaxKind::Assignment);
            self.field_item();
            if self.expect(SyntaxKind::Equals, "=") {
                self.parse_expr();
            }
            self.finish_node();
            assignments += 1;

            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            // Tolerate a missing comma between assignments.
            if !self.at_option() {
                break;
            }
        }
    }

    /// `fn(field) [AS alias] ...`
    pub(crate) fn convert_body(&mut self) {
        let mut conversions = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if self.at_option() {
                self.option_arg();
            } else if self.at_field_call() {
                self.field_call();
                conversions += 1;
            } else {
                break;
            }
        }
        if conversions == 0 {
            self.error_msg(DiagnosticKind::ExpectedField, "conversion like `num(field)`");
        }
    }

    /// `old WITH new (, old WITH new)* [IN field, ...]`
    pub(crate) fn replace_body(&mut self) {
        let mut pairs = 0;
        loop {
            if self.at_stage_end() || self.currently_is(SyntaxKind::In) {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if !self.current().is_glue() {
                break;
            }
            self.start_node(SyntaxKind::ReplacePair);
            self.argument();
            if self.expect(SyntaxKind::With, "with") {
                if self.current().is_glue() {
                    self.argument();
                } else {
                    self.error_msg(DiagnosticKind::ExpectedValue, "after `with`");
                }
            }
            self.finish_node();
            pairs += 1;
        }
        if pairs == 0 {
            self.error_msg(DiagnosticKind::ExpectedValue, "`old WITH new`");
        }
        if self.eat_token(SyntaxKind::In) && self.field_list(TokenSet::EMPTY) == 0 {
            self.error_msg(DiagnosticKind::ExpectedField, "after `in`");
        }
    }

    /// `[options] source ... dest` where sources are fields or quoted strings.
    pub(crate) fn strcat_body(&mut self) {
        let mut items = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            let kind = self.current();
            if self.at_option() {
                self.option_arg();
            } else if kind == SyntaxKind::StringLiteral && self.current_text().starts_with('"') {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
                items += 1;
            } else if is_field_start(kind) {
                self.field_item();
                items += 1;
            } else {
                break;
            }
        }
        if items < 2 {
            self.error_msg(DiagnosticKind::ExpectedField, "source fields and a destination field");
        }
    }

    /// `fnN(field) [AS alias] ...`
    pub(crate) fn trendline_body(&mut self) {
        let mut trends = 0;
        while !self.at_stage_end() {
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if !self.at_field_call() {
                break;
            }
            self.field_call();
            trends += 1;
        }
        if trends == 0 {
            self.error_msg(DiagnosticKind::ExpectedField, "trend like `sma5(field)`");
        }
    }
}
