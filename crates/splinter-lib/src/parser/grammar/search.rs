//! The search sublanguage: implicit conjunction, `OR`, `NOT`, groups,
//! comparisons, `IN` lists, macros and bare terms.
//!
//! Precedence follows SPL rather than eval: `OR` binds tighter than the
//! implicit (or explicit) `AND`, and `NOT` binds tightest.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// Search terms up to the stage end, an unmatched `)`, or a token in `stop`.
    pub(crate) fn parse_search_expr(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::SearchExpr);
        self.search_terms(stop);
        self.finish_node();
    }

    fn at_search_end(&mut self, stop: TokenSet) -> bool {
        self.at_stage_end() || self.currently_is(SyntaxKind::RParen) || self.currently_is_one_of(stop)
    }

    fn search_terms(&mut self, stop: TokenSet) {
        while !self.at_search_end(stop) {
            if self.eat_token(SyntaxKind::And) {
                continue;
            }
            self.search_or(stop);
        }
    }

    fn search_or(&mut self, stop: TokenSet) {
        let checkpoint = self.checkpoint();
        self.search_not(stop);
        if !self.currently_is(SyntaxKind::Or) {
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::SearchOr);
        while self.eat_token(SyntaxKind::Or) {
            self.search_not(stop);
        }
        self.finish_node();
    }

    fn search_not(&mut self, stop: TokenSet) {
        if !self.currently_is(SyntaxKind::Not) {
            self.search_primary(stop);
            return;
        }
        self.start_node(SyntaxKind::SearchNot);
        self.bump();
        if self.enter_recursion() {
            self.search_not(stop);
            self.exit_recursion();
        } else {
            self.swallow_too_deep(true);
        }
        self.finish_node();
    }

    fn search_primary(&mut self, stop: TokenSet) {
        if self.at_search_end(stop) {
            self.error(DiagnosticKind::ExpectedExpression);
            return;
        }
        match self.current() {
            SyntaxKind::LParen => self.search_group(),
            SyntaxKind::LBracket => self.parse_subsearch(),
            SyntaxKind::MacroCall => {
                self.start_node(SyntaxKind::SearchMacro);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Or | SyntaxKind::And => {
                let text = self.current_text();
                self.error_and_bump_msg(
                    DiagnosticKind::ExpectedExpression,
                    format!("before `{}`", text),
                );
            }
            kind if kind.is_glue() => self.search_value_term(),
            _ => {
                let text = self.current_text();
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, format!("`{}`", text));
            }
        }
    }

    /// `( terms )`
    fn search_group(&mut self) {
        self.start_node(SyntaxKind::SearchGroup);
        self.push_delimiter(SyntaxKind::LParen);
        self.bump();
        if self.enter_recursion() {
            self.search_terms(TokenSet::EMPTY);
            self.exit_recursion();
        } else {
            self.swallow_too_deep(true);
        }
        self.close_delimiter(SyntaxKind::RParen, DiagnosticKind::UnclosedParen);
        self.finish_node();
    }

    /// `value`, `field <op> value` or `field IN (value, ...)`.
    fn search_value_term(&mut self) {
        let checkpoint = self.checkpoint();
        self.search_value();

        let kind = self.current();
        if kind.is_comparison_op() {
            self.start_node_at(checkpoint, SyntaxKind::SearchComparison);
            self.bump();
            if self.current().is_glue() {
                self.search_value();
            } else {
                self.error_msg(DiagnosticKind::ExpectedValue, "after comparison operator");
            }
            self.finish_node();
        } else if kind == SyntaxKind::In && self.next_is(SyntaxKind::LParen) {
            self.start_node_at(checkpoint, SyntaxKind::SearchIn);
            self.bump();
            self.push_delimiter(SyntaxKind::LParen);
            self.bump();
            while self.current().is_glue() {
                self.search_value();
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
            self.close_delimiter(SyntaxKind::RParen, DiagnosticKind::UnclosedParen);
            self.finish_node();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::SearchTerm);
            self.finish_node();
        }
    }

    fn search_value(&mut self) {
        self.start_node(SyntaxKind::SearchValue);
        self.bump();
        while self.glued() && self.nth_raw(0).is_glue() {
            self.bump();
        }
        self.finish_node();
    }
}
