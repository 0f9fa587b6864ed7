//! Eval expressions: precedence climbing over binary operators, prefix
//! `NOT`/`-`, calls, parenthesized groups, `IN` lists, literals and field
//! references.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

/// Left and right binding power of an infix operator.
fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8)> {
    use SyntaxKind::*;
    let bp = match kind {
        Or => (1, 2),
        Xor => (3, 4),
        And => (5, 6),
        Equals | DoubleEquals | NotEquals | LessThan | LessEquals | GreaterThan
        | GreaterEquals | Like | In => (7, 8),
        Plus | Minus | Dot => (9, 10),
        Multiply | Divide | Modulo => (11, 12),
        _ => return None,
    };
    Some(bp)
}

const PREFIX_BINDING_POWER: u8 = 13;

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        self.expr_bp(0);
    }

    fn expr_bp(&mut self, min_bp: u8) {
        if !self.enter_recursion() {
            self.swallow_too_deep(true);
            return;
        }

        let checkpoint = self.checkpoint();
        self.expr_prefix();

        loop {
            let op = self.current();
            let Some((left_bp, right_bp)) = infix_binding_power(op) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }

            if op == SyntaxKind::In {
                if !self.next_is(SyntaxKind::LParen) {
                    break;
                }
                self.start_node_at(checkpoint, SyntaxKind::InList);
                self.bump();
                self.paren_arguments();
                self.finish_node();
                continue;
            }

            self.start_node_at(checkpoint, SyntaxKind::BinaryExpr);
            self.bump();
            self.expr_bp(right_bp);
            self.finish_node();
        }

        self.exit_recursion();
    }

    fn expr_prefix(&mut self) {
        match self.current() {
            SyntaxKind::Not | SyntaxKind::Minus => {
                self.start_node(SyntaxKind::UnaryExpr);
                self.bump();
                self.expr_bp(PREFIX_BINDING_POWER);
                self.finish_node();
            }
            _ => self.expr_primary(),
        }
    }

    fn at_callee(&mut self) -> bool {
        let kind = self.current();
        let callable = kind.is_word()
            || kind == SyntaxKind::BooleanLiteral
            || (kind == SyntaxKind::TimeModifier && self.current_text().eq_ignore_ascii_case("now"));
        callable && self.next_is(SyntaxKind::LParen)
    }

    fn expr_primary(&mut self) {
        if self.at_callee() {
            self.call_expr();
            return;
        }
        match self.current() {
            SyntaxKind::LParen => {
                self.start_node(SyntaxKind::ParenExpr);
                self.push_delimiter(SyntaxKind::LParen);
                self.bump();
                self.parse_expr();
                self.close_delimiter(SyntaxKind::RParen, DiagnosticKind::UnclosedParen);
                self.finish_node();
            }
            SyntaxKind::StringLiteral if self.current_text().starts_with('\'') => {
                self.single_token_node(SyntaxKind::FieldRef);
            }
            SyntaxKind::StringLiteral
            | SyntaxKind::NumberLiteral
            | SyntaxKind::TimeModifier
            | SyntaxKind::BooleanLiteral
            | SyntaxKind::MacroCall => self.single_token_node(SyntaxKind::Literal),
            SyntaxKind::Multiply | SyntaxKind::WildcardField => {
                self.single_token_node(SyntaxKind::FieldRef);
            }
            kind if kind.is_word() => self.single_token_node(SyntaxKind::FieldRef),
            SyntaxKind::Comma | SyntaxKind::RParen => self.error(DiagnosticKind::ExpectedExpression),
            _ if self.at_stage_end() => self.error(DiagnosticKind::ExpectedExpression),
            _ => {
                let text = self.current_text();
                self.error_and_bump_msg(
                    DiagnosticKind::ExpectedExpression,
                    format!("found `{}`", text),
                );
            }
        }
    }

    fn single_token_node(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    /// `name(arg, ...)`
    fn call_expr(&mut self) {
        self.start_node(SyntaxKind::CallExpr);
        self.bump();
        self.start_node(SyntaxKind::ArgList);
        self.paren_arguments();
        self.finish_node();
        self.finish_node();
    }

    /// `( expr, ... )` with the delimiters as direct children of the current node.
    pub(crate) fn paren_arguments(&mut self) {
        self.push_delimiter(SyntaxKind::LParen);
        self.expect(SyntaxKind::LParen, "(");
        if !self.currently_is(SyntaxKind::RParen) && !self.at_stage_end() {
            loop {
                self.parse_expr();
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        }
        self.close_delimiter(SyntaxKind::RParen, DiagnosticKind::UnclosedParen);
    }
}
