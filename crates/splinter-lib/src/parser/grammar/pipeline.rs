use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);
        self.parse_pipeline(false);
        self.eat_trivia();
        self.finish_node();
    }

    /// `[Pipe Command | Stage0] (Pipe Command)*`
    ///
    /// A nested pipeline stops at its closing `]`; at top level a stray `]`
    /// is reported and skipped.
    pub(crate) fn parse_pipeline(&mut self, nested: bool) {
        self.start_node(SyntaxKind::Pipeline);

        if !self.at_stage_end() {
            self.parse_first_stage();
        }

        loop {
            match self.current() {
                SyntaxKind::Error => break,
                SyntaxKind::RBracket if nested => break,
                SyntaxKind::RBracket => {
                    self.error_and_bump(DiagnosticKind::UnmatchedBracket);
                }
                SyntaxKind::Pipe => {
                    self.bump();
                    self.parse_stage();
                }
                _ => {
                    let text = self.current_text();
                    self.error_recover(DiagnosticKind::UnexpectedToken, format!("`{}`", text));
                }
            }
        }

        self.finish_node();
    }

    /// The leading stage is a command only when its keyword is not used as a
    /// field name (`search index=main` vs `search=foo`).
    fn parse_first_stage(&mut self) {
        let kind = self.current();
        if kind.is_command_keyword() && !self.peek_nth(1).is_comparison_op() {
            self.parse_command();
        } else {
            self.parse_search_expr(TokenSet::EMPTY);
        }
    }

    /// A stage after `|`.
    fn parse_stage(&mut self) {
        match self.current() {
            kind if kind.is_command_keyword() => self.parse_command(),
            SyntaxKind::Identifier | SyntaxKind::From => self.parse_generic_command(),
            SyntaxKind::Pipe | SyntaxKind::RBracket | SyntaxKind::Error => {
                self.error(DiagnosticKind::ExpectedCommand);
            }
            _ => {
                let text = self.current_text();
                self.error_recover(DiagnosticKind::ExpectedCommand, format!("found `{}`", text));
            }
        }
    }

    /// `[ Pipeline ]`
    pub(crate) fn parse_subsearch(&mut self) {
        self.assert_current(SyntaxKind::LBracket);
        self.start_node(SyntaxKind::Subsearch);
        self.push_delimiter(SyntaxKind::LBracket);
        self.bump();

        // Errors inside the nested pipeline carry no usage hint from the outer command.
        self.command_stack.push(SyntaxKind::Subsearch);
        if self.enter_recursion() {
            self.parse_pipeline(true);
            self.exit_recursion();
        } else {
            self.swallow_too_deep(false);
        }
        self.command_stack.pop();

        self.close_delimiter(SyntaxKind::RBracket, DiagnosticKind::UnclosedSubsearch);
        self.finish_node();
    }
}
