//! Commands that run nested pipelines or feed values back to an outer
//! search: foreach and return. The join/append/union family uses the shared
//! argument list, which accepts subsearches anywhere.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::FIELD_LIST_STOP;
use crate::parser::grammar::helpers::is_field_start;

impl Parser<'_> {
    /// `[options] field ... [ template-pipeline ]`
    pub(crate) fn foreach_body(&mut self) {
        let mut fields = 0;
        let mut has_body = false;
        loop {
            if self.at_stage_end() || has_body {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Comma => self.bump(),
                SyntaxKind::LBracket => {
                    self.parse_subsearch();
                    has_body = true;
                }
                _ if self.at_option() => self.option_arg(),
                _ if is_field_start(kind) => fields += self.field_list(FIELD_LIST_STOP),
                _ => break,
            }
        }
        if fields == 0 {
            self.error(DiagnosticKind::ExpectedField);
        } else if !has_body {
            self.error_msg(DiagnosticKind::ExpectedToken, "[");
        }
    }

    /// `[N] (field | alias=field) ...`
    pub(crate) fn return_body(&mut self) {
        if self.currently_is(SyntaxKind::NumberLiteral) {
            self.number_literal();
        }
        loop {
            if self.at_stage_end() {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Comma => self.bump(),
                _ if self.at_option() => self.option_arg(),
                _ if is_field_start(kind) => self.field_item(),
                _ => break,
            }
        }
    }
}
