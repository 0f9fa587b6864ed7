//! Aggregating and reshaping commands: the stats family, tstats, top/rare, fit.

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::FIELD_LIST_STOP;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::grammar::helpers::is_field_start;

const TSTATS_WHERE_STOP: TokenSet = TokenSet::new(&[SyntaxKind::By, SyntaxKind::Groupby]);

fn is_aggregation_start(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier || kind.is_command_keyword()
}

impl Parser<'_> {
    /// Shared by stats, eventstats, streamstats, chart and timechart.
    ///
    /// `[options] agg [AS alias] (, agg)* [OVER field] [BY field, ...] [options]`
    pub(crate) fn stats_body(&mut self) {
        let mut aggregations = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Comma => self.bump(),
                SyntaxKind::By | SyntaxKind::Groupby => self.by_clause(),
                SyntaxKind::Over => self.over_clause(),
                _ if self.at_option() => self.option_arg(),
                _ if is_aggregation_start(kind) => {
                    self.aggregation();
                    aggregations += 1;
                }
                _ => break,
            }
        }
        if aggregations == 0 {
            self.error(DiagnosticKind::ExpectedAggregation);
        }
    }

    /// `fn [( expr, ... )] [AS alias]`
    fn aggregation(&mut self) {
        self.start_node(SyntaxKind::Aggregation);
        self.bump();
        if self.currently_is(SyntaxKind::LParen) {
            self.start_node(SyntaxKind::ArgList);
            self.paren_arguments();
            self.finish_node();
        }
        if self.eat_token(SyntaxKind::As) {
            self.alias_name();
        }
        self.finish_node();
    }

    /// `[options] agg ... [FROM source] [WHERE search] [BY field, ...] [options]`
    pub(crate) fn tstats_body(&mut self) {
        let mut aggregations = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Comma => self.bump(),
                SyntaxKind::From => self.from_source(),
                SyntaxKind::Where => {
                    self.start_node(SyntaxKind::WhereClause);
                    self.bump();
                    self.parse_search_expr(TSTATS_WHERE_STOP);
                    self.finish_node();
                }
                SyntaxKind::By | SyntaxKind::Groupby => self.by_clause(),
                _ if self.at_option() => self.option_arg(),
                _ if is_aggregation_start(kind) => {
                    self.aggregation();
                    aggregations += 1;
                }
                _ => break,
            }
        }
        if aggregations == 0 {
            self.error(DiagnosticKind::ExpectedAggregation);
        }
    }

    /// `FROM datamodel=Name.Dataset` or `FROM name`.
    fn from_source(&mut self) {
        self.start_node(SyntaxKind::FromClause);
        self.bump();
        if self.at_option() {
            self.option_arg();
        } else if self.current().is_glue() {
            self.argument();
        } else {
            self.error_msg(DiagnosticKind::ExpectedValue, "after `from`");
        }
        self.finish_node();
    }

    /// Shared by top and rare: `[N] [options] field, ... [BY field, ...] [options]`
    pub(crate) fn top_body(&mut self) {
        if self.currently_is(SyntaxKind::NumberLiteral) {
            self.number_literal();
        }
        let mut fields = 0;
        loop {
            if self.at_stage_end() {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Comma => self.bump(),
                SyntaxKind::By | SyntaxKind::Groupby => self.by_clause(),
                _ if self.at_option() => self.option_arg(),
                _ if is_field_start(kind) => fields += self.field_list(FIELD_LIST_STOP),
                _ => break,
            }
        }
        if fields == 0 {
            self.error(DiagnosticKind::ExpectedField);
        }
    }

    /// `Algorithm [options] field ... [FROM field ...] [INTO model] [AS alias]`
    pub(crate) fn fit_body(&mut self) {
        if self.current().is_word() && !self.at_option() {
            self.argument();
        } else {
            self.error_msg(DiagnosticKind::ExpectedValue, "algorithm name");
            return;
        }
        loop {
            if self.at_stage_end() {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Comma => self.bump(),
                SyntaxKind::From => {
                    self.start_node(SyntaxKind::FromClause);
                    self.bump();
                    if self.field_list(FIELD_LIST_STOP) == 0 {
                        self.error_msg(DiagnosticKind::ExpectedField, "after `from`");
                    }
                    self.finish_node();
                }
                SyntaxKind::Into => {
                    self.start_node(SyntaxKind::IntoClause);
                    self.bump();
                    if self.current().is_glue() {
                        self.argument();
                    } else {
                        self.error_msg(DiagnosticKind::ExpectedValue, "model name after `into`");
                    }
                    self.finish_node();
                }
                SyntaxKind::As => {
                    self.bump();
                    self.alias_name();
                }
                _ if self.at_option() => self.option_arg(),
                _ if is_field_start(kind) => {
                    self.field_list(FIELD_LIST_STOP);
                }
                _ => break,
            }
        }
    }
}
