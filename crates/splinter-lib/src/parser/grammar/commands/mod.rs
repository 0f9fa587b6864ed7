//! Command dispatch.
//!
//! Each keyword maps to exactly one rule. Keywords sharing a rule are listed
//! together in [`command_node`]; synonyms (`bucket` for `bin`, `kv` for
//! `extract`) already share a token kind, so the first rule registered for a
//! keyword is the only rule it can reach.

mod extraction;
mod field_creators;
mod field_filters;
mod splitters;
mod structural;

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

/// CST node produced for a command keyword.
pub(crate) fn command_node(keyword: SyntaxKind) -> SyntaxKind {
    use SyntaxKind::*;
    match keyword {
        Search => SearchCommand,
        Where => WhereCommand,
        Eval => EvalCommand,
        Fieldformat => FieldformatCommand,
        Stats | Eventstats | Streamstats | Chart | Timechart => StatsCommand,
        Tstats => TstatsCommand,
        Rename => RenameCommand,
        Rex => RexCommand,
        Regex => RegexCommand,
        Lookup => LookupCommand,
        Inputlookup => InputlookupCommand,
        Table => TableCommand,
        Fields => FieldsCommand,
        Dedup => DedupCommand,
        Sort => SortCommand,
        Head => HeadCommand,
        Top | Rare => TopCommand,
        Convert => ConvertCommand,
        Replace => ReplaceCommand,
        Strcat => StrcatCommand,
        Trendline => TrendlineCommand,
        Return => ReturnCommand,
        Fit => FitCommand,
        Foreach => ForeachCommand,
        _ => KeywordCommand,
    }
}

impl Parser<'_> {
    pub(crate) fn parse_command(&mut self) {
        self.assert_command_keyword();
        let keyword = self.current();
        let node = command_node(keyword);

        self.command_stack.push(keyword);
        self.start_node(node);
        self.bump();

        match node {
            SyntaxKind::SearchCommand => self.search_command_body(),
            SyntaxKind::WhereCommand => self.where_body(),
            SyntaxKind::EvalCommand | SyntaxKind::FieldformatCommand => self.eval_body(),
            SyntaxKind::StatsCommand => self.stats_body(),
            SyntaxKind::TstatsCommand => self.tstats_body(),
            SyntaxKind::RenameCommand => self.rename_body(),
            SyntaxKind::RexCommand => self.rex_body(),
            SyntaxKind::RegexCommand => self.regex_body(),
            SyntaxKind::LookupCommand => self.lookup_body(),
            SyntaxKind::InputlookupCommand => self.inputlookup_body(),
            SyntaxKind::TableCommand => self.table_body(),
            SyntaxKind::FieldsCommand => self.fields_body(),
            SyntaxKind::DedupCommand => self.dedup_body(),
            SyntaxKind::SortCommand => self.sort_body(),
            SyntaxKind::HeadCommand => self.head_body(),
            SyntaxKind::TopCommand => self.top_body(),
            SyntaxKind::ConvertCommand => self.convert_body(),
            SyntaxKind::ReplaceCommand => self.replace_body(),
            SyntaxKind::StrcatCommand => self.strcat_body(),
            SyntaxKind::TrendlineCommand => self.trendline_body(),
            SyntaxKind::ReturnCommand => self.return_body(),
            SyntaxKind::FitCommand => self.fit_body(),
            SyntaxKind::ForeachCommand => self.foreach_body(),
            _ => self.argument_list(),
        }

        self.finish_stage();
        self.finish_node();
        self.command_stack.pop();
    }

    /// Identifier-led command the grammar has no rule for.
    pub(crate) fn parse_generic_command(&mut self) {
        self.command_stack.push(SyntaxKind::GenericCommand);
        self.start_node(SyntaxKind::GenericCommand);
        self.bump();
        self.argument_list();
        self.finish_stage();
        self.finish_node();
        self.command_stack.pop();
    }

    /// Anything left before `|`/`]`/EOF is reported once and skipped.
    fn finish_stage(&mut self) {
        if self.at_stage_end() {
            return;
        }
        let text = self.current_text();
        self.error_recover(
            crate::diagnostics::DiagnosticKind::UnexpectedToken,
            format!("`{}`", text),
        );
    }
}
