//! CST → AST lowering.
//!
//! One [`Lowering`] context per parse holds the source text and line index.
//! Command families live in their own modules as separate `impl Lowering`
//! blocks; [`Lowering::command`] is the single dispatch point.
//!
//! Lowering never fails: missing pieces of a malformed command become `None`
//! or empty lists, since the parser has already reported them.

mod expressions;
mod extraction;
mod field_creators;
mod field_filters;
mod helpers;
mod splitters;
mod structural;

#[cfg(test)]
mod extraction_tests;
#[cfg(test)]
mod structural_tests;

use rowan::TextRange;

use crate::ast::{Command, LineIndex, Pipeline, PipelineStage, SourceLocation};
use crate::parser::SyntaxKind;
use crate::parser::cst::{SyntaxNode, SyntaxToken};
use crate::parser::nodes::{self, AnyCommand, CstNode, Stage};

pub use helpers::unquote;

/// Lowers a parsed tree into the owned AST.
pub fn lower(source: &str, root: &nodes::Root) -> Pipeline {
    let lowering = Lowering::new(source);
    match root.pipeline() {
        Some(pipeline) => lowering.pipeline(&pipeline),
        None => Pipeline::default(),
    }
}

/// Shared, read-only lowering context.
pub struct Lowering<'s> {
    source: &'s str,
    index: LineIndex<'s>,
}

impl<'s> Lowering<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            index: LineIndex::new(source),
        }
    }

    pub(crate) fn loc(&self, range: TextRange) -> SourceLocation {
        self.index.location(range)
    }

    pub(crate) fn node_loc(&self, node: &impl CstNode) -> SourceLocation {
        self.loc(node.range())
    }

    pub(crate) fn syntax_loc(&self, node: &SyntaxNode) -> SourceLocation {
        self.loc(nodes::trimmed_range(node))
    }

    pub(crate) fn token_loc(&self, token: &SyntaxToken) -> SourceLocation {
        self.loc(token.text_range())
    }

    /// Source text of a node without surrounding trivia.
    pub(crate) fn text(&self, node: &impl CstNode) -> &'s str {
        self.syntax_text(node.as_cst())
    }

    pub(crate) fn syntax_text(&self, node: &SyntaxNode) -> &'s str {
        let range = nodes::trimmed_range(node);
        &self.source[usize::from(range.start())..usize::from(range.end())]
    }

    pub fn pipeline(&self, node: &nodes::Pipeline) -> Pipeline {
        let stages = node
            .stages()
            .map(|stage| match stage {
                Stage::Search(search) => PipelineStage::Search(self.search_expression(&search)),
                Stage::Command(command) => PipelineStage::Command(self.command(&command)),
            })
            .collect();
        Pipeline {
            stages,
            location: self.node_loc(node),
        }
    }

    /// A subsearch body, or an empty pipeline at the brackets when the body is missing.
    pub(crate) fn subsearch(&self, node: &nodes::Subsearch) -> Pipeline {
        match node.pipeline() {
            Some(pipeline) => self.pipeline(&pipeline),
            None => Pipeline {
                stages: Vec::new(),
                location: self.node_loc(node),
            },
        }
    }

    pub fn command(&self, node: &AnyCommand) -> Command {
        match node {
            AnyCommand::Search(c) => Command::Search(self.search_command(c)),
            AnyCommand::Where(c) => Command::Where(self.where_command(c)),
            AnyCommand::Eval(c) => Command::Eval(self.eval_command(c)),
            AnyCommand::Fieldformat(c) => Command::Fieldformat(self.fieldformat_command(c)),
            AnyCommand::Stats(c) => Command::Stats(self.stats_command(c)),
            AnyCommand::Tstats(c) => Command::Tstats(self.tstats_command(c)),
            AnyCommand::Rename(c) => Command::Rename(self.rename_command(c)),
            AnyCommand::Rex(c) => Command::Rex(self.rex_command(c)),
            AnyCommand::Regex(c) => Command::Regex(self.regex_command(c)),
            AnyCommand::Lookup(c) => Command::Lookup(self.lookup_command(c)),
            AnyCommand::Inputlookup(c) => Command::Inputlookup(self.inputlookup_command(c)),
            AnyCommand::Table(c) => Command::Table(self.table_command(c)),
            AnyCommand::Fields(c) => Command::Fields(self.fields_command(c)),
            AnyCommand::Dedup(c) => Command::Dedup(self.dedup_command(c)),
            AnyCommand::Sort(c) => Command::Sort(self.sort_command(c)),
            AnyCommand::Head(c) => Command::Head(self.head_command(c)),
            AnyCommand::Top(c) => Command::Top(self.top_command(c)),
            AnyCommand::Convert(c) => Command::Convert(self.convert_command(c)),
            AnyCommand::Replace(c) => Command::Replace(self.replace_command(c)),
            AnyCommand::Strcat(c) => Command::Strcat(self.strcat_command(c)),
            AnyCommand::Trendline(c) => Command::Trendline(self.trendline_command(c)),
            AnyCommand::Return(c) => Command::Return(self.return_command(c)),
            AnyCommand::Fit(c) => Command::Fit(self.fit_command(c)),
            AnyCommand::Foreach(c) => Command::Foreach(self.foreach_command(c)),
            AnyCommand::Keyword(c) => self.keyword_command(c),
            AnyCommand::Generic(c) => Command::Generic(self.generic_command(c.as_cst())),
        }
    }

    /// Commands sharing the free argument-list body, interpreted by keyword.
    fn keyword_command(&self, node: &nodes::KeywordCommand) -> Command {
        use nodes::CommandParts;

        let Some(keyword) = node.keyword() else {
            return Command::Generic(self.generic_command(node.as_cst()));
        };
        let args = self.args(node.as_cst());
        let loc = self.node_loc(node);

        match keyword.kind() {
            SyntaxKind::Outputlookup => Command::Outputlookup(self.outputlookup(args, loc)),
            SyntaxKind::Tail => Command::Tail(self.tail(args, loc)),
            SyntaxKind::Reverse => Command::Reverse(crate::ast::ReverseCommand { location: loc }),
            SyntaxKind::Uniq => Command::Uniq(crate::ast::UniqCommand { location: loc }),
            SyntaxKind::Join => Command::Join(self.join(args, loc)),
            kind @ (SyntaxKind::Append | SyntaxKind::Appendcols | SyntaxKind::Appendpipe) => {
                Command::Append(self.append(kind, args, loc))
            }
            SyntaxKind::Union => Command::Union(self.union(args, loc)),
            SyntaxKind::Multisearch => Command::Multisearch(self.multisearch(args, loc)),
            SyntaxKind::Map => Command::Map(self.map(args, loc)),
            SyntaxKind::Bin => Command::Bin(self.bin(args, loc)),
            SyntaxKind::Fillnull => Command::Fillnull(self.fillnull(args, loc)),
            SyntaxKind::Filldown => Command::Filldown(self.filldown(args, loc)),
            SyntaxKind::Transaction => Command::Transaction(self.transaction(args, loc)),
            SyntaxKind::Spath => Command::Spath(self.spath(args, loc)),
            SyntaxKind::Makemv => Command::Makemv(self.makemv(args, loc)),
            SyntaxKind::Mvexpand => Command::Mvexpand(self.mvexpand(args, loc)),
            SyntaxKind::Mvcombine => Command::Mvcombine(self.mvcombine(args, loc)),
            SyntaxKind::Nomv => Command::Nomv(self.nomv(args, loc)),
            SyntaxKind::Makeresults => Command::Makeresults(self.makeresults(args, loc)),
            SyntaxKind::Addinfo => Command::Addinfo(self.addinfo(loc)),
            SyntaxKind::Gentimes => Command::Gentimes(self.gentimes(args, loc)),
            SyntaxKind::Accum => Command::Accum(self.accum(args, loc)),
            SyntaxKind::Delta => Command::Delta(self.delta(args, loc)),
            SyntaxKind::Autoregress => Command::Autoregress(self.autoregress(args, loc)),
            SyntaxKind::Addtotals => Command::Addtotals(self.addtotals(args, loc)),
            SyntaxKind::Rangemap => Command::Rangemap(self.rangemap(args, loc)),
            SyntaxKind::Xyseries => Command::Xyseries(self.xyseries(args, loc)),
            SyntaxKind::Untable => Command::Untable(self.untable(args, loc)),
            SyntaxKind::Transpose => Command::Transpose(self.transpose(args, loc)),
            SyntaxKind::Iplocation => Command::Iplocation(self.iplocation(args, loc)),
            SyntaxKind::Extract => Command::Extract(self.extract(args, loc)),
            SyntaxKind::Predict => Command::Predict(self.predict(args, loc)),
            SyntaxKind::Fieldsummary => Command::Fieldsummary(self.fieldsummary(args, loc)),
            SyntaxKind::Rest => Command::Rest(self.rest(args, loc)),
            SyntaxKind::Metadata => Command::Metadata(self.metadata(args, loc)),
            SyntaxKind::Datamodel => Command::Datamodel(self.datamodel(args, loc)),
            SyntaxKind::Loadjob => Command::Loadjob(self.loadjob(args, loc)),
            SyntaxKind::Savedsearch => Command::Savedsearch(self.savedsearch(args, loc)),
            SyntaxKind::Collect => Command::Collect(self.collect(args, loc)),
            SyntaxKind::Apply => Command::Apply(self.apply(args, loc)),
            _ => Command::Generic(self.generic_command(node.as_cst())),
        }
    }
}
