//! Typed pipeline commands.
//!
//! Every command carries its `location` and the fields its syntax demands.
//! Option maps keep `name=value` pairs in source order with lowercased names
//! and unquoted values.

use indexmap::IndexMap;
use serde::Serialize;

use super::Pipeline;
use super::expressions::{Expression, FieldReference};
use super::location::SourceLocation;
use super::search::SearchExpression;

pub type Options = IndexMap<String, String>;

macro_rules! command_enum {
    ($($variant:ident($ty:ident) = $tag:tt),* $(,)?) => {
        /// A pipeline command. Unknown commands lower to [`Command::Generic`].
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "type")]
        pub enum Command {
            $(
                #[serde(rename = $tag)]
                $variant($ty),
            )*
            #[serde(rename = "GenericCommand")]
            Generic(GenericCommand),
        }

        impl Command {
            pub fn location(&self) -> SourceLocation {
                match self {
                    $(Command::$variant(c) => c.location,)*
                    Command::Generic(c) => c.location,
                }
            }
        }
    };
}

command_enum! {
    Search(SearchCommand) = "SearchCommand",
    Where(WhereCommand) = "WhereCommand",
    Eval(EvalCommand) = "EvalCommand",
    Fieldformat(FieldformatCommand) = "FieldformatCommand",
    Stats(StatsCommand) = "StatsCommand",
    Tstats(TstatsCommand) = "TstatsCommand",
    Rename(RenameCommand) = "RenameCommand",
    Rex(RexCommand) = "RexCommand",
    Regex(RegexCommand) = "RegexCommand",
    Lookup(LookupCommand) = "LookupCommand",
    Inputlookup(InputlookupCommand) = "InputlookupCommand",
    Outputlookup(OutputlookupCommand) = "OutputlookupCommand",
    Table(TableCommand) = "TableCommand",
    Fields(FieldsCommand) = "FieldsCommand",
    Dedup(DedupCommand) = "DedupCommand",
    Sort(SortCommand) = "SortCommand",
    Head(HeadCommand) = "HeadCommand",
    Tail(TailCommand) = "TailCommand",
    Reverse(ReverseCommand) = "ReverseCommand",
    Uniq(UniqCommand) = "UniqCommand",
    Top(TopCommand) = "TopCommand",
    Return(ReturnCommand) = "ReturnCommand",
    Join(JoinCommand) = "JoinCommand",
    Append(AppendCommand) = "AppendCommand",
    Union(UnionCommand) = "UnionCommand",
    Multisearch(MultisearchCommand) = "MultisearchCommand",
    Foreach(ForeachCommand) = "ForeachCommand",
    Map(MapCommand) = "MapCommand",
    Bin(BinCommand) = "BinCommand",
    Fillnull(FillnullCommand) = "FillnullCommand",
    Filldown(FilldownCommand) = "FilldownCommand",
    Transaction(TransactionCommand) = "TransactionCommand",
    Spath(SpathCommand) = "SpathCommand",
    Makemv(MakemvCommand) = "MakemvCommand",
    Mvexpand(MvexpandCommand) = "MvexpandCommand",
    Mvcombine(MvcombineCommand) = "MvcombineCommand",
    Nomv(NomvCommand) = "NomvCommand",
    Convert(ConvertCommand) = "ConvertCommand",
    Makeresults(MakeresultsCommand) = "MakeresultsCommand",
    Addinfo(AddinfoCommand) = "AddinfoCommand",
    Gentimes(GentimesCommand) = "GentimesCommand",
    Strcat(StrcatCommand) = "StrcatCommand",
    Accum(AccumCommand) = "AccumCommand",
    Delta(DeltaCommand) = "DeltaCommand",
    Autoregress(AutoregressCommand) = "AutoregressCommand",
    Addtotals(AddtotalsCommand) = "AddtotalsCommand",
    Rangemap(RangemapCommand) = "RangemapCommand",
    Replace(ReplaceCommand) = "ReplaceCommand",
    Xyseries(XyseriesCommand) = "XyseriesCommand",
    Untable(UntableCommand) = "UntableCommand",
    Transpose(TransposeCommand) = "TransposeCommand",
    Iplocation(IplocationCommand) = "IplocationCommand",
    Extract(ExtractCommand) = "ExtractCommand",
    Trendline(TrendlineCommand) = "TrendlineCommand",
    Predict(PredictCommand) = "PredictCommand",
    Fieldsummary(FieldsummaryCommand) = "FieldsummaryCommand",
    Rest(RestCommand) = "RestCommand",
    Metadata(MetadataCommand) = "MetadataCommand",
    Datamodel(DatamodelCommand) = "DatamodelCommand",
    Loadjob(LoadjobCommand) = "LoadjobCommand",
    Savedsearch(SavedsearchCommand) = "SavedsearchCommand",
    Collect(CollectCommand) = "CollectCommand",
    Fit(FitCommand) = "FitCommand",
    Apply(ApplyCommand) = "ApplyCommand",
}

impl Command {
    /// Canonical lowercase command name; variant-tagged commands report their variant.
    pub fn name(&self) -> &str {
        match self {
            Command::Search(_) => "search",
            Command::Where(_) => "where",
            Command::Eval(_) => "eval",
            Command::Fieldformat(_) => "fieldformat",
            Command::Stats(c) => c.variant.as_str(),
            Command::Tstats(_) => "tstats",
            Command::Rename(_) => "rename",
            Command::Rex(_) => "rex",
            Command::Regex(_) => "regex",
            Command::Lookup(_) => "lookup",
            Command::Inputlookup(_) => "inputlookup",
            Command::Outputlookup(_) => "outputlookup",
            Command::Table(_) => "table",
            Command::Fields(_) => "fields",
            Command::Dedup(_) => "dedup",
            Command::Sort(_) => "sort",
            Command::Head(_) => "head",
            Command::Tail(_) => "tail",
            Command::Reverse(_) => "reverse",
            Command::Uniq(_) => "uniq",
            Command::Top(c) => c.variant.as_str(),
            Command::Return(_) => "return",
            Command::Join(_) => "join",
            Command::Append(c) => c.variant.as_str(),
            Command::Union(_) => "union",
            Command::Multisearch(_) => "multisearch",
            Command::Foreach(_) => "foreach",
            Command::Map(_) => "map",
            Command::Bin(_) => "bin",
            Command::Fillnull(_) => "fillnull",
            Command::Filldown(_) => "filldown",
            Command::Transaction(_) => "transaction",
            Command::Spath(_) => "spath",
            Command::Makemv(_) => "makemv",
            Command::Mvexpand(_) => "mvexpand",
            Command::Mvcombine(_) => "mvcombine",
            Command::Nomv(_) => "nomv",
            Command::Convert(_) => "convert",
            Command::Makeresults(_) => "makeresults",
            Command::Addinfo(_) => "addinfo",
            Command::Gentimes(_) => "gentimes",
            Command::Strcat(_) => "strcat",
            Command::Accum(_) => "accum",
            Command::Delta(_) => "delta",
            Command::Autoregress(_) => "autoregress",
            Command::Addtotals(_) => "addtotals",
            Command::Rangemap(_) => "rangemap",
            Command::Replace(_) => "replace",
            Command::Xyseries(_) => "xyseries",
            Command::Untable(_) => "untable",
            Command::Transpose(_) => "transpose",
            Command::Iplocation(_) => "iplocation",
            Command::Extract(_) => "extract",
            Command::Trendline(_) => "trendline",
            Command::Predict(_) => "predict",
            Command::Fieldsummary(_) => "fieldsummary",
            Command::Rest(_) => "rest",
            Command::Metadata(_) => "metadata",
            Command::Datamodel(_) => "datamodel",
            Command::Loadjob(_) => "loadjob",
            Command::Savedsearch(_) => "savedsearch",
            Command::Collect(_) => "collect",
            Command::Fit(_) => "fit",
            Command::Apply(_) => "apply",
            Command::Generic(c) => &c.command_name,
        }
    }

    /// Pipelines nested directly in this command, including subsearches
    /// inside its search expressions.
    pub fn subsearches(&self) -> Vec<&Pipeline> {
        match self {
            Command::Search(c) => c.expression.subsearches(),
            Command::Tstats(c) => c.where_clause.iter().flat_map(|w| w.subsearches()).collect(),
            Command::Inputlookup(c) => {
                c.where_clause.iter().flat_map(|w| w.subsearches()).collect()
            }
            Command::Join(c) => c.subsearch.iter().collect(),
            Command::Append(c) => c.subsearch.iter().collect(),
            Command::Union(c) => c.subsearches.iter().collect(),
            Command::Multisearch(c) => c.subsearches.iter().collect(),
            Command::Foreach(c) => c.body.iter().collect(),
            Command::Map(c) => c.subsearch.iter().collect(),
            Command::Generic(c) => c.subsearches.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Fields this command adds to every event regardless of its arguments.
    pub fn created_fields(&self) -> &[String] {
        match self {
            Command::Top(c) => &c.created_fields,
            Command::Transaction(c) => &c.created_fields,
            Command::Makeresults(c) => &c.created_fields,
            Command::Addinfo(c) => &c.created_fields,
            Command::Gentimes(c) => &c.created_fields,
            Command::Strcat(c) => &c.created_fields,
            Command::Delta(c) => &c.created_fields,
            Command::Autoregress(c) => &c.created_fields,
            Command::Addtotals(c) => &c.created_fields,
            Command::Rangemap(c) => &c.created_fields,
            Command::Untable(c) => &c.created_fields,
            Command::Transpose(c) => &c.created_fields,
            Command::Iplocation(c) => &c.created_fields,
            Command::Trendline(c) => &c.created_fields,
            Command::Predict(c) => &c.created_fields,
            Command::Fieldsummary(c) => &c.created_fields,
            Command::Fit(c) => &c.created_fields,
            _ => &[],
        }
    }
}

// ============================================================================
// Field creators
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalAssignment {
    pub target_field: String,
    pub expression: Expression,
    /// Non-wildcard fields referenced by `expression`, in first-appearance order.
    pub depends_on: Vec<String>,
    pub location: SourceLocation,
}

impl EvalAssignment {
    pub fn new(target_field: String, expression: Expression, location: SourceLocation) -> Self {
        let depends_on = expression.referenced_fields();
        Self {
            target_field,
            expression,
            depends_on,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalCommand {
    pub assignments: Vec<EvalAssignment>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldformatCommand {
    pub assignments: Vec<EvalAssignment>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConversion {
    pub function: String,
    pub field: String,
    pub alias: Option<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertCommand {
    pub timeformat: Option<String>,
    pub conversions: Vec<FieldConversion>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceCommand {
    pub replacements: Vec<Replacement>,
    /// Fields after `IN`; empty means every field.
    pub fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrcatCommand {
    /// Field references and quoted literals, in order.
    pub sources: Vec<Expression>,
    pub target_field: String,
    pub allrequired: bool,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// `sma`, `ema` or `wma`.
    pub function: String,
    pub period: Option<u32>,
    pub field: String,
    pub alias: Option<String>,
    pub output_field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendlineCommand {
    pub trends: Vec<Trend>,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumCommand {
    pub field: String,
    pub alias: Option<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaCommand {
    pub field: String,
    pub alias: Option<String>,
    pub period: Option<u32>,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoregressCommand {
    pub field: String,
    pub alias: Option<String>,
    pub lags: Vec<u32>,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddtotalsCommand {
    pub fields: Vec<String>,
    pub row: bool,
    pub col: bool,
    pub fieldname: String,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangemapCommand {
    pub field: Option<String>,
    /// Range name to `low-high` text, in source order.
    pub ranges: Options,
    pub default: Option<String>,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IplocationCommand {
    pub field: Option<String>,
    pub prefix: Option<String>,
    pub allfields: bool,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeresultsCommand {
    pub count: Option<u64>,
    pub annotate: bool,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddinfoCommand {
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GentimesCommand {
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillnullCommand {
    pub value: Option<String>,
    pub fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilldownCommand {
    pub fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinCommand {
    pub field: Option<String>,
    pub alias: Option<String>,
    pub span: Option<String>,
    pub bins: Option<u64>,
    pub options: Options,
    pub location: SourceLocation,
}

// ============================================================================
// Field filters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCommand {
    pub expression: SearchExpression,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhereCommand {
    pub condition: Option<Expression>,
    pub referenced_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCommand {
    pub fields: Vec<FieldReference>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldsMode {
    Keep,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldsCommand {
    pub mode: FieldsMode,
    pub fields: Vec<FieldReference>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    pub field: String,
    /// `auto`, `str`, `ip` or `num` when written as `fn(field)`.
    pub function: Option<String>,
    pub descending: bool,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupCommand {
    pub count: Option<u64>,
    pub fields: Vec<FieldReference>,
    pub sort_by: Vec<SortKey>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortCommand {
    pub limit: Option<u64>,
    pub keys: Vec<SortKey>,
    /// Trailing `desc` / `d` reverses the whole ordering.
    pub reversed: bool,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadCommand {
    pub limit: Option<u64>,
    pub condition: Option<Expression>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailCommand {
    pub limit: Option<u64>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReverseCommand {
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniqCommand {
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRenaming {
    pub old_name: String,
    pub new_name: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameCommand {
    pub renamings: Vec<FieldRenaming>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NomvCommand {
    pub field: Option<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakemvCommand {
    pub field: Option<String>,
    pub delim: Option<String>,
    pub tokenizer: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MvexpandCommand {
    pub field: Option<String>,
    pub limit: Option<u64>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MvcombineCommand {
    pub field: Option<String>,
    pub delim: Option<String>,
    pub location: SourceLocation,
}

// ============================================================================
// Pipeline splitters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCommand {
    pub join_type: Option<String>,
    pub fields: Vec<FieldReference>,
    pub options: Options,
    pub subsearch: Option<Pipeline>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendVariant {
    Append,
    Appendcols,
    Appendpipe,
}

impl AppendVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            AppendVariant::Append => "append",
            AppendVariant::Appendcols => "appendcols",
            AppendVariant::Appendpipe => "appendpipe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendCommand {
    pub variant: AppendVariant,
    pub options: Options,
    pub subsearch: Option<Pipeline>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionCommand {
    /// Named datasets listed outside brackets.
    pub datasets: Vec<String>,
    pub options: Options,
    pub subsearches: Vec<Pipeline>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultisearchCommand {
    pub subsearches: Vec<Pipeline>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForeachCommand {
    pub fields: Vec<FieldReference>,
    pub options: Options,
    /// Template pipeline run per matching field.
    pub body: Option<Pipeline>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapCommand {
    /// Saved search name or quoted `search="..."` text.
    pub search: Option<String>,
    pub options: Options,
    pub subsearch: Option<Pipeline>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnField {
    pub field: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnCommand {
    pub count: Option<u64>,
    pub fields: Vec<ReturnField>,
    pub location: SourceLocation,
}

// ============================================================================
// Structural / aggregation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsVariant {
    Stats,
    Eventstats,
    Streamstats,
    Chart,
    Timechart,
}

impl StatsVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            StatsVariant::Stats => "stats",
            StatsVariant::Eventstats => "eventstats",
            StatsVariant::Streamstats => "streamstats",
            StatsVariant::Chart => "chart",
            StatsVariant::Timechart => "timechart",
        }
    }

    /// Streaming variants annotate events instead of replacing them.
    pub fn preserves_fields(self) -> bool {
        matches!(self, StatsVariant::Eventstats | StatsVariant::Streamstats)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    /// Lowercased function name.
    pub function: String,
    pub arguments: Vec<Expression>,
    /// First argument when it is a plain field.
    pub field: Option<String>,
    pub alias: Option<String>,
    pub output_field: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsCommand {
    pub variant: StatsVariant,
    pub aggregations: Vec<Aggregation>,
    pub by_fields: Vec<FieldReference>,
    /// `chart ... over <field>`.
    pub over_field: Option<FieldReference>,
    pub options: Options,
    pub preserves_fields: bool,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TstatsCommand {
    pub aggregations: Vec<Aggregation>,
    pub datamodel: Option<String>,
    pub where_clause: Option<SearchExpression>,
    pub by_fields: Vec<FieldReference>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopVariant {
    Top,
    Rare,
}

impl TopVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            TopVariant::Top => "top",
            TopVariant::Rare => "rare",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCommand {
    pub variant: TopVariant,
    pub limit: Option<u64>,
    pub fields: Vec<FieldReference>,
    pub by_fields: Vec<FieldReference>,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCommand {
    pub fields: Vec<String>,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XyseriesCommand {
    pub x_field: Option<String>,
    pub y_field: Option<String>,
    pub data_fields: Vec<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UntableCommand {
    pub x_field: Option<String>,
    pub y_field: Option<String>,
    pub data_field: Option<String>,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeCommand {
    pub row_count: Option<u64>,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsummaryCommand {
    pub fields: Vec<String>,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictField {
    pub field: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictCommand {
    pub fields: Vec<PredictField>,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitCommand {
    pub algorithm: Option<String>,
    pub target: Option<String>,
    pub features: Vec<String>,
    /// Model name after `INTO`.
    pub model: Option<String>,
    pub alias: Option<String>,
    pub options: Options,
    pub created_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyCommand {
    pub model: Option<String>,
    pub alias: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

// ============================================================================
// Extraction / lookup / admin
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RexCommand {
    /// Source field; `_raw` unless `field=` is given.
    pub field: String,
    pub pattern: String,
    pub mode: Option<String>,
    pub max_match: Option<u64>,
    pub extracted_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexCommand {
    pub field: String,
    pub negated: bool,
    pub pattern: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    pub field: String,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupOutputMode {
    Output,
    Outputnew,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupCommand {
    pub table: Option<String>,
    pub input_fields: Vec<FieldMapping>,
    pub output_mode: Option<LookupOutputMode>,
    pub output_fields: Vec<FieldMapping>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputlookupCommand {
    pub table: Option<String>,
    pub where_clause: Option<SearchExpression>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputlookupCommand {
    pub table: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpathCommand {
    pub input: Option<String>,
    pub output: Option<String>,
    pub path: Option<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractCommand {
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestCommand {
    pub endpoint: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataCommand {
    pub metadata_type: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatamodelCommand {
    pub model: Option<String>,
    pub dataset: Option<String>,
    /// `search`, `flat`, `acceleration_search`...
    pub mode: Option<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadjobCommand {
    pub job: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedsearchCommand {
    pub name: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectCommand {
    pub index: Option<String>,
    pub options: Options,
    pub location: SourceLocation,
}

/// A command without a dedicated lowering. Arguments are kept uninterpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericCommand {
    pub command_name: String,
    pub options: Options,
    pub arguments: Vec<String>,
    pub subsearches: Vec<Pipeline>,
    pub location: SourceLocation,
}
