//! Syntax kinds for SPL.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SplLang` implements Rowan's `Language` trait for tree construction.
//!
//! Declaration order is the registry order. Multi-character operators are listed
//! before their prefixes, keywords before `Identifier`, and time modifiers before
//! numbers, although Logos resolves all of these by longest match and priority
//! rather than by position.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace = 0,

    /// SPL inline comment: ```` ```text``` ````
    #[regex(r"```([^`]|`[^`]|``[^`])*```")]
    Comment,

    // --- Operators ---
    #[token("!=")]
    NotEquals,
    #[token("==")]
    DoubleEquals,
    #[token("<=")]
    LessEquals,
    #[token(">=")]
    GreaterEquals,
    #[token("=")]
    Equals,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    /// Multiplication, or a bare wildcard depending on context.
    #[token("*")]
    Multiply,
    #[token("/")]
    Divide,
    #[token("%")]
    Modulo,
    /// String concatenation in eval expressions.
    #[token(".")]
    Dot,

    // --- Delimiters ---
    #[token("|")]
    Pipe,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // --- Command keywords ---
    #[token("search", ignore(case))]
    Search,
    #[token("where", ignore(case))]
    Where,
    #[token("eval", ignore(case))]
    Eval,
    #[token("fieldformat", ignore(case))]
    Fieldformat,
    #[token("stats", ignore(case))]
    Stats,
    #[token("eventstats", ignore(case))]
    Eventstats,
    #[token("streamstats", ignore(case))]
    Streamstats,
    #[token("chart", ignore(case))]
    Chart,
    #[token("timechart", ignore(case))]
    Timechart,
    #[token("tstats", ignore(case))]
    Tstats,
    #[token("rename", ignore(case))]
    Rename,
    #[token("rex", ignore(case))]
    Rex,
    #[token("regex", ignore(case))]
    Regex,
    #[token("lookup", ignore(case))]
    Lookup,
    #[token("inputlookup", ignore(case))]
    Inputlookup,
    #[token("outputlookup", ignore(case))]
    Outputlookup,
    #[token("table", ignore(case))]
    Table,
    #[token("fields", ignore(case))]
    Fields,
    #[token("dedup", ignore(case))]
    Dedup,
    #[token("sort", ignore(case))]
    Sort,
    #[token("head", ignore(case))]
    Head,
    #[token("tail", ignore(case))]
    Tail,
    #[token("reverse", ignore(case))]
    Reverse,
    #[token("uniq", ignore(case))]
    Uniq,
    #[token("top", ignore(case))]
    Top,
    #[token("rare", ignore(case))]
    Rare,
    #[token("return", ignore(case))]
    Return,
    #[token("join", ignore(case))]
    Join,
    #[token("append", ignore(case))]
    Append,
    #[token("appendcols", ignore(case))]
    Appendcols,
    #[token("appendpipe", ignore(case))]
    Appendpipe,
    #[token("union", ignore(case))]
    Union,
    #[token("multisearch", ignore(case))]
    Multisearch,
    #[token("foreach", ignore(case))]
    Foreach,
    #[token("map", ignore(case))]
    Map,
    /// `bin` and its synonym `bucket` share one kind.
    #[token("bin", ignore(case))]
    #[token("bucket", ignore(case))]
    Bin,
    #[token("fillnull", ignore(case))]
    Fillnull,
    #[token("filldown", ignore(case))]
    Filldown,
    #[token("transaction", ignore(case))]
    Transaction,
    #[token("spath", ignore(case))]
    Spath,
    #[token("makemv", ignore(case))]
    Makemv,
    #[token("mvexpand", ignore(case))]
    Mvexpand,
    #[token("mvcombine", ignore(case))]
    Mvcombine,
    #[token("nomv", ignore(case))]
    Nomv,
    #[token("convert", ignore(case))]
    Convert,
    #[token("makeresults", ignore(case))]
    Makeresults,
    #[token("addinfo", ignore(case))]
    Addinfo,
    #[token("gentimes", ignore(case))]
    Gentimes,
    #[token("strcat", ignore(case))]
    Strcat,
    #[token("accum", ignore(case))]
    Accum,
    #[token("delta", ignore(case))]
    Delta,
    #[token("autoregress", ignore(case))]
    Autoregress,
    #[token("addtotals", ignore(case))]
    Addtotals,
    #[token("rangemap", ignore(case))]
    Rangemap,
    #[token("replace", ignore(case))]
    Replace,
    #[token("xyseries", ignore(case))]
    Xyseries,
    #[token("untable", ignore(case))]
    Untable,
    #[token("transpose", ignore(case))]
    Transpose,
    #[token("iplocation", ignore(case))]
    Iplocation,
    /// `extract` and its synonym `kv` share one kind.
    #[token("extract", ignore(case))]
    #[token("kv", ignore(case))]
    Extract,
    #[token("trendline", ignore(case))]
    Trendline,
    #[token("predict", ignore(case))]
    Predict,
    #[token("fieldsummary", ignore(case))]
    Fieldsummary,
    #[token("rest", ignore(case))]
    Rest,
    #[token("metadata", ignore(case))]
    Metadata,
    #[token("datamodel", ignore(case))]
    Datamodel,
    #[token("loadjob", ignore(case))]
    Loadjob,
    #[token("savedsearch", ignore(case))]
    Savedsearch,
    #[token("collect", ignore(case))]
    Collect,
    #[token("fit", ignore(case))]
    Fit,
    #[token("apply", ignore(case))]
    Apply,

    // --- Clause keywords ---
    #[token("by", ignore(case))]
    By,
    #[token("as", ignore(case))]
    As,
    #[token("over", ignore(case))]
    Over,
    #[token("output", ignore(case))]
    Output,
    #[token("outputnew", ignore(case))]
    Outputnew,
    #[token("and", ignore(case))]
    And,
    #[token("or", ignore(case))]
    Or,
    #[token("not", ignore(case))]
    Not,
    #[token("xor", ignore(case))]
    Xor,
    #[token("like", ignore(case))]
    Like,
    #[token("in", ignore(case))]
    In,
    #[token("with", ignore(case))]
    With,
    #[token("from", ignore(case))]
    From,
    #[token("into", ignore(case))]
    Into,
    #[token("sortby", ignore(case))]
    Sortby,
    #[token("groupby", ignore(case))]
    Groupby,

    // --- Literals ---
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,

    /// Relative time: `-24h@h`, `@d`, `+7d@w1`, `now`.
    #[token("now", ignore(case))]
    #[regex(r"[+-]?[0-9]+(s|sec|secs|second|seconds|m|min|mins|minute|minutes|h|hr|hrs|hour|hours|d|day|days|w|w[0-7]|week|weeks|mon|month|months|q|qtr|qtrs|quarter|quarters|y|yr|yrs|year|years)(@(s|sec|secs|second|seconds|m|min|mins|minute|minutes|h|hr|hrs|hour|hours|d|day|days|w|w[0-7]|week|weeks|mon|month|months|q|qtr|qtrs|quarter|quarters|y|yr|yrs|year|years)([+-][0-9]+(s|sec|secs|second|seconds|m|min|mins|minute|minutes|h|hr|hrs|hour|hours|d|day|days|w|w[0-7]|week|weeks|mon|month|months|q|qtr|qtrs|quarter|quarters|y|yr|yrs|year|years))?)?")]
    #[regex(r"@(s|sec|secs|second|seconds|m|min|mins|minute|minutes|h|hr|hrs|hour|hours|d|day|days|w|w[0-7]|week|weeks|mon|month|months|q|qtr|qtrs|quarter|quarters|y|yr|yrs|year|years)([+-][0-9]+(s|sec|secs|second|seconds|m|min|mins|minute|minutes|h|hr|hrs|hour|hours|d|day|days|w|w[0-7]|week|weeks|mon|month|months|q|qtr|qtrs|quarter|quarters|y|yr|yrs|year|years))?")]
    TimeModifier,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    NumberLiteral,

    #[token("true", ignore(case))]
    #[token("false", ignore(case))]
    BooleanLiteral,

    /// Macro invocation: `` `my_macro(arg)` ``
    #[regex(r"`[^`]+`")]
    MacroCall,

    /// Glob-style field name such as `host*` or `*_ip`.
    /// Produced by the lexer's post-pass, never by Logos directly.
    WildcardField,

    /// Catch-all word. Also matches `foreach` template placeholders (`<<FIELD>>`).
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.]*")]
    #[regex(r"<<[A-Za-z_]+>>")]
    Identifier,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    Pipeline,
    Subsearch,

    // Search sublanguage
    SearchExpr,
    SearchOr,
    SearchNot,
    SearchGroup,
    SearchComparison,
    SearchIn,
    SearchTerm,
    SearchMacro,
    SearchValue,

    // Eval expressions
    BinaryExpr,
    UnaryExpr,
    ParenExpr,
    CallExpr,
    ArgList,
    InList,
    FieldRef,
    Literal,

    // Shared command parts
    OptionArg,
    OptionValue,
    FieldList,
    FieldItem,
    AliasedField,
    ByClause,
    OverClause,
    WhereClause,
    FromClause,
    IntoClause,
    Assignment,
    Aggregation,
    RenamePair,
    SortField,
    /// `fn(field)` in convert, sort and trendline, with an optional `AS` alias.
    FieldCall,
    OutputClause,
    ReplacePair,
    Argument,

    // Commands with dedicated rules
    SearchCommand,
    WhereCommand,
    EvalCommand,
    FieldformatCommand,
    StatsCommand,
    TstatsCommand,
    RenameCommand,
    RexCommand,
    RegexCommand,
    LookupCommand,
    InputlookupCommand,
    TableCommand,
    FieldsCommand,
    DedupCommand,
    SortCommand,
    HeadCommand,
    TopCommand,
    ConvertCommand,
    ReplaceCommand,
    StrcatCommand,
    TrendlineCommand,
    ReturnCommand,
    FitCommand,
    ForeachCommand,
    /// Keyword command whose body is a free argument list.
    KeywordCommand,
    /// Identifier-led command the grammar does not know.
    GenericCommand,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Whitespace and comments. Lexer garbage is skipped like trivia so a bad
    /// character never changes how its neighbors parse.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment | Garbage)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (Root as u16)
    }

    #[inline]
    pub fn is_command_keyword(self) -> bool {
        (Search as u16..=Apply as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_clause_keyword(self) -> bool {
        (By as u16..=Groupby as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self.is_command_keyword() || self.is_clause_keyword()
    }

    /// Tokens usable as a name: identifiers and every keyword.
    #[inline]
    pub fn is_word(self) -> bool {
        self == Identifier || self.is_keyword()
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            StringLiteral | NumberLiteral | TimeModifier | BooleanLiteral
        )
    }

    #[inline]
    pub fn is_comparison_op(self) -> bool {
        matches!(
            self,
            Equals | DoubleEquals | NotEquals | LessThan | LessEquals | GreaterThan | GreaterEquals
        )
    }

    /// Tokens that join a value when written without whitespace between them.
    #[inline]
    pub fn is_glue(self) -> bool {
        self.is_word() || token_sets::GLUE.contains(self)
    }

    /// Canonical lowercase spelling of a command keyword.
    pub fn command_name(self) -> Option<&'static str> {
        let name = match self {
            Search => "search",
            Where => "where",
            Eval => "eval",
            Fieldformat => "fieldformat",
            Stats => "stats",
            Eventstats => "eventstats",
            Streamstats => "streamstats",
            Chart => "chart",
            Timechart => "timechart",
            Tstats => "tstats",
            Rename => "rename",
            Rex => "rex",
            Regex => "regex",
            Lookup => "lookup",
            Inputlookup => "inputlookup",
            Outputlookup => "outputlookup",
            Table => "table",
            Fields => "fields",
            Dedup => "dedup",
            Sort => "sort",
            Head => "head",
            Tail => "tail",
            Reverse => "reverse",
            Uniq => "uniq",
            Top => "top",
            Rare => "rare",
            Return => "return",
            Join => "join",
            Append => "append",
            Appendcols => "appendcols",
            Appendpipe => "appendpipe",
            Union => "union",
            Multisearch => "multisearch",
            Foreach => "foreach",
            Map => "map",
            Bin => "bin",
            Fillnull => "fillnull",
            Filldown => "filldown",
            Transaction => "transaction",
            Spath => "spath",
            Makemv => "makemv",
            Mvexpand => "mvexpand",
            Mvcombine => "mvcombine",
            Nomv => "nomv",
            Convert => "convert",
            Makeresults => "makeresults",
            Addinfo => "addinfo",
            Gentimes => "gentimes",
            Strcat => "strcat",
            Accum => "accum",
            Delta => "delta",
            Autoregress => "autoregress",
            Addtotals => "addtotals",
            Rangemap => "rangemap",
            Replace => "replace",
            Xyseries => "xyseries",
            Untable => "untable",
            Transpose => "transpose",
            Iplocation => "iplocation",
            Extract => "extract",
            Trendline => "trendline",
            Predict => "predict",
            Fieldsummary => "fieldsummary",
            Rest => "rest",
            Metadata => "metadata",
            Datamodel => "datamodel",
            Loadjob => "loadjob",
            Savedsearch => "savedsearch",
            Collect => "collect",
            Fit => "fit",
            Apply => "apply",
            _ => return None,
        };
        Some(name)
    }

    /// Every command keyword kind, in registry order.
    pub fn command_keywords() -> impl Iterator<Item = SyntaxKind> {
        (Search as u16..=Apply as u16).map(kind_from_u16)
    }
}

fn kind_from_u16(raw: u16) -> SyntaxKind {
    assert!(raw < __LAST as u16);
    // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
    unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) }
}

impl std::convert::From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SplLang {}

impl Language for SplLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        kind_from_u16(raw.0)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SplLang>;
pub type SyntaxToken = rowan::SyntaxToken<SplLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 256-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; 4]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; 4]);

    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 256, "SyntaxKind value exceeds TokenSet capacity");
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 256 {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
            self.0[3] | other.0[3],
        ])
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..(__LAST as u16).min(256) {
            let kind = kind_from_u16(i);
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that may be glued into one value when written without spaces
    /// (`web-01`, `10.0.0.1`, `/services/server/info`, `5*`).
    pub const GLUE: TokenSet = TokenSet::new(&[
        Identifier,
        NumberLiteral,
        TimeModifier,
        BooleanLiteral,
        StringLiteral,
        WildcardField,
        MacroCall,
        Multiply,
        Minus,
        Plus,
        Dot,
        Divide,
        Modulo,
    ]);

    /// Clause keywords that end a field list.
    pub const FIELD_LIST_STOP: TokenSet = TokenSet::new(&[
        By, Groupby, As, Over, Output, Outputnew, Sortby, From, Into, With, In,
    ]);

    /// Binary operators of eval expressions (keywords `AND`, `OR`, `XOR`, `LIKE`, `IN` included).
    pub const EXPR_INFIX: TokenSet = TokenSet::new(&[
        Or,
        Xor,
        And,
        Like,
        In,
        Equals,
        DoubleEquals,
        NotEquals,
        LessThan,
        LessEquals,
        GreaterThan,
        GreaterEquals,
        Plus,
        Minus,
        Dot,
        Multiply,
        Divide,
        Modulo,
    ]);
}
