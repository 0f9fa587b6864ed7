//! Typed views over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind`; missing children (after a
//! parse error) surface as `None` or empty iterators.

use std::marker::PhantomData;

use rowan::TextRange;

use super::cst::{SplLang, SyntaxKind, SyntaxNode, SyntaxToken};

/// A typed view over one kind of CST node.
pub trait CstNode: Sized {
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn as_cst(&self) -> &SyntaxNode;

    /// Range of the node without surrounding trivia.
    fn range(&self) -> TextRange {
        trimmed_range(self.as_cst())
    }
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }

        impl CstNode for $name {
            fn cast(node: SyntaxNode) -> Option<Self> {
                $name::cast(node)
            }

            fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Pipeline, Pipeline);
ast_node!(Subsearch, Subsearch);

ast_node!(SearchExpr, SearchExpr);
ast_node!(SearchOr, SearchOr);
ast_node!(SearchNot, SearchNot);
ast_node!(SearchGroup, SearchGroup);
ast_node!(SearchComparison, SearchComparison);
ast_node!(SearchIn, SearchIn);
ast_node!(SearchTerm, SearchTerm);
ast_node!(SearchMacro, SearchMacro);
ast_node!(SearchValue, SearchValue);

ast_node!(BinaryExpr, BinaryExpr);
ast_node!(UnaryExpr, UnaryExpr);
ast_node!(ParenExpr, ParenExpr);
ast_node!(CallExpr, CallExpr);
ast_node!(ArgList, ArgList);
ast_node!(InList, InList);
ast_node!(FieldRef, FieldRef);
ast_node!(Literal, Literal);

ast_node!(OptionArg, OptionArg);
ast_node!(OptionValue, OptionValue);
ast_node!(FieldList, FieldList);
ast_node!(FieldItem, FieldItem);
ast_node!(AliasedField, AliasedField);
ast_node!(ByClause, ByClause);
ast_node!(OverClause, OverClause);
ast_node!(WhereClause, WhereClause);
ast_node!(FromClause, FromClause);
ast_node!(IntoClause, IntoClause);
ast_node!(Assignment, Assignment);
ast_node!(Aggregation, Aggregation);
ast_node!(RenamePair, RenamePair);
ast_node!(SortField, SortField);
ast_node!(FieldCall, FieldCall);
ast_node!(OutputClause, OutputClause);
ast_node!(ReplacePair, ReplacePair);
ast_node!(Argument, Argument);

ast_node!(SearchCommand, SearchCommand);
ast_node!(WhereCommand, WhereCommand);
ast_node!(EvalCommand, EvalCommand);
ast_node!(FieldformatCommand, FieldformatCommand);
ast_node!(StatsCommand, StatsCommand);
ast_node!(TstatsCommand, TstatsCommand);
ast_node!(RenameCommand, RenameCommand);
ast_node!(RexCommand, RexCommand);
ast_node!(RegexCommand, RegexCommand);
ast_node!(LookupCommand, LookupCommand);
ast_node!(InputlookupCommand, InputlookupCommand);
ast_node!(TableCommand, TableCommand);
ast_node!(FieldsCommand, FieldsCommand);
ast_node!(DedupCommand, DedupCommand);
ast_node!(SortCommand, SortCommand);
ast_node!(HeadCommand, HeadCommand);
ast_node!(TopCommand, TopCommand);
ast_node!(ConvertCommand, ConvertCommand);
ast_node!(ReplaceCommand, ReplaceCommand);
ast_node!(StrcatCommand, StrcatCommand);
ast_node!(TrendlineCommand, TrendlineCommand);
ast_node!(ReturnCommand, ReturnCommand);
ast_node!(FitCommand, FitCommand);
ast_node!(ForeachCommand, ForeachCommand);
ast_node!(KeywordCommand, KeywordCommand);
ast_node!(GenericCommand, GenericCommand);

// ============================================================================
// Tree helpers
// ============================================================================

/// Range from the first to the last non-trivia token under `node`.
pub fn trimmed_range(node: &SyntaxNode) -> TextRange {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia());
    let Some(first) = tokens.next() else {
        return node.text_range();
    };
    let last = tokens.last().unwrap_or_else(|| first.clone());
    TextRange::new(first.text_range().start(), last.text_range().end())
}

/// Iterator over the children of one typed kind.
#[derive(Debug, Clone)]
pub struct Children<N> {
    inner: rowan::SyntaxNodeChildren<SplLang>,
    _ty: PhantomData<N>,
}

impl<N: CstNode> Iterator for Children<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.inner.by_ref().find_map(N::cast)
    }
}

fn child<N: CstNode>(node: &SyntaxNode) -> Option<N> {
    node.children().find_map(N::cast)
}

fn children<N: CstNode>(node: &SyntaxNode) -> Children<N> {
    Children {
        inner: node.children(),
        _ty: PhantomData,
    }
}

/// Direct child tokens, trivia excluded.
fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + use<> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
}

fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    tokens(node).next()
}

fn token_of(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == kind)
}

// ============================================================================
// Pipeline
// ============================================================================

/// A pipeline stage: bare search or command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    Search(SearchExpr),
    Command(AnyCommand),
}

impl Root {
    pub fn pipeline(&self) -> Option<Pipeline> {
        child(&self.0)
    }
}

impl Pipeline {
    pub fn stages(&self) -> impl Iterator<Item = Stage> + use<> {
        self.0.children().filter_map(|node| {
            if let Some(search) = SearchExpr::cast(node.clone()) {
                return Some(Stage::Search(search));
            }
            AnyCommand::cast(node).map(Stage::Command)
        })
    }
}

impl Subsearch {
    pub fn pipeline(&self) -> Option<Pipeline> {
        child(&self.0)
    }
}

// ============================================================================
// Search sublanguage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchItem {
    Or(SearchOr),
    Not(SearchNot),
    Group(SearchGroup),
    Comparison(SearchComparison),
    In(SearchIn),
    Term(SearchTerm),
    Macro(SearchMacro),
    Subsearch(Subsearch),
}

impl CstNode for SearchItem {
    fn cast(node: SyntaxNode) -> Option<Self> {
        let item = match node.kind() {
            SyntaxKind::SearchOr => SearchItem::Or(SearchOr(node)),
            SyntaxKind::SearchNot => SearchItem::Not(SearchNot(node)),
            SyntaxKind::SearchGroup => SearchItem::Group(SearchGroup(node)),
            SyntaxKind::SearchComparison => SearchItem::Comparison(SearchComparison(node)),
            SyntaxKind::SearchIn => SearchItem::In(SearchIn(node)),
            SyntaxKind::SearchTerm => SearchItem::Term(SearchTerm(node)),
            SyntaxKind::SearchMacro => SearchItem::Macro(SearchMacro(node)),
            SyntaxKind::Subsearch => SearchItem::Subsearch(Subsearch(node)),
            _ => return None,
        };
        Some(item)
    }

    fn as_cst(&self) -> &SyntaxNode {
        match self {
            SearchItem::Or(n) => n.as_cst(),
            SearchItem::Not(n) => n.as_cst(),
            SearchItem::Group(n) => n.as_cst(),
            SearchItem::Comparison(n) => n.as_cst(),
            SearchItem::In(n) => n.as_cst(),
            SearchItem::Term(n) => n.as_cst(),
            SearchItem::Macro(n) => n.as_cst(),
            SearchItem::Subsearch(n) => n.as_cst(),
        }
    }
}

impl SearchExpr {
    pub fn items(&self) -> Children<SearchItem> {
        children(&self.0)
    }
}

impl SearchOr {
    pub fn operands(&self) -> Children<SearchItem> {
        children(&self.0)
    }
}

impl SearchNot {
    pub fn operand(&self) -> Option<SearchItem> {
        child(&self.0)
    }
}

impl SearchGroup {
    pub fn items(&self) -> Children<SearchItem> {
        children(&self.0)
    }
}

impl SearchComparison {
    pub fn field(&self) -> Option<SearchValue> {
        child(&self.0)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| t.kind().is_comparison_op())
    }

    pub fn value(&self) -> Option<SearchValue> {
        children(&self.0).nth(1)
    }
}

impl SearchIn {
    pub fn field(&self) -> Option<SearchValue> {
        child(&self.0)
    }

    pub fn values(&self) -> std::iter::Skip<Children<SearchValue>> {
        children(&self.0).skip(1)
    }
}

impl SearchTerm {
    pub fn value(&self) -> Option<SearchValue> {
        child(&self.0)
    }
}

impl SearchMacro {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

impl SearchValue {
    /// The single string literal when the value is exactly one quoted string.
    pub fn quoted(&self) -> Option<SyntaxToken> {
        let mut toks = tokens(&self.0);
        let first = toks.next()?;
        (first.kind() == SyntaxKind::StringLiteral && toks.next().is_none()).then_some(first)
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Paren(ParenExpr),
    Call(CallExpr),
    In(InList),
    FieldRef(FieldRef),
    Literal(Literal),
}

impl CstNode for Expr {
    fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::BinaryExpr => Expr::Binary(BinaryExpr(node)),
            SyntaxKind::UnaryExpr => Expr::Unary(UnaryExpr(node)),
            SyntaxKind::ParenExpr => Expr::Paren(ParenExpr(node)),
            SyntaxKind::CallExpr => Expr::Call(CallExpr(node)),
            SyntaxKind::InList => Expr::In(InList(node)),
            SyntaxKind::FieldRef => Expr::FieldRef(FieldRef(node)),
            SyntaxKind::Literal => Expr::Literal(Literal(node)),
            _ => return None,
        };
        Some(expr)
    }

    fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Binary(n) => n.as_cst(),
            Expr::Unary(n) => n.as_cst(),
            Expr::Paren(n) => n.as_cst(),
            Expr::Call(n) => n.as_cst(),
            Expr::In(n) => n.as_cst(),
            Expr::FieldRef(n) => n.as_cst(),
            Expr::Literal(n) => n.as_cst(),
        }
    }
}

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn op(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn rhs(&self) -> Option<Expr> {
        children(&self.0).nth(1)
    }
}

impl UnaryExpr {
    pub fn op(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn operand(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl CallExpr {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn args(&self) -> impl Iterator<Item = Expr> + use<> {
        child::<ArgList>(&self.0)
            .into_iter()
            .flat_map(|list| list.args())
    }
}

impl ArgList {
    pub fn args(&self) -> Children<Expr> {
        children(&self.0)
    }
}

impl InList {
    pub fn lhs(&self) -> Option<Expr> {
        child(&self.0)
    }

    pub fn values(&self) -> std::iter::Skip<Children<Expr>> {
        children(&self.0).skip(1)
    }
}

impl FieldRef {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

// ============================================================================
// Shared command parts
// ============================================================================

impl OptionArg {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn value(&self) -> Option<OptionValue> {
        child(&self.0)
    }
}

/// An entry of a field list: a plain field or `field AS alias`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldEntry {
    Plain(FieldItem),
    Aliased(AliasedField),
}

impl CstNode for FieldEntry {
    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FieldItem => Some(FieldEntry::Plain(FieldItem(node))),
            SyntaxKind::AliasedField => Some(FieldEntry::Aliased(AliasedField(node))),
            _ => None,
        }
    }

    fn as_cst(&self) -> &SyntaxNode {
        match self {
            FieldEntry::Plain(n) => n.as_cst(),
            FieldEntry::Aliased(n) => n.as_cst(),
        }
    }
}

impl FieldList {
    pub fn entries(&self) -> Children<FieldEntry> {
        children(&self.0)
    }

    pub fn items(&self) -> Children<FieldItem> {
        children(&self.0)
    }
}

impl AliasedField {
    /// The aliased node: a `FieldItem` in field lists, an `Argument` in argument lists.
    pub fn target(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn alias(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }
}

impl ByClause {
    pub fn fields(&self) -> impl Iterator<Item = FieldItem> + use<> {
        child::<FieldList>(&self.0)
            .into_iter()
            .flat_map(|list| list.items())
    }
}

impl OverClause {
    pub fn field(&self) -> Option<FieldItem> {
        child(&self.0)
    }
}

impl WhereClause {
    pub fn search(&self) -> Option<SearchExpr> {
        child(&self.0)
    }
}

impl FromClause {
    pub fn option(&self) -> Option<OptionArg> {
        child(&self.0)
    }

    pub fn argument(&self) -> Option<Argument> {
        child(&self.0)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldItem> + use<> {
        child::<FieldList>(&self.0)
            .into_iter()
            .flat_map(|list| list.items())
    }
}

impl IntoClause {
    pub fn argument(&self) -> Option<Argument> {
        child(&self.0)
    }
}

impl Assignment {
    pub fn field(&self) -> Option<FieldItem> {
        child(&self.0)
    }

    pub fn value(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl Aggregation {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn arg_list(&self) -> Option<ArgList> {
        child(&self.0)
    }

    pub fn alias(&self) -> Option<FieldItem> {
        child(&self.0)
    }
}

impl RenamePair {
    pub fn from(&self) -> Option<FieldItem> {
        child(&self.0)
    }

    pub fn to(&self) -> Option<FieldItem> {
        children(&self.0).nth(1)
    }
}

impl SortField {
    pub fn descending(&self) -> bool {
        first_token(&self.0).is_some_and(|t| t.kind() == SyntaxKind::Minus)
    }

    pub fn call(&self) -> Option<FieldCall> {
        child(&self.0)
    }

    pub fn field(&self) -> Option<FieldItem> {
        child(&self.0)
    }
}

impl FieldCall {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn field(&self) -> Option<FieldItem> {
        child(&self.0)
    }

    pub fn alias(&self) -> Option<FieldItem> {
        token_of(&self.0, SyntaxKind::As)?;
        children(&self.0).nth(1)
    }
}

impl OutputClause {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }

    pub fn entries(&self) -> impl Iterator<Item = FieldEntry> + use<> {
        child::<FieldList>(&self.0)
            .into_iter()
            .flat_map(|list| list.entries())
    }
}

impl ReplacePair {
    pub fn from(&self) -> Option<Argument> {
        child(&self.0)
    }

    pub fn to(&self) -> Option<Argument> {
        children(&self.0).nth(1)
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Any command node, dispatched by CST kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyCommand {
    Search(SearchCommand),
    Where(WhereCommand),
    Eval(EvalCommand),
    Fieldformat(FieldformatCommand),
    Stats(StatsCommand),
    Tstats(TstatsCommand),
    Rename(RenameCommand),
    Rex(RexCommand),
    Regex(RegexCommand),
    Lookup(LookupCommand),
    Inputlookup(InputlookupCommand),
    Table(TableCommand),
    Fields(FieldsCommand),
    Dedup(DedupCommand),
    Sort(SortCommand),
    Head(HeadCommand),
    Top(TopCommand),
    Convert(ConvertCommand),
    Replace(ReplaceCommand),
    Strcat(StrcatCommand),
    Trendline(TrendlineCommand),
    Return(ReturnCommand),
    Fit(FitCommand),
    Foreach(ForeachCommand),
    Keyword(KeywordCommand),
    Generic(GenericCommand),
}

impl CstNode for AnyCommand {
    fn cast(node: SyntaxNode) -> Option<Self> {
        use SyntaxKind as K;
        let command = match node.kind() {
            K::SearchCommand => AnyCommand::Search(SearchCommand(node)),
            K::WhereCommand => AnyCommand::Where(WhereCommand(node)),
            K::EvalCommand => AnyCommand::Eval(EvalCommand(node)),
            K::FieldformatCommand => AnyCommand::Fieldformat(FieldformatCommand(node)),
            K::StatsCommand => AnyCommand::Stats(StatsCommand(node)),
            K::TstatsCommand => AnyCommand::Tstats(TstatsCommand(node)),
            K::RenameCommand => AnyCommand::Rename(RenameCommand(node)),
            K::RexCommand => AnyCommand::Rex(RexCommand(node)),
            K::RegexCommand => AnyCommand::Regex(RegexCommand(node)),
            K::LookupCommand => AnyCommand::Lookup(LookupCommand(node)),
            K::InputlookupCommand => AnyCommand::Inputlookup(InputlookupCommand(node)),
            K::TableCommand => AnyCommand::Table(TableCommand(node)),
            K::FieldsCommand => AnyCommand::Fields(FieldsCommand(node)),
            K::DedupCommand => AnyCommand::Dedup(DedupCommand(node)),
            K::SortCommand => AnyCommand::Sort(SortCommand(node)),
            K::HeadCommand => AnyCommand::Head(HeadCommand(node)),
            K::TopCommand => AnyCommand::Top(TopCommand(node)),
            K::ConvertCommand => AnyCommand::Convert(ConvertCommand(node)),
            K::ReplaceCommand => AnyCommand::Replace(ReplaceCommand(node)),
            K::StrcatCommand => AnyCommand::Strcat(StrcatCommand(node)),
            K::TrendlineCommand => AnyCommand::Trendline(TrendlineCommand(node)),
            K::ReturnCommand => AnyCommand::Return(ReturnCommand(node)),
            K::FitCommand => AnyCommand::Fit(FitCommand(node)),
            K::ForeachCommand => AnyCommand::Foreach(ForeachCommand(node)),
            K::KeywordCommand => AnyCommand::Keyword(KeywordCommand(node)),
            K::GenericCommand => AnyCommand::Generic(GenericCommand(node)),
            _ => return None,
        };
        Some(command)
    }

    fn as_cst(&self) -> &SyntaxNode {
        match self {
            AnyCommand::Search(n) => n.as_cst(),
            AnyCommand::Where(n) => n.as_cst(),
            AnyCommand::Eval(n) => n.as_cst(),
            AnyCommand::Fieldformat(n) => n.as_cst(),
            AnyCommand::Stats(n) => n.as_cst(),
            AnyCommand::Tstats(n) => n.as_cst(),
            AnyCommand::Rename(n) => n.as_cst(),
            AnyCommand::Rex(n) => n.as_cst(),
            AnyCommand::Regex(n) => n.as_cst(),
            AnyCommand::Lookup(n) => n.as_cst(),
            AnyCommand::Inputlookup(n) => n.as_cst(),
            AnyCommand::Table(n) => n.as_cst(),
            AnyCommand::Fields(n) => n.as_cst(),
            AnyCommand::Dedup(n) => n.as_cst(),
            AnyCommand::Sort(n) => n.as_cst(),
            AnyCommand::Head(n) => n.as_cst(),
            AnyCommand::Top(n) => n.as_cst(),
            AnyCommand::Convert(n) => n.as_cst(),
            AnyCommand::Replace(n) => n.as_cst(),
            AnyCommand::Strcat(n) => n.as_cst(),
            AnyCommand::Trendline(n) => n.as_cst(),
            AnyCommand::Return(n) => n.as_cst(),
            AnyCommand::Fit(n) => n.as_cst(),
            AnyCommand::Foreach(n) => n.as_cst(),
            AnyCommand::Keyword(n) => n.as_cst(),
            AnyCommand::Generic(n) => n.as_cst(),
        }
    }
}

impl AnyCommand {
    /// The leading keyword or identifier token.
    pub fn keyword(&self) -> Option<SyntaxToken> {
        first_token(self.as_cst())
    }
}

/// Accessors shared by every command node. Commands keep options, clauses
/// and arguments as direct children, so one set of lookups serves them all.
pub trait CommandParts: CstNode {
    fn keyword(&self) -> Option<SyntaxToken> {
        first_token(self.as_cst())
    }

    fn options(&self) -> Children<OptionArg> {
        children(self.as_cst())
    }

    fn field_lists(&self) -> Children<FieldList> {
        children(self.as_cst())
    }

    /// Field items directly under the command, outside any list.
    fn field_items(&self) -> Children<FieldItem> {
        children(self.as_cst())
    }

    fn by_clause(&self) -> Option<ByClause> {
        child(self.as_cst())
    }

    fn over_clause(&self) -> Option<OverClause> {
        child(self.as_cst())
    }

    fn where_clause(&self) -> Option<WhereClause> {
        child(self.as_cst())
    }

    fn from_clause(&self) -> Option<FromClause> {
        child(self.as_cst())
    }

    fn into_clause(&self) -> Option<IntoClause> {
        child(self.as_cst())
    }

    fn subsearches(&self) -> Children<Subsearch> {
        children(self.as_cst())
    }

    fn literals(&self) -> Children<Literal> {
        children(self.as_cst())
    }

    fn arguments(&self) -> Children<Argument> {
        children(self.as_cst())
    }

    fn aggregations(&self) -> Children<Aggregation> {
        children(self.as_cst())
    }

    fn field_calls(&self) -> Children<FieldCall> {
        children(self.as_cst())
    }

    fn sort_fields(&self) -> Children<SortField> {
        children(self.as_cst())
    }

    /// Direct child token of `kind`.
    fn token(&self, kind: SyntaxKind) -> Option<SyntaxToken> {
        token_of(self.as_cst(), kind)
    }

    /// Direct child nodes in source order, for bodies whose order matters.
    fn child_nodes(&self) -> rowan::SyntaxNodeChildren<SplLang> {
        self.as_cst().children()
    }
}

macro_rules! command_parts {
    ($($name:ident),* $(,)?) => {
        $(impl CommandParts for $name {})*
    };
}

command_parts!(
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
    KeywordCommand,
    GenericCommand,
);

impl SearchCommand {
    pub fn search(&self) -> Option<SearchExpr> {
        child(&self.0)
    }
}

impl WhereCommand {
    pub fn condition(&self) -> Option<Expr> {
        child(&self.0)
    }
}

impl EvalCommand {
    pub fn assignments(&self) -> Children<Assignment> {
        children(&self.0)
    }
}

impl FieldformatCommand {
    pub fn assignments(&self) -> Children<Assignment> {
        children(&self.0)
    }
}

impl RenameCommand {
    pub fn pairs(&self) -> Children<RenamePair> {
        children(&self.0)
    }
}

impl HeadCommand {
    /// The leading `N` is a limit, not a condition: a bare number literal
    /// only ever appears in that position.
    pub fn condition(&self) -> Option<Expr> {
        children::<Expr>(&self.0).find(|expr| match expr {
            Expr::Literal(lit) => lit
                .token()
                .is_none_or(|t| t.kind() != SyntaxKind::NumberLiteral),
            _ => true,
        })
    }
}

impl LookupCommand {
    pub fn output(&self) -> Option<OutputClause> {
        child(&self.0)
    }
}

impl ReplaceCommand {
    pub fn pairs(&self) -> Children<ReplacePair> {
        children(&self.0)
    }
}
