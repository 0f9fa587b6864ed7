//! The search predicate sublanguage: `index=main error NOT (status<400 OR host IN (a, b))`.

use serde::Serialize;

use super::location::SourceLocation;
use super::Pipeline;

/// Implicit conjunction of search terms.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SearchExpression {
    pub terms: Vec<SearchTerm>,
    pub referenced_fields: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SearchTerm {
    Or(SearchOr),
    Not(SearchNot),
    Group(SearchGroup),
    Comparison(SearchComparison),
    In(SearchIn),
    Keyword(SearchKeyword),
    Macro(SearchMacro),
    Subsearch(Subsearch),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOr {
    pub operands: Vec<SearchTerm>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchNot {
    pub operand: Box<SearchTerm>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchGroup {
    pub terms: Vec<SearchTerm>,
    pub location: SourceLocation,
}

/// `field <op> value`. `value` is the raw glued text, unquoted when it was a
/// single string literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchComparison {
    pub field: String,
    pub operator: String,
    pub value: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIn {
    pub field: String,
    pub values: Vec<String>,
    pub location: SourceLocation,
}

/// Bare term matched against raw event text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchKeyword {
    pub text: String,
    pub quoted: bool,
    pub location: SourceLocation,
}

/// `` `name(args)` `` with the backticks removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMacro {
    pub name: String,
    pub arguments: Vec<String>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subsearch {
    pub pipeline: Pipeline,
    pub location: SourceLocation,
}

impl SearchTerm {
    pub fn location(&self) -> SourceLocation {
        match self {
            SearchTerm::Or(t) => t.location,
            SearchTerm::Not(t) => t.location,
            SearchTerm::Group(t) => t.location,
            SearchTerm::Comparison(t) => t.location,
            SearchTerm::In(t) => t.location,
            SearchTerm::Keyword(t) => t.location,
            SearchTerm::Macro(t) => t.location,
            SearchTerm::Subsearch(t) => t.location,
        }
    }

    /// Collects compared field names, skipping wildcards and subsearches.
    fn collect_fields(&self, out: &mut Vec<String>) {
        match self {
            SearchTerm::Comparison(t) => push_field(out, &t.field),
            SearchTerm::In(t) => push_field(out, &t.field),
            SearchTerm::Or(t) => t.operands.iter().for_each(|op| op.collect_fields(out)),
            SearchTerm::Not(t) => t.operand.collect_fields(out),
            SearchTerm::Group(t) => t.terms.iter().for_each(|term| term.collect_fields(out)),
            SearchTerm::Keyword(_) | SearchTerm::Macro(_) | SearchTerm::Subsearch(_) => {}
        }
    }

    /// Subsearches nested anywhere in this term.
    pub fn subsearches(&self) -> Vec<&Pipeline> {
        match self {
            SearchTerm::Subsearch(t) => vec![&t.pipeline],
            SearchTerm::Or(t) => t.operands.iter().flat_map(|op| op.subsearches()).collect(),
            SearchTerm::Not(t) => t.operand.subsearches(),
            SearchTerm::Group(t) => t.terms.iter().flat_map(|term| term.subsearches()).collect(),
            _ => Vec::new(),
        }
    }
}

impl SearchExpression {
    pub fn new(terms: Vec<SearchTerm>, location: SourceLocation) -> Self {
        let referenced_fields = referenced_fields(&terms);
        Self {
            terms,
            referenced_fields,
            location,
        }
    }

    pub fn subsearches(&self) -> Vec<&Pipeline> {
        self.terms.iter().flat_map(|t| t.subsearches()).collect()
    }
}

fn push_field(out: &mut Vec<String>, name: &str) {
    if !name.contains('*') && !out.iter().any(|f| f == name) {
        out.push(name.to_string());
    }
}

fn referenced_fields(terms: &[SearchTerm]) -> Vec<String> {
    let mut fields = Vec::new();
    for term in terms {
        term.collect_fields(&mut fields);
    }
    fields
}
