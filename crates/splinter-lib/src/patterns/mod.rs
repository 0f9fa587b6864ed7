//! Declarative syntax patterns for keyword commands.
//!
//! Each keyword command has a [`CommandSyntax`] whose pattern describes the
//! arguments after the command keyword. The registry is independent of the
//! parser: it answers "what may come next" for autocomplete and validates a
//! stage from its token stream alone. It must accept everything the grammar
//! in `parser::grammar::commands` accepts; `registry_tests` keeps the two in
//! lockstep with a corpus of valid stages.
//!
//! Patterns are `'static` data built from a small combinator vocabulary:
//!
//! - [`Pattern::Keyword`]: one token, compared case-insensitively (`by`, `as`, `=`)
//! - [`Pattern::Param`]: a typed parameter, see [`ParamType`]
//! - [`Pattern::Seq`], [`Pattern::Optional`], [`Pattern::Choice`]
//! - [`Pattern::Repeat`]: `min` or more items; the separator is optional
//!   between items, as commas are in SPL
//! - [`Pattern::Options`]: zero or more `name=value` pairs

mod interpret;
mod registry;

#[cfg(test)]
mod interpret_tests;

use serde::Serialize;

pub use splinter_core::FieldEffect;

pub use interpret::{Binding, PatternMatchResult, interpret_pattern};
pub use registry::COMMAND_SYNTAX;

/// Kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParamType {
    /// A single field name.
    Field,
    /// A field name that may contain `*`.
    WildcardField,
    /// One or more fields, commas optional.
    FieldList,
    /// A quoted string.
    String,
    Number,
    Integer,
    Boolean,
    /// A relative time or span such as `1h` or `-24h@h`.
    TimeSpan,
    /// An eval expression.
    Expression,
    /// A search predicate up to the end of the stage (or a `BY` clause).
    SearchExpression,
    /// A regular expression, usually quoted.
    Regex,
    /// A bracketed pipeline.
    Subsearch,
    /// `fn` or `fn(args)`.
    Aggregation,
    /// A bare name: lookup table, algorithm, data model.
    Name,
    /// Any single value.
    Any,
}

impl ParamType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::WildcardField => "wildcard field",
            Self::FieldList => "field list",
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::TimeSpan => "time span",
            Self::Expression => "expression",
            Self::SearchExpression => "search expression",
            Self::Regex => "regex",
            Self::Subsearch => "subsearch",
            Self::Aggregation => "aggregation",
            Self::Name => "name",
            Self::Any => "value",
        }
    }
}

/// A named, typed parameter and what it does to the field it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
    pub effect: FieldEffect,
}

/// A documented `name=value` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub ty: ParamType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Keyword(&'static str),
    Param(Param),
    Seq(&'static [Pattern]),
    Optional(&'static Pattern),
    Repeat {
        pattern: &'static Pattern,
        separator: Option<&'static str>,
        min: u32,
    },
    Choice(&'static [Pattern]),
    /// Any option is accepted; the listed ones are offered as completions.
    Options(&'static [OptionSpec]),
}

/// Registry entry for one keyword command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSyntax {
    pub name: &'static str,
    /// Other spellings of the keyword (`bucket` for `bin`).
    pub aliases: &'static [&'static str],
    /// One-line synopsis shown in hints and `splinter info`.
    pub usage: &'static str,
    /// Arguments after the command keyword.
    pub syntax: &'static Pattern,
}

impl CommandSyntax {
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Matches a whole stage, command keyword included.
    ///
    /// The keyword is checked against the name and aliases; `consumed`
    /// counts it.
    pub fn interpret_stage(&self, tokens: &[crate::Token]) -> PatternMatchResult {
        match tokens.first() {
            Some(first) if self.matches_name(&first.text) => {
                let mut result = interpret_pattern(self.syntax, &tokens[1..]);
                result.consumed += 1;
                result
            }
            first => PatternMatchResult::mismatch(
                first.map(|t| t.text.as_str()),
                vec![format!("`{}`", self.name)],
            ),
        }
    }
}

/// Pattern registered for `name` (case-insensitive, aliases included).
pub fn get_command_pattern(name: &str) -> Option<&'static CommandSyntax> {
    COMMAND_SYNTAX.iter().find(|c| c.matches_name(name))
}

pub fn has_pattern(name: &str) -> bool {
    get_command_pattern(name).is_some()
}

/// Usage line for `name`, if it has a pattern.
pub fn usage(name: &str) -> Option<&'static str> {
    get_command_pattern(name).map(|c| c.usage)
}
