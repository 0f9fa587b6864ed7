#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Static metadata for SPL commands and functions.
//!
//! Two tables:
//! - **Commands** ([`COMMANDS`]): category, field effects, performance risk
//! - **Functions** ([`FUNCTIONS`]): category, return type, parameter signature
//!
//! Both tables are plain `static` slices. Lookups are case-insensitive linear
//! scans; there is no lazily initialized state, so every query is safe to call
//! from any thread.

mod commands;
mod functions;

#[cfg(test)]
mod commands_tests;

pub use commands::COMMANDS;
pub use functions::FUNCTIONS;

use serde::Serialize;

// ============================================================================
// Shared vocabulary
// ============================================================================

/// What a command (or one of its parameters) does to the event's field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldEffect {
    Creates,
    Modifies,
    Drops,
    None,
}

/// Field-effect summary of a whole command.
///
/// `preserves_others` is false for commands that replace the field set
/// (`stats`, `table`, `fields`): fields not named in their arguments disappear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEffects {
    pub creates: bool,
    pub modifies: bool,
    pub drops: bool,
    pub preserves_others: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandCategory {
    Search,
    Filtering,
    FieldCreation,
    FieldManipulation,
    Aggregation,
    Ordering,
    Combining,
    Extraction,
    Generating,
    Multivalue,
    Lookup,
    Output,
    Admin,
    MachineLearning,
    Formatting,
}

impl CommandCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Filtering => "filtering",
            Self::FieldCreation => "field-creation",
            Self::FieldManipulation => "field-manipulation",
            Self::Aggregation => "aggregation",
            Self::Ordering => "ordering",
            Self::Combining => "combining",
            Self::Extraction => "extraction",
            Self::Generating => "generating",
            Self::Multivalue => "multivalue",
            Self::Lookup => "lookup",
            Self::Output => "output",
            Self::Admin => "admin",
            Self::MachineLearning => "machine-learning",
            Self::Formatting => "formatting",
        }
    }
}

/// Rough cost class used by linters to flag expensive pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceRisk {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionCategory {
    Aggregate,
    EventOrder,
    Comparison,
    Conversion,
    Cryptographic,
    DateTime,
    Informational,
    Json,
    Math,
    Multivalue,
    Statistical,
    Text,
    Trigonometry,
}

impl FunctionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aggregate => "aggregate",
            Self::EventOrder => "event-order",
            Self::Comparison => "comparison",
            Self::Conversion => "conversion",
            Self::Cryptographic => "cryptographic",
            Self::DateTime => "date-time",
            Self::Informational => "informational",
            Self::Json => "json",
            Self::Math => "math",
            Self::Multivalue => "multivalue",
            Self::Statistical => "statistical",
            Self::Text => "text",
            Self::Trigonometry => "trigonometry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnType {
    Number,
    String,
    Boolean,
    Multivalue,
    Json,
    Any,
}

/// Where a function may be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionContext {
    /// `eval`, `where`, `fieldformat` expressions.
    Eval,
    /// Aggregations in `stats`, `chart`, `timechart` and friends.
    Stats,
    Both,
}

impl FunctionContext {
    pub fn allows_eval(self) -> bool {
        matches!(self, Self::Eval | Self::Both)
    }

    pub fn allows_stats(self) -> bool {
        matches!(self, Self::Stats | Self::Both)
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub category: CommandCategory,
    pub description: &'static str,
    pub effects: FieldEffects,
    /// Fields the command always adds, independent of its arguments.
    pub implicit_fields: &'static [&'static str],
    pub risk: PerformanceRisk,
    pub risk_note: Option<&'static str>,
    /// Produces events without consuming the incoming result set.
    pub generating: bool,
    /// Processes events one at a time without seeing the whole result set.
    pub streaming: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParam {
    pub name: &'static str,
    pub optional: bool,
    pub variadic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub name: &'static str,
    pub category: FunctionCategory,
    pub return_type: ReturnType,
    pub params: &'static [FunctionParam],
    pub context: FunctionContext,
    pub description: &'static str,
}

impl FunctionInfo {
    /// Smallest number of arguments a call must pass.
    pub fn min_arity(&self) -> usize {
        self.params.iter().filter(|p| !p.optional).count()
    }

    /// `None` when the last parameter is variadic.
    pub fn max_arity(&self) -> Option<usize> {
        if self.params.iter().any(|p| p.variadic) {
            None
        } else {
            Some(self.params.len())
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Looks up a command by name or alias, ignoring ASCII case.
pub fn get_command_info(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|info| {
        info.name.eq_ignore_ascii_case(name)
            || info.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    })
}

/// Looks up a function by name, ignoring ASCII case.
///
/// Percentile shorthands (`p95`, `perc99`, `exactperc50`, `upperperc75`) resolve
/// to their base entry.
pub fn get_function_info(name: &str) -> Option<&'static FunctionInfo> {
    let lookup = |n: &str| FUNCTIONS.iter().find(|f| f.name.eq_ignore_ascii_case(n));
    lookup(name).or_else(|| lookup(percentile_base(name)?))
}

pub fn get_function_return_type(name: &str) -> Option<ReturnType> {
    get_function_info(name).map(|f| f.return_type)
}

/// Whether the command removes fields from the events passing through it.
///
/// Unknown commands report `false`.
pub fn command_drops_fields(name: &str) -> bool {
    get_command_info(name).is_some_and(|info| info.effects.drops)
}

/// Names of every command that can add fields to events.
pub fn get_field_creating_commands() -> Vec<&'static str> {
    COMMANDS
        .iter()
        .filter(|info| info.effects.creates)
        .map(|info| info.name)
        .collect()
}

pub fn get_commands_by_category(category: CommandCategory) -> Vec<&'static CommandInfo> {
    COMMANDS.iter().filter(|c| c.category == category).collect()
}

pub fn get_functions_by_category(category: FunctionCategory) -> Vec<&'static FunctionInfo> {
    FUNCTIONS.iter().filter(|f| f.category == category).collect()
}

/// Canonical command names, in table order.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

/// Function names, in table order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|f| f.name)
}

fn percentile_base(name: &str) -> Option<&'static str> {
    let lower = name.to_ascii_lowercase();
    let prefixes: [(&str, &'static str); 4] = [
        ("exactperc", "exactperc"),
        ("upperperc", "upperperc"),
        ("perc", "perc"),
        ("p", "perc"),
    ];
    prefixes.iter().find_map(|(prefix, base)| {
        let digits = lower.strip_prefix(prefix)?;
        let is_number = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit() || c == '.');
        is_number.then_some(*base)
    })
}
