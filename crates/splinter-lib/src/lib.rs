//! Splinter: an error-tolerant parser for the SPL search language.
//!
//! Text goes through the lexer, the parser (a lossless CST with diagnostics)
//! and the lowering pass, producing a typed [`ast::Pipeline`]. Nothing here
//! fails on bad input: errors are collected and a best-effort AST is always
//! returned.
//!
//! # Example
//!
//! ```
//! use splinter_lib::{Command, parse};
//!
//! let result = parse("index=main | stats count by host");
//! assert!(result.success);
//!
//! let Some(Command::Stats(stats)) = result.ast.stages[1].as_command() else {
//!     panic!("expected stats");
//! };
//! assert_eq!(stats.by_fields[0].field_name, "host");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod parser;
pub mod patterns;
pub mod transform;

#[cfg(test)]
mod lib_tests;

use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};

pub use ast::{Command, Pipeline, PipelineStage, SourceLocation};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use parser::lexer::{LexError, LexResult, Token, TokenKind, tokenize};
pub use patterns::{
    CommandSyntax, PatternMatchResult, get_command_pattern, has_pattern, interpret_pattern,
};
pub use splinter_core::{
    CommandCategory, CommandInfo, FieldEffect, FieldEffects, FunctionCategory, FunctionInfo,
    PerformanceRisk, ReturnType, command_drops_fields, get_command_info, get_commands_by_category,
    get_field_creating_commands, get_function_info, get_function_return_type,
    get_functions_by_category,
};

use ast::LineIndex;
use diagnostics::DiagnosticMessage;
use parser::DEFAULT_RECURSION_LIMIT;

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Nesting depth (subsearches, parentheses) before the parser gives up
    /// on a subtree.
    pub recursion_limit: u32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Configures and runs a parse.
///
/// ```
/// use splinter_lib::QueryBuilder;
///
/// let result = QueryBuilder::new("| makeresults count=3")
///     .with_recursion_limit(64)
///     .parse();
/// assert!(result.success);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'s> {
    source: &'s str,
    config: ParseConfig,
}

impl<'s> QueryBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            config: ParseConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn parse(self) -> ParseResult {
        let source = self.source;
        let _span = tracing::debug_span!("parse", len = source.len()).entered();

        let lexemes = parser::lexer::lex(source);
        let index = LineIndex::new(source);
        let lexed = parser::lexer::split_lexemes(source, &index, &lexemes);

        let (cst, diagnostics) =
            parser::parse_lexemes(source, lexemes, self.config.recursion_limit);
        let ast = transform::lower(source, &cst.root());

        let parse_errors: Vec<ParseError> = diagnostics
            .filtered()
            .iter()
            .map(|diag| ParseError::from_diagnostic(diag, &index, &lexed.tokens))
            .collect();

        tracing::debug!(
            tokens = lexed.tokens.len(),
            lex_errors = lexed.errors.len(),
            parse_errors = parse_errors.len(),
            stages = ast.stages.len(),
            "parsed query"
        );

        ParseResult {
            success: lexed.errors.is_empty() && parse_errors.is_empty(),
            ast,
            lex_errors: lexed.errors,
            parse_errors,
            tokens: lexed.tokens,
            cst,
            diagnostics,
        }
    }
}

/// Parses `source` with the default configuration.
pub fn parse(source: &str) -> ParseResult {
    QueryBuilder::new(source).parse()
}

/// A grammar error, positioned in the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ParseError {
    #[serde(serialize_with = "serialize_kind")]
    pub kind: DiagnosticKind,
    pub message: String,
    /// The token the error starts at, `None` at end of input.
    pub token: Option<Token>,
    pub location: SourceLocation,
    pub hint: Option<String>,
}

impl ParseError {
    fn from_diagnostic(diag: &DiagnosticMessage, index: &LineIndex<'_>, tokens: &[Token]) -> Self {
        let start = usize::from(diag.range.start());
        Self {
            kind: diag.kind,
            message: diag.message.clone(),
            token: tokens.iter().find(|t| t.end_offset > start).cloned(),
            location: index.location(diag.range),
            hint: diag.hints.first().cloned(),
        }
    }
}

fn serialize_kind<S: Serializer>(kind: &DiagnosticKind, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{:?}", kind))
}

/// Everything one parse produces.
///
/// `success` is true iff both error lists are empty. `ast` is always present,
/// partial when there were errors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub success: bool,
    pub ast: Pipeline,
    pub lex_errors: Vec<LexError>,
    pub parse_errors: Vec<ParseError>,
    pub tokens: Vec<Token>,
    #[serde(skip)]
    cst: parser::Parse,
    #[serde(skip)]
    diagnostics: Diagnostics,
}

impl ParseResult {
    /// The concrete syntax tree, trivia included.
    pub fn cst(&self) -> &parser::Parse {
        &self.cst
    }

    /// Parser diagnostics before de-duplication.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.lex_errors.len() + self.parse_errors.len()
    }

    /// Lexical and parse errors together, ready for a printer.
    pub fn all_diagnostics(&self) -> Diagnostics {
        let mut all = Diagnostics::new();
        for error in &self.lex_errors {
            let start = TextSize::from(error.offset as u32);
            let range = TextRange::at(start, TextSize::from(error.length as u32));
            all.report(DiagnosticKind::UnrecognizedInput, range)
                .message(format!("`{}`", error.text))
                .emit();
        }
        all.extend(self.diagnostics.clone());
        all
    }

    /// Renders every error against `source` as annotated snippets.
    pub fn render(&self, source: &str, colored: bool) -> String {
        self.all_diagnostics().render_colored(source, colored)
    }
}
