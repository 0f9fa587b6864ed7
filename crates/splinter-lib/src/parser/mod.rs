//! Parser infrastructure for SPL.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green
//! tree builder:
//!
//! - Zero-copy parsing: lexemes carry spans, text is sliced only when building tree nodes
//! - Trivia buffering: whitespace, comments and lexer garbage are attached as leading trivia
//! - Checkpoint-based wrapping: binary expressions, `OR` chains and aliases wrap
//!   already-parsed children retroactively
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree.
//!
//! 1. An unexpected token inside a stage is reported once, then everything up
//!    to the next `|` (or the `]` closing the current subsearch) is wrapped in
//!    an `Error` node
//! 2. Missing expected tokens emit a diagnostic but don't consume
//! 3. Unclosed `[`/`(` are reported at the point the parser gave up, with a
//!    related span at the opener
//! 4. Past the recursion limit the rest of the subtree goes into a single
//!    `Error` node; this is reported, never fatal

pub mod cst;
pub mod lexer;
pub mod nodes;

mod core;
mod grammar;
mod invariants;
mod printer;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod nodes_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use nodes::Root;

pub use core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use printer::CstPrinter;

use crate::diagnostics::Diagnostics;
use lexer::Lexeme;

/// Parse result containing the green tree.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn root(&self) -> Root {
        Root::cast(self.syntax()).expect("parser always produces Root")
    }
}

/// Parses pre-lexed source with the given recursion limit.
pub fn parse_lexemes(source: &str, lexemes: Vec<Lexeme>, recursion_limit: u32) -> (Parse, Diagnostics) {
    let mut parser = Parser::new(source, lexemes).with_recursion_limit(recursion_limit);
    parser.parse_root();
    let (cst, diagnostics) = parser.finish();
    (Parse { cst }, diagnostics)
}

/// Main entry point for tree-level consumers.
pub fn parse(source: &str) -> (Parse, Diagnostics) {
    parse_lexemes(source, lexer::lex(source), DEFAULT_RECURSION_LIMIT)
}
