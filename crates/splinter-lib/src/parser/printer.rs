//! Indented text dump of the CST.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use super::Parse;
use super::cst::SyntaxNode;

/// Builder for CST dumps: one line per node or token, children indented by
/// two spaces, token text in quotes.
pub struct CstPrinter<'p> {
    parse: &'p Parse,
    trivia: bool,
    spans: bool,
}

impl<'p> CstPrinter<'p> {
    pub fn new(parse: &'p Parse) -> Self {
        Self {
            parse,
            trivia: false,
            spans: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(&self.parse.syntax(), 0, w)
    }

    fn format_node(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        writeln!(w, "{}{:?}{}", prefix, node.kind(), self.span_str(node.text_range()))?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_node(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        writeln!(
                            w,
                            "{}  {:?}{} {:?}",
                            prefix,
                            t.kind(),
                            self.span_str(t.text_range()),
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
    }
}

impl Parse {
    pub fn printer(&self) -> CstPrinter<'_> {
        CstPrinter::new(self)
    }

    /// The tree without trivia.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }

    pub fn dump_full(&self) -> String {
        self.printer().with_trivia(true).dump()
    }
}
