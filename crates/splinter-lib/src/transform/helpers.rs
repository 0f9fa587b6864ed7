//! Shared lowering helpers: literal decoding, option maps, and the
//! interpretation of free argument lists.

use crate::ast::{FieldReference, Options, Pipeline, SourceLocation};
use crate::parser::SyntaxKind;
use crate::parser::cst::SyntaxNode;
use crate::parser::nodes::{self, FieldEntry, FieldItem, OptionArg};

use super::Lowering;

/// Strips matching quotes and resolves `\\` and escaped quotes.
///
/// Other backslash sequences are kept verbatim so regular expressions
/// (`"\d+"`) survive. Unquoted text is returned unchanged.
pub fn unquote(text: &str) -> String {
    let bytes = text.as_bytes();
    let quoted = bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0];
    if !quoted {
        return text.to_string();
    }

    let quote = text.chars().next().unwrap_or('"');
    let inner = &text[1..text.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == quote || next == '\\' => out.push(next),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

pub(crate) fn parse_u64(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

/// SPL boolean option values: `true/t/1/yes` and `false/f/0/no`.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Some(true),
        "false" | "f" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Boolean option with a default for absent or unrecognized values.
pub(crate) fn flag(options: &Options, name: &str, default: bool) -> bool {
    options
        .get(name)
        .and_then(|v| parse_bool(v))
        .unwrap_or(default)
}

/// A positional argument of a free argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Positional {
    /// Source text, unquoted when it is a single string literal.
    pub value: String,
    pub alias: Option<String>,
    pub location: SourceLocation,
}

/// Interpreted body of a command that uses the free argument list.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Args {
    pub options: Options,
    pub positionals: Vec<Positional>,
    pub by_fields: Vec<FieldReference>,
    pub over_field: Option<FieldReference>,
    pub subsearches: Vec<Pipeline>,
}

impl Args {
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn option_u64(&self, name: &str) -> Option<u64> {
        self.option(name).and_then(parse_u64)
    }

    pub fn flag(&self, name: &str, default: bool) -> bool {
        flag(&self.options, name, default)
    }

    pub fn value(&self, index: usize) -> Option<String> {
        self.positionals.get(index).map(|p| p.value.clone())
    }

    /// First alias given anywhere in the argument list.
    pub fn alias(&self) -> Option<String> {
        self.positionals.iter().find_map(|p| p.alias.clone())
    }

    pub fn values(&self) -> Vec<String> {
        self.positionals.iter().map(|p| p.value.clone()).collect()
    }

    pub fn field_refs(&self) -> Vec<FieldReference> {
        self.positionals
            .iter()
            .map(|p| FieldReference::new(p.value.clone(), p.location))
            .collect()
    }
}

impl Lowering<'_> {
    /// `name=value` options in source order, names lowercased.
    pub(crate) fn options(&self, options: impl Iterator<Item = OptionArg>) -> Options {
        let mut map = Options::new();
        for option in options {
            if let Some((name, value)) = self.option(&option) {
                map.insert(name, value);
            }
        }
        map
    }

    fn option(&self, option: &OptionArg) -> Option<(String, String)> {
        let name = option.name()?.text().to_ascii_lowercase();
        let value = option
            .value()
            .map(|v| unquote(self.text(&v)))
            .unwrap_or_default();
        Some((name, value))
    }

    /// A field name, unquoted when written as a string.
    pub(crate) fn field_name(&self, item: &FieldItem) -> String {
        unquote(self.text(item))
    }

    pub(crate) fn field_ref(&self, item: &FieldItem) -> FieldReference {
        FieldReference::new(self.field_name(item), self.node_loc(item))
    }

    /// `(field, alias)` of a field-list entry.
    pub(crate) fn field_entry(&self, entry: &FieldEntry) -> Option<(String, Option<String>)> {
        match entry {
            FieldEntry::Plain(item) => Some((self.field_name(item), None)),
            FieldEntry::Aliased(aliased) => {
                let target = aliased.target()?;
                let alias = aliased.alias().map(|a| unquote(self.syntax_text(&a)));
                Some((unquote(self.syntax_text(&target)), alias))
            }
        }
    }

    /// Interprets a free argument list.
    ///
    /// A loose `as name` following a value aliases that value, so
    /// `bin _time span=1h as t` aliases `_time`.
    pub(crate) fn args(&self, node: &SyntaxNode) -> Args {
        let mut args = Args::default();
        let mut pending_alias = false;

        for child in node.children() {
            match child.kind() {
                SyntaxKind::OptionArg => {
                    if let Some(option) = OptionArg::cast(child)
                        && let Some((name, value)) = self.option(&option)
                    {
                        args.options.insert(name, value);
                    }
                }
                SyntaxKind::Argument => {
                    let value = unquote(self.syntax_text(&child));
                    if pending_alias {
                        pending_alias = false;
                        if let Some(last) = args.positionals.last_mut() {
                            last.alias = Some(value);
                            continue;
                        }
                    }
                    if value.eq_ignore_ascii_case("as") && !args.positionals.is_empty() {
                        pending_alias = true;
                        continue;
                    }
                    args.positionals.push(Positional {
                        value,
                        alias: None,
                        location: self.syntax_loc(&child),
                    });
                }
                SyntaxKind::AliasedField => {
                    let mut parts = child.children();
                    let Some(target) = parts.next() else {
                        continue;
                    };
                    let alias = parts.next().map(|a| unquote(self.syntax_text(&a)));
                    args.positionals.push(Positional {
                        value: unquote(self.syntax_text(&target)),
                        alias,
                        location: self.syntax_loc(&target),
                    });
                }
                SyntaxKind::ByClause => {
                    if let Some(by) = nodes::ByClause::cast(child) {
                        args.by_fields.extend(by.fields().map(|f| self.field_ref(&f)));
                    }
                }
                SyntaxKind::OverClause => {
                    args.over_field = nodes::OverClause::cast(child)
                        .and_then(|over| over.field())
                        .map(|f| self.field_ref(&f));
                }
                SyntaxKind::Subsearch => {
                    if let Some(subsearch) = nodes::Subsearch::cast(child) {
                        args.subsearches.push(self.subsearch(&subsearch));
                    }
                }
                _ => {}
            }
        }
        args
    }
}
