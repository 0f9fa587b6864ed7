//! Extraction, lookup and data-access commands, plus the generic fallback.

use regex_syntax::ast::{self as regex_ast, GroupKind};

use crate::ast::{
    CollectCommand, DatamodelCommand, ExtractCommand, FieldMapping, GenericCommand,
    InputlookupCommand, LoadjobCommand, LookupCommand, LookupOutputMode, MetadataCommand,
    OutputlookupCommand, RegexCommand, RestCommand, RexCommand, SavedsearchCommand,
    SourceLocation, SpathCommand,
};
use crate::parser::SyntaxKind;
use crate::parser::cst::SyntaxNode;
use crate::parser::nodes::{self, CommandParts};

use super::Lowering;
use super::helpers::{Args, parse_u64, unquote};

const DEFAULT_FIELD: &str = "_raw";

impl Lowering<'_> {
    pub(crate) fn rex_command(&self, node: &nodes::RexCommand) -> RexCommand {
        let options = self.options(node.options());
        let pattern = node
            .token(SyntaxKind::StringLiteral)
            .map(|t| unquote(t.text()))
            .unwrap_or_default();
        RexCommand {
            field: options
                .get("field")
                .cloned()
                .unwrap_or_else(|| DEFAULT_FIELD.to_string()),
            extracted_fields: named_groups(&pattern),
            pattern,
            mode: options.get("mode").cloned(),
            max_match: options.get("max_match").and_then(|v| parse_u64(v)),
            location: self.node_loc(node),
        }
    }

    /// `regex [field(=|!=)] "pattern"`.
    pub(crate) fn regex_command(&self, node: &nodes::RegexCommand) -> RegexCommand {
        let negated = node.token(SyntaxKind::NotEquals).is_some();
        let has_field =
            negated || node.token(SyntaxKind::Equals).is_some();
        let field = has_field
            .then(|| {
                node.as_cst()
                    .children_with_tokens()
                    .filter_map(|e| e.into_token())
                    .filter(|t| !t.kind().is_trivia())
                    .nth(1)
                    .map(|t| t.text().to_string())
            })
            .flatten()
            .unwrap_or_else(|| DEFAULT_FIELD.to_string());
        let pattern = match node.token(SyntaxKind::StringLiteral) {
            Some(token) => unquote(token.text()),
            None => node
                .arguments()
                .next()
                .map(|a| self.text(&a).to_string())
                .unwrap_or_default(),
        };
        RegexCommand {
            field,
            negated,
            pattern,
            location: self.node_loc(node),
        }
    }

    fn mappings(&self, entries: impl Iterator<Item = nodes::FieldEntry>) -> Vec<FieldMapping> {
        entries
            .filter_map(|entry| self.field_entry(&entry))
            .map(|(field, alias)| FieldMapping { field, alias })
            .collect()
    }

    pub(crate) fn lookup_command(&self, node: &nodes::LookupCommand) -> LookupCommand {
        let output = node.output();
        let output_mode = output.as_ref().and_then(|o| o.keyword()).map(|k| match k.kind() {
            SyntaxKind::Outputnew => LookupOutputMode::Outputnew,
            _ => LookupOutputMode::Output,
        });
        LookupCommand {
            table: node.arguments().next().map(|a| unquote(self.text(&a))),
            input_fields: self.mappings(node.field_lists().flat_map(|list| list.entries())),
            output_mode,
            output_fields: output
                .map(|o| self.mappings(o.entries()))
                .unwrap_or_default(),
            options: self.options(node.options()),
            location: self.node_loc(node),
        }
    }

    pub(crate) fn inputlookup_command(&self, node: &nodes::InputlookupCommand) -> InputlookupCommand {
        InputlookupCommand {
            table: node.arguments().next().map(|a| unquote(self.text(&a))),
            where_clause: node
                .where_clause()
                .and_then(|w| w.search())
                .map(|s| self.search_expression(&s)),
            options: self.options(node.options()),
            location: self.node_loc(node),
        }
    }

    pub(crate) fn outputlookup(&self, args: Args, location: SourceLocation) -> OutputlookupCommand {
        OutputlookupCommand {
            table: args.value(0),
            options: args.options,
            location,
        }
    }

    /// `spath [input=f] [output=f] [path=p | p]`.
    pub(crate) fn spath(&self, args: Args, location: SourceLocation) -> SpathCommand {
        SpathCommand {
            input: args.option("input").map(str::to_string),
            output: args.option("output").map(str::to_string),
            path: args.option("path").map(str::to_string).or_else(|| args.value(0)),
            location,
        }
    }

    pub(crate) fn extract(&self, args: Args, location: SourceLocation) -> ExtractCommand {
        ExtractCommand {
            options: args.options,
            location,
        }
    }

    pub(crate) fn rest(&self, args: Args, location: SourceLocation) -> RestCommand {
        RestCommand {
            endpoint: args.value(0),
            options: args.options,
            location,
        }
    }

    pub(crate) fn metadata(&self, args: Args, location: SourceLocation) -> MetadataCommand {
        MetadataCommand {
            metadata_type: args.option("type").map(str::to_string),
            options: args.options,
            location,
        }
    }

    /// `datamodel [model [dataset [mode]]]`.
    pub(crate) fn datamodel(&self, args: Args, location: SourceLocation) -> DatamodelCommand {
        DatamodelCommand {
            model: args.value(0),
            dataset: args.value(1),
            mode: args.value(2),
            location,
        }
    }

    pub(crate) fn loadjob(&self, args: Args, location: SourceLocation) -> LoadjobCommand {
        LoadjobCommand {
            job: args
                .option("savedsearch")
                .map(str::to_string)
                .or_else(|| args.value(0)),
            options: args.options,
            location,
        }
    }

    pub(crate) fn savedsearch(&self, args: Args, location: SourceLocation) -> SavedsearchCommand {
        SavedsearchCommand {
            name: args.value(0),
            options: args.options,
            location,
        }
    }

    pub(crate) fn collect(&self, args: Args, location: SourceLocation) -> CollectCommand {
        CollectCommand {
            index: args.option("index").map(str::to_string),
            options: args.options,
            location,
        }
    }

    /// Unknown commands keep their name, options, raw arguments and
    /// recursively lowered subsearches.
    pub(crate) fn generic_command(&self, node: &SyntaxNode) -> GenericCommand {
        let command_name = node
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_ascii_lowercase())
            .unwrap_or_default();
        let args = self.args(node);
        let mut arguments = Vec::new();
        for positional in &args.positionals {
            arguments.push(positional.value.clone());
            if let Some(alias) = &positional.alias {
                arguments.push("as".to_string());
                arguments.push(alias.clone());
            }
        }
        arguments.extend(args.by_fields.iter().map(|f| f.field_name.clone()));
        GenericCommand {
            command_name,
            options: args.options,
            arguments,
            subsearches: args.subsearches,
            location: self.syntax_loc(node),
        }
    }
}

/// Names of the capture groups in `pattern`, in order.
///
/// PCRE syntax that `regex-syntax` rejects falls back to a textual scan for
/// `(?<name>`, `(?P<name>` and `(?'name'`.
pub(crate) fn named_groups(pattern: &str) -> Vec<String> {
    match regex_ast::parse::Parser::new().parse(pattern) {
        Ok(ast) => {
            let mut names = Vec::new();
            collect_group_names(&ast, &mut names);
            names
        }
        Err(_) => scan_group_names(pattern),
    }
}

fn collect_group_names(ast: &regex_ast::Ast, names: &mut Vec<String>) {
    match ast {
        regex_ast::Ast::Group(group) => {
            if let GroupKind::CaptureName { name, .. } = &group.kind {
                names.push(name.name.clone());
            }
            collect_group_names(&group.ast, names);
        }
        regex_ast::Ast::Repetition(rep) => collect_group_names(&rep.ast, names),
        regex_ast::Ast::Concat(concat) => {
            concat.asts.iter().for_each(|a| collect_group_names(a, names))
        }
        regex_ast::Ast::Alternation(alt) => {
            alt.asts.iter().for_each(|a| collect_group_names(a, names))
        }
        _ => {}
    }
}

fn scan_group_names(pattern: &str) -> Vec<String> {
    let mut names = Vec::new();
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        if bytes[i] == b'(' && bytes.get(i + 1) == Some(&b'?') {
            let rest = &pattern[i + 2..];
            let (body, close) = if let Some(body) = rest.strip_prefix("P<") {
                (body, '>')
            } else if let Some(body) = rest.strip_prefix('<') {
                (body, '>')
            } else if let Some(body) = rest.strip_prefix('\'') {
                (body, '\'')
            } else {
                i += 1;
                continue;
            };
            // `(?<=` and `(?<!` are lookbehinds.
            let is_name = body
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
            if is_name && let Some(end) = body.find(close) {
                names.push(body[..end].to_string());
            }
        }
        i += 1;
    }
    names
}
