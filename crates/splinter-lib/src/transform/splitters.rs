//! Commands that run nested pipelines: join, append, union, multisearch,
//! foreach, map, plus `return`, which feeds a subsearch back to its parent.

use crate::ast::{
    AppendCommand, AppendVariant, ForeachCommand, JoinCommand, MapCommand, MultisearchCommand,
    ReturnCommand, ReturnField, SourceLocation, UnionCommand,
};
use crate::parser::SyntaxKind;
use crate::parser::nodes::{self, CommandParts, FieldItem, OptionArg};

use super::Lowering;
use super::helpers::{Args, parse_u64};

impl Lowering<'_> {
    pub(crate) fn join(&self, mut args: Args, location: SourceLocation) -> JoinCommand {
        let subsearch = (!args.subsearches.is_empty()).then(|| args.subsearches.remove(0));
        JoinCommand {
            join_type: args.option("type").map(str::to_string),
            fields: args.field_refs(),
            options: args.options,
            subsearch,
            location,
        }
    }

    pub(crate) fn append(
        &self,
        keyword: SyntaxKind,
        mut args: Args,
        location: SourceLocation,
    ) -> AppendCommand {
        let variant = match keyword {
            SyntaxKind::Appendcols => AppendVariant::Appendcols,
            SyntaxKind::Appendpipe => AppendVariant::Appendpipe,
            _ => AppendVariant::Append,
        };
        let subsearch = (!args.subsearches.is_empty()).then(|| args.subsearches.remove(0));
        AppendCommand {
            variant,
            options: args.options,
            subsearch,
            location,
        }
    }

    pub(crate) fn union(&self, args: Args, location: SourceLocation) -> UnionCommand {
        UnionCommand {
            datasets: args.values(),
            options: args.options,
            subsearches: args.subsearches,
            location,
        }
    }

    pub(crate) fn multisearch(&self, args: Args, location: SourceLocation) -> MultisearchCommand {
        MultisearchCommand {
            subsearches: args.subsearches,
            location,
        }
    }

    /// `map search="..."`, `map savedsearch_name`, or `map [ ... ]`.
    pub(crate) fn map(&self, mut args: Args, location: SourceLocation) -> MapCommand {
        let search = args.option("search").map(str::to_string).or_else(|| args.value(0));
        let subsearch = (!args.subsearches.is_empty()).then(|| args.subsearches.remove(0));
        MapCommand {
            search,
            options: args.options,
            subsearch,
            location,
        }
    }

    pub(crate) fn foreach_command(&self, node: &nodes::ForeachCommand) -> ForeachCommand {
        ForeachCommand {
            fields: node
                .field_lists()
                .flat_map(|list| list.items())
                .map(|item| self.field_ref(&item))
                .collect(),
            options: self.options(node.options()),
            body: node.subsearches().next().map(|s| self.subsearch(&s)),
            location: self.node_loc(node),
        }
    }

    /// `return 5 src_ip dest=dest_ip`: the count, then fields in source
    /// order, `alias=field` renaming on the way out.
    pub(crate) fn return_command(&self, node: &nodes::ReturnCommand) -> ReturnCommand {
        let count = node.literals().next().and_then(|lit| parse_u64(self.text(&lit)));
        let fields = node
            .child_nodes()
            .filter_map(|child| {
                if let Some(item) = FieldItem::cast(child.clone()) {
                    return Some(ReturnField {
                        field: self.field_name(&item),
                        alias: None,
                    });
                }
                let option = OptionArg::cast(child)?;
                Some(ReturnField {
                    field: option.value().map(|v| self.text(&v).to_string())?,
                    alias: option.name().map(|n| n.text().to_string()),
                })
            })
            .collect();
        ReturnCommand {
            count,
            fields,
            location: self.node_loc(node),
        }
    }
}
