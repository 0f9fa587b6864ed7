//! Commands that filter events or select, order and rename fields.

use crate::ast::{
    DedupCommand, FieldRenaming, FieldsCommand, FieldsMode, HeadCommand, MakemvCommand,
    MvcombineCommand, MvexpandCommand, NomvCommand, RenameCommand, SearchCommand, SearchExpression,
    SortCommand, SortKey, SourceLocation, TableCommand, TailCommand, WhereCommand,
};
use crate::parser::SyntaxKind;
use crate::parser::nodes::{self, CommandParts};

use super::Lowering;
use super::helpers::{Args, parse_u64};

impl Lowering<'_> {
    pub(crate) fn search_command(&self, node: &nodes::SearchCommand) -> SearchCommand {
        let location = self.node_loc(node);
        let expression = match node.search() {
            Some(search) => self.search_expression(&search),
            None => SearchExpression::new(Vec::new(), location),
        };
        SearchCommand {
            expression,
            location,
        }
    }

    pub(crate) fn where_command(&self, node: &nodes::WhereCommand) -> WhereCommand {
        let condition = node.condition().and_then(|e| self.expression(&e));
        let referenced_fields = condition
            .as_ref()
            .map(|c| c.referenced_fields())
            .unwrap_or_default();
        WhereCommand {
            condition,
            referenced_fields,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn table_command(&self, node: &nodes::TableCommand) -> TableCommand {
        TableCommand {
            fields: self.list_fields(node),
            location: self.node_loc(node),
        }
    }

    pub(crate) fn fields_command(&self, node: &nodes::FieldsCommand) -> FieldsCommand {
        let mode = if node.token(SyntaxKind::Minus).is_some() {
            FieldsMode::Remove
        } else {
            FieldsMode::Keep
        };
        FieldsCommand {
            mode,
            fields: self.list_fields(node),
            location: self.node_loc(node),
        }
    }

    fn list_fields(&self, node: &impl CommandParts) -> Vec<crate::ast::FieldReference> {
        node.field_lists()
            .flat_map(|list| list.items())
            .map(|item| self.field_ref(&item))
            .collect()
    }

    fn leading_count(&self, node: &impl CommandParts) -> Option<u64> {
        node.literals().next().and_then(|lit| parse_u64(self.text(&lit)))
    }

    fn sort_key(&self, field: &nodes::SortField) -> Option<SortKey> {
        let (name, function) = match field.call() {
            Some(call) => (
                self.field_name(&call.field()?),
                call.name().map(|n| n.text().to_ascii_lowercase()),
            ),
            None => (self.field_name(&field.field()?), None),
        };
        Some(SortKey {
            field: name,
            function,
            descending: field.descending(),
            location: self.node_loc(field),
        })
    }

    pub(crate) fn dedup_command(&self, node: &nodes::DedupCommand) -> DedupCommand {
        DedupCommand {
            count: self.leading_count(node),
            fields: self.list_fields(node),
            sort_by: node.sort_fields().filter_map(|f| self.sort_key(&f)).collect(),
            options: self.options(node.options()),
            location: self.node_loc(node),
        }
    }

    /// A bare trailing `desc` or `d` reverses the ordering instead of naming a field.
    pub(crate) fn sort_command(&self, node: &nodes::SortCommand) -> SortCommand {
        let mut keys: Vec<SortKey> = node.sort_fields().filter_map(|f| self.sort_key(&f)).collect();
        let reversed = keys.len() > 1
            && keys.last().is_some_and(|k| {
                k.function.is_none()
                    && !k.descending
                    && matches!(k.field.to_ascii_lowercase().as_str(), "d" | "desc")
            });
        if reversed {
            keys.pop();
        }
        SortCommand {
            limit: self.leading_count(node),
            keys,
            reversed,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn head_command(&self, node: &nodes::HeadCommand) -> HeadCommand {
        let options = self.options(node.options());
        let limit = self
            .leading_count(node)
            .or_else(|| options.get("limit").and_then(|v| parse_u64(v)));
        HeadCommand {
            limit,
            condition: node.condition().and_then(|e| self.expression(&e)),
            options,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn rename_command(&self, node: &nodes::RenameCommand) -> RenameCommand {
        let renamings = node
            .pairs()
            .filter_map(|pair| {
                Some(FieldRenaming {
                    old_name: self.field_name(&pair.from()?),
                    new_name: self.field_name(&pair.to()?),
                    location: self.node_loc(&pair),
                })
            })
            .collect();
        RenameCommand {
            renamings,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn tail(&self, args: Args, location: SourceLocation) -> TailCommand {
        TailCommand {
            limit: args.value(0).and_then(|v| parse_u64(&v)),
            location,
        }
    }

    pub(crate) fn nomv(&self, args: Args, location: SourceLocation) -> NomvCommand {
        NomvCommand {
            field: args.value(0),
            location,
        }
    }

    pub(crate) fn makemv(&self, args: Args, location: SourceLocation) -> MakemvCommand {
        MakemvCommand {
            field: args.value(0),
            delim: args.option("delim").map(str::to_string),
            tokenizer: args.option("tokenizer").map(str::to_string),
            options: args.options,
            location,
        }
    }

    pub(crate) fn mvexpand(&self, args: Args, location: SourceLocation) -> MvexpandCommand {
        MvexpandCommand {
            field: args.value(0),
            limit: args.option_u64("limit"),
            location,
        }
    }

    pub(crate) fn mvcombine(&self, args: Args, location: SourceLocation) -> MvcombineCommand {
        MvcombineCommand {
            field: args.value(0),
            delim: args.option("delim").map(str::to_string),
            location,
        }
    }
}
