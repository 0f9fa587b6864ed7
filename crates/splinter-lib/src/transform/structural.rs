//! Aggregating and reshaping commands.

use crate::ast::{
    Aggregation, ApplyCommand, FieldReference, FieldsummaryCommand, FitCommand, PredictCommand,
    PredictField, SourceLocation, StatsCommand, StatsVariant, TopCommand, TopVariant,
    TransactionCommand, TransposeCommand, TstatsCommand, UntableCommand, XyseriesCommand,
};
use crate::parser::SyntaxKind;
use crate::parser::nodes::{self, CommandParts};

use super::Lowering;
use super::helpers::{Args, flag, parse_u64, unquote};

const TRANSACTION_FIELDS: &[&str] = &[
    "duration",
    "eventcount",
    "closed_txn",
    "field_match_sum",
    "linecount",
];

const FIELDSUMMARY_FIELDS: &[&str] = &[
    "field",
    "count",
    "distinct_count",
    "is_exact",
    "max",
    "mean",
    "min",
    "numeric_count",
    "stdev",
    "values",
];

const DEFAULT_TRANSPOSE_ROWS: u64 = 5;

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

impl Lowering<'_> {
    /// `count` → `count`; `avg(bytes)` → `avg(bytes)`; `... AS x` → `x`.
    fn aggregation(&self, node: &nodes::Aggregation) -> Option<Aggregation> {
        let function = node.name()?.text().to_ascii_lowercase();
        let arg_list = node.arg_list();
        let arguments: Vec<_> = arg_list
            .iter()
            .flat_map(|list| list.args())
            .filter_map(|arg| self.expression(&arg))
            .collect();
        let field = match arguments.as_slice() {
            [first, ..] => first.as_field().map(|f| f.field_name.clone()),
            [] => None,
        };
        let alias = node.alias().map(|a| self.field_name(&a));

        let output_field = match (&alias, &arg_list) {
            (Some(alias), _) => alias.clone(),
            (None, Some(list)) => {
                let inner = self.text(list);
                let inner = inner.strip_prefix('(').unwrap_or(inner);
                let inner = inner.strip_suffix(')').unwrap_or(inner);
                format!("{}({})", function, inner.trim())
            }
            (None, None) => function.clone(),
        };

        Some(Aggregation {
            function,
            arguments,
            field,
            alias,
            output_field,
            location: self.node_loc(node),
        })
    }

    fn by_fields(&self, node: &impl CommandParts) -> Vec<FieldReference> {
        node.by_clause()
            .map(|by| by.fields().map(|f| self.field_ref(&f)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn stats_command(&self, node: &nodes::StatsCommand) -> StatsCommand {
        let variant = match node.keyword().map(|k| k.kind()) {
            Some(SyntaxKind::Eventstats) => StatsVariant::Eventstats,
            Some(SyntaxKind::Streamstats) => StatsVariant::Streamstats,
            Some(SyntaxKind::Chart) => StatsVariant::Chart,
            Some(SyntaxKind::Timechart) => StatsVariant::Timechart,
            _ => StatsVariant::Stats,
        };
        StatsCommand {
            variant,
            aggregations: node.aggregations().filter_map(|a| self.aggregation(&a)).collect(),
            by_fields: self.by_fields(node),
            over_field: node
                .over_clause()
                .and_then(|over| over.field())
                .map(|f| self.field_ref(&f)),
            options: self.options(node.options()),
            preserves_fields: variant.preserves_fields(),
            location: self.node_loc(node),
        }
    }

    /// `FROM datamodel=Network.All_Traffic` and `FROM Network` both name the data model.
    pub(crate) fn tstats_command(&self, node: &nodes::TstatsCommand) -> TstatsCommand {
        let datamodel = node.from_clause().and_then(|from| {
            if let Some(option) = from.option() {
                return option.value().map(|v| unquote(self.text(&v)));
            }
            from.argument().map(|a| unquote(self.text(&a)))
        });
        TstatsCommand {
            aggregations: node.aggregations().filter_map(|a| self.aggregation(&a)).collect(),
            datamodel,
            where_clause: node
                .where_clause()
                .and_then(|w| w.search())
                .map(|s| self.search_expression(&s)),
            by_fields: self.by_fields(node),
            options: self.options(node.options()),
            location: self.node_loc(node),
        }
    }

    /// `countfield`/`percentfield` rename the implicit outputs;
    /// `showcount=false`/`showperc=false` drop them.
    pub(crate) fn top_command(&self, node: &nodes::TopCommand) -> TopCommand {
        let variant = match node.keyword().map(|k| k.kind()) {
            Some(SyntaxKind::Rare) => TopVariant::Rare,
            _ => TopVariant::Top,
        };
        let options = self.options(node.options());
        let mut created_fields = Vec::new();
        if flag(&options, "showcount", true) {
            created_fields.push(
                options
                    .get("countfield")
                    .cloned()
                    .unwrap_or_else(|| "count".to_string()),
            );
        }
        if flag(&options, "showperc", true) {
            created_fields.push(
                options
                    .get("percentfield")
                    .cloned()
                    .unwrap_or_else(|| "percent".to_string()),
            );
        }
        let limit = node
            .literals()
            .next()
            .and_then(|lit| parse_u64(self.text(&lit)))
            .or_else(|| options.get("limit").and_then(|v| parse_u64(v)));

        TopCommand {
            variant,
            limit,
            fields: node
                .field_lists()
                .flat_map(|list| list.items())
                .map(|item| self.field_ref(&item))
                .collect(),
            by_fields: self.by_fields(node),
            options,
            created_fields,
            location: self.node_loc(node),
        }
    }

    /// `fit Algo target FROM features INTO model AS alias`. Without `FROM`,
    /// the listed fields are all features.
    pub(crate) fn fit_command(&self, node: &nodes::FitCommand) -> FitCommand {
        let algorithm = node.arguments().next().map(|a| self.text(&a).to_string());
        let listed: Vec<String> = node
            .field_lists()
            .flat_map(|list| list.items())
            .map(|item| self.field_name(&item))
            .collect();
        let from = node.from_clause();
        let (target, features) = match &from {
            Some(from) => (
                listed.first().cloned(),
                from.fields().map(|f| self.field_name(&f)).collect(),
            ),
            None => (None, listed),
        };
        let model = node
            .into_clause()
            .and_then(|into| into.argument())
            .map(|a| unquote(self.text(&a)));
        let alias = node.field_items().next().map(|f| self.field_name(&f));
        let created_fields = match (&alias, &target) {
            (Some(alias), _) => vec![alias.clone()],
            (None, Some(target)) => vec![format!("predicted({})", target)],
            (None, None) => Vec::new(),
        };

        FitCommand {
            algorithm,
            target,
            features,
            model,
            alias,
            options: self.options(node.options()),
            created_fields,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn apply(&self, args: Args, location: SourceLocation) -> ApplyCommand {
        ApplyCommand {
            model: args.value(0),
            alias: args.alias(),
            options: args.options,
            location,
        }
    }

    pub(crate) fn transaction(&self, args: Args, location: SourceLocation) -> TransactionCommand {
        TransactionCommand {
            fields: args.values(),
            options: args.options,
            created_fields: owned(TRANSACTION_FIELDS),
            location,
        }
    }

    /// `xyseries x y data...`
    pub(crate) fn xyseries(&self, args: Args, location: SourceLocation) -> XyseriesCommand {
        let mut values = args.values().into_iter();
        XyseriesCommand {
            x_field: values.next(),
            y_field: values.next(),
            data_fields: values.collect(),
            options: args.options,
            location,
        }
    }

    /// `untable x y data`: `y` and `data` name the two columns it creates.
    pub(crate) fn untable(&self, args: Args, location: SourceLocation) -> UntableCommand {
        let y_field = args.value(1);
        let data_field = args.value(2);
        let created_fields = y_field.iter().chain(data_field.iter()).cloned().collect();
        UntableCommand {
            x_field: args.value(0),
            y_field,
            data_field,
            created_fields,
            location,
        }
    }

    pub(crate) fn transpose(&self, args: Args, location: SourceLocation) -> TransposeCommand {
        let row_count = args.value(0).and_then(|v| parse_u64(&v));
        let column = args.option("column_name").unwrap_or("column").to_string();
        let mut created_fields = vec![column];
        created_fields.extend(
            (1..=row_count.unwrap_or(DEFAULT_TRANSPOSE_ROWS)).map(|n| format!("row {}", n)),
        );
        TransposeCommand {
            row_count,
            options: args.options,
            created_fields,
            location,
        }
    }

    pub(crate) fn fieldsummary(&self, args: Args, location: SourceLocation) -> FieldsummaryCommand {
        FieldsummaryCommand {
            fields: args.values(),
            options: args.options,
            created_fields: owned(FIELDSUMMARY_FIELDS),
            location,
        }
    }

    /// Each predicted field yields its prediction plus the 95% bounds.
    pub(crate) fn predict(&self, args: Args, location: SourceLocation) -> PredictCommand {
        let fields: Vec<PredictField> = args
            .positionals
            .iter()
            .map(|p| PredictField {
                field: p.value.clone(),
                alias: p.alias.clone(),
            })
            .collect();
        let created_fields = fields
            .iter()
            .flat_map(|f| {
                let output = f
                    .alias
                    .clone()
                    .unwrap_or_else(|| format!("prediction({})", f.field));
                [
                    output.clone(),
                    format!("upper95({})", output),
                    format!("lower95({})", output),
                ]
            })
            .collect();
        PredictCommand {
            fields,
            options: args.options,
            created_fields,
            location,
        }
    }
}
