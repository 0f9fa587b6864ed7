//! Commands that create or rewrite fields.

use crate::ast::{
    AccumCommand, AddinfoCommand, AddtotalsCommand, AutoregressCommand, BinCommand,
    ConvertCommand, DeltaCommand, EvalAssignment, EvalCommand, Expression, FieldConversion,
    FieldformatCommand, FilldownCommand, FillnullCommand, GentimesCommand,
    IplocationCommand, MakeresultsCommand, Options, RangemapCommand, ReplaceCommand, Replacement,
    SourceLocation, StrcatCommand, StringLiteral, Trend, TrendlineCommand,
};
use crate::parser::nodes::{self, CommandParts};

use super::Lowering;
use super::helpers::{Args, flag, unquote};

const ADDINFO_FIELDS: &[&str] = &[
    "info_min_time",
    "info_max_time",
    "info_search_time",
    "info_sid",
];

const GENTIMES_FIELDS: &[&str] = &["starttime", "endtime", "starthuman", "endhuman"];

const MAKERESULTS_ANNOTATED_FIELDS: &[&str] = &[
    "_raw",
    "host",
    "source",
    "sourcetype",
    "splunk_server",
    "splunk_server_group",
];

const IPLOCATION_FIELDS: &[&str] = &["City", "Country", "Region", "lat", "lon"];
const IPLOCATION_EXTRA_FIELDS: &[&str] = &["Continent", "MetroCode", "Timezone"];

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

impl Lowering<'_> {
    fn assignments(&self, assignments: nodes::Children<nodes::Assignment>) -> Vec<EvalAssignment> {
        assignments
            .filter_map(|assignment| {
                let target = self.field_name(&assignment.field()?);
                let expression = self.expression(&assignment.value()?)?;
                Some(EvalAssignment::new(
                    target,
                    expression,
                    self.node_loc(&assignment),
                ))
            })
            .collect()
    }

    pub(crate) fn eval_command(&self, node: &nodes::EvalCommand) -> EvalCommand {
        EvalCommand {
            assignments: self.assignments(node.assignments()),
            location: self.node_loc(node),
        }
    }

    pub(crate) fn fieldformat_command(&self, node: &nodes::FieldformatCommand) -> FieldformatCommand {
        FieldformatCommand {
            assignments: self.assignments(node.assignments()),
            location: self.node_loc(node),
        }
    }

    pub(crate) fn convert_command(&self, node: &nodes::ConvertCommand) -> ConvertCommand {
        let options = self.options(node.options());
        let conversions = node
            .field_calls()
            .filter_map(|call| {
                Some(FieldConversion {
                    function: call.name()?.text().to_ascii_lowercase(),
                    field: self.field_name(&call.field()?),
                    alias: call.alias().map(|a| self.field_name(&a)),
                    location: self.node_loc(&call),
                })
            })
            .collect();
        ConvertCommand {
            timeformat: options.get("timeformat").cloned(),
            conversions,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn replace_command(&self, node: &nodes::ReplaceCommand) -> ReplaceCommand {
        let replacements = node
            .pairs()
            .filter_map(|pair| {
                Some(Replacement {
                    from: unquote(self.text(&pair.from()?)),
                    to: pair.to().map(|t| unquote(self.text(&t))).unwrap_or_default(),
                })
            })
            .collect();
        let fields = node
            .field_lists()
            .flat_map(|list| list.items())
            .map(|item| self.field_name(&item))
            .collect();
        ReplaceCommand {
            replacements,
            fields,
            location: self.node_loc(node),
        }
    }

    /// The last item is the destination; the rest are sources.
    pub(crate) fn strcat_command(&self, node: &nodes::StrcatCommand) -> StrcatCommand {
        let options = self.options(node.options());
        let mut sources: Vec<Expression> = node
            .child_nodes()
            .filter_map(|child| {
                if let Some(item) = nodes::FieldItem::cast(child.clone()) {
                    return Some(Expression::FieldReference(self.field_ref(&item)));
                }
                let literal = nodes::Literal::cast(child)?;
                Some(Expression::StringLiteral(StringLiteral {
                    value: unquote(self.text(&literal)),
                    location: self.node_loc(&literal),
                }))
            })
            .collect();

        let target_field = match sources.last() {
            Some(Expression::FieldReference(field)) => {
                let name = field.field_name.clone();
                sources.pop();
                name
            }
            _ => String::new(),
        };
        let created_fields = if target_field.is_empty() {
            Vec::new()
        } else {
            vec![target_field.clone()]
        };

        StrcatCommand {
            sources,
            target_field,
            allrequired: flag(&options, "allrequired", false),
            created_fields,
            location: self.node_loc(node),
        }
    }

    /// `sma5(field)` → function `sma`, period 5.
    pub(crate) fn trendline_command(&self, node: &nodes::TrendlineCommand) -> TrendlineCommand {
        let trends: Vec<Trend> = node
            .field_calls()
            .filter_map(|call| {
                let name = call.name()?.text().to_ascii_lowercase();
                let split = name
                    .find(|c: char| c.is_ascii_digit())
                    .unwrap_or(name.len());
                let (function, period) = name.split_at(split);
                let field = self.field_name(&call.field()?);
                let alias = call.alias().map(|a| self.field_name(&a));
                let output_field = alias
                    .clone()
                    .unwrap_or_else(|| format!("{}({})", name, field));
                Some(Trend {
                    function: function.to_string(),
                    period: period.parse().ok(),
                    field,
                    alias,
                    output_field,
                })
            })
            .collect();
        let created_fields = trends.iter().map(|t| t.output_field.clone()).collect();
        TrendlineCommand {
            trends,
            created_fields,
            location: self.node_loc(node),
        }
    }

    pub(crate) fn accum(&self, args: Args, location: SourceLocation) -> AccumCommand {
        AccumCommand {
            field: args.value(0).unwrap_or_default(),
            alias: args.alias(),
            location,
        }
    }

    pub(crate) fn delta(&self, args: Args, location: SourceLocation) -> DeltaCommand {
        let field = args.value(0).unwrap_or_default();
        let alias = args.alias();
        let created = alias.clone().unwrap_or_else(|| format!("delta({})", field));
        DeltaCommand {
            period: args.option("p").and_then(|p| p.parse().ok()),
            created_fields: vec![created],
            field,
            alias,
            location,
        }
    }

    /// `p=2` lags by two; `p=1-3` lags by one, two and three.
    pub(crate) fn autoregress(&self, args: Args, location: SourceLocation) -> AutoregressCommand {
        let field = args.value(0).unwrap_or_default();
        let alias = args.alias();
        let lags = args.option("p").map(parse_lags).unwrap_or_else(|| vec![1]);
        let created_fields = match (&alias, lags.as_slice()) {
            (Some(alias), [_]) => vec![alias.clone()],
            _ => lags.iter().map(|k| format!("{}_p{}", field, k)).collect(),
        };
        AutoregressCommand {
            field,
            alias,
            lags,
            created_fields,
            location,
        }
    }

    pub(crate) fn addtotals(&self, args: Args, location: SourceLocation) -> AddtotalsCommand {
        let row = args.flag("row", true);
        let col = args.flag("col", false);
        let fieldname = args.option("fieldname").unwrap_or("Total").to_string();
        let created_fields = if row { vec![fieldname.clone()] } else { Vec::new() };
        AddtotalsCommand {
            fields: args.values(),
            row,
            col,
            fieldname,
            options: args.options,
            created_fields,
            location,
        }
    }

    /// Every option other than `field` and `default` names a range.
    pub(crate) fn rangemap(&self, args: Args, location: SourceLocation) -> RangemapCommand {
        let ranges: Options = args
            .options
            .iter()
            .filter(|(name, _)| !matches!(name.as_str(), "field" | "default"))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        RangemapCommand {
            field: args.option("field").map(str::to_string),
            default: args.option("default").map(str::to_string),
            ranges,
            created_fields: vec!["range".to_string()],
            location,
        }
    }

    pub(crate) fn iplocation(&self, args: Args, location: SourceLocation) -> IplocationCommand {
        let prefix = args.option("prefix").map(str::to_string);
        let allfields = args.flag("allfields", false);
        let extra: &[&str] = if allfields { IPLOCATION_EXTRA_FIELDS } else { &[] };
        let created_fields = IPLOCATION_FIELDS
            .iter()
            .chain(extra)
            .map(|f| format!("{}{}", prefix.as_deref().unwrap_or(""), f))
            .collect();
        IplocationCommand {
            field: args.value(0),
            prefix,
            allfields,
            created_fields,
            location,
        }
    }

    pub(crate) fn makeresults(&self, args: Args, location: SourceLocation) -> MakeresultsCommand {
        let annotate = args.flag("annotate", false);
        let mut created_fields = vec!["_time".to_string()];
        if annotate {
            created_fields.extend(owned(MAKERESULTS_ANNOTATED_FIELDS));
        }
        MakeresultsCommand {
            count: args.option_u64("count"),
            annotate,
            options: args.options,
            created_fields,
            location,
        }
    }

    pub(crate) fn addinfo(&self, location: SourceLocation) -> AddinfoCommand {
        AddinfoCommand {
            created_fields: owned(ADDINFO_FIELDS),
            location,
        }
    }

    pub(crate) fn gentimes(&self, args: Args, location: SourceLocation) -> GentimesCommand {
        GentimesCommand {
            options: args.options,
            created_fields: owned(GENTIMES_FIELDS),
            location,
        }
    }

    pub(crate) fn fillnull(&self, args: Args, location: SourceLocation) -> FillnullCommand {
        FillnullCommand {
            value: args.option("value").map(str::to_string),
            fields: args.values(),
            location,
        }
    }

    pub(crate) fn filldown(&self, args: Args, location: SourceLocation) -> FilldownCommand {
        FilldownCommand {
            fields: args.values(),
            location,
        }
    }

    pub(crate) fn bin(&self, args: Args, location: SourceLocation) -> BinCommand {
        BinCommand {
            field: args.value(0),
            alias: args.alias(),
            span: args.option("span").map(str::to_string),
            bins: args.option_u64("bins"),
            options: args.options,
            location,
        }
    }
}

fn parse_lags(spec: &str) -> Vec<u32> {
    match spec.split_once('-') {
        Some((start, end)) => match (start.trim().parse::<u32>(), end.trim().parse::<u32>()) {
            (Ok(start), Ok(end)) if start <= end => (start..=end).collect(),
            _ => vec![1],
        },
        None => spec.trim().parse().map(|k| vec![k]).unwrap_or_else(|_| vec![1]),
    }
}
