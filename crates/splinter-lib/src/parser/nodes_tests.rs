use crate::parser::nodes::{
    AnyCommand, CommandParts, CstNode, Expr, FieldEntry, Root, SearchItem, Stage,
};
use crate::parser::{SyntaxKind, parse};

fn parse_root(src: &str) -> Root {
    let (parse, diagnostics) = parse(src);
    assert!(diagnostics.is_empty(), "unexpected errors: {}", diagnostics.render(src));
    parse.root()
}

fn stages(src: &str) -> Vec<Stage> {
    parse_root(src)
        .pipeline()
        .expect("root always has a pipeline")
        .stages()
        .collect()
}

fn command(src: &str, index: usize) -> AnyCommand {
    match stages(src).swap_remove(index) {
        Stage::Command(command) => command,
        Stage::Search(_) => panic!("stage {} is a bare search", index),
    }
}

#[test]
fn pipeline_stages() {
    let stages = stages("error | stats count | sort -count");
    assert_eq!(stages.len(), 3);
    assert!(matches!(stages[0], Stage::Search(_)));
    assert!(matches!(stages[1], Stage::Command(AnyCommand::Stats(_))));
    assert!(matches!(stages[2], Stage::Command(AnyCommand::Sort(_))));
}

#[test]
fn leading_command_keyword() {
    let stages = stages("search index=main");
    assert!(matches!(stages[0], Stage::Command(AnyCommand::Search(_))));
}

#[test]
fn keyword_used_as_field_starts_bare_search() {
    let stages = stages("search=foo");
    assert!(matches!(stages[0], Stage::Search(_)));
}

#[test]
fn search_items() {
    let Stage::Search(search) = stages("a=1 b OR c NOT d").swap_remove(0) else {
        panic!("expected bare search");
    };
    let items: Vec<SearchItem> = search.items().collect();
    assert_eq!(items.len(), 3);

    let SearchItem::Comparison(cmp) = &items[0] else {
        panic!("expected comparison");
    };
    assert_eq!(cmp.field().map(|f| f.as_cst().text().to_string()), Some("a".into()));
    assert_eq!(cmp.operator().map(|t| t.kind()), Some(SyntaxKind::Equals));
    assert_eq!(cmp.value().map(|v| v.as_cst().text().to_string()), Some("1".into()));

    let SearchItem::Or(or) = &items[1] else {
        panic!("expected OR");
    };
    assert_eq!(or.operands().count(), 2);

    let SearchItem::Not(not) = &items[2] else {
        panic!("expected NOT");
    };
    assert!(matches!(not.operand(), Some(SearchItem::Term(_))));
}

#[test]
fn search_in_values() {
    let Stage::Search(search) = stages("status IN (200, 301, 404)").swap_remove(0) else {
        panic!("expected bare search");
    };
    let Some(SearchItem::In(search_in)) = search.items().next() else {
        panic!("expected IN");
    };
    let values: Vec<String> = search_in
        .values()
        .map(|v| v.as_cst().text().to_string())
        .collect();
    assert_eq!(values, vec!["200", "301", "404"]);
}

#[test]
fn quoted_search_value() {
    let Stage::Search(search) = stages(r#""failed login" x"#).swap_remove(0) else {
        panic!("expected bare search");
    };
    let terms: Vec<SearchItem> = search.items().collect();
    let SearchItem::Term(quoted) = &terms[0] else {
        panic!("expected term");
    };
    assert!(quoted.value().and_then(|v| v.quoted()).is_some());
    let SearchItem::Term(bare) = &terms[1] else {
        panic!("expected term");
    };
    assert!(bare.value().and_then(|v| v.quoted()).is_none());
}

#[test]
fn eval_assignments() {
    let AnyCommand::Eval(eval) = command("| eval a = b + 1, c = upper(d)", 0) else {
        panic!("expected eval");
    };
    let assignments: Vec<_> = eval.assignments().collect();
    assert_eq!(assignments.len(), 2);

    let Some(Expr::Binary(binary)) = assignments[0].value() else {
        panic!("expected binary expression");
    };
    assert_eq!(binary.op().map(|t| t.kind()), Some(SyntaxKind::Plus));
    assert!(matches!(binary.lhs(), Some(Expr::FieldRef(_))));
    assert!(matches!(binary.rhs(), Some(Expr::Literal(_))));

    let Some(Expr::Call(call)) = assignments[1].value() else {
        panic!("expected call");
    };
    assert_eq!(call.name().map(|t| t.text().to_string()), Some("upper".into()));
    assert_eq!(call.args().count(), 1);
}

#[test]
fn stats_parts() {
    let AnyCommand::Stats(stats) = command("| stats count, avg(bytes) AS avg_bytes by host, source", 0)
    else {
        panic!("expected stats");
    };
    let aggregations: Vec<_> = stats.aggregations().collect();
    assert_eq!(aggregations.len(), 2);
    assert!(aggregations[0].arg_list().is_none());
    assert!(aggregations[1].arg_list().is_some());
    assert_eq!(
        aggregations[1].alias().map(|a| a.as_cst().text().to_string()),
        Some("avg_bytes".into())
    );

    let by: Vec<String> = stats
        .by_clause()
        .expect("by clause")
        .fields()
        .map(|f| f.as_cst().text().to_string())
        .collect();
    assert_eq!(by, vec!["host", "source"]);
}

#[test]
fn options_are_direct_children() {
    let AnyCommand::Keyword(bin) = command("| bin _time span=1h bins=10", 0) else {
        panic!("expected keyword command");
    };
    let names: Vec<String> = bin
        .options()
        .filter_map(|o| o.name())
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(names, vec!["span", "bins"]);
    assert_eq!(bin.arguments().count(), 1);
}

#[test]
fn lookup_output_entries() {
    let AnyCommand::Lookup(lookup) = command("| lookup users uid AS user_id OUTPUT name, email AS mail", 0)
    else {
        panic!("expected lookup");
    };
    let input: Vec<FieldEntry> = lookup.field_lists().flat_map(|l| l.entries()).collect();
    assert!(matches!(input.as_slice(), [FieldEntry::Aliased(_)]));

    let output = lookup.output().expect("output clause");
    assert_eq!(output.keyword().map(|k| k.kind()), Some(SyntaxKind::Output));
    let entries: Vec<FieldEntry> = output.entries().collect();
    assert!(matches!(
        entries.as_slice(),
        [FieldEntry::Plain(_), FieldEntry::Aliased(_)]
    ));
}

#[test]
fn sort_field_direction() {
    let AnyCommand::Sort(sort) = command("| sort -count, +host, num(size)", 0) else {
        panic!("expected sort");
    };
    let fields: Vec<_> = sort.sort_fields().collect();
    assert_eq!(fields.len(), 3);
    assert!(fields[0].descending());
    assert!(!fields[1].descending());
    assert!(fields[2].call().is_some());
}

#[test]
fn rename_pairs() {
    let AnyCommand::Rename(rename) = command("| rename src AS source_ip, dst AS dest_ip", 0) else {
        panic!("expected rename");
    };
    let pairs: Vec<(String, String)> = rename
        .pairs()
        .map(|p| {
            (
                p.from().map(|f| f.as_cst().text().to_string()).unwrap_or_default(),
                p.to().map(|f| f.as_cst().text().to_string()).unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("src".to_string(), "source_ip".to_string()),
            ("dst".to_string(), "dest_ip".to_string())
        ]
    );
}

#[test]
fn subsearch_pipeline() {
    let AnyCommand::Keyword(join) = command("| join host [search index=other | fields host]", 0) else {
        panic!("expected keyword command");
    };
    let subsearch = join.subsearches().next().expect("subsearch");
    let inner = subsearch.pipeline().expect("pipeline");
    assert_eq!(inner.stages().count(), 2);
}

#[test]
fn command_keyword_token() {
    let command = command("| STATS count", 0);
    let keyword = command.keyword().expect("keyword");
    assert_eq!(keyword.kind(), SyntaxKind::Stats);
    assert_eq!(keyword.text(), "STATS");
}

#[test]
fn trimmed_range_excludes_trivia() {
    let AnyCommand::Table(table) = command("x |  table a b  ", 1) else {
        panic!("expected table");
    };
    let range = table.range();
    assert_eq!(u32::from(range.start()), 5);
    assert_eq!(u32::from(range.end()), 14);
}

#[test]
fn head_limit_is_not_a_condition() {
    let AnyCommand::Head(head) = command("| head 20", 0) else {
        panic!("expected head");
    };
    assert!(head.condition().is_none());

    let AnyCommand::Head(head) = command("| head count > 10", 0) else {
        panic!("expected head");
    };
    assert!(matches!(head.condition(), Some(Expr::Binary(_))));

    let AnyCommand::Head(head) = command("| head \"done\"", 0) else {
        panic!("expected head");
    };
    assert!(matches!(head.condition(), Some(Expr::Literal(_))));
}

#[test]
fn generic_command_node() {
    let AnyCommand::Generic(generic) = command("| mycustomcmd foo=bar baz", 0) else {
        panic!("expected generic command");
    };
    assert_eq!(generic.keyword().map(|k| k.text().to_string()), Some("mycustomcmd".into()));
    assert_eq!(generic.options().count(), 1);
    assert_eq!(generic.arguments().count(), 1);
}
