use indoc::indoc;

use crate::ast::{Expression, Pipeline, PipelineStage, SearchTerm};
use crate::{
    Command, DiagnosticKind, LexResult, ParseResult, QueryBuilder, TokenKind, parse, tokenize,
};

impl ParseResult {
    #[track_caller]
    pub fn expect_valid_cst(src: &str) -> String {
        let res = parse(src);
        if !res.success {
            panic!(
                "Expected valid query, got errors:\n{}",
                res.render(src, false)
            );
        }
        res.cst().dump()
    }

    #[track_caller]
    pub fn expect_valid_cst_full(src: &str) -> String {
        let res = parse(src);
        if !res.success {
            panic!(
                "Expected valid query, got errors:\n{}",
                res.render(src, false)
            );
        }
        res.cst().dump_full()
    }

    #[track_caller]
    pub fn expect_valid(src: &str) -> Self {
        let res = parse(src);
        if !res.success {
            panic!(
                "Expected valid query, got errors:\n{}",
                res.render(src, false)
            );
        }
        res
    }

    /// The first command of a valid query.
    #[track_caller]
    pub fn expect_command(src: &str) -> Command {
        let res = Self::expect_valid(src);
        match res.ast.commands().next() {
            Some(command) => command.clone(),
            None => panic!("Expected a command in {src:?}"),
        }
    }

    #[track_caller]
    pub fn expect_invalid(src: &str) -> String {
        let res = parse(src);
        if res.success {
            panic!("Expected errors, got valid query:\n{}", res.cst().dump());
        }
        res.all_diagnostics()
            .filtered()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

const MALFORMED: &[&str] = &[
    "|||",
    "[[[",
    ")))",
    "]]]",
    "\"unterminated",
    "| eval = = =",
    "((((",
    "| stats by",
    "`",
    "| rex \"",
    "NOT NOT NOT",
    "a OR",
    "| where (a",
    "'''",
    "| join [| append [",
    "index=main | $$$ | head 5",
    "\u{1F600} | head",
    "| eval x = if(a, , )",
    "| lookup",
    "| sort -",
    "| foreach [",
    "a | | | b",
];

#[test]
fn parse_is_total() {
    for input in MALFORMED {
        let res = parse(input);
        assert!(!res.success, "expected errors for {input:?}");
        assert!(res.error_count() > 0, "no errors reported for {input:?}");
    }
}

#[test]
fn parse_is_deterministic() {
    for input in MALFORMED.iter().chain(&["index=main | stats count by host"]) {
        let first = parse(input);
        let second = parse(input);
        assert_eq!(first.ast, second.ast, "{input:?}");
        assert_eq!(first.parse_errors, second.parse_errors, "{input:?}");
        assert_eq!(first.lex_errors, second.lex_errors, "{input:?}");
        assert_eq!(first.tokens, second.tokens, "{input:?}");
    }
}

#[test]
fn success_iff_no_errors() {
    let inputs = MALFORMED
        .iter()
        .chain(&["", "error", "| makeresults", "a | head 1"]);
    for input in inputs {
        let res = parse(input);
        assert_eq!(res.success, res.error_count() == 0, "{input:?}");
    }
}

#[test]
fn stage_locations_lie_within_source() {
    let inputs = MALFORMED.iter().chain(&[
        "index=main | stats count by host | sort -count",
        "search a [search b | return c] | head 2",
    ]);
    for input in inputs {
        let res = parse(input);
        for stage in &res.ast.stages {
            let location = stage.location();
            assert!(location.start_offset <= location.end_offset, "{input:?}");
            assert!(location.end_offset <= input.len(), "{input:?}");
            assert!(res.ast.location.contains(&location), "{input:?}");
        }
    }
}

const VALID: &[&str] = &[
    "index=main status>=500 | stats count by host",
    "| eval total = bytes_in + bytes_out * 2, ratio = round(total / 3, 2)",
    "| where isnotnull(user) AND len(user) > 3 OR x = y",
    "search a [search b | eval c = d . e | return c] | head 2",
    "| join host [search index=b | fields host] | table host, count",
    "| fieldformat size = tostring(bytes, \"commas\")",
];

#[test]
fn garbage_only_adds_errors() {
    for input in VALID {
        let clean = tokenize(input);
        for (i, _) in input.match_indices(' ') {
            let dirty = format!("{} $ {}", &input[..i], &input[i + 1..]);
            let result = tokenize(&dirty);
            assert_eq!(result.errors.len(), clean.errors.len() + 1, "{dirty:?}");

            let kinds = |r: &LexResult| -> Vec<(TokenKind, String)> {
                r.tokens.iter().map(|t| (t.kind, t.text.clone())).collect()
            };
            assert_eq!(kinds(&result), kinds(&clean), "{dirty:?}");
            assert!(!parse(&dirty).success, "{dirty:?}");
        }
    }
}

fn assert_expression_nested(expr: &Expression, input: &str) {
    let outer = expr.location();
    for child in expr.children() {
        assert!(outer.contains(&child.location()), "{input:?}: {expr:?}");
        assert_expression_nested(child, input);
    }
}

fn assert_pipeline_nested(pipeline: &Pipeline, input: &str) {
    for stage in &pipeline.stages {
        let location = stage.location();
        assert!(pipeline.location.contains(&location), "{input:?}");
        let Some(command) = stage.as_command() else {
            continue;
        };
        for subsearch in command.subsearches() {
            assert!(location.contains(&subsearch.location), "{input:?}");
            assert_pipeline_nested(subsearch, input);
        }
        let assignments = match command {
            Command::Eval(cmd) => cmd.assignments.as_slice(),
            Command::Fieldformat(cmd) => cmd.assignments.as_slice(),
            _ => &[],
        };
        for assignment in assignments {
            assert!(location.contains(&assignment.location), "{input:?}");
            assert!(assignment.location.contains(&assignment.expression.location()));
            assert_expression_nested(&assignment.expression, input);
        }
        if let Command::Where(cmd) = command
            && let Some(condition) = &cmd.condition
        {
            assert!(location.contains(&condition.location()), "{input:?}");
            assert_expression_nested(condition, input);
        }
    }
}

#[test]
fn child_spans_nest_in_parents() {
    for input in VALID {
        let res = ParseResult::expect_valid(input);
        assert_pipeline_nested(&res.ast, input);
    }
}

const WIDE: &[&str] = &[
    "index=web (status=500 OR status=503) NOT host=\"db*\" user IN (a, b) `recent(1h)`",
    "| stats count, avg(bytes) AS avg_bytes, dc(user) by host, source",
    "| chart sum(x) over host by status | sort -count, host, num(size)",
    "| lookup users uid AS user_id OUTPUT name, email AS mail",
    "| rename src AS source, dst AS dest | table source, dest",
    "| rex field=msg \"(?<user>\\w+)\" | top 3 user by host",
    "| tstats count FROM datamodel=Web WHERE status=404 BY host",
    "| append [search a | head 1] | appendpipe [stats count]",
    "| foreach bytes_* [eval <<FIELD>> = <<FIELD>> / 1024]",
    "| makeresults count=3 | eval n = random() % 10 | where n > 2",
    "| mycmd alpha=1 beta [search gamma] AS delta",
];

fn location_offsets(value: &serde_json::Value) -> Option<(u64, u64)> {
    let location = value.get("location")?;
    Some((
        location["startOffset"].as_u64()?,
        location["endOffset"].as_u64()?,
    ))
}

/// Every located node lies inside its nearest located ancestor, and the
/// stages of every pipeline come in source order without overlapping.
fn assert_json_nested(value: &serde_json::Value, outer: Option<(u64, u64)>, input: &str) {
    match value {
        serde_json::Value::Object(map) => {
            let own = location_offsets(value);
            if let (Some((start, end)), Some((outer_start, outer_end))) = (own, outer) {
                assert!(start <= end, "{input:?}: {value}");
                assert!(
                    outer_start <= start && end <= outer_end,
                    "{input:?}: {value} escapes {outer_start}..{outer_end}"
                );
            }
            if let Some(stages) = map.get("stages").and_then(|s| s.as_array()) {
                let spans: Vec<(u64, u64)> = stages.iter().filter_map(location_offsets).collect();
                assert_eq!(spans.len(), stages.len(), "{input:?}");
                for pair in spans.windows(2) {
                    assert!(pair[0].1 <= pair[1].0, "{input:?}: stages {pair:?}");
                }
            }
            let outer = own.or(outer);
            for (key, child) in map {
                if key != "location" {
                    assert_json_nested(child, outer, input);
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                assert_json_nested(item, outer, input);
            }
        }
        _ => {}
    }
}

#[test]
fn every_location_nests_and_stages_are_ordered() {
    for input in VALID.iter().chain(WIDE) {
        let res = ParseResult::expect_valid(input);
        let json = serde_json::to_value(&res.ast).unwrap();
        assert_json_nested(&json, None, input);
    }
}

#[test]
fn depends_on_matches_field_references() {
    for input in VALID {
        let res = ParseResult::expect_valid(input);
        for command in res.ast.commands() {
            let assignments = match command {
                Command::Eval(eval) => &eval.assignments,
                Command::Fieldformat(cmd) => &cmd.assignments,
                _ => continue,
            };
            for assignment in assignments {
                let mut referenced = Vec::new();
                assignment.expression.walk(&mut |expr| {
                    if let Expression::FieldReference(field) = expr
                        && !field.is_wildcard
                    {
                        referenced.push(field.field_name.clone());
                    }
                });
                for name in &assignment.depends_on {
                    assert!(referenced.contains(name), "{input:?}: {name}");
                }
                for name in &referenced {
                    assert!(assignment.depends_on.contains(name), "{input:?}: {name}");
                }
            }
        }
    }
}

#[test]
fn tokens_exclude_trivia() {
    let res = parse("a ```note``` | head 1");
    let texts: Vec<&str> = res.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["a", "|", "head", "1"]);
}

#[test]
fn search_then_stats() {
    let res = ParseResult::expect_valid("index=main | stats count by host");
    assert_eq!(res.ast.stages.len(), 2);

    let PipelineStage::Search(search) = &res.ast.stages[0] else {
        panic!("expected a search stage");
    };
    let [SearchTerm::Comparison(cmp)] = search.terms.as_slice() else {
        panic!("expected one comparison");
    };
    assert_eq!(cmp.field, "index");
    assert_eq!(cmp.operator, "=");
    assert_eq!(cmp.value, "main");
    assert_eq!(search.referenced_fields, ["index"]);

    let Some(Command::Stats(stats)) = res.ast.stages[1].as_command() else {
        panic!("expected stats");
    };
    assert_eq!(stats.aggregations[0].function, "count");
    assert_eq!(stats.aggregations[0].output_field, "count");
    assert_eq!(stats.by_fields[0].field_name, "host");
}

#[test]
fn eval_dependencies_follow_expressions() {
    let res =
        ParseResult::expect_valid("| eval total = bytes_in + bytes_out, ratio = total / 2");
    let Some(Command::Eval(eval)) = res.ast.stages[0].as_command() else {
        panic!("expected eval");
    };
    assert_eq!(eval.assignments.len(), 2);
    assert_eq!(eval.assignments[0].target_field, "total");
    assert_eq!(eval.assignments[0].depends_on, ["bytes_in", "bytes_out"]);
    assert_eq!(eval.assignments[1].depends_on, ["total"]);

    for assignment in &eval.assignments {
        assert_eq!(assignment.depends_on, assignment.expression.referenced_fields());
    }
}

#[test]
fn dependencies_are_deduplicated() {
    let res = ParseResult::expect_valid("| eval x = if(a > b, a, b + c)");
    let Some(Command::Eval(eval)) = res.ast.stages[0].as_command() else {
        panic!("expected eval");
    };
    assert_eq!(eval.assignments[0].depends_on, ["a", "b", "c"]);
}

#[test]
fn multiline_locations() {
    let input = indoc! {"
        index=web
        | head 5
    "};
    let res = ParseResult::expect_valid(input);
    let location = res.ast.stages[1].location();
    assert_eq!(location.start_offset, 12);
    assert_eq!(location.end_offset, 18);
    assert_eq!((location.start_line, location.start_column), (2, 3));
    assert_eq!((location.end_line, location.end_column), (2, 8));
}

#[test]
fn partial_ast_survives_errors() {
    let res = parse("index=main | stats count by host | $$$ | head 5");
    assert!(!res.success);
    assert_eq!(res.lex_errors.len(), 1);
    assert_eq!(res.lex_errors[0].text, "$$$");

    let names: Vec<&str> = res.ast.commands().map(|c| c.name()).collect();
    assert!(names.contains(&"stats"), "{names:?}");
    assert!(names.contains(&"head"), "{names:?}");
}

#[test]
fn subsearch_pipelines_are_nested() {
    let res = ParseResult::expect_valid("| join host [search index=b | fields host]");
    let Some(Command::Join(join)) = res.ast.stages[0].as_command() else {
        panic!("expected join");
    };
    let subsearch = join.subsearch.as_ref().expect("subsearch");
    assert_eq!(subsearch.stages.len(), 2);
    assert!(join.location.contains(&subsearch.location));
    assert_eq!(res.ast.subsearches().len(), 1);
}

#[test]
fn recursion_limit_is_reported() {
    let res = QueryBuilder::new("((((a))))")
        .with_recursion_limit(2)
        .parse();
    assert!(!res.success);
    assert!(
        res.parse_errors
            .iter()
            .any(|e| e.kind == DiagnosticKind::RecursionLimitExceeded)
    );

    let res = QueryBuilder::new("((((a))))").parse();
    assert!(res.success);
}

#[test]
fn deep_nesting_fits_a_default_thread_stack() {
    let search = format!("{}a{}", "(".repeat(600), ")".repeat(600));
    let eval = format!("| eval x = {}1{}", "(".repeat(600), ")".repeat(600));
    let negations = format!("| where {}x", "NOT ".repeat(600));

    let handle = std::thread::spawn(move || {
        [search, eval, negations].map(|src| {
            let res = parse(&src);
            res.parse_errors
                .iter()
                .any(|e| e.kind == DiagnosticKind::RecursionLimitExceeded)
        })
    });
    let reported = handle.join().expect("parser thread panicked");
    assert_eq!(reported, [true, true, true]);
}

#[test]
fn keyword_operators_are_lowercased() {
    let res = ParseResult::expect_valid("| where a=1 AND b LIKE \"x%\"");
    let Some(Command::Where(cmd)) = res.ast.stages[0].as_command() else {
        panic!("expected where");
    };
    let Some(Expression::BinaryExpression(and)) = &cmd.condition else {
        panic!("expected a binary expression");
    };
    assert_eq!(and.operator, "and");
    let Expression::BinaryExpression(like) = and.right.as_ref() else {
        panic!("expected like");
    };
    assert_eq!(like.operator, "like");
    assert_eq!(cmd.referenced_fields, ["a", "b"]);
}

#[test]
fn result_wire_shape() {
    let res = parse("index=main | stats count by host");
    let json = serde_json::to_value(&res).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["ast"]["type"], "Pipeline");
    assert_eq!(json["ast"]["stages"][0]["type"], "SearchExpression");
    assert_eq!(json["ast"]["stages"][1]["type"], "StatsCommand");
    assert_eq!(json["ast"]["stages"][1]["byFields"][0]["fieldName"], "host");
    assert_eq!(json["ast"]["stages"][1]["preservesFields"], false);
    assert_eq!(json["tokens"][0]["kind"], "Identifier");
    assert_eq!(json["tokens"][0]["startOffset"], 0);
    assert_eq!(json["lexErrors"], serde_json::json!([]));
    assert!(json.get("cst").is_none());
}

#[test]
fn error_wire_shape() {
    let res = parse("index=main | stats");
    let json = serde_json::to_value(&res).unwrap();

    let error = &json["parseErrors"][0];
    assert_eq!(error["kind"], "ExpectedAggregation");
    assert_eq!(error["message"], "expected an aggregation");
    assert_eq!(error["token"], serde_json::Value::Null);
    assert_eq!(error["location"]["startColumn"], 19);
    assert_eq!(
        error["hint"],
        "usage: stats <aggregation> [AS <alias>]... [BY <field-list>]"
    );
}

#[test]
fn error_points_at_offending_token() {
    let res = parse("| head 5 )");
    let error = &res.parse_errors[0];
    let token = error.token.as_ref().expect("token");
    assert_eq!(token.text, ")");
    assert_eq!(error.location.start_offset, token.start_offset);
}

#[test]
fn render_includes_every_error() {
    let src = "index=main | $$$ | stats";
    let res = parse(src);
    let rendered = res.render(src, false);
    assert!(rendered.contains("unrecognized input: `$$$`"), "{rendered}");
    assert!(rendered.contains("expected an aggregation"), "{rendered}");
}
