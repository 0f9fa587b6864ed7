use crate::ParseResult;
use crate::ast::{Command, StatsVariant, TopVariant};

#[test]
fn stats_output_fields() {
    let Command::Stats(cmd) =
        ParseResult::expect_command("| stats count, avg(bytes), dc(user) AS users by host")
    else {
        panic!("expected stats");
    };
    let outputs: Vec<&str> = cmd
        .aggregations
        .iter()
        .map(|a| a.output_field.as_str())
        .collect();
    assert_eq!(outputs, ["count", "avg(bytes)", "users"]);
    assert_eq!(cmd.aggregations[1].field.as_deref(), Some("bytes"));
    assert_eq!(cmd.aggregations[2].alias.as_deref(), Some("users"));
    assert_eq!(cmd.by_fields[0].field_name, "host");
    assert!(!cmd.preserves_fields);
}

#[test]
fn streaming_variants_preserve_fields() {
    let command = ParseResult::expect_command("| eventstats avg(bytes) AS avg_bytes by host");
    let Command::Stats(cmd) = &command else {
        panic!("expected stats");
    };
    assert_eq!(cmd.variant, StatsVariant::Eventstats);
    assert!(cmd.preserves_fields);
    assert_eq!(command.name(), "eventstats");

    let Command::Stats(cmd) = ParseResult::expect_command("| streamstats count") else {
        panic!("expected stats");
    };
    assert!(cmd.preserves_fields);
}

#[test]
fn chart_over_and_by() {
    let Command::Stats(cmd) = ParseResult::expect_command("| chart count over host by status")
    else {
        panic!("expected chart");
    };
    assert_eq!(cmd.variant, StatsVariant::Chart);
    assert_eq!(
        cmd.over_field.as_ref().map(|f| f.field_name.as_str()),
        Some("host")
    );
    assert_eq!(cmd.by_fields[0].field_name, "status");
}

#[test]
fn timechart_options() {
    let Command::Stats(cmd) = ParseResult::expect_command("| timechart span=1h count by host")
    else {
        panic!("expected timechart");
    };
    assert_eq!(cmd.variant, StatsVariant::Timechart);
    assert_eq!(cmd.options.get("span").map(String::as_str), Some("1h"));
}

#[test]
fn aggregation_arguments_are_expressions() {
    let Command::Stats(cmd) =
        ParseResult::expect_command(r#"| stats count(eval(status>=500)) AS errors"#)
    else {
        panic!("expected stats");
    };
    let agg = &cmd.aggregations[0];
    assert_eq!(agg.function, "count");
    assert_eq!(agg.field, None);
    assert_eq!(agg.arguments.len(), 1);
    assert_eq!(agg.output_field, "errors");
}

#[test]
fn tstats_datamodel_and_where() {
    let Command::Tstats(cmd) = ParseResult::expect_command(
        "| tstats count FROM datamodel=Web WHERE status=404 BY host",
    ) else {
        panic!("expected tstats");
    };
    assert_eq!(cmd.datamodel.as_deref(), Some("Web"));
    let where_clause = cmd.where_clause.expect("where clause");
    assert_eq!(where_clause.referenced_fields, ["status"]);
    assert_eq!(cmd.by_fields[0].field_name, "host");
}

#[test]
fn top_created_fields() {
    let command = ParseResult::expect_command("| top 5 uri by host");
    let Command::Top(cmd) = &command else {
        panic!("expected top");
    };
    assert_eq!(cmd.limit, Some(5));
    assert_eq!(cmd.fields[0].field_name, "uri");
    assert_eq!(cmd.by_fields[0].field_name, "host");
    assert_eq!(command.created_fields(), ["count", "percent"]);

    let Command::Top(cmd) =
        ParseResult::expect_command("| rare showperc=f countfield=n user")
    else {
        panic!("expected rare");
    };
    assert_eq!(cmd.variant, TopVariant::Rare);
    assert_eq!(cmd.created_fields, ["n"]);
}

#[test]
fn top_limit_option() {
    let Command::Top(cmd) = ParseResult::expect_command("| top limit=3 uri") else {
        panic!("expected top");
    };
    assert_eq!(cmd.limit, Some(3));
}

#[test]
fn fit_target_and_features() {
    let Command::Fit(cmd) =
        ParseResult::expect_command("| fit LinearRegression y from x1 x2 into m")
    else {
        panic!("expected fit");
    };
    assert_eq!(cmd.algorithm.as_deref(), Some("LinearRegression"));
    assert_eq!(cmd.target.as_deref(), Some("y"));
    assert_eq!(cmd.features, ["x1", "x2"]);
    assert_eq!(cmd.model.as_deref(), Some("m"));
    assert_eq!(cmd.created_fields, ["predicted(y)"]);

    let Command::Fit(cmd) = ParseResult::expect_command("| fit KMeans a b as cluster") else {
        panic!("expected fit");
    };
    assert_eq!(cmd.target, None);
    assert_eq!(cmd.features, ["a", "b"]);
    assert_eq!(cmd.created_fields, ["cluster"]);
}

#[test]
fn apply_model() {
    let Command::Apply(cmd) = ParseResult::expect_command("| apply m AS scored") else {
        panic!("expected apply");
    };
    assert_eq!(cmd.model.as_deref(), Some("m"));
    assert_eq!(cmd.alias.as_deref(), Some("scored"));
}

#[test]
fn transaction_fields() {
    let command = ParseResult::expect_command("| transaction session_id maxspan=30m");
    let Command::Transaction(cmd) = &command else {
        panic!("expected transaction");
    };
    assert_eq!(cmd.fields, ["session_id"]);
    assert_eq!(cmd.options.get("maxspan").map(String::as_str), Some("30m"));
    assert!(command.created_fields().iter().any(|f| f == "duration"));
}

#[test]
fn xyseries_and_untable() {
    let Command::Xyseries(cmd) = ParseResult::expect_command("| xyseries _time host count")
    else {
        panic!("expected xyseries");
    };
    assert_eq!(cmd.x_field.as_deref(), Some("_time"));
    assert_eq!(cmd.y_field.as_deref(), Some("host"));
    assert_eq!(cmd.data_fields, ["count"]);

    let Command::Untable(cmd) = ParseResult::expect_command("| untable _time name value")
    else {
        panic!("expected untable");
    };
    assert_eq!(cmd.created_fields, ["name", "value"]);
}

#[test]
fn transpose_rows() {
    let Command::Transpose(cmd) = ParseResult::expect_command("| transpose 2") else {
        panic!("expected transpose");
    };
    assert_eq!(cmd.row_count, Some(2));
    assert_eq!(cmd.created_fields, ["column", "row 1", "row 2"]);

    let Command::Transpose(cmd) = ParseResult::expect_command("| transpose") else {
        panic!("expected transpose");
    };
    assert_eq!(cmd.created_fields.len(), 6);
}

#[test]
fn predict_bounds() {
    let Command::Predict(cmd) = ParseResult::expect_command("| predict count AS p") else {
        panic!("expected predict");
    };
    assert_eq!(cmd.created_fields, ["p", "upper95(p)", "lower95(p)"]);
}

#[test]
fn fieldsummary_columns() {
    let command = ParseResult::expect_command("| fieldsummary maxvals=5");
    assert_eq!(command.created_fields()[0], "field");
}
