use crate::ParseResult;

#[test]
fn stats_without_aggregation() {
    let res = ParseResult::expect_invalid("index=main | stats");
    insta::assert_snapshot!(res, @"error at 18..18: expected an aggregation (hint: usage: stats <aggregation> [AS <alias>]... [BY <field-list>])");
}

#[test]
fn trailing_pipe() {
    let res = ParseResult::expect_invalid("a |");
    insta::assert_snapshot!(res, @"error at 3..3: expected a command");
}

#[test]
fn empty_stage() {
    let res = ParseResult::expect_invalid("a | | b");
    insta::assert_snapshot!(res, @"error at 4..5: expected a command");
}

#[test]
fn rename_without_as() {
    let res = ParseResult::expect_invalid("| rename a");
    insta::assert_snapshot!(res, @"error at 10..10: expected `as` (hint: usage: rename <field> AS <new-name> [, <field> AS <new-name>]...)");
}

#[test]
fn eval_without_expression() {
    let res = ParseResult::expect_invalid("| eval x =");
    insta::assert_snapshot!(res, @"error at 10..10: expected an expression (hint: usage: eval <field>=<expression> [, <field>=<expression>]...)");
}

#[test]
fn rex_without_pattern() {
    let res = ParseResult::expect_invalid("| rex field=_raw");
    insta::assert_snapshot!(res, @r#"error at 16..16: expected a quoted string: regular expression (hint: usage: rex [field=<field>] [mode=sed] [max_match=<int>] "<regex>")"#);
}

#[test]
fn comparison_without_value() {
    let res = ParseResult::expect_invalid("status=");
    insta::assert_snapshot!(res, @"error at 7..7: expected a value: after comparison operator");
}

#[test]
fn by_without_fields() {
    let res = ParseResult::expect_invalid("| stats count by");
    insta::assert_snapshot!(res, @"error at 16..16: expected a field name: after `by` (hint: usage: stats <aggregation> [AS <alias>]... [BY <field-list>])");
}

#[test]
fn dangling_or() {
    let res = ParseResult::expect_invalid("error OR");
    insta::assert_snapshot!(res, @"error at 8..8: expected an expression");
}
