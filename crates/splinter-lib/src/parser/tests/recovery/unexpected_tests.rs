use crate::ParseResult;

#[test]
fn number_in_command_position() {
    let input = "error | 123 | head 1";

    let res = ParseResult::expect_invalid(input);
    insta::assert_snapshot!(res, @"error at 8..11: expected a command: found `123`");

    insta::assert_snapshot!(crate::parse(input).cst().dump(), @r#"
    Root
      Pipeline
        SearchExpr
          SearchTerm
            SearchValue
              Identifier "error"
        Pipe "|"
        Error
          NumberLiteral "123"
        Pipe "|"
        HeadCommand
          Head "head"
          Literal
            NumberLiteral "1"
    "#);
}

#[test]
fn stray_close_bracket() {
    let res = ParseResult::expect_invalid("a ] b");
    insta::assert_snapshot!(res, @r"
    error at 2..3: unmatched `]`
    error at 4..5: unexpected token: `b`
    ");
}

#[test]
fn stray_close_paren_skips_stage() {
    let res = ParseResult::expect_invalid("a ) b");
    insta::assert_snapshot!(res, @"error at 2..3: unexpected token: `)`");
}

#[test]
fn leftover_tokens_carry_usage() {
    let res = ParseResult::expect_invalid("| head 10 foo bar | stats count");
    insta::assert_snapshot!(res, @"error at 10..13: unexpected token: `foo` (hint: usage: head [<int>] [limit=<int>] [<expression>])");
}

#[test]
fn recovery_resumes_at_next_pipe() {
    let input = "| head 10 foo bar | stats count";
    let res = crate::parse(input);
    assert_eq!(res.ast.stages.len(), 2);
    assert_eq!(res.ast.stages[1].as_command().map(|c| c.name()), Some("stats"));
}

#[test]
fn unrecognized_input() {
    let res = ParseResult::expect_invalid("index=main $$$");
    insta::assert_snapshot!(res, @"error at 11..14: unrecognized input: `$$$`");
}
