use crate::ParseResult;

#[test]
fn missing_bracket() {
    let res = ParseResult::expect_invalid("| join host [search x");
    insta::assert_snapshot!(res, @"error at 12..21: missing closing `]` (related: subsearch starts here at 12..13) (hint: usage: join [type=inner|left|outer] [<field-list>] [ <subsearch> ])");
}

#[test]
fn missing_paren_in_expression() {
    let res = ParseResult::expect_invalid("| eval x = (a + 1");
    insta::assert_snapshot!(res, @"error at 11..17: missing closing `)` (related: opening `(` is here at 11..12) (hint: usage: eval <field>=<expression> [, <field>=<expression>]...)");
}

#[test]
fn missing_paren_in_search_in() {
    let res = ParseResult::expect_invalid("host IN (a, b");
    insta::assert_snapshot!(res, @"error at 8..13: missing closing `)` (related: opening `(` is here at 8..9)");
}

#[test]
fn nested_unclosed_reports_innermost() {
    let res = ParseResult::expect_invalid("| append [search a [search b");
    insta::assert_snapshot!(res, @"error at 19..28: missing closing `]` (related: subsearch starts here at 19..20) (hint: usage: search <search-expression>)");
}
