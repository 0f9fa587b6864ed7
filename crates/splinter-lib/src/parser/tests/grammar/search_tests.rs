use crate::ParseResult;

#[test]
fn bare_terms() {
    let res = ParseResult::expect_valid_cst(r#"error "failed login""#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchTerm
            SearchValue
              Identifier "error"
          SearchTerm
            SearchValue
              StringLiteral "\"failed login\""
    "#);
}

#[test]
fn or_and_not() {
    let res = ParseResult::expect_valid_cst("error OR warn NOT debug");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchOr
            SearchTerm
              SearchValue
                Identifier "error"
            Or "OR"
            SearchTerm
              SearchValue
                Identifier "warn"
          SearchNot
            Not "NOT"
            SearchTerm
              SearchValue
                Identifier "debug"
    "#);
}

#[test]
fn explicit_and() {
    let res = ParseResult::expect_valid_cst("a AND b");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchTerm
            SearchValue
              Identifier "a"
          And "AND"
          SearchTerm
            SearchValue
              Identifier "b"
    "#);
}

#[test]
fn group_and_in() {
    let res =
        ParseResult::expect_valid_cst(r#"(status=404 OR status=500) host IN ("a", "b")"#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchGroup
            LParen "("
            SearchOr
              SearchComparison
                SearchValue
                  Identifier "status"
                Equals "="
                SearchValue
                  NumberLiteral "404"
              Or "OR"
              SearchComparison
                SearchValue
                  Identifier "status"
                Equals "="
                SearchValue
                  NumberLiteral "500"
            RParen ")"
          SearchIn
            SearchValue
              Identifier "host"
            In "IN"
            LParen "("
            SearchValue
              StringLiteral "\"a\""
            Comma ","
            SearchValue
              StringLiteral "\"b\""
            RParen ")"
    "#);
}

#[test]
fn comparison_operators() {
    let res = ParseResult::expect_valid_cst("status!=200 bytes>=1000");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "status"
            NotEquals "!="
            SearchValue
              NumberLiteral "200"
          SearchComparison
            SearchValue
              Identifier "bytes"
            GreaterEquals ">="
            SearchValue
              NumberLiteral "1000"
    "#);
}

#[test]
fn glued_values() {
    let res = ParseResult::expect_valid_cst("host=web-01 src=10.0.0.1");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "host"
            Equals "="
            SearchValue
              Identifier "web"
              Minus "-"
              NumberLiteral "01"
          SearchComparison
            SearchValue
              Identifier "src"
            Equals "="
            SearchValue
              NumberLiteral "10.0"
              Dot "."
              NumberLiteral "0.1"
    "#);
}

#[test]
fn macro_term() {
    let res = ParseResult::expect_valid_cst("`weblogs` status=500");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchMacro
            MacroCall "`weblogs`"
          SearchComparison
            SearchValue
              Identifier "status"
            Equals "="
            SearchValue
              NumberLiteral "500"
    "#);
}

#[test]
fn time_bounds() {
    let res = ParseResult::expect_valid_cst("earliest=-24h@h latest=now");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "earliest"
            Equals "="
            SearchValue
              TimeModifier "-24h@h"
          SearchComparison
            SearchValue
              Identifier "latest"
            Equals "="
            SearchValue
              TimeModifier "now"
    "#);
}

#[test]
fn wildcard_value() {
    let res = ParseResult::expect_valid_cst("source=*access*");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "source"
            Equals "="
            SearchValue
              WildcardField "*access*"
    "#);
}
