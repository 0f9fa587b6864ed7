use crate::ParseResult;
use indoc::indoc;

#[test]
fn empty_input() {
    let res = ParseResult::expect_valid_cst("");
    insta::assert_snapshot!(res, @r"
    Root
      Pipeline
    ");
}

#[test]
fn search_then_command() {
    let res = ParseResult::expect_valid_cst("index=main | stats count by host");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "index"
            Equals "="
            SearchValue
              Identifier "main"
        Pipe "|"
        StatsCommand
          Stats "stats"
          Aggregation
            Identifier "count"
          ByClause
            By "by"
            FieldList
              FieldItem
                Identifier "host"
    "#);
}

#[test]
fn multiline_query() {
    let input = indoc! {r#"
    index=web
    | stats count by status
    "#};

    let res = ParseResult::expect_valid_cst(input);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "index"
            Equals "="
            SearchValue
              Identifier "web"
        Pipe "|"
        StatsCommand
          Stats "stats"
          Aggregation
            Identifier "count"
          ByClause
            By "by"
            FieldList
              FieldItem
                Identifier "status"
    "#);
}

#[test]
fn leading_pipe() {
    let res = ParseResult::expect_valid_cst("| makeresults count=3");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        KeywordCommand
          Makeresults "makeresults"
          OptionArg
            Identifier "count"
            Equals "="
            OptionValue
              NumberLiteral "3"
    "#);
}

#[test]
fn leading_search_keyword() {
    let res = ParseResult::expect_valid_cst("search index=main");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchCommand
          Search "search"
          SearchExpr
            SearchComparison
              SearchValue
                Identifier "index"
              Equals "="
              SearchValue
                Identifier "main"
    "#);
}

#[test]
fn leading_keyword_as_field_name() {
    let res = ParseResult::expect_valid_cst("search=foo");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Search "search"
            Equals "="
            SearchValue
              Identifier "foo"
    "#);
}

#[test]
fn subsearch_in_command() {
    let res = ParseResult::expect_valid_cst("| append [search b | head 5]");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        KeywordCommand
          Append "append"
          Subsearch
            LBracket "["
            Pipeline
              SearchCommand
                Search "search"
                SearchExpr
                  SearchTerm
                    SearchValue
                      Identifier "b"
              Pipe "|"
              HeadCommand
                Head "head"
                Literal
                  NumberLiteral "5"
            RBracket "]"
    "#);
}

#[test]
fn subsearch_in_search() {
    let res = ParseResult::expect_valid_cst("host=a [search x | return host]");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchComparison
            SearchValue
              Identifier "host"
            Equals "="
            SearchValue
              Identifier "a"
          Subsearch
            LBracket "["
            Pipeline
              SearchCommand
                Search "search"
                SearchExpr
                  SearchTerm
                    SearchValue
                      Identifier "x"
              Pipe "|"
              ReturnCommand
                Return "return"
                FieldItem
                  Identifier "host"
            RBracket "]"
    "#);
}

#[test]
fn unknown_command_is_generic() {
    let res = ParseResult::expect_valid_cst("| mycmd a=1 b");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        GenericCommand
          Identifier "mycmd"
          OptionArg
            Identifier "a"
            Equals "="
            OptionValue
              NumberLiteral "1"
          Argument
            Identifier "b"
    "#);
}

#[test]
fn command_synonyms() {
    let res = ParseResult::expect_valid_cst("| bucket _time span=1h");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        KeywordCommand
          Bin "bucket"
          Argument
            Identifier "_time"
          OptionArg
            Identifier "span"
            Equals "="
            OptionValue
              TimeModifier "1h"
    "#);
}
