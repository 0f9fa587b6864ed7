use crate::ParseResult;

#[test]
fn stats_aggregations() {
    let res = ParseResult::expect_valid_cst("| stats avg(bytes) AS avg_bytes, dc(user) by host");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        StatsCommand
          Stats "stats"
          Aggregation
            Identifier "avg"
            ArgList
              LParen "("
              FieldRef
                Identifier "bytes"
              RParen ")"
            As "AS"
            FieldItem
              Identifier "avg_bytes"
          Comma ","
          Aggregation
            Identifier "dc"
            ArgList
              LParen "("
              FieldRef
                Identifier "user"
              RParen ")"
          ByClause
            By "by"
            FieldList
              FieldItem
                Identifier "host"
    "#);
}

#[test]
fn timechart_options() {
    let res = ParseResult::expect_valid_cst("| timechart span=1h count by host");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        StatsCommand
          Timechart "timechart"
          OptionArg
            Identifier "span"
            Equals "="
            OptionValue
              TimeModifier "1h"
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
fn rex_pattern() {
    let res = ParseResult::expect_valid_cst(r#"| rex field=_raw "user=(?<user>\w+)""#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        RexCommand
          Rex "rex"
          OptionArg
            Identifier "field"
            Equals "="
            OptionValue
              Identifier "_raw"
          StringLiteral "\"user=(?<user>\\w+)\""
    "#);
}

#[test]
fn lookup_with_output() {
    let res = ParseResult::expect_valid_cst("| lookup users uid AS user_id OUTPUT name");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        LookupCommand
          Lookup "lookup"
          Argument
            Identifier "users"
          FieldList
            AliasedField
              FieldItem
                Identifier "uid"
              As "AS"
              FieldItem
                Identifier "user_id"
          OutputClause
            Output "OUTPUT"
            FieldList
              FieldItem
                Identifier "name"
    "#);
}

#[test]
fn sort_fields() {
    let res = ParseResult::expect_valid_cst("| sort -count, host");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        SortCommand
          Sort "sort"
          SortField
            Minus "-"
            FieldItem
              Identifier "count"
          Comma ","
          SortField
            FieldItem
              Identifier "host"
    "#);
}

#[test]
fn rename_pair() {
    let res = ParseResult::expect_valid_cst("| rename src AS source");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        RenameCommand
          Rename "rename"
          RenamePair
            FieldItem
              Identifier "src"
            As "AS"
            FieldItem
              Identifier "source"
    "#);
}

#[test]
fn table_wildcards() {
    let res = ParseResult::expect_valid_cst("| table host* _time");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        TableCommand
          Table "table"
          FieldList
            FieldItem
              WildcardField "host*"
            FieldItem
              Identifier "_time"
    "#);
}

#[test]
fn fields_removal() {
    let res = ParseResult::expect_valid_cst("| fields - _raw");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        FieldsCommand
          Fields "fields"
          Minus "-"
          FieldList
            FieldItem
              Identifier "_raw"
    "#);
}

#[test]
fn head_with_limit() {
    let res = ParseResult::expect_valid_cst("| head 20");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        HeadCommand
          Head "head"
          Literal
            NumberLiteral "20"
    "#);
}

#[test]
fn top_with_limit_and_by() {
    let res = ParseResult::expect_valid_cst("| top 5 uri by host");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        TopCommand
          Top "top"
          Literal
            NumberLiteral "5"
          FieldList
            FieldItem
              Identifier "uri"
          ByClause
            By "by"
            FieldList
              FieldItem
                Identifier "host"
    "#);
}

#[test]
fn convert_calls() {
    let res = ParseResult::expect_valid_cst("| convert ctime(_time) AS t");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        ConvertCommand
          Convert "convert"
          FieldCall
            Identifier "ctime"
            LParen "("
            FieldItem
              Identifier "_time"
            RParen ")"
            As "AS"
            FieldItem
              Identifier "t"
    "#);
}

#[test]
fn replace_pairs() {
    let res = ParseResult::expect_valid_cst(r#"| replace "a" WITH "b" IN host"#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        ReplaceCommand
          Replace "replace"
          ReplacePair
            Argument
              StringLiteral "\"a\""
            With "WITH"
            Argument
              StringLiteral "\"b\""
          In "IN"
          FieldList
            FieldItem
              Identifier "host"
    "#);
}

#[test]
fn tstats_clauses() {
    let res = ParseResult::expect_valid_cst(
        "| tstats count FROM datamodel=Web WHERE status=404 BY host",
    );
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        TstatsCommand
          Tstats "tstats"
          Aggregation
            Identifier "count"
          FromClause
            From "FROM"
            OptionArg
              Datamodel "datamodel"
              Equals "="
              OptionValue
                Identifier "Web"
          WhereClause
            Where "WHERE"
            SearchExpr
              SearchComparison
                SearchValue
                  Identifier "status"
                Equals "="
                SearchValue
                  NumberLiteral "404"
          ByClause
            By "BY"
            FieldList
              FieldItem
                Identifier "host"
    "#);
}

#[test]
fn foreach_template() {
    let res = ParseResult::expect_valid_cst("| foreach count* [eval <<FIELD>> = 0]");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        ForeachCommand
          Foreach "foreach"
          FieldList
            FieldItem
              WildcardField "count*"
          Subsearch
            LBracket "["
            Pipeline
              EvalCommand
                Eval "eval"
                Assignment
                  FieldItem
                    Identifier "<<FIELD>>"
                  Equals "="
                  Literal
                    NumberLiteral "0"
            RBracket "]"
    "#);
}

#[test]
fn fit_model() {
    let res = ParseResult::expect_valid_cst("| fit LinearRegression y from x1 x2 into m");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        FitCommand
          Fit "fit"
          Argument
            Identifier "LinearRegression"
          FieldList
            FieldItem
              Identifier "y"
          FromClause
            From "from"
            FieldList
              FieldItem
                Identifier "x1"
              FieldItem
                Identifier "x2"
          IntoClause
            Into "into"
            Argument
              Identifier "m"
    "#);
}
