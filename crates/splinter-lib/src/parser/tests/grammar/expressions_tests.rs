use crate::ParseResult;

#[test]
fn precedence() {
    let res = ParseResult::expect_valid_cst("| eval x = a + b * 2");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "x"
            Equals "="
            BinaryExpr
              FieldRef
                Identifier "a"
              Plus "+"
              BinaryExpr
                FieldRef
                  Identifier "b"
                Multiply "*"
                Literal
                  NumberLiteral "2"
    "#);
}

#[test]
fn concatenation_is_left_associative() {
    let res = ParseResult::expect_valid_cst(r#"| eval full = first . " " . last"#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "full"
            Equals "="
            BinaryExpr
              BinaryExpr
                FieldRef
                  Identifier "first"
                Dot "."
                Literal
                  StringLiteral "\" \""
              Dot "."
              FieldRef
                Identifier "last"
    "#);
}

#[test]
fn call_with_arguments() {
    let res = ParseResult::expect_valid_cst(r#"| eval s = if(code >= 500, "error", "ok")"#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "s"
            Equals "="
            CallExpr
              Identifier "if"
              ArgList
                LParen "("
                BinaryExpr
                  FieldRef
                    Identifier "code"
                  GreaterEquals ">="
                  Literal
                    NumberLiteral "500"
                Comma ","
                Literal
                  StringLiteral "\"error\""
                Comma ","
                Literal
                  StringLiteral "\"ok\""
                RParen ")"
    "#);
}

#[test]
fn unary_minus_and_parens() {
    let res = ParseResult::expect_valid_cst("| eval y = -(a + 1) * 2");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "y"
            Equals "="
            BinaryExpr
              UnaryExpr
                Minus "-"
                ParenExpr
                  LParen "("
                  BinaryExpr
                    FieldRef
                      Identifier "a"
                    Plus "+"
                    Literal
                      NumberLiteral "1"
                  RParen ")"
              Multiply "*"
              Literal
                NumberLiteral "2"
    "#);
}

#[test]
fn logical_operators() {
    let res = ParseResult::expect_valid_cst("| where bytes > 1024 AND NOT isnull(user)");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        WhereCommand
          Where "where"
          BinaryExpr
            BinaryExpr
              FieldRef
                Identifier "bytes"
              GreaterThan ">"
              Literal
                NumberLiteral "1024"
            And "AND"
            UnaryExpr
              Not "NOT"
              CallExpr
                Identifier "isnull"
                ArgList
                  LParen "("
                  FieldRef
                    Identifier "user"
                  RParen ")"
    "#);
}

#[test]
fn in_list() {
    let res = ParseResult::expect_valid_cst(r#"| where host IN ("a", "b")"#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        WhereCommand
          Where "where"
          InList
            FieldRef
              Identifier "host"
            In "IN"
            LParen "("
            Literal
              StringLiteral "\"a\""
            Comma ","
            Literal
              StringLiteral "\"b\""
            RParen ")"
    "#);
}

#[test]
fn like_operator() {
    let res = ParseResult::expect_valid_cst(r#"| where name LIKE "adm%""#);
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        WhereCommand
          Where "where"
          BinaryExpr
            FieldRef
              Identifier "name"
            Like "LIKE"
            Literal
              StringLiteral "\"adm%\""
    "#);
}

#[test]
fn single_quotes_name_a_field() {
    let res = ParseResult::expect_valid_cst("| eval x = 'my field' + 1");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "x"
            Equals "="
            BinaryExpr
              FieldRef
                StringLiteral "'my field'"
              Plus "+"
              Literal
                NumberLiteral "1"
    "#);
}

#[test]
fn now_is_callable() {
    let res = ParseResult::expect_valid_cst("| eval t = now()");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "t"
            Equals "="
            CallExpr
              TimeModifier "now"
              ArgList
                LParen "("
                RParen ")"
    "#);
}

#[test]
fn multiple_assignments() {
    let res = ParseResult::expect_valid_cst("| eval a = 1, b = a");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        Pipe "|"
        EvalCommand
          Eval "eval"
          Assignment
            FieldItem
              Identifier "a"
            Equals "="
            Literal
              NumberLiteral "1"
          Comma ","
          Assignment
            FieldItem
              Identifier "b"
            Equals "="
            FieldRef
              Identifier "a"
    "#);
}
