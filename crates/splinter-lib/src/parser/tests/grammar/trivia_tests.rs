use crate::ParseResult;

#[test]
fn comments_and_whitespace_precede_nodes() {
    let res = ParseResult::expect_valid_cst_full("a ```c``` | head 1");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchTerm
            SearchValue
              Identifier "a"
        Whitespace " "
        Comment "```c```"
        Whitespace " "
        Pipe "|"
        Whitespace " "
        HeadCommand
          Head "head"
          Whitespace " "
          Literal
            NumberLiteral "1"
    "#);
}

#[test]
fn trailing_whitespace_lands_in_root() {
    let res = ParseResult::expect_valid_cst_full("x \n");
    insta::assert_snapshot!(res, @r#"
    Root
      Pipeline
        SearchExpr
          SearchTerm
            SearchValue
              Identifier "x"
      Whitespace " \n"
    "#);
}

#[test]
fn cst_text_is_lossless() {
    let input = "index=main ```note```  | stats count by host $$$ | head 5";
    let res = crate::parse(input);
    assert_eq!(res.cst().syntax().text().to_string(), input);
}
