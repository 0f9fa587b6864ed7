use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::{lex, lexeme_text, tokenize};

/// Format lexemes without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_lexemes(input, false)
}

/// Format lexemes with trivia included
fn snapshot_raw(input: &str) -> String {
    format_lexemes(input, true)
}

fn format_lexemes(input: &str, include_trivia: bool) -> String {
    let mut out = String::new();
    for lexeme in lex(input) {
        if include_trivia || !lexeme.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                lexeme.kind,
                lexeme_text(input, &lexeme)
            ));
        }
    }
    out
}

#[test]
fn simple_pipeline() {
    insta::assert_snapshot!(snapshot("index=main | stats count by host"), @r#"
    Identifier "index"
    Equals "="
    Identifier "main"
    Pipe "|"
    Stats "stats"
    Identifier "count"
    By "by"
    Identifier "host"
    "#);
}

#[test]
fn operators() {
    insta::assert_snapshot!(snapshot("!= == <= >= = < > + - * / % ."), @r#"
    NotEquals "!="
    DoubleEquals "=="
    LessEquals "<="
    GreaterEquals ">="
    Equals "="
    LessThan "<"
    GreaterThan ">"
    Plus "+"
    Minus "-"
    Multiply "*"
    Divide "/"
    Modulo "%"
    Dot "."
    "#);
}

#[test]
fn delimiters() {
    insta::assert_snapshot!(snapshot("[search x] | f(a, b)"), @r#"
    LBracket "["
    Search "search"
    Identifier "x"
    RBracket "]"
    Pipe "|"
    Identifier "f"
    LParen "("
    Identifier "a"
    Comma ","
    Identifier "b"
    RParen ")"
    "#);
}

#[test]
fn keywords_are_case_insensitive() {
    insta::assert_snapshot!(snapshot("STATS Stats stats BY as Groupby"), @r#"
    Stats "STATS"
    Stats "Stats"
    Stats "stats"
    By "BY"
    As "as"
    Groupby "Groupby"
    "#);
}

#[test]
fn keyword_prefixes_stay_identifiers() {
    insta::assert_snapshot!(snapshot("index searching byte tables"), @r#"
    Identifier "index"
    Identifier "searching"
    Identifier "byte"
    Identifier "tables"
    "#);
}

#[test]
fn command_synonyms_share_kinds() {
    let kinds: Vec<SyntaxKind> = lex("bin bucket extract kv")
        .iter()
        .filter(|l| !l.kind.is_trivia())
        .map(|l| l.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Bin,
            SyntaxKind::Bin,
            SyntaxKind::Extract,
            SyntaxKind::Extract
        ]
    );
}

#[test]
fn time_modifiers() {
    insta::assert_snapshot!(snapshot("earliest=-24h@h latest=now @d +7d@w1"), @r#"
    Identifier "earliest"
    Equals "="
    TimeModifier "-24h@h"
    Identifier "latest"
    Equals "="
    TimeModifier "now"
    TimeModifier "@d"
    TimeModifier "+7d@w1"
    "#);
}

#[test]
fn numbers() {
    insta::assert_snapshot!(snapshot("10 3.14 10.0.0.1"), @r#"
    NumberLiteral "10"
    NumberLiteral "3.14"
    NumberLiteral "10.0"
    Dot "."
    NumberLiteral "0.1"
    "#);
}

#[test]
fn strings() {
    insta::assert_snapshot!(snapshot(r#""hello world" 'it' true FALSE"#), @r#"
    StringLiteral "\"hello world\""
    StringLiteral "'it'"
    BooleanLiteral "true"
    BooleanLiteral "FALSE"
    "#);
}

#[test]
fn string_with_escaped_quote() {
    let input = r#""say \"hi\"" x"#;
    let lexemes = lex(input);
    assert_eq!(lexemes[0].kind, SyntaxKind::StringLiteral);
    assert_eq!(lexeme_text(input, &lexemes[0]), r#""say \"hi\"""#);
}

#[test]
fn wildcard_fields() {
    insta::assert_snapshot!(snapshot("table host* *_ip"), @r#"
    Table "table"
    WildcardField "host*"
    WildcardField "*_ip"
    "#);
}

#[test]
fn star_between_words_is_multiplication() {
    insta::assert_snapshot!(snapshot("price*quantity web*01"), @r#"
    Identifier "price"
    Multiply "*"
    Identifier "quantity"
    Identifier "web"
    Multiply "*"
    NumberLiteral "01"
    "#);
}

#[test]
fn leading_star_after_operand_is_multiplication() {
    insta::assert_snapshot!(snapshot("x=a *b"), @r#"
    Identifier "x"
    Equals "="
    Identifier "a"
    Multiply "*"
    Identifier "b"
    "#);
}

#[test]
fn lone_star_stays_multiply() {
    insta::assert_snapshot!(snapshot("fields *"), @r#"
    Fields "fields"
    Multiply "*"
    "#);
}

#[test]
fn comments_are_trivia() {
    insta::assert_snapshot!(snapshot_raw("index=main ```a comment``` error"), @r#"
    Identifier "index"
    Equals "="
    Identifier "main"
    Whitespace " "
    Comment "```a comment```"
    Whitespace " "
    Identifier "error"
    "#);
}

#[test]
fn macros_and_placeholders() {
    insta::assert_snapshot!(snapshot("`my_macro(1)` <<FIELD>>"), @r#"
    MacroCall "`my_macro(1)`"
    Identifier "<<FIELD>>"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot_raw("a $$$ b"), @r#"
    Identifier "a"
    Whitespace " "
    Garbage "$$$"
    Whitespace " "
    Identifier "b"
    "#);
}

#[test]
fn trailing_garbage() {
    insta::assert_snapshot!(snapshot_raw("a ;;"), @r#"
    Identifier "a"
    Whitespace " "
    Garbage ";;"
    "#);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
    let result = tokenize("");
    assert!(result.is_ok());
    assert!(result.tokens.is_empty());
}

#[test]
fn lexemes_cover_source() {
    let input = "search a=1 | eval b = a * 2 ```c``` | $ [ x ]";
    let mut offset = 0u32;
    for lexeme in lex(input) {
        assert_eq!(u32::from(lexeme.span.start()), offset);
        offset = lexeme.span.end().into();
    }
    assert_eq!(offset as usize, input.len());
}

#[test]
fn tokenize_positions() {
    let result = tokenize("a\n  bb");
    assert!(result.is_ok());
    assert_eq!(result.tokens.len(), 2);

    let a = &result.tokens[0];
    assert_eq!((a.start_offset, a.end_offset), (0, 1));
    assert_eq!((a.start_line, a.start_column), (1, 1));
    assert_eq!((a.end_line, a.end_column), (1, 1));

    let bb = &result.tokens[1];
    assert_eq!(bb.text, "bb");
    assert_eq!((bb.start_offset, bb.end_offset), (4, 6));
    assert_eq!((bb.start_line, bb.start_column), (2, 3));
    assert_eq!((bb.end_line, bb.end_column), (2, 4));
}

#[test]
fn tokenize_reports_garbage() {
    let result = tokenize("index=main $$$ error");
    assert!(!result.is_ok());
    assert_eq!(result.tokens.len(), 4);
    assert_eq!(result.errors.len(), 1);

    let error = &result.errors[0];
    assert_eq!(error.text, "$$$");
    assert_eq!(error.offset, 11);
    assert_eq!(error.length, 3);
    assert_eq!((error.line, error.column), (1, 12));
    insta::assert_snapshot!(error.to_string(), @"unrecognized input `$$$`");
}

#[test]
fn tokenize_skips_trivia() {
    let result = tokenize("a ```note``` b");
    let texts: Vec<&str> = result.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn token_serializes_kind_by_name() {
    let result = tokenize("stats");
    let json = serde_json::to_value(&result.tokens[0]).unwrap();
    assert_eq!(json["kind"], "Stats");
    assert_eq!(json["text"], "stats");
    assert_eq!(json["startOffset"], 0);
    assert_eq!(json["endColumn"], 5);
}

#[test]
fn columns_count_characters() {
    let result = tokenize("\"é\" x");
    let x = &result.tokens[1];
    assert_eq!(x.start_offset, 5);
    assert_eq!(x.start_column, 5);
}
