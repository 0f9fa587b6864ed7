use super::{FieldEffect, Param, ParamType, Pattern, get_command_pattern, interpret_pattern};
use crate::tokenize;

const ITEM: Pattern = Pattern::Param(Param {
    name: "item",
    ty: ParamType::Field,
    effect: FieldEffect::None,
});

const AT_LEAST_TWO: Pattern = Pattern::Repeat {
    pattern: &ITEM,
    separator: Some(","),
    min: 2,
};

const SEARCH_THEN_BY: Pattern = Pattern::Seq(&[
    Pattern::Param(Param {
        name: "search",
        ty: ParamType::SearchExpression,
        effect: FieldEffect::None,
    }),
    Pattern::Optional(&Pattern::Seq(&[
        Pattern::Keyword("by"),
        Pattern::Param(Param {
            name: "by",
            ty: ParamType::FieldList,
            effect: FieldEffect::None,
        }),
    ])),
]);

fn stage(source: &str) -> super::PatternMatchResult {
    let tokens = tokenize(source).tokens;
    let syntax = get_command_pattern(&tokens[0].text).expect("registered command");
    syntax.interpret_stage(&tokens)
}

fn texts(result: &super::PatternMatchResult) -> Vec<(&str, &str)> {
    result
        .bindings
        .iter()
        .map(|b| (b.name.as_str(), b.text.as_str()))
        .collect()
}

#[test]
fn stats_bindings_and_effects() {
    let result = stage("stats count AS total by host");
    assert!(result.matched);
    assert_eq!(result.consumed, 6);
    assert_eq!(
        texts(&result),
        [("aggregation", "count"), ("alias", "total"), ("by", "host")]
    );
    let created: Vec<&str> = result.fields_with_effect(FieldEffect::Creates).collect();
    assert_eq!(created, ["count", "total"]);
}

#[test]
fn binding_offsets() {
    let result = stage("rename src AS source");
    assert!(result.matched);
    let field = &result.bindings[0];
    assert_eq!(field.name, "field");
    assert_eq!(field.effect, FieldEffect::Drops);
    assert_eq!((field.start_offset, field.end_offset), (7, 10));
    let new_name = &result.bindings[1];
    assert_eq!(new_name.text, "source");
    assert_eq!(new_name.effect, FieldEffect::Creates);
}

#[test]
fn binding_text_keeps_spacing() {
    let result = stage("where bytes > 1024 AND x>1");
    assert!(result.matched);
    assert_eq!(texts(&result), [("condition", "bytes > 1024 AND x>1")]);
}

#[test]
fn wrong_command_keyword() {
    let syntax = get_command_pattern("stats").expect("stats");
    let result = syntax.interpret_stage(&tokenize("eval x=1").tokens);
    assert!(!result.matched);
    assert_eq!(result.consumed, 0);
    assert_eq!(result.error.as_deref(), Some("unexpected `eval`"));
    assert_eq!(result.expected, ["`stats`"]);
}

#[test]
fn missing_keyword_at_end() {
    let result = stage("rename a");
    assert!(!result.matched);
    assert_eq!(result.error.as_deref(), Some("unexpected end of stage"));
    assert_eq!(result.expected, ["`as`"]);
}

#[test]
fn missing_by_fields() {
    let result = stage("stats count by");
    assert!(!result.matched);
    assert!(result.expected.iter().any(|e| e == "<by>"), "{:?}", result.expected);
}

#[test]
fn unexpected_token_reports_alternatives() {
    let result = stage("head 5 )");
    assert!(!result.matched);
    assert_eq!(result.consumed, 2);
    assert_eq!(result.error.as_deref(), Some("unexpected `)`"));
    assert!(result.expected.iter().any(|e| e == "<condition>"));
    assert!(result.expected.iter().any(|e| e == "`limit=`"));
}

#[test]
fn continuations_after_complete_match() {
    let result = stage("rename a AS b");
    assert!(result.matched);
    assert!(result.error.is_none());
    assert_eq!(result.expected, ["<field>"]);
}

#[test]
fn repeat_minimum() {
    let one = interpret_pattern(&AT_LEAST_TWO, &tokenize("a").tokens);
    assert!(!one.matched);
    assert_eq!(one.expected, ["<item>"]);

    let two = interpret_pattern(&AT_LEAST_TWO, &tokenize("a, b").tokens);
    assert!(two.matched);
    assert_eq!(texts(&two), [("item", "a"), ("item", "b")]);

    let spaced = interpret_pattern(&AT_LEAST_TWO, &tokenize("a b c").tokens);
    assert!(spaced.matched);
    assert_eq!(spaced.bindings.len(), 3);
}

#[test]
fn search_stops_before_by() {
    let result = interpret_pattern(&SEARCH_THEN_BY, &tokenize("a b by host").tokens);
    assert!(result.matched);
    assert_eq!(texts(&result), [("search", "a b"), ("by", "host")]);
}

#[test]
fn options_bind_documented_types() {
    let result = stage("bin span=1h minspan=5m other=x _time");
    assert!(result.matched);
    let types: Vec<(&str, ParamType)> = result
        .bindings
        .iter()
        .map(|b| (b.name.as_str(), b.ty))
        .collect();
    assert_eq!(
        types,
        [
            ("span", ParamType::TimeSpan),
            ("minspan", ParamType::TimeSpan),
            ("other", ParamType::Any),
            ("field", ParamType::Field),
        ]
    );
}

#[test]
fn empty_pattern_on_empty_stage() {
    let result = stage("addinfo");
    assert!(result.matched);
    assert_eq!(result.consumed, 1);
    assert!(result.bindings.is_empty());

    let extra = stage("addinfo x");
    assert!(!extra.matched);
    assert_eq!(extra.error.as_deref(), Some("unexpected `x`"));
}

#[test]
fn literal_named_functions_are_calls() {
    let result = stage("eval t=now(), ok=true()");
    assert!(result.matched, "{:?}", result.error);
    assert_eq!(result.consumed, 12);
    assert_eq!(
        texts(&result),
        [
            ("field", "t"),
            ("expression", "now()"),
            ("field", "ok"),
            ("expression", "true()"),
        ]
    );
}
