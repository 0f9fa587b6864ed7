//! Matching a pattern against a token stream.
//!
//! The matcher keeps a set of states (token position plus bindings so far)
//! instead of backtracking. After every step the states are deduplicated by
//! position, keeping the first one produced, so the work per pattern node is
//! bounded by the number of tokens. Parameters that can end at several
//! places (a search expression before an optional `BY`) yield their shorter
//! ends first, so the more specific reading wins ties.

use serde::Serialize;

use super::{FieldEffect, OptionSpec, Param, ParamType, Pattern};
use crate::parser::SyntaxKind;
use crate::parser::cst::token_sets::{EXPR_INFIX, FIELD_LIST_STOP};
use crate::parser::lexer::Token;

/// A parameter (or option) and the tokens it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub name: String,
    pub ty: ParamType,
    pub effect: FieldEffect,
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMatchResult {
    /// All tokens were matched.
    pub matched: bool,
    /// Tokens matched by the longest partial match.
    pub consumed: usize,
    pub bindings: Vec<Binding>,
    /// What could appear at the furthest position reached. For a complete
    /// match these are the possible continuations.
    pub expected: Vec<String>,
    pub error: Option<String>,
}

impl PatternMatchResult {
    pub(crate) fn mismatch(found: Option<&str>, expected: Vec<String>) -> Self {
        Self {
            matched: false,
            consumed: 0,
            bindings: Vec::new(),
            error: Some(unexpected(found)),
            expected,
        }
    }

    /// Bindings whose parameter has the given effect, in match order.
    pub fn fields_with_effect(&self, effect: FieldEffect) -> impl Iterator<Item = &str> {
        self.bindings
            .iter()
            .filter(move |b| b.effect == effect)
            .map(|b| b.text.as_str())
    }
}

fn unexpected(found: Option<&str>) -> String {
    match found {
        Some(text) => format!("unexpected `{}`", text),
        None => "unexpected end of stage".to_string(),
    }
}

/// Matches `tokens` against `pattern`.
pub fn interpret_pattern(pattern: &Pattern, tokens: &[Token]) -> PatternMatchResult {
    let mut matcher = Matcher::new(tokens);
    let states = matcher.run(pattern, State::default());

    let complete = states.iter().find(|s| s.pos == tokens.len());
    let best = complete.or_else(|| states.iter().max_by_key(|s| s.pos));
    let expected = std::mem::take(&mut matcher.expected);

    match best {
        Some(state) if state.pos == tokens.len() => PatternMatchResult {
            matched: true,
            consumed: state.pos,
            bindings: state.bindings.clone(),
            expected: if matcher.furthest == tokens.len() {
                expected
            } else {
                Vec::new()
            },
            error: None,
        },
        best => {
            let found = tokens.get(matcher.furthest).map(|t| t.text.as_str());
            PatternMatchResult {
                matched: false,
                consumed: best.map(|s| s.pos).unwrap_or(0),
                bindings: best.map(|s| s.bindings.clone()).unwrap_or_default(),
                expected,
                error: Some(unexpected(found)),
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct State {
    pos: usize,
    bindings: Vec<Binding>,
}

struct Matcher<'t> {
    tokens: &'t [Token],
    furthest: usize,
    expected: Vec<String>,
}

impl<'t> Matcher<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            furthest: 0,
            expected: Vec::new(),
        }
    }

    /// Records that `what` would have been accepted at `pos`.
    fn fail(&mut self, pos: usize, what: String) {
        if pos > self.furthest {
            self.furthest = pos;
            self.expected.clear();
        }
        if pos == self.furthest && !self.expected.contains(&what) {
            self.expected.push(what);
        }
    }

    fn run(&mut self, pattern: &Pattern, state: State) -> Vec<State> {
        match pattern {
            Pattern::Keyword(keyword) => match self.tokens.get(state.pos) {
                Some(token) if token.text.eq_ignore_ascii_case(keyword) => vec![State {
                    pos: state.pos + 1,
                    bindings: state.bindings,
                }],
                _ => {
                    self.fail(state.pos, format!("`{}`", keyword));
                    Vec::new()
                }
            },
            Pattern::Param(param) => self.param(param, state),
            Pattern::Seq(items) => {
                let mut states = vec![state];
                for item in items.iter() {
                    let mut next = Vec::new();
                    for s in states {
                        next.extend(self.run(item, s));
                    }
                    states = dedup(next);
                    if states.is_empty() {
                        break;
                    }
                }
                states
            }
            Pattern::Optional(inner) => {
                let mut out = self.run(inner, state.clone());
                out.push(state);
                dedup(out)
            }
            Pattern::Choice(alternatives) => {
                let mut out = Vec::new();
                for alternative in alternatives.iter() {
                    out.extend(self.run(alternative, state.clone()));
                }
                dedup(out)
            }
            Pattern::Repeat {
                pattern,
                separator,
                min,
            } => self.repeat(pattern, *separator, *min, state),
            Pattern::Options(specs) => self.options(specs, state),
        }
    }

    fn repeat(
        &mut self,
        pattern: &Pattern,
        separator: Option<&str>,
        min: u32,
        state: State,
    ) -> Vec<State> {
        let mut out = Vec::new();
        if min == 0 {
            out.push(state.clone());
        }
        let mut seen = vec![state.pos];
        let mut frontier = vec![state];
        let mut count = 0u32;

        while !frontier.is_empty() {
            count += 1;
            let mut next = Vec::new();
            for s in frontier {
                let mut starts = Vec::with_capacity(2);
                if count > 1
                    && let Some(sep) = separator
                    && self
                        .tokens
                        .get(s.pos)
                        .is_some_and(|t| t.text.eq_ignore_ascii_case(sep))
                {
                    starts.push(State {
                        pos: s.pos + 1,
                        bindings: s.bindings.clone(),
                    });
                }
                let origin = s.pos;
                starts.push(s);
                for start in starts {
                    next.extend(
                        self.run(pattern, start)
                            .into_iter()
                            .filter(|r| r.pos > origin),
                    );
                }
            }
            next.retain(|s| !seen.contains(&s.pos));
            let next = dedup(next);
            seen.extend(next.iter().map(|s| s.pos));
            if count >= min {
                out.extend(next.iter().cloned());
            }
            frontier = next;
        }
        dedup(out)
    }

    fn options(&mut self, specs: &[OptionSpec], state: State) -> Vec<State> {
        let mut out = vec![state.clone()];
        let mut current = state;
        loop {
            let pos = current.pos;
            let at_option = self.tokens.get(pos).is_some_and(|t| t.kind.is_word())
                && self
                    .tokens
                    .get(pos + 1)
                    .is_some_and(|t| t.kind == SyntaxKind::Equals);
            if !at_option {
                for spec in specs {
                    self.fail(pos, format!("`{}=`", spec.name));
                }
                break;
            }
            let Some(end) = value_end(self.tokens, pos + 2) else {
                self.fail(pos + 2, "<value>".to_string());
                break;
            };
            let name = self.tokens[pos].text.to_ascii_lowercase();
            let ty = specs
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.ty)
                .unwrap_or(ParamType::Any);
            let mut bindings = current.bindings.clone();
            bindings.push(self.binding(name, ty, FieldEffect::None, pos + 2, end));
            current = State { pos: end, bindings };
            out.push(current.clone());
        }
        // Longest run of options first.
        out.reverse();
        out
    }

    fn param(&mut self, param: &Param, state: State) -> Vec<State> {
        let ends = param_ends(param.ty, self.tokens, state.pos);
        if ends.is_empty() {
            self.fail(state.pos, format!("<{}>", param.name));
            return Vec::new();
        }
        ends.into_iter()
            .map(|end| {
                let mut bindings = state.bindings.clone();
                bindings.push(self.binding(
                    param.name.to_string(),
                    param.ty,
                    param.effect,
                    state.pos,
                    end,
                ));
                State { pos: end, bindings }
            })
            .collect()
    }

    fn binding(
        &self,
        name: String,
        ty: ParamType,
        effect: FieldEffect,
        start: usize,
        end: usize,
    ) -> Binding {
        let tokens = &self.tokens[start..end];
        Binding {
            name,
            ty,
            effect,
            text: join_text(tokens),
            start_offset: tokens.first().map(|t| t.start_offset).unwrap_or(0),
            end_offset: tokens.last().map(|t| t.end_offset).unwrap_or(0),
        }
    }
}

fn dedup(states: Vec<State>) -> Vec<State> {
    let mut out: Vec<State> = Vec::with_capacity(states.len());
    for state in states {
        if !out.iter().any(|s| s.pos == state.pos) {
            out.push(state);
        }
    }
    out
}

/// Token texts joined by a single space where the source had trivia.
fn join_text(tokens: &[Token]) -> String {
    let mut text = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && tokens[i - 1].end_offset != token.start_offset {
            text.push(' ');
        }
        text.push_str(&token.text);
    }
    text
}

// ============================================================================
// Parameter shapes
// ============================================================================

/// Token at `i` is written directly after token `i - 1`.
fn glued(tokens: &[Token], i: usize) -> bool {
    i > 0 && i < tokens.len() && tokens[i].start_offset == tokens[i - 1].end_offset
}

fn kind_at(tokens: &[Token], i: usize) -> Option<SyntaxKind> {
    tokens.get(i).map(|t| t.kind)
}

/// End of the balanced group opened at `pos`, or `None` if it is never closed.
fn balanced_end(tokens: &[Token], pos: usize, open: SyntaxKind, close: SyntaxKind) -> Option<usize> {
    let mut depth = 0u32;
    for (i, token) in tokens.iter().enumerate().skip(pos) {
        if token.kind == open {
            depth += 1;
        } else if token.kind == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i + 1);
            }
        }
    }
    None
}

fn paren_end(tokens: &[Token], pos: usize) -> Option<usize> {
    balanced_end(tokens, pos, SyntaxKind::LParen, SyntaxKind::RParen)
}

/// A run of tokens written without whitespace, glued parentheses included
/// (`web-01`, `-24h@h`, `eval(x>1)`).
fn value_end(tokens: &[Token], pos: usize) -> Option<usize> {
    let first = kind_at(tokens, pos)?;
    let mut end = if first == SyntaxKind::LParen {
        paren_end(tokens, pos)?
    } else if first.is_glue() {
        pos + 1
    } else {
        return None;
    };
    while glued(tokens, end) {
        let kind = tokens[end].kind;
        if kind == SyntaxKind::LParen {
            end = paren_end(tokens, end)?;
        } else if kind.is_glue() {
            end += 1;
        } else {
            break;
        }
    }
    Some(end)
}

/// Like [`value_end`] but stops before a parenthesis (`sma5` in `sma5(x)`).
fn name_end(tokens: &[Token], pos: usize) -> Option<usize> {
    if !kind_at(tokens, pos)?.is_glue() {
        return None;
    }
    let mut end = pos + 1;
    while glued(tokens, end) && tokens[end].kind.is_glue() {
        end += 1;
    }
    Some(end)
}

fn is_field_start(kind: SyntaxKind) -> bool {
    (kind.is_word() && !FIELD_LIST_STOP.contains(kind))
        || matches!(
            kind,
            SyntaxKind::WildcardField | SyntaxKind::Multiply | SyntaxKind::StringLiteral
        )
}

fn continues_field(kind: SyntaxKind) -> bool {
    kind.is_word()
        || matches!(
            kind,
            SyntaxKind::NumberLiteral
                | SyntaxKind::WildcardField
                | SyntaxKind::Multiply
                | SyntaxKind::Dot
                | SyntaxKind::Minus
        )
}

fn field_end(tokens: &[Token], pos: usize) -> Option<usize> {
    if !is_field_start(kind_at(tokens, pos)?) {
        return None;
    }
    let mut end = pos + 1;
    while glued(tokens, end) && continues_field(tokens[end].kind) {
        end += 1;
    }
    Some(end)
}

fn at_option(tokens: &[Token], pos: usize) -> bool {
    kind_at(tokens, pos).is_some_and(SyntaxKind::is_word)
        && kind_at(tokens, pos + 1) == Some(SyntaxKind::Equals)
}

fn field_list_end(tokens: &[Token], pos: usize) -> Option<usize> {
    if at_option(tokens, pos) {
        return None;
    }
    let mut end = field_end(tokens, pos)?;
    loop {
        let mut next = end;
        while kind_at(tokens, next) == Some(SyntaxKind::Comma) {
            next += 1;
        }
        if at_option(tokens, next) {
            break;
        }
        match field_end(tokens, next) {
            Some(after) => end = after,
            None => break,
        }
    }
    Some(end)
}

/// Function names include `now`, `true` and `false`, which lex as literals.
fn at_callee(tokens: &[Token], pos: usize) -> bool {
    let Some(token) = tokens.get(pos) else {
        return false;
    };
    let callable = token.kind.is_word()
        || token.kind == SyntaxKind::BooleanLiteral
        || (token.kind == SyntaxKind::TimeModifier && token.text.eq_ignore_ascii_case("now"));
    callable && kind_at(tokens, pos + 1) == Some(SyntaxKind::LParen)
}

/// A primary of an eval expression, prefix operators included.
fn operand_end(tokens: &[Token], pos: usize) -> Option<usize> {
    let mut i = pos;
    while matches!(
        kind_at(tokens, i),
        Some(SyntaxKind::Not | SyntaxKind::Minus | SyntaxKind::Plus)
    ) {
        i += 1;
    }
    let kind = kind_at(tokens, i)?;
    match kind {
        SyntaxKind::LParen => paren_end(tokens, i),
        _ if at_callee(tokens, i) => paren_end(tokens, i + 1),
        _ if kind.is_word()
            || kind.is_literal()
            || matches!(
                kind,
                SyntaxKind::WildcardField | SyntaxKind::MacroCall | SyntaxKind::Multiply
            ) =>
        {
            Some(i + 1)
        }
        _ => None,
    }
}

fn expression_end(tokens: &[Token], pos: usize) -> Option<usize> {
    let mut end = operand_end(tokens, pos)?;
    while let Some(kind) = kind_at(tokens, end) {
        if !EXPR_INFIX.contains(kind) {
            break;
        }
        if kind == SyntaxKind::In {
            match kind_at(tokens, end + 1) {
                Some(SyntaxKind::LParen) => match paren_end(tokens, end + 1) {
                    Some(after) => end = after,
                    None => break,
                },
                _ => break,
            }
            continue;
        }
        match operand_end(tokens, end + 1) {
            Some(after) => end = after,
            None => break,
        }
    }
    Some(end)
}

/// Every place a search predicate may end: before each top-level `BY`,
/// then at the end of the stage.
fn search_ends(tokens: &[Token], pos: usize) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut parens = 0u32;
    let mut brackets = 0u32;
    let mut i = pos;
    while let Some(kind) = kind_at(tokens, i) {
        match kind {
            SyntaxKind::Pipe if brackets == 0 => break,
            SyntaxKind::RBracket if brackets == 0 => break,
            SyntaxKind::LBracket => brackets += 1,
            SyntaxKind::RBracket => brackets -= 1,
            SyntaxKind::LParen => parens += 1,
            SyntaxKind::RParen => parens = parens.saturating_sub(1),
            SyntaxKind::By | SyntaxKind::Groupby if parens == 0 && brackets == 0 && i > pos => {
                ends.push(i);
            }
            _ => {}
        }
        i += 1;
    }
    if i > pos {
        ends.push(i);
    }
    ends
}

fn aggregation_end(tokens: &[Token], pos: usize) -> Option<usize> {
    let kind = kind_at(tokens, pos)?;
    if kind != SyntaxKind::Identifier && !kind.is_command_keyword() {
        return None;
    }
    if kind_at(tokens, pos + 1) == Some(SyntaxKind::LParen) {
        return paren_end(tokens, pos + 1);
    }
    Some(pos + 1)
}

fn is_bool(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "true" | "false" | "t" | "f" | "1" | "0" | "yes" | "no"
    )
}

/// Possible end positions of a parameter starting at `pos`, shortest first.
fn param_ends(ty: ParamType, tokens: &[Token], pos: usize) -> Vec<usize> {
    let single = |end: Option<usize>| end.into_iter().collect::<Vec<_>>();
    let kind = kind_at(tokens, pos);
    match ty {
        ParamType::Field | ParamType::WildcardField => single(field_end(tokens, pos)),
        ParamType::FieldList => single(field_list_end(tokens, pos)),
        ParamType::String => single((kind == Some(SyntaxKind::StringLiteral)).then_some(pos + 1)),
        ParamType::Regex => match kind {
            Some(SyntaxKind::StringLiteral) => vec![pos + 1],
            _ => single(value_end(tokens, pos)),
        },
        ParamType::Number => single(match kind {
            Some(SyntaxKind::NumberLiteral) => Some(pos + 1),
            Some(SyntaxKind::Minus)
                if kind_at(tokens, pos + 1) == Some(SyntaxKind::NumberLiteral)
                    && glued(tokens, pos + 1) =>
            {
                Some(pos + 2)
            }
            _ => None,
        }),
        ParamType::Integer => single(
            (kind == Some(SyntaxKind::NumberLiteral) && !tokens[pos].text.contains('.'))
                .then_some(pos + 1),
        ),
        ParamType::Boolean => single(match kind {
            Some(SyntaxKind::BooleanLiteral) => Some(pos + 1),
            Some(_) => value_end(tokens, pos).filter(|&end| is_bool(&join_text(&tokens[pos..end]))),
            None => None,
        }),
        ParamType::TimeSpan => single(value_end(tokens, pos)),
        ParamType::Expression => single(expression_end(tokens, pos)),
        ParamType::SearchExpression => search_ends(tokens, pos),
        ParamType::Subsearch => single(match kind {
            Some(SyntaxKind::LBracket) => {
                balanced_end(tokens, pos, SyntaxKind::LBracket, SyntaxKind::RBracket)
            }
            _ => None,
        }),
        ParamType::Aggregation => single(aggregation_end(tokens, pos)),
        ParamType::Name => single(name_end(tokens, pos)),
        ParamType::Any => single(match kind {
            Some(SyntaxKind::LBracket) => {
                balanced_end(tokens, pos, SyntaxKind::LBracket, SyntaxKind::RBracket)
            }
            _ => value_end(tokens, pos),
        }),
    }
}
