//! Lowering of eval expressions and the search sublanguage.

use crate::ast::{
    BinaryExpression, BooleanLiteral, Expression, FieldReference, FunctionCall, NumberLiteral,
    SearchComparison, SearchExpression, SearchGroup, SearchIn, SearchKeyword, SearchMacro,
    SearchNot, SearchOr, SearchTerm, StringLiteral, Subsearch, TimeLiteral, UnaryExpression,
};
use crate::parser::SyntaxKind;
use crate::parser::cst::SyntaxToken;
use crate::parser::nodes::{self, Expr, SearchItem};

use super::Lowering;
use super::helpers::unquote;

impl Lowering<'_> {
    /// Lowers an expression node. Operands lost to parse errors collapse
    /// into the surviving side; `None` only when nothing survives.
    pub(crate) fn expression(&self, expr: &Expr) -> Option<Expression> {
        let location = self.node_loc(expr);
        match expr {
            Expr::Binary(binary) => {
                let operator = operator_text(&binary.op()?);
                let left = binary.lhs().and_then(|e| self.expression(&e));
                let right = binary.rhs().and_then(|e| self.expression(&e));
                match (left, right) {
                    (Some(left), Some(right)) => {
                        Some(Expression::BinaryExpression(BinaryExpression {
                            operator,
                            left: Box::new(left),
                            right: Box::new(right),
                            location,
                        }))
                    }
                    (Some(side), None) | (None, Some(side)) => Some(side),
                    (None, None) => None,
                }
            }
            Expr::Unary(unary) => {
                let operator = operator_text(&unary.op()?);
                let operand = self.expression(&unary.operand()?)?;
                Some(Expression::UnaryExpression(UnaryExpression {
                    operator,
                    operand: Box::new(operand),
                    location,
                }))
            }
            Expr::Paren(paren) => self.expression(&paren.inner()?),
            Expr::Call(call) => {
                let function_name = call.name()?.text().to_ascii_lowercase();
                let arguments = call.args().filter_map(|a| self.expression(&a)).collect();
                Some(Expression::FunctionCall(FunctionCall {
                    function_name,
                    arguments,
                    location,
                }))
            }
            Expr::In(list) => {
                let arguments = list
                    .lhs()
                    .into_iter()
                    .chain(list.values())
                    .filter_map(|a| self.expression(&a))
                    .collect();
                Some(Expression::FunctionCall(FunctionCall {
                    function_name: "in".to_string(),
                    arguments,
                    location,
                }))
            }
            Expr::FieldRef(field) => {
                let token = field.token()?;
                let name = match token.kind() {
                    SyntaxKind::StringLiteral => unquote(token.text()),
                    _ => token.text().to_string(),
                };
                Some(Expression::FieldReference(FieldReference::new(
                    name, location,
                )))
            }
            Expr::Literal(literal) => Some(self.literal(&literal.token()?)),
        }
    }

    fn literal(&self, token: &SyntaxToken) -> Expression {
        let location = self.token_loc(token);
        let text = token.text();
        match token.kind() {
            SyntaxKind::NumberLiteral => Expression::NumberLiteral(NumberLiteral {
                value: text.parse().unwrap_or_default(),
                raw: text.to_string(),
                location,
            }),
            SyntaxKind::BooleanLiteral => Expression::BooleanLiteral(BooleanLiteral {
                value: text.eq_ignore_ascii_case("true"),
                location,
            }),
            SyntaxKind::TimeModifier => Expression::TimeLiteral(TimeLiteral {
                value: text.to_string(),
                location,
            }),
            SyntaxKind::StringLiteral => Expression::StringLiteral(StringLiteral {
                value: unquote(text),
                location,
            }),
            _ => Expression::StringLiteral(StringLiteral {
                value: text.to_string(),
                location,
            }),
        }
    }

    pub(crate) fn search_expression(&self, node: &nodes::SearchExpr) -> SearchExpression {
        let terms = node.items().filter_map(|item| self.search_term(&item)).collect();
        SearchExpression::new(terms, self.node_loc(node))
    }

    fn search_term(&self, item: &SearchItem) -> Option<SearchTerm> {
        let location = self.node_loc(item);
        let term = match item {
            SearchItem::Or(or) => SearchTerm::Or(SearchOr {
                operands: or.operands().filter_map(|op| self.search_term(&op)).collect(),
                location,
            }),
            SearchItem::Not(not) => SearchTerm::Not(SearchNot {
                operand: Box::new(self.search_term(&not.operand()?)?),
                location,
            }),
            SearchItem::Group(group) => SearchTerm::Group(SearchGroup {
                terms: group.items().filter_map(|t| self.search_term(&t)).collect(),
                location,
            }),
            SearchItem::Comparison(cmp) => SearchTerm::Comparison(SearchComparison {
                field: self.search_value(&cmp.field()?),
                operator: cmp.operator()?.text().to_string(),
                value: cmp
                    .value()
                    .map(|v| self.search_value(&v))
                    .unwrap_or_default(),
                location,
            }),
            SearchItem::In(search_in) => SearchTerm::In(SearchIn {
                field: self.search_value(&search_in.field()?),
                values: search_in.values().map(|v| self.search_value(&v)).collect(),
                location,
            }),
            SearchItem::Term(term) => {
                let value = term.value()?;
                SearchTerm::Keyword(SearchKeyword {
                    text: self.search_value(&value),
                    quoted: value.quoted().is_some(),
                    location,
                })
            }
            SearchItem::Macro(search_macro) => {
                let (name, arguments) = split_macro(search_macro.token()?.text());
                SearchTerm::Macro(SearchMacro {
                    name,
                    arguments,
                    location,
                })
            }
            SearchItem::Subsearch(subsearch) => SearchTerm::Subsearch(Subsearch {
                pipeline: self.subsearch(subsearch),
                location,
            }),
        };
        Some(term)
    }

    fn search_value(&self, value: &nodes::SearchValue) -> String {
        match value.quoted() {
            Some(token) => unquote(token.text()),
            None => self.text(value).to_string(),
        }
    }
}

/// Keyword operators lowercased, symbols as written.
fn operator_text(token: &SyntaxToken) -> String {
    if token.kind().is_keyword() {
        token.text().to_ascii_lowercase()
    } else {
        token.text().to_string()
    }
}

/// `` `name(a, b)` `` → `("name", ["a", "b"])`.
fn split_macro(text: &str) -> (String, Vec<String>) {
    let body = text.trim_matches('`');
    match body.split_once('(') {
        Some((name, rest)) => {
            let inner = rest.strip_suffix(')').unwrap_or(rest);
            let arguments = inner
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
            (name.trim().to_string(), arguments)
        }
        None => (body.trim().to_string(), Vec::new()),
    }
}
