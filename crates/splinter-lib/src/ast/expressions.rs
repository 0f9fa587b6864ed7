//! Eval-style expressions: `where`, `eval`, `fieldformat`, stats arguments.

use serde::Serialize;

use super::location::SourceLocation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    BinaryExpression(BinaryExpression),
    UnaryExpression(UnaryExpression),
    FunctionCall(FunctionCall),
    FieldReference(FieldReference),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    BooleanLiteral(BooleanLiteral),
    TimeLiteral(TimeLiteral),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpression {
    /// Operator as written, keywords lowercased (`and`, `like`).
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub operand: Box<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    /// Lowercased function name.
    pub function_name: String,
    pub arguments: Vec<Expression>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_name: String,
    pub is_wildcard: bool,
    pub location: SourceLocation,
}

/// A string literal with quotes removed and escapes resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberLiteral {
    pub value: f64,
    pub raw: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub location: SourceLocation,
}

/// Relative time modifier such as `-24h@h` or `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLiteral {
    pub value: String,
    pub location: SourceLocation,
}

impl FieldReference {
    pub fn new(field_name: impl Into<String>, location: SourceLocation) -> Self {
        let field_name = field_name.into();
        let is_wildcard = field_name.contains('*');
        Self {
            field_name,
            is_wildcard,
            location,
        }
    }
}

impl Expression {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expression::BinaryExpression(e) => e.location,
            Expression::UnaryExpression(e) => e.location,
            Expression::FunctionCall(e) => e.location,
            Expression::FieldReference(e) => e.location,
            Expression::StringLiteral(e) => e.location,
            Expression::NumberLiteral(e) => e.location,
            Expression::BooleanLiteral(e) => e.location,
            Expression::TimeLiteral(e) => e.location,
        }
    }

    /// Direct sub-expressions, left to right.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::BinaryExpression(e) => vec![&e.left, &e.right],
            Expression::UnaryExpression(e) => vec![&e.operand],
            Expression::FunctionCall(e) => e.arguments.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Pre-order walk over this expression and all of its descendants.
    pub fn walk(&self, f: &mut impl FnMut(&Expression)) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Names of every non-wildcard field referenced in the subtree, in order of
    /// first appearance.
    pub fn referenced_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        self.walk(&mut |expr| {
            if let Expression::FieldReference(field) = expr
                && !field.is_wildcard
                && !fields.contains(&field.field_name)
            {
                fields.push(field.field_name.clone());
            }
        });
        fields
    }

    pub fn as_field(&self) -> Option<&FieldReference> {
        match self {
            Expression::FieldReference(field) => Some(field),
            _ => None,
        }
    }
}
