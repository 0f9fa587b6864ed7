use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics start at the same position, the higher-priority one
/// is kept and the other dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unbalanced delimiters cascade into everything after them
    UnclosedSubsearch,
    UnclosedParen,

    // User omitted something required
    ExpectedCommand,
    ExpectedExpression,
    ExpectedField,
    ExpectedValue,
    ExpectedString,
    ExpectedAggregation,
    ExpectedToken,

    // User wrote something that doesn't belong
    UnrecognizedInput,
    UnmatchedBracket,
    UnmatchedParen,
    UnexpectedToken,

    // Resource limits
    RecursionLimitExceeded,
}

impl DiagnosticKind {
    /// Whether this kind wins over `other` at the same position.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedSubsearch => "missing closing `]`",
            Self::UnclosedParen => "missing closing `)`",

            Self::ExpectedCommand => "expected a command",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedField => "expected a field name",
            Self::ExpectedValue => "expected a value",
            Self::ExpectedString => "expected a quoted string",
            Self::ExpectedAggregation => "expected an aggregation",
            Self::ExpectedToken => "expected token",

            Self::UnrecognizedInput => "unrecognized input",
            Self::UnmatchedBracket => "unmatched `]`",
            Self::UnmatchedParen => "unmatched `)`",
            Self::UnexpectedToken => "unexpected token",

            Self::RecursionLimitExceeded => "query is nested too deeply",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedToken => "expected `{}`".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub range: TextRange,
    pub message: String,
    pub related: Vec<RelatedInfo>,
    pub hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
