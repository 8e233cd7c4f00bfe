//! Domain error types

use std::fmt;

use thiserror::Error;

/// Why a URI template was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorReason {
    /// An opening `{` has no matching `}`.
    UnterminatedExpression,
    /// A `{` appeared inside an expression.
    NestedExpression,
    /// The expression `{}` holds no variables.
    EmptyExpression,
    /// The operator is reserved for future extensions (`=`, `,`, `!`, `@`, `|`).
    ReservedOperator(char),
    /// A variable name is empty or contains characters outside the varname grammar.
    InvalidVariableName,
    /// A `:N` prefix modifier is not a number between 1 and 9999.
    InvalidPrefixLength,
}

impl fmt::Display for SyntaxErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedExpression => f.write_str("unterminated expression"),
            Self::NestedExpression => f.write_str("nested '{' inside expression"),
            Self::EmptyExpression => f.write_str("empty expression"),
            Self::ReservedOperator(op) => write!(f, "reserved operator '{op}'"),
            Self::InvalidVariableName => f.write_str("invalid variable name"),
            Self::InvalidPrefixLength => f.write_str("invalid prefix length"),
        }
    }
}

/// A URI template contains an unterminated or malformed expression.
///
/// `position` is the byte offset of the offending expression's `{` (or of the
/// offending character for nested braces).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template syntax error at byte {position}: {reason} in `{template}`")]
pub struct TemplateSyntaxError {
    /// The full template text that failed to parse.
    pub template: String,
    /// Byte offset into `template`.
    pub position: usize,
    /// What was wrong.
    pub reason: SyntaxErrorReason,
}

impl TemplateSyntaxError {
    /// Creates a new syntax error for `template`.
    #[must_use]
    pub fn new(template: impl Into<String>, position: usize, reason: SyntaxErrorReason) -> Self {
        Self {
            template: template.into(),
            position,
            reason,
        }
    }
}

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A URI template could not be parsed.
    #[error(transparent)]
    TemplateSyntax(#[from] TemplateSyntaxError),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_syntax_error_message() {
        let err = TemplateSyntaxError::new(
            "https://x.test/{id",
            15,
            SyntaxErrorReason::UnterminatedExpression,
        );
        assert_eq!(
            err.to_string(),
            "template syntax error at byte 15: unterminated expression in `https://x.test/{id`"
        );
    }

    #[test]
    fn test_domain_error_is_transparent() {
        let err: DomainError =
            TemplateSyntaxError::new("{=x}", 0, SyntaxErrorReason::ReservedOperator('=')).into();
        assert!(err.to_string().contains("reserved operator '='"));
    }
}
