//! Application error types

use thiserror::Error;
use urltpl_domain::TemplateSyntaxError;

/// Errors raised while running request hooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Template expansion failed on a malformed template.
    #[error(transparent)]
    Template(#[from] TemplateSyntaxError),

    /// A caller-supplied hook refused the request.
    #[error("request rejected by hook: {0}")]
    Rejected(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
