//! Rich diagnostic error types for catalog access.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from a single fetch cycle against the catalog endpoint.
///
/// No variant is retried or escalated: every error is caught at the
/// fetch-cycle boundary and surfaced as a status line.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("Request failed: {status}")]
    #[diagnostic(
        code(tome::catalog::request_failed),
        help(
            "The catalog endpoint returned a non-success HTTP status. \
             Rate limiting (403/429) usually clears after a short wait; \
             check the endpoint URL for 404s."
        )
    )]
    RequestFailed { status: u16 },

    #[error("{message}")]
    #[diagnostic(
        code(tome::catalog::transport),
        help(
            "The request never completed: DNS, connectivity, or timeout. \
             Check that the network is available and the endpoint is reachable."
        )
    )]
    Transport { message: String },

    #[error("malformed response body: {message}")]
    #[diagnostic(
        code(tome::catalog::malformed_body),
        help(
            "The endpoint answered with a body that is not valid JSON. \
             If a proxy or captive portal is in the way, its error page \
             can end up here."
        )
    )]
    MalformedBody { message: String },
}

impl CatalogError {
    /// Transport-level failure, with a generic fallback when the
    /// underlying error carries no message.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Something went wrong".to_string()
        } else {
            message
        };
        Self::Transport { message }
    }
}

/// Convenience alias for catalog operation results.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
