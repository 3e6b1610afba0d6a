use thiserror::Error;

/// Errors surfaced by transaction store operations
///
/// Two situations are kept strictly apart: no response was obtainable at
/// all (`Transport`), and a response arrived but reports failure (`Remote`,
/// with the store's status and body preserved verbatim for the caller to
/// interpret). A failed call is never coerced into a default value.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, or the fixed request timeout
    #[error("Transport error: {0}")]
    Transport(String),
    /// Non-success response from the store
    #[error("Remote error ({status}): {body}")]
    Remote { status: u16, body: String },
    /// A success response whose body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Status code of the remote response, when one was obtained
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the store reported the requested record as unknown
    ///
    /// The client does not synthesize a distinct not-found kind; callers
    /// interpret the 404 status themselves.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
