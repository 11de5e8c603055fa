use crate::matching::MatchError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller sent something unusable (missing field, disallowed file type).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The upload passed validation but is not a decodable image.
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// The remote face-matching service failed or rejected the request.
    #[error(transparent)]
    Remote(#[from] MatchError),

    #[error("Internal error: {0}")]
    Internal(String),
}
