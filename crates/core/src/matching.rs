//! Face match data model and the matcher seam.
//!
//! [`FaceMatcher`] is the only way the rest of the system talks to the remote
//! face-matching capability. Implementations normalise their native errors
//! into [`MatchError`] so callers never see SDK-specific types.

use async_trait::async_trait;
use serde::Serialize;

use crate::naming::CollectionId;

/// Default similarity cutoff (percent) applied by the remote service.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 85.0;

/// Default upper bound on the number of matches returned per photo.
pub const DEFAULT_MAX_FACES: i32 = 100;

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Face location as fractions of image width/height, origin top-left.
///
/// Values are not clamped; a face cut off by the photo edge may have a
/// negative `left`/`top` or extend past 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a box from the optional fields a remote service reports.
    ///
    /// Every field is required. A missing one is a broken data contract and
    /// is reported as [`MatchError::MalformedResponse`] instead of being
    /// defaulted to zero.
    pub fn from_parts(
        left: Option<f64>,
        top: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<Self, MatchError> {
        let require = |value: Option<f64>, field: &str| {
            value.ok_or_else(|| {
                MatchError::MalformedResponse(format!("bounding box is missing '{field}'"))
            })
        };

        Ok(Self {
            left: require(left, "left")?,
            top: require(top, "top")?,
            width: require(width, "width")?,
            height: require(height, "height")?,
        })
    }
}

/// One face in the photo that matched an entry of the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub bounding_box: NormalizedBox,
    /// Label attached to the collection entry (usually the student's name).
    pub external_label: Option<String>,
    /// Similarity score, 0-100.
    pub confidence: f64,
}

/// Parameters forwarded to the remote service with every search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    /// Percentage cutoff; matches below it are dropped remotely.
    pub threshold: f32,
    pub max_faces: i32,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            max_faces: DEFAULT_MAX_FACES,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure kinds of the remote face-matching capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("Face collection '{0}' does not exist")]
    CollectionNotFound(String),

    #[error("Matching service rejected the image: {0}")]
    InvalidImage(String),

    #[error("Matching service throttled the request: {0}")]
    Throttled(String),

    /// Network failure, timeout, or a server-side outage.
    #[error("Matching service unavailable: {0}")]
    Unavailable(String),

    #[error("Matching service returned malformed data: {0}")]
    MalformedResponse(String),

    /// Any other refusal (access denied, bad parameters, ...).
    #[error("Matching service rejected the request: {0}")]
    Rejected(String),
}

impl MatchError {
    /// Whether the failure is transient on the service side rather than a
    /// problem with this particular request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Throttled(_) | Self::Unavailable(_))
    }
}

// ---------------------------------------------------------------------------
// Matcher seam
// ---------------------------------------------------------------------------

/// Searches a face collection for faces appearing in an image.
///
/// Results come back in whatever order the service yields them; callers must
/// not assume the first match is the best one. Implementations neither retry
/// nor cache.
#[async_trait]
pub trait FaceMatcher: Send + Sync {
    async fn find_matches(
        &self,
        collection_id: &CollectionId,
        image_bytes: &[u8],
        params: &MatchParams,
    ) -> Result<Vec<MatchRecord>, MatchError>;
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn from_parts_with_all_fields() {
        let b = NormalizedBox::from_parts(Some(0.1), Some(0.2), Some(0.3), Some(0.4)).unwrap();
        assert_eq!(b, NormalizedBox::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn from_parts_missing_field_fails_fast() {
        let err = NormalizedBox::from_parts(Some(0.1), None, Some(0.3), Some(0.4)).unwrap_err();
        assert_matches!(err, MatchError::MalformedResponse(msg) if msg.contains("top"));
    }

    #[test]
    fn from_parts_does_not_default_zero() {
        assert!(NormalizedBox::from_parts(None, None, None, None).is_err());
    }

    #[test]
    fn default_params() {
        let params = MatchParams::default();
        assert_eq!(params.threshold, 85.0);
        assert_eq!(params.max_faces, 100);
    }

    #[test]
    fn unavailable_classification() {
        assert!(MatchError::Unavailable("timeout".into()).is_unavailable());
        assert!(MatchError::Throttled("slow down".into()).is_unavailable());
        assert!(!MatchError::CollectionNotFound("x".into()).is_unavailable());
        assert!(!MatchError::InvalidImage("x".into()).is_unavailable());
    }
}
