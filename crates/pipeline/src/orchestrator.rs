use std::sync::Arc;
use std::time::Duration;

use rollcall_core::annotate::Annotator;
use rollcall_core::codec::{decode_photo, encode_jpeg, DEFAULT_JPEG_QUALITY, OUTPUT_CONTENT_TYPE};
use rollcall_core::error::CoreError;
use rollcall_core::matching::{FaceMatcher, MatchError, MatchParams, MatchRecord};
use rollcall_core::naming::{collection_id, CollectionId};
use rollcall_core::upload::UploadRequest;

use crate::stage::{PipelineStage, StageTracker};

/// Default upper bound on a single remote matching call.
pub const DEFAULT_MATCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables of the pipeline, fixed at startup.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub match_params: MatchParams,
    /// Bound on the remote call; exceeding it counts as the service being
    /// unavailable.
    pub match_timeout: Duration,
    /// Quality of both the submitted and the returned JPEG.
    pub jpeg_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            match_params: MatchParams::default(),
            match_timeout: DEFAULT_MATCH_TIMEOUT,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Successful pipeline output.
#[derive(Debug, Clone)]
pub struct AnnotatedPhoto {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    /// Number of overlays drawn (one per match).
    pub match_count: usize,
}

/// Runs a class photo through validation, remote matching, annotation and
/// encoding.
pub struct AnnotationPipeline {
    matcher: Arc<dyn FaceMatcher>,
    annotator: Annotator,
    config: PipelineConfig,
}

impl AnnotationPipeline {
    pub fn new(matcher: Arc<dyn FaceMatcher>, config: PipelineConfig) -> Self {
        Self {
            matcher,
            annotator: Annotator::default(),
            config,
        }
    }

    /// Run one request to completion.
    ///
    /// Every failure short-circuits at the current stage; nothing is retried
    /// and no partially processed image is ever returned.
    pub async fn run(&self, request: UploadRequest) -> Result<AnnotatedPhoto, CoreError> {
        let mut tracker = StageTracker::new();

        match self.execute(&request, &mut tracker).await {
            Ok(photo) => {
                tracing::info!(
                    school = %request.school_name,
                    matches = photo.match_count,
                    bytes = photo.bytes.len(),
                    "Class photo annotated"
                );
                Ok(photo)
            }
            Err(err) => {
                tracing::warn!(
                    school = %request.school_name,
                    stage = %tracker.current(),
                    error = %err,
                    "Class photo rejected"
                );
                tracker.advance(PipelineStage::Rejected);
                Err(err)
            }
        }
    }

    async fn execute(
        &self,
        request: &UploadRequest,
        tracker: &mut StageTracker,
    ) -> Result<AnnotatedPhoto, CoreError> {
        request.validate()?;
        let collection = collection_id(&request.school_name);

        let mut image = decode_photo(&request.photo)?;
        let submission = encode_jpeg(&image, self.config.jpeg_quality)?;

        let matches = self.find_matches(&collection, &submission).await?;
        tracker.advance(PipelineStage::Matched);

        self.annotator.annotate(&mut image, &matches);
        tracker.advance(PipelineStage::Annotated);

        let bytes = encode_jpeg(&image, self.config.jpeg_quality)?;
        tracker.advance(PipelineStage::Encoded);

        Ok(AnnotatedPhoto {
            bytes,
            content_type: OUTPUT_CONTENT_TYPE,
            match_count: matches.len(),
        })
    }

    async fn find_matches(
        &self,
        collection: &CollectionId,
        image_bytes: &[u8],
    ) -> Result<Vec<MatchRecord>, MatchError> {
        let timeout = self.config.match_timeout;
        let call = self
            .matcher
            .find_matches(collection, image_bytes, &self.config.match_params);

        match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(MatchError::Unavailable(format!(
                "no response within {} ms",
                timeout.as_millis()
            ))),
        }
    }
}
