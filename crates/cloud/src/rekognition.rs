//! AWS Rekognition implementation of [`FaceMatcher`].
//!
//! Wraps `SearchFacesByImage` and normalises the SDK's error surface into
//! [`MatchError`] so nothing above this module depends on SDK types.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_rekognition::error::{DisplayErrorContext, SdkError};
use aws_sdk_rekognition::operation::search_faces_by_image::SearchFacesByImageError;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{FaceMatch, Image};
use aws_sdk_rekognition::Client;

use rollcall_core::matching::{
    FaceMatcher, MatchError, MatchParams, MatchRecord, NormalizedBox,
};
use rollcall_core::naming::CollectionId;

use crate::settings::RekognitionSettings;

/// Provider name attached to statically configured credentials.
const CREDENTIALS_PROVIDER: &str = "rollcall-static";

/// Face matcher backed by a Rekognition face collection.
#[derive(Clone)]
pub struct RekognitionMatcher {
    client: Client,
}

impl RekognitionMatcher {
    /// Build a matcher from an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolve AWS configuration from `settings` and build a client.
    pub async fn connect(settings: &RekognitionSettings) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region.clone()));

        if let Some((key, secret)) = settings.static_credentials() {
            loader = loader.credentials_provider(Credentials::new(
                key,
                secret,
                None,
                None,
                CREDENTIALS_PROVIDER,
            ));
        }

        let sdk_config = loader.load().await;
        let mut builder = aws_sdk_rekognition::config::Builder::from(&sdk_config);
        if let Some(url) = &settings.endpoint_url {
            builder = builder.endpoint_url(url);
        }

        tracing::info!(
            region = %settings.region,
            endpoint = settings.endpoint_url.as_deref().unwrap_or("default"),
            "Rekognition client configured"
        );

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl FaceMatcher for RekognitionMatcher {
    async fn find_matches(
        &self,
        collection_id: &CollectionId,
        image_bytes: &[u8],
        params: &MatchParams,
    ) -> Result<Vec<MatchRecord>, MatchError> {
        tracing::debug!(
            collection_id = %collection_id,
            bytes = image_bytes.len(),
            threshold = params.threshold,
            max_faces = params.max_faces,
            "SearchFacesByImage"
        );

        let output = self
            .client
            .search_faces_by_image()
            .collection_id(collection_id.as_str())
            .image(Image::builder().bytes(Blob::new(image_bytes)).build())
            .face_match_threshold(params.threshold)
            .max_faces(params.max_faces)
            .send()
            .await
            .map_err(|err| classify_sdk_error(collection_id, &err))?;

        output
            .face_matches()
            .iter()
            .map(match_record_from_sdk)
            .collect()
    }
}

/// Convert one SDK `FaceMatch` into a [`MatchRecord`].
///
/// The face and all four bounding-box fields are required.
pub fn match_record_from_sdk(face_match: &FaceMatch) -> Result<MatchRecord, MatchError> {
    let face = face_match
        .face()
        .ok_or_else(|| MatchError::MalformedResponse("face match carries no face".into()))?;
    let bbox = face
        .bounding_box()
        .ok_or_else(|| MatchError::MalformedResponse("face carries no bounding box".into()))?;

    let bounding_box = NormalizedBox::from_parts(
        bbox.left().map(f64::from),
        bbox.top().map(f64::from),
        bbox.width().map(f64::from),
        bbox.height().map(f64::from),
    )?;

    Ok(MatchRecord {
        bounding_box,
        external_label: face.external_image_id().map(str::to_string),
        confidence: face_match.similarity().map(f64::from).unwrap_or_default(),
    })
}

/// Map an SDK failure onto the matcher error taxonomy.
pub fn classify_sdk_error<R>(
    collection_id: &CollectionId,
    err: &SdkError<SearchFacesByImageError, R>,
) -> MatchError
where
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(err).to_string();

    let Some(service_err) = err.as_service_error() else {
        // Timeouts, dispatch and response failures never reached a verdict.
        tracing::warn!(error = %message, "Rekognition request failed before a service response");
        return MatchError::Unavailable(message);
    };

    match service_err {
        SearchFacesByImageError::ResourceNotFoundException(_) => {
            MatchError::CollectionNotFound(collection_id.to_string())
        }
        SearchFacesByImageError::InvalidImageFormatException(_)
        | SearchFacesByImageError::ImageTooLargeException(_) => MatchError::InvalidImage(message),
        SearchFacesByImageError::ThrottlingException(_)
        | SearchFacesByImageError::ProvisionedThroughputExceededException(_) => {
            MatchError::Throttled(message)
        }
        SearchFacesByImageError::InternalServerError(_) => MatchError::Unavailable(message),
        _ => MatchError::Rejected(message),
    }
}
