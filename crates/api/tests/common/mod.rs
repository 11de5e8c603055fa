#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use image::{ImageFormat, Rgb, RgbImage};
use tower::ServiceExt;

use rollcall_api::config::ServerConfig;
use rollcall_api::router::build_app_router;
use rollcall_api::state::AppState;
use rollcall_core::matching::{FaceMatcher, MatchError, MatchParams, MatchRecord};
use rollcall_core::naming::CollectionId;
use rollcall_pipeline::{AnnotationPipeline, PipelineConfig};

pub const BOUNDARY: &str = "rollcall-test-boundary";

// ---------------------------------------------------------------------------
// Stub matcher
// ---------------------------------------------------------------------------

/// In-process stand-in for the remote matching service.
pub struct StubMatcher {
    calls: AtomicUsize,
    response: Result<Vec<MatchRecord>, MatchError>,
    delay: Option<Duration>,
}

impl StubMatcher {
    pub fn returning(matches: Vec<MatchRecord>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Ok(matches),
            delay: None,
        })
    }

    pub fn failing(err: MatchError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Err(err),
            delay: None,
        })
    }

    pub fn hanging(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            response: Ok(Vec::new()),
            delay: Some(delay),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FaceMatcher for StubMatcher {
    async fn find_matches(
        &self,
        _collection_id: &CollectionId,
        _image_bytes: &[u8],
        _params: &MatchParams,
    ) -> Result<Vec<MatchRecord>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 5 * 1024 * 1024,
        pipeline: PipelineConfig::default(),
    }
}

/// Build the full application router around the given matcher.
pub fn build_test_app(matcher: Arc<StubMatcher>) -> Router {
    build_test_app_with(matcher, test_config())
}

pub fn build_test_app_with(matcher: Arc<StubMatcher>, config: ServerConfig) -> Router {
    let pipeline = AnnotationPipeline::new(matcher, config.pipeline.clone());
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn sample_image() -> RgbImage {
    RgbImage::from_fn(120, 90, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 200]))
}

pub fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// A multipart part: `(field name, optional filename, bytes)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

/// A plain text form field.
pub fn text<'a>(name: &'a str, value: &'a str) -> Part<'a> {
    (name, None, value.as_bytes())
}

/// A file form field.
pub fn file<'a>(name: &'a str, filename: &'a str, data: &'a [u8]) -> Part<'a> {
    (name, Some(filename), data)
}

/// Encode parts as a `multipart/form-data` body.
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart upload to `/api/v1/upload`.
pub async fn post_upload(app: Router, parts: &[Part<'_>]) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
