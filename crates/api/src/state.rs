use std::sync::Arc;

use rollcall_pipeline::AnnotationPipeline;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`. Holds no per-request
/// mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Annotation pipeline with its injected face matcher.
    pub pipeline: Arc<AnnotationPipeline>,
}
