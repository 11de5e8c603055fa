//! Upload → match → annotate → encode orchestration.
//!
//! [`AnnotationPipeline`] is built once at startup with an injected
//! [`rollcall_core::matching::FaceMatcher`] and shared across requests; each
//! call to [`AnnotationPipeline::run`] owns its own image and match list.

pub mod orchestrator;
pub mod stage;

pub use orchestrator::{AnnotatedPhoto, AnnotationPipeline, PipelineConfig};
pub use stage::PipelineStage;
