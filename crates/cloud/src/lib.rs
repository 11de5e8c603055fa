//! Remote face-matching backends.
//!
//! Currently a single backend: AWS Rekognition's `SearchFacesByImage`,
//! exposed as a [`rollcall_core::matching::FaceMatcher`].

pub mod rekognition;
pub mod settings;

pub use rekognition::RekognitionMatcher;
pub use settings::RekognitionSettings;
