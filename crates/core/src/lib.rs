//! Domain logic for class-photo face annotation.
//!
//! Everything in this crate is free of network and HTTP concerns: naming of
//! face collections, the match data model and the [`matching::FaceMatcher`]
//! seam, normalized-to-pixel box mapping, drawing, and image codecs.

pub mod annotate;
pub mod codec;
pub mod error;
pub mod geometry;
pub mod matching;
pub mod naming;
pub mod upload;
