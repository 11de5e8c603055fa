//! Handler for class photo uploads.

use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use rollcall_core::error::CoreError;
use rollcall_core::upload::UploadRequest;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response header carrying the number of annotated faces.
pub const MATCH_COUNT_HEADER: &str = "x-match-count";

/// POST /api/v1/upload
///
/// Accepts a multipart form with a `school_name` text field and a `photo`
/// file field. Responds with the annotated photo as `image/jpeg`.
pub async fn annotate_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let mut school_name: Option<String> = None;
    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "school_name" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                school_name = Some(text);
            }
            "photo" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                photo = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let school_name = school_name.ok_or_else(|| {
        CoreError::Validation("Missing required 'school_name' field".into())
    })?;
    let (filename, photo) =
        photo.ok_or_else(|| CoreError::Validation("Missing required 'photo' field".into()))?;

    tracing::debug!(
        school = %school_name,
        filename = %filename,
        bytes = photo.len(),
        "Received class photo"
    );

    let annotated = state
        .pipeline
        .run(UploadRequest {
            school_name,
            photo,
            filename,
        })
        .await?;

    let headers = [
        (CONTENT_TYPE, HeaderValue::from_static(annotated.content_type)),
        (
            HeaderName::from_static(MATCH_COUNT_HEADER),
            HeaderValue::from(annotated.match_count),
        ),
    ];
    Ok((headers, annotated.bytes).into_response())
}
