//! Inbound upload model and its validation rules.

use crate::error::CoreError;

/// File extensions (lowercase) accepted for uploaded photos.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One "annotate this class photo" request.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub school_name: String,
    pub photo: Vec<u8>,
    /// Filename as declared by the client; only its extension is inspected.
    pub filename: String,
}

impl UploadRequest {
    /// Check presence of every field and the photo's extension.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.school_name.trim().is_empty() {
            return Err(CoreError::Validation("school_name is required".into()));
        }
        if self.photo.is_empty() {
            return Err(CoreError::Validation("photo is required".into()));
        }
        if !has_accepted_extension(&self.filename) {
            return Err(CoreError::Validation(format!(
                "Unsupported file type '{}'. Supported: .png, .jpg, .jpeg",
                self.filename
            )));
        }
        Ok(())
    }
}

/// Whether `filename` ends in one of [`ACCEPTED_EXTENSIONS`], ignoring case.
///
/// A name without any `.` is rejected.
pub fn has_accepted_extension(filename: &str) -> bool {
    filename.rsplit_once('.').is_some_and(|(_, ext)| {
        ACCEPTED_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn request(school: &str, photo: &[u8], filename: &str) -> UploadRequest {
        UploadRequest {
            school_name: school.to_string(),
            photo: photo.to_vec(),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn accepted_extensions_any_case() {
        assert!(has_accepted_extension("class.png"));
        assert!(has_accepted_extension("class.JPG"));
        assert!(has_accepted_extension("class.Jpeg"));
        assert!(has_accepted_extension("archive.tar.jpg"));
    }

    #[test]
    fn rejected_extensions() {
        assert!(!has_accepted_extension("photo.gif"));
        assert!(!has_accepted_extension("photo.jpg.exe"));
        assert!(!has_accepted_extension("jpg"));
        assert!(!has_accepted_extension("photo."));
        assert!(!has_accepted_extension(""));
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("Lincoln", b"bytes", "class.jpg").validate().is_ok());
    }

    #[test]
    fn missing_school_name() {
        let err = request("  ", b"bytes", "class.jpg").validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("school_name"));
    }

    #[test]
    fn missing_photo() {
        let err = request("Lincoln", b"", "class.jpg").validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("photo"));
    }

    #[test]
    fn gif_is_rejected() {
        let err = request("Lincoln", b"GIF89a", "photo.gif").validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("photo.gif"));
    }
}
