//! Client-side upload validation.
//!
//! Rejections here never reach the network; the gallery runs these checks
//! on file selection and again right before submit.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Upload size cap, matching the server's limit. `File::size()` reports
/// bytes as `f64`, so the cap is kept in the same unit.
pub const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Validate a selected file: must be an image MIME type within the size cap.
pub fn validate_file(mime_type: &str, size_bytes: f64) -> Result<(), String> {
    if !mime_type.starts_with("image/") {
        return Err("Please select an image file".to_owned());
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err("File size must be less than 5 MB".to_owned());
    }
    Ok(())
}

/// Validate the full pending upload right before submit.
pub fn validate_upload(title: &str, mime_type: &str, size_bytes: f64) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Please select a file and enter a title".to_owned());
    }
    validate_file(mime_type, size_bytes)
}
