use super::*;

const MIB: f64 = 1024.0 * 1024.0;

#[test]
fn six_mib_file_is_rejected_locally() {
    let result = validate_upload("holiday", "image/jpeg", 6.0 * MIB);
    assert_eq!(result, Err("File size must be less than 5 MB".to_owned()));
}

#[test]
fn size_at_the_cap_is_allowed() {
    assert_eq!(validate_file("image/png", 5.0 * MIB), Ok(()));
}

#[test]
fn non_image_mime_is_rejected() {
    let result = validate_file("application/pdf", 1.0 * MIB);
    assert_eq!(result, Err("Please select an image file".to_owned()));
}

#[test]
fn blank_title_is_rejected_before_the_file_checks() {
    let result = validate_upload("   ", "application/pdf", 1.0 * MIB);
    assert_eq!(
        result,
        Err("Please select a file and enter a title".to_owned())
    );
}

#[test]
fn valid_upload_passes() {
    assert_eq!(validate_upload("cat", "image/webp", 120.0 * 1024.0), Ok(()));
}
