use std::path::Path;
use upload_constraints::utils::{determine_content_type, sanitize_file_name};

#[test]
fn test_content_type_feeds_validation_defaults() {
    // Every guessed type for the default extensions is itself a default type
    let defaults = upload_constraints::UploadConstraints::default();
    for name in ["a.mp3", "b.wav"] {
        let mime = determine_content_type(Path::new(name));
        assert!(
            defaults.accepted_types.iter().any(|t| t == mime),
            "{mime} not in defaults"
        );
    }
}

#[test]
fn test_sanitize_keeps_extension_case() {
    assert_eq!(sanitize_file_name("Live @ Home.WAV"), "live___home.WAV");
}

#[test]
fn test_sanitize_hidden_file() {
    assert_eq!(sanitize_file_name(".mp3"), "_mp3");
}

#[test]
fn test_sanitize_non_ascii() {
    assert_eq!(sanitize_file_name("Café.mp3"), "caf_.mp3");
}
