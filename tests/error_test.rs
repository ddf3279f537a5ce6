use upload_constraints::{CandidateFile, Error};

#[test]
fn test_error_display() {
    let errors = [
        (
            Error::InvalidConfig("Base URL is not configured".to_string()),
            "Invalid configuration: Base URL is not configured",
        ),
        (
            Error::InvalidFile("file not found".to_string()),
            "Invalid file: file not found",
        ),
        (
            Error::InvalidData("malformed json".to_string()),
            "Invalid data format: malformed json",
        ),
    ];

    for (error, expected_message) in errors {
        assert_eq!(error.to_string(), expected_message);
    }
}

#[tokio::test]
async fn test_unreadable_file_is_invalid_file() {
    let err = CandidateFile::from_path("/path/to/nonexistent/take_12345.wav")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidFile(_)));
    assert!(err.to_string().starts_with("Invalid file: Cannot read "));
    assert_eq!(err.status(), None);
}
