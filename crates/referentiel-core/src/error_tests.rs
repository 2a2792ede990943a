//! Error module tests

use crate::error::{Error, Result};

#[test]
fn test_record_not_found_error() {
    let error = Error::RecordNotFound(42, "skills");
    assert_eq!(error.code(), "E001");
    assert_eq!(
        error.suggestion(),
        Some("referentiel skills list".to_string())
    );
    assert!(error.to_string().contains("42"));
}

#[test]
fn test_duplicate_name_error() {
    let error = Error::DuplicateName("Rust".to_string());
    assert_eq!(error.code(), "E002");
    assert_eq!(error.suggestion(), None);
    assert!(error.to_string().contains("Rust"));
}

#[test]
fn test_api_error_with_message() {
    let error = Error::Api {
        status: 409,
        message: Some("Nom déjà utilisé".to_string()),
    };
    assert_eq!(error.code(), "E101");
    assert_eq!(error.server_message(), Some("Nom déjà utilisé"));
    assert!(error.to_string().contains("409"));
    assert!(error.to_string().contains("Nom déjà utilisé"));
}

#[test]
fn test_api_error_without_message() {
    let error = Error::Api {
        status: 500,
        message: None,
    };
    assert_eq!(error.server_message(), None);
    assert!(error.to_string().contains("no details"));
}

#[test]
fn test_blank_server_message_is_ignored() {
    let error = Error::Api {
        status: 400,
        message: Some("   ".to_string()),
    };
    assert_eq!(error.server_message(), None);
}

#[test]
fn test_non_api_errors_have_no_server_message() {
    assert_eq!(Error::DuplicateName("Rust".to_string()).server_message(), None);
    assert_eq!(Error::Other("boom".to_string()).server_message(), None);
}

#[test]
fn test_config_error() {
    let error = Error::ConfigError("bad url".to_string());
    assert_eq!(error.code(), "E600");
    assert_eq!(
        error.suggestion(),
        Some("referentiel config list".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    assert_eq!(error.code(), "E9999");
    assert!(error.to_string().contains("missing"));
}

#[test]
fn test_result_alias() {
    fn fails() -> Result<()> {
        Err(Error::InvalidInput("nom".to_string()))
    }
    let err = fails().unwrap_err();
    assert_eq!(err.code(), "E800");
}
