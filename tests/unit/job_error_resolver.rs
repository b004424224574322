//! Job error payload shapes.

use auth0_core::jobs::resolve;
use auth0_core::{Auth0Error, JobErrorDetails};

#[test]
fn test_absent_and_blank_bodies() {
    for body in [None, Some(""), Some("   "), Some("\n\t")] {
        assert!(resolve(body).unwrap().is_none(), "{:?}", body);
    }
}

#[test]
fn test_empty_array_with_whitespace() {
    assert!(resolve(Some("  [ ]  ")).unwrap().is_none());
}

#[test]
fn test_multiple_import_records() {
    let body = r#"[
        {"user": {"email": "a@example.com"}, "errors": [{"code": "INVALID_FORMAT", "message": "bad", "path": "email"}]},
        {"user": {"email": "b@example.com"}, "errors": [
            {"code": "DUPLICATED_USER", "message": "exists", "path": "email"},
            {"code": "MISSING_REQUIRED_PROPERTY", "message": "missing", "path": "password"}
        ]}
    ]"#;

    match resolve(Some(body)).unwrap() {
        Some(JobErrorDetails::ImportErrors(records)) => {
            assert_eq!(records.len(), 2);
            assert_eq!(records[1].errors.len(), 2);
            assert_eq!(records[1].errors[1].path, "password");
        }
        other => panic!("Expected ImportErrors, got: {:?}", other),
    }
}

#[test]
fn test_failed_job_object() {
    let body = r#"  {"id": "job_1", "type": "users_import", "status": "failed", "status_details": "bad file"}"#;

    let details = resolve(Some(body)).unwrap().unwrap();
    let job = details.job_failure().unwrap();
    assert_eq!(job.status_details.as_deref(), Some("bad file"));
    assert!(details.import_errors().is_none());
}

#[test]
fn test_other_json_values_are_unexpected() {
    for body in ["null", "true", "42", "\"failed\""] {
        match resolve(Some(body)) {
            Err(Auth0Error::UnexpectedPayload { .. }) => {}
            other => panic!("Expected UnexpectedPayload for {}, got: {:?}", body, other),
        }
    }
}

#[test]
fn test_broken_json_is_a_decode_error() {
    assert!(matches!(resolve(Some("[{")), Err(Auth0Error::Json(_))));
    assert!(matches!(resolve(Some("{\"id\":")), Err(Auth0Error::Json(_))));
}
