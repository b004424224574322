//! Jobs client tests.

use crate::common::{RecordingConnection, TEST_TOKEN, create_test_client, init_logging};
use auth0_core::jobs::{
    UsersExportsJobField, UsersExportsJobFormat, UsersExportsJobRequest, VerifyEmailJobRequest,
};
use auth0_core::{Auth0Error, HttpMethod, JobErrorDetails};
use serde_json::json;

const ERRORS_URI: &str = "https://tenant.auth0.test/api/v2/jobs/job_123/errors";

#[tokio::test]
async fn test_error_details_empty_array_is_none() {
    init_logging();
    let (client, _) = create_test_client(RecordingConnection::new().respond_with("[]"));

    let result = client.jobs().get_error_details("job_123").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_error_details_missing_body_is_none() {
    init_logging();
    let (client, _) = create_test_client(RecordingConnection::new().respond_empty());

    let result = client.jobs().get_error_details("job_123").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_error_details_array_yields_import_errors() {
    init_logging();
    let body = r#"
        [
          {
            "user": { "email": "john@example.com" },
            "errors": [
              { "code": "INVALID_FORMAT", "message": "Invalid email", "path": "email" }
            ]
          }
        ]"#;
    let (client, connection) = create_test_client(RecordingConnection::new().respond_with(body));

    let details = client
        .jobs()
        .get_error_details("job_123")
        .await
        .unwrap()
        .expect("import errors expected");

    let errors = details.import_errors().expect("ImportErrors variant");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].user, json!({ "email": "john@example.com" }));
    assert_eq!(errors[0].errors[0].code, "INVALID_FORMAT");
    assert_eq!(errors[0].errors[0].path, "email");
    assert!(details.job_failure().is_none());

    let request = connection.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.uri, ERRORS_URI);
    assert_eq!(request.headers["Authorization"], TEST_TOKEN);
}

#[tokio::test]
async fn test_error_details_object_yields_job_failure() {
    init_logging();
    let body = r#"
        {
          "status": "failed",
          "type": "users_import",
          "id": "job_abc",
          "status_details": "Failed to parse users file JSON when importing users."
        }"#;
    let (client, _) = create_test_client(RecordingConnection::new().respond_with(body));

    let details = client
        .jobs()
        .get_error_details("job_123")
        .await
        .unwrap()
        .expect("job failure expected");

    match details {
        JobErrorDetails::JobFailure(job) => {
            assert_eq!(job.id, "job_abc");
            assert!(job.is_failed());
            assert_eq!(
                job.status_details.as_deref(),
                Some("Failed to parse users file JSON when importing users.")
            );
        }
        other => panic!("Expected JobFailure, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_error_details_unexpected_payload() {
    init_logging();
    let (client, _) = create_test_client(RecordingConnection::new().respond_with("\"oops\""));

    let result = client.jobs().get_error_details("job_123").await;
    assert!(matches!(result, Err(Auth0Error::UnexpectedPayload { .. })));
}

#[tokio::test]
async fn test_invalid_job_id_never_reaches_connection() {
    init_logging();
    let (client, connection) = create_test_client(RecordingConnection::new());

    for job_id in ["", "job/../users", "job#1"] {
        let result = client.jobs().get_error_details(job_id).await;
        assert!(matches!(result, Err(Auth0Error::InvalidArgument { .. })));
    }
    assert!(connection.requests().is_empty());
}

#[tokio::test]
async fn test_connection_errors_propagate() {
    init_logging();
    let (client, _) = create_test_client(
        RecordingConnection::new().respond_with_error(Auth0Error::api(404, "job not found")),
    );

    match client.jobs().get_error_details("job_123").await {
        Err(Auth0Error::Api { status_code, .. }) => assert_eq!(status_code, 404),
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_job() {
    init_logging();
    let body = r#"{"id":"job_123","type":"users_export","status":"completed","location":"https://files/export.json"}"#;
    let (client, connection) = create_test_client(RecordingConnection::new().respond_with(body));

    let job = client.jobs().get("job_123").await.unwrap();
    assert_eq!(job.job_type.as_deref(), Some("users_export"));
    assert_eq!(job.location.as_deref(), Some("https://files/export.json"));
    assert_eq!(
        connection.last_request().uri,
        "https://tenant.auth0.test/api/v2/jobs/job_123"
    );
}

#[tokio::test]
async fn test_send_verification_email() {
    init_logging();
    let body = r#"{"id":"job_v1","type":"verification_email","status":"pending"}"#;
    let (client, connection) = create_test_client(RecordingConnection::new().respond_with(body));

    let request = VerifyEmailJobRequest {
        user_id: "auth0|42".to_string(),
        client_id: Some("client_1".to_string()),
        ..Default::default()
    };
    let job = client.jobs().send_verification_email(&request).await.unwrap();
    assert_eq!(job.id, "job_v1");

    let recorded = connection.last_request();
    assert_eq!(recorded.method, HttpMethod::Post);
    assert_eq!(
        recorded.uri,
        "https://tenant.auth0.test/api/v2/jobs/verification-email"
    );
    assert_eq!(
        recorded.body,
        Some(json!({ "user_id": "auth0|42", "client_id": "client_1" }))
    );
}

#[tokio::test]
async fn test_send_verification_email_requires_user() {
    init_logging();
    let (client, connection) = create_test_client(RecordingConnection::new());

    let result = client
        .jobs()
        .send_verification_email(&VerifyEmailJobRequest::default())
        .await;
    assert!(matches!(result, Err(Auth0Error::InvalidArgument { .. })));
    assert!(connection.requests().is_empty());
}

#[tokio::test]
async fn test_export_users() {
    init_logging();
    let body = r#"{"id":"job_e1","type":"users_export","status":"pending","format":"csv"}"#;
    let (client, connection) = create_test_client(RecordingConnection::new().respond_with(body));

    let request = UsersExportsJobRequest {
        connection_id: None,
        format: UsersExportsJobFormat::Csv,
        limit: None,
        fields: vec![UsersExportsJobField {
            name: "email".to_string(),
            export_as: Some("Email".to_string()),
        }],
    };
    let job = client.jobs().export_users(&request).await.unwrap();
    assert_eq!(job.format.as_deref(), Some("csv"));

    let recorded = connection.last_request();
    assert_eq!(recorded.uri, "https://tenant.auth0.test/api/v2/jobs/users-exports");
    assert_eq!(
        recorded.body,
        Some(json!({ "format": "csv", "fields": [{ "name": "email", "export_as": "Email" }] }))
    );
}

#[tokio::test]
async fn test_post_with_empty_response_is_unexpected() {
    init_logging();
    let (client, _) = create_test_client(RecordingConnection::new().respond_empty());

    let request = UsersExportsJobRequest {
        connection_id: None,
        format: UsersExportsJobFormat::Json,
        limit: None,
        fields: Vec::new(),
    };
    let result = client.jobs().export_users(&request).await;
    assert!(matches!(result, Err(Auth0Error::UnexpectedPayload { .. })));
}
