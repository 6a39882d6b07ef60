//! Assertions for RFC 7807 error responses.

use actix_web::body::{self, BoxBody};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's problem body, kept local so this crate does not
/// depend on the backend.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Check status, content type, code and trace-id parity of a problem
/// response, returning the parsed body for further assertions.
pub fn assert_problem_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(content_type, "application/problem+json");

    let problem: ProblemDetailsLike =
        serde_json::from_slice(body).expect("body should be problem+json");

    let trace_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert_eq!(
        problem.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert!(
        problem.type_.ends_with(expected_code),
        "type {:?} should name the code",
        problem.type_
    );
    assert!(!problem.title.is_empty());

    problem
}

/// [`assert_problem_parts`] for a test-service response.
pub async fn assert_problem_response(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = body::to_bytes(resp.into_body())
        .await
        .unwrap_or_else(|_| panic!("failed to read problem body"));

    assert_problem_parts(status, &headers, &bytes, expected_status, expected_code)
}
