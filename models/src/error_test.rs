use super::*;

#[test]
fn status_error_reads_message_field() {
    let err = ApiError::from_status(409, r#"{"message":"Newcomer already has an active match"}"#);
    assert_eq!(
        err.to_string(),
        "request failed with status 409: Newcomer already has an active match"
    );
}

#[test]
fn status_error_reads_problem_details_title() {
    let err = ApiError::from_status(400, r#"{"type":"about:blank","title":"One or more validation errors occurred."}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "One or more validation errors occurred.".to_owned()
        }
    );
}

#[test]
fn status_error_falls_back_to_plain_text_and_empty() {
    assert_eq!(
        ApiError::from_status(502, "Bad Gateway\n").to_string(),
        "request failed with status 502: Bad Gateway"
    );
    assert_eq!(ApiError::from_status(500, "").to_string(), "request failed with status 500");
}

#[test]
fn long_bodies_are_truncated() {
    let body = "x".repeat(500);
    let ApiError::Status { message, .. } = ApiError::from_status(500, &body) else {
        panic!("expected status error");
    };
    assert_eq!(message.chars().count(), 201);
    assert!(message.ends_with('…'));
}

#[test]
fn optional_maps_not_found_to_none() {
    let missing: Result<u8, ApiError> = Err(ApiError::from_status(404, ""));
    assert_eq!(optional(missing), Ok(None));
    assert_eq!(optional(Ok::<u8, ApiError>(3)), Ok(Some(3)));
}

#[test]
fn optional_passes_other_errors_through() {
    let failed: Result<u8, ApiError> = Err(ApiError::Network("connection refused".to_owned()));
    assert_eq!(optional(failed), Err(ApiError::Network("connection refused".to_owned())));
    assert!(!ApiError::from_status(500, "").is_not_found());
}

#[test]
fn display_strings() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
    assert_eq!(ApiError::Decode("missing field `id`".to_owned()).to_string(), "unexpected response: missing field `id`");
}

#[test]
fn decode_body_reads_json() {
    let ids: Vec<i64> = decode_body("[1, 2, 3]").unwrap();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn decode_body_treats_empty_as_null() {
    let nothing: Option<i64> = decode_body("  ").unwrap();
    assert!(nothing.is_none());
    decode_body::<serde::de::IgnoredAny>("").unwrap();
    decode_body::<serde::de::IgnoredAny>(r#"{"totalPoints": 10}"#).unwrap();
}

#[test]
fn decode_body_reports_schema_mismatch() {
    let err = decode_body::<Vec<crate::Employee>>(r#"[{"id": "seven"}]"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
