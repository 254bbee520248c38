use std::time::{Duration, SystemTime, UNIX_EPOCH};

use httpsrv::http::response::{ResponseBuilder, Status, http_date};

#[test]
fn test_status_as_u16() {
    assert_eq!(Status::Ok.as_u16(), 200);
    assert_eq!(Status::BadRequest.as_u16(), 400);
    assert_eq!(Status::NotFound.as_u16(), 404);
    assert_eq!(Status::MethodNotAllowed.as_u16(), 405);
    assert_eq!(Status::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_reason_phrase() {
    assert_eq!(Status::Ok.reason_phrase(), "OK");
    assert_eq!(Status::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(Status::NotFound.reason_phrase(), "Not Found");
    assert_eq!(Status::MethodNotAllowed.reason_phrase(), "Method Not Allowed");
    assert_eq!(
        Status::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(Status::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(Status::Ok)
        .body(body.clone())
        .build();

    let content_length = response.headers.get("Content-Length").unwrap();
    assert_eq!(content_length, &body.len().to_string());
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(Status::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(Status::NotFound).build();

    assert_eq!(response.body.len(), 0);
    assert_eq!(response.headers.get("Content-Length").unwrap(), "0");
}

#[test]
fn test_response_builder_header_order() {
    let response = ResponseBuilder::new(Status::Ok)
        .header("Server", "httpsrv")
        .header("Date", "Thu, 01 Jan 1970 00:00:00 +0000")
        .header("Content-type", "text/plain")
        .body(b"x".to_vec())
        .build();

    let keys: Vec<&str> = response.headers.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["Server", "Date", "Content-type", "Content-Length"]);
}

#[test]
fn test_response_builder_replacing_header_keeps_position() {
    let response = ResponseBuilder::new(Status::Ok)
        .header("Content-type", "text/plain")
        .header("X-Other", "1")
        .header("Content-type", "text/html")
        .build();

    let keys: Vec<&str> = response.headers.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["Content-type", "X-Other", "Content-Length"]);
    assert_eq!(response.headers.get("Content-type").unwrap(), "text/html");
}

#[test]
fn test_http_date_epoch() {
    assert_eq!(http_date(UNIX_EPOCH), "Thu, 01 Jan 1970 00:00:00 +0000");
}

#[test]
fn test_http_date_fixed_timestamp() {
    // 2020-06-15 12:34:56 UTC
    let t = UNIX_EPOCH + Duration::from_secs(1_592_224_496);
    assert_eq!(http_date(t), "Mon, 15 Jun 2020 12:34:56 +0000");
}

#[test]
fn test_http_date_shape() {
    let formatted = http_date(SystemTime::now());

    assert!(formatted.ends_with("+0000"));
    // "Thu, 01 Jan 1970 00:00:00 +0000" is fixed-width.
    assert_eq!(formatted.len(), 31);
    assert_eq!(&formatted[3..5], ", ");
}
