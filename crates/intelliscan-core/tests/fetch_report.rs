//! Integration test: the fetcher against a local SOAP stub.

mod common;

use intelliscan_core::fetch::{fetch_report, FetchError};
use intelliscan_core::report::{ReportRequest, ReportVariant};
use intelliscan_core::soap::SERVICE_PATH;

fn request(base_url: &str, variant: ReportVariant) -> ReportRequest {
    ReportRequest::new(base_url, "hcm.user", "Welcome1", variant.default_path())
}

#[test]
fn ok_response_returns_exact_csv() {
    let server = common::soap_server::start(200, common::report_response(common::LOOKUP_CSV));
    let csv = fetch_report(&request(&server.base_url, ReportVariant::Lookup)).unwrap();
    assert_eq!(csv, common::LOOKUP_CSV);
}

#[test]
fn request_carries_auth_content_type_and_envelope() {
    let server = common::soap_server::start(200, common::report_response("OBJ_NAME\n"));
    let base = format!("{}//", server.base_url);
    fetch_report(&request(&base, ReportVariant::FastFormula)).unwrap();

    let reqs = server.requests();
    assert_eq!(reqs.len(), 1, "exactly one request, no retries");
    let req = &reqs[0];
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, SERVICE_PATH);
    assert_eq!(
        req.header("content-type"),
        Some("application/soap+xml; charset=utf-8")
    );
    // base64("hcm.user:Welcome1")
    assert_eq!(
        req.header("authorization"),
        Some("Basic aGNtLnVzZXI6V2VsY29tZTE=")
    );
    assert!(req.body.contains("<pub:runReport>"));
    assert!(req.body.contains("<pub:attributeFormat>csv</pub:attributeFormat>"));
    assert!(req.body.contains(
        "<pub:reportAbsolutePath>/Custom/Human Capital Management/Sample Reports/FF INTELLISCAN REPORT.xdo</pub:reportAbsolutePath>"
    ));
    assert!(req.body.contains("<pub:sizeOfDataChunkDownload>-1</pub:sizeOfDataChunkDownload>"));
}

#[test]
fn non_200_is_http_status_with_body() {
    let server = common::soap_server::start(401, "<fault>Unauthorized</fault>");
    match fetch_report(&request(&server.base_url, ReportVariant::Lookup)) {
        Err(e @ FetchError::HttpStatus { code: 401, .. }) => {
            assert_eq!(e.diagnostic_body(), Some("<fault>Unauthorized</fault>"));
        }
        other => panic!("expected HttpStatus(401), got {:?}", other),
    }
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn server_error_is_not_retried() {
    let server = common::soap_server::start(500, "boom");
    let err = fetch_report(&request(&server.base_url, ReportVariant::Lookup)).unwrap_err();
    assert!(matches!(err, FetchError::HttpStatus { code: 500, .. }));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn missing_report_bytes_is_empty_payload() {
    let server = common::soap_server::start(200, common::empty_response());
    match fetch_report(&request(&server.base_url, ReportVariant::Lookup)) {
        Err(e @ FetchError::EmptyPayload { .. }) => {
            assert!(e.diagnostic_body().unwrap().contains("runReportReturn"));
        }
        other => panic!("expected EmptyPayload, got {:?}", other),
    }
}

#[test]
fn refused_connection_is_transport_error() {
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let base = format!("http://127.0.0.1:{}", port);
    assert!(matches!(
        fetch_report(&request(&base, ReportVariant::Lookup)),
        Err(FetchError::Transport(_))
    ));
}
