//! ReportFetcher: one authenticated `runReport` round-trip.
//!
//! Uses the curl crate (libcurl) for a single blocking SOAP POST, then
//! unwraps the base64 `reportBytes` payload into the report's CSV text.

mod error;

pub use error::{DecodeError, FetchError};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::report::ReportRequest;
use crate::soap;

/// `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}

/// Fetches the report and returns its decoded CSV text.
///
/// Runs in the current thread and blocks until the exchange completes.
/// No retries and no timeout beyond libcurl's defaults.
pub fn fetch_report(request: &ReportRequest) -> Result<String, FetchError> {
    let base = request.base_url.trim_end_matches('/');
    url::Url::parse(base).map_err(|source| FetchError::InvalidUrl {
        url: request.base_url.clone(),
        source,
    })?;
    let endpoint = soap::endpoint_url(base);
    let envelope = soap::run_report_envelope(&request.report_path);

    tracing::debug!(
        endpoint = %endpoint,
        report_path = %request.report_path,
        username = %request.username,
        "sending runReport"
    );

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&endpoint)?;
    easy.post(true)?;
    easy.post_fields_copy(envelope.as_bytes())?;
    easy.follow_location(true)?;

    let mut list = curl::easy::List::new();
    list.append(&format!("Content-Type: {}", soap::CONTENT_TYPE))?;
    list.append(&format!(
        "Authorization: {}",
        basic_auth_header(&request.username, &request.password)
    ))?;
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    tracing::info!(status = code, bytes = body.len(), "runReport answered");

    interpret_response(code, &body)
}

/// Maps a raw HTTP status and body onto the decoded report or a `FetchError`.
pub fn interpret_response(code: u32, body: &[u8]) -> Result<String, FetchError> {
    let text = String::from_utf8_lossy(body);
    if code != 200 {
        tracing::warn!(status = code, "runReport returned non-200");
        return Err(FetchError::HttpStatus {
            code,
            body: text.into_owned(),
        });
    }

    match soap::extract_report_bytes(&text)? {
        Some(encoded) => decode_report_bytes(&encoded),
        None => {
            tracing::warn!("runReport response has no reportBytes");
            Err(FetchError::EmptyPayload {
                body: text.into_owned(),
            })
        }
    }
}

/// Base64 to UTF-8. Line wrapping and other ASCII whitespace are dropped first.
pub fn decode_report_bytes(encoded: &str) -> Result<String, FetchError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    let decoded = String::from_utf8(bytes)?;
    tracing::debug!(chars = decoded.len(), "decoded reportBytes");
    Ok(decoded)
}
