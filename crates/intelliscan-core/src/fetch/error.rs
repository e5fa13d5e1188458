//! Error taxonomy for one fetch/decode/filter action.

use thiserror::Error;

/// Why a report payload could not be turned into text or rows.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("response is not well-formed XML: {0}")]
    Malformed(&'static str),
    #[error("reportBytes is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("report payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("report payload is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Terminal failure of a report action. Never retried; the user re-submits.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A required input (URL, username, password) was blank.
    #[error("please fill in the {0} before fetching the report")]
    MissingInput(&'static str),
    #[error("invalid environment URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// DNS, connect, TLS or other libcurl failure; no HTTP status available.
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("request failed with status code: {code}")]
    HttpStatus { code: u32, body: String },
    #[error("connected but reportBytes is missing or empty")]
    EmptyPayload { body: String },
    #[error("error while decoding report: {0}")]
    Decode(#[from] DecodeError),
}

impl FetchError {
    /// Raw response body kept for diagnostics, when the server answered.
    pub fn diagnostic_body(&self) -> Option<&str> {
        match self {
            FetchError::HttpStatus { body, .. } | FetchError::EmptyPayload { body } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for FetchError {
    fn from(e: base64::DecodeError) -> Self {
        FetchError::Decode(DecodeError::Base64(e))
    }
}

impl From<std::string::FromUtf8Error> for FetchError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        FetchError::Decode(DecodeError::Utf8(e))
    }
}
