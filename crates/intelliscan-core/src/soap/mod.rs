//! SOAP 1.2 plumbing for BI Publisher's `ExternalReportWSSService`.
//!
//! Builds the `runReport` envelope and pulls the base64 `reportBytes`
//! payload back out of the response envelope.

mod parse;

pub use parse::extract_report_bytes;

use quick_xml::escape::escape;

/// Path of the report service, appended to the environment base URL.
pub const SERVICE_PATH: &str = "/xmlpserver/services/ExternalReportWSSService";

/// SOAP 1.2 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Namespace of the `PublicReportService` request and response elements.
pub const PUBLIC_REPORT_NS: &str = "http://xmlns.oracle.com/oxp/service/PublicReportService";

/// Request content type for SOAP 1.2.
pub const CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

/// Service endpoint for an environment: trailing slashes trimmed, service path appended.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SERVICE_PATH)
}

/// Builds the `runReport` envelope: CSV output, no flattening, whole
/// payload in one response (`sizeOfDataChunkDownload = -1`).
pub fn run_report_envelope(report_path: &str) -> String {
    format!(
        r#"<soap:Envelope xmlns:soap="{soap}" xmlns:pub="{public}">
   <soap:Header/>
   <soap:Body>
      <pub:runReport>
         <pub:reportRequest>
            <pub:attributeFormat>csv</pub:attributeFormat>
            <pub:flattenXML>false</pub:flattenXML>
            <pub:reportAbsolutePath>{path}</pub:reportAbsolutePath>
            <pub:sizeOfDataChunkDownload>-1</pub:sizeOfDataChunkDownload>
         </pub:reportRequest>
      </pub:runReport>
   </soap:Body>
</soap:Envelope>
"#,
        soap = SOAP_ENV_NS,
        public = PUBLIC_REPORT_NS,
        path = escape(report_path),
    )
}
