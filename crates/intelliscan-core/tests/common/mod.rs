#![allow(dead_code)]

pub mod soap_server;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A `runReportResponse` envelope carrying `csv` as base64 `reportBytes`,
/// wrapped at 76 columns the way the service does.
pub fn report_response(csv: &str) -> String {
    let encoded = STANDARD.encode(csv.as_bytes());
    let wrapped: Vec<&str> = encoded
        .as_bytes()
        .chunks(76)
        .map(|c| std::str::from_utf8(c).unwrap())
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope">
<env:Header/>
<env:Body>
<ns2:runReportResponse xmlns:ns2="http://xmlns.oracle.com/oxp/service/PublicReportService">
<ns2:runReportReturn>
<ns2:metaDataList xsi:nil="true" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"/>
<ns2:reportBytes>{}</ns2:reportBytes>
<ns2:reportContentType>text/plain;charset=UTF-8</ns2:reportContentType>
<ns2:reportFileID xsi:nil="true" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"/>
</ns2:runReportReturn>
</ns2:runReportResponse>
</env:Body>
</env:Envelope>"#,
        wrapped.join("\n")
    )
}

/// Envelope with no `reportBytes` element.
pub fn empty_response() -> String {
    r#"<env:Envelope xmlns:env="http://www.w3.org/2003/05/soap-envelope"><env:Body><ns2:runReportResponse xmlns:ns2="http://xmlns.oracle.com/oxp/service/PublicReportService"><ns2:runReportReturn/></ns2:runReportResponse></env:Body></env:Envelope>"#
        .to_string()
}

pub const LOOKUP_CSV: &str = "OBJ_TYPE,OBJ_NAME,DATA\n\
LOOKUP,EMP_LOOKUP,x\n\
VALUESET,foo,contains EMP info\n\
LOOKUP,DEPT_TYPES,\"Sales, Marketing\"\n";
