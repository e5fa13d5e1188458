//! Locate the namespaced `reportBytes` element in a `runReport` response.
//!
//! The whole body is read, so a truncated or otherwise ill-formed envelope
//! is a decode error rather than a missing payload.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use super::PUBLIC_REPORT_NS;
use crate::fetch::DecodeError;

const REPORT_BYTES: &[u8] = b"reportBytes";

fn is_report_bytes(ns: &ResolveResult<'_>, local_name: &[u8]) -> bool {
    matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == PUBLIC_REPORT_NS.as_bytes())
        && local_name == REPORT_BYTES
}

/// Tracks element nesting to enforce a single, closed root element.
#[derive(Default)]
struct Shape {
    depth: usize,
    root_seen: bool,
}

impl Shape {
    fn open(&mut self) -> Result<(), DecodeError> {
        if self.depth == 0 && self.root_seen {
            return Err(DecodeError::Malformed("content after the root element"));
        }
        self.root_seen = true;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn finish(&self) -> Result<(), DecodeError> {
        if !self.root_seen {
            return Err(DecodeError::Malformed("no root element"));
        }
        if self.depth > 0 {
            return Err(DecodeError::Malformed("document ends inside an open element"));
        }
        Ok(())
    }
}

/// Returns the text of the first `{PublicReportService}reportBytes` element.
///
/// `Ok(None)` when the element is absent, self-closing, or holds only
/// whitespace. The returned text is still base64.
pub fn extract_report_bytes(xml: &str) -> Result<Option<String>, DecodeError> {
    let mut reader = NsReader::from_str(xml);
    let mut shape = Shape::default();
    let mut inside = false;
    let mut found: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                shape.open()?;
                if found.is_none() && !inside && is_report_bytes(&ns, e.local_name().as_ref()) {
                    inside = true;
                }
            }
            (ns, Event::End(e)) => {
                shape.close();
                if inside && is_report_bytes(&ns, e.local_name().as_ref()) {
                    inside = false;
                    found = Some(std::mem::take(&mut text));
                }
            }
            (ns, Event::Empty(e)) => {
                shape.open()?;
                shape.close();
                if found.is_none() && !inside && is_report_bytes(&ns, e.local_name().as_ref()) {
                    found = Some(String::new());
                }
            }
            (_, Event::Text(t)) => {
                let t = t.unescape()?;
                if shape.depth == 0 && !t.trim().is_empty() {
                    return Err(DecodeError::Malformed("text outside the root element"));
                }
                if inside {
                    text.push_str(&t);
                }
            }
            (_, Event::CData(c)) => {
                if shape.depth == 0 {
                    return Err(DecodeError::Malformed("text outside the root element"));
                }
                if inside {
                    text.push_str(&String::from_utf8_lossy(&c));
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    shape.finish()?;
    Ok(found.filter(|t| !t.trim().is_empty()))
}
