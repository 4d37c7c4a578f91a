//! Reply parsing helpers.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::SessionError;

/// Text content of the first element whose local name is `name`.
///
/// Returns `Ok(None)` when no such element exists. Namespace prefixes are
/// ignored; escaped text and CDATA are both decoded.
pub fn element_text(xml: &str, name: &str) -> Result<Option<String>, SessionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let target = name.as_bytes();
    let mut inside = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if !inside && e.local_name().as_ref() == target => inside = true,
            Ok(Event::Empty(e)) if !inside && e.local_name().as_ref() == target => {
                return Ok(Some(String::new()))
            }
            Ok(Event::Text(t)) if inside => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| SessionError::Parse(format!("bad text in <{name}>: {e}")))?;
                text.push_str(&unescaped);
            }
            Ok(Event::CData(c)) if inside => text.push_str(&String::from_utf8_lossy(&c)),
            Ok(Event::End(e)) if inside && e.local_name().as_ref() == target => {
                return Ok(Some(text))
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => {
                return Err(SessionError::Parse(format!(
                    "malformed XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }
}

/// Extract a SOAP fault from a reply, if there is one.
///
/// Malformed replies are not faults; callers report them through their own
/// status and parse checks.
pub fn fault(xml: &str) -> Option<SessionError> {
    let message = element_text(xml, "faultstring").ok().flatten()?;
    let code = element_text(xml, "faultcode")
        .ok()
        .flatten()
        .unwrap_or_default();
    Some(SessionError::Fault { code, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGON_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Header>
    <Header xmlns="http://www.twinfield.com/"><SessionID>5c1f-77</SessionID></Header>
  </soap:Header>
  <soap:Body>
    <LogonResponse xmlns="http://www.twinfield.com/">
      <LogonResult>Ok</LogonResult>
      <nextAction>None</nextAction>
      <cluster>https://c3.twinfield.com</cluster>
    </LogonResponse>
  </soap:Body>
</soap:Envelope>"#;

    #[test]
    fn finds_elements_ignoring_prefixes() {
        assert_eq!(
            element_text(LOGON_REPLY, "SessionID").unwrap().as_deref(),
            Some("5c1f-77")
        );
        assert_eq!(
            element_text(LOGON_REPLY, "cluster").unwrap().as_deref(),
            Some("https://c3.twinfield.com")
        );
        assert_eq!(
            element_text(LOGON_REPLY, "LogonResult").unwrap().as_deref(),
            Some("Ok")
        );
    }

    #[test]
    fn missing_element_is_none() {
        assert_eq!(element_text(LOGON_REPLY, "nope").unwrap(), None);
    }

    #[test]
    fn empty_element_is_empty_string() {
        let xml = "<a><b/></a>";
        assert_eq!(element_text(xml, "b").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn escaped_text_is_unescaped() {
        let xml = "<r><ProcessXmlStringResult>&lt;dimension result=\"1\"/&gt;</ProcessXmlStringResult></r>";
        assert_eq!(
            element_text(xml, "ProcessXmlStringResult").unwrap().as_deref(),
            Some("<dimension result=\"1\"/>")
        );
    }

    #[test]
    fn cdata_is_returned_verbatim() {
        let xml = "<r><doc><![CDATA[<x>1</x>]]></doc></r>";
        assert_eq!(element_text(xml, "doc").unwrap().as_deref(), Some("<x>1</x>"));
    }

    #[test]
    fn mismatched_tags_are_parse_errors() {
        let err = element_text("<a><b></a>", "zzz").unwrap_err();
        assert!(matches!(err, SessionError::Parse(_)));
    }

    #[test]
    fn detects_soap_fault() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>
<soap:Fault><faultcode>soap:Server</faultcode><faultstring>Access denied</faultstring></soap:Fault>
</soap:Body></soap:Envelope>"#;
        match fault(xml) {
            Some(SessionError::Fault { code, message }) => {
                assert_eq!(code, "soap:Server");
                assert_eq!(message, "Access denied");
            }
            other => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    fn regular_reply_is_not_a_fault() {
        assert!(fault(LOGON_REPLY).is_none());
        assert!(fault("not xml at all <<<").is_none());
    }
}
