//! Request envelopes.

use quick_xml::escape::escape;

use super::NAMESPACE;

/// Wrap `body` in a SOAP envelope. A session id, when given, travels in the
/// Twinfield `Header` element.
pub fn envelope(session_id: Option<&str>, body: &str) -> String {
    let header = match session_id {
        Some(id) => format!(
            "<soap:Header><Header xmlns=\"{NAMESPACE}\"><SessionID>{}</SessionID></Header></soap:Header>",
            escape(id)
        ),
        None => String::new(),
    };
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         {header}<soap:Body>{body}</soap:Body></soap:Envelope>"
    )
}

/// Body of the session service `Logon` operation.
pub fn logon_body(user: &str, password: &str, organisation: &str) -> String {
    format!(
        "<Logon xmlns=\"{NAMESPACE}\"><user>{}</user><password>{}</password>\
         <organisation>{}</organisation></Logon>",
        escape(user),
        escape(password),
        escape(organisation)
    )
}

/// Body of the `ProcessXmlString` operation carrying `document`.
pub fn process_xml_body(document: &str) -> String {
    format!(
        "<ProcessXmlString xmlns=\"{NAMESPACE}\"><xmlRequest>{}</xmlRequest></ProcessXmlString>",
        escape(document)
    )
}
