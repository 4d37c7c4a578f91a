//! Parsed result of a ProcessXml call.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::SessionError;

/// Severity of a message attached to a response element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Warning,
    Info,
}

impl MessageKind {
    fn from_msgtype(value: &str) -> Self {
        match value {
            "error" => MessageKind::Error,
            "warning" => MessageKind::Warning,
            _ => MessageKind::Info,
        }
    }
}

/// A `msgtype`/`msg` pair found on an element of the response document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    pub kind: MessageKind,
    /// Local name of the element the message is attached to.
    pub element: String,
    pub text: String,
}

/// Response document returned by the remote service.
///
/// The raw XML is kept next to what was extracted from it: the root element,
/// its `result` attribute, and every message in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    xml: String,
    root: String,
    result: Option<String>,
    messages: Vec<ResponseMessage>,
}

impl Response {
    pub fn from_xml(xml: impl Into<String>) -> Result<Self, SessionError> {
        let xml = xml.into();
        let mut reader = Reader::from_str(&xml);
        reader.config_mut().trim_text(true);

        let mut root: Option<(String, Option<String>)> = None;
        let mut messages = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    let attrs = read_attributes(&e)?;
                    if root.is_none() {
                        root = Some((name.clone(), lookup(&attrs, "result")));
                    }
                    if let Some(msgtype) = lookup(&attrs, "msgtype") {
                        messages.push(ResponseMessage {
                            kind: MessageKind::from_msgtype(&msgtype),
                            element: name,
                            text: lookup(&attrs, "msg").unwrap_or_default(),
                        });
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(SessionError::Parse(format!(
                        "malformed response at position {}: {e}",
                        reader.buffer_position()
                    )))
                }
                _ => {}
            }
        }

        let (root, result) =
            root.ok_or_else(|| SessionError::Parse("response has no root element".into()))?;

        Ok(Self {
            xml,
            root,
            result,
            messages,
        })
    }

    /// The raw response document.
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Local name of the document element.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The `result` attribute of the document element, if present.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Whether the service accepted the request (`result="1"` on the root).
    pub fn is_successful(&self) -> bool {
        self.result.as_deref() == Some("1")
    }

    pub fn messages(&self) -> &[ResponseMessage] {
        &self.messages
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.messages_of(MessageKind::Error)
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.messages_of(MessageKind::Warning)
    }

    fn messages_of(&self, kind: MessageKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.text.as_str())
            .collect()
    }
}

fn read_attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, SessionError> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| SessionError::Parse(format!("bad attribute: {e}")))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| SessionError::Parse(format!("bad attribute value: {e}")))?
            .into_owned();
        out.push((key, value));
    }
    Ok(out)
}

fn lookup(attrs: &[(String, String)], key: &str) -> Option<String> {
    attrs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
