//! SOAP 1.1 plumbing: envelope building, reply parsing and the HTTP post.

mod envelope;
mod parse;
mod transport;

pub use envelope::{envelope, logon_body, process_xml_body};
pub use parse::{element_text, fault};
pub(crate) use transport::post;

/// Namespace of every Twinfield web service.
pub const NAMESPACE: &str = "http://www.twinfield.com/";

/// `SOAPAction` header value for an operation.
pub fn action(operation: &str) -> String {
    format!("{NAMESPACE}{operation}")
}
