//! HTTP transport for SOAP calls.

use tracing::debug;

use crate::SessionError;

use super::{action, fault};

/// Post `envelope` to `url` for `operation` and return the reply body.
///
/// SOAP faults win over the HTTP status, since servers report them with a 500.
pub(crate) async fn post(
    http: &reqwest::Client,
    url: &str,
    operation: &str,
    envelope: String,
) -> Result<String, SessionError> {
    debug!(url, operation, "SOAP request");

    let response = http
        .post(url)
        .header("Content-Type", "text/xml; charset=utf-8")
        .header("SOAPAction", action(operation))
        .body(envelope)
        .send()
        .await
        .map_err(|e| SessionError::TransportUnavailable(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| SessionError::TransportUnavailable(e.to_string()))?;

    if let Some(fault) = fault(&text) {
        return Err(fault);
    }
    if !status.is_success() {
        let text = text.chars().take(200).collect::<String>();
        return Err(SessionError::TransportUnavailable(format!(
            "HTTP {status}: {text}"
        )));
    }

    Ok(text)
}
