//! Shared fixtures for HTTP-level session tests.

#![allow(dead_code)]

use std::sync::Arc;

use twinfield_config::TwinfieldConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_PATH: &str = "/webservices/session.asmx";
pub const SESSION_ID: &str = "sess-1";

pub fn logon_reply(result: &str, session_id: &str, cluster: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Header><Header xmlns="http://www.twinfield.com/"><SessionID>{session_id}</SessionID></Header></soap:Header>
  <soap:Body>
    <LogonResponse xmlns="http://www.twinfield.com/">
      <LogonResult>{result}</LogonResult>
      <nextAction>None</nextAction>
      <cluster>{cluster}</cluster>
    </LogonResponse>
  </soap:Body>
</soap:Envelope>"#
    )
}

pub fn fault_reply(message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault><faultcode>soap:Server</faultcode><faultstring>{message}</faultstring></soap:Fault>
  </soap:Body>
</soap:Envelope>"#
    )
}

pub fn config_for(server: &MockServer) -> Arc<TwinfieldConfig> {
    Arc::new(
        TwinfieldConfig::with_credentials("alice", "hunter2", "ACME")
            .with_login_url(format!("{}{SESSION_PATH}", server.uri())),
    )
}

/// Mount a successful logon whose cluster is the mock server itself.
pub async fn mount_logon(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .and(header("SOAPAction", "http://www.twinfield.com/Logon"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(logon_reply("Ok", SESSION_ID, &server.uri())),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}
