mod common;

use std::sync::Arc;

use common::*;
use twinfield_config::TwinfieldConfig;
use twinfield_secure::{Endpoint, Login, Session, SessionError};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn first_client_request_logs_on_and_later_ones_reuse_it() {
    let server = MockServer::start().await;
    mount_logon(&server, 1).await;

    let login = Login::derive(config_for(&server)).unwrap();
    assert!(!login.is_logged_on().await);

    let endpoint = Endpoint::new("/webservices/finder.asmx").unwrap();
    let first = login.client(&endpoint).await.unwrap();
    let second = login.client(&endpoint).await.unwrap();

    let expected = format!("{}/webservices/finder.asmx", server.uri());
    assert_eq!(first.address(), expected);
    assert_eq!(second.address(), expected);
    assert_eq!(first.session_id().as_str(), SESSION_ID);
    assert!(login.is_logged_on().await);
    assert_eq!(login.cluster().await, Some(server.uri()));
}

#[tokio::test]
async fn logon_sends_escaped_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .and(body_string_contains("<user>alice</user>"))
        .and(body_string_contains("<password>p&amp;ss</password>"))
        .and(body_string_contains("<organisation>ACME</organisation>"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(logon_reply("Ok", "s", &server.uri())),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = TwinfieldConfig::with_credentials("alice", "p&ss", "ACME")
        .with_login_url(format!("{}{SESSION_PATH}", server.uri()));
    let login = Login::derive(Arc::new(config)).unwrap();
    login.logon().await.unwrap();
}

#[tokio::test]
async fn rejected_logon_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(logon_reply(
            "Blocked",
            "",
            "",
        )))
        .mount(&server)
        .await;

    let login = Login::derive(config_for(&server)).unwrap();
    let err = login
        .client(&Endpoint::process_xml())
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Authentication(ref m) if m.contains("Blocked")));
    assert!(!login.is_logged_on().await);
}

#[tokio::test]
async fn soap_fault_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string(fault_reply("Server was unable to process request.")))
        .mount(&server)
        .await;

    let login = Login::derive(config_for(&server)).unwrap();
    let err = login.logon().await.unwrap_err();
    match err {
        SessionError::Fault { code, message } => {
            assert_eq!(code, "soap:Server");
            assert_eq!(message, "Server was unable to process request.");
        }
        other => panic!("expected fault, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_without_fault_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let login = Login::derive(config_for(&server)).unwrap();
    let err = login.logon().await.unwrap_err();
    assert!(matches!(err, SessionError::TransportUnavailable(ref m) if m.contains("503")));
}

#[tokio::test]
async fn unreachable_login_service_is_transport_error() {
    let config = TwinfieldConfig::with_credentials("alice", "hunter2", "ACME")
        .with_login_url("http://127.0.0.1:1/webservices/session.asmx");
    let login = Login::derive(Arc::new(config)).unwrap();
    let err = login.logon().await.unwrap_err();
    assert!(matches!(err, SessionError::TransportUnavailable(_)));
}

#[tokio::test]
async fn reply_without_session_id_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(logon_reply("Ok", "", &server.uri())),
        )
        .mount(&server)
        .await;

    let login = Login::derive(config_for(&server)).unwrap();
    let err = login.logon().await.unwrap_err();
    assert!(matches!(err, SessionError::Parse(_)));
}

#[tokio::test]
async fn pinned_cluster_overrides_logon_cluster() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(logon_reply(
            "Ok",
            SESSION_ID,
            "https://c3.example.test",
        )))
        .mount(&server)
        .await;

    let config = TwinfieldConfig::with_credentials("alice", "hunter2", "ACME")
        .with_login_url(format!("{}{SESSION_PATH}", server.uri()))
        .with_cluster("https://c9.example.test/");
    let login = Login::derive(Arc::new(config)).unwrap();

    let client = login.client(&Endpoint::process_xml()).await.unwrap();
    assert_eq!(
        client.address(),
        "https://c9.example.test/webservices/processxml.asmx"
    );
}

#[tokio::test]
async fn invalidate_forces_a_new_logon() {
    let server = MockServer::start().await;
    mount_logon(&server, 2).await;

    let login = Login::derive(config_for(&server)).unwrap();
    login.logon().await.unwrap();
    login.invalidate().await;
    assert!(!login.is_logged_on().await);
    login.logon().await.unwrap();
    assert!(login.is_logged_on().await);
}

#[tokio::test]
async fn client_call_carries_session_header() {
    let server = MockServer::start().await;
    mount_logon(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/webservices/finder.asmx"))
        .and(body_string_contains("<SessionID>sess-1</SessionID>"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<ok/>"))
        .expect(1)
        .mount(&server)
        .await;

    let login = Login::derive(config_for(&server)).unwrap();
    let client = login
        .client(&Endpoint::new(Endpoint::FINDER).unwrap())
        .await
        .unwrap();
    let reply = client.call("Search", "<Search/>").await.unwrap();
    assert_eq!(reply, "<ok/>");
}
