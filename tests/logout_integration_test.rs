use anyhow::Result;
use httpmock::prelude::*;
use page_glue::core::logout::LOGOUT_CONTROL_ID;
use page_glue::core::{Diagnostics, Navigator};
use page_glue::{
    bind_logout, HttpStatus, LogoutHandler, LogoutOutcome, ReqwestHttpClient, StaticView,
    TomlConfig,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct RecordingNavigator {
    locations: Arc<Mutex<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.locations.lock().unwrap().push(location.to_string());
    }
}

#[derive(Clone, Default)]
struct RecordingDiagnostics {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Diagnostics for RecordingDiagnostics {
    fn error(&self, label: &str, detail: &str) {
        self.entries
            .lock()
            .unwrap()
            .push(format!("{} {}", label, detail));
    }
}

fn config_for(base_url: &str) -> Result<TomlConfig> {
    Ok(TomlConfig::from_toml_str(&format!(
        "[server]\nbase_url = \"{}\"\ntimeout_seconds = 5\n",
        base_url
    ))?)
}

#[tokio::test]
async fn test_logout_redirects_on_success() -> Result<()> {
    let server = MockServer::start();
    let logout_mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/logout").body("");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true}));
    });

    let config = config_for(&server.base_url())?;
    let navigator = RecordingNavigator::default();
    let diagnostics = RecordingDiagnostics::default();
    let handler = LogoutHandler::with_routes(
        ReqwestHttpClient::from_config(&config)?,
        navigator.clone(),
        diagnostics.clone(),
        config.logout_routes(),
    );

    let view = StaticView::new(config.page.controls.clone());
    let binding = bind_logout(&view, LOGOUT_CONTROL_ID, &handler).expect("control is on page");
    let outcome = binding.trigger().await;

    logout_mock.assert();
    assert_eq!(
        outcome,
        LogoutOutcome::Redirected {
            location: "/login".to_string()
        }
    );
    assert_eq!(*navigator.locations.lock().unwrap(), vec!["/login"]);
    assert!(diagnostics.entries.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_logout_server_error_is_silent() -> Result<()> {
    let server = MockServer::start();
    let logout_mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/logout");
        then.status(500);
    });

    let config = config_for(&server.base_url())?;
    let navigator = RecordingNavigator::default();
    let diagnostics = RecordingDiagnostics::default();
    let handler = LogoutHandler::with_routes(
        ReqwestHttpClient::from_config(&config)?,
        navigator.clone(),
        diagnostics.clone(),
        config.logout_routes(),
    );

    let outcome = handler.activate().await;

    logout_mock.assert();
    assert_eq!(
        outcome,
        LogoutOutcome::Rejected {
            status: HttpStatus(500)
        }
    );
    assert!(navigator.locations.lock().unwrap().is_empty());
    assert!(diagnostics.entries.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_logout_unreachable_server_logs_once() -> Result<()> {
    // 先綁定再釋放埠號，確保沒有服務在聽
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let config = config_for(&format!("http://127.0.0.1:{}", port))?;
    let navigator = RecordingNavigator::default();
    let diagnostics = RecordingDiagnostics::default();
    let handler = LogoutHandler::with_routes(
        ReqwestHttpClient::from_config(&config)?,
        navigator.clone(),
        diagnostics.clone(),
        config.logout_routes(),
    );

    let outcome = handler.activate().await;

    assert!(matches!(outcome, LogoutOutcome::TransportFailed { .. }));
    assert!(navigator.locations.lock().unwrap().is_empty());

    let entries = diagnostics.entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("Logout error:"));
    Ok(())
}

#[tokio::test]
async fn test_logout_sends_session_cookie() -> Result<()> {
    let server = MockServer::start();
    let logout_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/logout")
            .header("Cookie", "session=abc123");
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let mut config = config_for(&server.base_url())?;
    config.server.session_cookie = Some("session=abc123".to_string());

    let navigator = RecordingNavigator::default();
    let handler = LogoutHandler::with_routes(
        ReqwestHttpClient::from_config(&config)?,
        navigator.clone(),
        RecordingDiagnostics::default(),
        config.logout_routes(),
    );

    assert!(handler.activate().await.is_redirected());
    logout_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_logout_not_bound_without_control() -> Result<()> {
    let server = MockServer::start();
    let logout_mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/logout");
        then.status(200);
    });

    let config = config_for(&server.base_url())?;
    let handler = LogoutHandler::with_routes(
        ReqwestHttpClient::from_config(&config)?,
        RecordingNavigator::default(),
        RecordingDiagnostics::default(),
        config.logout_routes(),
    );

    let view = StaticView::new(["recommend-btn", "pass-btn"]);
    assert!(bind_logout(&view, LOGOUT_CONTROL_ID, &handler).is_none());
    assert_eq!(logout_mock.hits(), 0);
    Ok(())
}
