#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clario_api::app::build_router;
use clario_api::config::ServerConfig;
use clario_api::state::AppState;
use clario_mail::{MailError, Mailer, OutgoingEmail, SmtpConfig, SmtpMailer};

pub const TEST_INBOX: &str = "inbox@clario.test";

/// Build a test `ServerConfig` with safe defaults and open CORS.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        suggestions_to: TEST_INBOX.to_string(),
    }
}

/// What a [`RecordingMailer`] does when asked to send.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Deliver,
    MissingCredentials,
    RelayFailure,
}

/// Mailer that records every message it is asked to send.
pub struct RecordingMailer {
    outcome: Outcome,
    sent: Mutex<Vec<OutgoingEmail>>,
    attempts: Mutex<usize>,
}

impl RecordingMailer {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            sent: Mutex::new(Vec::new()),
            attempts: Mutex::new(0),
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        *self.attempts.lock().unwrap() += 1;
        match self.outcome {
            Outcome::Deliver => {
                self.sent.lock().unwrap().push(email);
                Ok(())
            }
            Outcome::MissingCredentials => Err(MailError::MissingCredentials),
            Outcome::RelayFailure => Err(MailError::Build(
                "554 relay rejected message from 10.0.0.7".to_string(),
            )),
        }
    }
}

/// Build the full application router around the given mailer.
///
/// Uses the same `build_router` as `main.rs`, so tests exercise the real
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(mailer: Arc<dyn Mailer>) -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        mailer,
    };
    build_router(state).unwrap()
}

/// Build the app around a real SMTP mailer with no credentials configured.
pub fn build_unconfigured_app() -> Router {
    let smtp = SmtpConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        user: None,
        password: None,
        from_address: None,
        timeout: Duration::from_secs(1),
    };
    build_test_app(Arc::new(SmtpMailer::new(smtp)))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
