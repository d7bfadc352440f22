//! Login-outcome callbacks and their default rendering.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{
    HeaderMap, HeaderValue, StatusCode,
    header::{CONTENT_TYPE, LOCATION, RETRY_AFTER},
    request::Parts,
};

use crate::{CallbackConfig, CallbackError, StatusPayload, cors};

const MSG_LOGIN_FAILURE: &str = "认证失败，请重试";
const MSG_NEVER_LOGGED_IN: &str = "请先登陆";

/// Callback invoked by the CAS client once a login attempt has been decided.
///
/// One method per outcome; each builds the complete response for that outcome from a
/// read-only view of the inbound request. The client only dispatches. Implementations must
/// not retry or recover inside a method: a [`CallbackError`] means this one response could
/// not be produced and is left to the hosting server.
#[async_trait]
pub trait CasCallback: Send + Sync {
    /// The user authenticated and the service ticket validated.
    ///
    /// `attributes` is the attribute map the CAS server released for this principal.
    async fn on_login_success(
        &self,
        request: &Parts,
        attributes: &HashMap<String, String>,
    ) -> Result<Response, CallbackError>;

    /// Ticket validation failed.
    async fn on_login_failure(&self, request: &Parts) -> Result<Response, CallbackError>;

    /// No session and no ticket: the user has never logged in.
    async fn on_never_logged_in(&self, request: &Parts) -> Result<Response, CallbackError>;

    /// Cross-origin OPTIONS preflight against a callback route.
    async fn on_options_preflight(&self, request: &Parts) -> Result<Response, CallbackError>;
}

/// Stock [`CasCallback`]: a `302` redirect on success, JSON status bodies with reflected
/// CORS headers for the other outcomes.
///
/// Holds only the immutable [`CallbackConfig`]; invocations are independent and may run
/// concurrently.
#[derive(Clone, Debug)]
pub struct DefaultCasCallback {
    config: CallbackConfig,
}

impl DefaultCasCallback {
    pub fn new(config: CallbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CallbackConfig {
        &self.config
    }

    fn debug(&self, msg: &str) {
        if self.config.debug() {
            tracing::debug!("{msg}");
        }
    }
}

#[async_trait]
impl CasCallback for DefaultCasCallback {
    async fn on_login_success(
        &self,
        _request: &Parts,
        _attributes: &HashMap<String, String>,
    ) -> Result<Response, CallbackError> {
        self.debug(&format!(
            "Now send redirect to {}",
            self.config.success_url()
        ));
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, self.config.location().clone());
        Ok((StatusCode::FOUND, headers, Body::empty()).into_response())
    }

    async fn on_login_failure(&self, request: &Parts) -> Result<Response, CallbackError> {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let (mut headers, body) = json_status(request, status, MSG_LOGIN_FAILURE)?;
        headers.insert(RETRY_AFTER, HeaderValue::from_static("10"));
        Ok((status, headers, body).into_response())
    }

    async fn on_never_logged_in(&self, request: &Parts) -> Result<Response, CallbackError> {
        let status = StatusCode::UNAUTHORIZED;
        let (headers, body) = json_status(request, status, MSG_NEVER_LOGGED_IN)?;
        Ok((status, headers, body).into_response())
    }

    async fn on_options_preflight(&self, request: &Parts) -> Result<Response, CallbackError> {
        let mut headers = HeaderMap::new();
        cors::apply(&request.headers, &mut headers);
        Ok((headers, Body::empty()).into_response())
    }
}

/// CORS headers, JSON-UTF8 content type and an encoded [`StatusPayload`] whose `code`
/// matches `status`. The body is fully materialized before the response is handed back.
fn json_status(
    request: &Parts,
    status: StatusCode,
    msg: &str,
) -> Result<(HeaderMap, Body), CallbackError> {
    let mut headers = HeaderMap::new();
    cors::apply(&request.headers, &mut headers);
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json;charset=UTF-8"),
    );
    let body = serde_json::to_vec(&StatusPayload::new(status, msg))?;
    Ok((headers, Body::from(body)))
}
