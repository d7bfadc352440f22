//! axum-cas-callback renders the outcome of a CAS single-sign-on login attempt as an HTTP response.
//!
//! A CAS client sits in front of an application, sends unauthenticated browsers to the CAS
//! server and validates the service ticket the server hands back. What happens *after* that
//! decision is this crate's job:
//!
//! - [`CasCallback`]: a trait with one method per login outcome (success, failure,
//!   never-logged-in, cross-origin OPTIONS preflight), so applications can replace the
//!   rendering of any outcome without touching the protocol client
//! - [`DefaultCasCallback`]: the stock implementation, a `302` redirect to the configured
//!   URL on success and small JSON status bodies with reflected CORS headers otherwise
//! - [`CallbackConfig`]: the redirect target and a debug-logging switch, validated up front
//!
//! # CORS
//!
//! The failure, never-logged-in and preflight responses echo the caller's `Origin` and
//! `Access-Control-Request-Headers` verbatim and allow credentials. Every origin is trusted;
//! front this with your own origin checks if that is not acceptable for your deployment.
//!
//! # Usage
//!
//! The CAS client decides which outcome occurred; routes hand the request over to the
//! callback for rendering.
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use axum::{extract::{Request, State}, response::Response, routing::get, Router};
//! use axum_cas_callback::{CallbackConfig, CallbackError, CasCallback, DefaultCasCallback};
//!
//! async fn login(
//!     State(callback): State<Arc<dyn CasCallback>>,
//!     request: Request,
//! ) -> Result<Response, CallbackError> {
//!     let (parts, _body) = request.into_parts();
//!     // Ticket validation lives in the CAS client; this example always succeeds.
//!     callback.on_login_success(&parts, &HashMap::new()).await
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CallbackConfig::new("https://app.example.com/home").unwrap();
//!     let callback: Arc<dyn CasCallback> = Arc::new(DefaultCasCallback::new(config));
//!     let router = Router::new()
//!         .route("/cas/callback", get(login))
//!         .with_state(callback);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:80").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```
mod config;
mod cors;
mod error;
mod handler;
mod payload;

pub use config::CallbackConfig;
pub use error::CallbackError;
pub use handler::{CasCallback, DefaultCasCallback};
pub use payload::StatusPayload;
