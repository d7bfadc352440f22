use http::StatusCode;
use serde::{Deserialize, Serialize};

/// JSON status body returned for the failure and never-logged-in outcomes.
///
/// The `code`/`msg` field names and the match between `code` and the response's actual
/// HTTP status are part of the wire contract with the gateway's frontends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub code: u16,
    pub msg: String,
}

impl StatusPayload {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            msg: msg.into(),
        }
    }
}
