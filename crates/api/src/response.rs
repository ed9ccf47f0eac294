//! Shared response bodies.

use serde::Serialize;

/// `{ "status": "ok" }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const OK: StatusResponse = StatusResponse { status: "ok" };
}
