//! Request and response schemas for the licensing API.
//!
//! # Design
//! One typed struct per endpoint instead of a string-keyed map, so a 200
//! response with an unexpected shape fails deserialization loudly rather
//! than silently reading as "key absent." Success fields are `Option` (or
//! `#[serde(default)]` for booleans) because the service omits them on soft
//! failures; the client maps absence to its documented sentinel values.
//! Unknown extra fields are ignored, matching the upstream contract of
//! reading only specific keys.

use serde::{Deserialize, Serialize};

/// Exact success message returned by `update_app_key`. The operation
/// succeeds only on a byte-for-byte match.
pub const UPDATE_SUCCESS_MESSAGE: &str = "App key activations updated successfully";

/// Login payload for the `auth` endpoint. Input only — the client never
/// stores credentials.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Response of POST `auth`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_key: Option<String>,
}

/// Response of POST `create_app`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppResponse {
    pub app_key: Option<String>,
}

/// Response of POST `auth_app`. A missing `result` key reads as `false`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthAppResponse {
    #[serde(default)]
    pub result: bool,
}

/// Response of GET `check_app`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckAppResponse {
    pub activations_left: Option<i64>,
}

/// Response of POST `update_app_key`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppResponse {
    pub message: Option<String>,
}
