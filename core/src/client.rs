//! Stateless client for the remote licensing service.
//!
//! # Design
//! `LicenseClient` holds only its immutable configuration and a blocking
//! transport; no state is carried between calls, so it is safe to share and
//! each call is independent. Every operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`, composed by a `try_*` method that performs
//! the round trip. The plain operation wrappers preserve the upstream
//! absent-value contract (`None` / `false` / `-1`) expected by existing
//! callers, logging the underlying `ApiError` before collapsing it.

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{
    AuthAppResponse, AuthResponse, CheckAppResponse, CreateAppResponse, Credentials,
    UpdateAppResponse, UPDATE_SUCCESS_MESSAGE,
};

/// Synchronous client for the licensing API.
///
/// Construct once and reuse; each operation performs exactly one blocking
/// request/response exchange.
#[derive(Debug, Clone)]
pub struct LicenseClient {
    base_url: String,
    transport: Transport,
}

impl Default for LicenseClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl LicenseClient {
    pub fn new(config: Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transport: Transport::new(config.timeout),
        }
    }

    /// Client with the default timeout against a custom base URL.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(Config {
            base_url: base_url.to_string(),
            ..Config::default()
        })
    }

    // -----------------------------------------------------------------------
    // Shared request construction
    // -----------------------------------------------------------------------

    /// POST with JSON headers. When no token is supplied the Authorization
    /// header is still sent with an empty value, matching the upstream
    /// service contract.
    fn post_request(
        &self,
        endpoint: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> HttpRequest {
        let authorization = match token {
            Some(token) => format!("Bearer {token}"),
            None => String::new(),
        };
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/{endpoint}", self.base_url),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), "application/json".to_string()),
                ("authorization".to_string(), authorization),
            ],
            body,
        }
    }

    /// GET with no body and no Authorization header. The GET/POST auth
    /// asymmetry mirrors the upstream service and is preserved as-is.
    fn get_request(&self, endpoint: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{endpoint}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    fn dispatch(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = ?req.method, path = %req.path, "dispatching request");
        self.transport.execute(req)
    }

    // -----------------------------------------------------------------------
    // authenticate
    // -----------------------------------------------------------------------

    pub fn build_authenticate(&self, login: &str, password: &str) -> Result<HttpRequest, ApiError> {
        let credentials = Credentials {
            login: login.to_string(),
            password: password.to_string(),
        };
        let body = serde_json::to_string(&credentials)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.post_request("auth", Some(body), None))
    }

    pub fn parse_authenticate(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body = check_status(&response)?;
        let parsed: AuthResponse =
            serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        parsed.access_key.ok_or(ApiError::MissingField("access_key"))
    }

    /// Exchange credentials for an access key, surfacing the error kind.
    pub fn try_authenticate(&self, login: &str, password: &str) -> Result<String, ApiError> {
        let req = self.build_authenticate(login, password)?;
        let response = self.dispatch(&req)?;
        self.parse_authenticate(response)
    }

    /// Exchange credentials for an access key.
    ///
    /// Returns `None` on any failure: transport error, non-200 status,
    /// empty body, or a body without `access_key`. The caller is
    /// responsible for persisting the returned key.
    pub fn authenticate(&self, login: &str, password: &str) -> Option<String> {
        match self.try_authenticate(login, password) {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::warn!(error = %err, "authenticate failed");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // check_auth_valid
    // -----------------------------------------------------------------------

    /// Local access-key sanity check: true iff the key is present and
    /// non-empty.
    ///
    /// This never contacts the service and therefore cannot detect revoked
    /// or expired keys; it only filters out keys that were never obtained.
    /// Server-side verification would require a dedicated endpoint.
    pub fn check_auth_valid(&self, access_key: Option<&str>) -> bool {
        matches!(access_key, Some(key) if !key.is_empty())
    }

    // -----------------------------------------------------------------------
    // create_app_key
    // -----------------------------------------------------------------------

    pub fn build_create_app_key(&self, access_key: &str) -> HttpRequest {
        self.post_request("create_app", None, Some(access_key))
    }

    pub fn parse_create_app_key(&self, response: HttpResponse) -> Result<String, ApiError> {
        let body = check_status(&response)?;
        let parsed: CreateAppResponse =
            serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        parsed.app_key.ok_or(ApiError::MissingField("app_key"))
    }

    /// Create an app key under the account, surfacing the error kind.
    pub fn try_create_app_key(&self, access_key: &str) -> Result<String, ApiError> {
        let req = self.build_create_app_key(access_key);
        let response = self.dispatch(&req)?;
        self.parse_create_app_key(response)
    }

    /// Create a new app key under the authenticated account.
    ///
    /// Returns `None` on any failure; an empty response body is reported
    /// through the logging layer before being collapsed.
    pub fn create_app_key(&self, access_key: &str) -> Option<String> {
        match self.try_create_app_key(access_key) {
            Ok(key) => Some(key),
            Err(err) => {
                tracing::warn!(error = %err, "failed to create app key");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // authenticate_app
    // -----------------------------------------------------------------------

    pub fn build_authenticate_app(&self, app_key: &str, access_key: &str) -> HttpRequest {
        self.post_request(&format!("auth_app?app_key={app_key}"), None, Some(access_key))
    }

    pub fn parse_authenticate_app(&self, response: HttpResponse) -> Result<bool, ApiError> {
        let body = check_status(&response)?;
        let parsed: AuthAppResponse =
            serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(parsed.result)
    }

    /// Validate an app key under an access key, surfacing the error kind.
    pub fn try_authenticate_app(&self, app_key: &str, access_key: &str) -> Result<bool, ApiError> {
        let req = self.build_authenticate_app(app_key, access_key);
        let response = self.dispatch(&req)?;
        self.parse_authenticate_app(response)
    }

    /// Validate an app key. Returns `false` when the server answers
    /// `{"result": false}`, omits the key, or the call fails in any way.
    pub fn authenticate_app(&self, app_key: &str, access_key: &str) -> bool {
        match self.try_authenticate_app(app_key, access_key) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "authenticate_app failed");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // check_app_key_activations
    // -----------------------------------------------------------------------

    pub fn build_check_app_key_activations(&self, app_key: &str) -> HttpRequest {
        self.get_request(&format!("check_app?app_key={app_key}"))
    }

    pub fn parse_check_app_key_activations(&self, response: HttpResponse) -> Result<i64, ApiError> {
        let body = check_status(&response)?;
        let parsed: CheckAppResponse =
            serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        parsed
            .activations_left
            .ok_or(ApiError::MissingField("activations_left"))
    }

    /// Query remaining activations, surfacing the error kind.
    pub fn try_check_app_key_activations(&self, app_key: &str) -> Result<i64, ApiError> {
        let req = self.build_check_app_key_activations(app_key);
        let response = self.dispatch(&req)?;
        self.parse_check_app_key_activations(response)
    }

    /// Remaining activations for an app key, or `-1` when the count is
    /// unavailable for any reason. `-1` is a sentinel, never a real count.
    pub fn check_app_key_activations(&self, app_key: &str) -> i64 {
        match self.try_check_app_key_activations(app_key) {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, "check_app_key_activations failed");
                -1
            }
        }
    }

    // -----------------------------------------------------------------------
    // update_app_key
    // -----------------------------------------------------------------------

    pub fn build_update_app_key(
        &self,
        app_key: &str,
        num_activations: i64,
        access_key: &str,
    ) -> HttpRequest {
        self.post_request(
            &format!("update_app_key?app_key={app_key}&num_activations={num_activations}"),
            None,
            Some(access_key),
        )
    }

    /// True only when the server's `message` equals the exact success
    /// literal; any other message reads as failure.
    pub fn parse_update_app_key(&self, response: HttpResponse) -> Result<bool, ApiError> {
        let body = check_status(&response)?;
        let parsed: UpdateAppResponse =
            serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(parsed.message.as_deref() == Some(UPDATE_SUCCESS_MESSAGE))
    }

    /// Set the activation count for an app key, surfacing the error kind.
    pub fn try_update_app_key(
        &self,
        app_key: &str,
        num_activations: i64,
        access_key: &str,
    ) -> Result<bool, ApiError> {
        let req = self.build_update_app_key(app_key, num_activations, access_key);
        let response = self.dispatch(&req)?;
        self.parse_update_app_key(response)
    }

    /// Set the activation count for an app key. Returns `false` unless the
    /// server confirms with its exact success message.
    pub fn update_app_key(&self, app_key: &str, num_activations: i64, access_key: &str) -> bool {
        match self.try_update_app_key(app_key, num_activations, access_key) {
            Ok(updated) => updated,
            Err(err) => {
                tracing::warn!(error = %err, "update_app_key failed");
                false
            }
        }
    }
}

/// Gate parsing on a 200 status and a non-empty body.
fn check_status(response: &HttpResponse) -> Result<&str, ApiError> {
    if response.status != 200 {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body.clone(),
        });
    }
    if response.body.is_empty() {
        return Err(ApiError::EmptyBody);
    }
    Ok(&response.body)
}
