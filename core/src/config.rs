//! Client configuration.

use std::time::Duration;

/// Production base URL of the licensing service.
pub const DEFAULT_BASE_URL: &str = "https://api.screwltd.com/";

/// Default global timeout applied to each request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration passed to `LicenseClient::new`.
///
/// `Default` targets the production service. Tests override `base_url` to
/// point at a mock endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
