//! Synchronous client for the remote licensing service.
//!
//! # Overview
//! Six operations, each one blocking request/response exchange against the
//! JSON-over-HTTPS licensing API: authenticate, local access-key check,
//! create app key, validate app key, check remaining activations, update
//! activation count.
//!
//! # Design
//! - `LicenseClient` is stateless — it holds only its configuration and a
//!   shared blocking transport, so it is safe to use from multiple threads.
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), composed by `try_*` which does
//!   the round trip and returns a distinguishable `ApiError`.
//! - The plain operation wrappers keep the upstream absent-value contract
//!   (`None` / `false` / `-1` on any failure) for callers that only need
//!   the simple surface.
//! - Response schemas are typed per endpoint; unexpected shapes fail as
//!   `Deserialization` rather than silently reading as absent.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::LicenseClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{Credentials, UPDATE_SUCCESS_MESSAGE};
