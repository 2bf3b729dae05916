//! HTTP request/response types described as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! separately from executing them, so request construction and response
//! interpretation stay deterministic and testable without a network. The
//! `transport` module is the only place that performs I/O.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between the builder, the transport, and tests.

/// HTTP method for a request. The licensing API only uses GET and POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `LicenseClient::build_*` methods and executed by
/// `Transport::execute`. `path` is the full URL including any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by `Transport::execute` (or constructed directly in tests),
/// then passed to `LicenseClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
