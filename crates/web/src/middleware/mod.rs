//! HTTP middleware stack for the web application.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors; added by the binary)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers (CSP, frame options, etc.)

pub mod request_id;
pub mod security_headers;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
