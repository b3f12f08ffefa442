//! HTTP middleware stack for the webhook server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers (HSTS, nosniff)

pub mod security_headers;

pub use security_headers::security_headers_middleware;
