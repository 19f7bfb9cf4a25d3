//! # API Middleware
//!
//! Tower/Axum middleware for the CERTREG API surface:
//!
//! - `metrics` — in-process request and error counters.
//! - `rate_limit` — per-client token-bucket rate limiting.
//!
//! Request tracing uses `tower_http::trace::TraceLayer`, applied during
//! router assembly in `lib.rs`.

pub mod metrics;
pub mod rate_limit;
