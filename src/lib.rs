//! Beacon - a minimal HTTP responder for load balancer health checks.
//!
//! Exposes three static informational endpoints: the root health payload, a
//! dedicated health probe, and a server-info route. Payloads are computed
//! fresh per request from the local host identity and the `ENV` environment
//! variable; no state is shared between requests.

pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
