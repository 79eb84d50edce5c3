//! HTTP server startup and lifecycle.
//!
//! The server speaks plain HTTP; TLS termination happens at the load balancer
//! in front of this service. Graceful shutdown on SIGTERM/SIGINT drains
//! in-flight connections before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
