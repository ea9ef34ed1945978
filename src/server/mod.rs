//! Server module for building the HTTP API
//!
//! This module provides a `ServerBuilder` that assembles:
//! - the group and member routes under the configured base path
//! - health check routes
//! - request tracing

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
