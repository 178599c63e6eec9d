//! API layer - HTTP entry points.

pub mod cors;
pub mod http;

pub use cors::build_cors_layer;
pub use http::{routes, ApiError};
