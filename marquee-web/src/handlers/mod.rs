//! JSON API handlers
//!
//! Endpoints for external clients and the frontend's readiness probes.

pub mod api;
pub mod join_readiness;

// Re-export main API handlers
pub use api::api_health;
pub use join_readiness::join_readiness_handler;
