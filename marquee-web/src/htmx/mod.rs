//! HTMX partial update handlers
//!
//! Provides server-rendered HTML fragments for real-time updates.
//! All responses are optimized for HTMX swapping and minimal bandwidth.

pub mod join;
pub mod live_stats;

// Re-export main HTMX handlers
pub use join::join_content;
pub use live_stats::{admin_parties_list, monitoring_stats};
