//! Marquee Web - server-rendered watch party dashboards
//!
//! HTMX + Tailwind web server. Every page is composed server-side from the
//! static route table; interactive sections refresh through HTMX partials.

pub mod components;
pub mod handlers;
pub mod htmx;
pub mod pages;
pub mod routes;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, run_server};
