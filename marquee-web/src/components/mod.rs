//! Server-rendered HTML components
//!
//! Layout and stat helpers plus the content components bound to routes.
//! Content components are self-contained: each renders its own fragment and
//! owns whatever state it displays.

pub mod account;
pub mod admin;
pub mod analytics;
pub mod join;
pub mod layout;
pub mod operations;
pub mod stats;
