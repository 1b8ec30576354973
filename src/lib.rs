//! Terminal client for an adventure travel catalog served by a JSON REST
//! API (json-server style).
//!
//! The library exposes the catalog client and the pure view projections
//! so they can be exercised against a mock endpoint; the binary wires
//! them to a ratatui terminal interface.

pub mod api;
pub mod app;
pub mod config;
pub mod event;
pub mod ui;
pub mod view;

/// Version injected at compile time via AVENTURA_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("AVENTURA_VERSION") {
    Some(v) => v,
    None => "dev",
};
