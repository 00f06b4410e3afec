//! # Top-up Gateway Library
//!
//! Proxies a third-party mobile top-up API (product listing, price
//! estimation, transfer sending) behind a small HTTP surface, handling
//! upstream authentication on behalf of the routes.
//!
//! Modules:
//! - `config` — service configuration (settings, upstream, auth)
//! - `auth` — authentication schemes and the OAuth2 token cache
//! - `upstream` — the top-up API client used by route handlers
//! - `server` — axum HTTP surface

pub mod auth;
pub mod config;
pub mod helpers;
pub mod observability;
pub mod server;
pub mod tests;
pub mod upstream;
pub mod utils;

pub use crate::config::service::ServiceConfig;
