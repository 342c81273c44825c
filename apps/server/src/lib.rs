//! MarketDesk HTTP server: server-rendered pages and the `/api/v1` JSON API.

pub mod api;
pub mod config;
pub mod error;
mod main_lib;
pub mod pages;

pub use main_lib::{build_state, init_tracing, AppState, SiteSettings};
