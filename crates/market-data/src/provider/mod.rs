//! Upstream provider abstractions and implementations.
//!
//! This module contains:
//! - The `IpoDataProvider` trait that all providers implement
//! - The HTTP provider for the content API (`ipo_api`)

mod traits;

pub mod ipo_api;

// Re-exports
pub use traits::IpoDataProvider;
