//! MarketDesk Core - view models, listings, rates and calculators.
//!
//! This crate turns upstream IPO documents into display-ready view models and
//! serves the bundled listing and rate data. It has no knowledge of HTTP; the
//! server crate wires these services into routes.

pub mod calculators;
pub mod constants;
pub mod errors;
pub mod ipo;
pub mod listings;
pub mod rates;
pub mod utils;

// Re-export the IPO entry points
pub use ipo::{map_document_to_view_model, IpoService, IpoServiceTrait, IpoViewModel};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
