//! MarketDesk Market Data Crate
//!
//! This crate fetches upstream IPO documents for the MarketDesk site.
//!
//! # Overview
//!
//! - [`IpoDocument`] - The upstream record, every field optional and decoded leniently
//! - [`IpoDataProvider`] - Provider trait; one implementation per upstream source
//! - [`IpoApiProvider`] - HTTP provider for the content API
//! - [`MarketDataError`] - Fetch failures, with not-found distinguished from outages
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  IpoApiProvider  | --> |   IpoDocument    | --> |  view model      |
//! |  (HTTP, JSON)    |     |  (lenient serde) |     |  (core crate)    |
//! +------------------+     +------------------+     +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{
    BrokerReview, Faq, FinancialRow, IpoDocument, IpoDocumentLinks, IpoTimeline, IssueObject,
    LotDistributionRow, PeerCompany, Registrar, RichText, RichTextNode, RichTextTree,
    ValuationKpis,
};

// Re-export provider types
pub use provider::ipo_api::IpoApiProvider;
pub use provider::IpoDataProvider;
