//! Upstream document models
//!
//! This module contains the data types returned by upstream providers:
//! - `ipo_document` - IPO record with timeline, financials, peers, registrar, etc.
//! - `rich_text` - Editor tree used for long-form descriptions
//! - `lenient` - Field decoders that never fail on missing or mistyped values

pub mod lenient;
mod ipo_document;
mod rich_text;

pub use ipo_document::{
    BrokerReview, Faq, FinancialRow, IpoDocument, IpoDocumentLinks, IpoTimeline, IssueObject,
    LotDistributionRow, PeerCompany, Registrar, ValuationKpis,
};
pub use rich_text::{RichText, RichTextNode, RichTextTree};
