//! IPO detail module - view model, document mapper, and service.

mod ipo_mapper;
mod ipo_model;
mod ipo_service;
mod ipo_traits;
mod rich_text;

pub use ipo_mapper::map_document_to_view_model;
pub use ipo_model::{
    DocumentLinksView, FaqView, FinancialRowView, GmpView, IpoViewModel, IssueObjectView,
    KpiView, LotDistributionView, PeerView, RegistrarView, ReviewView, TimelineView,
};
pub use ipo_service::IpoService;
pub use ipo_traits::IpoServiceTrait;
pub use rich_text::flatten_rich_text;
