//! Listings module - IPO calendar, GMP, buybacks, rights issues and NCDs.

mod listings_model;
mod listings_repository;
mod listings_service;
mod listings_traits;

pub use listings_model::{
    percentage, BuybackBoard, BuybackEntry, BuybackItem, BuybackMethod, GmpEntry, GmpItem,
    IpoCalendarEntry, IpoCalendarFilter, IpoCalendarItem, IpoStatus, IssueSegment, IssueWindow,
    NcdIssueEntry, NcdIssueItem, RightsIssueBoard, RightsIssueEntry, RightsIssueItem,
};
pub use listings_repository::StaticListingRepository;
pub use listings_service::ListingService;
pub use listings_traits::{ListingRepositoryTrait, ListingServiceTrait};
