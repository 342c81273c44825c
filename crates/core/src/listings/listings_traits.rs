use chrono::NaiveDate;

use crate::errors::Result;
use crate::listings::listings_model::{
    BuybackBoard, BuybackEntry, GmpEntry, GmpItem, IpoCalendarEntry, IpoCalendarFilter,
    IpoCalendarItem, NcdIssueEntry, NcdIssueItem, RightsIssueBoard, RightsIssueEntry,
};

/// Trait for listing data sources
pub trait ListingRepositoryTrait: Send + Sync {
    fn load_ipo_calendar(&self) -> Result<Vec<IpoCalendarEntry>>;
    fn load_gmp_entries(&self) -> Result<Vec<GmpEntry>>;
    fn load_buybacks(&self) -> Result<Vec<BuybackEntry>>;
    fn load_rights_issues(&self) -> Result<Vec<RightsIssueEntry>>;
    fn load_ncd_issues(&self) -> Result<Vec<NcdIssueEntry>>;
}

/// Trait for listing service operations.
///
/// Every operation takes the current day explicitly so derived statuses are
/// reproducible.
pub trait ListingServiceTrait: Send + Sync {
    fn get_ipo_calendar(
        &self,
        filter: &IpoCalendarFilter,
        today: NaiveDate,
    ) -> Result<Vec<IpoCalendarItem>>;
    fn get_gmp_listings(&self, sort_by_gain: bool, today: NaiveDate) -> Result<Vec<GmpItem>>;
    fn get_buybacks(&self, today: NaiveDate) -> Result<BuybackBoard>;
    fn get_rights_issues(&self, today: NaiveDate) -> Result<RightsIssueBoard>;
    fn get_ncd_issues(&self, today: NaiveDate) -> Result<Vec<NcdIssueItem>>;
}
