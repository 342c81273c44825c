use std::cmp::Ordering;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::errors::Result;

use super::listings_model::{
    percentage, BuybackBoard, BuybackItem, GmpItem, IpoCalendarFilter, IpoCalendarItem,
    IpoStatus, IssueWindow, NcdIssueItem, RightsIssueBoard, RightsIssueItem,
};
use super::listings_traits::{ListingRepositoryTrait, ListingServiceTrait};

pub struct ListingService {
    repository: Arc<dyn ListingRepositoryTrait>,
}

impl ListingService {
    pub fn new(repository: Arc<dyn ListingRepositoryTrait>) -> Self {
        ListingService { repository }
    }
}

/// Newest first; entries without a date go last.
fn by_date_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Oldest first; entries without a date go last.
fn by_date_asc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => by_date_desc(a, b),
    }
}

impl ListingServiceTrait for ListingService {
    fn get_ipo_calendar(
        &self,
        filter: &IpoCalendarFilter,
        today: NaiveDate,
    ) -> Result<Vec<IpoCalendarItem>> {
        let mut items: Vec<IpoCalendarItem> = self
            .repository
            .load_ipo_calendar()?
            .into_iter()
            .map(|entry| {
                let status =
                    IpoStatus::on(entry.open_date, entry.close_date, entry.listing_date, today);
                IpoCalendarItem { entry, status }
            })
            .filter(|item| filter.matches(item))
            .collect();

        items.sort_by(|a, b| by_date_desc(a.entry.open_date, b.entry.open_date));
        debug!("IPO calendar: {} entries for {:?}", items.len(), filter);
        Ok(items)
    }

    fn get_gmp_listings(&self, sort_by_gain: bool, today: NaiveDate) -> Result<Vec<GmpItem>> {
        let mut items: Vec<GmpItem> = self
            .repository
            .load_gmp_entries()?
            .into_iter()
            .map(|entry| GmpItem {
                estimated_listing_price: entry.issue_price + entry.gmp,
                gain_percent: percentage(entry.gmp, entry.issue_price),
                window: IssueWindow::on(entry.open_date, entry.close_date, today),
                entry,
            })
            .collect();

        if sort_by_gain {
            items.sort_by(|a, b| b.gain_percent.cmp(&a.gain_percent));
        } else {
            items.sort_by(|a, b| by_date_desc(a.entry.open_date, b.entry.open_date));
        }
        Ok(items)
    }

    fn get_buybacks(&self, today: NaiveDate) -> Result<BuybackBoard> {
        let mut board = BuybackBoard::default();
        for entry in self.repository.load_buybacks()? {
            let item = BuybackItem {
                premium_percent: percentage(
                    entry.buyback_price - entry.market_price,
                    entry.market_price,
                ),
                entry,
            };
            match item.entry.record_date {
                Some(record) if record < today => board.past.push(item),
                _ => board.active.push(item),
            }
        }
        board
            .active
            .sort_by(|a, b| by_date_asc(a.entry.record_date, b.entry.record_date));
        board
            .past
            .sort_by(|a, b| by_date_desc(a.entry.record_date, b.entry.record_date));
        Ok(board)
    }

    fn get_rights_issues(&self, today: NaiveDate) -> Result<RightsIssueBoard> {
        let mut board = RightsIssueBoard::default();
        for entry in self.repository.load_rights_issues()? {
            let item = RightsIssueItem {
                discount_percent: percentage(
                    entry.market_price - entry.issue_price,
                    entry.market_price,
                ),
                window: IssueWindow::on(entry.open_date, entry.close_date, today),
                entry,
            };
            if item.window.is_closed() {
                board.closed.push(item);
            } else {
                board.open_or_upcoming.push(item);
            }
        }
        board
            .closed
            .sort_by(|a, b| by_date_desc(a.entry.close_date, b.entry.close_date));
        Ok(board)
    }

    fn get_ncd_issues(&self, today: NaiveDate) -> Result<Vec<NcdIssueItem>> {
        let mut items: Vec<NcdIssueItem> = self
            .repository
            .load_ncd_issues()?
            .into_iter()
            .map(|entry| NcdIssueItem {
                window: IssueWindow::on(entry.open_date, entry.close_date, today),
                entry,
            })
            .filter(|item| !item.window.is_closed())
            .collect();

        items.sort_by(|a, b| b.entry.coupon_rate.cmp(&a.entry.coupon_rate));
        Ok(items)
    }
}
