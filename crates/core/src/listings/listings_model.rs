//! Listing domain models: IPO calendar, grey market premium, buybacks, rights issues
//! and NCD issues.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange segment an issue is listed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSegment {
    Mainboard,
    Sme,
}

impl IssueSegment {
    pub fn label(&self) -> &'static str {
        match self {
            IssueSegment::Mainboard => "Mainboard",
            IssueSegment::Sme => "SME",
        }
    }
}

/// Lifecycle of an IPO relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpoStatus {
    Upcoming,
    Open,
    Closed,
    Listed,
}

impl IpoStatus {
    /// Status on `today`.
    ///
    /// Listed wins once the listing date is reached. Without an open date the issue
    /// is upcoming; without a close date an opened issue stays open.
    pub fn on(
        open: Option<NaiveDate>,
        close: Option<NaiveDate>,
        listing: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        if listing.is_some_and(|listing| today >= listing) {
            return IpoStatus::Listed;
        }
        match IssueWindow::on(open, close, today) {
            IssueWindow::Upcoming => IpoStatus::Upcoming,
            IssueWindow::Open => IpoStatus::Open,
            IssueWindow::Closed => IpoStatus::Closed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IpoStatus::Upcoming => "Upcoming",
            IpoStatus::Open => "Open",
            IpoStatus::Closed => "Closed",
            IpoStatus::Listed => "Listed",
        }
    }
}

/// Subscription window of an issue without a listing step (rights, NCDs, GMP rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueWindow {
    Upcoming,
    Open,
    Closed,
}

impl IssueWindow {
    pub fn on(open: Option<NaiveDate>, close: Option<NaiveDate>, today: NaiveDate) -> Self {
        match open {
            Some(open) if today >= open => {
                if close.is_some_and(|close| today > close) {
                    IssueWindow::Closed
                } else {
                    IssueWindow::Open
                }
            }
            _ => IssueWindow::Upcoming,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, IssueWindow::Closed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueWindow::Upcoming => "Upcoming",
            IssueWindow::Open => "Open",
            IssueWindow::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpoCalendarEntry {
    pub name: String,
    pub slug: String,
    pub segment: IssueSegment,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub listing_date: Option<NaiveDate>,
    pub price_band_text: String,
    pub lot_size: u32,
    pub issue_size: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpoCalendarItem {
    #[serde(flatten)]
    pub entry: IpoCalendarEntry,
    pub status: IpoStatus,
}

/// Query filter for the IPO calendar; unset fields match everything
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpoCalendarFilter {
    pub status: Option<IpoStatus>,
    pub segment: Option<IssueSegment>,
}

impl IpoCalendarFilter {
    pub fn matches(&self, item: &IpoCalendarItem) -> bool {
        self.status.map_or(true, |status| item.status == status)
            && self
                .segment
                .map_or(true, |segment| item.entry.segment == segment)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GmpEntry {
    pub name: String,
    pub slug: String,
    pub segment: IssueSegment,
    pub issue_price: Decimal,
    pub gmp: Decimal,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GmpItem {
    #[serde(flatten)]
    pub entry: GmpEntry,
    /// `issue_price + gmp`
    pub estimated_listing_price: Decimal,
    /// `gmp / issue_price * 100`, zero when the price is zero
    pub gain_percent: Decimal,
    pub window: IssueWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuybackMethod {
    Tender,
    OpenMarket,
}

impl BuybackMethod {
    pub fn label(&self) -> &'static str {
        match self {
            BuybackMethod::Tender => "Tender Offer",
            BuybackMethod::OpenMarket => "Open Market",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuybackEntry {
    pub company: String,
    pub method: BuybackMethod,
    pub buyback_price: Decimal,
    pub market_price: Decimal,
    pub record_date: Option<NaiveDate>,
    pub issue_size: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuybackItem {
    #[serde(flatten)]
    pub entry: BuybackEntry,
    /// `(buyback_price - market_price) / market_price * 100`
    pub premium_percent: Decimal,
}

/// Buybacks split by record date. Undated buybacks count as active.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuybackBoard {
    pub active: Vec<BuybackItem>,
    pub past: Vec<BuybackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RightsIssueEntry {
    pub company: String,
    /// Entitlement, e.g. "1:5"
    pub ratio: String,
    pub issue_price: Decimal,
    pub market_price: Decimal,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RightsIssueItem {
    #[serde(flatten)]
    pub entry: RightsIssueEntry,
    /// `(market_price - issue_price) / market_price * 100`
    pub discount_percent: Decimal,
    pub window: IssueWindow,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RightsIssueBoard {
    pub open_or_upcoming: Vec<RightsIssueItem>,
    pub closed: Vec<RightsIssueItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NcdIssueEntry {
    pub company: String,
    /// Annual coupon, percent
    pub coupon_rate: Decimal,
    pub tenure_months: u32,
    pub rating: String,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub minimum_investment: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NcdIssueItem {
    #[serde(flatten)]
    pub entry: NcdIssueEntry,
    pub window: IssueWindow,
}

/// `numerator / denominator * 100` to two decimals; zero for a zero denominator.
pub fn percentage(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}
