use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};
use marketdesk_core::{
    listings::{BuybackItem, GmpItem, NcdIssueItem, RightsIssueItem},
    utils::today_in_display_tz,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{
    faq,
    format::{percent, rupees, short_date},
    html::{empty_state, escape, page, table, PageMeta},
    render_or_error,
};
use crate::main_lib::AppState;

fn signed_class(value: Decimal) -> &'static str {
    if value.is_sign_negative() && !value.is_zero() {
        "negative"
    } else {
        "positive"
    }
}

fn signed_cell(value: Decimal, text: String) -> String {
    format!("<span class=\"{}\">{}</span>", signed_class(value), escape(&text))
}

pub(crate) fn gmp_table(items: &[GmpItem]) -> String {
    if items.is_empty() {
        return empty_state("No grey market activity right now.");
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let entry = &item.entry;
            vec![
                format!(
                    "<a href=\"/ipo/{}\">{}</a>",
                    urlencoding::encode(&entry.slug),
                    escape(&entry.name)
                ),
                escape(entry.segment.label()),
                escape(&rupees(entry.issue_price)),
                signed_cell(entry.gmp, rupees(entry.gmp)),
                escape(&rupees(item.estimated_listing_price)),
                signed_cell(item.gain_percent, percent(item.gain_percent)),
                escape(&short_date(entry.open_date)),
                escape(&short_date(entry.close_date)),
                escape(item.window.label()),
            ]
        })
        .collect();
    table(
        &[
            "IPO", "Segment", "Issue Price", "GMP", "Est. Listing", "Est. Gain", "Open",
            "Close", "Status",
        ],
        &rows,
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct GmpQuery {
    /// `gain` (default) or `date`
    sort: Option<String>,
}

impl GmpQuery {
    fn sort_by_gain(&self) -> bool {
        !matches!(self.sort.as_deref(), Some(sort) if sort.eq_ignore_ascii_case("date"))
    }
}

pub async fn ipo_gmp(
    State(state): State<Arc<AppState>>,
    query: Result<Query<GmpQuery>, QueryRejection>,
) -> Response {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let site = &state.site;

    render_or_error(site, "/ipo-gmp", || {
        let by_gain = query.sort_by_gain();
        let items = state
            .listing_service
            .get_gmp_listings(by_gain, today_in_display_tz())?;

        let sort_links = if by_gain {
            "Sorted by estimated gain · <a href=\"/ipo-gmp?sort=date\">Sort by date</a>"
        } else {
            "Sorted by date · <a href=\"/ipo-gmp\">Sort by estimated gain</a>"
        };
        let content = format!(
            "<h1>IPO GMP Today</h1><p class=\"lead\">Live grey market premium for Mainboard and SME \
IPOs with estimated listing price and listing gain.</p><p class=\"sort\">{}</p>{}\
<p class=\"note\">GMP is unofficial and changes quickly. Use it as one signal among many.</p>",
            sort_links,
            gmp_table(&items)
        );

        let meta = PageMeta::new(
            "IPO GMP Today",
            "IPO grey market premium (GMP) today with estimated listing price and expected listing gain for Mainboard and SME IPOs.",
            "/ipo-gmp",
        )
        .with_faqs(faq::items(faq::GMP));

        Ok(page(site, &meta, &content))
    })
}

fn buyback_table(items: &[BuybackItem], empty: &str) -> String {
    if items.is_empty() {
        return empty_state(empty);
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let entry = &item.entry;
            vec![
                escape(&entry.company),
                escape(entry.method.label()),
                escape(&rupees(entry.buyback_price)),
                escape(&rupees(entry.market_price)),
                signed_cell(item.premium_percent, percent(item.premium_percent)),
                escape(&short_date(entry.record_date)),
                escape(&entry.issue_size),
            ]
        })
        .collect();
    table(
        &[
            "Company", "Method", "Buyback Price", "Market Price", "Premium", "Record Date",
            "Issue Size",
        ],
        &rows,
    )
}

pub async fn buybacks(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.site;

    render_or_error(site, "/buyback", || {
        let board = state.listing_service.get_buybacks(today_in_display_tz())?;
        let content = format!(
            "<h1>Share Buyback</h1><p class=\"lead\">Upcoming and recent share buybacks with buyback \
price, premium over market price and record date.</p>\
<section><h2>Active Buybacks</h2>{}</section><section><h2>Past Buybacks</h2>{}</section>",
            buyback_table(&board.active, "No active buybacks right now."),
            buyback_table(&board.past, "No past buybacks to show.")
        );

        let meta = PageMeta::new(
            "Share Buyback",
            "Latest share buyback offers: tender and open market buybacks with buyback price, premium and record date.",
            "/buyback",
        )
        .with_faqs(faq::items(faq::BUYBACK));

        Ok(page(site, &meta, &content))
    })
}

fn rights_table(items: &[RightsIssueItem], empty: &str) -> String {
    if items.is_empty() {
        return empty_state(empty);
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let entry = &item.entry;
            vec![
                escape(&entry.company),
                escape(&entry.ratio),
                escape(&rupees(entry.issue_price)),
                escape(&rupees(entry.market_price)),
                escape(&percent(item.discount_percent)),
                escape(&short_date(entry.open_date)),
                escape(&short_date(entry.close_date)),
                escape(item.window.label()),
            ]
        })
        .collect();
    table(
        &[
            "Company", "Ratio", "Issue Price", "Market Price", "Discount", "Open", "Close",
            "Status",
        ],
        &rows,
    )
}

pub async fn rights_issues(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.site;

    render_or_error(site, "/rights-issue", || {
        let board = state
            .listing_service
            .get_rights_issues(today_in_display_tz())?;
        let content = format!(
            "<h1>Rights Issue</h1><p class=\"lead\">Open and upcoming rights issues with entitlement \
ratio, issue price and discount to market price.</p>\
<section><h2>Open &amp; Upcoming</h2>{}</section><section><h2>Closed</h2>{}</section>",
            rights_table(&board.open_or_upcoming, "No open rights issues right now."),
            rights_table(&board.closed, "No closed rights issues to show.")
        );

        let meta = PageMeta::new(
            "Rights Issue",
            "Latest rights issues: ratio, issue price, discount to market price and subscription dates.",
            "/rights-issue",
        )
        .with_faqs(faq::items(faq::RIGHTS));

        Ok(page(site, &meta, &content))
    })
}

fn ncd_table(items: &[NcdIssueItem]) -> String {
    if items.is_empty() {
        return empty_state("No NCD issues are open right now.");
    }
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let entry = &item.entry;
            vec![
                escape(&entry.company),
                escape(&percent(entry.coupon_rate)),
                format!("{} months", entry.tenure_months),
                escape(&entry.rating),
                escape(&rupees(entry.minimum_investment)),
                escape(&short_date(entry.open_date)),
                escape(&short_date(entry.close_date)),
                escape(item.window.label()),
            ]
        })
        .collect();
    table(
        &[
            "Issuer", "Coupon", "Tenure", "Rating", "Min. Investment", "Open", "Close", "Status",
        ],
        &rows,
    )
}

pub async fn ncd_issues(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.site;

    render_or_error(site, "/ncd", || {
        let items = state.listing_service.get_ncd_issues(today_in_display_tz())?;
        let content = format!(
            "<h1>NCD Issues</h1><p class=\"lead\">Open and upcoming public issues of non-convertible \
debentures, ranked by coupon rate.</p>{}",
            ncd_table(&items)
        );

        let meta = PageMeta::new(
            "NCD Issues",
            "Open and upcoming NCD public issues with coupon rate, tenure, credit rating and minimum investment.",
            "/ncd",
        )
        .with_faqs(faq::items(faq::NCD));

        Ok(page(site, &meta, &content))
    })
}
