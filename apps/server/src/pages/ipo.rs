use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
};
use marketdesk_core::{
    ipo::IpoViewModel,
    listings::{IpoCalendarFilter, IpoCalendarItem, IpoStatus, IssueSegment},
    utils::today_in_display_tz,
};

use super::{
    faq,
    format::short_date,
    html::{
        empty_state, escape, escape_multiline, key_values, page, table, Breadcrumb, FaqItem,
        PageMeta,
    },
    not_found, render_or_error, seo,
};
use crate::main_lib::AppState;

const STATUS_TABS: [(Option<IpoStatus>, &str); 5] = [
    (None, "All"),
    (Some(IpoStatus::Open), "Open"),
    (Some(IpoStatus::Upcoming), "Upcoming"),
    (Some(IpoStatus::Closed), "Closed"),
    (Some(IpoStatus::Listed), "Listed"),
];

fn status_query(status: Option<IpoStatus>) -> &'static str {
    match status {
        None => "",
        Some(IpoStatus::Open) => "?status=open",
        Some(IpoStatus::Upcoming) => "?status=upcoming",
        Some(IpoStatus::Closed) => "?status=closed",
        Some(IpoStatus::Listed) => "?status=listed",
    }
}

fn ipo_link(slug: &str, name: &str) -> String {
    format!(
        "<a href=\"/ipo/{}\">{}</a>",
        urlencoding::encode(slug),
        escape(name)
    )
}

fn calendar_rows(items: &[IpoCalendarItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            let entry = &item.entry;
            vec![
                ipo_link(&entry.slug, &entry.name),
                escape(entry.segment.label()),
                escape(&short_date(entry.open_date)),
                escape(&short_date(entry.close_date)),
                escape(&short_date(entry.listing_date)),
                escape(&entry.price_band_text),
                if entry.lot_size > 0 {
                    entry.lot_size.to_string()
                } else {
                    "-".to_string()
                },
                escape(&entry.issue_size),
                format!(
                    "<span class=\"status status-{}\">{}</span>",
                    item.status.label().to_lowercase(),
                    item.status.label()
                ),
            ]
        })
        .collect()
}

pub(crate) fn calendar_table(items: &[IpoCalendarItem]) -> String {
    if items.is_empty() {
        return empty_state("No IPOs match this filter right now.");
    }
    table(
        &[
            "Company", "Segment", "Open", "Close", "Listing", "Price Band", "Lot Size",
            "Issue Size", "Status",
        ],
        &calendar_rows(items),
    )
}

/// `/ipo` - IPO calendar with status tabs.
pub async fn ipo_calendar(
    State(state): State<Arc<AppState>>,
    filter: Result<Query<IpoCalendarFilter>, QueryRejection>,
) -> Response {
    let filter = filter.map(|Query(f)| f).unwrap_or_default();
    let site = &state.site;

    render_or_error(site, "/ipo", || {
        let items = state
            .listing_service
            .get_ipo_calendar(&filter, today_in_display_tz())?;

        let tabs: String = STATUS_TABS
            .iter()
            .map(|(status, label)| {
                let class = if *status == filter.status {
                    " class=\"active\""
                } else {
                    ""
                };
                format!(
                    "<a{} href=\"/ipo{}\">{}</a>",
                    class,
                    status_query(*status),
                    label
                )
            })
            .collect();

        let heading = match (filter.status, filter.segment) {
            (Some(status), Some(segment)) => {
                format!("{} {} IPOs", status.label(), segment.label())
            }
            (Some(status), None) => format!("{} IPOs", status.label()),
            (None, Some(segment)) => format!("{} IPOs", segment.label()),
            (None, None) => "IPO Calendar".to_string(),
        };

        let content = format!(
            "<h1>{}</h1><p class=\"lead\">Upcoming, open and recently listed IPOs on NSE and BSE, \
with price band, lot size and key dates.</p><nav class=\"tabs\">{}</nav>{}\
<p class=\"segments\">{} · {}</p>",
            escape(&heading),
            tabs,
            calendar_table(&items),
            segment_link(IssueSegment::Mainboard),
            segment_link(IssueSegment::Sme)
        );

        let meta = PageMeta::new(
            "IPO Calendar",
            "Latest IPO calendar: upcoming, open and listed Mainboard and SME IPOs with price band, lot size, issue size and dates.",
            "/ipo",
        )
        .with_faqs(faq::items(faq::IPO));

        Ok(page(site, &meta, &content))
    })
}

fn detail_title(view: &IpoViewModel) -> String {
    if view.title == "-" {
        "IPO Details".to_string()
    } else {
        view.title.clone()
    }
}

fn detail_description(view: &IpoViewModel) -> String {
    format!(
        "{} IPO: price band {}, lot size {}, minimum investment {}. Opens {}, closes {}. Check GMP, financials, allotment and listing dates.",
        view.company_name,
        view.price_band_display,
        view.lot_size_text,
        view.minimum_investment,
        view.timeline.open_date,
        view.timeline.close_date
    )
}

fn section(title: &str, body: String) -> String {
    format!("<section><h2>{}</h2>{}</section>", escape(title), body)
}

fn escaped_rows<const N: usize>(rows: impl Iterator<Item = [String; N]>) -> Vec<Vec<String>> {
    rows.map(|row| row.iter().map(|cell| escape(cell)).collect())
        .collect()
}

fn document_links(view: &IpoViewModel) -> String {
    let links: String = [
        ("DRHP", &view.documents.drhp),
        ("RHP", &view.documents.rhp),
        ("Anchor Investors", &view.documents.anchor_investors),
    ]
    .iter()
    .filter_map(|(label, url)| {
        url.as_ref().map(|url| {
            format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
                escape(url),
                label
            )
        })
    })
    .collect();
    format!("<ul class=\"documents\">{}</ul>", links)
}

fn detail_content(view: &IpoViewModel) -> String {
    let mut out = String::new();

    out.push_str("<header class=\"ipo-header\">");
    if let Some(logo) = &view.logo_url {
        out.push_str(&format!(
            "<img class=\"logo\" src=\"{}\" alt=\"{} logo\" width=\"96\" height=\"96\">",
            escape(logo),
            escape(&view.company_name)
        ));
    }
    out.push_str(&format!("<h1>{}</h1>", escape(&detail_title(view))));
    out.push_str("</header>");

    if !view.description.is_empty() {
        out.push_str(&format!(
            "<p class=\"description\">{}</p>",
            escape_multiline(&view.description)
        ));
    }

    let retail_max = format!(
        "{} lots ({})",
        view.retail_max_lots, view.retail_max_investment
    );
    out.push_str(&section(
        "IPO Details",
        key_values(&[
            ("Issue Type", view.issue_type.clone()),
            ("Price Band", view.price_band_display.clone()),
            ("Lot Size", view.lot_size_text.clone()),
            ("Minimum Investment", view.minimum_investment.clone()),
            ("Retail Minimum", format!("{} lot", view.retail_min_lots)),
            ("Retail Maximum", retail_max),
            ("Face Value", view.face_value.clone()),
            ("Issue Size", view.issue_size.clone()),
            ("Fresh Issue", view.fresh_issue.clone()),
            ("Offer for Sale", view.offer_for_sale.clone()),
            ("Listing At", view.listing_at.clone()),
            ("Grey Market Premium", view.gmp.display.clone()),
        ]),
    ));

    let timeline = &view.timeline;
    out.push_str(&section(
        "IPO Timeline",
        key_values(&[
            ("Open Date", timeline.open_date.clone()),
            ("Close Date", timeline.close_date.clone()),
            ("Allotment Date", timeline.allotment_date.clone()),
            ("Refund Initiation", timeline.refund_date.clone()),
            ("Credit to Demat", timeline.credit_date.clone()),
            ("Listing Date", timeline.listing_date.clone()),
        ]),
    ));

    if !view.lot_distribution.is_empty() {
        out.push_str(&section(
            "Lot Size",
            table(
                &["Application", "Lots", "Shares", "Amount"],
                &escaped_rows(view.lot_distribution.iter().map(|row| {
                    [
                        row.application.clone(),
                        row.lots.clone(),
                        row.shares.clone(),
                        row.amount.clone(),
                    ]
                })),
            ),
        ));
    }

    if !view.financials.is_empty() {
        out.push_str(&section(
            "Company Financials",
            table(
                &[
                    "Period", "Assets", "Revenue", "Profit After Tax", "Net Worth", "Reserves",
                    "Total Borrowing",
                ],
                &escaped_rows(view.financials.iter().map(|row| {
                    [
                        row.period.clone(),
                        row.assets.clone(),
                        row.revenue.clone(),
                        row.profit_after_tax.clone(),
                        row.net_worth.clone(),
                        row.reserves.clone(),
                        row.total_borrowing.clone(),
                    ]
                })),
            ),
        ));
    }

    if !view.kpis.is_empty() {
        out.push_str(&section(
            "Key Performance Indicators",
            table(
                &["KPI", "Value"],
                &escaped_rows(
                    view.kpis
                        .iter()
                        .map(|kpi| [kpi.label.clone(), kpi.value.clone()]),
                ),
            ),
        ));
    }

    if !view.peers.is_empty() {
        out.push_str(&section(
            "Peer Comparison",
            table(
                &["Company", "EPS", "P/E", "RoNW", "NAV", "Revenue"],
                &escaped_rows(view.peers.iter().map(|peer| {
                    [
                        peer.name.clone(),
                        peer.eps.clone(),
                        peer.pe.clone(),
                        peer.ronw.clone(),
                        peer.nav.clone(),
                        peer.revenue.clone(),
                    ]
                })),
            ),
        ));
    }

    if !view.objects_of_issue.is_empty() {
        out.push_str(&section(
            "Objects of the Issue",
            table(
                &["Object", "Amount"],
                &escaped_rows(
                    view.objects_of_issue
                        .iter()
                        .map(|o| [o.description.clone(), o.amount.clone()]),
                ),
            ),
        ));
    }

    if !view.reviews.is_empty() {
        out.push_str(&section(
            "Broker Reviews",
            table(
                &["Broker", "Recommendation", "Summary"],
                &escaped_rows(view.reviews.iter().map(|r| {
                    [r.broker.clone(), r.recommendation.clone(), r.summary.clone()]
                })),
            ),
        ));
    }

    let registrar = &view.registrar;
    let mut registrar_html = key_values(&[
        ("Name", registrar.name.clone()),
        ("Phone", registrar.phone.clone()),
        ("Email", registrar.email.clone()),
    ]);
    if let Some(website) = &registrar.website {
        registrar_html.push_str(&format!(
            "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener\">Check allotment status</a></p>",
            escape(website)
        ));
    }
    out.push_str(&section("Registrar", registrar_html));

    out.push_str(&section(
        "Lead Managers",
        format!("<p>{}</p>", escape(&view.lead_managers)),
    ));

    if !view.documents.is_empty() {
        out.push_str(&section("Offer Documents", document_links(view)));
    }

    out
}

/// `/ipo/{slug}` - IPO detail page built from the upstream document.
pub async fn ipo_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    let site = &state.site;
    let path = format!("/ipo/{}", slug);

    let view = match state.ipo_service.get_ipo(&slug).await {
        Ok(view) => view,
        Err(e) => {
            tracing::warn!("IPO '{}' unavailable, serving not found: {}", slug, e);
            return not_found::page(site, &path).into_response();
        }
    };

    let title = detail_title(&view);
    let mut faqs: Vec<_> = view
        .faqs
        .iter()
        .map(|f| FaqItem {
            question: f.question.clone(),
            answer: f.answer.clone(),
        })
        .collect();
    faqs.extend(faq::items(faq::IPO_DETAIL));

    let mut meta = PageMeta::new(&title, &detail_description(&view), &path)
        .with_breadcrumbs(vec![
            Breadcrumb::new("Home", "/"),
            Breadcrumb::new("IPO", "/ipo"),
            Breadcrumb::new(title.clone(), path.clone()),
        ])
        .with_faqs(faqs);
    meta.og_type = "article";
    meta.image = view.logo_url.clone();
    meta.schemas
        .push(seo::financial_product(&site.url(&path), &view));

    page(site, &meta, &detail_content(&view)).into_response()
}

/// Calendar link filtered to one segment.
pub(crate) fn segment_link(segment: IssueSegment) -> String {
    let query = match segment {
        IssueSegment::Mainboard => "mainboard",
        IssueSegment::Sme => "sme",
    };
    format!(
        "<a href=\"/ipo?segment={}\">{} IPOs</a>",
        query,
        segment.label()
    )
}
