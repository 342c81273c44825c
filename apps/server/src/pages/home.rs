use std::sync::Arc;

use axum::{extract::State, response::Response};
use marketdesk_core::{
    calculators::CalculatorKind,
    listings::{IpoCalendarFilter, IpoStatus},
    utils::today_in_display_tz,
};

use super::{
    faq,
    html::{page, Breadcrumb, PageMeta},
    ipo::calendar_table,
    listings::gmp_table,
    render_or_error,
};
use crate::main_lib::AppState;

const TOP_GMP_ROWS: usize = 5;

fn tool_links() -> String {
    let mut links = vec![
        ("/buyback".to_string(), "Share Buybacks"),
        ("/rights-issue".to_string(), "Rights Issues"),
        ("/ncd".to_string(), "NCD Issues"),
        ("/fd-rates".to_string(), "FD Rates"),
        ("/rd-rates".to_string(), "RD Rates"),
        ("/fuel-price".to_string(), "Petrol & Diesel Price"),
        ("/gold-rate".to_string(), "Gold & Silver Rate"),
    ];
    links.extend(
        CalculatorKind::ALL
            .iter()
            .map(|kind| (format!("/calculators/{}", kind.slug()), kind.label())),
    );

    let items: String = links
        .iter()
        .map(|(href, label)| format!("<li><a href=\"{}\">{}</a></li>", href, label))
        .collect();
    format!("<ul class=\"tools\">{}</ul>", items)
}

pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    let site = &state.site;

    render_or_error(site, "/", || {
        let today = today_in_display_tz();
        let service = &state.listing_service;

        let mut live = service.get_ipo_calendar(
            &IpoCalendarFilter {
                status: Some(IpoStatus::Open),
                segment: None,
            },
            today,
        )?;
        live.extend(service.get_ipo_calendar(
            &IpoCalendarFilter {
                status: Some(IpoStatus::Upcoming),
                segment: None,
            },
            today,
        )?);

        let mut gmp = service.get_gmp_listings(true, today)?;
        gmp.truncate(TOP_GMP_ROWS);

        let content = format!(
            "<h1>IPO, GMP and Market Rates Today</h1>\
<p class=\"lead\">Track open and upcoming IPOs, grey market premium, buybacks, deposit rates, \
fuel prices and gold rates across India.</p>\
<section><h2>Open &amp; Upcoming IPOs</h2>{}<p><a href=\"/ipo\">View full IPO calendar</a></p></section>\
<section><h2>Top IPO GMP</h2>{}<p><a href=\"/ipo-gmp\">View all IPO GMP</a></p></section>\
<section><h2>Tools &amp; Rates</h2>{}</section>",
            calendar_table(&live),
            gmp_table(&gmp),
            tool_links()
        );

        let meta = PageMeta::new(
            "IPO GMP, IPO Calendar, Gold Rate and FD Rates Today",
            "Latest IPO calendar and grey market premium, share buybacks, rights issues, NCDs, bank FD and RD rates, petrol and diesel prices, gold rates and investment calculators.",
            "/",
        )
        .with_breadcrumbs(vec![Breadcrumb::new("Home", "/")])
        .with_faqs(faq::items(faq::HOME));

        Ok(page(site, &meta, &content))
    })
}
