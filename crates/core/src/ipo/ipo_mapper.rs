//! Upstream IPO document -> display view model.
//!
//! The mapping is total: any document, including an empty one, produces a fully
//! populated [`IpoViewModel`]. Missing scalars read "-", missing table cells "—" and
//! missing dates "TBA".

use marketdesk_market_data::{
    BrokerReview, Faq, FinancialRow, IpoDocument, IpoTimeline, IssueObject,
    LotDistributionRow, PeerCompany, Registrar, ValuationKpis,
};

use crate::constants::{
    DATE_TO_BE_ANNOUNCED, DEFAULT_RETAIL_MAX_LOTS, DEFAULT_RETAIL_MIN_LOTS, MISSING_CELL,
    MISSING_VALUE,
};
use crate::utils::{
    format_inr, join_unique, parse_first_number, parse_two_numbers, strip_ipo_suffix,
    to_local_date,
};

use super::ipo_model::{
    DocumentLinksView, FaqView, FinancialRowView, GmpView, IpoViewModel, IssueObjectView,
    KpiView, LotDistributionView, PeerView, RegistrarView, ReviewView, TimelineView,
};
use super::rich_text::flatten_rich_text;

/// Lot distribution labels that identify the retail maximum row
const RETAIL_MAX_LABELS: &[&str] = &["retail max", "retail (max)"];

/// Lot distribution labels that identify the retail minimum row
const RETAIL_MIN_LABELS: &[&str] = &["retail min", "retail (min)"];

pub fn map_document_to_view_model(doc: &IpoDocument) -> IpoViewModel {
    let company_name = company_name(doc);
    let title = doc
        .title
        .clone()
        .unwrap_or_else(|| match company_name.as_str() {
            MISSING_VALUE => MISSING_VALUE.to_string(),
            name => format!("{} IPO", name),
        });

    let (price_band_low, price_band_high) = parse_two_numbers(doc.price_band_text.as_deref());
    let market_lot = parse_first_number(doc.lot_size_text.as_deref());

    let minimum_investment_amount = match (price_band_high, market_lot) {
        (Some(high), Some(lot)) => Some(high * lot),
        _ => None,
    };

    let retail_min_lots =
        lots_for(&doc.lot_distribution, RETAIL_MIN_LABELS).unwrap_or(DEFAULT_RETAIL_MIN_LOTS);
    let retail_max_lots =
        lots_for(&doc.lot_distribution, RETAIL_MAX_LABELS).unwrap_or(DEFAULT_RETAIL_MAX_LOTS);

    IpoViewModel {
        slug: doc.slug.clone().unwrap_or_default(),
        company_name,
        title,
        logo_url: doc.logo.clone(),
        description: flatten_rich_text(doc.description.as_ref()),
        issue_type: or_missing(&doc.issue_type),

        price_band_text: or_missing(&doc.price_band_text),
        price_band_low,
        price_band_high,
        price_band_display: price_band_display(
            doc.price_band_text.as_deref(),
            price_band_low,
            price_band_high,
        ),

        lot_size_text: or_missing(&doc.lot_size_text),
        market_lot,

        minimum_investment_amount,
        minimum_investment: minimum_investment_amount
            .map(format_inr)
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
        retail_min_lots,
        retail_max_lots,
        retail_max_investment: minimum_investment_amount
            .map(|min| format_inr(min * f64::from(retail_max_lots)))
            .unwrap_or_else(|| MISSING_VALUE.to_string()),

        face_value: or_missing(&doc.face_value),
        issue_size: or_missing(&doc.issue_size),
        fresh_issue: or_missing(&doc.fresh_issue),
        offer_for_sale: or_missing(&doc.offer_for_sale),
        listing_at: non_empty_or_missing(join_unique(&doc.listing_at)),
        lead_managers: non_empty_or_missing(join_unique(&doc.lead_managers)),

        gmp: gmp_view(doc.gmp, price_band_high),
        timeline: timeline_view(doc.timeline.as_ref()),
        documents: doc
            .documents
            .as_ref()
            .map(|links| DocumentLinksView {
                drhp: links.drhp.clone(),
                rhp: links.rhp.clone(),
                anchor_investors: links.anchor_investors.clone(),
            })
            .unwrap_or_default(),
        financials: doc.financials.iter().filter_map(financial_row).collect(),
        kpis: doc.valuation.as_ref().map(kpis).unwrap_or_default(),
        peers: doc.peers.iter().filter_map(peer).collect(),
        objects_of_issue: doc.objects_of_issue.iter().filter_map(issue_object).collect(),
        reviews: doc.reviews.iter().filter_map(review).collect(),
        registrar: registrar(doc.registrar.as_ref()),
        faqs: doc.faqs.iter().filter_map(faq).collect(),
        lot_distribution: doc
            .lot_distribution
            .iter()
            .filter_map(lot_distribution_row)
            .collect(),
    }
}

fn company_name(doc: &IpoDocument) -> String {
    doc.company_name
        .clone()
        .or_else(|| {
            doc.title
                .as_deref()
                .map(strip_ipo_suffix)
                .filter(|name| !name.is_empty())
        })
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

fn price_band_display(raw: Option<&str>, low: Option<f64>, high: Option<f64>) -> String {
    let formatted = match (low.map(format_inr), high.map(format_inr)) {
        (Some(low), Some(high)) if low != MISSING_VALUE && high != MISSING_VALUE => {
            Some(format!("{} - {}", low, high))
        }
        _ => None,
    };
    formatted
        .or_else(|| raw.map(str::to_string))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

fn lots_for(rows: &[LotDistributionRow], labels: &[&str]) -> Option<u32> {
    rows.iter()
        .find(|row| {
            row.application
                .as_deref()
                .map(|application| {
                    let application = application.to_lowercase();
                    labels.iter().any(|label| application.contains(label))
                })
                .unwrap_or(false)
        })
        .and_then(|row| parse_first_number(row.lots.as_deref()))
        .filter(|lots| *lots >= 1.0 && *lots <= f64::from(u32::MAX))
        .map(|lots| lots.trunc() as u32)
}

fn gmp_view(premium: Option<f64>, price_band_high: Option<f64>) -> GmpView {
    let expected_listing_price = premium.zip(price_band_high).map(|(gmp, high)| high + gmp);
    let expected_gain_percent = premium
        .zip(price_band_high)
        .filter(|(_, high)| *high > 0.0)
        .map(|(gmp, high)| (gmp / high * 10_000.0).round() / 100.0);

    let display = match (premium, expected_gain_percent) {
        (Some(gmp), Some(pct)) => format!("{} ({:.2}%)", format_inr(gmp), pct),
        (Some(gmp), None) => format_inr(gmp),
        _ => MISSING_VALUE.to_string(),
    };

    GmpView {
        premium,
        expected_listing_price,
        expected_gain_percent,
        display,
    }
}

fn timeline_view(timeline: Option<&IpoTimeline>) -> TimelineView {
    let date = |value: Option<&String>| {
        to_local_date(value.map(String::as_str), DATE_TO_BE_ANNOUNCED)
    };

    TimelineView {
        open_date: date(timeline.and_then(|t| t.open_date.as_ref())),
        close_date: date(timeline.and_then(|t| t.close_date.as_ref())),
        allotment_date: date(timeline.and_then(|t| t.allotment_date.as_ref())),
        refund_date: date(timeline.and_then(|t| t.refund_date.as_ref())),
        credit_date: date(timeline.and_then(|t| t.credit_date.as_ref())),
        listing_date: date(timeline.and_then(|t| t.listing_date.as_ref())),
    }
}

fn financial_row(row: &FinancialRow) -> Option<FinancialRowView> {
    if all_missing(&[
        &row.period,
        &row.assets,
        &row.revenue,
        &row.profit_after_tax,
        &row.net_worth,
        &row.reserves,
        &row.total_borrowing,
    ]) {
        return None;
    }
    Some(FinancialRowView {
        period: cell(&row.period),
        assets: cell(&row.assets),
        revenue: cell(&row.revenue),
        profit_after_tax: cell(&row.profit_after_tax),
        net_worth: cell(&row.net_worth),
        reserves: cell(&row.reserves),
        total_borrowing: cell(&row.total_borrowing),
    })
}

fn kpis(valuation: &ValuationKpis) -> Vec<KpiView> {
    let rows: [(&str, &Option<String>); 11] = [
        ("Market Capitalisation", &valuation.market_cap),
        ("ROE", &valuation.roe),
        ("ROCE", &valuation.roce),
        ("Debt/Equity", &valuation.debt_equity),
        ("RoNW", &valuation.ronw),
        ("PAT Margin", &valuation.pat_margin),
        ("Price to Book Value", &valuation.price_to_book),
        ("EPS (Pre IPO)", &valuation.eps_pre_ipo),
        ("EPS (Post IPO)", &valuation.eps_post_ipo),
        ("P/E (Pre IPO)", &valuation.pe_pre_ipo),
        ("P/E (Post IPO)", &valuation.pe_post_ipo),
    ];

    if rows.iter().all(|(_, value)| value.is_none()) {
        return Vec::new();
    }
    rows.iter()
        .map(|(label, value)| KpiView {
            label: label.to_string(),
            value: cell(value),
        })
        .collect()
}

fn peer(peer: &PeerCompany) -> Option<PeerView> {
    if all_missing(&[
        &peer.name,
        &peer.eps,
        &peer.pe,
        &peer.ronw,
        &peer.nav,
        &peer.revenue,
    ]) {
        return None;
    }
    Some(PeerView {
        name: cell(&peer.name),
        eps: cell(&peer.eps),
        pe: cell(&peer.pe),
        ronw: cell(&peer.ronw),
        nav: cell(&peer.nav),
        revenue: cell(&peer.revenue),
    })
}

fn issue_object(object: &IssueObject) -> Option<IssueObjectView> {
    if all_missing(&[&object.description, &object.amount]) {
        return None;
    }
    Some(IssueObjectView {
        description: cell(&object.description),
        amount: cell(&object.amount),
    })
}

fn review(review: &BrokerReview) -> Option<ReviewView> {
    if all_missing(&[&review.broker, &review.recommendation, &review.summary]) {
        return None;
    }
    Some(ReviewView {
        broker: cell(&review.broker),
        recommendation: cell(&review.recommendation),
        summary: cell(&review.summary),
    })
}

fn registrar(registrar: Option<&Registrar>) -> RegistrarView {
    RegistrarView {
        name: cell_of(registrar.and_then(|r| r.name.as_ref())),
        phone: cell_of(registrar.and_then(|r| r.phone.as_ref())),
        email: cell_of(registrar.and_then(|r| r.email.as_ref())),
        website: registrar.and_then(|r| r.website.clone()),
    }
}

fn faq(faq: &Faq) -> Option<FaqView> {
    if all_missing(&[&faq.question, &faq.answer]) {
        return None;
    }
    Some(FaqView {
        question: cell(&faq.question),
        answer: cell(&faq.answer),
    })
}

fn lot_distribution_row(row: &LotDistributionRow) -> Option<LotDistributionView> {
    if all_missing(&[&row.application, &row.lots, &row.shares, &row.amount]) {
        return None;
    }
    Some(LotDistributionView {
        application: cell(&row.application),
        lots: cell(&row.lots),
        shares: cell(&row.shares),
        amount: cell(&row.amount),
    })
}

fn or_missing(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| MISSING_VALUE.to_string())
}

fn non_empty_or_missing(value: String) -> String {
    if value.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        value
    }
}

fn cell(value: &Option<String>) -> String {
    cell_of(value.as_ref())
}

fn cell_of(value: Option<&String>) -> String {
    value
        .cloned()
        .unwrap_or_else(|| MISSING_CELL.to_string())
}

fn all_missing(values: &[&Option<String>]) -> bool {
    values.iter().all(|value| value.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> IpoDocument {
        IpoDocument::from_value(value)
    }

    #[test]
    fn test_empty_document_is_all_placeholders() {
        let view = map_document_to_view_model(&IpoDocument::default());

        assert_eq!(view.slug, "");
        assert_eq!(view.company_name, "-");
        assert_eq!(view.title, "-");
        assert_eq!(view.description, "");
        assert_eq!(view.issue_type, "-");
        assert_eq!(view.price_band_text, "-");
        assert_eq!(view.price_band_low, None);
        assert_eq!(view.price_band_high, None);
        assert_eq!(view.price_band_display, "-");
        assert_eq!(view.market_lot, None);
        assert_eq!(view.minimum_investment, "-");
        assert_eq!(view.retail_min_lots, 1);
        assert_eq!(view.retail_max_lots, 13);
        assert_eq!(view.retail_max_investment, "-");
        assert_eq!(view.listing_at, "-");
        assert_eq!(view.lead_managers, "-");
        assert_eq!(view.gmp.display, "-");
        assert_eq!(view.timeline.open_date, "TBA");
        assert_eq!(view.timeline.listing_date, "TBA");
        assert!(view.documents.is_empty());
        assert!(view.financials.is_empty());
        assert!(view.kpis.is_empty());
        assert_eq!(view.registrar.name, "—");
        assert_eq!(view.registrar.website, None);
    }

    #[test]
    fn test_price_band_and_lot() {
        let view = map_document_to_view_model(&doc(json!({
            "title": "Acme Ltd IPO",
            "price_band_text": "₹430 to ₹450 per share",
            "lot_size_text": "33 shares"
        })));

        assert_eq!(view.company_name, "Acme Ltd");
        assert_eq!(view.title, "Acme Ltd IPO");
        assert_eq!(view.price_band_low, Some(430.0));
        assert_eq!(view.price_band_high, Some(450.0));
        assert_eq!(view.price_band_display, "₹430 - ₹450");
        assert_eq!(view.market_lot, Some(33.0));
        assert_eq!(view.minimum_investment_amount, Some(14850.0));
        assert_eq!(view.minimum_investment, "₹14,850");
        assert_eq!(view.retail_max_investment, "₹1,93,050");
    }

    #[test]
    fn test_single_price_keeps_raw_text() {
        let view = map_document_to_view_model(&doc(json!({
            "price_band_text": "₹108 per share",
            "lot_size_text": "1200 shares"
        })));

        assert_eq!(view.price_band_low, Some(108.0));
        assert_eq!(view.price_band_high, None);
        assert_eq!(view.price_band_display, "₹108 per share");
        assert_eq!(view.minimum_investment, "-");
    }

    #[test]
    fn test_oversized_price_band_uses_placeholders() {
        let view = map_document_to_view_model(&doc(json!({
            "price_band_text": "₹99999999999999999999 to ₹99999999999999999999",
            "lot_size_text": "10 shares"
        })));

        assert_eq!(
            view.price_band_display,
            "₹99999999999999999999 to ₹99999999999999999999"
        );
        assert_eq!(view.minimum_investment, "-");
        assert_eq!(view.retail_max_investment, "-");
    }

    #[test]
    fn test_company_name_prefers_explicit_field() {
        let view = map_document_to_view_model(&doc(json!({
            "title": "Acme IPO",
            "company_name": "Acme Widgets Limited"
        })));
        assert_eq!(view.company_name, "Acme Widgets Limited");
        assert_eq!(view.title, "Acme IPO");

        let view = map_document_to_view_model(&doc(json!({"company_name": "Acme"})));
        assert_eq!(view.title, "Acme IPO");
    }

    #[test]
    fn test_retail_lots_from_distribution() {
        let view = map_document_to_view_model(&doc(json!({
            "lot_distribution": [
                {"application": "Retail (Min)", "lots": "1", "shares": "33", "amount": "₹14,850"},
                {"application": "Retail Maximum", "lots": 14, "shares": "462"},
                {"application": "S-HNI (Min)", "lots": "15"}
            ]
        })));

        assert_eq!(view.retail_min_lots, 1);
        assert_eq!(view.retail_max_lots, 14);
        assert_eq!(view.lot_distribution.len(), 3);
        assert_eq!(view.lot_distribution[1].amount, "—");
    }

    #[test]
    fn test_retail_lots_fallback_when_unparseable() {
        let view = map_document_to_view_model(&doc(json!({
            "lot_distribution": [{"application": "retail maximum", "lots": "n/a"}]
        })));
        assert_eq!(view.retail_max_lots, 13);
    }

    #[test]
    fn test_gmp_derivations() {
        let view = map_document_to_view_model(&doc(json!({
            "price_band_text": "₹430 to ₹450",
            "gmp": 45
        })));
        assert_eq!(view.gmp.premium, Some(45.0));
        assert_eq!(view.gmp.expected_listing_price, Some(495.0));
        assert_eq!(view.gmp.expected_gain_percent, Some(10.0));
        assert_eq!(view.gmp.display, "₹45 (10.00%)");

        let view = map_document_to_view_model(&doc(json!({"gmp": 12})));
        assert_eq!(view.gmp.expected_listing_price, None);
        assert_eq!(view.gmp.display, "₹12");
    }

    #[test]
    fn test_timeline_dates() {
        let view = map_document_to_view_model(&doc(json!({
            "timeline": {
                "open_date": "2025-01-14T18:30:00.000Z",
                "close_date": "2025-01-17",
                "allotment_date": null,
                "listing_date": "not yet"
            }
        })));
        assert_eq!(view.timeline.open_date, "15 January 2025");
        assert_eq!(view.timeline.close_date, "17 January 2025");
        assert_eq!(view.timeline.allotment_date, "TBA");
        assert_eq!(view.timeline.listing_date, "TBA");
    }

    #[test]
    fn test_pass_through_rows_get_cell_placeholders() {
        let view = map_document_to_view_model(&doc(json!({
            "financials": [{"period": "FY24", "revenue": "1,250.5"}, {}],
            "peers": [{"name": "Widget Co", "pe": 31.2}],
            "objects_of_issue": [{"description": "Repay borrowings"}],
            "reviews": [{"broker": "Alpha Broking", "recommendation": "Subscribe"}],
            "faqs": [{"question": "What is the lot size?"}]
        })));

        assert_eq!(view.financials.len(), 1);
        assert_eq!(view.financials[0].revenue, "1,250.5");
        assert_eq!(view.financials[0].assets, "—");
        assert_eq!(view.peers[0].pe, "31.2");
        assert_eq!(view.peers[0].eps, "—");
        assert_eq!(view.objects_of_issue[0].amount, "—");
        assert_eq!(view.reviews[0].summary, "—");
        assert_eq!(view.faqs[0].answer, "—");
    }

    #[test]
    fn test_kpis_only_when_valuation_present() {
        let view = map_document_to_view_model(&doc(json!({"valuation": {"roe": "18.2%"}})));
        assert_eq!(view.kpis.len(), 11);
        assert_eq!(view.kpis[1].label, "ROE");
        assert_eq!(view.kpis[1].value, "18.2%");
        assert_eq!(view.kpis[0].value, "—");

        let view = map_document_to_view_model(&doc(json!({"valuation": {}})));
        assert!(view.kpis.is_empty());
    }

    #[test]
    fn test_exchanges_and_managers_are_deduplicated() {
        let view = map_document_to_view_model(&doc(json!({
            "listing_at": ["NSE", "BSE", "NSE", ""],
            "lead_managers": [{"name": "Axis Capital"}, "Axis Capital", "JM Financial"]
        })));
        assert_eq!(view.listing_at, "NSE, BSE");
        assert_eq!(view.lead_managers, "Axis Capital, JM Financial");
    }

    #[test]
    fn test_documents_and_registrar() {
        let view = map_document_to_view_model(&doc(json!({
            "documents": {"rhp": {"url": "https://cdn.example.com/rhp.pdf"}},
            "registrar": {"name": "Link Intime India", "email": "ipo@linkintime.co.in"}
        })));
        assert_eq!(
            view.documents.rhp.as_deref(),
            Some("https://cdn.example.com/rhp.pdf")
        );
        assert_eq!(view.documents.drhp, None);
        assert_eq!(view.registrar.name, "Link Intime India");
        assert_eq!(view.registrar.phone, "—");
    }
}
