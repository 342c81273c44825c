//! IPO view models.
//!
//! Everything here is display-ready: missing upstream values have already been
//! replaced by placeholders, so templates interpolate fields directly.

use serde::Serialize;

/// Flattened IPO detail page model.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpoViewModel {
    pub slug: String,
    pub company_name: String,
    pub title: String,
    pub logo_url: Option<String>,
    /// Plain-text description; `\n` marks line breaks
    pub description: String,
    pub issue_type: String,

    /// Raw upstream text, or a placeholder
    pub price_band_text: String,
    pub price_band_low: Option<f64>,
    pub price_band_high: Option<f64>,
    /// "₹430 - ₹450" when both bounds parsed, otherwise the raw text
    pub price_band_display: String,

    pub lot_size_text: String,
    pub market_lot: Option<f64>,

    /// `price_band_high * market_lot`
    pub minimum_investment_amount: Option<f64>,
    pub minimum_investment: String,
    pub retail_min_lots: u32,
    pub retail_max_lots: u32,
    pub retail_max_investment: String,

    pub face_value: String,
    pub issue_size: String,
    pub fresh_issue: String,
    pub offer_for_sale: String,
    pub listing_at: String,
    pub lead_managers: String,

    pub gmp: GmpView,
    pub timeline: TimelineView,
    pub documents: DocumentLinksView,
    pub financials: Vec<FinancialRowView>,
    pub kpis: Vec<KpiView>,
    pub peers: Vec<PeerView>,
    pub objects_of_issue: Vec<IssueObjectView>,
    pub reviews: Vec<ReviewView>,
    pub registrar: RegistrarView,
    pub faqs: Vec<FaqView>,
    pub lot_distribution: Vec<LotDistributionView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GmpView {
    pub premium: Option<f64>,
    /// `price_band_high + premium`
    pub expected_listing_price: Option<f64>,
    /// `premium / price_band_high * 100`, two decimals
    pub expected_gain_percent: Option<f64>,
    pub display: String,
}

/// Formatted key dates; unknown dates read "TBA".
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub open_date: String,
    pub close_date: String,
    pub allotment_date: String,
    pub refund_date: String,
    pub credit_date: String,
    pub listing_date: String,
}

/// Offer document links. Missing links stay `None` and are not rendered.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinksView {
    pub drhp: Option<String>,
    pub rhp: Option<String>,
    pub anchor_investors: Option<String>,
}

impl DocumentLinksView {
    pub fn is_empty(&self) -> bool {
        self.drhp.is_none() && self.rhp.is_none() && self.anchor_investors.is_none()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRowView {
    pub period: String,
    pub assets: String,
    pub revenue: String,
    pub profit_after_tax: String,
    pub net_worth: String,
    pub reserves: String,
    pub total_borrowing: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerView {
    pub name: String,
    pub eps: String,
    pub pe: String,
    pub ronw: String,
    pub nav: String,
    pub revenue: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueObjectView {
    pub description: String,
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub broker: String,
    pub recommendation: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarView {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqView {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotDistributionView {
    pub application: String,
    pub lots: String,
    pub shares: String,
    pub amount: String,
}
