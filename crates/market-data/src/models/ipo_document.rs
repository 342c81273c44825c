use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use super::rich_text::RichText;

/// IPO record as returned by the upstream content API.
///
/// Every field is optional and decoded leniently: the upstream is edited by hand and
/// any field may be missing, null or of an unexpected type. Decoding an object into
/// this type does not fail; see [`IpoDocument::from_value`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpoDocument {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,

    /// Display title, usually "<Company> IPO"
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,

    #[serde(default, deserialize_with = "lenient::url")]
    pub logo: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<RichText>,

    /// "Mainboard" or "SME"
    #[serde(default, deserialize_with = "lenient::text")]
    pub issue_type: Option<String>,

    /// Free text such as "₹430 to ₹450 per share"
    #[serde(default, deserialize_with = "lenient::text")]
    pub price_band_text: Option<String>,

    /// Free text such as "33 shares"
    #[serde(default, deserialize_with = "lenient::text")]
    pub lot_size_text: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub face_value: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub issue_size: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub fresh_issue: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub offer_for_sale: Option<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub listing_at: Vec<String>,

    /// Latest grey market premium per share, in rupees
    #[serde(default, deserialize_with = "lenient::number")]
    pub gmp: Option<f64>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub timeline: Option<IpoTimeline>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub documents: Option<IpoDocumentLinks>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub financials: Vec<FinancialRow>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub valuation: Option<ValuationKpis>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub peers: Vec<PeerCompany>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub objects_of_issue: Vec<IssueObject>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub reviews: Vec<BrokerReview>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub registrar: Option<Registrar>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub lead_managers: Vec<String>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub faqs: Vec<Faq>,

    /// Per-applicant-type application limits (retail min/max, S-HNI, B-HNI)
    #[serde(default, deserialize_with = "lenient::list")]
    pub lot_distribution: Vec<LotDistributionRow>,
}

impl IpoDocument {
    /// Decodes any JSON value. Non-objects (null, arrays, scalars) give an empty
    /// document.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Key dates of the issue, as ISO strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpoTimeline {
    #[serde(default, deserialize_with = "lenient::text")]
    pub open_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub close_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub allotment_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub refund_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub credit_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub listing_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IpoDocumentLinks {
    #[serde(default, deserialize_with = "lenient::url")]
    pub drhp: Option<String>,
    #[serde(default, deserialize_with = "lenient::url")]
    pub rhp: Option<String>,
    #[serde(default, deserialize_with = "lenient::url")]
    pub anchor_investors: Option<String>,
}

/// One reporting period of restated financials. Amounts are kept as the upstream
/// text ("1,234.56").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialRow {
    #[serde(default, deserialize_with = "lenient::text")]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub assets: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub revenue: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub profit_after_tax: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub net_worth: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reserves: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub total_borrowing: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuationKpis {
    #[serde(default, deserialize_with = "lenient::text")]
    pub market_cap: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub roe: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub roce: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub debt_equity: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ronw: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pat_margin: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price_to_book: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub eps_pre_ipo: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub eps_post_ipo: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pe_pre_ipo: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pe_post_ipo: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerCompany {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub eps: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pe: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ronw: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nav: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub revenue: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueObject {
    #[serde(default, alias = "object", deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub amount: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BrokerReview {
    #[serde(default, deserialize_with = "lenient::text")]
    pub broker: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recommendation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registrar {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::url")]
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub answer: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LotDistributionRow {
    /// Applicant type label, e.g. "Retail (Min)" or "Retail Maximum"
    #[serde(default, deserialize_with = "lenient::text")]
    pub application: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub lots: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub shares: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub amount: Option<String>,
}
