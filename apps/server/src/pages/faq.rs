//! Static FAQ copy shown at the bottom of the listing and rate pages.

use super::html::FaqItem;

type StaticFaq = (&'static str, &'static str);

pub const HOME: &[StaticFaq] = &[
    (
        "What information does MarketDesk cover?",
        "IPO calendars and grey market premium, buybacks, rights issues, NCD issues, bank deposit rates, fuel prices and gold and silver rates, along with investment and loan calculators.",
    ),
    (
        "How often is the data updated?",
        "Listing pages are refreshed every few minutes. IPO detail pages are fetched from the issue database on each refresh window.",
    ),
];

pub const IPO: &[StaticFaq] = &[
    (
        "What is an IPO?",
        "An Initial Public Offering is the first sale of a company's shares to the public, after which the shares are listed on a stock exchange.",
    ),
    (
        "What is the difference between Mainboard and SME IPOs?",
        "Mainboard IPOs list on the main NSE and BSE platforms. SME IPOs list on the NSE Emerge or BSE SME platforms, carry larger lot sizes and have lighter eligibility norms.",
    ),
    (
        "How many lots can a retail investor apply for?",
        "A retail investor can apply for up to ₹2,00,000 worth of shares. The maximum number of lots therefore depends on the price band and lot size.",
    ),
];

pub const IPO_DETAIL: &[StaticFaq] = &[
    (
        "How do I apply for this IPO?",
        "Apply through your broker's app or net banking using ASBA, or through UPI. Enter the number of lots and your bid price within the price band.",
    ),
    (
        "How do I check the allotment status?",
        "Allotment status is published by the registrar on the allotment date. Check it on the registrar's website using your PAN or application number.",
    ),
];

pub const GMP: &[StaticFaq] = &[
    (
        "What is IPO GMP?",
        "Grey Market Premium is the unofficial premium at which IPO shares trade before listing. It indicates market sentiment, not the listing price.",
    ),
    (
        "How is the estimated listing price calculated?",
        "Estimated listing price = upper end of the price band + GMP. The estimated gain is GMP divided by the issue price.",
    ),
    (
        "Is grey market trading legal?",
        "Grey market trading is unofficial and unregulated. GMP figures are indicative only and should not be the sole basis of an investment decision.",
    ),
];

pub const BUYBACK: &[StaticFaq] = &[
    (
        "What is a share buyback?",
        "A buyback is when a company repurchases its own shares from shareholders, either through a tender offer at a fixed price or from the open market.",
    ),
    (
        "What is the record date in a tender offer buyback?",
        "Shareholders holding shares on the record date are eligible to tender their shares in the buyback.",
    ),
];

pub const RIGHTS: &[StaticFaq] = &[
    (
        "What is a rights issue?",
        "A rights issue offers existing shareholders additional shares, usually at a discount, in proportion to their current holding.",
    ),
    (
        "What does the rights ratio mean?",
        "A ratio of 1:5 means one new share is offered for every five shares held on the record date.",
    ),
];

pub const NCD: &[StaticFaq] = &[
    (
        "What is an NCD?",
        "A Non-Convertible Debenture is a fixed-income instrument issued by a company. It pays a fixed coupon and cannot be converted into shares.",
    ),
    (
        "Are NCDs safe?",
        "NCDs carry credit risk. Check the credit rating and the issuer's financials before investing.",
    ),
];

pub const FD: &[StaticFaq] = &[
    (
        "Do senior citizens get higher FD rates?",
        "Most banks offer senior citizens an additional 0.25% to 0.75% over the general rate.",
    ),
    (
        "Is FD interest taxable?",
        "Yes. FD interest is added to your income and taxed at your slab rate. Banks deduct TDS above the threshold.",
    ),
];

pub const RD: &[StaticFaq] = &[(
    "How does a recurring deposit work?",
    "You deposit a fixed amount every month for a chosen tenure. Interest is compounded quarterly and paid at maturity.",
)];

pub const FUEL: &[StaticFaq] = &[(
    "Why do fuel prices differ between cities?",
    "Petrol and diesel prices include state VAT and local levies, which vary from state to state.",
)];

pub const GOLD: &[StaticFaq] = &[
    (
        "What is the difference between 22K and 24K gold?",
        "24K gold is 99.9% pure and used for coins and bars. 22K gold is 91.6% pure and used for jewellery.",
    ),
    (
        "Why do gold rates vary by city?",
        "Local demand, transport costs and state levies cause small differences between cities.",
    ),
];

pub const CALCULATORS: &[StaticFaq] = &[(
    "Are the calculator results guaranteed?",
    "No. Results are estimates based on the rate you enter. Actual returns depend on market performance and the product's terms.",
)];

pub fn items(faqs: &[StaticFaq]) -> Vec<FaqItem> {
    faqs.iter()
        .map(|(question, answer)| FaqItem {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}
