use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::errors::Result;

use super::listings_model::{
    BuybackEntry, BuybackMethod, GmpEntry, IpoCalendarEntry, IssueSegment, NcdIssueEntry,
    RightsIssueEntry,
};
use super::listings_traits::ListingRepositoryTrait;

/// Listing data bundled with the binary until live feeds are wired in.
#[derive(Debug, Default, Clone)]
pub struct StaticListingRepository;

impl StaticListingRepository {
    pub fn new() -> Self {
        StaticListingRepository
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

impl ListingRepositoryTrait for StaticListingRepository {
    fn load_ipo_calendar(&self) -> Result<Vec<IpoCalendarEntry>> {
        let entry = |name: &str,
                     slug: &str,
                     segment: IssueSegment,
                     dates: [Option<NaiveDate>; 3],
                     price_band_text: &str,
                     lot_size: u32,
                     issue_size: &str| IpoCalendarEntry {
            name: name.to_string(),
            slug: slug.to_string(),
            segment,
            open_date: dates[0],
            close_date: dates[1],
            listing_date: dates[2],
            price_band_text: price_band_text.to_string(),
            lot_size,
            issue_size: issue_size.to_string(),
        };

        Ok(vec![
            entry(
                "Suryoday Renewables",
                "suryoday-renewables",
                IssueSegment::Mainboard,
                [date(2026, 11, 3), date(2026, 11, 5), date(2026, 11, 10)],
                "₹212 to ₹224 per share",
                66,
                "₹1,150.00 Cr",
            ),
            entry(
                "Kaveri Precision Castings",
                "kaveri-precision-castings",
                IssueSegment::Sme,
                [date(2026, 10, 16), date(2026, 10, 21), date(2026, 10, 24)],
                "₹95 to ₹100 per share",
                1200,
                "₹38.40 Cr",
            ),
            entry(
                "Nilgiri Foods",
                "nilgiri-foods",
                IssueSegment::Mainboard,
                [date(2026, 10, 13), date(2026, 10, 15), date(2026, 10, 20)],
                "₹430 to ₹450 per share",
                33,
                "₹2,480.75 Cr",
            ),
            entry(
                "Tarang Logistics",
                "tarang-logistics",
                IssueSegment::Mainboard,
                [date(2026, 9, 22), date(2026, 9, 24), date(2026, 9, 29)],
                "₹315 to ₹332 per share",
                45,
                "₹860.00 Cr",
            ),
            entry(
                "Pragati Agro Exports",
                "pragati-agro-exports",
                IssueSegment::Sme,
                [date(2026, 9, 8), date(2026, 9, 10), date(2026, 9, 15)],
                "₹52 per share",
                2000,
                "₹16.64 Cr",
            ),
            entry(
                "Vayu Aerospace Systems",
                "vayu-aerospace-systems",
                IssueSegment::Mainboard,
                [None, None, None],
                "To be announced",
                0,
                "₹3,200.00 Cr",
            ),
        ])
    }

    fn load_gmp_entries(&self) -> Result<Vec<GmpEntry>> {
        let entry = |name: &str,
                     slug: &str,
                     segment: IssueSegment,
                     issue_price,
                     gmp,
                     open_date,
                     close_date| GmpEntry {
            name: name.to_string(),
            slug: slug.to_string(),
            segment,
            issue_price,
            gmp,
            open_date,
            close_date,
        };

        Ok(vec![
            entry(
                "Nilgiri Foods",
                "nilgiri-foods",
                IssueSegment::Mainboard,
                dec!(450),
                dec!(45),
                date(2026, 10, 13),
                date(2026, 10, 15),
            ),
            entry(
                "Kaveri Precision Castings",
                "kaveri-precision-castings",
                IssueSegment::Sme,
                dec!(100),
                dec!(38),
                date(2026, 10, 16),
                date(2026, 10, 21),
            ),
            entry(
                "Suryoday Renewables",
                "suryoday-renewables",
                IssueSegment::Mainboard,
                dec!(224),
                dec!(12.5),
                date(2026, 11, 3),
                date(2026, 11, 5),
            ),
            entry(
                "Tarang Logistics",
                "tarang-logistics",
                IssueSegment::Mainboard,
                dec!(332),
                dec!(-6),
                date(2026, 9, 22),
                date(2026, 9, 24),
            ),
        ])
    }

    fn load_buybacks(&self) -> Result<Vec<BuybackEntry>> {
        let entry = |company: &str,
                     method,
                     buyback_price,
                     market_price,
                     record_date,
                     issue_size: &str| BuybackEntry {
            company: company.to_string(),
            method,
            buyback_price,
            market_price,
            record_date,
            issue_size: issue_size.to_string(),
        };

        Ok(vec![
            entry(
                "Deccan Infotech",
                BuybackMethod::Tender,
                dec!(1850),
                dec!(1612.40),
                date(2026, 11, 7),
                "₹9,300 Cr",
            ),
            entry(
                "Meridian Pharma",
                BuybackMethod::OpenMarket,
                dec!(720),
                dec!(684.15),
                date(2026, 10, 28),
                "₹1,250 Cr",
            ),
            entry(
                "Harbor Cement",
                BuybackMethod::Tender,
                dec!(410),
                dec!(356.90),
                date(2026, 8, 14),
                "₹480 Cr",
            ),
            entry(
                "Sahyadri Chemicals",
                BuybackMethod::Tender,
                dec!(275),
                dec!(268.30),
                date(2026, 6, 2),
                "₹150 Cr",
            ),
        ])
    }

    fn load_rights_issues(&self) -> Result<Vec<RightsIssueEntry>> {
        let entry = |company: &str,
                     ratio: &str,
                     issue_price,
                     market_price,
                     open_date,
                     close_date| RightsIssueEntry {
            company: company.to_string(),
            ratio: ratio.to_string(),
            issue_price,
            market_price,
            open_date,
            close_date,
        };

        Ok(vec![
            entry(
                "Coastal Shipping Corporation",
                "1:6",
                dec!(96),
                dec!(128.45),
                date(2026, 10, 14),
                date(2026, 10, 28),
            ),
            entry(
                "Indus Textiles",
                "2:11",
                dec!(42),
                dec!(57.80),
                date(2026, 11, 2),
                date(2026, 11, 16),
            ),
            entry(
                "Rajmahal Hotels",
                "1:4",
                dec!(310),
                dec!(402.10),
                date(2026, 8, 18),
                date(2026, 9, 1),
            ),
        ])
    }

    fn load_ncd_issues(&self) -> Result<Vec<NcdIssueEntry>> {
        let entry = |company: &str,
                     coupon_rate,
                     tenure_months,
                     rating: &str,
                     open_date,
                     close_date,
                     minimum_investment| NcdIssueEntry {
            company: company.to_string(),
            coupon_rate,
            tenure_months,
            rating: rating.to_string(),
            open_date,
            close_date,
            minimum_investment,
        };

        Ok(vec![
            entry(
                "Shriram Capital Finance",
                dec!(9.40),
                60,
                "AA+ (CRISIL)",
                date(2026, 10, 12),
                date(2026, 10, 25),
                dec!(10000),
            ),
            entry(
                "Muthoot Gold Loans",
                dec!(10.25),
                36,
                "AA (ICRA)",
                date(2026, 10, 27),
                date(2026, 11, 9),
                dec!(10000),
            ),
            entry(
                "Kerala Housing Finance",
                dec!(8.85),
                24,
                "AA- (CARE)",
                date(2026, 11, 4),
                date(2026, 11, 18),
                dec!(5000),
            ),
            entry(
                "Edelweiss Retail Credit",
                dec!(10.50),
                120,
                "A+ (CRISIL)",
                date(2026, 9, 1),
                date(2026, 9, 15),
                dec!(10000),
            ),
        ])
    }
}
