/// Placeholder for a missing scalar value in tables
pub const MISSING_VALUE: &str = "-";

/// Placeholder for a missing cell inside pass-through rows (peers, financials...)
pub const MISSING_CELL: &str = "—";

/// Placeholder for a date the issuer has not announced yet
pub const DATE_TO_BE_ANNOUNCED: &str = "TBA";

/// Retail maximum lots assumed when the document has no lot distribution row
pub const DEFAULT_RETAIL_MAX_LOTS: u32 = 13;

/// Retail minimum lots assumed when the document has no lot distribution row
pub const DEFAULT_RETAIL_MIN_LOTS: u32 = 1;

/// Currency symbol used in display strings
pub const RUPEE: &str = "₹";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
