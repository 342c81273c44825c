pub mod text_utils;
pub mod time_utils;

pub use text_utils::{
    format_indian_number, format_inr, join_unique, parse_first_number, parse_two_numbers,
    strip_ipo_suffix,
};
pub use time_utils::{
    format_long_date, format_short_date, parse_flexible_date, short_date_or, to_local_date,
    today_in_display_tz, DISPLAY_TZ,
};
