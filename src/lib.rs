//! Gregorian to Chinese lunar and Tibetan calendar conversion.
//!
//! Lunar dates are resolved exactly from a compiled-in table of lunar years
//! 1900–2100. Tibetan dates use a fixed one-month offset from the Gregorian
//! calendar and are an approximation. Solar terms come from a mean tropical
//! year, and the almanac annotations are simple arithmetic rules.
//!
//! ```
//! use lunar_tibetan::{ConversionMode, SolarDate, solar_to_lunar, solar_to_tibetan};
//!
//! let date: SolarDate = "2024-02-10".parse().unwrap();
//! let lunar = solar_to_lunar(date, ConversionMode::Exact).unwrap();
//! assert_eq!(lunar.to_string(), "甲辰年正月初一");
//!
//! let tibetan = solar_to_tibetan(date);
//! assert_eq!(tibetan.year_element_name(), "木龙年");
//! ```

mod almanac;
mod config;
mod consts;
mod converter;
mod festival;
mod lunar;
mod names;
mod prelude;
mod reminder;
mod solar_term;
mod table;
mod tibetan;
mod types;

pub use almanac::{DayQuality, FlyingStar, YiJi, daily_yi_ji, day_quality, flying_star};
pub use config::ConverterConfig;
pub use consts::*;
pub use converter::{CalendarDay, Converter};
pub use festival::{
    CalendarType, Festival, FestivalType, festival_by_id, festival_on, festivals, festivals_for,
};
pub use lunar::{ConversionMode, LunarDate, lunar_new_year, lunar_to_solar, solar_to_lunar};
pub use names::{day_stem_branch, stem_branch, zodiac};
pub use reminder::{Occurrence, ReminderKind, ReminderRule, TimeOfDay, default_rules};
pub use solar_term::{
    DogDays, NinePeriod, SolarTerm, dog_days, next_solar_term, nine_periods, solar_term_date,
    solar_term_on, solar_terms,
};
pub use table::{YearRecord, leap_month, month_length, year_length};
pub use tibetan::{
    TibetanDate, doubled_days, full_year_name, is_doubleday, is_missing_day, is_special_day,
    missing_days, month_days, next_special_day, rabjung, solar_to_tibetan,
    special_day_description, tibetan_to_solar,
};
pub use types::{Day, Month, SolarDate, Year, days_in_month, is_leap_year};

/// Errors produced by date validation and calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[error("Invalid day {day} for {calendar} month {year}-{month:02}")]
    InvalidLunarDay {
        calendar: CalendarType,
        year: i32,
        month: u8,
        day: u8,
    },
    #[error("Date {date} is outside the supported lunar table")]
    DateOutOfRange { date: SolarDate },
    #[error("Year {year} is outside the supported range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("Lunar year {year} has no leap month {month}")]
    NoLeapMonth { year: i32, month: u8 },
    #[error("Invalid time of day: {0} (expected HH:MM)")]
    InvalidTime(String),
}

impl CalendarError {
    /// Whether the error is a date or year outside the supported window.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::DateOutOfRange { .. } | Self::YearOutOfRange { .. }
        )
    }
}
