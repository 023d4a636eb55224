use crate::consts::{LUNAR_EPOCH, LUNAR_MAX_YEAR, LUNAR_MIN_YEAR, MAX_MONTH};
use crate::festival::CalendarType;
use crate::names::{lunar_day_name, lunar_month_name, stem_branch, zodiac};
use crate::prelude::*;
use crate::table::YearRecord;
use crate::{CalendarError, SolarDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a solar date is mapped onto the lunar calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Day-count from the lunar epoch through the year table. Limited to
    /// lunar years 1900–2100.
    #[default]
    #[display(fmt = "exact")]
    Exact,
    /// Reuse the Gregorian year, month and day as lunar values, never leap.
    /// Unbounded but only a rough stand-in for the real date.
    #[display(fmt = "approximate")]
    Approximate,
}

/// A date in the Chinese lunar calendar with its traditional names.
///
/// Names are derived from the numeric fields on construction and cannot be
/// set independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{}{}{}", "year_name", "month_name", "day_name")]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    is_leap_month: bool,
    year_name: String,
    month_name: String,
    day_name: &'static str,
    zodiac: &'static str,
    stem_branch: String,
}

impl LunarDate {
    fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self, CalendarError> {
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let day_name = lunar_day_name(day).ok_or(CalendarError::InvalidLunarDay {
            calendar: CalendarType::Lunar,
            year,
            month,
            day,
        })?;
        let stem_branch = stem_branch(year);
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
            year_name: format!("{stem_branch}年"),
            month_name: lunar_month_name(month, is_leap_month),
            day_name,
            zodiac: zodiac(year),
            stem_branch,
        })
    }

    /// Lunar year, which starts at 正月初一 rather than January 1
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1..=12. A leap month shares the number of the month it follows.
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1..=30
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether this is the intercalary (闰) month
    pub const fn is_leap_month(&self) -> bool {
        self.is_leap_month
    }

    /// Year name such as `甲辰年`
    pub fn year_name(&self) -> &str {
        &self.year_name
    }

    /// Month name such as `正月` or `闰二月`
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Day name such as `初一` or `廿五`
    pub const fn day_name(&self) -> &'static str {
        self.day_name
    }

    /// Zodiac animal of the year, e.g. `龙`
    pub const fn zodiac(&self) -> &'static str {
        self.zodiac
    }

    /// Sexagenary (干支) name of the year without `年`, e.g. `甲辰`
    pub fn stem_branch(&self) -> &str {
        &self.stem_branch
    }

    /// Converts back to the Gregorian calendar through the year table.
    ///
    /// # Errors
    /// See [`lunar_to_solar`].
    pub fn to_solar(&self) -> Result<SolarDate, CalendarError> {
        lunar_to_solar(self.year, self.month, self.day, self.is_leap_month)
    }
}

/// Converts a Gregorian date to the lunar calendar.
///
/// # Errors
/// In [`ConversionMode::Exact`], `DateOutOfRange` for dates before
/// 1900-01-31 or past the end of lunar year 2100. In
/// [`ConversionMode::Approximate`], `InvalidLunarDay` for the 31st of a month.
#[tracing::instrument(level = "trace")]
pub fn solar_to_lunar(date: SolarDate, mode: ConversionMode) -> Result<LunarDate, CalendarError> {
    match mode {
        ConversionMode::Exact => resolve_exact(date),
        ConversionMode::Approximate => {
            LunarDate::new(i32::from(date.year()), date.month(), date.day(), false)
        }
    }
}

fn resolve_exact(date: SolarDate) -> Result<LunarDate, CalendarError> {
    let out_of_range = || {
        debug!(%date, "date outside lunar table");
        CalendarError::DateOutOfRange { date }
    };

    let epoch = SolarDate::try_from(LUNAR_EPOCH)?;
    let mut offset = date - epoch;
    if offset < 0 {
        return Err(out_of_range());
    }

    let mut year = LUNAR_MIN_YEAR;
    let record = loop {
        let record = YearRecord::get(year).map_err(|_| out_of_range())?;
        let length = i32::from(record.length());
        if offset < length {
            break record;
        }
        offset -= length;
        year += 1;
    };

    let (month, is_leap, remainder) = record
        .months()
        .find_map(|(month, is_leap, length)| {
            let length = i32::from(length);
            if offset < length {
                Some((month, is_leap, offset))
            } else {
                offset -= length;
                None
            }
        })
        .ok_or_else(out_of_range)?;

    let day = u8::try_from(remainder + 1).map_err(|_| out_of_range())?;
    LunarDate::new(year, month, day, is_leap)
}

/// Converts a lunar date to the Gregorian calendar.
///
/// # Errors
/// `YearOutOfRange` outside lunar years 1900–2100, `InvalidMonth` outside
/// `1..=12`, `NoLeapMonth` when `is_leap` is set but the year's leap month
/// is not `month`, and `InvalidLunarDay` when the month is shorter than `day`.
#[tracing::instrument(level = "trace")]
pub fn lunar_to_solar(
    year: i32,
    month: u8,
    day: u8,
    is_leap: bool,
) -> Result<SolarDate, CalendarError> {
    let record = YearRecord::get(year).inspect_err(|_| debug!(year, "year outside lunar table"))?;
    if !(1..=MAX_MONTH).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    if is_leap && record.leap_month() != Some(month) {
        return Err(CalendarError::NoLeapMonth { year, month });
    }

    let mut offset = 0_i32;
    for y in LUNAR_MIN_YEAR..year {
        offset += i32::from(YearRecord::get(y)?.length());
    }

    let mut target_length = None;
    for (m, leap, length) in record.months() {
        if m == month && leap == is_leap {
            target_length = Some(length);
            break;
        }
        offset += i32::from(length);
    }
    let length = target_length.ok_or(CalendarError::NoLeapMonth { year, month })?;
    if day == 0 || day > length {
        return Err(CalendarError::InvalidLunarDay {
            calendar: CalendarType::Lunar,
            year,
            month,
            day,
        });
    }

    SolarDate::try_from(LUNAR_EPOCH)?
        .add_days(offset + i32::from(day) - 1)
        .ok_or(CalendarError::YearOutOfRange {
            year,
            min: LUNAR_MIN_YEAR,
            max: LUNAR_MAX_YEAR,
        })
}

/// Gregorian date of the first day (正月初一) of lunar year `year`.
///
/// # Errors
/// Returns `YearOutOfRange` outside lunar years 1900–2100.
pub fn lunar_new_year(year: i32) -> Result<SolarDate, CalendarError> {
    lunar_to_solar(year, 1, 1, false)
}
