use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_JDN, MAX_MONTH, MAX_YEAR, MIN_JDN,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::ops::Sub;
use std::str::FromStr;

/// A Gregorian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given Gregorian year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the upper bound without year/month context
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        if value > DAYS_IN_MONTH[1] {
            return Err(CalendarError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Gregorian (solar) calendar date.
///
/// Dates are compared chronologically. Day arithmetic goes through the
/// Julian day number, so `SolarDate - SolarDate` yields the signed number
/// of days between the two.
///
/// ```
/// use lunar_tibetan::SolarDate;
///
/// let new_year = SolarDate::new(2024, 2, 10).unwrap();
/// assert_eq!(new_year.to_string(), "2024-02-10");
/// assert_eq!(new_year.add_days(20).unwrap().to_string(), "2024-03-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct SolarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl SolarDate {
    /// Creates a validated solar date.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for impossible dates.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Returns the year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the date as a `(year, month, day)` tuple
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Julian day number of the date.
    pub fn jdn(&self) -> i32 {
        let (y, m, d) = (
            i32::from(self.year()),
            i32::from(self.month()),
            i32::from(self.day()),
        );
        (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075
    }

    /// Creates a date from a Julian day number.
    ///
    /// Returns `None` if the date falls outside years `1..=MAX_YEAR`.
    pub fn from_jdn(jdn: i32) -> Option<Self> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return None;
        }
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        Self::new(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
        )
        .ok()
    }

    /// Returns the date `days` days later (or earlier, for negative `days`).
    ///
    /// Returns `None` if the result leaves the supported year range.
    pub fn add_days(&self, days: i32) -> Option<Self> {
        Self::from_jdn(self.jdn().checked_add(days)?)
    }
}

impl Sub for SolarDate {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.jdn() - rhs.jdn()
    }
}

impl TryFrom<(u16, u8, u8)> for SolarDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        }
        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| CalendarError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| CalendarError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(CalendarError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(CalendarError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(
            Month::new(13),
            Err(CalendarError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_try_from_and_into() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);
        let value: u8 = month.into();
        assert_eq!(value, 8);
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_day_new() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(CalendarError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(Day::new(0, 2024, 1).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);
        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(32).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        for (year, leap) in [
            (1900, false),
            (2000, true),
            (2020, true),
            (2023, false),
            (2100, false),
        ] {
            assert_eq!(is_leap_year(year), leap, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_solar_date_jdn() {
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().jdn(), 2_451_545);
        assert_eq!(SolarDate::new(1900, 1, 31).unwrap().jdn(), 2_415_051);
        assert_eq!(SolarDate::new(1, 1, 1).unwrap().jdn(), 1_721_426);
        assert_eq!(SolarDate::new(9999, 12, 31).unwrap().jdn(), 5_373_484);
    }

    #[test]
    fn test_solar_date_from_jdn() {
        assert_eq!(
            SolarDate::from_jdn(2_451_545),
            Some(SolarDate::new(2000, 1, 1).unwrap())
        );
        assert_eq!(
            SolarDate::from_jdn(2_459_466),
            Some(SolarDate::new(2021, 9, 8).unwrap())
        );
        assert_eq!(SolarDate::from_jdn(1_721_425), None);
        assert_eq!(SolarDate::from_jdn(5_373_485), None);
    }

    #[test]
    fn test_solar_date_add_days() {
        let d = SolarDate::new(2024, 2, 28).unwrap();
        assert_eq!(d.add_days(1).unwrap().ymd(), (2024, 2, 29));
        assert_eq!(d.add_days(2).unwrap().ymd(), (2024, 3, 1));
        let d = SolarDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap().ymd(), (2024, 1, 1));
        assert_eq!(d.add_days(-365).unwrap().ymd(), (2022, 12, 31));
        let last = SolarDate::new(9999, 12, 31).unwrap();
        assert_eq!(last.add_days(1), None);
    }

    #[test]
    fn test_solar_date_sub() {
        let epoch = SolarDate::new(1900, 1, 31).unwrap();
        let d = SolarDate::new(1900, 3, 1).unwrap();
        assert_eq!(d - epoch, 29);
        assert_eq!(epoch - d, -29);
    }

    #[test]
    fn test_solar_date_ordering() {
        let a = SolarDate::new(2024, 1, 31).unwrap();
        let b = SolarDate::new(2024, 2, 1).unwrap();
        let c = SolarDate::new(2025, 1, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_solar_date_parse_and_display() {
        let d: SolarDate = "2026-02-26".parse().unwrap();
        assert_eq!(d.ymd(), (2026, 2, 26));
        assert_eq!(d.to_string(), "2026-02-26");
        assert_eq!(" 0900-1-5 ".parse::<SolarDate>().unwrap().to_string(), "0900-01-05");
    }

    #[test]
    fn test_solar_date_parse_errors() {
        assert!(matches!(
            "".parse::<SolarDate>(),
            Err(CalendarError::EmptyInput)
        ));
        assert!(matches!(
            "2024-02".parse::<SolarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-0X-01".parse::<SolarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<SolarDate>(),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_solar_date_serde_string_format() {
        let d = SolarDate::new(1991, 8, 15).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: SolarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
        assert!(serde_json::from_str::<SolarDate>(r#""2024-13-01""#).is_err());
    }
}
